pub const PHARMACY_NAME: &str = "Rite Pharmacy";

/// WhatsApp destination in international dialing digits, no `+` or separators.
pub const WHATSAPP_NUMBER: &str = "17183280000";
pub const MESSAGING_BASE_URL: &str = "https://wa.me";

pub const PHONE_DISPLAY: &str = "+1 (718) 328-0000";
pub const PHONE_TEL: &str = "tel:+17183280000";
pub const EMAIL: &str = "ritecarepharmacy@yahoo.com";
pub const ADDRESS: &str = "805 Soundview Ave, Bronx, NY 10473";
pub const PLUS_CODE: &str = "R4CM+M8 Bronx, New York";
pub const MAPS_URL: &str = "https://maps.google.com/?q=805+Soundview+Ave,+Bronx,+NY+10473";
pub const MAPS_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3019.9562345678!2d-73.8625!3d40.8225!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89c2f4ce816e8f2f%3A0x123456789!2s805%20Soundview%20Ave%2C%20Bronx%2C%20NY%2010473!5e0!3m2!1sen!2sus!4v1234567890";
pub const CAREERS_SUBJECT: &str = "Career Application - Rite Pharmacy";

// Timings, milliseconds unless noted.
pub const DISPATCH_DELAY_MS: u32 = 600;
pub const RESET_DELAY_MS: u32 = 2_000;
pub const TOAST_LIFETIME_MS: u32 = 4_000;
pub const MENU_CLOSE_DELAY_MS: u32 = 220;
pub const CROSS_ROUTE_SCROLL_DELAY_MS: u32 = 350;
pub const HEADER_OFFSET_PX: f64 = 90.0;
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

pub fn whatsapp_chat_url() -> String {
    format!("{}/{}", MESSAGING_BASE_URL, WHATSAPP_NUMBER)
}

pub fn careers_mailto() -> String {
    format!("mailto:{}?subject={}", EMAIL, urlencoding::encode(CAREERS_SUBJECT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_number_is_bare_digits() {
        assert!(!WHATSAPP_NUMBER.is_empty());
        assert!(WHATSAPP_NUMBER.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(whatsapp_chat_url(), "https://wa.me/17183280000");
    }

    #[test]
    fn careers_mailto_escapes_subject() {
        assert_eq!(
            careers_mailto(),
            "mailto:ritecarepharmacy@yahoo.com?subject=Career%20Application%20-%20Rite%20Pharmacy"
        );
    }
}
