use crate::config;
use crate::contact::validation::ValidSubmission;

/// Pre-filled chat message and the deep link that opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    text: String,
    uri: String,
}

impl OutboundMessage {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

pub fn compose(valid: &ValidSubmission, destination: &str) -> OutboundMessage {
    let submission = valid.submission();
    let text = format!(
        "Hello {pharmacy} 👋\n\
         \n\
         I would like to contact you.\n\
         \n\
         🧑 Name: {name}\n\
         📧 Email: {email}\n\
         💬 Message: {message}\n\
         \n\
         Thank you.",
        pharmacy = config::PHARMACY_NAME,
        name = submission.name,
        email = submission.email,
        message = submission.message,
    );
    let uri = deep_link(config::MESSAGING_BASE_URL, destination, &text);
    OutboundMessage { text, uri }
}

/// `<base>/<destination>?text=<text>`, with `text` percent-encoded as a URI
/// component.
pub fn deep_link(base: &str, destination: &str, text: &str) -> String {
    format!(
        "{}/{}?text={}",
        base.trim_end_matches('/'),
        destination,
        urlencoding::encode(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::ContactSubmission;

    fn valid(name: &str, email: &str, message: &str) -> ValidSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
        .validated()
        .expect("fixture must validate")
    }

    fn text_param(uri: &str) -> String {
        let (_, encoded) = uri.split_once("?text=").expect("uri has a text parameter");
        urlencoding::decode(encoded).expect("valid utf-8").into_owned()
    }

    #[test]
    fn composes_prescription_request() {
        let input = valid("Jane Doe", "jane@example.com", "I need help with my prescription");
        let outbound = compose(&input, config::WHATSAPP_NUMBER);

        assert!(outbound.uri().starts_with("https://wa.me/17183280000?text="));
        assert!(outbound.text().contains("Jane Doe"));
        assert!(outbound.text().contains("jane@example.com"));
        assert!(outbound.text().contains("I need help with my prescription"));
    }

    #[test]
    fn template_orders_name_email_message() {
        let outbound = compose(&valid("Jane Doe", "jane@example.com", "Refill for my inhaler"), "15550001111");
        assert_eq!(
            outbound.text(),
            "Hello Rite Pharmacy 👋\n\nI would like to contact you.\n\n🧑 Name: Jane Doe\n📧 Email: jane@example.com\n💬 Message: Refill for my inhaler\n\nThank you."
        );
    }

    #[test]
    fn compose_is_idempotent() {
        let input = valid("Jane Doe", "jane@example.com", "Do you deliver on Sundays?");
        assert_eq!(compose(&input, "17183280000"), compose(&input, "17183280000"));
    }

    #[test]
    fn text_parameter_round_trips() {
        let input = valid("José & Ana", "jose+ana@example.com", "Is 50% off?\nAlso: #refill = yes/no");
        let outbound = compose(&input, "17183280000");
        assert_eq!(text_param(outbound.uri()), outbound.text());
    }

    #[test]
    fn text_parameter_escapes_reserved_characters() {
        let input = valid("Jane Doe", "jane@example.com", "a b&c=d?e#f/g\nnext line");
        let outbound = compose(&input, "17183280000");
        let (_, encoded) = outbound.uri().split_once("?text=").unwrap();
        for ch in [' ', '\n', '&', '=', '?', '#', '/', '@'] {
            assert!(!encoded.contains(ch), "{:?} left unescaped", ch);
        }
    }

    #[test]
    fn deep_link_targets_destination() {
        assert_eq!(deep_link("https://wa.me/", "12025550123", "hi there"), "https://wa.me/12025550123?text=hi%20there");
    }
}
