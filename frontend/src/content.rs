// Static copy for the site sections.

pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "Services", href: "#services" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Why Choose Us", href: "#why-choose-us" },
    NavLink { name: "Careers", href: "/careers" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const QUICK_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "Services", href: "#services" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Contact", href: "#contact" },
    NavLink { name: "Careers", href: "/careers" },
];

#[derive(PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub full_description: &'static str,
    pub included: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🚚",
        title: "Free Delivery",
        description: "Get free, same-day prescription delivery. We service all areas in the Bronx and surrounding neighborhoods.",
        image: "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?w=800&h=300&fit=crop",
        full_description: "Enjoy the convenience of free prescription delivery right to your doorstep. Our professional delivery team ensures your medications arrive safely and on time, every time. We understand that getting to the pharmacy isn't always easy, which is why we bring your prescriptions directly to you.",
        included: &[
            "Same-day delivery available",
            "Free for all prescriptions",
            "Serving Bronx and surrounding areas",
            "Contactless delivery options",
        ],
    },
    Service {
        icon: "🔄",
        title: "Prescription Transfers",
        description: "Hassle-free transfers from any pharmacy. We handle all the paperwork so you don't have to.",
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=800&h=300&fit=crop",
        full_description: "Switching pharmacies has never been easier. Our team handles the entire transfer process, contacting your previous pharmacy and managing all the necessary paperwork. You simply provide us with your prescription details, and we take care of the rest.",
        included: &[
            "We contact your previous pharmacy",
            "Complete paperwork handling",
            "Fast processing time",
            "No hassle for you",
        ],
    },
    Service {
        icon: "📦",
        title: "Blister Packaging",
        description: "Custom multi-dose pill packs organized by day and time. Perfect for managing multiple medications.",
        image: "https://images.unsplash.com/photo-1587854692152-cbe660dbde88?w=800&h=300&fit=crop",
        full_description: "Our blister packaging service organizes your medications into convenient, easy-to-use packs sorted by day and time. This system helps ensure you never miss a dose and makes medication management simple for those taking multiple prescriptions.",
        included: &[
            "Medications sorted by day and time",
            "Easy-to-open packaging",
            "Reduces medication errors",
            "Perfect for caregivers",
        ],
    },
    Service {
        icon: "🩺",
        title: "Health Consultations",
        description: "Free medication consultations and blood pressure checks by our licensed pharmacists.",
        image: "https://images.unsplash.com/photo-1631815588090-d4bfec5b1ccb?w=800&h=300&fit=crop",
        full_description: "Our licensed pharmacists are available for free health consultations to answer your questions about medications, potential interactions, and general health concerns. We also offer complimentary blood pressure monitoring to help you stay on top of your health.",
        included: &[
            "Free blood pressure checks",
            "Medication reviews",
            "Drug interaction consultations",
            "Personalized health advice",
        ],
    },
    Service {
        icon: "❤️",
        title: "Diabetes Care",
        description: "Glucose monitoring, diabetes counseling, and medication management support.",
        image: "https://images.unsplash.com/photo-1579684385127-1ef15d508118?w=800&h=300&fit=crop",
        full_description: "We provide comprehensive diabetes care services including glucose monitoring, personalized counseling, and medication management. Our pharmacists work with you to help manage your diabetes effectively and improve your quality of life.",
        included: &[
            "Glucose monitoring services",
            "Diabetes education",
            "Medication management",
            "Lifestyle counseling",
        ],
    },
];

/// Services are laid out three on the first row, the rest centered below.
pub const SERVICES_FIRST_ROW: usize = 3;

pub struct IconLabel {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: &[IconLabel] = &[
    IconLabel { icon: "👥", label: "Happy Customers" },
    IconLabel { icon: "🏅", label: "Experienced" },
    IconLabel { icon: "🕒", label: "Our Support Available" },
    IconLabel { icon: "❤️", label: "Care Focused" },
];

pub const BENEFITS: &[&str] = &[
    "Fast, friendly & reliable service",
    "Free home delivery",
    "Accept most insurances",
    "Expert medication counseling",
    "Competitive prices & savings",
    "Community focused pharmacy",
];

pub struct Resource {
    pub icon: &'static str,
    pub title: &'static str,
    pub link: &'static str,
}

pub const RESOURCES: &[Resource] = &[
    Resource { icon: "🔍", title: "Search Drugs", link: "https://www.epocrates.com/online/drugs" },
    Resource { icon: "📄", title: "Search Diseases", link: "https://www.epocrates.com/online/diseases" },
    Resource { icon: "💊", title: "Pill Identification", link: "https://www.drugs.com/imprints.php" },
];

pub const PERKS: &[IconLabel] = &[
    IconLabel { icon: "💵", label: "Competitive Salary" },
    IconLabel { icon: "🩺", label: "Health Benefits" },
    IconLabel { icon: "📅", label: "Paid Time Off" },
    IconLabel { icon: "📈", label: "Professional Growth" },
    IconLabel { icon: "🕒", label: "Flexible Scheduling" },
    IconLabel { icon: "🏷️", label: "Employee Discounts" },
];

pub const CORE_VALUES: &[&str] = &[
    "Community First",
    "Excellence in Care",
    "Team Collaboration",
    "Continuous Learning",
];

pub struct StoreHours {
    pub day: &'static str,
    pub short_day: &'static str,
    pub hours: &'static str,
    pub short_hours: &'static str,
}

impl StoreHours {
    pub fn is_closed(&self) -> bool {
        self.hours == "Closed"
    }
}

pub const STORE_HOURS: &[StoreHours] = &[
    StoreHours { day: "Monday – Friday", short_day: "Mon - Fri", hours: "9:00 AM – 7:00 PM", short_hours: "9am - 7pm" },
    StoreHours { day: "Saturday", short_day: "Saturday", hours: "10:00 AM – 4:00 PM", short_hours: "10am - 4pm" },
    StoreHours { day: "Sunday", short_day: "Sunday", hours: "Closed", short_hours: "Closed" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NavTarget;

    #[test]
    fn every_service_has_modal_details() {
        assert_eq!(SERVICES.len(), 5);
        for service in SERVICES {
            assert!(!service.full_description.is_empty(), "{}", service.title);
            assert_eq!(service.included.len(), 4, "{}", service.title);
        }
    }

    #[test]
    fn only_sunday_is_closed() {
        let closed: Vec<_> = STORE_HOURS.iter().filter(|h| h.is_closed()).map(|h| h.day).collect();
        assert_eq!(closed, vec!["Sunday"]);
    }

    #[test]
    fn careers_is_the_only_route_link() {
        for links in [NAV_LINKS, QUICK_LINKS] {
            let routes: Vec<_> = links
                .iter()
                .filter(|link| matches!(NavTarget::parse(link.href), NavTarget::Route(_)))
                .map(|link| link.href)
                .collect();
            assert_eq!(routes, vec!["/careers"]);
        }
    }
}
