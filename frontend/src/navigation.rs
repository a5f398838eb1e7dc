use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

/// Where a nav link points: an anchor on the home page or another route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget<'a> {
    Section(&'a str),
    Route(&'a str),
}

impl<'a> NavTarget<'a> {
    pub fn parse(href: &'a str) -> Self {
        match href.strip_prefix('#') {
            Some(id) => NavTarget::Section(id),
            None => NavTarget::Route(href),
        }
    }
}

/// Document offset to scroll to so the section clears the fixed header.
pub fn scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    (element_top + scroll_y - config::HEADER_OFFSET_PX).max(0.0)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLLED_THRESHOLD_PX
}

pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        debug!("No section with id {}", id);
        return;
    };
    let top = element.get_bounding_client_rect().top();
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(top, scroll_y));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn scroll_later(id: String, delay_ms: u32) {
    if delay_ms == 0 {
        scroll_to_section(&id);
        return;
    }
    Timeout::new(delay_ms, move || scroll_to_section(&id)).forget();
}

/// Click handler shared by the navbar and footer links. Section links scroll
/// after `delay_ms`; from any page but home they go home first.
#[hook]
pub fn use_nav_handler(delay_ms: u32) -> Callback<&'static str> {
    let navigator = use_navigator();
    let route = use_route::<Route>();

    Callback::from(move |href: &'static str| {
        let Some(navigator) = navigator.as_ref() else { return };
        match NavTarget::parse(href) {
            NavTarget::Route(path) => match Route::recognize(path) {
                Some(target) => navigator.push(&target),
                None => debug!("Unknown route {}", path),
            },
            NavTarget::Section(id) if route == Some(Route::Home) => {
                scroll_later(id.to_string(), delay_ms);
            }
            NavTarget::Section(id) => {
                navigator.push(&Route::Home);
                scroll_later(id.to_string(), config::CROSS_ROUTE_SCROLL_DELAY_MS);
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_anchor_and_route_links() {
        assert_eq!(NavTarget::parse("#contact"), NavTarget::Section("contact"));
        assert_eq!(NavTarget::parse("/careers"), NavTarget::Route("/careers"));
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(500.0, 1000.0), 1410.0);
        assert_eq!(scroll_target(-200.0, 1000.0), 710.0);
    }

    #[test]
    fn scroll_target_never_goes_negative() {
        assert_eq!(scroll_target(40.0, 0.0), 0.0);
    }

    #[test]
    fn scrolled_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(21.0));
    }
}
