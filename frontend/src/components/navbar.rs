use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::content::NAV_LINKS;
use crate::navigation::{is_scrolled, use_nav_handler};

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let navigate = use_nav_handler(config::MENU_CLOSE_DELAY_MS);

    // Lock page scroll behind the mobile menu
    use_effect_with_deps(
        |open| {
            set_body_overflow(if *open { "hidden" } else { "" });
            || set_body_overflow("")
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go = {
        let menu_open = menu_open.clone();
        move |href: &'static str| {
            let menu_open = menu_open.clone();
            let navigate = navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                navigate.emit(href);
            })
        }
    };

    html! {
        <header class={classes!("top-nav", is_scrolled(scroll_y).then(|| "scrolled"))}>
            <nav class="nav-content container">
                <button type="button" class="nav-logo" onclick={go("#home")}>
                    <span class="nav-logo-tile">
                        <img src="/assets/logo.png" alt="Rite Pharmacy Logo" />
                    </span>
                    <span class="nav-logo-text">{config::PHARMACY_NAME}</span>
                </button>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <button key={link.name} type="button" class="nav-link" onclick={go(link.href)}>
                            {link.name}
                        </button>
                    }) }
                </div>

                <button type="button" class="nav-cta" onclick={go("#contact")}>
                    <span class="nav-cta-icon">{"📞"}</span>
                    {"Contact Us"}
                </button>

                <button
                    type="button"
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <button key={link.name} type="button" class="mobile-link" onclick={go(link.href)}>
                            {link.name}
                        </button>
                    }) }
                    <div class="mobile-cta-wrap">
                        <button type="button" class="nav-cta mobile-cta" onclick={go("#contact")}>
                            <span class="nav-cta-icon">{"📞"}</span>
                            {"Contact Us"}
                        </button>
                    </div>
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: var(--primary);
                    transition: all 0.3s ease;
                    animation: navSlideDown 0.5s ease-out;
                }
                .top-nav.scrolled {
                    background: rgba(13, 148, 136, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: var(--shadow-soft);
                }
                @keyframes navSlideDown {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 80px;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .nav-logo-tile {
                    width: 44px;
                    height: 44px;
                    border-radius: 12px;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.15);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    transition: transform 0.3s ease;
                }
                .nav-logo-tile:hover {
                    transform: rotate(3deg) scale(1.03);
                }
                .nav-logo-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .nav-logo-text {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #fff;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.8);
                    font-weight: 500;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    border: none;
                    background: #fff;
                    color: var(--primary);
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .nav-cta:hover {
                    transform: scale(1.05);
                    box-shadow: var(--shadow-soft-lg);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #fff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                .mobile-menu {
                    display: none;
                    padding: 1rem;
                    background: var(--primary);
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    animation: menuOpen 0.3s ease-out;
                }
                @keyframes menuOpen {
                    from { opacity: 0; max-height: 0; }
                    to { opacity: 1; max-height: 600px; }
                }
                .mobile-link {
                    display: block;
                    width: 100%;
                    text-align: left;
                    padding: 0.75rem 1rem;
                    background: none;
                    border: none;
                    border-radius: 12px;
                    color: rgba(255, 255, 255, 0.9);
                    font-weight: 500;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .mobile-link:hover {
                    background: rgba(255, 255, 255, 0.1);
                }
                .mobile-cta-wrap {
                    padding: 1rem 1rem 0;
                }
                .mobile-cta {
                    width: 100%;
                    justify-content: center;
                }
                @media (max-width: 1024px) {
                    .nav-links, .nav-content > .nav-cta {
                        display: none;
                    }
                    .burger-menu, .mobile-menu {
                        display: flex;
                    }
                    .mobile-menu {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </header>
    }
}
