use chrono::Datelike;
use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::content::{QUICK_LINKS, STORE_HOURS};
use crate::navigation::use_nav_handler;

#[function_component(Footer)]
pub fn footer() -> Html {
    let navigate = use_nav_handler(0);
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand fade-in-up">
                    <div class="footer-logo">
                        <span class="nav-logo-tile">
                            <img src="/assets/logo.png" alt="Rite Pharmacy Logo" />
                        </span>
                        <span class="footer-logo-text">{config::PHARMACY_NAME}</span>
                    </div>
                    <p>
                        {"Your trusted community pharmacy in Bronx, NY. Providing personalized care and quality service since 2010."}
                    </p>
                </div>

                <div class="fade-in-up">
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|link| {
                            let navigate = navigate.clone();
                            let href = link.href;
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                navigate.emit(href);
                            });
                            html! {
                                <li key={link.name}>
                                    <button type="button" class="footer-link" {onclick}>{link.name}</button>
                                </li>
                            }
                        }) }
                    </ul>
                </div>

                <div class="fade-in-up">
                    <h4>{"Contact Us"}</h4>
                    <ul>
                        <li>
                            <a href={config::PHONE_TEL} class="footer-link">{"📞 "}{config::PHONE_DISPLAY}</a>
                        </li>
                        <li>
                            <a href={format!("mailto:{}", config::EMAIL)} class="footer-link">{"✉️ "}{config::EMAIL}</a>
                        </li>
                        <li>
                            <a href={config::MAPS_URL} target="_blank" rel="noopener noreferrer" class="footer-link">
                                {"📍 "}{config::ADDRESS}
                            </a>
                        </li>
                    </ul>
                </div>

                <div class="fade-in-up">
                    <h4>{"Store Hours"}</h4>
                    <ul class="footer-hours">
                        { for STORE_HOURS.iter().map(|entry| html! {
                            <li key={entry.short_day}>
                                <span>{entry.short_day}</span>
                                <span class={classes!(entry.is_closed().then(|| "closed"))}>{entry.short_hours}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>

            <div class="container footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, config::PHARMACY_NAME)}</p>
                <p>
                    {"Made with ❤️ by "}
                    <a href="https://www.staffarc.in/" target="_blank" rel="noopener noreferrer">{"StaffArc"}</a>
                </p>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 4rem 0;
                    background: var(--foreground);
                    color: var(--background);
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 3rem;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }
                .footer-logo-text {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .footer-brand p {
                    font-size: 0.875rem;
                    line-height: 1.7;
                    color: rgba(255, 255, 255, 0.7);
                }
                .site-footer h4 {
                    font-family: var(--font-display);
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                }
                .site-footer li + li {
                    margin-top: 0.75rem;
                }
                .footer-link {
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .footer-link:hover {
                    color: var(--primary);
                }
                .footer-hours li {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .footer-hours .closed {
                    color: var(--destructive);
                }
                .footer-bottom {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .footer-bottom a {
                    color: var(--primary);
                    font-weight: 600;
                }
                @media (max-width: 1024px) {
                    .footer-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                    .footer-bottom {
                        flex-direction: column;
                        align-items: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
