use yew::prelude::*;

use crate::config;
use crate::content::ABOUT_STATS;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section about-section">
            <div class="container about-grid">
                <div class="about-copy fade-in-left">
                    <span class="section-label">{"About Us"}</span>
                    <h2 class="section-title">
                        {"Your Neighborhood "}
                        <span class="text-gradient">{"Health Partner"}</span>
                    </h2>
                    <p>
                        {format!("{} is a community-based pharmacy committed to providing fast service, fair pricing, and expert consultation. Located in the heart of Bronx, we've been serving our neighbors with dedication and care for over a decade.", config::PHARMACY_NAME)}
                    </p>
                    <p>
                        {"Our team of experienced pharmacists takes the time to understand your unique health needs. We believe in building lasting relationships with our customers, ensuring you receive personalized attention every time you visit."}
                    </p>

                    <div class="about-stats">
                        { for ABOUT_STATS.iter().enumerate().map(|(index, stat)| html! {
                            <div key={index} class="about-stat fade-in-up" style={format!("animation-delay: {:.1}s", index as f32 * 0.1)}>
                                <div class="icon-container">{stat.icon}</div>
                                <p>{stat.label}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="about-visual fade-in-right">
                    <div class="about-image">
                        <img src="/assets/pharmacy-about.jpg" alt="Rite Pharmacy store interior" />
                    </div>
                    <div class="about-deco about-deco-bottom"></div>
                    <div class="about-deco about-deco-top"></div>
                </div>
            </div>

            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .about-copy > * + * {
                    margin-top: 1.5rem;
                }
                .about-copy > p {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: var(--muted-foreground);
                }
                .about-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    padding-top: 1.5rem;
                }
                .about-stat {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .about-stat p {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--foreground);
                }
                .about-visual {
                    position: relative;
                }
                .about-image {
                    position: relative;
                    z-index: 1;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: var(--shadow-soft-lg);
                }
                .about-image img {
                    width: 100%;
                    aspect-ratio: 4 / 3;
                    object-fit: cover;
                }
                .about-deco {
                    position: absolute;
                    z-index: 0;
                    border-radius: 1rem;
                }
                .about-deco-bottom {
                    bottom: -1rem;
                    right: -1rem;
                    width: 6rem;
                    height: 6rem;
                    background: rgba(13, 148, 136, 0.1);
                }
                .about-deco-top {
                    top: -1rem;
                    left: -1rem;
                    width: 4rem;
                    height: 4rem;
                    background: rgba(13, 148, 136, 0.05);
                }
                @media (max-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
