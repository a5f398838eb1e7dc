use yew::prelude::*;

use crate::config;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="home" class="hero-section hero-bg">
            <div class="hero-glow hero-glow-top"></div>
            <div class="hero-glow hero-glow-bottom"></div>

            <div class="container hero-grid">
                <div class="hero-copy fade-in-left">
                    <div class="hero-badge">
                        <span>{"❤️"}</span>
                        <span>{"Your Trusted Community Pharmacy"}</span>
                    </div>

                    <h1>
                        {"Your Health, "}
                        <span class="text-gradient">{"Our Priority"}</span>
                    </h1>

                    <p class="hero-lead">
                        {"Trusted community pharmacy serving Bronx with personalized care, prescriptions, and free delivery. Experience healthcare that puts you first."}
                    </p>

                    <div class="hero-actions">
                        <a href={config::PHONE_TEL} class="btn-hero-primary">
                            {"📞 Call Now"}
                        </a>
                        <a href={config::MAPS_URL} target="_blank" rel="noopener noreferrer" class="btn-hero-secondary">
                            {"📍 Get Directions"}
                        </a>
                    </div>

                    <div class="hero-trust">
                        <div class="hero-trust-item">
                            <div class="icon-container small">{"🚚"}</div>
                            <span>{"Free Delivery"}</span>
                        </div>
                        <div class="hero-trust-item">
                            <div class="icon-container small">{"🛡️"}</div>
                            <span>{"Fast Service"}</span>
                        </div>
                    </div>
                </div>

                <div class="hero-visual fade-in-right">
                    <div class="hero-image">
                        <img src="/assets/pharmacy-hero.jpg" alt="Rite Pharmacy interior" />
                    </div>

                    <div class="hero-card hero-card-bottom">
                        <div class="hero-card-icon green">{"🚚"}</div>
                        <div>
                            <p class="hero-card-title">{"Free Delivery"}</p>
                            <p class="hero-card-sub">{"Same day service"}</p>
                        </div>
                    </div>
                    <div class="hero-card hero-card-top">
                        <div class="hero-card-icon blue">{"🛡️"}</div>
                        <div>
                            <p class="hero-card-title">{"100% Safe"}</p>
                            <p class="hero-card-sub">{"Certified pharmacy"}</p>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding-top: 80px;
                    overflow: hidden;
                }
                .hero-glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    pointer-events: none;
                }
                .hero-glow-top {
                    top: 80px;
                    right: 0;
                    width: 384px;
                    height: 384px;
                    background: rgba(13, 148, 136, 0.05);
                }
                .hero-glow-bottom {
                    bottom: 80px;
                    left: 0;
                    width: 320px;
                    height: 320px;
                    background: rgba(13, 148, 136, 0.08);
                }
                .hero-grid {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero-copy > * + * {
                    margin-top: 2rem;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: var(--accent);
                    border: 1px solid rgba(13, 148, 136, 0.2);
                    color: var(--primary);
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .hero-copy h1 {
                    font-family: var(--font-display);
                    font-size: 3.75rem;
                    line-height: 1.1;
                    color: var(--foreground);
                }
                .hero-lead {
                    font-size: 1.25rem;
                    color: var(--muted-foreground);
                    max-width: 36rem;
                    line-height: 1.7;
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-trust {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .hero-trust-item {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: var(--muted-foreground);
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .hero-visual {
                    position: relative;
                }
                .hero-image {
                    aspect-ratio: 1 / 1;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: var(--shadow-soft-lg);
                }
                .hero-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-card {
                    position: absolute;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 1rem;
                    border-radius: 1rem;
                    background: var(--card);
                    box-shadow: var(--shadow-soft-lg);
                    opacity: 0;
                    animation: cardRise 0.6s ease-out forwards;
                }
                .hero-card-bottom {
                    bottom: -1.5rem;
                    left: -1.5rem;
                    animation-delay: 0.6s;
                }
                .hero-card-top {
                    top: -1rem;
                    right: -1rem;
                    animation-delay: 0.8s;
                }
                @keyframes cardRise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-card-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                }
                .hero-card-icon.green { background: #dcfce7; }
                .hero-card-icon.blue { background: #dbeafe; }
                .hero-card-title {
                    font-weight: 600;
                    color: var(--foreground);
                }
                .hero-card-sub {
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }
                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero-copy h1 {
                        font-size: 2.5rem;
                    }
                    .hero-image {
                        aspect-ratio: 4 / 3;
                    }
                    .hero-card {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
