use yew::prelude::*;

use crate::config;
use crate::content::{CORE_VALUES, PERKS};

#[function_component(Careers)]
pub fn careers() -> Html {
    html! {
        <section id="careers" class="section careers-section">
            <div class="careers-glow careers-glow-top"></div>
            <div class="careers-glow careers-glow-bottom"></div>

            <div class="container careers-inner">
                <div class="careers-intro fade-in-up">
                    <div class="careers-badge">{"💼"}</div>
                    <span class="section-label">{"Careers"}</span>
                    <h2 class="section-title">
                        {"Join Our "}
                        <span class="text-gradient">{"Growing Team"}</span>
                    </h2>
                    <p class="section-lead">
                        {"We're always looking for talented, compassionate individuals who share our commitment to excellent patient care. If you’re passionate about healthcare and want to make an impact in Bronx, we’d love to hear from you."}
                    </p>

                    <a href={config::careers_mailto()} class="careers-cta">
                        {"✉️ Email Resume"}
                        <span class="careers-cta-arrow">{"→"}</span>
                    </a>
                    <p class="careers-note">
                        {"Send your resume to "}
                        <a href={format!("mailto:{}", config::EMAIL)}>{config::EMAIL}</a>
                    </p>
                </div>

                <div class="careers-block">
                    <h3 class="careers-heading">{"Benefits & Perks"}</h3>
                    <div class="perks-grid">
                        { for PERKS.iter().map(|perk| html! {
                            <div key={perk.label} class="perk-card">
                                <div class="perk-icon">{perk.icon}</div>
                                <p>{perk.label}</p>
                            </div>
                        }) }
                    </div>
                    <p class="careers-footnote">{"*Benefits may vary by role and experience."}</p>
                </div>

                <div class="careers-block">
                    <h3 class="careers-heading">{"Our Core Values"}</h3>
                    <div class="values-grid">
                        { for CORE_VALUES.iter().map(|value| html! {
                            <div key={*value} class="value-card">{*value}</div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .careers-section {
                    position: relative;
                    overflow: hidden;
                }
                .careers-glow {
                    position: absolute;
                    width: 420px;
                    height: 420px;
                    border-radius: 50%;
                    background: rgba(13, 148, 136, 0.1);
                    filter: blur(64px);
                    pointer-events: none;
                }
                .careers-glow-top { top: -9rem; right: -9rem; }
                .careers-glow-bottom { bottom: -9rem; left: -9rem; }
                .careers-inner {
                    position: relative;
                    z-index: 10;
                }
                .careers-intro {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .careers-badge {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 64px;
                    height: 64px;
                    margin-bottom: 1.5rem;
                    border-radius: 1rem;
                    background: var(--accent);
                    box-shadow: var(--shadow-soft);
                    font-size: 2rem;
                }
                .careers-intro .section-label {
                    display: block;
                    margin-bottom: 0.75rem;
                }
                .careers-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 2.5rem;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .careers-cta:hover {
                    transform: scale(1.03);
                    box-shadow: var(--shadow-soft-lg);
                }
                .careers-cta:hover .careers-cta-arrow {
                    transform: translateX(4px);
                }
                .careers-cta-arrow {
                    transition: transform 0.3s ease;
                }
                .careers-note {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }
                .careers-note a {
                    color: var(--primary);
                    font-weight: 600;
                }
                .careers-block {
                    margin-top: 5rem;
                }
                .careers-heading {
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    text-align: center;
                    color: var(--foreground);
                }
                .perks-grid {
                    display: grid;
                    grid-template-columns: repeat(6, 1fr);
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }
                .perk-card {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: var(--card);
                    box-shadow: var(--shadow-soft);
                    text-align: center;
                    transition: all 0.3s ease;
                }
                .perk-card:hover {
                    transform: translateY(-8px);
                    box-shadow: var(--shadow-soft-lg);
                }
                .perk-icon {
                    width: 56px;
                    height: 56px;
                    margin: 0 auto;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(13, 148, 136, 0.1);
                    font-size: 1.75rem;
                    transition: transform 0.3s ease;
                }
                .perk-card:hover .perk-icon {
                    transform: scale(1.1);
                }
                .perk-card p {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: var(--foreground);
                }
                .careers-footnote {
                    margin-top: 2rem;
                    text-align: center;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.25rem;
                    margin-top: 2.5rem;
                }
                .value-card {
                    padding: 1.25rem 0;
                    border-radius: 1rem;
                    border: 1px solid rgba(13, 148, 136, 0.2);
                    background: rgba(13, 148, 136, 0.1);
                    color: var(--primary);
                    font-family: var(--font-display);
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-align: center;
                    box-shadow: var(--shadow-soft);
                    transition: all 0.3s ease;
                }
                .value-card:hover {
                    background: rgba(13, 148, 136, 0.15);
                    transform: translateY(-6px) scale(1.02);
                }
                @media (max-width: 1024px) {
                    .perks-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .values-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                @media (max-width: 640px) {
                    .perks-grid, .values-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
