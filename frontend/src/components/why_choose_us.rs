use yew::prelude::*;

use crate::content::{BENEFITS, RESOURCES};

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section id="why-choose-us" class="section section-tinted">
            <div class="container why-grid">
                <div class="why-copy fade-in-left">
                    <div>
                        <span class="section-label">{"Why Choose Us"}</span>
                        <h2 class="section-title">
                            {"Trusted by "}
                            <span class="text-gradient">{"Our Community"}</span>
                        </h2>
                        <p class="section-lead left">
                            {"We go above and beyond to ensure you receive the best pharmacy experience possible."}
                        </p>
                    </div>

                    <div class="why-benefits">
                        { for BENEFITS.iter().enumerate().map(|(index, benefit)| html! {
                            <div key={index} class="check-item fade-in-left" style={format!("animation-delay: {:.1}s", index as f32 * 0.1)}>
                                <span class="check-dot">{"✓"}</span>
                                <span>{*benefit}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="card resources-card fade-in-right">
                    <h3>{"Quick Resources"}</h3>
                    <div class="resources-list">
                        { for RESOURCES.iter().map(|resource| html! {
                            <a key={resource.title} href={resource.link} target="_blank" rel="noopener noreferrer" class="resource-card">
                                <div class="icon-container">{resource.icon}</div>
                                <span class="resource-title">{resource.title}</span>
                                <span class="resource-arrow">{"→"}</span>
                            </a>
                        }) }
                    </div>
                    <div class="resources-help">
                        <strong>{"Need help?"}</strong>
                        {" Our pharmacists are available to answer your questions during store hours."}
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .why-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: start;
                }
                .why-copy > * + * {
                    margin-top: 2rem;
                }
                .why-benefits > * + * {
                    margin-top: 1rem;
                }
                .check-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 500;
                    color: var(--foreground);
                }
                .check-dot {
                    width: 24px;
                    height: 24px;
                    flex-shrink: 0;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(13, 148, 136, 0.2);
                    color: var(--primary);
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .resources-card h3 {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    margin-bottom: 1.5rem;
                }
                .resources-list > * + * {
                    margin-top: 1rem;
                }
                .resource-card {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .resource-card:hover {
                    border-color: var(--primary);
                    box-shadow: var(--shadow-soft);
                }
                .resource-card:hover .icon-container {
                    background: var(--primary);
                    color: #fff;
                }
                .resource-title {
                    flex: 1;
                    font-weight: 500;
                    color: var(--foreground);
                }
                .resource-arrow {
                    color: var(--muted-foreground);
                    transition: all 0.3s ease;
                }
                .resource-card:hover .resource-arrow {
                    color: var(--primary);
                    transform: translateX(4px);
                }
                .resources-help {
                    margin-top: 2rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: rgba(204, 251, 241, 0.5);
                    border: 1px solid rgba(13, 148, 136, 0.1);
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }
                .resources-help strong {
                    color: var(--foreground);
                }
                @media (max-width: 1024px) {
                    .why-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
