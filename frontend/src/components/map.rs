use yew::prelude::*;

use crate::config;

#[function_component(Map)]
pub fn map() -> Html {
    html! {
        <section class="map-section">
            <div class="container">
                <div class="map-frame fade-in-up">
                    <iframe
                        src={config::MAPS_EMBED_URL}
                        width="100%"
                        height="450"
                        style="border: 0;"
                        allowfullscreen=true
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        title={format!("{} Location", config::PHARMACY_NAME)}
                    />
                </div>
            </div>
            <style>
                {r#"
                .map-section {
                    padding: 3rem 0;
                    background: var(--background);
                }
                .map-frame {
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: var(--shadow-soft);
                }
                .map-frame iframe {
                    display: block;
                    width: 100%;
                }
                "#}
            </style>
        </section>
    }
}
