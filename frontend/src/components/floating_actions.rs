use yew::prelude::*;

use crate::config;

#[function_component(FloatingActions)]
pub fn floating_actions() -> Html {
    html! {
        <>
            <a
                href={config::whatsapp_chat_url()}
                target="_blank"
                rel="noopener noreferrer"
                class="floating-action floating-whatsapp"
                aria-label="Chat on WhatsApp"
            >
                <span class="floating-icon">{"💬"}</span>
                <span class="floating-tooltip tooltip-left">{"Chat on WhatsApp"}</span>
            </a>

            <a
                href={config::PHONE_TEL}
                class="floating-action floating-call"
                aria-label="Call us"
            >
                <span class="floating-icon">{"📞"}</span>
                <span class="floating-tooltip tooltip-right">{"Call Now"}</span>
            </a>

            <style>
                {r#"
                .floating-action {
                    position: fixed;
                    bottom: 1.5rem;
                    z-index: 40;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-decoration: none;
                    box-shadow: var(--shadow-soft-lg);
                    transform: scale(0);
                    animation: popIn 0.5s cubic-bezier(0.3, 1.6, 0.5, 1) forwards;
                }
                .floating-whatsapp {
                    right: 1.5rem;
                    background: #25D366;
                    color: #fff;
                    animation-delay: 1s;
                }
                .floating-call {
                    left: 1.5rem;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    animation-delay: 1.2s;
                }
                @keyframes popIn {
                    from { transform: scale(0); }
                    to { transform: scale(1); }
                }
                .floating-icon {
                    font-size: 1.5rem;
                }
                .floating-tooltip {
                    position: absolute;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    background: var(--foreground);
                    color: var(--background);
                    font-size: 0.875rem;
                    font-weight: 500;
                    white-space: nowrap;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }
                .tooltip-left { right: 4rem; }
                .tooltip-right { left: 4rem; }
                .floating-action:hover .floating-tooltip {
                    opacity: 1;
                }
                "#}
            </style>
        </>
    }
}
