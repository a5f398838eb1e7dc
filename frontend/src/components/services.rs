use yew::prelude::*;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::config;
use crate::content::{Service, SERVICES, SERVICES_FIRST_ROW};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static Service,
    on_open: Callback<()>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    let open = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(()))
    };

    html! {
        <div class="service-card">
            <div class="service-card-shine"></div>
            <div class="icon-container service-icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <button type="button" class="service-cta" onclick={open}>
                <span class="service-cta-label">{"Click Here"}</span>
                <span class="service-cta-arrow">{"→"}</span>
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceModalProps {
    service: &'static Service,
    on_close: Callback<()>,
}

#[function_component(ServiceModal)]
fn service_modal(props: &ServiceModalProps) -> Html {
    // Escape closes the dialog
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                });
                let window = web_sys::window();
                if let Some(window) = window.as_ref() {
                    if let Err(e) = window.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
                        warn!("Failed to listen for Escape: {:?}", e);
                    }
                }
                move || {
                    if let Some(window) = window {
                        if let Err(e) = window.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
                            warn!("Failed to remove Escape listener: {:?}", e);
                        }
                    }
                }
            },
            (),
        );
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let service = props.service;

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal" role="dialog" aria-modal="true" aria-label={service.title} onclick={stop}>
                <div class="modal-header">
                    <img src={service.image} alt={service.title} />
                    <button type="button" class="modal-back" onclick={close} aria-label="Back">
                        {"←"}
                    </button>
                    <div class="modal-header-fade"></div>
                    <div class="modal-title">
                        <div class="icon-container">{service.icon}</div>
                        <h2>{service.title}</h2>
                    </div>
                </div>

                <div class="modal-body">
                    <p class="modal-description">{service.full_description}</p>
                    <div class="modal-grid">
                        <div class="modal-panel">
                            <div class="modal-panel-heading">
                                <span class="check">{"✓"}</span>
                                <h4>{"What's Included"}</h4>
                            </div>
                            <ul>
                                { for service.included.iter().enumerate().map(|(idx, item)| html! {
                                    <li key={idx} style={format!("animation-delay: {:.2}s", 0.15 + idx as f32 * 0.06)}>
                                        <span class="check">{"✓"}</span>
                                        {*item}
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <div class="modal-panel">
                            <div class="modal-contact-row">
                                <span>{"📍"}</span>
                                <span>{config::ADDRESS}</span>
                            </div>
                            <div class="modal-contact-row">
                                <span>{"📞"}</span>
                                <a href={config::PHONE_TEL}>{config::PHONE_DISPLAY}</a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let selected = use_state(|| None::<usize>);

    let card = |index: usize, service: &'static Service| {
        let selected = selected.clone();
        html! {
            <ServiceCard
                key={index}
                service={service}
                on_open={Callback::from(move |_: ()| selected.set(Some(index)))}
            />
        }
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    html! {
        <section id="services" class="section section-tinted services-section">
            <div class="container">
                <div class="section-header fade-in-up">
                    <span class="section-label">{"Services We Offer"}</span>
                    <h2 class="section-title">
                        {"Customized Care, "}
                        <span class="text-gradient">{"Tailored Solutions"}</span>
                    </h2>
                    <p class="section-lead">
                        {"We provide comprehensive pharmacy services designed to meet your unique healthcare needs with care and expertise."}
                    </p>
                </div>

                <div class="services-row services-row-first">
                    { for SERVICES.iter().enumerate().take(SERVICES_FIRST_ROW).map(|(i, s)| card(i, s)) }
                </div>
                <div class="services-row services-row-second">
                    { for SERVICES.iter().enumerate().skip(SERVICES_FIRST_ROW).map(|(i, s)| card(i, s)) }
                </div>
            </div>

            {
                match (*selected).and_then(|index| SERVICES.get(index)) {
                    Some(service) => html! { <ServiceModal service={service} on_close={on_close} /> },
                    None => html! {},
                }
            }

            <style>
                {r#"
                .services-section {
                    overflow: hidden;
                }
                .services-row {
                    display: grid;
                    gap: 1.5rem;
                }
                .services-row + .services-row {
                    margin-top: 1.5rem;
                }
                .services-row-first {
                    grid-template-columns: repeat(3, 1fr);
                }
                .services-row-second {
                    grid-template-columns: repeat(2, 1fr);
                    max-width: 42rem;
                    margin-left: auto;
                    margin-right: auto;
                }
                .service-card {
                    position: relative;
                    overflow: hidden;
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                    background: var(--card);
                    border: 1px solid var(--border);
                    box-shadow: var(--shadow-soft);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-8px);
                    box-shadow: var(--shadow-soft-lg);
                }
                .service-card-shine {
                    position: absolute;
                    top: -6rem;
                    right: -6rem;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 50%;
                    background: rgba(13, 148, 136, 0.1);
                    filter: blur(64px);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                    pointer-events: none;
                }
                .service-card:hover .service-card-shine {
                    opacity: 1;
                }
                .service-icon {
                    margin-bottom: 1rem;
                    transition: transform 0.3s ease;
                }
                .service-card:hover .service-icon {
                    transform: rotate(8deg) scale(1.12);
                }
                .service-card h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: var(--foreground);
                    margin-bottom: 0.5rem;
                }
                .service-card p {
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .service-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    padding: 0;
                    color: var(--primary);
                    font-weight: 600;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .service-cta-label {
                    border-bottom: 2px solid transparent;
                    transition: border-color 0.3s ease;
                }
                .service-cta:hover .service-cta-label {
                    border-color: var(--primary);
                }
                .service-cta:hover .service-cta-arrow {
                    transform: translateX(4px);
                }
                .service-cta-arrow {
                    transition: transform 0.3s ease;
                }
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.8);
                    animation: fadeIn 0.2s ease-out;
                }
                .modal {
                    width: 100%;
                    max-width: 42rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    border-radius: 1rem;
                    background: var(--card);
                    animation: modalIn 0.35s cubic-bezier(0.2, 0.9, 0.3, 1.1);
                }
                @keyframes modalIn {
                    from { opacity: 0; transform: translateY(30px) scale(0.98); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }
                .modal-header {
                    position: relative;
                    height: 12rem;
                }
                .modal-header img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .modal-header-fade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.65), transparent);
                }
                .modal-back {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    z-index: 20;
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.9);
                    color: var(--primary);
                    font-size: 1.25rem;
                    cursor: pointer;
                    box-shadow: var(--shadow-soft);
                }
                .modal-back:hover {
                    background: #fff;
                }
                .modal-title {
                    position: absolute;
                    bottom: 1rem;
                    left: 1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .modal-title h2 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                }
                .modal-body {
                    padding: 1.5rem;
                }
                .modal-description {
                    color: var(--muted-foreground);
                    line-height: 1.7;
                    margin-bottom: 1.5rem;
                }
                .modal-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .modal-panel {
                    padding: 1.25rem;
                    border-radius: 0.75rem;
                    background: rgba(13, 148, 136, 0.05);
                }
                .modal-panel-heading {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }
                .modal-panel ul {
                    list-style: none;
                    padding: 0;
                }
                .modal-panel li {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                    opacity: 0;
                    animation: fadeInUp 0.3s ease-out forwards;
                }
                .modal-panel .check {
                    color: var(--primary);
                    font-weight: 700;
                }
                .modal-contact-row {
                    display: flex;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }
                .modal-contact-row + .modal-contact-row {
                    margin-top: 1rem;
                }
                .modal-contact-row a {
                    color: inherit;
                    text-decoration: none;
                }
                .modal-contact-row a:hover {
                    color: var(--primary);
                }
                @media (max-width: 768px) {
                    .services-row-first, .services-row-second, .modal-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
