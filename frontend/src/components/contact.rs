use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::Toast;
use crate::config;
use crate::contact::flow::{DispatchTicket, FormState, Phase};
use crate::contact::validation::Field;
use crate::content::STORE_HOURS;

pub enum FormAction {
    Edit(Field, String),
    Submit,
    Reset(DispatchTicket),
    DismissNotice(u64),
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = (*self).clone();
        let next = match action {
            FormAction::Edit(field, value) => state.edit(field, value),
            FormAction::Submit => state.submit(config::WHATSAPP_NUMBER),
            FormAction::Reset(ticket) => state.reset(ticket),
            FormAction::DismissNotice(id) => state.dismiss_notice(id),
        };
        Rc::new(next)
    }
}

/// Opens `uri` in a new tab. Popup blockers make this best-effort.
fn open_in_new_context(uri: &str) {
    let Some(window) = web_sys::window() else {
        warn!("No window to open the chat link in");
        return;
    };
    if let Err(e) = window.open_with_url_and_target(uri, "_blank") {
        warn!("Failed to open chat link: {:?}", e);
    }
}

#[derive(Properties, PartialEq)]
struct FieldRowProps {
    field: Field,
    label: AttrValue,
    placeholder: AttrValue,
    value: AttrValue,
    error: &'static str,
    on_change: Callback<(Field, String)>,
}

#[function_component(FieldRow)]
fn field_row(props: &FieldRowProps) -> Html {
    let field = props.field;
    let class = classes!(
        "form-input",
        (field == Field::Message).then(|| "form-textarea"),
        (!props.error.is_empty()).then(|| "form-input-error"),
    );

    let input = match field {
        Field::Message => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let target: HtmlTextAreaElement = e.target_unchecked_into();
                on_change.emit((field, target.value()));
            });
            html! {
                <textarea
                    id={field.id()}
                    rows="4"
                    class={class}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                />
            }
        }
        Field::Name | Field::Email => {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let target: HtmlInputElement = e.target_unchecked_into();
                on_change.emit((field, target.value()));
            });
            html! {
                <input
                    type={if field == Field::Email { "email" } else { "text" }}
                    id={field.id()}
                    class={class}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class="form-row">
            <label for={field.id()}>{&props.label}</label>
            {input}
            if !props.error.is_empty() {
                <p class="form-error">{props.error}</p>
            }
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let state = use_reducer(FormState::default);

    // Hand off to WhatsApp and schedule the reset for this dispatch. A newer
    // phase drops both timers, which cancels them.
    {
        let dispatcher = state.clone();
        let uri = state.outbound.as_ref().map(|outbound| outbound.uri().to_string());
        use_effect_with_deps(
            move |phase| {
                let timers = match (*phase, uri) {
                    (Phase::Dispatched(ticket), Some(uri)) => {
                        info!("Opening WhatsApp chat with {}", config::WHATSAPP_NUMBER);
                        let open = Timeout::new(config::DISPATCH_DELAY_MS, move || open_in_new_context(&uri));
                        let reset = Timeout::new(config::RESET_DELAY_MS, move || {
                            dispatcher.dispatch(FormAction::Reset(ticket));
                        });
                        Some((open, reset))
                    }
                    _ => None,
                };
                move || drop(timers)
            },
            state.phase,
        );
    }

    // Auto-dismiss the toast
    {
        let dispatcher = state.clone();
        use_effect_with_deps(
            move |notice| {
                let timer = notice.map(|notice| {
                    Timeout::new(config::TOAST_LIFETIME_MS, move || {
                        dispatcher.dispatch(FormAction::DismissNotice(notice.id));
                    })
                });
                move || drop(timer)
            },
            state.notice,
        );
    }

    let on_change = {
        let dispatcher = state.clone();
        Callback::from(move |(field, value): (Field, String)| {
            dispatcher.dispatch(FormAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let dispatcher = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };

    let toast = state.notice.map(|notice| {
        let dispatcher = state.clone();
        let on_dismiss = Callback::from(move |_: ()| dispatcher.dispatch(FormAction::DismissNotice(notice.id)));
        html! {
            <Toast
                key={notice.id}
                title={notice.kind.title()}
                description={notice.kind.description()}
                tone={notice.kind.tone()}
                {on_dismiss}
            />
        }
    });

    let row = |field: Field, label: &'static str, placeholder: &'static str| {
        html! {
            <FieldRow
                {field}
                label={label}
                placeholder={placeholder}
                value={state.submission.get(field).to_string()}
                error={state.errors.text(field)}
                on_change={on_change.clone()}
            />
        }
    };

    html! {
        <section id="contact" class="section section-tinted">
            <div class="container">
                <div class="section-header fade-in-up">
                    <span class="section-label">{"Get In Touch"}</span>
                    <h2 class="section-title">
                        {"We're Here to "}
                        <span class="text-gradient">{"Help You"}</span>
                    </h2>
                </div>

                <div class="contact-grid">
                    <div class="card fade-in-left">
                        <h3 class="card-title">{"Send Us a Message"}</h3>
                        if state.is_dispatched() {
                            <div class="contact-success">
                                <div class="contact-success-icon">{"✓"}</div>
                                <p class="contact-success-title">{"Opening WhatsApp..."}</p>
                                <p class="contact-success-sub">{"Your message is ready to send."}</p>
                                if let Some(outbound) = state.outbound.as_ref() {
                                    <pre class="contact-preview">{outbound.text()}</pre>
                                }
                            </div>
                        } else {
                            <form class="contact-form" {onsubmit} novalidate=true>
                                { row(Field::Name, "Full Name", "John Doe") }
                                { row(Field::Email, "Email Address", "john@example.com") }
                                { row(Field::Message, "Message", "How can we help you?") }
                                <button type="submit" class="contact-submit">
                                    {"➤ Send on WhatsApp"}
                                </button>
                            </form>
                        }
                    </div>

                    <div class="contact-side fade-in-right">
                        <div class="card">
                            <h3 class="card-title">{"Contact Information"}</h3>
                            <a href={format!("mailto:{}", config::EMAIL)} class="contact-item">
                                <div class="icon-container small">{"✉️"}</div>
                                <div>
                                    <p class="contact-item-label">{"Email"}</p>
                                    <p class="contact-item-value">{config::EMAIL}</p>
                                </div>
                            </a>
                            <a href={config::PHONE_TEL} class="contact-item">
                                <div class="icon-container small">{"📞"}</div>
                                <div>
                                    <p class="contact-item-label">{"Phone"}</p>
                                    <p class="contact-item-value">{config::PHONE_DISPLAY}</p>
                                </div>
                            </a>
                            <a href={config::MAPS_URL} target="_blank" rel="noopener noreferrer" class="contact-item">
                                <div class="icon-container small">{"📍"}</div>
                                <div>
                                    <p class="contact-item-label">{"Address"}</p>
                                    <p class="contact-item-value">{config::ADDRESS}</p>
                                    <p class="contact-item-label">{format!("Plus Code: {}", config::PLUS_CODE)}</p>
                                </div>
                            </a>
                        </div>

                        <div class="card">
                            <div class="hours-heading">
                                <div class="icon-container small">{"🕒"}</div>
                                <h3 class="card-title">{"Store Hours"}</h3>
                            </div>
                            { for STORE_HOURS.iter().map(|entry| html! {
                                <div key={entry.day} class="hours-row">
                                    <span class="hours-day">{entry.day}</span>
                                    <span class={classes!("hours-time", entry.is_closed().then(|| "closed"))}>
                                        {entry.hours}
                                    </span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            { for toast }

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .contact-side > * + * {
                    margin-top: 1.5rem;
                }
                .card-title {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: var(--foreground);
                    margin-bottom: 1.5rem;
                }
                .contact-form > * + * {
                    margin-top: 1.25rem;
                }
                .form-row label {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--foreground);
                }
                .form-input {
                    width: 100%;
                    padding: 0.875rem 1rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    background: var(--background);
                    font: inherit;
                    color: var(--foreground);
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                }
                .form-input:focus {
                    outline: none;
                    border-color: var(--primary);
                    box-shadow: 0 0 0 3px rgba(13, 148, 136, 0.15);
                }
                .form-textarea {
                    resize: none;
                }
                .form-input-error {
                    border-color: var(--destructive);
                }
                .form-error {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    color: var(--destructive);
                }
                .contact-submit {
                    width: 100%;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem 1.5rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: var(--primary);
                    color: var(--primary-foreground);
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .contact-submit:hover {
                    transform: scale(1.02);
                    box-shadow: var(--shadow-soft-lg);
                }
                .contact-success {
                    padding: 3rem 0;
                    text-align: center;
                    animation: successIn 0.4s ease-out;
                }
                @keyframes successIn {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                .contact-success-icon {
                    width: 64px;
                    height: 64px;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    border: 3px solid var(--primary);
                    color: var(--primary);
                    font-size: 2rem;
                    line-height: 58px;
                }
                .contact-success-title {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: var(--foreground);
                }
                .contact-success-sub {
                    margin-top: 0.5rem;
                    color: var(--muted-foreground);
                }
                .contact-preview {
                    margin-top: 1.5rem;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: var(--secondary);
                    font-family: inherit;
                    font-size: 0.875rem;
                    text-align: left;
                    white-space: pre-wrap;
                    color: var(--muted-foreground);
                }
                .contact-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .contact-item + .contact-item {
                    margin-top: 1.25rem;
                }
                .contact-item:hover .contact-item-value {
                    color: var(--primary);
                }
                .contact-item-label {
                    font-size: 0.875rem;
                    color: var(--muted-foreground);
                }
                .contact-item-value {
                    font-weight: 500;
                    color: var(--foreground);
                }
                .hours-heading {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                .hours-heading .card-title {
                    margin-bottom: 0;
                }
                .hours-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.5rem 0;
                    border-bottom: 1px solid var(--border);
                }
                .hours-row:last-child {
                    border-bottom: none;
                }
                .hours-day {
                    font-weight: 500;
                    color: var(--foreground);
                }
                .hours-time {
                    color: var(--muted-foreground);
                }
                .hours-time.closed {
                    color: var(--destructive);
                    font-weight: 500;
                }
                @media (max-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
