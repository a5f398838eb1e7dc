use yew::prelude::*;

use crate::contact::flow::Tone;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub tone: Tone,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    let tone_class = match props.tone {
        Tone::Default => "toast-default",
        Tone::Destructive => "toast-destructive",
    };

    html! {
        <div class={classes!("toast", tone_class)} role="status" aria-live="polite">
            <div class="toast-body">
                <p class="toast-title">{&props.title}</p>
                <p class="toast-description">{&props.description}</p>
            </div>
            <button type="button" class="toast-close" onclick={dismiss} aria-label="Dismiss">{"✕"}</button>
            <style>
                {r#"
                .toast {
                    position: fixed;
                    right: 1rem;
                    bottom: 6rem;
                    z-index: 200;
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    width: min(380px, calc(100vw - 2rem));
                    padding: 1rem 1.25rem;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    box-shadow: var(--shadow-soft-lg);
                    animation: toastIn 0.3s ease-out;
                }
                @keyframes toastIn {
                    from { opacity: 0; transform: translateY(16px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .toast-default {
                    background: var(--card);
                    color: var(--foreground);
                }
                .toast-destructive {
                    background: var(--destructive);
                    border-color: var(--destructive);
                    color: #fff;
                }
                .toast-body {
                    flex: 1;
                }
                .toast-title {
                    font-weight: 600;
                    font-size: 0.9rem;
                }
                .toast-description {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    opacity: 0.9;
                }
                .toast-close {
                    background: none;
                    border: none;
                    color: inherit;
                    opacity: 0.6;
                    cursor: pointer;
                }
                .toast-close:hover {
                    opacity: 1;
                }
                "#}
            </style>
        </div>
    }
}
