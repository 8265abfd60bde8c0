use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

/// Fire-and-forget feedback line shown bottom-right; the app keeps at most
/// one on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn success(text: &str) -> Self {
        ToastMessage {
            kind: ToastKind::Success,
            text: text.to_string(),
        }
    }

    pub fn error(text: &str) -> Self {
        ToastMessage {
            kind: ToastKind::Error,
            text: text.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: ToastMessage,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(4_000, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            props.message.clone(),
        );
    }

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    let kind_class = match props.message.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind_class)}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 120;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.9rem 1.25rem;
                        border-radius: 0.5rem;
                        color: #fff;
                        font-weight: 500;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
                        animation: toast-in 0.3s ease-out;
                        max-width: 22rem;
                    }
                    @keyframes toast-in {
                        from { transform: translateY(1rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast-success { background: #166534; }
                    .toast-error { background: #991b1b; }
                    .toast button {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 1rem;
                    }
                    .toast button:hover { color: #fff; }
                "#}
            </style>
            <span>{ &props.message.text }</span>
            <button onclick={dismiss} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}
