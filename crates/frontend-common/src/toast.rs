//! Toast notification context and display component

use crate::config::AuthConfig;
use gloo::timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// Current toast plus a sequence number so that showing the same message
/// twice still restarts the dismiss timer.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
    seq: u32,
}

pub enum ToastAction {
    Show { message: String, kind: ToastKind },
    Dismiss,
}

pub type ToastContext = UseReducerHandle<ToastState>;

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show { message, kind } => Rc::new(Self {
                current: Some(Toast { message, kind }),
                seq: self.seq.wrapping_add(1),
            }),
            ToastAction::Dismiss => Rc::new(Self {
                current: None,
                seq: self.seq,
            }),
        }
    }
}

/// Convenience wrapper over `dispatch(ToastAction::Show { .. })`.
pub fn show_toast(toast: &ToastContext, kind: ToastKind, message: impl Into<String>) {
    toast.dispatch(ToastAction::Show {
        message: message.into(),
        kind,
    });
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={state}>
            <ToastView />
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastView)]
fn toast_view() -> Html {
    let toast = use_toast();

    // Auto-dismiss; re-armed whenever a new toast is shown.
    {
        let handle = toast.clone();
        use_effect_with(toast.seq, move |_| {
            let timeout = handle.current.is_some().then(|| {
                Timeout::new(AuthConfig::TOAST_DISMISS_MS, move || {
                    handle.dispatch(ToastAction::Dismiss);
                })
            });
            move || drop(timeout)
        });
    }

    let on_close = {
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| toast.dispatch(ToastAction::Dismiss))
    };

    let Some(current) = toast.current.clone() else {
        return html! {};
    };

    let accent = match current.kind {
        ToastKind::Success => "border-green-400 bg-green-50 text-green-800",
        ToastKind::Error => "border-red-400 bg-red-50 text-red-800",
        ToastKind::Info => "border-blue-400 bg-blue-50 text-blue-800",
    };

    html! {
        <div
            class={format!("fixed top-4 left-1/2 -translate-x-1/2 z-50 flex items-center justify-between \
                            max-w-lg px-4 py-3 rounded-lg shadow-md border-2 {accent}")}
            role="alert"
        >
            <span class="font-semibold text-sm mr-4">{&current.message}</span>
            <button onclick={on_close} class="p-1 rounded-full hover:bg-black/10" aria-label="Close notification">
                {"✕"}
            </button>
        </div>
    }
}

/// Hook to use the toast context
#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
        .expect("ToastContext not found. Make sure to wrap your component with ToastProvider")
}
