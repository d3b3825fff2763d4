//! Idle-session watchdog component
//!
//! Mounted once for the authenticated part of the app. Listens for user
//! activity on the window, ticks an [`IdleMonitor`] once a second and
//! shows a countdown banner during the warning phase. What happens on
//! expiry is up to the caller via `on_expire`.

use crate::idle::{IdleConfig, IdleMonitor, IdlePhase};
use crate::toast::{show_toast, use_toast, ToastKind};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Window events that count as user activity.
const ACTIVITY_EVENTS: [&str; 4] = ["mousemove", "keydown", "click", "scroll"];

#[derive(Properties, PartialEq)]
pub struct SessionTimeoutProps {
    /// Invoked exactly once when the idle timeout elapses.
    pub on_expire: Callback<()>,
}

#[function_component(SessionTimeout)]
pub fn session_timeout(props: &SessionTimeoutProps) -> Html {
    let toast = use_toast();
    // Seconds left in the warning phase; None outside it. `use_state_eq`
    // so the 1 Hz tick only rerenders while the countdown is visible.
    let remaining = use_state_eq(|| None::<u32>);
    let monitor = use_mut_ref(|| IdleMonitor::new(IdleConfig::default(), js_sys::Date::now()));
    // Whether the warning toast was already shown for this warning phase.
    let warned = use_mut_ref(|| false);

    {
        let monitor = monitor.clone();
        let remaining = remaining.clone();
        let warned = warned.clone();
        let on_expire = props.on_expire.clone();
        use_effect_with((), move |_| {
            let window = gloo::utils::window();

            let listeners: Vec<EventListener> = ACTIVITY_EVENTS
                .iter()
                .map(|event| {
                    let monitor = monitor.clone();
                    EventListener::new(&window, *event, move |_| {
                        monitor.borrow_mut().record_activity(js_sys::Date::now());
                    })
                })
                .collect();

            let interval = Interval::new(1_000, move || {
                let phase = monitor.borrow_mut().tick(js_sys::Date::now());
                match phase {
                    IdlePhase::Active => {
                        *warned.borrow_mut() = false;
                        remaining.set(None);
                    }
                    IdlePhase::Warning { remaining_seconds } => {
                        if !*warned.borrow() {
                            *warned.borrow_mut() = true;
                            show_toast(
                                &toast,
                                ToastKind::Info,
                                "You will be logged out soon due to inactivity.",
                            );
                        }
                        remaining.set(Some(remaining_seconds));
                    }
                    IdlePhase::Expired => {
                        remaining.set(None);
                        if monitor.borrow_mut().take_expiry() {
                            on_expire.emit(());
                        }
                    }
                }
            });

            move || {
                drop(listeners);
                drop(interval);
            }
        });
    }

    html! {
        if let Some(seconds) = *remaining {
            <div
                class="fixed bottom-4 left-1/2 -translate-x-1/2 z-50 px-5 py-3 rounded-lg shadow-lg \
                       bg-amber-50 border-2 border-amber-400 text-amber-900"
                role="alert"
            >
                <p class="font-semibold text-sm m-0">
                    { format!("Your session will expire in {seconds} seconds due to inactivity.") }
                </p>
                <p class="text-xs m-0">{"Move your mouse or press a key to stay logged in."}</p>
            </div>
        }
    }
}
