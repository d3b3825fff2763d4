//! Dashboard: profile details, profile editing and account activity

use crate::app::Route;
use mindwell_frontend_common::auth::{logout, user_facing_message};
use mindwell_frontend_common::services::ProfileService;
use mindwell_frontend_common::validation::{
    validate_date_of_birth, validate_mobile_number, validate_name, validate_nhs_number,
    ProfileErrors,
};
use mindwell_frontend_common::{
    show_toast, use_auth, use_toast, AuthAction, Spinner, ToastKind,
};
use mindwell_http::types::{ActivityLogEntry, UpdateProfileRequest, UserInfo};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator().expect("HomePage must be rendered inside a router");

    let logs = use_state(Vec::<ActivityLogEntry>::new);
    let logs_loading = use_state(|| true);
    let selected_log = use_state(|| None::<usize>);
    let show_logout_confirm = use_state(|| false);

    // Fetch activity on mount and after each profile change.
    let refresh_logs = {
        let logs = logs.clone();
        let logs_loading = logs_loading.clone();
        let selected_log = selected_log.clone();
        Callback::from(move |_: ()| {
            let logs = logs.clone();
            let logs_loading = logs_loading.clone();
            let selected_log = selected_log.clone();
            logs_loading.set(true);
            spawn_local(async move {
                match ProfileService::new().activity_logs().await {
                    Ok(entries) => {
                        selected_log.set(None);
                        logs.set(entries);
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "failed to fetch activity logs");
                    }
                }
                logs_loading.set(false);
            });
        })
    };

    {
        let refresh_logs = refresh_logs.clone();
        use_effect_with((), move |_| {
            refresh_logs.emit(());
            || ()
        });
    }

    let on_logout_click = {
        let show_logout_confirm = show_logout_confirm.clone();
        Callback::from(move |_: MouseEvent| show_logout_confirm.set(true))
    };
    let on_logout_cancel = {
        let show_logout_confirm = show_logout_confirm.clone();
        Callback::from(move |_: MouseEvent| show_logout_confirm.set(false))
    };
    let on_logout_confirm = {
        let auth = auth.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            logout(&auth, &toast);
            navigator.replace(&Route::Logout);
        })
    };

    let Some(user) = auth.user.clone() else {
        return html! { <Spinner text="Loading your profile..." /> };
    };

    let on_profile_saved = {
        let auth = auth.clone();
        let refresh_logs = refresh_logs.clone();
        Callback::from(move |updated: UserInfo| {
            auth.dispatch(AuthAction::UserLoaded(updated));
            refresh_logs.emit(());
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white border-b border-gray-200 px-6 py-4 flex justify-between items-center">
                <h1 class="text-xl font-bold text-teal-700">{"MindWell"}</h1>
                <div class="flex items-center gap-4">
                    <span class="text-sm text-gray-600">
                        { format!("Hello, {}", user.first_name) }
                    </span>
                    <button
                        onclick={on_logout_click}
                        class="px-4 py-2 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-lg"
                    >
                        {"Logout"}
                    </button>
                </div>
            </header>

            <main class="max-w-5xl mx-auto p-6 grid gap-6 md:grid-cols-2">
                <ProfileCard user={user.clone()} on_saved={on_profile_saved} />
                <ActivityCard
                    entries={(*logs).clone()}
                    loading={*logs_loading}
                    selected={*selected_log}
                    on_select={{
                        let selected_log = selected_log.clone();
                        Callback::from(move |index| selected_log.set(index))
                    }}
                />
            </main>

            if *show_logout_confirm {
                <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-50">
                    <div class="bg-white rounded-xl shadow-xl p-6 max-w-sm w-full mx-4">
                        <h2 class="text-lg font-bold text-gray-800 mb-2">{"Log out?"}</h2>
                        <p class="text-gray-600 text-sm mb-4">
                            {"You will need a new email code to sign back in."}
                        </p>
                        <div class="flex gap-3">
                            <button
                                onclick={on_logout_cancel}
                                class="flex-1 px-4 py-2 bg-gray-100 hover:bg-gray-200 text-gray-700 font-semibold rounded-lg"
                            >
                                {"Cancel"}
                            </button>
                            <button
                                onclick={on_logout_confirm}
                                class="flex-1 px-4 py-2 bg-red-600 hover:bg-red-700 text-white font-semibold rounded-lg"
                            >
                                {"Log out"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileCardProps {
    user: UserInfo,
    on_saved: Callback<UserInfo>,
}

#[function_component(ProfileCard)]
fn profile_card(props: &ProfileCardProps) -> Html {
    let toast = use_toast();
    let editing = use_state(|| false);
    let saving = use_state(|| false);
    let errors = use_state(ProfileErrors::default);

    let first_name = use_state(|| props.user.first_name.clone());
    let last_name = use_state(|| props.user.last_name.clone());
    let mobile_number = use_state(|| props.user.mobile_number.clone());
    let date_of_birth = use_state(|| props.user.date_of_birth.clone());
    let nhs_number = use_state(|| props.user.nhs_number.clone().unwrap_or_default());

    let on_edit = {
        let editing = editing.clone();
        let errors = errors.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let mobile_number = mobile_number.clone();
        let date_of_birth = date_of_birth.clone();
        let nhs_number = nhs_number.clone();
        let user = props.user.clone();
        Callback::from(move |_: MouseEvent| {
            // Re-seed fields from the current profile on each entry
            first_name.set(user.first_name.clone());
            last_name.set(user.last_name.clone());
            mobile_number.set(user.mobile_number.clone());
            date_of_birth.set(user.date_of_birth.clone());
            nhs_number.set(user.nhs_number.clone().unwrap_or_default());
            errors.set(ProfileErrors::default());
            editing.set(true);
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    let on_save = {
        let toast = toast.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let errors = errors.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let mobile_number = mobile_number.clone();
        let date_of_birth = date_of_birth.clone();
        let nhs_number = nhs_number.clone();
        let email = props.user.email.clone();
        let on_saved = props.on_saved.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let next = ProfileErrors {
                first_name: validate_name(&first_name, "First name").err(),
                last_name: validate_name(&last_name, "Last name").err(),
                mobile_number: validate_mobile_number(&mobile_number).err(),
                date_of_birth: validate_date_of_birth(&date_of_birth).err(),
                nhs_number: validate_nhs_number(&nhs_number, false).err(),
                ..ProfileErrors::default()
            };
            let valid = next.is_empty();
            errors.set(next);
            if !valid {
                show_toast(&toast, ToastKind::Error, "Please correct the highlighted fields.");
                return;
            }

            let request = UpdateProfileRequest {
                email: email.clone(),
                first_name: (*first_name).trim().to_string(),
                last_name: (*last_name).trim().to_string(),
                mobile_number: (*mobile_number).trim().to_string(),
                date_of_birth: (*date_of_birth).trim().to_string(),
                nhs_number: (*nhs_number).trim().to_string(),
            };

            let toast = toast.clone();
            let editing = editing.clone();
            let saving = saving.clone();
            let on_saved = on_saved.clone();
            saving.set(true);
            spawn_local(async move {
                match ProfileService::new().update_profile(&request).await {
                    Ok(updated) => {
                        show_toast(&toast, ToastKind::Success, "Profile updated.");
                        editing.set(false);
                        on_saved.emit(updated);
                    }
                    Err(err) => show_toast(
                        &toast,
                        ToastKind::Error,
                        user_facing_message(&err, "Failed to update your profile."),
                    ),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <section class="bg-white rounded-xl shadow p-6">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-lg font-bold text-gray-800">{"Your profile"}</h2>
                if !*editing {
                    <button onclick={on_edit} class="text-sm text-teal-600 hover:underline">
                        {"Edit"}
                    </button>
                }
            </div>

            if *editing {
                <form onsubmit={on_save}>
                    <EditField label="First name" handle={first_name.clone()} error={errors.first_name.clone()} />
                    <EditField label="Last name" handle={last_name.clone()} error={errors.last_name.clone()} />
                    <EditField label="Mobile number" handle={mobile_number.clone()} error={errors.mobile_number.clone()} />
                    <EditField label="Date of birth" input_type="date" handle={date_of_birth.clone()} error={errors.date_of_birth.clone()} />
                    <EditField label="NHS number" handle={nhs_number.clone()} error={errors.nhs_number.clone()} />
                    <div class="flex gap-3 mt-4">
                        <button
                            type="button"
                            onclick={on_cancel}
                            class="flex-1 px-4 py-2 bg-gray-100 hover:bg-gray-200 text-gray-700 font-semibold rounded-lg"
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="submit"
                            disabled={*saving}
                            class="flex-1 px-4 py-2 bg-teal-600 hover:bg-teal-700 disabled:opacity-50 text-white font-semibold rounded-lg"
                        >
                            { if *saving { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </form>
            } else {
                <dl class="space-y-2 text-sm">
                    <ProfileRow label="Email" value={props.user.email.clone()} />
                    <ProfileRow label="First name" value={props.user.first_name.clone()} />
                    <ProfileRow label="Last name" value={props.user.last_name.clone()} />
                    <ProfileRow label="Mobile number" value={props.user.mobile_number.clone()} />
                    <ProfileRow label="Date of birth" value={props.user.date_of_birth.clone()} />
                    <ProfileRow
                        label="NHS number"
                        value={props.user.nhs_number.clone().unwrap_or_else(|| "Not linked".into())}
                    />
                </dl>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProfileRowProps {
    label: AttrValue,
    value: String,
}

#[function_component(ProfileRow)]
fn profile_row(props: &ProfileRowProps) -> Html {
    html! {
        <div class="flex justify-between border-b border-gray-100 pb-2">
            <dt class="text-gray-500">{&props.label}</dt>
            <dd class="text-gray-800 font-medium">{&props.value}</dd>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EditFieldProps {
    label: AttrValue,
    handle: UseStateHandle<String>,
    #[prop_or_default]
    error: Option<String>,
    #[prop_or("text".into())]
    input_type: AttrValue,
}

#[function_component(EditField)]
fn edit_field(props: &EditFieldProps) -> Html {
    let oninput = {
        let handle = props.handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle.set(input.value());
        })
    };

    html! {
        <div class="mb-3">
            <label class="block text-sm font-medium text-gray-700 mb-1">{&props.label}</label>
            <input
                type={props.input_type.clone()}
                class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                value={(*props.handle).clone()}
                {oninput}
            />
            if let Some(message) = &props.error {
                <p class="text-red-600 text-sm mt-1">{message}</p>
            }
        </div>
    }
}

/// Display form of a log action, e.g. "profile_update" -> "PROFILE UPDATE".
fn action_label(action: &str) -> String {
    action.replace('_', " ").to_uppercase()
}

#[derive(Properties, PartialEq)]
struct ActivityCardProps {
    entries: Vec<ActivityLogEntry>,
    loading: bool,
    selected: Option<usize>,
    on_select: Callback<Option<usize>>,
}

#[function_component(ActivityCard)]
fn activity_card(props: &ActivityCardProps) -> Html {
    if props.loading {
        return html! {
            <section class="bg-white rounded-xl shadow p-6">
                <Spinner text="Loading activity..." />
            </section>
        };
    }

    let detail = props.selected.and_then(|index| props.entries.get(index));

    html! {
        <section class="bg-white rounded-xl shadow p-6">
            <h2 class="text-lg font-bold text-gray-800 mb-4">{"Recent activity"}</h2>
            if props.entries.is_empty() {
                <p class="text-gray-500 text-sm">{"No account activity yet."}</p>
            } else {
                <ul class="divide-y divide-gray-100 max-h-80 overflow-y-auto">
                    { for props.entries.iter().enumerate().map(|(index, entry)| {
                        let on_select = props.on_select.clone();
                        let selected = props.selected == Some(index);
                        let onclick = Callback::from(move |_: MouseEvent| {
                            on_select.emit(if selected { None } else { Some(index) });
                        });
                        html! {
                            <li>
                                <button
                                    {onclick}
                                    class={classes!(
                                        "w-full", "text-left", "py-2", "px-2", "rounded",
                                        selected.then_some("bg-teal-50"),
                                    )}
                                >
                                    <span class="block text-sm font-medium text-gray-800">
                                        { action_label(&entry.action) }
                                    </span>
                                    <span class="block text-xs text-gray-500">
                                        { entry.timestamp.format("%d %b %Y, %H:%M UTC").to_string() }
                                    </span>
                                </button>
                            </li>
                        }
                    })}
                </ul>
            }

            if let Some(entry) = detail {
                <div class="mt-4 border-t border-gray-200 pt-4 text-sm">
                    <h3 class="font-semibold text-gray-800 mb-2">{"Details"}</h3>
                    <p class="text-gray-600">
                        {"IP address: "}
                        { entry.ip_address.clone().unwrap_or_else(|| "Unknown".into()) }
                    </p>
                    if let Some(details) = &entry.details {
                        <p class="text-gray-600 mt-1">{details}</p>
                    }
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::action_label;

    #[test]
    fn action_label_is_uppercased_with_spaces() {
        assert_eq!(action_label("profile_update"), "PROFILE UPDATE");
        assert_eq!(action_label("login"), "LOGIN");
    }
}
