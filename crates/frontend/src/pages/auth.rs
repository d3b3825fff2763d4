//! Passwordless sign-in and registration page
//!
//! Drives the [`Wizard`] state machine: email first, then either straight
//! to OTP verification (existing accounts) or through profile collection,
//! verification and the NHS link step (new accounts).

use crate::app::Route;
use crate::wizard::{VerifyOutcome, Wizard, WizardStep};
use gloo::timers::callback::Timeout;
use mindwell_frontend_common::auth::user_facing_message;
use mindwell_frontend_common::services::AuthApiService;
use mindwell_frontend_common::validation::{
    validate_date_of_birth, validate_email, validate_mobile_number, validate_name,
    validate_nhs_number, ProfileErrors,
};
use mindwell_frontend_common::{show_toast, use_auth, use_toast, AuthAction, AuthConfig, ToastKind};
use mindwell_http::types::RegisterRequest;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const OTP_LENGTH: usize = 6;

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator().expect("AuthPage must be rendered inside a router");

    let wizard = use_state(Wizard::new);
    let is_loading = use_state(|| false);

    // Form fields
    let email = use_state(String::new);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let mobile_number = use_state(String::new);
    let date_of_birth = use_state(String::new);
    let nhs_number = use_state(String::new);
    let nhs_consent = use_state(|| false);
    let otp = use_state(|| vec![String::new(); OTP_LENGTH]);

    let email_error = use_state(|| None::<String>);
    let profile_errors = use_state(ProfileErrors::default);
    let nhs_error = use_state(|| None::<String>);

    // Seconds until "Resend code" is available again
    let resend_cooldown = use_state_eq(|| 0u32);

    {
        let cooldown = resend_cooldown.clone();
        use_effect_with(*resend_cooldown, move |&secs| {
            let timeout = (secs > 0).then(|| Timeout::new(1_000, move || cooldown.set(secs - 1)));
            move || drop(timeout)
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    // Step 1: check whether the email belongs to an account. Known users
    // get a code immediately; new ones fill in their profile first.
    let on_email_continue = {
        let wizard = wizard.clone();
        let email = email.clone();
        let email_error = email_error.clone();
        let is_loading = is_loading.clone();
        let resend_cooldown = resend_cooldown.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(message) = validate_email(&email) {
                show_toast(&toast, ToastKind::Error, message.clone());
                email_error.set(Some(message));
                return;
            }
            email_error.set(None);

            let wizard = wizard.clone();
            let email = (*email).trim().to_string();
            let is_loading = is_loading.clone();
            let resend_cooldown = resend_cooldown.clone();
            let toast = toast.clone();
            is_loading.set(true);
            spawn_local(async move {
                let service = AuthApiService::new();
                let result = service.check_email(&email).await;
                match result {
                    Ok(response) if response.exists => {
                        match service.send_otp(&email).await {
                            Ok(_) => {
                                show_toast(&toast, ToastKind::Success, "We sent a code to your email.");
                                let mut next = *wizard;
                                next.email_checked(true);
                                wizard.set(next);
                                resend_cooldown.set(AuthConfig::OTP_RESEND_COOLDOWN_SECS);
                            }
                            Err(err) => show_toast(
                                &toast,
                                ToastKind::Error,
                                user_facing_message(&err, "Failed to send the code. Please try again."),
                            ),
                        }
                    }
                    Ok(_) => {
                        let mut next = *wizard;
                        next.email_checked(false);
                        wizard.set(next);
                    }
                    Err(err) => show_toast(
                        &toast,
                        ToastKind::Error,
                        user_facing_message(&err, "Something went wrong. Please try again."),
                    ),
                }
                is_loading.set(false);
            });
        })
    };

    // Step 2 (new accounts): validate profile fields, then send the code.
    let on_profile_continue = {
        let wizard = wizard.clone();
        let email = email.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let mobile_number = mobile_number.clone();
        let date_of_birth = date_of_birth.clone();
        let profile_errors = profile_errors.clone();
        let is_loading = is_loading.clone();
        let resend_cooldown = resend_cooldown.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let errors = ProfileErrors {
                first_name: validate_name(&first_name, "First name").err(),
                last_name: validate_name(&last_name, "Last name").err(),
                mobile_number: validate_mobile_number(&mobile_number).err(),
                date_of_birth: validate_date_of_birth(&date_of_birth).err(),
                ..ProfileErrors::default()
            };
            let valid = errors.is_empty();
            profile_errors.set(errors);
            if !valid {
                show_toast(&toast, ToastKind::Error, "Please correct the highlighted fields.");
                return;
            }

            let wizard = wizard.clone();
            let email = (*email).trim().to_string();
            let is_loading = is_loading.clone();
            let resend_cooldown = resend_cooldown.clone();
            let toast = toast.clone();
            is_loading.set(true);
            spawn_local(async move {
                match AuthApiService::new().send_otp(&email).await {
                    Ok(_) => {
                        show_toast(&toast, ToastKind::Success, "We sent a code to your email.");
                        let mut next = *wizard;
                        next.profile_completed();
                        wizard.set(next);
                        resend_cooldown.set(AuthConfig::OTP_RESEND_COOLDOWN_SECS);
                    }
                    Err(err) => show_toast(
                        &toast,
                        ToastKind::Error,
                        user_facing_message(&err, "Failed to send the code. Please try again."),
                    ),
                }
                is_loading.set(false);
            });
        })
    };

    // One callback per OTP cell: keep the last typed digit and move focus
    // to the next cell.
    let on_otp_input = {
        let otp = otp.clone();
        Callback::from(move |(index, e): (usize, InputEvent)| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let digit: String = input
                .value()
                .chars()
                .rev()
                .find(char::is_ascii_digit)
                .map(String::from)
                .unwrap_or_default();
            input.set_value(&digit);

            let mut cells = (*otp).clone();
            cells[index] = digit.clone();
            otp.set(cells);

            if !digit.is_empty() {
                focus_otp_cell(index + 1);
            }
        })
    };

    let on_otp_keydown = {
        let otp = otp.clone();
        Callback::from(move |(index, e): (usize, KeyboardEvent)| {
            if e.key() == "Backspace" && otp[index].is_empty() && index > 0 {
                focus_otp_cell(index - 1);
            }
        })
    };

    // Step 3: verify the code. Existing accounts get tokens back and the
    // session starts; new accounts continue to the NHS link step.
    let on_verify = {
        let wizard = wizard.clone();
        let auth = auth.clone();
        let email = email.clone();
        let otp = otp.clone();
        let is_loading = is_loading.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let code: String = otp.concat();
            if code.len() != OTP_LENGTH {
                show_toast(&toast, ToastKind::Error, "Please enter the 6-digit code.");
                return;
            }

            let wizard = wizard.clone();
            let auth = auth.clone();
            let email = (*email).trim().to_string();
            let is_loading = is_loading.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            is_loading.set(true);
            spawn_local(async move {
                match AuthApiService::new().verify_otp(&email, &code).await {
                    Ok(response) => {
                        let mut next = *wizard;
                        match next.otp_verified() {
                            VerifyOutcome::LoggedIn => match response.token_pair() {
                                Some(pair) => {
                                    auth.dispatch(AuthAction::Login(pair));
                                    show_toast(&toast, ToastKind::Success, "Login successful!");
                                    navigator.push(&Route::Home);
                                }
                                None => show_toast(
                                    &toast,
                                    ToastKind::Error,
                                    "Verification succeeded but no session was issued. Please try again.",
                                ),
                            },
                            VerifyOutcome::ContinueToNhsLink => wizard.set(next),
                        }
                    }
                    Err(err) => show_toast(
                        &toast,
                        ToastKind::Error,
                        user_facing_message(&err, "Invalid or expired code. Please try again."),
                    ),
                }
                is_loading.set(false);
            });
        })
    };

    let on_resend = {
        let email = email.clone();
        let resend_cooldown = resend_cooldown.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            if *resend_cooldown > 0 {
                return;
            }
            let email = (*email).trim().to_string();
            let resend_cooldown = resend_cooldown.clone();
            let toast = toast.clone();
            resend_cooldown.set(AuthConfig::OTP_RESEND_COOLDOWN_SECS);
            spawn_local(async move {
                match AuthApiService::new().send_otp(&email).await {
                    Ok(_) => show_toast(&toast, ToastKind::Success, "We sent a new code."),
                    Err(err) => {
                        resend_cooldown.set(0);
                        show_toast(
                            &toast,
                            ToastKind::Error,
                            user_facing_message(&err, "Failed to resend the code."),
                        );
                    }
                }
            });
        })
    };

    // Step 4: register the account, with or without an NHS number.
    let register = {
        let auth = auth.clone();
        let email = email.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let mobile_number = mobile_number.clone();
        let date_of_birth = date_of_birth.clone();
        let nhs_number = nhs_number.clone();
        let nhs_consent = nhs_consent.clone();
        let nhs_error = nhs_error.clone();
        let is_loading = is_loading.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();
        move |skip: bool| {
            if !skip {
                if let Err(message) = validate_nhs_number(&nhs_number, true) {
                    nhs_error.set(Some(message));
                    return;
                }
                if !*nhs_consent {
                    nhs_error.set(Some(
                        "Please consent to linking your NHS number, or skip for now.".into(),
                    ));
                    return;
                }
            }
            nhs_error.set(None);

            let request = RegisterRequest {
                email: (*email).trim().to_string(),
                first_name: (*first_name).trim().to_string(),
                last_name: (*last_name).trim().to_string(),
                mobile_number: (*mobile_number).trim().to_string(),
                date_of_birth: (*date_of_birth).trim().to_string(),
                nhs_number: if skip {
                    String::new()
                } else {
                    (*nhs_number).trim().to_string()
                },
                nhs_consent: !skip && *nhs_consent,
            };

            let auth = auth.clone();
            let is_loading = is_loading.clone();
            let toast = toast.clone();
            let navigator = navigator.clone();
            is_loading.set(true);
            spawn_local(async move {
                match AuthApiService::new().register(&request).await {
                    Ok(pair) => {
                        auth.dispatch(AuthAction::Login(pair));
                        show_toast(
                            &toast,
                            ToastKind::Success,
                            "Registration successful! Welcome to MindWell.",
                        );
                        navigator.push(&Route::Home);
                    }
                    Err(err) => show_toast(
                        &toast,
                        ToastKind::Error,
                        user_facing_message(&err, "Registration failed. Please try again."),
                    ),
                }
                is_loading.set(false);
            });
        }
    };

    let on_complete_profile = {
        let register = register.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            register(false);
        })
    };
    let on_skip_nhs = Callback::from(move |_: MouseEvent| register(true));

    let on_back = {
        let wizard = wizard.clone();
        let otp = otp.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *wizard;
            next.back();
            wizard.set(next);
            otp.set(vec![String::new(); OTP_LENGTH]);
        })
    };

    let step = wizard.step();
    let body = match step {
        WizardStep::Email => html! {
            <form onsubmit={on_email_continue}>
                <label class="block text-sm font-medium text-gray-700 mb-1" for="email">
                    {"Email address"}
                </label>
                <input
                    id="email"
                    type="email"
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg mb-1"
                    placeholder="you@example.com"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
                if let Some(message) = &*email_error {
                    <p class="text-red-600 text-sm mb-2">{message}</p>
                }
                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full mt-3 px-4 py-3 bg-teal-600 hover:bg-teal-700 disabled:opacity-50 text-white font-semibold rounded-lg"
                >
                    { if *is_loading { "Checking..." } else { "Continue" } }
                </button>
            </form>
        },
        WizardStep::Profile => html! {
            <form onsubmit={on_profile_continue}>
                <ProfileField
                    label="First name"
                    value={(*first_name).clone()}
                    error={profile_errors.first_name.clone()}
                    on_input={field_setter(&first_name)}
                />
                <ProfileField
                    label="Last name"
                    value={(*last_name).clone()}
                    error={profile_errors.last_name.clone()}
                    on_input={field_setter(&last_name)}
                />
                <ProfileField
                    label="Mobile number"
                    placeholder="+447911123456"
                    value={(*mobile_number).clone()}
                    error={profile_errors.mobile_number.clone()}
                    on_input={field_setter(&mobile_number)}
                />
                <ProfileField
                    label="Date of birth"
                    input_type="date"
                    value={(*date_of_birth).clone()}
                    error={profile_errors.date_of_birth.clone()}
                    on_input={field_setter(&date_of_birth)}
                />
                <div class="flex gap-3 mt-4">
                    <button
                        type="button"
                        onclick={on_back.clone()}
                        class="flex-1 px-4 py-3 bg-gray-100 hover:bg-gray-200 text-gray-700 font-semibold rounded-lg"
                    >
                        {"Back"}
                    </button>
                    <button
                        type="submit"
                        disabled={*is_loading}
                        class="flex-1 px-4 py-3 bg-teal-600 hover:bg-teal-700 disabled:opacity-50 text-white font-semibold rounded-lg"
                    >
                        { if *is_loading { "Sending code..." } else { "Continue" } }
                    </button>
                </div>
            </form>
        },
        WizardStep::Verify => html! {
            <form onsubmit={on_verify}>
                <p class="text-gray-600 text-sm mb-4">
                    { format!("Enter the 6-digit code we sent to {}.", email.trim()) }
                </p>
                <div class="flex justify-center gap-2 mb-4">
                    { for (0..OTP_LENGTH).map(|index| {
                        let oninput = on_otp_input.reform(move |e: InputEvent| (index, e));
                        let onkeydown = on_otp_keydown.reform(move |e: KeyboardEvent| (index, e));
                        html! {
                            <input
                                id={format!("otp-{index}")}
                                type="text"
                                inputmode="numeric"
                                maxlength="1"
                                autocomplete="one-time-code"
                                class="w-12 h-14 text-center text-2xl font-bold border border-gray-300 rounded-lg"
                                value={otp[index].clone()}
                                {oninput}
                                {onkeydown}
                            />
                        }
                    })}
                </div>
                <button
                    type="submit"
                    disabled={*is_loading}
                    class="w-full px-4 py-3 bg-teal-600 hover:bg-teal-700 disabled:opacity-50 text-white font-semibold rounded-lg"
                >
                    { if *is_loading { "Verifying..." } else { "Verify" } }
                </button>
                <div class="flex justify-between items-center mt-4 text-sm">
                    <button type="button" onclick={on_back} class="text-gray-600 hover:underline">
                        {"Back"}
                    </button>
                    if *resend_cooldown > 0 {
                        <span class="text-gray-400">
                            { format!("Resend code in {}s", *resend_cooldown) }
                        </span>
                    } else {
                        <button type="button" onclick={on_resend} class="text-teal-600 hover:underline">
                            {"Resend code"}
                        </button>
                    }
                </div>
            </form>
        },
        WizardStep::NhsLink => {
            let nhs_complete = nhs_number.len() == 10
                && nhs_number.chars().all(|c| c.is_ascii_digit())
                && *nhs_consent;
            html! {
            <form onsubmit={on_complete_profile}>
                <p class="text-gray-600 text-sm mb-4">
                    {"Link your NHS number to share your wellbeing record with your care team. \
                      You can also do this later from your profile."}
                </p>
                <label class="block text-sm font-medium text-gray-700 mb-1" for="nhs-number">
                    {"NHS number"}
                </label>
                <input
                    id="nhs-number"
                    type="text"
                    inputmode="numeric"
                    maxlength="10"
                    class="w-full px-4 py-3 border border-gray-300 rounded-lg mb-1"
                    placeholder="10 digits"
                    value={(*nhs_number).clone()}
                    oninput={field_setter(&nhs_number)}
                />
                if let Some(message) = &*nhs_error {
                    <p class="text-red-600 text-sm mb-2">{message}</p>
                }
                <label class="flex items-start gap-2 mt-3 text-sm text-gray-700">
                    <input
                        type="checkbox"
                        checked={*nhs_consent}
                        onchange={{
                            let nhs_consent = nhs_consent.clone();
                            Callback::from(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                nhs_consent.set(input.checked());
                            })
                        }}
                    />
                    <span>{"I consent to MindWell linking my NHS number to my account."}</span>
                </label>
                <div class="flex gap-3 mt-4">
                    <button
                        type="button"
                        onclick={on_skip_nhs}
                        disabled={*is_loading}
                        class="flex-1 px-4 py-3 bg-gray-100 hover:bg-gray-200 disabled:opacity-50 text-gray-700 font-semibold rounded-lg"
                    >
                        {"Skip for now"}
                    </button>
                    <button
                        type="submit"
                        disabled={*is_loading || !nhs_complete}
                        class="flex-1 px-4 py-3 bg-teal-600 hover:bg-teal-700 disabled:opacity-50 text-white font-semibold rounded-lg"
                    >
                        {"Complete Profile"}
                    </button>
                </div>
            </form>
        }},
    };

    let heading = match step {
        WizardStep::Email => "Welcome to MindWell",
        WizardStep::Profile => "Tell us about yourself",
        WizardStep::Verify => "Check your email",
        WizardStep::NhsLink => "Link your NHS number",
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-teal-50 to-blue-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-2xl shadow-xl p-8">
                <h1 class="text-2xl font-bold text-gray-800 mb-6 text-center">{heading}</h1>
                {body}
            </div>
        </div>
    }
}

fn focus_otp_cell(index: usize) {
    if index >= OTP_LENGTH {
        return;
    }
    if let Some(element) = gloo::utils::document().get_element_by_id(&format!("otp-{index}")) {
        if let Ok(input) = element.dyn_into::<HtmlInputElement>() {
            let _ = input.focus();
        }
    }
}

fn field_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[derive(Properties, PartialEq)]
struct ProfileFieldProps {
    label: AttrValue,
    value: String,
    #[prop_or_default]
    error: Option<String>,
    #[prop_or("text".into())]
    input_type: AttrValue,
    #[prop_or_default]
    placeholder: AttrValue,
    on_input: Callback<InputEvent>,
}

#[function_component(ProfileField)]
fn profile_field(props: &ProfileFieldProps) -> Html {
    html! {
        <div class="mb-3">
            <label class="block text-sm font-medium text-gray-700 mb-1">{&props.label}</label>
            <input
                type={props.input_type.clone()}
                class="w-full px-4 py-3 border border-gray-300 rounded-lg"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={props.on_input.clone()}
            />
            if let Some(message) = &props.error {
                <p class="text-red-600 text-sm mt-1">{message}</p>
            }
        </div>
    }
}
