//! Application shell: routing, auth guards and the idle watchdog

use crate::pages::{AuthPage, HomePage, LogoutPage};
use mindwell_frontend_common::auth::logout;
use mindwell_frontend_common::{
    show_toast, use_auth, use_toast, AuthProvider, SessionTimeout, Spinner, ToastKind,
    ToastProvider,
};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/auth")]
    Auth,
    #[at("/home")]
    Home,
    #[at("/logout")]
    Logout,
    #[at("/")]
    Root,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <AppShell />
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let auth = use_auth();
    let toast = use_toast();
    let navigator = use_navigator().expect("AppShell must be rendered inside a router");

    let on_expire = {
        let auth = auth.clone();
        let toast = toast.clone();
        Callback::from(move |_| {
            logout(&auth, &toast);
            show_toast(
                &toast,
                ToastKind::Info,
                "You were logged out due to inactivity.",
            );
            navigator.replace(&Route::Logout);
        })
    };

    html! {
        <>
            if auth.authenticated {
                <SessionTimeout {on_expire} />
            }
            <Switch<Route> render={switch} />
        </>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Auth => html! {
            <RequireGuest>
                <AuthPage />
            </RequireGuest>
        },
        Route::Home => html! {
            <RequireAuth>
                <HomePage />
            </RequireAuth>
        },
        Route::Logout => html! { <LogoutPage /> },
        Route::Root | Route::NotFound => html! { <Redirect<Route> to={Route::Auth} /> },
    }
}

#[derive(Properties, PartialEq)]
struct GuardProps {
    children: Children,
}

/// Only renders its children for an authenticated session; everyone else
/// is sent to the auth page.
#[function_component(RequireAuth)]
fn require_auth(props: &GuardProps) -> Html {
    let auth = use_auth();

    if auth.is_loading {
        return html! { <Spinner text="Loading..." /> };
    }
    if !auth.authenticated {
        return html! { <Redirect<Route> to={Route::Auth} /> };
    }
    html! { <>{props.children.clone()}</> }
}

/// Only renders its children for signed-out visitors; authenticated
/// users are sent home.
#[function_component(RequireGuest)]
fn require_guest(props: &GuardProps) -> Html {
    let auth = use_auth();

    if auth.is_loading {
        return html! { <Spinner text="Loading..." /> };
    }
    if auth.authenticated {
        return html! { <Redirect<Route> to={Route::Home} /> };
    }
    html! { <>{props.children.clone()}</> }
}
