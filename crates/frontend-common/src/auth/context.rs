//! Global authentication context and provider

use crate::client::set_auth_token;
use crate::services::{AuthApiService, ProfileService};
use crate::session::TokenStore;
use crate::toast::{show_toast, ToastContext, ToastKind};
use mindwell_http::types::{TokenPair, UserInfo};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Authentication context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub user: Option<UserInfo>,
    pub authenticated: bool,
    pub is_loading: bool,
}

/// Authentication context actions
pub enum AuthAction {
    /// Store a fresh token pair and mark the session authenticated
    Login(TokenPair),
    /// Record the fetched profile of the current user
    UserLoaded(UserInfo),
    /// Clear tokens, user and the authenticated flag
    Logout,
    SetLoading(bool),
}

/// Authentication context
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            user: None,
            authenticated: false,
            // Start loading until the stored session has been checked
            is_loading: true,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Login(pair) => {
                TokenStore::save(&pair);
                let _ = set_auth_token(Some(&pair.access));

                Rc::new(Self {
                    user: self.user.clone(),
                    authenticated: true,
                    is_loading: false,
                })
            }
            AuthAction::UserLoaded(user) => Rc::new(Self {
                user: Some(user),
                ..(*self).clone()
            }),
            AuthAction::Logout => {
                let _ = set_auth_token(None);
                TokenStore::clear();

                Rc::new(Self {
                    user: None,
                    authenticated: false,
                    is_loading: false,
                })
            }
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
        }
    }
}

/// Log out: clear local session state immediately, then notify the server
/// on a best-effort basis.
///
/// Server-side blacklisting is skipped when no complete token pair is
/// stored, and its failure never reaches the caller; it only produces an
/// informational toast.
pub fn logout(auth: &AuthContext, toast: &ToastContext) {
    let tokens = TokenStore::load();

    // Local logout is unconditional and happens first.
    auth.dispatch(AuthAction::Logout);

    if let Some(pair) = tokens {
        let toast = toast.clone();
        spawn_local(async move {
            if let Err(err) = AuthApiService::new().blacklist(&pair).await {
                tracing::warn!(error = %err, "failed to blacklist refresh token on logout");
                show_toast(
                    &toast,
                    ToastKind::Info,
                    "Logout successful, but failed to notify server.",
                );
            }
        });
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component. Must be mounted inside a `ToastProvider`.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);
    let toast = crate::toast::use_toast();

    // Register the global session-expired handler
    {
        let auth_state = auth_state.clone();
        let toast = toast.clone();
        use_effect_with((), move |_| {
            super::session_expired::set_callback(Rc::new(move || {
                show_toast(&toast, ToastKind::Info, "Session expired. Please log in again.");
                auth_state.dispatch(AuthAction::Logout);
            }));

            // Cleanup on unmount
            move || super::session_expired::clear_callback()
        });
    }

    // Restore the stored session on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            if let Some(pair) = TokenStore::load() {
                auth_state.dispatch(AuthAction::Login(pair));
            } else {
                auth_state.dispatch(AuthAction::SetLoading(false));
            }
            || ()
        });
    }

    // Fetch user details once authenticated (and after profile updates
    // that clear the cached user)
    {
        let auth_state = auth_state.clone();
        let deps = (auth_state.authenticated, auth_state.user.is_none());
        use_effect_with(deps, move |(authenticated, user_missing)| {
            if *authenticated && *user_missing {
                let auth_state = auth_state.clone();
                spawn_local(async move {
                    match ProfileService::new().user_info().await {
                        Ok(user) => auth_state.dispatch(AuthAction::UserLoaded(user)),
                        Err(err) => {
                            tracing::warn!(error = %err, "failed to fetch user info");
                        }
                    }
                });
            }
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.authenticated
}
