use contracts::shared::api::{describe_failure, ApiError};
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // A stored token opens the shell right away; `me` confirms it afterwards
    let (auth_state, set_auth_state) = signal(AuthState {
        access_token: storage::get_access_token(),
        user_info: None,
    });

    Effect::new(move |_| {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(ApiError::NotAuthenticated) => {
                    log::info!("stored token rejected, back to login");
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
                Err(e) => {
                    // backend unreachable: keep the token, requests will tell
                    log::error!("failed to load current user: {}", e);
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store a fresh session after a successful login
pub fn start_session(set_auth_state: WriteSignal<AuthState>, token: String, user: Option<UserInfo>) {
    storage::save_access_token(&token);
    set_auth_state.set(AuthState {
        access_token: Some(token),
        user_info: user,
    });
}

pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(token) = storage::get_access_token() {
        if let Err(e) = api::logout(&token).await {
            log::error!("logout request failed: {}", e);
        }
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

/// Error text for a failed request. An expired session also drops the
/// token, which sends the user back to the login page.
pub fn failure_message(
    action: &str,
    error: &ApiError,
    set_auth_state: WriteSignal<AuthState>,
) -> String {
    if matches!(error, ApiError::NotAuthenticated) {
        storage::clear_tokens();
        set_auth_state.set(AuthState::default());
    }
    describe_failure(action, error)
}
