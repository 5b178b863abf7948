use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::{api, storage};

/// Application-level session state. Set on login, cleared on logout;
/// components read it through the context instead of poking at storage.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore a stored session before the first render so a reload does
    // not bounce through the login page.
    let initial = match storage::load_session() {
        Some((token, user)) => AuthState {
            token: Some(token),
            user: Some(user),
        },
        None => AuthState::default(),
    };
    let (auth_state, set_auth_state) = signal(initial);

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

/// Perform login: verify credentials server-side, then persist and expose
/// the session. Nothing is stored on failure.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    correo: String,
    contrasena: String,
) -> Result<(), api::LoginError> {
    let response = api::login(correo, contrasena).await?;

    storage::save_session(&response.access_token, &response.usuario);
    set_auth_state.set(AuthState {
        token: Some(response.access_token),
        user: Some(response.usuario),
    });

    Ok(())
}

/// Perform logout: clear the stored session and the context.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
