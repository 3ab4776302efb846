use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::privileges::PrivilegeSet;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub privileges: PrivilegeSet,
    /// Set once the `/auth/me` call has settled either way
    pub loaded: bool,
}

/// Auth context provider component
///
/// Resolves the current user once on mount. If that fails the dashboard
/// stays usable read-only: the privilege set is empty, so every mutation
/// is refused on the client.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user) => {
                    log::info!(
                        "Signed in as {} ({} privileges)",
                        user.username,
                        user.privileges.len()
                    );
                    auth_state.set(AuthState {
                        privileges: PrivilegeSet::from_user(&user),
                        user: Some(user),
                        loaded: true,
                    });
                }
                Err(e) => {
                    log::error!("Failed to resolve current user: {}", e);
                    auth_state.update(|s| s.loaded = true);
                }
            }
        });
    });

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}
