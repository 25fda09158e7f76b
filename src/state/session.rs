use leptos::*;

use crate::domain::Profile;

/// Session context owning the single in-memory profile.
///
/// The profile is replaced wholesale on submission and cleared on restart;
/// views read it through this context and never mutate it in place.
#[derive(Clone, Copy)]
pub struct SessionContext {
    profile: RwSignal<Option<Profile>>,
}

impl SessionContext {
    /// Reactive read of the current profile
    pub fn profile(&self) -> Option<Profile> {
        self.profile.get()
    }

    /// Install a freshly normalized profile, replacing any previous one
    pub fn replace(&self, profile: Profile) {
        self.profile.set(Some(profile));
    }

    /// Discard the profile. Restart always goes through here; there is no
    /// partial reset.
    pub fn clear(&self) {
        self.profile.set(None);
    }
}

/// Provide the session context at the root of the app
pub fn provide_session_context() {
    provide_context(SessionContext {
        profile: create_rw_signal(None),
    });
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext must be provided by a parent component")
}
