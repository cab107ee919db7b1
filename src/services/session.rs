//! Browser identity provider.
//!
//! Holds the signed-in user in signals and mirrors it to localStorage so a
//! reload keeps the session. The stored record is restored asynchronously at
//! startup; until then the provider reports `is_loading`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{IdentityProvider, KeyValueStore, StorageError};

use crate::config::SESSION_STORAGE_KEY;
use crate::models::User;
use crate::services::LocalStore;

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<User>>,
    pub loading: RwSignal<bool>,
}

impl SessionContext {
    /// New provider in the loading state.
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    /// Resolve the identity check from the persisted session.
    pub fn restore(self) {
        spawn_local(async move {
            let user = match load_session(&LocalStore) {
                Ok(user) => user,
                Err(err) => {
                    tracing::warn!(%err, "discarding stored session");
                    let _ = LocalStore.remove(SESSION_STORAGE_KEY);
                    None
                }
            };
            tracing::debug!(signed_in = user.is_some(), "session restored");
            self.user.set(user);
            self.loading.set(false);
        });
    }

    /// Persist and activate `user`.
    pub fn sign_in(&self, user: User) {
        if let Err(err) = save_session(&LocalStore, &user) {
            tracing::warn!(%err, "session not persisted");
        }
        tracing::info!(name = %user.name, role = %user.role, "signed in");
        self.user.set(Some(user));
        self.loading.set(false);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for SessionContext {
    type User = User;

    fn current_user(&self) -> Option<User> {
        self.user.get()
    }

    fn is_loading(&self) -> bool {
        self.loading.get()
    }

    fn logout(&self) {
        if let Err(err) = LocalStore.remove(SESSION_STORAGE_KEY) {
            tracing::warn!(%err, "failed to clear stored session");
        }
        self.user.set(None);
    }
}

fn load_session(store: &impl KeyValueStore) -> Result<Option<User>, StorageError> {
    match store.get(SESSION_STORAGE_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn save_session(store: &impl KeyValueStore, user: &User) -> Result<(), StorageError> {
    store.set(SESSION_STORAGE_KEY, &serde_json::to_string(user)?)
}

#[cfg(test)]
mod tests {
    use storefront_core::Role;
    use storefront_core::mock::MemoryStore;

    use super::*;

    fn ana() -> User {
        User {
            name: "Ana Lima".to_string(),
            email: "ana@example.com".to_string(),
            role: Role::SuperAdmin,
        }
    }

    #[test]
    fn test_session_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(load_session(&store), Ok(None));

        save_session(&store, &ana()).unwrap();
        assert_eq!(load_session(&store), Ok(Some(ana())));
    }

    #[test]
    fn test_corrupt_session_is_an_error() {
        let store = MemoryStore::new();
        store.set(SESSION_STORAGE_KEY, "{\"name\":1}").unwrap();
        assert!(matches!(load_session(&store), Err(StorageError::Codec(_))));
    }
}
