//! In-memory collaborators for tests.
//!
//! Each fake is a cheap handle over shared state, so a test can hand one
//! clone to the [`ShellController`](crate::ShellController) and keep another
//! to inspect what happened.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;
use crate::navigation::{NavigateOptions, Navigator};
use crate::session::IdentityProvider;
use crate::storage::KeyValueStore;

// ============================================================================
// MemoryStore
// ============================================================================

#[derive(Debug, Default)]
struct StoreState {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

/// HashMap-backed [`KeyValueStore`] with injectable failures.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Rc<RefCell<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `get` fail with [`StorageError::Unavailable`].
    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    /// Make every `set`/`remove` fail.
    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.state.borrow().entries.clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(StorageError::Unavailable);
        }
        Ok(state.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(StorageError::WriteFailed(key.to_string()));
        }
        state.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(StorageError::RemoveFailed(key.to_string()));
        }
        state.entries.remove(key);
        Ok(())
    }
}

// ============================================================================
// RecordingNavigator
// ============================================================================

/// A navigation performed through [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationRecord {
    Soft {
        path: String,
        options: NavigateOptions,
    },
    Hard {
        path: String,
    },
}

#[derive(Debug, Default)]
struct NavigatorState {
    current: String,
    records: Vec<NavigationRecord>,
}

/// [`Navigator`] that records every call and tracks the current path.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    state: Rc<RefCell<NavigatorState>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        let navigator = Self::default();
        navigator.state.borrow_mut().current = path.to_string();
        navigator
    }

    /// Simulate a navigation the shell did not initiate (back button, link).
    pub fn set_path(&self, path: &str) {
        self.state.borrow_mut().current = path.to_string();
    }

    pub fn records(&self) -> Vec<NavigationRecord> {
        self.state.borrow().records.clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.state.borrow().current.clone()
    }

    fn navigate(&self, path: &str, options: NavigateOptions) {
        let mut state = self.state.borrow_mut();
        state.current = path.to_string();
        state.records.push(NavigationRecord::Soft {
            path: path.to_string(),
            options,
        });
    }

    fn hard_navigate(&self, path: &str) {
        let mut state = self.state.borrow_mut();
        state.current = path.to_string();
        state.records.push(NavigationRecord::Hard {
            path: path.to_string(),
        });
    }
}

// ============================================================================
// FakeIdentity
// ============================================================================

#[derive(Debug)]
struct IdentityState<U> {
    user: Option<U>,
    loading: bool,
    logout_calls: usize,
}

/// Scriptable [`IdentityProvider`].
#[derive(Debug)]
pub struct FakeIdentity<U> {
    state: Rc<RefCell<IdentityState<U>>>,
}

impl<U> Clone for FakeIdentity<U> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<U> FakeIdentity<U> {
    /// Identity check still pending, no user.
    pub fn loading() -> Self {
        Self {
            state: Rc::new(RefCell::new(IdentityState {
                user: None,
                loading: true,
                logout_calls: 0,
            })),
        }
    }

    /// Identity check already resolved.
    pub fn resolved(user: Option<U>) -> Self {
        let identity = Self::loading();
        identity.resolve(user);
        identity
    }

    /// Finish the identity check with `user`.
    pub fn resolve(&self, user: Option<U>) {
        let mut state = self.state.borrow_mut();
        state.user = user;
        state.loading = false;
    }

    pub fn set_user(&self, user: Option<U>) {
        self.state.borrow_mut().user = user;
    }

    pub fn set_loading(&self, loading: bool) {
        self.state.borrow_mut().loading = loading;
    }

    pub fn logout_calls(&self) -> usize {
        self.state.borrow().logout_calls
    }
}

impl<U: Clone> IdentityProvider for FakeIdentity<U> {
    type User = U;

    fn current_user(&self) -> Option<U> {
        self.state.borrow().user.clone()
    }

    fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    fn logout(&self) {
        let mut state = self.state.borrow_mut();
        state.user = None;
        state.logout_calls += 1;
    }
}
