//! Browser implementations of the shell collaborators.
//!
//! - [`LocalStore`] - key-value store over localStorage
//! - [`HistoryNavigator`] - History API routing
//! - [`SessionContext`] - identity provider with a persisted session

mod navigation;
mod session;
mod storage;

pub use navigation::HistoryNavigator;
pub use session::SessionContext;
pub use storage::LocalStore;
