//! Browser utilities.
//!
//! - [`dom`] - window, storage, history and hit-testing helpers
//! - [`ListenerGuard`] - event listener removed on drop

pub mod dom;
mod listener;

pub use listener::ListenerGuard;
