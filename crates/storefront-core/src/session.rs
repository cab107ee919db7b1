//! Identity collaborator.
//!
//! The shell never inspects the user beyond presence; the concrete record
//! is whatever the host's identity provider hands out.

/// Source of the current user and its loading flag.
pub trait IdentityProvider {
    type User;

    /// The signed-in user, `None` when unauthenticated.
    fn current_user(&self) -> Option<Self::User>;

    /// `true` while the identity check is still pending.
    fn is_loading(&self) -> bool;

    /// Sign out. Fire-and-forget; failures are the provider's concern.
    fn logout(&self);
}
