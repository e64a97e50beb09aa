//! Session collaborator contract.
//!
//! The authentication provider is external; the whole application is gated
//! on a single boolean "is a session active" signal.

use crate::error::AppError;

/// Supplies the session-active signal.
pub trait SessionProvider {
    /// Whether a user session is currently active.
    fn is_active(&self) -> bool;
}

/// A fixed session state, for front ends that resolve the signal up front
/// and for tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticSession(pub bool);

impl SessionProvider for StaticSession {
    fn is_active(&self) -> bool {
        self.0
    }
}

/// Gate an operation on an active session.
///
/// # Errors
///
/// Returns `AppError::Unauthorized` when no session is active.
pub fn require_session<P: SessionProvider>(provider: &P) -> Result<(), AppError> {
    if provider.is_active() {
        Ok(())
    } else {
        Err(AppError::Unauthorized("no active session".to_string()))
    }
}
