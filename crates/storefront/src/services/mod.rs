//! Collaborator contracts: session gate and payment gateway.
//!
//! Identity and payment are handled by external providers; this module pins
//! down the minimal contracts the core depends on - a boolean session
//! signal and a charge call - and nothing more.

pub mod auth;
pub mod payment;

pub use auth::{SessionProvider, StaticSession, require_session};
pub use payment::{DryRunGateway, PaymentConfirmation, PaymentError, PaymentGateway, checkout};
