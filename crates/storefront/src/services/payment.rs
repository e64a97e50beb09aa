//! Payment collaborator contract and checkout flow.
//!
//! The payment provider is external; the core hands it a display-rounded
//! total and a payment-method token and gets back success or failure.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use clementine_core::pricing;

use crate::error::AppError;
use crate::storage::LocalStore;
use crate::store::CartStore;

/// Errors reported by the payment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    /// The provider declined the charge.
    #[error("payment declined: {0}")]
    Declined(String),

    /// The payment-method token was not accepted.
    #[error("invalid payment token")]
    InvalidToken,

    /// The provider was unreachable.
    #[error("payment provider unavailable: {0}")]
    Unavailable(String),
}

/// Successful charge details returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    /// Amount actually charged, in display precision.
    pub amount: Decimal,
    /// Provider reference for the charge.
    pub reference: String,
}

/// The charge contract a payment provider implements.
pub trait PaymentGateway {
    /// Charge `amount` against the given payment-method token.
    fn charge(
        &self,
        amount: Decimal,
        payment_token: &str,
    ) -> impl Future<Output = Result<PaymentConfirmation, PaymentError>> + Send;
}

/// Charge the cart's subtotal through the gateway.
///
/// The total is the cart subtotal rounded to display precision - the amount
/// the user sees is the amount charged. The cart itself is left untouched;
/// clearing after a successful payment is the caller's decision.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an empty cart, or the gateway's
/// `PaymentError` on a failed charge.
pub async fn checkout<S, G>(
    cart: &CartStore<S>,
    gateway: &G,
    payment_token: &str,
) -> Result<PaymentConfirmation, AppError>
where
    S: LocalStore,
    G: PaymentGateway,
{
    if cart.is_empty() {
        return Err(AppError::BadRequest(
            "cannot check out an empty cart".to_string(),
        ));
    }

    let total = pricing::display(cart.subtotal());
    let confirmation = gateway.charge(total, payment_token).await?;
    info!(amount = %confirmation.amount, reference = %confirmation.reference, "Payment confirmed");
    Ok(confirmation)
}

/// Gateway that approves every charge without contacting a provider.
///
/// Used by the CLI's dry-run checkout.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunGateway;

impl PaymentGateway for DryRunGateway {
    async fn charge(
        &self,
        amount: Decimal,
        _payment_token: &str,
    ) -> Result<PaymentConfirmation, PaymentError> {
        Ok(PaymentConfirmation {
            amount,
            reference: format!("dry-run-{}", Utc::now().timestamp_millis()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use clementine_core::{Product, ProductId};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn product(id: i64, base: &str, pct: &str) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            dec(base),
            dec(pct),
            String::new(),
            "beauty".to_string(),
            String::new(),
            4.0,
        )
        .unwrap()
    }

    /// Gateway that declines everything.
    struct DecliningGateway;

    impl PaymentGateway for DecliningGateway {
        async fn charge(
            &self,
            _amount: Decimal,
            _payment_token: &str,
        ) -> Result<PaymentConfirmation, PaymentError> {
            Err(PaymentError::Declined("insufficient funds".to_string()))
        }
    }

    #[tokio::test]
    async fn test_checkout_charges_display_rounded_subtotal() {
        let mut cart = CartStore::new(MemoryStore::new());
        // 9.99 at 7.17% off = 9.2737... per unit; three units.
        let p = product(1, "9.99", "7.17");
        cart.add_item(&p);
        cart.add_item(&p);
        cart.add_item(&p);

        let confirmation = checkout(&cart, &DryRunGateway, "tok_visa").await.unwrap();
        assert_eq!(confirmation.amount, pricing::display(cart.subtotal()));
        assert_eq!(confirmation.amount, confirmation.amount.round_dp(2));
    }

    #[tokio::test]
    async fn test_checkout_refuses_empty_cart() {
        let cart = CartStore::new(MemoryStore::new());
        let err = checkout(&cart, &DryRunGateway, "tok_visa").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_checkout_surfaces_decline() {
        let mut cart = CartStore::new(MemoryStore::new());
        cart.add_item(&product(1, "10", "0"));
        let err = checkout(&cart, &DecliningGateway, "tok_visa").await.unwrap_err();
        assert!(matches!(err, AppError::Payment(PaymentError::Declined(_))));
    }

    #[tokio::test]
    async fn test_checkout_leaves_cart_untouched() {
        let mut cart = CartStore::new(MemoryStore::new());
        cart.add_item(&product(1, "10", "0"));
        checkout(&cart, &DryRunGateway, "tok_visa").await.unwrap();
        assert_eq!(cart.len(), 1);
    }
}
