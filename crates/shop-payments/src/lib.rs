//! # shop-payments
//!
//! Stripe integration for the Ignite Shop storefront.
//!
//! The shop keeps no pricing or payment logic of its own: products and
//! prices live in Stripe, and purchases run through Stripe Checkout
//! (hosted). This crate covers the two calls the storefront needs:
//!
//! - retrieve a product with its default price expanded inline, at page
//!   generation time;
//! - create a hosted checkout session for an existing price and hand back
//!   the URL of Stripe's checkout page.
//!
//! **Flow:** product page → `POST /api/checkout` → redirect to Stripe's
//! hosted page → redirect back to the shop's success URL.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Your Shop  │────▶│  Stripe Hosted  │────▶│  Your Shop  │
//! │  (product)  │     │  Checkout Page  │     │  (success)  │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_payments::{CheckoutRequest, StripeClient};
//!
//! let client = StripeClient::from_env()?;
//!
//! let product = client.retrieve_product("prod_MoAvHE7g2NlaJh").await?;
//!
//! let session = client.create_checkout_session(CheckoutRequest {
//!     price_id: product.default_price.id,
//!     success_url: "https://shop.example/success".into(),
//!     cancel_url: "https://shop.example/".into(),
//! }).await?;
//!
//! // Redirect the buyer to: session.checkout_url
//! ```

mod catalog;
mod checkout;
mod error;

pub use catalog::{CatalogPrice, CatalogProduct};
pub use checkout::{CheckoutRequest, CheckoutSession, StripeClient};
pub use error::{PaymentError, Result};
