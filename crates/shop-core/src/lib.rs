//! # shop-core
//!
//! Shared domain types for the Ignite Shop storefront.
//!
//! The shop owns no catalog of its own: products and prices live in the
//! payment provider. What lives here is the view model a generated page
//! is rendered from, and the currency formatting that turns the
//! provider's minor-unit amounts into display strings. The crate is kept
//! dependency-light so it compiles for both the server and the wasm
//! frontend.

pub mod money;
pub mod product;

pub use product::ProductView;
