//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Product id is not a well-formed Stripe id
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    /// Product does not exist in the catalog
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Provider response did not match the expected shape
    #[error("Malformed product data: {0}")]
    MalformedProduct(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Stripe(_))
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            PaymentError::Stripe(_) => "Payment processing failed. Please try again.",
            PaymentError::InvalidProductId(_) | PaymentError::ProductNotFound(_) => {
                "Product not found."
            }
            PaymentError::MalformedProduct(_) => "Product data is unavailable.",
            PaymentError::Config(_) => "Service configuration error.",
        }
    }
}
