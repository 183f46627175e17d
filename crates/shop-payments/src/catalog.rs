//! Product retrieval from the Stripe catalog.

use serde::{Deserialize, Serialize};
use stripe::{Expandable, Product, ProductId};

use crate::checkout::StripeClient;
use crate::error::{PaymentError, Result};

/// A product as the storefront consumes it: the Stripe product with its
/// default price expanded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub images: Vec<String>,
    pub description: Option<String>,
    pub default_price: CatalogPrice,
}

/// The expanded default price of a catalog product.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogPrice {
    pub id: String,
    /// Amount in minor units (centavos).
    pub unit_amount: i64,
}

impl StripeClient {
    /// Retrieve a product with its default price expanded inline.
    ///
    /// One round trip: `expand: ["default_price"]` embeds the price
    /// object in the product response instead of requiring a second
    /// retrieve. Any response that lacks a name, an expanded price, or a
    /// unit amount is rejected as malformed.
    pub async fn retrieve_product(&self, id: &str) -> Result<CatalogProduct> {
        let product_id: ProductId = id
            .parse()
            .map_err(|_| PaymentError::InvalidProductId(id.to_string()))?;

        let product = Product::retrieve(self.inner(), &product_id, &["default_price"])
            .await
            .map_err(|e| retrieve_error(id, e))?;

        map_product(product)
    }
}

fn retrieve_error(id: &str, err: stripe::StripeError) -> PaymentError {
    match err {
        stripe::StripeError::Stripe(ref request_err) if request_err.http_status == 404 => {
            PaymentError::ProductNotFound(id.to_string())
        }
        other => PaymentError::Stripe(other.to_string()),
    }
}

fn map_product(product: Product) -> Result<CatalogProduct> {
    let name = product
        .name
        .ok_or_else(|| PaymentError::MalformedProduct("product has no name".into()))?;

    let price = match product.default_price {
        Some(Expandable::Object(price)) => *price,
        Some(Expandable::Id(_)) | None => {
            return Err(PaymentError::MalformedProduct(
                "default_price missing or not expanded".into(),
            ));
        }
    };

    let unit_amount = price
        .unit_amount
        .ok_or_else(|| PaymentError::MalformedProduct("default_price has no unit_amount".into()))?;

    Ok(CatalogProduct {
        id: product.id.to_string(),
        name,
        images: product.images.unwrap_or_default(),
        description: product.description,
        default_price: CatalogPrice {
            id: price.id.to_string(),
            unit_amount,
        },
    })
}
