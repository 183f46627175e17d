//! Static page generation.
//!
//! The generator resolves a product id against Stripe, builds the view
//! model (formatting the price exactly once), and renders the final HTML
//! document. The result is what the page store caches; a failure here
//! fails the whole request for that path.

use shop_core::ProductView;
use shop_payments::{Result, StripeClient};

use crate::pages::StaticPage;
use crate::render;

/// Generate the page for one product id.
pub async fn product_page(stripe: &StripeClient, id: &str) -> Result<StaticPage> {
    let product = stripe.retrieve_product(id).await?;

    let view = ProductView::new(
        product.id,
        product.name,
        product.images,
        product.description,
        product.default_price.id,
        product.default_price.unit_amount,
    );

    let html = render::product_page(&view);

    Ok(StaticPage::new(view, html))
}
