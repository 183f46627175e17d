//! Ignite Shop HTTP Server
//!
//! Axum-based server that statically generates the product page from
//! Stripe data and exposes the checkout session endpoint. Pages are
//! pre-rendered for a fixed set of products at startup; any other
//! product id is generated on first request.

mod config;
mod generate;
mod handlers;
mod pages;
mod render;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shop_payments::StripeClient;

use crate::config::ShopConfig;
use crate::handlers::{create_checkout, health_check, product_page, success_page};
use crate::pages::PageStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = Arc::new(ShopConfig::from_env());
    let stripe = Arc::new(StripeClient::from_env()?);
    let pages = Arc::new(PageStore::new(config.revalidate));

    let state = AppState {
        stripe,
        pages,
        config: config.clone(),
    };

    // Pre-render the known product set. A failure here fails startup,
    // the same way a failed build-time generation fails the build.
    for id in &config.prerender_products {
        let page = generate::product_page(&state.stripe, id).await?;
        tracing::info!("Pre-rendered product page: {id} ({})", page.view.name);
        state.pages.insert(id.clone(), page);
    }

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Storefront pages
        .route("/product/{id}", get(product_page))
        .route("/success", get(success_page))
        // Checkout API
        .route("/api/checkout", post(create_checkout))
        // Static files (wasm bundle, placeholder assets)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("ignite-shop server running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health        - Health check");
    tracing::info!("  GET  /product/{{id}} - Product page");
    tracing::info!("  GET  /success       - Post-checkout landing");
    tracing::info!("  POST /api/checkout  - Create Stripe checkout");

    axum::serve(listener, app).await?;

    Ok(())
}
