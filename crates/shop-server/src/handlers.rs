//! HTTP Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use shop_payments::{CheckoutRequest, PaymentError};

use crate::generate;
use crate::pages::PageLookup;
use crate::render;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub pages_cached: usize,
}

/// Body of `POST /api/checkout`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    pub price_id: String,
}

/// Success body of `POST /api/checkout`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub checkout_url: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        pages_cached: state.pages.len(),
    })
}

/// Product page route.
///
/// Serves the generated page for the id. An id never generated before is
/// generated now, with the request blocking until the page is complete;
/// a page past its revalidation window is served stale while one
/// background regeneration runs.
pub async fn product_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.pages.lookup(&id) {
        PageLookup::Fresh(html) => Html(html).into_response(),
        PageLookup::Stale(html) => {
            spawn_revalidate(state, id);
            Html(html).into_response()
        }
        PageLookup::Miss => match generate::product_page(&state.stripe, &id).await {
            Ok(page) => {
                tracing::info!("Generated page for {id} ({})", page.view.name);
                let html = page.html.clone();
                state.pages.insert(id, page);
                Html(html).into_response()
            }
            Err(e) => generation_failure(&id, &e),
        },
    }
}

fn spawn_revalidate(state: AppState, id: String) {
    if !state.pages.try_begin_revalidate(&id) {
        return;
    }

    tokio::spawn(async move {
        match generate::product_page(&state.stripe, &id).await {
            Ok(page) => {
                state.pages.insert(id.clone(), page);
                tracing::debug!("Revalidated page for {id}");
            }
            // The stale page stays in the store and keeps being served.
            Err(e) => tracing::warn!("Revalidation failed for {id}: {e}"),
        }
        state.pages.finish_revalidate(&id);
    });
}

fn generation_failure(id: &str, err: &PaymentError) -> Response {
    let status = match err {
        PaymentError::ProductNotFound(_) | PaymentError::InvalidProductId(_) => {
            StatusCode::NOT_FOUND
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    tracing::error!("Page generation failed for {id}: {err}");

    (status, Html(render::error_page(status.as_u16()))).into_response()
}

/// Create a Stripe checkout session and return its redirect URL.
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutPayload>,
) -> Result<Json<CheckoutResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request = CheckoutRequest {
        price_id: payload.price_id,
        success_url: state.config.success_url(),
        cancel_url: state.config.cancel_url(),
    };

    let session = state
        .stripe
        .create_checkout_session(request)
        .await
        .map_err(|e| {
            tracing::error!("Checkout error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.user_message().into(),
                    code: "CHECKOUT_ERROR".into(),
                }),
            )
        })?;

    Ok(Json(CheckoutResponse {
        checkout_url: session.checkout_url,
    }))
}

/// Landing page for the hosted checkout's success redirect.
pub async fn success_page() -> Html<String> {
    Html(render::success_page())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_payload_uses_camel_case() {
        let payload: CheckoutPayload =
            serde_json::from_str(r#"{"priceId":"price_1MEKsB"}"#).unwrap();
        assert_eq!(payload.price_id, "price_1MEKsB");
    }

    #[test]
    fn test_checkout_payload_rejects_snake_case() {
        assert!(serde_json::from_str::<CheckoutPayload>(r#"{"price_id":"price_1"}"#).is_err());
    }

    #[test]
    fn test_checkout_response_shape() {
        let body = serde_json::to_value(CheckoutResponse {
            checkout_url: "https://checkout.example/abc".into(),
        })
        .unwrap();
        assert_eq!(body["checkoutUrl"], "https://checkout.example/abc");
    }

    #[test]
    fn test_generation_failure_status_mapping() {
        let not_found = generation_failure("prod_x", &PaymentError::ProductNotFound("prod_x".into()));
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let upstream = generation_failure("prod_x", &PaymentError::Stripe("boom".into()));
        assert_eq!(upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
