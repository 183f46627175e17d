//! API Client

/// Create a checkout session for a price and return the redirect URL.
///
/// Any non-2xx status or unexpected body shape is an error; the caller
/// decides how to surface it. There is no retry and no timeout beyond
/// the transport default.
pub async fn create_checkout(price_id: &str) -> Result<String, String> {
    let client = reqwest::Client::new();

    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    let body = serde_json::json!({
        "priceId": price_id,
    });

    let response = client
        .post(format!("{origin}/api/checkout"))
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("checkout failed with status {}", response.status()));
    }

    let data: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;

    match data["checkoutUrl"].as_str() {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err("checkout response missing checkoutUrl".into()),
    }
}
