//! Server configuration from environment variables.

use std::time::Duration;

/// Product pre-rendered by default when `PRERENDER_PRODUCTS` is not set.
const DEFAULT_PRERENDER: &str = "prod_MoAvHE7g2NlaJh";

/// Runtime configuration for the storefront server.
#[derive(Clone, Debug)]
pub struct ShopConfig {
    /// Address to bind, e.g. `0.0.0.0:3000`.
    pub bind_addr: String,

    /// Public base URL, used to build checkout success/cancel URLs.
    pub public_url: String,

    /// Product ids generated at startup (the build-time set).
    pub prerender_products: Vec<String>,

    /// How long a generated page stays fresh before it becomes eligible
    /// for background regeneration.
    pub revalidate: Duration,

    /// Directory served for static assets (wasm bundle, placeholder image).
    pub static_dir: String,
}

impl ShopConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

        let public_url = std::env::var("PUBLIC_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let prerender_products = std::env::var("PRERENDER_PRODUCTS")
            .unwrap_or_else(|_| DEFAULT_PRERENDER.into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        let revalidate = std::env::var("REVALIDATE_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(Duration::from_secs(60 * 60), Duration::from_secs);

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        Self {
            bind_addr,
            public_url,
            prerender_products,
            revalidate,
            static_dir,
        }
    }

    /// URL the buyer lands on after completing checkout.
    pub fn success_url(&self) -> String {
        format!("{}/success", self.public_url)
    }

    /// URL the buyer returns to when abandoning checkout.
    pub fn cancel_url(&self) -> String {
        format!("{}/", self.public_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_return_urls() {
        let config = ShopConfig {
            bind_addr: "0.0.0.0:3000".into(),
            public_url: "https://shop.example".into(),
            prerender_products: vec![DEFAULT_PRERENDER.into()],
            revalidate: Duration::from_secs(3600),
            static_dir: "static".into(),
        };

        assert_eq!(config.success_url(), "https://shop.example/success");
        assert_eq!(config.cancel_url(), "https://shop.example/");
    }
}
