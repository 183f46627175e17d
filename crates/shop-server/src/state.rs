//! Application State

use std::sync::Arc;

use shop_payments::StripeClient;

use crate::config::ShopConfig;
use crate::pages::PageStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Stripe client used for catalog reads and checkout sessions.
    pub stripe: Arc<StripeClient>,

    /// Statically generated pages with revalidation bookkeeping.
    pub pages: Arc<PageStore>,

    /// Server configuration.
    pub config: Arc<ShopConfig>,
}
