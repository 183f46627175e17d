//! UI Components

use leptos::prelude::*;

use shop_core::ProductView;

use crate::api;

/// Alert shown when the checkout call fails.
const CHECKOUT_FAILED_MESSAGE: &str = "Falha ao redirecionar ao checkout";

/// Buy button wired to the hosted checkout flow.
///
/// One boolean signal tracks the in-flight session creation: while set,
/// the button is disabled and shows a loading label, so a buyer cannot
/// issue duplicate checkout requests. On success the browser performs a
/// full-page navigation to Stripe; the flag is deliberately left set
/// until the page unloads.
#[component]
pub fn CheckoutButton(product: ProductView) -> impl IntoView {
    let (creating_checkout, set_creating_checkout) = signal(false);
    let price_id = product.default_price.clone();

    let buy = move |_| {
        if creating_checkout.get() {
            return;
        }
        set_creating_checkout.set(true);

        let price_id = price_id.clone();
        leptos::task::spawn_local(async move {
            match api::create_checkout(&price_id).await {
                Ok(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                Err(e) => {
                    set_creating_checkout.set(false);
                    leptos::logging::error!("checkout failed: {e}");
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(CHECKOUT_FAILED_MESSAGE);
                    }
                }
            }
        });
    };

    view! {
        <button class="buy-button" on:click=buy disabled=move || creating_checkout.get()>
            {move || if creating_checkout.get() { "Redirecionando..." } else { "Comprar agora" }}
        </button>
    }
}
