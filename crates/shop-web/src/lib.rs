//! Ignite Shop Checkout Island
//!
//! The product page itself is generated server-side. This wasm module
//! mounts the interactive buy button into that page, reading the view
//! model the server embedded as a JSON island.

mod api;
mod components;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use shop_core::ProductView;

use crate::components::CheckoutButton;

/// Id of the JSON block the server embeds in the page.
const DATA_ELEMENT_ID: &str = "product-data";

/// Id of the node the button mounts into.
const MOUNT_ELEMENT_ID: &str = "checkout-root";

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let Some(product) = embedded_product() else {
        leptos::logging::error!("product data island not found; checkout disabled");
        return;
    };

    let Some(mount) = mount_node() else {
        leptos::logging::error!("checkout mount node not found");
        return;
    };

    leptos::mount::mount_to(mount, move || view! { <CheckoutButton product=product /> }).forget();
}

/// Read the view model the server embedded in the document.
fn embedded_product() -> Option<ProductView> {
    let document = web_sys::window()?.document()?;
    let json = document.get_element_by_id(DATA_ELEMENT_ID)?.text_content()?;

    match serde_json::from_str(&json) {
        Ok(view) => Some(view),
        Err(e) => {
            leptos::logging::error!("malformed product data: {e}");
            None
        }
    }
}

fn mount_node() -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(MOUNT_ELEMENT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}
