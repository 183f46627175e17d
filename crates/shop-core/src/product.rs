//! Product view model.

use serde::{Deserialize, Serialize};

use crate::money;

/// View model a product page is rendered from.
///
/// Built once per generation pass from provider data and never mutated
/// afterwards; the next regeneration replaces it wholesale. `price` is
/// formatted here, at construction time, so the page lifetime carries a
/// single immutable display string.
///
/// Serialized camelCase because the server embeds it in the page for the
/// checkout island to read back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    /// Opaque provider product id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// First image URL from the provider's image list, if any. Rendering
    /// falls back to a placeholder asset when the list was empty.
    pub image_url: Option<String>,

    /// Locale-formatted price string (pt-BR, BRL).
    pub price: String,

    /// Free-text description, may be absent.
    pub description: Option<String>,

    /// Provider price id, handed back to the checkout trigger.
    pub default_price: String,
}

impl ProductView {
    /// Build the view model from provider data.
    ///
    /// `unit_amount` is the price in centavos.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        images: Vec<String>,
        description: Option<String>,
        default_price: impl Into<String>,
        unit_amount: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: images.into_iter().next(),
            price: money::format_brl(unit_amount),
            description,
            default_price: default_price.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> ProductView {
        ProductView::new(
            "prod_MoAvHE7g2NlaJh",
            "Camiseta Beyond the Limits",
            vec!["https://files.stripe.com/shirt-1.png".into()],
            Some("Camiseta confortavel".into()),
            "price_1MEKsB",
            79900,
        )
    }

    #[test]
    fn test_price_formatted_at_construction() {
        let view = sample_view();
        assert_eq!(view.price, "R$ 799,00");
    }

    #[test]
    fn test_first_image_selected() {
        let view = ProductView::new(
            "prod_1",
            "Caneca",
            vec!["https://a.png".into(), "https://b.png".into()],
            None,
            "price_1",
            100,
        );
        assert_eq!(view.image_url.as_deref(), Some("https://a.png"));
    }

    #[test]
    fn test_empty_image_list_is_none() {
        let view = ProductView::new("prod_1", "Caneca", vec![], None, "price_1", 100);
        assert_eq!(view.image_url, None);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample_view()).unwrap();
        assert_eq!(json["imageUrl"], "https://files.stripe.com/shirt-1.png");
        assert_eq!(json["defaultPrice"], "price_1MEKsB");
        assert_eq!(json["price"], "R$ 799,00");
    }

    #[test]
    fn test_round_trips_through_json() {
        let view = sample_view();
        let json = serde_json::to_string(&view).unwrap();
        let back: ProductView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
