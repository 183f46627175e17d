//! Server-side HTML rendering for storefront pages.
//!
//! Pages are rendered to complete documents at generation time and
//! cached as strings; nothing here runs per request.

use shop_core::ProductView;

/// Shop name used in page titles.
pub const SHOP_NAME: &str = "Ignite Shop";

/// Asset served when a product has no images.
const PLACEHOLDER_IMAGE: &str = "/assets/product-placeholder.svg";

/// Render the complete product page document.
///
/// The document carries the view model twice: once as markup, once as a
/// JSON island the checkout wasm module reads back to wire up the buy
/// button.
pub fn product_page(view: &ProductView) -> String {
    let title = format!("{} | {}", view.name, SHOP_NAME);
    let image_url = view.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE);
    let description = view.description.as_deref().unwrap_or("");

    // `<` must not appear inside the inline JSON block.
    let island_data = serde_json::to_string(view)
        .unwrap_or_else(|_| "{}".into())
        .replace('<', "\\u003c");

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>{styles}</style>
</head>
<body>
    <main class="product">
        <div class="product-image">
            <img src="{image}" width="520" height="480" alt="">
        </div>
        <div class="product-details">
            <h1>{name}</h1>
            <span class="product-price">{price}</span>
            <p class="product-description">{description}</p>
            <div id="checkout-root"></div>
        </div>
    </main>
    <script type="application/json" id="product-data">{island_data}</script>
    <script type="module">import init from "/pkg/shop_web.js"; init();</script>
</body>
</html>"#,
        title = escape_html(&title),
        styles = PRODUCT_STYLES,
        image = escape_html(image_url),
        name = escape_html(&view.name),
        price = escape_html(&view.price),
        description = escape_html(description),
        island_data = island_data,
    )
}

/// Render the page shown when the hosted checkout redirects back.
pub fn success_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Compra efetuada | {SHOP_NAME}</title>
    <style>{PRODUCT_STYLES}</style>
</head>
<body>
    <main class="message-page">
        <h1>Compra efetuada!</h1>
        <p>Sua compra foi confirmada. Obrigado por comprar na {SHOP_NAME}.</p>
        <a href="/">Voltar ao catalogo</a>
    </main>
</body>
</html>"#
    )
}

/// Render the opaque error page for a failed generation.
pub fn error_page(status: u16) -> String {
    let reason = match status {
        404 => "Pagina nao encontrada",
        _ => "Erro interno do servidor",
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="utf-8">
    <title>{status} | {SHOP_NAME}</title>
    <style>{PRODUCT_STYLES}</style>
</head>
<body>
    <main class="message-page">
        <h1>{status}</h1>
        <p>{reason}</p>
    </main>
</body>
</html>"#
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const PRODUCT_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; }
body { font-family: Roboto, -apple-system, sans-serif; background: #121214; color: #e1e1e6; }
.product { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; max-width: 1180px; margin: 0 auto; padding: 4rem 1rem; align-items: stretch; }
.product-image { background: linear-gradient(180deg, #1ea483 0%, #7465d4 100%); border-radius: 8px; display: flex; align-items: center; justify-content: center; }
.product-image img { object-fit: cover; max-width: 100%; height: auto; }
.product-details { display: flex; flex-direction: column; }
.product-details h1 { font-size: 2rem; color: #e1e1e6; }
.product-price { margin-top: 1rem; font-size: 2rem; color: #00b37e; }
.product-description { margin-top: 2.5rem; font-size: 1.125rem; line-height: 1.6; color: #c4c4cc; }
.buy-button { margin-top: auto; background: #00875f; border: 0; color: #fff; border-radius: 8px; padding: 1.25rem; cursor: pointer; font-weight: bold; font-size: 1.125rem; }
.buy-button:hover { background: #015f43; }
.buy-button:disabled { opacity: 0.6; cursor: not-allowed; }
.message-page { max-width: 560px; margin: 0 auto; padding: 6rem 1rem; text-align: center; }
.message-page h1 { font-size: 2rem; }
.message-page p { margin-top: 2rem; font-size: 1.25rem; line-height: 1.4; color: #c4c4cc; }
.message-page a { display: block; margin-top: 4rem; color: #00b37e; font-weight: bold; text-decoration: none; }
"#;

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
    fn test_title_includes_product_and_shop_name() {
        let html = product_page(&sample_view());
        assert!(html.contains("<title>Camiseta Beyond the Limits | Ignite Shop</title>"));
    }

    #[test]
    fn test_page_shows_formatted_price() {
        let html = product_page(&sample_view());
        assert!(html.contains("R$ 799,00"));
    }

    #[test]
    fn test_image_has_fixed_dimensions_and_empty_alt() {
        let html = product_page(&sample_view());
        assert!(html.contains(
            r#"<img src="https://files.stripe.com/shirt-1.png" width="520" height="480" alt="">"#
        ));
    }

    #[test]
    fn test_missing_image_renders_placeholder() {
        let view = ProductView::new("prod_1", "Caneca", vec![], None, "price_1", 2500);
        let html = product_page(&view);
        assert!(html.contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_markup_is_escaped() {
        let view = ProductView::new(
            "prod_1",
            "Caneca <script>alert(1)</script>",
            vec![],
            None,
            "price_1",
            2500,
        );
        let html = product_page(&view);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_island_json_present_once_with_price_id() {
        let html = product_page(&sample_view());
        assert_eq!(html.matches(r#"id="product-data""#).count(), 1);
        assert!(html.contains(r#""defaultPrice":"price_1MEKsB""#));
    }

    #[test]
    fn test_island_json_never_embeds_raw_angle_bracket() {
        let view = ProductView::new(
            "prod_1",
            "Caneca </script><b>",
            vec![],
            None,
            "price_1",
            2500,
        );
        let html = product_page(&view);
        assert!(!html.contains("</script><b>"));
    }

    #[test]
    fn test_error_page_is_opaque() {
        let html = error_page(500);
        assert!(html.contains("500"));
        assert!(!html.contains("Stripe"));
    }
}
