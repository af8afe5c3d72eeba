//! Server-rendered views

use axum::response::Html;
use handlebars::Handlebars;
use once_cell::sync::Lazy;

static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut registry = Handlebars::new();
    let templates = [
        ("home", include_str!("../../templates/home.hbs")),
        ("catalog/root", include_str!("../../templates/catalog_root.hbs")),
        (
            "catalog/book-detail",
            include_str!("../../templates/catalog_book_detail.hbs"),
        ),
        ("error", include_str!("../../templates/error.hbs")),
    ];
    for (name, template) in templates {
        registry
            .register_template_string(name, template)
            .expect("invalid template");
    }
    registry
});

pub fn render(name: &str, context: &serde_json::Value) -> Html<String> {
    match TEMPLATES.render(name, context) {
        Ok(body) => Html(body),
        Err(err) => {
            tracing::error!("Failed to render view {name}: {err}");
            Html("<!DOCTYPE html><html><body><h1>Something went wrong</h1></body></html>".to_string())
        }
    }
}
