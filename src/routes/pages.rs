// src/routes/pages.rs
use axum::response::Html;

// Templates are compiled into the binary; a missing file fails the build
// instead of turning into a runtime error path.
const INDEX_HTML: &str = include_str!("../../templates/index.html");
const PRIVACY_HTML: &str = include_str!("../../templates/privacy.html");
const TERMS_HTML: &str = include_str!("../../templates/terms.html");

/// Main page with the chat interface.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn privacy_handler() -> Html<&'static str> {
    Html(PRIVACY_HTML)
}

pub async fn terms_handler() -> Html<&'static str> {
    Html(TERMS_HTML)
}
