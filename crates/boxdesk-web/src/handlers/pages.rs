//! Page handlers for serving HTML templates

use axum::response::Html;

/// Dashboard shell; the browser bundle renders everything else
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}
