use poem::http::StatusCode;
use poem::web::{Data, Path};
use poem::{handler, IntoResponse, Response};

use crate::prelude::*;
use crate::web::charts::Charts;

const CACHE_CONTROL: &str = "public, max-age=86400";

#[handler]
pub async fn get_theme_css() -> impl IntoResponse {
    include_bytes!("static/theme.css")
        .with_content_type("text/css")
        .with_header("Cache-Control", CACHE_CONTROL)
}

#[handler]
pub async fn get_robots_txt() -> impl IntoResponse {
    include_bytes!("static/robots.txt")
        .with_content_type("text/plain")
        .with_header("Cache-Control", CACHE_CONTROL)
}

/// The chart is rendered at startup, so it only changes on restart.
#[handler]
#[instrument(skip_all, level = "debug")]
pub async fn get_chart(Path(language): Path<String>, charts: Data<&Arc<Charts>>) -> Response {
    match charts.get(&language) {
        Some(svg) => svg
            .to_string()
            .with_content_type("image/svg+xml")
            .with_header("Cache-Control", "no-cache")
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
