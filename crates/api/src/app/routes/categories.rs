use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use mercato_catalog::store::RecordStore;

use crate::app::{AppServices, errors};

pub fn router() -> Router {
    Router::new().route("/category", get(list_categories))
}

/// `GET /category` — the seeded category list (read-only).
pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store.categories() {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            e.to_string(),
        ),
    }
}
