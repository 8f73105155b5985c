use std::sync::Arc;

use axum::{
    Router,
    extract::{Extension, Path},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use mercato_catalog::store::FileStorage;

use crate::app::{AppServices, errors};

pub fn router() -> Router {
    Router::new().route("/files/:id", get(serve_file))
}

/// `GET /files/{id}` — serves an archived upload (product images).
pub async fn serve_file(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.files.retrieve(&id) {
        Ok(Some(file)) => {
            let content_type = file
                .content_type
                .unwrap_or_else(|| "application/octet-stream".to_string());
            ([(header::CONTENT_TYPE, content_type)], file.bytes).into_response()
        }
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("file {id} not found"),
        ),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            e.to_string(),
        ),
    }
}
