use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use mercato_core::CatalogError;

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match &err {
        CatalogError::NotFound(_) => json_error(StatusCode::NOT_FOUND, "not_found", err.to_string()),
        CatalogError::SearchNotFound(_) => {
            json_error(StatusCode::NOT_FOUND, "search_not_found", err.to_string())
        }
        CatalogError::Store(_) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            err.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
