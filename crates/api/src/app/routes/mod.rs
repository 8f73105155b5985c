use axum::Router;

pub mod categories;
pub mod files;
pub mod products;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .merge(products::router())
        .merge(categories::router())
        .merge(files::router())
}
