//! HTTP application wiring (Axum router + service wiring).
//!
//! Folder layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping
//! - `errors.rs`: consistent error responses
//! - `links.rs`: pagination `link` response headers

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use url::Url;

use mercato_catalog::product::Category;
use mercato_catalog::service::CatalogService;
use mercato_core::CategoryId;
use mercato_store::{InMemoryFileStorage, InMemoryRecordStore};

pub mod dto;
pub mod errors;
pub mod links;
pub mod routes;

/// Catalog service over the in-memory collaborators.
pub type AppCatalog = CatalogService<Arc<InMemoryRecordStore>, Arc<InMemoryFileStorage>>;

/// Shared per-app state handed to handlers via `Extension`.
pub struct AppServices {
    pub catalog: AppCatalog,
    pub store: Arc<InMemoryRecordStore>,
    pub files: Arc<InMemoryFileStorage>,
    /// External base URL for `link` headers when running behind a proxy;
    /// read once at startup.
    pub public_url: Option<Url>,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Collaborators are constructed and injected explicitly here; there is no
/// global registry.
pub fn build_app(public_url: Option<Url>) -> Router {
    let store = Arc::new(InMemoryRecordStore::with_categories(default_categories()));
    let files = Arc::new(InMemoryFileStorage::new());
    let catalog = CatalogService::new(Arc::clone(&store), Arc::clone(&files));

    let services = Arc::new(AppServices {
        catalog,
        store,
        files,
        public_url,
    });

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}

fn default_categories() -> Vec<Category> {
    vec![
        Category::new(CategoryId::new(1), "Electronics"),
        Category::new(CategoryId::new(2), "Furniture"),
        Category::new(CategoryId::new(3), "Office"),
    ]
}
