//! `mercato-catalog` — catalog domain: products, search criteria, and the
//! orchestrating service.
//!
//! Persistence and file storage are collaborator traits (`store` module);
//! implementations live in `mercato-store`.

pub mod filter;
pub mod product;
pub mod service;
pub mod store;

pub use filter::{CompositeFilter, ProductFilter};
pub use product::{Category, NewProduct, Product, ProductPatch};
pub use service::{CatalogService, UploadedFile};
pub use store::{FileStorage, NewProductRecord, RecordStore, StoredFile};
