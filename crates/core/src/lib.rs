//! `mercato-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): typed identifiers, the catalog error model, and the pagination
//! contract shared between the catalog core and the record store.

pub mod error;
pub mod id;
pub mod page;

pub use error::{CatalogError, CatalogResult, StoreError};
pub use id::{CategoryId, ProductId};
pub use page::{PageRequest, PageResult, Sort, SortDirection, SortKey};
