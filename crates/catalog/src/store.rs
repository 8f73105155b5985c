//! Collaborator interfaces: record persistence and binary file storage.
//!
//! The catalog never retains copies of store-owned data across calls; every
//! operation re-queries as needed.

use std::sync::Arc;

use mercato_core::{CategoryId, PageRequest, PageResult, ProductId, StoreError};

use crate::filter::CompositeFilter;
use crate::product::{Category, Product};

/// New-record shape handed to the store; identity is assigned on insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductRecord {
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
    pub category: Option<Category>,
}

/// Persistence collaborator for product and category records.
pub trait RecordStore: Send + Sync {
    fn insert_product(&self, record: NewProductRecord) -> Result<Product, StoreError>;

    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    fn update_product(&self, product: Product) -> Result<Product, StoreError>;

    /// Removes the record; `false` when no record had that id.
    fn delete_product(&self, id: ProductId) -> Result<bool, StoreError>;

    /// One page of products matching `filter`.
    ///
    /// The returned totals reflect the *entire* matching set, not just the
    /// page. The filter is opaque to callers beyond being AND-composable.
    fn query_page(
        &self,
        filter: &CompositeFilter,
        page: &PageRequest,
    ) -> Result<PageResult<Product>, StoreError>;

    fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;

    fn categories(&self) -> Result<Vec<Category>, StoreError>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn insert_product(&self, record: NewProductRecord) -> Result<Product, StoreError> {
        (**self).insert_product(record)
    }

    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).product(id)
    }

    fn update_product(&self, product: Product) -> Result<Product, StoreError> {
        (**self).update_product(product)
    }

    fn delete_product(&self, id: ProductId) -> Result<bool, StoreError> {
        (**self).delete_product(id)
    }

    fn query_page(
        &self,
        filter: &CompositeFilter,
        page: &PageRequest,
    ) -> Result<PageResult<Product>, StoreError> {
        (**self).query_page(filter, page)
    }

    fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        (**self).category(id)
    }

    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        (**self).categories()
    }
}

/// A stored file payload as handed back by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Binary file-storage collaborator.
pub trait FileStorage: Send + Sync {
    /// Archives `bytes` and returns a stable identifier.
    fn store(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, StoreError>;

    /// Public URL under which a stored identifier can be retrieved.
    fn url_for(&self, id: &str) -> String;

    fn retrieve(&self, id: &str) -> Result<Option<StoredFile>, StoreError>;
}

impl<F> FileStorage for Arc<F>
where
    F: FileStorage + ?Sized,
{
    fn store(
        &self,
        original_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, StoreError> {
        (**self).store(original_name, content_type, bytes)
    }

    fn url_for(&self, id: &str) -> String {
        (**self).url_for(id)
    }

    fn retrieve(&self, id: &str) -> Result<Option<StoredFile>, StoreError> {
        (**self).retrieve(id)
    }
}
