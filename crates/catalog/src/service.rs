//! Catalog orchestration: search, pagination, and product CRUD.

use mercato_core::{CatalogError, CatalogResult, PageRequest, PageResult, ProductId};

use crate::filter::{CompositeFilter, ProductFilter};
use crate::product::{NewProduct, Product, ProductPatch};
use crate::store::{FileStorage, NewProductRecord, RecordStore};

/// Uploaded file attached to a create request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Orchestrator over the record store and file storage collaborators.
///
/// Stateless between invocations; collaborators are injected at construction
/// time and own all canonical data.
pub struct CatalogService<S, F> {
    store: S,
    files: F,
}

impl<S, F> CatalogService<S, F>
where
    S: RecordStore,
    F: FileStorage,
{
    pub fn new(store: S, files: F) -> Self {
        Self { store, files }
    }

    /// Every product, paginated. An empty page is a valid outcome here (the
    /// HTTP layer turns it into a no-content response), unlike the search
    /// operations below.
    pub fn list_all(&self, page: &PageRequest) -> CatalogResult<PageResult<Product>> {
        Ok(self.store.query_page(&CompositeFilter::match_all(), page)?)
    }

    /// Case-insensitive substring search on the product name.
    ///
    /// An empty page counts as "no results" even when earlier pages of the
    /// same match set were non-empty.
    pub fn find_by_name(&self, term: &str, page: &PageRequest) -> CatalogResult<PageResult<Product>> {
        let filter = CompositeFilter::new(vec![ProductFilter::NameContains(term.to_string())]);
        let result = self.store.query_page(&filter, page)?;
        if result.is_empty() {
            return Err(CatalogError::search_not_found(Some(term.to_string())));
        }
        Ok(result)
    }

    /// Search by a variable set of optional criteria, AND-combined.
    ///
    /// Absent criteria never narrow the result set. On an empty page the
    /// error carries the search text only when one was supplied.
    pub fn find_by_args(
        &self,
        name: Option<String>,
        max_price: Option<f64>,
        page: &PageRequest,
    ) -> CatalogResult<PageResult<Product>> {
        let filter = CompositeFilter::from_optional([
            ProductFilter::name_contains(name.clone()),
            ProductFilter::price_at_most(max_price),
        ]);
        let result = self.store.query_page(&filter, page)?;
        if result.is_empty() {
            return Err(CatalogError::search_not_found(name));
        }
        Ok(result)
    }

    pub fn get(&self, id: ProductId) -> CatalogResult<Product> {
        self.store
            .product(id)?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Creates a product, archiving the uploaded file (if any) first and
    /// attaching its resolved URL to the new record.
    ///
    /// Not transactional: if the insert fails after the file was archived,
    /// the file is orphaned. An absent or unknown category id yields a
    /// record with no category rather than an error.
    pub fn create(&self, input: NewProduct, file: Option<UploadedFile>) -> CatalogResult<Product> {
        let image = match file {
            Some(f) => {
                let id = self.files.store(&f.name, f.content_type.as_deref(), f.bytes)?;
                Some(self.files.url_for(&id))
            }
            None => None,
        };

        let category = match input.category_id {
            Some(cid) => self.store.category(cid)?,
            None => None,
        };

        let created = self.store.insert_product(NewProductRecord {
            name: input.name,
            price: input.price,
            image,
            category,
        })?;
        tracing::info!(id = %created.id, "product created");
        Ok(created)
    }

    /// Overwrites name and price only; id, image, and category are kept.
    pub fn update(&self, id: ProductId, patch: ProductPatch) -> CatalogResult<Product> {
        let mut product = self.get(id)?;
        product.name = patch.name;
        product.price = patch.price;
        Ok(self.store.update_product(product)?)
    }

    pub fn delete(&self, id: ProductId) -> CatalogResult<()> {
        self.get(id)?;
        self.store.delete_product(id)?;
        tracing::info!(id = %id, "product deleted");
        Ok(())
    }
}
