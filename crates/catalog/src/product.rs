use serde::{Deserialize, Serialize};

use mercato_core::{CategoryId, ProductId};

/// Category a product may belong to.
///
/// Read-only from this crate's perspective: categories are seeded into the
/// record store and only ever *resolved* here, never created or edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A catalog product record.
///
/// Identity is assigned by the record store on insertion and immutable
/// thereafter. `price` is non-negative by convention but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// URL of an associated image, if one was uploaded at creation.
    pub image: Option<String>,
    /// Category resolved to the full object by the store.
    pub category: Option<Category>,
}

/// Input for creating a product (identity not yet assigned).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category_id: Option<CategoryId>,
}

/// The only fields revisable after creation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPatch {
    pub name: String,
    pub price: f64,
}
