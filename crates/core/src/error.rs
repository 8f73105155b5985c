//! Catalog error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failure surfaced by a persistence or file-storage collaborator.
///
/// These propagate untouched to the boundary; the core never catches or
/// retries them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The collaborator could not be reached or is unusable.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A storage-level constraint was violated.
    #[error("constraint violated: {0}")]
    Constraint(String),
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}

/// Catalog-level error.
///
/// A plain `list_all` returning zero rows is *not* an error; only lookups by
/// identity and filtered searches signal failure here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A lookup by identity failed. Carries the requested id.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// A filtered search yielded zero matches. Carries the search term when
    /// one was supplied.
    #[error("{}", search_message(.0))]
    SearchNotFound(Option<String>),

    /// Collaborator failure (record store / file storage).
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn search_message(term: &Option<String>) -> String {
    match term {
        Some(term) => format!("search for '{term}' produced no results"),
        None => String::from("product search produced no results"),
    }
}

impl CatalogError {
    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn search_not_found(term: Option<String>) -> Self {
        Self::SearchNotFound(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_not_found_message_carries_the_term_when_supplied() {
        let with_term = CatalogError::search_not_found(Some("zz".to_string()));
        assert_eq!(with_term.to_string(), "search for 'zz' produced no results");

        let without = CatalogError::search_not_found(None);
        assert_eq!(without.to_string(), "product search produced no results");
    }

    #[test]
    fn not_found_message_names_the_id() {
        let err = CatalogError::not_found(ProductId::new(9));
        assert_eq!(err.to_string(), "product 9 not found");
    }

    #[test]
    fn store_errors_convert_transparently() {
        let err: CatalogError = StoreError::unavailable("connection refused").into();
        assert_eq!(err.to_string(), "store unavailable: connection refused");
    }
}
