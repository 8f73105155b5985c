//! Dynamic search criteria over the product set.
//!
//! Each `ProductFilter` is one optional criterion; `CompositeFilter` is the
//! AND-composition of any number of them. An absent criterion contributes
//! nothing and never narrows the result set.

use crate::product::Product;

/// One matching criterion over products.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    /// Case-insensitive substring match on the product name.
    NameContains(String),
    /// Price less than or equal to the given bound.
    PriceAtMost(f64),
}

impl ProductFilter {
    /// Name criterion, present only when a term was supplied.
    pub fn name_contains(term: Option<String>) -> Option<Self> {
        term.map(Self::NameContains)
    }

    /// Maximum-price criterion, present only when a bound was supplied.
    pub fn price_at_most(bound: Option<f64>) -> Option<Self> {
        bound.map(Self::PriceAtMost)
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::NameContains(term) => product
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            Self::PriceAtMost(bound) => product.price <= *bound,
        }
    }
}

/// AND-composition of zero or more criteria.
///
/// Invariant: a composite built from zero criteria matches every record.
/// Evaluation is order-independent; each criterion is checked against the
/// same record independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeFilter {
    criteria: Vec<ProductFilter>,
}

impl CompositeFilter {
    pub fn new(criteria: Vec<ProductFilter>) -> Self {
        Self { criteria }
    }

    /// The unconditional-true filter.
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Folds a list of *optional* criteria, dropping the absent ones.
    pub fn from_optional(criteria: impl IntoIterator<Item = Option<ProductFilter>>) -> Self {
        criteria.into_iter().flatten().collect()
    }

    pub fn and(mut self, criterion: ProductFilter) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn is_match_all(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.criteria.iter().all(|c| c.matches(product))
    }
}

impl FromIterator<ProductFilter> for CompositeFilter {
    fn from_iter<I: IntoIterator<Item = ProductFilter>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
