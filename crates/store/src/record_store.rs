//! In-memory record store for dev/test.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use mercato_catalog::filter::CompositeFilter;
use mercato_catalog::product::{Category, Product};
use mercato_catalog::store::{NewProductRecord, RecordStore};
use mercato_core::{
    CategoryId, PageRequest, PageResult, ProductId, Sort, SortDirection, SortKey, StoreError,
};

/// In-memory `RecordStore`.
///
/// Products are keyed by id; identity is assigned from a monotonically
/// increasing sequence starting at 1. Categories are seeded at construction
/// and read-only afterwards.
#[derive(Debug)]
pub struct InMemoryRecordStore {
    products: RwLock<HashMap<i64, Product>>,
    categories: RwLock<HashMap<i64, Category>>,
    next_id: AtomicI64,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
            categories: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.categories.write() {
            for category in categories {
                map.insert(category.id.as_i64(), category);
            }
        }
        store
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(table: &str) -> StoreError {
    StoreError::unavailable(format!("{table} table lock poisoned"))
}

/// Orders a match set; ties and the no-sort case fall back to ascending id
/// so paging stays deterministic.
fn sort_products(products: &mut [Product], sort: Option<Sort>) {
    match sort {
        None => products.sort_by_key(|p| p.id),
        Some(Sort { key, direction }) => {
            products.sort_by(|a, b| {
                let ordering = match key {
                    SortKey::Id => a.id.cmp(&b.id),
                    SortKey::Name => a.name.cmp(&b.name).then(a.id.cmp(&b.id)),
                    SortKey::Price => a.price.total_cmp(&b.price).then(a.id.cmp(&b.id)),
                };
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
    }
}

impl RecordStore for InMemoryRecordStore {
    fn insert_product(&self, record: NewProductRecord) -> Result<Product, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product {
            id: ProductId::new(id),
            name: record.name,
            price: record.price,
            image: record.image,
            category: record.category,
        };

        let mut products = self.products.write().map_err(|_| poisoned("product"))?;
        products.insert(id, product.clone());
        Ok(product)
    }

    fn product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().map_err(|_| poisoned("product"))?;
        Ok(products.get(&id.as_i64()).cloned())
    }

    fn update_product(&self, product: Product) -> Result<Product, StoreError> {
        let mut products = self.products.write().map_err(|_| poisoned("product"))?;
        if !products.contains_key(&product.id.as_i64()) {
            return Err(StoreError::constraint(format!(
                "update of unknown product {}",
                product.id
            )));
        }
        products.insert(product.id.as_i64(), product.clone());
        Ok(product)
    }

    fn delete_product(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut products = self.products.write().map_err(|_| poisoned("product"))?;
        Ok(products.remove(&id.as_i64()).is_some())
    }

    fn query_page(
        &self,
        filter: &CompositeFilter,
        page: &PageRequest,
    ) -> Result<PageResult<Product>, StoreError> {
        let products = self.products.read().map_err(|_| poisoned("product"))?;

        let mut matched: Vec<Product> = products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        drop(products);

        sort_products(&mut matched, page.sort());

        let total = matched.len() as u64;
        let offset = page.offset() as usize;
        let content: Vec<Product> = if offset >= matched.len() {
            Vec::new()
        } else {
            matched
                .into_iter()
                .skip(offset)
                .take(page.size() as usize)
                .collect()
        };

        Ok(PageResult::new(content, page.page(), page.size(), total))
    }

    fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        let categories = self.categories.read().map_err(|_| poisoned("category"))?;
        Ok(categories.get(&id.as_i64()).cloned())
    }

    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = self.categories.read().map_err(|_| poisoned("category"))?;
        let mut all: Vec<Category> = categories.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercato_catalog::filter::ProductFilter;

    fn seed(store: &InMemoryRecordStore, name: &str, price: f64) -> Product {
        store
            .insert_product(NewProductRecord {
                name: name.to_string(),
                price,
                image: None,
                category: None,
            })
            .unwrap()
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let store = InMemoryRecordStore::new();
        let a = seed(&store, "A", 1.0);
        let b = seed(&store, "B", 2.0);
        assert_eq!(a.id.as_i64(), 1);
        assert_eq!(b.id.as_i64(), 2);
    }

    #[test]
    fn query_page_totals_cover_the_whole_match_set() {
        let store = InMemoryRecordStore::new();
        for i in 0..25 {
            seed(&store, &format!("Chair-{}", i + 1), 10.0);
        }

        let page = store
            .query_page(&CompositeFilter::match_all(), &PageRequest::new(1, 10))
            .unwrap();
        assert_eq!(page.content.len(), 10);
        assert_eq!(page.total_elements, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn query_page_beyond_the_end_is_empty_with_correct_totals() {
        let store = InMemoryRecordStore::new();
        seed(&store, "Solo", 5.0);

        let page = store
            .query_page(&CompositeFilter::match_all(), &PageRequest::new(9, 10))
            .unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn default_ordering_is_ascending_id() {
        let store = InMemoryRecordStore::new();
        seed(&store, "C", 3.0);
        seed(&store, "A", 1.0);
        seed(&store, "B", 2.0);

        let page = store
            .query_page(&CompositeFilter::match_all(), &PageRequest::new(0, 10))
            .unwrap();
        let ids: Vec<i64> = page.content.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn sort_by_price_descending() {
        let store = InMemoryRecordStore::new();
        seed(&store, "Cheap", 1.0);
        seed(&store, "Pricey", 30.0);
        seed(&store, "Middling", 15.0);

        let request = PageRequest::new(0, 10)
            .with_sort(Sort::new(SortKey::Price, SortDirection::Desc));
        let page = store
            .query_page(&CompositeFilter::match_all(), &request)
            .unwrap();
        let names: Vec<&str> = page.content.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Pricey", "Middling", "Cheap"]);
    }

    #[test]
    fn filters_apply_before_pagination() {
        let store = InMemoryRecordStore::new();
        for i in 0..5 {
            seed(&store, &format!("Chair-{i}"), 10.0);
        }
        for i in 0..5 {
            seed(&store, &format!("Table-{i}"), 20.0);
        }

        let filter = CompositeFilter::new(vec![ProductFilter::NameContains("chair".to_string())]);
        let page = store.query_page(&filter, &PageRequest::new(0, 3)).unwrap();
        assert_eq!(page.content.len(), 3);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 2);
        assert!(page.content.iter().all(|p| p.name.starts_with("Chair")));
    }

    #[test]
    fn update_of_unknown_product_is_a_constraint_error() {
        let store = InMemoryRecordStore::new();
        let ghost = Product {
            id: ProductId::new(99),
            name: "Ghost".to_string(),
            price: 0.0,
            image: None,
            category: None,
        };
        assert!(matches!(
            store.update_product(ghost),
            Err(StoreError::Constraint(_))
        ));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: page windows never exceed the requested size, totals
            /// are independent of the page index, and the default ordering
            /// makes the window deterministic.
            #[test]
            fn query_page_windows_are_consistent(
                total in 0usize..60,
                page in 0u32..10,
                size in 1u32..=20,
            ) {
                let store = InMemoryRecordStore::new();
                for i in 0..total {
                    store
                        .insert_product(NewProductRecord {
                            name: format!("Item-{i}"),
                            price: i as f64,
                            image: None,
                            category: None,
                        })
                        .unwrap();
                }

                let result = store
                    .query_page(&CompositeFilter::match_all(), &PageRequest::new(page, size))
                    .unwrap();

                prop_assert_eq!(result.total_elements, total as u64);
                prop_assert_eq!(
                    result.total_pages,
                    (total as u64).div_ceil(u64::from(size)) as u32
                );

                let offset = (page as usize) * (size as usize);
                let expected = total.saturating_sub(offset).min(size as usize);
                prop_assert_eq!(result.content.len(), expected);

                // Ascending-id default order makes the window contents exact.
                for (i, product) in result.content.iter().enumerate() {
                    prop_assert_eq!(product.id.as_i64(), (offset + i + 1) as i64);
                }
            }
        }
    }

    #[test]
    fn seeded_categories_resolve_by_id() {
        let store = InMemoryRecordStore::with_categories([
            Category::new(CategoryId::new(1), "Electronics"),
            Category::new(CategoryId::new(2), "Furniture"),
        ]);

        let found = store.category(CategoryId::new(2)).unwrap();
        assert_eq!(found.unwrap().name, "Furniture");
        assert!(store.category(CategoryId::new(9)).unwrap().is_none());
        assert_eq!(store.categories().unwrap().len(), 2);
    }
}
