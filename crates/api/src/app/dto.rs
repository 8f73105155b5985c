use serde::{Deserialize, Serialize};

use mercato_catalog::product::{NewProduct, Product, ProductPatch};
use mercato_core::{CategoryId, PageRequest, ProductId, Sort, page::DEFAULT_PAGE_SIZE};

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters shared by the list/search endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// `key` or `key,direction`, e.g. `price,desc`. Unknown keys are ignored.
    pub sort: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl PageParams {
    pub fn page_request(&self) -> PageRequest {
        let mut request = PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
        );
        if let Some(sort) = self.sort.as_deref().and_then(Sort::parse) {
            request = request.with_sort(sort);
        }
        request
    }
}

/// The `product` multipart part of a create request.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub category_id: Option<CategoryId>,
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            category_id: self.category_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EditProductRequest {
    pub name: String,
    pub price: f64,
}

impl EditProductRequest {
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            price: self.price,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// Transport shape used on list/search pages (the detail endpoints return
/// the full record; this one deliberately omits the price).
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub image: Option<String>,
    pub category_name: Option<String>,
}

impl ProductDto {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            category_name: product.category.as_ref().map(|c| c.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercato_catalog::product::Category;
    use mercato_core::{SortDirection, SortKey};

    #[test]
    fn page_params_default_to_first_page_of_ten() {
        let request = PageParams::default().page_request();
        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), 10);
        assert!(request.sort().is_none());
    }

    #[test]
    fn page_params_parse_the_sort_expression() {
        let params = PageParams {
            sort: Some("price,desc".to_string()),
            ..Default::default()
        };
        let sort = params.page_request().sort().unwrap();
        assert_eq!(sort.key, SortKey::Price);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn product_dto_resolves_the_category_name() {
        let product = Product {
            id: ProductId::new(3),
            name: "Sofa".to_string(),
            price: 120.0,
            image: Some("/files/abc.png".to_string()),
            category: Some(Category::new(CategoryId::new(2), "Furniture")),
        };

        let dto = ProductDto::from_product(&product);
        assert_eq!(dto.id, ProductId::new(3));
        assert_eq!(dto.category_name.as_deref(), Some("Furniture"));
        assert_eq!(dto.image.as_deref(), Some("/files/abc.png"));
    }
}
