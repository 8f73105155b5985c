use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Multipart, Path, Query},
    http::{HeaderMap, HeaderValue, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
};

use mercato_catalog::product::Product;
use mercato_catalog::service::UploadedFile;
use mercato_core::{PageResult, ProductId};

use crate::app::{AppServices, dto, errors, links};

pub fn router() -> Router {
    Router::new()
        .route("/product", get(list_products).post(create_product))
        .route("/product2", get(search_products))
        .route(
            "/product/:id",
            get(get_product).put(edit_product).delete(delete_product),
        )
}

/// `GET /product` — everything, paginated; with `?name=` it becomes the
/// substring search (the original API's second `/product` mapping).
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PageParams>,
    headers: HeaderMap,
    uri: Uri,
) -> axum::response::Response {
    let page = params.page_request();

    let result = match params.name.as_deref() {
        Some(term) => services.catalog.find_by_name(term, &page),
        None => services.catalog.list_all(&page),
    };

    let result = match result {
        Ok(r) => r,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    // An empty unfiltered listing is "no content", not a search failure.
    if result.is_empty() {
        return StatusCode::NOT_FOUND.into_response();
    }

    page_response(result, &services, &headers, &uri)
}

/// `GET /product2` — search by a variable set of optional criteria.
pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::PageParams>,
    headers: HeaderMap,
    uri: Uri,
) -> axum::response::Response {
    let page = params.page_request();

    match services
        .catalog
        .find_by_args(params.name.clone(), params.price, &page)
    {
        Ok(result) => page_response(result, &services, &headers, &uri),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.catalog.get(ProductId::new(id)) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// `POST /product` — multipart: a `product` JSON part plus an optional
/// `file` part. An empty file part counts as no file.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    mut multipart: Multipart,
) -> axum::response::Response {
    let mut input: Option<dto::CreateProductRequest> = None;
    let mut file: Option<UploadedFile> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_multipart",
                    e.to_string(),
                );
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("product") => {
                let text = match field.text().await {
                    Ok(t) => t,
                    Err(e) => {
                        return errors::json_error(
                            StatusCode::BAD_REQUEST,
                            "invalid_multipart",
                            e.to_string(),
                        );
                    }
                };
                input = match serde_json::from_str(&text) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        return errors::json_error(
                            StatusCode::BAD_REQUEST,
                            "invalid_product",
                            e.to_string(),
                        );
                    }
                };
            }
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = match field.bytes().await {
                    Ok(b) => b,
                    Err(e) => {
                        return errors::json_error(
                            StatusCode::BAD_REQUEST,
                            "invalid_multipart",
                            e.to_string(),
                        );
                    }
                };
                if !bytes.is_empty() {
                    file = Some(UploadedFile {
                        name: file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }

    let Some(input) = input else {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "missing_product",
            "multipart part 'product' is required",
        );
    };

    match services.catalog.create(input.into_new_product(), file) {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn edit_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Json(body): Json<dto::EditProductRequest>,
) -> axum::response::Response {
    match services.catalog.update(ProductId::new(id), body.into_patch()) {
        Ok(product) => (StatusCode::OK, Json(product)).into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.catalog.delete(ProductId::new(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

/// 200 page body plus the `link` navigation header.
fn page_response(
    result: PageResult<Product>,
    services: &AppServices,
    headers: &HeaderMap,
    uri: &Uri,
) -> axum::response::Response {
    let page = result.map(|p| dto::ProductDto::from_product(&p));
    let link = links::request_url(services.public_url.as_ref(), headers, uri)
        .map(|url| links::link_header(&page, &url));

    let mut response = (StatusCode::OK, Json(page)).into_response();
    if let Some(value) = link.as_deref().and_then(|l| HeaderValue::from_str(l).ok()) {
        response.headers_mut().insert("link", value);
    }
    response
}
