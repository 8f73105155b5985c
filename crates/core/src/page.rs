//! Pagination contract between the catalog core and the record store.
//!
//! `PageRequest` is supplied by the caller and immutable for the duration of
//! one query; `PageResult` carries one page of items plus totals over the
//! *entire* matching set.

use serde::{Deserialize, Serialize};

/// Page size applied when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on the page size accepted from callers.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Field a product page can be ordered by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Name,
    Price,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Requested ordering of a page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Parses `"key"` or `"key,direction"` (e.g. `"price,desc"`).
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(2, ',');
        let key = match parts.next()?.trim().to_ascii_lowercase().as_str() {
            "id" => SortKey::Id,
            "name" => SortKey::Name,
            "price" => SortKey::Price,
            _ => return None,
        };
        let direction = match parts.next().map(|d| d.trim().to_ascii_lowercase()) {
            None => SortDirection::Asc,
            Some(d) if d == "asc" => SortDirection::Asc,
            Some(d) if d == "desc" => SortDirection::Desc,
            Some(_) => return None,
        };
        Some(Self { key, direction })
    }
}

/// Zero-based page coordinates plus optional ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Option<Sort>,
}

impl PageRequest {
    /// Builds a request for `page` with `size` clamped into `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    /// Index of the first element on this page within the full match set.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results plus totals over the whole matching set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> PageResult<T> {
    /// Assembles a page; `total_pages` is derived as `ceil(total / size)`.
    ///
    /// A zero `size` (which `PageRequest::new` never produces) is treated
    /// as 1 rather than dividing by zero.
    pub fn new(content: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
        let size = size.max(1);
        let total_pages = total_elements.div_ceil(u64::from(size)) as u32;
        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.total_pages == 0 || self.page + 1 >= self.total_pages
    }

    /// Projects the page content, keeping the page metadata intact.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
