//! Pagination `link` response headers (RFC 5988 style).
//!
//! The serialized value is a comma-separated list of `<url>; rel="name"`
//! entries; only the `page` and `size` query parameters of the request URL
//! are rewritten, everything else is preserved.

use axum::http::{HeaderMap, Uri, header};
use url::Url;

use mercato_core::PageResult;

/// Derives the navigation links for `page` against the request URL.
///
/// - `first` is always present (index 0, same size);
/// - `last` only when any pages exist;
/// - `prev`/`next` only when the neighbouring index is in range. A current
///   index beyond the last page never panics; out-of-range neighbours are
///   simply omitted.
pub fn page_links<T>(page: &PageResult<T>, base: &Url) -> Vec<(&'static str, Url)> {
    let mut entries = Vec::with_capacity(4);

    entries.push(("first", with_page(base, 0, page.size)));
    if page.page > 0 && page.page - 1 < page.total_pages {
        entries.push(("prev", with_page(base, page.page - 1, page.size)));
    }
    if page.page + 1 < page.total_pages {
        entries.push(("next", with_page(base, page.page + 1, page.size)));
    }
    if page.total_pages > 0 {
        entries.push(("last", with_page(base, page.total_pages - 1, page.size)));
    }

    entries
}

/// Serializes the links into a single header value: `<url>; rel="name"`
/// entries joined by `, `. This exact textual shape is what consumers parse.
pub fn link_header<T>(page: &PageResult<T>, base: &Url) -> String {
    page_links(page, base)
        .iter()
        .map(|(rel, url)| format!("<{url}>; rel=\"{rel}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reconstructs the request URL from the `Host` header and request URI.
///
/// A configured public base URL (read once at startup) overrides scheme and
/// authority when the service sits behind a proxy.
pub fn request_url(public_url: Option<&Url>, headers: &HeaderMap, uri: &Uri) -> Option<Url> {
    if let Some(base) = public_url {
        let mut url = base.clone();
        url.set_path(uri.path());
        url.set_query(uri.query());
        return Some(url);
    }

    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    Url::parse(&format!("http://{host}{uri}")).ok()
}

fn with_page(base: &Url, page: u32, size: u32) -> Url {
    let retained: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(k, _)| k != "page" && k != "size")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (k, v) in &retained {
            pairs.append_pair(k, v);
        }
        pairs.append_pair("page", &page.to_string());
        pairs.append_pair("size", &size.to_string());
    }
    url
}
