// Paginator shared by hotel listings and hotel reviews
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub paging: Paging,
    pub elements: Vec<T>,
}

/// Number of pages needed for `len` items; an empty collection still has one (empty) page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 {
        1
    } else {
        (len - 1) / page_size + 1
    }
}

/// Slices `items` into the requested 1-indexed page.
///
/// A missing or zero page means page 1 and a page past the end is clamped to
/// the last page. `page_size` must be non-zero; `EngineConfig::validate`
/// enforces that for every size the engine uses.
pub fn paginate<T: Clone>(items: &[T], requested_page: Option<usize>, page_size: usize) -> Page<T> {
    let total_pages = total_pages(items.len(), page_size);
    let current_page = requested_page.filter(|p| *p > 0).unwrap_or(1).min(total_pages);

    let start = ((current_page - 1) * page_size).min(items.len());
    let end = (current_page * page_size).min(items.len());

    Page {
        paging: Paging {
            current_page,
            total_pages,
            page_size,
        },
        elements: items[start..end].to_vec(),
    }
}
