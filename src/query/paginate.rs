// Pagination over a filtered entry sequence
//
// Page N covers the half-open slice [(N-1)*page_size, N*page_size) of the
// input. The input must already be filtered: the page count is derived
// from what will actually be shown.

/// Entries shown per page in the popup
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a longer sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page, in sequence order
    pub items: Vec<T>,
    /// Total number of pages; 0 when the sequence is empty
    pub page_count: usize,
    /// The 1-based page that was requested
    pub current_page: usize,
}

/// Slice one page out of a sequence.
///
/// Pages are 1-based and `page_size` must be non-zero. `paginate` does not
/// clamp: a `page` outside `[1, page_count]` yields an empty page, and
/// callers stop navigating at the boundaries (see
/// [`PopupState`](crate::commands::PopupState)).
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    debug_assert!(page_size > 0);

    let page_count = items.len().div_ceil(page_size);

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    let page_items = if start < items.len() {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: page_items,
        page_count,
        current_page: page,
    }
}

#[cfg(test)]
#[path = "paginate_test.rs"]
mod tests;
