//! Listing pagination.
//!
//! Page sizes come from `[theme]` (`posts_per_page`, `projects_per_page`).
//! When a size is not configured, [`DEFAULT_PAGE_SIZE`] applies; this is the
//! only place that default lives.

/// Items per listing page when the config leaves the size unset.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Resolve a configured page size, falling back to [`DEFAULT_PAGE_SIZE`].
///
/// Zero is rejected by validation; it resolves to the default here too.
pub fn resolve_page_size(configured: Option<u32>) -> usize {
    match configured {
        Some(size) if size > 0 => size as usize,
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page.
    pub items: &'a [T],
    /// 1-based page number.
    pub number: usize,
    /// Total number of pages in the listing.
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice `items` into page `page` (1-based) of `per_page` items.
///
/// Pages past the end, and page 0, come back empty.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page);

    let items = match page.checked_sub(1).map(|p| p * per_page) {
        Some(start) if start < items.len() => {
            let end = (start + per_page).min(items.len());
            &items[start..end]
        }
        _ => &[],
    };

    Page {
        items,
        number: page,
        total_pages,
    }
}
