//! Pagination over insertion-ordered record slices.

use crate::error::CoreError;

/// One page out of a paginated listing.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    /// Records on this page, in collection order.
    pub items: &'a [T],
    /// 1-indexed page number.
    pub number: usize,
    /// Total number of pages at this page size.
    pub total_pages: usize,
}

/// Slices `items` into the 1-indexed page `page` of `per_page` records.
///
/// # Errors
///
/// Returns `CoreError::Shape` when `per_page` is zero or `page` falls
/// outside `1..=total_pages` (an empty collection has zero pages, so every
/// page number is invalid for it).
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Result<Page<'_, T>, CoreError> {
    if per_page == 0 {
        return Err(CoreError::shape("page size must be at least 1"));
    }

    let total_pages = items.len().div_ceil(per_page);
    if page < 1 || page > total_pages {
        return Err(CoreError::shape(format!(
            "invalid page number: enter a page between 1 and {total_pages}"
        )));
    }

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());

    Ok(Page {
        items: &items[start..end],
        number: page,
        total_pages,
    })
}
