//! Fixed-size pagination over a filtered review list.
//!
//! Pages are numbered from 1. Page `k` covers indices
//! `[PAGE_SIZE * (k - 1), min(PAGE_SIZE * k, n))` of the filtered list.

use std::ops::Range;

/// Reviews shown per page.
pub const PAGE_SIZE: usize = 4;

/// Number of pages needed for `item_count` items.
#[must_use]
pub const fn page_count(item_count: usize) -> usize {
    item_count.div_ceil(PAGE_SIZE)
}

/// Index range of page `page` within `item_count` items.
///
/// Page 0 and pages past the end yield an empty range.
#[must_use]
pub fn page_range(page: usize, item_count: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = PAGE_SIZE.saturating_mul(page - 1).min(item_count);
    let end = PAGE_SIZE.saturating_mul(page).min(item_count);
    start..end
}

/// Clamps `page` into `[1, page_count(item_count)]`, yielding 1 when empty.
#[must_use]
pub fn clamp_page(page: usize, item_count: usize) -> usize {
    page.clamp(1, page_count(item_count).max(1))
}
