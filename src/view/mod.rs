pub mod pagination;

pub use pagination::{Pagination, PAGE_SIZE};

use crate::models::Hotel;

/// What the results area shows: a page of hotels, or the empty-state panel
/// whose single affordance is resetting the filters.
#[derive(Debug, PartialEq)]
pub enum CatalogView<'a> {
    Results {
        hotels: &'a [Hotel],
        page: usize,
        page_count: usize,
        total: usize,
    },
    NothingFound,
}

/// Choose between the paginated list and the empty state. No intermediate
/// variants: any non-empty list paginates.
pub fn build_view<'a>(hotels: &'a [Hotel], pager: &Pagination) -> CatalogView<'a> {
    if hotels.is_empty() {
        return CatalogView::NothingFound;
    }
    let page_count = Pagination::page_count(hotels.len());
    CatalogView::Results {
        hotels: pager.slice(hotels),
        page: pager.page().min(page_count - 1),
        page_count,
        total: hotels.len(),
    }
}
