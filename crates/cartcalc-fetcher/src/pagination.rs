//! Page-count pagination for the carts endpoint.
//!
//! The service never signals the last page. Every response carries the
//! cart's `total` product count and the `per_page` size; the last page index
//! is derived from those and the walk stops once it has been fetched.

use crate::types::Pagination;

/// Index of the last page for a cart of `total` products split into pages of
/// `per_page`.
///
/// An empty cart or a zero page size is treated as a single page.
#[must_use]
pub fn last_page(total: u64, per_page: u64) -> u64 {
    if total == 0 || per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page)
}

/// Returns `true` if another page follows `page`.
#[must_use]
pub fn has_next_page(page: u64, pagination: &Pagination) -> bool {
    page < last_page(pagination.total, pagination.per_page)
}

/// Returns `true` if `page` lies past the configured ceiling.
///
/// Without a ceiling no page is ever past it.
#[must_use]
pub fn exceeds_page_limit(page: u64, max_pages: Option<u64>) -> bool {
    max_pages.is_some_and(|max| page > max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(total: u64, per_page: u64) -> Pagination {
        Pagination {
            total,
            per_page,
            current_page: None,
        }
    }

    #[test]
    fn last_page_exact_multiple() {
        assert_eq!(last_page(10, 5), 2);
    }

    #[test]
    fn last_page_rounds_up_partial_page() {
        assert_eq!(last_page(11, 5), 3);
    }

    #[test]
    fn last_page_smaller_than_one_page() {
        assert_eq!(last_page(3, 5), 1);
    }

    #[test]
    fn last_page_empty_cart_is_one_page() {
        assert_eq!(last_page(0, 5), 1);
    }

    #[test]
    fn last_page_zero_per_page_is_one_page() {
        assert_eq!(last_page(10, 0), 1);
        assert_eq!(last_page(0, 0), 1);
    }

    #[test]
    fn has_next_page_before_last() {
        assert!(has_next_page(1, &pagination(11, 5)));
        assert!(has_next_page(2, &pagination(11, 5)));
    }

    #[test]
    fn has_next_page_false_on_last() {
        assert!(!has_next_page(3, &pagination(11, 5)));
        assert!(!has_next_page(2, &pagination(10, 5)));
    }

    #[test]
    fn has_next_page_false_for_degenerate_pagination() {
        assert!(!has_next_page(1, &pagination(0, 5)));
        assert!(!has_next_page(1, &pagination(10, 0)));
    }

    #[test]
    fn has_next_page_false_past_last() {
        assert!(!has_next_page(7, &pagination(10, 5)));
    }

    #[test]
    fn exceeds_page_limit_without_ceiling_never_trips() {
        assert!(!exceeds_page_limit(1, None));
        assert!(!exceeds_page_limit(10_001, None));
        assert!(!exceeds_page_limit(u64::MAX, None));
    }

    #[test]
    fn exceeds_page_limit_with_ceiling() {
        assert!(!exceeds_page_limit(2, Some(2)));
        assert!(exceeds_page_limit(3, Some(2)));
    }
}
