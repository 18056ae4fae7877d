//! Response types for the paged carts endpoint.
//!
//! ## Observed shape
//!
//! ```text
//! { "products": [ { "name": "...", "price": 20, "collection": "..." } ],
//!   "pagination": { "current_page": 1, "per_page": 5, "total": 11 } }
//! ```
//!
//! `collection` is omitted on products that belong to none. `current_page`
//! is echoed back by the service but only used in log lines; page
//! progression is driven by the request side.

use serde::Deserialize;

use cartcalc_core::Product;

/// One page of a cart.
#[derive(Debug, Deserialize)]
pub struct CartPage {
    #[serde(default)]
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

/// Pagination block returned with every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Total number of products in the cart across all pages.
    pub total: u64,
    pub per_page: u64,
    #[serde(default)]
    pub current_page: Option<u64>,
}
