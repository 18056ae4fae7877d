use serde::Deserialize;

/// A single cart line as returned by the catalog service.
///
/// Only `price` takes part in the totals; `collection` drives the
/// per-product policy and `name` is carried for log lines. Any other fields
/// in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub collection: Option<String>,
}

impl Product {
    /// Returns `true` when the product belongs to `collection`.
    ///
    /// A product without a collection never matches.
    #[must_use]
    pub fn in_collection(&self, collection: &str) -> bool {
        self.collection.as_deref() == Some(collection)
    }
}
