//! Discount specification read from standard input.
//!
//! The raw [`DiscountSpec`] mirrors the input document field for field, with
//! every type-specific field optional. [`DiscountSpec::policy`] resolves it
//! into a [`DiscountPolicy`] carrying exactly the fields its type needs, so a
//! missing field surfaces as a [`SpecError`] before any product is fetched.
//! An unrecognized type needs nothing, not even `id`.

use std::fmt;
use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("malformed discount specification: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{discount_type} discount is missing required field `{field}`")]
    MissingField {
        discount_type: &'static str,
        field: &'static str,
    },
}

/// Discount type tag. Values other than `cart` and `product` are kept
/// verbatim in [`DiscountType::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum DiscountType {
    Cart,
    Product,
    Other(String),
}

impl From<String> for DiscountType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "cart" => Self::Cart,
            "product" => Self::Product,
            _ => Self::Other(value),
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountType::Cart => write!(f, "cart"),
            DiscountType::Product => write!(f, "product"),
            DiscountType::Other(other) => write!(f, "{other}"),
        }
    }
}

/// Cart identifier. The catalog only ever sees it as a query parameter, so
/// both JSON numbers and strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CartId {
    Number(u64),
    Text(String),
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartId::Number(n) => write!(f, "{n}"),
            CartId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for CartId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscountSpec {
    pub discount_type: DiscountType,
    /// Required by `cart` and `product` discounts; never read otherwise.
    #[serde(default)]
    pub id: Option<CartId>,
    #[serde(default)]
    pub cart_value: Option<f64>,
    #[serde(default)]
    pub discount_value: Option<f64>,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub product_value: Option<f64>,
}

/// A discount specification narrowed to the fields its type requires.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscountPolicy {
    /// Subtract `discount_value` once when the cart total reaches `cart_value`.
    Cart {
        cart_value: f64,
        discount_value: f64,
    },
    /// Subtract `discount_value` from every qualifying product, flooring each
    /// product at zero.
    Product {
        discount_value: f64,
        collection: Option<String>,
        product_value: Option<f64>,
    },
    /// Any other `discount_type`; totals stay at zero.
    Unrecognized(String),
}

impl DiscountSpec {
    /// Reads a specification from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::Parse`] if the input is not valid JSON or lacks
    /// `discount_type`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SpecError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Resolves the raw specification into the policy for its type.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::MissingField`] when a field required by the
    /// discount type is absent.
    pub fn policy(&self) -> Result<DiscountPolicy, SpecError> {
        match &self.discount_type {
            DiscountType::Cart => {
                self.cart_id()?;
                Ok(DiscountPolicy::Cart {
                    cart_value: require("cart", "cart_value", self.cart_value)?,
                    discount_value: require("cart", "discount_value", self.discount_value)?,
                })
            }
            DiscountType::Product => {
                self.cart_id()?;
                Ok(DiscountPolicy::Product {
                    discount_value: require("product", "discount_value", self.discount_value)?,
                    collection: self.collection.clone(),
                    product_value: self.product_value,
                })
            }
            DiscountType::Other(other) => Ok(DiscountPolicy::Unrecognized(other.clone())),
        }
    }

    /// The cart to fetch.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::MissingField`] when `id` is absent.
    pub fn cart_id(&self) -> Result<&CartId, SpecError> {
        let discount_type = match self.discount_type {
            DiscountType::Cart => "cart",
            DiscountType::Product => "product",
            DiscountType::Other(_) => "unrecognized",
        };
        require(discount_type, "id", self.id.as_ref())
    }
}

fn require<T>(
    discount_type: &'static str,
    field: &'static str,
    value: Option<T>,
) -> Result<T, SpecError> {
    value.ok_or(SpecError::MissingField {
        discount_type,
        field,
    })
}

impl DiscountPolicy {
    /// Returns `true` if the cart has to be fetched to compute totals.
    #[must_use]
    pub fn needs_cart(&self) -> bool {
        !matches!(self, DiscountPolicy::Unrecognized(_))
    }
}

#[cfg(test)]
#[path = "discount_test.rs"]
mod tests;
