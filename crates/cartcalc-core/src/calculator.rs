//! Folds a product sequence into cart totals under a [`DiscountPolicy`].

use futures::{Stream, TryStreamExt};
use serde::Serialize;

use crate::discount::DiscountPolicy;
use crate::products::Product;

/// Pre- and post-discount totals for one cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub total_amount: f64,
    pub total_after_discount: f64,
}

impl Totals {
    /// Renders the totals as the two-space indented output document.
    ///
    /// # Errors
    ///
    /// Propagates any `serde_json` serialization error.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Incremental totals accumulator.
///
/// Products are added one at a time so the whole cart never has to be held
/// in memory. The cart threshold is applied in [`Calculator::finish`] once
/// the full amount is known.
#[derive(Debug)]
pub struct Calculator<'a> {
    policy: &'a DiscountPolicy,
    totals: Totals,
    products: usize,
}

impl<'a> Calculator<'a> {
    #[must_use]
    pub fn new(policy: &'a DiscountPolicy) -> Self {
        Self {
            policy,
            totals: Totals::default(),
            products: 0,
        }
    }

    pub fn add(&mut self, product: &Product) {
        match self.policy {
            DiscountPolicy::Cart { .. } => {
                self.totals.total_amount += product.price;
            }
            DiscountPolicy::Product {
                discount_value,
                collection,
                product_value,
            } => {
                self.totals.total_amount += product.price;

                let matches_collection = collection
                    .as_deref()
                    .is_some_and(|c| product.in_collection(c));
                let meets_value = product_value.is_some_and(|v| product.price >= v);

                if matches_collection || meets_value {
                    self.totals.total_after_discount += (product.price - discount_value).max(0.0);
                } else {
                    self.totals.total_after_discount += product.price;
                }
            }
            DiscountPolicy::Unrecognized(_) => return,
        }
        self.products += 1;
    }

    /// Number of products folded so far.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products
    }

    #[must_use]
    pub fn finish(self) -> Totals {
        match self.policy {
            // Not clamped: a discount larger than the cart yields a negative total.
            DiscountPolicy::Cart {
                cart_value,
                discount_value,
            } => {
                let total_amount = self.totals.total_amount;
                let total_after_discount = if total_amount >= *cart_value {
                    total_amount - discount_value
                } else {
                    total_amount
                };
                Totals {
                    total_amount,
                    total_after_discount,
                }
            }
            DiscountPolicy::Product { .. } | DiscountPolicy::Unrecognized(_) => self.totals,
        }
    }
}

/// Drives a [`Calculator`] over a fallible product stream.
///
/// Products are consumed in order as the stream yields them. The first error
/// aborts the fold and is returned unchanged; no partial totals are produced.
///
/// # Errors
///
/// Propagates the first error yielded by `products`.
pub async fn calculate<S, E>(policy: &DiscountPolicy, products: S) -> Result<Totals, E>
where
    S: Stream<Item = Result<Product, E>>,
{
    let calculator = products
        .try_fold(Calculator::new(policy), |mut calculator, product| async move {
            calculator.add(&product);
            Ok::<_, E>(calculator)
        })
        .await?;

    tracing::debug!(
        products = calculator.product_count(),
        "folded cart into totals"
    );
    Ok(calculator.finish())
}

#[cfg(test)]
#[path = "calculator_test.rs"]
mod tests;
