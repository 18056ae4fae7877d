use anyhow::Context;

use cartcalc_core::{calculate, DiscountSpec, Totals};
use cartcalc_fetcher::CartClient;

/// Resolves the discount policy, streams the cart through it and returns
/// the totals.
///
/// An unrecognized `discount_type` is not an error: the cart is not fetched
/// and zero totals are returned.
///
/// # Errors
///
/// Returns an error if the specification lacks a field its type requires or
/// if any page of the cart cannot be fetched.
pub(crate) async fn compute_totals(
    client: &CartClient,
    spec: &DiscountSpec,
) -> anyhow::Result<Totals> {
    let policy = spec.policy()?;

    if !policy.needs_cart() {
        tracing::warn!(
            discount_type = %spec.discount_type,
            cart_id = ?spec.id,
            "unrecognized discount type; reporting zero totals"
        );
        return Ok(Totals::default());
    }

    let id = spec.cart_id()?;
    let totals = calculate(&policy, client.fetch_cart(id))
        .await
        .with_context(|| format!("failed to fetch cart {id}"))?;

    tracing::info!(
        cart_id = %id,
        discount_type = %spec.discount_type,
        total_amount = totals.total_amount,
        total_after_discount = totals.total_after_discount,
        "computed cart totals"
    );

    Ok(totals)
}
