//! Lazy multi-page product stream for `CartClient`.

use futures::stream::{self, Stream, TryStreamExt};

use cartcalc_core::{CartId, Product};

use crate::error::FetchError;
use crate::pagination::{exceeds_page_limit, has_next_page, last_page};
use crate::types::CartPage;

use super::CartClient;

/// Where the walk resumes on the next pull.
enum Cursor {
    Page(u64),
    Done,
}

impl CartClient {
    /// Streams every product of cart `id`, starting at page 1.
    ///
    /// Pages are requested one at a time and only when the consumer has
    /// drained the previous page, so products are yielded in server order as
    /// soon as their page arrives. The walk stops after the page whose index
    /// reaches `ceil(total / per_page)` as declared by that page's
    /// pagination block.
    ///
    /// The first error (network failure, non-2xx, malformed body, or the
    /// [`FetchError::PaginationLimit`] guard when a page ceiling is set) is
    /// yielded once and ends the stream. Each call starts a fresh walk from page 1.
    pub fn fetch_cart<'a>(
        &'a self,
        id: &'a CartId,
    ) -> impl Stream<Item = Result<Product, FetchError>> + 'a {
        stream::try_unfold(Cursor::Page(1), move |cursor| async move {
            let page = match cursor {
                Cursor::Page(page) => page,
                Cursor::Done => return Ok(None),
            };

            if exceeds_page_limit(page, self.max_pages) {
                return Err(FetchError::PaginationLimit {
                    cart_id: id.to_string(),
                    max_pages: self.max_pages.unwrap_or_default(),
                });
            }

            let CartPage {
                products,
                pagination,
            } = self.fetch_cart_page(id, page).await?;

            tracing::debug!(
                cart_id = %id,
                page,
                last_page = last_page(pagination.total, pagination.per_page),
                current_page = ?pagination.current_page,
                products = products.len(),
                "fetched cart page"
            );

            let next = if has_next_page(page, &pagination) {
                Cursor::Page(page + 1)
            } else {
                Cursor::Done
            };
            Ok(Some((products, next)))
        })
        .map_ok(|products| stream::iter(products.into_iter().map(Ok::<Product, FetchError>)))
        .try_flatten()
    }
}
