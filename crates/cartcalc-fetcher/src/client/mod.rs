//! HTTP client for the paged carts endpoint.

mod fetch_cart;

use std::time::Duration;

use reqwest::{Client, Url};

use cartcalc_core::{AppConfig, CartId};

use crate::error::FetchError;
use crate::types::CartPage;

/// HTTP client for the carts endpoint.
///
/// Non-2xx responses and unparseable bodies are returned as typed errors.
/// Nothing is retried: the first failure ends the fetch.
pub struct CartClient {
    pub(super) client: Client,
    pub(super) endpoint: Url,
    /// Maximum number of pages walked for one cart before giving up.
    /// `None` trusts the cart's declared `total`.
    pub(super) max_pages: Option<u64>,
}

impl CartClient {
    /// Creates a `CartClient` for `endpoint`.
    ///
    /// `timeout_secs` of `None` leaves requests without a timeout and
    /// `max_pages` of `None` walks every page the cart declares.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidEndpoint`] if `endpoint` is not an absolute URL.
    /// - [`FetchError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(
        endpoint: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
        max_pages: Option<u64>,
    ) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint).map_err(|e| FetchError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
            max_pages,
        })
    }

    /// Creates a `CartClient` from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`CartClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(
            &config.carts_endpoint,
            &config.user_agent,
            config.request_timeout_secs,
            config.max_pages,
        )
    }

    /// Fetches a single page of a cart.
    ///
    /// # Errors
    ///
    /// - [`FetchError::UnexpectedStatus`] — any non-2xx status.
    /// - [`FetchError::Http`] — network or TLS failure.
    /// - [`FetchError::Deserialize`] — response body is not a valid cart page.
    pub async fn fetch_cart_page(&self, id: &CartId, page: u64) -> Result<CartPage, FetchError> {
        let url = self.page_url(id, page);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<CartPage>(&body).map_err(|e| FetchError::Deserialize {
            context: format!("cart {id} page {page}"),
            source: e,
        })
    }

    /// Builds the request URL for one page of a cart.
    fn page_url(&self, id: &CartId, page: u64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("id", &id.to_string())
            .append_pair("page", &page.to_string());
        url
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
