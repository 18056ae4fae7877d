#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog endpoint queried with `?id=<cart>&page=<n>`.
    pub carts_endpoint: String,
    pub log_level: String,
    pub user_agent: String,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub request_timeout_secs: Option<u64>,
    /// Upper bound on pages walked for a single cart. `None` walks until the
    /// cart's declared `total` is reached.
    pub max_pages: Option<u64>,
}
