pub mod client;
pub mod error;
pub mod pagination;
pub mod types;

pub use client::CartClient;
pub use error::FetchError;
pub use types::{CartPage, Pagination};
