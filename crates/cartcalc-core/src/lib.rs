pub mod app_config;
pub mod calculator;
pub mod config;
pub mod discount;
pub mod products;

use thiserror::Error;

pub use app_config::AppConfig;
pub use calculator::{calculate, Calculator, Totals};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_CARTS_ENDPOINT};
pub use discount::{CartId, DiscountPolicy, DiscountSpec, DiscountType, SpecError};
pub use products::Product;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
