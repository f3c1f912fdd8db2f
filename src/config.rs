use crate::constants::{API_BASE_ENV, DEFAULT_API_BASE};

/// Resolve the store base URL: STOCK_API_BASE from the environment (a .env
/// file is honored), falling back to the local default.
pub fn api_base() -> String {
    dotenvy::dotenv().ok();
    std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}
