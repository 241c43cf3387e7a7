// fetcher crate

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Endpoint queried when no other URL is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/products";

/// Everything that can end a run before validation starts.
///
/// The `Display` text of each variant is the line printed to the console.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("API Request Failed: HTTP {0}")]
    HttpStatus(u16),

    #[error("API Response Error: Expected an array of products")]
    Shape,

    #[error("JSON Parsing Error: {0}")]
    JsonDecode(String),

    #[error("API Request Error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected Error: {0}")]
    Unexpected(String),
}

/// A successfully decoded product listing
#[derive(Debug, Clone)]
pub struct FetchedProducts {
    pub status: u16,
    pub products: Vec<Value>,
}

pub fn build_client() -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| FetchError::Unexpected(format!("Failed to build HTTP client: {}", e)))
}

/// Issue one GET against `endpoint` and decode the product array.
pub async fn fetch_products(
    client: &reqwest::Client,
    endpoint: &str,
) -> Result<FetchedProducts, FetchError> {
    logging::debug(&format!("Requesting products from {}", endpoint));

    let response = client.get(endpoint).send().await?;
    let status = response.status();
    logging::debug(&format!("Endpoint answered with HTTP {}", status.as_u16()));

    check_status(status)?;

    let body = response.text().await?;
    let products = decode_products(&body)?;

    Ok(FetchedProducts {
        status: status.as_u16(),
        products,
    })
}

/// Only an exact 200 counts as success; other 2xx codes are failures too.
pub fn check_status(status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(FetchError::HttpStatus(status.as_u16()))
    }
}

pub fn decode_products(body: &str) -> Result<Vec<Value>, FetchError> {
    let parsed: Value =
        serde_json::from_str(body).map_err(|e| FetchError::JsonDecode(e.to_string()))?;

    match parsed {
        Value::Array(products) => Ok(products),
        _ => Err(FetchError::Shape),
    }
}
