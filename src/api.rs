/// HTTP client for the backend product API
use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::product::{DeleteOutcome, ErrorBody, NewProduct, Product, ScrapeOutcome};

/// Path of the product collection on the backend.
pub const PRODUCTS_ENDPOINT: &str = "/api/products";

/// Copy shown whenever a request never produced a backend response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// How a backend call failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed, or a success body failed to decode.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("server error {status}: {message:?}")]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// Message to surface to the user, given the calling action's fallback
    /// copy. Network failures always use the shared retry copy; server
    /// failures prefer the backend's own error text when it sent any.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Server { message: None, .. } => fallback.to_string(),
        }
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("{:?}", err))
}

async fn server_error(resp: Response) -> ApiError {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => Some(body.error),
        Err(_) => None,
    };
    ApiError::Server { status, message }
}

/// Fetch every tracked product.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let resp = Request::get(PRODUCTS_ENDPOINT)
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(server_error(resp).await);
    }

    // An empty collection arrives as JSON null, not [].
    let products: Option<Vec<Product>> = resp.json().await.map_err(transport)?;
    Ok(products.unwrap_or_default())
}

/// Register a new product for tracking. Returns the stored product with its
/// backend-assigned id and detected platform.
pub async fn create_product(new: &NewProduct) -> Result<Product, ApiError> {
    let resp = Request::post(PRODUCTS_ENDPOINT)
        .json(new)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(server_error(resp).await);
    }

    resp.json().await.map_err(transport)
}

/// Ask the backend to scrape one product's current price right away.
pub async fn scrape_product(id: &str) -> Result<ScrapeOutcome, ApiError> {
    let resp = Request::post(&scrape_endpoint(id))
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(server_error(resp).await);
    }

    resp.json().await.map_err(transport)
}

/// Stop tracking a product.
pub async fn delete_product(id: &str) -> Result<DeleteOutcome, ApiError> {
    let resp = Request::delete(&product_endpoint(id))
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(server_error(resp).await);
    }

    resp.json().await.map_err(transport)
}

fn product_endpoint(id: &str) -> String {
    format!("{}/{}", PRODUCTS_ENDPOINT, id)
}

fn scrape_endpoint(id: &str) -> String {
    format!("{}/{}/scrape", PRODUCTS_ENDPOINT, id)
}
