//! HTTP calls made by the page.
//!
//! Each call is a single attempt. Catalog calls are raced against a timer and
//! aborted through an `AbortController` once `request_timeout_ms` elapses.

use common::config::ClientConfig;
use common::error::ServiceError;
use common::requests::{self, ValidateProductsRequest, ValidatedProducts};
use futures_util::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use web_sys::AbortController;

/// Fetches the runtime configuration published by the host.
pub async fn load_client_config() -> Result<ClientConfig, ServiceError> {
    let response = Request::get(requests::CONFIG_PATH)
        .send()
        .await
        .map_err(|e| ServiceError::Network(e.to_string()))?;
    let response = ensure_success(response).await?;
    response
        .json::<ClientConfig>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

/// Sends the parsed rows to the validation service.
pub async fn validate_products(
    config: &ClientConfig,
    rows: &ValidateProductsRequest,
) -> Result<ValidatedProducts, ServiceError> {
    let url = requests::validate_url(config);
    let response = send_json(Request::post(&url), rows, config.request_timeout_ms).await?;
    response
        .json::<ValidatedProducts>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

/// Commits the validated table. Any 2xx is success; the body is ignored.
pub async fn update_products(
    config: &ClientConfig,
    rows: &ValidatedProducts,
) -> Result<(), ServiceError> {
    let url = requests::update_url(config);
    send_json(Request::put(&url), rows, config.request_timeout_ms)
        .await
        .map(|_| ())
}

async fn send_json<T: Serialize + ?Sized>(
    builder: RequestBuilder,
    body: &T,
    timeout_ms: u32,
) -> Result<Response, ServiceError> {
    let controller =
        AbortController::new().map_err(|e| ServiceError::Network(format!("{:?}", e)))?;
    let request = builder
        .abort_signal(Some(&controller.signal()))
        .json(body)
        .map_err(|e| ServiceError::Encode(e.to_string()))?;

    let send = Box::pin(request.send());
    let timer = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(send, timer).await {
        Either::Left((result, _)) => {
            let response = result.map_err(|e| ServiceError::Network(e.to_string()))?;
            ensure_success(response).await
        }
        Either::Right(((), _)) => {
            controller.abort();
            Err(ServiceError::Timeout { timeout_ms })
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response, ServiceError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ServiceError::Status { status, body })
}
