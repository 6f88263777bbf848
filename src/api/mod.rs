//! REST API Client
//!
//! Bindings to the label server's JSON endpoints, organized by domain.

mod forms;
mod labels;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::ErrorBody;

/// Endpoint resolver plus request helpers shared by all domains
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    config: AppConfig,
}

impl Api {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder.send().await.map_err(transport)
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request: Request = builder
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(transport)?;
    request.send().await.map_err(transport)
}

/// Turn a non-2xx response into `Rejected`, reading its `error` field if it has one
async fn reject(response: Response) -> ApiError {
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap_or_default();
    ApiError::rejected(status, body.error)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(reject(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Success body of mutations is informational only
async fn expect_ok(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(reject(response).await)
    }
}
