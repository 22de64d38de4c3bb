/**
 * HTTP Client Core
 *
 * Performs one JSON round-trip to `{base_url}{endpoint}`, injecting the
 * current bearer token when one is stored. Status handling is centralized
 * here: 401 becomes a typed `AuthenticationRequired` failure (storage and
 * navigation reactions live in the policy layer), any other non-2xx becomes
 * an `Http` error with the best-effort server message. No retries.
 */

use std::sync::Arc;

use futures_util::StreamExt;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::config::Config;
use crate::error::ApiError;
use crate::token::TokenStore;

/// Authenticated JSON client for the LockHaven API.
///
/// Cheap to clone; the underlying connection pool and token store are shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: Config,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Build a client from configuration and a token store.
    pub fn new(config: Config, store: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            config,
            store,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle to the durable token slot.
    pub fn store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.store)
    }

    /// GET an endpoint and decode the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let request = self.builder(Method::GET, endpoint);
        self.run_json(endpoint, request).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.builder(Method::POST, endpoint).json(body);
        self.run_json(endpoint, request).await
    }

    /// POST with no body and decode the JSON response.
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let request = self.builder(Method::POST, endpoint);
        self.run_json(endpoint, request).await
    }

    /// POST a multipart form and decode the JSON response.
    ///
    /// No JSON content type is set here; reqwest supplies the multipart
    /// boundary header itself.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let request = self.builder(Method::POST, endpoint).multipart(form);
        self.run_json(endpoint, request).await
    }

    /// GET an endpoint and return the raw response body.
    pub async fn get_bytes(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.builder(Method::GET, endpoint);
        let result = async {
            let response = self.execute(request).await?;
            Ok(response.bytes().await?.to_vec())
        }
        .await;
        self.log_failure(endpoint, result)
    }

    /// GET an endpoint and stream the response body into `writer`.
    ///
    /// Returns the number of bytes written.
    pub async fn download_to<W: std::io::Write>(
        &self,
        endpoint: &str,
        writer: &mut W,
    ) -> Result<u64, ApiError> {
        let request = self.builder(Method::GET, endpoint);
        let result = async {
            let response = self.execute(request).await?;
            let mut stream = response.bytes_stream();
            let mut written = 0u64;
            while let Some(chunk) = stream.next().await {
                let chunk = chunk?;
                writer
                    .write_all(&chunk)
                    .map_err(|err| ApiError::Network(format!("failed to write download: {}", err)))?;
                written += chunk.len() as u64;
            }
            Ok(written)
        }
        .await;
        self.log_failure(endpoint, result)
    }

    /// Start a request, attaching the bearer token if one is stored.
    ///
    /// The token is read from the store at call time, never cached.
    fn builder(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = self.config.endpoint_url(endpoint);
        debug!(%method, %url, "API call");
        let request = self.http.request(method, url);
        match self.store.load() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn run_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let result = async {
            let response = self.execute(request).await?;
            Ok(response.json::<T>().await?)
        }
        .await;
        self.log_failure(endpoint, result)
    }

    /// Send the request and map the status line into the error taxonomy.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthenticationRequired);
        }
        if !status.is_success() {
            return Err(Self::error_from_body(status, response).await);
        }
        Ok(response)
    }

    /// Extract a human-readable message from an error body, falling back to
    /// `HTTP <status>` when the body is not JSON or has no `message` field.
    async fn error_from_body(status: StatusCode, response: Response) -> ApiError {
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            });
        match message {
            Some(message) => ApiError::Http {
                status: status.as_u16(),
                message,
            },
            None => ApiError::http_status(status.as_u16()),
        }
    }

    /// Observability only: failures are logged here, then surfaced unchanged.
    fn log_failure<T>(&self, endpoint: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(err) = &result {
            error!(endpoint, "API call failed: {}", err);
        }
        result
    }
}
