// src/http.rs

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{config::Config, error::ApiError};

/// Thin wrapper around `reqwest::Client` shared by every resource service.
///
/// * Owns the backend base URL and the bearer token.
/// * Maps HTTP status codes onto `ApiError`.
/// * Decodes JSON bodies into typed models.
#[derive(Debug, Clone)]
pub struct HttpService {
    client: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpService {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.api_base_url)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: config.api_token.clone(),
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.request(Method::GET, path)?;
        self.execute(path, req).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self.request(Method::GET, path)?.query(query);
        self.execute(path, req).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::POST, path)?.json(body);
        self.execute(path, req).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::PUT, path)?.json(body);
        self.execute(path, req).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::PATCH, path)?.json(body);
        self.execute(path, req).await
    }

    pub async fn patch_with_query<T, Q, B>(
        &self,
        path: &str,
        query: &Q,
        body: &B,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::PATCH, path)?.query(query).json(body);
        self.execute(path, req).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.request(Method::DELETE, path)?;
        self.execute(path, req).await
    }

    pub async fn delete_with_body<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let req = self.request(Method::DELETE, path)?.json(body);
        self.execute(path, req).await
    }

    pub async fn delete_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let req = self.request(Method::DELETE, path)?.query(query);
        self.execute(path, req).await
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.base_url.join(path)?;
        let mut req = self.client.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        Ok(req)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        req: RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = req.send().await.map_err(|e| {
            tracing::error!("Request to {} failed: {}", path, e);
            ApiError::from(e)
        })?;

        let status = resp.status();
        if status.is_success() {
            tracing::debug!("{} -> {}", path, status);
            resp.json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::status_error(path, status, resp).await)
        }
    }

    /// Converts a non-2xx response into the matching `ApiError` variant,
    /// pulling the message out of the backend's `{"error": "..."}` body
    /// when present.
    async fn status_error(path: &str, status: StatusCode, resp: Response) -> ApiError {
        let message = match resp.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| body.to_string()),
            Err(_) => status.to_string(),
        };

        tracing::debug!("{} -> {}: {}", path, status, message);

        match status {
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(message)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(message),
            _ => ApiError::Server(message),
        }
    }
}
