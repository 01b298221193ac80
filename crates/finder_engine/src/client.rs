use std::time::Duration;

use serde_json::Value;

use crate::{FailureKind, LookupError};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The one network call the application makes: POST a JSON request body to a
/// backend endpoint and get the JSON response back.
#[async_trait::async_trait]
pub trait LookupBackend: Send + Sync {
    async fn lookup(&self, endpoint: &str, request: &Value) -> Result<Value, LookupError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: ClientSettings,
}

impl ReqwestBackend {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, LookupError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| LookupError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl LookupBackend for ReqwestBackend {
    async fn lookup(&self, endpoint: &str, request: &Value) -> Result<Value, LookupError> {
        let url = format!("{}{}", self.settings.base_url.trim_end_matches('/'), endpoint);
        let parsed = reqwest::Url::parse(&url)
            .map_err(|err| LookupError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(parsed)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // The body is the server's own error text; surface it verbatim.
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.to_string()
            } else {
                body
            };
            return Err(LookupError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        response.json::<Value>().await.map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        return LookupError::new(FailureKind::Timeout, err.to_string());
    }
    LookupError::new(FailureKind::Network, err.to_string())
}
