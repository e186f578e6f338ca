//! reqwest-backed activation client

use async_trait::async_trait;

use crate::{Error, Result};

use super::{ActivateRequest, ActivationApi, ActivationToken};

const ACTIVATE_ENDPOINT: &str = "/auth/activate";

/// Confirms tokens against `POST {base_url}/auth/activate`
#[derive(Debug, Clone)]
pub struct HttpActivationApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpActivationApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), ACTIVATE_ENDPOINT);
        Self { client, endpoint }
    }

    /// Full URL the token is posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ActivationApi for HttpActivationApi {
    async fn activate(&self, token: &ActivationToken) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ActivateRequest::from(token))
            .send()
            .await
            .map_err(|e| {
                Error::activation_failed(format!("request to {} failed: {}", self.endpoint, e))
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::activation_failed(format!(
                "backend responded with {}",
                status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let api = HttpActivationApi::new("http://localhost:8080/v1");
        assert_eq!(api.endpoint(), "http://localhost:8080/v1/auth/activate");

        let api = HttpActivationApi::new("http://localhost:8080/v1/");
        assert_eq!(api.endpoint(), "http://localhost:8080/v1/auth/activate");
    }
}
