//! Account activation flow
//!
//! The activation page reads a token from the query string and, once the
//! user confirms, submits it to the backend. The result is reduced to one of
//! two outcomes: navigate home, or show the generic failure alert.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::{form_urlencoded, Url};

use crate::api::{ACTIVATE_PATH, HOME_PATH};
use crate::{Error, Result};

pub mod http;

pub use http::HttpActivationApi;

/// Shown to the user for every failed activation, whatever the cause.
pub const ACTIVATION_FAILED_MESSAGE: &str = "There was an error confirming your registration.";

/// Opaque activation token taken from the page URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationToken(String);

impl ActivationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Extract the `token` parameter from a raw query string.
    ///
    /// The first `token` pair wins and its value is form-url-decoded. A
    /// missing query or parameter yields the empty token.
    pub fn from_query(raw: Option<&str>) -> Self {
        let token = raw
            .and_then(|query| {
                form_urlencoded::parse(query.as_bytes())
                    .find(|(key, _)| key == "token")
                    .map(|(_, value)| value.into_owned())
            })
            .unwrap_or_default();

        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// JSON body of `POST /auth/activate`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivateRequest {
    pub token: String,
}

impl From<&ActivationToken> for ActivateRequest {
    fn from(token: &ActivationToken) -> Self {
        Self {
            token: token.0.clone(),
        }
    }
}

/// Backend seam for confirming activation tokens
#[async_trait]
pub trait ActivationApi: Send + Sync {
    /// Submit the token. `Ok` means the backend answered with a 2xx status.
    async fn activate(&self, token: &ActivationToken) -> Result<()>;
}

/// What the page does after a confirmation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Navigate to the given path
    Navigate(&'static str),
    /// Block on an alert with the given message
    Alert(&'static str),
}

/// Submit the token once and map the result to an outcome.
///
/// No retry and no de-duplication: each call is one backend request.
pub async fn confirm(api: &dyn ActivationApi, token: &ActivationToken) -> ActivationOutcome {
    match api.activate(token).await {
        Ok(()) => {
            tracing::info!(empty_token = token.is_empty(), "Account activation confirmed");
            ActivationOutcome::Navigate(HOME_PATH)
        }
        Err(err) => {
            tracing::warn!(error = %err, empty_token = token.is_empty(), "Account activation failed");
            ActivationOutcome::Alert(ACTIVATION_FAILED_MESSAGE)
        }
    }
}

/// Build the activation page URL that out-of-band emails link to.
pub fn activation_link(frontend_base: &str, token: &str) -> Result<Url> {
    let mut url = Url::parse(frontend_base)
        .map_err(|e| Error::config(format!("invalid frontend URL '{}': {}", frontend_base, e)))?;

    url.path_segments_mut()
        .map_err(|_| Error::config(format!("frontend URL '{}' cannot be a base", frontend_base)))?
        .pop_if_empty()
        .push(ACTIVATE_PATH.trim_start_matches('/'));

    url.query_pairs_mut().clear().append_pair("token", token);

    Ok(url)
}
