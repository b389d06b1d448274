//! Gateway client
//!
//! Four stateless operations, each a single JSON POST to the gateway:
//! 1. `exchange_token` swaps an ephemeral token for an access token
//! 2. `get_user` fetches the verified profile behind an access token
//! 3. `revoke_access_token` invalidates an access token
//! 4. `notify` pushes a notification to the user
//!
//! Every request carries the configured `clientId` and `clientSecret`. Every
//! response goes through [`Envelope::classify`] before any operation-specific
//! handling. There are no retries; a failure is returned as-is.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ClientConfig, GatewaySettings};
use crate::constants::{ACCESS_TOKEN_PATH, GET_USER_PATH, NOTIFY_PATH, REVOKE_TOKEN_PATH};
use crate::envelope::{Envelope, Outcome};
use crate::error::{Error, Result};
use crate::notification::Notification;
use crate::profile::UserProfile;

/// Request body for `/access-token`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeRequest<'a> {
    ephemeral_token: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Request body for `/get-user`, `/revoke-token` and `/notify`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessTokenRequest<'a> {
    access_token: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<&'a Notification>,
}

/// Client for the identity gateway.
///
/// Cheap to clone; clones share the same configuration and connection pool.
/// Safe to use from many tasks at once since nothing in it is mutable.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl GatewayClient {
    /// Build a client with a default `reqwest::Client`.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Build a client around a caller-configured `reqwest::Client`.
    ///
    /// Timeouts, proxies and TLS settings live on the HTTP client; this
    /// library adds none of its own.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    /// Build a client from loaded settings, applying the configured timeout.
    pub fn from_settings(settings: GatewaySettings) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self::with_http_client(settings.client, http))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Exchange a single-use ephemeral token for an access token.
    pub async fn exchange_token(&self, ephemeral_token: &str) -> Result<String> {
        let body = ExchangeRequest {
            ephemeral_token,
            client_id: self.config.client_id(),
            client_secret: self.config.client_secret().expose(),
        };
        let data = self
            .call("exchange_token", ACCESS_TOKEN_PATH, &body)
            .await?;

        data.as_ref()
            .and_then(|data| data.get("token"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                Error::MalformedResponse("access-token response has no data.token string".into())
            })
    }

    /// Fetch the verified profile of the user behind `access_token`.
    ///
    /// The `data` object is returned whole and unvalidated; see
    /// [`UserProfile`] for lenient typed access.
    pub async fn get_user(&self, access_token: &str) -> Result<UserProfile> {
        let data = self
            .call(
                "get_user",
                GET_USER_PATH,
                &self.access_token_request(access_token, None),
            )
            .await?;

        match data {
            Some(Value::Object(raw)) => Ok(UserProfile::from(raw)),
            _ => Err(Error::MalformedResponse(
                "get-user response has no data object".into(),
            )),
        }
    }

    /// Revoke an access token.
    ///
    /// Returns `Ok(true)` once the gateway confirms; a rejection is an error,
    /// never `Ok(false)`.
    pub async fn revoke_access_token(&self, access_token: &str) -> Result<bool> {
        self.call(
            "revoke_access_token",
            REVOKE_TOKEN_PATH,
            &self.access_token_request(access_token, None),
        )
        .await?;
        Ok(true)
    }

    /// Send a push notification to the user behind `access_token`.
    pub async fn notify(&self, access_token: &str, notification: &Notification) -> Result<bool> {
        self.call(
            "notify",
            NOTIFY_PATH,
            &self.access_token_request(access_token, Some(notification)),
        )
        .await?;
        Ok(true)
    }

    fn access_token_request<'a>(
        &'a self,
        access_token: &'a str,
        notification: Option<&'a Notification>,
    ) -> AccessTokenRequest<'a> {
        AccessTokenRequest {
            access_token,
            client_id: self.config.client_id(),
            client_secret: self.config.client_secret().expose(),
            notification,
        }
    }

    /// POST `body` to `path`, decode the envelope and classify it.
    ///
    /// Returns the `data` payload on success. Tokens and the client secret
    /// are never logged.
    async fn call<B: Serialize>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<Option<Value>> {
        let url = self.config.endpoint(path);
        debug!(operation, url = %url, "calling gateway");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        let body = response.json::<Value>().await?;
        let outcome = Envelope::from_body(body)?.classify();

        match &outcome {
            Outcome::Success(_) => {
                debug!(operation, status = status.as_u16(), "gateway call succeeded");
            }
            Outcome::Failure(message) => {
                warn!(
                    operation,
                    status = status.as_u16(),
                    error = %message,
                    "gateway rejected request"
                );
            }
        }
        outcome.into_result()
    }
}
