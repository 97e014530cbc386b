//! The request gateway.
//!
//! [`ApiClient`] owns one `reqwest::Client` with a bounded timeout and turns
//! every call into either the `data` payload of the API's success envelope or
//! exactly one [`SkaldError`]. It does not retry, cache, or dedupe: each call
//! is an independent request/response exchange.

use std::sync::Arc;

use reqwest::{Client, Method, Response, StatusCode, Url, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use skald_core::config::ApiConfig;
use skald_core::error::{Result, SkaldError};
use skald_core::model::ErrorEnvelope;

use crate::config::load_config;
use crate::session::SessionStore;

/// Header carrying the app-wide API key, when one is configured.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// HTTP gateway to the social API.
///
/// The session store is injected rather than read from ambient state, so a
/// fake store can stand in during tests. Cloning is cheap; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
    session: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client from an explicit configuration.
    ///
    /// Fails with [`SkaldError::Config`] when the base URL does not parse or
    /// the HTTP client cannot be built. The timeout from the config bounds
    /// every request issued through this client.
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|err| {
            SkaldError::config(format!("invalid API base URL '{}': {err}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SkaldError::config(format!(
                "API base URL '{}' cannot carry path segments",
                config.base_url
            )));
        }
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| SkaldError::config(format!("could not build HTTP client: {err}")))?;
        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
            session,
        })
    }

    /// Creates a client from the config file and environment overrides.
    pub fn try_from_env(session: Arc<dyn SessionStore>) -> Result<Self> {
        Self::new(load_config()?, session)
    }

    /// The session store this client reads tokens from.
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Returns the saved token or an `Unauthenticated` error carrying the
    /// calling operation's message. Never touches the network.
    pub(crate) fn require_token(&self, message: &str) -> Result<String> {
        self.session
            .token()
            .ok_or_else(|| SkaldError::unauthenticated(message))
    }

    /// Builds an endpoint URL from path segments, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SkaldError::config(format!(
                    "API base URL '{}' cannot carry path segments",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and returns the `data` field of the success envelope.
    pub(crate) async fn request_data<T, B>(
        &self,
        method: Method,
        url: Url,
        token: Option<&str>,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(method, url, token, body).await?;
        read_data(response, fallback).await
    }

    /// Sends a request whose success carries no payload (204 on delete).
    pub(crate) async fn request_no_content<B>(
        &self,
        method: Method,
        url: Url,
        token: Option<&str>,
        body: Option<&B>,
        fallback: &str,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.dispatch(method, url, token, body).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let bytes = response.bytes().await.unwrap_or_default();
        Err(extract_api_error(status, &bytes, fallback))
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        url: Url,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        debug!(%method, %url, "issuing API request");
        let mut request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.map_err(|err| {
            if err.is_timeout() {
                SkaldError::timeout(err.to_string())
            } else {
                SkaldError::network(err.to_string())
            }
        })
    }
}

/// Parses a success envelope out of a response, or maps the failure.
async fn read_data<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|err| SkaldError::network(format!("could not read response body: {err}")))?;

    if !status.is_success() {
        return Err(extract_api_error(status, &bytes, fallback));
    }

    match serde_json::from_slice::<skald_core::model::Envelope<T>>(&bytes) {
        Ok(envelope) => Ok(envelope.data),
        Err(err) => Err(SkaldError::malformed(format!(
            "expected a {{\"data\"}} envelope: {err}"
        ))),
    }
}

/// Pulls `errors[0].message` out of an error body when there is one, falling
/// back to the calling operation's generic text. An unparseable body never
/// propagates a parse failure.
pub(crate) fn extract_api_error(status: StatusCode, body: &[u8], fallback: &str) -> SkaldError {
    let message = serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.errors.into_iter().next())
        .map(|error| error.message)
        .unwrap_or_else(|| fallback.to_string());
    warn!(status = status.as_u16(), %message, "API request failed");
    SkaldError::api(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn client_with_base(base: &str) -> ApiClient {
        let config = ApiConfig::default().with_base_url(base);
        ApiClient::new(config, Arc::new(MemorySessionStore::new())).unwrap()
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let config = ApiConfig::default().with_base_url("not a url");
        let err = ApiClient::new(config, Arc::new(MemorySessionStore::new())).unwrap_err();
        assert!(matches!(err, SkaldError::Config(_)));
    }

    #[test]
    fn endpoint_joins_segments() {
        let client = client_with_base("https://api.example.com");
        let url = client.endpoint(&["social", "posts"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/social/posts");
    }

    #[test]
    fn endpoint_keeps_base_path_and_trailing_slash() {
        let client = client_with_base("https://api.example.com/v2/");
        let url = client.endpoint(&["auth", "login"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v2/auth/login");
    }

    #[test]
    fn endpoint_percent_encodes_handles() {
        let client = client_with_base("https://api.example.com");
        let url = client
            .endpoint(&["social", "profiles", "name with space"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/social/profiles/name%20with%20space"
        );
    }

    #[test]
    fn require_token_fails_without_session() {
        let client = client_with_base("https://api.example.com");
        let err = client
            .require_token("You must be logged in to view posts.")
            .unwrap_err();
        assert_eq!(
            err,
            SkaldError::unauthenticated("You must be logged in to view posts.")
        );
    }

    #[test]
    fn extract_api_error_prefers_structured_message() {
        let body = br#"{"errors":[{"message":"Not found"}]}"#;
        let err = extract_api_error(StatusCode::NOT_FOUND, body, "Could not load this post.");
        assert_eq!(err, SkaldError::api(404, "Not found"));
    }

    #[test]
    fn extract_api_error_falls_back_on_unparseable_body() {
        let err = extract_api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            b"<html>boom</html>",
            "Could not fetch posts from API.",
        );
        assert_eq!(err, SkaldError::api(500, "Could not fetch posts from API."));
    }

    #[test]
    fn extract_api_error_falls_back_on_empty_errors_list() {
        let err = extract_api_error(StatusCode::BAD_REQUEST, br#"{"errors":[]}"#, "Login failed.");
        assert_eq!(err, SkaldError::api(400, "Login failed."));
    }
}
