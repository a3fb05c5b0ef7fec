//! HTTP client wrapper.
//!
//! One `reqwest::Client` per process. Requests carry a bearer token only
//! when they ask for it and a session exists. There is no retry and no token
//! refresh; status handling is left to callers via [`check_response`].

use std::time::Duration;

use pref_auth::SessionStore;
use pref_config::ApiConfig;
use pref_core::dto::ErrorBody;
use pref_core::sanitize::display_text;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Which base URL a path is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `base_url + prefix` (`/api`).
    Api,
    /// The bare server origin, for actuator endpoints.
    Origin,
}

/// A request description. Built with [`ApiRequest::get`] and friends.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    authenticated: bool,
    body: Option<serde_json::Value>,
    scope: Scope,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            authenticated: false,
            body: None,
            scope: Scope::Api,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach the session token when one exists.
    #[must_use]
    pub fn authenticated(mut self, authenticated: bool) -> Self {
        self.authenticated = authenticated;
        self
    }

    /// Resolve against the server origin instead of the API root.
    #[must_use]
    pub fn at_origin(mut self) -> Self {
        self.scope = Scope::Origin;
        self
    }

    /// Set a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if `body` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Validation(format!("cannot encode request body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// A fully read response: status plus body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Read a `reqwest` response to completion.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the body cannot be read.
    pub async fn from_reqwest(resp: reqwest::Response) -> Result<Self, ApiError> {
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(Self { status, body })
    }

    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Server-provided `message` or `error` field, if the body has one,
    /// with control characters escaped.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.best_message().map(|m| display_text(m).into_owned()))
    }
}

/// Map a non-2xx response to [`ApiError::Status`], passing 2xx through.
///
/// # Errors
///
/// Returns `ApiError::Status` with the body's error message, if any.
pub fn check_response(resp: ApiResponse) -> Result<ApiResponse, ApiError> {
    if resp.is_success() {
        return Ok(resp);
    }
    Err(ApiError::Status {
        status: resp.status,
        message: resp.error_message(),
    })
}

/// Shared client for the REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_root: String,
    origin: String,
    session: SessionStore,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the TLS backend cannot be initialised.
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str());
        if config.no_proxy {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            http,
            api_root: config.api_root(),
            origin: config.origin().to_string(),
            session,
        })
    }

    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn url(&self, request: &ApiRequest) -> String {
        let base = match request.scope {
            Scope::Api => self.api_root.as_str(),
            Scope::Origin => self.origin.as_str(),
        };
        format!("{base}/{}", request.path.trim_start_matches('/'))
    }

    /// Send `request` and read the full response.
    ///
    /// Any status is returned as `Ok`; only a missing response is an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when no response was received.
    pub async fn request(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url(&request);
        let token = if request.authenticated {
            self.session.token()
        } else {
            None
        };

        tracing::debug!(
            method = %request.method,
            %url,
            bearer = token.is_some(),
            "api request"
        );

        let mut builder = self.http.request(request.method.clone(), &url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::debug!(%url, error = %e, "transport failure");
            ApiError::from(e)
        })?;
        let resp = ApiResponse::from_reqwest(resp).await?;
        tracing::debug!(%url, status = resp.status, "api response");
        Ok(resp)
    }

    /// Send, require 2xx, decode JSON.
    ///
    /// # Errors
    ///
    /// Any of `Transport`, `Status`, `Decode`.
    pub async fn get_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        check_response(self.request(request).await?)?.json()
    }

    /// Send, require 2xx, return the body as trimmed text.
    ///
    /// # Errors
    ///
    /// `Transport` or `Status`.
    pub async fn get_text(&self, request: ApiRequest) -> Result<String, ApiError> {
        let resp = check_response(self.request(request).await?)?;
        Ok(resp.text().trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pref_auth::MemoryStore;
    use pretty_assertions::assert_eq;

    fn client() -> ApiClient {
        let config = ApiConfig {
            base_url: "http://localhost:8080/".into(),
            ..Default::default()
        };
        ApiClient::new(&config, SessionStore::new(Box::new(MemoryStore::new()))).unwrap()
    }

    #[test]
    fn api_paths_resolve_under_prefix() {
        let client = client();
        assert_eq!(
            client.url(&ApiRequest::get("/students/count")),
            "http://localhost:8080/api/students/count"
        );
    }

    #[test]
    fn origin_paths_skip_prefix() {
        let client = client();
        assert_eq!(
            client.url(&ApiRequest::get("/actuator/health").at_origin()),
            "http://localhost:8080/actuator/health"
        );
    }

    #[test]
    fn check_response_passes_no_content() {
        assert!(check_response(ApiResponse::new(204, "")).is_ok());
    }

    #[test]
    fn check_response_extracts_message() {
        let err = check_response(ApiResponse::new(400, r#"{"message":"Rank taken"}"#)).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status { status: 400, message: Some(ref m) } if m == "Rank taken"
        ));
    }

    #[test]
    fn error_message_escapes_control_characters() {
        let resp = ApiResponse::new(400, r#"{"message":"bad\u001b[2J"}"#);
        assert_eq!(resp.error_message().as_deref(), Some("bad\\u{1b}[2J"));
    }

    #[test]
    fn check_response_tolerates_html_error_page() {
        let err = check_response(ApiResponse::new(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 502, message: None }));
    }

    #[tokio::test]
    async fn from_reqwest_reads_status_and_body() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(201)
                .body("42")
                .unwrap(),
        );
        let resp = ApiResponse::from_reqwest(resp).await.unwrap();
        assert_eq!(resp.status(), 201);
        assert_eq!(resp.text(), "42");
    }

    #[test]
    fn decode_error_for_wrong_shape() {
        let resp = ApiResponse::new(200, r#"{"not":"a list"}"#);
        let err = resp.json::<Vec<serde_json::Value>>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
