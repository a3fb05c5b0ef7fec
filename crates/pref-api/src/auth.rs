//! `/auth` endpoints: login, register, and identity lookup.

use pref_core::dto::{AuthResponse, LoginRequest, MeResponse, RegisterRequest, RegisterResponse};
use pref_core::{Role, Session};

use crate::error::ApiError;
use crate::http::{ApiClient, ApiRequest, check_response};

/// POST `/auth/login` and establish the returned session.
///
/// # Errors
///
/// `Transport`/`Status` from the request, `Decode` for a body without a
/// usable token or role, `Auth` when the session cannot be persisted.
pub async fn login(
    client: &ApiClient,
    username: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let request = ApiRequest::post("/auth/login").json(&LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })?;
    let auth: AuthResponse = check_response(client.request(request).await?)?.json()?;

    if auth.token.trim().is_empty() {
        return Err(ApiError::Decode("login response has no token".into()));
    }
    let role: Role = auth
        .role
        .parse()
        .map_err(|e: pref_core::CoreError| ApiError::Decode(e.to_string()))?;

    let session = Session::new(auth.token, auth.username, role);
    client.session().establish(session.clone())?;
    Ok(session)
}

/// POST `/auth/register`. A 2xx answer with an unexpected body still counts
/// as success.
///
/// # Errors
///
/// `Transport` or `Status`.
pub async fn register(
    client: &ApiClient,
    registration: &RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    let request = ApiRequest::post("/auth/register").json(registration)?;
    let resp = check_response(client.request(request).await?)?;
    Ok(resp.json::<RegisterResponse>().unwrap_or_else(|error| {
        tracing::debug!(%error, "register response body ignored");
        RegisterResponse::default()
    }))
}

/// GET `/auth/me` with the current token.
///
/// # Errors
///
/// `Transport`, `Status`, or `Decode`.
pub async fn me(client: &ApiClient) -> Result<MeResponse, ApiError> {
    client
        .get_json(ApiRequest::get("/auth/me").authenticated(true))
        .await
}
