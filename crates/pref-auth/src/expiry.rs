use base64::Engine as _;

use crate::error::AuthError;

/// Decode the JWT `exp` claim without verifying the signature.
///
/// Only used for status display; the backend is the authority on validity.
///
/// # Errors
///
/// Returns `AuthError::InvalidSession` if the JWT format is invalid or the
/// `exp` claim is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<chrono::DateTime<chrono::Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::InvalidSession("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::InvalidSession(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::InvalidSession(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::InvalidSession("missing exp claim".into()))?;
    chrono::DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::InvalidSession("invalid exp timestamp".into()))
}

#[cfg(test)]
pub(crate) fn make_jwt_with_exp(exp: i64) -> String {
    let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .encode(format!(r#"{{"sub":"alice","exp":{exp}}}"#));
    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("fake_sig");
    format!("{header}.{payload}.{signature}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_expiry_valid_jwt() {
        let future_exp = chrono::Utc::now().timestamp() + 3600;
        let dt = decode_expiry(&make_jwt_with_exp(future_exp)).unwrap();
        assert_eq!(dt.timestamp(), future_exp);
    }

    #[test]
    fn decode_expiry_expired_jwt() {
        let past_exp = chrono::Utc::now().timestamp() - 3600;
        let dt = decode_expiry(&make_jwt_with_exp(past_exp)).unwrap();
        assert!(dt < chrono::Utc::now());
    }

    #[test]
    fn decode_expiry_invalid_format() {
        let result = decode_expiry("not-a-jwt");
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("invalid JWT format")
        );
    }

    #[test]
    fn decode_expiry_missing_exp_claim() {
        let header = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(r#"{"sub":"alice"}"#);
        let jwt = format!("{header}.{payload}.sig");

        let result = decode_expiry(&jwt);
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("missing exp claim")
        );
    }
}
