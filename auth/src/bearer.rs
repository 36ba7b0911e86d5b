use crate::jwt::AuthenticationError;

const BEARER_SCHEME: &str = "Bearer";

/// Pull the raw token out of an `Authorization` header value.
///
/// The scheme is matched case-insensitively; anything other than a
/// non-empty `Bearer <token>` is rejected.
pub fn bearer_token(header_value: &str) -> Result<&str, AuthenticationError> {
    let (scheme, token) = header_value
        .trim()
        .split_once(' ')
        .ok_or(AuthenticationError::MissingBearer)?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(AuthenticationError::MissingBearer);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthenticationError::MissingBearer);
    }

    Ok(token)
}
