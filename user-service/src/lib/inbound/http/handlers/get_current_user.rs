use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Echo the identity the bearer token resolved to.
pub async fn get_current_user(
    Extension(AuthenticatedUser(identity)): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<CurrentUserData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        CurrentUserData {
            id: identity.id,
            name: identity.name,
            email: identity.email,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserData {
    pub id: i64,
    pub name: String,
    pub email: String,
}
