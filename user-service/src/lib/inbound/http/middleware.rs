use auth::Identity;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Extension type carrying the caller's identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

/// Middleware that validates bearer tokens and adds the identity to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let identity = state
        .user_service
        .resolve_identity(&token)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Bearer authentication failed");
            let api_error = match e {
                UserError::Authentication(_) | UserError::AccountUnavailable => {
                    ApiError::Unauthorized("Invalid or expired token".to_string())
                }
                other => ApiError::from(other),
            };
            api_error.into_response()
        })?;

    req.extensions_mut().insert(AuthenticatedUser(identity));

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<String, Response> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| {
            ApiError::Unauthorized("Missing Authorization header".to_string()).into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        ApiError::Unauthorized("Invalid Authorization header".to_string()).into_response()
    })?;

    auth::bearer_token(auth_str)
        .map(str::to_string)
        .map_err(|_| {
            ApiError::Unauthorized(
                "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
            )
            .into_response()
        })
}
