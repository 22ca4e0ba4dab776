use std::str::FromStr;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Extension;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use log::{error, warn};
use tap::TapFallible;
use uuid::Uuid;

use crate::domain::auth::AuthSession;
use crate::routes::Api;

/// Gate for protected routes: resolves the bearer token to a live
/// session, rejecting with 401 when the token is missing, malformed,
/// unknown or expired.
#[derive(Debug, Clone)]
pub struct ExtractSession(pub Uuid, pub AuthSession);

impl<S> FromRequestParts<S> for ExtractSession
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(req: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(req, state)
                .await
                .tap_err(|e| warn!("Missing or malformed Authorization header: {}", e))
                .map_err(|_| StatusCode::UNAUTHORIZED)?;

        let token = Uuid::from_str(bearer.token())
            .tap_err(|e| warn!("Failed to parse session token: {}", e))
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        let Extension(api) = Extension::<Api>::from_request_parts(req, state)
            .await
            .tap_err(|e| error!("Failed to extract API: {}", e))
            .map_err(|_| StatusCode::UNAUTHORIZED)?;

        match api.session(token) {
            Some(session) => Ok(ExtractSession(token, session)),
            None => {
                warn!("Rejected request with no live session");
                Err(StatusCode::UNAUTHORIZED)
            }
        }
    }
}
