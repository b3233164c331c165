use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::{
    AppState,
    error::AppError,
    utils::{Claims, Role, decode_access_token},
};

/// Verifies the bearer credential and makes the decoded claims available to
/// downstream handlers as a request extension. The role claim is trusted
/// as-is; there is no per-request datastore lookup.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::Unauthorized)?;

    let claims =
        decode_access_token(bearer.token(), &state.config).ok_or(AppError::Unauthorized)?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    let role = request
        .extensions()
        .get::<Claims>()
        .map(|claims| claims.user_type)
        .ok_or(AppError::Unauthorized)?;

    match role {
        Role::Admin => Ok(next.run(request).await),
        Role::Faculty => Err(AppError::Forbidden("Admin")),
    }
}

pub async fn require_faculty(request: Request, next: Next) -> Result<Response, AppError> {
    let role = request
        .extensions()
        .get::<Claims>()
        .map(|claims| claims.user_type)
        .ok_or(AppError::Unauthorized)?;

    match role {
        Role::Faculty => Ok(next.run(request).await),
        Role::Admin => Err(AppError::Forbidden("Faculty")),
    }
}
