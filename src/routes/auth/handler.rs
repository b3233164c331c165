use axum::{
    Extension,
    extract::{Json, State},
};

use crate::{
    AppState,
    error::AppError,
    records::{AdminAccount, FacultyAccount},
    result::{ApiResult, MessageResponse},
    utils::{Claims, create_access_token, generate_password, hash_password},
};

use super::model::{
    FacultyCreateRequest, LoginRequest, LoginResponse, MeResponse, authenticate,
};

const GENERATED_PASSWORD_LENGTH: usize = 12;

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResult<LoginResponse>>, AppError> {
    let admin = AdminAccount::find_by_email(&state.pool, &req.email).await?;
    let faculty = FacultyAccount::find_by_email(&state.pool, &req.email).await?;

    let identity = authenticate(admin, faculty, &req.password)?;

    let token =
        create_access_token(&identity, &state.config, None).map_err(|_| AppError::Internal)?;

    tracing::info!("{:?} login for {}", identity.role, identity.email);

    Ok(Json(ApiResult::success(LoginResponse {
        access_token: token,
        token_type: "bearer".into(),
        user_type: identity.role,
        user_id: identity.id,
        name: identity.name,
    })))
}

#[axum::debug_handler]
pub async fn me(Extension(claims): Extension<Claims>) -> Json<ApiResult<MeResponse>> {
    Json(ApiResult::success(MeResponse {
        user_id: claims.sub,
        email: claims.email,
        user_type: claims.user_type,
        name: claims.name,
    }))
}

/// Provision a faculty account: generate a credential, store its hash and
/// deliver it by email. Mail failure is non-fatal; the credential comes back
/// inline so the admin can hand it over out of band.
#[axum::debug_handler]
pub async fn generate_faculty_password(
    State(state): State<AppState>,
    Json(req): Json<FacultyCreateRequest>,
) -> Result<Json<ApiResult<MessageResponse>>, AppError> {
    if FacultyAccount::email_exists(&state.pool, &req.email).await? {
        return Err(AppError::DuplicateIdentity("Email"));
    }
    if FacultyAccount::employee_id_exists(&state.pool, &req.employee_id).await? {
        return Err(AppError::DuplicateIdentity("Employee ID"));
    }

    let plain_password = generate_password(GENERATED_PASSWORD_LENGTH);
    let hashed = hash_password(&plain_password).map_err(|_| AppError::Internal)?;

    let account = FacultyAccount::insert(
        &state.pool,
        &req.email,
        &req.name,
        &req.employee_id,
        req.phone.as_deref(),
        &hashed,
    )
    .await?;

    let mailer = state.mailer.clone();
    let (to, name, credential) = (
        account.email.clone(),
        account.name.clone(),
        plain_password.clone(),
    );
    let email_sent =
        tokio::task::spawn_blocking(move || mailer.send_credentials(&to, &name, &credential))
            .await
            .unwrap_or(false);

    let message = if email_sent {
        format!(
            "Faculty account created and password sent to {}",
            account.email
        )
    } else {
        format!("Faculty account created but email failed. Password: {plain_password}")
    };

    Ok(Json(ApiResult::success(MessageResponse {
        message,
        success: true,
    })))
}
