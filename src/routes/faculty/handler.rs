use axum::{
    Extension,
    extract::{Json, Path, Query, State},
    response::Response,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppError,
    records::{
        Award, Conference, FacultyProfile, FacultyRecordSet, Patent, Publication,
        ResearchProject,
    },
    report::compile_subject_document,
    result::{ApiResult, MessageResponse},
    routes::attachment,
    utils::Claims,
};

use super::model::{
    AwardCreate, ConferenceCreate, PatentCreate, ProfileEnvelope, ProfileUpdate,
    PublicationCreate, ResearchProjectCreate, YearFilter, upsert_profile,
};

#[axum::debug_handler]
pub async fn get_profile(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
) -> Result<Json<ApiResult<ProfileEnvelope>>, AppError> {
    let envelope = match FacultyProfile::find_by_user(&state.pool, claims.sub).await? {
        Some(profile) => ProfileEnvelope::found(profile),
        None => ProfileEnvelope::missing(&claims),
    };
    Ok(Json(ApiResult::success(envelope)))
}

#[axum::debug_handler]
pub async fn update_profile(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Json(req): Json<ProfileUpdate>,
) -> Result<Json<ApiResult<FacultyProfile>>, AppError> {
    let profile = upsert_profile(&state.pool, claims.sub, &req).await?;
    Ok(Json(ApiResult::success(profile)))
}

#[axum::debug_handler]
pub async fn list_publications(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Query(filter): Query<YearFilter>,
) -> Result<Json<ApiResult<Vec<Publication>>>, AppError> {
    let items = Publication::list_for_user(&state.pool, claims.sub, filter.year()).await?;
    Ok(Json(ApiResult::success(items)))
}

#[axum::debug_handler]
pub async fn add_publication(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Json(req): Json<PublicationCreate>,
) -> Result<Json<ApiResult<Publication>>, AppError> {
    let publication = req.insert(&state.pool, claims.sub).await?;
    Ok(Json(ApiResult::success(publication)))
}

#[axum::debug_handler]
pub async fn delete_publication(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Path(publication_id): Path<Uuid>,
) -> Result<Json<ApiResult<MessageResponse>>, AppError> {
    let deleted = Publication::delete_for_user(&state.pool, publication_id, claims.sub).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Publication"));
    }
    Ok(Json(ApiResult::success(MessageResponse {
        message: "Publication deleted".into(),
        success: true,
    })))
}

#[axum::debug_handler]
pub async fn list_awards(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Query(filter): Query<YearFilter>,
) -> Result<Json<ApiResult<Vec<Award>>>, AppError> {
    let items = Award::list_for_user(&state.pool, claims.sub, filter.year()).await?;
    Ok(Json(ApiResult::success(items)))
}

#[axum::debug_handler]
pub async fn add_award(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Json(req): Json<AwardCreate>,
) -> Result<Json<ApiResult<Award>>, AppError> {
    let award = req.insert(&state.pool, claims.sub).await?;
    Ok(Json(ApiResult::success(award)))
}

#[axum::debug_handler]
pub async fn list_research_projects(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Query(filter): Query<YearFilter>,
) -> Result<Json<ApiResult<Vec<ResearchProject>>>, AppError> {
    let items = ResearchProject::list_for_user(&state.pool, claims.sub, filter.year()).await?;
    Ok(Json(ApiResult::success(items)))
}

#[axum::debug_handler]
pub async fn add_research_project(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Json(req): Json<ResearchProjectCreate>,
) -> Result<Json<ApiResult<ResearchProject>>, AppError> {
    let project = req.insert(&state.pool, claims.sub).await?;
    Ok(Json(ApiResult::success(project)))
}

#[axum::debug_handler]
pub async fn list_patents(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Query(filter): Query<YearFilter>,
) -> Result<Json<ApiResult<Vec<Patent>>>, AppError> {
    let items = Patent::list_for_user(&state.pool, claims.sub, filter.year()).await?;
    Ok(Json(ApiResult::success(items)))
}

#[axum::debug_handler]
pub async fn add_patent(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Json(req): Json<PatentCreate>,
) -> Result<Json<ApiResult<Patent>>, AppError> {
    let patent = req.insert(&state.pool, claims.sub).await?;
    Ok(Json(ApiResult::success(patent)))
}

#[axum::debug_handler]
pub async fn list_conferences(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Query(filter): Query<YearFilter>,
) -> Result<Json<ApiResult<Vec<Conference>>>, AppError> {
    let items = Conference::list_for_user(&state.pool, claims.sub, filter.year()).await?;
    Ok(Json(ApiResult::success(items)))
}

#[axum::debug_handler]
pub async fn add_conference(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Json(req): Json<ConferenceCreate>,
) -> Result<Json<ApiResult<Conference>>, AppError> {
    let conference = req.insert(&state.pool, claims.sub).await?;
    Ok(Json(ApiResult::success(conference)))
}

#[axum::debug_handler]
pub async fn all_data(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Query(filter): Query<YearFilter>,
) -> Result<Json<ApiResult<FacultyRecordSet>>, AppError> {
    let set = FacultyRecordSet::load(&state.pool, claims.sub, filter.year())
        .await?
        .ok_or(AppError::NotFound("User"))?;
    Ok(Json(ApiResult::success(set)))
}

#[axum::debug_handler]
pub async fn export_my_pdf(
    Extension(claims): Extension<Claims>,
    State(state): State<AppState>,
    Query(filter): Query<YearFilter>,
) -> Result<Response, AppError> {
    let year = filter.year();
    let set = FacultyRecordSet::load(&state.pool, claims.sub, year)
        .await?
        .ok_or(AppError::NotFound("User"))?;

    let bytes = compile_subject_document(&set, year)?;

    let filename = format!(
        "my_profile_{}_{}.pdf",
        set.user.employee_id,
        year.unwrap_or("all")
    );
    Ok(attachment(bytes, "application/pdf", &filename))
}
