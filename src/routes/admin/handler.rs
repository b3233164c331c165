use axum::{
    extract::{Json, Path, Query, State},
    response::Response,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::AppError,
    records::FacultyRecordSet,
    report::{compile_roster_spreadsheet, compile_roster_summary, compile_subject_document},
    result::ApiResult,
    routes::attachment,
    routes::faculty::model::YearFilter,
};

use super::model::{
    AcademicYearsResponse, DepartmentsResponse, ExportQuery, FacultyListResponse, RosterQuery,
    apply_roster_filters, build_roster, list_academic_years, list_departments,
    list_faculty_with_profiles, non_empty,
};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[axum::debug_handler]
pub async fn list_faculty(
    State(state): State<AppState>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<ApiResult<FacultyListResponse>>, AppError> {
    let items = list_faculty_with_profiles(&state.pool).await?;
    let faculty = apply_roster_filters(
        items,
        non_empty(query.search.as_deref()),
        non_empty(query.department.as_deref()),
        non_empty(query.designation.as_deref()),
    );

    let total = faculty.len();
    Ok(Json(ApiResult::success(FacultyListResponse {
        faculty,
        total,
    })))
}

#[axum::debug_handler]
pub async fn faculty_details(
    State(state): State<AppState>,
    Path(faculty_id): Path<Uuid>,
    Query(filter): Query<YearFilter>,
) -> Result<Json<ApiResult<FacultyRecordSet>>, AppError> {
    let set = FacultyRecordSet::load(&state.pool, faculty_id, filter.year())
        .await?
        .ok_or(AppError::NotFound("Faculty"))?;
    Ok(Json(ApiResult::success(set)))
}

#[axum::debug_handler]
pub async fn export_faculty_pdf(
    State(state): State<AppState>,
    Path(faculty_id): Path<Uuid>,
    Query(filter): Query<YearFilter>,
) -> Result<Response, AppError> {
    let year = filter.year();
    let set = FacultyRecordSet::load(&state.pool, faculty_id, year)
        .await?
        .ok_or(AppError::NotFound("Faculty"))?;

    let bytes = compile_subject_document(&set, year)?;

    let filename = format!(
        "faculty_{}_{}.pdf",
        set.user.employee_id,
        year.unwrap_or("all")
    );
    Ok(attachment(bytes, "application/pdf", &filename))
}

#[axum::debug_handler]
pub async fn export_all_excel(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let year = query.academic_year();
    let rows = build_roster(&state.pool, year, query.department(), query.designation()).await?;

    let bytes = compile_roster_spreadsheet(&rows, year)?;

    let filename = format!("all_faculty_{}.xlsx", year.unwrap_or("all_years"));
    Ok(attachment(bytes, XLSX_CONTENT_TYPE, &filename))
}

#[axum::debug_handler]
pub async fn export_all_pdf(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, AppError> {
    let year = query.academic_year();
    let department = query.department();
    let rows = build_roster(&state.pool, year, department, query.designation()).await?;

    let bytes = compile_roster_summary(&rows, year, department)?;

    let filename = format!(
        "faculty_summary_{}_{}.pdf",
        year.unwrap_or("all"),
        department.unwrap_or("all_depts")
    );
    Ok(attachment(bytes, "application/pdf", &filename))
}

#[axum::debug_handler]
pub async fn academic_years(
    State(state): State<AppState>,
) -> Result<Json<ApiResult<AcademicYearsResponse>>, AppError> {
    let academic_years = list_academic_years(&state.pool).await?;
    Ok(Json(ApiResult::success(AcademicYearsResponse {
        academic_years,
    })))
}

#[axum::debug_handler]
pub async fn departments(
    State(state): State<AppState>,
) -> Result<Json<ApiResult<DepartmentsResponse>>, AppError> {
    let departments = list_departments(&state.pool).await?;
    Ok(Json(ApiResult::success(DepartmentsResponse {
        departments,
    })))
}
