use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::controllers::{filter_by_status, Pagination, PosterDashboardStats, StatusCounts};
use super::domain::{
    Application, CompanyId, Job, JobId, ProfileDetails, ResumeComponents, ResumeId, UserId,
};
use super::drafts::{CompanyDraft, JobDraft, NewApplication};
use super::error::BoardError;
use super::facade::{ApiFacade, ResumeUploadRequest};
use super::query::{JobFilters, JobSearchPage};
use super::repository::{BoardRepository, RepositoryError};

type SharedFacade<R> = State<Arc<ApiFacade<R>>>;

/// Router builder exposing the facade as JSON endpoints.
pub fn board_router<R>(facade: Arc<ApiFacade<R>>) -> Router
where
    R: BoardRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/jobs",
            get(list_jobs_handler::<R>).post(create_job_handler::<R>),
        )
        .route(
            "/api/v1/jobs/:job_id",
            get(job_detail_handler::<R>).put(update_job_handler::<R>),
        )
        .route(
            "/api/v1/jobs/:job_id/applicants",
            get(job_applicants_handler::<R>),
        )
        .route("/api/v1/companies", post(create_company_handler::<R>))
        .route(
            "/api/v1/companies/:company_id",
            put(update_company_handler::<R>),
        )
        .route(
            "/api/v1/companies/:company_id/jobs",
            get(company_jobs_handler::<R>),
        )
        .route(
            "/api/v1/companies/:company_id/dashboard",
            get(company_dashboard_handler::<R>),
        )
        .route(
            "/api/v1/users/:user_id/applications",
            get(user_applications_handler::<R>),
        )
        .route(
            "/api/v1/users/:user_id/profile",
            get(profile_handler::<R>).put(update_profile_handler::<R>),
        )
        .route(
            "/api/v1/applications",
            post(create_application_handler::<R>),
        )
        .route("/api/v1/resume-uploads", post(resume_upload_handler::<R>))
        .route(
            "/api/v1/resumes/:resume_id/confirm",
            post(confirm_upload_handler::<R>),
        )
        .route(
            "/api/v1/resumes/:resume_id/status",
            get(resume_status_handler::<R>),
        )
        .route(
            "/api/v1/resumes/:resume_id/components",
            get(resume_components_handler::<R>).put(update_resume_components_handler::<R>),
        )
        .with_state(facade)
}

/// Query string form of [`JobFilters`]. Tags arrive comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct JobSearchQuery {
    pub location: Option<String>,
    pub experience_level: Option<String>,
    pub visa_sponsorship: Option<bool>,
    pub tags: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl From<JobSearchQuery> for JobFilters {
    fn from(query: JobSearchQuery) -> Self {
        let tags = query
            .tags
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        JobFilters {
            location: query.location,
            experience_level: query.experience_level,
            visa_sponsorship: query.visa_sponsorship,
            tags,
            page: query.page,
            limit: query.limit,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    #[serde(flatten)]
    pub page: JobSearchPage,
    pub total_pages: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<Application>,
    pub status_counts: StatusCounts,
}

impl ApplicationListResponse {
    /// Counts always cover every record; the list honours the status filter.
    fn build(applications: Vec<Application>, status: Option<String>) -> Self {
        let status_counts = StatusCounts::tally(&applications);
        let applications = match status {
            Some(filter) => filter_by_status(&applications, &filter)
                .into_iter()
                .cloned()
                .collect(),
            None => applications,
        };
        Self {
            applications,
            status_counts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompanyDashboardResponse {
    pub jobs: Vec<Job>,
    pub stats: PosterDashboardStats,
}

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub company_id: CompanyId,
    #[serde(flatten)]
    pub draft: JobDraft,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmUploadRequest {
    pub storage_key: String,
}

pub(crate) fn error_response(error: BoardError) -> Response {
    let status = match &error {
        BoardError::NotFound { .. } | BoardError::Repository(RepositoryError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        BoardError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        BoardError::Repository(RepositoryError::Conflict(_)) => StatusCode::CONFLICT,
    };

    let payload = match &error {
        BoardError::Validation(fields) => json!({
            "error": error.to_string(),
            "fields": fields,
        }),
        _ => json!({ "error": error.to_string() }),
    };

    (status, Json(payload)).into_response()
}

fn respond<T: Serialize>(status: StatusCode, result: Result<T, BoardError>) -> Response {
    match result {
        Ok(body) => (status, Json(body)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_jobs_handler<R>(
    State(facade): SharedFacade<R>,
    Query(query): Query<JobSearchQuery>,
) -> Response
where
    R: BoardRepository + 'static,
{
    let page = facade.get_jobs(query.into()).await;
    let total_pages = Pagination::from_search(&page).total_pages();
    (StatusCode::OK, Json(JobListResponse { page, total_pages })).into_response()
}

pub(crate) async fn job_detail_handler<R>(
    State(facade): SharedFacade<R>,
    Path(job_id): Path<String>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(StatusCode::OK, facade.get_job_by_id(&JobId(job_id)).await)
}

pub(crate) async fn create_job_handler<R>(
    State(facade): SharedFacade<R>,
    Json(request): Json<CreateJobRequest>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(
        StatusCode::CREATED,
        facade.create_job(&request.company_id, request.draft).await,
    )
}

pub(crate) async fn update_job_handler<R>(
    State(facade): SharedFacade<R>,
    Path(job_id): Path<String>,
    Json(draft): Json<JobDraft>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(StatusCode::OK, facade.update_job(&JobId(job_id), draft).await)
}

pub(crate) async fn job_applicants_handler<R>(
    State(facade): SharedFacade<R>,
    Path(job_id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Response
where
    R: BoardRepository + 'static,
{
    let applicants = facade.get_job_applicants(&JobId(job_id)).await;
    let body = ApplicationListResponse::build(applicants, query.status);
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn create_company_handler<R>(
    State(facade): SharedFacade<R>,
    Json(draft): Json<CompanyDraft>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(StatusCode::CREATED, facade.create_company(draft).await)
}

pub(crate) async fn update_company_handler<R>(
    State(facade): SharedFacade<R>,
    Path(company_id): Path<String>,
    Json(draft): Json<CompanyDraft>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(
        StatusCode::OK,
        facade.update_company(&CompanyId(company_id), draft).await,
    )
}

pub(crate) async fn company_jobs_handler<R>(
    State(facade): SharedFacade<R>,
    Path(company_id): Path<String>,
) -> Response
where
    R: BoardRepository + 'static,
{
    let jobs = facade.get_company_jobs(&CompanyId(company_id)).await;
    (StatusCode::OK, Json(jobs)).into_response()
}

pub(crate) async fn company_dashboard_handler<R>(
    State(facade): SharedFacade<R>,
    Path(company_id): Path<String>,
) -> Response
where
    R: BoardRepository + 'static,
{
    let jobs = facade.get_company_jobs(&CompanyId(company_id)).await;
    let mut applications = Vec::new();
    for job in &jobs {
        applications.extend(facade.get_job_applicants(&job.job_id).await);
    }
    let stats = PosterDashboardStats::from_records(&jobs, &applications);
    (StatusCode::OK, Json(CompanyDashboardResponse { jobs, stats })).into_response()
}

pub(crate) async fn user_applications_handler<R>(
    State(facade): SharedFacade<R>,
    Path(user_id): Path<String>,
    Query(query): Query<StatusQuery>,
) -> Response
where
    R: BoardRepository + 'static,
{
    let applications = facade.get_applications(&UserId(user_id)).await;
    let body = ApplicationListResponse::build(applications, query.status);
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn profile_handler<R>(
    State(facade): SharedFacade<R>,
    Path(user_id): Path<String>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(StatusCode::OK, facade.get_profile(&UserId(user_id)).await)
}

pub(crate) async fn update_profile_handler<R>(
    State(facade): SharedFacade<R>,
    Path(user_id): Path<String>,
    Json(details): Json<ProfileDetails>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(
        StatusCode::OK,
        facade.update_profile(&UserId(user_id), details).await,
    )
}

pub(crate) async fn create_application_handler<R>(
    State(facade): SharedFacade<R>,
    Json(request): Json<NewApplication>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(StatusCode::CREATED, facade.create_application(request).await)
}

pub(crate) async fn resume_upload_handler<R>(
    State(facade): SharedFacade<R>,
    Json(request): Json<ResumeUploadRequest>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(StatusCode::CREATED, facade.request_resume_upload(request).await)
}

pub(crate) async fn confirm_upload_handler<R>(
    State(facade): SharedFacade<R>,
    Path(resume_id): Path<String>,
    Json(request): Json<ConfirmUploadRequest>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(
        StatusCode::ACCEPTED,
        facade
            .confirm_resume_upload(&ResumeId(resume_id), &request.storage_key)
            .await,
    )
}

pub(crate) async fn resume_status_handler<R>(
    State(facade): SharedFacade<R>,
    Path(resume_id): Path<String>,
) -> Response
where
    R: BoardRepository + 'static,
{
    let report = facade.get_resume_status(&ResumeId(resume_id)).await;
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn resume_components_handler<R>(
    State(facade): SharedFacade<R>,
    Path(resume_id): Path<String>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(
        StatusCode::OK,
        facade.get_resume_components(&ResumeId(resume_id)).await,
    )
}

pub(crate) async fn update_resume_components_handler<R>(
    State(facade): SharedFacade<R>,
    Path(resume_id): Path<String>,
    Json(components): Json<ResumeComponents>,
) -> Response
where
    R: BoardRepository + 'static,
{
    respond(
        StatusCode::OK,
        facade
            .update_resume_components(&ResumeId(resume_id), components)
            .await,
    )
}
