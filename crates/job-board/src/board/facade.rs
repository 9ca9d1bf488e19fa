use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::controllers::{
    validate_company_draft, validate_component_selection, validate_job_draft,
};
use super::domain::{
    Application, ApplicationId, ApplicationStatus, Company, CompanyId, ComponentSnapshot, Job,
    JobDetail, JobId, JobStatus, ProfileDetails, ResumeComponents, ResumeId, ResumeParseStatus,
    ResumeRecord, SelectedComponents, UserId, UserProfile,
};
use super::drafts::{CompanyDraft, JobDraft, NewApplication};
use super::error::{BoardError, ValidationErrors};
use super::options::{BoardOptions, OperationClass, WritePolicy};
use super::query::{self, JobFilters, JobSearchPage};
use super::repository::{BoardRepository, RepositoryError};

/// Largest resume accepted for upload.
pub const MAX_RESUME_BYTES: u64 = 10 * 1024 * 1024;

/// Document types accepted by the resume parser.
pub const RESUME_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

const UPLOAD_BUCKET_URL: &str = "https://demo-s3-bucket.s3.amazonaws.com";

/// Outcome of a mutation. `persisted` is false when the store was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResult<T> {
    pub success: bool,
    pub persisted: bool,
    pub data: T,
}

/// Parse progress for a resume, with components once available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeStatusReport {
    pub status: ResumeParseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ResumeComponents>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeUploadRequest {
    pub filename: String,
    pub mime_type: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
}

/// Pre-signed upload target handed to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeUploadTicket {
    pub resume_id: ResumeId,
    pub upload_url: String,
    pub storage_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfirmation {
    pub success: bool,
    pub status: ResumeParseStatus,
}

/// Entry point client code calls. Every operation waits out its simulated latency first.
pub struct ApiFacade<R> {
    repository: Arc<R>,
    options: BoardOptions,
    sequence: AtomicU64,
}

impl<R> ApiFacade<R>
where
    R: BoardRepository + 'static,
{
    pub fn new(repository: Arc<R>, options: BoardOptions) -> Self {
        Self {
            repository,
            options,
            sequence: AtomicU64::new(1),
        }
    }

    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    async fn settle(&self, class: OperationClass) {
        let delay = self.options.latency.delay_for(class);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{prefix}_{id:06}")
    }

    /// Apply `write` when the policy persists. Returns whether the store changed.
    fn write_through<T>(
        &self,
        write: impl FnOnce(&R) -> Result<T, RepositoryError>,
    ) -> Result<bool, BoardError> {
        match self.options.write_policy {
            WritePolicy::Persist => {
                write(self.repository.as_ref())?;
                Ok(true)
            }
            WritePolicy::EchoOnly => Ok(false),
        }
    }

    pub async fn get_jobs(&self, filters: JobFilters) -> JobSearchPage {
        self.settle(OperationClass::List).await;
        let page = self
            .repository
            .read(|data| query::search_jobs(data, &filters, self.options.pagination));
        debug!(total = page.total, page = page.page, "job search");
        page
    }

    pub async fn get_job_by_id(&self, job_id: &JobId) -> Result<JobDetail, BoardError> {
        self.settle(OperationClass::Read).await;
        self.repository
            .read(|data| query::job_by_id(data, job_id))
            .inspect_err(|err| warn!(%err, "job lookup failed"))
    }

    pub async fn get_company_jobs(&self, company_id: &CompanyId) -> Vec<Job> {
        self.settle(OperationClass::Read).await;
        self.repository
            .read(|data| query::jobs_for_company(data, company_id))
    }

    pub async fn get_applications(&self, user_id: &UserId) -> Vec<Application> {
        self.settle(OperationClass::List).await;
        self.repository
            .read(|data| query::applications_for_user(data, user_id))
    }

    pub async fn get_job_applicants(&self, job_id: &JobId) -> Vec<Application> {
        self.settle(OperationClass::List).await;
        self.repository
            .read(|data| query::applicants_for_job(data, job_id))
    }

    /// Submit an application. The selection is resolved against the resume when it is parsed.
    pub async fn create_application(
        &self,
        request: NewApplication,
    ) -> Result<MutationResult<Application>, BoardError> {
        self.settle(OperationClass::Write).await;
        validate_component_selection(&request.selected_components).inspect_err(|errors| {
            warn!(%errors, job_id = %request.job_id.0, "application rejected")
        })?;

        let resume = self.repository.read(|data| {
            query::job_by_id(data, &request.job_id)
                .map(|_| query::resume_record(data, &request.resume_id))
        })?;

        let selected_components = match resume.and_then(|record| record.components) {
            Some(components) => {
                let snapshot =
                    ComponentSnapshot::resolve(&request.selected_components, &components);
                if snapshot.is_empty() {
                    warn!(job_id = %request.job_id.0, "selected resume sections are empty");
                    return Err(ValidationErrors::single(
                        "components",
                        "The selected resume sections have no content",
                    )
                    .into());
                }
                SelectedComponents::Snapshot(snapshot)
            }
            None => SelectedComponents::Flags(request.selected_components),
        };

        let application = Application {
            application_id: ApplicationId(self.next_id("app")),
            job_id: request.job_id,
            applicant_user_id: request.applicant_user_id,
            resume_id: request.resume_id,
            selected_components,
            note: request.note.filter(|note| !note.trim().is_empty()),
            status: ApplicationStatus::Submitted,
            applied_at: Utc::now(),
        };

        let persisted =
            self.write_through(|repository| repository.insert_application(application.clone()))?;
        info!(
            application_id = %application.application_id.0,
            job_id = %application.job_id.0,
            persisted,
            "application submitted"
        );

        Ok(MutationResult {
            success: true,
            persisted,
            data: application,
        })
    }

    pub async fn get_resume_components(
        &self,
        resume_id: &ResumeId,
    ) -> Result<ResumeComponents, BoardError> {
        self.settle(OperationClass::Read).await;
        self.repository
            .read(|data| query::resume_components(data, resume_id))
    }

    /// Unknown resumes report `parsing`, matching an upload the parser has not seen yet.
    pub async fn get_resume_status(&self, resume_id: &ResumeId) -> ResumeStatusReport {
        self.settle(OperationClass::Poll).await;
        match self
            .repository
            .read(|data| query::resume_record(data, resume_id))
        {
            Some(record) => ResumeStatusReport {
                status: record.status,
                components: record.components,
            },
            None => ResumeStatusReport {
                status: ResumeParseStatus::Parsing,
                components: None,
            },
        }
    }

    pub async fn request_resume_upload(
        &self,
        request: ResumeUploadRequest,
    ) -> Result<ResumeUploadTicket, BoardError> {
        self.settle(OperationClass::Read).await;

        let mut errors = ValidationErrors::new();
        if request.filename.trim().is_empty() {
            errors.add("filename", "A file name is required");
        }
        if !RESUME_MIME_TYPES.contains(&request.mime_type.as_str()) {
            errors.add("mime_type", "Please upload a PDF, DOC, or DOCX file");
        }
        if request.size_bytes.is_some_and(|size| size > MAX_RESUME_BYTES) {
            errors.add("size_bytes", "File size must be less than 10MB");
        }
        errors.into_result()?;

        let resume_id = ResumeId(self.next_id("res"));
        let storage_key = format!("resumes/{}", resume_id.0);
        debug!(resume_id = %resume_id.0, filename = %request.filename, "resume upload requested");

        Ok(ResumeUploadTicket {
            upload_url: format!("{UPLOAD_BUCKET_URL}/{storage_key}"),
            resume_id,
            storage_key,
        })
    }

    /// Register an uploaded file with the parser. The resume reports `parsing` afterwards.
    pub async fn confirm_resume_upload(
        &self,
        resume_id: &ResumeId,
        storage_key: &str,
    ) -> Result<UploadConfirmation, BoardError> {
        self.settle(OperationClass::List).await;
        if storage_key.trim().is_empty() {
            return Err(ValidationErrors::single("storage_key", "A storage key is required").into());
        }

        self.write_through(|repository| {
            repository.upsert_resume(ResumeRecord {
                resume_id: resume_id.clone(),
                status: ResumeParseStatus::Parsing,
                parsed_at: None,
                components: None,
            })
        })?;

        Ok(UploadConfirmation {
            success: true,
            status: ResumeParseStatus::Parsing,
        })
    }

    /// Save edited components, marking the resume parsed.
    pub async fn update_resume_components(
        &self,
        resume_id: &ResumeId,
        components: ResumeComponents,
    ) -> Result<MutationResult<ResumeRecord>, BoardError> {
        self.settle(OperationClass::Write).await;
        let record = ResumeRecord {
            resume_id: resume_id.clone(),
            status: ResumeParseStatus::Parsed,
            parsed_at: Some(Utc::now()),
            components: Some(components),
        };

        let persisted = self.write_through(|repository| repository.upsert_resume(record.clone()))?;
        info!(resume_id = %resume_id.0, persisted, "resume components saved");

        Ok(MutationResult {
            success: true,
            persisted,
            data: record,
        })
    }

    pub async fn create_job(
        &self,
        company_id: &CompanyId,
        draft: JobDraft,
    ) -> Result<MutationResult<Job>, BoardError> {
        self.settle(OperationClass::Create).await;
        validate_job_draft(&draft)?;
        self.repository
            .read(|data| query::company_by_id(data, company_id))?;

        let job = draft.into_job(
            JobId(self.next_id("job")),
            company_id.clone(),
            Utc::now(),
            JobStatus::Open,
        );

        let persisted = self.write_through(|repository| repository.insert_job(job.clone()))?;
        info!(job_id = %job.job_id.0, company_id = %company_id.0, persisted, "job created");

        Ok(MutationResult {
            success: true,
            persisted,
            data: job,
        })
    }

    /// Replace the editable fields of a posting. Company and posting date are kept.
    pub async fn update_job(
        &self,
        job_id: &JobId,
        draft: JobDraft,
    ) -> Result<MutationResult<Job>, BoardError> {
        self.settle(OperationClass::Write).await;
        validate_job_draft(&draft)?;
        let existing = self.repository.read(|data| query::job_by_id(data, job_id))?;

        let job = draft.into_job(
            job_id.clone(),
            existing.job.company_id,
            existing.job.posted_at,
            existing.job.status,
        );

        let persisted = self.write_through(|repository| repository.update_job(job.clone()))?;
        info!(job_id = %job_id.0, persisted, "job updated");

        Ok(MutationResult {
            success: true,
            persisted,
            data: job,
        })
    }

    pub async fn create_company(
        &self,
        draft: CompanyDraft,
    ) -> Result<MutationResult<Company>, BoardError> {
        self.settle(OperationClass::Create).await;
        validate_company_draft(&draft)?;

        let company = draft.into_company(CompanyId(self.next_id("comp")));
        let persisted =
            self.write_through(|repository| repository.insert_company(company.clone()))?;
        info!(company_id = %company.company_id.0, persisted, "company created");

        Ok(MutationResult {
            success: true,
            persisted,
            data: company,
        })
    }

    pub async fn update_company(
        &self,
        company_id: &CompanyId,
        draft: CompanyDraft,
    ) -> Result<MutationResult<Company>, BoardError> {
        self.settle(OperationClass::Write).await;
        validate_company_draft(&draft)?;
        self.repository
            .read(|data| query::company_by_id(data, company_id))?;

        let company = draft.into_company(company_id.clone());
        let persisted =
            self.write_through(|repository| repository.update_company(company.clone()))?;
        info!(company_id = %company_id.0, persisted, "company updated");

        Ok(MutationResult {
            success: true,
            persisted,
            data: company,
        })
    }

    pub async fn get_profile(&self, user_id: &UserId) -> Result<UserProfile, BoardError> {
        self.settle(OperationClass::List).await;
        self.repository
            .read(|data| query::profile_by_id(data, user_id))
    }

    /// Replace profile fields. The account's user type cannot change.
    pub async fn update_profile(
        &self,
        user_id: &UserId,
        details: ProfileDetails,
    ) -> Result<MutationResult<UserProfile>, BoardError> {
        self.settle(OperationClass::Write).await;
        let existing = self
            .repository
            .read(|data| query::profile_by_id(data, user_id))?;

        if details.user_type() != existing.user_type {
            warn!(user_id = %user_id.0, "rejected user type change");
            return Err(ValidationErrors::single(
                "user_type",
                format!(
                    "User type is fixed as '{}' after onboarding",
                    existing.user_type.label()
                ),
            )
            .into());
        }

        let profile = UserProfile {
            profile: details,
            ..existing
        };
        let persisted =
            self.write_through(|repository| repository.update_profile(profile.clone()))?;
        info!(user_id = %user_id.0, persisted, "profile updated");

        Ok(MutationResult {
            success: true,
            persisted,
            data: profile,
        })
    }
}
