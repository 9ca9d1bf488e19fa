//! Job board data-access core: seeded store, queries, the async API facade, and the
//! view-state helpers pages derive from facade results.

pub mod controllers;
pub mod domain;
pub mod drafts;
pub mod error;
pub mod facade;
pub mod options;
pub mod query;
pub mod repository;
pub mod router;
pub mod seed;
pub mod store;

#[cfg(test)]
mod tests;

pub use controllers::{
    default_component_selection, filter_by_status, section_summary, toggle_section, total_pages,
    validate_company_draft, validate_component_selection, validate_job_draft, JobSearchState,
    Pagination, PosterDashboardStats, ResumeSection, StatusCounts, StatusRecord,
};
pub use domain::{
    ApplicantDetails, Application, ApplicationId, ApplicationStatus, Company, CompanyId,
    ComponentSelection, ComponentSnapshot, ContactInfo, Education, Experience, Job, JobDetail,
    JobId, JobStatus, PosterDetails, ProfileDetails, Project, ResumeComponents, ResumeId,
    ResumeParseStatus, ResumeRecord, SelectedComponents, SkillSet, UserId, UserProfile, UserType,
};
pub use drafts::{CompanyDraft, JobDraft, NewApplication};
pub use error::{BoardError, ValidationErrors};
pub use facade::{
    ApiFacade, MutationResult, ResumeStatusReport, ResumeUploadRequest, ResumeUploadTicket,
    UploadConfirmation,
};
pub use options::{BoardOptions, LatencyProfile, OperationClass, PaginationMode, WritePolicy};
pub use query::{JobFilters, JobSearchPage};
pub use repository::{BoardRepository, RepositoryError};
pub use router::board_router;
pub use store::{Collections, DomainStore};
