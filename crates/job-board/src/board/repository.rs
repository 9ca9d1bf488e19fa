use super::domain::{Application, Company, Job, ResumeRecord, UserProfile};
use super::store::Collections;

/// Storage abstraction so the facade can be exercised against any backing store.
pub trait BoardRepository: Send + Sync {
    /// Run a read-only view over the current collections.
    fn read<T>(&self, view: impl FnOnce(&Collections) -> T) -> T;
    fn insert_application(&self, application: Application)
        -> Result<Application, RepositoryError>;
    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError>;
    fn update_job(&self, job: Job) -> Result<(), RepositoryError>;
    fn insert_company(&self, company: Company) -> Result<Company, RepositoryError>;
    fn update_company(&self, company: Company) -> Result<(), RepositoryError>;
    fn update_profile(&self, profile: UserProfile) -> Result<(), RepositoryError>;
    /// Insert the resume or replace the record with the same id.
    fn upsert_resume(&self, resume: ResumeRecord) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record '{0}' already exists")]
    Conflict(String),
    #[error("record '{0}' not found")]
    NotFound(String),
}
