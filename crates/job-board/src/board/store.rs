use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::domain::{Application, Company, Job, ResumeRecord, UserProfile};
use super::repository::{BoardRepository, RepositoryError};
use super::seed;

/// The in-memory collections backing the board. Vectors keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub jobs: Vec<Job>,
    pub companies: Vec<Company>,
    pub applications: Vec<Application>,
    pub resumes: Vec<ResumeRecord>,
    pub profiles: Vec<UserProfile>,
}

/// Process-wide system of record, constructed once and shared with the facade.
#[derive(Debug, Default)]
pub struct DomainStore {
    collections: RwLock<Collections>,
}

impl DomainStore {
    pub fn new(collections: Collections) -> Self {
        Self {
            collections: RwLock::new(collections),
        }
    }

    /// Store populated with the demo jobs, companies, applications, resumes and profiles.
    pub fn seeded() -> Self {
        Self::new(seed::demo_collections())
    }

    fn shared(&self) -> RwLockReadGuard<'_, Collections> {
        self.collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn exclusive(&self) -> RwLockWriteGuard<'_, Collections> {
        self.collections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn replace_where<T>(
    records: &mut [T],
    id: &str,
    matches: impl Fn(&T) -> bool,
    record: T,
) -> Result<(), RepositoryError> {
    match records.iter_mut().find(|candidate| matches(candidate)) {
        Some(slot) => {
            *slot = record;
            Ok(())
        }
        None => Err(RepositoryError::NotFound(id.to_string())),
    }
}

impl BoardRepository for DomainStore {
    fn read<T>(&self, view: impl FnOnce(&Collections) -> T) -> T {
        let guard = self.shared();
        view(&guard)
    }

    fn insert_application(
        &self,
        application: Application,
    ) -> Result<Application, RepositoryError> {
        let mut guard = self.exclusive();
        if guard
            .applications
            .iter()
            .any(|existing| existing.application_id == application.application_id)
        {
            return Err(RepositoryError::Conflict(application.application_id.0));
        }
        guard.applications.push(application.clone());
        Ok(application)
    }

    fn insert_job(&self, job: Job) -> Result<Job, RepositoryError> {
        let mut guard = self.exclusive();
        if guard.jobs.iter().any(|existing| existing.job_id == job.job_id) {
            return Err(RepositoryError::Conflict(job.job_id.0));
        }
        guard.jobs.push(job.clone());
        Ok(job)
    }

    fn update_job(&self, job: Job) -> Result<(), RepositoryError> {
        let mut guard = self.exclusive();
        let id = job.job_id.clone();
        replace_where(&mut guard.jobs, &id.0, |existing| existing.job_id == id, job)
    }

    fn insert_company(&self, company: Company) -> Result<Company, RepositoryError> {
        let mut guard = self.exclusive();
        if guard
            .companies
            .iter()
            .any(|existing| existing.company_id == company.company_id)
        {
            return Err(RepositoryError::Conflict(company.company_id.0));
        }
        guard.companies.push(company.clone());
        Ok(company)
    }

    fn update_company(&self, company: Company) -> Result<(), RepositoryError> {
        let mut guard = self.exclusive();
        let id = company.company_id.clone();
        replace_where(
            &mut guard.companies,
            &id.0,
            |existing| existing.company_id == id,
            company,
        )
    }

    fn update_profile(&self, profile: UserProfile) -> Result<(), RepositoryError> {
        let mut guard = self.exclusive();
        let id = profile.user_id.clone();
        replace_where(
            &mut guard.profiles,
            &id.0,
            |existing| existing.user_id == id,
            profile,
        )
    }

    fn upsert_resume(&self, resume: ResumeRecord) -> Result<(), RepositoryError> {
        let mut guard = self.exclusive();
        match guard
            .resumes
            .iter_mut()
            .find(|existing| existing.resume_id == resume.resume_id)
        {
            Some(slot) => *slot = resume,
            None => guard.resumes.push(resume),
        }
        Ok(())
    }
}
