//! Side-effect free lookups over a [`Collections`] snapshot.
//!
//! Every function preserves the insertion order of the underlying collection.

use serde::{Deserialize, Serialize};

use super::domain::{
    Application, Company, CompanyId, Job, JobDetail, JobId, ResumeComponents, ResumeId,
    ResumeRecord, UserId, UserProfile,
};
use super::error::BoardError;
use super::options::PaginationMode;
use super::store::Collections;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Job search criteria. Absent or blank criteria impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visa_sponsorship: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|raw| !raw.is_empty())
}

impl JobFilters {
    /// A job matches when it satisfies every criterion. Tags match on any overlap.
    pub fn matches(&self, job: &Job) -> bool {
        if let Some(location) = non_blank(&self.location) {
            if !job
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        if let Some(level) = non_blank(&self.experience_level) {
            if job.experience_level != level {
                return false;
            }
        }

        if let Some(visa) = self.visa_sponsorship {
            if job.visa_sponsorship != visa {
                return false;
            }
        }

        self.tags.is_empty() || self.tags.iter().any(|tag| job.has_tag(tag))
    }

    pub fn page(&self) -> u32 {
        self.page.filter(|page| *page > 0).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u32 {
        self.limit.filter(|limit| *limit > 0).unwrap_or(DEFAULT_LIMIT)
    }

    pub fn has_active_filters(&self) -> bool {
        non_blank(&self.location).is_some()
            || non_blank(&self.experience_level).is_some()
            || self.visa_sponsorship.is_some()
            || !self.tags.is_empty()
    }

    /// Add the tag when absent, remove it when present.
    pub fn toggle_tag(&mut self, tag: &str) {
        match self.tags.iter().position(|existing| existing == tag) {
            Some(index) => {
                self.tags.remove(index);
            }
            None => self.tags.push(tag.to_string()),
        }
    }

    /// Drop every criterion while keeping the requested page size.
    pub fn clear(&mut self) {
        self.location = None;
        self.experience_level = None;
        self.visa_sponsorship = None;
        self.tags.clear();
    }
}

/// Search response: the returned jobs plus the paging echo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearchPage {
    pub jobs: Vec<Job>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

pub fn search_jobs(
    data: &Collections,
    filters: &JobFilters,
    pagination: PaginationMode,
) -> JobSearchPage {
    let matching: Vec<&Job> = data
        .jobs
        .iter()
        .filter(|job| filters.matches(job))
        .collect();

    let page = filters.page();
    let limit = filters.limit();
    let total = matching.len();

    let jobs = match pagination {
        PaginationMode::Unsliced => matching.into_iter().cloned().collect(),
        PaginationMode::Sliced => {
            let offset = (page as usize - 1).saturating_mul(limit as usize);
            matching
                .into_iter()
                .skip(offset)
                .take(limit as usize)
                .cloned()
                .collect()
        }
    };

    JobSearchPage {
        jobs,
        total,
        page,
        limit,
    }
}

/// Join a job with its company. A dangling company reference yields `company: None`.
pub fn job_by_id(data: &Collections, job_id: &JobId) -> Result<JobDetail, BoardError> {
    let job = data
        .jobs
        .iter()
        .find(|job| &job.job_id == job_id)
        .ok_or_else(|| BoardError::not_found("job", &job_id.0))?;

    let company = data
        .companies
        .iter()
        .find(|company| company.company_id == job.company_id)
        .cloned();

    Ok(JobDetail {
        job: job.clone(),
        company,
    })
}

pub fn applications_for_user(data: &Collections, user_id: &UserId) -> Vec<Application> {
    data.applications
        .iter()
        .filter(|application| &application.applicant_user_id == user_id)
        .cloned()
        .collect()
}

pub fn applicants_for_job(data: &Collections, job_id: &JobId) -> Vec<Application> {
    data.applications
        .iter()
        .filter(|application| &application.job_id == job_id)
        .cloned()
        .collect()
}

pub fn jobs_for_company(data: &Collections, company_id: &CompanyId) -> Vec<Job> {
    data.jobs
        .iter()
        .filter(|job| &job.company_id == company_id)
        .cloned()
        .collect()
}

pub fn resume_record(data: &Collections, resume_id: &ResumeId) -> Option<ResumeRecord> {
    data.resumes
        .iter()
        .find(|resume| &resume.resume_id == resume_id)
        .cloned()
}

/// Parsed components for a resume. Unknown or still-parsing resumes are not found.
pub fn resume_components(
    data: &Collections,
    resume_id: &ResumeId,
) -> Result<ResumeComponents, BoardError> {
    data.resumes
        .iter()
        .find(|resume| &resume.resume_id == resume_id)
        .and_then(|resume| resume.components.clone())
        .ok_or_else(|| BoardError::not_found("resume", &resume_id.0))
}

pub fn company_by_id(data: &Collections, company_id: &CompanyId) -> Result<Company, BoardError> {
    data.companies
        .iter()
        .find(|company| &company.company_id == company_id)
        .cloned()
        .ok_or_else(|| BoardError::not_found("company", &company_id.0))
}

pub fn profile_by_id(data: &Collections, user_id: &UserId) -> Result<UserProfile, BoardError> {
    data.profiles
        .iter()
        .find(|profile| &profile.user_id == user_id)
        .cloned()
        .ok_or_else(|| BoardError::not_found("profile", &user_id.0))
}
