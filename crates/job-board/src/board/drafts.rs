use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    Company, CompanyId, ComponentSelection, Job, JobId, JobStatus, ResumeId, UserId,
};

fn default_employment_type() -> String {
    "Full-time".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Applicant submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub job_id: JobId,
    pub applicant_user_id: UserId,
    pub resume_id: ResumeId,
    pub selected_components: ComponentSelection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Editable job fields as entered on the posting form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_employment_type")]
    pub employment_type: String,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub visa_sponsorship: bool,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

impl JobDraft {
    /// Prefill the form from an existing posting.
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            employment_type: job.employment_type.clone(),
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            currency: job.currency.clone(),
            visa_sponsorship: job.visa_sponsorship,
            experience_level: job.experience_level.clone(),
            tags: job.tags.clone(),
            status: Some(job.status),
        }
    }

    pub(crate) fn into_job(
        self,
        job_id: JobId,
        company_id: CompanyId,
        posted_at: DateTime<Utc>,
        fallback_status: JobStatus,
    ) -> Job {
        Job {
            job_id,
            company_id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            employment_type: self.employment_type,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            currency: self.currency,
            visa_sponsorship: self.visa_sponsorship,
            experience_level: self.experience_level,
            tags: unique_tags(self.tags),
            posted_at,
            status: self.status.unwrap_or(fallback_status),
        }
    }
}

/// Tags form a set: later duplicates are dropped, first-seen order is kept.
fn unique_tags(tags: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !unique.contains(&tag) {
            unique.push(tag);
        }
    }
    unique
}

/// Company onboarding and edit payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub industry: String,
}

impl CompanyDraft {
    pub(crate) fn into_company(self, company_id: CompanyId) -> Company {
        Company {
            company_id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            website: self.website.trim().to_string(),
            logo_url: self.logo_url,
            location: self.location.trim().to_string(),
            size: self.size,
            industry: self.industry,
        }
    }
}
