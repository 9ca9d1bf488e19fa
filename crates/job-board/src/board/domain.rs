use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Identifier wrapper for hiring companies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub String);

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Identifier wrapper for uploaded resumes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResumeId(pub String);

/// Identifier wrapper for applicant and poster accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl JobId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl CompanyId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl ApplicationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl ResumeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

/// Whether a posting still accepts applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
        }
    }
}

/// A published job posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: JobId,
    pub company_id: CompanyId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: String,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    pub currency: String,
    pub visa_sponsorship: bool,
    pub experience_level: String,
    pub tags: Vec<String>,
    pub posted_at: DateTime<Utc>,
    pub status: JobStatus,
}

impl Job {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Salary bounds are consistent when at most one is present or min does not exceed max.
    pub fn salary_range_is_consistent(&self) -> bool {
        match (self.salary_min, self.salary_max) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open
    }
}

/// Company profile referenced by job postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub company_id: CompanyId,
    pub name: String,
    pub description: String,
    pub website: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub location: String,
    pub size: String,
    pub industry: String,
}

/// Job joined with its company for detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,
    pub company: Option<Company>,
}

/// Lifecycle stage of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Submitted,
    Reviewed,
    Interview,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Submitted,
        ApplicationStatus::Reviewed,
        ApplicationStatus::Interview,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Reviewed => "reviewed",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == raw)
    }
}

/// Contact block parsed from a resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub graduation_year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relevant_courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soft: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Structured decomposition of a resume that applicants select from per application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeComponents {
    pub contact: ContactInfo,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Progress of the resume parsing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeParseStatus {
    Parsing,
    Parsed,
    Failed,
}

impl ResumeParseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ResumeParseStatus::Parsing => "parsing",
            ResumeParseStatus::Parsed => "parsed",
            ResumeParseStatus::Failed => "failed",
        }
    }
}

/// Stored resume with its parse state. Components are present once parsing completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub resume_id: ResumeId,
    pub status: ResumeParseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<ResumeComponents>,
}

/// Per-component checklist submitted with an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentSelection {
    #[serde(default)]
    pub contact: bool,
    #[serde(default)]
    pub education: bool,
    #[serde(default)]
    pub experience: bool,
    #[serde(default)]
    pub skills: bool,
    #[serde(default)]
    pub projects: bool,
}

impl ComponentSelection {
    pub fn any_selected(&self) -> bool {
        self.contact || self.education || self.experience || self.skills || self.projects
    }

    pub fn selected_count(&self) -> usize {
        [
            self.contact,
            self.education,
            self.experience,
            self.skills,
            self.projects,
        ]
        .into_iter()
        .filter(|selected| *selected)
        .count()
    }
}

/// Resume content a poster sees for an application, limited to the selected components.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<Education>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experience: Vec<Experience>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
}

impl ComponentSnapshot {
    /// Copy the selected parts of a resume. Skills flatten to the technical list.
    pub fn resolve(selection: &ComponentSelection, components: &ResumeComponents) -> Self {
        Self {
            contact: selection.contact.then(|| components.contact.clone()),
            education: if selection.education {
                components.education.clone()
            } else {
                Vec::new()
            },
            experience: if selection.experience {
                components.experience.clone()
            } else {
                Vec::new()
            },
            skills: if selection.skills {
                components.skills.technical.clone()
            } else {
                Vec::new()
            },
            projects: if selection.projects {
                components.projects.clone()
            } else {
                Vec::new()
            },
        }
    }

    /// No section carried content. Serializes to `{}`, which reads back as empty flags.
    pub fn is_empty(&self) -> bool {
        self.contact.is_none()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
    }
}

/// Either the raw checklist or the resolved resume content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectedComponents {
    Flags(ComponentSelection),
    Snapshot(ComponentSnapshot),
}

/// An applicant's submission against a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub applicant_user_id: UserId,
    pub resume_id: ResumeId,
    pub selected_components: SelectedComponents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Applicant,
    Poster,
}

impl UserType {
    pub const fn label(self) -> &'static str {
        match self {
            UserType::Applicant => "applicant",
            UserType::Poster => "poster",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub location: String,
    pub work_auth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_enum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligible_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterDetails {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub company_id: CompanyId,
}

/// Role specific profile fields. Applicant fields are tried first when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileDetails {
    Applicant(ApplicantDetails),
    Poster(PosterDetails),
}

impl ProfileDetails {
    pub const fn user_type(&self) -> UserType {
        match self {
            ProfileDetails::Applicant(_) => UserType::Applicant,
            ProfileDetails::Poster(_) => UserType::Poster,
        }
    }
}

/// Account profile. `user_type` is fixed at onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub email: String,
    pub user_type: UserType,
    pub profile: ProfileDetails,
}
