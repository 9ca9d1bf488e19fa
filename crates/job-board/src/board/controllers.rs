//! View-state derivations used by the applicant and poster pages.

use serde::Serialize;

use super::domain::{
    Application, ApplicationStatus, ComponentSelection, Job, JobId, ResumeComponents,
};
use super::drafts::{CompanyDraft, JobDraft};
use super::error::ValidationErrors;
use super::query::{JobFilters, JobSearchPage, DEFAULT_LIMIT, DEFAULT_PAGE};

/// Filter value that passes every record.
pub const ALL_STATUSES: &str = "all";

/// Pages shown at once in the pager.
pub const PAGE_WINDOW: u32 = 5;

/// Anything carrying an application status. Labels outside the known set are allowed.
pub trait StatusRecord {
    fn status_label(&self) -> &str;
}

impl StatusRecord for Application {
    fn status_label(&self) -> &str {
        self.status.label()
    }
}

impl StatusRecord for ApplicationStatus {
    fn status_label(&self) -> &str {
        self.label()
    }
}

impl StatusRecord for &str {
    fn status_label(&self) -> &str {
        self
    }
}

impl StatusRecord for String {
    fn status_label(&self) -> &str {
        self.as_str()
    }
}

/// Per-status tab counts. `all` also counts records with unknown statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub submitted: usize,
    pub reviewed: usize,
    pub interview: usize,
    pub rejected: usize,
    pub accepted: usize,
}

impl StatusCounts {
    pub fn tally<T: StatusRecord>(records: &[T]) -> Self {
        let mut counts = Self {
            all: records.len(),
            ..Self::default()
        };

        for record in records {
            if let Some(status) = ApplicationStatus::from_label(record.status_label()) {
                *counts.slot_mut(status) += 1;
            }
        }

        counts
    }

    fn slot_mut(&mut self, status: ApplicationStatus) -> &mut usize {
        match status {
            ApplicationStatus::Submitted => &mut self.submitted,
            ApplicationStatus::Reviewed => &mut self.reviewed,
            ApplicationStatus::Interview => &mut self.interview,
            ApplicationStatus::Rejected => &mut self.rejected,
            ApplicationStatus::Accepted => &mut self.accepted,
        }
    }

    pub fn count(&self, status: ApplicationStatus) -> usize {
        match status {
            ApplicationStatus::Submitted => self.submitted,
            ApplicationStatus::Reviewed => self.reviewed,
            ApplicationStatus::Interview => self.interview,
            ApplicationStatus::Rejected => self.rejected,
            ApplicationStatus::Accepted => self.accepted,
        }
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        if label == ALL_STATUSES {
            return Some(self.all);
        }
        ApplicationStatus::from_label(label).map(|status| self.count(status))
    }

    /// Tab entries in display order, `all` first.
    pub fn entries(&self) -> [(&'static str, usize); 6] {
        [
            (ALL_STATUSES, self.all),
            (ApplicationStatus::Submitted.label(), self.submitted),
            (ApplicationStatus::Reviewed.label(), self.reviewed),
            (ApplicationStatus::Interview.label(), self.interview),
            (ApplicationStatus::Rejected.label(), self.rejected),
            (ApplicationStatus::Accepted.label(), self.accepted),
        ]
    }
}

/// Keep records whose status equals `filter`; `all` keeps everything.
pub fn filter_by_status<'a, T: StatusRecord>(records: &'a [T], filter: &str) -> Vec<&'a T> {
    if filter == ALL_STATUSES {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|record| record.status_label() == filter)
        .collect()
}

/// `ceil(total / limit)`; zero when there is nothing to page or no page size.
pub fn total_pages(total: usize, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    let pages = total.div_ceil(limit as usize);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// 1-indexed pager state. Bounds are reported, never enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            total: 0,
        }
    }
}

impl Pagination {
    pub fn from_search(page: &JobSearchPage) -> Self {
        Self {
            page: page.page,
            limit: page.limit,
            total: page.total,
        }
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Whether the pager renders at all.
    pub fn is_multi_page(&self) -> bool {
        self.total_pages() > 1
    }

    /// Page numbers offered as direct links: the first five pages.
    pub fn page_window(&self) -> Vec<u32> {
        (1..=self.total_pages().min(PAGE_WINDOW)).collect()
    }
}

/// Filters plus pager as held by the job search page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobSearchState {
    pub filters: JobFilters,
    pub pagination: Pagination,
}

impl JobSearchState {
    /// Replace the filters and return to the first page.
    pub fn apply_filters(&mut self, filters: JobFilters) {
        self.filters = filters;
        self.pagination.page = DEFAULT_PAGE;
    }

    pub fn go_to_page(&mut self, page: u32) {
        self.pagination.page = page;
    }

    /// Filters to send with the next search, carrying the current page and limit.
    pub fn request(&self) -> JobFilters {
        JobFilters {
            page: Some(self.pagination.page),
            limit: Some(self.pagination.limit),
            ..self.filters.clone()
        }
    }

    /// Take the total from a search response; page and limit stay caller-owned.
    pub fn absorb(&mut self, page: &JobSearchPage) {
        self.pagination.total = page.total;
    }
}

/// Sections of a resume an applicant can attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeSection {
    Contact,
    Education,
    Experience,
    Skills,
    Projects,
}

impl ResumeSection {
    pub const ALL: [ResumeSection; 5] = [
        ResumeSection::Contact,
        ResumeSection::Education,
        ResumeSection::Experience,
        ResumeSection::Skills,
        ResumeSection::Projects,
    ];
}

/// Initial checklist: contact always, other sections when the resume has entries for them.
pub fn default_component_selection(components: Option<&ResumeComponents>) -> ComponentSelection {
    ComponentSelection {
        contact: true,
        education: components.is_some_and(|resume| !resume.education.is_empty()),
        experience: components.is_some_and(|resume| !resume.experience.is_empty()),
        skills: components.is_some_and(|resume| !resume.skills.technical.is_empty()),
        projects: components.is_some_and(|resume| !resume.projects.is_empty()),
    }
}

pub fn toggle_section(selection: &mut ComponentSelection, section: ResumeSection) {
    let slot = match section {
        ResumeSection::Contact => &mut selection.contact,
        ResumeSection::Education => &mut selection.education,
        ResumeSection::Experience => &mut selection.experience,
        ResumeSection::Skills => &mut selection.skills,
        ResumeSection::Projects => &mut selection.projects,
    };
    *slot = !*slot;
}

/// One-line description of a section shown next to its checkbox.
pub fn section_summary(section: ResumeSection, components: &ResumeComponents) -> String {
    match section {
        ResumeSection::Contact => {
            format!("{} - {}", components.contact.name, components.contact.email)
        }
        ResumeSection::Education => match components.education.len() {
            0 => "No education records".to_string(),
            count => format!("{count} education record(s)"),
        },
        ResumeSection::Experience => match components.experience.len() {
            0 => "No work experience".to_string(),
            count => format!("{count} work experience(s)"),
        },
        ResumeSection::Skills => match components.skills.technical.len() {
            0 => "No skills listed".to_string(),
            count => format!("{count} technical skills"),
        },
        ResumeSection::Projects => match components.projects.len() {
            0 => "No projects listed".to_string(),
            count => format!("{count} project(s)"),
        },
    }
}

pub fn validate_component_selection(selection: &ComponentSelection) -> Result<(), ValidationErrors> {
    if selection.any_selected() {
        Ok(())
    } else {
        Err(ValidationErrors::single(
            "components",
            "Please select at least one resume component",
        ))
    }
}

fn require(errors: &mut ValidationErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

/// Posting form checks: required text fields and a strictly increasing salary range.
pub fn validate_job_draft(draft: &JobDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "title", &draft.title, "Job title is required");
    require(
        &mut errors,
        "description",
        &draft.description,
        "Job description is required",
    );
    require(&mut errors, "location", &draft.location, "Location is required");
    require(
        &mut errors,
        "experience_level",
        &draft.experience_level,
        "Experience level is required",
    );

    if let (Some(min), Some(max)) = (draft.salary_min, draft.salary_max) {
        if min >= max {
            errors.add("salary", "Minimum salary must be less than maximum salary");
        }
    }

    errors.into_result()
}

pub fn validate_company_draft(draft: &CompanyDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require(&mut errors, "name", &draft.name, "Company name is required");
    require(
        &mut errors,
        "description",
        &draft.description,
        "Company description is required",
    );

    let website = draft.website.trim();
    if website.is_empty() {
        errors.add("website", "Company website is required");
    } else if !has_http_scheme(website) {
        errors.add(
            "website",
            "Please enter a valid URL (starting with http:// or https://)",
        );
    }

    require(
        &mut errors,
        "industry",
        &draft.industry,
        "Company industry is required",
    );
    require(&mut errors, "size", &draft.size, "Company size is required");
    require(
        &mut errors,
        "location",
        &draft.location,
        "Company location is required",
    );

    errors.into_result()
}

fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

/// Headline numbers on the poster dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PosterDashboardStats {
    pub total_jobs: usize,
    pub active_jobs: usize,
    pub total_applications: usize,
}

impl PosterDashboardStats {
    /// Applications count towards the total only when they target one of `jobs`.
    pub fn from_records(jobs: &[Job], applications: &[Application]) -> Self {
        let job_ids: Vec<&JobId> = jobs.iter().map(|job| &job.job_id).collect();
        Self {
            total_jobs: jobs.len(),
            active_jobs: jobs.iter().filter(|job| job.is_open()).count(),
            total_applications: applications
                .iter()
                .filter(|application| job_ids.contains(&&application.job_id))
                .count(),
        }
    }
}
