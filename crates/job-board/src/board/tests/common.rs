use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::board::domain::{ComponentSelection, CompanyId, Job, JobId, ResumeId, UserId};
use crate::board::drafts::{CompanyDraft, JobDraft, NewApplication};
use crate::board::facade::ApiFacade;
use crate::board::options::{BoardOptions, WritePolicy};
use crate::board::store::{Collections, DomainStore};
use crate::board::seed;

pub(super) fn seeded() -> Collections {
    seed::demo_collections()
}

pub(super) fn facade_with(options: BoardOptions) -> ApiFacade<DomainStore> {
    ApiFacade::new(Arc::new(DomainStore::seeded()), options)
}

pub(super) fn facade() -> ApiFacade<DomainStore> {
    facade_with(BoardOptions::immediate())
}

pub(super) fn echo_facade() -> ApiFacade<DomainStore> {
    facade_with(BoardOptions {
        write_policy: WritePolicy::EchoOnly,
        ..BoardOptions::immediate()
    })
}

pub(super) fn shared_facade() -> Arc<ApiFacade<DomainStore>> {
    Arc::new(facade())
}

pub(super) fn ids(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|job| job.job_id.0.as_str()).collect()
}

pub(super) fn all_selected() -> ComponentSelection {
    ComponentSelection {
        contact: true,
        education: true,
        experience: true,
        skills: true,
        projects: true,
    }
}

pub(super) fn none_selected() -> ComponentSelection {
    ComponentSelection::default()
}

pub(super) fn new_application(selection: ComponentSelection) -> NewApplication {
    NewApplication {
        job_id: JobId::new("job_004"),
        applicant_user_id: UserId::new("uid_001"),
        resume_id: ResumeId::new("res_001"),
        selected_components: selection,
        note: Some("Excited about the platform work.".to_string()),
    }
}

pub(super) fn job_draft() -> JobDraft {
    JobDraft {
        title: "Staff Platform Engineer".to_string(),
        description: "Own the internal developer platform and its golden paths.".to_string(),
        location: "Remote".to_string(),
        employment_type: "Full-time".to_string(),
        salary_min: Some(150_000),
        salary_max: Some(190_000),
        currency: "USD".to_string(),
        visa_sponsorship: true,
        experience_level: "Lead".to_string(),
        tags: vec!["kubernetes".to_string(), "rust".to_string()],
        status: None,
    }
}

pub(super) fn company_draft() -> CompanyDraft {
    CompanyDraft {
        name: "Harbor Analytics".to_string(),
        description: "Logistics forecasting for regional ports".to_string(),
        website: "https://harbor.example".to_string(),
        logo_url: None,
        location: "Portland, OR".to_string(),
        size: "20-50".to_string(),
        industry: "Logistics".to_string(),
    }
}

pub(super) fn techcorp() -> CompanyId {
    CompanyId::new("comp_001")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
