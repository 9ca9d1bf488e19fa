use std::time::Duration;

use super::common::*;
use crate::board::domain::{
    ApplicantDetails, ComponentSelection, ComponentSnapshot, ContactInfo, JobId, PosterDetails,
    ProfileDetails, ResumeComponents, ResumeId, ResumeParseStatus, SelectedComponents, SkillSet,
    UserId, UserType,
};
use crate::board::drafts::JobDraft;
use crate::board::error::BoardError;
use crate::board::facade::ResumeUploadRequest;
use crate::board::options::{BoardOptions, LatencyProfile, WritePolicy};
use crate::board::query::JobFilters;
use crate::board::repository::BoardRepository;

fn validation_field(error: BoardError, field: &str) -> String {
    match error {
        BoardError::Validation(errors) => errors
            .get(field)
            .unwrap_or_else(|| panic!("no error recorded for {field}: {errors}"))
            .to_string(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

fn pdf_upload() -> ResumeUploadRequest {
    ResumeUploadRequest {
        filename: "resume.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        size_bytes: Some(240_000),
    }
}

#[tokio::test]
async fn repeated_searches_are_identical() {
    let facade = facade();
    let filters = JobFilters {
        tags: vec!["react".to_string()],
        ..JobFilters::default()
    };

    let first = facade.get_jobs(filters.clone()).await;
    let second = facade.get_jobs(filters).await;
    assert_eq!(first, second);
    assert_eq!(first.total, 2);
}

#[tokio::test]
async fn job_detail_carries_company() {
    let facade = facade();
    let detail = facade
        .get_job_by_id(&JobId::new("job_001"))
        .await
        .expect("seeded job");
    assert_eq!(detail.job.title, "Senior Frontend Engineer");
    assert_eq!(
        detail.company.map(|company| company.name),
        Some("TechCorp Inc.".to_string())
    );

    let missing = facade.get_job_by_id(&JobId::new("nonexistent")).await;
    assert!(missing.expect_err("unknown job").is_not_found());
}

#[tokio::test]
async fn persisted_application_is_visible_afterwards() {
    let facade = facade();
    let result = facade
        .create_application(new_application(all_selected()))
        .await
        .expect("application accepted");

    assert!(result.success);
    assert!(result.persisted);
    assert_eq!(result.data.applicant_user_id, UserId::new("uid_001"));

    let applications = facade.get_applications(&UserId::new("uid_001")).await;
    let ids: Vec<&str> = applications
        .iter()
        .map(|application| application.application_id.0.as_str())
        .collect();
    assert_eq!(ids, vec!["app_001", result.data.application_id.0.as_str()]);

    let applicants = facade.get_job_applicants(&JobId::new("job_004")).await;
    assert_eq!(applicants.len(), 1);
}

#[tokio::test]
async fn application_snapshot_follows_selection() {
    let facade = facade();
    let selection = ComponentSelection {
        contact: true,
        skills: true,
        ..ComponentSelection::default()
    };
    let result = facade
        .create_application(new_application(selection))
        .await
        .expect("application accepted");

    match result.data.selected_components {
        SelectedComponents::Snapshot(snapshot) => {
            assert_eq!(
                snapshot.contact.map(|contact| contact.name),
                Some("John Doe".to_string())
            );
            assert_eq!(snapshot.skills.first().map(String::as_str), Some("React"));
            assert!(snapshot.education.is_empty());
            assert!(snapshot.experience.is_empty());
            assert!(snapshot.projects.is_empty());
        }
        other => panic!("expected resolved snapshot, got {other:?}"),
    }
}

#[tokio::test]
async fn selection_of_only_empty_sections_is_rejected() {
    let facade = facade();
    let resume_id = ResumeId::new("res_001");
    let mut components = facade
        .get_resume_components(&resume_id)
        .await
        .expect("parsed resume");
    components.projects.clear();
    facade
        .update_resume_components(&resume_id, components)
        .await
        .expect("components saved");

    let projects_only = ComponentSelection {
        projects: true,
        ..ComponentSelection::default()
    };
    let error = facade
        .create_application(new_application(projects_only))
        .await
        .expect_err("nothing to attach");
    assert_eq!(
        validation_field(error, "components"),
        "The selected resume sections have no content"
    );
    assert_eq!(
        facade.get_applications(&UserId::new("uid_001")).await.len(),
        1
    );
}

#[tokio::test]
async fn stored_snapshot_reads_back_as_snapshot() {
    let facade = facade();
    let skills_only = ComponentSelection {
        skills: true,
        ..ComponentSelection::default()
    };
    let created = facade
        .create_application(new_application(skills_only))
        .await
        .expect("application accepted");

    let json = serde_json::to_value(&created.data).expect("serialize");
    let decoded: crate::board::domain::Application =
        serde_json::from_value(json).expect("deserialize");
    match decoded.selected_components {
        SelectedComponents::Snapshot(snapshot) => {
            assert!(!snapshot.is_empty());
            assert!(snapshot.contact.is_none());
            assert_eq!(snapshot.skills.len(), 7);
        }
        other => panic!("snapshot decoded as {other:?}"),
    }
    assert!(ComponentSnapshot::default().is_empty());
}

#[tokio::test]
async fn unparsed_resume_keeps_the_raw_selection() {
    let facade = facade();
    let mut request = new_application(all_selected());
    request.resume_id = ResumeId::new("res_pending");

    let result = facade
        .create_application(request)
        .await
        .expect("application accepted");
    assert_eq!(
        result.data.selected_components,
        SelectedComponents::Flags(all_selected())
    );
}

#[tokio::test]
async fn echo_only_policy_leaves_the_store_untouched() {
    let facade = echo_facade();
    let result = facade
        .create_application(new_application(all_selected()))
        .await
        .expect("application accepted");

    assert!(result.success);
    assert!(!result.persisted);
    assert_eq!(
        facade.get_applications(&UserId::new("uid_001")).await.len(),
        1
    );
    assert_eq!(facade.options().write_policy, WritePolicy::EchoOnly);
    assert_eq!(
        facade.repository().read(|data| data.applications.len()),
        2
    );

    let job = facade
        .create_job(&techcorp(), job_draft())
        .await
        .expect("job accepted");
    assert!(!job.persisted);
    assert_eq!(facade.get_company_jobs(&techcorp()).await.len(), 2);
}

#[tokio::test]
async fn empty_selection_is_rejected() {
    let facade = facade();
    let error = facade
        .create_application(new_application(none_selected()))
        .await
        .expect_err("nothing selected");
    assert_eq!(
        validation_field(error, "components"),
        "Please select at least one resume component"
    );
    assert_eq!(
        facade.get_applications(&UserId::new("uid_001")).await.len(),
        1
    );
}

#[tokio::test]
async fn application_to_unknown_job_is_not_found() {
    let facade = facade();
    let mut request = new_application(all_selected());
    request.job_id = JobId::new("job_missing");

    let error = facade
        .create_application(request)
        .await
        .expect_err("job does not exist");
    assert!(error.is_not_found());
}

#[tokio::test]
async fn generated_ids_are_unique() {
    let facade = facade();
    let first = facade
        .create_application(new_application(all_selected()))
        .await
        .expect("first");
    let second = facade
        .create_application(new_application(all_selected()))
        .await
        .expect("second");
    assert_ne!(first.data.application_id, second.data.application_id);
    assert!(first.data.application_id.0.starts_with("app_"));
}

#[tokio::test]
async fn resume_status_reports_components_when_parsed() {
    let facade = facade();
    let parsed = facade.get_resume_status(&ResumeId::new("res_001")).await;
    assert_eq!(parsed.status, ResumeParseStatus::Parsed);
    assert!(parsed.components.is_some());

    let unknown = facade.get_resume_status(&ResumeId::new("res_unknown")).await;
    assert_eq!(unknown.status, ResumeParseStatus::Parsing);
    assert!(unknown.components.is_none());
}

#[tokio::test]
async fn upload_flow_moves_resume_from_parsing_to_parsed() {
    let facade = facade();
    let ticket = facade
        .request_resume_upload(pdf_upload())
        .await
        .expect("ticket issued");
    assert!(ticket.upload_url.ends_with(&ticket.storage_key));

    let confirmation = facade
        .confirm_resume_upload(&ticket.resume_id, &ticket.storage_key)
        .await
        .expect("upload confirmed");
    assert!(confirmation.success);
    assert_eq!(confirmation.status, ResumeParseStatus::Parsing);
    assert_eq!(
        facade.get_resume_status(&ticket.resume_id).await.status,
        ResumeParseStatus::Parsing
    );
    assert!(facade
        .get_resume_components(&ticket.resume_id)
        .await
        .expect_err("not parsed yet")
        .is_not_found());

    let components = ResumeComponents {
        contact: ContactInfo {
            name: "Ada Park".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            location: "Denver, CO".to_string(),
            linkedin: None,
            github: None,
        },
        education: Vec::new(),
        experience: Vec::new(),
        skills: SkillSet {
            technical: vec!["Rust".to_string()],
            soft: None,
        },
        projects: Vec::new(),
    };
    let saved = facade
        .update_resume_components(&ticket.resume_id, components.clone())
        .await
        .expect("components saved");
    assert!(saved.persisted);

    let report = facade.get_resume_status(&ticket.resume_id).await;
    assert_eq!(report.status, ResumeParseStatus::Parsed);
    assert_eq!(report.components, Some(components));
}

#[tokio::test]
async fn upload_request_validates_file() {
    let facade = facade();
    let error = facade
        .request_resume_upload(ResumeUploadRequest {
            mime_type: "image/png".to_string(),
            ..pdf_upload()
        })
        .await
        .expect_err("png rejected");
    assert_eq!(
        validation_field(error, "mime_type"),
        "Please upload a PDF, DOC, or DOCX file"
    );

    let error = facade
        .request_resume_upload(ResumeUploadRequest {
            size_bytes: Some(11 * 1024 * 1024),
            ..pdf_upload()
        })
        .await
        .expect_err("oversized");
    assert_eq!(
        validation_field(error, "size_bytes"),
        "File size must be less than 10MB"
    );
}

#[tokio::test]
async fn created_job_appears_in_company_listing() {
    let facade = facade();
    let created = facade
        .create_job(&techcorp(), job_draft())
        .await
        .expect("job created");
    assert!(created.data.is_open());

    let jobs = facade.get_company_jobs(&techcorp()).await;
    assert_eq!(ids(&jobs), vec!["job_001", "job_004", created.data.job_id.0.as_str()]);
}

#[tokio::test]
async fn job_tags_drop_duplicates_in_order() {
    let facade = facade();
    let mut draft = job_draft();
    draft.tags = ["rust", "kubernetes", "rust", "aws", "kubernetes"]
        .map(str::to_string)
        .to_vec();

    let created = facade
        .create_job(&techcorp(), draft)
        .await
        .expect("job created");
    assert_eq!(created.data.tags, vec!["rust", "kubernetes", "aws"]);
}

#[tokio::test]
async fn job_salary_range_must_increase() {
    let facade = facade();
    let mut draft = job_draft();
    draft.salary_min = Some(190_000);

    let error = facade
        .create_job(&techcorp(), draft)
        .await
        .expect_err("inverted range");
    assert_eq!(
        validation_field(error, "salary"),
        "Minimum salary must be less than maximum salary"
    );
}

#[tokio::test]
async fn update_job_keeps_company_and_posting_date() {
    let facade = facade();
    let job_id = JobId::new("job_004");
    let before = facade.get_job_by_id(&job_id).await.expect("seeded");

    let mut draft = JobDraft::from_job(&before.job);
    draft.title = "Principal Backend Engineer".to_string();

    let updated = facade
        .update_job(&job_id, draft)
        .await
        .expect("job updated");
    assert_eq!(updated.data.company_id, before.job.company_id);
    assert_eq!(updated.data.posted_at, before.job.posted_at);
    assert_eq!(updated.data.tags, before.job.tags);
    assert_eq!(updated.data.salary_min, before.job.salary_min);

    let after = facade.get_job_by_id(&job_id).await.expect("still there");
    assert_eq!(after.job.title, "Principal Backend Engineer");
    assert_eq!(JobDraft::from_job(&after.job).status, Some(before.job.status));

    let missing = facade
        .update_job(&JobId::new("job_missing"), job_draft())
        .await
        .expect_err("unknown job");
    assert!(missing.is_not_found());
}

#[tokio::test]
async fn company_website_needs_scheme() {
    let facade = facade();
    let mut draft = company_draft();
    draft.website = "harbor.example".to_string();

    let error = facade.create_company(draft).await.expect_err("bad url");
    assert_eq!(
        validation_field(error, "website"),
        "Please enter a valid URL (starting with http:// or https://)"
    );

    let created = facade
        .create_company(company_draft())
        .await
        .expect("company created");
    let job = facade
        .create_job(&created.data.company_id, job_draft())
        .await
        .expect("job for new company");
    assert_eq!(job.data.company_id, created.data.company_id);
}

#[tokio::test]
async fn profile_update_preserves_user_type() {
    let facade = facade();
    let user_id = UserId::new("uid_001");

    let error = facade
        .update_profile(
            &user_id,
            ProfileDetails::Poster(PosterDetails {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                title: "Recruiter".to_string(),
                company_id: techcorp(),
            }),
        )
        .await
        .expect_err("type change");
    assert!(validation_field(error, "user_type").contains("applicant"));

    let updated = facade
        .update_profile(
            &user_id,
            ProfileDetails::Applicant(ApplicantDetails {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                phone: "555-0199".to_string(),
                location: "Oakland, CA".to_string(),
                work_auth: "citizen".to_string(),
                status_enum: None,
                eligible_start: None,
                expiry: None,
            }),
        )
        .await
        .expect("profile updated");
    assert_eq!(updated.data.user_type, UserType::Applicant);

    let profile = facade.get_profile(&user_id).await.expect("profile");
    match profile.profile {
        ProfileDetails::Applicant(details) => assert_eq!(details.location, "Oakland, CA"),
        other => panic!("expected applicant details, got {other:?}"),
    }

    assert!(facade
        .get_profile(&UserId::new("uid_missing"))
        .await
        .expect_err("unknown user")
        .is_not_found());
}

#[tokio::test(start_paused = true)]
async fn operations_wait_out_their_latency_class() {
    let facade = facade_with(BoardOptions {
        latency: LatencyProfile::standard(),
        ..BoardOptions::default()
    });

    let start = tokio::time::Instant::now();
    facade
        .get_job_by_id(&JobId::new("job_001"))
        .await
        .expect("seeded job");
    let read = start.elapsed();
    assert!(read >= Duration::from_millis(300) && read < Duration::from_millis(400));

    let start = tokio::time::Instant::now();
    facade.get_jobs(JobFilters::default()).await;
    let list = start.elapsed();
    assert!(list >= Duration::from_millis(400) && list < Duration::from_millis(500));

    let components = facade
        .get_resume_components(&ResumeId::new("res_002"))
        .await
        .expect("parsed resume");
    let start = tokio::time::Instant::now();
    facade
        .update_resume_components(&ResumeId::new("res_002"), components)
        .await
        .expect("components saved");
    let write = start.elapsed();
    assert!(write >= Duration::from_millis(600) && write < Duration::from_millis(700));
}
