use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::board::router::board_router;

fn router() -> Router {
    board_router(shared_facade())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn send_json(method: Method, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

#[tokio::test]
async fn job_search_parses_comma_separated_tags() {
    let response = router()
        .oneshot(get("/api/v1/jobs?tags=react,%20docker&limit=2"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["total"], 4);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["total_pages"], 2);
    assert_eq!(body["jobs"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn job_detail_embeds_company_and_maps_missing_to_404() {
    let app = router();
    let response = app
        .clone()
        .oneshot(get("/api/v1/jobs/job_001"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["job_id"], "job_001");
    assert_eq!(body["company"]["name"], "TechCorp Inc.");

    let response = app
        .oneshot(get("/api/v1/jobs/nonexistent"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "job 'nonexistent' not found");
}

#[tokio::test]
async fn empty_selection_is_unprocessable() {
    let response = router()
        .oneshot(send_json(
            Method::POST,
            "/api/v1/applications",
            json!({
                "job_id": "job_003",
                "applicant_user_id": "uid_001",
                "resume_id": "res_001",
                "selected_components": {}
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = read_json_body(response).await;
    assert_eq!(
        body["fields"]["components"],
        "Please select at least one resume component"
    );
}

#[tokio::test]
async fn submitted_application_shows_in_user_listing() {
    let app = router();
    let response = app
        .clone()
        .oneshot(send_json(
            Method::POST,
            "/api/v1/applications",
            json!({
                "job_id": "job_003",
                "applicant_user_id": "uid_001",
                "resume_id": "res_001",
                "selected_components": { "contact": true, "projects": true }
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json_body(response).await;
    assert_eq!(created["persisted"], true);
    assert_eq!(created["data"]["status"], "submitted");
    assert_eq!(
        created["data"]["selected_components"]["projects"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );

    let response = app
        .oneshot(get("/api/v1/users/uid_001/applications?status=submitted"))
        .await
        .expect("router responds");
    let body = read_json_body(response).await;
    assert_eq!(body["applications"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["status_counts"]["all"], 2);
    assert_eq!(body["status_counts"]["submitted"], 2);
}

#[tokio::test]
async fn applicant_counts_ignore_the_status_filter() {
    let response = router()
        .oneshot(get("/api/v1/jobs/job_002/applicants?status=submitted"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["applications"].as_array().map(Vec::len), Some(0));
    assert_eq!(body["status_counts"]["all"], 1);
    assert_eq!(body["status_counts"]["reviewed"], 1);
}

#[tokio::test]
async fn company_dashboard_summarises_postings() {
    let response = router()
        .oneshot(get("/api/v1/companies/comp_001/dashboard"))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["jobs"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["stats"]["total_jobs"], 2);
    assert_eq!(body["stats"]["active_jobs"], 2);
    assert_eq!(body["stats"]["total_applications"], 1);
}

#[tokio::test]
async fn job_posting_round_trip_through_http() {
    let app = router();
    let response = app
        .clone()
        .oneshot(send_json(
            Method::POST,
            "/api/v1/jobs",
            json!({
                "company_id": "comp_002",
                "title": "Data Engineer",
                "description": "Build streaming pipelines",
                "location": "Remote",
                "experience_level": "Mid-level",
                "salary_min": 95000,
                "salary_max": 125000,
                "tags": ["python", "kafka"]
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json_body(response).await;
    assert_eq!(created["data"]["employment_type"], "Full-time");
    assert_eq!(created["data"]["currency"], "USD");
    let job_id = created["data"]["job_id"]
        .as_str()
        .expect("job id")
        .to_string();

    let response = app
        .clone()
        .oneshot(send_json(
            Method::PUT,
            &format!("/api/v1/jobs/{job_id}"),
            json!({
                "title": "Senior Data Engineer",
                "description": "Build streaming pipelines",
                "location": "Remote",
                "experience_level": "Senior",
                "status": "closed"
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get("/api/v1/companies/comp_002/jobs"))
        .await
        .expect("router responds");
    let jobs = read_json_body(response).await;
    assert_eq!(jobs[1]["title"], "Senior Data Engineer");
    assert_eq!(jobs[1]["status"], "closed");
}

#[tokio::test]
async fn resume_upload_lifecycle_over_http() {
    let app = router();
    let response = app
        .clone()
        .oneshot(send_json(
            Method::POST,
            "/api/v1/resume-uploads",
            json!({ "filename": "cv.docx", "mime_type": "application/vnd.openxmlformats-officedocument.wordprocessingml.document" }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::CREATED);
    let ticket = read_json_body(response).await;
    let resume_id = ticket["resume_id"].as_str().expect("resume id").to_string();

    let response = app
        .clone()
        .oneshot(send_json(
            Method::POST,
            &format!("/api/v1/resumes/{resume_id}/confirm"),
            json!({ "storage_key": ticket["storage_key"] }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let response = app
        .clone()
        .oneshot(get(&format!("/api/v1/resumes/{resume_id}/status")))
        .await
        .expect("router responds");
    let status = read_json_body(response).await;
    assert_eq!(status["status"], "parsing");

    let response = app
        .oneshot(get(&format!("/api/v1/resumes/{resume_id}/components")))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn profile_type_change_is_rejected() {
    let response = router()
        .oneshot(send_json(
            Method::PUT,
            "/api/v1/users/uid_poster_001/profile",
            json!({
                "first_name": "Sarah",
                "last_name": "Johnson",
                "phone": "555-0100",
                "location": "San Francisco, CA",
                "work_auth": "citizen"
            }),
        ))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["fields"]["user_type"].is_string());
}
