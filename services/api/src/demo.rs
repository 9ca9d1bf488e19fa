use crate::infra::{parse_pagination, parse_write_policy, seeded_facade, SeededFacade};
use clap::Args;
use job_board::board::{
    default_component_selection, section_summary, BoardOptions, CompanyId, JobDraft, JobFilters,
    JobId, JobSearchPage, LatencyProfile, NewApplication, Pagination, PaginationMode,
    PosterDashboardStats, ProfileDetails, ResumeId, ResumeSection, StatusCounts, UserId,
    WritePolicy,
};
use job_board::error::AppError;

const DEMO_APPLICANT: &str = "uid_001";
const DEMO_RESUME: &str = "res_001";
const DEMO_POSTER: &str = "uid_poster_001";

#[derive(Args, Debug)]
pub(crate) struct JobSearchArgs {
    /// Case-insensitive substring of the job location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Exact experience level, e.g. Senior or Mid-level
    #[arg(long)]
    pub(crate) experience_level: Option<String>,
    /// Only jobs that do (true) or do not (false) sponsor visas
    #[arg(long)]
    pub(crate) visa: Option<bool>,
    /// Tag to match; repeat for more. Jobs carrying any of them match.
    #[arg(long)]
    pub(crate) tag: Vec<String>,
    #[arg(long)]
    pub(crate) page: Option<u32>,
    #[arg(long)]
    pub(crate) limit: Option<u32>,
    /// Whether page and limit cut the result list (unsliced or sliced)
    #[arg(long, value_parser = parse_pagination, default_value = "unsliced")]
    pub(crate) pagination: PaginationMode,
}

impl JobSearchArgs {
    fn filters(&self) -> JobFilters {
        JobFilters {
            location: self.location.clone(),
            experience_level: self.experience_level.clone(),
            visa_sponsorship: self.visa,
            tags: self.tag.clone(),
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// How writes are applied (persist or echo)
    #[arg(long, value_parser = parse_write_policy, default_value = "persist")]
    pub(crate) write_policy: WritePolicy,
    /// Wait out the simulated network latency on every call
    #[arg(long)]
    pub(crate) simulate_latency: bool,
    /// Skip the poster portion of the demo.
    #[arg(long)]
    pub(crate) skip_poster: bool,
}

pub(crate) async fn run_job_search(args: JobSearchArgs) -> Result<(), AppError> {
    let facade = seeded_facade(BoardOptions {
        pagination: args.pagination,
        ..BoardOptions::immediate()
    });

    let page = facade.get_jobs(args.filters()).await;
    render_job_page(&facade, &page).await;
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        write_policy,
        simulate_latency,
        skip_poster,
    } = args;

    let latency = if simulate_latency {
        LatencyProfile::standard()
    } else {
        LatencyProfile::instant()
    };
    let facade = seeded_facade(BoardOptions {
        latency,
        write_policy,
        ..BoardOptions::default()
    });

    println!("Job board demo (write policy: {write_policy:?})");
    applicant_session(&facade).await?;

    if !skip_poster {
        poster_session(&facade).await?;
    }

    Ok(())
}

async fn applicant_session(facade: &SeededFacade) -> Result<(), AppError> {
    let applicant = UserId::new(DEMO_APPLICANT);
    let resume_id = ResumeId::new(DEMO_RESUME);

    println!("\nApplicant session ({DEMO_APPLICANT})");
    let filters = JobFilters {
        tags: vec!["react".to_string()],
        ..JobFilters::default()
    };
    let page = facade.get_jobs(filters).await;
    println!("Search for tag 'react'");
    render_job_page(facade, &page).await;

    let Some(target) = page.jobs.last() else {
        println!("No jobs matched; nothing to apply to");
        return Ok(());
    };
    let detail = facade.get_job_by_id(&target.job_id).await?;
    println!(
        "\nApplying to {} at {}",
        detail.job.title,
        detail
            .company
            .as_ref()
            .map_or("an unknown company", |company| company.name.as_str())
    );

    let report = facade.get_resume_status(&resume_id).await;
    println!("Resume {DEMO_RESUME} is {}", report.status.label());
    let selection = default_component_selection(report.components.as_ref());
    if let Some(components) = &report.components {
        for section in ResumeSection::ALL {
            println!("  - {section:?}: {}", section_summary(section, components));
        }
    }

    let submitted = facade
        .create_application(NewApplication {
            job_id: detail.job.job_id.clone(),
            applicant_user_id: applicant.clone(),
            resume_id,
            selected_components: selection,
            note: Some("Looking forward to hearing from you.".to_string()),
        })
        .await?;
    println!(
        "Submitted {} with {} section(s) (persisted: {})",
        submitted.data.application_id.0,
        selection.selected_count(),
        submitted.persisted
    );

    let applications = facade.get_applications(&applicant).await;
    println!("\nMy applications");
    render_status_counts(&StatusCounts::tally(&applications));
    for application in &applications {
        println!(
            "  - {} -> {} [{}] applied {}",
            application.application_id.0,
            application.job_id.0,
            application.status.label(),
            application.applied_at.format("%Y-%m-%d")
        );
    }

    Ok(())
}

async fn poster_session(facade: &SeededFacade) -> Result<(), AppError> {
    let profile = facade.get_profile(&UserId::new(DEMO_POSTER)).await?;
    let ProfileDetails::Poster(poster) = profile.profile else {
        println!("\n{DEMO_POSTER} is not a poster account; skipping poster session");
        return Ok(());
    };

    println!(
        "\nPoster session ({} {}, {})",
        poster.first_name, poster.last_name, poster.title
    );

    let draft = JobDraft {
        title: "Site Reliability Engineer".to_string(),
        description: "Keep our checkout platform fast and available.".to_string(),
        location: "Remote".to_string(),
        employment_type: "Full-time".to_string(),
        salary_min: Some(130_000),
        salary_max: Some(170_000),
        currency: "USD".to_string(),
        visa_sponsorship: true,
        experience_level: "Senior".to_string(),
        tags: vec!["kubernetes".to_string(), "observability".to_string()],
        status: None,
    };
    let created = facade.create_job(&poster.company_id, draft).await?;
    println!(
        "Posted {} '{}' (persisted: {})",
        created.data.job_id.0, created.data.title, created.persisted
    );

    render_dashboard(facade, &poster.company_id).await;

    let job_id = JobId::new("job_001");
    let applicants = facade.get_job_applicants(&job_id).await;
    println!("\nApplicants for {}", job_id.0);
    render_status_counts(&StatusCounts::tally(&applicants));

    Ok(())
}

async fn render_dashboard(facade: &SeededFacade, company_id: &CompanyId) {
    let jobs = facade.get_company_jobs(company_id).await;
    let mut applications = Vec::new();
    for job in &jobs {
        applications.extend(facade.get_job_applicants(&job.job_id).await);
    }
    let stats = PosterDashboardStats::from_records(&jobs, &applications);

    println!(
        "Dashboard: {} jobs | {} active | {} applications",
        stats.total_jobs, stats.active_jobs, stats.total_applications
    );
    for job in &jobs {
        println!("  - {} {} [{}]", job.job_id.0, job.title, job.status.label());
    }
}

async fn render_job_page(facade: &SeededFacade, page: &JobSearchPage) {
    let pager = Pagination::from_search(page);
    println!(
        "{} job(s) | page {} of {}",
        page.total,
        page.page,
        pager.total_pages()
    );

    for job in &page.jobs {
        let company = facade
            .get_job_by_id(&job.job_id)
            .await
            .ok()
            .and_then(|detail| detail.company)
            .map(|company| company.name)
            .unwrap_or_else(|| "Unknown company".to_string());
        let salary = match (job.salary_min, job.salary_max) {
            (Some(min), Some(max)) => format!("{min}-{max} {}", job.currency),
            (Some(min), None) => format!("from {min} {}", job.currency),
            (None, Some(max)) => format!("up to {max} {}", job.currency),
            (None, None) => "salary not listed".to_string(),
        };
        println!(
            "  - {} | {} @ {} | {} | {} | {}{}",
            job.job_id.0,
            job.title,
            company,
            job.location,
            job.experience_level,
            salary,
            if job.visa_sponsorship {
                " | visa sponsorship"
            } else {
                ""
            }
        );
    }

    if pager.is_multi_page() {
        let window: Vec<String> = pager.page_window().iter().map(u32::to_string).collect();
        println!("  pages: {}", window.join(" "));
    }
}

fn render_status_counts(counts: &StatusCounts) {
    let tabs: Vec<String> = counts
        .entries()
        .iter()
        .map(|(label, count)| format!("{label} ({count})"))
        .collect();
    println!("  {}", tabs.join(" | "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_args_become_filters() {
        let args = JobSearchArgs {
            location: Some("remote".to_string()),
            experience_level: None,
            visa: Some(false),
            tag: vec!["react".to_string()],
            page: Some(2),
            limit: None,
            pagination: PaginationMode::Sliced,
        };

        let filters = args.filters();
        assert_eq!(filters.location.as_deref(), Some("remote"));
        assert_eq!(filters.visa_sponsorship, Some(false));
        assert_eq!(filters.tags, vec!["react"]);
        assert_eq!(filters.page(), 2);
        assert_eq!(filters.limit(), 10);
    }

    #[tokio::test]
    async fn demo_runs_in_both_write_policies() {
        for write_policy in [WritePolicy::Persist, WritePolicy::EchoOnly] {
            run_demo(DemoArgs {
                write_policy,
                simulate_latency: false,
                skip_poster: false,
            })
            .await
            .expect("demo completes");
        }
    }
}
