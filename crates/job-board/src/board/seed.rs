use chrono::{DateTime, Utc};

use super::domain::{
    ApplicantDetails, Application, ApplicationId, ApplicationStatus, Company, CompanyId,
    ComponentSnapshot, ContactInfo, Education, Experience, Job, JobId, JobStatus,
    PosterDetails, ProfileDetails, Project, ResumeComponents, ResumeId, ResumeParseStatus,
    ResumeRecord, SelectedComponents, SkillSet, UserId, UserProfile, UserType,
};
use super::store::Collections;

/// Demo data set the store starts from.
pub fn demo_collections() -> Collections {
    Collections {
        jobs: demo_jobs(),
        companies: demo_companies(),
        applications: demo_applications(),
        resumes: demo_resumes(),
        profiles: demo_profiles(),
    }
}

fn at(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    company: &str,
    title: &str,
    description: &str,
    location: &str,
    salary: (u32, u32),
    visa_sponsorship: bool,
    experience_level: &str,
    tags: &[&str],
    posted_at: &str,
) -> Job {
    Job {
        job_id: JobId::new(id),
        company_id: CompanyId::new(company),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        employment_type: "Full-time".to_string(),
        salary_min: Some(salary.0),
        salary_max: Some(salary.1),
        currency: "USD".to_string(),
        visa_sponsorship,
        experience_level: experience_level.to_string(),
        tags: strings(tags),
        posted_at: at(posted_at),
        status: JobStatus::Open,
    }
}

pub fn demo_jobs() -> Vec<Job> {
    vec![
        job(
            "job_001",
            "comp_001",
            "Senior Frontend Engineer",
            "We're looking for a passionate Senior Frontend Engineer to join our team. You'll work with React, TypeScript, and modern web technologies to build amazing user experiences.",
            "San Francisco, CA",
            (120_000, 160_000),
            true,
            "Senior",
            &["react", "typescript", "javascript", "css", "html"],
            "2025-01-15T10:00:00Z",
        ),
        job(
            "job_002",
            "comp_002",
            "Full Stack Developer",
            "Join our growing team as a Full Stack Developer. You'll work on both frontend and backend systems using modern technologies.",
            "Remote",
            (90_000, 130_000),
            false,
            "Mid-level",
            &["react", "node.js", "python", "postgresql", "aws"],
            "2025-01-14T14:30:00Z",
        ),
        job(
            "job_003",
            "comp_003",
            "UI/UX Designer",
            "We're seeking a creative UI/UX Designer to help shape our product design. Experience with Figma and user research is essential.",
            "New York, NY",
            (80_000, 110_000),
            true,
            "Mid-level",
            &["figma", "sketch", "adobe", "user-research", "prototyping"],
            "2025-01-13T09:15:00Z",
        ),
        job(
            "job_004",
            "comp_001",
            "Backend Engineer",
            "Looking for a Backend Engineer to work on our API and database systems. Experience with microservices architecture preferred.",
            "Austin, TX",
            (100_000, 140_000),
            true,
            "Senior",
            &["python", "django", "postgresql", "redis", "docker"],
            "2025-01-12T16:45:00Z",
        ),
        job(
            "job_005",
            "comp_004",
            "DevOps Engineer",
            "Join our DevOps team to manage our cloud infrastructure and deployment pipelines. AWS and Kubernetes experience required.",
            "Seattle, WA",
            (110_000, 150_000),
            false,
            "Senior",
            &["aws", "kubernetes", "docker", "terraform", "ci-cd"],
            "2025-01-11T11:20:00Z",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn company(
    id: &str,
    name: &str,
    description: &str,
    website: &str,
    logo_url: &str,
    location: &str,
    size: &str,
    industry: &str,
) -> Company {
    Company {
        company_id: CompanyId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        website: website.to_string(),
        logo_url: Some(logo_url.to_string()),
        location: location.to_string(),
        size: size.to_string(),
        industry: industry.to_string(),
    }
}

pub fn demo_companies() -> Vec<Company> {
    vec![
        company(
            "comp_001",
            "TechCorp Inc.",
            "Leading technology company focused on innovative solutions",
            "https://techcorp.com",
            "https://via.placeholder.com/100x100/4F46E5/FFFFFF?text=TC",
            "San Francisco, CA",
            "500-1000",
            "Technology",
        ),
        company(
            "comp_002",
            "StartupXYZ",
            "Fast-growing startup in the fintech space",
            "https://startupxyz.com",
            "https://via.placeholder.com/100x100/10B981/FFFFFF?text=SX",
            "Remote",
            "50-200",
            "Fintech",
        ),
        company(
            "comp_003",
            "DesignStudio",
            "Creative agency specializing in digital experiences",
            "https://designstudio.com",
            "https://via.placeholder.com/100x100/F59E0B/FFFFFF?text=DS",
            "New York, NY",
            "20-50",
            "Design",
        ),
        company(
            "comp_004",
            "CloudTech Solutions",
            "Cloud infrastructure and DevOps consulting",
            "https://cloudtech.com",
            "https://via.placeholder.com/100x100/EF4444/FFFFFF?text=CT",
            "Seattle, WA",
            "100-500",
            "Cloud Services",
        ),
    ]
}

fn john_contact() -> ContactInfo {
    ContactInfo {
        name: "John Doe".to_string(),
        email: "john.doe@email.com".to_string(),
        phone: "+1-555-0123".to_string(),
        location: "San Francisco, CA".to_string(),
        linkedin: Some("https://linkedin.com/in/johndoe".to_string()),
        github: Some("https://github.com/johndoe".to_string()),
    }
}

fn jane_contact() -> ContactInfo {
    ContactInfo {
        name: "Jane Smith".to_string(),
        email: "jane.smith@email.com".to_string(),
        phone: "+1-555-0456".to_string(),
        location: "Austin, TX".to_string(),
        linkedin: Some("https://linkedin.com/in/janesmith".to_string()),
        github: Some("https://github.com/janesmith".to_string()),
    }
}

pub fn demo_applications() -> Vec<Application> {
    vec![
        Application {
            application_id: ApplicationId::new("app_001"),
            job_id: JobId::new("job_001"),
            applicant_user_id: UserId::new("uid_001"),
            resume_id: ResumeId::new("res_001"),
            selected_components: SelectedComponents::Snapshot(ComponentSnapshot {
                contact: Some(ContactInfo {
                    linkedin: None,
                    github: None,
                    ..john_contact()
                }),
                education: vec![Education {
                    degree: "Bachelor of Science in Computer Science".to_string(),
                    school: "University of California, Berkeley".to_string(),
                    graduation_year: 2020,
                    gpa: Some("3.8".to_string()),
                    relevant_courses: Vec::new(),
                }],
                experience: vec![Experience {
                    title: "Frontend Developer".to_string(),
                    company: "Previous Company".to_string(),
                    duration: "2020-2023".to_string(),
                    description: "Developed React applications and maintained frontend systems"
                        .to_string(),
                    achievements: Vec::new(),
                }],
                skills: strings(&["React", "TypeScript", "JavaScript", "CSS", "HTML"]),
                projects: vec![Project {
                    name: "E-commerce Platform".to_string(),
                    description:
                        "Built a full-stack e-commerce platform using React and Node.js"
                            .to_string(),
                    technologies: strings(&["React", "Node.js", "MongoDB"]),
                    url: None,
                }],
            }),
            note: None,
            status: ApplicationStatus::Submitted,
            applied_at: at("2025-01-16T10:00:00Z"),
        },
        Application {
            application_id: ApplicationId::new("app_002"),
            job_id: JobId::new("job_002"),
            applicant_user_id: UserId::new("uid_002"),
            resume_id: ResumeId::new("res_002"),
            selected_components: SelectedComponents::Snapshot(ComponentSnapshot {
                contact: Some(ContactInfo {
                    linkedin: None,
                    github: None,
                    ..jane_contact()
                }),
                education: vec![Education {
                    degree: "Master of Science in Software Engineering".to_string(),
                    school: "University of Texas at Austin".to_string(),
                    graduation_year: 2021,
                    gpa: Some("3.9".to_string()),
                    relevant_courses: Vec::new(),
                }],
                experience: vec![Experience {
                    title: "Full Stack Developer".to_string(),
                    company: "Tech Startup".to_string(),
                    duration: "2021-2024".to_string(),
                    description:
                        "Developed both frontend and backend systems using modern technologies"
                            .to_string(),
                    achievements: Vec::new(),
                }],
                skills: strings(&["React", "Node.js", "Python", "PostgreSQL", "AWS"]),
                projects: vec![Project {
                    name: "Social Media API".to_string(),
                    description: "Built a scalable social media API with real-time features"
                        .to_string(),
                    technologies: strings(&["Node.js", "Socket.io", "MongoDB", "Redis"]),
                    url: None,
                }],
            }),
            note: None,
            status: ApplicationStatus::Reviewed,
            applied_at: at("2025-01-15T14:30:00Z"),
        },
    ]
}

pub fn demo_resumes() -> Vec<ResumeRecord> {
    vec![
        ResumeRecord {
            resume_id: ResumeId::new("res_001"),
            status: ResumeParseStatus::Parsed,
            parsed_at: Some(at("2025-01-15T15:30:00Z")),
            components: Some(ResumeComponents {
                contact: john_contact(),
                education: vec![Education {
                    degree: "Bachelor of Science in Computer Science".to_string(),
                    school: "University of California, Berkeley".to_string(),
                    graduation_year: 2020,
                    gpa: Some("3.8".to_string()),
                    relevant_courses: strings(&[
                        "Data Structures",
                        "Algorithms",
                        "Software Engineering",
                    ]),
                }],
                experience: vec![
                    Experience {
                        title: "Frontend Developer".to_string(),
                        company: "Previous Company".to_string(),
                        duration: "2020-2023".to_string(),
                        description: "Developed React applications and maintained frontend systems. Led a team of 3 developers.".to_string(),
                        achievements: strings(&[
                            "Improved page load time by 40%",
                            "Implemented responsive design",
                        ]),
                    },
                    Experience {
                        title: "Junior Developer".to_string(),
                        company: "Startup Inc.".to_string(),
                        duration: "2019-2020".to_string(),
                        description:
                            "Worked on various web applications using modern JavaScript frameworks"
                                .to_string(),
                        achievements: Vec::new(),
                    },
                ],
                skills: SkillSet {
                    technical: strings(&[
                        "React",
                        "TypeScript",
                        "JavaScript",
                        "CSS",
                        "HTML",
                        "Node.js",
                        "Git",
                    ]),
                    soft: Some(strings(&[
                        "Leadership",
                        "Problem Solving",
                        "Communication",
                        "Teamwork",
                    ])),
                },
                projects: vec![
                    Project {
                        name: "E-commerce Platform".to_string(),
                        description: "Built a full-stack e-commerce platform using React and Node.js with payment integration".to_string(),
                        technologies: strings(&["React", "Node.js", "MongoDB", "Stripe API"]),
                        url: Some("https://github.com/johndoe/ecommerce-platform".to_string()),
                    },
                    Project {
                        name: "Task Management App".to_string(),
                        description: "Created a collaborative task management application with real-time updates".to_string(),
                        technologies: strings(&["React", "Socket.io", "Express", "PostgreSQL"]),
                        url: Some("https://github.com/johndoe/task-manager".to_string()),
                    },
                ],
            }),
        },
        ResumeRecord {
            resume_id: ResumeId::new("res_002"),
            status: ResumeParseStatus::Parsed,
            parsed_at: Some(at("2025-01-14T16:45:00Z")),
            components: Some(ResumeComponents {
                contact: jane_contact(),
                education: vec![Education {
                    degree: "Master of Science in Software Engineering".to_string(),
                    school: "University of Texas at Austin".to_string(),
                    graduation_year: 2021,
                    gpa: Some("3.9".to_string()),
                    relevant_courses: strings(&[
                        "Advanced Algorithms",
                        "Database Systems",
                        "Machine Learning",
                    ]),
                }],
                experience: vec![Experience {
                    title: "Full Stack Developer".to_string(),
                    company: "Tech Startup".to_string(),
                    duration: "2021-2024".to_string(),
                    description: "Developed both frontend and backend systems using modern technologies. Mentored junior developers.".to_string(),
                    achievements: strings(&[
                        "Scaled application to handle 100k+ users",
                        "Reduced server costs by 30%",
                    ]),
                }],
                skills: SkillSet {
                    technical: strings(&[
                        "React",
                        "Node.js",
                        "Python",
                        "PostgreSQL",
                        "AWS",
                        "Docker",
                        "Kubernetes",
                    ]),
                    soft: Some(strings(&[
                        "Mentoring",
                        "Project Management",
                        "Agile Development",
                        "Problem Solving",
                    ])),
                },
                projects: vec![Project {
                    name: "Social Media API".to_string(),
                    description: "Built a scalable social media API with real-time features and microservices architecture".to_string(),
                    technologies: strings(&["Node.js", "Socket.io", "MongoDB", "Redis", "Docker"]),
                    url: Some("https://github.com/janesmith/social-api".to_string()),
                }],
            }),
        },
    ]
}

pub fn demo_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile {
            user_id: UserId::new("uid_001"),
            email: "john.doe@email.com".to_string(),
            user_type: UserType::Applicant,
            profile: ProfileDetails::Applicant(ApplicantDetails {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                phone: "+1-555-0123".to_string(),
                location: "San Francisco, CA".to_string(),
                work_auth: "US Citizen".to_string(),
                status_enum: Some("authorized".to_string()),
                eligible_start: Some("2025-02-01".to_string()),
                expiry: Some("2025-12-31".to_string()),
            }),
        },
        UserProfile {
            user_id: UserId::new("uid_poster_001"),
            email: "recruiter@techcorp.com".to_string(),
            user_type: UserType::Poster,
            profile: ProfileDetails::Poster(PosterDetails {
                first_name: "Sarah".to_string(),
                last_name: "Johnson".to_string(),
                title: "Senior Recruiter".to_string(),
                company_id: CompanyId::new("comp_001"),
            }),
        },
    ]
}
