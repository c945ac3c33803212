//! Fixed stub records substituted for a real backend response when the
//! fallback policy is active (development-only failures).

use crate::models::{Project, ProjectLinks};

/// The three example records returned when a fetch fails in development.
pub fn stub_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "Portfolio Website".into(),
            summary: "A modern portfolio website built with Next.js and TypeScript".into(),
            tags: vec!["Next.js".into(), "TypeScript".into(), "Tailwind CSS".into()],
            links: ProjectLinks {
                github: Some("https://github.com/example/portfolio".into()),
                live: Some("https://portfolio.example.com".into()),
                demo: None,
            },
        },
        Project {
            id: "2".into(),
            title: "E-commerce Platform".into(),
            summary: "Full-stack e-commerce solution with React and Node.js".into(),
            tags: vec!["React".into(), "Node.js".into(), "MongoDB".into(), "Stripe".into()],
            links: ProjectLinks {
                github: Some("https://github.com/example/ecommerce".into()),
                live: None,
                demo: Some("https://demo-ecommerce.example.com".into()),
            },
        },
        Project {
            id: "3".into(),
            title: "Task Management App".into(),
            summary: "Collaborative task management application with real-time updates".into(),
            tags: vec!["Vue.js".into(), "Firebase".into(), "Real-time".into()],
            links: ProjectLinks {
                github: Some("https://github.com/example/taskapp".into()),
                live: Some("https://tasks.example.com".into()),
                demo: None,
            },
        },
    ]
}
