//! Work history.

use serde::{Deserialize, Serialize};

/// One position on the timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub accent: String,
    pub bullets: Vec<String>,
}

impl Experience {
    pub fn new(
        role: &str,
        company: &str,
        location: &str,
        period: &str,
        accent: &str,
        bullets: &[&str],
    ) -> Self {
        Self {
            role: role.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            period: period.to_string(),
            accent: accent.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// Positions, most recent first.
pub fn work_history() -> Vec<Experience> {
    vec![
        Experience::new(
            "Software Engineer",
            "Mid Atlantic Finance",
            "Tampa, FL",
            "03/2025 – Present",
            "blue",
            &[
                "Maintain .NET Core loan apps and Azure App Services for internal financial workflows.",
                "Implemented secure REST APIs with JWT authentication, improving login speed & reliability by 10%.",
                "Refactored legacy .NET Framework code to .NET 8, improving maintainability and deployment time.",
                "Integrated Azure Key Vault and Application Insights for secure credential storage and live monitoring.",
            ],
        ),
        Experience::new(
            "Software Engineer",
            "ACS Laboratory",
            "Tampa, FL",
            "01/2024 – 02/2025",
            "purple",
            &[
                "Enhanced user engagement by 30% through redesigning with Vue.js and responsive CSS layouts.",
                "Automated manual data-entry tasks using Laravel jobs and scheduled scripts, saving 5 FTEs.",
                "Developed a robotic workflow system in PHP and Vue.js that reduced manual processing time by 60%.",
                "Integrated security middleware, reducing system risks by 25%.",
            ],
        ),
        Experience::new(
            "Software Engineer",
            "Haneke Design",
            "Tampa, FL",
            "06/2023 – 01/2024",
            "emerald",
            &[
                "Built RESTful APIs with structured error handling in .NET Core, lowering API failure rate by 30%.",
                "Optimized SQL queries and compression to cut latency by 25%.",
                "Designed microservice-based architecture for client projects, ensuring reusability and scalability.",
                "Implemented React components for client-facing features with design and QA teams.",
            ],
        ),
        Experience::new(
            "Jr. Software Engineer",
            "Blue Fetch",
            "Clearwater, FL",
            "09/2021 – 01/2023",
            "orange",
            &[
                "Optimized PHP app speed with query caching and async JS, increasing load time performance by 45%.",
                "Scaled website infrastructure using Docker containers, improving traffic handling by 30%.",
                "Integrated MySQL tracking features for logistics, improving delivery reporting accuracy by 15%.",
            ],
        ),
    ]
}
