//! About section content.

use serde::{Deserialize, Serialize};

/// A headline number with its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Biography, quick facts and stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    pub heading_muted: String,
    pub portrait: String,
    pub facts: Vec<String>,
    pub lead: String,
    pub body: String,
    pub stats: Vec<Stat>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            heading: "A little bit".to_string(),
            heading_muted: "about me".to_string(),
            portrait: "/static/images/mark-bychin-profile.png".to_string(),
            facts: vec![
                "B.S. Computer Science, UF".to_string(),
                "Azure Cloud Engineer".to_string(),
            ],
            lead: "Software Engineer with 5 years of experience building full-stack \
                   applications using .NET Core, Laravel, React, and Vue.js. I specialize \
                   in REST API design, SQL optimization, and CI/CD automation on Azure."
                .to_string(),
            body: "I’m passionate about writing clean, maintainable code and architecting \
                   scalable backend systems. From refactoring legacy codebases to \
                   integrating secure cloud infrastructure, I thrive on solving complex \
                   engineering challenges."
                .to_string(),
            stats: vec![
                Stat::new("5+", "Years Experience"),
                Stat::new("Azure Certified", "Azure-based systems, CI/CD"),
                Stat::new("3.7 / 4.0", "University GPA"),
                Stat::new("4", "Companies Worked"),
            ],
        }
    }
}
