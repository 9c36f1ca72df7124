//! Skills section content.

use serde::{Deserialize, Serialize};

/// A group of related skills shown as one card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub icon: String,
    pub title: String,
    /// Accent gradient name, matched by the stylesheet.
    pub accent: String,
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn new(icon: &str, title: &str, accent: &str, skills: &[&str]) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            accent: accent.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Skill cards plus the scrolling technology strip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsContent {
    pub categories: Vec<SkillCategory>,
    pub technologies: Vec<String>,
    /// One full loop of the technology strip, in seconds.
    pub marquee_seconds: u32,
}

impl Default for SkillsContent {
    fn default() -> Self {
        Self {
            categories: vec![
                SkillCategory::new(
                    "💻",
                    "Languages",
                    "blue",
                    &["C#/C++", "TypeScript", "JavaScript", "Python", "PHP", "Java"],
                ),
                SkillCategory::new(
                    "✨",
                    "Frameworks",
                    "purple",
                    &[".NET", "ASP.NET Core", "Blazor", "React", "Laravel", "Vue.js"],
                ),
                SkillCategory::new(
                    "🗄️",
                    "Databases",
                    "emerald",
                    &["SQL Server", "MySQL", "MongoDB"],
                ),
                SkillCategory::new(
                    "☁️",
                    "Cloud & DevOps",
                    "orange",
                    &["Azure", "Docker", "CI/CD", "Git", "App Insights", "Key Vault"],
                ),
            ],
            technologies: [
                "C#/C++",
                ".NET",
                "ASP.NET Core",
                "Blazor",
                "React",
                "TypeScript",
                "Azure",
                "SQL Server",
                "Docker",
                "CI/CD",
                "Key Vault",
                "App Insights",
                "Laravel",
                "Vue.js",
                "MongoDB",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            marquee_seconds: 28,
        }
    }
}
