//! Project showcase.

use serde::{Deserialize, Serialize};

/// A showcased project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn new(title: &str, description: &str, image: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            github: None,
            live: None,
            featured: false,
        }
    }

    pub fn with_github(mut self, url: &str) -> Self {
        self.github = Some(url.to_string());
        self
    }

    pub fn with_live(mut self, url: &str) -> Self {
        self.live = Some(url.to_string());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Live demo link, if it points anywhere.
    pub fn live_link(&self) -> Option<&str> {
        real_link(self.live.as_deref())
    }

    /// Source link, if it points anywhere.
    pub fn github_link(&self) -> Option<&str> {
        real_link(self.github.as_deref())
    }
}

/// A link is rendered only when present and not the `#` placeholder.
pub fn is_real_link(href: Option<&str>) -> bool {
    matches!(href, Some(h) if !h.is_empty() && h != "#")
}

fn real_link(href: Option<&str>) -> Option<&str> {
    href.filter(|h| is_real_link(Some(*h)))
}

/// All projects in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectsContent {
    pub projects: Vec<Project>,
}

impl ProjectsContent {
    pub fn featured(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn others(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.featured)
    }
}

impl Default for ProjectsContent {
    fn default() -> Self {
        Self {
            projects: vec![
                Project::new(
                    "SoundShift",
                    "SoundShift is an intelligent music recommendation platform designed to \
                     enhance user experience by leveraging user feedback for personalized \
                     music suggestions.",
                    "/static/images/SoundShift.png",
                    &["React", "Next.js", "Firebase", "TypeScript", "Tailwind CSS", "Gemini"],
                )
                .with_github("https://github.com/Mark1asd/SoundShiftAI")
                .featured(),
                Project::new(
                    "Job Listing",
                    "A React-based job listings application with full CRUD functionality, \
                     built using Vite and Tailwind CSS, and powered by a mock REST API with \
                     JSON Server.",
                    "/static/images/ReactJobs.png",
                    &["React", "JavaScript", "TailwindCSS", "JSON Server"],
                )
                .with_github("https://github.com/Mark1asd/React-Job-Listing?tab=readme-ov-file")
                .featured(),
                Project::new(
                    "Drum-Kit",
                    "A simple Drum Kit web app built with HTML, CSS, and JavaScript. Click \
                     instruments or press keyboard keys to play different drum sounds.",
                    "/static/images/DrumKit.png",
                    &["JavaScript", "HTML", "CSS"],
                )
                .with_live("https://mark1asd.github.io/Drum-Kit/")
                .with_github("https://github.com/Mark1asd/Drum-Kit?tab=readme-ov-file"),
                Project::new(
                    "MineSweeper",
                    "A classic Minesweeper game implemented with C++ and SFML, featuring OOP \
                     design, random mine placement, and configurable board sizes.",
                    "/static/images/Minesweeper.png",
                    &["C++", "SFML", "OOP"],
                )
                .with_github("https://github.com/Mark1asd/Minesweeper"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_links() {
        assert!(is_real_link(Some("https://example.com")));
        assert!(!is_real_link(Some("#")));
        assert!(!is_real_link(Some("")));
        assert!(!is_real_link(None));
    }

    #[test]
    fn test_featured_split() {
        let content = ProjectsContent::default();
        let featured: Vec<&str> = content.featured().map(|p| p.title.as_str()).collect();
        let others: Vec<&str> = content.others().map(|p| p.title.as_str()).collect();

        assert_eq!(featured, vec!["SoundShift", "Job Listing"]);
        assert_eq!(others, vec!["Drum-Kit", "MineSweeper"]);
    }

    #[test]
    fn test_placeholder_link_is_hidden() {
        let project = Project::new("X", "x", "x.png", &[]).with_live("#");
        assert!(project.live_link().is_none());
        assert!(project.github_link().is_none());
    }
}
