//! Fixed content records for the portfolio page.

mod experience;
mod profile;
mod projects;
mod skills;

pub use experience::*;
pub use profile::*;
pub use projects::*;
pub use skills::*;

/// Everything the page renders beyond the site identity.
#[derive(Debug, Clone)]
pub struct PortfolioContent {
    pub about: AboutContent,
    pub skills: SkillsContent,
    pub experience: Vec<Experience>,
    pub projects: ProjectsContent,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            about: AboutContent::default(),
            skills: SkillsContent::default(),
            experience: work_history(),
            projects: ProjectsContent::default(),
        }
    }
}
