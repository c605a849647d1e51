mod load;

pub use load::load_universe;

use serde::Deserialize;

/// URL value marking a project as non-navigable.
pub const PLACEHOLDER_URL: &str = "#";

/// A skill ("star"). Coordinates are fractions of the viewport in 0..1,
/// `size` is the base radius in pixels.
#[derive(Clone, Debug, Deserialize)]
pub struct SkillRecord {
    pub id: String,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// A project ("planet"). `links` reference skill ids; a dangling link is
/// tolerated and simply draws no connector.
#[derive(Clone, Debug, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    #[serde(default)]
    pub links: Vec<String>,
    pub url: String,
}

impl ProjectRecord {
    pub fn navigable_url(&self) -> Option<&str> {
        if self.url == PLACEHOLDER_URL {
            None
        } else {
            Some(self.url.as_str())
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Universe {
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

impl Universe {
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}
