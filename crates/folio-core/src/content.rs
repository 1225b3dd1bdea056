//! Portfolio content (~/.folio/portfolio.toml)
//!
//! The page renders whatever this describes. A built-in sample is used when
//! no content file exists, and `folio sample` prints it as a starting point.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    /// Phrases cycled by the hero typewriter ("I'm …")
    pub phrases: Vec<String>,
    /// Footer credit, e.g. "Rust and ratatui"
    pub built_with: String,
    pub year: u16,
}

impl Profile {
    /// Up to two initials for the hero avatar
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alex Rivera".to_string(),
            headline: "Full Stack Developer & Creative Technologist".to_string(),
            tagline: "Crafting elegant digital experiences with careful engineering \
                      and a taste for simple, fast interfaces."
                .to_string(),
            phrases: vec![
                "a Full Stack Developer".to_string(),
                "a Creative Technologist".to_string(),
                "passionate about UX/UI".to_string(),
                "an Open Source Contributor".to_string(),
                "a Problem Solver".to_string(),
                "always learning new things".to_string(),
            ],
            built_with: "Rust and ratatui".to_string(),
            year: 2025,
        }
    }
}

/// Key/value biography shown as a JSON-ish card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bio {
    pub summary: Vec<String>,
    pub location: String,
    pub focus: String,
    pub philosophy: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub availability: String,
}

impl Bio {
    /// Ordered (key, value) rows for rendering
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("location", self.location.clone()),
            ("focus", self.focus.clone()),
            ("philosophy", self.philosophy.clone()),
            ("skills", self.skills.join(", ")),
            ("interests", self.interests.join(", ")),
            ("availability", self.availability.clone()),
        ]
    }
}

impl Default for Bio {
    fn default() -> Self {
        Self {
            summary: vec![
                "I build software end to end, from database schema to the last pixel \
                 of an animation."
                    .to_string(),
                "Lately that means fast web frontends, small backend services and \
                 the occasional terminal tool."
                    .to_string(),
            ],
            location: "Toronto, ON".to_string(),
            focus: "Full-Stack & Creative Tech".to_string(),
            philosophy: "Simple > Complex".to_string(),
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "TypeScript".to_string(),
                "Rust".to_string(),
            ],
            interests: vec![
                "Open Source".to_string(),
                "UI/UX".to_string(),
                "Performance".to_string(),
            ],
            availability: "Open to opportunities".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email.trim())
    }
}

/// Openable URL for a link written with or without a scheme
pub fn web_url(link: &str) -> String {
    let link = link.trim();
    if link.contains("://") || link.starts_with("mailto:") {
        link.to_string()
    } else {
        format!("https://{link}")
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            email: "alex.rivera@example.com".to_string(),
            location: "Markham, ON".to_string(),
            github: Some("github.com/alex-rivera".to_string()),
            linkedin: Some("linkedin.com/in/alex-rivera".to_string()),
        }
    }
}

/// Everything the page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub bio: Bio,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            bio: Bio::default(),
            experience: sample_experience(),
            projects: sample_projects(),
            contact: Contact::default(),
        }
    }
}

impl Portfolio {
    /// Parse and validate a TOML document
    pub fn from_toml(source: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(source)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Load a content file
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let portfolio = Self::from_toml(&source)?;
        info!(
            path = %path.display(),
            experience = portfolio.experience.len(),
            projects = portfolio.projects.len(),
            "Loaded portfolio"
        );
        Ok(portfolio)
    }

    /// Load `path` if it exists, else the built-in sample
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "No content file, using sample portfolio");
            Ok(Self::default())
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(FolioError::InvalidContent(
                "profile.name must not be empty".to_string(),
            ));
        }
        for (i, exp) in self.experience.iter().enumerate() {
            if exp.position.trim().is_empty() {
                return Err(FolioError::InvalidContent(format!(
                    "experience[{i}].position must not be empty"
                )));
            }
        }
        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                return Err(FolioError::InvalidContent(format!(
                    "projects[{i}].title must not be empty"
                )));
            }
        }
        if !self.contact.email.contains('@') {
            return Err(FolioError::InvalidContent(format!(
                "contact.email is not an address: {:?}",
                self.contact.email
            )));
        }
        Ok(())
    }

    /// Number of timeline markers this content produces (entries, cards, end)
    pub fn marker_count(&self) -> usize {
        let entries = self.experience.len() + self.projects.len();
        if entries == 0 {
            0
        } else {
            entries + 1
        }
    }
}

fn sample_experience() -> Vec<Experience> {
    vec![
        Experience {
            company: "Corner Bakery Co.".to_string(),
            position: "Freelance Software Developer".to_string(),
            period: "February 2024 - Present".to_string(),
            description: "Built a shift planner for part-time staff that lets managers \
                          assign people by availability. Cut weekly admin time by hours \
                          and improved shift coverage with a drag-and-drop scheduler \
                          that respects availability and coverage rules."
                .to_string(),
            technologies: vec![
                "React".to_string(),
                "Firebase".to_string(),
                "Firestore".to_string(),
                "JavaScript".to_string(),
            ],
        },
        Experience {
            company: "Campus Robotics Club".to_string(),
            position: "Software Lead".to_string(),
            period: "September 2022 - January 2024".to_string(),
            description: "Led a small team writing telemetry tooling and a live \
                          dashboard for competition robots."
                .to_string(),
            technologies: vec!["Python".to_string(), "Rust".to_string()],
        },
    ]
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            title: "E-Commerce Platform".to_string(),
            description: "A full-stack store with authentication, payment processing \
                          and an admin dashboard."
                .to_string(),
            technologies: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "Stripe".to_string(),
                "MongoDB".to_string(),
            ],
            github: Some("github.com/alex-rivera/shop".to_string()),
            live: None,
        },
        Project {
            title: "Task Management App".to_string(),
            description: "Collaborative task board with real-time updates and \
                          drag-and-drop."
                .to_string(),
            technologies: vec![
                "Vue.js".to_string(),
                "Socket.io".to_string(),
                "Express".to_string(),
                "PostgreSQL".to_string(),
            ],
            github: Some("github.com/alex-rivera/tasks".to_string()),
            live: Some("tasks.example.com".to_string()),
        },
        Project {
            title: "Weather Dashboard".to_string(),
            description: "Forecasts, interactive maps and location-based alerts.".to_string(),
            technologies: vec![
                "React".to_string(),
                "OpenWeather API".to_string(),
                "Chart.js".to_string(),
            ],
            github: None,
            live: Some("weather.example.com".to_string()),
        },
    ]
}
