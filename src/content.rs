use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";
const PROJECTS_FILE: &str = "projects.json";
const WORKS_FILE: &str = "works.json";
const SKILLS_FILE: &str = "skills.json";

/// Number of tags a collapsed project card shows before the `+N` marker.
pub const COLLAPSED_TAG_COUNT: usize = 3;

const DEFAULT_GRADIENT: (&str, &str, &str) = ("from-blue-500", "via-purple-500", "to-pink-500");

pub static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(SiteContent::load);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    Missing(&'static str),
    #[error("couldn't parse {file}: {source}")]
    Malformed {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Returns the embedded site content, parsed once per process.
pub fn site_content() -> Result<&'static SiteContent, &'static ContentError> {
    SITE_CONTENT.as_ref()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub projects: Vec<ProjectRecord>,
    pub works: WorkHistory,
    pub skills: Vec<SkillGroup>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let profile = read_json::<Profile>(PROFILE_FILE)?;
        let projects = parse_projects(&read_asset(PROJECTS_FILE)?)?;
        let works = read_json::<WorkHistory>(WORKS_FILE)?;
        let skills = read_json::<Vec<SkillGroup>>(SKILLS_FILE)?;
        log::debug!(
            "loaded site content: {} projects, {} work entries, {} skill groups",
            projects.len(),
            works.entries.len(),
            skills.len()
        );
        Ok(Self {
            profile,
            projects,
            works,
            skills,
        })
    }
}

fn read_asset(file: &'static str) -> Result<Cow<'static, [u8]>, ContentError> {
    ContentAssets::get(file)
        .map(|asset| asset.data)
        .ok_or(ContentError::Missing(file))
}

fn read_json<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let data = read_asset(file)?;
    serde_json::from_slice(&data).map_err(|source| ContentError::Malformed { file, source })
}

/// Parses a project list from JSON and checks the carousel's preconditions.
pub fn parse_projects(json: &[u8]) -> Result<Vec<ProjectRecord>, ContentError> {
    let projects = serde_json::from_slice(json).map_err(|source| ContentError::Malformed {
        file: PROJECTS_FILE,
        source,
    })?;
    validate_projects(projects)
}

fn validate_projects(projects: Vec<ProjectRecord>) -> Result<Vec<ProjectRecord>, ContentError> {
    if projects.is_empty() {
        return Err(ContentError::Invalid("project list is empty".to_string()));
    }
    let mut seen = HashSet::new();
    for project in &projects {
        if !seen.insert(project.id.as_str()) {
            return Err(ContentError::Invalid(format!(
                "duplicate project id: {}",
                project.id
            )));
        }
    }
    Ok(projects)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    #[default]
    Project,
    Article,
    Featured,
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Project => "PROJECT",
            Self::Article => "ARTICLE",
            Self::Featured => "FEATURED",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProjectLinks {
    pub demo: Option<String>,
    #[serde(alias = "github")]
    pub source: Option<String>,
    pub article: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Demo,
    Source,
    Article,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Demo => "View Live",
            Self::Source => "Source",
            Self::Article => "Read Article",
        }
    }
}

impl ProjectLinks {
    /// Present links in display order.
    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &str)> {
        [
            (LinkKind::Demo, &self.demo),
            (LinkKind::Source, &self.source),
            (LinkKind::Article, &self.article),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.as_deref().map(|url| (kind, url)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Gradient {
    pub from: String,
    pub via: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualTheme {
    pub gradient: Option<Gradient>,
    pub mockup_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    #[serde(default)]
    pub kind: ProjectKind,
    pub category: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub theme: VisualTheme,
}

impl ProjectRecord {
    /// Category when present, otherwise the upper-cased kind.
    pub fn label(&self) -> Cow<'_, str> {
        match &self.category {
            Some(category) => Cow::Borrowed(category),
            None => Cow::Borrowed(self.kind.label()),
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self.kind {
            ProjectKind::Article => "Read Article",
            _ => "View Project",
        }
    }

    /// Tags to render and the number hidden behind the `+N` marker.
    pub fn visible_tags(&self, expanded: bool) -> (&[String], usize) {
        if expanded || self.tags.len() <= COLLAPSED_TAG_COUNT {
            (&self.tags, 0)
        } else {
            (
                &self.tags[..COLLAPSED_TAG_COUNT],
                self.tags.len() - COLLAPSED_TAG_COUNT,
            )
        }
    }

    pub fn gradient_classes(&self) -> String {
        match &self.theme.gradient {
            Some(g) => format!("{} {} {}", g.from, g.via, g.to),
            None => {
                let (from, via, to) = DEFAULT_GRADIENT;
                format!("{from} {via} {to}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSummary {
    pub title: String,
    pub total_experience: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkEntry {
    pub id: String,
    pub period: String,
    pub duration: String,
    pub company: String,
    pub position: String,
    pub technologies: String,
    #[serde(default)]
    pub active: bool,
}

impl WorkEntry {
    pub fn technologies(&self) -> impl Iterator<Item = &str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkHistory {
    pub summary: WorkSummary,
    pub entries: Vec<WorkEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub id: String,
    pub title: String,
    pub lines: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: String,
}

impl SocialLink {
    pub fn opens_in_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub experience: String,
    pub headline: String,
    pub intro: String,
    pub profile_image: String,
    pub email: String,
    pub socials: Vec<SocialLink>,
}
