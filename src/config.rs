//! Project store for the Arke zod CLI
//!
//! A project ties a short key to an Arke backend and the session tokens
//! obtained by logging in to it. Projects are kept in a single YAML file:
//!
//! - `~/.config/arke-zod/projects.yaml` by default
//! - the path in `ARKE_ZOD_CONFIG_PATH` when that variable is set
//!
//! Commands receive the store through the [`ProjectStore`] trait so they can
//! be exercised against a temporary file in tests.
//!
//! ## Environment Variable Expansion
//!
//! Backend URLs support environment variable expansion when a client is built:
//! - `${VAR}` - Simple substitution
//! - `${VAR:-default}` - Use default if VAR is unset or empty
//! - `${VAR-default}` - Use default if VAR is unset
//! - `${VAR:+alt}` - Use alt if VAR is set and non-empty
//! - `${VAR+alt}` - Use alt if VAR is set

use crate::constants::{CONFIG_PATH_ENV, PROJECTS_FILE};
use anyhow::{anyhow, bail, Context};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::{env, fs, path::Path, path::PathBuf};

/// A configured Arke project
///
/// # Example
///
/// ```yaml
/// projects:
///   - key: shop
///     name: Shop
///     backend_url: ${ARKE_URL:-http://localhost:4000}
///     access_token: ""
///     refresh_token: ""
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    /// Project key, sent to the backend with every request
    pub key: String,
    /// Human-readable name
    pub name: String,
    /// Base URL of the Arke backend
    pub backend_url: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl Project {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        backend_url: impl Into<String>,
    ) -> Self {
        Project {
            key: key.into(),
            name: name.into(),
            backend_url: backend_url.into(),
            ..Default::default()
        }
    }

    /// Check that the project can be stored
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.key.trim().is_empty() {
            bail!("Project key is required");
        }
        if self.name.trim().is_empty() {
            bail!("Project name is required");
        }
        reqwest::Url::parse(&self.resolved_backend_url())
            .map_err(|_| anyhow!("Invalid backend URL '{}'", self.backend_url))?;
        Ok(())
    }

    /// Backend URL with placeholders expanded and without a trailing slash
    pub fn resolved_backend_url(&self) -> String {
        expand_env_placeholders(&self.backend_url)
            .trim_end_matches('/')
            .to_string()
    }

    pub fn has_session(&self) -> bool {
        !self.access_token.is_empty()
    }

    /// Copy of this project with its session tokens cleared
    pub fn without_session(&self) -> Self {
        Project {
            access_token: String::new(),
            refresh_token: String::new(),
            ..self.clone()
        }
    }
}

/// Contents of the projects file
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsConfig {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ProjectsConfig {
    pub fn find(&self, key: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.key == key)
    }

    /// Like [`find`](Self::find), but a missing project is an error
    pub fn require(&self, key: &str) -> anyhow::Result<&Project> {
        self.find(key)
            .ok_or_else(|| anyhow!("Project with key \"{key}\" not found."))
    }

    /// Validate and append a new project
    pub fn add(&mut self, project: Project) -> anyhow::Result<()> {
        if self.find(&project.key).is_some() {
            bail!("A project with the key \"{}\" already exists.", project.key);
        }
        project.validate()?;
        self.projects.push(project);
        Ok(())
    }

    /// Replace the project at `index`, keeping its stored session tokens
    pub fn update(&mut self, index: usize, project: Project) -> anyhow::Result<()> {
        let current = self
            .projects
            .get(index)
            .ok_or_else(|| anyhow!("no project at index {index}"))?;
        if project.key != current.key && self.find(&project.key).is_some() {
            bail!("A project with the key \"{}\" already exists.", project.key);
        }
        project.validate()?;
        let updated = Project {
            access_token: current.access_token.clone(),
            refresh_token: current.refresh_token.clone(),
            ..project
        };
        self.projects[index] = updated;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> anyhow::Result<Project> {
        if index >= self.projects.len() {
            bail!("no project at index {index}");
        }
        Ok(self.projects.remove(index))
    }

    /// Store new session tokens for `key` and return the updated project
    pub fn set_tokens(
        &mut self,
        key: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> anyhow::Result<Project> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.key == key)
            .ok_or_else(|| anyhow!("Project with key \"{key}\" not found."))?;
        project.access_token = access_token.to_string();
        project.refresh_token = refresh_token.to_string();
        Ok(project.clone())
    }
}

/// Persistent storage for [`ProjectsConfig`]
pub trait ProjectStore {
    fn load(&self) -> anyhow::Result<ProjectsConfig>;
    fn save(&self, cfg: &ProjectsConfig) -> anyhow::Result<()>;
}

/// [`ProjectStore`] backed by a YAML file
#[derive(Debug, Clone)]
pub struct FileProjectStore {
    path: PathBuf,
}

impl FileProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileProjectStore { path: path.into() }
    }

    /// Store at `ARKE_ZOD_CONFIG_PATH`, or under the user config directory
    pub fn from_env() -> Self {
        let path = env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
                p.push(PROJECTS_FILE);
                p
            });
        FileProjectStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProjectStore for FileProjectStore {
    fn load(&self) -> anyhow::Result<ProjectsConfig> {
        if !self.path.exists() {
            return Ok(ProjectsConfig::default());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading projects from {}", self.path.display()))?;
        if data.trim().is_empty() {
            return Ok(ProjectsConfig::default());
        }
        let cfg: ProjectsConfig = serde_yaml::from_str(&data)
            .with_context(|| format!("parsing projects from {}", self.path.display()))?;
        Ok(cfg)
    }

    fn save(&self, cfg: &ProjectsConfig) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_yaml::to_string(cfg)?;
        fs::write(&self.path, data)
            .with_context(|| format!("writing projects to {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved projects");
        Ok(())
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?:(:?[-+])([^}]*))?\}")
            .expect("placeholder pattern is valid")
    })
}

pub fn expand_env_placeholders(input: &str) -> String {
    placeholder_pattern()
        .replace_all(input, |caps: &regex::Captures| {
            let var_name = &caps[1];
            let op = caps.get(2).map_or("", |m| m.as_str());
            let val = caps.get(3).map_or("", |m| m.as_str());
            let var = env::var(var_name).ok();

            match (var.as_deref(), op) {
                (Some(v), "") => v.to_string(), // ${VAR}
                (Some(v), ":-") if !v.is_empty() => v.to_string(), // ${VAR:-default}
                (_, ":-") => val.to_string(),
                (Some(v), "-") => v.to_string(), // ${VAR-default}
                (None, "-") => val.to_string(),
                (Some(v), ":+") if !v.is_empty() => val.to_string(), // ${VAR:+alt}
                (Some(_), "+") => val.to_string(), // ${VAR+alt}
                _ => String::new(),
            }
        })
        .to_string()
}
