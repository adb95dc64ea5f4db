pub mod defaults;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GazetteError, Result};

/// Name of the site configuration file at the project root.
pub const CONFIG_FILE_NAME: &str = "gazette.toml";

/// Site-wide configuration: loaded once per run and passed by reference into
/// every component that needs it. Author/company tables are BTreeMaps so the
/// editors page renders in a stable order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    #[serde(default)]
    pub authors: BTreeMap<String, AuthorConfig>,
    #[serde(default)]
    pub companies: BTreeMap<String, CompanyConfig>,
    #[serde(default)]
    pub build: BuildSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
}

/// An author, keyed in the config by a contact handle (e.g. an email).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorConfig {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    #[serde(default = "defaults::output_dir")]
    pub output_dir: String,
    #[serde(default = "defaults::content_dir")]
    pub content_dir: String,
    #[serde(default = "defaults::template_dir")]
    pub template_dir: String,
    #[serde(default = "defaults::static_dir")]
    pub static_dir: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output_dir: defaults::output_dir(),
            content_dir: defaults::content_dir(),
            template_dir: defaults::template_dir(),
            static_dir: defaults::static_dir(),
        }
    }
}

/// An author reference resolved against the config tables. Unknown keys
/// degrade to the raw key with a placeholder link instead of failing the run.
#[derive(Debug, Clone)]
pub struct ResolvedAuthor {
    pub name: String,
    pub url: String,
    pub company: Option<CompanyConfig>,
}

/// Resolved absolute paths for the project directories.
#[derive(Clone)]
pub struct ResolvedPaths {
    pub root: PathBuf,
    pub output: PathBuf,
    pub content: PathBuf,
    pub templates: PathBuf,
    pub static_dir: PathBuf,
}

impl SiteConfig {
    /// Load config from a `gazette.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GazetteError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let config: SiteConfig =
            toml::from_str(&contents).map_err(|e| GazetteError::ConfigInvalid {
                message: e.to_string(),
            })?;
        Ok(config)
    }

    /// Resolve all directory paths relative to the project root.
    pub fn resolve_paths(&self, project_root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            root: project_root.to_path_buf(),
            output: project_root.join(&self.build.output_dir),
            content: project_root.join(&self.build.content_dir),
            templates: project_root.join(&self.build.template_dir),
            static_dir: project_root.join(&self.build.static_dir),
        }
    }

    /// Look up an author by key, following its company reference.
    pub fn resolve_author(&self, key: &str) -> ResolvedAuthor {
        match self.authors.get(key) {
            Some(author) => ResolvedAuthor {
                name: author.name.clone(),
                url: author.url.clone(),
                company: author
                    .company
                    .as_deref()
                    .and_then(|c| self.companies.get(c))
                    .cloned(),
            },
            None => ResolvedAuthor {
                name: key.to_string(),
                url: "#".to_string(),
                company: None,
            },
        }
    }
}
