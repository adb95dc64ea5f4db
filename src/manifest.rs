//! The persisted build manifest.
//!
//! A manifest entry is the listing-ready projection of a built document.
//! Incremental runs load the previous manifest, replace entries for the
//! documents they rebuilt, and rewrite the file, so listing pages can be
//! regenerated without re-parsing unchanged sources. Entries for deleted
//! documents are never pruned here; only a full build drops them.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GazetteError, Result};

/// Manifest location inside the output directory.
pub const FILE_NAME: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub slug: String,
    pub short_id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Default)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Read a manifest from `path`. A missing file is an empty manifest; a
    /// file that exists but does not parse is an error, not a silent reset.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let entries: Vec<ManifestEntry> =
            serde_json::from_str(&raw).map_err(|e| GazetteError::Manifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self { entries })
    }

    /// Merge freshly built entries in: a fresh entry replaces the cached one
    /// with the same slug in place, new slugs append at the end. Cached
    /// entries with no fresh counterpart are retained as-is.
    pub fn merge(&mut self, fresh: Vec<ManifestEntry>) {
        for entry in fresh {
            match self.entries.iter_mut().find(|e| e.slug == entry.slug) {
                Some(slot) => *slot = entry,
                None => self.entries.push(entry),
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string_pretty(&self.entries).map_err(|e| GazetteError::Manifest {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(slug: &str, title: &str) -> ManifestEntry {
        ManifestEntry {
            slug: slug.into(),
            short_id: "0000".into(),
            title: title.into(),
            url: format!("/a/{slug}/"),
            date: None,
            description: None,
            author: None,
        }
    }

    #[test]
    fn test_load_missing_is_empty() {
        let manifest = Manifest::load(Path::new("/nonexistent/manifest.json")).unwrap();
        assert!(manifest.entries.is_empty());
    }

    #[test]
    fn test_load_malformed_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("manifest.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Manifest::load(&path).unwrap_err(),
            GazetteError::Manifest { .. }
        ));
    }

    #[test]
    fn test_merge_replaces_same_slug_in_place() {
        let mut manifest = Manifest {
            entries: vec![entry("a", "A"), entry("b", "B"), entry("c", "C")],
        };
        manifest.merge(vec![entry("b", "B updated")]);
        let titles: Vec<&str> = manifest.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["A", "B updated", "C"]);
    }

    #[test]
    fn test_merge_appends_new_slugs() {
        let mut manifest = Manifest {
            entries: vec![entry("a", "A")],
        };
        manifest.merge(vec![entry("d", "D")]);
        assert_eq!(manifest.entries.len(), 2);
        assert_eq!(manifest.entries[1].slug, "d");
    }

    #[test]
    fn test_merge_never_prunes() {
        let mut manifest = Manifest {
            entries: vec![entry("gone", "Deleted upstream")],
        };
        manifest.merge(vec![]);
        assert_eq!(manifest.entries.len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out").join(FILE_NAME);
        let manifest = Manifest {
            entries: vec![entry("a", "A")],
        };
        manifest.save(&path).unwrap();
        let reloaded = Manifest::load(&path).unwrap();
        assert_eq!(reloaded.entries, manifest.entries);
    }
}
