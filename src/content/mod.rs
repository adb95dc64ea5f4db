use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GazetteError, Result};

/// Metadata header of an article source file. Every field is optional: a
/// missing title falls back to the filename stem, a missing id is derived
/// from the title, and the rest simply render empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Parse a markdown source file with a YAML metadata header delimited by `---`.
pub fn parse_content_file(path: &Path) -> Result<(Metadata, String)> {
    let raw = std::fs::read_to_string(path)?;
    let (header, body) = split_header(&raw).ok_or_else(|| GazetteError::Content {
        path: path.to_path_buf(),
        message: "missing metadata header delimiters".into(),
    })?;
    let metadata: Metadata = if header.is_empty() {
        Metadata::default()
    } else {
        serde_yaml_ng::from_str(header).map_err(|e| GazetteError::Metadata {
            path: path.to_path_buf(),
            source: e,
        })?
    };
    Ok((metadata, body.to_string()))
}

fn split_header(raw: &str) -> Option<(&str, &str)> {
    let trimmed = raw.trim_start();
    if !trimmed.starts_with("---") {
        return None;
    }
    let after_first = &trimmed[3..];
    let end = after_first.find("---")?;
    let header = &after_first[..end];
    let body = &after_first[end + 3..];
    Some((
        header.trim(),
        body.trim_start_matches('\n').trim_start_matches('\r'),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header_valid() {
        let raw = "---\ntitle: Hello\n---\nBody content here.";
        let (header, body) = split_header(raw).unwrap();
        assert_eq!(header, "title: Hello");
        assert_eq!(body, "Body content here.");
    }

    #[test]
    fn test_split_header_missing() {
        assert!(split_header("No header here").is_none());
    }

    #[test]
    fn test_metadata_all_fields() {
        let header = "title: Hi\ndate: 2024-01-01\nauthor: a@x.com\ndescription: d\nid: ab12\nalias: hi";
        let m: Metadata = serde_yaml_ng::from_str(header).unwrap();
        assert_eq!(m.title.as_deref(), Some("Hi"));
        assert_eq!(m.date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(m.author.as_deref(), Some("a@x.com"));
        assert_eq!(m.id.as_deref(), Some("ab12"));
        assert_eq!(m.alias.as_deref(), Some("hi"));
    }

    #[test]
    fn test_metadata_fields_all_optional() {
        let m: Metadata = serde_yaml_ng::from_str("description: only this").unwrap();
        assert!(m.title.is_none());
        assert!(m.date.is_none());
        assert_eq!(m.description.as_deref(), Some("only this"));
    }
}
