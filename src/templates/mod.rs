use std::path::Path;

use crate::error::{GazetteError, Result};

/// Template file names under the template directory, one per page kind.
/// Changes to any of these invalidate every rendered page, so the
/// incremental planner also matches on the bare file names.
pub const FILE_NAMES: [&str; 4] = [
    "article.html",
    "home.html",
    "articles.html",
    "editors.html",
];

/// The loaded template set. Any missing file is fatal before output is
/// written — a partial template set would render a partially broken site.
#[derive(Debug)]
pub struct TemplateSet {
    pub article: String,
    pub home: String,
    pub articles: String,
    pub editors: String,
}

impl TemplateSet {
    pub fn load(template_dir: &Path) -> Result<Self> {
        Ok(Self {
            article: read_template(template_dir, "article.html")?,
            home: read_template(template_dir, "home.html")?,
            articles: read_template(template_dir, "articles.html")?,
            editors: read_template(template_dir, "editors.html")?,
        })
    }
}

fn read_template(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    if !path.exists() {
        return Err(GazetteError::TemplateNotFound { path });
    }
    Ok(std::fs::read_to_string(&path)?)
}

/// A client-side redirect page pointing at `target` (an absolute site path).
pub fn redirect_html(target: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\">\
         <meta http-equiv=\"refresh\" content=\"0; url={target}\">\
         <link rel=\"canonical\" href=\"{target}\">\
         <title>Redirecting</title></head>\
         <body><p>Redirecting to <a href=\"{target}\">{target}</a></p></body></html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_set() {
        let tmp = TempDir::new().unwrap();
        for name in FILE_NAMES {
            fs::write(tmp.path().join(name), format!("<html>{name}</html>")).unwrap();
        }
        let set = TemplateSet::load(tmp.path()).unwrap();
        assert!(set.article.contains("article.html"));
        assert!(set.editors.contains("editors.html"));
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("article.html"), "x").unwrap();
        let err = TemplateSet::load(tmp.path()).unwrap_err();
        assert!(matches!(err, GazetteError::TemplateNotFound { .. }));
    }

    #[test]
    fn test_redirect_html_targets() {
        let html = redirect_html("/a/hello-world/");
        assert!(html.contains("url=/a/hello-world/"));
        assert!(html.contains("href=\"/a/hello-world/\""));
    }
}
