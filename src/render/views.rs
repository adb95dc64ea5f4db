//! Typed variable trees, one per page kind.
//!
//! Every template is filled from a struct here rather than an ad-hoc map, so
//! a renamed field shows up as a compile error instead of a silently empty
//! placeholder.

use serde::Serialize;
use serde_json::Value;

use crate::config::SiteConfig;

/// Site-wide fields shared by every page, addressed as `{{site.*}}`.
#[derive(Debug, Clone, Serialize)]
pub struct SiteView {
    pub title: String,
    pub description: String,
    pub base_url: String,
}

impl SiteView {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            base_url: config.site.base_url.clone(),
        }
    }
}

/// Per-article fields, addressed as `{{page.*}}` in the article template.
#[derive(Debug, Serialize)]
pub struct ArticlePageView {
    pub title: String,
    pub description: String,
    pub content: String,
    pub date: String,
    pub toc: String,
    pub author: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ArticleView {
    pub site: SiteView,
    pub page: ArticlePageView,
}

/// Home page: the five most recent articles, pre-joined into `{{items}}`.
#[derive(Debug, Serialize)]
pub struct HomeView {
    pub site: SiteView,
    pub items: String,
}

/// Full article listing, pre-joined into `{{items}}`.
#[derive(Debug, Serialize)]
pub struct ArticlesView {
    pub site: SiteView,
    pub items: String,
}

/// Editors page: the author/company tables, pre-joined into `{{editors}}`.
#[derive(Debug, Serialize)]
pub struct EditorsView {
    pub site: SiteView,
    pub editors: String,
}

/// Serialize a view into the JSON tree the renderer navigates.
pub fn to_vars<T: Serialize>(view: &T) -> Value {
    serde_json::to_value(view).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;

    #[test]
    fn test_article_view_round_trips_through_render() {
        let view = ArticleView {
            site: SiteView {
                title: "Gazette".into(),
                description: String::new(),
                base_url: String::new(),
            },
            page: ArticlePageView {
                title: "Hello".into(),
                description: "greeting".into(),
                content: "<p>hi</p>".into(),
                date: String::new(),
                toc: String::new(),
                author: String::new(),
                url: "/a/hello/".into(),
            },
        };
        let html = render(
            "{{page.title}} - {{site.title}}: {{page.content}}",
            &to_vars(&view),
        );
        assert_eq!(html, "Hello - Gazette: <p>hi</p>");
    }

    #[test]
    fn test_empty_fields_render_empty() {
        let view = HomeView {
            site: SiteView {
                title: "t".into(),
                description: String::new(),
                base_url: String::new(),
            },
            items: String::new(),
        };
        assert_eq!(render("[{{items}}]", &to_vars(&view)), "[]");
    }
}
