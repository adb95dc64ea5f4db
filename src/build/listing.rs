//! Aggregate listing pages: home (recent five), the full articles index,
//! the editors page, and the root redirect.

use std::cmp::Reverse;

use crate::config::{ResolvedPaths, SiteConfig};
use crate::error::Result;
use crate::manifest::ManifestEntry;
use crate::render::render;
use crate::render::views::{self, ArticlesView, EditorsView, HomeView, SiteView};
use crate::templates::{self, TemplateSet};

use super::{article, write_page, DATE_FORMAT};

/// Number of entries on the home page.
const RECENT_COUNT: usize = 5;

/// Render every listing page from the full collection of document summaries
/// (fresh builds plus any retained cached entries).
pub fn build_listings(
    config: &SiteConfig,
    paths: &ResolvedPaths,
    templates: &TemplateSet,
    entries: &[ManifestEntry],
) -> Result<()> {
    let sorted = sort_by_recency(entries);
    let site = SiteView::from_config(config);

    let recent: String = sorted
        .iter()
        .take(RECENT_COUNT)
        .map(|e| entry_fragment(config, e))
        .collect();
    let home_html = render(
        &templates.home,
        &views::to_vars(&HomeView {
            site: site.clone(),
            items: recent,
        }),
    );
    write_page(&paths.output.join("home"), &home_html)?;

    let all: String = sorted.iter().map(|e| entry_fragment(config, e)).collect();
    let articles_html = render(
        &templates.articles,
        &views::to_vars(&ArticlesView {
            site: site.clone(),
            items: all,
        }),
    );
    write_page(&paths.output.join("articles"), &articles_html)?;

    let editors_html = render(
        &templates.editors,
        &views::to_vars(&EditorsView {
            site,
            editors: editors_fragment(config),
        }),
    );
    write_page(&paths.output.join("editors"), &editors_html)?;

    // The root page always points at the freshly rendered home page.
    write_page(&paths.output, &templates::redirect_html("/home/"))?;

    Ok(())
}

/// Publication date descending; undated entries after all dated ones,
/// keeping their encounter order (stable sort).
pub(crate) fn sort_by_recency(entries: &[ManifestEntry]) -> Vec<&ManifestEntry> {
    let mut sorted: Vec<&ManifestEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| Reverse(e.date));
    sorted
}

fn entry_fragment(config: &SiteConfig, entry: &ManifestEntry) -> String {
    let mut fragment = format!(
        "<article><h3><a href=\"{}\">{}</a></h3>",
        entry.url, entry.title
    );
    if let Some(date) = entry.date {
        fragment.push_str(&format!("<time>{}</time>", date.format(DATE_FORMAT)));
    }
    if let Some(author) = entry.author.as_deref() {
        fragment.push_str(&format!(
            "<p class=\"byline\">{}</p>",
            article::author_link(config, author)
        ));
    }
    if let Some(description) = entry.description.as_deref() {
        fragment.push_str(&format!("<p>{description}</p>"));
    }
    fragment.push_str("</article>");
    fragment
}

/// The editors page is rendered from config alone; it does not depend on any
/// document.
fn editors_fragment(config: &SiteConfig) -> String {
    let mut out = String::from("<ul class=\"editors\">");
    for key in config.authors.keys() {
        out.push_str(&format!("<li>{}</li>", article::author_link(config, key)));
    }
    out.push_str("</ul>");
    out
}
