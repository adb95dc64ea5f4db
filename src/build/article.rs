//! Builds one article: primary page plus its redirect pages, and the
//! manifest entry the listing stage consumes.

use std::path::Path;

use crate::config::{ResolvedPaths, SiteConfig};
use crate::content;
use crate::error::Result;
use crate::manifest::ManifestEntry;
use crate::render::views::{self, ArticlePageView, ArticleView, SiteView};
use crate::render::render;
use crate::slug::{short_id, slugify};
use crate::templates::{self, TemplateSet};
use crate::toc;

use super::{markdown, write_page, DATE_FORMAT};

/// Build a single document from `source`.
///
/// Writes the primary page at `a/<slug>/`, a short-id redirect when the id
/// differs from the slug, an alias redirect when one is supplied and differs
/// from both, and always the long-form `article/<slug>/` redirect. Parse and
/// I/O failures propagate and abort the run; there is no per-document
/// isolation.
pub fn build_document(
    config: &SiteConfig,
    paths: &ResolvedPaths,
    templates: &TemplateSet,
    source: &Path,
) -> Result<ManifestEntry> {
    let (meta, body) = content::parse_content_file(source)?;

    let title = meta.title.clone().unwrap_or_else(|| {
        source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string()
    });
    let slug = slugify(&title);
    let id = meta.id.clone().unwrap_or_else(|| short_id(&title));
    let url = format!("/a/{slug}/");

    let (content_html, toc_html) = toc::build_toc(&markdown::markdown_to_html(&body));

    let view = ArticleView {
        site: SiteView::from_config(config),
        page: ArticlePageView {
            title: title.clone(),
            description: meta.description.clone().unwrap_or_default(),
            content: content_html,
            date: meta
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            toc: toc_html,
            author: meta
                .author
                .as_deref()
                .map(|key| author_link(config, key))
                .unwrap_or_default(),
            url: url.clone(),
        },
    };
    let page_html = render(&templates.article, &views::to_vars(&view));
    write_page(&paths.output.join("a").join(&slug), &page_html)?;

    // Alternate paths all land on the slug page.
    let redirect = templates::redirect_html(&url);
    if id != slug {
        write_page(&paths.output.join("a").join(&id), &redirect)?;
    }
    if let Some(alias) = meta.alias.as_deref() {
        if alias != slug && alias != id {
            write_page(&paths.output.join("a").join(alias), &redirect)?;
        }
    }
    write_page(&paths.output.join("article").join(&slug), &redirect)?;

    Ok(ManifestEntry {
        slug,
        short_id: id,
        title,
        url,
        date: meta.date,
        description: meta.description,
        author: meta.author,
    })
}

/// Author byline HTML: linked display name, with a linked company suffix
/// when the author's company reference resolves.
pub(crate) fn author_link(config: &SiteConfig, key: &str) -> String {
    let author = config.resolve_author(key);
    match author.company {
        Some(company) => format!(
            "<a href=\"{}\">{}</a> (<a href=\"{}\">{}</a>)",
            author.url, author.name, company.url, company.name
        ),
        None => format!("<a href=\"{}\">{}</a>", author.url, author.name),
    }
}
