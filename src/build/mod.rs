pub mod article;
pub mod assets;
pub mod listing;
pub mod markdown;
pub mod minify;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use walkdir::WalkDir;

use crate::config::{ResolvedPaths, SiteConfig, CONFIG_FILE_NAME};
use crate::error::Result;
use crate::manifest::{self, Manifest, ManifestEntry};
use crate::output::CommandOutput;
use crate::templates::{self, TemplateSet};

/// Date format used on article and listing pages.
pub(crate) const DATE_FORMAT: &str = "%B %d, %Y";

pub struct BuildOptions {
    pub incremental: bool,
    /// Changed paths relative to the project root, from the caller's
    /// environment. Ignored unless `incremental` is set.
    pub changed: Vec<String>,
}

/// What an invocation actually has to rebuild.
#[derive(Debug, PartialEq, Eq)]
pub enum RebuildPlan {
    /// Rebuild every document, listings, and the static tree.
    Full,
    /// Rebuild only these document sources, then listings from the merged
    /// manifest. Static passthrough is skipped.
    Documents(Vec<PathBuf>),
}

#[derive(Debug, Serialize)]
pub struct BuildStats {
    pub documents_built: usize,
    pub static_files_copied: usize,
    pub incremental: bool,
    pub duration_ms: u64,
}

impl CommandOutput for BuildStats {
    fn human_display(&self) -> String {
        let verb = if self.incremental { "Rebuilt" } else { "Built" };
        format!(
            "{} {} article{} in {:.1}s ({} static files copied)",
            verb,
            self.documents_built,
            if self.documents_built == 1 { "" } else { "s" },
            self.duration_ms as f64 / 1000.0,
            self.static_files_copied
        )
    }
}

/// Decide between a full and a narrower rebuild from the changed-path list.
///
/// Template and config changes affect every rendered page, so any such path
/// forces a full rebuild even when document changes are present in the same
/// list. Static-asset changes also take the full path: there is no
/// static-only shortcut. Only a list that reduces to document sources allows
/// the incremental path; anything unrecognized falls back to a full rebuild.
pub fn plan_rebuild(config: &SiteConfig, opts: &BuildOptions) -> RebuildPlan {
    if !opts.incremental {
        return RebuildPlan::Full;
    }
    let template_dir = Path::new(&config.build.template_dir);
    let static_dir = Path::new(&config.build.static_dir);
    let content_dir = Path::new(&config.build.content_dir);
    let changed: Vec<&Path> = opts.changed.iter().map(Path::new).collect();

    if changed.iter().copied().any(|p| {
        p.starts_with(template_dir) || p == Path::new(CONFIG_FILE_NAME) || is_top_level_template(p)
    }) {
        tracing::info!("template or config change, taking the full rebuild path");
        return RebuildPlan::Full;
    }

    if changed.iter().any(|p| p.starts_with(static_dir)) {
        tracing::info!("static asset change, taking the full rebuild path");
        return RebuildPlan::Full;
    }

    let documents: Vec<PathBuf> = changed
        .iter()
        .filter(|p| p.starts_with(content_dir) && p.extension().is_some_and(|e| e == "md"))
        .map(|p| p.to_path_buf())
        .collect();
    if documents.is_empty() {
        tracing::info!("no recognized changed paths, taking the full rebuild path");
        return RebuildPlan::Full;
    }
    RebuildPlan::Documents(documents)
}

fn is_top_level_template(path: &Path) -> bool {
    let top_level = path.parent().map_or(true, |p| p.as_os_str().is_empty());
    top_level
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| templates::FILE_NAMES.contains(&n))
}

/// Run one build. Loads templates up front (fatal if any are missing), then
/// drives either the full or the incremental path.
pub fn run(config: &SiteConfig, paths: &ResolvedPaths, opts: &BuildOptions) -> Result<BuildStats> {
    let start = Instant::now();
    let templates = TemplateSet::load(&paths.templates)?;

    let (documents_built, static_files_copied, incremental) = match plan_rebuild(config, opts) {
        RebuildPlan::Full => {
            let (built, copied) = full_build(config, paths, &templates)?;
            (built, copied, false)
        }
        RebuildPlan::Documents(documents) => {
            let built = incremental_build(config, paths, &templates, &documents)?;
            (built, 0, true)
        }
    };

    Ok(BuildStats {
        documents_built,
        static_files_copied,
        incremental,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Rebuild everything from source. Starts from a clean output tree, so pages
/// for deleted documents disappear here and only here.
fn full_build(
    config: &SiteConfig,
    paths: &ResolvedPaths,
    templates: &TemplateSet,
) -> Result<(usize, usize)> {
    if paths.output.exists() {
        fs::remove_dir_all(&paths.output)?;
    }
    fs::create_dir_all(&paths.output)?;

    let mut sources: Vec<PathBuf> = WalkDir::new(&paths.content)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file() && e.path().extension().is_some_and(|ext| ext == "md")
        })
        .map(|e| e.into_path())
        .collect();
    // Deterministic build order; this is also the encounter order undated
    // entries keep in listings.
    sources.sort();

    let mut fresh: Vec<ManifestEntry> = Vec::with_capacity(sources.len());
    for source in &sources {
        tracing::debug!("building {}", source.display());
        fresh.push(article::build_document(config, paths, templates, source)?);
    }
    warn_on_slug_collisions(&[], &fresh);
    let built = fresh.len();

    listing::build_listings(config, paths, templates, &fresh)?;
    let copied = assets::copy_static(&paths.static_dir, &paths.output)?;

    let manifest = Manifest { entries: fresh };
    manifest.save(&paths.output.join(manifest::FILE_NAME))?;

    Ok((built, copied))
}

/// Rebuild only the changed documents, then listings from the merged
/// manifest. Cached entries for untouched documents are retained; entries
/// for deleted documents are not pruned (only a full build does that).
fn incremental_build(
    config: &SiteConfig,
    paths: &ResolvedPaths,
    templates: &TemplateSet,
    documents: &[PathBuf],
) -> Result<usize> {
    fs::create_dir_all(&paths.output)?;
    let manifest_path = paths.output.join(manifest::FILE_NAME);
    let mut manifest = Manifest::load(&manifest_path)?;

    let mut fresh: Vec<ManifestEntry> = Vec::with_capacity(documents.len());
    for document in documents {
        let source = paths.root.join(document);
        tracing::debug!("rebuilding {}", source.display());
        fresh.push(article::build_document(config, paths, templates, &source)?);
    }
    warn_on_slug_collisions(&manifest.entries, &fresh);
    let built = fresh.len();

    manifest.merge(fresh);
    listing::build_listings(config, paths, templates, &manifest.entries)?;
    manifest.save(&manifest_path)?;

    Ok(built)
}

/// Distinct documents can slugify identically and will then overwrite each
/// other's output. Surface it; do not pick a winner.
fn warn_on_slug_collisions(cached: &[ManifestEntry], fresh: &[ManifestEntry]) {
    for (slug, first, second) in slug_collisions(cached, fresh) {
        tracing::warn!(
            slug = %slug,
            "slug collision: \"{first}\" and \"{second}\" write the same output path",
        );
    }
}

/// `(slug, earlier title, later title)` for every pair of titles that share
/// a slug. Within `fresh` any repeat counts; against `cached` only a
/// differing title does, since a same-title match is the normal in-place
/// update of an existing document.
fn slug_collisions(
    cached: &[ManifestEntry],
    fresh: &[ManifestEntry],
) -> Vec<(String, String, String)> {
    let mut collisions = Vec::new();
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for entry in fresh {
        if let Some(first) = seen.insert(entry.slug.as_str(), entry.title.as_str()) {
            collisions.push((entry.slug.clone(), first.to_string(), entry.title.clone()));
        } else if let Some(prev) = cached
            .iter()
            .find(|c| c.slug == entry.slug && c.title != entry.title)
        {
            collisions.push((entry.slug.clone(), prev.title.clone(), entry.title.clone()));
        }
    }
    collisions
}

/// Write one page as `<dir>/index.html`, compacted.
pub(crate) fn write_page(dir: &Path, html: &str) -> Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("index.html"), minify::compact_html(html))?;
    Ok(())
}
