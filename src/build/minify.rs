use minify_html::{minify, Cfg};

/// Compact a rendered page before it is persisted: strips comments and
/// redundant whitespace, minifies attributes and inline CSS. Keeps the
/// `<html>`/`<head>` opening tags and closing tags so the emitted documents
/// stay well-formed for downstream tooling.
pub fn compact_html(html: &str) -> Vec<u8> {
    let mut cfg = Cfg::new();
    cfg.minify_css = true;
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    minify(html.as_bytes(), &cfg)
}
