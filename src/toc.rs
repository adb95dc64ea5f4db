//! Table-of-contents extraction from rendered article HTML.
//!
//! Scans for `<h2>`/`<h3>` tags in document order, injects an `id` anchor
//! derived from the heading text, and builds a linked outline fragment.
//! Anchor ids are not deduplicated: two identical headings produce two
//! identical ids, same as the pages this replaces.

use crate::slug::slugify;

/// One outline entry, in document order.
#[derive(Debug, PartialEq)]
pub struct TocEntry {
    pub level: u8,
    pub id: String,
    pub text: String,
}

/// Annotate `html` with heading anchors and return it together with the
/// outline fragment (an `<ol>` of in-page links, empty string if no
/// headings).
pub fn build_toc(html: &str) -> (String, String) {
    let mut annotated = String::with_capacity(html.len() + 64);
    let mut entries: Vec<TocEntry> = Vec::new();
    let mut rest = html;

    while let Some((pos, level)) = find_heading(rest) {
        annotated.push_str(&rest[..pos]);
        let tag = &rest[pos..];

        // `<h2` .. `>` is the opening tag; bail on malformed markup
        let Some(open_end) = tag.find('>') else {
            rest = tag;
            break;
        };
        let closing = if level == 2 { "</h2>" } else { "</h3>" };
        let Some(close_rel) = tag[open_end + 1..].find(closing) else {
            rest = tag;
            break;
        };
        let inner = &tag[open_end + 1..open_end + 1 + close_rel];
        let text = strip_tags(inner).trim().to_string();
        let id = slugify(&text);

        annotated.push_str(&tag[..3]);
        annotated.push_str(&format!(" id=\"{id}\""));
        annotated.push_str(&tag[3..open_end + 1]);
        annotated.push_str(inner);
        annotated.push_str(closing);

        entries.push(TocEntry { level, id, text });
        rest = &tag[open_end + 1 + close_rel + closing.len()..];
    }
    annotated.push_str(rest);

    (annotated, outline_fragment(&entries))
}

/// Position and level of the earliest h2/h3 opening tag in `s`.
fn find_heading(s: &str) -> Option<(usize, u8)> {
    let mut best: Option<(usize, u8)> = None;
    for (pattern, level) in [("<h2", 2u8), ("<h3", 3u8)] {
        let mut from = 0;
        while let Some(i) = s[from..].find(pattern) {
            let pos = from + i;
            let next = s[pos + 3..].chars().next();
            if matches!(next, Some('>') | Some(' ') | Some('\t') | Some('\n')) {
                if best.map_or(true, |(b, _)| pos < b) {
                    best = Some((pos, level));
                }
                break;
            }
            from = pos + 3;
        }
    }
    best
}

/// Drop nested markup from heading text (`<code>x</code>` → `x`).
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn outline_fragment(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ol class=\"toc\">");
    for entry in entries {
        out.push_str(&format!(
            "<li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>",
            entry.level, entry.id, entry.text
        ));
    }
    out.push_str("</ol>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let html = "<h2>First</h2><p>x</p><h3>Second</h3><h2>Third</h2>";
        let (annotated, toc) = build_toc(html);
        assert_eq!(annotated.matches(" id=\"").count(), 3);
        assert_eq!(toc.matches("<li").count(), 3);
        let first = toc.find("#first").unwrap();
        let second = toc.find("#second").unwrap();
        let third = toc.find("#third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_anchor_injected_into_heading_tag() {
        let (annotated, _) = build_toc("<h2>Getting Started</h2>");
        assert!(annotated.contains("<h2 id=\"getting-started\">Getting Started</h2>"));
    }

    #[test]
    fn test_nested_markup_stripped_from_anchor() {
        let (annotated, toc) = build_toc("<h2>Use <code>cargo</code> here</h2>");
        assert!(annotated.contains("id=\"use-cargo-here\""));
        assert!(toc.contains("href=\"#use-cargo-here\""));
        assert!(toc.contains(">Use cargo here</a>"));
    }

    #[test]
    fn test_existing_attributes_preserved() {
        let (annotated, _) = build_toc("<h3 class=\"x\">Hi</h3>");
        assert!(annotated.contains("<h3 id=\"hi\" class=\"x\">Hi</h3>"));
    }

    #[test]
    fn test_no_headings() {
        let html = "<p>nothing here</p><h4>too deep</h4>";
        let (annotated, toc) = build_toc(html);
        assert_eq!(annotated, html);
        assert_eq!(toc, "");
    }

    #[test]
    fn test_duplicate_headings_keep_duplicate_ids() {
        let (_, toc) = build_toc("<h2>Same</h2><h2>Same</h2>");
        assert_eq!(toc.matches("href=\"#same\"").count(), 2);
    }

    #[test]
    fn test_toc_level_classes() {
        let (_, toc) = build_toc("<h2>A</h2><h3>B</h3>");
        assert!(toc.contains("toc-level-2"));
        assert!(toc.contains("toc-level-3"));
    }
}
