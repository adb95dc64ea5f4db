use pulldown_cmark::{html, Options, Parser};

/// Convert an article body to HTML. Collaborator wrapper, no post-processing
/// here — anchors are injected later by the TOC pass.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_become_plain_tags() {
        let html = markdown_to_html("## Section\n\ntext");
        assert!(html.contains("<h2>Section</h2>"));
    }

    #[test]
    fn test_inline_formatting() {
        let html = markdown_to_html("**bold** and ~~gone~~");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_table_extension_enabled() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }
}
