//! Placeholder template rendering.
//!
//! Templates use `{{dotted.path}}` tokens resolved against a nested JSON
//! value. There are no conditionals or loops; list-shaped content is
//! pre-joined into a single HTML string by the caller. No escaping is done —
//! page content is trusted markup by the time it reaches a template.
//!
//! Callers never hand-build the variable tree: each page kind has a typed
//! view struct in [`views`] that serializes into it.

pub mod views;

use serde_json::Value;

/// Expand every `{{dotted.path}}` token in `template` from `vars`.
///
/// A path that is missing at any depth renders as the empty string. An
/// unterminated `{{` is emitted literally. Never fails.
pub fn render(template: &str, vars: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                out.push_str(&lookup(vars, after[..end].trim()));
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Walk `vars` one path segment at a time; any miss yields an empty string.
fn lookup(vars: &Value, path: &str) -> String {
    let mut current = vars;
    for segment in path.split('.') {
        match current.get(segment) {
            Some(next) => current = next,
            None => return String::new(),
        }
    }
    match current {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
