//! Slug and short-id derivation for article paths.
//!
//! Slugs are the human-readable path segment (`/a/hello-world/`); short ids
//! are the change-resistant one (`/a/1k3f/`). Both are pure functions of the
//! title, so re-running a build never moves a page.

/// Number of base-36 digits in a short id.
const ID_WIDTH: u32 = 4;

/// Derive a URL-safe slug from a title.
///
/// Lowercases, drops everything outside word characters, spaces and hyphens,
/// then collapses separator runs into single hyphens and trims the edges.
/// Distinct titles may produce the same slug; callers deal with collisions.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
        } else if (c.is_whitespace() || c == '-') && !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Derive a fixed-width short identifier from a title.
///
/// Order-sensitive multiplicative rolling hash over the title's chars,
/// reduced modulo 36^4 and base-36 encoded with zero padding. The same title
/// always yields the same id; different titles may collide (unchecked).
pub fn short_id(text: &str) -> String {
    let mut hash: u32 = 5381;
    for c in text.chars() {
        hash = hash.wrapping_mul(33).wrapping_add(c as u32);
    }
    let mut n = hash % 36u32.pow(ID_WIDTH);
    let mut digits = [b'0'; ID_WIDTH as usize];
    for slot in digits.iter_mut().rev() {
        let d = (n % 36) as u8;
        *slot = if d < 10 { b'0' + d } else { b'a' + d - 10 };
        n /= 36;
    }
    digits.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust & WebAssembly"), "rust-webassembly");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn test_slugify_collapses_hyphen_runs() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("--edge--"), "edge");
    }

    #[test]
    fn test_slugify_keeps_word_chars() {
        assert_eq!(slugify("under_score 123"), "under_score-123");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn test_slugify_idempotent() {
        for s in ["Hello World", "a -- b!!", "Ünicode, mixed 42", ""] {
            let once = slugify(s);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_short_id_deterministic() {
        assert_eq!(short_id("Hello World"), short_id("Hello World"));
    }

    #[test]
    fn test_short_id_format() {
        for s in ["Hello World", "", "x", "a much longer title than usual"] {
            let id = short_id(s);
            assert_eq!(id.len(), 4);
            assert!(id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_short_id_order_sensitive() {
        assert_ne!(short_id("ab"), short_id("ba"));
    }
}
