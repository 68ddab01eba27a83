use std::collections::HashSet;

use super::escape::plain_text;

/// Turns heading HTML into an `id` slug: markup stripped, lowercased, runs of
/// non-alphanumerics collapsed to a single `-`, no leading or trailing `-`.
pub fn slugify(html: &str) -> String {
    let text = plain_text(html);
    let mut slug = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(c);
        } else {
            gap = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}

/// Hands out unique heading ids for one document.
#[derive(Debug, Default)]
pub struct AnchorSet {
    used: HashSet<String>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The slug of `html`, suffixed `-1`, `-2`, ... if already taken.
    pub fn anchor_for(&mut self, html: &str) -> String {
        let base = slugify(html);
        let mut id = base.clone();
        let mut n = 0;
        while self.used.contains(&id) {
            n += 1;
            id = format!("{base}-{n}");
        }
        self.used.insert(id.clone());
        id
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Hello World", "hello-world")]
    #[case("<em>Rust</em> &amp; C++!", "rust-c")]
    #[case("  Über  Straße ", "über-straße")]
    #[case("2. Step", "2-step")]
    #[case("!!!", "section")]
    #[case("1 < 2 and 3 > 2", "1-2-and-3-2")]
    #[case("Vec<T> basics", "vec-t-basics")]
    fn slugs(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(slugify(html), expected);
    }

    #[test]
    fn duplicates_get_suffixes() {
        let mut anchors = AnchorSet::new();
        assert_eq!(anchors.anchor_for("Intro"), "intro");
        assert_eq!(anchors.anchor_for("Intro"), "intro-1");
        assert_eq!(anchors.anchor_for("intro-1"), "intro-1-1");
        assert_eq!(anchors.anchor_for("Intro"), "intro-2");
    }
}
