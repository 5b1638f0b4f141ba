use std::collections::HashMap;

/// GitHub-style anchor slugs, unique within one slugger.
#[derive(Debug, Default)]
pub struct Slugger {
    counts: HashMap<String, usize>,
}

impl Slugger {
    /// Creates a new slugger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the next slug for the given heading text.
    ///
    /// Repeated slugs get `-1`, `-2`, ... appended, skipping any suffixed
    /// form that an earlier heading already produced.
    pub fn next_slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut next = self.counts.get(&base).copied().unwrap_or(0);
        let mut slug = base.clone();
        while self.counts.contains_key(&slug) {
            slug = format!("{}-{}", base, next);
            next += 1;
        }
        self.counts.insert(base.clone(), next.max(1));
        if slug != base {
            self.counts.insert(slug.clone(), 1);
        }
        slug
    }
}

/// Slugify heading text without deduplication.
///
/// Lowercases, keeps letters, digits, `-` and `_`, turns spaces into `-`
/// and drops everything else. Hyphens are neither collapsed nor trimmed.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            slug.extend(ch.to_lowercase());
        } else if ch == ' ' {
            slug.push('-');
        }
    }
    slug
}
