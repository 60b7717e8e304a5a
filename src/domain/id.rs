use std::fmt::Display;

use serde::Serialize;

/// Represents the track ID.
///
/// A slug derived from artist and title, stable across runs and safe to use in URLs.
/// Two different tracks may end up with the same ID; collisions are kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    pub fn new(artist: &str, title: &str) -> Self {
        Self(slugify(&format!("{artist}-{title}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercases the text, keeps ASCII letters and digits, and turns every run of
/// whitespace and hyphens into a single hyphen. Other characters are dropped
/// without separating their neighbours. Never starts or ends with a hyphen.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_separator = false;
        } else if c == '-' || c.is_whitespace() {
            pending_separator = true;
        }
    }

    slug
}
