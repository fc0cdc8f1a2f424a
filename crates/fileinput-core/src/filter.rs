//! Accepted file type matching.
//!
//! `fileType` is either an exact MIME type or a category prefix ending in
//! `/`. A comma-separated list of such patterns is also accepted, mirroring
//! the MIME entries of an HTML `accept` attribute: `image/*` is treated the
//! same as `image/`, and `*/*` or `*` accepts any type.

/// One accepted type pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pattern {
    /// Matches every type.
    Any,
    /// Matches any type starting with this prefix (ends in `/`).
    Prefix(String),
    /// Matches this type exactly.
    Exact(String),
}

/// Parsed form of `WidgetConfig::file_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypeFilter {
    patterns: Vec<Pattern>,
}

impl FileTypeFilter {
    /// Parse a `fileType` string. Empty list entries are skipped.
    pub fn parse(accept: &str) -> Self {
        let patterns = accept
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                let mut p = p.to_ascii_lowercase();
                if p == "*" || p == "*/*" {
                    return Pattern::Any;
                }
                if p.ends_with("/*") {
                    p.pop();
                }
                if p.ends_with('/') {
                    Pattern::Prefix(p)
                } else {
                    Pattern::Exact(p)
                }
            })
            .collect();
        Self { patterns }
    }

    /// Whether a declared MIME type is accepted.
    pub fn matches(&self, mime_type: &str) -> bool {
        let mime = mime_type.trim().to_ascii_lowercase();
        self.patterns.iter().any(|pattern| match pattern {
            Pattern::Any => true,
            Pattern::Prefix(prefix) => mime.starts_with(prefix.as_str()),
            Pattern::Exact(exact) => mime == *exact,
        })
    }

    /// Whether no pattern was given. An empty filter accepts nothing.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
