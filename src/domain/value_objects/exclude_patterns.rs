//! Exclude patterns value object
//!
//! Wildcard strings that remove entries (and their subtrees) from a built tree.
//!
//! Translation is deliberately naive: only the first `*` of a pattern becomes
//! `.*`; everything else is handed to the regex engine as written. So `*.log`
//! becomes `.*.log` (where `.` matches any character), and in `a*b*` only the
//! first star is a wildcard while the second quantifies `b`.

use regex::Regex;
use std::path::Path;

use crate::error::{TreeError, TreeResult};

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// A single compiled exclude pattern
#[derive(Debug, Clone)]
struct ExcludePattern {
    source: String,
    regex: Regex,
}

/// Ordered set of compiled exclude patterns.
#[derive(Debug, Clone, Default)]
pub struct ExcludePatterns {
    patterns: Vec<ExcludePattern>,
}

impl ExcludePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile patterns in order.
    ///
    /// Blank patterns are skipped. Fails on the first pattern that does not
    /// compile or when the list exceeds the pattern limit.
    pub fn new<I, S>(patterns: I) -> TreeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.trim().is_empty() {
                continue;
            }

            if compiled.len() == MAX_PATTERNS {
                return Err(TreeError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: format!("more than {} exclude patterns", MAX_PATTERNS),
                });
            }

            let regex = Regex::new(&wildcard_to_regex(pattern)).map_err(|e| {
                TreeError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                }
            })?;

            compiled.push(ExcludePattern {
                source: pattern.to_string(),
                regex,
            });
        }

        Ok(Self { patterns: compiled })
    }

    /// Check whether an entry is excluded.
    ///
    /// An entry matches if any pattern is found anywhere in its bare name or
    /// in its full path (case-sensitive, unanchored).
    pub fn is_excluded(&self, name: &str, full_path: &Path) -> bool {
        self.matching_pattern(name, full_path).is_some()
    }

    /// The first pattern that excludes this entry, if any
    pub fn matching_pattern(&self, name: &str, full_path: &Path) -> Option<&str> {
        let full_path = full_path.to_string_lossy();
        self.patterns
            .iter()
            .find(|p| p.regex.is_match(name) || p.regex.is_match(&full_path))
            .map(|p| p.source.as_str())
    }

    /// Get the number of patterns loaded.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Original pattern strings, in order
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.source.as_str())
    }
}

/// Replace the first `*` with `.*`, leaving the rest untouched.
pub fn wildcard_to_regex(pattern: &str) -> String {
    pattern.replacen('*', ".*", 1)
}
