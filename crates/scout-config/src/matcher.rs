//! Exclusion-aware path filtering
//!
//! Compiles the `exclude` pattern list (gitignore syntax, including
//! `!`-negation and trailing-`/` directory patterns) into a predicate
//! over relative paths, and combines it with a per-language extension
//! selector.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::{Error, Result};

/// Reserved language tag matching every path regardless of extension.
pub const ALL_LANGUAGES: &str = "all";

/// Compiled path filter for one configuration's exclude list.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    exclude: Gitignore,
}

impl PathMatcher {
    /// Compile an exclude pattern list. Fails on a malformed pattern.
    pub fn new(exclude: &[String]) -> Result<Self> {
        let mut builder = GitignoreBuilder::new("");
        for pattern in exclude {
            builder
                .add_line(None, pattern)
                .map_err(|e| Error::ExcludePattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
        }
        let exclude = builder.build().map_err(|e| Error::ExcludePattern {
            pattern: String::new(),
            message: e.to_string(),
        })?;
        Ok(Self { exclude })
    }

    /// Filter `paths` down to those matching `language` and not excluded,
    /// preserving input order.
    pub fn included_paths<S: AsRef<str>>(&self, paths: &[S], language: &str) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.as_ref())
            .filter(|p| matches_language(p, language) && !self.is_excluded(p))
            .map(String::from)
            .collect()
    }

    /// True when `path` is rejected by the exclude rules
    /// (last matching pattern wins, negations re-include).
    pub fn is_excluded(&self, path: &str) -> bool {
        // Exclude patterns are relative to the repo root; a leading
        // slash on the candidate carries no extra meaning here.
        let rel = path.trim_start_matches('/');
        self.exclude
            .matched_path_or_any_parents(Path::new(rel), false)
            .is_ignore()
    }
}

fn matches_language(path: &str, language: &str) -> bool {
    if language == ALL_LANGUAGES {
        return true;
    }
    let suffix = format!(".{language}");
    path.ends_with(&suffix)
}
