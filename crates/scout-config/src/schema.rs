//! Structural validation of the raw configuration document
//!
//! The recognized shape is fixed and small:
//!
//! ```json
//! {
//!     "exclude": ["vendor/**"],
//!     "languages": { "js": { "jshint": { "failCiOnError": true } } }
//! }
//! ```
//!
//! so the checker is hand-written rather than schema-driven. Every
//! violation found in one pass is reported; callers aggregate them into
//! a single error instead of stopping at the first.

use std::fmt;

use serde_json::Value;

/// One structural mismatch, with a dotted location into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub location: String,
    pub message: String,
}

impl Violation {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Validate a parsed document against the fixed schema.
/// An empty result means the document is valid.
pub fn validate(doc: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();

    let Some(root) = doc.as_object() else {
        violations.push(Violation::new("$", "configuration must be a JSON object"));
        return violations;
    };

    if let Some(exclude) = root.get("exclude") {
        check_exclude(exclude, &mut violations);
    }
    if let Some(languages) = root.get("languages") {
        check_languages(languages, &mut violations);
    }

    violations
}

fn check_exclude(exclude: &Value, violations: &mut Vec<Violation>) {
    let Some(items) = exclude.as_array() else {
        violations.push(Violation::new("exclude", "must be an array of strings"));
        return;
    };
    for (index, item) in items.iter().enumerate() {
        if !item.is_string() {
            violations.push(Violation::new(
                format!("exclude[{index}]"),
                "must be a string pattern",
            ));
        }
    }
}

fn check_languages(languages: &Value, violations: &mut Vec<Violation>) {
    let Some(buckets) = languages.as_object() else {
        violations.push(Violation::new(
            "languages",
            "must be an object keyed by language tag",
        ));
        return;
    };
    for (lang, bucket) in buckets {
        let Some(analysers) = bucket.as_object() else {
            violations.push(Violation::new(
                format!("languages.{lang}"),
                "must be an object keyed by analyser name",
            ));
            continue;
        };
        // Second pass: each analyser value must itself be a settings
        // object. Catches e.g. {"js": {"analysers": ["eslint"]}}, which
        // is an object one level up but an array where settings belong.
        for (name, settings) in analysers {
            if !(settings.is_object() || settings.is_null()) {
                violations.push(Violation::new(
                    format!("languages.{lang}.{name}"),
                    "analyser settings must be an object",
                ));
            }
        }
    }
}
