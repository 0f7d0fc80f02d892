//! The resolved, immutable repository configuration
//!
//! [`RepoConfig`] is the queryable end product of resolution: built once
//! from a validated document, never mutated afterwards. All query
//! methods are pure reads.

use std::collections::BTreeMap;
use std::io::Read;
use std::str::FromStr;

use json_comments::StripComments;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::matcher::PathMatcher;
use crate::{Error, Result, reformat, schema};

/// One analyser within a language bucket: a mandatory name plus an open
/// map of tool-specific settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyserEntry {
    pub name: String,
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl AnalyserEntry {
    /// Build an entry from its bucket key and raw settings object.
    /// The key wins over any author-supplied `name` inside the settings.
    pub fn new(name: impl Into<String>, mut settings: Map<String, Value>) -> Self {
        settings.remove("name");
        Self {
            name: name.into(),
            settings,
        }
    }

    /// CI-failure policy: JS-style truthiness of `failCiOnError`.
    pub fn fails_ci(&self) -> bool {
        self.settings
            .get("failCiOnError")
            .is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The resolved analysis configuration for one repository.
#[derive(Debug, Clone)]
pub struct RepoConfig {
    exclude: Vec<String>,
    languages: BTreeMap<String, Vec<AnalyserEntry>>,
    matcher: PathMatcher,
}

impl RepoConfig {
    /// Build from a parsed raw document: validate, reformat, compile the
    /// exclude matcher. Any failure is terminal; no partially-built
    /// config escapes.
    pub fn from_value(doc: &Value) -> Result<Self> {
        let violations = schema::validate(doc);
        if !violations.is_empty() {
            return Err(Error::Schema { violations });
        }
        let (exclude, languages) = reformat::reformat(doc);
        let matcher = PathMatcher::new(&exclude)?;
        Ok(Self {
            exclude,
            languages,
            matcher,
        })
    }

    /// Build from configuration text (JSON, comments permitted).
    /// Blank input is treated as an empty document.
    pub fn from_string(text: &str) -> Result<Self> {
        let doc = parse_document(text)?;
        Self::from_value(&doc)
    }

    /// The exclude pattern list, as authored.
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// The distinct language tags with a bucket in this config.
    pub fn languages(&self) -> Vec<&str> {
        self.languages.keys().map(String::as_str).collect()
    }

    /// Analysers for one language tag; empty when the tag has no bucket.
    pub fn analysers(&self, language: &str) -> &[AnalyserEntry] {
        self.languages
            .get(language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every analyser across every language bucket, flattened.
    /// Duplicate names across buckets are kept as-is.
    pub fn all_analysers(&self) -> Vec<&AnalyserEntry> {
        self.languages.values().flatten().collect()
    }

    /// Whether findings from `entry` should fail a CI run.
    pub fn analyser_fails_ci(&self, entry: &AnalyserEntry) -> bool {
        entry.fails_ci()
    }

    /// Filter candidate paths by language and this config's excludes,
    /// preserving input order.
    pub fn included_paths<S: AsRef<str>>(&self, paths: &[S], language: &str) -> Vec<String> {
        self.matcher.included_paths(paths, language)
    }

    /// The canonical raw shape: buckets re-keyed by analyser name.
    pub fn to_value(&self) -> Value {
        let mut languages = Map::new();
        for (lang, entries) in &self.languages {
            let mut bucket = Map::new();
            for entry in entries {
                bucket.insert(entry.name.clone(), Value::Object(entry.settings.clone()));
            }
            languages.insert(lang.clone(), Value::Object(bucket));
        }
        let mut root = Map::new();
        root.insert(
            "exclude".to_string(),
            Value::Array(self.exclude.iter().cloned().map(Value::String).collect()),
        );
        root.insert("languages".to_string(), Value::Object(languages));
        Value::Object(root)
    }

    /// Canonical on-disk serialization: pretty JSON, 4-space indent.
    pub fn to_canonical_json(&self) -> Result<String> {
        to_canonical_json(&self.to_value())
    }
}

impl FromStr for RepoConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

/// Parse configuration text into a raw document, stripping comments
/// first. Blank input yields an empty object rather than an error.
pub(crate) fn parse_document(text: &str) -> Result<Value> {
    let mut stripped = String::new();
    StripComments::new(text.as_bytes())
        .read_to_string(&mut stripped)
        .map_err(|e| Error::Parse {
            message: e.to_string(),
        })?;

    if stripped.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(&stripped).map_err(|e| Error::Parse {
        message: e.to_string(),
    })
}

/// Serialize a raw document in the canonical 4-space-indented form.
pub(crate) fn to_canonical_json(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| Error::Serialize {
            message: e.to_string(),
        })?;
    String::from_utf8(buf).map_err(|e| Error::Serialize {
        message: e.to_string(),
    })
}
