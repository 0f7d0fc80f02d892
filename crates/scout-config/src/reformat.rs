//! Normalization of the raw document into the canonical shape
//!
//! Raw language buckets arrive keyed by analyser name; queries want
//! self-describing entries. Reformatting turns each bucket into an
//! ordered list of [`AnalyserEntry`] values carrying their own name.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::AnalyserEntry;

/// Normalize a validated raw document into `(exclude, languages)`.
///
/// Must only be called after [`crate::schema::validate`] passed; values
/// the validator rejects are skipped rather than re-reported here.
pub(crate) fn reformat(doc: &Value) -> (Vec<String>, BTreeMap<String, Vec<AnalyserEntry>>) {
    let exclude = doc
        .get("exclude")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let mut languages = BTreeMap::new();
    if let Some(buckets) = doc.get("languages").and_then(Value::as_object) {
        for (lang, bucket) in buckets {
            let Some(analysers) = bucket.as_object() else {
                continue;
            };
            let entries = analysers
                .iter()
                .map(|(name, settings)| {
                    // Null settings mean "enabled with defaults"
                    let settings = settings.as_object().cloned().unwrap_or_default();
                    AnalyserEntry::new(name.clone(), settings)
                })
                .collect();
            languages.insert(lang.clone(), entries);
        }
    }

    (exclude, languages)
}
