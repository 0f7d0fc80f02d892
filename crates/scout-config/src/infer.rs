//! Default configuration inference
//!
//! When a repository has no rc file, a raw configuration is synthesized
//! from what the repository contains: which language families have files
//! present, and which lint tools have a recognizable config marker at
//! the repo root. The result is a raw document that re-enters the normal
//! parse/validate pipeline unchanged.

use std::path::Path;

use serde_json::{Map, Value, json};

/// Sink for human-readable narration of detection decisions.
///
/// Informational only; a no-op sink never changes the inferred result.
pub trait ProgressSink {
    fn emit(&self, message: &str);
}

/// Sink that discards every message.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&self, _message: &str) {}
}

impl<F: Fn(&str)> ProgressSink for F {
    fn emit(&self, message: &str) {
        self(message)
    }
}

/// A lint tool whose presence is detected via its own config file, or
/// via a named section embedded in a generic manifest file.
struct ToolMarker {
    analyser: &'static str,
    config_files: &'static [&'static str],
    manifest_section: Option<(&'static str, &'static str)>,
}

/// One supported language family and the analysers it can carry.
struct LanguageProfile {
    tag: &'static str,
    extension: &'static str,
    lint_tools: &'static [ToolMarker],
}

/// Always-on analyser added to every detected language bucket.
const TODO_SCANNER: &str = "todos";

const LANGUAGE_PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        tag: "js",
        extension: ".js",
        lint_tools: &[
            ToolMarker {
                analyser: "eslint",
                config_files: &[
                    ".eslintrc",
                    ".eslintrc.js",
                    ".eslintrc.json",
                    ".eslintrc.yaml",
                    ".eslintrc.yml",
                ],
                manifest_section: Some(("package.json", "eslintConfig")),
            },
            ToolMarker {
                analyser: "jshint",
                config_files: &[".jshintrc"],
                manifest_section: None,
            },
        ],
    },
    LanguageProfile {
        tag: "ts",
        extension: ".ts",
        lint_tools: &[ToolMarker {
            analyser: "tslint",
            config_files: &["tslint.json"],
            manifest_section: None,
        }],
    },
    LanguageProfile {
        tag: "coffee",
        extension: ".coffee",
        lint_tools: &[ToolMarker {
            analyser: "coffeelint",
            config_files: &["coffeelint.json"],
            manifest_section: None,
        }],
    },
];

/// Raw-config-under-construction, threaded explicitly through inference.
#[derive(Default)]
struct DefaultConfigBuilder {
    languages: Map<String, Value>,
}

impl DefaultConfigBuilder {
    fn analyser(mut self, language: &str, name: &str, fail_ci: bool) -> Self {
        let bucket = self
            .languages
            .entry(language.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(bucket) = bucket.as_object_mut() {
            bucket.insert(name.to_string(), json!({ "failCiOnError": fail_ci }));
        }
        self
    }

    fn build(self) -> Value {
        json!({
            "exclude": [],
            "languages": self.languages,
        })
    }
}

/// Synthesize a raw configuration for a repository with no rc file.
///
/// Starts from the universal baseline (a dependency auditor for `json`
/// files and a security scanner for `all`), then adds a bucket per
/// language family that actually has files in the repository.
pub fn infer_default(root: &Path, sink: &dyn ProgressSink) -> Value {
    let mut builder = DefaultConfigBuilder::default()
        .analyser("json", "depaudit", false)
        .analyser("all", "security", false);
    sink.emit("Enabled baseline analysers: depaudit (json), security (all)");

    for profile in LANGUAGE_PROFILES {
        let files = scout_fs::find_files(root, profile.extension);
        if files.is_empty() {
            tracing::debug!("no {} files found, skipping {}", profile.extension, profile.tag);
            sink.emit(&format!(
                "No {} files found, skipping {} analysers",
                profile.extension, profile.tag
            ));
            continue;
        }
        sink.emit(&format!(
            "Found {} {} file(s), enabling {} analysers",
            files.len(),
            profile.extension,
            profile.tag
        ));
        builder = builder.analyser(profile.tag, TODO_SCANNER, false);

        for tool in profile.lint_tools {
            if marker_present(root, tool) {
                tracing::debug!("detected {} configuration", tool.analyser);
                sink.emit(&format!(
                    "Detected {} configuration, enabling {} (fails CI on error)",
                    tool.analyser, tool.analyser
                ));
                builder = builder.analyser(profile.tag, tool.analyser, true);
            } else {
                sink.emit(&format!("No {} configuration found", tool.analyser));
            }
        }
    }

    builder.build()
}

/// Whether a recognizable config marker for `analyser` exists in the
/// repository root. Returns false for analysers with no marker.
pub fn has_tool_config(root: &Path, analyser: &str) -> bool {
    LANGUAGE_PROFILES
        .iter()
        .flat_map(|p| p.lint_tools)
        .find(|t| t.analyser == analyser)
        .is_some_and(|tool| marker_present(root, tool))
}

fn marker_present(root: &Path, tool: &ToolMarker) -> bool {
    for file in tool.config_files {
        if root.join(file).is_file() {
            return true;
        }
    }
    // A generic manifest only counts if it carries the tool's own
    // section; mere presence of the file says nothing.
    if let Some((manifest, section)) = tool.manifest_section {
        let Ok(text) = scout_fs::read_text(&root.join(manifest)) else {
            return false;
        };
        let Ok(doc) = serde_json::from_str::<Value>(&text) else {
            return false;
        };
        return doc.get(section).is_some();
    }
    false
}
