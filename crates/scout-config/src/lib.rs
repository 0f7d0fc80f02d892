//! Repository analysis-config resolution engine.
//!
//! Decides which analysers run against which file types for a repository:
//! an optional `.scoutrc` file at the repo root is parsed (JSON with
//! comments), validated, and normalized into an immutable [`RepoConfig`];
//! when the file is absent a default configuration is inferred from the
//! repository contents.
//!
//! Validation failures are terminal: defaults only stand in for a
//! *missing* file, never for an invalid one.

pub mod config;
pub mod error;
pub mod infer;
pub mod loader;
pub mod matcher;
pub mod schema;

mod reformat;

pub use config::{AnalyserEntry, RepoConfig};
pub use error::{Error, Result};
pub use infer::{NullSink, ProgressSink, has_tool_config, infer_default};
pub use loader::{CONFIG_FILENAME, load, load_with_sink, save};
pub use matcher::PathMatcher;
pub use schema::{Violation, validate};
