//! Loading and saving the rc file
//!
//! `load` resolves the effective configuration for a repository root:
//! read the rc file when it exists, infer a default when it does not.
//! A file that exists but fails to read or validate is a hard error;
//! inference never papers over an invalid file.

use std::path::Path;

use crate::config::RepoConfig;
use crate::infer::{NullSink, ProgressSink, infer_default};
use crate::{Result, config};

/// The rc filename looked up at the repository root.
pub const CONFIG_FILENAME: &str = ".scoutrc";

/// Resolve the effective configuration for `repo_path`.
pub fn load(repo_path: &Path) -> Result<RepoConfig> {
    load_with_sink(repo_path, &NullSink)
}

/// Like [`load`], narrating default-inference decisions through `sink`.
pub fn load_with_sink(repo_path: &Path, sink: &dyn ProgressSink) -> Result<RepoConfig> {
    let file_path = repo_path.join(CONFIG_FILENAME);
    match scout_fs::read_text(&file_path) {
        Ok(text) => {
            tracing::debug!("loading configuration from {:?}", file_path);
            RepoConfig::from_string(&text)
        }
        Err(e) if e.is_not_found() => {
            tracing::info!("no {} in {:?}, inferring defaults", CONFIG_FILENAME, repo_path);
            let inferred = infer_default(repo_path, sink);
            // Round-trip through the canonical serializer and the normal
            // parse/validate path; the inferred document gets no shortcut.
            let text = config::to_canonical_json(&inferred)?;
            RepoConfig::from_string(&text)
        }
        Err(e) => Err(e.into()),
    }
}

/// Write the canonical serialization of `config` to the rc file.
/// Last writer wins; there is no read-modify-write cycle.
pub fn save(repo_path: &Path, config: &RepoConfig) -> Result<()> {
    let file_path = repo_path.join(CONFIG_FILENAME);
    let text = config.to_canonical_json()?;
    scout_fs::write_text(&file_path, &text)?;
    tracing::debug!("saved configuration to {:?}", file_path);
    Ok(())
}
