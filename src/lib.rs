//! # sast-prune
//!
//! Strip a checked-out source tree down to the files a static-analysis scan
//! can use.
//!
//! The main entry point is [`run()`]: it appends the baseline exclusions to
//! the user's, classifies both lists into pattern buckets, and prunes the tree.

pub mod cli;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod prune;
pub mod types;

use tracing::info;

use crate::defaults::{BASELINE_EXCLUDE_FILES, BASELINE_EXCLUDE_FOLDERS};
use crate::error::Error;
use crate::filter::{ExclusionSet, FileFilter};
use crate::prune::PruneSummary;
use crate::types::Config;

/// Run a full prune of `config.sources_directory`.
///
/// Returns [`Error::SourcesNotConfigured`] or [`Error::SourcesNotFound`]
/// before touching anything if there is no usable root.
pub fn run(config: &Config) -> Result<PruneSummary, Error> {
    let root = config
        .sources_directory
        .as_deref()
        .ok_or(Error::SourcesNotConfigured)?;

    let folders = ExclusionSet::new(&defaults::with_baseline(
        &config.exclude_folders,
        BASELINE_EXCLUDE_FOLDERS,
    ));
    let files = FileFilter::new(ExclusionSet::new(&defaults::with_baseline(
        &config.exclude_files,
        BASELINE_EXCLUDE_FILES,
    )));

    let summary = prune::prune(root, &folders, &files)?;

    info!(
        files_seen = summary.files_seen,
        deleted = summary.deleted,
        already_gone = summary.already_gone,
        denied = summary.denied,
        folders_skipped = summary.folders_skipped,
        "prune complete"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sources_directory_is_a_configuration_error() {
        let config = Config {
            sources_directory: None,
            ..Config::test_default()
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(err, Error::SourcesNotConfigured));
        assert!(err.is_configuration());
    }

    #[test]
    fn nonexistent_sources_directory_is_a_configuration_error() {
        let config = Config {
            sources_directory: Some("/nonexistent/sources".into()),
            ..Config::test_default()
        };
        let err = run(&config).unwrap_err();
        assert!(matches!(err, Error::SourcesNotFound(_)));
        assert!(err.is_configuration());
    }
}
