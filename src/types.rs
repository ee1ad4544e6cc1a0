use std::path::PathBuf;

/// Configuration for a sast-prune run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the checked-out sources. `None` when neither the flag nor the
    /// environment supplied one.
    pub sources_directory: Option<PathBuf>,
    /// Comma-separated folder exclusions from the user, without the baseline.
    pub exclude_folders: String,
    /// Comma-separated file exclusions from the user, without the baseline.
    pub exclude_files: String,
}

impl Config {
    #[cfg(test)]
    pub(crate) fn test_default() -> Self {
        Self {
            sources_directory: Some(PathBuf::from(".")),
            exclude_folders: String::new(),
            exclude_files: String::new(),
        }
    }
}
