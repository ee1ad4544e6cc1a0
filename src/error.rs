use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sources directory not set (use --sources-directory or Build.SourcesDirectory)")]
    SourcesNotConfigured,

    #[error("{0} does not exist")]
    SourcesNotFound(PathBuf),

    #[error("{0} is not a directory")]
    SourcesNotADirectory(PathBuf),

    #[error("walking source tree failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Configuration errors end the run early but are not failures of the tool.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::SourcesNotConfigured | Self::SourcesNotFound(_) | Self::SourcesNotADirectory(_)
        )
    }
}
