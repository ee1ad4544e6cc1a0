use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::types::Config;

/// Environment variables consulted, in order, when `--sources-directory` is absent.
pub const SOURCES_DIRECTORY_ENV: &[&str] = &["Build.SourcesDirectory", "BUILD_SOURCESDIRECTORY"];

#[derive(Parser, Debug)]
#[command(
    name = "sast-prune",
    about = "Delete files a static-analysis scan cannot use from a source tree",
    version
)]
pub struct Args {
    /// Folder names to skip, comma separated (`name`, `prefix*`, `*suffix`, `*part*`)
    #[arg(long, alias = "exclude_folders", default_value = "")]
    pub exclude_folders: String,

    /// File names to delete, comma separated (same wildcard forms as folders)
    #[arg(long, alias = "exclude_files", default_value = "")]
    pub exclude_files: String,

    /// Local path where the source files were downloaded [default: $Build.SourcesDirectory]
    #[arg(long, alias = "sources_directory")]
    pub sources_directory: Option<String>,
}

impl Args {
    /// Resolves the run configuration, reading the environment through `lookup`
    /// when no sources directory was passed on the command line.
    pub fn into_config<F>(self, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        info!(
            exclude_folders = %self.exclude_folders,
            exclude_files = %self.exclude_files,
            sources_directory = self.sources_directory.as_deref().unwrap_or(""),
            "arguments from command line"
        );

        let sources_directory = resolve_sources_directory(self.sources_directory, lookup);

        Config {
            sources_directory,
            exclude_folders: self.exclude_folders,
            exclude_files: self.exclude_files,
        }
    }
}

/// Picks the CLI value if non-empty, otherwise the first non-empty variable
/// from [`SOURCES_DIRECTORY_ENV`].
pub fn resolve_sources_directory<F>(from_cli: Option<String>, lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = from_cli.filter(|d| !d.trim().is_empty()) {
        return Some(PathBuf::from(dir));
    }

    info!("sources_directory not defined from CLI");
    SOURCES_DIRECTORY_ENV.iter().find_map(|var| {
        let value = lookup(var).filter(|v| !v.trim().is_empty())?;
        info!("sources_directory read from environment variable {var}: {value}");
        Some(PathBuf::from(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn no_args_is_valid() {
        let args = Args::try_parse_from(["sast-prune"]).unwrap();
        assert_eq!(args.exclude_folders, "");
        assert_eq!(args.exclude_files, "");
        assert!(args.sources_directory.is_none());
    }

    #[test]
    fn kebab_case_flags() {
        let args = Args::parse_from([
            "sast-prune",
            "--exclude-folders",
            "dist,*test*",
            "--exclude-files",
            "*.spec.ts",
            "--sources-directory",
            "/agent/s",
        ]);
        assert_eq!(args.exclude_folders, "dist,*test*");
        assert_eq!(args.exclude_files, "*.spec.ts");
        assert_eq!(args.sources_directory.as_deref(), Some("/agent/s"));
    }

    #[test]
    fn snake_case_aliases() {
        let args = Args::parse_from([
            "sast-prune",
            "--exclude_folders",
            "docs",
            "--exclude_files",
            "readme",
            "--sources_directory",
            "/agent/s",
        ]);
        assert_eq!(args.exclude_folders, "docs");
        assert_eq!(args.exclude_files, "readme");
        assert_eq!(args.sources_directory.as_deref(), Some("/agent/s"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["sast-prune", "--dry-run"]).is_err());
    }

    #[test]
    fn cli_value_wins_over_env() {
        let dir = resolve_sources_directory(Some("/from/cli".into()), |_| Some("/from/env".into()));
        assert_eq!(dir, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn falls_back_to_dotted_env_var() {
        let dir = resolve_sources_directory(None, |var| {
            (var == "Build.SourcesDirectory").then(|| "/agent/_work/1/s".to_string())
        });
        assert_eq!(dir, Some(PathBuf::from("/agent/_work/1/s")));
    }

    #[test]
    fn falls_back_to_upper_case_env_var() {
        let dir = resolve_sources_directory(Some("  ".into()), |var| match var {
            "Build.SourcesDirectory" => Some(String::new()),
            "BUILD_SOURCESDIRECTORY" => Some("/agent/s".to_string()),
            _ => None,
        });
        assert_eq!(dir, Some(PathBuf::from("/agent/s")));
    }

    #[test]
    fn unresolved_when_nothing_set() {
        assert_eq!(resolve_sources_directory(None, no_env), None);
    }

    #[test]
    fn into_config_keeps_user_exclusions_only() {
        let args = Args::parse_from(["sast-prune", "--exclude-files", "*.md"]);
        let config = args.into_config(no_env);
        assert_eq!(config.exclude_files, "*.md");
        assert_eq!(config.exclude_folders, "");
        assert!(config.sources_directory.is_none());
    }
}
