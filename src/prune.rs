//! Top-down walk that deletes every file the scanner has no use for.

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::Error;
use crate::filter::{ExclusionSet, FileFilter};

/// Outcome of one removal attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Deleted,
    /// The file was already gone.
    NotFound,
    PermissionDenied,
}

/// Counters for a single prune run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneSummary {
    pub files_seen: usize,
    pub deleted: usize,
    pub already_gone: usize,
    pub denied: usize,
    pub folders_skipped: usize,
}

/// Removes `path`, folding the two recoverable failures into [`Removal`].
/// Any other I/O error is returned as is.
pub fn remove_file(path: &Path) -> io::Result<Removal> {
    classify_removal(fs::remove_file(path))
}

fn classify_removal(result: io::Result<()>) -> io::Result<Removal> {
    match result {
        Ok(()) => Ok(Removal::Deleted),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Removal::NotFound),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => Ok(Removal::PermissionDenied),
        Err(e) => Err(e),
    }
}

/// Makes `root` absolute and lexically normalized. Fails if it does not
/// exist or is not a directory.
pub fn normalize_root(root: &Path) -> Result<PathBuf, Error> {
    if !root.exists() {
        return Err(Error::SourcesNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(Error::SourcesNotADirectory(root.to_path_buf()));
    }
    Ok(std::path::absolute(root)?.clean())
}

/// Named segments of `path`; root and drive prefixes are left out.
pub fn path_segments(path: &Path) -> impl Iterator<Item = Cow<'_, str>> {
    path.components().filter_map(|c| match c {
        Component::Normal(name) => Some(name.to_string_lossy()),
        _ => None,
    })
}

/// True if any segment of the directory's full path is an excluded folder.
pub fn is_excluded_dir(path: &Path, folders: &ExclusionSet) -> bool {
    path_segments(path).any(|segment| folders.is_match(&segment))
}

/// Walks `root` and deletes files rejected by `files`, skipping every
/// directory whose path hits `folders`.
///
/// Permission failures and files that vanish mid-walk are logged and
/// counted. Other walk and I/O errors abort the run.
pub fn prune(
    root: &Path,
    folders: &ExclusionSet,
    files: &FileFilter,
) -> Result<PruneSummary, Error> {
    let root = normalize_root(root)?;
    info!(root = %root.display(), "pruning source tree");

    let mut summary = PruneSummary::default();
    let mut walker = WalkDir::new(&root).sort_by_file_name().into_iter();

    while let Some(entry) = walker.next() {
        let entry = entry?;

        if entry.file_type().is_dir() {
            if is_excluded_dir(entry.path(), folders) {
                debug!(path = %entry.path().display(), "skipping excluded folder");
                summary.folders_skipped += 1;
                walker.skip_current_dir();
            }
            continue;
        }

        // Symlinked directories are listed but never entered.
        if points_to_dir(&entry) {
            continue;
        }

        prune_file(entry.path(), files, &mut summary)?;
    }

    Ok(summary)
}

fn points_to_dir(entry: &DirEntry) -> bool {
    entry.path_is_symlink() && entry.path().is_dir()
}

fn prune_file(path: &Path, files: &FileFilter, summary: &mut PruneSummary) -> Result<(), Error> {
    summary.files_seen += 1;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    let mut deleted = false;
    for reason in files.delete_reasons(&name) {
        info!(%reason, "Remove file {}", path.display());
        match remove_file(path)? {
            Removal::Deleted => {
                deleted = true;
                summary.deleted += 1;
            }
            Removal::NotFound if deleted => {}
            Removal::NotFound => {
                debug!(path = %path.display(), "file already gone");
                summary.already_gone += 1;
                break;
            }
            Removal::PermissionDenied => {
                warn!("Fail to remove file {} as denied", path.display());
                summary.denied += 1;
                break;
            }
        }
    }

    Ok(())
}
