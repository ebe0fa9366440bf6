use crate::{
    errors::{FileOperation, IoError},
    transactions::{Active, RollbackOperation, Transaction},
    vfs::{AssetPlan, PlannedAction},
};
use colored::Colorize;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ApplyError {
    #[error("I/O error while applying the asset plan")]
    #[diagnostic(code(iconprep::apply::io))]
    Io(#[from] IoError),
}

/// What a run did (or, for a dry run, would do) on disk.
#[derive(Debug, Default, PartialEq)]
pub struct Summary {
    pub created_dirs: Vec<PathBuf>,
    pub existing_dirs: Vec<PathBuf>,
    pub copied_files: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Applies every entry of `plan` in order.
///
/// Directories are created if absent and files are copied over whatever is at the
/// destination, so applying the same plan twice ends in the same state. If any step
/// fails, whatever this call created is removed again before the error is returned.
pub fn try_apply(plan: &AssetPlan) -> Result<Summary, ApplyError> {
    let mut trx = Transaction::<Active>::new();
    let mut summary = Summary::default();

    match apply_entries(plan, &mut trx, &mut summary) {
        Ok(()) => {
            trx.commit();
            Ok(summary)
        }
        Err(error) => {
            log::debug!("applying plan failed: {}", error);
            drop(trx.cancel());
            Err(error)
        }
    }
}

fn apply_entries(
    plan: &AssetPlan,
    trx: &mut Transaction<Active>,
    summary: &mut Summary,
) -> Result<(), ApplyError> {
    for entry in &plan.entries {
        match &entry.action {
            PlannedAction::CreateDir => {
                create_directory(trx, summary, &entry.destination, None)?
            }
            PlannedAction::CreateMipmap(density) => {
                let detail = format!("{0}x{0} icons", density.icon_size());
                create_directory(trx, summary, &entry.destination, Some(&detail))?
            }
            PlannedAction::CopyFrom(source) => {
                copy_file(trx, summary, source, &entry.destination)?
            }
        }
    }

    Ok(())
}

/// Highest ancestor of `path` (itself included) that does not exist yet.
///
/// Removing it undoes a `create_dir_all(path)` without touching anything that was
/// already on disk.
fn first_missing_ancestor(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .take_while(|ancestor| !ancestor.as_os_str().is_empty() && !ancestor.exists())
        .last()
        .map(Path::to_path_buf)
}

/// Creates all directories in the specified path if they do not exist.
///
/// An existing directory is reported and left alone. Otherwise the outermost directory
/// this call creates is registered as a [`RollbackOperation::RemoveDir`]. `detail` is
/// appended to the printed status line.
///
/// # Errors
///
/// Returns an [`ApplyError`] if the directory cannot be created, e.g. because a file
/// already sits at `path`.
fn create_directory(
    trx: &mut Transaction<Active>,
    summary: &mut Summary,
    path: &Path,
    detail: Option<&str>,
) -> Result<(), ApplyError> {
    let detail = detail
        .map(|detail| format!(" ({})", detail).dimmed().to_string())
        .unwrap_or_default();

    if path.is_dir() {
        println!("{} {}{}", "exists".yellow(), path.display(), detail);
        summary.existing_dirs.push(path.to_path_buf());
        return Ok(());
    }

    let first_missing = first_missing_ancestor(path);

    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    if let Some(created) = first_missing {
        trx.add_operation(RollbackOperation::RemoveDir(created));
    }

    println!("{} {}{}", "create".green(), path.display(), detail);
    summary.created_dirs.push(path.to_path_buf());

    Ok(())
}

/// Copies `source` to `target`, replacing any previous file.
///
/// A [`RollbackOperation::RemoveFile`] is registered only when `target` did not exist
/// beforehand.
fn copy_file(
    trx: &mut Transaction<Active>,
    summary: &mut Summary,
    source: &Path,
    target: &Path,
) -> Result<(), ApplyError> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            create_directory(trx, summary, parent, None)?;
        }
    }

    let existed = target.exists();

    std::fs::copy(source, target)
        .map_err(|error| IoError::new(FileOperation::Copy, target.into(), error))?;

    if !existed {
        trx.add_operation(RollbackOperation::RemoveFile(target.to_path_buf()));
    }

    println!("{} {}", "copy".green(), target.display());
    summary.copied_files.push(target.to_path_buf());

    Ok(())
}
