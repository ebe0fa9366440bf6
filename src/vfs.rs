use crate::{
    layout::{Density, ProjectLayout},
    source::SourceImage,
};
use std::path::PathBuf;

/// What should happen at a [`PlannedEntry`]'s destination.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedAction {
    /// Create the directory (and its parents) if absent.
    CreateDir,
    /// Create the launcher icon folder of one screen density.
    CreateMipmap(Density),
    /// Copy the given file over the destination, replacing any previous content.
    CopyFrom(PathBuf),
}
/// Represents a virtual file or directory entry staged in memory before touching the disk.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedEntry {
    /// The target path, already resolved against the project root.
    pub destination: PathBuf,
    pub action: PlannedAction,
}
impl PlannedEntry {
    pub fn is_file(&self) -> bool {
        matches!(self.action, PlannedAction::CopyFrom(_))
    }
}
/// Ordered collection of [`PlannedEntry`] values making up one asset preparation run.
///
/// Building a plan never touches the file system, so it can be previewed
/// before anything is applied.
#[derive(Debug, Clone, Default)]
pub struct AssetPlan {
    pub entries: Vec<PlannedEntry>,
}
impl AssetPlan {
    pub fn for_layout(layout: &ProjectLayout, source: &SourceImage) -> Self {
        let mut entries = vec![PlannedEntry {
            destination: layout.resources_dir.clone(),
            action: PlannedAction::CreateDir,
        }];

        for target in [layout.icon_path(), layout.splash_path()] {
            entries.push(PlannedEntry {
                destination: target,
                action: PlannedAction::CopyFrom(source.path.clone()),
            });
        }

        for (density, mipmap_dir) in layout.densities.iter().zip(layout.mipmap_dirs()) {
            entries.push(PlannedEntry {
                destination: mipmap_dir,
                action: PlannedAction::CreateMipmap(*density),
            });
        }

        Self { entries }
    }

    /// Destinations the source image gets copied to.
    pub fn copy_targets(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries
            .iter()
            .filter(|entry| entry.is_file())
            .map(|entry| &entry.destination)
    }
}
