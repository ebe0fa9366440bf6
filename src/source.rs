use miette::Diagnostic;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SourceError {
    #[error("source image not found: '{path}'")]
    #[diagnostic(
        code(iconprep::source::missing),
        help("Place the logo at this path, set `source` in iconprep.toml, or pass --source")
    )]
    Missing { path: PathBuf },

    #[error("source image is not a regular file: '{path}'")]
    #[diagnostic(code(iconprep::source::not_a_file))]
    NotAFile { path: PathBuf },

    #[error("source image '{path}' is also the destination '{destination}'")]
    #[diagnostic(
        code(iconprep::source::same_as_destination),
        help("Keep the logo outside of the generated resources, e.g. in ../image/logo.png")
    )]
    SameAsDestination { path: PathBuf, destination: PathBuf },
}

/// The logo every icon and splash asset is seeded from.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    pub path: PathBuf,
    pub len: u64,
}
impl SourceImage {
    pub fn locate(path: &Path) -> Result<Self, SourceError> {
        // a dangling or unreadable path counts as missing
        let metadata = fs::metadata(path).map_err(|_| SourceError::Missing {
            path: path.to_path_buf(),
        })?;

        if !metadata.is_file() {
            return Err(SourceError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        log::debug!("source image: {} ({} bytes)", path.display(), metadata.len());

        Ok(SourceImage {
            path: path.to_path_buf(),
            len: metadata.len(),
        })
    }
    /// Fails if any of `destinations` is the source file itself.
    ///
    /// Copying a file onto itself truncates it, which would wipe the logo.
    /// Destinations that do not exist yet cannot be the source.
    pub fn ensure_not_overwritten_by<'a, I>(&self, destinations: I) -> Result<(), SourceError>
    where
        I: IntoIterator<Item = &'a PathBuf>,
    {
        let Ok(canonical_source) = fs::canonicalize(&self.path) else {
            return Ok(());
        };

        for destination in destinations {
            let same_file = fs::canonicalize(destination)
                .is_ok_and(|canonical_destination| canonical_destination == canonical_source);

            if same_file {
                return Err(SourceError::SameAsDestination {
                    path: self.path.clone(),
                    destination: destination.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_existing_image() {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("logo.png");
        fs::write(&logo, b"\x89PNG").unwrap();

        let source = SourceImage::locate(&logo).unwrap();

        assert_eq!(source.path, logo);
        assert_eq!(source.len, 4);
    }

    #[test]
    fn test_locate_missing_image() {
        let dir = tempfile::tempdir().unwrap();

        let result = SourceImage::locate(&dir.path().join("logo.png"));

        assert!(matches!(result, Err(SourceError::Missing { .. })));
    }

    #[test]
    fn test_locate_directory_is_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let result = SourceImage::locate(dir.path());

        assert!(matches!(result, Err(SourceError::NotAFile { .. })));
    }

    #[test]
    fn test_destination_resolving_to_source_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("resources")).unwrap();
        let icon = dir.path().join("resources/icon.png");
        fs::write(&icon, b"LOGO BYTES").unwrap();

        let source = SourceImage::locate(&icon).unwrap();
        // same file reached through a different spelling
        let destinations = vec![
            dir.path().join("resources/../resources/icon.png"),
            dir.path().join("resources/splash.png"),
        ];

        let result = source.ensure_not_overwritten_by(&destinations);

        assert!(matches!(
            result,
            Err(SourceError::SameAsDestination { .. })
        ));
        assert_eq!(fs::read(&icon).unwrap(), b"LOGO BYTES");
    }

    #[test]
    fn test_distinct_destinations_are_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("logo.png");
        fs::write(&logo, b"png").unwrap();
        let existing_icon = dir.path().join("icon.png");
        fs::write(&existing_icon, b"old").unwrap();

        let source = SourceImage::locate(&logo).unwrap();
        let destinations = vec![existing_icon, dir.path().join("splash.png")];

        assert!(source.ensure_not_overwritten_by(&destinations).is_ok());
    }
}
