use serde::Deserialize;
use std::{
    fmt,
    path::{Path, PathBuf},
};

use crate::config::Config;

pub const DEFAULT_SOURCE_IMAGE: &str = "../image/logo.png";
pub const DEFAULT_RESOURCES_DIR: &str = "resources";
pub const DEFAULT_ANDROID_RES_DIR: &str = "android/app/src/main/res";

const ICON_FILE_NAME: &str = "icon.png";
const SPLASH_FILE_NAME: &str = "splash.png";

/// Android screen density buckets that get a launcher icon folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}
impl Density {
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    fn as_str(&self) -> &str {
        match self {
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }
    /// Name of the resource folder holding icons of this density, e.g. `mipmap-hdpi`.
    pub fn dir_name(&self) -> String {
        format!("mipmap-{}", self.as_str())
    }
    /// Edge length in pixels of the launcher icon expected in this density's folder.
    pub fn icon_size(&self) -> u32 {
        match self {
            Self::Mdpi => 48,
            Self::Hdpi => 72,
            Self::Xhdpi => 96,
            Self::Xxhdpi => 144,
            Self::Xxxhdpi => 192,
        }
    }
}
impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every path touched while preparing assets, resolved against the project root.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub source_image: PathBuf,
    pub resources_dir: PathBuf,
    pub android_res_dir: PathBuf,
    pub densities: Vec<Density>,
}
impl ProjectLayout {
    /// Resolves the layout for `root`. `source_override` wins over the configured source.
    pub fn resolve(root: &Path, config: &Config, source_override: Option<&Path>) -> Self {
        let source = source_override
            .or(config.source.as_deref())
            .unwrap_or_else(|| Path::new(DEFAULT_SOURCE_IMAGE));
        let resources = config
            .resources
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_RESOURCES_DIR));
        let android_res = config
            .android_res
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_ANDROID_RES_DIR));

        let mut densities = config
            .densities
            .clone()
            .unwrap_or_else(|| Density::ALL.to_vec());
        densities.sort();
        densities.dedup();

        Self {
            root: root.to_path_buf(),
            // `join` keeps absolute paths as they are
            source_image: root.join(source),
            resources_dir: root.join(resources),
            android_res_dir: root.join(android_res),
            densities,
        }
    }

    pub fn icon_path(&self) -> PathBuf {
        self.resources_dir.join(ICON_FILE_NAME)
    }

    pub fn splash_path(&self) -> PathBuf {
        self.resources_dir.join(SPLASH_FILE_NAME)
    }

    pub fn mipmap_dirs(&self) -> Vec<PathBuf> {
        self.densities
            .iter()
            .map(|density| self.android_res_dir.join(density.dir_name()))
            .collect()
    }
}
