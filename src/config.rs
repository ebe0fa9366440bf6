use crate::{
    errors::{FileOperation, IoError},
    layout::Density,
};
use miette::Diagnostic;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "iconprep.toml";

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("I/O error within config domain")]
    #[diagnostic(code(iconprep::config::io))]
    Io(#[from] IoError),

    #[error("Unable to parse toml file at '{path}': {source}")]
    #[diagnostic(
        code(iconprep::config::parse),
        help("Allowed keys are: source, resources, android_res, densities")
    )]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Optional per-project overrides read from `iconprep.toml`.
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub source: Option<PathBuf>,
    pub resources: Option<PathBuf>,
    pub android_res: Option<PathBuf>,
    pub densities: Option<Vec<Density>>,
}
impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))?;

        toml::from_str(&content).map_err(|err| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        })
    }
    /// Loads `iconprep.toml` from `project_root`, falling back to defaults when it is absent.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config_file = project_root.join(CONFIG_FILE_NAME);

        match Config::from_file(&config_file) {
            Ok(config) => {
                log::debug!("loaded config from: {}", config_file.display());
                Ok(config)
            }
            Err(ConfigError::Io(IoError { source, .. }))
                if source.kind() == io::ErrorKind::NotFound =>
            {
                log::debug!("no config at: {}, using defaults", config_file.display());
                Ok(Config::default())
            }
            Err(error) => Err(error),
        }
    }
}
