use std::env;
use std::path::{Path, PathBuf};

use man2md::constants::config::{CONFIG_DIR_ENV, DEFAULT_CONF_FILE};
use man2md::debug;

pub use man2md::{
    config::{parse as config_parse, MainConfig},
    error::*,
};

use crate::directories::PROJECT_DIRS;

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    /// Loads the main configuration unless `skip_config` is set.
    ///
    /// # Returns
    /// A `Result` containing the bootstrap with the configuration in effect.
    pub fn new(skip_config: bool) -> Result<Self> {
        let config = if skip_config {
            debug!("Configuration file skipped, using defaults");
            MainConfig::new()
        } else {
            match config_file()? {
                Some(file) => parse_main_config(&file)?,
                None => MainConfig::new(),
            }
        };
        Ok(BootStrap { config })
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}

/// Retrieves the configuration file path using the following order :
///
/// - The directory specified by the environment variable MAN2MD_CONFIG_DIR
/// - The default directory from PROJECT_DIRS
///
/// # Returns
/// The path of the configuration file, `None` if no directory could be determined
///
/// # Errors
/// Returns an error if the directory path cannot be interpolated
fn config_file() -> Result<Option<PathBuf>> {
    let config_dir = match env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => {
            let dir = dir.to_string_lossy();
            let expanded =
                shellexpand::full(&dir).map_err(|e| Error::InterpolationError {
                    location: ConfigType::ENV,
                    cause: e.to_string(),
                })?;
            Some(PathBuf::from(expanded.into_owned()))
        }
        None => PROJECT_DIRS.as_ref().map(|dirs| dirs.config_dir().clone()),
    };

    Ok(config_dir.map(|dir| dir.join(DEFAULT_CONF_FILE)))
}

/// Processes the main configuration file retrieving the associated `MainConfig` structure
///
/// A missing file is not an error: the built-in defaults are used instead.
///
/// # Errors
///
/// This function returns an error if the configuration file exists but cannot be read or parsed.
pub fn parse_main_config(conf_file: &Path) -> Result<MainConfig> {
    let toml_data = match config_parse(conf_file) {
        Ok(data) => data,
        Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
            debug!("No configuration found at {}", conf_file.display());
            return Ok(MainConfig::new());
        }
        Err(Error::Io(e)) => {
            return Err(Error::ConfigReadError {
                file: conf_file.to_string_lossy().into_owned(),
                cause: e.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    debug!("Loading configuration from {}", conf_file.display());
    MainConfig::from_toml(&toml_data, DEFAULT_CONF_FILE)
}
