use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::constants::layout::{
    DEFAULT_LINE_WIDTH, DEFAULT_LIST_INDENT, DEFAULT_PREFORMAT_INDENT,
};
use crate::error::*;

#[derive(Deserialize, Debug, Default)]
pub struct MainConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// Output geometry used by a conversion run
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Defaults {
    pub line_width: usize,
    pub preformat_indent: usize,
    pub list_indent: usize,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            line_width: DEFAULT_LINE_WIDTH,
            preformat_indent: DEFAULT_PREFORMAT_INDENT,
            list_indent: DEFAULT_LIST_INDENT,
        }
    }
}

impl MainConfig {
    pub fn new() -> Self {
        MainConfig::default()
    }

    /// Deserializes the configuration from TOML contents.
    ///
    /// # Arguments
    /// * `data` - The TOML contents.
    /// * `file` - The file name the contents were read from (used in error messages).
    ///
    /// # Errors
    /// Returns `SerdeTomlError` when the contents are not valid TOML for this schema
    /// and `ConfigError` when a value is out of range.
    ///
    /// # Examples
    /// ```
    /// use man2md::config::MainConfig;
    ///
    /// let config = MainConfig::from_toml("[defaults]\nline_width = 60\n", "man2md.toml").unwrap();
    /// assert_eq!(config.defaults.line_width, 60);
    /// assert_eq!(config.defaults.list_indent, 4);
    /// ```
    pub fn from_toml(data: &str, file: &str) -> Result<Self> {
        let config: MainConfig = toml::from_str(data).map_err(|e| Error::SerdeTomlError {
            location: ConfigType::MAIN,
            file: file.to_string(),
            cause: e.to_string(),
        })?;
        config.defaults.validate(file)?;
        Ok(config)
    }
}

impl Defaults {
    /// Overrides the wrap width
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    fn validate(&self, file: &str) -> Result<()> {
        if self.line_width == 0 {
            return Err(Error::ConfigError {
                file: file.to_string(),
                cause: "line_width must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

pub fn parse(file_path: &Path) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}
