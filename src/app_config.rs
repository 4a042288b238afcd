use std::path::PathBuf;

use crate::error::ConfigError;
use crate::io::config_io;
use crate::state::field_config::{self, FieldConfigList};

pub const FIELDS_ENV: &str = "INPUT_MATRIX_FIELDS";

/// Startup settings for the desktop host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub fields_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            fields_path: std::env::var_os(FIELDS_ENV).map(PathBuf::from),
        }
    }

    /// Column configuration from `fields_path`, or a single default column.
    pub fn field_configs(&self) -> Result<FieldConfigList, ConfigError> {
        match &self.fields_path {
            Some(path) => config_io::load_field_configs(path),
            None => Ok(field_config::default_configs()),
        }
    }
}
