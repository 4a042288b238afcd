use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::ConfigError;
use crate::state::field_config::{FieldConfig, FieldConfigList};

/// Parses a JSON array of field config objects.
pub fn parse_field_configs(content: &str) -> Result<FieldConfigList, ConfigError> {
    let value: Value = serde_json::from_str(content)?;

    match value {
        Value::Array(arr) => {
            let mut configs = Vec::with_capacity(arr.len());
            for (index, item) in arr.into_iter().enumerate() {
                match item {
                    Value::Object(_) => {
                        configs.push(serde_json::from_value::<FieldConfig>(item)?);
                    }
                    _ => return Err(ConfigError::NotAnObject { index }),
                }
            }
            Ok(configs)
        }
        _ => Err(ConfigError::NotAnArray),
    }
}

pub fn load_field_configs(path: &Path) -> Result<FieldConfigList, ConfigError> {
    let content = fs::read_to_string(path)?;
    let configs = parse_field_configs(&content)?;
    info!(path = %path.display(), columns = configs.len(), "loaded field config");
    Ok(configs)
}
