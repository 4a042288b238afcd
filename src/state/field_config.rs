use serde::{Deserialize, Serialize};

/// Definition of a single column in the matrix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Typing into this column never causes another row to be appended.
    #[serde(default)]
    pub disable_duplication: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Base name of the input; rendered with the row index as suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldConfig {
    pub fn with_disable_duplication(mut self, disable: bool) -> Self {
        self.disable_duplication = disable;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn is_growth_eligible(&self) -> bool {
        !self.disable_duplication
    }

    pub fn name_for_row(&self, row_index: usize) -> Option<String> {
        self.name.as_ref().map(|name| format!("{name}{row_index}"))
    }
}

pub type FieldConfigList = Vec<FieldConfig>;

/// A single growth-eligible column with no metadata.
pub fn default_configs() -> FieldConfigList {
    vec![FieldConfig::default()]
}
