use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::state::field_config::FieldConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Validation message owned by the host; never written here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CellState {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            error: None,
        }
    }

    pub fn has_value(&self) -> bool {
        self.value.as_deref().is_some_and(|value| !value.is_empty())
    }
}

/// Sparse row: trailing cells may be missing and gaps may be `None`.
pub type Row = Vec<Option<CellState>>;
pub type RowMatrix = Vec<Row>;

/// Returns true when the cell at `field_index` exists and holds a non-empty value.
pub fn cell_has_value(row: &Row, field_index: usize) -> bool {
    row.get(field_index)
        .and_then(Option::as_ref)
        .is_some_and(CellState::has_value)
}

/// Display value of a cell; missing cells render as empty.
pub fn display_value(row: &Row, field_index: usize) -> &str {
    row.get(field_index)
        .and_then(Option::as_ref)
        .and_then(|cell| cell.value.as_deref())
        .unwrap_or_default()
}

pub fn cell_error(row: &Row, field_index: usize) -> Option<&str> {
    row.get(field_index)
        .and_then(Option::as_ref)
        .and_then(|cell| cell.error.as_deref())
}

/// Writes `value` into the cell, padding the row with empty slots first.
/// An existing error message is kept. `field_index` must already be bounded
/// by the column count.
pub fn set_cell_value(row: &mut Row, field_index: usize, value: String) {
    if row.len() <= field_index {
        row.resize(field_index + 1, None);
    }
    row[field_index]
        .get_or_insert_with(CellState::default)
        .value = Some(value);
}

/// Guarantees at least one row and an empty-for-growth tail row.
///
/// Only the tail row is inspected. Columns are scanned in order and the first
/// growth-eligible column holding a value appends one empty row; later
/// columns are not consulted.
pub fn normalize(mut matrix: RowMatrix, configs: &[FieldConfig]) -> RowMatrix {
    if matrix.is_empty() {
        matrix.push(Row::new());
    }

    let tail = matrix.len() - 1;
    let trigger = configs
        .iter()
        .enumerate()
        .find(|(index, config)| config.is_growth_eligible() && cell_has_value(&matrix[tail], *index))
        .map(|(index, _)| index);

    if let Some(index) = trigger {
        trace!(row = tail, field = index, "tail row has a value, appending empty row");
        matrix.push(Row::new());
    }

    matrix
}

/// True when the tail row satisfies the growth invariant.
pub fn is_normalized(matrix: &RowMatrix, configs: &[FieldConfig]) -> bool {
    let Some(tail) = matrix.last() else {
        return false;
    };
    !configs
        .iter()
        .enumerate()
        .any(|(index, config)| config.is_growth_eligible() && cell_has_value(tail, index))
}
