use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{IndexError, MatrixError};
use crate::state::action::{MatrixAction, RawAction};
use crate::state::data_model::{self, CellState, RowMatrix};
use crate::state::field_config::{self, FieldConfig, FieldConfigList};

/// Owns the field matrix and its column configuration.
///
/// Every mutation works on a copy of the current matrix, normalizes it and
/// then publishes it as a fresh snapshot. A rejected call leaves the published
/// snapshot and revision untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct RowMatrixState {
    configs: FieldConfigList,
    matrix: Arc<RowMatrix>,
    revision: u64,
}

impl Default for RowMatrixState {
    fn default() -> Self {
        Self::new(field_config::default_configs())
    }
}

impl RowMatrixState {
    pub fn new(configs: FieldConfigList) -> Self {
        Self::with_matrix(RowMatrix::new(), configs)
    }

    pub fn with_matrix(matrix: RowMatrix, configs: FieldConfigList) -> Self {
        let matrix = data_model::normalize(matrix, &configs);
        Self {
            configs,
            matrix: Arc::new(matrix),
            revision: 0,
        }
    }

    pub fn matrix(&self) -> Arc<RowMatrix> {
        Arc::clone(&self.matrix)
    }

    pub fn configs(&self) -> &[FieldConfig] {
        &self.configs
    }

    /// Incremented once per published snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn row_count(&self) -> usize {
        self.matrix.len()
    }

    pub fn cell(&self, row_index: usize, field_index: usize) -> Option<&CellState> {
        self.matrix
            .get(row_index)?
            .get(field_index)?
            .as_ref()
    }

    pub fn cell_value(&self, row_index: usize, field_index: usize) -> &str {
        self.matrix
            .get(row_index)
            .map(|row| data_model::display_value(row, field_index))
            .unwrap_or_default()
    }

    pub fn field_name(&self, row_index: usize, field_index: usize) -> Option<String> {
        self.configs.get(field_index)?.name_for_row(row_index)
    }

    pub fn is_tail_row(&self, row_index: usize) -> bool {
        row_index + 1 == self.matrix.len()
    }

    /// Remove controls are offered for growth-eligible columns of every row
    /// except the trailing one, which would only be re-created.
    pub fn shows_remove_control(&self, row_index: usize, field_index: usize) -> bool {
        row_index < self.matrix.len()
            && !self.is_tail_row(row_index)
            && self
                .configs
                .get(field_index)
                .is_some_and(FieldConfig::is_growth_eligible)
    }

    pub fn edit(
        &mut self,
        row_index: usize,
        field_index: usize,
        value: impl Into<String>,
    ) -> Result<Arc<RowMatrix>, IndexError> {
        self.check_row(row_index)?;
        self.check_field(field_index)?;

        let mut next = RowMatrix::clone(&self.matrix);
        data_model::set_cell_value(&mut next[row_index], field_index, value.into());
        Ok(self.publish(next))
    }

    pub fn remove_row(&mut self, row_index: usize) -> Result<Arc<RowMatrix>, IndexError> {
        self.check_row(row_index)?;

        let mut next = RowMatrix::clone(&self.matrix);
        next.remove(row_index);
        Ok(self.publish(next))
    }

    /// Swaps the column configuration and renormalizes against it.
    pub fn set_config(&mut self, configs: FieldConfigList) -> Arc<RowMatrix> {
        self.configs = configs;
        let current = RowMatrix::clone(&self.matrix);
        self.publish(current)
    }

    /// Replaces the whole matrix with one supplied by the host.
    pub fn replace_matrix(&mut self, matrix: RowMatrix) -> Arc<RowMatrix> {
        self.publish(matrix)
    }

    pub fn apply(&mut self, action: MatrixAction) -> Result<Arc<RowMatrix>, IndexError> {
        match action {
            MatrixAction::Edit {
                row_index,
                field_index,
                value,
            } => self.edit(row_index, field_index, value),
            MatrixAction::RemoveRow { row_index } => self.remove_row(row_index),
        }
    }

    pub fn apply_raw(&mut self, action: RawAction) -> Result<Arc<RowMatrix>, MatrixError> {
        let action = action.validate().inspect_err(|err| {
            warn!(%err, "rejected action");
        })?;
        Ok(self.apply(action)?)
    }

    fn check_row(&self, row_index: usize) -> Result<(), IndexError> {
        let len = self.matrix.len();
        if row_index < len {
            return Ok(());
        }
        let err = IndexError::RowOutOfBounds {
            index: row_index,
            len,
        };
        warn!(%err, "rejected action");
        Err(err)
    }

    fn check_field(&self, field_index: usize) -> Result<(), IndexError> {
        let len = self.configs.len();
        if field_index < len {
            return Ok(());
        }
        let err = IndexError::FieldOutOfBounds {
            index: field_index,
            len,
        };
        warn!(%err, "rejected action");
        Err(err)
    }

    fn publish(&mut self, next: RowMatrix) -> Arc<RowMatrix> {
        let next = data_model::normalize(next, &self.configs);
        self.matrix = Arc::new(next);
        self.revision += 1;
        debug!(
            revision = self.revision,
            rows = self.matrix.len(),
            "published matrix"
        );
        self.matrix()
    }
}
