use serde::{Deserialize, Serialize};

use crate::error::IndexError;

/// A user action addressed by indices of the currently rendered matrix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MatrixAction {
    #[serde(rename_all = "camelCase")]
    Edit {
        row_index: usize,
        field_index: usize,
        value: String,
    },
    #[serde(rename_all = "camelCase")]
    RemoveRow { row_index: usize },
}

/// Action as delivered by an untyped host, with signed indices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RawAction {
    #[serde(rename_all = "camelCase")]
    Edit {
        row_index: i64,
        field_index: i64,
        value: String,
    },
    #[serde(rename_all = "camelCase")]
    RemoveRow { row_index: i64 },
}

impl RawAction {
    pub fn validate(self) -> Result<MatrixAction, IndexError> {
        match self {
            RawAction::Edit {
                row_index,
                field_index,
                value,
            } => Ok(MatrixAction::Edit {
                row_index: row_from_raw(row_index)?,
                field_index: usize::try_from(field_index)
                    .map_err(|_| IndexError::NegativeField(field_index))?,
                value,
            }),
            RawAction::RemoveRow { row_index } => Ok(MatrixAction::RemoveRow {
                row_index: row_from_raw(row_index)?,
            }),
        }
    }
}

impl TryFrom<RawAction> for MatrixAction {
    type Error = IndexError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

fn row_from_raw(row_index: i64) -> Result<usize, IndexError> {
    usize::try_from(row_index).map_err(|_| IndexError::NegativeRow(row_index))
}
