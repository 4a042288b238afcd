use dioxus::prelude::*;
use std::path::PathBuf;

use tracing::warn;

use crate::io::config_io;
use crate::state::matrix_state::RowMatrixState;

/// Picks a field config file and applies it. Returns true when loaded.
pub async fn open_field_config(
    mut state: Signal<RowMatrixState>,
    mut config_path: Signal<Option<PathBuf>>,
    mut error_message: Signal<Option<String>>,
) -> bool {
    let task = rfd::AsyncFileDialog::new()
        .add_filter("Field config", &["json"])
        .pick_file()
        .await;

    let Some(handle) = task else {
        return false;
    };

    let path = handle.path().to_path_buf();
    match config_io::load_field_configs(&path) {
        Ok(configs) => {
            state.with_mut(|state| {
                state.set_config(configs);
            });
            config_path.set(Some(path));
            error_message.set(None);
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to load field config");
            error_message.set(Some(e.to_string()));
            false
        }
    }
}

pub fn edit_cell(
    mut state: Signal<RowMatrixState>,
    mut error_message: Signal<Option<String>>,
    row_index: usize,
    field_index: usize,
    value: String,
) {
    let result = state.with_mut(|state| state.edit(row_index, field_index, value));
    match result {
        Ok(_) => error_message.set(None),
        Err(e) => error_message.set(Some(e.to_string())),
    }
}

pub fn remove_row(
    mut state: Signal<RowMatrixState>,
    mut error_message: Signal<Option<String>>,
    row_index: usize,
) {
    let result = state.with_mut(|state| state.remove_row(row_index));
    match result {
        Ok(_) => error_message.set(None),
        Err(e) => error_message.set(Some(e.to_string())),
    }
}
