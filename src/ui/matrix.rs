use dioxus::prelude::*;

use crate::state::data_model::{self, Row};
use crate::state::field_config::FieldConfig;
use crate::state::matrix_state::RowMatrixState;
use crate::ui::actions;

#[derive(Clone, PartialEq)]
struct FieldView {
    field_index: usize,
    config: FieldConfig,
    name: Option<String>,
    value: String,
    error: Option<String>,
    removable: bool,
}

#[component]
pub fn InputMatrix(
    state: Signal<RowMatrixState>,
    error_message: Signal<Option<String>>,
) -> Element {
    let snapshot = state.read().clone();
    let matrix = snapshot.matrix();

    rsx! {
        div { class: "input-matrix", id: "input-matrix",
            for (row_index, row) in matrix.iter().enumerate() {
                MatrixRow {
                    key: "{row_index}",
                    row_index,
                    fields: field_views(&snapshot, row_index, row),
                    state,
                    error_message,
                }
            }
        }
    }
}

#[component]
fn MatrixRow(
    row_index: usize,
    fields: Vec<FieldView>,
    state: Signal<RowMatrixState>,
    error_message: Signal<Option<String>>,
) -> Element {
    let row_class = if row_index % 2 == 0 { "matrix-row even" } else { "matrix-row odd" };

    rsx! {
        div { class: "{row_class}", id: format!("row-{row_index}"),
            for field in fields {
                div { class: field_class(&field),
                    if let Some(text) = field.config.label.as_ref() {
                        label {
                            r#for: format!("field-{row_index}-{}", field.field_index),
                            "{text}"
                        }
                    }
                    input {
                        class: "field-input",
                        id: format!("field-{row_index}-{}", field.field_index),
                        name: field.name.clone().unwrap_or_default(),
                        placeholder: field.config.placeholder.clone().unwrap_or_default(),
                        value: "{field.value}",
                        oninput: {
                            let field_index = field.field_index;
                            move |evt: Event<FormData>| {
                                actions::edit_cell(state, error_message, row_index, field_index, evt.value());
                            }
                        }
                    }
                    if field.removable {
                        button {
                            class: "remove-btn",
                            id: format!("remove-{row_index}-{}", field.field_index),
                            onclick: move |_| {
                                actions::remove_row(state, error_message, row_index);
                            },
                            "\u{2715}"
                        }
                    }
                    if let Some(err) = field.error.as_ref() {
                        span { class: "field-error", "{err}" }
                    }
                }
            }
        }
    }
}

fn field_views(state: &RowMatrixState, row_index: usize, row: &Row) -> Vec<FieldView> {
    state
        .configs()
        .iter()
        .enumerate()
        .map(|(field_index, config)| FieldView {
            field_index,
            config: config.clone(),
            name: config.name_for_row(row_index),
            value: data_model::display_value(row, field_index).to_string(),
            error: data_model::cell_error(row, field_index).map(str::to_string),
            removable: state.shows_remove_control(row_index, field_index),
        })
        .collect()
}

fn field_class(field: &FieldView) -> String {
    if field.error.is_some() {
        "field has-error".to_string()
    } else {
        "field".to_string()
    }
}
