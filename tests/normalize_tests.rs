use proptest::prelude::*;

use input_matrix::state::data_model::{self, CellState, Row, RowMatrix};
use input_matrix::state::field_config::FieldConfig;
use input_matrix::state::matrix_state::RowMatrixState;

fn cell(value: &str) -> Option<CellState> {
    Some(CellState::with_value(value))
}

fn enabled() -> FieldConfig {
    FieldConfig::default()
}

fn disabled() -> FieldConfig {
    FieldConfig::default().with_disable_duplication(true)
}

#[derive(Clone, Debug)]
enum Op {
    Edit { row: usize, field: usize, value: String },
    Remove { row: usize },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<usize>(), any::<usize>(), "[ab ]{0,3}")
            .prop_map(|(row, field, value)| Op::Edit { row, field, value }),
        1 => any::<usize>().prop_map(|row| Op::Remove { row }),
    ]
}

fn configs_from_flags(flags: &[bool]) -> Vec<FieldConfig> {
    flags
        .iter()
        .map(|disable| FieldConfig::default().with_disable_duplication(*disable))
        .collect()
}

fn cell_strategy() -> impl Strategy<Value = Option<CellState>> {
    prop::option::of(
        (prop::option::of("[a ]{0,2}"), prop::option::of("[x]{1,2}"))
            .prop_map(|(value, error)| CellState { value, error }),
    )
}

fn matrix_strategy() -> impl Strategy<Value = RowMatrix> {
    prop::collection::vec(prop::collection::vec(cell_strategy(), 0..4), 0..5)
}

/// Applies `op` with indices reduced into the current bounds.
fn apply_op(state: &mut RowMatrixState, op: &Op) {
    let rows = state.row_count();
    let columns = state.configs().len();
    match op {
        Op::Edit { row, field, value } => {
            state.edit(row % rows, field % columns, value.as_str()).unwrap();
        }
        Op::Remove { row } => {
            state.remove_row(row % rows).unwrap();
        }
    }
}

proptest! {
    #[test]
    fn prop_invariants_hold_after_every_operation(
        flags in prop::collection::vec(any::<bool>(), 1..4),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut state = RowMatrixState::new(configs_from_flags(&flags));
        for op in &ops {
            apply_op(&mut state, op);
            prop_assert!(state.row_count() >= 1);
            prop_assert!(data_model::is_normalized(&state.matrix(), state.configs()));
        }
    }

    #[test]
    fn prop_all_disabled_columns_never_grow(
        columns in 1usize..4,
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut state = RowMatrixState::new(configs_from_flags(&vec![true; columns]));
        for op in &ops {
            apply_op(&mut state, op);
            prop_assert_eq!(state.row_count(), 1);
        }
    }

    #[test]
    fn prop_normalize_is_idempotent(
        flags in prop::collection::vec(any::<bool>(), 0..4),
        matrix in matrix_strategy(),
    ) {
        let configs = configs_from_flags(&flags);
        let once = data_model::normalize(matrix, &configs);
        let twice = data_model::normalize(once.clone(), &configs);
        prop_assert!(data_model::is_normalized(&once, &configs));
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn test_empty_matrix_becomes_one_row() {
    let matrix = data_model::normalize(RowMatrix::new(), &[enabled()]);
    assert_eq!(matrix, vec![Row::new()]);
}

#[test]
fn test_empty_matrix_without_columns_becomes_one_row() {
    let matrix = data_model::normalize(RowMatrix::new(), &[]);
    assert_eq!(matrix, vec![Row::new()]);
}

#[test]
fn test_only_tail_row_is_inspected() {
    let matrix = vec![vec![cell("a")], vec![cell("")]];
    let normalized = data_model::normalize(matrix.clone(), &[enabled()]);
    assert_eq!(normalized, matrix);
}

#[test]
fn test_growth_appends_exactly_one_row() {
    let matrix = vec![vec![cell("a"), cell("b"), cell("c")]];
    let normalized = data_model::normalize(matrix, &[enabled(), enabled(), enabled()]);
    assert_eq!(normalized.len(), 2);
    assert_eq!(normalized[1], Row::new());
}

#[test]
fn test_later_eligible_column_still_triggers_growth() {
    let matrix = vec![vec![None, cell("x")]];
    let normalized = data_model::normalize(matrix, &[disabled(), enabled()]);
    assert_eq!(normalized.len(), 2);
}

#[test]
fn test_empty_string_does_not_trigger_growth() {
    let matrix = vec![vec![cell("")]];
    let normalized = data_model::normalize(matrix, &[enabled()]);
    assert_eq!(normalized.len(), 1);
}

#[test]
fn test_cell_without_value_does_not_trigger_growth() {
    let matrix = vec![vec![Some(CellState {
        value: None,
        error: Some("required".to_string()),
    })]];
    let normalized = data_model::normalize(matrix, &[enabled()]);
    assert_eq!(normalized.len(), 1);
}

#[test]
fn test_whitespace_value_triggers_growth() {
    let matrix = vec![vec![cell(" ")]];
    let normalized = data_model::normalize(matrix, &[enabled()]);
    assert_eq!(normalized.len(), 2);
}

#[test]
fn test_cells_beyond_config_are_ignored() {
    let matrix = vec![vec![None, cell("x")]];
    let normalized = data_model::normalize(matrix, &[enabled()]);
    assert_eq!(normalized.len(), 1);
}

#[test]
fn test_is_normalized_rejects_empty_and_filled_tail() {
    assert!(!data_model::is_normalized(&RowMatrix::new(), &[enabled()]));
    assert!(!data_model::is_normalized(&vec![vec![cell("a")]], &[enabled()]));
    assert!(data_model::is_normalized(&vec![vec![cell("a")]], &[disabled()]));
}

#[test]
fn test_removal_shifts_later_rows_down() {
    let configs = vec![enabled()];
    let mut state = RowMatrixState::new(configs);
    for (row, value) in ["r0", "r1", "r2", "r3"].iter().enumerate() {
        state.edit(row, 0, *value).unwrap();
    }
    let before = state.matrix();
    assert_eq!(before.len(), 5);

    let after = state.remove_row(1).unwrap();
    assert_eq!(after.len(), 4);
    assert_eq!(after[0], before[0]);
    assert_eq!(&after[1..], &before[2..]);
}
