pub mod action;
pub mod data_model;
pub mod field_config;
pub mod matrix_state;
