pub mod actions;
pub mod app;
pub mod matrix;
pub mod toolbar;
