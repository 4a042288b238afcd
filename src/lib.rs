pub mod app_config;
pub mod error;
pub mod io;
pub mod logging;
pub mod state;
pub mod ui;
