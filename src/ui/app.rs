use dioxus::prelude::*;
use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::state::matrix_state::RowMatrixState;
use crate::ui::matrix::InputMatrix;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

#[component]
pub fn App() -> Element {
    let state = use_signal(RowMatrixState::default);
    let config_path = use_signal::<Option<PathBuf>>(|| None);
    let error_message = use_signal::<Option<String>>(|| None);

    use_effect({
        let mut state = state;
        let mut config_path = config_path;
        let mut error_message = error_message;
        move || {
            let config = AppConfig::from_env();
            match config.field_configs() {
                Ok(configs) => {
                    state.with_mut(|state| {
                        state.set_config(configs);
                    });
                    config_path.set(config.fields_path.clone());
                    error_message.set(None);
                }
                Err(e) => {
                    error_message.set(Some(e.to_string()));
                }
            }
        }
    });

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            Toolbar { state, config_path, error_message }
            InputMatrix { state, error_message }
        }
    }
}
