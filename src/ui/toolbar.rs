use dioxus::prelude::*;
use std::path::PathBuf;

use crate::state::matrix_state::RowMatrixState;
use crate::ui::actions;

#[component]
pub fn Toolbar(
    state: Signal<RowMatrixState>,
    config_path: Signal<Option<PathBuf>>,
    error_message: Signal<Option<String>>,
) -> Element {
    let mut load_success = use_signal(|| false);

    let (revision, row_count, column_count) = {
        let snapshot = state.read();
        (
            snapshot.revision(),
            snapshot.row_count(),
            snapshot.configs().len(),
        )
    };

    rsx! {
        div { class: "toolbar",
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-load-fields",
                    onclick: move |_| {
                        spawn(async move {
                            let loaded = actions::open_field_config(state, config_path, error_message).await;
                            if loaded {
                                load_success.set(true);
                                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                                load_success.set(false);
                            }
                        });
                    },
                    "\u{1F4C2} Load fields"
                }
                if *load_success.read() {
                    span { class: "save-success", "\u{2714} Loaded" }
                }
            }
            div { class: "toolbar-separator" }

            div { class: "toolbar-info",
                span { class: "toolbar-label", id: "label-matrix-size",
                    "{row_count} rows \u{00D7} {column_count} fields (rev {revision})"
                }
                if let Some(path) = config_path.read().as_ref() {
                    span { class: "file-path", "{path.display()}" }
                }
                if let Some(err) = error_message.read().as_ref() {
                    span { class: "error-message", "{err}" }
                }
            }
        }
    }
}
