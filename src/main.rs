use dioxus::prelude::*;
use input_matrix::logging;
use input_matrix::ui::app::App;

fn main() {
    logging::init();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Input Matrix")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 600.0)),
            ),
        )
        .launch(App);
}
