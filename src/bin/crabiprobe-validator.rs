#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use crabiprobe::app::{self, ValidatorApp};
use crabiprobe::config::ValidatorConfig;
use crabiprobe::logging;

fn main() -> eframe::Result<()> {
    logging::init_logging();

    let config = ValidatorConfig::default();
    let native_options = app::native_options(config.window_size);

    eframe::run_native(
        ValidatorApp::name(),
        native_options,
        Box::new(|cc| Ok(Box::new(ValidatorApp::new(cc, config)))),
    )
}
