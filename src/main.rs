#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
use crabiprobe::app::{self, TesterApp};
use crabiprobe::config::TesterConfig;
use crabiprobe::logging;

fn main() -> eframe::Result<()> {
    logging::init_logging();

    let config = TesterConfig::default();
    let native_options = app::native_options(config.window_size);

    eframe::run_native(
        TesterApp::name(),
        native_options,
        Box::new(|cc| Ok(Box::new(TesterApp::new(cc, config)))),
    )
}
