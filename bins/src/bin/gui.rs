// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The Range Timeline desktop app
//!

use eframe::egui::ViewportBuilder;
use range_timeline_gui::{APP_TITLE, DEFAULT_WINDOW_SIZE, RangeTimelineApp};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point for the native GUI desktop application
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("range_timeline")
        .build();

    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Debug,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    // Create the Range Timeline application
    let range_timeline_app = RangeTimelineApp::new();

    // Setup the main window's default options
    let main_viewport_options = ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size([DEFAULT_WINDOW_SIZE.width, DEFAULT_WINDOW_SIZE.height]);

    // Setup the eframe options for a native application
    let options = eframe::NativeOptions {
        viewport: main_viewport_options,
        ..Default::default()
    };

    info!("Launching application");

    // Run the application
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(range_timeline_app))),
    )?;

    Ok(())
}
