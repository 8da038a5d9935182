// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

/// Room for both timelines and their inputs
pub const DEFAULT_WINDOW_SIZE: WindowSize = WindowSize {
    width: 880.0,
    height: 860.0,
};

/// The window title and the main heading
pub const APP_TITLE: &str = "Historical Timelines";

pub const DESIRED_DATE_INPUT_WIDTH: f32 = 100.0;
pub const DATE_INPUT_LABEL_WIDTH: f32 = 80.0;

pub static DATE_INPUT_HINT: &str = "YYYY-MM-DD";

/// Shown on the calendar picker button before a date is chosen (a chrono
/// format string with no fields)
pub static PICKER_PROMPT: &str = "Pick a date";
