// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Range Timeline project*
//!
//! This library crate provides the GUI parts of the GUI application.  It is
//! used to build the Range Timeline native GUI application.
//!

mod app;
mod app_colours;
mod components;
mod config;
mod consts;

pub use app::RangeTimelineApp;
pub use app_colours::ColourTheme;
pub use config::{Config, GuiError};
pub use consts::{APP_TITLE, DEFAULT_WINDOW_SIZE};

#[macro_use]
extern crate log;
