// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The GUI components that make up a timeline widget
//!

mod date_input;
mod timeline_widget;

pub use date_input::*;
pub use timeline_widget::*;
