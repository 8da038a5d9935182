// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Range Timeline project*
//!
//! This library crate includes code that the Range Timeline desktop GUI
//! application uses that other projects may also wish to use.
//!

mod egui;
mod helpers;
mod validity;

pub use egui::*;
pub use helpers::*;
pub use validity::*;

#[macro_use]
extern crate log;
