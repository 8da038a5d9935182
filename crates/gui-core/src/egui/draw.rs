// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Drawing GUI components
//!

use eframe::egui::{Context, Ui};

/// Implementing types are GUI components that can draw themselves into a
/// `Ui`.
pub trait Draw {
    /// Draw the component (called every frame).
    fn draw(&mut self, ctx: &Context, ui: &mut Ui);
}
