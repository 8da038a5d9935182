// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Button shortcuts
//!

use crate::{OK_BUTTON_WIDTH, body_text_height};
use eframe::egui::{self, Response, RichText, Ui, Vec2};

/// Helpers for button drawing to an `egui` context
pub struct Button {}

impl Button {
    /// Helper to draw a tall button that fills the available GUI width.  A
    /// disabled button is drawn but can't be clicked.
    pub fn tall_full_width(ui: &mut Ui, text: impl Into<RichText>, enabled: bool) -> Response {
        ui.add_enabled(
            enabled,
            egui::Button::new(text.into())
                .min_size(Vec2::new(ui.available_width(), ui.spacing().interact_size.y * 2.0)),
        )
    }

    /// Draw the OK button (for dismissing alerts) and return the response
    pub fn ok(ui: &mut Ui) -> Response {
        let button_height = body_text_height(ui);
        ui.add_sized([OK_BUTTON_WIDTH, button_height], egui::Button::new("OK"))
    }
}
