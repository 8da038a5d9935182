// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Layout shortcuts
//!

use eframe::egui::Ui;

/// Layout helper function (shortcut for `ui.spacing().interact_size.y`)
pub fn body_text_height(ui: &Ui) -> f32 {
    ui.spacing().interact_size.y
}

/// Layout helper function (shortcut for `ui.spacing().item_spacing.x`)
pub fn widget_x_spacing(ui: &Ui) -> f32 {
    ui.spacing().item_spacing.x
}

/// Layout helper function (shortcut for `ui.spacing().item_spacing.y`)
pub fn widget_y_spacing(ui: &Ui) -> f32 {
    ui.spacing().item_spacing.y
}
