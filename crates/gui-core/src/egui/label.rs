// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Label shortcuts
//!

use eframe::egui::{self, Response, RichText, TextStyle, Ui};

/// Helpers for label drawing to an `egui` context
pub struct Label {}

impl Label {
    /// Draw a strong label and return the response (short for
    /// `ui.label(RichText::new(text).strong())`)
    pub fn strong(ui: &mut Ui, text: &str) -> Response {
        ui.label(RichText::new(text).strong())
    }

    /// Draw the reason an input is invalid, small and in the theme's error
    /// colour
    pub fn invalid(ui: &mut Ui, text: &str) -> Response {
        let colour = ui.visuals().error_fg_color;
        ui.label(RichText::new(text).small().color(colour))
    }

    /// Draw a heading label and return the response (short for
    /// `ui.heading(RichText::new(text))`)
    pub fn heading(ui: &mut Ui, text: &str) -> Response {
        ui.heading(RichText::new(text))
    }

    /// Draw a sub-heading and return the response.  It's a third of the way
    /// from the body size to the heading size.
    pub fn sub_heading(ui: &mut Ui, text: &str) -> Response {
        let heading_size = ui.style().text_styles[&TextStyle::Heading].size;
        let body_size = ui.style().text_styles[&TextStyle::Body].size;
        let size_difference = heading_size - body_size;
        let sub_heading_size = body_size + (size_difference / 3.0);
        let sub_heading = ui.add(egui::Label::new(
            RichText::new(text).size(sub_heading_size).strong(),
        ));
        ui.add_space(3.0);
        sub_heading
    }
}
