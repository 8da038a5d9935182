// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Blocking alerts
//!

use crate::{ALERT_MODAL_WIDTH, ALERT_SYMBOL, Button, Label, widget_y_spacing};
use eframe::egui::{Context, Id, Key, Modal};
use std::collections::VecDeque;

/// A queue of messages shown one at a time in a modal that blocks the rest of
/// the GUI until dismissed with its OK button (or escape).  Clicking outside
/// the modal does nothing.
#[derive(Debug, Default)]
pub struct AlertModal {
    messages: VecDeque<String>,
}

impl AlertModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message to be shown
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("Alert queued: {message}");
        self.messages.push_back(message);
    }

    /// The message currently shown (if any)
    pub fn current(&self) -> Option<&str> {
        self.messages.front().map(String::as_str)
    }

    pub fn is_open(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Dismiss the message currently shown
    pub fn dismiss(&mut self) {
        if let Some(message) = self.messages.pop_front() {
            debug!("Alert dismissed: {message}");
        }
    }

    /// Draw the modal (if there's a message to show)
    pub fn show(&mut self, ctx: &Context) {
        let Some(message) = self.current() else {
            return;
        };
        let message = message.to_string();

        let mut ok_clicked = false;
        Modal::new(Id::new("alert_modal")).show(ctx, |ui| {
            ui.set_width(ALERT_MODAL_WIDTH);
            ui.horizontal_wrapped(|ui| {
                Label::strong(ui, ALERT_SYMBOL);
                ui.label(message.as_str());
            });
            ui.add_space(widget_y_spacing(ui) * 2.0);
            ui.vertical_centered(|ui| {
                ok_clicked = Button::ok(ui).clicked();
            });
        });

        let escape_pressed = ctx.input(|input| input.key_pressed(Key::Escape));
        if should_dismiss(ok_clicked, escape_pressed) {
            self.dismiss();
        }
    }
}

/// Only the OK button and the escape key dismiss an alert
fn should_dismiss(ok_clicked: bool, escape_pressed: bool) -> bool {
    ok_clicked || escape_pressed
}
