// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! One timeline: its date inputs, its confirm button, and (once fixed) its
//! drawing
//!

use crate::components::DateInputGui;
use eframe::egui::{Context, Ui};
use range_timeline_core::{Endpoint, TimelineNumber, WidgetState};
use range_timeline_gui_core::{Button, Draw, Label, widget_y_spacing};
use range_timeline_renderer::{RangeTimelineRendererEgui, TimelineStyle};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub struct TimelineWidgetGui {
    /// The dates entered and whether they've been fixed
    state: WidgetState,

    /// The start date input
    start: DateInputGui,

    /// The end date input
    end: DateInputGui,

    /// Draws the timeline once it's fixed
    renderer: RangeTimelineRendererEgui,

    /// Send a message to be shown in a blocking alert
    tx_alert: UnboundedSender<String>,
}

impl TimelineWidgetGui {
    /// Create a new, empty, timeline widget
    pub fn new(timeline: TimelineNumber, tx_alert: UnboundedSender<String>) -> Self {
        debug!("New TimelineWidgetGui for timeline {timeline}");
        Self {
            state: WidgetState::new(timeline),
            start: DateInputGui::new(timeline, Endpoint::Start),
            end: DateInputGui::new(timeline, Endpoint::End),
            renderer: RangeTimelineRendererEgui::new(),
            tx_alert,
        }
    }

    pub fn timeline(&self) -> TimelineNumber {
        self.state.timeline()
    }

    pub fn is_fixed(&self) -> bool {
        self.state.is_fixed()
    }

    /// Set the style the timeline is drawn in
    pub fn set_style(&mut self, style: TimelineStyle) {
        self.renderer.set_style(style);
    }

    /// Try to fix the entered dates.  If they can't be fixed the reason is
    /// sent as an alert.
    pub fn confirm(&mut self) {
        match self.state.confirm() {
            Ok(range) => self.renderer.set_date_range(range),
            Err(error) => {
                if let Err(send_error) = self.tx_alert.send(error.to_string()) {
                    error!("Couldn't send alert ({send_error}): {error}");
                }
            }
        }
    }

    /// The confirm button's text (`Add Timeline N`, then `Timeline N Fixed`)
    fn button_label(&self) -> String {
        self.state.button_label()
    }

    fn draw_inputs(&mut self, ui: &mut Ui) {
        if self.start.draw(ui) {
            self.state.set_start(self.start.text());
        }
        if self.end.draw(ui) {
            self.state.set_end(self.end.text());
        }
    }
}

impl Draw for TimelineWidgetGui {
    fn draw(&mut self, _ctx: &Context, ui: &mut Ui) {
        ui.push_id(self.timeline().value(), |ui| {
            Label::sub_heading(ui, &format!("Timeline {}", self.timeline()));

            // The inputs are read-only once fixed
            let fixed = self.is_fixed();
            ui.add_enabled_ui(!fixed, |ui| self.draw_inputs(ui));
            ui.add_space(widget_y_spacing(ui));

            if Button::tall_full_width(ui, self.button_label(), !fixed).clicked() {
                self.confirm();
            }

            if self.is_fixed() {
                ui.add_space(widget_y_spacing(ui));
                self.renderer.draw(ui);
            }
        });
    }
}
