// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! A date input (text field plus calendar picker)
//!

use crate::consts::{
    DATE_INPUT_HINT, DATE_INPUT_LABEL_WIDTH, DESIRED_DATE_INPUT_WIDTH, PICKER_PROMPT,
};
use chrono::{Local, NaiveDate};
use eframe::egui::{self, TextEdit, Ui};
use egui_extras::DatePickerButton;
use range_timeline_core::{CalendarDate, Endpoint, INPUT_DATE_FORMAT, TimelineNumber};
use range_timeline_gui_core::{
    ErrorStyle, Label, ValidSynchronous, ValiditySynchronous, body_text_height,
    conform_string_input_to_iso_date, widget_x_spacing,
};

#[derive(Debug)]
pub struct DateInputGui {
    /// Which timeline the input belongs to
    timeline: TimelineNumber,

    /// Which end of the timeline the input is for
    endpoint: Endpoint,

    /// The text input
    buffer: String,

    /// The date chosen with the calendar picker (kept in step with `buffer`,
    /// `None` while `buffer` is empty)
    picker_date: Option<NaiveDate>,

    /// Whether `buffer` is empty or a date
    validity: ValiditySynchronous,
}

impl DateInputGui {
    /// Create a new, empty, date input
    pub fn new(timeline: TimelineNumber, endpoint: Endpoint) -> Self {
        Self {
            timeline,
            endpoint,
            buffer: String::new(),
            picker_date: None,
            validity: ValiditySynchronous::Valid,
        }
    }

    /// The text entered (possibly empty or not a date)
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the text entered
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.update_validity_synchronous();
    }

    fn label(&self) -> &'static str {
        match self.endpoint {
            Endpoint::Start => "Start Date:",
            Endpoint::End => "End Date:",
        }
    }

    /// The picker button shows the chosen date, or a prompt if there isn't one
    fn picker_button_format(&self) -> &'static str {
        match self.picker_date {
            Some(_) => INPUT_DATE_FORMAT,
            None => PICKER_PROMPT,
        }
    }

    /// Draw the input.  Returns whether the text changed.
    pub fn draw(&mut self, ui: &mut Ui) -> bool {
        let mut changed = false;
        let picker_id_salt = format!("timeline_{}_{}_picker", self.timeline, self.endpoint);

        ui.horizontal(|ui| {
            let label_size = [DATE_INPUT_LABEL_WIDTH, body_text_height(ui)];
            ui.add_sized(label_size, egui::Label::new(self.label()));

            // Typed input
            ui.scope(|ui| {
                self.set_validity_styling(ui);
                let input = TextEdit::singleline(&mut self.buffer)
                    .hint_text(DATE_INPUT_HINT)
                    .desired_width(DESIRED_DATE_INPUT_WIDTH);
                if ui.add(input).changed() {
                    conform_string_input_to_iso_date(&mut self.buffer);
                    self.update_validity_synchronous();
                    changed = true;
                }
            });

            ui.add_space(widget_x_spacing(ui));

            // Calendar picker.  Until a date is chosen the calendar opens on
            // today but the button doesn't show a date.
            let mut selection = self
                .picker_date
                .unwrap_or_else(|| Local::now().date_naive());
            let picker = DatePickerButton::new(&mut selection)
                .id_salt(&picker_id_salt)
                .format(self.picker_button_format());
            if ui.add(picker).changed() {
                self.picker_date = Some(selection);
                self.buffer = CalendarDate::from(selection).to_input_string();
                self.update_validity_synchronous();
                changed = true;
            }
        });

        if let Some(invalid_msg) = self.validity.invalid_msg() {
            Label::invalid(ui, invalid_msg);
        }

        changed
    }
}

impl ValidSynchronous for DateInputGui {
    fn update_validity_synchronous(&mut self) {
        // Empty inputs are dealt with when the timeline is confirmed
        if self.buffer.trim().is_empty() {
            self.picker_date = None;
            self.validity = ValiditySynchronous::Valid;
            return;
        }
        self.validity = match CalendarDate::parse(&self.buffer) {
            Ok(date) => {
                self.picker_date = Some(date.naive());
                ValiditySynchronous::Valid
            }
            Err(_) => ValiditySynchronous::Invalid(format!("Enter a date as {DATE_INPUT_HINT}")),
        };
    }

    fn validity_synchronous(&self) -> ValiditySynchronous {
        self.validity.clone()
    }
}

impl ErrorStyle for DateInputGui {}

#[cfg(test)]
mod test {
    use super::*;

    fn input() -> DateInputGui {
        DateInputGui::new(TimelineNumber::try_from(1).unwrap(), Endpoint::Start)
    }

    #[test]
    fn validity() {
        let mut input = input();
        assert!(input.is_valid_synchronous());
        assert_eq!(input.picker_date, None);

        input.set_text("2024-02");
        assert!(!input.is_valid_synchronous());

        input.set_text("2024-02-29");
        assert!(input.is_valid_synchronous());
        assert_eq!(input.picker_date, NaiveDate::from_ymd_opt(2024, 2, 29));

        input.set_text("2023-02-29");
        assert!(!input.is_valid_synchronous());

        // Empty is left for the confirm step
        input.set_text("");
        assert!(input.is_valid_synchronous());
    }

    #[test]
    fn picker_follows_text() {
        let mut input = input();
        assert_eq!(input.picker_button_format(), PICKER_PROMPT);

        input.set_text("2024-06-01");
        assert_eq!(input.picker_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(input.picker_button_format(), INPUT_DATE_FORMAT);

        // A half-typed date keeps the last good one
        input.set_text("2024-06");
        assert_eq!(input.picker_date, NaiveDate::from_ymd_opt(2024, 6, 1));

        // Clearing the text clears the picker
        input.set_text("");
        assert_eq!(input.picker_date, None);
        assert_eq!(input.picker_button_format(), PICKER_PROMPT);
    }

    #[test]
    fn labels() {
        assert_eq!(input().label(), "Start Date:");
        let end = DateInputGui::new(TimelineNumber::try_from(2).unwrap(), Endpoint::End);
        assert_eq!(end.label(), "End Date:");
    }
}
