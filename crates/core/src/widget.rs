// SPDX-License-Identifier: MIT

//!
//! The input state of a single timeline widget
//!

use crate::{CalendarDate, DateRange, Endpoint, TimelineError, TimelineNumber};
use log::{debug, info, warn};

/// The phases a widget moves through.  There is one forward transition
/// (`Editable` -> `Fixed`) and no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetPhase {
    /// The dates can be edited
    Editable,

    /// The dates have been confirmed and can no longer change
    Fixed,
}

/// The user-entered dates of one timeline and whether they have been fixed
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetState {
    /// Which timeline this is
    timeline: TimelineNumber,

    /// The start date input as entered
    start_input: String,

    /// The end date input as entered
    end_input: String,

    /// The confirmed range.  `Some` exactly when the widget is fixed.
    fixed_range: Option<DateRange>,
}

impl WidgetState {
    /// Create a new, empty, editable widget state
    pub fn new(timeline: TimelineNumber) -> Self {
        Self {
            timeline,
            start_input: String::new(),
            end_input: String::new(),
            fixed_range: None,
        }
    }

    /// Which timeline this is
    pub fn timeline(&self) -> TimelineNumber {
        self.timeline
    }

    /// The current phase
    pub fn phase(&self) -> WidgetPhase {
        match self.fixed_range {
            Some(_) => WidgetPhase::Fixed,
            None => WidgetPhase::Editable,
        }
    }

    /// Whether the dates have been confirmed
    pub fn is_fixed(&self) -> bool {
        self.fixed_range.is_some()
    }

    /// The start date input
    pub fn start_input(&self) -> &str {
        &self.start_input
    }

    /// The end date input
    pub fn end_input(&self) -> &str {
        &self.end_input
    }

    /// The confirmed range (only once fixed)
    pub fn date_range(&self) -> Option<DateRange> {
        self.fixed_range
    }

    /// Set the start date input.  Ignored once fixed.  Returns whether the
    /// value was applied.
    pub fn set_start<S: Into<String>>(&mut self, value: S) -> bool {
        self.set_input(Endpoint::Start, value.into())
    }

    /// Set the end date input.  Ignored once fixed.  Returns whether the value
    /// was applied.
    pub fn set_end<S: Into<String>>(&mut self, value: S) -> bool {
        self.set_input(Endpoint::End, value.into())
    }

    fn set_input(&mut self, endpoint: Endpoint, value: String) -> bool {
        if self.is_fixed() {
            debug!(
                "Timeline {} is fixed, ignoring {endpoint} date edit",
                self.timeline
            );
            return false;
        }
        match endpoint {
            Endpoint::Start => self.start_input = value,
            Endpoint::End => self.end_input = value,
        }
        true
    }

    /// Confirm the entered dates.
    ///
    /// Both inputs must be non-empty and parse as calendar dates, otherwise
    /// the state is left untouched and the reason is returned.  On success
    /// the widget becomes fixed for good.  Confirming a fixed widget returns
    /// its range again.
    pub fn confirm(&mut self) -> Result<DateRange, TimelineError> {
        if let Some(range) = self.fixed_range {
            return Ok(range);
        }

        if self.start_input.trim().is_empty() || self.end_input.trim().is_empty() {
            warn!("Timeline {} confirmed without both dates", self.timeline);
            return Err(TimelineError::IncompleteRange(self.timeline));
        }

        let start = self.parse_input(Endpoint::Start, &self.start_input)?;
        let end = self.parse_input(Endpoint::End, &self.end_input)?;

        let range = DateRange::new(start, end);
        if range.is_inverted() {
            debug!("Timeline {} has an inverted range", self.timeline);
        }
        self.fixed_range = Some(range);
        info!("Timeline {} fixed: {} to {}", self.timeline, start, end);
        Ok(range)
    }

    /// Text for the confirm button
    pub fn button_label(&self) -> String {
        match self.phase() {
            WidgetPhase::Editable => format!("Add Timeline {}", self.timeline),
            WidgetPhase::Fixed => format!("Timeline {} Fixed", self.timeline),
        }
    }

    fn parse_input(&self, endpoint: Endpoint, input: &str) -> Result<CalendarDate, TimelineError> {
        CalendarDate::parse(input).map_err(|source| {
            warn!(
                "Timeline {} has an invalid {endpoint} date: {input:?}",
                self.timeline
            );
            TimelineError::InvalidDate {
                timeline: self.timeline,
                endpoint,
                input: input.to_string(),
                source,
            }
        })
    }
}
