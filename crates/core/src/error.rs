// SPDX-License-Identifier: MIT

//!
//! Errors surfaced to users when confirming a timeline
//!

use crate::{DateError, TimelineNumber};
use std::fmt::Display;
use thiserror::Error;

/// Which end of a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// Errors returned when a timeline's dates are confirmed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// Confirm was attempted with the start and/or end date missing
    #[error("Please select both start and end dates for Timeline {0}.")]
    IncompleteRange(TimelineNumber),

    /// A date was entered but isn't a calendar date
    #[error("Please enter a valid {endpoint} date for Timeline {timeline} (YYYY-MM-DD).")]
    InvalidDate {
        timeline: TimelineNumber,
        endpoint: Endpoint,
        input: String,
        #[source]
        source: DateError,
    },
}

impl TimelineError {
    /// The timeline the error relates to
    pub fn timeline(&self) -> TimelineNumber {
        match self {
            TimelineError::IncompleteRange(timeline) => *timeline,
            TimelineError::InvalidDate { timeline, .. } => *timeline,
        }
    }
}
