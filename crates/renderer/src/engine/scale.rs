// SPDX-License-Identifier: MIT

//!
//! A linear mapping from time to horizontal pixels
//!

use crate::{TickInterval, tick_format};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Maps instants in `domain` linearly onto pixels in `range`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDateTime, NaiveDateTime),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDateTime, NaiveDateTime), range: (f64, f64)) -> Self {
        TimeScale { domain, range }
    }

    /// A scale over whole days (each date taken at midnight)
    pub fn from_dates(start: NaiveDate, end: NaiveDate, range: (f64, f64)) -> Self {
        TimeScale::new(
            (start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN)),
            range,
        )
    }

    pub fn domain(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    fn domain_span_ms(&self) -> f64 {
        (self.domain.1 - self.domain.0).num_milliseconds() as f64
    }

    /// Map an instant to an x position.  An empty domain maps everything to
    /// the middle of the range.
    pub fn map(&self, t: NaiveDateTime) -> f64 {
        let (r0, r1) = self.range;
        let span = self.domain_span_ms();
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        let offset = (t - self.domain.0).num_milliseconds() as f64;
        r0 + (offset / span) * (r1 - r0)
    }

    /// Map a date (at midnight) to an x position
    pub fn map_date(&self, date: NaiveDate) -> f64 {
        self.map(date.and_time(NaiveTime::MIN))
    }

    /// The instant at an x position (to the nearest millisecond)
    pub fn invert(&self, x: f64) -> NaiveDateTime {
        let (r0, r1) = self.range;
        let width = r1 - r0;
        let span = self.domain_span_ms();
        if width == 0.0 || span == 0.0 {
            return self.domain.0;
        }
        let offset = ((x - r0) / width * span).round() as i64;
        TimeDelta::try_milliseconds(offset)
            .and_then(|delta| self.domain.0.checked_add_signed(delta))
            .unwrap_or(self.domain.0)
    }

    /// Calendar-aligned tick instants within the domain, aiming for about
    /// `count` of them, in domain order
    pub fn ticks(&self, count: usize) -> Vec<NaiveDateTime> {
        if count == 0 {
            return Vec::new();
        }
        let (d0, d1) = self.domain;
        let reversed = d1 < d0;
        let (lo, hi) = if reversed { (d1, d0) } else { (d0, d1) };
        let span = (hi - lo).num_milliseconds() as f64;

        let mut ticks = match TickInterval::choose(span, count) {
            Some(interval) => interval.range(lo, hi),
            None => vec![lo],
        };
        if reversed {
            ticks.reverse();
        }
        ticks
    }

    /// The label for a tick
    pub fn tick_format(&self, t: NaiveDateTime) -> String {
        tick_format(t)
    }
}
