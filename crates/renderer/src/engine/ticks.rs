// SPDX-License-Identifier: MIT

//!
//! Choosing, generating, and labelling axis ticks
//!

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};

const DURATION_HOUR: f64 = 3_600_000.0;
const DURATION_DAY: f64 = DURATION_HOUR * 24.0;
const DURATION_WEEK: f64 = DURATION_DAY * 7.0;
const DURATION_MONTH: f64 = DURATION_DAY * 30.0;
const DURATION_YEAR: f64 = DURATION_DAY * 365.0;

/// The calendar-aligned spacing between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickInterval {
    /// Every `n` hours (hours divisible by `n`)
    Hours(u32),

    /// Every `n` days (days of the month where `(day - 1) % n == 0`)
    Days(u32),

    /// Every Sunday
    Week,

    /// Every `n` months (months where `(month - 1) % n == 0`)
    Months(u32),

    /// Every `n` years (years divisible by `n`)
    Years(i32),
}

/// The candidate intervals with their approximate durations (ms), shortest
/// first
const TICK_INTERVALS: [(TickInterval, f64); 10] = [
    (TickInterval::Hours(1), DURATION_HOUR),
    (TickInterval::Hours(3), DURATION_HOUR * 3.0),
    (TickInterval::Hours(6), DURATION_HOUR * 6.0),
    (TickInterval::Hours(12), DURATION_HOUR * 12.0),
    (TickInterval::Days(1), DURATION_DAY),
    (TickInterval::Days(2), DURATION_DAY * 2.0),
    (TickInterval::Week, DURATION_WEEK),
    (TickInterval::Months(1), DURATION_MONTH),
    (TickInterval::Months(3), DURATION_MONTH * 3.0),
    (TickInterval::Years(1), DURATION_YEAR),
];

impl TickInterval {
    /// Choose the interval that gives closest to `count` ticks over a span of
    /// `span_ms` milliseconds.  There is no interval for an empty span.
    pub fn choose(span_ms: f64, count: usize) -> Option<TickInterval> {
        if span_ms <= 0.0 || count == 0 {
            return None;
        }
        let target = span_ms / count as f64;

        // Index of the first candidate longer than the target
        let i = TICK_INTERVALS
            .iter()
            .take_while(|(_, duration)| *duration <= target)
            .count();

        if i == TICK_INTERVALS.len() {
            let step = tick_step(span_ms / DURATION_YEAR, count).floor().max(1.0);
            return Some(TickInterval::Years(step as i32));
        }
        if i == 0 {
            return Some(TICK_INTERVALS[0].0);
        }

        // Pick whichever neighbour is closer to the target (by ratio)
        let (shorter, shorter_duration) = TICK_INTERVALS[i - 1];
        let (longer, longer_duration) = TICK_INTERVALS[i];
        if target / shorter_duration < longer_duration / target {
            Some(shorter)
        } else {
            Some(longer)
        }
    }

    /// All tick times `t` with `start <= t <= stop`
    pub fn range(&self, start: NaiveDateTime, stop: NaiveDateTime) -> Vec<NaiveDateTime> {
        let mut ticks = Vec::new();
        let mut current = match self.ceil(start) {
            Some(current) => current,
            None => return ticks,
        };
        while current <= stop {
            if self.accepts(current) {
                ticks.push(current);
            }
            match self.next(current) {
                Some(next) => current = next,
                None => break,
            }
        }
        ticks
    }

    /// Round down to the interval's base unit (hour, day, Sunday, month, year)
    fn floor(&self, t: NaiveDateTime) -> Option<NaiveDateTime> {
        let date = t.date();
        match self {
            TickInterval::Hours(_) => {
                NaiveTime::from_hms_opt(t.hour(), 0, 0).map(|time| date.and_time(time))
            }
            TickInterval::Days(_) => Some(date.and_time(NaiveTime::MIN)),
            TickInterval::Week => {
                let days_since_sunday = date.weekday().num_days_from_sunday();
                date.checked_sub_days(Days::new(days_since_sunday.into()))
                    .map(|sunday| sunday.and_time(NaiveTime::MIN))
            }
            TickInterval::Months(_) => NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
                .map(|first| first.and_time(NaiveTime::MIN)),
            TickInterval::Years(_) => NaiveDate::from_ymd_opt(date.year(), 1, 1)
                .map(|first| first.and_time(NaiveTime::MIN)),
        }
    }

    /// Round up to the interval's base unit
    fn ceil(&self, t: NaiveDateTime) -> Option<NaiveDateTime> {
        let floor = self.floor(t)?;
        if floor == t { Some(floor) } else { self.next(floor) }
    }

    /// Step forward one base unit
    fn next(&self, t: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            TickInterval::Hours(_) => t.checked_add_signed(TimeDelta::try_hours(1)?),
            TickInterval::Days(_) => t.checked_add_days(Days::new(1)),
            TickInterval::Week => t.checked_add_days(Days::new(7)),
            TickInterval::Months(_) => t.checked_add_months(Months::new(1)),
            TickInterval::Years(_) => t.checked_add_months(Months::new(12)),
        }
    }

    /// Whether a base unit boundary is one of this interval's ticks
    fn accepts(&self, t: NaiveDateTime) -> bool {
        match *self {
            TickInterval::Hours(step) => t.hour() % step.max(1) == 0,
            TickInterval::Days(step) => t.day0() % step.max(1) == 0,
            TickInterval::Week => true,
            TickInterval::Months(step) => t.month0() % step.max(1) == 0,
            TickInterval::Years(step) => t.year().rem_euclid(step.max(1)) == 0,
        }
    }
}

/// A "nice" step (1, 2, or 5 times a power of 10) for dividing `span` into
/// about `count` parts
fn tick_step(span: f64, count: usize) -> f64 {
    let step = span / count as f64;
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10_f64.powf(power)
}

/// Label a tick using the coarsest calendar unit it falls on, e.g. `2024`,
/// `February`, `Jan 07` (a Sunday), `Mon 08`, or `03 AM`
pub fn tick_format(t: NaiveDateTime) -> String {
    let format = if t.time() != NaiveTime::MIN {
        if t.minute() != 0 || t.second() != 0 {
            "%I:%M"
        } else {
            "%I %p"
        }
    } else if t.day() != 1 {
        if t.weekday() != Weekday::Sun {
            "%a %d"
        } else {
            "%b %d"
        }
    } else if t.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    t.format(format).to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    fn span_ms(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
        (end - start).num_milliseconds() as f64
    }

    #[test]
    fn choose() {
        // Empty span
        assert_eq!(TickInterval::choose(0.0, 10), None);

        // A day: aim for 2.4 hours
        let day = span_ms(midnight(2024, 6, 1), midnight(2024, 6, 2));
        assert_eq!(TickInterval::choose(day, 10), Some(TickInterval::Hours(3)));

        // A month: aim for 3 days
        let month = span_ms(midnight(2024, 1, 1), midnight(2024, 1, 31));
        assert_eq!(TickInterval::choose(month, 10), Some(TickInterval::Days(2)));

        // A year: aim for 36.5 days
        let year = span_ms(midnight(2024, 1, 1), midnight(2024, 12, 31));
        assert_eq!(TickInterval::choose(year, 10), Some(TickInterval::Months(1)));

        // Decades and centuries
        let decade = span_ms(midnight(2000, 1, 1), midnight(2010, 1, 1));
        assert_eq!(TickInterval::choose(decade, 10), Some(TickInterval::Years(1)));
        let century = span_ms(midnight(1900, 1, 1), midnight(2000, 1, 1));
        assert_eq!(TickInterval::choose(century, 10), Some(TickInterval::Years(10)));
        let millennium = span_ms(midnight(1000, 1, 1), midnight(2000, 1, 1));
        assert_eq!(
            TickInterval::choose(millennium, 10),
            Some(TickInterval::Years(100))
        );
    }

    #[test]
    fn monthly_range() {
        let ticks = TickInterval::Months(1).range(midnight(2024, 1, 1), midnight(2024, 12, 31));
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0], midnight(2024, 1, 1));
        assert_eq!(ticks[11], midnight(2024, 12, 1));
    }

    #[test]
    fn quarterly_range() {
        let ticks = TickInterval::Months(3).range(midnight(2023, 2, 15), midnight(2024, 1, 1));
        assert_eq!(
            ticks,
            vec![
                midnight(2023, 4, 1),
                midnight(2023, 7, 1),
                midnight(2023, 10, 1),
                midnight(2024, 1, 1),
            ]
        );
    }

    #[test]
    fn every_other_day_range() {
        // Days are counted from the 1st of each month
        let ticks = TickInterval::Days(2).range(midnight(2024, 1, 30), midnight(2024, 2, 4));
        assert_eq!(
            ticks,
            vec![midnight(2024, 1, 31), midnight(2024, 2, 1), midnight(2024, 2, 3)]
        );
    }

    #[test]
    fn weekly_range() {
        let ticks = TickInterval::Week.range(midnight(2024, 1, 1), midnight(2024, 1, 31));
        assert_eq!(
            ticks,
            vec![
                midnight(2024, 1, 7),
                midnight(2024, 1, 14),
                midnight(2024, 1, 21),
                midnight(2024, 1, 28),
            ]
        );
    }

    #[test]
    fn yearly_range() {
        let ticks = TickInterval::Years(10).range(midnight(1901, 6, 1), midnight(1950, 1, 1));
        assert_eq!(
            ticks,
            vec![
                midnight(1910, 1, 1),
                midnight(1920, 1, 1),
                midnight(1930, 1, 1),
                midnight(1940, 1, 1),
                midnight(1950, 1, 1),
            ]
        );
    }

    #[test]
    fn hourly_range() {
        let ticks = TickInterval::Hours(6).range(midnight(2024, 6, 1), midnight(2024, 6, 2));
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[1], midnight(2024, 6, 1) + TimeDelta::hours(6));
    }

    #[test]
    fn format() {
        assert_eq!(tick_format(midnight(2024, 1, 1)), "2024");
        assert_eq!(tick_format(midnight(2024, 2, 1)), "February");
        assert_eq!(tick_format(midnight(2024, 1, 7)), "Jan 07");
        assert_eq!(tick_format(midnight(2024, 1, 8)), "Mon 08");
        assert_eq!(
            tick_format(midnight(2024, 1, 8) + TimeDelta::hours(15)),
            "03 PM"
        );
    }
}
