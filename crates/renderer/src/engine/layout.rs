// SPDX-License-Identifier: MIT

//!
//! Turning a date range into pixel positions
//!

use crate::{CanvasSize, DEFAULT_TICK_COUNT, LABEL_Y_OFFSET, Margins, Point, TimeScale};
use range_timeline_core::DateRange;
use serde::Serialize;

/// One axis tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub x: f64,
    pub label: String,
}

/// The bottom axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    /// The y position of the axis baseline
    pub y: f64,

    /// The horizontal extent of the axis (left end, right end)
    pub range: (f64, f64),

    /// The ticks, in domain order
    pub ticks: Vec<Tick>,
}

/// A date label above a marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelLayout {
    pub position: Point,
    pub text: String,
}

/// Where everything in a timeline goes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub canvas_size: CanvasSize,
    pub axis_domain: DateRange,
    pub axis: AxisLayout,
    pub start_x: f64,
    pub end_x: f64,
    pub mid_y: f64,
    pub label_y_offset: f64,
    pub start_label: LabelLayout,
    pub end_label: LabelLayout,
}

impl Layout {
    /// Centre of the start marker
    pub fn start_marker(&self) -> Point {
        Point::new(self.start_x, self.mid_y)
    }

    /// Centre of the end marker
    pub fn end_marker(&self) -> Point {
        Point::new(self.end_x, self.mid_y)
    }

    /// Length of the line joining the markers
    pub fn line_length(&self) -> f64 {
        (self.end_x - self.start_x).abs()
    }
}

/// Compute the layout of a timeline spanning `range` on a canvas
pub fn compute_layout(range: &DateRange, canvas: CanvasSize, margins: Margins) -> Layout {
    let x_range = margins.x_range(canvas);
    let scale = TimeScale::from_dates(range.start().naive(), range.end().naive(), x_range);

    let ticks = scale
        .ticks(DEFAULT_TICK_COUNT)
        .into_iter()
        .map(|t| Tick {
            x: scale.map(t),
            label: scale.tick_format(t),
        })
        .collect();

    let start_x = scale.map(range.start().midnight());
    let end_x = scale.map(range.end().midnight());
    let mid_y = canvas.height / 2.0;

    Layout {
        canvas_size: canvas,
        axis_domain: *range,
        axis: AxisLayout {
            y: margins.axis_y(canvas),
            range: x_range,
            ticks,
        },
        start_x,
        end_x,
        mid_y,
        label_y_offset: LABEL_Y_OFFSET,
        start_label: LabelLayout {
            position: Point::new(start_x, mid_y).with_offset(0.0, -LABEL_Y_OFFSET),
            text: range.start().to_date_string(),
        },
        end_label: LabelLayout {
            position: Point::new(end_x, mid_y).with_offset(0.0, -LABEL_Y_OFFSET),
            text: range.end().to_date_string(),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use range_timeline_core::CalendarDate;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(
            CalendarDate::parse(start).unwrap(),
            CalendarDate::parse(end).unwrap(),
        )
    }

    fn default_layout(start: &str, end: &str) -> Layout {
        compute_layout(&range(start, end), CanvasSize::default(), Margins::default())
    }

    #[test]
    fn json() {
        let layout = default_layout("2024-01-01", "2024-12-31");
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["start_x"], 50.0);
        assert_eq!(json["end_x"], 780.0);
        assert_eq!(json["mid_y"], 100.0);
        assert_eq!(json["axis_domain"]["start"], "2024-01-01");
        assert_eq!(json["axis_domain"]["end"], "2024-12-31");
        assert_eq!(json["start_label"]["text"], "Mon Jan 01 2024");
        assert_eq!(json["end_label"]["position"]["x"], 780.0);
        assert_eq!(json["axis"]["ticks"].as_array().unwrap().len(), 12);
        assert_eq!(json["axis"]["ticks"][0]["label"], "2024");
    }

    #[test]
    fn one_year() {
        let layout = default_layout("2024-01-01", "2024-12-31");
        assert_eq!(layout.start_x, 50.0);
        assert_eq!(layout.end_x, 780.0);
        assert_eq!(layout.mid_y, 100.0);
        assert_eq!(layout.line_length(), 730.0);
        assert_eq!(layout.start_marker(), Point::new(50.0, 100.0));
        assert_eq!(layout.end_marker(), Point::new(780.0, 100.0));
    }

    #[test]
    fn labels() {
        let layout = default_layout("2024-01-01", "2024-12-31");
        assert_eq!(layout.start_label.text, "Mon Jan 01 2024");
        assert_eq!(layout.end_label.text, "Tue Dec 31 2024");
        assert_eq!(layout.start_label.position, Point::new(50.0, 85.0));
        assert_eq!(layout.end_label.position, Point::new(780.0, 85.0));
        assert_eq!(layout.label_y_offset, 15.0);
    }

    #[test]
    fn axis() {
        let layout = default_layout("2024-01-01", "2024-12-31");
        assert_eq!(layout.axis.y, 170.0);
        assert_eq!(layout.axis.range, (50.0, 780.0));

        let ticks = &layout.axis.ticks;
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0].x, 50.0);
        assert_eq!(ticks[0].label, "2024");
        assert_eq!(ticks[1].label, "February");
        assert_eq!(ticks[11].label, "December");
        assert!(ticks.windows(2).all(|pair| pair[0].x < pair[1].x));
        assert!(ticks.iter().all(|tick| tick.x >= 50.0 && tick.x <= 780.0));
    }

    #[test]
    fn same_start_and_end() {
        let layout = default_layout("2024-06-01", "2024-06-01");
        assert_eq!(layout.start_x, 415.0);
        assert_eq!(layout.end_x, 415.0);
        assert_eq!(layout.line_length(), 0.0);
        assert_eq!(layout.axis.ticks.len(), 1);
        assert_eq!(layout.axis.ticks[0].x, 415.0);
        assert_eq!(layout.axis.ticks[0].label, "June");
    }

    #[test]
    fn idempotent() {
        let first = default_layout("1990-03-17", "2031-11-02");
        let second = default_layout("1990-03-17", "2031-11-02");
        assert_eq!(first, second);
    }

    #[test]
    fn start_never_right_of_end() {
        let pairs = [
            ("2024-01-01", "2024-01-02"),
            ("2024-01-01", "2024-01-31"),
            ("1066-10-14", "1815-06-18"),
            ("1999-12-31", "2000-01-01"),
            ("0001-01-01", "9999-12-31"),
            ("2024-02-29", "2024-02-29"),
        ];
        for (start, end) in pairs {
            let layout = default_layout(start, end);
            assert!(layout.start_x <= layout.end_x, "{start} to {end}");
            assert!(!layout.axis.ticks.is_empty(), "{start} to {end}");
        }
    }

    #[test]
    fn inverted() {
        let layout = default_layout("2024-12-31", "2024-01-01");
        assert_eq!(layout.start_x, 50.0);
        assert_eq!(layout.end_x, 780.0);
        assert_eq!(layout.start_label.text, "Tue Dec 31 2024");

        // Ticks run backwards in time, left to right
        let ticks = &layout.axis.ticks;
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0].label, "December");
        assert_eq!(ticks[11].label, "2024");
        assert!(ticks.windows(2).all(|pair| pair[0].x < pair[1].x));
    }

    #[test]
    fn other_canvas() {
        let canvas = CanvasSize {
            width: 400.0,
            height: 100.0,
        };
        let margins = Margins {
            top: 0.0,
            right: 0.0,
            bottom: 10.0,
            left: 0.0,
        };
        let layout = compute_layout(&range("2024-01-01", "2024-12-31"), canvas, margins);
        assert_eq!(layout.start_x, 0.0);
        assert_eq!(layout.end_x, 400.0);
        assert_eq!(layout.mid_y, 50.0);
        assert_eq!(layout.axis.y, 90.0);
        assert_eq!(layout.canvas_size, canvas);
    }
}
