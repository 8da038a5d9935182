// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{LineStyle, Point, colour::Colour};
use serde::Serialize;

/// Horizontal alignment of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical alignment of text relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextBaseline {
    /// The position is on the text's baseline (text sits above it)
    Alphabetic,

    /// The position is at the top of the text (text hangs below it)
    Hanging,
}

/// Information needed to draw text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    pub position: Point,
    pub text: String,
    pub colour: Colour,
    pub font_size: f64,
    pub bold: bool,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
}

/// Information needed to draw a straight line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineOut {
    pub from: Point,
    pub to: Point,
    pub style: LineStyle,
}

impl LineOut {
    /// Signed horizontal length of the line
    pub fn dx(&self) -> f64 {
        self.to.x - self.from.x
    }
}

/// Information needed to draw a filled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleOut {
    pub centre: Point,
    pub radius: f64,
    pub fill_colour: Colour,
}

/// One axis tick: its mark and its label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickOut {
    pub mark: LineOut,
    pub label: TextOut,
}

/// Information needed to draw the bottom axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisOut {
    /// The axis path: down the left outer tick, along the baseline, and down
    /// the right outer tick
    pub domain_path: Vec<Point>,

    /// The style of the path and the tick marks
    pub style: LineStyle,

    /// The ticks, in domain order
    pub ticks: Vec<TickOut>,
}
