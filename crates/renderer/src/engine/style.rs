// SPDX-License-Identifier: MIT

//!
//! Timeline styles
//!

use crate::{
    CONNECTOR_THICKNESS, LABEL_FONT_SIZE, MARKER_RADIUS, TICK_FONT_SIZE, TICK_PADDING, TICK_SIZE,
    colour::Colour,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub line: LineStyle,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub text_colour: Colour,
    pub font_size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_colour: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub text_colour: Colour,
    pub font_size: f64,
    pub bold: bool,
}

/// Everything that controls how a timeline looks (but not where things go)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineStyle {
    pub background: Colour,
    pub border: LineStyle,
    pub axis: AxisStyle,
    pub connector: LineStyle,
    pub marker: MarkerStyle,
    pub label: LabelStyle,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self::light()
    }
}

impl TimelineStyle {
    /// Black on white with blue markers
    pub fn light() -> Self {
        Self {
            background: Colour::WHITE,
            border: LineStyle {
                colour: Colour::from_rgb(0xd1, 0xd5, 0xdb),
                thickness: 1.0,
            },
            axis: AxisStyle {
                line: LineStyle {
                    colour: Colour::BLACK,
                    thickness: 1.0,
                },
                tick_size: TICK_SIZE,
                tick_padding: TICK_PADDING,
                text_colour: Colour::BLACK,
                font_size: TICK_FONT_SIZE,
            },
            connector: LineStyle {
                colour: Colour::BLACK,
                thickness: CONNECTOR_THICKNESS,
            },
            marker: MarkerStyle {
                radius: MARKER_RADIUS,
                fill_colour: Colour::BLUE,
            },
            label: LabelStyle {
                text_colour: Colour::BLACK,
                font_size: LABEL_FONT_SIZE,
                bold: true,
            },
        }
    }

    /// Light on dark, for dark GUI themes
    pub fn dark() -> Self {
        let mut style = Self::light();
        let foreground = Colour::from_rgb(230, 230, 230);
        style.background = Colour::from_rgb(30, 30, 30);
        style.border.colour = Colour::from_rgb(70, 70, 70);
        style.axis.line.colour = foreground;
        style.axis.text_colour = foreground;
        style.connector.colour = foreground;
        style.marker.fill_colour = Colour::lightened_colour(Colour::BLUE);
        style.label.text_colour = foreground;
        style
    }
}
