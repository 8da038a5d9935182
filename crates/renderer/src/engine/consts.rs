// SPDX-License-Identifier: MIT

//!
//! Fixed geometry and styling values
//!

/// Width of a timeline canvas (px)
pub const CANVAS_WIDTH: f64 = 800.0;

/// Height of a timeline canvas (px)
pub const CANVAS_HEIGHT: f64 = 200.0;

pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 30.0;
pub const MARGIN_LEFT: f64 = 50.0;

/// How far above the centre line the date labels sit (px)
pub const LABEL_Y_OFFSET: f64 = 15.0;

/// The number of axis ticks aimed for
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Marker circle radius (px)
pub const MARKER_RADIUS: f64 = 8.0;

/// Thickness of the line joining the markers (px)
pub const CONNECTOR_THICKNESS: f64 = 2.0;

/// Length of the axis tick marks (px)
pub const TICK_SIZE: f64 = 6.0;

/// Gap between a tick mark and its label (px)
pub const TICK_PADDING: f64 = 3.0;

/// Font size of the axis tick labels (px)
pub const TICK_FONT_SIZE: f64 = 10.0;

/// Font size of the date labels (px)
pub const LABEL_FONT_SIZE: f64 = 12.0;
