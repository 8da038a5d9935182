// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{
    CANVAS_HEIGHT, CANVAS_WIDTH, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP,
};
use serde::Serialize;

/// The size of the surface a timeline is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasSize {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

/// Space kept clear around the plotted area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: MARGIN_TOP,
            right: MARGIN_RIGHT,
            bottom: MARGIN_BOTTOM,
            left: MARGIN_LEFT,
        }
    }
}

impl Margins {
    /// The horizontal pixel range dates are mapped onto
    pub fn x_range(&self, canvas: CanvasSize) -> (f64, f64) {
        (self.left, canvas.width - self.right)
    }

    /// The y position of the axis baseline
    pub fn axis_y(&self, canvas: CanvasSize) -> f64 {
        canvas.height - self.bottom
    }
}
