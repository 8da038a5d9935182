// SPDX-License-Identifier: MIT

//!
//! Points on a canvas
//!

use serde::Serialize;

/// A pixel position.  `x` grows to the right and `y` grows downwards.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Clone the point and add an offset
    pub fn with_offset(self, x_offset: f64, y_offset: f64) -> Self {
        Point {
            x: self.x + x_offset,
            y: self.y + y_offset,
        }
    }
}
