// SPDX-License-Identifier: MIT

//!
//! The `range-timeline-renderer` engine
//!

mod consts;
mod layout;
mod layout_params;
mod point;
mod primitives;
mod render;
mod scale;
mod style;
mod surface;
mod ticks;

pub use consts::*;
pub use layout::*;
pub use layout_params::*;
pub use point::*;
pub use primitives::*;
pub use render::*;
pub use scale::*;
pub use style::*;
pub use surface::*;
pub use ticks::*;

use log::debug;
use range_timeline_core::DateRange;

/// The core `range-timeline-renderer` engine.  This holds one timeline's
/// geometry, style, and date range, and keeps its [`Layout`] up to date.  It
/// is shared by all frontends (e.g. the desktop and SVG frontends).
#[derive(Debug, Clone)]
pub struct Engine {
    /// The size of the surface drawn on
    canvas_size: CanvasSize,

    /// Space kept clear around the plotted area
    margins: Margins,

    /// Colours and sizes used when drawing
    style: TimelineStyle,

    /// The range being drawn (if any yet)
    date_range: Option<DateRange>,

    /// The layout of `date_range` (recomputed only when the range changes)
    layout: Option<Layout>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with the default canvas size and margins
    pub fn new() -> Self {
        Self::with_geometry(CanvasSize::default(), Margins::default())
    }

    /// Create an engine with the given canvas size and margins
    pub fn with_geometry(canvas_size: CanvasSize, margins: Margins) -> Self {
        Self {
            canvas_size,
            margins,
            style: TimelineStyle::default(),
            date_range: None,
            layout: None,
        }
    }

    /// Set the range to draw
    pub fn set_date_range(&mut self, date_range: DateRange) {
        if self.date_range == Some(date_range) {
            return;
        }
        debug!(
            "Computing layout for {} to {} ({} days)",
            date_range.start(),
            date_range.end(),
            date_range.span_days()
        );
        self.layout = Some(compute_layout(&date_range, self.canvas_size, self.margins));
        self.date_range = Some(date_range);
    }

    pub fn date_range(&self) -> Option<DateRange> {
        self.date_range
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn style(&self) -> TimelineStyle {
        self.style
    }

    pub fn set_style(&mut self, style: TimelineStyle) {
        if style != self.style {
            debug!("Timeline style changed");
            self.style = style;
        }
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    /// Redraw everything on the surface (only clearing it if there's no range
    /// yet)
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        match &self.layout {
            Some(layout) => render_styled(layout, &self.style, surface),
            None => surface.clear(),
        }
    }
}
