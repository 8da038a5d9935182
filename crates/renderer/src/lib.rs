// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Range Timeline project*
//!
//! This crate draws date range timelines: a bottom time axis, a line joining
//! a start and an end marker, and a date label above each marker.
//!
//! The core of the crate is a platform independent engine responsible for:
//!
//! - Mapping dates onto pixels (a linear time scale)
//! - Choosing and labelling axis ticks
//! - Computing the [`Layout`] of a timeline
//! - Rendering a layout onto any [`Surface`]
//!
//! The rest of the crate holds code for the frontends:
//!
//! - `egui` for native desktop rendering
//! - SVG for rendering to a file (or anywhere else a string can go)
//!

pub mod colour;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use engine::*;
pub use frontends::desktop_egui::RangeTimelineRendererEgui;
pub use frontends::svg::{RangeTimelineRendererSvg, SvgSurface};
