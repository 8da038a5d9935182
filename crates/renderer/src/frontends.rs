// SPDX-License-Identifier: MIT

//!
//! Frontends that draw an [`Engine`](crate::Engine)'s timeline
//!

pub mod desktop_egui;
pub mod svg;
