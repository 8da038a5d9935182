// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Range Timeline project*
//!
//! This crate defines the basic datatypes used across the Range Timeline
//! project (renderer, desktop application, command line tools):
//!
//! - Calendar dates and date ranges
//! - Timeline numbers
//! - The input state of a timeline widget, including the validation that
//!   happens when its dates are confirmed
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod date;
mod error;
mod timeline_number;
mod widget;

pub use date::*;
pub use error::*;
pub use timeline_number::*;
pub use widget::*;
