// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Some configuration consts
//!

pub static OK_BUTTON_WIDTH: f32 = 80.0;
pub static ALERT_MODAL_WIDTH: f32 = 360.0;

pub static ALERT_SYMBOL: &str = "⚠";
