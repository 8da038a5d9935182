// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Styling invalid inputs
//!

use crate::{ValidSynchronous, ValiditySynchronous};
use eframe::egui::{Color32, Ui};

/// Implementing types can display the validity of the data they hold.
///
/// Implementing types need only declare that they implement it.
pub trait ErrorStyle: ValidSynchronous {
    /// Tint the text inputs drawn after this call if the data is invalid
    fn set_validity_styling(&self, ui: &mut Ui) {
        if let ValiditySynchronous::Invalid(_) = self.validity_synchronous() {
            let visuals = ui.visuals_mut();
            visuals.override_text_color = Some(Color32::WHITE);
            visuals.extreme_bg_color = Color32::LIGHT_RED;
            visuals.text_edit_bg_color = Some(Color32::LIGHT_RED);
        }
    }
}
