// SPDX-License-Identifier: MIT

//!
//! Colours used when drawing a timeline
//!

use eframe::egui;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors that can arise in relation to a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("`{0}` is not a hex colour (e.g. `#0000ff`)")]
    InvalidHex(String),
}

/// The `Colour` type
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl From<Colour> for egui::Color32 {
    fn from(value: Colour) -> Self {
        egui::Color32::from_rgb(value.r, value.g, value.b)
    }
}

/// Colours are written as hex strings (e.g. `"#0000ff"`)
impl Serialize for Colour {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Colour::from_hex(&string).map_err(serde::de::Error::custom)
    }
}

impl Colour {
    /// Pure black
    pub const BLACK: Colour = Colour::from_rgb(0, 0, 0);

    /// Pure white
    pub const WHITE: Colour = Colour::from_rgb(255, 255, 255);

    /// Pure blue (the marker colour)
    pub const BLUE: Colour = Colour::from_rgb(0, 0, 255);

    /// Create a colour from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex(hex_colour: &str) -> Result<Self, ColourError> {
        let invalid = || ColourError::InvalidHex(hex_colour.to_string());
        let digits = hex_colour.strip_prefix('#').unwrap_or(hex_colour);
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let digits = match digits.len() {
            6 => digits,
            8 => &digits[0..6],
            _ => return Err(invalid()),
        };

        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Colour::from_rgb(
            component(0..2)?,
            component(2..4)?,
            component(4..6)?,
        ))
    }

    /// Get a colour as RGB values
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// To get RGB as, say, #0affc3 (for SVG/CSS)
    pub fn to_hex(&self) -> String {
        // {:02x} means print as hex, requesting 2 chars (pad left with "0" if only 1 char otherwise)
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Get a lighter shade of the specified colour
    pub fn lightened_colour(colour: Colour) -> Colour {
        let old_r: f64 = colour.r.into();
        let old_g: f64 = colour.g.into();
        let old_b: f64 = colour.b.into();
        let new_r: f64 = (old_r + (0.5 * (255.0 - old_r))).round();
        let new_g: f64 = (old_g + (0.5 * (255.0 - old_g))).round();
        let new_b: f64 = (old_b + (0.5 * (255.0 - old_b))).round();
        Colour::from_rgb(new_r as u8, new_g as u8, new_b as u8)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_hex() {
        assert_eq!(Colour::from_hex("#0000ff").unwrap(), Colour::BLUE);
        assert_eq!(Colour::from_hex("0000ff").unwrap(), Colour::BLUE);
        assert_eq!(Colour::from_hex("#0000ffaa").unwrap(), Colour::BLUE);
        assert_eq!(
            Colour::from_hex("#e8f8ff").unwrap().as_rgb(),
            (0xe8, 0xf8, 0xff)
        );

        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#00f").is_err());
        assert!(Colour::from_hex("#gg0000").is_err());
        assert!(Colour::from_hex("#ééé").is_err());
    }

    #[test]
    fn to_hex() {
        assert_eq!(Colour::from_rgb(10, 255, 195).to_hex(), "#0affc3");
        assert_eq!(Colour::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn serde() {
        assert_eq!(serde_json::to_string(&Colour::BLUE).unwrap(), r##""#0000ff""##);
        let colour: Colour = serde_json::from_str(r##""#e8f8ff""##).unwrap();
        assert_eq!(colour.as_rgb(), (0xe8, 0xf8, 0xff));
        assert!(serde_json::from_str::<Colour>(r#""blue""#).is_err());
        assert!(serde_json::from_str::<Colour>("[0, 0, 255]").is_err());
    }

    #[test]
    fn style_round_trips_as_hex() {
        let json = serde_json::to_value(crate::TimelineStyle::dark()).unwrap();
        assert!(json["background"].is_string());
        let style: crate::TimelineStyle = serde_json::from_value(json).unwrap();
        assert_eq!(style, crate::TimelineStyle::dark());
    }

    #[test]
    fn lightened() {
        assert_eq!(Colour::lightened_colour(Colour::BLACK).as_rgb(), (128, 128, 128));
        assert_eq!(Colour::lightened_colour(Colour::WHITE), Colour::WHITE);
    }
}
