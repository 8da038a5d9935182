// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Themes for the Range Timeline desktop app
//!

use eframe::egui::{Context, Theme, Visuals};
use range_timeline_renderer::TimelineStyle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColourTheme {
    #[default]
    System,
    Light,
    Dark,
}

impl ColourTheme {
    /// All themes, in the order they're offered
    pub const ALL: [ColourTheme; 3] = [ColourTheme::System, ColourTheme::Light, ColourTheme::Dark];

    pub fn label(&self) -> &'static str {
        match self {
            ColourTheme::System => "System",
            ColourTheme::Light => "Light",
            ColourTheme::Dark => "Dark",
        }
    }

    /// The style to draw timelines in, given whether the GUI is currently in
    /// dark mode (only used by the system theme)
    pub fn timeline_style(&self, dark_mode: bool) -> TimelineStyle {
        match self {
            ColourTheme::Light => TimelineStyle::light(),
            ColourTheme::Dark => TimelineStyle::dark(),
            ColourTheme::System => {
                if dark_mode {
                    TimelineStyle::dark()
                } else {
                    TimelineStyle::light()
                }
            }
        }
    }

    /// Apply the theme to the GUI
    pub fn use_theme(&self, ctx: &Context) {
        match self {
            ColourTheme::System => use_system_theme(ctx),
            ColourTheme::Light => use_light_theme(ctx),
            ColourTheme::Dark => use_dark_theme(ctx),
        }
    }
}

/// Use the system theme (dark or light).  Defaults to light
fn use_system_theme(ctx: &Context) {
    match ctx.system_theme() {
        Some(Theme::Dark) => use_dark_theme(ctx),
        Some(Theme::Light) | None => use_light_theme(ctx),
    }
}

fn use_light_theme(ctx: &Context) {
    if ctx.style().visuals.dark_mode {
        ctx.style_mut(|style| style.visuals = Visuals::light());
    }
}

fn use_dark_theme(ctx: &Context) {
    if !ctx.style().visuals.dark_mode {
        ctx.style_mut(|style| style.visuals = Visuals::dark());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timeline_style() {
        assert_eq!(ColourTheme::Light.timeline_style(true), TimelineStyle::light());
        assert_eq!(ColourTheme::Dark.timeline_style(false), TimelineStyle::dark());
        assert_eq!(ColourTheme::System.timeline_style(false), TimelineStyle::light());
        assert_eq!(ColourTheme::System.timeline_style(true), TimelineStyle::dark());
    }

    #[test]
    fn labels() {
        let labels: Vec<&str> = ColourTheme::ALL.iter().map(ColourTheme::label).collect();
        assert_eq!(labels, ["System", "Light", "Dark"]);
    }
}
