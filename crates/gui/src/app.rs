// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Range Timeline egui desktop app
//!

use crate::Config;
use crate::app_colours::ColourTheme;
use crate::components::TimelineWidgetGui;
use crate::consts::APP_TITLE;
use eframe::App;
use eframe::egui::{CentralPanel, Context, ScrollArea, TopBottomPanel, Ui};
use range_timeline_core::TimelineNumber;
use range_timeline_gui_core::{AlertModal, Draw, Label, widget_y_spacing};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Holds both the `tx` and `rx` ends of an unbounded channel.
#[derive(Debug)]
pub struct UnboundedChannel<T> {
    pub tx: UnboundedSender<T>,
    pub rx: UnboundedReceiver<T>,
}

impl<T> From<(UnboundedSender<T>, UnboundedReceiver<T>)> for UnboundedChannel<T> {
    fn from(value: (UnboundedSender<T>, UnboundedReceiver<T>)) -> Self {
        UnboundedChannel {
            tx: value.0,
            rx: value.1,
        }
    }
}

/// All data needed for the Range Timeline (egui) desktop app
pub struct RangeTimelineApp {
    /// Saved settings
    config: Config,

    /// One widget per timeline, in timeline order
    timelines: Vec<TimelineWidgetGui>,

    /// Unbounded channel the timeline widgets use to raise alerts
    channel_alert: UnboundedChannel<String>,

    /// The alert currently shown (and any waiting behind it)
    alert: AlertModal,
}

impl RangeTimelineApp {
    /// Create a new `RangeTimelineApp` using the saved config
    pub fn new() -> Self {
        Self::with_config(Config::load_or_default())
    }

    /// Create a new `RangeTimelineApp` using the given config
    pub fn with_config(config: Config) -> Self {
        let channel_alert: UnboundedChannel<String> =
            tokio::sync::mpsc::unbounded_channel().into();
        let timelines = TimelineNumber::all()
            .into_iter()
            .map(|timeline| TimelineWidgetGui::new(timeline, channel_alert.tx.clone()))
            .collect();
        Self {
            config,
            timelines,
            channel_alert,
            alert: AlertModal::new(),
        }
    }

    /// The timeline widgets, in timeline order
    pub fn timelines(&self) -> &[TimelineWidgetGui] {
        &self.timelines
    }

    fn draw_theme_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Theme");
            let mut theme = self.config.colour_theme();
            for option in ColourTheme::ALL {
                ui.radio_value(&mut theme, option, option.label());
            }
            if theme != self.config.colour_theme() {
                info!("Colour theme changed to {theme:?}");
                self.config.set_colour_theme(theme);
                if let Err(error) = self.config.save() {
                    error!("Couldn't save config: {error}");
                }
            }
        });
    }

    fn draw_timelines(&mut self, ctx: &Context, ui: &mut Ui) {
        let style = self
            .config
            .colour_theme()
            .timeline_style(ctx.style().visuals.dark_mode);

        ui.add_space(widget_y_spacing(ui));
        Label::heading(ui, APP_TITLE);
        ui.separator();

        for timeline in &mut self.timelines {
            timeline.set_style(style);
            timeline.draw(ctx, ui);
            ui.add_space(widget_y_spacing(ui));
            ui.separator();
        }
    }

    /// Queue any alerts raised by the timeline widgets
    fn receive_alerts(&mut self) {
        while let Ok(message) = self.channel_alert.rx.try_recv() {
            debug!("Alert received: {message}");
            self.alert.push(message);
        }
    }
}

impl Default for RangeTimelineApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for RangeTimelineApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.config.colour_theme().use_theme(ctx);

        TopBottomPanel::top("theme_bar").show(ctx, |ui| {
            self.draw_theme_bar(ui);
        });

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                self.draw_timelines(ctx, ui);
            });
        });

        // Alerts raised while drawing are shown this frame
        self.receive_alerts();
        self.alert.show(ctx);
    }
}
