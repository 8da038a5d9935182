// SPDX-License-Identifier: MIT

//!
//! The egui frontend
//!

use crate::{
    AxisOut, DisplayList, DrawCommand, Engine, Layout, LineOut, Point, TextAnchor, TextBaseline,
    TextOut, TimelineStyle,
};
use eframe::egui::{
    Align, Align2, Color32, FontId, Painter, Pos2, Response, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use log::debug;
use range_timeline_core::DateRange;

/// How far the second pass of bold text is shifted right (px)
const FAUX_BOLD_OFFSET: f32 = 0.5;

/// The egui renderer for use in native desktop applications
#[derive(Debug, Default)]
pub struct RangeTimelineRendererEgui {
    /// The underlying timeline [`Engine`].
    engine: Engine,

    /// What the engine last drew (replayed onto the painter every frame)
    display_list: DisplayList,
}

impl RangeTimelineRendererEgui {
    /// Create a new egui renderer
    pub fn new() -> Self {
        debug!("Constructing a new egui renderer");
        Self::default()
    }

    pub fn set_date_range(&mut self, date_range: DateRange) {
        self.engine.set_date_range(date_range);
    }

    pub fn date_range(&self) -> Option<DateRange> {
        self.engine.date_range()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.engine.layout()
    }

    pub fn style(&self) -> TimelineStyle {
        self.engine.style()
    }

    pub fn set_style(&mut self, style: TimelineStyle) {
        self.engine.set_style(style);
    }

    /// Draw the timeline in an `egui` application
    pub fn draw(&mut self, ui: &mut Ui) -> Response {
        let canvas_size = self.engine.canvas_size();
        let size = Vec2::new(canvas_size.width as f32, canvas_size.height as f32);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let canvas_rect = response.rect;
        let canvas_min = canvas_rect.min.to_vec2();
        let to_pos2 = |point: Point| Pos2::new(point.x as f32, point.y as f32) + canvas_min;

        // Background and border
        let style = self.engine.style();
        painter.rect(
            canvas_rect,
            0.0,
            Color32::from(style.background),
            Stroke::new(style.border.thickness as f32, style.border.colour),
            StrokeKind::Inside,
        );

        self.engine.draw(&mut self.display_list);

        let draw_line = |line: &LineOut| {
            painter.line_segment(
                [to_pos2(line.from), to_pos2(line.to)],
                Stroke::new(line.style.thickness as f32, line.style.colour),
            );
        };

        let draw_text = |text: &TextOut| {
            let pos = to_pos2(text.position);
            let align = text_align(text.anchor, text.baseline);
            let font = FontId::proportional(text.font_size as f32);
            let colour = Color32::from(text.colour);
            painter.text(pos, align, &text.text, font.clone(), colour);
            if text.bold {
                let offset = Vec2::new(FAUX_BOLD_OFFSET, 0.0);
                painter.text(pos + offset, align, &text.text, font, colour);
            }
        };

        for command in &self.display_list {
            match command {
                DrawCommand::Axis(axis) => {
                    draw_axis_path(&painter, axis, to_pos2);
                    for tick in &axis.ticks {
                        draw_line(&tick.mark);
                        draw_text(&tick.label);
                    }
                }
                DrawCommand::Line(line) => draw_line(line),
                DrawCommand::Circle(circle) => {
                    painter.circle_filled(
                        to_pos2(circle.centre),
                        circle.radius as f32,
                        circle.fill_colour,
                    );
                }
                DrawCommand::Text(text) => draw_text(text),
            }
        }

        response
    }
}

/// Draw the axis baseline with its outer ticks
fn draw_axis_path(painter: &Painter, axis: &AxisOut, to_pos2: impl Fn(Point) -> Pos2) {
    let points = axis.domain_path.iter().copied().map(to_pos2).collect();
    painter.line(
        points,
        Stroke::new(axis.style.thickness as f32, axis.style.colour),
    );
}

/// Map text anchoring onto egui's alignment
fn text_align(anchor: TextAnchor, baseline: TextBaseline) -> Align2 {
    let horizontal = match anchor {
        TextAnchor::Start => Align::Min,
        TextAnchor::Middle => Align::Center,
        TextAnchor::End => Align::Max,
    };
    let vertical = match baseline {
        TextBaseline::Alphabetic => Align::Max,
        TextBaseline::Hanging => Align::Min,
    };
    Align2([horizontal, vertical])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alignment() {
        assert_eq!(
            text_align(TextAnchor::Middle, TextBaseline::Alphabetic),
            Align2::CENTER_BOTTOM
        );
        assert_eq!(
            text_align(TextAnchor::Middle, TextBaseline::Hanging),
            Align2::CENTER_TOP
        );
        assert_eq!(
            text_align(TextAnchor::Start, TextBaseline::Hanging),
            Align2::LEFT_TOP
        );
    }
}
