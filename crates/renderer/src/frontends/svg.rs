// SPDX-License-Identifier: MIT

//!
//! The SVG frontend
//!

use crate::{
    AxisOut, CanvasSize, CircleOut, Colour, Engine, Layout, LineOut, LineStyle, Point, Surface,
    TextAnchor, TextBaseline, TextOut, TimelineStyle,
};
use log::debug;
use range_timeline_core::DateRange;

/// A [`Surface`] that builds an SVG document
#[derive(Debug, Clone)]
pub struct SvgSurface {
    canvas_size: CanvasSize,
    background: Colour,
    border: LineStyle,

    /// The drawn elements, in paint order
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(canvas_size: CanvasSize, style: &TimelineStyle) -> Self {
        Self {
            canvas_size,
            background: style.background,
            border: style.border,
            elements: Vec::new(),
        }
    }

    /// Set the background fill and border drawn behind everything else
    pub fn set_frame(&mut self, background: Colour, border: LineStyle) {
        self.background = background;
        self.border = border;
    }

    /// The complete SVG document
    pub fn to_document(&self) -> String {
        let CanvasSize { width, height } = self.canvas_size;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        svg.push('\n');
        svg.push_str(&format!(
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            self.background.to_hex(),
            self.border.colour.to_hex(),
            self.border.thickness,
        ));
        svg.push('\n');
        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn draw_axis(&mut self, axis: &AxisOut) {
        let mut group = String::from(r#"<g class="axis" fill="none">"#);
        group.push_str(&format!(
            r#"<path class="domain" d="{}" stroke="{}" stroke-width="{}"/>"#,
            path_data(&axis.domain_path),
            axis.style.colour.to_hex(),
            axis.style.thickness,
        ));
        for tick in &axis.ticks {
            group.push_str(r#"<g class="tick">"#);
            group.push_str(&line_element(&tick.mark));
            group.push_str(&text_element(&tick.label));
            group.push_str("</g>");
        }
        group.push_str("</g>");
        self.elements.push(group);
    }

    fn draw_line(&mut self, line: &LineOut) {
        self.elements.push(line_element(line));
    }

    fn draw_circle(&mut self, circle: &CircleOut) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            circle.centre.x,
            circle.centre.y,
            circle.radius,
            circle.fill_colour.to_hex(),
        ));
    }

    fn draw_text(&mut self, text: &TextOut) {
        self.elements.push(text_element(text));
    }
}

fn path_data(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command}{},{}", point.x, point.y)
        })
        .collect()
}

fn line_element(line: &LineOut) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        line.from.x,
        line.from.y,
        line.to.x,
        line.to.y,
        line.style.colour.to_hex(),
        line.style.thickness,
    )
}

fn text_element(text: &TextOut) -> String {
    let anchor = match text.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let baseline = match text.baseline {
        TextBaseline::Alphabetic => "",
        TextBaseline::Hanging => r#" dominant-baseline="hanging""#,
    };
    let weight = if text.bold { r#" font-weight="600""# } else { "" };
    format!(
        r#"<text x="{}" y="{}" fill="{}" font-family="sans-serif" font-size="{}"{weight} text-anchor="{anchor}"{baseline}>{}</text>"#,
        text.position.x,
        text.position.y,
        text.colour.to_hex(),
        text.font_size,
        escape(&text.text),
    )
}

/// Escape text for use in SVG element content
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a single timeline to an SVG document
#[derive(Debug, Clone)]
pub struct RangeTimelineRendererSvg {
    /// The underlying timeline [`Engine`]
    engine: Engine,

    /// What the engine draws on
    surface: SvgSurface,
}

impl Default for RangeTimelineRendererSvg {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeTimelineRendererSvg {
    /// Create a new SVG renderer with the default geometry and style
    pub fn new() -> Self {
        let engine = Engine::new();
        let surface = SvgSurface::new(engine.canvas_size(), &engine.style());
        Self { engine, surface }
    }

    pub fn set_date_range(&mut self, date_range: DateRange) {
        self.engine.set_date_range(date_range);
    }

    pub fn set_style(&mut self, style: TimelineStyle) {
        self.engine.set_style(style);
        self.surface.set_frame(style.background, style.border);
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.engine.layout()
    }

    /// Redraw and return the SVG document
    pub fn render(&mut self) -> String {
        debug!("Rendering SVG");
        self.engine.draw(&mut self.surface);
        self.surface.to_document()
    }
}
