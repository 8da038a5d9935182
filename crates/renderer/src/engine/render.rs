// SPDX-License-Identifier: MIT

//!
//! Drawing a [`Layout`] onto a [`Surface`]
//!

use crate::{
    AxisOut, AxisStyle, CircleOut, Layout, LineOut, Point, Surface, TextAnchor, TextBaseline,
    TextOut, TickOut, TimelineStyle,
};

/// Clear the surface and draw the layout in the default style
pub fn render<S: Surface + ?Sized>(layout: &Layout, surface: &mut S) {
    render_styled(layout, &TimelineStyle::default(), surface);
}

/// Clear the surface and draw the layout: the axis, the line joining the
/// markers, the markers, and then the date labels
pub fn render_styled<S: Surface + ?Sized>(layout: &Layout, style: &TimelineStyle, surface: &mut S) {
    surface.clear();

    surface.draw_axis(&axis_for_drawing(layout, &style.axis));

    surface.draw_line(&LineOut {
        from: layout.start_marker(),
        to: layout.end_marker(),
        style: style.connector,
    });

    for centre in [layout.start_marker(), layout.end_marker()] {
        surface.draw_circle(&CircleOut {
            centre,
            radius: style.marker.radius,
            fill_colour: style.marker.fill_colour,
        });
    }

    for label in [&layout.start_label, &layout.end_label] {
        surface.draw_text(&TextOut {
            position: label.position,
            text: label.text.clone(),
            colour: style.label.text_colour,
            font_size: style.label.font_size,
            bold: style.label.bold,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Alphabetic,
        });
    }
}

/// The axis path hangs outer ticks off both ends of the baseline, and each
/// tick label hangs below its mark
fn axis_for_drawing(layout: &Layout, style: &AxisStyle) -> AxisOut {
    let y = layout.axis.y;
    let (left, right) = layout.axis.range;
    let domain_path = vec![
        Point::new(left, y + style.tick_size),
        Point::new(left, y),
        Point::new(right, y),
        Point::new(right, y + style.tick_size),
    ];

    let ticks = layout
        .axis
        .ticks
        .iter()
        .map(|tick| TickOut {
            mark: LineOut {
                from: Point::new(tick.x, y),
                to: Point::new(tick.x, y + style.tick_size),
                style: style.line,
            },
            label: TextOut {
                position: Point::new(tick.x, y + style.tick_size + style.tick_padding),
                text: tick.label.clone(),
                colour: style.text_colour,
                font_size: style.font_size,
                bold: false,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Hanging,
            },
        })
        .collect();

    AxisOut {
        domain_path,
        style: style.line,
        ticks,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{CanvasSize, Colour, DisplayList, DrawCommand, Margins, compute_layout};
    use range_timeline_core::{CalendarDate, DateRange};

    fn layout(start: &str, end: &str) -> Layout {
        let range = DateRange::new(
            CalendarDate::parse(start).unwrap(),
            CalendarDate::parse(end).unwrap(),
        );
        compute_layout(&range, CanvasSize::default(), Margins::default())
    }

    #[test]
    fn draw_order() {
        let mut list = DisplayList::new();
        render(&layout("2024-01-01", "2024-12-31"), &mut list);

        let kinds: Vec<&str> = list
            .iter()
            .map(|command| match command {
                DrawCommand::Axis(_) => "axis",
                DrawCommand::Line(_) => "line",
                DrawCommand::Circle(_) => "circle",
                DrawCommand::Text(_) => "text",
            })
            .collect();
        assert_eq!(kinds, ["axis", "line", "circle", "circle", "text", "text"]);
    }

    #[test]
    fn render_twice() {
        let layout = layout("2024-01-01", "2024-12-31");
        let mut list = DisplayList::new();
        render(&layout, &mut list);
        let first = list.clone();
        render(&layout, &mut list);

        assert_eq!(list, first);
        assert_eq!(list.axis_count(), 1);
        assert_eq!(list.line_count(), 1);
        assert_eq!(list.circle_count(), 2);
        assert_eq!(list.text_count(), 2);
    }

    #[test]
    fn render_over_other_content() {
        let mut list = DisplayList::new();
        render(&layout("1900-01-01", "2000-01-01"), &mut list);
        render(&layout("2024-01-01", "2024-12-31"), &mut list);
        assert_eq!(list.len(), 6);

        let texts: Vec<&str> = list
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["Mon Jan 01 2024", "Tue Dec 31 2024"]);
    }

    #[test]
    fn markers_and_line() {
        let mut list = DisplayList::new();
        render(&layout("2024-01-01", "2024-12-31"), &mut list);

        for command in &list {
            match command {
                DrawCommand::Line(line) => {
                    assert_eq!(line.from, Point::new(50.0, 100.0));
                    assert_eq!(line.to, Point::new(780.0, 100.0));
                    assert_eq!(line.dx(), 730.0);
                    assert_eq!(line.style.thickness, 2.0);
                    assert_eq!(line.style.colour, Colour::BLACK);
                }
                DrawCommand::Circle(circle) => {
                    assert_eq!(circle.radius, 8.0);
                    assert_eq!(circle.fill_colour, Colour::BLUE);
                    assert_eq!(circle.centre.y, 100.0);
                }
                DrawCommand::Text(text) => {
                    assert_eq!(text.position.y, 85.0);
                    assert_eq!(text.anchor, TextAnchor::Middle);
                    assert_eq!(text.font_size, 12.0);
                    assert!(text.bold);
                }
                DrawCommand::Axis(_) => {}
            }
        }
    }

    #[test]
    fn axis() {
        let mut list = DisplayList::new();
        render(&layout("2024-01-01", "2024-12-31"), &mut list);

        let Some(DrawCommand::Axis(axis)) = list.commands().first() else {
            panic!("axis not drawn first");
        };
        assert_eq!(
            axis.domain_path,
            vec![
                Point::new(50.0, 176.0),
                Point::new(50.0, 170.0),
                Point::new(780.0, 170.0),
                Point::new(780.0, 176.0),
            ]
        );
        assert_eq!(axis.ticks.len(), 12);
        let first = &axis.ticks[0];
        assert_eq!(first.mark.from, Point::new(50.0, 170.0));
        assert_eq!(first.mark.to, Point::new(50.0, 176.0));
        assert_eq!(first.label.position, Point::new(50.0, 179.0));
        assert_eq!(first.label.text, "2024");
        assert_eq!(first.label.baseline, TextBaseline::Hanging);
    }

    #[test]
    fn dark_style() {
        let mut list = DisplayList::new();
        let style = TimelineStyle::dark();
        render_styled(&layout("2024-01-01", "2024-12-31"), &style, &mut list);

        for command in &list {
            if let DrawCommand::Circle(circle) = command {
                assert_eq!(circle.fill_colour, style.marker.fill_colour);
                assert_ne!(circle.fill_colour, Colour::BLUE);
            }
        }
    }
}
