// SPDX-License-Identifier: MIT

//!
//! Things a timeline can be drawn on
//!

use crate::{AxisOut, CircleOut, LineOut, TextOut};
use serde::Serialize;

/// A drawing target.  Implemented by each frontend.
pub trait Surface {
    /// Remove everything drawn so far
    fn clear(&mut self);

    /// Draw the bottom axis (its path, tick marks, and tick labels)
    fn draw_axis(&mut self, axis: &AxisOut);

    /// Draw a straight line
    fn draw_line(&mut self, line: &LineOut);

    /// Draw a filled circle
    fn draw_circle(&mut self, circle: &CircleOut);

    /// Draw text
    fn draw_text(&mut self, text: &TextOut);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Axis(AxisOut),
    Line(LineOut),
    Circle(CircleOut),
    Text(TextOut),
}

/// A surface that records draw calls so they can be inspected or replayed
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn axis_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Axis(_)))
    }

    pub fn line_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Line(_)))
    }

    pub fn circle_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Circle(_)))
    }

    pub fn text_count(&self) -> usize {
        self.count(|command| matches!(command, DrawCommand::Text(_)))
    }

    fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_axis(&mut self, axis: &AxisOut) {
        self.commands.push(DrawCommand::Axis(axis.clone()));
    }

    fn draw_line(&mut self, line: &LineOut) {
        self.commands.push(DrawCommand::Line(*line));
    }

    fn draw_circle(&mut self, circle: &CircleOut) {
        self.commands.push(DrawCommand::Circle(*circle));
    }

    fn draw_text(&mut self, text: &TextOut) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }
}
