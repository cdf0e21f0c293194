//! The immediate-mode 2-D drawing target the field renders onto.

use crate::color::Rgb;
use glam::Vec2;

/// A soft halo drawn beneath a filled circle, in the circle's colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub radius: f32,
    pub opacity: f32,
}

/// Minimal drawing interface needed by [`crate::field::ParticleField::render`].
///
/// Coordinates are surface units with the origin at the top-left corner.
pub trait Surface {
    /// Clears the whole drawing region.
    fn clear(&mut self);

    /// Draws a filled circle. If `glow` is set, the halo goes underneath.
    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Rgb,
        opacity: f32,
        glow: Option<Glow>,
    );

    /// Draws a straight line between two points.
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, opacity: f32);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgb,
        opacity: f32,
        glow: Option<Glow>,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgb,
        opacity: f32,
    },
}

/// A [`Surface`] that records every call instead of drawing.
///
/// `clear` wipes earlier commands, matching what a real surface shows.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Opacities of all recorded lines, in drawing order.
    pub fn line_opacities(&self) -> Vec<f32> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { opacity, .. } => Some(*opacity),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Rgb,
        opacity: f32,
        glow: Option<Glow>,
    ) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            opacity,
            glow,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, opacity: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            opacity,
        });
    }
}
