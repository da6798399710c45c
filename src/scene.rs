// Everything the sketchpad knows about the drawing, owned in one place.
// The input handler mutates it; the renderer only reads it.

use crate::geom::{Rect, Viewport};
use crate::types::{Mode, Point};

/// Default eraser reach in NDC units.
pub const ERASE_RADIUS: f32 = 0.1;

/// Clicking inside this rectangle flips draw/erase instead of starting a stroke.
pub const TOGGLE_BUTTON: Rect = Rect::new(-0.9, -0.6, 0.8, 0.9);

/// Small square inside the button showing the mode (filled = draw, hollow = erase).
pub const TOGGLE_INDICATOR: Rect = Rect::new(-0.88, -0.82, 0.83, 0.88);

#[derive(Debug)]
pub struct Scene {
    /// Every committed point in insertion order, drawn as one line strip.
    pub points: Vec<Point>,
    /// Points of the drag in progress. Empty unless pressed in draw mode.
    pub stroke: Vec<Point>,
    pub mode: Mode,
    pub pressed: bool,
    /// Last cursor position in NDC.
    pub cursor: (f32, f32),
    pub erase_radius: f32,
    /// Window size in pixels, used to normalize cursor positions.
    pub window: (usize, usize),
    pub viewport: Viewport,
}

impl Scene {
    pub fn new(width: usize, height: usize, erase_radius: f32) -> Self {
        Self {
            points: Vec::new(),
            stroke: Vec::new(),
            mode: Mode::Draw,
            pressed: false,
            cursor: (0.0, 0.0),
            erase_radius,
            window: (width, height),
            viewport: Viewport::fit_square(width, height),
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.mode == Mode::Draw
    }

    /// Move the in-progress stroke onto the end of the committed points.
    /// Returns how many points were committed.
    pub fn commit_stroke(&mut self) -> usize {
        let n = self.stroke.len();
        self.points.append(&mut self.stroke);
        n
    }

    /// Delete every committed point strictly closer than the erase radius to (x, y).
    /// Returns how many points were removed.
    pub fn erase_near(&mut self, x: f32, y: f32) -> usize {
        let before = self.points.len();
        let radius = self.erase_radius;
        self.points.retain(|p| p.distance_to(x, y) >= radius);
        before - self.points.len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(800, 800, ERASE_RADIUS)
    }
}
