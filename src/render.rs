// Scene rendering, independent of any window or graphics context.
// `render_scene` describes a full frame through the `Renderer` capabilities; the
// software canvas in draw.rs is the implementation the app uses.

use crate::scene::{Scene, TOGGLE_BUTTON, TOGGLE_INDICATOR};
use crate::types::Mode;

/// Packed 0x00RRGGBB, the same layout minifb expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0x00FF_FFFF);
    pub const BLACK: Color = Color(0x0000_0000);
    pub const LIGHT_GREY: Color = Color(0x00CC_CCCC); // 0.8 per channel
}

/// A polyline vertex in NDC. The segment ending at a vertex takes that vertex's colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

impl Vertex {
    pub fn new(x: f32, y: f32, color: Color) -> Self {
        Self { x, y, color }
    }
}

pub const STROKE_WIDTH: f32 = 2.0;
pub const OUTLINE_WIDTH: f32 = 1.0;
pub const CIRCLE_SEGMENTS: usize = 50;

/// What a backend must be able to draw. All coordinates are NDC.
pub trait Renderer {
    fn clear(&mut self, color: Color);
    /// Connected line strip through `vertices`, `width` in pixels.
    fn polyline(&mut self, vertices: &[Vertex], width: f32);
    /// Convex quad given as four corners in order.
    fn fill_quad(&mut self, corners: [(f32, f32); 4], color: Color);
    /// Closed outline of a circle approximated with `segments` straight edges.
    fn circle_outline(&mut self, center: (f32, f32), radius: f32, segments: usize, color: Color);
}

/// Redraw the whole scene. Nothing is cached between frames.
pub fn render_scene<R: Renderer + ?Sized>(scene: &Scene, r: &mut R) {
    r.clear(Color::WHITE);

    // All committed points form one strip, so separate strokes appear joined.
    let committed: Vec<Vertex> = scene
        .points
        .iter()
        .map(|p| {
            let color = if p.eraser { Color::WHITE } else { Color::BLACK };
            Vertex::new(p.x, p.y, color)
        })
        .collect();
    if !committed.is_empty() {
        r.polyline(&committed, STROKE_WIDTH);
    }

    if scene.pressed && scene.is_drawing() && !scene.stroke.is_empty() {
        let live: Vec<Vertex> = scene
            .stroke
            .iter()
            .map(|p| Vertex::new(p.x, p.y, Color::BLACK))
            .collect();
        r.polyline(&live, STROKE_WIDTH);
    }

    // Mode toggle button.
    r.fill_quad(TOGGLE_BUTTON.corners(), Color::LIGHT_GREY);
    r.polyline(&closed_outline(TOGGLE_BUTTON.corners(), Color::BLACK), OUTLINE_WIDTH);
    match scene.mode {
        Mode::Draw => r.fill_quad(TOGGLE_INDICATOR.corners(), Color::BLACK),
        Mode::Erase => {
            r.fill_quad(TOGGLE_INDICATOR.corners(), Color::WHITE);
            r.polyline(&closed_outline(TOGGLE_INDICATOR.corners(), Color::BLACK), OUTLINE_WIDTH);
        }
    }

    if scene.mode == Mode::Erase {
        r.circle_outline(scene.cursor, scene.erase_radius, CIRCLE_SEGMENTS, Color::LIGHT_GREY);
    }
}

fn closed_outline(corners: [(f32, f32); 4], color: Color) -> Vec<Vertex> {
    corners
        .iter()
        .chain(corners.first())
        .map(|&(x, y)| Vertex::new(x, y, color))
        .collect()
}
