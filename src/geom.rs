// Coordinate spaces.
// Window pixels: origin top-left, y grows downward.
// NDC: [-1,1] on both axes, origin at the centre, y grows upward.
// The scene is drawn into a centred square viewport so strokes keep a 1:1 aspect.

/// Map a window pixel position to normalized device coordinates.
/// Uses the full window size, so (0,0) -> (-1,1) and (width,height) -> (1,-1).
pub fn normalize(px: f32, py: f32, width: usize, height: usize) -> (f32, f32) {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    (px / w * 2.0 - 1.0, 1.0 - py / h * 2.0)
}

/// Largest centred square that fits the window, in window pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: usize,    // left edge
    pub y: usize,    // top edge
    pub side: usize,
}

impl Viewport {
    /// The bottom margin gets the smaller half of an odd leftover, so `y` (a top
    /// offset) rounds up.
    pub fn fit_square(width: usize, height: usize) -> Self {
        let side = width.min(height);
        let bottom = (height - side) / 2;
        Self { x: (width - side) / 2, y: height - side - bottom, side }
    }

    /// NDC -> window pixel (fractional). (-1,1) lands on the viewport's top-left corner.
    pub fn to_pixel(&self, x: f32, y: f32) -> (f32, f32) {
        let s = self.side as f32;
        (
            self.x as f32 + (x + 1.0) * 0.5 * s,
            self.y as f32 + (1.0 - y) * 0.5 * s,
        )
    }

    /// Length of `d` NDC units in pixels (NDC spans 2 units across the viewport).
    pub fn scale(&self, d: f32) -> f32 {
        d * self.side as f32 * 0.5
    }
}

/// Axis-aligned rectangle in NDC.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Rect {
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self { left, right, bottom, top }
    }

    /// Strict containment: points on the border are outside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.left && x < self.right && y > self.bottom && y < self.top
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [(f32, f32); 4] {
        [
            (self.left, self.top),
            (self.right, self.top),
            (self.right, self.bottom),
            (self.left, self.bottom),
        ]
    }
}
