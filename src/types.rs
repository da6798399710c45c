// Core types shared by the scene, the input handler and the renderers.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A buffer of `width * height` pixels, all set to `fill`.
    pub fn new(width: usize, height: usize, fill: u32) -> Self {
        Self { width, height, pixels: vec![fill; width * height] }
    }

    /// Reallocate for a new window size. Contents are not preserved.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width * height, 0);
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// A vertex of a stroke in normalized device coordinates ([-1,1] on both axes, y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    /// Drawn in the background colour when set. Input handling never sets it.
    pub eraser: bool,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, eraser: false }
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// What a drag does: lay down ink, or delete committed points under the cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Draw,
    Erase,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Draw => Mode::Erase,
            Mode::Erase => Mode::Draw,
        }
    }

    /// Short HUD label.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Draw => "DRAW",
            Mode::Erase => "ERASE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggles_back_and_forth() {
        assert_eq!(Mode::default(), Mode::Draw);
        assert_eq!(Mode::Draw.toggled(), Mode::Erase);
        assert_eq!(Mode::Erase.toggled(), Mode::Draw);
    }

    #[test]
    fn new_points_are_not_eraser_points() {
        let p = Point::new(0.25, -0.5);
        assert!(!p.eraser);
        assert!((p.distance_to(0.25, -0.5)).abs() < 1e-6);
        assert!((Point::new(0.0, 0.0).distance_to(0.3, 0.4) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn framebuffer_resize_reallocates() {
        let mut fb = FrameBuffer::new(4, 2, 0x00FF_FFFF);
        assert_eq!(fb.get(3, 1), Some(0x00FF_FFFF));
        assert_eq!(fb.get(4, 0), None);
        fb.resize(3, 3);
        assert_eq!(fb.pixels.len(), 9);
        assert_eq!(fb.get(2, 2), Some(0));
    }
}
