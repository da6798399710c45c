// Window + software drawing.
// 1) A resizable window that shows the sketch and reports mouse activity as events.
// 2) A canvas that rasterizes the scene's lines, quads and circles into a pixel buffer,
//    confined to the centred square viewport.
// 3) A tiny 5x7 bitmap font for the mode label.

use crate::error::Error;
use crate::geom::Viewport;
use crate::input::InputEvent;
use crate::render::{Color, Renderer, Vertex};
use crate::types::FrameBuffer;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
    size: (usize, usize),
    pointer: PointerState,
}

/// What the left button and cursor looked like at the end of one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub pos: Option<(f32, f32)>,
    pub left_down: bool,
}

/// Turn two consecutive pointer samples into events.
/// A press is placed where the cursor was before this frame's motion, and the
/// motion follows it, so a drag that starts mid-frame keeps its first point.
/// On release the motion comes first and still extends the stroke.
pub fn pointer_events(prev: PointerState, now: PointerState) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let moved = now
        .pos
        .filter(|&p| prev.pos != Some(p))
        .map(|(x, y)| InputEvent::CursorMoved { x, y });

    match (prev.left_down, now.left_down) {
        (false, true) => {
            let (x, y) = prev.pos.or(now.pos).unwrap_or_default();
            events.push(InputEvent::Press { x, y });
            events.extend(moved);
        }
        (true, false) => {
            events.extend(moved);
            events.push(InputEvent::Release);
        }
        _ => events.extend(moved),
    }
    events
}

impl Drawer {
    /// Create a resizable window. `fps` caps how often `present` returns.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window, size: (width, height), pointer: PointerState::default() })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    /// Compare the window against last frame and report what changed.
    /// A resize always comes first; pointer ordering is `pointer_events`.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let size = self.window.get_size();
        if size != self.size {
            self.size = size;
            events.push(InputEvent::Resized { width: size.0, height: size.1 });
        }

        let now = PointerState {
            pos: self.window.get_mouse_pos(MouseMode::Clamp).or(self.pointer.pos),
            left_down: self.window.get_mouse_down(MouseButton::Left),
        };
        events.extend(pointer_events(self.pointer, now));
        self.pointer = now;

        events
    }
}

/* ---------- Software rasterizer ---------- */

/// Draws into a framebuffer, mapping NDC through the viewport.
/// Everything except `clear` is clipped to the viewport square.
pub struct Canvas<'a> {
    fb: &'a mut FrameBuffer,
    viewport: Viewport,
}

impl<'a> Canvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, viewport: Viewport) -> Self {
        Self { fb, viewport }
    }

    /// Set one pixel if it falls inside both the buffer and the viewport.
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: u32) {
        let vp = self.viewport;
        if x < vp.x as i32 || y < vp.y as i32 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= vp.x + vp.side || y >= vp.y + vp.side || x >= self.fb.width || y >= self.fb.height {
            return;
        }
        let idx = y * self.fb.width + x;
        self.fb.pixels[idx] = color;
    }

    /// A square "pen" of `width` pixels centred on (x,y).
    fn stamp(&mut self, x: i32, y: i32, width: i32, color: u32) {
        let lo = -(width / 2);
        for dy in lo..lo + width {
            for dx in lo..lo + width {
                self.put_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Bresenham between two pixel positions, stamping the pen at every step.
    /// Callers clip first, so both ends lie within a pen width of the viewport.
    fn draw_line(&mut self, (x0, y0): (i32, i32), (x1, y1): (i32, i32), width: i32, color: u32) {
        let (mut x0, mut y0) = (x0, y0);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.stamp(x0, y0, width, color);
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x0 += sx; }
            if e2 <= dx { err += dx; y0 += sy; }
        }
    }

    /// Viewport square grown by `margin` pixels on every side, as (min, max).
    fn bounds(&self, margin: f32) -> ((f32, f32), (f32, f32)) {
        let vp = self.viewport;
        let (x, y, side) = (vp.x as f32, vp.y as f32, vp.side as f32);
        ((x - margin, y - margin), (x + side + margin, y + side + margin))
    }
}

/// Liang-Barsky: the part of segment a-b inside the box, or None if it misses.
fn clip_segment(
    a: (f32, f32),
    b: (f32, f32),
    (min, max): ((f32, f32), (f32, f32)),
) -> Option<((f32, f32), (f32, f32))> {
    if ![a.0, a.1, b.0, b.1].iter().all(|v| v.is_finite()) {
        return None;
    }
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0_f32, 1.0_f32);
    for (p, q) in [
        (-dx, a.0 - min.0),
        (dx, max.0 - a.0),
        (-dy, a.1 - min.1),
        (dy, max.1 - a.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some(((a.0 + t0 * dx, a.1 + t0 * dy), (a.0 + t1 * dx, a.1 + t1 * dy)))
}

impl Renderer for Canvas<'_> {
    fn clear(&mut self, color: Color) {
        self.fb.pixels.fill(color.0);
    }

    fn polyline(&mut self, vertices: &[Vertex], width: f32) {
        let pen = width.round().max(1.0) as i32;
        let bounds = self.bounds(pen as f32 + 1.0);
        for pair in vertices.windows(2) {
            let a = self.viewport.to_pixel(pair[0].x, pair[0].y);
            let b = self.viewport.to_pixel(pair[1].x, pair[1].y);
            let Some((a, b)) = clip_segment(a, b, bounds) else {
                continue;
            };
            // Rounding on far-off endpoints can leave the clipped ends slightly outside.
            let ((lo_x, lo_y), (hi_x, hi_y)) = bounds;
            let floor = |(x, y): (f32, f32)| {
                (x.clamp(lo_x, hi_x).floor() as i32, y.clamp(lo_y, hi_y).floor() as i32)
            };
            self.draw_line(floor(a), floor(b), pen, pair[1].color.0);
        }
    }

    fn fill_quad(&mut self, corners: [(f32, f32); 4], color: Color) {
        let pts = corners.map(|(x, y)| self.viewport.to_pixel(x, y));
        // Scan only the part of the bounding box that overlaps the viewport.
        let ((lo_x, lo_y), (hi_x, hi_y)) = self.bounds(0.0);
        let min_x = pts.iter().map(|p| p.0).fold(f32::INFINITY, f32::min).max(lo_x).floor() as i32;
        let max_x = pts.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max).min(hi_x).ceil() as i32;
        let min_y = pts.iter().map(|p| p.1).fold(f32::INFINITY, f32::min).max(lo_y).floor() as i32;
        let max_y = pts.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max).min(hi_y).ceil() as i32;

        // A pixel is covered when its centre is on the same side of every edge.
        let inside = |cx: f32, cy: f32| {
            let mut sign = 0.0_f32;
            for i in 0..4 {
                let (ax, ay) = pts[i];
                let (bx, by) = pts[(i + 1) % 4];
                let cross = (bx - ax) * (cy - ay) - (by - ay) * (cx - ax);
                if cross != 0.0 {
                    if sign != 0.0 && cross.signum() != sign {
                        return false;
                    }
                    sign = cross.signum();
                }
            }
            true
        };

        for y in min_y..max_y {
            for x in min_x..max_x {
                if inside(x as f32 + 0.5, y as f32 + 0.5) {
                    self.put_pixel(x, y, color.0);
                }
            }
        }
    }

    fn circle_outline(&mut self, (cx, cy): (f32, f32), radius: f32, segments: usize, color: Color) {
        let segments = segments.max(3);
        let ring: Vec<Vertex> = (0..=segments)
            .map(|i| {
                let theta = std::f32::consts::TAU * (i % segments) as f32 / segments as f32;
                Vertex::new(cx + radius * theta.cos(), cy + radius * theta.sin(), color)
            })
            .collect();
        self.polyline(&ring, 1.0);
    }
}

/* ---------- 5x7 bitmap font (just the letters of the mode labels) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        _ => None,
    }
}

/// Pixel-space write with bounds check only (the HUD is not part of the scene).
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; each glyph advances 6 pixels.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}
