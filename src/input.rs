// Input handling: turns window events into scene changes.
// Only the left mouse button is reported by the window layer.

use tracing::{debug, info};

use crate::geom::{Viewport, normalize};
use crate::scene::{Scene, TOGGLE_BUTTON};
use crate::types::{Mode, Point};

/// One thing that happened to the window since the last frame.
/// Positions are window pixels (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Press { x: f32, y: f32 },
    Release,
    CursorMoved { x: f32, y: f32 },
    Resized { width: usize, height: usize },
}

pub fn handle(scene: &mut Scene, event: InputEvent) {
    match event {
        InputEvent::Press { x, y } => press(scene, x, y),
        InputEvent::Release => release(scene),
        InputEvent::CursorMoved { x, y } => cursor_moved(scene, x, y),
        InputEvent::Resized { width, height } => resized(scene, width, height),
    }
}

/// Left button down. A click on the toggle button flips the mode and adds nothing;
/// anywhere else starts a fresh stroke.
pub fn press(scene: &mut Scene, px: f32, py: f32) {
    scene.pressed = true;
    scene.stroke.clear();

    let (x, y) = normalize(px, py, scene.window.0, scene.window.1);
    scene.cursor = (x, y);

    if TOGGLE_BUTTON.contains(x, y) {
        scene.mode = scene.mode.toggled();
        info!(mode = ?scene.mode, "mode toggled");
    }
}

/// Left button up: whatever was drawn during the drag joins the committed points.
pub fn release(scene: &mut Scene) {
    scene.pressed = false;
    let n = scene.commit_stroke();
    if n > 0 {
        debug!(points = n, total = scene.points.len(), "stroke committed");
    }
}

/// Cursor motion. While pressed this either extends the stroke or erases.
pub fn cursor_moved(scene: &mut Scene, px: f32, py: f32) {
    let (x, y) = normalize(px, py, scene.window.0, scene.window.1);
    scene.cursor = (x, y);

    if !scene.pressed {
        return;
    }
    match scene.mode {
        Mode::Draw => scene.stroke.push(Point::new(x, y)),
        Mode::Erase => {
            let removed = scene.erase_near(x, y);
            if removed > 0 {
                debug!(removed, remaining = scene.points.len(), "erased points");
            }
        }
    }
}

pub fn resized(scene: &mut Scene, width: usize, height: usize) {
    scene.window = (width, height);
    scene.viewport = Viewport::fit_square(width, height);
    debug!(width, height, viewport = ?scene.viewport, "window resized");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Window pixel for an NDC point in the default 800x800 scene.
    fn px(x: f32, y: f32) -> (f32, f32) {
        ((x + 1.0) * 400.0, (1.0 - y) * 400.0)
    }

    fn press_at(scene: &mut Scene, x: f32, y: f32) {
        let (px, py) = px(x, y);
        handle(scene, InputEvent::Press { x: px, y: py });
    }

    fn move_to(scene: &mut Scene, x: f32, y: f32) {
        let (px, py) = px(x, y);
        handle(scene, InputEvent::CursorMoved { x: px, y: py });
    }

    fn assert_points(actual: &[Point], expected: &[(f32, f32)]) {
        assert_eq!(actual.len(), expected.len());
        for (p, &(x, y)) in actual.iter().zip(expected) {
            assert!((p.x - x).abs() < 1e-5 && (p.y - y).abs() < 1e-5, "{p:?} != ({x}, {y})");
            assert!(!p.eraser);
        }
    }

    #[test]
    fn press_inside_button_toggles_without_adding_points() {
        let mut scene = Scene::default();
        for (i, &(x, y)) in [(-0.75, 0.85), (-0.89, 0.81), (-0.61, 0.89)].iter().enumerate() {
            press_at(&mut scene, x, y);
            assert_eq!(scene.mode, if i % 2 == 0 { Mode::Erase } else { Mode::Draw });
            handle(&mut scene, InputEvent::Release);
            assert!(scene.points.is_empty());
            assert!(scene.stroke.is_empty());
        }
    }

    #[test]
    fn press_outside_button_starts_empty_stroke() {
        let mut scene = Scene::default();
        scene.stroke.push(Point::new(0.5, 0.5));
        press_at(&mut scene, 0.0, 0.0);
        assert!(scene.pressed);
        assert!(scene.stroke.is_empty());
        assert_eq!(scene.mode, Mode::Draw);
    }

    #[test]
    fn drag_commits_points_in_order() {
        let mut scene = Scene::default();
        scene.points.push(Point::new(-0.5, -0.5));
        press_at(&mut scene, 0.0, 0.0);
        move_to(&mut scene, 0.1, 0.2);
        move_to(&mut scene, 0.2, 0.3);
        move_to(&mut scene, 0.3, 0.1);
        assert_eq!(scene.stroke.len(), 3);
        handle(&mut scene, InputEvent::Release);

        assert!(!scene.pressed);
        assert!(scene.stroke.is_empty());
        assert_points(&scene.points, &[(-0.5, -0.5), (0.1, 0.2), (0.2, 0.3), (0.3, 0.1)]);
    }

    #[test]
    fn moves_without_press_only_track_cursor() {
        let mut scene = Scene::default();
        move_to(&mut scene, 0.5, -0.25);
        assert!(scene.stroke.is_empty());
        assert!((scene.cursor.0 - 0.5).abs() < 1e-5 && (scene.cursor.1 + 0.25).abs() < 1e-5);
    }

    #[test]
    fn erase_drag_removes_only_points_inside_radius() {
        let mut scene = Scene::default();
        scene.points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.05, 0.0),
            Point::new(0.0, -0.25),
            Point::new(0.5, 0.5),
        ];
        scene.mode = Mode::Erase;
        press_at(&mut scene, 0.9, -0.9);
        move_to(&mut scene, 0.0, 0.0);
        assert_points(&scene.points, &[(0.0, -0.25), (0.5, 0.5)]);

        move_to(&mut scene, 0.5, 0.45);
        assert_points(&scene.points, &[(0.0, -0.25)]);

        handle(&mut scene, InputEvent::Release);
        assert_points(&scene.points, &[(0.0, -0.25)]);
    }

    #[test]
    fn erase_keeps_point_on_the_boundary() {
        // 800x800 with radius 0.25: cursor at pixel (400,400) is NDC (0,0) exactly.
        let mut scene = Scene::new(800, 800, 0.25);
        scene.points = vec![Point::new(0.25, 0.0), Point::new(0.0, 0.125)];
        scene.mode = Mode::Erase;
        handle(&mut scene, InputEvent::Press { x: 0.0, y: 800.0 });
        handle(&mut scene, InputEvent::CursorMoved { x: 400.0, y: 400.0 });
        assert_eq!(scene.points, vec![Point::new(0.25, 0.0)]);
    }

    #[test]
    fn erase_mode_drag_commits_nothing() {
        let mut scene = Scene::default();
        scene.mode = Mode::Erase;
        press_at(&mut scene, 0.0, 0.0);
        move_to(&mut scene, 0.5, 0.5);
        assert!(scene.stroke.is_empty());
        handle(&mut scene, InputEvent::Release);
        assert!(scene.points.is_empty());
    }

    #[test]
    fn toggling_mid_stroke_discards_it() {
        let mut scene = Scene::default();
        press_at(&mut scene, 0.0, 0.0);
        move_to(&mut scene, 0.1, 0.1);
        move_to(&mut scene, 0.2, 0.2);
        assert_eq!(scene.stroke.len(), 2);

        press_at(&mut scene, -0.75, 0.85);
        assert_eq!(scene.mode, Mode::Erase);
        assert!(scene.stroke.is_empty());
        handle(&mut scene, InputEvent::Release);
        assert!(scene.points.is_empty());
    }

    #[test]
    fn resize_recomputes_viewport_and_normalization() {
        let mut scene = Scene::default();
        handle(&mut scene, InputEvent::Resized { width: 1200, height: 600 });
        assert_eq!(scene.viewport, Viewport { x: 300, y: 0, side: 600 });

        handle(&mut scene, InputEvent::CursorMoved { x: 1200.0, y: 600.0 });
        assert!((scene.cursor.0 - 1.0).abs() < 1e-6 && (scene.cursor.1 + 1.0).abs() < 1e-6);
    }
}
