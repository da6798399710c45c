// Vector Draw: a freehand sketchpad.
// • Hold Left Mouse and drag: draws a black stroke.
// • Click the square button top-left: switches between DRAW and ERASE.
// • In ERASE, dragging deletes committed points inside the grey circle.
// • ESC or closing the window quits.

mod config;
mod draw;
mod error;
mod geom;
mod input;
mod render;
mod scene;
mod types;

use config::Args;
use draw::{Canvas, Drawer, draw_text_5x7};
use error::Error;
use input::InputEvent;
use render::render_scene;
use scene::{Scene, TOGGLE_BUTTON};
use std::time::{Duration, Instant};
use tracing::{error, info, trace};
use types::FrameBuffer;

fn configure_tracing(level: Option<tracing::Level>) {
    let max_level = level.unwrap_or(if cfg!(debug_assertions) {
        tracing::Level::TRACE
    } else {
        tracing::Level::INFO
    });
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(max_level)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install tracing subscriber: {e}");
    }
}

fn main() {
    let args = match Args::load(std::env::args_os()) {
        Ok(Some(args)) => args,
        Ok(None) => return,
        Err(e) => {
            configure_tracing(None);
            error!("{e}");
            std::process::exit(-1);
        }
    };
    configure_tracing(args.log_level);

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(-1);
    }
}

fn run(args: &Args) -> Result<(), Error> {

    /* --- Window + scene setup ---
       Visual: an empty white canvas with the mode button in the corner. */
    let mut drawer = Drawer::new(&args.title, args.width, args.height, args.fps)?;
    let (w, h) = drawer.size();
    let mut scene = Scene::new(w, h, args.erase_radius);
    let mut screen = FrameBuffer::new(w, h, 0x00FF_FFFF);
    info!(width = w, height = h, erase_radius = args.erase_radius, "window open");

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Inputs: one event at a time, in the order they happened. */
        for event in drawer.poll_events() {
            if let InputEvent::Resized { width, height } = event {
                screen.resize(width, height);
            }
            input::handle(&mut scene, event);
        }

        /* 2) Redraw everything from the scene. */
        render_scene(&scene, &mut Canvas::new(&mut screen, scene.viewport));

        /* 3) Mode label just right of the button. */
        let (lx, ly) = scene.viewport.to_pixel(TOGGLE_BUTTON.right + 0.03, TOGGLE_BUTTON.top);
        let label_y = ly as i32 + (scene.viewport.scale(TOGGLE_BUTTON.top - TOGGLE_BUTTON.bottom) as i32 - 7) / 2;
        draw_text_5x7(&mut screen, lx as i32, label_y, scene.mode.label(), 0x0000_0000);

        /* 4) Present. */
        drawer.present(&screen)?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let fps = frames_this_second as f32 / now.duration_since(last_fps_time).as_secs_f32();
            trace!(fps = %format!("{fps:.1}"), points = scene.points.len(), "frame stats");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!(points = scene.points.len(), "window closed");
    Ok(())
}
