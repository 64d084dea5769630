use std::io::{self, BufRead};
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use easel_canvas::{Canvas, CanvasConfig, ClickEvent, Color, LoggingConfig, Point, init_logging};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    banner();

    // The click handler is installed before the canvas exists, so it reaches
    // the handle through a shared slot filled right after init.
    let handle: Arc<OnceLock<Canvas>> = Arc::new(OnceLock::new());

    let canvas = Canvas::init(
        CanvasConfig::new(400, 400)
            .with_title("easel demo")
            .on_click({
                let handle = Arc::clone(&handle);
                move |event| stamp_circle(&handle, event)
            }),
    )
    .context("canvas bring-up failed")?;

    if handle.set(canvas.clone()).is_err() {
        log::warn!("click handler was already wired");
    }

    showcase(&canvas);
    canvas.render();
    thread::sleep(Duration::from_secs(2));

    canvas.clear();
    sweep(&canvas);

    println!("Click the canvas to stamp circles. Press Enter to quit.");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("stdin read failed")?;

    Ok(())
}

fn banner() {
    println!();
    println!("  ╔══════════════════════════════════════╗");
    println!("  ║            EASEL  DEMO               ║");
    println!("  ║   scene list  ·  wgpu presentation   ║");
    println!("  ╚══════════════════════════════════════╝");
    println!();
}

/// Left press stamps a small circle, right press a large one, any other
/// button a dot. Runs on the UI thread.
fn stamp_circle(handle: &OnceLock<Canvas>, event: ClickEvent) {
    let Some(canvas) = handle.get() else {
        return;
    };

    let radius = if event.is_left() {
        25.0
    } else if event.is_right() {
        50.0
    } else {
        10.0
    };
    canvas.draw_circle(
        event.position,
        radius,
        1.0,
        Some(Color::BLUE),
        Some(Color::LIGHT_GRAY),
    );
    canvas.render();
}

/// One of everything.
fn showcase(canvas: &Canvas) {
    canvas.draw_line(
        Point::new(20.0, 20.0),
        Point::new(380.0, 20.0),
        2.0,
        Some(Color::RED),
    );
    canvas.draw_line(Point::new(20.0, 30.0), Point::new(380.0, 30.0), 1.0, None);

    canvas.draw_rectangle(
        Point::new(40.0, 60.0),
        Point::new(200.0, 160.0),
        2.0,
        None,
        Some(Color::YELLOW),
    );
    canvas.draw_rectangle(
        Point::new(60.0, 80.0),
        Point::new(180.0, 140.0),
        1.0,
        Some(Color::DARK_GRAY),
        None,
    );

    canvas.draw_ellipse(
        Point::new(300.0, 110.0),
        60.0,
        35.0,
        2.0,
        Some(Color::GREEN),
        None,
    );
    canvas.draw_circle(
        Point::new(300.0, 110.0),
        20.0,
        1.0,
        None,
        Some(Color::ORANGE),
    );

    canvas.draw_polygon(
        &[
            Point::new(80.0, 220.0),
            Point::new(160.0, 200.0),
            Point::new(200.0, 280.0),
            Point::new(120.0, 300.0),
        ],
        2.0,
        Some(Color::MAGENTA),
        Some(Color::CYAN),
    );

    canvas.draw_text(
        Point::new(40.0, 330.0),
        "Click anywhere to stamp circles.",
        16.0,
        None,
    );
}

/// Horizontal lines marching down the canvas, one synchronous frame each.
fn sweep(canvas: &Canvas) {
    for step in 0..12 {
        let y = 30.0 + f64::from(step) * 30.0;
        canvas.draw_line(Point::new(20.0, y), Point::new(380.0, y), 1.5, Some(Color::BLUE));
        canvas.render();
        thread::sleep(Duration::from_millis(150));
    }
}
