//! Headless demo session for the orientation cube engine.
//!
//! Usage: `viewcube [options.toml]`. Run with `RUST_LOG=debug` to watch
//! the sync and transition decisions.

use std::path::Path;

use glam::{Vec2, Vec3};
use viewcube::camera::{OrbitController, OrbitView};
use viewcube::input::{InputEvent, InputProcessor, MouseButton};
use viewcube::sync::ViewportRole;
use viewcube::{CubeCommand, Options, ViewCubeEngine, Zone};
use web_time::{Duration, Instant};

/// Simulated frame interval.
const FRAME: Duration = Duration::from_millis(16);

fn load_options() -> Options {
    let Some(arg) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&arg)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn log_cameras(engine: &ViewCubeEngine, label: &str) {
    for role in [ViewportRole::Primary, ViewportRole::OrientationCube] {
        match engine.camera(role) {
            Ok(camera) => {
                let view = camera.view();
                log::info!(
                    "{label}: {role} at {} (azimuth {:.3}, polar {:.3}, distance {:.2})",
                    view.position,
                    view.azimuthal_angle(),
                    view.polar_angle(),
                    view.distance(),
                );
            }
            Err(e) => log::warn!("{label}: {e}"),
        }
    }
}

/// Feed events through one viewport's input processor into the engine.
fn feed(
    engine: &mut ViewCubeEngine,
    input: &mut InputProcessor,
    events: &[(InputEvent, Option<Zone>)],
    now: Instant,
) {
    for (event, hovered) in events {
        for cmd in input.handle_event(*event, *hovered, now) {
            let _ = engine.execute(cmd, now);
        }
    }
}

/// Drive frames until the running transition settles.
fn run_frames(engine: &mut ViewCubeEngine, mut now: Instant) -> Instant {
    while engine.update(now) {
        now += FRAME;
    }
    now
}

fn main() {
    env_logger::init();

    let options = load_options();
    let primary = OrbitController::new(
        OrbitView::new(Vec3::new(20.0, 12.0, 30.0), Vec3::new(2.0, 0.0, 1.0)),
        &options.camera,
    );
    let mut engine = ViewCubeEngine::new(options, Some(primary));
    let mut primary_input = InputProcessor::new(ViewportRole::Primary);
    let mut cube_input = InputProcessor::new(ViewportRole::OrientationCube);
    let mut now = Instant::now();
    log_cameras(&engine, "start");

    // Drag the primary viewport; the cube follows.
    let press = InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    };
    let release = InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: false,
    };
    let mut drag =
        vec![(InputEvent::CursorMoved { x: 0.0, y: 0.0 }, None), (press, None)];
    for step in 1..=10u8 {
        let x = f32::from(step) * 6.0;
        drag.push((InputEvent::CursorMoved { x, y: x * 0.5 }, None));
    }
    drag.push((release, None));
    feed(&mut engine, &mut primary_input, &drag, now);
    log_cameras(&engine, "after drag");

    // Double-click a corner on the cube.
    let corner = Some(Zone::TopNorthEast);
    now += Duration::from_millis(200);
    let click = [(press, corner), (release, corner)];
    feed(&mut engine, &mut cube_input, &click, now);
    let again = now + Duration::from_millis(120);
    feed(&mut engine, &mut cube_input, &click, again);
    now = run_frames(&mut engine, now);
    log_cameras(&engine, "after zone");

    // Zoom the primary; direction is unchanged so the cube stays put.
    let _ = engine.execute(
        CubeCommand::Zoom {
            viewport: ViewportRole::Primary,
            delta: 2.0,
        },
        now,
    );
    let _ = engine.execute(
        CubeCommand::Pan {
            viewport: ViewportRole::Primary,
            delta: Vec2::new(30.0, -10.0),
        },
        now,
    );
    log_cameras(&engine, "after zoom and pan");

    // Two context clicks on the cube reset the primary pivot.
    let context = InputEvent::MouseButton {
        button: MouseButton::Right,
        pressed: true,
    };
    now += Duration::from_millis(500);
    feed(&mut engine, &mut cube_input, &[(context, corner)], now);
    feed(
        &mut engine,
        &mut cube_input,
        &[(context, corner)],
        now + Duration::from_millis(100),
    );
    log_cameras(&engine, "after reset");
}
