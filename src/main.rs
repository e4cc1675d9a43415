use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dyeflow::cli::CliArgs;
use dyeflow::config::{self, Config};
use dyeflow::input::PointerDrag;
use dyeflow::physics;
use dyeflow::renderer::{self, RenderConfig};

const WINDOW_TITLE: &str = "dyeflow";

#[derive(Debug, Error)]
enum DriverError {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = CliArgs::parse();
    let cfg = config::load(args.config.as_deref());

    if args.headless {
        physics::run_headless(&cfg, args.steps, args.log_every);
        return ExitCode::SUCCESS;
    }

    match run_gui(&cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_gui(cfg: &Config) -> Result<(), DriverError> {
    let mut solver = physics::create_solver(&cfg.physics);
    let render_cfg = RenderConfig::new(
        cfg.display.window_size,
        solver.size(),
        cfg.display.display_max,
        cfg.display.palette,
    );
    let size = render_cfg.frame_size;

    let mut window = Window::new(WINDOW_TITLE, size, size, WindowOptions::default())?;
    window.set_target_fps(cfg.display.target_fps);
    info!(size, grid = solver.size(), "window opened");

    let mut framebuf = vec![0u32; render_cfg.pixel_count()];
    let mut drag = PointerDrag::new();
    let mut last_pos: Option<(i32, i32)> = None;
    let mut frame_count = 0u32;
    let mut last_fps_time = Instant::now();

    while window.is_open() {
        if window.is_key_pressed(Key::Escape, KeyRepeat::No) || window.is_key_pressed(Key::Q, KeyRepeat::No) {
            break;
        }

        // --- Pointer handling ---
        let pos = window
            .get_mouse_pos(MouseMode::Pass)
            .map(|(x, y)| (x.floor() as i32, y.floor() as i32));
        let down = window.get_mouse_down(MouseButton::Left);
        match (down, drag.is_active(), pos) {
            (true, false, Some((x, y))) => drag.press(x, y),
            (true, true, Some((x, y))) if last_pos != Some((x, y)) => {
                if let Some(injection) = drag.drag(x, y, size, solver.size(), &cfg.input) {
                    injection.apply(&mut solver);
                }
            }
            (false, true, _) => drag.release(),
            _ => {}
        }
        last_pos = pos;

        // --- Physics ---
        for _ in 0..cfg.display.steps_per_frame {
            solver.step();
        }
        if cfg.input.fade > 0.0 {
            solver.fade(cfg.input.fade);
        }

        renderer::render_into(&mut framebuf, &solver, &render_cfg);
        window.update_with_buffer(&framebuf, size, size)?;

        frame_count += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            window.set_title(&format!("{WINDOW_TITLE} - {frame_count} fps"));
            frame_count = 0;
            last_fps_time = now;
        }
    }

    info!("window closed");
    Ok(())
}
