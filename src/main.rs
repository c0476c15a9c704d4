//! Constellation poems watchface simulator for desktop.
//!
//! Runs the animation core from `constellation-common` in an
//! embedded-graphics-simulator window. Keys:
//!
//! - `T`: toggle 12-hour / 24-hour clock
//! - close the window to quit
//!
//! Environment:
//!
//! - `CONSTELLATION_SEED`: fixed `u64` seed, otherwise derived from the time
//! - `RUST_LOG`: log filter, `info` by default

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod timing;

use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use chrono::Timelike;
use constellation_common::colors::BACKGROUND;
use constellation_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use constellation_common::{AnimationController, AnimationError, DisplaySurface, Phase, Scheduler, SeededRng};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::timing::{FRAME_TIME, WINDOW_SCALE};

const SEED_VAR: &str = "CONSTELLATION_SEED";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
    let mut window = Window::new("Constellation Poems", &output_settings);

    display.clear(BACKGROUND).ok();
    window.update(&display);

    let seed = startup_seed();
    log::info!("starting with seed {seed}");

    if let Err(e) = run(seed, &mut display, &mut window) {
        log::error!("animation failed: {e}");
        std::process::exit(1);
    }
}

/// Seed from `CONSTELLATION_SEED`, falling back to the system clock.
fn startup_seed() -> u64 {
    if let Ok(value) = std::env::var(SEED_VAR) {
        match value.trim().parse() {
            Ok(seed) => return seed,
            Err(_) => log::warn!("ignoring {SEED_VAR}={value:?}: not a u64"),
        }
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

/// Build the animation, drive it until the window closes, then tear it down.
///
/// Teardown also runs when the loop fails, before the error is returned.
fn run(
    seed: u64,
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
) -> Result<(), AnimationError> {
    let mut surface = DisplaySurface::new(display.size());
    let scheduler = Scheduler::new(SeededRng::from_seed(seed))?;
    let mut controller = AnimationController::new(scheduler);

    let start = Instant::now();
    controller.activate(0, &mut surface)?;

    let result = event_loop(&mut controller, &mut surface, display, window, start);
    let teardown = controller.teardown(&mut surface);
    result.and(teardown)
}

fn event_loop(
    controller: &mut AnimationController<SeededRng>,
    surface: &mut DisplaySurface,
    display: &mut SimulatorDisplay<Rgb565>,
    window: &mut Window,
    start: Instant,
) -> Result<(), AnimationError> {
    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if keycode == Keycode::T {
                        let format = controller.toggle_clock_format(surface)?;
                        log::info!("clock format: {format:?}");
                    }
                }
                _ => {}
            }
        }

        let now_ms = start.elapsed().as_millis() as u64;
        if let Some(phase) = controller.poll(now_ms, surface)?
            && phase == Phase::Start
        {
            log::debug!("cycle {} complete", controller.scheduler().cycles());
        }

        let now = chrono::Local::now();
        controller.on_wall_clock(now.hour(), now.minute(), surface)?;

        if surface.render(display)? {
            log::trace!("frame redrawn at {now_ms} ms");
        }
        window.update(display);

        // Frame timing
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
