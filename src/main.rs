//! Flappy Gates headless host
//!
//! Drives a session without a window: an autopilot presses the action key,
//! and frames are printed as text or JSON.
//!
//! Usage: flappy-gates [--settings PATH] [--ticks N] [--every N] [--json]

use std::process::ExitCode;

use flappy_gates::platform::Driver;
use flappy_gates::renderer::TextRenderer;
use flappy_gates::sim::{GameEvent, GameState, InputEvent};
use flappy_gates::{Result, Settings};

struct Options {
    settings: Option<String>,
    ticks: u64,
    every: u64,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            settings: None,
            ticks: 600,
            every: 60,
            json: false,
        }
    }
}

fn parse_args() -> Option<Options> {
    let mut options = Options::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--settings" => options.settings = Some(args.next()?),
            "--ticks" => options.ticks = args.next()?.parse().ok()?,
            "--every" => options.every = args.next()?.parse().ok()?,
            "--json" => options.json = true,
            _ => return None,
        }
    }
    options.every = options.every.max(1);
    Some(options)
}

/// Flap when sinking below the gap of the next obstacle
fn autopilot(state: &GameState) -> bool {
    let avatar = &state.avatar;
    let target = state
        .obstacles
        .iter()
        .find(|o| o.right() >= avatar.pos.x)
        .map(|o| o.gap_y + o.gap_height - avatar.size - 20.0)
        .unwrap_or(state.playfield.height_f32() / 2.0);
    avatar.pos.y > target && avatar.vel >= 0.0
}

fn run(options: &Options) -> Result<()> {
    let settings = match &options.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let mut driver = Driver::new(&settings)?;
    let mut renderer = TextRenderer::default();
    let mut best = 0;

    for _ in 0..options.ticks {
        if driver.state().is_game_over() || autopilot(driver.state()) {
            driver.push_event(InputEvent::Flap);
        }
        for event in driver.step() {
            match event {
                GameEvent::GameOver { score } => {
                    best = best.max(score);
                    log::info!("Run ended at tick {} with score {}", driver.ticks(), score);
                }
                GameEvent::ObstaclePassed { score, .. } => log::debug!("Score {}", score),
                _ => {}
            }
        }

        if driver.ticks() % options.every == 0 {
            if options.json {
                println!("{}", driver.view().to_json()?);
            } else {
                print!("{}", driver.render(&mut renderer));
            }
        }
    }

    best = best.max(driver.state().score);
    log::info!("Finished {} ticks, best score {}", driver.ticks(), best);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Flappy Gates (headless) starting...");

    let Some(options) = parse_args() else {
        eprintln!("usage: flappy-gates [--settings PATH] [--ticks N] [--every N] [--json]");
        return ExitCode::FAILURE;
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
