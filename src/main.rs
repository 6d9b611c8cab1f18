//! Breakout entry point
//!
//! Runs the simulation headless with the autopilot, one tick per frame, and
//! resets whenever the ball is lost.

use std::path::PathBuf;

use clap::Parser;

use breakout::Settings;
use breakout::platform::SharedInput;
use breakout::renderer::{AsciiRenderer, Renderer};
use breakout::sim::{GameEvent, GameState, TickOutcome, tick};

#[derive(Debug, Parser)]
#[command(name = "breakout", about = "Headless Breakout demo")]
struct Args {
    /// JSON settings file (defaults are used if missing or invalid)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Print a text frame every N ticks (0 = never)
    #[arg(long, default_value_t = 0)]
    frame_every: u64,

    /// Print the final game state as JSON
    #[arg(long)]
    dump_state: bool,
}

fn load_settings(path: Option<&PathBuf>) -> Settings {
    let Some(path) = path else {
        return Settings::default();
    };
    match Settings::load(path) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Using default settings: {e}");
            Settings::default()
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Breakout (headless) starting...");

    let settings = load_settings(args.settings.as_ref());
    let mut state = GameState::new(settings);
    let input = SharedInput::new();
    input.set_idle_mode(true);
    let mut renderer = AsciiRenderer::new();

    let mut losses = 0u32;
    let mut destroyed = 0usize;

    for frame in 1..=args.ticks {
        let outcome = tick(&mut state, &input.snapshot());

        for event in &state.events {
            match event {
                GameEvent::BrickDestroyed { .. } => destroyed += 1,
                GameEvent::Launched => log::debug!("Launched at frame {frame}"),
                _ => {}
            }
        }

        if args.frame_every > 0 && frame % args.frame_every == 0 {
            renderer.render(&state);
            println!("frame {frame}\n{}\n", renderer.frame());
        }

        if outcome == TickOutcome::Lost {
            losses += 1;
            state.reset();
        }

        if state.grid.is_cleared() {
            log::info!("All breakable bricks cleared at frame {frame}");
            break;
        }
    }

    log::info!(
        "Done: {destroyed} bricks destroyed, {losses} balls lost, {} bricks left",
        state.grid.breakable_count()
    );

    if args.dump_state {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize state: {e}"),
        }
    }
}
