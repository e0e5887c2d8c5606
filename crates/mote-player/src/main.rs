//! Mote Player - windowed demo binary
//!
//! Runs the portfolio demo scenes: the particle hero, the motion-matching
//! follower, and a hidden runner for those who know the handshake.
//!
//! Usage:
//!   mote-player [--demo particles|motion|runner] [--text NAME] [--game]

use anyhow::{Context, Result};
use clap::Parser;
use mote_player::{DemoApp, DemoKind};
use mote_runner::RunnerConfig;
use std::path::Path;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "mote-player")]
#[command(about = "Interactive demo scenes - particles, motion matching, and a secret")]
struct Args {
    /// Scene to open on
    #[arg(long, value_enum, default_value = "particles")]
    demo: DemoKind,

    /// Headline text the particle field forms
    #[arg(long, default_value = "MOTE")]
    text: String,

    /// Reveal the hidden runner immediately
    #[arg(long)]
    game: bool,

    /// Path to a runner config TOML
    #[arg(long)]
    config: Option<String>,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            RunnerConfig::load(Path::new(path)).context("Failed to load runner config")?
        }
        None => RunnerConfig::default(),
    };

    println!("mote demos");
    println!();
    println!("Controls:");
    println!("  Mouse    - Steer the particles / the character");
    println!("  Click    - Scatter the particle field");
    println!("  Space    - Start / jump (runner)");
    println!("  R        - Restart after a crash");
    println!("  Escape   - Close the overlay / quit");
    println!();
    println!("Hint: try the classic ten-key code, or triple-click the corner.");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new(args.demo, args.text, config, args.game, args.fullscreen);
    event_loop.run_app(&mut app)?;

    Ok(())
}
