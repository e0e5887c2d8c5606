//! Mote Player — windowed application hosting the demos
//!
//! This crate provides the `DemoApp` application handler that runs the
//! particle hero scene, the motion-matching demo, and the hidden runner.

mod app;
mod hud;
mod scene;
mod typer;

pub use app::{DemoApp, DemoKind};
pub use typer::TypingEffect;
