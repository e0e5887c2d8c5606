//! Mote Runner - the hidden endless-runner simulation
//!
//! A side-scroller themed around software development: jump over bugs, merge
//! conflicts, and 404s; collect commits, deploys, and coffee. The simulation
//! advances by fixed ticks driven from the application clock and exposes its
//! entity state for the renderer to paint.

mod config;
mod entity;
mod game;
mod spawn;

pub use config::RunnerConfig;
pub use entity::{Cloud, CodeLine, Collectible, CollectibleKind, Obstacle, ObstacleKind, Player};
pub use game::RunnerGame;
pub use spawn::Spawner;
