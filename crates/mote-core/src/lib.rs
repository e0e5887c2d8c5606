//! Mote Core - Foundational types for the mote demos
//!
//! This crate provides the types every other mote crate depends on:
//! - `Vec2` - 2D vector math
//! - `Rect` - axis-aligned rectangles with the overlap test
//! - `Color` - RGBA color with hex parsing
//! - Error types and Result alias

mod error;
mod types;

pub use error::{MoteError, Result};
pub use types::{Color, Rect, Vec2};
