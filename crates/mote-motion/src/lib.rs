//! Mote Motion - cursor-follow demo with state-based animation
//!
//! A small character seeks the pointer. Its velocity magnitude selects one of
//! three animation states (IDLE / WALK / RUN) through fixed thresholds, each
//! state advancing sprite frames at its own rate.

mod anim;
mod follower;

pub use anim::{FramePlayer, FrameSpec, MotionState};
pub use follower::CursorFollower;
