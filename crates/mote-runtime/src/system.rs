//! Demo system trait

use crate::input::InputState;

/// A demo that can be ticked by the application loop
///
/// Demos are plain owned values — no module-level state, no self-scheduled
/// callbacks. The application drives `update` from its single clock and calls
/// `teardown` exactly once before dropping the demo.
pub trait DemoSystem {
    /// Advance the demo by `dt` seconds using this frame's input
    fn update(&mut self, input: &InputState, dt: f64);

    /// Release anything the demo holds beyond its own memory
    fn teardown(&mut self) {}

    /// Human-readable name for this demo
    fn name(&self) -> &str;
}
