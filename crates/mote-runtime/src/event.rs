//! Events emitted by demo simulations

/// A typed event pushed by a demo and drained by the application layer
#[derive(Debug, Clone, PartialEq)]
pub enum DemoEvent {
    /// A session started from the idle overlay
    SessionStarted,
    /// A session was restarted after game over
    SessionRestarted,
    /// A collectible was picked up (position in surface pixels)
    Collected { points: u32, x: f32, y: f32 },
    /// The player hit an obstacle; the session is over
    Crashed { final_score: u32 },
    /// The final score beat the stored high score
    NewHighScore(u32),
}
