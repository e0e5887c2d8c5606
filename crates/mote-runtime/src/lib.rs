//! Mote Runtime - Demo loop infrastructure
//!
//! Provides the building blocks shared by every demo:
//! - `GameClock` — fixed-timestep accumulator that drives all per-frame work
//! - `InputState` — keyboard and mouse tracking with action bindings
//! - `SessionPhase` — the IDLE → PLAYING → GAME_OVER session machine
//! - `DemoEvent` / `EventBus` — typed event queue for demo-to-app signals
//! - `PersistentStore` — TOML-backed key-value storage (high score)
//! - `KeySequenceDetector` / `MultiClickDetector` — secret activation gestures
//! - `DemoSystem` — trait for systems ticked by the demo loop

mod clock;
mod event;
mod event_bus;
mod input;
mod persist;
mod secret;
mod state;
mod system;

pub use clock::GameClock;
pub use event::DemoEvent;
pub use event_bus::EventBus;
pub use input::InputState;
pub use persist::{PersistentStore, HIGH_SCORE_KEY};
pub use secret::{KeySequenceDetector, MultiClickDetector, KONAMI_SEQUENCE};
pub use state::SessionPhase;
pub use system::DemoSystem;
