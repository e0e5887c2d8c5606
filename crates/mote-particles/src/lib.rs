//! Mote Particles - particle machinery shared by the demos
//!
//! Provides:
//! - `DemoRng` — xorshift32 PRNG, deterministic per seed
//! - `DebrisPool` — swap-remove pool for short-lived burst particles
//! - `FormationField` — text-formation particle field (scattered/target
//!   buffers, form progress, explode) plus its GPU-facing packing
//! - `glyph` — sampling of target positions from built-in glyphs or an
//!   image mask

pub mod field;
pub mod glyph;
pub mod pool;
pub mod rand;

pub use field::{FieldInstanceGpu, FieldSettings, FieldUniforms, FormationField, particle_budget};
pub use pool::{Debris, DebrisPool};
pub use rand::DemoRng;
