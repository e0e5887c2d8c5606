//! The cursor follower
//!
//! Seeks the pointer with distance-proportional speed (capped), damps to rest
//! inside a small dead zone, faces its direction of travel, and sheds dust
//! while running. Velocities are in pixels per frame, like the runner's.

use crate::anim::{FramePlayer, MotionState};
use mote_particles::{DebrisPool, DemoRng};
use mote_runtime::{DemoSystem, InputState};

/// Keeps the character fully visible at the surface edge
const EDGE_MARGIN: f32 = 30.0;
/// Inside this distance the follower damps instead of seeking
const DEAD_ZONE: f32 = 5.0;
/// Seek speed is a tenth of the distance, capped here
const MAX_SPEED: f32 = 15.0;
/// Dust spawn probability per running frame
const DUST_CHANCE: f32 = 0.3;

pub struct CursorFollower {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// 1 = facing right, -1 = facing left
    pub direction: f32,
    pub anim: FramePlayer,

    target_x: f32,
    target_y: f32,
    width: f32,
    height: f32,
    dust: DebrisPool,
    rng: DemoRng,
}

impl CursorFollower {
    pub fn new(width: f32, height: f32, seed: u32) -> Self {
        Self {
            x: width / 2.0,
            y: height / 2.0,
            vx: 0.0,
            vy: 0.0,
            direction: 1.0,
            anim: FramePlayer::new(),
            target_x: width / 2.0,
            target_y: height / 2.0,
            width,
            height,
            dust: DebrisPool::new(128),
            rng: DemoRng::new(seed),
        }
    }

    /// Aim at a new pointer position (surface pixels)
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target_x = x;
        self.target_y = y;
    }

    /// Track a container resize; the current position is re-clamped next step
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    pub fn dust(&self) -> &DebrisPool {
        &self.dust
    }

    /// Advance one frame. `dt` drives frame playback and dust life; movement
    /// itself is frame-stepped like the original.
    pub fn step(&mut self, dt: f64) {
        let dx = self.target_x - self.x;
        let dy = self.target_y - self.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance > DEAD_ZONE {
            let speed = (distance * 0.1).min(MAX_SPEED);
            self.vx = dx / distance * speed;
            self.vy = dy / distance * speed;

            if self.vx.abs() > 0.5 {
                self.direction = if self.vx > 0.0 { 1.0 } else { -1.0 };
            }
        } else {
            self.vx *= 0.9;
            self.vy *= 0.9;
        }

        self.x += self.vx;
        self.y += self.vy;
        self.x = self.x.clamp(EDGE_MARGIN, self.width - EDGE_MARGIN);
        self.y = self.y.clamp(EDGE_MARGIN, self.height - EDGE_MARGIN);

        self.anim.set_state(MotionState::select(self.speed()));
        self.anim.advance(dt);

        if self.anim.state() == MotionState::Run && self.rng.chance(DUST_CHANCE) {
            self.spawn_dust();
        }
        self.dust.integrate(0.1, (dt * 2.0) as f32);
    }

    /// Kick up one dust puff behind the trailing foot
    fn spawn_dust(&mut self) {
        if let Some(p) = self.dust.spawn() {
            p.position = [self.x - self.direction * 10.0, self.y + 20.0];
            p.velocity = [
                -self.direction * self.rng.range(1.0, 3.0),
                -self.rng.range(1.0, 3.0),
            ];
            p.size = self.rng.range(2.0, 6.0);
            p.color = [1.0, 1.0, 1.0, 0.5];
        }
    }
}

impl DemoSystem for CursorFollower {
    fn update(&mut self, input: &InputState, dt: f64) {
        let (px, py) = input.pointer_position;
        self.set_target(px as f32, py as f32);
        self.step(dt);
    }

    fn name(&self) -> &str {
        "motion"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn follower() -> CursorFollower {
        CursorFollower::new(800.0, 450.0, 42)
    }

    #[test]
    fn follower_reaches_its_target() {
        let mut f = follower();
        f.set_target(600.0, 300.0);
        for _ in 0..300 {
            f.step(DT);
        }
        assert!((f.x - 600.0).abs() < DEAD_ZONE + 1.0);
        assert!((f.y - 300.0).abs() < DEAD_ZONE + 1.0);
    }

    #[test]
    fn follower_damps_to_idle_at_rest() {
        let mut f = follower();
        f.set_target(f.x, f.y);
        f.vx = 3.0;
        for _ in 0..200 {
            f.step(DT);
        }
        assert!(f.speed() < 0.01);
        assert_eq!(f.anim.state(), MotionState::Idle);
    }

    #[test]
    fn follower_stays_in_bounds() {
        let mut f = follower();
        f.set_target(-500.0, 10_000.0);
        for _ in 0..500 {
            f.step(DT);
            assert!(f.x >= EDGE_MARGIN && f.x <= 800.0 - EDGE_MARGIN);
            assert!(f.y >= EDGE_MARGIN && f.y <= 450.0 - EDGE_MARGIN);
        }
    }

    #[test]
    fn follower_faces_travel_direction() {
        let mut f = follower();
        f.set_target(0.0, f.y);
        f.step(DT);
        assert_eq!(f.direction, -1.0);

        f.set_target(800.0, f.y);
        f.step(DT);
        assert_eq!(f.direction, 1.0);
    }

    #[test]
    fn distant_target_selects_run() {
        let mut f = follower();
        f.set_target(f.x + 400.0, f.y);
        f.step(DT);
        // distance 400 -> capped speed 15, well past the run threshold
        assert_eq!(f.anim.state(), MotionState::Run);
    }

    #[test]
    fn dust_only_appears_while_running() {
        let mut f = follower();
        // Idle at the center: no dust ever
        for _ in 0..100 {
            f.step(DT);
        }
        assert_eq!(f.dust().alive_count(), 0);

        // Chase a far target: dust shows up within a few frames
        f.set_target(750.0, 400.0);
        let mut seen = 0;
        for _ in 0..30 {
            f.step(DT);
            seen = seen.max(f.dust().alive_count());
        }
        assert!(seen > 0);
    }
}
