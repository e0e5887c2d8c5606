//! Spawn scheduling for obstacles and collectibles
//!
//! Obstacles spawn on a timer whose period shrinks as the speed scalar grows.
//! The original formula divided the base period by `speed / base_speed` and
//! could reach a zero modulus once speed outgrew it; the period is clamped to
//! one tick instead.

use crate::config::RunnerConfig;
use crate::entity::{Collectible, CollectibleKind, Obstacle, ObstacleKind};
use mote_particles::DemoRng;

/// What one spawn check produced
#[derive(Debug, Default)]
pub struct SpawnBatch {
    pub obstacle: Option<Obstacle>,
    pub collectible: Option<Collectible>,
}

/// Rolls spawn timers against the current tick count and speed
pub struct Spawner {
    rng: DemoRng,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: DemoRng::new(seed),
        }
    }

    /// Obstacle timer period for the current speed, clamped to >= 1 tick
    pub fn obstacle_period(config: &RunnerConfig, speed: f32) -> u64 {
        let period = (config.spawn_rate as f32 * config.base_speed / speed.max(0.001)) as u64;
        period.max(1)
    }

    /// Check both timers for tick `frame`, spawning at the right edge
    pub fn tick(&mut self, frame: u64, speed: f32, config: &RunnerConfig) -> SpawnBatch {
        let mut batch = SpawnBatch::default();

        if frame % Self::obstacle_period(config, speed) == 0
            && self.rng.chance(config.obstacle_chance)
        {
            let kind = ObstacleKind::ALL[self.rng.index(ObstacleKind::ALL.len())];
            let (_, height) = kind.size();
            batch.obstacle = Some(Obstacle {
                x: config.surface_width + 50.0,
                y: config.ground_y - height + 30.0,
                kind,
            });
        }

        if frame % config.collectible_interval as u64 == 0
            && self.rng.chance(config.collectible_chance)
        {
            let kind = CollectibleKind::ALL[self.rng.index(CollectibleKind::ALL.len())];
            batch.collectible = Some(Collectible {
                x: config.surface_width + 50.0,
                y: config.ground_y - self.rng.range(0.0, 100.0) - 50.0,
                kind,
            });
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::COLLECTIBLE_SIZE;

    #[test]
    fn period_at_base_speed_is_spawn_rate() {
        let config = RunnerConfig::default();
        assert_eq!(
            Spawner::obstacle_period(&config, config.base_speed),
            config.spawn_rate as u64
        );
    }

    #[test]
    fn period_shrinks_with_speed() {
        let config = RunnerConfig::default();
        let slow = Spawner::obstacle_period(&config, config.base_speed);
        let fast = Spawner::obstacle_period(&config, config.base_speed * 4.0);
        assert!(fast < slow);
    }

    #[test]
    fn period_never_reaches_zero() {
        let config = RunnerConfig::default();
        // The original formula would compute a modulus of 0 here
        assert_eq!(Spawner::obstacle_period(&config, 1.0e6), 1);
        // Speed 0 (pre-start) must not divide by zero either
        assert!(Spawner::obstacle_period(&config, 0.0) >= 1);
    }

    #[test]
    fn guaranteed_spawn_lands_at_right_edge() {
        let config = RunnerConfig {
            obstacle_chance: 1.0,
            collectible_chance: 1.0,
            ..RunnerConfig::default()
        };
        let mut spawner = Spawner::new(7);
        // spawn_rate ticks in, both timers elapse (400 is a multiple of 80 and 100)
        let batch = spawner.tick(400, config.base_speed, &config);

        let obstacle = batch.obstacle.expect("obstacle timer elapsed");
        assert_eq!(obstacle.x, config.surface_width + 50.0);
        assert!(obstacle.y <= config.ground_y);

        let collectible = batch.collectible.expect("collectible timer elapsed");
        assert_eq!(collectible.x, config.surface_width + 50.0);
        // Collectibles float in the band above the ground
        assert!(collectible.y < config.ground_y - 25.0);
        assert!(collectible.y >= config.ground_y - 150.0 - COLLECTIBLE_SIZE);
    }

    #[test]
    fn zero_chance_never_spawns() {
        let config = RunnerConfig {
            obstacle_chance: 0.0,
            collectible_chance: 0.0,
            ..RunnerConfig::default()
        };
        let mut spawner = Spawner::new(7);
        for frame in 1..2000 {
            let batch = spawner.tick(frame, config.base_speed, &config);
            assert!(batch.obstacle.is_none());
            assert!(batch.collectible.is_none());
        }
    }
}
