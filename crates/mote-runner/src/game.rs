//! The runner game loop
//!
//! `tick()` advances the simulation by one fixed step, consuming the intent
//! flags captured since the last tick. Entity removal is immediate: the
//! obstacle, collectible, and debris lists never hold a dead entry across a
//! tick boundary.

use crate::config::RunnerConfig;
use crate::entity::{Cloud, CodeLine, Collectible, Obstacle, Player, CODE_SNIPPETS};
use crate::spawn::Spawner;
use mote_runtime::{DemoEvent, DemoSystem, EventBus, InputState, SessionPhase};
use mote_particles::{DebrisPool, DemoRng};

/// Collectible burst color (the portfolio green)
const BURST_COLOR: [f32; 4] = [0.0, 1.0, 0.533, 1.0];
/// Debris per collectible pickup
const BURST_COUNT: usize = 8;
/// Collectibles are recycled a little past the left edge
const COLLECTIBLE_OFFSCREEN: f32 = -30.0;
/// Dodged obstacles award a flat bonus on removal
const DODGE_BONUS: u32 = 5;

/// Intent flags set by the input layer and consumed once per tick
#[derive(Debug, Default, Clone, Copy)]
struct Intents {
    start: bool,
    restart: bool,
    jump: bool,
    jump_released: bool,
}

/// The complete runner session state
pub struct RunnerGame {
    config: RunnerConfig,
    phase: SessionPhase,
    score: u32,
    high_score: u32,

    player: Player,
    obstacles: Vec<Obstacle>,
    collectibles: Vec<Collectible>,
    debris: DebrisPool,
    clouds: Vec<Cloud>,
    code_lines: Vec<CodeLine>,

    spawner: Spawner,
    rng: DemoRng,
    frame_count: u64,
    speed: f32,

    intents: Intents,
    events: EventBus,
}

impl RunnerGame {
    pub fn new(config: RunnerConfig, seed: u32) -> Self {
        let mut rng = DemoRng::new(seed ^ 0x9E37_79B9);
        let player = Player::spawn(config.ground_y);
        let speed = config.base_speed;

        let clouds = (0..5)
            .map(|_| Cloud {
                x: rng.range(0.0, config.surface_width),
                y: rng.range(30.0, 180.0),
                width: rng.range(40.0, 100.0),
                speed: rng.range(0.2, 0.7),
            })
            .collect();

        let code_lines = (0..10)
            .map(|_| CodeLine {
                x: rng.range(0.0, config.surface_width),
                y: rng.range(50.0, 250.0),
                text: CODE_SNIPPETS[rng.index(CODE_SNIPPETS.len())],
                speed: rng.range(0.5, 1.5),
                alpha: rng.range(0.05, 0.15),
            })
            .collect();

        Self {
            config,
            phase: SessionPhase::Idle,
            score: 0,
            high_score: 0,
            player,
            obstacles: Vec::new(),
            collectibles: Vec::new(),
            debris: DebrisPool::new(256),
            clouds,
            code_lines,
            spawner: Spawner::new(seed),
            rng,
            frame_count: 0,
            speed,
            intents: Intents::default(),
            events: EventBus::new(),
        }
    }

    /// Seed the high score from persistent storage at startup
    pub fn seed_high_score(&mut self, high_score: u32) {
        self.high_score = high_score;
    }

    // --- intent capture (input layer) ---

    pub fn queue_start(&mut self) {
        self.intents.start = true;
    }

    pub fn queue_restart(&mut self) {
        self.intents.restart = true;
    }

    pub fn queue_jump(&mut self) {
        self.intents.jump = true;
    }

    /// Jump key released — enables variable jump height
    pub fn release_jump(&mut self) {
        self.intents.jump_released = true;
    }

    /// Fold this frame's input into intent flags. Space starts from the idle
    /// overlay and jumps mid-session, matching the original key handling.
    pub fn apply_input(&mut self, input: &InputState) {
        if input.is_action_just_pressed("start") {
            match self.phase {
                SessionPhase::Idle => self.queue_start(),
                SessionPhase::Playing => self.queue_jump(),
                SessionPhase::GameOver => {}
            }
        }
        if input.is_action_just_pressed("restart") && self.phase.is_over() {
            self.queue_restart();
        }
        if input.is_action_just_released("jump") {
            self.release_jump();
        }
    }

    // --- simulation ---

    /// Advance one tick. Consumes the pending intents; outside `Playing` only
    /// phase transitions run.
    pub fn tick(&mut self) {
        let intents = std::mem::take(&mut self.intents);

        if intents.start && self.phase.start() {
            self.events.push(DemoEvent::SessionStarted);
        }
        if intents.restart && self.phase.restart() {
            self.reset_session();
            self.events.push(DemoEvent::SessionRestarted);
        }

        if !self.phase.is_playing() {
            return;
        }

        if intents.jump && !self.player.jumping {
            self.player.vy = self.config.jump_force;
            self.player.jumping = true;
        }
        if intents.jump_released && self.player.vy < self.config.jump_cutoff {
            self.player.vy = self.config.jump_cutoff;
        }

        self.frame_count += 1;
        self.speed += self.config.speed_increment;

        // Gravity integration, then the ground clamp
        self.player.vy += self.config.gravity;
        self.player.y += self.player.vy;
        if self.player.y >= self.config.ground_y {
            self.player.y = self.config.ground_y;
            self.player.vy = 0.0;
            self.player.jumping = false;
        }

        // Run cycle only advances on the ground
        if !self.player.jumping && self.frame_count % 5 == 0 {
            self.player.frame = (self.player.frame + 1) % 4;
        }

        let batch = self.spawner.tick(self.frame_count, self.speed, &self.config);
        if let Some(obstacle) = batch.obstacle {
            self.obstacles.push(obstacle);
        }
        if let Some(collectible) = batch.collectible {
            self.collectibles.push(collectible);
        }

        // Obstacles: scroll, collide, recycle. Collision is checked before
        // removal so a last-pixel overlap still ends the session.
        let player_rect = self.player.rect();
        let mut crashed = false;
        let mut i = 0;
        while i < self.obstacles.len() {
            self.obstacles[i].x -= self.speed;

            if player_rect.overlaps(&self.obstacles[i].rect()) {
                crashed = true;
                break;
            }

            if self.obstacles[i].x <= -self.config.removal_margin {
                self.obstacles.swap_remove(i);
                self.score += DODGE_BONUS;
            } else {
                i += 1;
            }
        }
        if crashed {
            self.game_over();
            return;
        }

        // Collectibles: scroll, pick up, recycle
        let mut i = 0;
        while i < self.collectibles.len() {
            self.collectibles[i].x -= self.speed;

            if player_rect.overlaps(&self.collectibles[i].rect()) {
                let taken = self.collectibles.swap_remove(i);
                let points = taken.kind.points();
                self.score += points;
                self.events.push(DemoEvent::Collected {
                    points,
                    x: taken.x,
                    y: taken.y,
                });
                self.spawn_burst(taken.x, taken.y);
                continue;
            }

            if self.collectibles[i].x <= COLLECTIBLE_OFFSCREEN {
                self.collectibles.swap_remove(i);
            } else {
                i += 1;
            }
        }

        self.debris.integrate(0.2, 0.03);

        for cloud in &mut self.clouds {
            cloud.x -= cloud.speed;
            if cloud.x < -cloud.width {
                cloud.x = self.config.surface_width + cloud.width;
                cloud.y = self.rng.range(30.0, 180.0);
            }
        }

        for line in &mut self.code_lines {
            line.x -= line.speed;
            if line.x < -200.0 {
                line.x = self.config.surface_width + 50.0;
                line.y = self.rng.range(50.0, 250.0);
                line.text = CODE_SNIPPETS[self.rng.index(CODE_SNIPPETS.len())];
            }
        }
    }

    fn game_over(&mut self) {
        self.phase.fail();
        self.events.push(DemoEvent::Crashed {
            final_score: self.score,
        });
        if self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(DemoEvent::NewHighScore(self.high_score));
        }
    }

    /// Clear the session back to its starting state. Background decor keeps
    /// drifting from wherever it was.
    fn reset_session(&mut self) {
        self.score = 0;
        self.player = Player::spawn(self.config.ground_y);
        self.obstacles.clear();
        self.collectibles.clear();
        self.debris.clear();
        self.frame_count = 0;
        self.speed = self.config.base_speed;
    }

    fn spawn_burst(&mut self, x: f32, y: f32) {
        for _ in 0..BURST_COUNT {
            if let Some(p) = self.debris.spawn() {
                p.position = [x, y];
                p.velocity = [self.rng.jitter(4.0), self.rng.jitter(4.0) - 3.0];
                p.size = self.rng.range(2.0, 6.0);
                p.color = BURST_COLOR;
            }
        }
    }

    // --- accessors for the renderer and HUD ---

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub fn debris(&self) -> &DebrisPool {
        &self.debris
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn code_lines(&self) -> &[CodeLine] {
        &self.code_lines
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Drain events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<DemoEvent> {
        self.events.drain()
    }
}

impl DemoSystem for RunnerGame {
    fn update(&mut self, input: &InputState, _dt: f64) {
        self.apply_input(input);
        self.tick();
    }

    fn name(&self) -> &str {
        "runner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{CollectibleKind, ObstacleKind};

    /// Config with spawning disabled and a flat speed, for deterministic runs
    fn quiet_config() -> RunnerConfig {
        RunnerConfig {
            speed_increment: 0.0,
            obstacle_chance: 0.0,
            collectible_chance: 0.0,
            surface_width: 700.0,
            ..RunnerConfig::default()
        }
    }

    fn playing_game(config: RunnerConfig) -> RunnerGame {
        let mut game = RunnerGame::new(config, 42);
        game.queue_start();
        game.tick();
        assert!(game.phase().is_playing());
        game
    }

    #[test]
    fn player_never_sinks_below_ground() {
        let mut game = playing_game(quiet_config());
        let ground = game.config().ground_y;

        for tick in 0..600 {
            if tick % 45 == 0 {
                game.queue_jump();
            }
            game.tick();
            assert!(
                game.player().y <= ground,
                "player below ground at tick {tick}"
            );
        }

        // Long after the last jump the player is back at rest
        for _ in 0..120 {
            game.tick();
        }
        assert_eq!(game.player().y, ground);
        assert_eq!(game.player().vy, 0.0);
        assert!(!game.player().jumping);
    }

    #[test]
    fn jump_consumes_intent_once() {
        let mut game = playing_game(quiet_config());
        game.queue_jump();
        game.tick();
        assert!(game.player().jumping);
        let vy_after_jump = game.player().vy;
        assert!(vy_after_jump < 0.0);

        // No queued intent: the next tick just integrates gravity
        game.tick();
        assert!(game.player().vy > vy_after_jump);
    }

    #[test]
    fn released_jump_is_clamped() {
        let mut game = playing_game(quiet_config());
        game.queue_jump();
        game.tick();
        assert!(game.player().vy < game.config().jump_cutoff);

        game.release_jump();
        game.tick();
        // Clamped to the cutoff, then one tick of gravity
        let expected = game.config().jump_cutoff + game.config().gravity;
        assert!((game.player().vy - expected).abs() < 1e-4);
    }

    #[test]
    fn obstacle_dodge_scenario() {
        // Spawned at width+50, moving 5/tick, removal at -50: gone after
        // exactly (width + 100) / 5 ticks with a +5 award.
        let config = quiet_config();
        let width = config.surface_width;
        let mut game = playing_game(config);

        // Parked above the play band so it can never collide
        game.obstacles.push(Obstacle {
            x: width + 50.0,
            y: 0.0,
            kind: ObstacleKind::Bug,
        });

        let expected_ticks = ((width + 100.0) / 5.0) as u32;
        for _ in 0..expected_ticks - 1 {
            game.tick();
        }
        assert_eq!(game.obstacles().len(), 1);
        assert_eq!(game.score(), 0);

        game.tick();
        assert!(game.obstacles().is_empty());
        assert_eq!(game.score(), DODGE_BONUS);
    }

    #[test]
    fn obstacle_collision_ends_session() {
        let mut game = playing_game(quiet_config());
        game.obstacles.push(Obstacle {
            x: game.player().x,
            y: game.config().ground_y,
            kind: ObstacleKind::Bug,
        });

        game.tick();
        assert!(game.phase().is_over());
        let events = game.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, DemoEvent::Crashed { final_score: 0 })));

        // Terminal: further ticks change nothing
        let frame = game.player().frame;
        game.queue_jump();
        game.tick();
        assert!(game.phase().is_over());
        assert_eq!(game.player().frame, frame);
    }

    #[test]
    fn collectible_awards_points_and_burst() {
        let mut game = playing_game(quiet_config());
        game.collectibles.push(Collectible {
            x: game.player().x + 10.0,
            y: game.config().ground_y + 5.0,
            kind: CollectibleKind::Deploy,
        });

        game.tick();
        assert_eq!(game.score(), 50);
        assert!(game.collectibles().is_empty());
        assert_eq!(game.debris().alive_count(), BURST_COUNT);

        let events = game.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, DemoEvent::Collected { points: 50, .. })));
    }

    #[test]
    fn score_is_monotone_within_a_session() {
        let config = RunnerConfig {
            obstacle_chance: 0.0, // nothing to crash into
            collectible_chance: 1.0,
            ..RunnerConfig::default()
        };
        let mut game = playing_game(config);
        let mut last_score = 0;
        for tick in 0..2000 {
            // Hand the player a pickup now and then so the score moves
            if tick % 250 == 0 {
                let (x, y) = (game.player().x + 5.0, game.config().ground_y + 5.0);
                game.collectibles.push(Collectible {
                    x,
                    y,
                    kind: CollectibleKind::Commit,
                });
            }
            game.tick();
            assert!(game.score() >= last_score);
            last_score = game.score();
        }
        assert!(game.score() > 0);
    }

    #[test]
    fn restart_resets_the_session() {
        let mut game = playing_game(quiet_config());
        game.score = 75;
        game.obstacles.push(Obstacle {
            x: game.player().x,
            y: game.config().ground_y,
            kind: ObstacleKind::NotFound,
        });
        game.tick();
        assert!(game.phase().is_over());

        game.queue_restart();
        game.tick();
        assert!(game.phase().is_playing());
        assert_eq!(game.score(), 0);
        assert!(game.obstacles().is_empty());
        assert!(game.collectibles().is_empty());
        assert_eq!(game.debris().alive_count(), 0);
        assert_eq!(game.player().y, game.config().ground_y);
        assert_eq!(game.speed(), game.config().base_speed);
        let events = game.drain_events();
        assert!(events.contains(&DemoEvent::SessionRestarted));
    }

    #[test]
    fn high_score_is_max_of_previous_and_final() {
        // Final score below the stored high score: no change, no event
        let mut game = playing_game(quiet_config());
        game.seed_high_score(100);
        game.score = 40;
        game.obstacles.push(Obstacle {
            x: game.player().x,
            y: game.config().ground_y,
            kind: ObstacleKind::Bug,
        });
        game.tick();
        assert_eq!(game.high_score(), 100);
        assert!(!game
            .drain_events()
            .iter()
            .any(|e| matches!(e, DemoEvent::NewHighScore(_))));

        // Final score above: raised, event emitted
        let mut game = playing_game(quiet_config());
        game.seed_high_score(100);
        game.score = 140;
        game.obstacles.push(Obstacle {
            x: game.player().x,
            y: game.config().ground_y,
            kind: ObstacleKind::Bug,
        });
        game.tick();
        assert_eq!(game.high_score(), 140);
        assert!(game
            .drain_events()
            .contains(&DemoEvent::NewHighScore(140)));
    }

    #[test]
    fn idle_session_does_not_simulate() {
        let mut game = RunnerGame::new(quiet_config(), 42);
        let y = game.player().y;
        game.queue_jump();
        game.tick();
        assert_eq!(game.player().y, y);
        assert!(!game.phase().is_playing());
    }

    #[test]
    fn difficulty_ramps_and_tightens_spawns() {
        let config = RunnerConfig {
            obstacle_chance: 0.0,
            collectible_chance: 0.0,
            ..RunnerConfig::default()
        };
        let mut game = playing_game(config);
        let start_speed = game.speed();
        for _ in 0..1000 {
            game.tick();
        }
        assert!(game.speed() > start_speed);

        let early = Spawner::obstacle_period(game.config(), start_speed);
        let late = Spawner::obstacle_period(game.config(), game.speed());
        assert!(late <= early);
    }
}
