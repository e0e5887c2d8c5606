//! Scene builders — turn demo state into quad instances each frame
//!
//! The runner paints in its simulation space (the quad uniform stretches it
//! to the window); the motion demo paints in window space directly.

use mote_core::Color;
use mote_motion::{CursorFollower, MotionState};
use mote_render::QuadInstanceGpu;
use mote_runner::RunnerGame;

const PLAYER: Color = Color::new(0.0, 0.831, 1.0, 1.0); // #00d4ff
const PLAYER_ACCENT: Color = Color::new(0.482, 0.38, 1.0, 1.0); // #7b61ff
const OBSTACLE: Color = Color::new(1.0, 0.267, 0.4, 1.0); // #ff4466
const COLLECTIBLE: Color = Color::new(0.0, 1.0, 0.533, 1.0); // #00ff88
const GROUND: Color = Color::new(0.102, 0.102, 0.141, 1.0); // #1a1a24
const ANTENNA: Color = Color::new(1.0, 0.42, 0.616, 1.0); // #ff6b9d

/// Background clear colors per scene
pub const RUNNER_CLEAR: wgpu::Color = wgpu::Color {
    r: 0.005,
    g: 0.005,
    b: 0.010,
    a: 1.0,
};
pub const MOTION_CLEAR: wgpu::Color = wgpu::Color {
    r: 0.010,
    g: 0.010,
    b: 0.018,
    a: 1.0,
};
pub const HERO_CLEAR: wgpu::Color = wgpu::Color {
    r: 0.005,
    g: 0.005,
    b: 0.010,
    a: 1.0,
};

/// Build the runner frame. `shake` is the crash screen-shake offset in
/// simulation pixels, applied to everything but the background.
pub fn runner_instances(game: &RunnerGame, shake: f32) -> Vec<QuadInstanceGpu> {
    let config = game.config();
    let mut quads = Vec::with_capacity(64);

    // Clouds drift behind everything
    for cloud in game.clouds() {
        let r = (cloud.width / 2.0).min(22.0);
        quads.push(QuadInstanceGpu::circle(cloud.x, cloud.y, r, GROUND.to_array()));
        quads.push(QuadInstanceGpu::circle(
            cloud.x - 20.0,
            cloud.y + 5.0,
            r * 0.7,
            GROUND.to_array(),
        ));
        quads.push(QuadInstanceGpu::circle(
            cloud.x + 25.0,
            cloud.y + 5.0,
            r * 0.55,
            GROUND.to_array(),
        ));
    }

    // Ground slab and its accent line
    let ground_top = config.ground_y + 30.0;
    quads.push(QuadInstanceGpu::rect(
        shake,
        ground_top,
        config.surface_width,
        config.surface_height - ground_top,
        GROUND.to_array(),
    ));
    quads.push(QuadInstanceGpu::rect(
        shake,
        ground_top - 2.0,
        config.surface_width,
        2.0,
        PLAYER.to_array(),
    ));

    // Debris bursts fade with remaining life
    for p in game.debris().alive_slice() {
        quads.push(QuadInstanceGpu::circle(
            p.position[0] + shake,
            p.position[1],
            p.size,
            [p.color[0], p.color[1], p.color[2], p.life.max(0.0)],
        ));
    }

    for c in game.collectibles() {
        let rect = c.rect();
        quads.push(QuadInstanceGpu::rect(
            rect.x + shake,
            rect.y,
            rect.width,
            rect.height,
            COLLECTIBLE.to_array(),
        ));
    }

    for o in game.obstacles() {
        let rect = o.rect();
        quads.push(QuadInstanceGpu::rect(
            rect.x + shake,
            rect.y,
            rect.width,
            rect.height,
            OBSTACLE.to_array(),
        ));
    }

    // The player: legs, body, head, eye
    let p = game.player();
    let cx = p.x + p.width / 2.0 + shake;
    let leg_swing = if p.jumping {
        0.0
    } else {
        (p.frame as f32 * std::f32::consts::FRAC_PI_2).sin() * 8.0
    };
    quads.push(QuadInstanceGpu::rect(
        cx - 8.0 - leg_swing,
        p.y + p.height - 12.0,
        4.0,
        12.0,
        PLAYER.to_array(),
    ));
    quads.push(QuadInstanceGpu::rect(
        cx + 4.0 + leg_swing,
        p.y + p.height - 12.0,
        4.0,
        12.0,
        PLAYER.to_array(),
    ));
    quads.push(QuadInstanceGpu::rect(
        p.x + shake,
        p.y,
        p.width,
        p.height - 10.0,
        PLAYER.to_array(),
    ));
    quads.push(QuadInstanceGpu::circle(cx, p.y + 5.0, 12.0, PLAYER_ACCENT.to_array()));
    quads.push(QuadInstanceGpu::circle(cx + 4.0, p.y + 3.0, 4.0, Color::WHITE.to_array()));

    quads
}

/// Build the motion demo frame in window coordinates
pub fn motion_instances(follower: &CursorFollower, width: f32, height: f32) -> Vec<QuadInstanceGpu> {
    let mut quads = Vec::with_capacity(128);

    // Faint alignment grid
    let grid = Color::new(1.0, 1.0, 1.0, 0.03).to_array();
    let mut x = 0.0;
    while x < width {
        quads.push(QuadInstanceGpu::rect(x, 0.0, 1.0, height, grid));
        x += 40.0;
    }
    let mut y = 0.0;
    while y < height {
        quads.push(QuadInstanceGpu::rect(0.0, y, width, 1.0, grid));
        y += 40.0;
    }

    // Dust puffs shrink and fade as they die
    for p in follower.dust().alive_slice() {
        quads.push(QuadInstanceGpu::circle(
            p.position[0],
            p.position[1],
            p.size * p.life.max(0.0),
            [1.0, 1.0, 1.0, p.life.max(0.0) * 0.5],
        ));
    }

    let (x, y) = (follower.x, follower.y);
    let state = follower.anim.state();
    let frame = follower.anim.frame() as f32;
    let swing_phase = (frame * std::f32::consts::FRAC_PI_3).sin();
    let (bob, swing) = match state {
        MotionState::Idle => (0.0, 0.0),
        MotionState::Walk => (swing_phase * 2.0, swing_phase * 5.0),
        MotionState::Run => (swing_phase * 4.0, swing_phase * 8.0),
    };

    // Shadow
    quads.push(QuadInstanceGpu::circle(
        x,
        y + 25.0,
        14.0,
        [0.0, 0.0, 0.0, 0.3],
    ));
    // Legs, counter-swinging
    quads.push(QuadInstanceGpu::rect(
        x - 7.0 + swing * 0.4,
        y + 8.0 + bob,
        4.0,
        15.0,
        PLAYER.to_array(),
    ));
    quads.push(QuadInstanceGpu::rect(
        x + 3.0 - swing * 0.4,
        y + 8.0 + bob,
        4.0,
        15.0,
        PLAYER.to_array(),
    ));
    // Body
    quads.push(QuadInstanceGpu::rect(
        x - 10.0,
        y - 15.0 + bob,
        20.0,
        25.0,
        PLAYER.to_array(),
    ));
    // Arms, opposite phase to the legs
    quads.push(QuadInstanceGpu::rect(
        x - 14.0 - swing * 0.3,
        y - 5.0 + bob,
        3.0,
        12.0,
        PLAYER.to_array(),
    ));
    quads.push(QuadInstanceGpu::rect(
        x + 11.0 + swing * 0.3,
        y - 5.0 + bob,
        3.0,
        12.0,
        PLAYER.to_array(),
    ));
    // Head, eye toward travel direction, antenna tip
    quads.push(QuadInstanceGpu::circle(x, y - 25.0 + bob, 12.0, PLAYER_ACCENT.to_array()));
    quads.push(QuadInstanceGpu::circle(
        x + 3.0 * follower.direction,
        y - 27.0 + bob,
        3.0,
        Color::WHITE.to_array(),
    ));
    quads.push(QuadInstanceGpu::circle(x, y - 44.0 + bob, 3.0, ANTENNA.to_array()));

    quads
}
