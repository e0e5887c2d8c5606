//! HUD overlays — egui layers drawn on top of the GPU scenes
//!
//! Non-interactable anchored areas: score readout and session overlays for
//! the runner, state/velocity readouts for the motion demo, and the typed
//! subtitle plus secret-trigger hint for the hero scene.

use mote_motion::CursorFollower;
use mote_runner::RunnerGame;
use mote_runtime::SessionPhase;

const CYAN: egui::Color32 = egui::Color32::from_rgb(0, 212, 255);
const PURPLE: egui::Color32 = egui::Color32::from_rgb(123, 97, 255);
const RED: egui::Color32 = egui::Color32::from_rgb(255, 68, 102);
const MUTED: egui::Color32 = egui::Color32::from_rgb(96, 96, 112);

/// How long the startup hint stays on screen, in seconds
const HINT_DURATION: f64 = 8.0;
/// Fade-out tail of the hint, in seconds
const HINT_FADE: f64 = 1.5;

pub struct Hud {
    hint_timer: f64,
}

impl Hud {
    pub fn new() -> Self {
        Self {
            hint_timer: HINT_DURATION,
        }
    }

    pub fn update(&mut self, dt: f64) {
        self.hint_timer = (self.hint_timer - dt).max(0.0);
    }

    fn hint_alpha(&self) -> f32 {
        ((self.hint_timer / HINT_FADE).min(1.0)) as f32
    }

    /// Runner overlay: background code lines, score, and session panels.
    /// Simulation coordinates are stretched onto the screen like the quads.
    pub fn draw_runner(&self, ctx: &egui::Context, game: &RunnerGame) {
        let screen = ctx.screen_rect();
        let sx = screen.width() / game.config().surface_width;
        let sy = screen.height() / game.config().surface_height;

        // Drifting code snippets behind the action
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Background,
            egui::Id::new("runner_code_lines"),
        ));
        for line in game.code_lines() {
            painter.text(
                egui::Pos2::new(line.x * sx, line.y * sy),
                egui::Align2::LEFT_TOP,
                line.text,
                egui::FontId::monospace(12.0),
                egui::Color32::from_rgba_unmultiplied(0, 212, 255, (line.alpha * 255.0) as u8),
            );
        }

        // Score readout, top-right
        egui::Area::new(egui::Id::new("runner_score"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_TOP, egui::Vec2::new(-16.0, 12.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("SCORE {:>6}", game.score()))
                        .color(egui::Color32::WHITE)
                        .monospace()
                        .size(18.0),
                );
                ui.label(
                    egui::RichText::new(format!("HI    {:>6}", game.high_score()))
                        .color(MUTED)
                        .monospace()
                        .size(14.0),
                );
            });

        match game.phase() {
            SessionPhase::Idle => self.session_panel(
                ctx,
                "DEBUG RUNNER",
                &[
                    "Jump the bugs, grab the coffee.",
                    "",
                    "[Space] Start   [Esc] Close",
                ],
                CYAN,
            ),
            SessionPhase::GameOver => {
                let lines = [
                    format!("Final score  {}", game.score()),
                    format!("High score   {}", game.high_score()),
                    String::new(),
                    "[R] Restart   [Esc] Close".to_string(),
                ];
                let refs: Vec<&str> = lines.iter().map(|s| s.as_str()).collect();
                self.session_panel(ctx, "GAME OVER", &refs, RED);
            }
            SessionPhase::Playing => {}
        }
    }

    fn session_panel(&self, ctx: &egui::Context, title: &str, lines: &[&str], accent: egui::Color32) {
        egui::Area::new(egui::Id::new("runner_session_panel"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(egui::Color32::from_rgba_unmultiplied(10, 10, 16, 220))
                    .rounding(12.0)
                    .inner_margin(egui::Margin::symmetric(32.0, 20.0))
                    .show(ui, |ui: &mut egui::Ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                egui::RichText::new(title)
                                    .color(accent)
                                    .monospace()
                                    .size(28.0),
                            );
                            ui.add_space(8.0);
                            for line in lines {
                                ui.label(
                                    egui::RichText::new(*line)
                                        .color(egui::Color32::WHITE)
                                        .monospace()
                                        .size(14.0),
                                );
                            }
                        });
                    });
            });
    }

    /// Motion demo readouts and the velocity vector. The follower moves in
    /// physical pixels; egui paints in points, hence the scale divide.
    pub fn draw_motion(&self, ctx: &egui::Context, follower: &CursorFollower, pixels_per_point: f32) {
        let ppp = pixels_per_point.max(0.1);
        egui::Area::new(egui::Id::new("motion_readout"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::LEFT_TOP, egui::Vec2::new(16.0, 12.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("STATE  {}", follower.anim.state().label()))
                        .color(CYAN)
                        .monospace()
                        .size(16.0),
                );
                ui.label(
                    egui::RichText::new(format!("SPEED  {:>4.1}", follower.speed()))
                        .color(MUTED)
                        .monospace()
                        .size(14.0),
                );
            });

        // Velocity vector, like the original debug draw
        if follower.vx.abs() > 0.5 || follower.vy.abs() > 0.5 {
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("motion_velocity"),
            ));
            painter.line_segment(
                [
                    egui::Pos2::new(follower.x / ppp, follower.y / ppp),
                    egui::Pos2::new(
                        (follower.x + follower.vx * 5.0) / ppp,
                        (follower.y + follower.vy * 5.0) / ppp,
                    ),
                ],
                egui::Stroke::new(2.0, egui::Color32::from_rgba_unmultiplied(0, 212, 255, 128)),
            );
        }
    }

    /// Hero scene subtitle (typed) and the secret-trigger hint
    pub fn draw_hero(&self, ctx: &egui::Context, subtitle: &str) {
        egui::Area::new(egui::Id::new("hero_subtitle"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 90.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("{subtitle}_"))
                        .color(PURPLE)
                        .monospace()
                        .size(18.0),
                );
            });

        let alpha = self.hint_alpha();
        if alpha > 0.01 {
            egui::Area::new(egui::Id::new("hero_hint"))
                .order(egui::Order::Foreground)
                .anchor(egui::Align2::CENTER_BOTTOM, egui::Vec2::new(0.0, -24.0))
                .interactable(false)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(
                            "Click to scatter. There is a secret key sequence, \
                             and the corner hides something too.",
                        )
                        .color(egui::Color32::from_rgba_unmultiplied(
                            96,
                            96,
                            112,
                            (alpha * 255.0) as u8,
                        ))
                        .monospace()
                        .size(13.0),
                    );
                });
        }
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
