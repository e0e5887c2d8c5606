//! Demo application implementing winit ApplicationHandler
//!
//! One window, one clock, one input state. The base scene is the particle
//! hero or the motion demo; the runner overlays either of them when revealed
//! by a secret gesture (or immediately with the right launch flag).

use crate::hud::Hud;
use crate::scene;
use crate::typer::TypingEffect;
use mote_motion::CursorFollower;
use mote_particles::{
    glyph, particle_budget, DemoRng, FieldSettings, FormationField,
};
use mote_render::{FieldPipeline, QuadPipeline, RenderContext};
use mote_runner::{RunnerConfig, RunnerGame};
use mote_core::{Rect, Vec2};
use mote_runtime::{
    DemoEvent, DemoSystem, GameClock, InputState, KeySequenceDetector, MultiClickDetector,
    PersistentStore, HIGH_SCORE_KEY, KONAMI_SEQUENCE,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Which scene the window opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DemoKind {
    /// Text-formation particle hero scene
    Particles,
    /// Cursor-follow motion-matching demo
    Motion,
    /// The runner, without the secret handshake
    Runner,
}

/// Crash screen-shake duration in seconds
const SHAKE_DURATION: f32 = 0.3;
/// Triple-click hotspot size, physical pixels from the bottom-left corner
const HOTSPOT_WIDTH: f32 = 200.0;
const HOTSPOT_HEIGHT: f32 = 60.0;

/// Phrases rotated by the hero subtitle
const SUBTITLE_PHRASES: [&str; 3] = [
    "gameplay programmer",
    "graphics tinkerer",
    "tools builder",
];

pub struct DemoApp {
    demo: DemoKind,
    fullscreen: bool,
    headline: String,

    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    quad_pipeline: Option<QuadPipeline>,
    field_pipeline: Option<FieldPipeline>,

    egui_ctx: egui::Context,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,

    clock: GameClock,
    input: InputState,
    hud: Hud,

    runner: RunnerGame,
    follower: CursorFollower,
    field: Option<FormationField>,
    field_rng: DemoRng,
    typer: TypingEffect,

    store: PersistentStore,
    store_path: PathBuf,

    konami: KeySequenceDetector,
    triple_click: MultiClickDetector,

    overlay_active: bool,
    shake_time: f32,
}

impl DemoApp {
    pub fn new(
        demo: DemoKind,
        headline: String,
        config: RunnerConfig,
        reveal_game: bool,
        fullscreen: bool,
    ) -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0x9E37_79B9);

        let store_path = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mote")
            .join("scores.toml");
        let mut store = PersistentStore::new();
        if let Err(e) = store.load_from_file(&store_path) {
            eprintln!("Failed to read score store: {e}");
        }

        let mut runner = RunnerGame::new(config, seed);
        runner.seed_high_score(store.get_integer(HIGH_SCORE_KEY, 0).max(0) as u32);

        let typer = TypingEffect::new(SUBTITLE_PHRASES.iter().map(|s| s.to_string()).collect());

        Self {
            overlay_active: reveal_game || demo == DemoKind::Runner,
            demo,
            fullscreen,
            headline,
            window: None,
            render_context: None,
            quad_pipeline: None,
            field_pipeline: None,
            egui_ctx: egui::Context::default(),
            egui_winit: None,
            egui_renderer: None,
            clock: GameClock::new(),
            input: InputState::new(),
            hud: Hud::new(),
            runner,
            follower: CursorFollower::new(1280.0, 720.0, seed ^ 0x5F5F_5F5F),
            field: None,
            field_rng: DemoRng::new(seed ^ 0x1234_5678),
            typer,
            store,
            store_path,
            konami: KeySequenceDetector::new(&KONAMI_SEQUENCE),
            triple_click: MultiClickDetector::new(3, Duration::from_millis(500)),
            shake_time: 0.0,
        }
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let window_attrs = Window::default_attributes()
            .with_title("mote")
            .with_inner_size(PhysicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                eprintln!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        if self.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        // GPU unavailable means the demos silently don't run — feature
        // detection, not error recovery.
        let render_context = match pollster::block_on(RenderContext::new(window.clone())) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("GPU unavailable, skipping demos: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = render_context.size;
        let aspect = render_context.aspect_ratio();

        let quad_pipeline = QuadPipeline::new(&render_context.device, render_context.config.format);

        let budget = particle_budget(size.width);
        let field_pipeline = FieldPipeline::new(
            &render_context.device,
            render_context.config.format,
            budget,
        );
        let points = glyph::sample_text(&self.headline, aspect);
        let field = FormationField::new(
            budget,
            &points,
            aspect,
            FieldSettings::default(),
            &mut self.field_rng,
        );
        println!(
            "[field] {} particles forming {} target points",
            field.count(),
            points.len()
        );

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &render_context.device,
            render_context.config.format,
            None,
            1,
            false,
        );

        self.follower
            .resize(size.width as f32, size.height as f32);

        self.window = Some(window);
        self.render_context = Some(render_context);
        self.quad_pipeline = Some(quad_pipeline);
        self.field_pipeline = Some(field_pipeline);
        self.field = Some(field);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);
    }

    fn show_overlay(&mut self) {
        if !self.overlay_active {
            println!("[runner] found it!");
            self.overlay_active = true;
        }
    }

    fn hide_overlay(&mut self) {
        self.overlay_active = false;
    }

    /// Map a window pixel position into the field's scene coordinates
    fn pointer_to_scene(&self, x: f64, y: f64) -> (f32, f32) {
        let Some(context) = &self.render_context else {
            return (0.0, 0.0);
        };
        let width = context.size.width.max(1) as f64;
        let height = context.size.height.max(1) as f64;
        let aspect = context.aspect_ratio() as f64;
        (
            ((x / width - 0.5) * 2.0 * aspect) as f32,
            ((0.5 - y / height) * 2.0) as f32,
        )
    }

    fn in_hotspot(&self, x: f64, y: f64) -> bool {
        let Some(context) = &self.render_context else {
            return false;
        };
        let hotspot = Rect::new(
            0.0,
            context.size.height as f32 - HOTSPOT_HEIGHT,
            HOTSPOT_WIDTH,
            HOTSPOT_HEIGHT,
        );
        hotspot.contains(Vec2::new(x as f32, y as f32))
    }

    fn handle_primary_press(&mut self) {
        let (px, py) = self.input.pointer_position;

        if self.overlay_active {
            // Tap controls for the runner, matching the touch path
            if self.runner.phase().is_playing() {
                self.runner.queue_jump();
            } else if self.runner.phase() == mote_runtime::SessionPhase::Idle {
                self.runner.queue_start();
            }
            return;
        }

        if self.in_hotspot(px, py) {
            if self.triple_click.register(Instant::now()) {
                self.show_overlay();
            }
            return;
        }

        if self.demo == DemoKind::Particles {
            if let Some(field) = &mut self.field {
                field.explode(&mut self.field_rng);
            }
        }
    }

    fn tick(&mut self) {
        self.clock.tick();
        let dt = self.clock.delta_time;
        self.hud.update(dt);

        if self.overlay_active {
            self.runner.apply_input(&self.input);
            while self.clock.should_fixed_update() {
                self.runner.tick();
                self.clock.consume_fixed_step();
            }
            for event in self.runner.drain_events() {
                match event {
                    DemoEvent::Crashed { final_score } => {
                        self.shake_time = SHAKE_DURATION;
                        println!("[runner] crashed at {final_score}");
                    }
                    DemoEvent::NewHighScore(score) => {
                        self.store.raise_to(HIGH_SCORE_KEY, score as i64);
                        if let Err(e) = self.store.save_to_file(&self.store_path) {
                            eprintln!("Failed to write score store: {e}");
                        }
                        println!("[runner] new high score: {score}");
                    }
                    _ => {}
                }
            }
        } else {
            // Keep the accumulator drained so un-hiding the game doesn't
            // replay the time the overlay was away.
            while self.clock.should_fixed_update() {
                self.clock.consume_fixed_step();
            }

            match self.demo {
                DemoKind::Motion => self.follower.update(&self.input, dt),
                DemoKind::Particles => {
                    if let Some(field) = &mut self.field {
                        field.step(dt as f32);
                    }
                    self.typer.update(dt);
                }
                DemoKind::Runner => {}
            }
        }

        self.shake_time = (self.shake_time - dt as f32).max(0.0);
        self.input.end_frame();
    }

    fn render(&mut self) {
        let (output, view, mut encoder) = {
            let Some(context) = &self.render_context else {
                return;
            };

            let output = match context.surface.get_current_texture() {
                Ok(output) => output,
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    return;
                }
                Err(e) => {
                    eprintln!("Surface error: {e:?}");
                    return;
                }
            };
            let view = output
                .texture
                .create_view(&wgpu::TextureViewDescriptor::default());

            let encoder = context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Frame Encoder"),
                });
            (output, view, encoder)
        };

        let clear = if self.overlay_active {
            scene::RUNNER_CLEAR
        } else {
            match self.demo {
                DemoKind::Motion => scene::MOTION_CLEAR,
                _ => scene::HERO_CLEAR,
            }
        };

        self.upload_scene();
        self.record_scene_pass(&mut encoder, &view, clear);
        self.render_hud(&mut encoder, &view);

        if let Some(context) = &self.render_context {
            context.queue.submit(std::iter::once(encoder.finish()));
        }
        output.present();
    }

    /// Push this frame's instances and uniforms for whichever scene is live
    fn upload_scene(&mut self) {
        let Some(context) = &self.render_context else {
            return;
        };
        let width = context.size.width as f32;
        let height = context.size.height as f32;

        if self.overlay_active {
            // Screen shake: decaying horizontal wobble in sim pixels
            let shake = if self.shake_time > 0.0 {
                (self.shake_time * 80.0).sin() * 10.0 * (self.shake_time / SHAKE_DURATION)
            } else {
                0.0
            };
            let instances = scene::runner_instances(&self.runner, shake);
            if let Some(quad) = &mut self.quad_pipeline {
                let config = self.runner.config();
                quad.set_surface_size(&context.queue, config.surface_width, config.surface_height);
                quad.upload(&context.device, &context.queue, &instances);
            }
        } else {
            match self.demo {
                DemoKind::Motion => {
                    let instances = scene::motion_instances(&self.follower, width, height);
                    if let Some(quad) = &mut self.quad_pipeline {
                        quad.set_surface_size(&context.queue, width, height);
                        quad.upload(&context.device, &context.queue, &instances);
                    }
                }
                DemoKind::Particles => {
                    if let (Some(field), Some(pipeline)) =
                        (&mut self.field, &mut self.field_pipeline)
                    {
                        if field.take_dirty() {
                            pipeline.upload_instances(
                                &context.device,
                                &context.queue,
                                &field.pack_instances(),
                            );
                        }
                        let size_scale = 4.0 / height.max(1.0);
                        pipeline.set_uniforms(&context.queue, field.uniforms(size_scale));
                    }
                }
                DemoKind::Runner => {}
            }
        }
    }

    /// Record the cleared scene pass for whichever scene is live
    fn record_scene_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        clear: wgpu::Color,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if self.overlay_active || self.demo != DemoKind::Particles {
            if let Some(quad) = &self.quad_pipeline {
                quad.draw(&mut pass);
            }
        } else if let Some(pipeline) = &self.field_pipeline {
            pipeline.draw(&mut pass);
        }
    }

    fn render_hud(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(egui_winit) = &mut self.egui_winit else {
            return;
        };
        let Some(context) = &self.render_context else {
            return;
        };

        let raw_input = egui_winit.take_egui_input(&window);

        let hud = &self.hud;
        let runner = &self.runner;
        let follower = &self.follower;
        let typed = self.typer.current();
        let overlay_active = self.overlay_active;
        let demo = self.demo;
        let ppp = self.egui_ctx.pixels_per_point();

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            if overlay_active {
                hud.draw_runner(ctx, runner);
            } else {
                match demo {
                    DemoKind::Motion => hud.draw_motion(ctx, follower, ppp),
                    DemoKind::Particles => hud.draw_hero(ctx, typed),
                    DemoKind::Runner => {}
                }
            }
        });

        if let Some(egui_winit) = &mut self.egui_winit {
            egui_winit.handle_platform_output(&window, full_output.platform_output);
        }

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [context.config.width, context.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut egui_renderer = match self.egui_renderer.take() {
            Some(r) => r,
            None => return,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(&context.device, &context.queue, *id, image_delta);
        }
        egui_renderer.update_buffers(
            &context.device,
            &context.queue,
            encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("HUD Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            let mut pass = pass.forget_lifetime();
            egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            egui_renderer.free_texture(id);
        }
        self.egui_renderer = Some(egui_renderer);
    }

    /// Release everything the session holds: demo systems first, then the
    /// GPU and window resources.
    fn shutdown(&mut self) {
        self.runner.teardown();
        self.follower.teardown();
        if let Some(field) = &mut self.field {
            field.teardown();
        }
        if let Err(e) = self.store.save_to_file(&self.store_path) {
            eprintln!("Failed to write score store: {e}");
        }
        self.field_pipeline = None;
        self.quad_pipeline = None;
        self.egui_renderer = None;
        self.egui_winit = None;
        self.render_context = None;
        self.window = None;
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(context) = &mut self.render_context else {
            return;
        };
        context.resize(new_size);
        let aspect = context.aspect_ratio();

        self.follower
            .resize(new_size.width as f32, new_size.height as f32);

        if let Some(field) = &mut self.field {
            field.set_aspect(aspect);
            let points = glyph::sample_text(&self.headline, aspect);
            field.retarget(&points, &mut self.field_rng);
        }
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // egui sees every event so its overlays track input state correctly
        if let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window) {
            let _ = egui_winit.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                self.resize(new_size);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed => {
                            if !event.repeat {
                                if !self.overlay_active && self.konami.push(key_code) {
                                    self.show_overlay();
                                }
                                if key_code == KeyCode::Escape {
                                    if self.overlay_active && self.demo != DemoKind::Runner {
                                        self.hide_overlay();
                                    } else {
                                        self.shutdown();
                                        event_loop.exit();
                                    }
                                    return;
                                }
                            }
                            self.input.process_key_down(key_code);
                        }
                        ElementState::Released => {
                            self.input.process_key_up(key_code);
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_pointer_move(position.x, position.y);
                if !self.overlay_active && self.demo == DemoKind::Particles {
                    let (sx, sy) = self.pointer_to_scene(position.x, position.y);
                    if let Some(field) = &mut self.field {
                        field.set_pointer_target(sx, sy);
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let btn = match button {
                    MouseButton::Left => 0,
                    MouseButton::Right => 1,
                    MouseButton::Middle => 2,
                    _ => return,
                };
                match state {
                    ElementState::Pressed => {
                        self.input.process_mouse_button_down(btn);
                        if button == MouseButton::Left {
                            self.handle_primary_press();
                        }
                    }
                    ElementState::Released => self.input.process_mouse_button_up(btn),
                }
            }

            WindowEvent::Touch(touch) => {
                self.input
                    .process_pointer_move(touch.location.x, touch.location.y);
                match touch.phase {
                    TouchPhase::Started => self.handle_primary_press(),
                    TouchPhase::Moved => {
                        if !self.overlay_active && self.demo == DemoKind::Particles {
                            let (sx, sy) =
                                self.pointer_to_scene(touch.location.x, touch.location.y);
                            if let Some(field) = &mut self.field {
                                field.set_pointer_target(sx, sy);
                            }
                        }
                    }
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                self.tick();
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
