//! Text-formation particle field
//!
//! Each particle carries a scattered origin and a text-derived target. A
//! single form-progress scalar eases toward 1 by exponential approach; the
//! GPU blends the two position sets by it, so the whole cloud drifts into the
//! glyph shape and an `explode` snaps it back out. CPU state here is limited
//! to the buffers and the per-frame uniforms — all per-vertex motion (noise,
//! pointer repulsion) happens in the vertex shader.

use crate::rand::DemoRng;
use bytemuck::{Pod, Zeroable};
use mote_core::Color;
use mote_runtime::{DemoSystem, InputState};

/// Tunables for the formation field, defaults matching the hero scene
#[derive(Debug, Clone)]
pub struct FieldSettings {
    /// Pointer repulsion radius in scene units
    pub pointer_radius: f32,
    /// Pointer repulsion strength at zero distance
    pub pointer_strength: f32,
    /// Per-frame exponential approach rate of form progress
    pub form_speed: f32,
    /// Upper bound of the random per-particle size
    pub particle_size: f32,
    /// Three-stop horizontal color gradient
    pub palette: [Color; 3],
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            pointer_radius: 0.15,
            pointer_strength: 0.08,
            form_speed: 0.02,
            particle_size: 2.5,
            palette: [
                Color::from_hex(0x00D4FF),
                Color::from_hex(0x7B61FF),
                Color::from_hex(0xFF6B9D),
            ],
        }
    }
}

/// GPU instance data — matches the WGSL `FieldParticle` struct.
/// 64 bytes, 16-byte aligned (4 rows of vec4).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct FieldInstanceGpu {
    /// Scattered origin + per-particle size packed into vec4
    pub scatter_size: [f32; 4], // xyz = scattered position, w = size
    /// Text-derived target position
    pub target: [f32; 4], // xyz = target, w unused
    /// Per-particle noise seed offsets
    pub seed: [f32; 4], // xyz = offsets, w unused
    /// Color with alpha
    pub color: [f32; 4], // rgba
}

/// Per-frame uniforms — matches the WGSL `FieldUniforms` struct.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct FieldUniforms {
    pub pointer: [f32; 2],
    pub time: f32,
    pub form_progress: f32,
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    pub size_scale: f32,
    pub aspect: f32,
}

/// Particle count tier for a surface width, mirroring the adaptive budget of
/// the original hero scene
pub fn particle_budget(surface_width: u32) -> usize {
    if surface_width < 768 {
        8000
    } else if surface_width < 1200 {
        15000
    } else {
        20000
    }
}

/// The formation field: position buffers, form progress, smoothed pointer
pub struct FormationField {
    settings: FieldSettings,
    scattered: Vec<[f32; 3]>,
    targets: Vec<[f32; 3]>,
    seeds: Vec<[f32; 3]>,
    colors: Vec<[f32; 4]>,
    sizes: Vec<f32>,

    form_progress: f32,
    time: f32,
    pointer: [f32; 2],
    pointer_target: [f32; 2],
    aspect: f32,
    /// Instance buffer needs re-upload (scattered positions changed)
    dirty: bool,
}

impl FormationField {
    /// Build a field of `count` particles aiming at `target_points`
    /// (normalized scene coordinates). Points are cycled when there are more
    /// particles than points.
    pub fn new(
        count: usize,
        target_points: &[[f32; 2]],
        aspect: f32,
        settings: FieldSettings,
        rng: &mut DemoRng,
    ) -> Self {
        let mut field = Self {
            settings,
            scattered: Vec::with_capacity(count),
            targets: Vec::with_capacity(count),
            seeds: Vec::with_capacity(count),
            colors: Vec::with_capacity(count),
            sizes: Vec::with_capacity(count),
            form_progress: 0.0,
            time: 0.0,
            pointer: [0.0, 0.0],
            pointer_target: [0.0, 0.0],
            aspect,
            dirty: true,
        };

        for i in 0..count {
            field
                .scattered
                .push([rng.jitter(2.0), rng.jitter(2.0), rng.jitter(1.0)]);

            let point = if target_points.is_empty() {
                [0.0, 0.0]
            } else {
                target_points[i % target_points.len()]
            };
            let target = [
                point[0] + rng.jitter(0.01),
                point[1] + rng.jitter(0.01),
                rng.jitter(0.05),
            ];
            field.colors.push(field.settings.gradient_at(target[0]));
            field.targets.push(target);

            field
                .seeds
                .push([rng.range(0.0, 1000.0), rng.range(0.0, 1000.0), rng.range(0.0, 1000.0)]);
            field
                .sizes
                .push(rng.range(0.5, field.settings.particle_size + 0.5));
        }

        field
    }

    pub fn count(&self) -> usize {
        self.scattered.len()
    }

    pub fn form_progress(&self) -> f32 {
        self.form_progress
    }

    /// Move the pointer target (scene coordinates); the uniform pointer eases
    /// toward it over the following frames.
    pub fn set_pointer_target(&mut self, x: f32, y: f32) {
        self.pointer_target = [x, y];
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Replace the target positions after a resize re-sample
    pub fn retarget(&mut self, target_points: &[[f32; 2]], rng: &mut DemoRng) {
        if target_points.is_empty() {
            return;
        }
        for (i, target) in self.targets.iter_mut().enumerate() {
            let point = target_points[i % target_points.len()];
            target[0] = point[0] + rng.jitter(0.01);
            target[1] = point[1] + rng.jitter(0.01);
        }
        for (color, target) in self.colors.iter_mut().zip(&self.targets) {
            *color = self.settings.gradient_at(target[0]);
        }
        self.dirty = true;
    }

    /// Scatter the cloud: reset form progress and jitter every origin so the
    /// re-formation starts from a visibly different arrangement.
    pub fn explode(&mut self, rng: &mut DemoRng) {
        self.form_progress = 0.0;
        for origin in &mut self.scattered {
            origin[0] += rng.jitter(0.25);
            origin[1] += rng.jitter(0.25);
            origin[2] += rng.jitter(0.15);
        }
        self.dirty = true;
    }

    /// Advance one frame: accumulate time, ease pointer and form progress.
    /// The approach factors are per-frame rates, matching the original
    /// animation's frame-coupled easing.
    pub fn step(&mut self, dt: f32) {
        self.time += dt;
        self.pointer[0] += (self.pointer_target[0] - self.pointer[0]) * 0.1;
        self.pointer[1] += (self.pointer_target[1] - self.pointer[1]) * 0.1;
        self.form_progress += (1.0 - self.form_progress) * self.settings.form_speed;
    }

    /// True once, after any change that invalidates the instance buffer
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Pack per-particle attributes for GPU upload
    pub fn pack_instances(&self) -> Vec<FieldInstanceGpu> {
        (0..self.count())
            .map(|i| FieldInstanceGpu {
                scatter_size: [
                    self.scattered[i][0],
                    self.scattered[i][1],
                    self.scattered[i][2],
                    self.sizes[i],
                ],
                target: [self.targets[i][0], self.targets[i][1], self.targets[i][2], 0.0],
                seed: [self.seeds[i][0], self.seeds[i][1], self.seeds[i][2], 0.0],
                color: self.colors[i],
            })
            .collect()
    }

    /// Current per-frame uniforms
    pub fn uniforms(&self, size_scale: f32) -> FieldUniforms {
        FieldUniforms {
            pointer: self.pointer,
            time: self.time,
            form_progress: self.form_progress,
            pointer_radius: self.settings.pointer_radius,
            pointer_strength: self.settings.pointer_strength,
            size_scale,
            aspect: self.aspect,
        }
    }
}

impl FieldSettings {
    /// Three-stop gradient keyed on horizontal target position
    fn gradient_at(&self, x: f32) -> [f32; 4] {
        let t = ((x + 1.5) / 3.0).clamp(0.0, 1.0);
        let color = if t < 0.5 {
            self.palette[0].lerp(&self.palette[1], t * 2.0)
        } else {
            self.palette[1].lerp(&self.palette[2], (t - 0.5) * 2.0)
        };
        color.to_array()
    }
}

impl DemoSystem for FormationField {
    fn update(&mut self, input: &InputState, dt: f64) {
        // Pointer position arrives in scene coordinates via set_pointer_target;
        // the raw window position is not meaningful here, so only time-based
        // easing runs on the trait path.
        let _ = input;
        self.step(dt as f32);
    }

    fn name(&self) -> &str {
        "formation-field"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_field(count: usize) -> (FormationField, DemoRng) {
        let mut rng = DemoRng::new(42);
        let points = vec![[0.0, 0.0], [0.5, 0.2], [-0.5, -0.2]];
        let field = FormationField::new(count, &points, 16.0 / 9.0, FieldSettings::default(), &mut rng);
        (field, rng)
    }

    #[test]
    fn form_progress_approaches_one_without_overshoot() {
        let (mut field, _) = test_field(16);
        let mut previous = field.form_progress();
        for _ in 0..2000 {
            field.step(1.0 / 60.0);
            let p = field.form_progress();
            assert!(p >= previous, "form progress must be monotone");
            assert!(p <= 1.0, "form progress must never overshoot");
            previous = p;
        }
        assert!(previous > 0.99);
    }

    #[test]
    fn explode_resets_and_resumes() {
        let (mut field, mut rng) = test_field(16);
        for _ in 0..300 {
            field.step(1.0 / 60.0);
        }
        assert!(field.form_progress() > 0.9);

        field.explode(&mut rng);
        assert_eq!(field.form_progress(), 0.0);

        field.step(1.0 / 60.0);
        assert!(field.form_progress() > 0.0);
        assert!(field.form_progress() < 0.1);
    }

    #[test]
    fn explode_jitters_scattered_positions() {
        let (mut field, mut rng) = test_field(64);
        let before = field.scattered.clone();
        field.explode(&mut rng);
        let moved = field
            .scattered
            .iter()
            .zip(&before)
            .filter(|(a, b)| a != b)
            .count();
        assert!(moved > 0);
        assert!(field.take_dirty());
        assert!(!field.take_dirty());
    }

    #[test]
    fn pointer_eases_toward_target() {
        let (mut field, _) = test_field(4);
        field.set_pointer_target(1.0, -1.0);
        field.step(1.0 / 60.0);
        let u = field.uniforms(1.0);
        assert!((u.pointer[0] - 0.1).abs() < 1e-6);
        assert!((u.pointer[1] + 0.1).abs() < 1e-6);

        for _ in 0..200 {
            field.step(1.0 / 60.0);
        }
        let u = field.uniforms(1.0);
        assert!((u.pointer[0] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn targets_cycle_when_fewer_points_than_particles() {
        let (field, _) = test_field(10);
        assert_eq!(field.count(), 10);
        // Particles 0 and 3 share target point 0, up to jitter
        let a = field.targets[0];
        let b = field.targets[3];
        assert!((a[0] - b[0]).abs() < 0.05);
        assert!((a[1] - b[1]).abs() < 0.05);
    }

    #[test]
    fn instance_layout_matches_wgsl() {
        assert_eq!(std::mem::size_of::<FieldInstanceGpu>(), 64);
        assert_eq!(std::mem::size_of::<FieldUniforms>(), 32);
    }

    #[test]
    fn budget_tiers() {
        assert_eq!(particle_budget(640), 8000);
        assert_eq!(particle_budget(1024), 15000);
        assert_eq!(particle_budget(1920), 20000);
    }
}
