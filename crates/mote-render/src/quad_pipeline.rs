//! Instanced 2D quad render pipeline
//!
//! Renders colored rectangles and soft circles for the runner and motion
//! demos via one instanced draw call. Instance data lives in a storage
//! buffer that grows on demand; positions are surface pixels, mapped to NDC
//! in the vertex shader.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// GPU instance data for one quad — matches the WGSL `QuadInstance` struct.
/// 48 bytes, 16-byte aligned (3 rows of vec4).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadInstanceGpu {
    /// Top-left position + size packed into vec4
    pub pos_size: [f32; 4], // xy = position in pixels, zw = size
    /// Color with alpha
    pub color: [f32; 4], // rgba
    /// Shape flags
    pub misc: [f32; 4], // x > 0.5 = circle mask
}

impl QuadInstanceGpu {
    pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Self {
        Self {
            pos_size: [x, y, width, height],
            color,
            misc: [0.0; 4],
        }
    }

    /// A soft circle centered at (x, y)
    pub fn circle(x: f32, y: f32, radius: f32, color: [f32; 4]) -> Self {
        Self {
            pos_size: [x - radius, y - radius, radius * 2.0, radius * 2.0],
            color,
            misc: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

/// Surface size uniform shared by all quad draws in a frame
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadUniforms {
    pub surface: [f32; 2],
    pub _pad: [f32; 2],
}

/// The quad rendering pipeline (alpha blended, no depth)
pub struct QuadPipeline {
    pipeline: wgpu::RenderPipeline,
    instance_bind_group_layout: wgpu::BindGroupLayout,
    instance_buffer: wgpu::Buffer,
    instance_bind_group: wgpu::BindGroup,
    instance_capacity: usize,
    instance_count: u32,
    quad_index_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
}

impl QuadPipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Quad Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("quad.wgsl").into()),
        });

        // Group 0: QuadUniforms (surface size)
        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("Quad Uniform Bind Group Layout"),
            });

        // Group 1: Instance storage buffer (read-only)
        let instance_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("Quad Instance Bind Group Layout"),
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Quad Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout, &instance_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Quad Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_quad"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_quad"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        // Shared quad index buffer
        let quad_indices: [u32; 6] = [0, 1, 2, 2, 1, 3];
        let quad_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&quad_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Uniform Buffer"),
            contents: bytemuck::cast_slice(&[QuadUniforms {
                surface: [1.0, 1.0],
                _pad: [0.0; 2],
            }]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
            label: Some("Quad Uniform Bind Group"),
        });

        let instance_capacity = 256;
        let (instance_buffer, instance_bind_group) =
            create_instance_buffer(device, &instance_bind_group_layout, instance_capacity);

        Self {
            pipeline,
            instance_bind_group_layout,
            instance_buffer,
            instance_bind_group,
            instance_capacity,
            instance_count: 0,
            quad_index_buffer,
            uniform_buffer,
            uniform_bind_group,
        }
    }

    /// Update the surface size uniform (logical pixels)
    pub fn set_surface_size(&self, queue: &wgpu::Queue, width: f32, height: f32) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[QuadUniforms {
                surface: [width, height],
                _pad: [0.0; 2],
            }]),
        );
    }

    /// Upload this frame's instances, growing the storage buffer if needed
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[QuadInstanceGpu],
    ) {
        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            let (buffer, bind_group) = create_instance_buffer(
                device,
                &self.instance_bind_group_layout,
                self.instance_capacity,
            );
            self.instance_buffer = buffer;
            self.instance_bind_group = bind_group;
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }
        self.instance_count = instances.len() as u32;
    }

    /// Record the draw for the instances uploaded this frame
    pub fn draw<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        pass.set_bind_group(1, &self.instance_bind_group, &[]);
        pass.set_index_buffer(self.quad_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..6, 0, 0..self.instance_count);
    }
}

fn create_instance_buffer(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Quad Instance Buffer"),
        size: (capacity * std::mem::size_of::<QuadInstanceGpu>()) as u64,
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
        label: Some("Quad Instance Bind Group"),
    });
    (buffer, bind_group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_layout_matches_wgsl() {
        assert_eq!(std::mem::size_of::<QuadInstanceGpu>(), 48);
        assert_eq!(std::mem::size_of::<QuadUniforms>(), 16);
    }

    #[test]
    fn circle_helper_centers_the_quad() {
        let c = QuadInstanceGpu::circle(100.0, 50.0, 10.0, [1.0; 4]);
        assert_eq!(c.pos_size, [90.0, 40.0, 20.0, 20.0]);
        assert!(c.misc[0] > 0.5);
    }
}
