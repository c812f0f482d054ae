use wgpu::util::DeviceExt;

use crate::quad::InstanceRecord;
use crate::scene::QuadBatch;

use super::common::{draw_chunks, grown_capacity, instances_fitting, premul_alpha_blend, QUAD_INDICES};
use super::DrawTarget;

/// WGSL source of the quad stage (`vs_main` / `fs_main`).
pub const QUAD_SHADER_WGSL: &str = include_str!("shaders/quad.wgsl");

const RECORD_SIZE: u64 = std::mem::size_of::<InstanceRecord>() as u64;

/// Instanced quad renderer.
///
/// Binds a single instance-rate vertex buffer of [`InstanceRecord`]s and a static
/// 6-entry index buffer. Corner positions are generated in the vertex shader.
///
/// The instance buffer never outgrows the device's `max_buffer_size`; larger
/// batches are drawn in consecutive passes that reuse it.
#[derive(Default)]
pub struct QuadRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    quad_ibo: Option<wgpu::Buffer>,

    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,

    /// Paint-ordered copy of the batch, reused across frames.
    staging: Vec<InstanceRecord>,
}

impl QuadRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instances the current instance buffer can hold.
    pub fn instance_capacity(&self) -> usize {
        self.instance_capacity
    }

    /// Draws every quad in `batch`, in paint order, on top of `target`.
    ///
    /// An empty batch records nothing.
    pub fn render(&mut self, target: &mut DrawTarget<'_>, batch: &mut QuadBatch) {
        self.staging.clear();
        self.staging.extend(batch.iter_in_paint_order().copied());

        if self.staging.is_empty() {
            return;
        }

        let per_draw = instances_fitting(target.device.limits().max_buffer_size);

        self.ensure_pipeline(target);
        self.ensure_index_buffer(target);
        self.ensure_instance_capacity(target, self.staging.len(), per_draw);

        let (Some(pipeline), Some(quad_ibo), Some(instance_vbo)) =
            (self.pipeline.as_ref(), self.quad_ibo.as_ref(), self.instance_vbo.as_ref())
        else {
            return;
        };

        let chunks: Vec<_> = draw_chunks(self.staging.len(), self.instance_capacity).collect();
        if chunks.len() > 1 {
            log::debug!("{} quads split over {} draws", self.staging.len(), chunks.len());
        }

        for (i, range) in chunks.into_iter().enumerate() {
            let records = &self.staging[range];
            let bytes: &[u8] = bytemuck::cast_slice(records);

            // Queue writes land before any command of this submission, so only
            // the first chunk can go through the queue. Later chunks are copied
            // in between the passes that read the buffer.
            if i == 0 {
                target.queue.write_buffer(instance_vbo, 0, bytes);
            } else {
                let upload = target.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("quadgen quad upload"),
                    contents: bytes,
                    usage: wgpu::BufferUsages::COPY_SRC,
                });
                target
                    .encoder
                    .copy_buffer_to_buffer(&upload, 0, instance_vbo, 0, bytes.len() as u64);
            }

            let mut pass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("quadgen quad pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                ..Default::default()
            });

            pass.set_pipeline(pipeline);
            pass.set_vertex_buffer(0, instance_vbo.slice(..records.len() as u64 * RECORD_SIZE));
            pass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
            pass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..records.len() as u32);
        }
    }

    fn ensure_pipeline(&mut self, target: &DrawTarget<'_>) {
        if self.pipeline_format == Some(target.format) && self.pipeline.is_some() {
            return;
        }

        let shader = target.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("quadgen quad shader"),
            source: wgpu::ShaderSource::Wgsl(QUAD_SHADER_WGSL.into()),
        });

        let pipeline_layout = target
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("quadgen quad pipeline layout"),
                bind_group_layouts: &[],
                immediate_size: 0,
            });

        let pipeline = target.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("quadgen quad pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[InstanceRecord::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target.format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                // Corner order is clockwise in clip space; negative sizes flip it.
                front_face: wgpu::FrontFace::Cw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("quad pipeline built for {:?}", target.format);

        self.pipeline_format = Some(target.format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_index_buffer(&mut self, target: &DrawTarget<'_>) {
        if self.quad_ibo.is_some() {
            return;
        }

        self.quad_ibo = Some(target.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadgen quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn ensure_instance_capacity(&mut self, target: &DrawTarget<'_>, required_instances: usize, limit: usize) {
        let wanted = required_instances.min(limit);
        if wanted <= self.instance_capacity && self.instance_vbo.is_some() {
            return;
        }

        let new_cap = grown_capacity(wanted, limit);
        let new_size = new_cap as u64 * RECORD_SIZE;

        self.instance_vbo = Some(target.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quadgen quad instance vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.instance_capacity = new_cap;

        log::debug!("quad instance buffer grown to {new_cap} instances");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quad::CORNER_OFFSETS;

    /// Pulls the `vec2<f32>(x, y)` literals out of the shader's corner table.
    fn shader_corner_table() -> Vec<(f32, f32)> {
        let start = QUAD_SHADER_WGSL
            .find("array<vec2<f32>, 4>(")
            .expect("corner table present");
        let body = &QUAD_SHADER_WGSL[start..];
        let body = &body[..body.find(");").expect("corner table terminated")];

        body.split("vec2<f32>(")
            .skip(1)
            .map(|entry| {
                let inner = &entry[..entry.find(')').expect("closing paren")];
                let mut parts = inner.split(',').map(|s| s.trim().parse::<f32>().expect("float literal"));
                (parts.next().expect("x"), parts.next().expect("y"))
            })
            .collect()
    }

    #[test]
    fn shader_corner_table_matches_cpu_table() {
        let cpu: Vec<(f32, f32)> = CORNER_OFFSETS.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(shader_corner_table(), cpu);
    }

    #[test]
    fn shader_declares_instance_slots_in_order() {
        let slots = [
            "@location(0) anchor: vec2<f32>",
            "@location(1) width: f32",
            "@location(2) height: f32",
            "@location(3) color: vec4<f32>",
        ];
        let mut last = 0;
        for s in slots {
            let pos = QUAD_SHADER_WGSL.find(s).unwrap_or_else(|| panic!("missing `{s}`"));
            assert!(pos >= last, "`{s}` out of order");
            last = pos;
        }
    }

    #[test]
    fn shader_exposes_entry_points() {
        assert!(QUAD_SHADER_WGSL.contains("fn vs_main("));
        assert!(QUAD_SHADER_WGSL.contains("@builtin(vertex_index)"));
        assert!(QUAD_SHADER_WGSL.contains("fn fs_main("));
    }

    #[test]
    fn new_renderer_holds_no_gpu_resources() {
        let r = QuadRenderer::new();
        assert_eq!(r.instance_capacity(), 0);
        assert!(r.pipeline.is_none());
        assert!(r.instance_vbo.is_none());
    }
}
