use wgpu::util::DeviceExt;

use crate::driver::{FillMode, FrameCommands, Uniforms};
use crate::geometry::{GeometryError, Mesh, Solid, Vertex};
use crate::render::{RenderCtx, RenderTarget};

use super::shader::{ShaderAsset, WIREFRAME};

/// How wireframe mode is rasterized on the current device.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WireframeStrategy {
    /// Triangle list rasterized with `PolygonMode::Line`.
    PolygonLine,
    /// Line list over the mesh's polygon edges.
    EdgeList,
}

impl WireframeStrategy {
    pub fn for_device(polygon_line: bool) -> Self {
        if polygon_line {
            WireframeStrategy::PolygonLine
        } else {
            WireframeStrategy::EdgeList
        }
    }
}

/// Which index buffer a frame draws from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DrawSource {
    Triangles,
    Edges,
}

pub fn draw_source(fill: FillMode, strategy: WireframeStrategy) -> DrawSource {
    match (fill, strategy) {
        (FillMode::Wireframe, WireframeStrategy::EdgeList) => DrawSource::Edges,
        _ => DrawSource::Triangles,
    }
}

/// Primitive state for a fill mode.
///
/// Outward faces wind clockwise once projected through the left-handed
/// camera, so filled mode culls counter-clockwise (back) faces.
pub fn primitive_state(fill: FillMode, strategy: WireframeStrategy) -> wgpu::PrimitiveState {
    let base = wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::TriangleList,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Cw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    };

    match (fill, strategy) {
        (FillMode::Solid, _) => wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..base
        },
        (FillMode::Wireframe, WireframeStrategy::PolygonLine) => wgpu::PrimitiveState {
            polygon_mode: wgpu::PolygonMode::Line,
            ..base
        },
        (FillMode::Wireframe, WireframeStrategy::EdgeList) => wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..base
        },
    }
}

pub fn depth_stencil_state(format: wgpu::TextureFormat) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Draws one solid per frame: a uniform upload and a single indexed draw.
///
/// Pipelines are rebuilt when the surface format changes; mesh buffers only
/// when `upload_mesh` is called.
#[derive(Default)]
pub struct WireframeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    strategy: Option<WireframeStrategy>,
    fill_pipeline: Option<wgpu::RenderPipeline>,
    wire_pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    index_ibo: Option<wgpu::Buffer>,
    edge_ibo: Option<wgpu::Buffer>,
    index_count: u32,
    edge_count: u32,
    solid: Option<Solid>,
}

impl WireframeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds pipelines and the uniform binding.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        self.ensure_pipelines(ctx);
        self.ensure_bindings(ctx);
    }

    /// Pipelines, bindings and mesh buffers all exist.
    pub fn is_ready(&self) -> bool {
        self.fill_pipeline.is_some()
            && self.wire_pipeline.is_some()
            && self.bind_group.is_some()
            && self.vertex_vbo.is_some()
            && self.index_ibo.is_some()
    }

    pub fn strategy(&self) -> Option<WireframeStrategy> {
        self.strategy
    }

    /// Solid currently held in the mesh buffers.
    pub fn solid(&self) -> Option<Solid> {
        self.solid
    }

    /// Replaces the vertex, triangle and edge buffers with `mesh`.
    pub fn upload_mesh(&mut self, ctx: &RenderCtx<'_>, mesh: &Mesh) -> Result<(), GeometryError> {
        mesh.validate()?;

        self.vertex_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("facet mesh vbo"),
            contents: mesh.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.index_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("facet mesh ibo"),
            contents: mesh.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        }));
        self.edge_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("facet edge ibo"),
            contents: mesh.edge_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        }));

        self.index_count = mesh.index_count() as u32;
        self.edge_count = mesh.edges.len() as u32;
        self.solid = Some(mesh.solid);

        log::debug!(
            "uploaded {}: {} vertices ({} bytes), {} triangles, {} edges",
            mesh.solid,
            mesh.vertex_count(),
            mesh.vertex_buffer_size(),
            mesh.triangle_count(),
            self.edge_count / 2,
        );
        Ok(())
    }

    /// Uploads `commands.uniforms` at offset 0 and records the frame's pass.
    ///
    /// Does nothing until a mesh has been uploaded.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        commands: &FrameCommands,
    ) {
        self.prepare(ctx);

        let Some(ubo) = self.uniform_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, commands.uniforms.as_bytes());

        let strategy = self.strategy.unwrap_or(WireframeStrategy::EdgeList);
        let source = draw_source(commands.fill, strategy);

        let pipeline = match commands.fill {
            FillMode::Solid => self.fill_pipeline.as_ref(),
            FillMode::Wireframe => self.wire_pipeline.as_ref(),
        };
        let (ibo, count) = match source {
            DrawSource::Triangles => (self.index_ibo.as_ref(), self.index_count),
            DrawSource::Edges => (self.edge_ibo.as_ref(), self.edge_count),
        };

        let Some(pipeline) = pipeline else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vertex_vbo.as_ref() else { return };
        let Some(ibo) = ibo else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("facet solid pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(commands.clear.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if count == 0 {
            return;
        }

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(WIREFRAME.uniform_group, bind_group, &[]);
        rpass.set_vertex_buffer(WIREFRAME.vertex_slot, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..count, 0, 0..1);
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        let strategy = WireframeStrategy::for_device(ctx.polygon_line);
        if self.pipeline_format == Some(ctx.surface_format)
            && self.strategy == Some(strategy)
            && self.fill_pipeline.is_some()
            && self.wire_pipeline.is_some()
        {
            return;
        }

        let asset = WIREFRAME;
        let shader = asset.module(ctx.device);

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("facet uniform bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: asset.uniform_binding,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(Uniforms::MIN_BINDING_SIZE),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("facet pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let fill = build_pipeline(
            ctx,
            &asset,
            &shader,
            &pipeline_layout,
            primitive_state(FillMode::Solid, strategy),
            "facet fill pipeline",
        );
        let wire = build_pipeline(
            ctx,
            &asset,
            &shader,
            &pipeline_layout,
            primitive_state(FillMode::Wireframe, strategy),
            "facet wireframe pipeline",
        );

        log::info!(
            "built {} v{} pipelines for {:?} (wireframe via {:?})",
            asset.name,
            asset.version,
            ctx.surface_format,
            strategy
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.strategy = Some(strategy);
        self.fill_pipeline = Some(fill);
        self.wire_pipeline = Some(wire);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.uniform_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let uniform_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("facet mvp ubo"),
            size: Uniforms::SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("facet uniform bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: WIREFRAME.uniform_binding,
                resource: uniform_ubo.as_entire_binding(),
            }],
        });

        self.uniform_ubo = Some(uniform_ubo);
        self.bind_group = Some(bind_group);
    }
}

fn build_pipeline(
    ctx: &RenderCtx<'_>,
    asset: &ShaderAsset,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    primitive: wgpu::PrimitiveState,
    label: &str,
) -> wgpu::RenderPipeline {
    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),

        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(asset.vertex_entry),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(asset.fragment_entry),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive,
        depth_stencil: Some(depth_stencil_state(ctx.depth_format)),
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
