use glam::Vec3;
use starblaster_common::TextureId;
use starblaster_kernel::{EntityKind, World};

/// Buffers for one live entity, borrowed from the world for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub kind: EntityKind,
    pub origin: Vec3,
    /// Flat vertex buffer, `components` floats per vertex.
    pub vertices: &'a [f32],
    pub components: usize,
    pub indices: &'a [u32],
    /// One RGBA tuple per index entry.
    pub colors: &'a [f32],
    pub tex_coords: Option<&'a [f32]>,
    pub texture: Option<TextureId>,
}

impl DrawItem<'_> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.components.max(1)
    }

    /// World-space model matrix. Entities are only ever translated.
    pub fn model_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_translation(self.origin)
    }
}

/// Per-frame ordered render list: ship, projectiles, planets, collectibles.
pub fn draw_list(world: &World) -> Vec<DrawItem<'_>> {
    world
        .live_entities()
        .into_iter()
        .map(|entity| {
            let body = entity.body();
            DrawItem {
                kind: entity.kind(),
                origin: body.origin,
                vertices: body.vertices(),
                components: body.mesh().components,
                indices: body.indices(),
                colors: body.colors(),
                tex_coords: body.tex_coords(),
                texture: body.texture(),
            }
        })
        .collect()
}
