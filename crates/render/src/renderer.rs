use std::fmt::Write;

use glam::{Mat4, Vec3};
use starblaster_common::GameConfig;
use starblaster_kernel::World;

use crate::draw::draw_list;
use crate::textures::texture_file;

/// Camera configuration handed to a renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderView {
    /// Camera position in camera space. The camera looks down -z.
    pub eye: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Viewport width over height.
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl RenderView {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            eye: config.camera_position,
            fov_degrees: config.field_of_view_degrees,
            aspect_ratio: config.aspect_ratio,
            near: 0.1,
            far: config.planet_spawn_depth + config.far_bound,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, Vec3::NEG_Z, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }
}

impl Default for RenderView {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Renderer-agnostic interface.
///
/// A renderer reads world state and a view and produces output. It never
/// mutates the world.
pub trait Renderer {
    type Output;

    fn render(&mut self, world: &World, view: &RenderView) -> Self::Output;
}

/// Human-readable frame dump for headless runs and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    frames: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, world: &World, view: &RenderView) -> String {
        self.frames += 1;
        let items = draw_list(world);
        tracing::trace!(frame = self.frames, items = items.len(), "debug render");

        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== frame {} (tick={}) entities={} ===",
            self.frames,
            world.tick(),
            items.len()
        );
        let _ = writeln!(
            out,
            "camera: eye=({:.1}, {:.1}, {:.1}) fov={:.0} aspect={:.2}",
            view.eye.x, view.eye.y, view.eye.z, view.fov_degrees, view.aspect_ratio
        );
        for item in &items {
            let texture = match item.texture {
                Some(texture) => format!("{texture} ({})", texture_file(texture)),
                None => "-".to_string(),
            };
            let _ = writeln!(
                out,
                "  {:<11} pos=({:.2}, {:.2}, {:.2}) verts={} indices={} colors={} texture={}",
                item.kind,
                item.origin.x,
                item.origin.y,
                item.origin.z,
                item.vertex_count(),
                item.indices.len(),
                item.colors.len() / 4,
                texture
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starblaster_kernel::{Sphere, StdRandom};

    fn world() -> World {
        World::new(GameConfig::default(), &mut StdRandom::seeded(8))
    }

    #[test]
    fn debug_renderer_lists_the_ship() {
        let world = world();
        let mut renderer = DebugTextRenderer::new();
        let output = renderer.render(&world, &RenderView::default());

        assert!(output.contains("tick=0"));
        assert!(output.contains("entities=1"));
        assert!(output.contains("ship"));
        assert!(output.contains("verts=8 indices=36 colors=36"));
        assert_eq!(renderer.frames(), 1);
    }

    #[test]
    fn debug_renderer_shows_planet_texture_file() {
        let mut world = world();
        let mut rng = StdRandom::seeded(3);
        world.insert_planet(Sphere::planet(10.0, Vec3::new(0.0, 0.0, -500.0), &mut rng));
        let output = DebugTextRenderer::new().render(&world, &RenderView::default());
        assert!(output.contains("planet"));
        assert!(output.contains("planet-texture"));
    }

    #[test]
    fn render_view_follows_config() {
        let view = RenderView::default();
        assert_eq!(view.fov_degrees, 45.0);
        assert_eq!(view.eye, Vec3::ZERO);
        // a point straight ahead projects to the screen center
        let clip = view.projection_matrix() * view.view_matrix() * Vec3::new(0.0, 0.0, -150.0).extend(1.0);
        assert!((clip.x / clip.w).abs() < 1e-6);
        assert!((clip.y / clip.w).abs() < 1e-6);
    }
}
