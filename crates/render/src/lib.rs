//! Rendering Adapter: what a renderer receives each frame.
//!
//! # Invariants
//! - Renderers read the world; they never mutate it.
//! - Camera transform, projection and buffer upload belong to the renderer.
//!   The kernel only hands over per-entity buffers and origins.

mod draw;
mod renderer;
mod textures;

pub use draw::{DrawItem, draw_list};
pub use renderer::{DebugTextRenderer, RenderView, Renderer};
pub use textures::{TEXTURE_FILES, texture_file};

pub fn crate_info() -> &'static str {
    concat!("starblaster-render v", env!("CARGO_PKG_VERSION"))
}
