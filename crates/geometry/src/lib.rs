//! Geometry Generators: procedural meshes backing every entity.
//!
//! Generators return index and flat vertex buffers ready for upload. They are
//! pure and infallible; [`Mesh::validate`] checks hand-built buffers.
//!
//! # Invariants
//! - Every index references an existing vertex.
//! - Flat color buffers hold one RGBA tuple per index entry.

mod attributes;
mod mesh;
mod shapes;

pub use attributes::{TEXTURE_GRID_SIZE, flat_colors, texture_grid};
pub use mesh::{GeometryError, Mesh};
pub use shapes::{SPHERE_SEGMENTS, box_mesh, sphere, uv_sphere};
