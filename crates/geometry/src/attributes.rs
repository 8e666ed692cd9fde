use starblaster_common::Rgba;

/// Samples per axis of the sphere texture-coordinate grid.
pub const TEXTURE_GRID_SIZE: usize = 25;

/// One copy of `color` per index entry, flattened to RGBA floats.
///
/// Coloring is per referenced vertex, not per unique vertex, so the buffer
/// length is always `index_count * 4`.
pub fn flat_colors(index_count: usize, color: Rgba) -> Vec<f32> {
    let mut colors = Vec::with_capacity(index_count * 4);
    for _ in 0..index_count {
        colors.extend_from_slice(&color.0);
    }
    colors
}

/// Uniform (u, v) grid over `[0, 1) x [0, 1)` used for textured spheres.
///
/// The grid has a fixed 25x25 sample count and does not track the sphere's
/// vertex count; renderers accept the mismatch.
pub fn texture_grid() -> Vec<f32> {
    let n = TEXTURE_GRID_SIZE;
    let mut coords = Vec::with_capacity(n * n * 2);
    for u in 0..n {
        for v in 0..n {
            coords.push(u as f32 / n as f32);
            coords.push(v as f32 / n as f32);
        }
    }
    coords
}
