use std::f32::consts::PI;

use crate::mesh::Mesh;

/// Default latitude and longitude segment count for entity spheres.
pub const SPHERE_SEGMENTS: u32 = 16;

/// Axis-aligned box with one corner at the local origin, extending along +x,
/// -y and +z. Vertices are xyzw with w = 1.
///
/// Faces wind counter-clockwise seen from outside; each face is two triangles
/// sharing a diagonal.
pub fn box_mesh(size: f32) -> Mesh {
    let s = size;
    #[rustfmt::skip]
    let vertices = vec![
        0.0, 0.0, 0.0, 1.0,
        s,   0.0, 0.0, 1.0,
        0.0, 0.0, s,   1.0,
        s,   0.0, s,   1.0,
        0.0, -s,  0.0, 1.0,
        s,   -s,  0.0, 1.0,
        0.0, -s,  s,   1.0,
        s,   -s,  s,   1.0,
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 2, 3, 0, 3, 1, // top
        4, 7, 6, 4, 5, 7, // bottom
        0, 4, 6, 0, 6, 2, // left
        1, 3, 7, 1, 7, 5, // right
        0, 1, 5, 0, 5, 4, // front
        2, 6, 7, 2, 7, 3, // back
    ];

    Mesh::new(vertices, 4, indices)
}

/// Latitude/longitude sphere centered on the local origin.
///
/// Produces `(height_segments + 1) * (width_segments + 1)` xyz vertices. The
/// first and last rings collapse to the poles, so cells touching a pole emit a
/// single triangle and every other cell emits two.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let width_segments = width_segments.max(3);
    let height_segments = height_segments.max(2);
    let row_len = width_segments + 1;

    let mut vertices =
        Vec::with_capacity(((height_segments + 1) * row_len * 3) as usize);
    for iy in 0..=height_segments {
        let theta = PI * iy as f32 / height_segments as f32;
        for ix in 0..=width_segments {
            let phi = 2.0 * PI * ix as f32 / width_segments as f32;
            vertices.push(-radius * phi.cos() * theta.sin());
            vertices.push(radius * theta.cos());
            vertices.push(radius * phi.sin() * theta.sin());
        }
    }

    let at = |iy: u32, ix: u32| iy * row_len + ix;
    let mut indices = Vec::new();
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = at(iy, ix + 1);
            let b = at(iy, ix);
            let c = at(iy + 1, ix);
            let d = at(iy + 1, ix + 1);

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    Mesh::new(vertices, 3, indices)
}

/// Entity sphere with the default segment count.
pub fn sphere(radius: f32) -> Mesh {
    uv_sphere(radius, SPHERE_SEGMENTS, SPHERE_SEGMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn box_has_8_vertices_and_12_triangles() {
        for size in [0.5, 1.0, 8.0, 250.0] {
            let mesh = box_mesh(size);
            assert_eq!(mesh.vertex_count(), 8);
            assert_eq!(mesh.index_count(), 36);
            assert!(mesh.validate().is_ok());
        }
    }

    #[test]
    fn box_corner_sits_on_origin() {
        let mesh = box_mesh(10.0);
        assert_eq!(mesh.vertex(0), Vec3::ZERO);
        assert_eq!(mesh.vertex(7), Vec3::new(10.0, -10.0, 10.0));
    }

    #[test]
    fn box_faces_wind_outward() {
        let mesh = box_mesh(2.0);
        let center = Vec3::new(1.0, -1.0, 1.0);
        for [v0, v1, v2] in mesh.triangles() {
            let normal = (v1 - v0).cross(v2 - v0);
            let face_center = (v0 + v1 + v2) / 3.0;
            assert!(normal.dot(face_center - center) > 0.0);
        }
    }

    #[test]
    fn default_sphere_vertex_and_index_counts() {
        let mesh = sphere(5.0);
        assert_eq!(mesh.vertex_count(), 17 * 17);
        // 16 columns * (1 + 14 * 2 + 1) triangles
        assert_eq!(mesh.triangle_count(), 16 * 30);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = sphere(3.0);
        for i in 0..mesh.vertex_count() {
            assert!((mesh.vertex(i).length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_has_no_degenerate_triangles() {
        let mesh = sphere(1.0);
        for [v0, v1, v2] in mesh.triangles() {
            let area = (v1 - v0).cross(v2 - v0).length() / 2.0;
            assert!(area > 1e-4, "degenerate triangle {v0} {v1} {v2}");
        }
    }

    #[test]
    fn sphere_faces_wind_outward() {
        let mesh = sphere(10.0);
        for [v0, v1, v2] in mesh.triangles() {
            let normal = (v1 - v0).cross(v2 - v0);
            assert!(normal.dot((v0 + v1 + v2) / 3.0) > 0.0);
        }
    }

    #[test]
    fn custom_segment_counts() {
        let mesh = uv_sphere(1.0, 8, 4);
        assert_eq!(mesh.vertex_count(), 9 * 5);
        assert_eq!(mesh.triangle_count(), 8 * (1 + 2 * 2 + 1));
        assert!(mesh.validate().is_ok());
    }
}
