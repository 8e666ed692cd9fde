use glam::Vec3;

/// Errors from validating hand-built mesh buffers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("vertex tuples must have 3 or 4 components, got {0}")]
    BadComponentCount(usize),
    #[error("vertex buffer length {len} is not a multiple of {components}")]
    RaggedVertices { len: usize, components: usize },
    #[error("index count {0} is not a multiple of 3")]
    RaggedIndices(usize),
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },
    #[error("color buffer has {colors} floats, expected {expected}")]
    ColorLength { colors: usize, expected: usize },
}

/// Triangle mesh as flat GPU-style buffers.
///
/// `vertices` is grouped in tuples of `components` floats (3 for xyz, 4 for
/// xyzw); `indices` lists triangles as consecutive triples.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<f32>,
    pub components: usize,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<f32>, components: usize, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            components,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        if self.components == 0 {
            return 0;
        }
        self.vertices.len() / self.components
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `i`, ignoring any w component.
    pub fn vertex(&self, i: usize) -> Vec3 {
        let base = i * self.components;
        Vec3::new(
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        )
    }

    /// Triangles as vertex position triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [
                self.vertex(t[0] as usize),
                self.vertex(t[1] as usize),
                self.vertex(t[2] as usize),
            ]
        })
    }

    /// Check buffer shapes and that every index references a vertex.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.components != 3 && self.components != 4 {
            return Err(GeometryError::BadComponentCount(self.components));
        }
        if self.vertices.len() % self.components != 0 {
            return Err(GeometryError::RaggedVertices {
                len: self.vertices.len(),
                components: self.components,
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::RaggedIndices(self.indices.len()));
        }
        let vertex_count = self.vertex_count();
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, i)| **i as usize >= vertex_count)
        {
            return Err(GeometryError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }
        Ok(())
    }

    /// Check a flat color buffer against this mesh's index count.
    pub fn validate_colors(&self, colors: &[f32]) -> Result<(), GeometryError> {
        let expected = self.indices.len() * 4;
        if colors.len() != expected {
            return Err(GeometryError::ColorLength {
                colors: colors.len(),
                expected,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        Mesh::new(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            3,
            vec![0, 1, 2],
        )
    }

    #[test]
    fn valid_triangle() {
        let mesh = triangle();
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex(1), Vec3::X);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mut mesh = triangle();
        mesh.indices[2] = 3;
        assert_eq!(
            mesh.validate(),
            Err(GeometryError::IndexOutOfRange {
                position: 2,
                index: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn ragged_buffers_are_reported() {
        let mut mesh = triangle();
        mesh.indices.push(0);
        assert_eq!(mesh.validate(), Err(GeometryError::RaggedIndices(4)));

        let mut mesh = triangle();
        mesh.vertices.pop();
        assert!(matches!(
            mesh.validate(),
            Err(GeometryError::RaggedVertices { .. })
        ));

        let mesh = Mesh::new(vec![], 2, vec![]);
        assert_eq!(mesh.validate(), Err(GeometryError::BadComponentCount(2)));
    }

    #[test]
    fn color_length_checked_against_indices() {
        let mesh = triangle();
        assert!(mesh.validate_colors(&[1.0; 12]).is_ok());
        assert_eq!(
            mesh.validate_colors(&[1.0; 8]),
            Err(GeometryError::ColorLength {
                colors: 8,
                expected: 12
            })
        );
    }
}
