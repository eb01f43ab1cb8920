use super::{GeometryError, Palette, Polyhedron, Solid, Vertex};

/// GPU-ready geometry for one solid.
///
/// `indices` is a triangle list (fan-triangulated faces, outward winding).
/// `edges` is a line list over the polygon outlines, without the
/// triangulation diagonals.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub solid: Solid,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
    pub edges: Vec<u16>,
}

impl Mesh {
    pub fn build(solid: Solid, palette: &Palette) -> Result<Self, GeometryError> {
        Self::from_polyhedron(solid, &solid.polyhedron(), palette)
    }

    pub fn from_polyhedron(
        solid: Solid,
        poly: &Polyhedron,
        palette: &Palette,
    ) -> Result<Self, GeometryError> {
        let count = poly.positions.len();
        if count > u16::MAX as usize + 1 {
            return Err(GeometryError::TooManyVertices { count });
        }

        let vertices = poly
            .positions
            .iter()
            .enumerate()
            .map(|(i, p)| Vertex::new(p.to_array(), palette.color_for(i)))
            .collect();

        let mut indices = Vec::new();
        for (fi, face) in poly.faces.iter().enumerate() {
            if face.len() < 3 {
                return Err(GeometryError::DegenerateFace { face: fi, len: face.len() });
            }
            for k in 1..face.len() - 1 {
                indices.extend_from_slice(&[face[0], face[k], face[k + 1]]);
            }
        }

        let edges = poly.edges().into_iter().flat_map(|(a, b)| [a, b]).collect();

        let mesh = Self { solid, vertices, indices, edges };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Checks the index-list invariants against the vertex table.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let vertex_count = self.vertices.len();
        if vertex_count > u16::MAX as usize + 1 {
            return Err(GeometryError::TooManyVertices { count: vertex_count });
        }
        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::IndexCountNotTriangles { count: self.indices.len() });
        }
        if self.edges.len() % 2 != 0 {
            return Err(GeometryError::UnpairedEdgeIndex { count: self.edges.len() });
        }

        for &index in self.indices.iter().chain(&self.edges) {
            if index as usize >= vertex_count {
                return Err(GeometryError::IndexOutOfRange { index, vertex_count });
            }
        }

        for (triangle, t) in self.indices.chunks_exact(3).enumerate() {
            if t[0] == t[1] || t[1] == t[2] || t[0] == t[2] {
                return Err(GeometryError::DegenerateTriangle { triangle });
            }
        }

        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer size in bytes.
    pub fn vertex_buffer_size(&self) -> u64 {
        self.vertices.len() as u64 * Vertex::STRIDE
    }

    /// Index buffer size in bytes.
    pub fn index_buffer_size(&self) -> u64 {
        (self.indices.len() * std::mem::size_of::<u16>()) as u64
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    pub fn edge_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.edges)
    }
}
