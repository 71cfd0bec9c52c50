use serde::Serialize;

/// Triangulated surface-of-revolution mesh.
///
/// Positions are the vertex grid flattened row-major; `indices` holds cap
/// triangles (when generated) followed by body triangles. Built once per
/// run and not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LatheMesh {
    pub positions: Vec<[f64; 3]>,
    /// One vector per vertex when smooth normals were requested. Vectors are
    /// unnormalized and may be zero on the revolution axis.
    pub normals: Option<Vec<[f64; 3]>>,
    pub indices: Vec<u32>,
}

impl LatheMesh {
    /// Create a mesh with positions and indices only.
    #[must_use]
    pub fn new(positions: Vec<[f64; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            normals: None,
            indices,
        }
    }

    #[must_use]
    pub fn with_attributes(
        positions: Vec<[f64; 3]>,
        indices: Vec<u32>,
        normals: Option<Vec<[f64; 3]>>,
    ) -> Self {
        Self {
            positions,
            normals,
            indices,
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if any vertex position contains NaN or Inf values.
    #[must_use]
    pub fn has_invalid_vertices(&self) -> bool {
        self.positions
            .iter()
            .any(|p| !p[0].is_finite() || !p[1].is_finite() || !p[2].is_finite())
    }

    /// Returns true if all vertex indices are within bounds.
    #[must_use]
    pub fn has_valid_indices(&self) -> bool {
        let n = self.positions.len() as u32;
        self.indices.iter().all(|&i| i < n)
    }

    /// Returns true if indices represent a triangle list.
    #[must_use]
    pub fn has_triangle_indices(&self) -> bool {
        self.indices.len() % 3 == 0
    }

    /// Returns true if the normal buffer, when present, matches `positions.len()`.
    #[must_use]
    pub fn has_valid_attribute_lengths(&self) -> bool {
        self.normals
            .as_ref()
            .is_none_or(|normals| normals.len() == self.positions.len())
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.has_triangle_indices() {
            return Err("mesh indices are not a triangle list (len % 3 != 0)".to_string());
        }
        if self.has_invalid_vertices() {
            return Err("mesh has invalid vertex coordinates (NaN/Inf)".to_string());
        }
        if !self.has_valid_indices() {
            return Err("mesh has out-of-bounds vertex indices".to_string());
        }
        if !self.has_valid_attribute_lengths() {
            return Err("mesh normal buffer does not match vertex count".to_string());
        }
        Ok(())
    }
}
