//! Diagnostics collected while generating a revolved mesh.
//!
//! Every pipeline run returns a [`LatheDiagnostics`] alongside the mesh.
//! The counters describe what was built; `warnings` records tolerated
//! degeneracies (on-axis zero normals and the like), which are never
//! errors.

use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct LatheDiagnostics {
    /// Number of profile control points (excluding the boundary tangents).
    pub control_point_count: usize,

    /// Number of cubic segments the profile converted into.
    pub segment_count: usize,

    /// Total curve samples, including duplicated segment joins.
    pub curve_sample_count: usize,

    /// Vertex grid dimensions: one row per curve sample, one column per
    /// angular step (seam columns included).
    pub grid_rows: usize,
    pub grid_cols: usize,

    /// Total number of vertices in the final mesh.
    pub vertex_count: usize,

    /// Total number of triangles, caps included.
    pub triangle_count: usize,

    /// Number of cap triangles prepended to the body list.
    pub cap_triangle_count: usize,

    /// Vertices on the revolution axis whose normal came out zero-length.
    /// Only counted when smooth normals were requested.
    pub on_axis_normal_count: usize,

    pub warnings: Vec<String>,
}

impl LatheDiagnostics {
    /// True when generation saw no tolerated degeneracies.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// One-line summary for log and CLI output.
    ///
    /// Format: `"V:{vertices} T:{triangles} [issues...]"`
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("V:{} T:{}", self.vertex_count, self.triangle_count)];

        if self.cap_triangle_count > 0 {
            parts.push(format!("caps:{}", self.cap_triangle_count));
        }
        if self.on_axis_normal_count > 0 {
            parts.push(format!("on-axis:{}", self.on_axis_normal_count));
        }
        if !self.warnings.is_empty() {
            parts.push(format!("warnings:{}", self.warnings.len()));
        }

        parts.join(" ")
    }
}
