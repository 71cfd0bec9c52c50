use serde::{Deserialize, Serialize};

use super::caps::grid_cap_fans;
use super::diagnostics::LatheDiagnostics;
use super::mesh::LatheMesh;
use super::normals::estimate_grid_normals;
use super::revolve::{RevolveError, revolve_points, revolve_vectors, validate_angular_steps};
use super::spline::{
    ControlPointSet, SplineError, SplineOptions, sample_profile_spline, validate_control_points,
};
use super::triangulation::triangulate_grid;

/// Options controlling profile revolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatheOptions {
    /// Parameter steps per spline segment (>= 1).
    pub samples_per_segment: usize,
    /// Angular steps around the axis, seam columns included (>= 2).
    pub angular_steps: usize,
    /// Catmull-Rom tension passed through to spline sampling.
    pub tension: f64,
    /// Derive per-vertex normals from the revolved derivative field.
    pub smooth: bool,
    /// Fan-triangulate the first and last angular rings into end caps.
    pub caps: bool,
}

impl Default for LatheOptions {
    fn default() -> Self {
        Self {
            samples_per_segment: 12,
            angular_steps: 22,
            tension: 0.0,
            smooth: false,
            caps: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LatheError {
    #[error(transparent)]
    Spline(#[from] SplineError),
    #[error(transparent)]
    Revolve(#[from] RevolveError),
}

/// Revolve a profile curve with default options.
pub fn revolve_profile(
    control: &ControlPointSet,
) -> Result<(LatheMesh, LatheDiagnostics), LatheError> {
    revolve_profile_with_options(control, &LatheOptions::default())
}

/// Run the full pipeline: sample the profile spline, sweep it around the
/// +Z axis, optionally estimate normals and generate end caps, and return
/// the assembled mesh with its diagnostics.
///
/// Structural validation (control-point count, sample count, angular
/// resolution, finite inputs) completes before any sampling begins; a
/// failing run never yields a partial mesh. Numeric degeneracies such as
/// on-axis zero normals pass through as defined outputs and are reported in
/// the diagnostics.
pub fn revolve_profile_with_options(
    control: &ControlPointSet,
    options: &LatheOptions,
) -> Result<(LatheMesh, LatheDiagnostics), LatheError> {
    validate_control_points(control)?;
    if options.samples_per_segment == 0 {
        return Err(SplineError::InvalidSampleCount.into());
    }
    validate_angular_steps(options.angular_steps)?;

    let spline_options = SplineOptions {
        samples_per_segment: options.samples_per_segment,
        tension: options.tension,
    };
    let samples = sample_profile_spline(control, &spline_options)?;

    let vertices = revolve_points(&samples.points, options.angular_steps)?;
    let rows = vertices.rows();
    let cols = vertices.cols();

    let (normals, on_axis_normal_count) = if options.smooth {
        let u_tangents = revolve_vectors(&samples.derivatives, options.angular_steps)?;
        let (normal_grid, on_axis) = estimate_grid_normals(&u_tangents, &vertices);
        (Some(normal_grid), on_axis)
    } else {
        (None, 0)
    };

    let body = triangulate_grid(rows, cols);
    let (indices, cap_triangle_count) = if options.caps {
        let mut indices = grid_cap_fans(rows, cols);
        let cap_triangle_count = indices.len() / 3;
        indices.extend_from_slice(&body);
        (indices, cap_triangle_count)
    } else {
        (body, 0)
    };

    let mut diagnostics = LatheDiagnostics {
        control_point_count: control.points.len(),
        segment_count: control.points.len() - 1,
        curve_sample_count: samples.points.len(),
        grid_rows: rows,
        grid_cols: cols,
        vertex_count: vertices.len(),
        triangle_count: indices.len() / 3,
        cap_triangle_count,
        on_axis_normal_count,
        warnings: Vec::new(),
    };
    if on_axis_normal_count > 0 {
        diagnostics.push_warning(format!(
            "{on_axis_normal_count} on-axis vertices have zero-length normals"
        ));
    }

    let positions = vertices.items().iter().map(|p| p.to_array()).collect();
    let normals = normals.map(|grid| grid.items().iter().map(|n| n.to_array()).collect());
    let mesh = LatheMesh::with_attributes(positions, indices, normals);
    debug_assert!(mesh.validate().is_ok(), "generated mesh failed validation");

    log::debug!(
        "revolved profile: {} vertices, {} triangles ({} caps)",
        diagnostics.vertex_count,
        diagnostics.triangle_count,
        diagnostics.cap_triangle_count
    );

    Ok((mesh, diagnostics))
}
