mod caps;
mod core;
mod diagnostics;
mod grid;
mod lathe;
mod mesh;
mod normals;
mod revolve;
mod spline;
mod triangulation;

pub use caps::{fan_ring, grid_cap_fans};
pub use self::core::{
    Point3, QUANTIZE, Tolerance, Vec3, quantize_f64, quantize_point3, quantize_vec3,
};
pub use diagnostics::LatheDiagnostics;
pub use grid::Grid;
pub use lathe::{LatheError, LatheOptions, revolve_profile, revolve_profile_with_options};
pub use mesh::LatheMesh;
pub use normals::{angular_tangent, estimate_grid_normals};
pub use revolve::{RevolveError, revolve_points, revolve_vectors};
pub use spline::{
    ControlPointSet, CubicBezier3, SplineError, SplineOptions, SplineSamples, bezier_segments,
    profile_tangents, sample_profile_spline,
};
pub use triangulation::triangulate_grid;

#[cfg(test)]
mod tests;
