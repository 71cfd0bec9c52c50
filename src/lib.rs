#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Surface-of-revolution mesh generation from hand-authored profile curves.
//!
//! A profile is an ordered list of 3D control points (radius and height in
//! the first and third components) plus two boundary tangents. The pipeline
//! interpolates the points with a Catmull-Rom spline evaluated as piecewise
//! cubic Beziers, sweeps the samples around the +Z axis into a structured
//! vertex grid, optionally derives per-vertex normals from the revolved
//! derivative field, triangulates the grid with fixed winding, and
//! optionally fans the end rings into caps.
//!
//! ```
//! use lathe_engine::geom::{
//!     ControlPointSet, LatheOptions, Point3, Vec3, revolve_profile_with_options,
//! };
//!
//! let control = ControlPointSet::new(
//!     Vec3::new(0.0, 0.0, 1.0),
//!     Vec3::new(0.0, 0.0, 1.0),
//!     vec![
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(2.0, 0.0, 1.0),
//!         Point3::new(1.0, 0.0, 2.0),
//!     ],
//! );
//! let options = LatheOptions { smooth: true, caps: true, ..LatheOptions::default() };
//! let (mesh, diagnostics) = revolve_profile_with_options(&control, &options).unwrap();
//! assert_eq!(mesh.vertex_count(), diagnostics.vertex_count);
//! ```

pub mod geom;
pub mod profile;

pub use geom::{
    ControlPointSet, LatheDiagnostics, LatheError, LatheMesh, LatheOptions, revolve_profile,
    revolve_profile_with_options,
};
pub use profile::{ProfileError, load_control_points, parse_control_points};
