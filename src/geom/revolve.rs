use std::f64::consts::PI;

use super::core::{Point3, Vec3, quantize_f64};
use super::grid::Grid;

#[derive(Debug, thiserror::Error)]
pub enum RevolveError {
    #[error("angular resolution must be at least 2 steps, got {steps}")]
    InvalidAngularResolution { steps: usize },
}

pub(crate) fn validate_angular_steps(steps: usize) -> Result<(), RevolveError> {
    if steps < 2 {
        return Err(RevolveError::InvalidAngularResolution { steps });
    }
    Ok(())
}

/// Revolve sampled curve points around the +Z axis into a structured grid.
///
/// Each input point `(r, y, h)` is read as radius `r` and height `h` (the
/// second component does not affect the surface) and swept through
/// `theta_j = j * 2*pi / (steps - 1)` for `j = 0..steps`, producing one grid
/// row per curve point and one column per angular step. The first and last
/// columns both sit at the closing angle: they are numerically coincident
/// after quantization but remain distinct vertices. The seam is deliberately
/// left unwelded and unstitched.
pub fn revolve_points(curve: &[Point3], angular_steps: usize) -> Result<Grid<Point3>, RevolveError> {
    validate_angular_steps(angular_steps)?;

    let mut items = Vec::with_capacity(curve.len() * angular_steps);
    for p in curve.iter().copied() {
        for j in 0..angular_steps {
            let (x, y, z) = revolve_triple(p.x, p.z, theta_at(j, angular_steps));
            items.push(Point3::new(x, y, z));
        }
    }

    let grid = Grid::from_raw(curve.len(), angular_steps, items);

    #[cfg(debug_assertions)]
    {
        let tol = super::core::Tolerance::LOOSE;
        for row in 0..grid.rows() {
            let first = grid.at(row, 0);
            let last = grid.at(row, grid.cols() - 1);
            debug_assert!(
                tol.approx_eq_point3(first, last),
                "seam columns must coincide after quantization: row {row}, {first:?} vs {last:?}"
            );
        }
    }

    log::debug!(
        "revolved {} curve points through {} angular steps",
        curve.len(),
        angular_steps
    );

    Ok(grid)
}

/// Revolve a derivative field exactly like [`revolve_points`]. A curve
/// derivative `(dr, dy, dh)` rotates with its sample, giving the surface
/// tangent along the profile direction at every grid vertex.
pub fn revolve_vectors(field: &[Vec3], angular_steps: usize) -> Result<Grid<Vec3>, RevolveError> {
    validate_angular_steps(angular_steps)?;

    let mut items = Vec::with_capacity(field.len() * angular_steps);
    for v in field.iter().copied() {
        for j in 0..angular_steps {
            let (x, y, z) = revolve_triple(v.x, v.z, theta_at(j, angular_steps));
            items.push(Vec3::new(x, y, z));
        }
    }

    Ok(Grid::from_raw(field.len(), angular_steps, items))
}

fn theta_at(j: usize, angular_steps: usize) -> f64 {
    j as f64 * (2.0 * PI / (angular_steps - 1) as f64)
}

fn revolve_triple(r: f64, h: f64, theta: f64) -> (f64, f64, f64) {
    (
        quantize_f64(r * theta.cos()),
        quantize_f64(r * theta.sin()),
        quantize_f64(h),
    )
}
