use serde::{Deserialize, Serialize};

use super::core::{Point3, Vec3, quantize_point3, quantize_vec3};

/// Ordered control data for a profile curve: two boundary tangent vectors
/// followed by the profile points themselves.
///
/// Only the first and third components (radius, height) of each profile
/// point shape the revolved surface; the second component is interpolated
/// like any other but dropped at revolution time.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointSet {
    pub start_tangent: Vec3,
    pub end_tangent: Vec3,
    pub points: Vec<Point3>,
}

impl ControlPointSet {
    #[must_use]
    pub const fn new(start_tangent: Vec3, end_tangent: Vec3, points: Vec<Point3>) -> Self {
        Self {
            start_tangent,
            end_tangent,
            points,
        }
    }

    /// Build a control-point set from raw numeric rows. The first two rows
    /// are the boundary tangents, every remaining row is a profile point.
    pub fn from_rows(rows: &[[f64; 3]]) -> Result<Self, SplineError> {
        if rows.len() < 4 {
            return Err(SplineError::InsufficientControlPoints {
                count: rows.len().saturating_sub(2),
            });
        }
        let start_tangent = Vec3::from_array(rows[0]);
        let end_tangent = Vec3::from_array(rows[1]);
        let points = rows[2..].iter().map(|row| Point3::from_array(*row)).collect();
        Ok(Self::new(start_tangent, end_tangent, points))
    }
}

/// Options for profile-spline sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplineOptions {
    /// Number of parameter steps per Bezier segment; each segment yields
    /// `samples_per_segment + 1` samples (the terminal `u = 1` included).
    pub samples_per_segment: usize,
    /// Catmull-Rom tension; 0 is the classic interpolating spline, 1
    /// collapses all tangents and yields piecewise-linear motion between
    /// control points.
    pub tension: f64,
}

impl Default for SplineOptions {
    fn default() -> Self {
        Self {
            samples_per_segment: 12,
            tension: 0.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SplineError {
    #[error("profile requires at least 2 control points, got {count}")]
    InsufficientControlPoints { count: usize },
    #[error("samples per segment must be at least 1")]
    InvalidSampleCount,
    #[error("control points and tangents must be finite")]
    NonFinitePoint,
}

/// Sampled profile curve: one parametric derivative per point, in the same
/// order. Lengths are always equal.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSamples {
    pub points: Vec<Point3>,
    pub derivatives: Vec<Vec3>,
}

/// Cubic Bezier segment in Bernstein form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier3 {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl CubicBezier3 {
    #[must_use]
    pub const fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point3::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x + b3 * self.p3.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y + b3 * self.p3.y,
            b0 * self.p0.z + b1 * self.p1.z + b2 * self.p2.z + b3 * self.p3.z,
        )
    }

    /// First derivative with respect to the segment parameter.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let a = self.p1.sub_point(self.p0);
        let b = self.p2.sub_point(self.p1);
        let c = self.p3.sub_point(self.p2);
        a.mul_scalar(3.0 * u * u)
            .add(b.mul_scalar(6.0 * u * t))
            .add(c.mul_scalar(3.0 * t * t))
    }
}

/// Full tangent sequence for a control-point set: the boundary tangents at
/// the ends, central differences at interior points, all scaled by
/// `1 - tension`.
#[must_use]
pub fn profile_tangents(control: &ControlPointSet, tension: f64) -> Vec<Vec3> {
    let points = &control.points;
    let scale = 1.0 - tension;
    let mut tangents = Vec::with_capacity(points.len());
    tangents.push(control.start_tangent.mul_scalar(scale));
    for k in 1..points.len().saturating_sub(1) {
        let central = points[k + 1].sub_point(points[k - 1]).mul_scalar(0.5);
        tangents.push(central.mul_scalar(scale));
    }
    if points.len() >= 2 {
        tangents.push(control.end_tangent.mul_scalar(scale));
    }
    tangents
}

/// Convert position + tangent data into one cubic Bezier per consecutive
/// point pair: `{P_k, P_k + T_k/3, P_{k+1} - T_{k+1}/3, P_{k+1}}`. Segment
/// endpoints are exactly the control points.
#[must_use]
pub fn bezier_segments(points: &[Point3], tangents: &[Vec3]) -> Vec<CubicBezier3> {
    debug_assert_eq!(points.len(), tangents.len(), "one tangent per point");
    let mut segments = Vec::with_capacity(points.len().saturating_sub(1));
    for k in 0..points.len().saturating_sub(1) {
        segments.push(CubicBezier3::new(
            points[k],
            points[k].add_vec(tangents[k].div_scalar(3.0)),
            points[k + 1].sub_vec(tangents[k + 1].div_scalar(3.0)),
            points[k + 1],
        ));
    }
    segments
}

pub(crate) fn validate_control_points(control: &ControlPointSet) -> Result<(), SplineError> {
    if control.points.len() < 2 {
        return Err(SplineError::InsufficientControlPoints {
            count: control.points.len(),
        });
    }
    let tangents_finite = control.start_tangent.is_finite() && control.end_tangent.is_finite();
    if !tangents_finite || control.points.iter().any(|p| !p.is_finite()) {
        return Err(SplineError::NonFinitePoint);
    }
    Ok(())
}

/// Sample the interpolating spline through a control-point set.
///
/// Each of the `n - 1` segments is evaluated at `m + 1` parameters
/// `u = i / m`, `i = 0..=m`, so the returned sequences hold exactly
/// `(n - 1) * (m + 1)` entries in segment order. Sampling is driven by
/// index, never by accumulating a step, so the terminal `u = 1` sample is
/// always present and exact. Outputs are quantized to 6 decimals.
///
/// Interior segment joins appear twice (the `u = 1` sample of one segment
/// and the `u = 0` sample of the next); callers relying on row counts must
/// account for that.
pub fn sample_profile_spline(
    control: &ControlPointSet,
    options: &SplineOptions,
) -> Result<SplineSamples, SplineError> {
    validate_control_points(control)?;
    if options.samples_per_segment == 0 {
        return Err(SplineError::InvalidSampleCount);
    }

    let tangents = profile_tangents(control, options.tension);
    let segments = bezier_segments(&control.points, &tangents);

    let m = options.samples_per_segment;
    let total = segments.len() * (m + 1);
    let mut points = Vec::with_capacity(total);
    let mut derivatives = Vec::with_capacity(total);
    for segment in &segments {
        for i in 0..=m {
            let u = i as f64 / m as f64;
            points.push(quantize_point3(segment.point_at(u)));
            derivatives.push(quantize_vec3(segment.derivative_at(u)));
        }
    }

    log::debug!(
        "sampled profile spline: {} segments x {} samples -> {} curve points",
        segments.len(),
        m + 1,
        points.len()
    );

    Ok(SplineSamples { points, derivatives })
}
