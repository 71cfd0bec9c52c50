use super::core::{Point3, Vec3, quantize_vec3};
use super::grid::Grid;

/// Analytic derivative of the revolution with respect to angle at a vertex
/// `(x, y, z)`: the tangent along the angular direction, `(-y, x, 0)`.
/// Zero for on-axis vertices.
#[must_use]
pub const fn angular_tangent(p: Point3) -> Vec3 {
    Vec3::new(-p.y, p.x, 0.0)
}

/// Derive per-vertex normals from the revolved derivative field and the
/// vertex grid.
///
/// The normal at each vertex is `cross(u_tangent, angular_tangent)`,
/// quantized but never normalized, so magnitudes carry the local surface
/// scale. On-axis vertices (`x == y == 0`) have a zero angular tangent and
/// therefore a zero normal; that is a defined output, not an error, and the
/// count of such vertices is returned for diagnostics.
///
/// Both grids must share dimensions; they come from revolving the same
/// sample sequence.
#[must_use]
pub fn estimate_grid_normals(
    u_tangents: &Grid<Vec3>,
    vertices: &Grid<Point3>,
) -> (Grid<Vec3>, usize) {
    debug_assert_eq!(u_tangents.rows(), vertices.rows(), "grid rows mismatch");
    debug_assert_eq!(u_tangents.cols(), vertices.cols(), "grid cols mismatch");

    let mut on_axis_count = 0usize;
    let mut items = Vec::with_capacity(vertices.len());
    for (u_tangent, vertex) in u_tangents.items().iter().zip(vertices.items()) {
        let vertex = *vertex;
        if vertex.x == 0.0 && vertex.y == 0.0 {
            on_axis_count += 1;
        }
        items.push(quantize_vec3(u_tangent.cross(angular_tangent(vertex))));
    }

    if on_axis_count > 0 {
        log::warn!("{on_axis_count} on-axis vertices produced zero-length normals");
    }

    (
        Grid::from_raw(vertices.rows(), vertices.cols(), items),
        on_axis_count,
    )
}
