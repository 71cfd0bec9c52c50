/// Fan-triangulate a contiguous ring of vertex indices `[ring_start, ring_end)`.
///
/// The fan anchors at the ring's last index rather than a centroid apex:
/// for each `i` in `ring_start + 1 .. ring_end - 1` the triangle
/// `(ring_end - 1, i - 1, i)` is emitted, `ring_end - ring_start - 2`
/// triangles in total. Only guaranteed non-degenerate when the ring lies on
/// a circle of nonzero radius; a ring collapsed onto the axis fans into
/// zero-area triangles, which is a defined output. Rings of fewer than 3
/// vertices yield an empty list.
#[must_use]
pub fn fan_ring(ring_start: usize, ring_end: usize) -> Vec<u32> {
    if ring_end < ring_start + 3 {
        return Vec::new();
    }

    let anchor = (ring_end - 1) as u32;
    let mut indices = Vec::with_capacity((ring_end - ring_start - 2) * 3);
    for i in ring_start + 1..ring_end - 1 {
        indices.extend_from_slice(&[anchor, (i - 1) as u32, i as u32]);
    }
    indices
}

/// Cap fans for a revolved grid: the bottom cap over the first angular ring
/// `[0, cols)` followed by the top cap over the last ring
/// `[rows * cols - cols, rows * cols)`. The result is meant to be prepended
/// to the body triangle list, bottom before top.
#[must_use]
pub fn grid_cap_fans(rows: usize, cols: usize) -> Vec<u32> {
    if rows == 0 {
        return Vec::new();
    }

    let mut indices = fan_ring(0, cols);
    indices.extend(fan_ring(rows * cols - cols, rows * cols));
    indices
}
