/// Triangulate a structured row-major grid into an index list with fixed
/// winding.
///
/// For each cell `(i, j)` with corner index `V(i, j) = i * cols + j`, two
/// triangles are emitted in row-major cell order:
///
/// - `(V(i, j), V(i+1, j), V(i, j+1))`
/// - `(V(i, j+1), V(i+1, j), V(i+1, j+1))`
///
/// giving `(rows - 1) * (cols - 1) * 2` triangles, counter-clockwise under
/// the crate's front-face convention. The last column is never stitched back
/// to the first; a closed revolution relies on its coincident seam vertices.
/// Grids with fewer than two rows or columns contain no cells and yield an
/// empty list.
#[must_use]
pub fn triangulate_grid(rows: usize, cols: usize) -> Vec<u32> {
    if rows < 2 || cols < 2 {
        return Vec::new();
    }

    let triangle_count = (rows - 1) * (cols - 1) * 2;
    let mut indices = Vec::with_capacity(triangle_count * 3);
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let v00 = (i * cols + j) as u32;
            let v01 = (i * cols + j + 1) as u32;
            let v10 = ((i + 1) * cols + j) as u32;
            let v11 = ((i + 1) * cols + j + 1) as u32;

            indices.extend_from_slice(&[v00, v10, v01]);
            indices.extend_from_slice(&[v01, v10, v11]);
        }
    }

    indices
}
