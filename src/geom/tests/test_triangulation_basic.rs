use super::super::*;

#[test]
fn triangle_count_and_index_bounds() {
    let rows = 5;
    let cols = 4;
    let indices = triangulate_grid(rows, cols);

    let expected_triangles = (rows - 1) * (cols - 1) * 2;
    assert_eq!(indices.len(), expected_triangles * 3);

    let vertex_count = (rows * cols) as u32;
    assert!(indices.iter().all(|&i| i < vertex_count));
}

#[test]
fn cell_corner_order_is_fixed() {
    // 2x3 grid, two cells, two triangles each, emitted row-major with the
    // lower-left triangle first.
    let indices = triangulate_grid(2, 3);

    assert_eq!(indices, vec![0, 3, 1, 1, 3, 4, 1, 4, 2, 2, 4, 5]);
}

#[test]
fn degenerate_grids_yield_no_triangles() {
    assert!(triangulate_grid(1, 5).is_empty());
    assert!(triangulate_grid(5, 1).is_empty());
    assert!(triangulate_grid(0, 0).is_empty());
}

#[test]
fn seam_columns_are_never_stitched() {
    let rows = 3;
    let cols = 4;
    let indices = triangulate_grid(rows, cols);

    for tri in indices.chunks_exact(3) {
        let columns: Vec<usize> = tri.iter().map(|&i| i as usize % cols).collect();
        let touches_first = columns.contains(&0);
        let touches_last = columns.contains(&(cols - 1));
        assert!(
            !(touches_first && touches_last),
            "triangle {tri:?} spans the seam"
        );
    }
}
