use super::super::*;

fn tri_mesh() -> LatheMesh {
    LatheMesh::with_attributes(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        vec![0, 1, 2],
        Some(vec![[0.0, 0.0, 1.0], [0.0, 0.0, 1.0], [0.0, 0.0, 1.0]]),
    )
}

#[test]
fn validate_accepts_a_well_formed_mesh() {
    let mesh = tri_mesh();

    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert!(mesh.validate().is_ok());
}

#[test]
fn validate_rejects_out_of_bounds_indices() {
    let mut mesh = tri_mesh();
    mesh.indices = vec![0, 1, 3];

    assert!(!mesh.has_valid_indices());
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_rejects_partial_triangles() {
    let mut mesh = tri_mesh();
    mesh.indices = vec![0, 1];

    assert!(!mesh.has_triangle_indices());
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_rejects_non_finite_positions() {
    let mut mesh = tri_mesh();
    mesh.positions[1] = [f64::NAN, 0.0, 0.0];

    assert!(mesh.has_invalid_vertices());
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_rejects_normal_count_mismatch() {
    let mut mesh = tri_mesh();
    mesh.normals = Some(vec![[0.0, 0.0, 1.0]]);

    assert!(!mesh.has_valid_attribute_lengths());
    assert!(mesh.validate().is_err());
}
