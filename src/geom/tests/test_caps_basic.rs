use super::super::*;

#[test]
fn fan_emits_size_minus_two_triangles() {
    let indices = fan_ring(0, 6);

    assert_eq!(indices.len(), 4 * 3);
    assert!(indices.iter().all(|&i| (i as usize) < 6));
}

#[test]
fn fan_anchors_at_the_ring_end() {
    assert_eq!(fan_ring(0, 4), vec![3, 0, 1, 3, 1, 2]);
}

#[test]
fn fan_handles_offset_rings() {
    let indices = fan_ring(8, 12);

    assert_eq!(indices, vec![11, 8, 9, 11, 9, 10]);
    assert!(indices.iter().all(|&i| (8..12).contains(&(i as usize))));
}

#[test]
fn tiny_rings_yield_no_triangles() {
    assert!(fan_ring(0, 0).is_empty());
    assert!(fan_ring(0, 2).is_empty());
    assert!(fan_ring(5, 5).is_empty());
}

#[test]
fn grid_fans_cover_bottom_then_top() {
    let indices = grid_cap_fans(3, 4);

    let mut expected = fan_ring(0, 4);
    expected.extend(fan_ring(8, 12));
    assert_eq!(indices, expected);
    assert_eq!(indices.len(), 2 * 2 * 3);
}
