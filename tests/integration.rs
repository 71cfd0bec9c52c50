use lathe_engine::geom::{
    ControlPointSet, LatheOptions, Point3, Vec3, revolve_profile, revolve_profile_with_options,
};
use lathe_engine::profile::{ProfileError, parse_control_points};

const VASE_PROFILE: &str = "\
0 0 1
0 0 1
1 0 0
2 0 1
1 0 2
";

fn vase_control() -> ControlPointSet {
    ControlPointSet::new(
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 1.0),
        vec![
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 2.0),
        ],
    )
}

#[test]
fn vase_profile_end_to_end() {
    let options = LatheOptions {
        samples_per_segment: 1,
        angular_steps: 4,
        smooth: true,
        caps: true,
        ..LatheOptions::default()
    };
    let (mesh, diagnostics) =
        revolve_profile_with_options(&vase_control(), &options).expect("pipeline runs");

    // 2 segments x 2 samples -> a 4x4 grid, 18 body triangles and one
    // two-triangle fan per end ring.
    assert_eq!(diagnostics.curve_sample_count, 4);
    assert_eq!(mesh.vertex_count(), 16);
    assert_eq!(diagnostics.cap_triangle_count, 4);
    assert_eq!(mesh.triangle_count(), 22);
    assert_eq!(&mesh.indices[0..3], &[3, 0, 1]);

    let normals = mesh.normals.as_ref().expect("smooth run carries normals");
    assert_eq!(normals.len(), 16);
    assert!(mesh.validate().is_ok());
}

#[test]
fn seam_vertices_coincide_in_the_final_mesh() {
    let (mesh, diagnostics) = revolve_profile(&vase_control()).expect("pipeline runs");

    let cols = diagnostics.grid_cols;
    assert_eq!(cols, 22);
    for row in 0..diagnostics.grid_rows {
        let first = mesh.positions[row * cols];
        let last = mesh.positions[row * cols + cols - 1];
        assert_eq!(first, last, "row {row} seam vertices diverge");
    }
}

#[test]
fn text_profile_round_trips_through_the_loader() {
    let control = parse_control_points(VASE_PROFILE).expect("profile parses");
    assert_eq!(control, vase_control());

    let options = LatheOptions {
        samples_per_segment: 2,
        angular_steps: 6,
        ..LatheOptions::default()
    };
    let (from_text, _) = revolve_profile_with_options(&control, &options).expect("pipeline runs");
    let (direct, _) =
        revolve_profile_with_options(&vase_control(), &options).expect("pipeline runs");
    assert_eq!(from_text, direct);
}

#[test]
fn blank_lines_are_skipped() {
    let text = "0 0 1\n\n0 0 1\n1 0 0\n\n\n2 0 1\n";
    let control = parse_control_points(text).expect("blank lines are ignored");

    assert_eq!(control.points.len(), 2);
}

#[test]
fn malformed_row_reports_its_line_number() {
    let text = "0 0 1\n0 0 1\n1 0 zero\n2 0 1\n";
    let err = parse_control_points(text).expect_err("bad token must be rejected");

    match err {
        ProfileError::MalformedRow { line, content } => {
            assert_eq!(line, 3);
            assert_eq!(content, "1 0 zero");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn extra_tokens_are_malformed() {
    let text = "0 0 1\n0 0 1\n1 0 0 4\n2 0 1\n";
    let err = parse_control_points(text).expect_err("four tokens must be rejected");

    assert!(matches!(err, ProfileError::MalformedRow { line: 3, .. }));
}

#[test]
fn too_few_rows_are_rejected() {
    let err = parse_control_points("0 0 1\n0 0 1\n1 0 0\n").expect_err("one profile row is too few");

    assert!(matches!(err, ProfileError::TooFewRows { rows: 3 }));
}

#[test]
fn axis_touching_profile_still_produces_a_mesh() {
    // Profile starts and ends on the revolution axis, like a closed vessel.
    let control = ControlPointSet::new(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, 2.0),
        ],
    );
    let options = LatheOptions {
        samples_per_segment: 2,
        angular_steps: 5,
        smooth: true,
        ..LatheOptions::default()
    };
    let (mesh, diagnostics) =
        revolve_profile_with_options(&control, &options).expect("degenerate normals are tolerated");

    // First and last grid rows sit on the axis: zero-length normals there.
    assert_eq!(diagnostics.on_axis_normal_count, 2 * diagnostics.grid_cols);
    assert_eq!(diagnostics.warnings.len(), 1);
    assert!(!diagnostics.is_clean());
    assert!(mesh.validate().is_ok());

    let normals = mesh.normals.as_ref().expect("smooth run carries normals");
    assert_eq!(normals[0], [0.0, 0.0, 0.0]);
    assert_eq!(normals[normals.len() - 1], [0.0, 0.0, 0.0]);
}
