use approx::assert_relative_eq;
use cgm::projection::{perspective, Perspective};
use cgm::{vec3, Column, MajorOrder, Mat4f, Row};
use nalgebra::{Matrix4, Perspective3, Point3};

fn to_nalgebra(mat: &Mat4f) -> Matrix4<f32> {
    // nalgebra stores column-major.
    let mut buf = [0.0; 16];
    mat.write_to(MajorOrder::ColumnMajor, &mut buf).unwrap();
    Matrix4::from_column_slice(&buf)
}

fn assert_matches_nalgebra(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) {
    let ours = Perspective::new(fov_y_degrees, aspect, near, far)
        .unwrap()
        .matrix::<Column>();
    let theirs = Perspective3::new(aspect, fov_y_degrees.to_radians(), near, far).to_homogeneous();

    let ours = to_nalgebra(&ours);
    for (a, b) in ours.iter().zip(theirs.iter()) {
        assert_relative_eq!(a, b, epsilon = 1e-5, max_relative = 1e-5);
    }
}

#[test]
fn matches_nalgebra() {
    assert_matches_nalgebra(90.0, 1.0, 1.0, 3.0);
    assert_matches_nalgebra(60.0, 16.0 / 9.0, 0.1, 100.0);
    assert_matches_nalgebra(45.0, 4.0 / 3.0, 0.5, 1000.0);

    let mut rng = fastrand::Rng::with_seed(1234);
    for _ in 0..100 {
        let fov = 10.0 + rng.f32() * 160.0;
        let aspect = 0.25 + rng.f32() * 4.0;
        let near = 0.01 + rng.f32() * 10.0;
        let far = near + 1.0 + rng.f32() * 500.0;
        assert_matches_nalgebra(fov, aspect, near, far);
    }
}

#[test]
fn projects_points_like_nalgebra() {
    let persp = Perspective::new(70.0, 1.25, 0.2, 40.0).unwrap();
    let theirs = Perspective3::new(1.25, 70.0f32.to_radians(), 0.2, 40.0);

    for p in [
        vec3(0.0, 0.0, -1.0),
        vec3(1.0, -2.0, -10.0),
        vec3(-0.3, 0.7, -0.2),
    ] {
        let clip = persp.matrix::<Column>() * p.embed::<4>(1.0);
        let ndc = clip / clip.w;

        let expected = theirs.project_point(&Point3::new(p.x, p.y, p.z));
        assert_relative_eq!(ndc.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(ndc.y, expected.y, epsilon = 1e-5);
        assert_relative_eq!(ndc.z, expected.z, epsilon = 1e-4);

        let row_clip = p.transpose().embed::<4>(1.0) * persp.matrix::<Row>();
        assert_eq!(row_clip.transpose(), clip);
    }
}

#[test]
fn casts_to_bytes() {
    let proj = perspective(60.0, 1.0, 0.1, 10.0).unwrap();
    let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&proj));
    assert_eq!(floats.len(), 16);
    // Row-major storage: element (3, 2) is the perspective-divide term.
    assert_eq!(floats[3 * 4 + 2], -1.0);
    assert_eq!(floats, proj.as_flat_slice());
}
