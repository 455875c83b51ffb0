use pretty_assertions::assert_eq;
use vml::scalar::{Scalar, PI};
use vml::{project, unproject, Mat4, Vec3, Vec4};

fn assert_near(a: Scalar, b: Scalar, tol: Scalar) {
    assert!((a - b).abs() < tol, "{} vs {} (tol {})", a, b, tol);
}

#[test]
fn test_identity_pipeline() {
    let m = Mat4::IDENTITY;
    assert_eq!(m * m, m);
    assert_eq!(
        m * Vec4::new(1.0, 2.0, 3.0, 1.0),
        Vec4::new(1.0, 2.0, 3.0, 1.0)
    );
}

#[test]
fn test_look_at_moves_eye_to_origin() {
    let view = Mat4::look_at(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
    );
    let eye_in_view = view.transform_point(Vec3::new(0.0, 0.0, 5.0));
    assert!(eye_in_view.norm() < 1e-5);
    // the center lands on the negative z axis
    let center_in_view = view.transform_point(Vec3::ZERO);
    assert_near(center_in_view.x, 0.0, 1e-5);
    assert_near(center_in_view.y, 0.0, 1e-5);
    assert_near(center_in_view.z, -5.0, 1e-5);
}

#[test]
fn test_look_at_basis_is_orthonormal() {
    let view = Mat4::look_at(
        Vec3::new(2.0, 3.0, 4.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::Y,
    );
    let r = vml::Mat3::from(view);
    let p = r * r.transpose();
    for row in 0..3 {
        for col in 0..3 {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert_near(p.at(row, col), expected, 1e-5);
        }
    }
}

#[test]
fn test_perspective_delegates_to_frustum() {
    // fovy of 90 degrees at aspect 1: unit half-extents at the near plane
    let p = Mat4::perspective(PI * 0.5, 1.0, 1.0, 10.0);
    assert_near(p.at(0, 0), 1.0, 1e-5);
    assert_near(p.at(1, 1), 1.0, 1e-5);
    assert_near(p.at(2, 2), -11.0 / 9.0, 1e-5);
    assert_near(p.at(3, 2), -1.0, 1e-6);
    assert_near(p.at(2, 3), -20.0 / 9.0, 1e-5);
    assert_eq!(p.at(3, 3), 0.0);
}

#[test]
fn test_ortho_symmetric_unit_cube() {
    let o = Mat4::ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
    // z flips, everything else passes through
    let v = o * Vec4::new(0.25, -0.5, 0.75, 1.0);
    assert_near(v.x, 0.25, 1e-6);
    assert_near(v.y, -0.5, 1e-6);
    assert_near(v.z, -0.75, 1e-6);
    assert_near(v.w, 1.0, 1e-6);
}

#[test]
fn test_project_center_of_view() {
    let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective(PI / 3.0, 4.0 / 3.0, 0.1, 100.0);
    let viewport = Vec4::new(0.0, 0.0, 800.0, 600.0);

    // a point straight ahead projects to the viewport center
    let win = project(Vec4::new(0.0, 0.0, 0.0, 1.0), view, proj, viewport);
    assert_near(win.x, 400.0, 1e-2);
    assert_near(win.y, 300.0, 1e-2);
    assert!(win.z > 0.0 && win.z < 1.0);
}

#[test]
fn test_project_unproject_roundtrip() {
    let view = Mat4::look_at(Vec3::new(1.0, 2.0, 6.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective(PI / 4.0, 1.5, 0.5, 50.0);
    let viewport = Vec4::new(0.0, 0.0, 1024.0, 768.0);

    let obj = Vec4::new(0.3, -0.7, 1.2, 1.0);
    let win = project(obj, view, proj, viewport);
    let back = unproject(win, view, proj, viewport);

    assert_near(back.x, obj.x, 1e-3);
    assert_near(back.y, obj.y, 1e-3);
    assert_near(back.z, obj.z, 1e-3);
    assert_near(back.w, 1.0, 1e-3);
}

#[test]
fn test_transform_point_matches_homogeneous_mul() {
    let m = Mat4::IDENTITY
        .translate(Vec3::new(1.0, -2.0, 3.0))
        .rotate(0.6, Vec3::new(1.0, 2.0, 0.5))
        .scale(Vec3::new(1.5, 0.5, 2.0));
    let v = Vec3::new(0.4, 0.8, -1.2);

    let as_point = m.transform_point(v);
    let homogeneous = m * v.extend(1.0);
    assert_near(as_point.x, homogeneous.x, 1e-5);
    assert_near(as_point.y, homogeneous.y, 1e-5);
    assert_near(as_point.z, homogeneous.z, 1e-5);

    let as_dir = m.transform_direction(v);
    let homogeneous_dir = m * v.extend(0.0);
    assert_near(as_dir.x, homogeneous_dir.x, 1e-5);
    assert_near(as_dir.y, homogeneous_dir.y, 1e-5);
    assert_near(as_dir.z, homogeneous_dir.z, 1e-5);
}

#[test]
fn test_translate_rotate_composition_order() {
    // rotate 90 degrees about z, then translate in the rotated frame
    let m = Mat4::IDENTITY
        .rotate(PI * 0.5, Vec3::Z)
        .translate(Vec3::new(1.0, 0.0, 0.0));
    let p = m.transform_point(Vec3::ZERO);
    // the local +x translation points along world +y
    assert_near(p.x, 0.0, 1e-6);
    assert_near(p.y, 1.0, 1e-6);
    assert_near(p.z, 0.0, 1e-6);
}

#[test]
fn test_inverse_view_projection() {
    let view = Mat4::look_at(Vec3::new(0.0, 2.0, 8.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective(PI / 4.0, 1.0, 1.0, 20.0);
    let vp = proj * view;
    let p = vp * vp.inverse();
    for row in 0..4 {
        for col in 0..4 {
            let expected = if row == col { 1.0 } else { 0.0 };
            assert_near(p.at(row, col), expected, 1e-4);
        }
    }
}
