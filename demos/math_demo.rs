//! Quick tour of the vml API.

use vml::scalar::PI;
use vml::{project, Mat3, Mat4, Quat, Vec3, Vec4};

fn main() {
    println!("=== vml demo ===\n");

    // Vector operations
    println!("1. Vectors:");
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    println!("  a         = {}", a);
    println!("  b         = {}", b);
    println!("  a + b     = {}", a + b);
    println!("  a . b     = {:.3}", a.dot(b));
    println!("  a x b     = {}", a.cross(b));
    println!("  |a|       = {:.3}", a.norm());
    println!("  normalize = {}", a.normalize());

    // Matrix transforms
    println!("\n2. Transforms:");
    let model = Mat4::IDENTITY
        .translate(Vec3::new(0.0, 1.0, 0.0))
        .rotate(PI / 4.0, Vec3::Z)
        .scale(Vec3::new(2.0, 2.0, 2.0));
    let p = model.transform_point(Vec3::X);
    println!("  transformed point = {}", p);
    println!("  model matrix:\n{}", model);
    println!("  determinant = {:.3}", model.determinant());

    // Camera and projection
    println!("\n3. Camera:");
    let view = Mat4::look_at(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective(PI / 3.0, 4.0 / 3.0, 0.1, 100.0);
    let viewport = Vec4::new(0.0, 0.0, 800.0, 600.0);
    let win = project(Vec4::new(0.0, 0.0, 0.0, 1.0), view, proj, viewport);
    println!("  origin on screen = {}", win);

    // Quaternions
    println!("\n4. Quaternions:");
    let q = Quat::from_axis_angle(Vec3::Z, PI / 2.0);
    let r = Quat::from_axis_angle(Vec3::Y, PI / 3.0);
    println!("  q          = {}", q);
    println!("  slerp(0.5) = {}", q.slerp(r, 0.5));
    println!("  as matrix:\n{}", q.to_mat3());
    let euler = q.to_mat3().to_euler();
    println!("  as euler   = {}", euler);

    // Round trip through the rotation representations
    println!("\n5. Round trip:");
    let m = Mat3::from_euler(Vec3::new(0.2, 0.4, 0.6));
    let back = Quat::from_mat3(m).to_mat3();
    println!("  original:\n{}", m);
    println!("  via quaternion:\n{}", back);
}
