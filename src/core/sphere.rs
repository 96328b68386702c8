use glam::{Mat3, Vec3};

// Golden angle in radians: π(3 − √5)
#[inline]
fn golden_angle() -> f32 {
    std::f32::consts::PI * (3.0 - 5.0_f32.sqrt())
}

/// Distribute `samples` points over a sphere of radius `radius * spread`
/// using the golden-angle spiral.
///
/// Output is deterministic for fixed inputs. Points run from the south pole
/// (`y = -1`) upwards in equal steps of `2 / samples`.
pub fn fibonacci_sphere(samples: usize, radius: f32, spread: f32) -> Vec<Vec3> {
    let limit = radius * spread;
    let phi = golden_angle();
    (0..samples)
        .map(|i| {
            let y = (i as f32 * 2.0) / samples as f32 - 1.0;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = phi * i as f32;
            Vec3::new(theta.cos() * ring, y, theta.sin() * ring) * limit
        })
        .collect()
}

/// Combined rotation `Rx(pitch) * Ry(yaw) * Rz(roll)`, angles in degrees.
#[inline]
pub fn rotation_matrix(pitch_deg: f32, yaw_deg: f32, roll_deg: f32) -> Mat3 {
    Mat3::from_rotation_x(pitch_deg.to_radians())
        * Mat3::from_rotation_y(yaw_deg.to_radians())
        * Mat3::from_rotation_z(roll_deg.to_radians())
}

/// Apply `rotation` to every point, producing a fresh set.
pub fn rotate_points(points: &[Vec3], rotation: Mat3) -> Vec<Vec3> {
    points.iter().map(|p| rotation * *p).collect()
}

/// Depth-derived opacity: back of the sphere fades to `min_opacity`, front is 1.
#[inline]
pub fn depth_opacity(z: f32, radius: f32, min_opacity: f32) -> f32 {
    ((z / radius + 1.0) / 2.0).max(min_opacity)
}

/// Where and how visibly a single label should be drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabelPlacement {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub opacity: f32,
}

impl LabelPlacement {
    pub fn from_point(point: Vec3, radius: f32, min_opacity: f32, y_offset: f32) -> Self {
        Self {
            x: point.x,
            y: point.y + y_offset,
            z: point.z,
            opacity: depth_opacity(point.z, radius, min_opacity),
        }
    }
}
