/// Closed-form circular motion in the horizontal plane.
///
/// All orbits share a single time origin, so every body starts phase-aligned
/// on the +X axis at t = 0. Angles are accumulated in f64 and only converted
/// to f32 at the final coordinate step.

use glam::Vec3;

/// Position of a body on a circular orbit of the given radius, at the given
/// simulated time and angular speed coefficient.
///
/// Returns `(d * cos(t * w), 0, d * sin(t * w))`: uniform planar circular motion.
pub fn orbit_position(distance: f32, angular_speed: f32, time: f64) -> Vec3 {
    let angle = time * angular_speed as f64;
    Vec3::new(
        distance * angle.cos() as f32,
        0.0,
        distance * angle.sin() as f32,
    )
}

/// Sample a closed orbit-guide polyline: `segments + 1` points, the last
/// coincident with the first so the host can draw it as one line strip.
pub fn ring_points(distance: f32, segments: u32) -> Vec<Vec3> {
    let mut points = Vec::with_capacity(segments as usize + 1);
    for i in 0..=segments {
        let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
        points.push(Vec3::new(
            distance * angle.cos(),
            0.0,
            distance * angle.sin(),
        ));
    }
    points
}
