/// Planetary data: orbital layout and visual properties.
///
/// Distances and angular speeds are stylized (Earth = 1.0 reference), not
/// physical; sizes are relative planet radii, de-emphasized at build time
/// unless the exaggeration toggle is on.

use orrery_engine::{BodyDesc, MeshColor};

pub const PLANET_COUNT: usize = 8;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 3.0;
/// #FDB813
pub const SUN_COLOR: MeshColor = MeshColor { r: 0.992, g: 0.722, b: 0.075 };
pub const SUN_EMISSIVE: f32 = 2.0;

// ── Planets ──────────────────────────────────────────────────────────

/// HDR glow multiplier shared by all planet surfaces; keeps them visible
/// against the dark backdrop and feeds the bloom pass.
pub const BODY_EMISSIVE: f32 = 2.0;

/// Orbit guide sampling and opacity.
pub const ORBIT_SEGMENTS: u32 = 64;
pub const ORBIT_OPACITY: f32 = 0.3;

// ── Lighting ─────────────────────────────────────────────────────────

pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const POINT_LIGHT_INTENSITY: f32 = 2.0;

/// The immutable descriptor table. Index is the only identity a planet has.
pub fn planets() -> [BodyDesc; PLANET_COUNT] {
    [
        // Mercury #A0522D
        BodyDesc {
            name: "Mercury",
            distance: 5.0,
            angular_speed: 4.1,
            size: 0.38,
            color: MeshColor { r: 0.627, g: 0.322, b: 0.176 },
        },
        // Venus #DEB887
        BodyDesc {
            name: "Venus",
            distance: 7.0,
            angular_speed: 1.6,
            size: 0.95,
            color: MeshColor { r: 0.871, g: 0.722, b: 0.529 },
        },
        // Earth #4169E1
        BodyDesc {
            name: "Earth",
            distance: 10.0,
            angular_speed: 1.0,
            size: 1.0,
            color: MeshColor { r: 0.255, g: 0.412, b: 0.882 },
        },
        // Mars #CD5C5C
        BodyDesc {
            name: "Mars",
            distance: 15.0,
            angular_speed: 0.53,
            size: 0.53,
            color: MeshColor { r: 0.804, g: 0.361, b: 0.361 },
        },
        // Jupiter #DAA520
        BodyDesc {
            name: "Jupiter",
            distance: 52.0,
            angular_speed: 0.084,
            size: 11.2,
            color: MeshColor { r: 0.855, g: 0.647, b: 0.125 },
        },
        // Saturn #F4A460
        BodyDesc {
            name: "Saturn",
            distance: 95.0,
            angular_speed: 0.034,
            size: 9.5,
            color: MeshColor { r: 0.957, g: 0.643, b: 0.376 },
        },
        // Uranus #87CEEB
        BodyDesc {
            name: "Uranus",
            distance: 192.0,
            angular_speed: 0.012,
            size: 4.0,
            color: MeshColor { r: 0.529, g: 0.808, b: 0.922 },
        },
        // Neptune #4682B4
        BodyDesc {
            name: "Neptune",
            distance: 301.0,
            angular_speed: 0.006,
            size: 3.9,
            color: MeshColor { r: 0.275, g: 0.510, b: 0.706 },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_planets() {
        assert_eq!(planets().len(), PLANET_COUNT);
    }

    #[test]
    fn earth_is_the_reference_body() {
        let earth = planets()[2];
        assert_eq!(earth.name, "Earth");
        assert_eq!(earth.angular_speed, 1.0);
        assert_eq!(earth.size, 1.0);
    }

    #[test]
    fn distances_increase_outward() {
        let table = planets();
        for pair in table.windows(2) {
            assert!(pair[0].distance < pair[1].distance);
        }
    }

    #[test]
    fn outer_planets_orbit_slower() {
        let table = planets();
        for pair in table.windows(2) {
            assert!(pair[0].angular_speed > pair[1].angular_speed);
        }
    }
}
