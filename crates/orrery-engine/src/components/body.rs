use crate::components::node::MeshColor;

/// De-emphasis factor applied to every non-central body's displayed radius
/// when size exaggeration is off.
pub const DE_EMPHASIS: f32 = 0.3;

/// Immutable descriptor for one orbiting body. The descriptor table is
/// defined once by the application and never mutated at runtime; each entry
/// maps 1:1 to a drawable sphere and an orbit-guide ring.
#[derive(Debug, Clone, Copy)]
pub struct BodyDesc {
    /// Display name.
    pub name: &'static str,
    /// Orbital distance from the central body (arbitrary length units).
    pub distance: f32,
    /// Angular speed coefficient, relative to the reference body.
    pub angular_speed: f32,
    /// Full body radius before any de-emphasis.
    pub size: f32,
    /// Display color.
    pub color: MeshColor,
}

impl BodyDesc {
    /// Radius used for drawing: `size` when exaggeration is on, otherwise
    /// `size * DE_EMPHASIS`. Fixed at scene-build time.
    pub fn display_radius(&self, exaggerated: bool) -> f32 {
        if exaggerated {
            self.size
        } else {
            self.size * DE_EMPHASIS
        }
    }
}
