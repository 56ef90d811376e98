/// Scene illumination: one ambient term plus point lights.
///
/// Each frame the active lights are serialized to the shared buffer for the
/// host renderer's shading pass.

use glam::Vec3;

/// A point light with position, color, and intensity.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, pad]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    pub _pad: f32,
}

/// Floats per serialized light.
pub const LIGHT_FLOATS: usize = 8;

impl PointLight {
    pub fn new(pos: Vec3, color: [f32; 3], intensity: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color[0],
            g: color[1],
            b: color[2],
            intensity,
            _pad: 0.0,
        }
    }
}

/// Manages active lights and the ambient term for the scene.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient_color: [f32; 3],
    ambient_intensity: f32,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 1.0,
        }
    }

    /// Add a point light to the scene.
    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    /// Remove all lights. Part of scene teardown.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Set the ambient light color and intensity.
    pub fn set_ambient(&mut self, color: [f32; 3], intensity: f32) {
        self.ambient_color = color;
        self.ambient_intensity = intensity;
    }

    pub fn ambient_color(&self) -> [f32; 3] {
        self.ambient_color
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ambient_intensity
    }

    /// Pointer to the lights data for shared-buffer serialization.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_new() {
        let light = PointLight::new(Vec3::ZERO, [1.0, 1.0, 1.0], 2.0);
        assert_eq!(light.x, 0.0);
        assert_eq!(light.intensity, 2.0);
    }

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), LIGHT_FLOATS * 4);
    }

    #[test]
    fn add_and_clear() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::ZERO, [1.0; 3], 2.0));
        assert_eq!(state.count(), 1);
        state.clear();
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn ambient_roundtrip() {
        let mut state = LightState::new();
        state.set_ambient([1.0, 1.0, 1.0], 0.5);
        assert_eq!(state.ambient_color(), [1.0, 1.0, 1.0]);
        assert_eq!(state.ambient_intensity(), 0.5);
    }
}
