use bytemuck::{Pod, Zeroable};

/// Bloom post-process parameters.
///
/// Exposure/strength/radius/threshold are fixed; the working resolution
/// tracks the viewport so the host resizes the bloom pass's internal
/// render targets together with the raster output.
pub struct BloomSettings {
    /// Tone-mapping exposure.
    pub exposure: f32,
    /// Glow strength.
    pub strength: f32,
    /// Glow radius.
    pub radius: f32,
    /// Luminance threshold; 0 blooms every emissive pixel.
    pub threshold: f32,
    /// Working resolution, kept equal to the viewport.
    pub width: f32,
    pub height: f32,
}

/// GPU-side uniform data for the bloom pass. 8 floats = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct BloomUniform {
    pub exposure: f32,
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
    pub width: f32,
    pub height: f32,
    pub _pad0: f32,
    pub _pad1: f32,
}

impl BloomSettings {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            exposure: 1.8,
            strength: 3.0,
            radius: 1.2,
            threshold: 0.0,
            width: viewport_width,
            height: viewport_height,
        }
    }

    /// Match the bloom pass's working resolution to a new viewport size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn uniform(&self) -> BloomUniform {
        BloomUniform {
            exposure: self.exposure,
            strength: self.strength,
            radius: self.radius,
            threshold: self.threshold,
            width: self.width,
            height: self.height,
            _pad0: 0.0,
            _pad1: 0.0,
        }
    }
}
