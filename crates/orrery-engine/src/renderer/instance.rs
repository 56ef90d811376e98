use bytemuck::{Pod, Zeroable};

/// Per-body render data for the sphere pipeline.
/// Written to the shared buffer for the host WebGPU renderer.
/// 8 floats = 32 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BodyInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// HDR glow multiplier; values > 0 feed the bloom pass.
    pub emissive: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of body instances, rebuilt from the scene each frame.
pub struct BodyBuffer {
    instances: Vec<BodyInstance>,
}

impl BodyBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for BodyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_instance_is_32_bytes() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), 32);
        assert_eq!(BodyInstance::FLOATS, 8);
    }

    #[test]
    fn push_and_count() {
        let mut buf = BodyBuffer::new();
        buf.push(BodyInstance::default());
        buf.push(BodyInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
