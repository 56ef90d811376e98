use bytemuck::{Pod, Zeroable};

/// One vertex of an orbit-guide polyline.
/// 4 floats = 16 bytes: position plus per-vertex alpha.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RingVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub alpha: f32,
}

impl RingVertex {
    pub const FLOATS: usize = 4;
}

/// Accumulates every orbit guide's vertices for one frame's submission.
/// All rings share a vertex count of `segments + 1`, so the host draws
/// `ring_count` consecutive line strips of equal length.
pub struct RingBuffer {
    vertices: Vec<RingVertex>,
    ring_count: u32,
    verts_per_ring: u32,
}

impl RingBuffer {
    pub fn new(segments: u32) -> Self {
        Self {
            vertices: Vec::new(),
            ring_count: 0,
            verts_per_ring: segments + 1,
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.ring_count = 0;
    }

    /// Append one closed ring. `points` must contain exactly
    /// `verts_per_ring` positions.
    pub fn push_ring(&mut self, points: &[glam::Vec3], alpha: f32) {
        debug_assert_eq!(points.len() as u32, self.verts_per_ring);
        for p in points {
            self.vertices.push(RingVertex {
                x: p.x,
                y: p.y,
                z: p.z,
                alpha,
            });
        }
        self.ring_count += 1;
    }

    pub fn ring_count(&self) -> u32 {
        self.ring_count
    }

    pub fn verts_per_ring(&self) -> u32 {
        self.verts_per_ring
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orbit::ring_points;

    #[test]
    fn ring_vertex_is_16_bytes() {
        assert_eq!(std::mem::size_of::<RingVertex>(), 16);
    }

    #[test]
    fn push_ring_tracks_counts() {
        let mut buf = RingBuffer::new(64);
        buf.push_ring(&ring_points(10.0, 64), 0.3);
        buf.push_ring(&ring_points(20.0, 64), 0.3);
        assert_eq!(buf.ring_count(), 2);
        assert_eq!(buf.verts_per_ring(), 65);
        assert_eq!(buf.vertex_count(), 130);
    }

    #[test]
    fn clear_resets_counts() {
        let mut buf = RingBuffer::new(64);
        buf.push_ring(&ring_points(10.0, 64), 0.3);
        buf.clear();
        assert_eq!(buf.ring_count(), 0);
        assert_eq!(buf.vertex_count(), 0);
    }
}
