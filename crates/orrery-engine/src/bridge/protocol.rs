/// Shared buffer layout.
/// Must stay in sync with the host `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Bodies: max_bodies × 8 floats]
/// [Ring vertices: max_rings × (segments + 1) × 4 floats]
/// [Star positions: star_count × 3 floats]
/// [Events: max_events × 4 floats]
/// [Camera uniform: 16 floats]
/// [Bloom uniform: 8 floats]
/// [Lights: max_lights × 8 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::app::AppConfig;
use crate::renderer::instance::BodyInstance;
use crate::renderer::lines::RingVertex;
use crate::systems::lighting::LIGHT_FLOATS;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_BODIES: usize = 2;
pub const HEADER_BODY_COUNT: usize = 3;
pub const HEADER_MAX_RING_VERTICES: usize = 4;
pub const HEADER_RING_COUNT: usize = 5;
pub const HEADER_VERTS_PER_RING: usize = 6;
pub const HEADER_STAR_COUNT: usize = 7;
pub const HEADER_STAR_POINT_SIZE: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;
pub const HEADER_VIEWPORT_WIDTH: usize = 11;
pub const HEADER_VIEWPORT_HEIGHT: usize = 12;
pub const HEADER_LIGHT_COUNT: usize = 13;
pub const HEADER_PROTOCOL_VERSION: usize = 14;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per scene event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = 4;

/// Floats per star position: x, y, z (fixed wire format).
pub const STAR_FLOATS: usize = 3;

/// Floats in the camera uniform (one column-major 4×4 matrix).
pub const CAMERA_FLOATS: usize = 16;

/// Floats in the bloom uniform.
pub const BLOOM_FLOATS: usize = 8;

/// Maximum lights serialized per frame.
pub const MAX_LIGHTS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum body instances.
    pub max_bodies: usize,
    /// Maximum orbit-guide vertices (max_rings × verts per ring).
    pub max_ring_vertices: usize,
    /// Star count.
    pub star_count: usize,
    /// Maximum scene events per frame.
    pub max_events: usize,

    /// Size of each data section in floats.
    pub body_data_floats: usize,
    pub ring_data_floats: usize,
    pub star_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where each section begins.
    pub body_data_offset: usize,
    pub ring_data_offset: usize,
    pub star_data_offset: usize,
    pub event_data_offset: usize,
    pub camera_data_offset: usize,
    pub bloom_data_offset: usize,
    pub light_data_offset: usize,

    /// Total buffer size.
    pub buffer_total_floats: usize,
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_bodies: usize,
        max_ring_vertices: usize,
        star_count: usize,
        max_events: usize,
    ) -> Self {
        let body_data_floats = max_bodies * BodyInstance::FLOATS;
        let ring_data_floats = max_ring_vertices * RingVertex::FLOATS;
        let star_data_floats = star_count * STAR_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let body_data_offset = HEADER_FLOATS;
        let ring_data_offset = body_data_offset + body_data_floats;
        let star_data_offset = ring_data_offset + ring_data_floats;
        let event_data_offset = star_data_offset + star_data_floats;
        let camera_data_offset = event_data_offset + event_data_floats;
        let bloom_data_offset = camera_data_offset + CAMERA_FLOATS;
        let light_data_offset = bloom_data_offset + BLOOM_FLOATS;

        let buffer_total_floats = light_data_offset + MAX_LIGHTS * LIGHT_FLOATS;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_bodies,
            max_ring_vertices,
            star_count,
            max_events,
            body_data_floats,
            ring_data_floats,
            star_data_floats,
            event_data_floats,
            body_data_offset,
            ring_data_offset,
            star_data_offset,
            event_data_offset,
            camera_data_offset,
            bloom_data_offset,
            light_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.max_bodies,
            config.max_rings * (config.ring_segments as usize + 1),
            config.star_count,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(16, 16 * 65, 10_000, 16);

        assert_eq!(layout.body_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.ring_data_offset,
            layout.body_data_offset + layout.body_data_floats
        );
        assert_eq!(
            layout.star_data_offset,
            layout.ring_data_offset + layout.ring_data_floats
        );
        assert_eq!(
            layout.event_data_offset,
            layout.star_data_offset + layout.star_data_floats
        );
        assert_eq!(
            layout.camera_data_offset,
            layout.event_data_offset + layout.event_data_floats
        );
        assert_eq!(layout.bloom_data_offset, layout.camera_data_offset + CAMERA_FLOATS);
        assert_eq!(layout.light_data_offset, layout.bloom_data_offset + BLOOM_FLOATS);
        assert_eq!(
            layout.buffer_total_floats,
            layout.light_data_offset + MAX_LIGHTS * LIGHT_FLOATS
        );
    }

    #[test]
    fn from_default_config() {
        let config = AppConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        assert_eq!(layout.max_bodies, 16);
        assert_eq!(layout.max_ring_vertices, 16 * 65);
        assert_eq!(layout.star_count, 10_000);
        assert_eq!(layout.body_data_floats, 16 * 8);
        assert_eq!(layout.star_data_floats, 30_000);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }
}
