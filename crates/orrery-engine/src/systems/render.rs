use crate::components::node::{Mesh, Node};
use crate::core::orbit::ring_points;
use crate::renderer::instance::{BodyBuffer, BodyInstance};
use crate::renderer::lines::RingBuffer;

/// Build the body instance buffer from the scene's sphere nodes.
pub fn build_body_buffer<'a>(nodes: impl Iterator<Item = &'a Node>, buffer: &mut BodyBuffer) {
    buffer.clear();

    for node in nodes {
        if !node.active {
            continue;
        }
        if let Some(Mesh::Sphere { radius, color, emissive }) = node.mesh {
            buffer.push(BodyInstance {
                x: node.pos.x,
                y: node.pos.y,
                z: node.pos.z,
                radius,
                r: color.r,
                g: color.g,
                b: color.b,
                emissive,
            });
        }
    }
}

/// Build the orbit-guide vertex buffer from the scene's ring nodes.
/// Rings are sampled fresh so a rebuilt scene always matches its nodes.
pub fn build_ring_buffer<'a>(nodes: impl Iterator<Item = &'a Node>, buffer: &mut RingBuffer) {
    buffer.clear();

    for node in nodes {
        if !node.active {
            continue;
        }
        if let Some(Mesh::Ring { radius, segments, opacity }) = node.mesh {
            debug_assert_eq!(segments + 1, buffer.verts_per_ring());
            buffer.push_ring(&ring_points(radius, segments), opacity);
        }
    }
}
