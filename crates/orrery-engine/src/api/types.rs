use bytemuck::{Pod, Zeroable};

/// Unique identifier for a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Outbound state report forwarded to the host UI each frame.
/// `kind` identifies the report type; `a`, `b`, `c` carry the payload.
/// 4 floats = 16 bytes, read directly from the shared buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SceneEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}
