use glam::Vec3;
use crate::api::types::NodeId;

/// RGB color for mesh rendering.
#[derive(Debug, Clone, Copy)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0 }
    }
}

/// Drawable geometry attached to a node.
#[derive(Debug, Clone, Copy)]
pub enum Mesh {
    /// A solid sphere. `emissive` > 0 pushes the surface into HDR range so
    /// the bloom pass picks it up.
    Sphere {
        radius: f32,
        color: MeshColor,
        emissive: f32,
    },
    /// A translucent circular orbit guide in the horizontal plane,
    /// approximated by a closed polyline.
    Ring {
        radius: f32,
        segments: u32,
        opacity: f32,
    },
}

/// Fat node: a single struct with optional drawable geometry.
/// Designed for simplicity over ECS purity; the scene holds tens of these.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Whether this node is active (inactive nodes are skipped at submission).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Drawable geometry (nodes without a mesh are invisible).
    pub mesh: Option<Mesh>,
}

impl Node {
    /// Create a new node with the given ID at the origin.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            mesh: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.mesh = Some(mesh);
        self
    }
}
