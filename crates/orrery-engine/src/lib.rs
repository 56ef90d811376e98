pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod controls;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, SceneContext};
pub use api::types::{NodeId, SceneEvent};
pub use components::body::{BodyDesc, DE_EMPHASIS};
pub use components::node::{Mesh, MeshColor, Node};
pub use controls::{ControlState, SPEED_DEFAULT, SPEED_MAX, SPEED_MIN};
pub use crate::core::clock::{SimClock, TIME_STEP};
pub use crate::core::orbit::{orbit_position, ring_points};
pub use crate::core::scene::Scene;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::instance::{BodyBuffer, BodyInstance};
pub use renderer::lines::{RingBuffer, RingVertex};
pub use renderer::post::{BloomSettings, BloomUniform};
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{LightState, PointLight, LIGHT_FLOATS};
pub use systems::render::{build_body_buffer, build_ring_buffer};
pub use systems::rng::Rng;
pub use systems::starfield::{Starfield, STAR_COUNT, STAR_POINT_SIZE, STAR_SPREAD};
