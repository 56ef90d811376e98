use crate::api::types::{NodeId, SceneEvent};
use crate::controls::ControlState;
use crate::core::clock::SimClock;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::systems::lighting::LightState;
use crate::systems::starfield::{Starfield, STAR_COUNT, STAR_SPREAD};

/// Configuration for the engine, provided by the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Initial viewport width in CSS pixels.
    pub viewport_width: f32,
    /// Initial viewport height in CSS pixels.
    pub viewport_height: f32,
    /// Maximum number of body instances (default: 16).
    pub max_bodies: usize,
    /// Polyline segments per orbit guide (default: 64).
    pub ring_segments: u32,
    /// Maximum number of orbit guides (default: 16).
    pub max_rings: usize,
    /// Number of backdrop stars (default: 10 000).
    pub star_count: usize,
    /// Side length of the star scatter cube (default: 2000).
    pub star_spread: f32,
    /// Maximum number of scene events per frame (default: 16).
    pub max_events: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            max_bodies: 16,
            ring_segments: 64,
            max_rings: 16,
            star_count: STAR_COUNT,
            star_spread: STAR_SPREAD,
            max_events: 16,
        }
    }
}

/// The core contract every scene application must fulfill.
pub trait App {
    /// Return engine configuration. Called once before the first build.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Construct the full scene: bodies, orbit guides, lights, starfield.
    /// Called on startup and again after every teardown. Must populate a
    /// torn-down (empty) context completely.
    fn build(&mut self, ctx: &mut SceneContext);

    /// Per-frame update: consume input, advance the clock, reposition bodies.
    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue);
}

/// Mutable scene state, passed to App::build and App::update.
///
/// All drawable resources live here, so `teardown` is the single disposal
/// point: it restores the container to empty before any rebuild allocates
/// anew, and nothing survives from the previous scene instance.
pub struct SceneContext {
    pub scene: Scene,
    pub lights: LightState,
    pub stars: Starfield,
    pub clock: SimClock,
    pub controls: ControlState,
    pub events: Vec<SceneEvent>,
    next_id: u32,
    rebuild_requested: bool,
    generation: u64,
}

impl SceneContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            scene: Scene::new(),
            lights: LightState::new(),
            stars: Starfield::new(config.star_count, config.star_spread),
            clock: SimClock::new(),
            controls: ControlState::new(),
            events: Vec::new(),
            next_id: 1,
            rebuild_requested: false,
            generation: 0,
        }
    }

    /// Generate the next unique node ID.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a state event to be forwarded to the host UI.
    pub fn emit_event(&mut self, event: SceneEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Ask the runner to tear down and rebuild the scene after this update.
    pub fn request_rebuild(&mut self) {
        self.rebuild_requested = true;
    }

    /// Consume a pending rebuild request.
    pub fn take_rebuild_request(&mut self) -> bool {
        std::mem::take(&mut self.rebuild_requested)
    }

    /// Rebuild generation counter: 0 for the initial build, incremented on
    /// every teardown. Doubles as the starfield reseed source.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Release everything the previous scene instance allocated: nodes,
    /// lights, star positions. Resets the time accumulator. The controls
    /// survive: they are session state, not scene state.
    pub fn teardown(&mut self) {
        self.scene.clear();
        self.lights.clear();
        self.stars.clear();
        self.clock.reset();
        self.generation += 1;
        log::debug!("scene torn down (generation {})", self.generation);
    }
}
