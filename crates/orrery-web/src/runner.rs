use orrery_engine::{
    App, AppConfig, BloomSettings, BloomUniform, CameraUniform, ControlState,
    InputEvent, InputQueue, BodyBuffer, PerspectiveCamera, ProtocolLayout,
    RingBuffer, SceneContext, STAR_POINT_SIZE,
};
use orrery_engine::systems::render::{build_body_buffer, build_ring_buffer};

/// Generic scene runner that wires up the engine loop.
///
/// Each concrete scene (e.g. `solar-system`) creates a `thread_local!`
/// SceneRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
///
/// The runner is the cancellable handle for the display-synchronized loop:
/// the host calls `tick` from its refresh callback, and once `cancel` runs,
/// every later callback is a no-op that touches no scene resources.
pub struct SceneRunner<A: App> {
    app: A,
    ctx: SceneContext,
    input: InputQueue,
    camera: PerspectiveCamera,
    bloom: BloomSettings,
    camera_uniform: CameraUniform,
    bloom_uniform: BloomUniform,
    body_buffer: BodyBuffer,
    ring_buffer: RingBuffer,
    layout: ProtocolLayout,
    config: AppConfig,
    frame_counter: u64,
    initialized: bool,
    cancelled: bool,
}

impl<A: App> SceneRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = SceneContext::new(&config);
        let camera = PerspectiveCamera::new(config.viewport_width, config.viewport_height);
        let bloom = BloomSettings::new(config.viewport_width, config.viewport_height);
        let camera_uniform = camera.uniform();
        let bloom_uniform = bloom.uniform();
        let body_buffer = BodyBuffer::with_capacity(config.max_bodies);
        let ring_buffer = RingBuffer::new(config.ring_segments);

        Self {
            app,
            ctx,
            input: InputQueue::new(),
            camera,
            bloom,
            camera_uniform,
            bloom_uniform,
            body_buffer,
            ring_buffer,
            layout,
            config,
            frame_counter: 0,
            initialized: false,
            cancelled: false,
        }
    }

    /// Build the scene. Call once after construction.
    pub fn init(&mut self) {
        self.app.build(&mut self.ctx);
        self.initialized = true;
        log::info!(
            "scene built: {} nodes, {} stars, {} lights",
            self.ctx.scene.len(),
            self.ctx.stars.star_count(),
            self.ctx.lights.count()
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        if self.cancelled {
            return;
        }
        self.input.push(event);
    }

    /// Run one display-refresh tick.
    ///
    /// Within a frame the order is fixed: input handling, then the app's
    /// update (clock advance, then position recompute), then an optional
    /// teardown-and-rebuild, then wire-buffer submission.
    pub fn tick(&mut self) {
        if self.cancelled || !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        // Viewport events are the runner's concern: the camera aspect and
        // the bloom pass's working resolution both track the new size.
        for event in self.input.iter() {
            if let InputEvent::Resize { width, height } = *event {
                self.camera.set_viewport(width, height);
                self.bloom.resize(width, height);
            }
        }

        self.app.update(&mut self.ctx, &self.input);
        self.input.drain();

        if self.ctx.take_rebuild_request() {
            self.rebuild();
        }

        // Submission: rebuild every wire buffer the host reads.
        build_body_buffer(self.ctx.scene.iter(), &mut self.body_buffer);
        build_ring_buffer(self.ctx.scene.iter(), &mut self.ring_buffer);
        self.camera_uniform = self.camera.uniform();
        self.bloom_uniform = self.bloom.uniform();
        self.frame_counter += 1;
    }

    /// Cancel the loop and release scene resources. Idempotent; every tick
    /// after this is a no-op, so an already-scheduled refresh callback can
    /// never touch freed state.
    pub fn cancel(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;
        self.ctx.teardown();
        self.body_buffer.clear();
        self.ring_buffer.clear();
        log::info!("scene cancelled after {} frames", self.frame_counter);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Tear down the previous scene instance, then build anew. There is
    /// never more than one live instance: disposal strictly precedes
    /// allocation.
    fn rebuild(&mut self) {
        self.ctx.teardown();
        self.app.build(&mut self.ctx);
        log::debug!(
            "scene rebuilt (generation {}): {} nodes",
            self.ctx.generation(),
            self.ctx.scene.len()
        );
    }

    // ---- Control-state exchange (JSON, host UI <-> engine) ----

    /// Snapshot of the current control state as JSON for the host UI.
    pub fn controls_json(&self) -> String {
        self.ctx.controls.to_json()
    }

    /// Apply a control state sent by the host UI. Malformed input is
    /// logged and ignored; a changed exaggeration flag schedules a rebuild.
    pub fn apply_controls(&mut self, json: &str) {
        match ControlState::from_json(json) {
            Ok(incoming) => {
                if incoming.exaggerated != self.ctx.controls.exaggerated {
                    self.ctx.request_rebuild();
                }
                self.ctx.controls.exaggerated = incoming.exaggerated;
                self.ctx.controls.set_speed(incoming.speed);
            }
            Err(err) => log::warn!("ignoring malformed control state: {err}"),
        }
    }

    // ---- Pointer accessors for shared-buffer reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.body_buffer.instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.body_buffer.instance_count() as u32
    }

    pub fn ring_vertices_ptr(&self) -> *const f32 {
        self.ring_buffer.vertices_ptr()
    }

    pub fn ring_vertex_count(&self) -> u32 {
        self.ring_buffer.vertex_count() as u32
    }

    pub fn ring_count(&self) -> u32 {
        self.ring_buffer.ring_count()
    }

    pub fn verts_per_ring(&self) -> u32 {
        self.ring_buffer.verts_per_ring()
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.ctx.stars.positions_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.ctx.stars.star_count() as u32
    }

    pub fn star_point_size(&self) -> f32 {
        STAR_POINT_SIZE
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn bloom_ptr(&self) -> *const f32 {
        &self.bloom_uniform as *const BloomUniform as *const f32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient_r(&self) -> f32 {
        self.ctx.lights.ambient_color()[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.ctx.lights.ambient_color()[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.ctx.lights.ambient_color()[2]
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ctx.lights.ambient_intensity()
    }

    pub fn camera_aspect(&self) -> f32 {
        self.camera.aspect
    }

    // ---- Capacity accessors (read by the host to size its buffers) ----

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_ring_vertices(&self) -> u32 {
        self.layout.max_ring_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    // ---- Test access ----

    #[doc(hidden)]
    pub fn context(&self) -> &SceneContext {
        &self.ctx
    }

    #[doc(hidden)]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_engine::{
        orbit_position, Mesh, MeshColor, Node, NodeId, PointLight,
    };

    /// Minimal two-body scene for exercising the runner.
    struct TestScene {
        body_id: Option<NodeId>,
    }

    impl TestScene {
        fn new() -> Self {
            Self { body_id: None }
        }
    }

    impl App for TestScene {
        fn config(&self) -> AppConfig {
            AppConfig {
                star_count: 100,
                ..AppConfig::default()
            }
        }

        fn build(&mut self, ctx: &mut SceneContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(Node::new(id).with_tag("body").with_mesh(Mesh::Sphere {
                radius: 1.0,
                color: MeshColor::default(),
                emissive: 2.0,
            }));
            let ring_id = ctx.next_id();
            ctx.scene.spawn(Node::new(ring_id).with_mesh(Mesh::Ring {
                radius: 10.0,
                segments: 64,
                opacity: 0.3,
            }));
            ctx.lights.add(PointLight::new(Vec3::ZERO, [1.0; 3], 2.0));
            let seed = 1 + ctx.generation();
            ctx.stars.regenerate(seed);
            self.body_id = Some(id);
        }

        fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue) {
            for event in input.iter() {
                if let InputEvent::Custom { kind: 1, a, .. } = *event {
                    ctx.controls.set_speed(a as f64);
                }
            }
            ctx.clock.step(ctx.controls.speed);
            let time = ctx.clock.time();
            if let Some(id) = self.body_id {
                if let Some(node) = ctx.scene.get_mut(id) {
                    node.pos = orbit_position(10.0, 1.0, time);
                }
            }
        }
    }

    fn runner() -> SceneRunner<TestScene> {
        let mut r = SceneRunner::new(TestScene::new());
        r.init();
        r
    }

    #[test]
    fn tick_builds_wire_buffers() {
        let mut r = runner();
        r.tick();
        assert_eq!(r.body_count(), 1);
        assert_eq!(r.ring_count(), 1);
        assert_eq!(r.ring_vertex_count(), 65);
        assert_eq!(r.star_count(), 100);
    }

    #[test]
    fn clock_advances_per_tick() {
        let mut r = runner();
        for _ in 0..10 {
            r.tick();
        }
        assert!((r.context().clock.time() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn speed_event_scales_increment_without_rebuild() {
        let mut r = runner();
        r.tick();
        let generation_before = r.context().generation();
        r.push_input(InputEvent::Custom { kind: 1, a: 10.0, b: 0.0, c: 0.0 });
        r.tick();
        assert_eq!(r.context().controls.speed, 10.0);
        assert_eq!(r.context().generation(), generation_before);
        assert!((r.context().clock.time() - 0.11).abs() < 1e-9);
    }

    #[test]
    fn resize_updates_camera_and_bloom() {
        let mut r = runner();
        r.push_input(InputEvent::Resize { width: 1024.0, height: 512.0 });
        r.tick();
        assert_eq!(r.camera_aspect(), 2.0);
        assert_eq!(r.bloom.width, 1024.0);
        assert_eq!(r.bloom.height, 512.0);
    }

    #[test]
    fn tick_after_cancel_is_noop() {
        let mut r = runner();
        r.tick();
        r.cancel();
        assert_eq!(r.body_count(), 0);
        let time_after_cancel = r.context().clock.time();
        r.tick();
        r.tick();
        assert_eq!(r.body_count(), 0);
        assert_eq!(r.context().clock.time(), time_after_cancel);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut r = runner();
        r.cancel();
        r.cancel();
        assert!(r.is_cancelled());
        assert_eq!(r.context().generation(), 1);
    }

    #[test]
    fn apply_controls_rebuilds_only_on_flag_change() {
        let mut r = runner();
        r.tick();

        r.apply_controls(r#"{"speed":2.0,"exaggerated":false}"#);
        r.tick();
        assert_eq!(r.context().generation(), 0);

        r.apply_controls(r#"{"speed":2.0,"exaggerated":true}"#);
        r.tick();
        assert_eq!(r.context().generation(), 1);
        assert_eq!(r.context().clock.time(), 0.0);
    }

    #[test]
    fn malformed_controls_are_ignored() {
        let mut r = runner();
        let before = r.context().controls;
        r.apply_controls("not json at all");
        assert_eq!(r.context().controls, before);
    }

    #[test]
    fn rebuild_counts_are_stable() {
        let mut r = runner();
        r.tick();
        let nodes = r.context().scene.len();
        let stars = r.star_count();
        let lights = r.light_count();

        for flag in ["true", "false", "true", "false"] {
            r.apply_controls(&format!(r#"{{"speed":1.0,"exaggerated":{flag}}}"#));
            r.tick();
        }

        assert_eq!(r.context().scene.len(), nodes);
        assert_eq!(r.star_count(), stars);
        assert_eq!(r.light_count(), lights);
        assert_eq!(r.context().generation(), 4);
    }

    #[test]
    fn stars_regenerate_on_rebuild() {
        let mut r = runner();
        r.tick();
        let before = r.context().stars.positions().to_vec();
        r.apply_controls(r#"{"speed":1.0,"exaggerated":true}"#);
        r.tick();
        assert_ne!(r.context().stars.positions(), &before[..]);
    }
}
