/// Solar System: animated orrery with orbit guides, starfield, and bloom.
///
/// The scene is rebuilt from scratch whenever the exaggeration flag changes
/// (body radii are baked at build time); the speed multiplier is live state
/// read each frame and never forces a rebuild.

use glam::Vec3;
use orrery_engine::{
    orbit_position, App, AppConfig, InputEvent, InputQueue, Mesh, Node, NodeId,
    PointLight, SceneContext, SceneEvent,
};

use crate::bodies;

// ── Custom event kinds from the control panel ────────────────────────

/// Set the speed multiplier; `a` carries the slider value.
pub const CUSTOM_SET_SPEED: u32 = 1;
/// Set the exaggeration flag; `a` > 0.5 means on.
pub const CUSTOM_SET_EXAGGERATION: u32 = 2;
/// Restore both controls to their defaults.
pub const CUSTOM_RESET: u32 = 3;

// ── Scene event kinds to the control panel ───────────────────────────

/// Per-frame state report: a = simulated time, b = speed, c = flag.
pub const EVENT_STATE: f32 = 1.0;

/// Base seed for the starfield; offset by the rebuild generation so each
/// rebuild scatters a fresh sky.
const STAR_SEED: u64 = 42;

pub struct SolarSystem {
    sun_id: Option<NodeId>,
    planet_ids: [Option<NodeId>; bodies::PLANET_COUNT],
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            sun_id: None,
            planet_ids: [None; bodies::PLANET_COUNT],
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl App for SolarSystem {
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    fn build(&mut self, ctx: &mut SceneContext) {
        let exaggerated = ctx.controls.exaggerated;
        let time = ctx.clock.time();

        // ── Sun: fixed radius, never de-emphasized ───────────────────
        let sun_id = ctx.next_id();
        ctx.scene.spawn(Node::new(sun_id).with_tag("sun").with_mesh(Mesh::Sphere {
            radius: bodies::SUN_RADIUS,
            color: bodies::SUN_COLOR,
            emissive: bodies::SUN_EMISSIVE,
        }));
        self.sun_id = Some(sun_id);

        // ── One sphere + one orbit guide per descriptor ──────────────
        for (i, planet) in bodies::planets().iter().enumerate() {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Node::new(id)
                    .with_tag(planet.name)
                    .with_pos(orbit_position(planet.distance, planet.angular_speed, time))
                    .with_mesh(Mesh::Sphere {
                        radius: planet.display_radius(exaggerated),
                        color: planet.color,
                        emissive: bodies::BODY_EMISSIVE,
                    }),
            );
            self.planet_ids[i] = Some(id);

            let ring_id = ctx.next_id();
            ctx.scene.spawn(Node::new(ring_id).with_mesh(Mesh::Ring {
                radius: planet.distance,
                segments: bodies::ORBIT_SEGMENTS,
                opacity: bodies::ORBIT_OPACITY,
            }));
        }

        // ── Illumination: low ambient + sun-centered point light ─────
        ctx.lights.set_ambient([1.0, 1.0, 1.0], bodies::AMBIENT_INTENSITY);
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            [1.0, 1.0, 1.0],
            bodies::POINT_LIGHT_INTENSITY,
        ));

        // ── Backdrop: fresh star scatter each build ──────────────────
        ctx.stars.regenerate(STAR_SEED.wrapping_add(ctx.generation()));
    }

    fn update(&mut self, ctx: &mut SceneContext, input: &InputQueue) {
        // ── Control panel input ──────────────────────────────────────
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind: CUSTOM_SET_SPEED, a, .. } => {
                    ctx.controls.set_speed(a as f64);
                }
                InputEvent::Custom { kind: CUSTOM_SET_EXAGGERATION, a, .. } => {
                    let flag = a > 0.5;
                    if flag != ctx.controls.exaggerated {
                        ctx.controls.exaggerated = flag;
                        ctx.request_rebuild();
                    }
                }
                InputEvent::Custom { kind: CUSTOM_RESET, .. } => {
                    if ctx.controls.exaggerated {
                        ctx.request_rebuild();
                    }
                    ctx.controls.reset();
                }
                _ => {}
            }
        }

        // ── Advance time, then recompute every body position ─────────
        ctx.clock.step(ctx.controls.speed);
        let time = ctx.clock.time();

        for (i, planet) in bodies::planets().iter().enumerate() {
            if let Some(id) = self.planet_ids[i] {
                if let Some(node) = ctx.scene.get_mut(id) {
                    node.pos = orbit_position(planet.distance, planet.angular_speed, time);
                }
            }
        }

        // ── Report state to the control panel ────────────────────────
        ctx.emit_event(SceneEvent {
            kind: EVENT_STATE,
            a: time as f32,
            b: ctx.controls.speed as f32,
            c: if ctx.controls.exaggerated { 1.0 } else { 0.0 },
        });
    }
}
