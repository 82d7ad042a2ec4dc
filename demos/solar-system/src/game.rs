//! Solar System: sun, eight planets, a moon, two ring systems and a meteor shower.
//!
//! Drag orbits the camera, the wheel dollies it. Host buttons arrive as custom
//! events and become [`Command`]s applied at the start of the next tick.

use std::collections::HashMap;

use glam::Vec2;
use orrery_engine::*;

use crate::body::BodyId;
use crate::config::SimulationConfig;
use crate::meteors::MeteorId;
use crate::state::Command;
use crate::update::{FrameOutput, FrameUpdater};

// ── Custom event kinds from the host ────────────────────────────────

const CUSTOM_TOGGLE_METEORS: u32 = 1;
const CUSTOM_TOGGLE_ORBITS: u32 = 2;
/// `a` = catalog index, negative = free view.
const CUSTOM_FOCUS: u32 = 3;
const CUSTOM_SPEED_UP: u32 = 4;
const CUSTOM_SPEED_DOWN: u32 = 5;

// ── Game event kinds to the host ────────────────────────────────────

const EVENT_TIME: f32 = 1.0;
const EVENT_TOGGLES: f32 = 2.0;
const EVENT_FOCUS: f32 = 3.0;

// ── Camera controls ─────────────────────────────────────────────────

/// Radians per pixel of drag.
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Distance multiplier per wheel unit.
const DOLLY_SENSITIVITY: f32 = 0.001;

const METEOR_TAG: &str = "meteor";

pub struct SolarSystem {
    config: SimulationConfig,
    updater: Option<FrameUpdater>,
    pending: Vec<Command>,

    /// Parallel to the body set.
    body_entities: Vec<EntityId>,
    ring_entities: Vec<(BodyId, EntityId)>,
    satellite_entities: Vec<(BodyId, EntityId)>,
    meteor_entities: HashMap<MeteorId, EntityId>,

    dragging: bool,
    last_pointer: Vec2,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config,
            updater: None,
            pending: Vec::new(),
            body_entities: Vec::new(),
            ring_entities: Vec::new(),
            satellite_entities: Vec::new(),
            meteor_entities: HashMap::new(),
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Queue a command for the next tick.
    pub fn queue(&mut self, command: Command) {
        self.pending.push(command);
    }

    pub fn updater(&self) -> Option<&FrameUpdater> {
        self.updater.as_ref()
    }

    fn focus_command(&self, index: f32) -> Option<Command> {
        if index < 0.0 {
            return Some(Command::SetFocus(None));
        }
        let bodies = self.updater.as_ref()?.bodies();
        match bodies.get(BodyId(index as usize)) {
            Some(body) => Some(Command::SetFocus(Some(body.name.clone()))),
            None => {
                log::warn!("focus index {index} out of range");
                None
            }
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind, a, .. } => match kind {
                    CUSTOM_TOGGLE_METEORS => self.pending.push(Command::ToggleMeteors),
                    CUSTOM_TOGGLE_ORBITS => self.pending.push(Command::ToggleOrbits),
                    CUSTOM_FOCUS => {
                        if let Some(command) = self.focus_command(a) {
                            self.pending.push(command);
                        }
                    }
                    CUSTOM_SPEED_UP => self.pending.push(Command::IncreaseSpeed),
                    CUSTOM_SPEED_DOWN => self.pending.push(Command::DecreaseSpeed),
                    _ => {}
                },
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.last_pointer = Vec2::new(x, y);
                }
                InputEvent::PointerUp { .. } => {
                    self.dragging = false;
                }
                InputEvent::PointerMove { x, y } => {
                    let pointer = Vec2::new(x, y);
                    if self.dragging {
                        let delta = pointer - self.last_pointer;
                        ctx.camera.orbit(-delta.x * ORBIT_SENSITIVITY, -delta.y * ORBIT_SENSITIVITY);
                    }
                    self.last_pointer = pointer;
                }
                InputEvent::Wheel { delta } => {
                    ctx.camera.dolly((1.0 + delta * DOLLY_SENSITIVITY).clamp(0.5, 2.0));
                }
                InputEvent::Resize { width, height } => {
                    ctx.camera.resize(width, height);
                }
                InputEvent::KeyDown { .. } => {}
            }
        }
    }

    fn spawn_bodies(&mut self, ctx: &mut EngineContext) {
        let Some(updater) = self.updater.as_ref() else {
            return;
        };

        for (i, body) in updater.bodies().iter().enumerate() {
            let id = ctx.next_id();
            let mesh = MeshComponent::sphere(body.radius, Color::from_hex(body.color))
                .with_unlit(!body.is_orbiting());
            self.body_entities.push(ctx.spawn(
                Entity::new(id)
                    .with_tag(body.name.as_str())
                    .with_pos(body.position)
                    .with_mesh(mesh),
            ));

            if let Some(ring) = body.ring {
                let id = ctx.next_id();
                let mesh = MeshComponent::ring(ring.inner, ring.outer, Color::from_hex(body.color))
                    .with_unlit(true)
                    .with_double_sided(true);
                ctx.spawn(Entity::new(id).with_tag(ring.material).with_pos(body.position).with_mesh(mesh));
                self.ring_entities.push((BodyId(i), id));
            }

            if let Some(satellite) = &body.satellite {
                let id = ctx.next_id();
                let mesh = MeshComponent::sphere(satellite.radius, Color::from_hex(satellite.color));
                ctx.spawn(
                    Entity::new(id)
                        .with_tag(satellite.name.as_str())
                        .with_pos(satellite.position)
                        .with_mesh(mesh),
                );
                self.satellite_entities.push((BodyId(i), id));
            }
        }
    }

    fn despawn_meteors(&mut self, ctx: &mut EngineContext, ids: &[MeteorId]) {
        for id in ids {
            if let Some(entity) = self.meteor_entities.remove(id) {
                ctx.despawn(entity);
            }
        }
    }

    fn sync_scene(&mut self, ctx: &mut EngineContext, frame: &FrameOutput) {
        for body in &frame.bodies {
            let Some(&entity) = self.body_entities.get(body.id.0) else {
                continue;
            };
            if let Some(e) = ctx.scene.get_mut(entity) {
                e.pos = body.position;
                e.rotation = body.rotation;
            }
        }

        for &(owner, entity) in &self.ring_entities {
            if let (Some(body), Some(e)) = (frame.bodies.get(owner.0), ctx.scene.get_mut(entity)) {
                e.pos = body.position;
                e.rotation = body.rotation;
            }
        }

        for satellite in &frame.satellites {
            let entity = self
                .satellite_entities
                .iter()
                .find(|(owner, _)| *owner == satellite.owner)
                .map(|&(_, e)| e);
            if let Some(e) = entity.and_then(|e| ctx.scene.get_mut(e)) {
                e.pos = satellite.position;
            }
        }

        self.despawn_meteors(ctx, &frame.arrived);
        if let Some(spawned) = frame.spawned {
            let id = ctx.next_id();
            let mesh = MeshComponent::sphere(self.config.meteor_radius, Color::from_hex(self.config.meteor_color))
                .with_unlit(true);
            ctx.spawn(Entity::new(id).with_tag(METEOR_TAG).with_mesh(mesh));
            self.meteor_entities.insert(spawned, id);
        }
        for meteor in &frame.meteors {
            let entity = self.meteor_entities.get(&meteor.id).copied();
            if let Some(e) = entity.and_then(|e| ctx.scene.get_mut(e)) {
                e.pos = meteor.position;
            }
        }

        if let Some(pose) = frame.camera {
            ctx.camera.set_pose(pose.eye, pose.target);
        }
    }

    fn draw_orbits(&self, ctx: &mut EngineContext) {
        let Some(updater) = self.updater.as_ref() else {
            return;
        };
        if !updater.paths().is_visible() {
            return;
        }
        let color = LineColor::new(1.0, 1.0, 1.0, self.config.orbit_alpha);
        for path in updater.paths().iter().filter(|p| p.visible) {
            ctx.lines.push_loop(&path.points, color);
        }
    }

    fn emit_ui_events(&self, ctx: &mut EngineContext, frame: &FrameOutput) {
        let Some(updater) = self.updater.as_ref() else {
            return;
        };
        let state = updater.state();
        ctx.emit_event(GameEvent::new(EVENT_TIME, frame.elapsed as f32, frame.speed as f32, 0.0));
        ctx.emit_event(GameEvent::new(
            EVENT_TOGGLES,
            state.meteors_enabled as u8 as f32,
            state.orbits_visible as u8 as f32,
            frame.meteors.len() as f32,
        ));
        let focus = state.focus.map_or(-1.0, |id| id.0 as f32);
        ctx.emit_event(GameEvent::new(EVENT_FOCUS, focus, 0.0, 0.0));
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            camera_position: self.config.default_eye,
            camera_target: self.config.default_target,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let ambient = self.config.ambient;
        ctx.lights.set_ambient(ambient, ambient, ambient);
        ctx.lights.add(PointLight::new(
            glam::Vec3::ZERO,
            [1.0, 1.0, 1.0],
            self.config.sun_light_intensity,
            self.config.sun_light_range,
        ));
        ctx.camera.set_pose(self.config.default_eye, self.config.default_target);

        match FrameUpdater::new(self.config.clone()) {
            Ok(updater) => self.updater = Some(updater),
            Err(err) => {
                log::error!("invalid body catalog: {err}");
                return;
            }
        }
        self.spawn_bodies(ctx);
        log::info!("spawned {} entities", ctx.scene.len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);

        let Some(updater) = self.updater.as_mut() else {
            self.pending.clear();
            return;
        };

        for command in self.pending.drain(..) {
            let applied = updater.apply(command);
            if let Some(pose) = applied.camera {
                ctx.camera.set_pose(pose.eye, pose.target);
            }
            for id in applied.cleared {
                if let Some(entity) = self.meteor_entities.remove(&id) {
                    ctx.despawn(entity);
                }
            }
        }

        let frame = updater.tick(&mut ctx.rng);
        self.sync_scene(ctx, &frame);
        self.draw_orbits(ctx);
        self.emit_ui_events(ctx, &frame);
    }
}
