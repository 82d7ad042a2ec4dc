use glam::Vec3;

use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::MaterialRegistry;
use crate::components::entity::Entity;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::systems::lighting::LightState;
use crate::systems::lines::LineBuffer;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Vertical field of view in degrees (default: 45).
    pub fov_y_degrees: f32,
    /// Near clip plane (default: 0.1).
    pub near: f32,
    /// Far clip plane (default: 1000).
    pub far: f32,
    /// Initial eye position.
    pub camera_position: Vec3,
    /// Initial look target.
    pub camera_target: Vec3,
    /// Initial viewport size, replaced by the first resize event.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Maximum number of render instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of line vertices (default: 2048).
    pub max_line_vertices: usize,
    /// Maximum number of line loops (default: 16).
    pub max_line_loops: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of point lights (default: 4).
    pub max_lights: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            camera_position: Vec3::new(0.0, 0.0, 100.0),
            camera_target: Vec3::ZERO,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            max_instances: 256,
            max_line_vertices: 2048,
            max_line_loops: 16,
            max_events: 32,
            max_lights: 4,
        }
    }
}

/// The core contract every scene must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure camera and lights.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One frame tick. Apply queued input, move entities, spawn/despawn.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub lines: LineBuffer,
    pub lights: LightState,
    pub materials: MaterialRegistry,
    pub rng: Rng,
    pub events: Vec<GameEvent>,
    max_events: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default(), 42)
    }

    /// Create a context sized and positioned from a GameConfig.
    pub fn from_config(config: &GameConfig, seed: u64) -> Self {
        let mut camera = Camera3D::new(
            config.fov_y_degrees,
            config.viewport_width / config.viewport_height,
            config.near,
            config.far,
        );
        camera.set_pose(config.camera_position, config.camera_target);

        Self {
            scene: Scene::with_capacity(config.max_instances),
            camera,
            lines: LineBuffer::new(config.max_line_vertices),
            lights: LightState::with_capacity(config.max_lights),
            materials: MaterialRegistry::new(),
            rng: Rng::new(seed),
            events: Vec::with_capacity(config.max_events),
            max_events: config.max_events,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an entity, attaching the material registered under its tag if it has none.
    pub fn spawn(&mut self, mut entity: Entity) -> EntityId {
        if entity.material.is_none() {
            entity.material = self.materials.get(&entity.tag);
            if entity.material.is_none() && !self.materials.is_empty() {
                log::debug!("no material for {:?}", entity.tag);
            }
        }
        let id = entity.id;
        self.scene.spawn(entity);
        id
    }

    /// Remove an entity. Returns false if it was not in the scene.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        self.scene.despawn(id).is_some()
    }

    /// Emit a game event to be forwarded to TypeScript.
    /// Events beyond the configured capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() < self.max_events {
            self.events.push(event);
        } else {
            log::warn!("event buffer full, dropping event kind {}", event.kind);
        }
    }

    /// Replace the material table and attach materials to existing entities by tag.
    pub fn set_materials(&mut self, materials: MaterialRegistry) {
        self.materials = materials;
        let attached = self.scene.attach_materials(&self.materials);
        log::debug!("attached {attached} materials to existing entities");
    }

    /// Clear per-frame transient data (events, line loops).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.lines.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
