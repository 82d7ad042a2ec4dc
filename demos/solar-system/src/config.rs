//! Tunable constants for the solar-system scene.
//!
//! Every value here is frame-count based: motion is expressed per tick, not per
//! second, so the scene runs faster on faster displays.

use glam::Vec3;
use serde::Deserialize;

/// Axis-aligned box a meteor endpoint is drawn from. `z` is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SpawnPlane {
    pub x: [f32; 2],
    pub y: [f32; 2],
    pub z: f32,
}

impl SpawnPlane {
    pub const fn new(x: [f32; 2], y: [f32; 2], z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.x[0] && p.x < self.x[1] && p.y >= self.y[0] && p.y < self.y[1] && p.z == self.z
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulated time added per tick at speed 1.
    pub base_tick: f64,
    /// Angular speed of orbit index 1; index `i` moves at `base / i`.
    pub base_angular_speed: f64,
    /// Own-axis rotation added to every body each tick (radians).
    pub rotation_speed: f32,
    pub satellite_angular_speed: f64,
    pub satellite_distance: f32,
    /// Satellite size as a fraction of its owner's radius.
    pub satellite_scale: f32,

    pub initial_speed: f64,
    pub speed_step: f64,
    pub speed_floor: f64,

    /// Eye offset from a focused body.
    pub focus_offset: Vec3,
    pub default_eye: Vec3,
    pub default_target: Vec3,

    pub meteor_spawn_chance: f32,
    pub meteor_lerp: f32,
    pub meteor_arrival_distance: f32,
    pub meteor_radius: f32,
    pub meteor_color: u32,
    pub meteor_origin: SpawnPlane,
    pub meteor_destination: SpawnPlane,

    /// Segments per orbit loop; the loop has `segments + 1` points.
    pub orbit_segments: usize,
    pub orbit_alpha: f32,

    pub meteors_enabled: bool,
    pub orbits_visible: bool,

    pub ambient: f32,
    pub sun_light_intensity: f32,
    pub sun_light_range: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_tick: 0.09,
            base_angular_speed: 0.1,
            rotation_speed: 0.005,
            satellite_angular_speed: 0.9,
            satellite_distance: 10.0,
            satellite_scale: 0.2,

            initial_speed: 1.0,
            speed_step: 0.2,
            speed_floor: 0.1,

            focus_offset: Vec3::new(50.0, 50.0, 50.0),
            default_eye: Vec3::new(-90.0, 140.0, 140.0),
            default_target: Vec3::ZERO,

            meteor_spawn_chance: 0.0025,
            meteor_lerp: 0.003,
            meteor_arrival_distance: 1.0,
            meteor_radius: 0.5,
            meteor_color: 0xffa500,
            meteor_origin: SpawnPlane::new([-200.0, 200.0], [-100.0, 100.0], -300.0),
            meteor_destination: SpawnPlane::new([-200.0, 200.0], [-100.0, 100.0], 300.0),

            orbit_segments: 100,
            orbit_alpha: 0.35,

            meteors_enabled: false,
            orbits_visible: true,

            ambient: 0.2,
            sun_light_intensity: 2.0,
            sun_light_range: 300.0,
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration, filling missing fields from the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
