//! Per-tick driver: owns the bodies, paths, meteors, clock and focus, and turns
//! one tick into a [`FrameOutput`] the scene copies into the engine.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use orrery_engine::{Rng, SimulationClock};

use crate::bodies::{BodySpec, CATALOG};
use crate::body::{BodyId, BodySet, CatalogError};
use crate::config::SimulationConfig;
use crate::focus::{CameraFocusController, CameraPose};
use crate::meteors::{MeteorField, MeteorId};
use crate::orbit::{self, OrbitPathRegistry};
use crate::state::{Command, SimulationState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    pub id: BodyId,
    pub position: Vec3,
    pub rotation: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteTransform {
    pub owner: BodyId,
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeteorTransform {
    pub id: MeteorId,
    pub position: Vec3,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    pub elapsed: f64,
    pub speed: f64,
    pub bodies: Vec<BodyTransform>,
    pub satellites: Vec<SatelliteTransform>,
    pub meteors: Vec<MeteorTransform>,
    pub spawned: Option<MeteorId>,
    pub arrived: Vec<MeteorId>,
    /// Set while a body is focused.
    pub camera: Option<CameraPose>,
    pub orbits_visible: bool,
}

/// Side effects of a command that the scene must mirror right away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Applied {
    /// Pose to jump to immediately.
    pub camera: Option<CameraPose>,
    /// Meteors removed by disabling the field.
    pub cleared: Vec<MeteorId>,
}

pub struct FrameUpdater {
    config: SimulationConfig,
    bodies: BodySet,
    paths: OrbitPathRegistry,
    meteors: MeteorField,
    clock: SimulationClock,
    focus: CameraFocusController,
    state: SimulationState,
}

impl FrameUpdater {
    /// Build from the built-in catalog.
    pub fn new(config: SimulationConfig) -> Result<Self, CatalogError> {
        Self::with_catalog(&CATALOG, config)
    }

    pub fn with_catalog(specs: &[BodySpec], config: SimulationConfig) -> Result<Self, CatalogError> {
        let bodies = BodySet::from_catalog(specs, &config)?;
        let paths = OrbitPathRegistry::new(&bodies, config.orbit_segments, config.orbits_visible);
        Ok(Self {
            paths,
            meteors: MeteorField::new(&config),
            clock: SimulationClock::new(config.base_tick),
            focus: CameraFocusController::new(&config),
            state: SimulationState::new(&config),
            bodies,
            config,
        })
    }

    /// Apply one user command. Call between ticks.
    pub fn apply(&mut self, command: Command) -> Applied {
        let next = self.state.apply(&command, &self.bodies);
        let mut applied = Applied::default();

        match &command {
            Command::ToggleMeteors => {
                applied.cleared = self.meteors.set_enabled(next.meteors_enabled);
                log::info!("meteors {}", if next.meteors_enabled { "on" } else { "off" });
            }
            Command::ToggleOrbits => {
                self.paths.set_visible(next.orbits_visible);
                log::info!("orbits {}", if next.orbits_visible { "shown" } else { "hidden" });
            }
            Command::SetFocus(name) => {
                applied.camera = self.focus.set_focus(name.as_deref(), &self.bodies);
            }
            Command::IncreaseSpeed | Command::DecreaseSpeed => {
                log::info!("speed {:.1}", next.speed.value());
            }
        }

        debug_assert_eq!(next.focus, self.focus.focused());
        self.state = next;
        applied
    }

    /// Advance the simulation by one frame.
    pub fn tick(&mut self, rng: &mut Rng) -> FrameOutput {
        let elapsed = self.clock.advance(self.state.speed);
        let config = &self.config;

        let mut output = FrameOutput {
            elapsed,
            speed: self.state.speed.value(),
            orbits_visible: self.paths.is_visible(),
            ..FrameOutput::default()
        };

        for (i, body) in self.bodies.iter_mut().enumerate() {
            body.rotation = (body.rotation + body.rotation_speed).rem_euclid(TAU);

            if let Some(orbit) = body.orbit {
                let speed = orbit::angular_speed(config.base_angular_speed, orbit.index());
                body.position = orbit::orbital_position(orbit.radius(), speed, elapsed);
            }

            let id = BodyId(i);
            if let Some(satellite) = &mut body.satellite {
                let offset = orbit::satellite_offset(config.satellite_distance, config.satellite_angular_speed, elapsed);
                satellite.position = body.position + Quat::from_rotation_y(body.rotation) * offset;
                output.satellites.push(SatelliteTransform {
                    owner: id,
                    position: satellite.position,
                });
            }

            output.bodies.push(BodyTransform {
                id,
                position: body.position,
                rotation: body.rotation,
            });
        }

        output.camera = self.focus.pose(&self.bodies);

        let meteors = self.meteors.tick(rng);
        output.spawned = meteors.spawned;
        output.arrived = meteors.arrived;
        output.meteors = self
            .meteors
            .iter()
            .map(|m| MeteorTransform {
                id: m.id,
                position: m.position,
            })
            .collect();

        output
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn bodies(&self) -> &BodySet {
        &self.bodies
    }

    pub fn paths(&self) -> &OrbitPathRegistry {
        &self.paths
    }

    pub fn meteors(&self) -> &MeteorField {
        &self.meteors
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn focus(&self) -> &CameraFocusController {
        &self.focus
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updater() -> FrameUpdater {
        FrameUpdater::new(SimulationConfig::default()).unwrap()
    }

    fn earth(u: &FrameUpdater) -> BodyId {
        u.bodies().find("earth").unwrap()
    }

    #[test]
    fn earth_after_one_tick() {
        let mut u = updater();
        let out = u.tick(&mut Rng::new(1));

        assert!((out.elapsed - 0.09).abs() < 1e-12);
        let earth = out.bodies[earth(&u).0];
        // index 3: angle = 0.09 * 0.1 / 3 = 0.003
        assert!((earth.position.x - 62.0 * 0.003f32.cos()).abs() < 1e-4);
        assert!((earth.position.z - 62.0 * 0.003f32.sin()).abs() < 1e-4);
        assert_eq!(earth.position.y, 0.0);
    }

    #[test]
    fn orbits_stay_circular_and_planar() {
        let mut u = updater();
        let mut rng = Rng::new(5);
        for _ in 0..300 {
            u.tick(&mut rng);
            for body in u.bodies().orbiting() {
                let r = body.orbit.unwrap().radius();
                assert_eq!(body.position.y, 0.0);
                assert!((body.position.length() - r).abs() < 1e-3);
            }
        }
        assert_eq!(u.bodies().get(BodyId(0)).unwrap().position, Vec3::ZERO);
    }

    #[test]
    fn rotation_wraps() {
        let mut u = updater();
        let mut rng = Rng::new(5);
        for _ in 0..2000 {
            let out = u.tick(&mut rng);
            assert!(out.bodies.iter().all(|b| (0.0..TAU).contains(&b.rotation)));
        }
        // 2000 * 0.005 = 10 rad, wrapped once.
        let sun = u.bodies().get(BodyId(0)).unwrap();
        assert!((sun.rotation - (10.0 - TAU)).abs() < 1e-2);
    }

    #[test]
    fn moon_circles_earth() {
        let mut u = updater();
        let mut rng = Rng::new(5);
        for _ in 0..100 {
            let out = u.tick(&mut rng);
            let moon = out.satellites[0];
            assert_eq!(moon.owner, earth(&u));
            let earth_pos = out.bodies[moon.owner.0].position;
            assert!((moon.position.distance(earth_pos) - 10.0).abs() < 1e-3);
            assert!(moon.position.y.abs() < 1e-4);
        }
    }

    #[test]
    fn focus_follows_earth_every_tick() {
        let mut u = updater();
        let mut rng = Rng::new(5);
        let applied = u.apply(Command::SetFocus(Some("earth".into())));
        assert!(applied.camera.is_some());

        for _ in 0..3 {
            let out = u.tick(&mut rng);
            let earth_pos = out.bodies[earth(&u).0].position;
            let pose = out.camera.unwrap();
            assert_eq!(pose.target, earth_pos);
            assert_eq!(pose.eye, earth_pos + Vec3::splat(50.0));
        }
    }

    #[test]
    fn default_focus_resets_then_leaves_camera_free() {
        let mut u = updater();
        let mut rng = Rng::new(5);
        u.apply(Command::SetFocus(Some("saturn".into())));
        u.tick(&mut rng);

        let applied = u.apply(Command::SetFocus(None));
        let pose = applied.camera.unwrap();
        assert_eq!(pose.eye, Vec3::new(-90.0, 140.0, 140.0));
        assert_eq!(pose.target, Vec3::ZERO);
        assert_eq!(u.tick(&mut rng).camera, None);
    }

    #[test]
    fn unknown_focus_is_a_quiet_no_op() {
        let mut u = updater();
        u.apply(Command::SetFocus(Some("earth".into())));
        let applied = u.apply(Command::SetFocus(Some("krypton".into())));
        assert_eq!(applied, Applied::default());
        assert_eq!(u.state().focus, None);
        assert_eq!(u.tick(&mut Rng::new(1)).camera, None);
    }

    #[test]
    fn speed_scales_time() {
        let mut u = updater();
        let mut rng = Rng::new(5);
        u.apply(Command::IncreaseSpeed);
        let out = u.tick(&mut rng);
        assert!((out.elapsed - 0.09 * 1.2).abs() < 1e-12);
        assert!((out.speed - 1.2).abs() < 1e-12);
    }

    #[test]
    fn meteor_toggle_clears_live_meteors() {
        let mut u = updater();
        let mut rng = Rng::new(42);
        u.apply(Command::ToggleMeteors);
        for _ in 0..20_000 {
            u.tick(&mut rng);
            if u.meteors().len() >= 2 {
                break;
            }
        }
        let live = u.meteors().len();
        assert!(live >= 2);

        let applied = u.apply(Command::ToggleMeteors);
        assert_eq!(applied.cleared.len(), live);
        assert!(u.meteors().is_empty());

        for _ in 0..5000 {
            let out = u.tick(&mut rng);
            assert!(out.spawned.is_none() && out.meteors.is_empty());
        }
    }

    #[test]
    fn orbit_toggle_is_reported() {
        let mut u = updater();
        u.apply(Command::ToggleOrbits);
        assert!(!u.tick(&mut Rng::new(1)).orbits_visible);
        assert!(u.paths().iter().all(|p| !p.visible));
    }

    #[test]
    fn bad_catalog_fails_construction() {
        let mut specs = CATALOG;
        specs[4].orbit_radius = Some(-1.0);
        let err = FrameUpdater::with_catalog(&specs, SimulationConfig::default()).err().unwrap();
        assert!(matches!(err, CatalogError::InvalidOrbitRadius { .. }));
    }
}
