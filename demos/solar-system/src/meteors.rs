//! Meteor field: straight-line streaks that cross the scene from back to front.

use glam::Vec3;
use orrery_engine::Rng;

use crate::config::{SimulationConfig, SpawnPlane};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeteorId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Meteor {
    pub id: MeteorId,
    pub origin: Vec3,
    pub destination: Vec3,
    pub position: Vec3,
}

/// What happened to the field during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeteorTick {
    pub spawned: Option<MeteorId>,
    pub arrived: Vec<MeteorId>,
}

#[derive(Debug, Clone)]
pub struct MeteorField {
    meteors: Vec<Meteor>,
    enabled: bool,
    next_id: u32,
    spawn_chance: f32,
    lerp: f32,
    arrival_distance: f32,
    origin: SpawnPlane,
    destination: SpawnPlane,
}

impl MeteorField {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            meteors: Vec::new(),
            enabled: config.meteors_enabled,
            next_id: 1,
            spawn_chance: config.meteor_spawn_chance,
            lerp: config.meteor_lerp,
            arrival_distance: config.meteor_arrival_distance,
            origin: config.meteor_origin,
            destination: config.meteor_destination,
        }
    }

    /// Enable or disable spawning. Disabling removes every live meteor at once;
    /// the ids of the removed meteors are returned.
    pub fn set_enabled(&mut self, enabled: bool) -> Vec<MeteorId> {
        self.enabled = enabled;
        if enabled {
            Vec::new()
        } else {
            self.clear()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn clear(&mut self) -> Vec<MeteorId> {
        self.meteors.drain(..).map(|m| m.id).collect()
    }

    /// Advance every live meteor, drop those that arrived, then roll once for a
    /// new one. Does nothing while disabled.
    pub fn tick(&mut self, rng: &mut Rng) -> MeteorTick {
        let mut result = MeteorTick::default();
        if !self.enabled {
            return result;
        }

        // Back to front so swap_remove never skips an element.
        for i in (0..self.meteors.len()).rev() {
            let meteor = &mut self.meteors[i];
            meteor.position = meteor.position.lerp(meteor.destination, self.lerp);
            if meteor.position.distance(meteor.destination) < self.arrival_distance {
                let meteor = self.meteors.swap_remove(i);
                log::debug!("meteor {} arrived", meteor.id.0);
                result.arrived.push(meteor.id);
            }
        }

        if rng.chance(self.spawn_chance) {
            let origin = sample(&self.origin, rng);
            let destination = sample(&self.destination, rng);
            let id = self.spawn_at(origin, destination);
            log::debug!("meteor {} spawned at {origin}", id.0);
            result.spawned = Some(id);
        }

        result
    }

    /// Add a meteor at `origin` heading for `destination`.
    pub fn spawn_at(&mut self, origin: Vec3, destination: Vec3) -> MeteorId {
        let id = MeteorId(self.next_id);
        self.next_id += 1;
        self.meteors.push(Meteor {
            id,
            origin,
            destination,
            position: origin,
        });
        id
    }

    pub fn get(&self, id: MeteorId) -> Option<&Meteor> {
        self.meteors.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Meteor> {
        self.meteors.iter()
    }

    pub fn len(&self) -> usize {
        self.meteors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meteors.is_empty()
    }
}

fn sample(plane: &SpawnPlane, rng: &mut Rng) -> Vec3 {
    Vec3::new(rng.range(plane.x[0], plane.x[1]), rng.range(plane.y[0], plane.y[1]), plane.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_field() -> MeteorField {
        let mut field = MeteorField::new(&SimulationConfig::default());
        field.set_enabled(true);
        field
    }

    #[test]
    fn disabled_field_never_spawns() {
        let mut field = MeteorField::new(&SimulationConfig::default());
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            assert_eq!(field.tick(&mut rng), MeteorTick::default());
        }
        assert!(field.is_empty());
    }

    #[test]
    fn spawn_rate_is_low_and_bounded() {
        let mut field = enabled_field();
        let mut rng = Rng::new(1234);
        let mut spawned = 0;
        for _ in 0..20_000 {
            let tick = field.tick(&mut rng);
            spawned += tick.spawned.is_some() as u32;
        }
        // Expected around 50 for p = 0.0025.
        assert!(spawned > 10 && spawned < 120, "spawned = {spawned}");
    }

    #[test]
    fn spawned_meteors_start_in_the_back_box() {
        let config = SimulationConfig::default();
        let mut field = enabled_field();
        let mut rng = Rng::new(99);
        let mut seen = 0;
        for _ in 0..20_000 {
            if let Some(id) = field.tick(&mut rng).spawned {
                let m = field.get(id).unwrap();
                assert!(config.meteor_origin.contains(m.origin));
                assert!(config.meteor_destination.contains(m.destination));
                assert_eq!(m.position, m.origin);
                seen += 1;
            }
        }
        assert!(seen > 0);
    }

    #[test]
    fn meteor_arrives_and_is_removed() {
        let mut field = enabled_field();
        // No spawns during this test.
        field.spawn_chance = 0.0;
        let id = field.spawn_at(Vec3::new(0.0, 0.0, -300.0), Vec3::new(0.0, 0.0, 300.0));
        let mut rng = Rng::new(1);

        let mut arrived_at = None;
        let mut last = f32::MAX;
        for tick in 1..10_000 {
            let out = field.tick(&mut rng);
            if out.arrived.contains(&id) {
                arrived_at = Some(tick);
                break;
            }
            let d = field.get(id).unwrap().position.distance(Vec3::new(0.0, 0.0, 300.0));
            assert!(d < last);
            last = d;
        }
        // 600 * 0.997^n < 1 first holds at n = 2130; allow for f32 rounding.
        let tick = arrived_at.unwrap();
        assert!((2120..=2140).contains(&tick), "arrived after {tick} ticks");
        assert!(field.is_empty());
    }

    #[test]
    fn removal_keeps_the_others() {
        let mut field = enabled_field();
        field.spawn_chance = 0.0;
        let near = field.spawn_at(Vec3::new(0.0, 0.0, 299.5), Vec3::new(0.0, 0.0, 300.0));
        let far_a = field.spawn_at(Vec3::new(0.0, 0.0, -300.0), Vec3::new(0.0, 0.0, 300.0));
        let far_b = field.spawn_at(Vec3::new(5.0, 0.0, -300.0), Vec3::new(5.0, 0.0, 300.0));

        let out = field.tick(&mut Rng::new(3));
        assert_eq!(out.arrived, vec![near]);
        assert!(field.get(far_a).is_some());
        assert!(field.get(far_b).is_some());
        assert_eq!(field.len(), 2);
    }

    #[test]
    fn disabling_clears_everything() {
        let mut field = enabled_field();
        let a = field.spawn_at(Vec3::ZERO, Vec3::X * 100.0);
        let b = field.spawn_at(Vec3::ZERO, Vec3::Y * 100.0);
        let cleared = field.set_enabled(false);
        assert_eq!(cleared, vec![a, b]);
        assert!(field.is_empty());
        assert!(!field.is_enabled());
    }
}
