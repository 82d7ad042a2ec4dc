//! Circular orbit math and the orbit-path registry. Pure functions, no engine types.
//!
//! Angles are computed in f64 from the accumulated clock value and only
//! narrowed to f32 for the final position.

use std::f64::consts::TAU;

use glam::Vec3;

use crate::body::{BodyId, BodySet};

/// Angular speed of the body with the given 1-based orbit index.
/// Outer bodies move more slowly.
pub fn angular_speed(base: f64, index: u32) -> f64 {
    base / index as f64
}

/// Position on a circular orbit of `radius` in the XZ plane after `elapsed` time.
pub fn orbital_position(radius: f32, angular_speed: f64, elapsed: f64) -> Vec3 {
    let angle = elapsed * angular_speed;
    let r = radius as f64;
    Vec3::new((r * angle.cos()) as f32, 0.0, (r * angle.sin()) as f32)
}

/// Offset of a satellite from its owner, in the owner's local (unrotated) frame.
pub fn satellite_offset(distance: f32, angular_speed: f64, elapsed: f64) -> Vec3 {
    orbital_position(distance, angular_speed, elapsed)
}

/// Sample a closed circle: `segments + 1` points, the last equal to the first.
pub fn path_points(radius: f32, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(1);
    let r = radius as f64;
    (0..=segments)
        .map(|k| {
            let theta = TAU * k as f64 / segments as f64;
            Vec3::new((r * theta.cos()) as f32, 0.0, (r * theta.sin()) as f32)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct OrbitPath {
    pub body: BodyId,
    pub points: Vec<Vec3>,
    pub visible: bool,
}

/// One path per orbiting body. Visibility is a single switch for all of them.
#[derive(Debug, Clone)]
pub struct OrbitPathRegistry {
    paths: Vec<OrbitPath>,
    visible: bool,
}

impl OrbitPathRegistry {
    pub fn new(bodies: &BodySet, segments: usize, visible: bool) -> Self {
        let paths = bodies
            .iter()
            .enumerate()
            .filter_map(|(i, body)| {
                body.orbit.map(|orbit| OrbitPath {
                    body: BodyId(i),
                    points: path_points(orbit.radius(), segments),
                    visible,
                })
            })
            .collect();
        Self { paths, visible }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        for path in &mut self.paths {
            path.visible = visible;
        }
    }

    /// Flip visibility. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.set_visible(!self.visible);
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn get(&self, body: BodyId) -> Option<&OrbitPath> {
        self.paths.iter().find(|p| p.body == body)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitPath> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::CATALOG;
    use crate::config::SimulationConfig;
    use test_case::test_case;

    fn catalog() -> BodySet {
        BodySet::from_catalog(&CATALOG, &SimulationConfig::default()).unwrap()
    }

    #[test_case(28.0, 1 ; "mercury")]
    #[test_case(62.0, 3 ; "earth")]
    #[test_case(138.0, 6 ; "saturn")]
    #[test_case(200.0, 8 ; "neptune")]
    fn stays_on_circle_in_plane(radius: f32, index: u32) {
        let speed = angular_speed(0.1, index);
        for step in 0..500 {
            let p = orbital_position(radius, speed, step as f64 * 0.37);
            assert_eq!(p.y, 0.0);
            assert!((p.length() - radius).abs() < 1e-3, "|p| = {}", p.length());
        }
    }

    #[test_case(1, 0.1)]
    #[test_case(2, 0.05)]
    #[test_case(4, 0.025)]
    #[test_case(8, 0.0125)]
    fn angular_speed_by_index(index: u32, expected: f64) {
        assert!((angular_speed(0.1, index) - expected).abs() < 1e-12);
    }

    #[test]
    fn inner_bodies_are_faster() {
        let speeds: Vec<f64> = (1..=8).map(|i| angular_speed(0.1, i)).collect();
        assert!(speeds.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn starts_on_positive_x() {
        assert_eq!(orbital_position(62.0, 0.1, 0.0), Vec3::new(62.0, 0.0, 0.0));
    }

    #[test]
    fn satellite_offset_is_ten_units_out() {
        let o = satellite_offset(10.0, 0.9, 3.3);
        assert!((o.length() - 10.0).abs() < 1e-4);
        assert_eq!(o.y, 0.0);
    }

    #[test]
    fn path_is_closed() {
        let points = path_points(44.0, 100);
        assert_eq!(points.len(), 101);
        assert!(points[0].distance(points[100]) < 1e-3);
        assert!(points.iter().all(|p| (p.length() - 44.0).abs() < 1e-3 && p.y == 0.0));
    }

    #[test]
    fn one_path_per_orbiting_body() {
        let set = catalog();
        let registry = OrbitPathRegistry::new(&set, 100, true);
        assert_eq!(registry.len(), 8);
        assert!(registry.get(BodyId(0)).is_none());
        assert!(registry.get(set.find("earth").unwrap()).is_some());
    }

    #[test]
    fn toggle_reaches_every_path() {
        let mut registry = OrbitPathRegistry::new(&catalog(), 100, true);
        assert!(!registry.toggle());
        assert!(registry.iter().all(|p| !p.visible));
        assert!(registry.toggle());
        assert!(registry.iter().all(|p| p.visible));
        registry.set_visible(false);
        registry.set_visible(false);
        assert!(registry.iter().all(|p| !p.visible));
    }
}
