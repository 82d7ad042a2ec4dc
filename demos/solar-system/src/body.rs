//! Celestial-body model and the registry built from the catalog.

use std::fmt;

use glam::Vec3;

use crate::bodies::{BodySpec, RingSpec};
use crate::config::SimulationConfig;

/// Index of a body inside its [`BodySet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Orbit indices start at 1; index 0 would divide by zero.
    ZeroOrbitIndex { body: String },
    InvalidOrbitRadius { body: String, radius: f32 },
    InvalidRadius { body: String, radius: f32 },
    DuplicateName(String),
    /// A satellite's owner must itself orbit something.
    StationaryOwner { owner: String, satellite: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::ZeroOrbitIndex { body } => write!(f, "{body}: orbit index must be at least 1"),
            CatalogError::InvalidOrbitRadius { body, radius } => {
                write!(f, "{body}: orbit radius {radius} is not positive")
            }
            CatalogError::InvalidRadius { body, radius } => write!(f, "{body}: radius {radius} is not positive"),
            CatalogError::DuplicateName(name) => write!(f, "duplicate body name {name:?}"),
            CatalogError::StationaryOwner { owner, satellite } => {
                write!(f, "{satellite}: owner {owner} has no orbit")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Circular orbit around the origin in the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    radius: f32,
    index: u32,
}

impl Orbit {
    pub fn new(body: &str, radius: f32, index: u32) -> Result<Self, CatalogError> {
        if index == 0 {
            return Err(CatalogError::ZeroOrbitIndex { body: body.to_string() });
        }
        if radius.is_nan() || radius <= 0.0 {
            return Err(CatalogError::InvalidOrbitRadius { body: body.to_string(), radius });
        }
        Ok(Self { radius, index })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// 1-based position counted outward from the central body.
    pub fn index(&self) -> u32 {
        self.index
    }
}

/// Moon carried by a body. Has no orbit path of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    pub name: String,
    pub radius: f32,
    pub color: u32,
    /// World position, recomputed every tick.
    pub position: Vec3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub radius: f32,
    pub color: u32,
    pub orbit: Option<Orbit>,
    /// Own-axis (Y) rotation in radians, kept in `[0, 2π)`.
    pub rotation: f32,
    pub rotation_speed: f32,
    pub satellite: Option<Satellite>,
    pub ring: Option<RingSpec>,
    pub position: Vec3,
}

impl CelestialBody {
    /// Central bodies sit at the origin.
    pub fn new(name: &str, radius: f32, orbit: Option<Orbit>) -> Result<Self, CatalogError> {
        if radius.is_nan() || radius <= 0.0 {
            return Err(CatalogError::InvalidRadius { body: name.to_string(), radius });
        }
        let position = match orbit {
            Some(orbit) => Vec3::new(orbit.radius(), 0.0, 0.0),
            None => Vec3::ZERO,
        };
        Ok(Self {
            name: name.to_string(),
            radius,
            color: 0xffffff,
            orbit,
            rotation: 0.0,
            rotation_speed: 0.0,
            satellite: None,
            ring: None,
            position,
        })
    }

    pub fn is_orbiting(&self) -> bool {
        self.orbit.is_some()
    }
}

/// Ordered set of bodies, built once and never resized.
#[derive(Debug, Clone, Default)]
pub struct BodySet {
    bodies: Vec<CelestialBody>,
}

impl BodySet {
    /// Build the set from catalog entries, assigning orbit indices 1..N to
    /// orbiting bodies in the order they appear.
    pub fn from_catalog(specs: &[BodySpec], config: &SimulationConfig) -> Result<Self, CatalogError> {
        let mut set = Self { bodies: Vec::with_capacity(specs.len()) };
        let mut next_index = 1;

        for spec in specs {
            if set.find(spec.name).is_some() {
                return Err(CatalogError::DuplicateName(spec.name.to_string()));
            }

            let orbit = match spec.orbit_radius {
                Some(radius) => {
                    let orbit = Orbit::new(spec.name, radius, next_index)?;
                    next_index += 1;
                    Some(orbit)
                }
                None => None,
            };

            let mut body = CelestialBody::new(spec.name, spec.radius, orbit)?;
            body.color = spec.color;
            body.rotation_speed = config.rotation_speed;
            body.ring = spec.ring;

            if let Some(sat) = spec.satellite {
                if orbit.is_none() {
                    return Err(CatalogError::StationaryOwner {
                        owner: spec.name.to_string(),
                        satellite: sat.name.to_string(),
                    });
                }
                body.satellite = Some(Satellite {
                    name: sat.name.to_string(),
                    radius: spec.radius * config.satellite_scale,
                    color: sat.color,
                    position: body.position + Vec3::new(config.satellite_distance, 0.0, 0.0),
                });
            }

            set.bodies.push(body);
        }

        Ok(set)
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies.iter().position(|b| b.name == name).map(BodyId)
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CelestialBody> {
        self.bodies.iter_mut()
    }

    /// Bodies with an orbit, in index order.
    pub fn orbiting(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|b| b.is_orbiting())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{self, CATALOG};

    fn catalog() -> BodySet {
        BodySet::from_catalog(&CATALOG, &SimulationConfig::default()).unwrap()
    }

    #[test]
    fn indices_follow_registration_order() {
        let set = catalog();
        let indices: Vec<u32> = set.orbiting().map(|b| b.orbit.unwrap().index()).collect();
        assert_eq!(indices, (1..=8).collect::<Vec<_>>());
        assert_eq!(set.get(set.find("neptune").unwrap()).unwrap().orbit.unwrap().index(), 8);
    }

    #[test]
    fn lookup_by_name() {
        let set = catalog();
        assert_eq!(set.find("sun"), Some(BodyId(0)));
        assert_eq!(set.find("earth"), Some(BodyId(3)));
        assert_eq!(set.find("pluto"), None);
        // Satellites are not top-level bodies.
        assert_eq!(set.find("moon"), None);
    }

    #[test]
    fn moon_is_a_fifth_of_earth() {
        let set = catalog();
        let earth = set.get(set.find("earth").unwrap()).unwrap();
        let moon = earth.satellite.as_ref().unwrap();
        assert_eq!(moon.name, "moon");
        assert!((moon.radius - 1.2).abs() < 1e-6);
    }

    #[test]
    fn orbit_rejects_zero_index() {
        assert_eq!(
            Orbit::new("x", 10.0, 0),
            Err(CatalogError::ZeroOrbitIndex { body: "x".into() })
        );
    }

    #[test]
    fn orbit_rejects_non_positive_radius() {
        assert!(Orbit::new("x", 0.0, 1).is_err());
        assert!(Orbit::new("x", -5.0, 1).is_err());
        assert!(Orbit::new("x", f32::NAN, 1).is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let specs = [CATALOG[0], CATALOG[1], CATALOG[1]];
        let err = BodySet::from_catalog(&specs, &SimulationConfig::default()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("mercury".into()));
    }

    #[test]
    fn rejects_zero_radius_body() {
        let mut sun = bodies::SUN;
        sun.radius = 0.0;
        let err = BodySet::from_catalog(&[sun], &SimulationConfig::default()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRadius { .. }));
        assert_eq!(err.to_string(), "sun: radius 0 is not positive");
    }

    #[test]
    fn rejects_satellite_on_stationary_body() {
        let mut sun = bodies::SUN;
        sun.satellite = CATALOG[3].satellite;
        let err = BodySet::from_catalog(&[sun], &SimulationConfig::default()).unwrap_err();
        assert!(matches!(err, CatalogError::StationaryOwner { .. }));
    }
}
