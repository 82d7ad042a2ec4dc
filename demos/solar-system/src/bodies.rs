//! Catalog of the bodies in the scene: sizes, orbit radii, rings and moons.
//!
//! Sizes and distances are visual units, chosen for readability rather than
//! physical accuracy. Colors tint the textured materials and stand in for them
//! when no manifest has been loaded.

/// Ring around a body, drawn as a flat annulus in the body's equatorial plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub inner: f32,
    pub outer: f32,
    /// Material (and entity tag) name of the ring.
    pub material: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteSpec {
    pub name: &'static str,
    pub color: u32,
}

/// One catalog entry. `orbit_radius` is `None` for the central body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub name: &'static str,
    pub radius: f32,
    pub orbit_radius: Option<f32>,
    pub color: u32,
    pub ring: Option<RingSpec>,
    pub satellite: Option<SatelliteSpec>,
}

impl BodySpec {
    const fn planet(name: &'static str, radius: f32, orbit_radius: f32, color: u32) -> Self {
        Self {
            name,
            radius,
            orbit_radius: Some(orbit_radius),
            color,
            ring: None,
            satellite: None,
        }
    }

    const fn with_ring(self, inner: f32, outer: f32, material: &'static str) -> Self {
        Self {
            ring: Some(RingSpec { inner, outer, material }),
            ..self
        }
    }

    const fn with_satellite(self, name: &'static str, color: u32) -> Self {
        Self {
            satellite: Some(SatelliteSpec { name, color }),
            ..self
        }
    }
}

pub const SUN: BodySpec = BodySpec {
    name: "sun",
    radius: 16.0,
    orbit_radius: None,
    color: 0xffdd66,
    ring: None,
    satellite: None,
};

/// The fixed catalog, in registration order. Orbit indices follow this order.
pub const CATALOG: [BodySpec; 9] = [
    SUN,
    BodySpec::planet("mercury", 3.2, 28.0, 0x9c8b7a),
    BodySpec::planet("venus", 5.8, 44.0, 0xd8b46a),
    BodySpec::planet("earth", 6.0, 62.0, 0x3a6fb0).with_satellite("moon", 0xb0b0b0),
    BodySpec::planet("mars", 4.0, 78.0, 0xb5532f),
    BodySpec::planet("jupiter", 12.0, 100.0, 0xc9a27a),
    BodySpec::planet("saturn", 10.0, 138.0, 0xd9c08a).with_ring(10.0, 20.0, "saturn_ring"),
    BodySpec::planet("uranus", 7.0, 176.0, 0x7fc6d0).with_ring(7.0, 12.0, "uranus_ring"),
    BodySpec::planet("neptune", 7.0, 200.0, 0x4062c4),
];
