/// RGB color for untextured meshes (or a tint over the material texture).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Mesh primitive. The host renderer owns tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Flat annulus lying in the entity's local XZ plane.
    Ring { inner: f32, outer: f32 },
}

impl Shape {
    /// Numeric shape tag written into the render buffer.
    pub fn kind(&self) -> f32 {
        match self {
            Shape::Sphere { .. } => 0.0,
            Shape::Ring { .. } => 1.0,
        }
    }
}

/// Renderable mesh attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: Shape,
    pub color: Color,
    /// Ignore scene lighting (sun, rings, meteors).
    pub unlit: bool,
    pub double_sided: bool,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: Shape::Sphere { radius: 1.0 },
            color: Color::default(),
            unlit: false,
            double_sided: false,
        }
    }
}

impl MeshComponent {
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            color,
            ..Default::default()
        }
    }

    pub fn sphere(radius: f32, color: Color) -> Self {
        Self::new(Shape::Sphere { radius }, color)
    }

    pub fn ring(inner: f32, outer: f32, color: Color) -> Self {
        Self::new(Shape::Ring { inner, outer }, color)
    }

    pub fn with_unlit(mut self, unlit: bool) -> Self {
        self.unlit = unlit;
        self
    }

    pub fn with_double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    /// Render flags: bit 0 = unlit, bit 1 = double-sided.
    pub fn flags(&self) -> u32 {
        (self.unlit as u32) | ((self.double_sided as u32) << 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_unpacks_channels() {
        let orange = Color::from_hex(0xffa500);
        assert_eq!(orange.r, 1.0);
        assert!((orange.g - 165.0 / 255.0).abs() < 1e-6);
        assert_eq!(orange.b, 0.0);
    }

    #[test]
    fn flags_pack_unlit_and_double_sided() {
        let ring = MeshComponent::ring(10.0, 20.0, Color::WHITE)
            .with_unlit(true)
            .with_double_sided(true);
        assert_eq!(ring.flags(), 0b11);
        assert_eq!(MeshComponent::default().flags(), 0);
    }
}
