use bytemuck::{Pod, Zeroable};

/// Per-instance render data read by the TypeScript renderer.
/// Must match the TypeScript protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Rotation about the Y axis in radians.
    pub rotation: f32,
    /// Sphere radius or ring inner radius, already multiplied by entity scale.
    pub size: f32,
    /// Ring outer radius (0 for spheres).
    pub outer: f32,
    /// Shape tag (see `Shape::kind`).
    pub shape: f32,
    /// Material index, or -1 for an untextured mesh.
    pub material: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Bit flags (see `MeshComponent::flags`).
    pub flags: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
    pub const NO_MATERIAL: f32 = -1.0;
}

/// Render buffer containing all mesh instances for one frame.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-buffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
