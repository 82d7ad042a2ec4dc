use glam::Vec3;
use crate::api::types::EntityId;
use crate::assets::registry::MaterialId;
use crate::components::mesh::MeshComponent;

/// Fat Entity: a single struct with optional components.
/// Designed for simplicity over ECS purity: a handful of bodies, rings and meteors.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name. Also the material lookup key.
    pub tag: String,
    /// Hidden entities stay in the scene but are skipped by the render pass.
    pub visible: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Rotation about the world Y axis, in radians.
    pub rotation: f32,
    /// Uniform scale multiplier applied on top of the mesh dimensions.
    pub scale: f32,
    /// Mesh component (entities without meshes are not rendered).
    pub mesh: Option<MeshComponent>,
    /// Opaque material handle supplied by the asset layer.
    pub material: Option<MaterialId>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            pos: Vec3::ZERO,
            rotation: 0.0,
            scale: 1.0,
            mesh: None,
            material: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = Some(material);
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}
