use crate::components::entity::Entity;
use crate::components::mesh::Shape;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Hidden entities and entities without a mesh are skipped.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities.filter(|e| e.visible) {
        let Some(mesh) = &entity.mesh else {
            continue;
        };

        let (size, outer) = match mesh.shape {
            Shape::Sphere { radius } => (radius, 0.0),
            Shape::Ring { inner, outer } => (inner, outer),
        };

        buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            rotation: entity.rotation,
            size: size * entity.scale,
            outer: outer * entity.scale,
            shape: mesh.shape.kind(),
            material: entity
                .material
                .map(|m| m.0 as f32)
                .unwrap_or(RenderInstance::NO_MATERIAL),
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            flags: mesh.flags() as f32,
        });
    }
}
