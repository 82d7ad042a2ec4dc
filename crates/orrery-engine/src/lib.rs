pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use assets::manifest::{AssetManifest, MaterialDescriptor};
pub use assets::registry::{MaterialId, MaterialRegistry};
pub use bridge::protocol::ProtocolLayout;
pub use components::entity::Entity;
pub use components::mesh::{Color, MeshComponent, Shape};
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use core::time::{SimulationClock, Speed};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::lighting::{LightState, PointLight};
pub use systems::lines::{LineBuffer, LineColor, LineVertex};
pub use systems::render::build_render_buffer;
