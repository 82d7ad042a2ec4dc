//! Shared-buffer layout.
//! Must stay in sync with TypeScript `protocol.ts`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Instances: max_instances × 12 floats]
//! [Line vertices: max_line_vertices × 7 floats]
//! [Line loops: max_line_loops × 1 float]
//! [Events: max_events × 4 floats]
//! [Lights: max_lights × 8 floats]
//! [Camera: 36 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_LINE_VERTICES: usize = 4;
pub const HEADER_LINE_VERTEX_COUNT: usize = 5;
pub const HEADER_MAX_LINE_LOOPS: usize = 6;
pub const HEADER_LINE_LOOP_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_MAX_LIGHTS: usize = 10;
pub const HEADER_LIGHT_COUNT: usize = 11;
pub const HEADER_PROTOCOL_VERSION: usize = 12;
pub const HEADER_AMBIENT_R: usize = 13;
pub const HEADER_AMBIENT_G: usize = 14;
pub const HEADER_AMBIENT_B: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (wire format).
pub const INSTANCE_FLOATS: usize = 12;

/// Floats per line vertex: x, y, z, r, g, b, a.
pub const LINE_VERTEX_FLOATS: usize = 7;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Floats per point light: x, y, z, r, g, b, intensity, range.
pub const LIGHT_FLOATS: usize = 8;

/// Floats in the camera block: view (16), projection (16), eye (4).
pub const CAMERA_FLOATS: usize = 36;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_line_vertices: usize,
    pub max_line_loops: usize,
    pub max_events: usize,
    pub max_lights: usize,

    /// Offset (in floats) where each section begins.
    pub instance_data_offset: usize,
    pub line_vertex_offset: usize,
    pub line_loop_offset: usize,
    pub event_data_offset: usize,
    pub light_data_offset: usize,
    pub camera_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_instances: usize,
        max_line_vertices: usize,
        max_line_loops: usize,
        max_events: usize,
        max_lights: usize,
    ) -> Self {
        let instance_data_offset = HEADER_FLOATS;
        let line_vertex_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let line_loop_offset = line_vertex_offset + max_line_vertices * LINE_VERTEX_FLOATS;
        let event_data_offset = line_loop_offset + max_line_loops;
        let light_data_offset = event_data_offset + max_events * EVENT_FLOATS;
        let camera_offset = light_data_offset + max_lights * LIGHT_FLOATS;

        let buffer_total_floats = camera_offset + CAMERA_FLOATS;

        Self {
            max_instances,
            max_line_vertices,
            max_line_loops,
            max_events,
            max_lights,
            instance_data_offset,
            line_vertex_offset,
            line_loop_offset,
            event_data_offset,
            light_data_offset,
            camera_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_line_vertices,
            config.max_line_loops,
            config.max_events,
            config.max_lights,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::GameEvent;
    use crate::renderer::camera::CameraUniform;
    use crate::renderer::instance::RenderInstance;
    use crate::systems::lines::LineVertex;

    #[test]
    fn wire_sizes_match_structs() {
        assert_eq!(INSTANCE_FLOATS, RenderInstance::FLOATS);
        assert_eq!(LINE_VERTEX_FLOATS, LineVertex::FLOATS);
        assert_eq!(EVENT_FLOATS, GameEvent::FLOATS);
        assert_eq!(CAMERA_FLOATS, CameraUniform::FLOATS);
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(64, 2048, 16, 32, 4);

        let expected_total = HEADER_FLOATS
            + 64 * 12
            + 2048 * 7
            + 16
            + 32 * 4
            + 4 * 8
            + 36;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(100, 200, 10, 20, 5);

        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(layout.line_vertex_offset, layout.instance_data_offset + 100 * INSTANCE_FLOATS);
        assert_eq!(layout.line_loop_offset, layout.line_vertex_offset + 200 * LINE_VERTEX_FLOATS);
        assert_eq!(layout.event_data_offset, layout.line_loop_offset + 10);
        assert_eq!(layout.light_data_offset, layout.event_data_offset + 20 * EVENT_FLOATS);
        assert_eq!(layout.camera_offset, layout.light_data_offset + 5 * LIGHT_FLOATS);
        assert_eq!(layout.buffer_total_floats, layout.camera_offset + CAMERA_FLOATS);
    }

    #[test]
    fn from_default_config() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        assert_eq!(layout.max_instances, config.max_instances);
        assert_eq!(layout.max_line_vertices, config.max_line_vertices);
        assert_eq!(layout.max_line_loops, config.max_line_loops);
        assert_eq!(layout.max_events, config.max_events);
        assert_eq!(layout.max_lights, config.max_lights);
    }
}
