//! Line-loop buffer for orbit paths and other wireframe overlays.
//!
//! Cleared every frame. Each loop is a run of vertices the host draws as a
//! closed line strip; `loops` stores the vertex count of every run in order.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Per-vertex data for line rendering.
/// 7 floats = 28 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 7;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// RGBA color for line drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineColor {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

pub struct LineBuffer {
    vertices: Vec<LineVertex>,
    loops: Vec<u32>,
    max_vertices: usize,
}

impl LineBuffer {
    pub fn new(max_vertices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(max_vertices),
            loops: Vec::new(),
            max_vertices,
        }
    }

    /// Append a closed loop. Returns false (and appends nothing) when the loop
    /// would overflow the vertex capacity.
    pub fn push_loop(&mut self, points: &[Vec3], color: LineColor) -> bool {
        if points.is_empty() {
            return true;
        }
        if self.vertices.len() + points.len() > self.max_vertices {
            log::warn!(
                "line buffer full: dropping loop of {} vertices ({} / {})",
                points.len(),
                self.vertices.len(),
                self.max_vertices
            );
            return false;
        }
        self.vertices.extend(points.iter().map(|p| LineVertex {
            x: p.x,
            y: p.y,
            z: p.z,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }));
        self.loops.push(points.len() as u32);
        true
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.loops.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    pub fn loops(&self) -> &[u32] {
        &self.loops
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }

    pub fn loops_ptr(&self) -> *const u32 {
        self.loops.as_ptr()
    }
}
