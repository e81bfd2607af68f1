use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::rope::RopeRenderer;

/// GPU-compatible polyline vertex: 16 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct RopeVertex {
    pub position: [f32; 3], // 12 bytes
    pub width: f32,         //  4 bytes
}

/// Fixed-capacity vertex buffer filled once per tick by a rope.
///
/// Holds as many vertices as the rope has node capacity; only the first
/// `len()` are meaningful after a draw.
pub struct PolylineBuffer {
    vertices: Box<[RopeVertex]>,
    len: usize,
}

impl PolylineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: vec![RopeVertex::zeroed(); capacity].into_boxed_slice(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn vertices(&self) -> &[RopeVertex] {
        &self.vertices[..self.len]
    }

    /// Raw bytes of the meaningful prefix, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.vertices())
    }
}

impl RopeRenderer for PolylineBuffer {
    fn draw(&mut self, positions: &[Vec3], width: f32) {
        let n = positions.len().min(self.vertices.len());
        for (v, p) in self.vertices[..n].iter_mut().zip(positions) {
            *v = RopeVertex {
                position: p.to_array(),
                width,
            };
        }
        self.len = n;
    }
}
