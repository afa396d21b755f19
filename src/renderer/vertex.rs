//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.1, 0.1, 0.18, 1.0];
    pub const PLAYER_FILL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER_STROKE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const DIRT: [f32; 4] = [0.545, 0.271, 0.075, 1.0]; // SaddleBrown
    pub const GRASS: [f32; 4] = [0.133, 0.545, 0.133, 1.0]; // ForestGreen
    pub const LAVA_TOP: [f32; 4] = [1.0, 0.271, 0.0, 1.0];
    pub const LAVA_DEEP: [f32; 4] = [1.0, 0.549, 0.0, 1.0];
    pub const BUBBLE: [f32; 4] = [1.0, 0.647, 0.0, 0.8];
}
