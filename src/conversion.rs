//! Conversions from layout types to wgpu vertex state.

use crate::layout::{InputElementDescriptor, VertexAttributeFormat, VertexLayout};

/// Convert VertexAttributeFormat to wgpu vertex format.
pub fn convert_vertex_format(format: VertexAttributeFormat) -> wgpu::VertexFormat {
    match format {
        VertexAttributeFormat::Float2 => wgpu::VertexFormat::Float32x2,
        VertexAttributeFormat::Float3 => wgpu::VertexFormat::Float32x3,
        VertexAttributeFormat::Float4 => wgpu::VertexFormat::Float32x4,
    }
}

/// Convert the per-instance flag of a descriptor to a wgpu step mode.
pub fn convert_step_mode(descriptor: &InputElementDescriptor) -> wgpu::VertexStepMode {
    if descriptor.per_instance {
        wgpu::VertexStepMode::Instance
    } else {
        wgpu::VertexStepMode::Vertex
    }
}

impl VertexLayout {
    /// Build wgpu vertex attributes; shader locations follow attribute order.
    pub fn wgpu_attributes(&self) -> Vec<wgpu::VertexAttribute> {
        self.input_layout_description()
            .iter()
            .enumerate()
            .map(|(location, desc)| wgpu::VertexAttribute {
                format: convert_vertex_format(desc.format),
                offset: desc.byte_offset as wgpu::BufferAddress,
                shader_location: location as u32,
            })
            .collect()
    }

    /// Build a wgpu vertex buffer layout over attributes returned by
    /// [`wgpu_attributes`](Self::wgpu_attributes).
    pub fn wgpu_buffer_layout<'a>(
        &self,
        attributes: &'a [wgpu::VertexAttribute],
    ) -> wgpu::VertexBufferLayout<'a> {
        let step_mode = self
            .attributes()
            .next()
            .map(|attr| convert_step_mode(&attr.description()))
            .unwrap_or(wgpu::VertexStepMode::Vertex);
        wgpu::VertexBufferLayout {
            array_stride: self.size() as wgpu::BufferAddress,
            step_mode,
            attributes,
        }
    }
}
