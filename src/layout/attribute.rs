//! A single attribute placed at a byte offset inside an element.

use super::kind::{AttributeKind, VertexAttributeFormat};

/// One entry of a backend input-layout description.
///
/// Consumed by the graphics backend to bind raw element bytes to shader
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputElementDescriptor {
    /// Shader semantic name.
    pub semantic_name: &'static str,
    /// Index among attributes sharing the same semantic name.
    pub semantic_index: u32,
    /// Data format.
    pub format: VertexAttributeFormat,
    /// Byte offset within the element.
    pub byte_offset: u32,
    /// Whether the data advances per instance instead of per vertex.
    pub per_instance: bool,
}

/// An attribute of a [`VertexLayout`](super::VertexLayout).
///
/// The size is never stored; it comes from the attribute kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    kind: AttributeKind,
    offset: usize,
}

impl VertexAttribute {
    /// Create a new attribute at the given byte offset.
    ///
    /// Only layouts place attributes, so offsets stay below the largest
    /// packed stride.
    pub(crate) fn new(kind: AttributeKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Get the attribute kind.
    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    /// Get the size in bytes.
    pub fn size(&self) -> usize {
        self.kind.size()
    }

    /// Get the byte offset from the start of the element.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the byte offset just past this attribute.
    pub fn offset_after(&self) -> usize {
        self.offset + self.size()
    }

    /// Get the byte range occupied inside an element.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset_after()
    }

    /// Get the fingerprint code of this attribute's kind.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Build the backend descriptor for this attribute.
    ///
    /// The semantic index is 0; [`VertexLayout::input_layout_description`]
    /// assigns increasing indices when several attributes share a semantic.
    ///
    /// [`VertexLayout::input_layout_description`]: super::VertexLayout::input_layout_description
    pub fn description(&self) -> InputElementDescriptor {
        InputElementDescriptor {
            semantic_name: self.kind.semantic(),
            semantic_index: 0,
            format: self.kind.format(),
            // Bounded by `VertexLayout::MAX_STRIDE`.
            byte_offset: self.offset as u32,
            per_instance: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_offsets() {
        let attr = VertexAttribute::new(AttributeKind::Normal3D, 12);
        assert_eq!(attr.kind(), AttributeKind::Normal3D);
        assert_eq!(attr.size(), 12);
        assert_eq!(attr.offset(), 12);
        assert_eq!(attr.offset_after(), 24);
        assert_eq!(attr.range(), 12..24);
        assert_eq!(attr.code(), "N3");
    }

    #[test]
    fn test_attribute_description() {
        let desc = VertexAttribute::new(AttributeKind::Color4D, 24).description();
        assert_eq!(desc.semantic_name, "Color");
        assert_eq!(desc.semantic_index, 0);
        assert_eq!(desc.format, VertexAttributeFormat::Float4);
        assert_eq!(desc.byte_offset, 24);
        assert!(!desc.per_instance);
    }
}
