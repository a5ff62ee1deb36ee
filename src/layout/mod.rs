//! Vertex layout definitions.
//!
//! A [`VertexLayout`] is an ordered list of attributes packed back to back.
//! It is built once from a list of [`AttributeKind`]s and never changes:
//!
//! ```
//! use redlilium_vertex::{AttributeKind, VertexLayout};
//!
//! let layout = VertexLayout::new([AttributeKind::Position3D, AttributeKind::Color4D]).unwrap();
//! assert_eq!(layout.size(), 28);
//! assert_eq!(layout.code(), "P3C4");
//! ```
//!
//! The layout code is a compact fingerprint of the attribute order and can
//! be used as a cache key for pipelines built against this vertex format.

mod attribute;
mod kind;

pub use attribute::{InputElementDescriptor, VertexAttribute};
pub use kind::{
    AttributeKind, AttributeType, Color3D, Color4D, Normal3D, Position2D, Position3D, Uv2D,
    VertexAttributeFormat,
};

use crate::error::{VertexError, VertexResult};

/// Ordered, tightly packed list of element attributes.
///
/// Each attribute kind appears at most once. The stride is the sum of all
/// attribute sizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VertexLayout {
    attributes: Vec<VertexAttribute>,
    label: Option<String>,
}

impl VertexLayout {
    /// Largest possible stride: every kind once.
    pub const MAX_STRIDE: usize = 64;

    /// Create a layout from attribute kinds, in order.
    ///
    /// Fails with [`VertexError::DuplicateAttribute`] if a kind is repeated.
    pub fn new(kinds: impl IntoIterator<Item = AttributeKind>) -> VertexResult<Self> {
        let kinds: Vec<AttributeKind> = kinds.into_iter().collect();
        for (i, kind) in kinds.iter().enumerate() {
            if kinds[..i].contains(kind) {
                return Err(VertexError::DuplicateAttribute(*kind));
            }
        }
        Ok(Self::packed(&kinds))
    }

    /// Parse a layout from its fingerprint code, e.g. `"P3N3U2"`.
    pub fn from_code(code: &str) -> VertexResult<Self> {
        if code.len() % 2 != 0 || !code.is_ascii() {
            return Err(VertexError::UnknownCode(code.to_string()));
        }
        let kinds = (0..code.len())
            .step_by(2)
            .map(|i| {
                let part = &code[i..i + 2];
                AttributeKind::from_code(part).ok_or_else(|| VertexError::UnknownCode(part.into()))
            })
            .collect::<VertexResult<Vec<_>>>()?;
        Self::new(kinds)
    }

    fn packed(kinds: &[AttributeKind]) -> Self {
        let mut attributes = Vec::with_capacity(kinds.len());
        let mut offset = 0;
        for &kind in kinds {
            attributes.push(VertexAttribute::new(kind, offset));
            offset += kind.size();
        }
        let layout = Self {
            attributes,
            label: None,
        };
        log::trace!("Built vertex layout {} ({} bytes)", layout.code(), offset);
        layout
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get an attribute by position.
    pub fn attribute_by_index(&self, index: usize) -> VertexResult<&VertexAttribute> {
        self.attributes
            .get(index)
            .ok_or(VertexError::AttributeIndexOutOfRange {
                index,
                count: self.attributes.len(),
            })
    }

    /// Get the attribute for a marker type.
    pub fn attribute<T: AttributeType>(&self) -> VertexResult<&VertexAttribute> {
        self.attribute_of(T::KIND)
    }

    /// Get the attribute of the given kind.
    pub fn attribute_of(&self, kind: AttributeKind) -> VertexResult<&VertexAttribute> {
        self.attributes
            .iter()
            .find(|attr| attr.kind() == kind)
            .ok_or_else(|| VertexError::MissingAttribute {
                kind,
                layout: self.code(),
            })
    }

    /// Check if this layout has an attribute of the given kind.
    pub fn contains(&self, kind: AttributeKind) -> bool {
        self.attributes.iter().any(|attr| attr.kind() == kind)
    }

    /// Get the element stride in bytes.
    pub fn size(&self) -> usize {
        self.attributes
            .last()
            .map(VertexAttribute::offset_after)
            .unwrap_or(0)
    }

    /// Get the number of attributes.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Iterate over the attributes in declaration order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = &VertexAttribute> {
        self.attributes.iter()
    }

    /// Check if the layout has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Build the backend input-layout description, one entry per attribute.
    pub fn input_layout_description(&self) -> Vec<InputElementDescriptor> {
        let mut descriptors: Vec<InputElementDescriptor> =
            Vec::with_capacity(self.attributes.len());
        for attr in &self.attributes {
            let mut desc = attr.description();
            desc.semantic_index = descriptors
                .iter()
                .filter(|d| d.semantic_name == desc.semantic_name)
                .count() as u32;
            descriptors.push(desc);
        }
        descriptors
    }

    /// Get the layout fingerprint: every attribute code, in order.
    pub fn code(&self) -> String {
        self.attributes.iter().map(VertexAttribute::code).collect()
    }
}

// ============================================================================
// Common Layouts
// ============================================================================

impl VertexLayout {
    /// Position-only layout (12 bytes per element).
    pub fn position_only() -> Self {
        Self::packed(&[AttributeKind::Position3D]).with_label("position_only")
    }

    /// Position + normal layout (24 bytes per element).
    pub fn position_normal() -> Self {
        Self::packed(&[AttributeKind::Position3D, AttributeKind::Normal3D])
            .with_label("position_normal")
    }

    /// Position + normal + texcoord layout (32 bytes per element).
    pub fn position_normal_uv() -> Self {
        Self::packed(&[
            AttributeKind::Position3D,
            AttributeKind::Normal3D,
            AttributeKind::UV2D,
        ])
        .with_label("position_normal_uv")
    }

    /// Position + RGBA color layout (28 bytes per element).
    pub fn position_color() -> Self {
        Self::packed(&[AttributeKind::Position3D, AttributeKind::Color4D])
            .with_label("position_color")
    }
}

static_assertions::assert_impl_all!(VertexLayout: Send, Sync);
static_assertions::const_assert!(VertexLayout::MAX_STRIDE <= u32::MAX as usize);
