//! Attribute kinds and their fixed storage properties.
//!
//! Every [`AttributeKind`] maps to exactly one entry of the registry below:
//! byte size, [`VertexAttributeFormat`], semantic name and short code. The
//! marker types at the bottom of this file connect a kind to the Rust type
//! used for typed element access.

use std::fmt::Debug;

use bytemuck::Pod;
use glam::{Vec2, Vec3, Vec4};
use static_assertions::const_assert_eq;

/// Kind of a per-element attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributeKind {
    /// 2D position (float2).
    Position2D,
    /// 3D position (float3).
    Position3D,
    /// Normal vector (float3).
    Normal3D,
    /// Texture coordinates (float2).
    UV2D,
    /// RGB color (float3).
    Color3D,
    /// RGBA color (float4).
    Color4D,
}

/// Format of an attribute as seen by the graphics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
}

impl VertexAttributeFormat {
    /// Get the size in bytes of this format.
    pub fn size(&self) -> usize {
        self.component_count() * std::mem::size_of::<f32>()
    }

    /// Get the number of float components.
    pub fn component_count(&self) -> usize {
        match self {
            Self::Float2 => 2,
            Self::Float3 => 3,
            Self::Float4 => 4,
        }
    }
}

impl AttributeKind {
    /// All attribute kinds, in declaration order.
    pub const ALL: [AttributeKind; 6] = [
        Self::Position2D,
        Self::Position3D,
        Self::Normal3D,
        Self::UV2D,
        Self::Color3D,
        Self::Color4D,
    ];

    /// Get the backend format of this kind.
    pub fn format(&self) -> VertexAttributeFormat {
        match self {
            Self::Position2D | Self::UV2D => VertexAttributeFormat::Float2,
            Self::Position3D | Self::Normal3D | Self::Color3D => VertexAttributeFormat::Float3,
            Self::Color4D => VertexAttributeFormat::Float4,
        }
    }

    /// Get the size in bytes of one attribute of this kind.
    pub fn size(&self) -> usize {
        self.format().size()
    }

    /// Get the shader semantic name.
    pub fn semantic(&self) -> &'static str {
        match self {
            Self::Position2D | Self::Position3D => "Position",
            Self::Normal3D => "Normal",
            Self::UV2D => "TexCoord",
            Self::Color3D | Self::Color4D => "Color",
        }
    }

    /// Get the two-character code used in layout fingerprints.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Position2D => "P2",
            Self::Position3D => "P3",
            Self::Normal3D => "N3",
            Self::UV2D => "U2",
            Self::Color3D => "C3",
            Self::Color4D => "C4",
        }
    }

    /// Look up a kind by its code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

/// Compile-time link between an attribute kind and its storage type.
///
/// Implemented by the zero-sized markers [`Position2D`], [`Position3D`],
/// [`Normal3D`], [`Uv2D`], [`Color3D`] and [`Color4D`].
pub trait AttributeType: 'static {
    /// The kind this marker stands for.
    const KIND: AttributeKind;
    /// Value stored for one element.
    type Value: Pod + Debug + PartialEq;
}

macro_rules! attribute_types {
    ($($(#[$meta:meta])* $name:ident => $kind:ident, $value:ty;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name;

            impl AttributeType for $name {
                const KIND: AttributeKind = AttributeKind::$kind;
                type Value = $value;
            }
        )*
    };
}

attribute_types! {
    /// Marker for [`AttributeKind::Position2D`].
    Position2D => Position2D, Vec2;
    /// Marker for [`AttributeKind::Position3D`].
    Position3D => Position3D, Vec3;
    /// Marker for [`AttributeKind::Normal3D`].
    Normal3D => Normal3D, Vec3;
    /// Marker for [`AttributeKind::UV2D`].
    Uv2D => UV2D, Vec2;
    /// Marker for [`AttributeKind::Color3D`].
    Color3D => Color3D, Vec3;
    /// Marker for [`AttributeKind::Color4D`].
    Color4D => Color4D, Vec4;
}

// Packed element bytes are read back through these types.
const_assert_eq!(std::mem::size_of::<Vec2>(), 8);
const_assert_eq!(std::mem::size_of::<Vec3>(), 12);
const_assert_eq!(std::mem::size_of::<Vec4>(), 16);

#[cfg(test)]
mod tests {
    use super::*;

    fn value_size<T: AttributeType>() -> (AttributeKind, usize) {
        (T::KIND, std::mem::size_of::<T::Value>())
    }

    #[test]
    fn test_format_size() {
        assert_eq!(VertexAttributeFormat::Float2.size(), 8);
        assert_eq!(VertexAttributeFormat::Float3.size(), 12);
        assert_eq!(VertexAttributeFormat::Float4.size(), 16);
    }

    #[test]
    fn test_kind_sizes() {
        assert_eq!(AttributeKind::Position2D.size(), 8);
        assert_eq!(AttributeKind::Position3D.size(), 12);
        assert_eq!(AttributeKind::Normal3D.size(), 12);
        assert_eq!(AttributeKind::UV2D.size(), 8);
        assert_eq!(AttributeKind::Color3D.size(), 12);
        assert_eq!(AttributeKind::Color4D.size(), 16);
    }

    #[test]
    fn test_registry_is_complete() {
        for kind in AttributeKind::ALL {
            assert!(kind.size() > 0);
            assert!(!kind.semantic().is_empty());
            assert_eq!(kind.code().len(), 2);
            assert_eq!(AttributeKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = AttributeKind::ALL.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), AttributeKind::ALL.len());
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(AttributeKind::from_code("X9"), None);
        assert_eq!(AttributeKind::from_code(""), None);
    }

    #[test]
    fn test_marker_values_match_registry() {
        let markers = [
            value_size::<Position2D>(),
            value_size::<Position3D>(),
            value_size::<Normal3D>(),
            value_size::<Uv2D>(),
            value_size::<Color3D>(),
            value_size::<Color4D>(),
        ];
        for (kind, size) in markers {
            assert_eq!(kind.size(), size, "{kind:?}");
        }
        assert_eq!(markers.len(), AttributeKind::ALL.len());
    }
}
