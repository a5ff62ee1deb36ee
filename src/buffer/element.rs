//! Typed views into a single buffer element.

use crate::error::VertexResult;
use crate::layout::{AttributeKind, AttributeType, VertexLayout};

/// Read-only view of one element of a [`VertexBuffer`](super::VertexBuffer).
///
/// The view borrows the buffer, so the buffer cannot grow while it is alive.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    index: usize,
    bytes: &'a [u8],
    layout: &'a VertexLayout,
}

impl<'a> Element<'a> {
    pub(crate) fn new(index: usize, bytes: &'a [u8], layout: &'a VertexLayout) -> Self {
        debug_assert_eq!(bytes.len(), layout.size());
        Self {
            index,
            bytes,
            layout,
        }
    }

    /// Get the element index inside its buffer.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the layout the element is interpreted with.
    pub fn layout(&self) -> &'a VertexLayout {
        self.layout
    }

    /// Get the raw bytes of the whole element.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Get the raw bytes of one attribute.
    pub fn attribute_bytes(&self, kind: AttributeKind) -> VertexResult<&'a [u8]> {
        let attr = self.layout.attribute_of(kind)?;
        Ok(&self.bytes[attr.range()])
    }

    /// Read an attribute value.
    pub fn get<T: AttributeType>(&self) -> VertexResult<T::Value> {
        self.attribute_bytes(T::KIND)
            .map(bytemuck::pod_read_unaligned::<T::Value>)
    }
}

/// Mutable view of one element of a [`VertexBuffer`](super::VertexBuffer).
#[derive(Debug)]
pub struct ElementMut<'a> {
    index: usize,
    bytes: &'a mut [u8],
    layout: &'a VertexLayout,
}

impl<'a> ElementMut<'a> {
    pub(crate) fn new(index: usize, bytes: &'a mut [u8], layout: &'a VertexLayout) -> Self {
        debug_assert_eq!(bytes.len(), layout.size());
        Self {
            index,
            bytes,
            layout,
        }
    }

    /// Get the element index inside its buffer.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get a read-only view of the same element.
    pub fn as_element(&self) -> Element<'_> {
        Element::new(self.index, &*self.bytes, self.layout)
    }

    /// Read an attribute value.
    pub fn get<T: AttributeType>(&self) -> VertexResult<T::Value> {
        self.as_element().get::<T>()
    }

    /// Write an attribute value.
    ///
    /// Any value convertible into the attribute's storage type is accepted,
    /// e.g. `[f32; 3]` or `glam::Vec3` for [`Position3D`](crate::Position3D).
    pub fn set<T: AttributeType>(&mut self, value: impl Into<T::Value>) -> VertexResult<()> {
        let range = self.layout.attribute_of(T::KIND)?.range();
        let value: T::Value = value.into();
        self.bytes[range].copy_from_slice(bytemuck::bytes_of(&value));
        Ok(())
    }

    /// Read, modify and write back an attribute value.
    pub fn update<T: AttributeType>(&mut self, f: impl FnOnce(&mut T::Value)) -> VertexResult<()> {
        let mut value = self.get::<T>()?;
        f(&mut value);
        self.set::<T>(value)
    }
}

/// Detached reference to a buffer element.
///
/// Unlike [`Element`], a handle does not borrow the buffer. It records the
/// buffer generation at creation time; resolving it after the buffer has
/// grown fails with [`VertexError::StaleElement`](crate::VertexError::StaleElement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

impl ElementHandle {
    /// Get the element index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the buffer generation this handle was issued at.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3, Vec4};

    use super::*;
    use crate::error::VertexError;
    use crate::layout::{Color4D, Normal3D, Position3D, Uv2D};

    fn layout() -> VertexLayout {
        VertexLayout::new([AttributeKind::Position3D, AttributeKind::Color4D]).unwrap()
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let layout = layout();
        let mut bytes = vec![0u8; layout.size()];
        let mut element = ElementMut::new(0, &mut bytes, &layout);

        element.set::<Position3D>([1.5, -2.25, 3.0]).unwrap();
        element.set::<Color4D>(Vec4::new(0.1, 0.2, 0.3, 1.0)).unwrap();

        assert_eq!(element.get::<Position3D>().unwrap(), Vec3::new(1.5, -2.25, 3.0));
        assert_eq!(
            element.get::<Color4D>().unwrap(),
            Vec4::new(0.1, 0.2, 0.3, 1.0)
        );
    }

    #[test]
    fn test_bytes_are_packed_at_offsets() {
        let layout = layout();
        let mut bytes = vec![0u8; layout.size()];
        ElementMut::new(0, &mut bytes, &layout)
            .set::<Color4D>([1.0, 2.0, 3.0, 4.0])
            .unwrap();

        assert!(bytes[..12].iter().all(|&b| b == 0));
        let color: [f32; 4] = bytemuck::pod_read_unaligned(&bytes[12..28]);
        assert_eq!(color, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_missing_attribute() {
        let layout = layout();
        let mut bytes = vec![0u8; layout.size()];
        let mut element = ElementMut::new(0, &mut bytes, &layout);

        assert!(matches!(
            element.get::<Normal3D>(),
            Err(VertexError::MissingAttribute {
                kind: AttributeKind::Normal3D,
                ..
            })
        ));
        assert!(element.set::<Uv2D>(Vec2::ONE).is_err());
        assert!(bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_update() {
        let layout = layout();
        let mut bytes = vec![0u8; layout.size()];
        let mut element = ElementMut::new(4, &mut bytes, &layout);

        element.set::<Position3D>(Vec3::X).unwrap();
        element
            .update::<Position3D>(|p| *p += Vec3::new(0.0, 2.0, 0.0))
            .unwrap();
        assert_eq!(element.get::<Position3D>().unwrap(), Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(element.index(), 4);
    }

    #[test]
    fn test_attribute_bytes() {
        let layout = layout();
        let bytes: Vec<u8> = (0..layout.size() as u8).collect();
        let element = Element::new(0, &bytes, &layout);

        assert_eq!(
            element.attribute_bytes(AttributeKind::Color4D).unwrap(),
            &bytes[12..28]
        );
        assert_eq!(element.as_bytes().len(), 28);
    }
}
