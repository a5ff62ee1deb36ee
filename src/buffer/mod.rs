//! Growable element buffers.
//!
//! A [`VertexBuffer`] owns its [`VertexLayout`] and a contiguous byte store
//! whose length is always a multiple of the layout stride. Elements are
//! accessed through short-lived views:
//!
//! ```
//! use redlilium_vertex::{Position3D, VertexBuffer, VertexLayout};
//!
//! let mut buffer = VertexBuffer::with_element_count(VertexLayout::position_only(), 3)?;
//! buffer.get_mut(1)?.set::<Position3D>([0.0, 1.0, 0.0])?;
//! assert_eq!(buffer.get(1)?.get::<Position3D>()?, glam::Vec3::Y);
//! # Ok::<(), redlilium_vertex::VertexError>(())
//! ```
//!
//! # View Invalidation
//!
//! [`Element`] and [`ElementMut`] borrow the buffer, so growing the buffer
//! while a view exists does not compile. When an element reference has to be
//! kept across calls, use an [`ElementHandle`]: every growth bumps the buffer
//! generation and resolving an older handle fails with
//! [`VertexError::StaleElement`].

mod element;

pub use element::{Element, ElementHandle, ElementMut};

use std::ops::Range;

use crate::error::{VertexError, VertexResult};
use crate::layout::VertexLayout;

/// CPU-side element buffer described by a [`VertexLayout`].
///
/// Element `i`, attribute `j` occupies bytes
/// `[stride * i + offset_j, stride * i + offset_j + size_j)` of [`data`].
/// The buffer only grows; new elements are zero-filled.
///
/// [`data`]: VertexBuffer::data
#[derive(Clone)]
pub struct VertexBuffer {
    layout: VertexLayout,
    data: Vec<u8>,
    generation: u64,
    label: Option<String>,
}

impl VertexBuffer {
    /// Create an empty buffer for the given layout.
    pub fn new(layout: VertexLayout) -> Self {
        Self {
            layout,
            data: Vec::new(),
            generation: 0,
            label: None,
        }
    }

    /// Create a buffer holding `count` zeroed elements.
    pub fn with_element_count(layout: VertexLayout, count: usize) -> VertexResult<Self> {
        let mut buffer = Self::new(layout);
        buffer.resize(count)?;
        Ok(buffer)
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

    /// Grow the buffer to hold at least `count` elements.
    ///
    /// Existing elements keep their contents and indices. Asking for fewer
    /// elements than the buffer holds is a no-op. Fails with
    /// [`VertexError::CapacityOverflow`] if the storage cannot be allocated,
    /// leaving the buffer untouched.
    pub fn resize(&mut self, count: usize) -> VertexResult<()> {
        let current = self.element_count();
        if count <= current {
            return Ok(());
        }

        let stride = self.layout.size();
        if stride == 0 {
            return Err(VertexError::ZeroStride);
        }

        let overflow = VertexError::CapacityOverflow { count, stride };
        let len = count.checked_mul(stride).ok_or_else(|| overflow.clone())?;
        self.data
            .try_reserve_exact(len - self.data.len())
            .map_err(|_| overflow)?;
        self.data.resize(len, 0);
        self.generation += 1;
        log::debug!(
            "Grew vertex buffer {:?} ({}) from {} to {} elements",
            self.label,
            self.layout.code(),
            current,
            count
        );
        Ok(())
    }

    /// Append one zeroed element and return a view of it.
    pub fn push(&mut self) -> VertexResult<ElementMut<'_>> {
        let index = self.element_count();
        self.resize(index + 1)?;
        self.get_mut(index)
    }

    /// Get the raw element bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the number of elements.
    pub fn element_count(&self) -> usize {
        self.data.len().checked_div(self.layout.size()).unwrap_or(0)
    }

    /// Check if the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the buffer size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Get the element layout.
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    /// Get the growth generation, bumped every time the storage grows.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Get the first element.
    pub fn front(&self) -> VertexResult<Element<'_>> {
        if self.is_empty() {
            return Err(VertexError::EmptyBuffer);
        }
        self.get(0)
    }

    /// Get the last element.
    pub fn back(&self) -> VertexResult<Element<'_>> {
        let count = self.element_count();
        if count == 0 {
            return Err(VertexError::EmptyBuffer);
        }
        self.get(count - 1)
    }

    /// Get the element at `index`.
    pub fn get(&self, index: usize) -> VertexResult<Element<'_>> {
        let range = self.element_range(index)?;
        Ok(Element::new(index, &self.data[range], &self.layout))
    }

    /// Get the first element for writing.
    pub fn front_mut(&mut self) -> VertexResult<ElementMut<'_>> {
        if self.is_empty() {
            return Err(VertexError::EmptyBuffer);
        }
        self.get_mut(0)
    }

    /// Get the last element for writing.
    pub fn back_mut(&mut self) -> VertexResult<ElementMut<'_>> {
        let count = self.element_count();
        if count == 0 {
            return Err(VertexError::EmptyBuffer);
        }
        self.get_mut(count - 1)
    }

    /// Get the element at `index` for writing.
    pub fn get_mut(&mut self, index: usize) -> VertexResult<ElementMut<'_>> {
        let range = self.element_range(index)?;
        Ok(ElementMut::new(index, &mut self.data[range], &self.layout))
    }

    /// Iterate over all elements.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Element<'_>> {
        let layout = &self.layout;
        self.data
            .chunks_exact(layout.size().max(1))
            .enumerate()
            .map(move |(index, bytes)| Element::new(index, bytes, layout))
    }

    /// Iterate over all elements for writing.
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = ElementMut<'_>> {
        let layout = &self.layout;
        self.data
            .chunks_exact_mut(layout.size().max(1))
            .enumerate()
            .map(move |(index, bytes)| ElementMut::new(index, bytes, layout))
    }

    /// Create a detached handle to the element at `index`.
    pub fn handle(&self, index: usize) -> VertexResult<ElementHandle> {
        self.element_range(index)?;
        Ok(ElementHandle {
            index,
            generation: self.generation,
        })
    }

    /// Resolve a handle created by [`handle`](Self::handle).
    pub fn resolve(&self, handle: ElementHandle) -> VertexResult<Element<'_>> {
        self.check_generation(handle)?;
        self.get(handle.index)
    }

    /// Resolve a handle for writing.
    pub fn resolve_mut(&mut self, handle: ElementHandle) -> VertexResult<ElementMut<'_>> {
        self.check_generation(handle)?;
        self.get_mut(handle.index)
    }

    fn check_generation(&self, handle: ElementHandle) -> VertexResult<()> {
        if handle.generation != self.generation {
            return Err(VertexError::StaleElement {
                handle: handle.generation,
                buffer: self.generation,
            });
        }
        Ok(())
    }

    fn element_range(&self, index: usize) -> VertexResult<Range<usize>> {
        let count = self.element_count();
        if index >= count {
            return Err(VertexError::IndexOutOfRange { index, count });
        }
        let stride = self.layout.size();
        Ok(index * stride..(index + 1) * stride)
    }
}

impl std::fmt::Debug for VertexBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VertexBuffer")
            .field("label", &self.label)
            .field("layout", &self.layout.code())
            .field("element_count", &self.element_count())
            .field("size", &self.data.len())
            .field("generation", &self.generation)
            .finish()
    }
}

static_assertions::assert_impl_all!(VertexBuffer: Send, Sync);
