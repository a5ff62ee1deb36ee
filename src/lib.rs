//! # RedLilium Vertex
//!
//! Typed, variable-layout vertex buffers for the RedLilium renderer.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`AttributeKind`] - The fixed set of per-vertex attributes and their sizes, formats and codes
//! - [`VertexLayout`] - An ordered, tightly packed list of attributes
//! - [`VertexBuffer`] - A growable byte store sized in multiples of the layout stride
//! - [`Element`] / [`ElementMut`] - Typed views into one buffer element
//! - [`LayoutCache`] - Shared layouts keyed by their code
//!
//! GPU upload is left to the caller: [`VertexBuffer::data`] is the exact
//! byte image to copy into a vertex buffer, and
//! [`VertexLayout::input_layout_description`] describes how to bind it.
//!
//! ## Example
//!
//! ```
//! use redlilium_vertex::{AttributeKind, Color4D, Position3D, VertexBuffer, VertexLayout};
//!
//! let layout = VertexLayout::new([AttributeKind::Position3D, AttributeKind::Color4D])?;
//! let mut buffer = VertexBuffer::with_element_count(layout, 3)?;
//!
//! let mut vertex = buffer.get_mut(1)?;
//! vertex.set::<Position3D>([0.0, 0.5, 0.0])?;
//! vertex.set::<Color4D>([1.0, 0.0, 0.0, 1.0])?;
//!
//! assert_eq!(buffer.size(), 3 * 28);
//! assert_eq!(buffer.layout().code(), "P3C4");
//! # Ok::<(), redlilium_vertex::VertexError>(())
//! ```
//!
//! ## Features
//!
//! - `wgpu-backend` - Conversions from layouts to wgpu vertex state

pub mod buffer;
pub mod cache;
#[cfg(feature = "wgpu-backend")]
pub mod conversion;
pub mod error;
pub mod layout;

pub use buffer::{Element, ElementHandle, ElementMut, VertexBuffer};
pub use cache::LayoutCache;
pub use error::{VertexError, VertexResult};
pub use layout::{
    AttributeKind, AttributeType, Color3D, Color4D, InputElementDescriptor, Normal3D, Position2D,
    Position3D, Uv2D, VertexAttribute, VertexAttributeFormat, VertexLayout,
};

/// Vertex library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version.
pub fn init() {
    log::info!("RedLilium Vertex v{} initialized", VERSION);
}
