//! Vertex buffer error types.

use thiserror::Error;

use crate::layout::AttributeKind;

/// Errors returned by layout and buffer operations.
///
/// Everything except [`VertexError::Platform`] is a contract violation: the
/// caller asked for something the layout or buffer cannot provide.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VertexError {
    #[error("element index {index} out of range (element count is {count})")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("buffer is empty")]
    EmptyBuffer,
    #[error("attribute index {index} out of range (layout has {count} attributes)")]
    AttributeIndexOutOfRange { index: usize, count: usize },
    #[error("layout '{layout}' has no {kind:?} attribute")]
    MissingAttribute { kind: AttributeKind, layout: String },
    #[error("attribute {0:?} appears more than once in layout")]
    DuplicateAttribute(AttributeKind),
    #[error("unknown attribute code '{0}'")]
    UnknownCode(String),
    #[error("cannot grow a buffer whose layout has zero stride")]
    ZeroStride,
    #[error("cannot allocate {count} elements of {stride} bytes")]
    CapacityOverflow { count: usize, stride: usize },
    #[error("stale element handle (handle generation {handle}, buffer generation {buffer})")]
    StaleElement { handle: u64, buffer: u64 },
    /// A native graphics call made on behalf of this crate failed.
    #[error("platform call failed with code {code:#x}: {log}")]
    Platform { code: i64, log: String },
}

impl VertexError {
    /// Wrap a native error code and its diagnostic log output.
    pub fn platform(code: i64, log: impl Into<String>) -> Self {
        Self::Platform {
            code,
            log: log.into(),
        }
    }

    /// Check if this error is a caller contract violation.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::Platform { .. })
    }
}

pub type VertexResult<T> = Result<T, VertexError>;
