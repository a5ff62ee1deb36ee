//! Shared layout interning keyed by layout code.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::VertexResult;
use crate::layout::{AttributeKind, VertexLayout};

/// Cache for sharing [`VertexLayout`] instances.
///
/// Layouts with the same attribute order share one `Arc<VertexLayout>`, so
/// consumers such as a pipeline cache can compare layouts by pointer or by
/// their code.
#[derive(Debug, Default)]
pub struct LayoutCache {
    layouts: RwLock<HashMap<String, Arc<VertexLayout>>>,
}

impl LayoutCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the layout for the given attribute kinds.
    pub fn get_or_create(
        &self,
        kinds: impl IntoIterator<Item = AttributeKind>,
    ) -> VertexResult<Arc<VertexLayout>> {
        let layout = VertexLayout::new(kinds)?;
        Ok(self.intern(layout))
    }

    /// Get or create the layout for a layout code such as `"P3N3U2"`.
    pub fn get_or_create_from_code(&self, code: &str) -> VertexResult<Arc<VertexLayout>> {
        if let Some(layout) = self.get(code) {
            return Ok(layout);
        }
        let layout = VertexLayout::from_code(code)?;
        Ok(self.intern(layout))
    }

    /// Insert a layout, returning the already cached one if its code matches.
    pub fn intern(&self, layout: VertexLayout) -> Arc<VertexLayout> {
        let code = layout.code();

        // Fast path: read lock
        if let Some(cached) = self.layouts.read().get(&code) {
            return Arc::clone(cached);
        }

        // Slow path: write lock
        let mut layouts = self.layouts.write();
        layouts
            .entry(code)
            .or_insert_with_key(|code| {
                log::debug!("Caching vertex layout {code}");
                Arc::new(layout)
            })
            .clone()
    }

    /// Look up a cached layout by code.
    pub fn get(&self, code: &str) -> Option<Arc<VertexLayout>> {
        self.layouts.read().get(code).cloned()
    }

    /// Get the number of cached layouts.
    pub fn len(&self) -> usize {
        self.layouts.read().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.layouts.read().is_empty()
    }

    /// Remove all cached layouts.
    pub fn clear(&self) {
        self.layouts.write().clear();
    }
}

static_assertions::assert_impl_all!(LayoutCache: Send, Sync);
