//! Deserialization cache for text-path values.
//!
//! Holds a materialized copy of the most recently stored text value so that
//! repeated reads of the same type skip the text import. The cache is never
//! authoritative: the stored text is.

use genvars_foundation::{Reflect, TypeDesc, from_text};
use tracing::{debug, trace};

struct CacheEntry {
    ty: TypeDesc,
    value: Box<dyn Reflect>,
}

/// Materialized copy of the stored text value.
#[derive(Default)]
pub struct DataCache {
    entry: Option<CacheEntry>,
}

impl DataCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Returns true if a value is cached.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.entry.is_some()
    }

    /// Returns the cached type.
    #[must_use]
    pub fn cached_type(&self) -> Option<&TypeDesc> {
        self.entry.as_ref().map(|e| &e.ty)
    }

    /// Drops the cached value.
    pub fn reset(&mut self) {
        self.entry = None;
    }

    /// Re-imports `text` into a fresh value shaped like `prototype`. Caches
    /// nothing if the import fails.
    pub fn refresh(&mut self, text: &str, prototype: &dyn Reflect, ty: &TypeDesc) {
        self.entry = None;
        let mut scratch = prototype.clone_reflect();
        scratch.clear_value();
        match from_text(&mut *scratch, text) {
            Ok(()) => {
                self.entry = Some(CacheEntry {
                    ty: ty.clone(),
                    value: scratch,
                });
            }
            Err(e) => {
                debug!(target: "genvars::text", ty = %ty, error = %e, "cache refresh failed");
            }
        }
    }

    /// Copies the cached value into `dest` if the types match and the cached
    /// value is large enough. Returns true on a hit.
    pub fn conditional_get(&self, dest: &mut dyn Reflect, ty: &TypeDesc) -> bool {
        let Some(entry) = &self.entry else {
            return false;
        };
        if !entry.ty.same_type(ty) || entry.ty.size() < ty.size() {
            return false;
        }
        let hit = dest.copy_from(&*entry.value);
        if hit {
            trace!(target: "genvars::text", ty = %ty, "cache hit");
        }
        hit
    }
}

impl std::fmt::Debug for DataCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.entry {
            Some(entry) => write!(f, "DataCache({})", entry.ty),
            None => write!(f, "DataCache(empty)"),
        }
    }
}
