//! The type-erased value container.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "editor")]
use genvars_foundation::SoftObjectPath;
use genvars_foundation::{Reflect, Result, TypeDesc};

#[cfg(feature = "cache")]
use crate::cache::DataCache;
use crate::config::GenericConfig;
use crate::plain::PlainBuffer;

/// A value of any reflected type, stored as raw bytes or canonical text.
///
/// At most one of the byte buffer and the text is populated. A default
/// container is empty; storing always replaces what was there.
///
/// # Example
///
/// ```
/// use genvars_core::Generic;
///
/// let mut g = Generic::new();
/// g.set(&42i32);
/// assert_eq!(g.as_::<i32>(), 42);
///
/// g.set("hello");
/// assert_eq!(g.as_::<String>(), "hello");
/// ```
#[derive(Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "crate::serde_repr::GenericRepr", into = "crate::serde_repr::GenericRepr")
)]
pub struct Generic {
    pub(crate) text: String,
    pub(crate) plain: PlainBuffer,
    #[cfg(feature = "editor")]
    pub(crate) references: Vec<SoftObjectPath>,
    #[cfg(feature = "editor")]
    pub(crate) edit_type: Option<TypeDesc>,
    #[cfg(feature = "cache")]
    pub(crate) cache: DataCache,
    pub(crate) config: GenericConfig,
}

impl Generic {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container with the given configuration.
    #[must_use]
    pub fn with_config(config: GenericConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GenericConfig {
        &self.config
    }

    /// Replaces the configuration. Drops the cache if it is now disabled.
    pub fn set_config(&mut self, config: GenericConfig) {
        self.config = config;
        if !self.config.cache_enabled() {
            self.invalidate_cache();
        }
    }

    /// Stores `src`, routing it to the byte buffer or to text by its type.
    pub fn set_value(&mut self, src: &dyn Reflect) {
        self.clear();
        let ty = src.type_desc();
        if self.config.classifier().is_plain(&ty) {
            self.set_plain(src, &ty);
        } else {
            self.set_text(src, &ty);
        }
    }

    /// Clears, then stores `src` if present.
    pub fn set_property(&mut self, src: Option<&dyn Reflect>) {
        self.clear();
        if let Some(src) = src {
            self.set_value(src);
        }
    }

    /// Loads the stored value into `dest`. On any failure `dest` is left at
    /// its default.
    pub fn get_value(&self, dest: &mut dyn Reflect) {
        let _ = self.try_get(dest);
    }

    /// Loads into `dest` if present.
    pub fn get_property(&self, dest: Option<&mut dyn Reflect>) {
        if let Some(dest) = dest {
            self.get_value(dest);
        }
    }

    /// Loads the stored value into `dest`, reporting why a load failed.
    ///
    /// # Errors
    ///
    /// Returns `UndersizedSource` when the byte buffer is smaller than `dest`'s
    /// type and `UnparsableText` when the text does not import. `dest` is
    /// reset to its default in both cases.
    pub fn try_get(&self, dest: &mut dyn Reflect) -> Result<()> {
        let ty = dest.type_desc();
        if self.config.classifier().is_plain(&ty) {
            self.get_plain(dest, &ty)
        } else {
            self.get_text(dest, &ty)
        }
    }

    /// Resets to empty. Idempotent.
    pub fn clear(&mut self) {
        self.text.clear();
        self.plain.reset();
        #[cfg(feature = "editor")]
        {
            self.references.clear();
            self.edit_type = None;
        }
        self.invalidate_cache();
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.plain.is_empty()
    }

    /// Moves the contents out, leaving this container empty with its
    /// configuration intact.
    #[must_use]
    pub fn take(&mut self) -> Generic {
        let config = self.config.clone();
        std::mem::replace(self, Generic::with_config(config))
    }

    /// Drops the deserialization cache.
    pub fn invalidate_cache(&mut self) {
        #[cfg(feature = "cache")]
        self.cache.reset();
    }

    /// Returns true if a materialized value is cached.
    #[must_use]
    pub fn is_cached(&self) -> bool {
        #[cfg(feature = "cache")]
        {
            self.cache.is_populated()
        }
        #[cfg(not(feature = "cache"))]
        {
            false
        }
    }

    /// Returns the raw byte buffer (empty for text values).
    #[must_use]
    pub fn plain_data(&self) -> &[u8] {
        self.plain.as_bytes()
    }

    /// Returns the byte buffer length.
    #[must_use]
    pub fn plain_size(&self) -> usize {
        self.plain.size()
    }

    /// Returns the stored text (empty for plain values).
    #[must_use]
    pub fn string_data(&self) -> &str {
        &self.text
    }

    /// Returns `crc32(text) ^ crc32(bytes)`.
    #[must_use]
    pub fn type_hash(&self) -> u32 {
        crc32fast::hash(self.text.as_bytes()) ^ crc32fast::hash(self.plain.as_bytes())
    }

    /// Returns the type last stored, for editor display.
    #[cfg(feature = "editor")]
    #[must_use]
    pub fn edit_type(&self) -> Option<&TypeDesc> {
        self.edit_type.as_ref()
    }

    /// Overrides the editor display type.
    #[cfg(feature = "editor")]
    pub fn set_edit_type(&mut self, ty: Option<TypeDesc>) {
        self.edit_type = ty;
    }

    /// Returns the object paths referenced by the stored value.
    #[cfg(feature = "editor")]
    #[must_use]
    pub fn references(&self) -> &[SoftObjectPath] {
        &self.references
    }

    /// Forgets the referenced object paths.
    #[cfg(feature = "editor")]
    pub fn clear_references(&mut self) {
        self.references.clear();
    }

    pub(crate) fn record_edit_type(&mut self, ty: &TypeDesc) {
        #[cfg(feature = "editor")]
        {
            self.edit_type = Some(ty.clone());
        }
        #[cfg(not(feature = "editor"))]
        let _ = ty;
    }
}

impl Clone for Generic {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            plain: self.plain.clone(),
            #[cfg(feature = "editor")]
            references: self.references.clone(),
            #[cfg(feature = "editor")]
            edit_type: self.edit_type.clone(),
            #[cfg(feature = "cache")]
            cache: DataCache::new(),
            config: self.config.clone(),
        }
    }
}

impl PartialEq for Generic {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.plain == other.plain
    }
}

impl Eq for Generic {}

impl Hash for Generic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        crc32fast::hash(self.plain.as_bytes()).hash(state);
    }
}

impl fmt::Debug for Generic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Generic");
        if !self.text.is_empty() {
            s.field("text", &self.text);
        }
        if !self.plain.is_empty() {
            s.field("plain", &self.plain);
        }
        #[cfg(feature = "editor")]
        if let Some(ty) = &self.edit_type {
            s.field("type", &format_args!("{ty}"));
        }
        s.finish_non_exhaustive()
    }
}
