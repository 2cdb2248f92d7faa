//! Raw byte storage for plain values.
//!
//! The buffer holds a value's native byte image, sized to exactly the type's
//! byte size (never below one byte once sized). Reads never copy partially: a
//! destination larger than the buffer is reset to its default instead.

use std::fmt;

use genvars_foundation::{Error, Reflect, Result, TypeDesc};
use tracing::debug;

use crate::generic::Generic;

/// Byte buffer with a stride of one.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct PlainBuffer {
    bytes: Vec<u8>,
}

impl PlainBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Returns the byte length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Resizes to `size` bytes (at least one) and zero-fills.
    pub fn set_size(&mut self, size: usize) {
        self.bytes.clear();
        self.bytes.resize(size.max(1), 0);
    }

    /// Stores `bytes` verbatim.
    pub fn store_bytes(&mut self, bytes: &[u8]) {
        self.set_size(bytes.len());
        self.bytes[..bytes.len()].copy_from_slice(bytes);
    }

    /// Stores the byte image of `src`, sized to `type_size`. Returns false,
    /// leaving the buffer untouched, if `src` has no byte image.
    pub fn store(&mut self, src: &dyn Reflect, type_size: usize) -> bool {
        let mut image = Vec::with_capacity(type_size);
        if !src.write_plain(&mut image) {
            return false;
        }
        self.set_size(type_size);
        let n = image.len().min(self.bytes.len());
        self.bytes[..n].copy_from_slice(&image[..n]);
        true
    }

    /// Loads into `dest` if at least `requested` bytes are stored; otherwise
    /// resets `dest` to its default.
    ///
    /// # Errors
    ///
    /// Returns `UndersizedSource` when the buffer is too small and
    /// `TypeNotSupported` when `dest` has no byte image.
    pub fn load(&self, dest: &mut dyn Reflect, requested: usize) -> Result<()> {
        if self.bytes.len() < requested {
            dest.clear_value();
            return Err(Error::undersized(requested, self.bytes.len()));
        }
        if dest.read_plain(&self.bytes).is_none() {
            dest.clear_value();
            return Err(Error::type_not_supported(dest.type_desc()));
        }
        Ok(())
    }

    /// Returns the stored bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Empties the buffer.
    pub fn reset(&mut self) {
        self.bytes.clear();
    }
}

impl fmt::Debug for PlainBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlainBuffer[")?;
        for (i, b) in self.bytes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{b:02x}")?;
        }
        write!(f, "]")
    }
}

fn has_plain_image(value: &dyn Reflect) -> bool {
    value.write_plain(&mut Vec::new())
}

impl Generic {
    /// Stores `src` as raw bytes, falling back to text if it has no image.
    pub(crate) fn set_plain(&mut self, src: &dyn Reflect, ty: &TypeDesc) {
        if !self.plain.store(src, ty.size()) {
            debug!(target: "genvars::generic", ty = %ty, "no byte image, storing as text");
            self.set_text(src, ty);
            return;
        }
        self.record_edit_type(ty);
    }

    /// Stores an already encoded byte image.
    pub(crate) fn set_plain_bytes(&mut self, bytes: &[u8], ty: &TypeDesc) {
        self.clear();
        self.plain.store_bytes(bytes);
        self.record_edit_type(ty);
    }

    /// Loads `dest` from the byte buffer.
    pub(crate) fn get_plain(&self, dest: &mut dyn Reflect, ty: &TypeDesc) -> Result<()> {
        if self.plain.is_empty() && !self.text.is_empty() && !has_plain_image(dest) {
            return self.get_text(dest, ty);
        }
        self.plain.load(dest, ty.size()).inspect_err(|e| {
            debug!(target: "genvars::generic", ty = %ty, error = %e, "plain read reset destination");
        })
    }
}
