//! Text-path storage.
//!
//! Non-plain values are stored as their full canonical text export. Storing
//! also rescans object references and refreshes the deserialization cache;
//! loading tries the cache first and otherwise imports the stored text.

use genvars_foundation::{Error, Reflect, Result, TypeDesc, from_text, to_text};
use tracing::debug;

use crate::generic::Generic;

impl Generic {
    /// Stores the canonical text of `src`.
    pub(crate) fn set_text(&mut self, src: &dyn Reflect, ty: &TypeDesc) {
        let text = to_text(src);
        if text != self.text {
            self.text = text;
            self.record_edit_type(ty);
        }

        #[cfg(feature = "editor")]
        crate::scan::collect_references(src, self.config.classifier(), &mut self.references);

        #[cfg(feature = "cache")]
        if self.config.cache_enabled() {
            self.cache.refresh(&self.text, src, ty);
        }
    }

    /// Loads `dest` from the cache or the stored text.
    pub(crate) fn get_text(&self, dest: &mut dyn Reflect, ty: &TypeDesc) -> Result<()> {
        #[cfg(feature = "cache")]
        if self.config.cache_enabled() && self.cache.conditional_get(dest, ty) {
            return Ok(());
        }

        dest.clear_value();
        if self.text.is_empty() {
            return Ok(());
        }
        match from_text(dest, &self.text) {
            Ok(()) => Ok(()),
            Err(e) => {
                dest.clear_value();
                debug!(target: "genvars::text", ty = %ty, error = %e, "text import failed, destination reset");
                Err(Error::unparsable(ty.to_string(), self.text.clone())
                    .with_context(e.context.unwrap_or_default()))
            }
        }
    }
}
