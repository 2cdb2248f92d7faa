//! Serde representation of [`Generic`].
//!
//! Only the authoritative state travels: the text, the byte buffer and, with
//! the `editor` feature, the referenced paths. The cache is rebuilt lazily
//! on the other side and the configuration is local.

use genvars_foundation::SoftObjectPath;
use serde::{Deserialize, Serialize};

use crate::generic::Generic;

/// Wire form of a [`Generic`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericRepr {
    /// Canonical text (empty for plain values).
    #[serde(default)]
    pub text: String,
    /// Native byte image (empty for text values).
    #[serde(default)]
    pub plain: Vec<u8>,
    /// Referenced object paths.
    #[serde(default)]
    pub references: Vec<SoftObjectPath>,
}

impl From<Generic> for GenericRepr {
    fn from(generic: Generic) -> Self {
        Self {
            plain: generic.plain_data().to_vec(),
            #[cfg(feature = "editor")]
            references: generic.references,
            #[cfg(not(feature = "editor"))]
            references: Vec::new(),
            text: generic.text,
        }
    }
}

impl From<GenericRepr> for Generic {
    fn from(repr: GenericRepr) -> Self {
        let mut generic = Generic::new();
        if !repr.plain.is_empty() {
            generic.plain.store_bytes(&repr.plain);
        } else {
            generic.text = repr.text;
        }
        #[cfg(feature = "editor")]
        {
            generic.references = repr.references;
        }
        generic
    }
}
