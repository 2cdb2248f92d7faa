//! Runtime configuration for generic containers.

use std::sync::Arc;

use crate::classify::Classifier;

/// Configuration carried by each [`Generic`](crate::Generic).
///
/// Controls the deserialization cache and which classifier routes values to
/// the plain or text path.
#[derive(Clone, Debug)]
pub struct GenericConfig {
    /// Whether text-path values keep a materialized copy for fast reads.
    /// Has no effect when the `cache` feature is off.
    pub cache: bool,

    /// Classifier override; `None` uses [`Classifier::standard`].
    pub classifier: Option<Arc<Classifier>>,
}

impl Default for GenericConfig {
    fn default() -> Self {
        Self {
            cache: true,
            classifier: None,
        }
    }
}

impl GenericConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with the deserialization cache disabled.
    #[must_use]
    pub fn uncached() -> Self {
        Self {
            cache: false,
            ..Self::default()
        }
    }

    /// Builder method to enable or disable the cache.
    #[must_use]
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    /// Builder method to set a custom classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = Some(Arc::new(classifier));
        self
    }

    /// Builder method to share an existing classifier.
    #[must_use]
    pub fn with_shared_classifier(mut self, classifier: Arc<Classifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Returns the classifier in effect.
    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        self.classifier
            .as_deref()
            .unwrap_or_else(|| Classifier::standard())
    }

    /// Returns true if the cache is enabled and compiled in.
    #[must_use]
    pub fn cache_enabled(&self) -> bool {
        cfg!(feature = "cache") && self.cache
    }
}
