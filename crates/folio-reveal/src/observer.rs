//! Intersection sample sources.

use folio_core::{RevealConfig, DEFAULT_ROOT_MARGIN_PX};
use futures::stream::BoxStream;

/// Options for watching one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserveOptions {
    /// Signed pixels added to each viewport edge before testing
    /// intersection. Negative shrinks the viewport.
    pub root_margin_px: i32,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            root_margin_px: DEFAULT_ROOT_MARGIN_PX,
        }
    }
}

impl ObserveOptions {
    pub fn from_config(config: &RevealConfig) -> Self {
        Self {
            root_margin_px: config.root_margin_px,
        }
    }

    pub fn with_root_margin(mut self, px: i32) -> Self {
        self.root_margin_px = px;
        self
    }
}

/// Produces intersection samples for an element.
///
/// The stream yields `true` while the element intersects the (margin
/// adjusted) viewport and `false` otherwise. Dropping the stream stops
/// observation.
pub trait VisibilityObserver: Send + Sync {
    fn watch(&self, target: &str, options: &ObserveOptions) -> BoxStream<'static, bool>;
}

impl<T: VisibilityObserver + ?Sized> VisibilityObserver for std::sync::Arc<T> {
    fn watch(&self, target: &str, options: &ObserveOptions) -> BoxStream<'static, bool> {
        (**self).watch(target, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margin_shrinks() {
        assert_eq!(ObserveOptions::default().root_margin_px, -100);
    }

    #[test]
    fn test_from_config() {
        let config = RevealConfig { root_margin_px: 40 };
        assert_eq!(ObserveOptions::from_config(&config).root_margin_px, 40);
        assert_eq!(ObserveOptions::default().with_root_margin(0).root_margin_px, 0);
    }
}
