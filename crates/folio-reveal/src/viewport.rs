//! Geometric visibility from element rectangles and a scrollable viewport.

use std::collections::HashMap;
use std::future::ready;
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::RwLock;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

use crate::observer::{ObserveOptions, VisibilityObserver};

/// Axis-aligned rectangle in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Grow each edge by `margin` pixels (shrink when negative).
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            left: self.left - margin,
            top: self.top - margin,
            width: (self.width + 2.0 * margin).max(0.0),
            height: (self.height + 2.0 * margin).max(0.0),
        }
    }

    /// True when the two rectangles share a region of non-zero area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && other.width > 0.0
            && other.height > 0.0
            && self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Scroll position and size of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub scroll_x: f64,
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    /// Visible region in document coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.scroll_x, self.scroll_y, self.width, self.height)
    }
}

/// A scrollable viewport. Clones share the same frame.
#[derive(Debug, Clone)]
pub struct Viewport {
    frame: Arc<watch::Sender<Frame>>,
}

impl Viewport {
    /// Viewport of the given size scrolled to the top.
    pub fn new(width: f64, height: f64) -> Self {
        let (frame, _) = watch::channel(Frame {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
        });
        Self {
            frame: Arc::new(frame),
        }
    }

    pub fn frame(&self) -> Frame {
        *self.frame.borrow()
    }

    /// Scroll vertically to `y`.
    pub fn scroll_to(&self, y: f64) {
        self.frame.send_modify(|f| f.scroll_y = y.max(0.0));
    }

    pub fn scroll_by(&self, dy: f64) {
        self.frame.send_modify(|f| f.scroll_y = (f.scroll_y + dy).max(0.0));
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.frame.send_modify(|f| {
            f.width = width;
            f.height = height;
        });
    }

    fn subscribe(&self) -> watch::Receiver<Frame> {
        self.frame.subscribe()
    }
}

/// `VisibilityObserver` over a `Viewport` and a layout of element rects.
#[derive(Debug)]
pub struct ViewportObserver {
    viewport: Viewport,
    layout: RwLock<HashMap<String, Rect>>,
}

impl ViewportObserver {
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            viewport: viewport.clone(),
            layout: RwLock::new(HashMap::new()),
        }
    }

    /// Builder form of `place`.
    pub fn with_element(self, id: impl Into<String>, rect: Rect) -> Self {
        self.place(id, rect);
        self
    }

    /// Record where an element sits in the document.
    ///
    /// Streams already returned by `watch` keep the rect they started with.
    pub fn place(&self, id: impl Into<String>, rect: Rect) {
        self.layout.write().insert(id.into(), rect);
    }

    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.layout.read().get(id).copied()
    }

    /// Whether `id` intersects the viewport right now.
    pub fn is_intersecting(&self, id: &str, options: &ObserveOptions) -> bool {
        self.rect(id)
            .map(|rect| intersecting(&self.viewport.frame(), &rect, options))
            .unwrap_or(false)
    }
}

fn intersecting(frame: &Frame, rect: &Rect, options: &ObserveOptions) -> bool {
    frame
        .bounds()
        .expand(f64::from(options.root_margin_px))
        .intersects(rect)
}

impl VisibilityObserver for ViewportObserver {
    fn watch(&self, target: &str, options: &ObserveOptions) -> BoxStream<'static, bool> {
        let Some(rect) = self.rect(target) else {
            debug!(target_id = target, "no layout for element, nothing to observe");
            return stream::empty().boxed();
        };

        let options = *options;
        WatchStream::new(self.viewport.subscribe())
            .map(move |frame| intersecting(&frame, &rect, &options))
            .scan(None, |last: &mut Option<bool>, sample| {
                let changed = *last != Some(sample);
                *last = Some(sample);
                ready(Some(changed.then_some(sample)))
            })
            .filter_map(ready)
            .boxed()
    }
}
