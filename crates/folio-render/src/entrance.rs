//! Entrance animations for revealed content.
//!
//! An `Entrance` describes where an element starts (offset, transparent) and
//! how it moves into place once its section's reveal flag is set. Sections
//! stagger their children by giving each a later delay.

use std::time::Duration;

/// Default transition duration.
pub const DEFAULT_ENTRANCE_DURATION: Duration = Duration::from_millis(600);

/// Starting offset of an element before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Offset {
    /// Fade only.
    #[default]
    None,
    /// Horizontal offset in pixels.
    X(i32),
    /// Vertical offset in pixels.
    Y(i32),
}

impl Offset {
    fn translate(&self) -> (i32, i32) {
        match *self {
            Self::None => (0, 0),
            Self::X(px) => (px, 0),
            Self::Y(px) => (0, px),
        }
    }
}

/// An entrance-animation descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    /// Starting offset.
    pub offset: Offset,
    /// Transition duration.
    pub duration: Duration,
    /// Delay after the reveal flag is set.
    pub delay: Duration,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            offset: Offset::None,
            duration: DEFAULT_ENTRANCE_DURATION,
            delay: Duration::ZERO,
        }
    }
}

impl Entrance {
    /// Fade in place.
    pub fn fade() -> Self {
        Self::default()
    }

    /// Rise into place from `px` below.
    pub fn rise(px: i32) -> Self {
        Self {
            offset: Offset::Y(px),
            ..Self::default()
        }
    }

    /// Slide into place from a horizontal offset (negative = from the left).
    pub fn slide(px: i32) -> Self {
        Self {
            offset: Offset::X(px),
            ..Self::default()
        }
    }

    /// Set the transition duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay this entrance by `index * step` on top of its own delay.
    pub fn staggered(self, index: usize, step: Duration) -> Self {
        let extra = step.saturating_mul(index as u32);
        self.with_delay(self.delay.saturating_add(extra))
    }

    /// Resolved inline style for the given reveal state.
    pub fn style(&self, revealed: bool) -> String {
        let transition = format!(
            "transition: opacity {d}ms ease {w}ms, transform {d}ms ease {w}ms",
            d = self.duration.as_millis(),
            w = self.delay.as_millis()
        );
        if revealed {
            format!("opacity: 1; transform: none; {}", transition)
        } else {
            let (x, y) = self.offset.translate();
            format!(
                "opacity: 0; transform: translate({}px, {}px); {}",
                x, y, transition
            )
        }
    }

    /// Attributes that hand the descriptor to the stylesheet as custom properties.
    ///
    /// The stylesheet keeps elements in their starting state until the
    /// enclosing section carries the revealed class.
    pub fn attrs(&self) -> String {
        let (x, y) = self.offset.translate();
        format!(
            r#"data-entrance style="--enter-x: {}px; --enter-y: {}px; --enter-duration: {}ms; --enter-delay: {}ms""#,
            x,
            y,
            self.duration.as_millis(),
            self.delay.as_millis()
        )
    }
}

/// Build `count` copies of `base`, each delayed `step` more than the last.
pub fn stagger(base: Entrance, step: Duration, count: usize) -> Vec<Entrance> {
    (0..count).map(|i| base.staggered(i, step)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_style_uses_offset() {
        let style = Entrance::rise(20).style(false);
        assert!(style.starts_with("opacity: 0; transform: translate(0px, 20px);"));
        assert!(style.contains("opacity 600ms ease 0ms"));
    }

    #[test]
    fn test_revealed_style() {
        let style = Entrance::slide(-30)
            .with_delay(Duration::from_millis(200))
            .style(true);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("transform 600ms ease 200ms"));
    }

    #[test]
    fn test_stagger_delays() {
        let base = Entrance::rise(20).with_delay(Duration::from_millis(500));
        let delays: Vec<u128> = stagger(base, Duration::from_millis(100), 4)
            .iter()
            .map(|e| e.delay.as_millis())
            .collect();
        assert_eq!(delays, vec![500, 600, 700, 800]);
    }

    #[test]
    fn test_attrs() {
        let attrs = Entrance::slide(30)
            .with_duration(Duration::from_millis(800))
            .with_delay(Duration::from_millis(300))
            .attrs();
        assert_eq!(
            attrs,
            r#"data-entrance style="--enter-x: 30px; --enter-y: 0px; --enter-duration: 800ms; --enter-delay: 300ms""#
        );
    }

    #[test]
    fn test_fade_has_no_offset() {
        assert_eq!(Entrance::fade().offset, Offset::None);
        assert!(Entrance::fade().style(false).contains("translate(0px, 0px)"));
    }
}
