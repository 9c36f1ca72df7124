//! One-shot reveal latch.

/// Latches on the first `true` sample and ignores everything after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection sample.
    ///
    /// Returns true only for the sample that fires the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        assert!(!RevealLatch::new().is_revealed());
    }

    #[test]
    fn test_fires_once() {
        let mut latch = RevealLatch::new();
        let fired: Vec<bool> = [false, false, true, false, true, true]
            .into_iter()
            .map(|sample| latch.observe(sample))
            .collect();

        assert_eq!(fired, vec![false, false, true, false, false, false]);
        assert!(latch.is_revealed());
    }
}
