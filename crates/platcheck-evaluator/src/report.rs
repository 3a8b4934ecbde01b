use std::fmt;

/// Aggregate playability of an evaluated batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayabilityReport {
    playable: usize,
    total: usize,
}

impl PlayabilityReport {
    #[must_use]
    pub fn from_outcomes(outcomes: &[bool]) -> Self {
        Self {
            playable: outcomes.iter().filter(|&&playable| playable).count(),
            total: outcomes.len(),
        }
    }

    #[must_use]
    pub fn playable(&self) -> usize {
        self.playable
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of episodes that reached the far edge; 0 for an empty batch.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn proportion(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.playable as f64 / self.total as f64
    }
}

impl fmt::Display for PlayabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.proportion())
    }
}
