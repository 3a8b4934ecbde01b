/// Axis-aligned rectangle in canvas units.
///
/// Solid tiles are immutable once built from the layout table; the agent's
/// own rectangle is the only one that moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the four corner points, top-left first.
    #[must_use]
    pub fn corners(&self) -> [(f64, f64); 4] {
        [
            (self.x, self.y),
            (self.x + self.width, self.y),
            (self.x, self.y + self.height),
            (self.x + self.width, self.y + self.height),
        ]
    }

    /// Point containment with closed bounds: points on the edge count.
    #[must_use]
    pub fn contains(&self, (px, py): (f64, f64)) -> bool {
        self.x <= px && px <= self.x + self.width && self.y <= py && py <= self.y + self.height
    }

    /// Returns a copy shifted by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Corner-containment collision test.
///
/// True iff any corner of `candidate` lies inside any solid rectangle. This
/// is not full AABB intersection: a solid edge passing through the
/// candidate's body without capturing a corner is not detected. The agent's
/// jump constants are tuned against exactly this behavior, so it must stay a
/// corner test.
#[must_use]
pub fn overlaps_any(candidate: &Rect, solids: &[Rect]) -> bool {
    let corners = candidate.corners();
    solids
        .iter()
        .any(|solid| corners.iter().any(|&p| solid.contains(p)))
}
