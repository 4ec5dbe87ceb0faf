use super::cell::Marker;

/// Result of evaluating a board position.
///
/// Always computed from the cells themselves, never tracked incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    Ongoing,
    Win(Marker),
    /// Every cell is filled and nobody has a line.
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}
