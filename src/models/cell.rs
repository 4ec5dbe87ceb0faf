use std::fmt;

use super::constants::BOARD_SIZE;
use super::errors::GameError;

/// The symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Always moves first.
    X,
    O,
}

impl Marker {
    pub const ALL: [Marker; 2] = [Marker::X, Marker::O];

    pub fn symbol(&self) -> &'static str {
        match self {
            Marker::X => "X",
            Marker::O => "O",
        }
    }

    pub fn opponent(self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Marker),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn marker(&self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(*marker),
        }
    }
}

/// A board index in 0..=8, row-major.
///
/// Construction is the only place a raw integer is checked, so the board
/// and controller never see an index outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(usize);

impl CellIndex {
    pub fn new(index: usize) -> Option<CellIndex> {
        (index < BOARD_SIZE).then_some(CellIndex(index))
    }

    /// Parse a 1-based position as typed by a player ("1".."9").
    pub fn from_position(input: &str) -> Result<CellIndex, GameError> {
        let position: usize = input.trim().parse()?;
        if position == 0 {
            return Err(GameError::InvalidInput(format!(
                "position must be between 1 and {}",
                BOARD_SIZE
            )));
        }
        CellIndex::try_from(position - 1)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// The 1-based position shown to players.
    pub fn position(self) -> usize {
        self.0 + 1
    }

    /// Every index on the board, in order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..BOARD_SIZE).map(CellIndex)
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        CellIndex::new(index).ok_or_else(|| {
            GameError::InvalidInput(format!(
                "cell {} is outside the board (0-{})",
                index,
                BOARD_SIZE - 1
            ))
        })
    }
}
