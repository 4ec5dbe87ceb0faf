use log::trace;

use super::cell::{Cell, CellIndex, Marker};
use super::constants::{BOARD_SIZE, WINNING_TRIPLETS};
use super::outcome::Outcome;

/// The 3x3 grid. Internal storage is row-major, indices 0-8.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Place `marker` at `index`.
    ///
    /// Returns `false` and leaves the board untouched if the cell is
    /// already occupied. This is the only way a cell gets written.
    pub fn update_cell(&mut self, index: CellIndex, marker: Marker) -> bool {
        let cell = &mut self.cells[index.get()];
        if !cell.is_empty() {
            trace!("cell {} already holds {:?}", index.get(), cell);
            return false;
        }
        *cell = Cell::Marked(marker);
        true
    }

    /// Clear every cell.
    pub fn reset_board(&mut self) {
        self.cells = [Cell::Empty; BOARD_SIZE];
    }

    /// Evaluate the position.
    ///
    /// Lines are checked in [`WINNING_TRIPLETS`] order and the first
    /// complete one wins. A full board with no line is a draw.
    pub fn check_winner(&self) -> Outcome {
        for [a, b, c] in WINNING_TRIPLETS {
            if let Some(marker) = self.cells[a].marker() {
                if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] {
                    return Outcome::Win(marker);
                }
            }
        }

        if self.empty_cells() == 0 {
            return Outcome::Draw;
        }

        Outcome::Ongoing
    }

    /// A copy of all nine cells. Changing it never affects the board.
    pub fn options(&self) -> [Cell; BOARD_SIZE] {
        self.cells
    }

    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index.get()]
    }

    /// Number of cells still open.
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    fn board_from(xs: &[usize], os: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in xs {
            assert!(board.update_cell(idx(i), Marker::X));
        }
        for &i in os {
            assert!(board.update_cell(idx(i), Marker::O));
        }
        board
    }

    #[test]
    fn new_board_is_empty_and_ongoing() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), BOARD_SIZE);
        assert_eq!(board.check_winner(), Outcome::Ongoing);
    }

    #[test]
    fn occupied_cell_is_rejected() {
        let mut board = Board::new();
        assert!(board.update_cell(idx(4), Marker::X));
        let before = board.options();

        assert!(!board.update_cell(idx(4), Marker::O));
        assert!(!board.update_cell(idx(4), Marker::X));
        assert_eq!(board.options(), before);
        assert_eq!(board.get(idx(4)), Cell::Marked(Marker::X));
    }

    #[test]
    fn reset_clears_everything() {
        let mut board = board_from(&[0, 1, 2], &[3, 4]);
        board.reset_board();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn options_is_a_copy() {
        let board = board_from(&[0], &[]);
        let mut snapshot = board.options();
        snapshot[0] = Cell::Empty;
        snapshot[5] = Cell::Marked(Marker::O);
        assert_eq!(board.get(idx(0)), Cell::Marked(Marker::X));
        assert_eq!(board.get(idx(5)), Cell::Empty);
    }

    #[test]
    fn every_triplet_wins() {
        for triplet in WINNING_TRIPLETS {
            let board = board_from(&[], &triplet);
            assert_eq!(board.check_winner(), Outcome::Win(Marker::O), "{:?}", triplet);
        }
    }

    #[test]
    fn diagonal_win_for_x() {
        let board = board_from(&[0, 4, 8], &[1, 2]);
        assert_eq!(board.check_winner(), Outcome::Win(Marker::X));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let board = board_from(&[0, 2, 3, 7, 8], &[1, 4, 5, 6]);
        assert_eq!(board.check_winner(), Outcome::Draw);
    }

    #[test]
    fn win_on_last_cell_beats_draw() {
        // X O X
        // O X O
        // O X X
        let board = board_from(&[0, 2, 4, 7, 8], &[1, 3, 5, 6]);
        assert_eq!(board.empty_cells(), 0);
        assert_eq!(board.check_winner(), Outcome::Win(Marker::X));
    }

    #[test]
    fn first_triplet_in_order_wins() {
        // Not reachable in legal play, but the order still decides.
        let board = board_from(&[6, 7, 8], &[0, 1, 2]);
        assert_eq!(board.check_winner(), Outcome::Win(Marker::O));
    }

    #[test]
    fn mixed_line_does_not_win() {
        let board = board_from(&[0, 1], &[2]);
        assert_eq!(board.check_winner(), Outcome::Ongoing);
    }
}
