/// Number of cells on the fixed 3x3 board.
pub const BOARD_SIZE: usize = 9;

/// Width of one board row.
pub const ROW_LEN: usize = 3;

/// Prefix of the name derived for a player who left their name blank.
pub const DEFAULT_NAME_PREFIX: &str = "Player";

/// Every winning line as an index triplet, checked in this order:
/// rows, then columns, then the two diagonals.
pub const WINNING_TRIPLETS: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // middle column
    [2, 5, 8], // right column
    [0, 4, 8], // diagonal
    [2, 4, 6], // anti-diagonal
];
