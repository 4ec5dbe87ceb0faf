use crate::game_engine::{MoveRejection, MoveResult};
use crate::io::OutputWriter;
use crate::models::cell::{Cell, CellIndex};
use crate::models::constants::{BOARD_SIZE, ROW_LEN};
use crate::models::player::Player;

pub struct BoardPresenter;

impl BoardPresenter {
    /// Draw the grid. Open cells show the position number to type.
    pub fn render(cells: &[Cell; BOARD_SIZE], output: &mut dyn OutputWriter) {
        let rows: Vec<String> = cells
            .chunks(ROW_LEN)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| Self::symbol(*cell, row * ROW_LEN + col))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect();

        output.writeln("");
        for (i, row) in rows.iter().enumerate() {
            output.write(" ");
            output.writeln(row);
            if i + 1 < rows.len() {
                output.writeln("---+---+---");
            }
        }
        output.writeln("");
    }

    fn symbol(cell: Cell, index: usize) -> String {
        match cell {
            Cell::Marked(marker) => marker.to_string(),
            Cell::Empty => CellIndex::new(index)
                .map(|i| i.position().to_string())
                .unwrap_or_default(),
        }
    }
}

pub struct StatusPresenter;

impl StatusPresenter {
    pub fn turn(player: &Player) -> String {
        format!("{}'s turn", player.name())
    }

    pub fn restarted() -> &'static str {
        "Let's play!"
    }

    pub fn move_result(result: &MoveResult) -> String {
        match result {
            MoveResult::Rejected(MoveRejection::CellOccupied) => {
                "That cell is already taken.".to_string()
            }
            MoveResult::Rejected(MoveRejection::NotRunning) => {
                "The game is not running.".to_string()
            }
            MoveResult::Continued { next_player, .. } => format!("{}'s turn", next_player),
            MoveResult::Won { winner, .. } => format!("{} wins!", winner),
            MoveResult::Draw => "It's a draw!".to_string(),
        }
    }

    pub fn show_help(output: &mut dyn OutputWriter) {
        output.writeln("   1-9 = PLACE YOUR MARKER");
        output.writeln("   R   = RESTART WITH THE SAME PLAYERS");
        output.writeln("   N   = NEW GAME WITH NEW PLAYERS");
        output.writeln("   Q   = QUIT");
    }
}
