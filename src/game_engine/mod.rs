//! Game state machine
//!
//! Sequences turns for two players against a [`Board`]. The
//! GameController owns the board and the session (both players, whose
//! turn it is, and whether the game is running) and reports what each move
//! changed so a front end can render it.

use log::{debug, info, warn};

use crate::models::board::Board;
use crate::models::cell::{CellIndex, Marker};
use crate::models::outcome::Outcome;
use crate::models::player::Player;

/// Which of the two session players is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    First,
    Second,
}

impl Seat {
    fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Lifecycle of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game has been started yet.
    Idle,
    InProgress,
    /// The last game ended in a win or draw.
    Finished,
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    CellOccupied,
    NotRunning,
}

/// What a call to [`GameController::handle_move`] changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// Nothing changed.
    Rejected(MoveRejection),
    /// The marker was placed and play passes to `next_player`.
    Continued {
        next_player: String,
        next_marker: Marker,
    },
    /// The marker completed a line.
    Won { marker: Marker, winner: String },
    /// The marker filled the last cell without completing a line.
    Draw,
}

impl MoveResult {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveResult::Rejected(_))
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, MoveResult::Won { .. } | MoveResult::Draw)
    }
}

/// Turn sequencing for a two-player game
pub struct GameController {
    board: Board,
    players: Option<(Player, Player)>,
    current: Seat,
    running: bool,
}

impl GameController {
    /// Creates an idle controller around `board`
    ///
    /// # Arguments
    ///
    /// * `board` - The board moves will be played on, normally `Board::new()`
    pub fn new(board: Board) -> Self {
        Self {
            board,
            players: None,
            current: Seat::First,
            running: false,
        }
    }

    /// Returns an immutable reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players as `(first, second)`, if a game was started
    pub fn players(&self) -> Option<(&Player, &Player)> {
        self.players.as_ref().map(|(a, b)| (a, b))
    }

    /// Returns the player whose turn it is, if a game was started
    pub fn current_player(&self) -> Option<&Player> {
        self.player(self.current)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> Phase {
        match (self.running, self.players.is_some()) {
            (true, _) => Phase::InProgress,
            (false, true) => Phase::Finished,
            (false, false) => Phase::Idle,
        }
    }

    /// Starts a session with two new players
    ///
    /// The first player gets marker X and moves first. The board is not
    /// touched; use [`new_game`](Self::new_game) to clear it as well.
    ///
    /// # Arguments
    ///
    /// * `name_a` - Name for the X player, blank for a derived name
    /// * `name_b` - Name for the O player, blank for a derived name
    pub fn start_game(&mut self, name_a: &str, name_b: &str) {
        let first = Player::new(name_a, Marker::X);
        let second = Player::new(name_b, Marker::O);
        info!("starting game: {} (X) vs {} (O)", first.name(), second.name());

        self.players = Some((first, second));
        self.current = Seat::First;
        self.running = true;
    }

    /// Clears the board, then starts a session with two new players
    pub fn new_game(&mut self, name_a: &str, name_b: &str) {
        self.board.reset_board();
        self.start_game(name_a, name_b);
    }

    /// Clears the board and replays with the same two players
    ///
    /// # Returns
    ///
    /// * `true` if the game restarted
    /// * `false` if no game was ever started, in which case nothing changes
    pub fn restart_game(&mut self) -> bool {
        if self.players.is_none() {
            warn!("restart requested before any game was started");
            return false;
        }

        self.current = Seat::First;
        self.running = true;
        self.board.reset_board();
        info!("game restarted");
        true
    }

    /// Plays the current player's marker at `index`
    ///
    /// # Returns
    ///
    /// * `MoveResult::Rejected` if the game is not running or the cell is
    ///   taken; no state changes
    /// * `MoveResult::Won` / `MoveResult::Draw` if the move ended the game
    /// * `MoveResult::Continued` otherwise, naming the player to move next
    pub fn handle_move(&mut self, index: CellIndex) -> MoveResult {
        let mover = match self.current_player() {
            Some(player) if self.running => player.clone(),
            _ => {
                debug!("move at {} ignored: game not running", index.get());
                return MoveResult::Rejected(MoveRejection::NotRunning);
            }
        };

        if !self.board.update_cell(index, mover.marker()) {
            debug!("move at {} ignored: cell occupied", index.get());
            return MoveResult::Rejected(MoveRejection::CellOccupied);
        }
        debug!("{} placed {} at {}", mover.name(), mover.marker(), index.get());

        let outcome = self.board.check_winner();
        if outcome.is_terminal() {
            self.running = false;
        }

        match outcome {
            Outcome::Win(marker) => {
                let winner = self
                    .players()
                    .map(|(a, b)| if a.marker() == marker { a } else { b })
                    .map(Player::name)
                    .unwrap_or_else(|| mover.name());
                info!("{} ({}) wins", winner, marker);
                MoveResult::Won { marker, winner }
            }
            Outcome::Draw => {
                info!("game drawn");
                MoveResult::Draw
            }
            Outcome::Ongoing => {
                self.current = self.current.other();
                let next = self
                    .current_player()
                    .cloned()
                    .unwrap_or_else(|| Player::new("", mover.marker().opponent()));
                MoveResult::Continued {
                    next_player: next.name(),
                    next_marker: next.marker(),
                }
            }
        }
    }

    fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.as_ref().map(|(a, b)| match seat {
            Seat::First => a,
            Seat::Second => b,
        })
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(Board::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cell::Cell;

    fn idx(i: usize) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    fn started() -> GameController {
        let mut game = GameController::default();
        game.start_game("Ann", "Bo");
        game
    }

    #[test]
    fn new_controller_is_idle() {
        let mut game = GameController::default();
        assert_eq!(game.phase(), Phase::Idle);
        assert!(game.current_player().is_none());
        assert_eq!(
            game.handle_move(idx(0)),
            MoveResult::Rejected(MoveRejection::NotRunning)
        );
        assert_eq!(game.board().empty_cells(), 9);
    }

    #[test]
    fn start_assigns_markers_and_first_turn() {
        let game = started();
        let (a, b) = game.players().unwrap();
        assert_eq!((a.name(), a.marker()), ("Ann".to_string(), Marker::X));
        assert_eq!((b.name(), b.marker()), ("Bo".to_string(), Marker::O));
        assert_eq!(game.current_player(), Some(a));
        assert_eq!(game.phase(), Phase::InProgress);
    }

    #[test]
    fn start_does_not_clear_board() {
        let mut game = started();
        game.handle_move(idx(3));
        game.start_game("Cy", "Di");
        assert_eq!(game.board().get(idx(3)), Cell::Marked(Marker::X));
    }

    #[test]
    fn turns_alternate() {
        let mut game = started();
        assert_eq!(
            game.handle_move(idx(0)),
            MoveResult::Continued {
                next_player: "Bo".to_string(),
                next_marker: Marker::O
            }
        );
        assert_eq!(game.current_player().unwrap().name(), "Bo");
        game.handle_move(idx(1));
        assert_eq!(game.current_player().unwrap().name(), "Ann");
    }

    #[test]
    fn occupied_cell_keeps_turn() {
        let mut game = started();
        game.handle_move(idx(4));
        let result = game.handle_move(idx(4));
        assert_eq!(result, MoveResult::Rejected(MoveRejection::CellOccupied));
        assert!(!result.is_accepted());
        assert_eq!(game.current_player().unwrap().marker(), Marker::O);
        assert_eq!(game.board().get(idx(4)), Cell::Marked(Marker::X));
    }

    #[test]
    fn win_finishes_game() {
        let mut game = started();
        for i in [0, 3, 1, 4] {
            assert!(!game.handle_move(idx(i)).is_finished());
        }
        let result = game.handle_move(idx(2));
        assert_eq!(
            result,
            MoveResult::Won {
                marker: Marker::X,
                winner: "Ann".to_string()
            }
        );
        assert!(result.is_finished());
        assert_eq!(game.phase(), Phase::Finished);

        let before = game.board().options();
        assert_eq!(
            game.handle_move(idx(8)),
            MoveResult::Rejected(MoveRejection::NotRunning)
        );
        assert_eq!(game.board().options(), before);
    }

    #[test]
    fn second_player_can_win() {
        let mut game = GameController::default();
        game.start_game("", "");
        for i in [0, 3, 1, 4, 8] {
            game.handle_move(idx(i));
        }
        assert_eq!(
            game.handle_move(idx(5)),
            MoveResult::Won {
                marker: Marker::O,
                winner: "Player (O)".to_string()
            }
        );
    }

    #[test]
    fn draw_finishes_game() {
        let mut game = started();
        // X O X / X O O / O X X
        let mut last = None;
        for i in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            last = Some(game.handle_move(idx(i)));
        }
        assert_eq!(last, Some(MoveResult::Draw));
        assert!(!game.is_running());
    }

    #[test]
    fn restart_keeps_players_and_clears_board() {
        let mut game = started();
        for i in [0, 3, 1, 4, 2] {
            game.handle_move(idx(i));
        }
        assert!(game.restart_game());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.current_player().unwrap().name(), "Ann");
        assert_eq!(game.players().unwrap().1.name(), "Bo");
    }

    #[test]
    fn restart_before_start_is_ignored() {
        let mut game = GameController::default();
        assert!(!game.restart_game());
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn new_game_replaces_players_and_board() {
        let mut game = started();
        game.handle_move(idx(0));
        game.new_game("Cy", "");
        assert_eq!(game.board().empty_cells(), 9);
        assert_eq!(game.current_player().unwrap().name(), "Cy");
        assert_eq!(game.players().unwrap().1.name(), "Player (O)");
    }
}
