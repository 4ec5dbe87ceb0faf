//! Tic-Tac-Toe Game Engine
//!
//! Rules and turn sequencing for two-player tic-tac-toe on a 3x3 board,
//! with a terminal front end.
//!
//! # Modules
//!
//! - [`game_engine`] - Turn sequencing and the game lifecycle
//! - [`models`] - Board, cells, players and outcomes
//! - [`services`] - The console session loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of the board and status messages
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use tictactoe::{Board, CellIndex, GameController, MoveResult};
//!
//! let mut game = GameController::new(Board::new());
//! game.start_game("Ann", "Bo");
//! let result = game.handle_move(CellIndex::new(4).unwrap());
//! assert!(matches!(result, MoveResult::Continued { .. }));
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameController, MoveRejection, MoveResult, Phase};
pub use models::board::Board;
pub use models::cell::{Cell, CellIndex, Marker};
pub use models::outcome::Outcome;
pub use models::player::Player;
