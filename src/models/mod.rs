//! Domain models
//!
//! This module contains the board, its cells, the two players and the
//! outcome of a position. Models are plain data with the rules that
//! belong to them and nothing else.

pub mod board;
pub mod cell;
pub mod constants;
pub mod errors;
pub mod outcome;
pub mod player;
