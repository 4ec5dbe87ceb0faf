//! Game services
//!
//! The console session that connects a player at a terminal to the
//! game engine.

pub mod game;
