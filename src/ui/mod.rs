//! User interface and presentation
//!
//! Presenters turn board snapshots and move results into text for the
//! player, keeping wording out of the game engine.

pub mod presenters;
