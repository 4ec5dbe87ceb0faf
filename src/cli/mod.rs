//! Command-line configuration

pub mod args;
