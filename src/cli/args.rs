use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Two-player tic-tac-toe in the terminal")]
pub struct Args {
    /// Default name for the X player (moves first)
    #[arg(short = 'x', long, default_value = "")]
    pub player_x: String,

    /// Default name for the O player
    #[arg(short = 'o', long, default_value = "")]
    pub player_o: String,

    /// File the game log is written to
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// More log detail; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
