use std::fs::File;
use std::process::ExitCode;

use simplelog::{ConfigBuilder, WriteLogger};
use tictactoe::cli::args;
use tictactoe::io::TerminalIO;
use tictactoe::services::game::{DefaultNames, Game};
use tictactoe::GameController;

fn main() -> ExitCode {
    let args = args::parse();

    // The terminal belongs to the game, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level(), log_config, log_file);
    }
    log::info!("tictactoe starting");

    let defaults = DefaultNames {
        x: args.player_x,
        o: args.player_o,
    };
    let mut game = Game::new(GameController::default(), TerminalIO, TerminalIO, defaults);

    match game.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("session failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
