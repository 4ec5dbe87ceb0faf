use log::{debug, info};

use crate::game_engine::GameController;
use crate::io::{InputReader, OutputWriter};
use crate::models::cell::{CellIndex, Marker};
use crate::models::errors::{GameError, GameResult};
use crate::ui::presenters::{BoardPresenter, StatusPresenter};

/// Names offered when a player just presses enter at the name prompt.
#[derive(Debug, Clone, Default)]
pub struct DefaultNames {
    pub x: String,
    pub o: String,
}

/// Console session: reads commands, drives the controller, prints results.
pub struct Game<R: InputReader, W: OutputWriter> {
    controller: GameController,
    input: R,
    output: W,
    defaults: DefaultNames,
}

impl<R: InputReader, W: OutputWriter> Game<R, W> {
    pub fn new(controller: GameController, input: R, output: W, defaults: DefaultNames) -> Self {
        Game {
            controller,
            input,
            output,
            defaults,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Play until the player quits or input runs out.
    pub fn run(&mut self) -> GameResult<()> {
        match self.command_loop() {
            Err(GameError::IoError(err)) if err.kind() == std::io::ErrorKind::UnexpectedEof => {
                info!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn command_loop(&mut self) -> GameResult<()> {
        self.output.writeln("*** TIC-TAC-TOE ***");
        self.new_game()?;

        loop {
            let prompt = self.prompt();
            let input = self.input.read_line(&prompt)?;
            let command = input.trim().to_ascii_lowercase();
            debug!("command: {:?}", command);

            match command.as_str() {
                "q" => {
                    self.output.writeln("GOODBYE.");
                    break;
                }
                "r" => self.restart(),
                "n" => self.new_game()?,
                "" => StatusPresenter::show_help(&mut self.output),
                position => match CellIndex::from_position(position) {
                    Ok(index) => self.play(index),
                    Err(e) => {
                        self.output.writeln(&format!("Error: {}", e));
                        StatusPresenter::show_help(&mut self.output);
                    }
                },
            }
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        match self.controller.current_player() {
            Some(player) if self.controller.is_running() => {
                format!("{} ({}) >", player.name(), player.marker())
            }
            _ => "R, N OR Q >".to_string(),
        }
    }

    fn new_game(&mut self) -> GameResult<()> {
        let name_x = self.ask_name(Marker::X)?;
        let name_o = self.ask_name(Marker::O)?;
        self.controller.new_game(&name_x, &name_o);
        self.show_start();
        Ok(())
    }

    fn ask_name(&mut self, marker: Marker) -> GameResult<String> {
        let default = match marker {
            Marker::X => &self.defaults.x,
            Marker::O => &self.defaults.o,
        };
        let prompt = if default.is_empty() {
            format!("NAME FOR {}:", marker)
        } else {
            format!("NAME FOR {} [{}]:", marker, default)
        };
        let answer = self.input.read_line(&prompt)?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            default.clone()
        } else {
            answer.to_string()
        })
    }

    fn restart(&mut self) {
        if self.controller.restart_game() {
            self.show_start();
        } else {
            self.output.writeln("NO GAME TO RESTART.");
        }
    }

    fn show_start(&mut self) {
        self.output.writeln(StatusPresenter::restarted());
        BoardPresenter::render(&self.controller.board().options(), &mut self.output);
        if let Some(player) = self.controller.current_player() {
            self.output.writeln(&StatusPresenter::turn(player));
        }
    }

    fn play(&mut self, index: CellIndex) {
        let result = self.controller.handle_move(index);
        if result.is_accepted() {
            BoardPresenter::render(&self.controller.board().options(), &mut self.output);
        }
        self.output.writeln(&StatusPresenter::move_result(&result));
        if result.is_finished() {
            self.output.writeln("PLAY AGAIN? R = SAME PLAYERS, N = NEW PLAYERS, Q = QUIT");
        }
    }
}
