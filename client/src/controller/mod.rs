//! The interactive state machine.
//!
//! The controller owns the grid (if any) and is always in exactly one [`Mode`].
//! Each [`Controller::step`] reads at most one line (or runs one auto-run tick),
//! hands it to the handler of the current mode and reports whatever went wrong
//! as a one-line diagnostic before going on.

use std::io::{self, Write};

use colored::Colorize;
use libgame::{Grid, gridfile};
use strum::Display;

use crate::{
    command::{Command, Verb},
    config::Config,
    error::CommandError,
    terminal::Terminal,
};

pub use autorun::AutoRunState;
pub use design::DesignStage;

mod autorun;
mod design;

const HELP: &[(&str, &str)] = &[
    ("help", "print command hints"),
    ("print", "print the current map"),
    ("load <filename>", "load a map from a local file"),
    ("save <filename>", "save the map to a local file"),
    ("design", "enter design mode"),
    ("quit", "quit design mode"),
    ("generate", "generate the next generation of life"),
    ("run", "enter auto-run mode"),
    ("exit", "exit auto-run mode"),
    ("end", "end the game"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Design(DesignStage),
    AutoRun(AutoRunState),
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Normal => ModeKind::Normal,
            Mode::Design(_) => ModeKind::Design,
            Mode::AutoRun(_) => ModeKind::AutoRun,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ModeKind {
    #[strum(to_string = "normal")]
    Normal,

    #[strum(to_string = "design")]
    Design,

    #[strum(to_string = "auto-run")]
    AutoRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    End,
}

pub struct Controller<T> {
    terminal: T,
    config: Config,
    grid: Option<Grid>,
    mode: Mode,
}

impl<T> Controller<T>
where
    T: Terminal,
{
    pub fn new(terminal: T, config: Config) -> Self {
        Self {
            terminal,
            config,
            grid: None,
            mode: Mode::Normal,
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn welcome(&mut self) -> anyhow::Result<()> {
        let stars = "*".repeat(48);
        let out = self.terminal.out();

        writeln!(out, "{stars}\n{stars}")?;
        writeln!(out, "{:^48}\n", "GAME OF LIFE")?;
        writeln!(out, "{:^48}", "Welcome to the game of life.")?;
        writeln!(out, "{:^48}\n", "You'll experience the joy of Cellular Automaton.")?;
        writeln!(out, "{stars}\n{stars}")?;

        self.print_help()?;
        Ok(())
    }

    /// Runs until `end` or until input runs out in normal mode.
    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    pub fn step(&mut self) -> anyhow::Result<Flow> {
        let result = match self.mode {
            Mode::Normal => self.normal_step(),
            Mode::Design(stage) => self.design_step(stage),
            Mode::AutoRun(state) => self.autorun_step(state),
        };

        match result {
            Ok(flow) => Ok(flow),
            Err(err) => {
                self.report(err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Loads a grid file the same way the `load` command does, reporting failures.
    pub fn load(&mut self, path: &str) -> anyhow::Result<()> {
        if let Err(err) = self.load_grid(path) {
            self.report(err)?;
        }

        Ok(())
    }

    fn normal_step(&mut self) -> Result<Flow, CommandError> {
        write!(self.terminal.out(), "\n[I] -> ")?;

        let Some(line) = self.terminal.read_line()? else {
            return self.end_session();
        };

        self.handle_normal(&Command::parse(&line))
    }

    fn handle_normal(&mut self, command: &Command) -> Result<Flow, CommandError> {
        if command.is_empty() {
            return Ok(Flow::Continue);
        }

        let verb = command
            .verb()
            .ok_or_else(|| CommandError::unknown(command))?;

        match (verb, command.argument.as_str()) {
            (Verb::Load, path) => self.load_grid(path)?,
            (Verb::Save, path) => self.save_grid(path)?,

            (_, argument) if !argument.is_empty() => return Err(CommandError::unknown(command)),

            (Verb::Help, _) => self.print_help()?,
            (Verb::Print, _) => self.print_grid()?,
            (Verb::Design, _) => self.enter_design()?,
            (Verb::Generate, _) => {
                self.grid.as_mut().ok_or(CommandError::NoGrid)?.advance();
                self.print_grid()?;
            }
            (Verb::Run, _) => self.enter_autorun()?,
            (Verb::Exit, _) => {
                return Err(CommandError::WrongMode {
                    mode: ModeKind::AutoRun,
                });
            }
            (Verb::Quit, _) => {
                return Err(CommandError::WrongMode {
                    mode: ModeKind::Design,
                });
            }
            (Verb::End, _) => return self.end_session(),
        }

        Ok(Flow::Continue)
    }

    fn end_session(&mut self) -> Result<Flow, CommandError> {
        writeln!(self.terminal.out(), "See you next time!")?;
        tracing::info!("session ended");
        Ok(Flow::End)
    }

    fn load_grid(&mut self, path: &str) -> Result<(), CommandError> {
        if path.is_empty() {
            return Err(CommandError::MissingArgument { verb: Verb::Load });
        }

        let grid =
            gridfile::read_grid(path, self.config.max_dimension).map_err(CommandError::Load)?;

        let out = self.terminal.out();
        writeln!(out, "row = {}, column = {}", grid.rows(), grid.cols())?;
        writeln!(out, "loading complete")?;

        tracing::info!(path, rows = grid.rows(), cols = grid.cols(), "grid loaded");
        self.grid = Some(grid);
        Ok(())
    }

    fn save_grid(&mut self, path: &str) -> Result<(), CommandError> {
        let grid = self.grid.as_ref().ok_or(CommandError::NoGrid)?;

        if path.is_empty() {
            return Err(CommandError::MissingArgument { verb: Verb::Save });
        }

        gridfile::write_grid(path, grid).map_err(CommandError::Save)?;

        writeln!(self.terminal.out(), "saving successfully")?;
        tracing::info!(path, "grid saved");
        Ok(())
    }

    fn print_help(&mut self) -> Result<(), CommandError> {
        let out = self.terminal.out();

        for (usage, description) in HELP {
            writeln!(out, "    [{usage}]{:width$}{description}", "", width = 18 - usage.len())?;
        }

        Ok(())
    }

    fn print_grid(&mut self) -> Result<(), CommandError> {
        let rows = self
            .grid
            .as_ref()
            .ok_or(CommandError::NoGrid)?
            .render(self.config.glyphs());

        let out = self.terminal.out();
        for row in rows {
            writeln!(out, "{row}")?;
        }

        Ok(())
    }

    fn set_mode(&mut self, mode: Mode) {
        tracing::debug!(from = %self.mode.kind(), to = %mode.kind(), "mode change");
        self.mode = mode;
    }

    /// Prints a diagnostic for `err`. Terminal failures are passed back up instead.
    fn report(&mut self, err: CommandError) -> io::Result<()> {
        if let CommandError::Io(io_err) = err {
            return Err(io_err);
        }

        tracing::debug!(%err, mode = %self.mode.kind(), "command rejected");

        let out = self.terminal.out();
        writeln!(out, "{} {err}", "error:".red().bold())?;

        if matches!(err, CommandError::NoGrid) {
            writeln!(out, "Use [load <filename>] to load an existing file.")?;
            writeln!(out, "Or use [design] to design a new map.")?;
        }

        Ok(())
    }
}
