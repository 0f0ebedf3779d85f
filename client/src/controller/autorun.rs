use std::io::Write;

use super::{Controller, Flow, Mode};
use crate::{
    command::{Command, Verb},
    error::CommandError,
    terminal::{Key, Terminal},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRunState {
    /// Advancing on its own when true, waiting for a line when false.
    pub running: bool,
}

impl<T> Controller<T>
where
    T: Terminal,
{
    pub(super) fn enter_autorun(&mut self) -> Result<(), CommandError> {
        if self.grid.is_none() {
            self.report(CommandError::NoGrid)?;
            writeln!(self.terminal.out(), "Exit auto-run mode...")?;
            return Ok(());
        }

        self.set_mode(Mode::AutoRun(AutoRunState { running: true }));
        Ok(())
    }

    pub(super) fn autorun_step(&mut self, state: AutoRunState) -> Result<Flow, CommandError> {
        if state.running {
            self.tick()?;
        } else {
            self.paused_step()?;
        }

        Ok(Flow::Continue)
    }

    /// One unattended generation: clear, advance, draw, wait, then check for ENTER.
    fn tick(&mut self) -> Result<(), CommandError> {
        self.terminal.clear_screen()?;

        let Some(grid) = self.grid.as_mut() else {
            self.set_mode(Mode::Normal);
            return Err(CommandError::NoGrid);
        };
        grid.advance();

        writeln!(self.terminal.out(), "Press ENTER to suspend.")?;
        self.print_grid()?;

        self.terminal.sleep(self.config.tick_interval())?;

        if self.terminal.key_pressed()? && self.terminal.read_key()? == Key::Enter {
            self.set_mode(Mode::AutoRun(AutoRunState { running: false }));
        }

        Ok(())
    }

    fn paused_step(&mut self) -> Result<(), CommandError> {
        writeln!(
            self.terminal.out(),
            "\nPress ENTER to resume or use [exit] to leave auto-run mode."
        )?;

        let Some(line) = self.terminal.read_line()? else {
            return self.leave_autorun();
        };

        let command = Command::parse(&line);

        if command.is_empty() {
            self.set_mode(Mode::AutoRun(AutoRunState { running: true }));
            Ok(())
        } else if command.is_bare(Verb::Exit) {
            self.leave_autorun()
        } else {
            Err(CommandError::InputError)
        }
    }

    fn leave_autorun(&mut self) -> Result<(), CommandError> {
        self.set_mode(Mode::Normal);

        self.terminal.clear_screen()?;
        writeln!(self.terminal.out(), "--> You have returned to normal mode.")?;
        Ok(())
    }
}
