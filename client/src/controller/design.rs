use std::io::Write;

use libgame::Grid;

use super::{Controller, Flow, Mode};
use crate::{
    command::{Command, Verb},
    error::CommandError,
    terminal::Terminal,
};

/// Design mode first asks for the grid size, then for cells to bring alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignStage {
    AwaitingDimensions,
    AwaitingCells,
}

impl<T> Controller<T>
where
    T: Terminal,
{
    pub(super) fn enter_design(&mut self) -> Result<(), CommandError> {
        self.terminal.clear_screen()?;
        writeln!(self.terminal.out(), "Enter design mode.")?;

        self.set_mode(Mode::Design(DesignStage::AwaitingDimensions));
        Ok(())
    }

    pub(super) fn design_step(&mut self, stage: DesignStage) -> Result<Flow, CommandError> {
        match stage {
            DesignStage::AwaitingDimensions => writeln!(
                self.terminal.out(),
                "Set row and column: (EX: 5 4) or use [quit] to quit (less than {})",
                self.config.max_dimension
            )?,
            DesignStage::AwaitingCells => {
                write!(self.terminal.out(), "\n[D] (use [quit] to quit) -> ")?;
            }
        }

        let Some(line) = self.terminal.read_line()? else {
            self.quit_design(stage)?;
            return Ok(Flow::Continue);
        };

        let command = Command::parse(&line);

        if command.is_bare(Verb::Quit) {
            self.quit_design(stage)?;
            return Ok(Flow::Continue);
        }

        if command.is_empty() {
            return Ok(Flow::Continue);
        }

        // Both fields are numbers here, never a verb and its argument.
        let (first, second) = parse_number_pair(&command)?;

        match stage {
            DesignStage::AwaitingDimensions => {
                let grid = Grid::with_limit(first, second, self.config.max_dimension)?;
                tracing::debug!(rows = first, cols = second, "designing new grid");

                self.grid = Some(grid);
                self.set_mode(Mode::Design(DesignStage::AwaitingCells));

                writeln!(self.terminal.out(), "Set alive cells. (EX: 0 0)")?;
                self.print_grid()?;
            }
            DesignStage::AwaitingCells => {
                self.grid
                    .as_mut()
                    .ok_or(CommandError::NoGrid)?
                    .set_alive((first, second))?;
            }
        }

        Ok(Flow::Continue)
    }

    fn quit_design(&mut self, stage: DesignStage) -> Result<(), CommandError> {
        self.set_mode(Mode::Normal);

        self.terminal.clear_screen()?;
        writeln!(self.terminal.out(), "--> You have quit design mode.")?;

        if stage == DesignStage::AwaitingCells {
            self.print_grid()?;
            writeln!(
                self.terminal.out(),
                "(Use [save <filename>] to save map to local.)"
            )?;
        }

        Ok(())
    }
}

fn parse_number_pair(command: &Command) -> Result<(usize, usize), CommandError> {
    let first = parse_number(&command.verb).ok_or(CommandError::FormatError)?;
    let second = parse_number(&command.argument).ok_or(CommandError::FormatError)?;
    Ok((first, second))
}

/// Digits only. Values too big for `usize` saturate so range checks still reject them.
fn parse_number(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    Some(token.parse().unwrap_or(usize::MAX))
}
