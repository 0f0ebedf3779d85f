use std::io;

use libgame::{GridError, gridfile::GridFileError};
use thiserror::Error;

use crate::{
    command::{Command, Verb},
    controller::ModeKind,
};

/// Everything a command can go wrong with. Each message fits on one line.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no map yet!")]
    NoGrid,

    #[error("format error")]
    FormatError,

    #[error("illegal number")]
    IllegalNumber,

    #[error("number too large")]
    NumberTooLarge,

    #[error("command not found: {verb} {argument}")]
    UnknownCommand { verb: String, argument: String },

    #[error("{verb}: missing file name")]
    MissingArgument { verb: Verb },

    #[error("input error")]
    InputError,

    #[error("this command is only available in {mode} mode")]
    WrongMode { mode: ModeKind },

    #[error("load: {0}")]
    Load(#[source] GridFileError),

    #[error("save: {0}")]
    Save(#[source] GridFileError),

    /// Terminal failure, not something the user can recover from.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CommandError {
    pub fn unknown(command: &Command) -> Self {
        Self::UnknownCommand {
            verb: command.verb.clone(),
            argument: command.argument.clone(),
        }
    }
}

/// Design mode reports grid size problems in terms of the numbers typed.
impl From<GridError> for CommandError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::SizeTooLarge { .. } => Self::NumberTooLarge,
            GridError::IllegalSize | GridError::OutOfBounds { .. } => Self::IllegalNumber,
        }
    }
}
