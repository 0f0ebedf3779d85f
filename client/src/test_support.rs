//! A terminal driven by a script, for exercising the controller without a tty.

use std::{collections::VecDeque, io, io::Write, time::Duration};

use crate::terminal::{Key, Terminal};

#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    lines: VecDeque<String>,
    ticks: VecDeque<Option<Key>>,
    output: Vec<u8>,
    pub clears: usize,
    pub sleeps: Vec<Duration>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// What each auto-run tick finds waiting: `None` for no key at all.
    /// Once the script runs out every tick finds ENTER, so auto-run always pauses eventually.
    pub fn with_ticks<I>(mut self, ticks: I) -> Self
    where
        I: IntoIterator<Item = Option<Key>>,
    {
        self.ticks = ticks.into_iter().collect();
        self
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

impl Terminal for ScriptedTerminal {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn key_pressed(&mut self) -> io::Result<bool> {
        match self.ticks.front() {
            Some(None) => {
                self.ticks.pop_front();
                Ok(false)
            }
            Some(Some(_)) | None => Ok(true),
        }
    }

    fn read_key(&mut self) -> io::Result<Key> {
        Ok(self.ticks.pop_front().flatten().unwrap_or(Key::Enter))
    }

    fn sleep(&mut self, duration: Duration) -> io::Result<()> {
        self.sleeps.push(duration);
        Ok(())
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
