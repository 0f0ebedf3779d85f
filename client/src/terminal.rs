use std::{
    io::{self, BufRead, IsTerminal, Stdin, Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{Clear, ClearType},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Everything the controller needs from the outside world.
pub trait Terminal {
    /// Blocks for one line without its line ending. `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn clear_screen(&mut self) -> io::Result<()>;

    /// Non-blocking check for a pending keypress.
    fn key_pressed(&mut self) -> io::Result<bool>;

    /// Only called after [`Terminal::key_pressed`] returned true.
    fn read_key(&mut self) -> io::Result<Key>;

    fn sleep(&mut self, duration: Duration) -> io::Result<()>;

    fn out(&mut self) -> &mut dyn Write;
}

pub struct StdTerminal {
    stdin: Stdin,
    stdout: Stdout,
    interactive: bool,
}

impl StdTerminal {
    pub fn new() -> Self {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();

        Self {
            stdin,
            stdout: io::stdout(),
            interactive,
        }
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for StdTerminal {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.stdout.flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if !self.interactive {
            return Ok(());
        }

        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn key_pressed(&mut self) -> io::Result<bool> {
        // Piped input has no keyboard, so every tick counts as ENTER and the
        // next line decides whether to resume.
        if !self.interactive {
            return Ok(true);
        }

        event::poll(Duration::ZERO)
    }

    fn read_key(&mut self) -> io::Result<Key> {
        if !self.interactive {
            return Ok(Key::Enter);
        }

        let key = match event::read()? {
            Event::Key(key_event)
                if key_event.code == KeyCode::Enter && key_event.kind == KeyEventKind::Press =>
            {
                Key::Enter
            }
            _ => Key::Other,
        };

        Ok(key)
    }

    fn sleep(&mut self, duration: Duration) -> io::Result<()> {
        // Flush first so the generation is on screen for the whole pause.
        self.stdout.flush()?;
        spin_sleep::sleep(duration);
        Ok(())
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }
}
