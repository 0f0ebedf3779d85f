use strum::{Display, EnumString};

/// One input line split into a verb and the rest of the line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    pub verb: String,
    pub argument: String,
}

impl Command {
    /// Lowercases the line, takes the first word as the verb and everything after
    /// it (minus surrounding blanks) as the argument, so file names may contain spaces.
    pub fn parse(line: &str) -> Self {
        let line = line.to_ascii_lowercase();

        let rest = line.trim_start_matches(is_blank);
        let (verb, rest) = rest.split_once(is_blank).unwrap_or((rest, ""));
        let argument = rest.trim_matches(is_blank);

        Self {
            verb: verb.to_owned(),
            argument: argument.to_owned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.verb.is_empty()
    }

    pub fn has_argument(&self) -> bool {
        !self.argument.is_empty()
    }

    pub fn verb(&self) -> Option<Verb> {
        self.verb.parse().ok()
    }

    /// True for `verb` given on its own.
    pub fn is_bare(&self, verb: Verb) -> bool {
        self.verb() == Some(verb) && !self.has_argument()
    }
}

fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Verb {
    #[strum(to_string = "help", serialize = "\\h")]
    Help,

    #[strum(to_string = "print", serialize = "\\p")]
    Print,

    #[strum(to_string = "load", serialize = "\\l")]
    Load,

    #[strum(to_string = "save", serialize = "\\s")]
    Save,

    #[strum(to_string = "design", serialize = "\\d")]
    Design,

    #[strum(to_string = "generate", serialize = "\\g")]
    Generate,

    #[strum(to_string = "run", serialize = "\\r")]
    Run,

    #[strum(to_string = "exit", serialize = "\\e")]
    Exit,

    #[strum(to_string = "quit", serialize = "\\q")]
    Quit,

    #[strum(to_string = "end")]
    End,
}
