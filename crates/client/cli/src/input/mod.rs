//! Input processing for the CLI client.
//!
//! This module owns the text-to-command mapping so the rest of the
//! application can stay agnostic about the concrete command syntax.

/// High-level outcome of reading one input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Pick the tile at `(x, y)`; row 0 is the bottom row.
    Pick { x: i32, y: i32 },
    /// Revert the last move.
    Undo,
    /// Deal a fresh board under the current rules.
    Restart,
    /// Print the board, counters and fingerprint.
    Show,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("`{0}` is not a valid coordinate")]
    BadCoordinate(String),
}

pub const HELP: &str = "\
commands:
  pick <x> <y>   pick a tile (alias: p); row 0 is the bottom row
  undo           revert the last move (alias: u)
  restart        deal a new board (alias: r)
  show           print the board (alias: s)
  help           this text (alias: h, ?)
  quit           leave (alias: q, exit)";

/// Parses one line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match head.to_ascii_lowercase().as_str() {
        "pick" | "p" => match rest.as_slice() {
            [x, y] => Command::Pick {
                x: coordinate(x)?,
                y: coordinate(y)?,
            },
            _ => return Err(InputError::Usage("pick <x> <y>")),
        },
        "undo" | "u" => no_args(&rest, Command::Undo, "undo")?,
        "restart" | "r" => no_args(&rest, Command::Restart, "restart")?,
        "show" | "s" => no_args(&rest, Command::Show, "show")?,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(InputError::Unknown(head.to_owned())),
    };
    Ok(Some(command))
}

fn no_args(
    rest: &[&str],
    command: Command,
    usage: &'static str,
) -> Result<Command, InputError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(InputError::Usage(usage))
    }
}

fn coordinate(word: &str) -> Result<i32, InputError> {
    word.parse()
        .map_err(|_| InputError::BadCoordinate(word.to_owned()))
}
