//! Text rendering of the board and of engine events.
mod board;
mod event_log;

pub use board::{Glyphs, render_board};
pub use event_log::{EventLog, describe};
