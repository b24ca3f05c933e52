//! A UI-free, embeddable core for Vim-style modal editors.
//!
//! This crate parses keystrokes into structured [`command::Command`] values
//! according to a modal-editing grammar ([`parser`]) and applies motion
//! commands to a cursor over an in-memory line buffer ([`motion`],
//! [`line_store`]). There is no rendering, no event loop, no terminal
//! handling, and no configuration loading here — [`session::BufferSession`]
//! is the glue an embedder drives one key at a time.

pub mod command;
pub mod cursor;
pub mod error;
pub mod key;
pub mod line;
pub mod line_store;
pub mod motion;
pub mod parser;
pub mod session;

#[cfg(test)]
mod tests;

pub use command::{Command, Motion};
pub use cursor::Cursor;
pub use error::Error;
pub use key::{Key, KeyModifiers};
pub use line::{Line, LineElement};
pub use line_store::{CopyOptions, FromFileOptions, LineStore};
pub use motion::MotionEngine;
pub use parser::{CommandBuilder, CommandParser, ParserState};
pub use session::{BufferSession, SessionEvent, SessionOptions};
