//! Glue: owns the buffer, the parser, and the cursor, and wires motion-only
//! commands straight through to [`MotionEngine`].
//!
//! Grounded in the shape of the teacher's `exec.rs` top-level loop (owns a
//! buffer, a mode, and a cursor; feeds one key and reacts to what comes
//! back), narrowed to this core's much smaller split: motions are resolved
//! here, everything else is the embedder's problem.

use log::trace;

use crate::command::Command;
use crate::cursor::Cursor;
use crate::error::Error;
use crate::key::Key;
use crate::line::{Line, LineElement};
use crate::line_store::{FromFileOptions, LineStore};
use crate::motion::MotionEngine;
use crate::parser::CommandParser;

/// What `handle_key` hands back to the embedder.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
	/// The key was consumed but did not complete a command.
	Pending,
	/// A `MotionOnly` command was completed and already applied; the
	/// resulting cursor is given.
	MotionApplied(Cursor),
	/// A non-motion command was completed and is handed to the caller for
	/// execution; delivered exactly once.
	Command(Command),
}

/// Options for constructing a new [`BufferSession`].
#[derive(Clone, Debug, Default)]
pub struct SessionOptions {
	/// When set, the session's initial buffer is loaded from this file.
	pub path: Option<std::path::PathBuf>,
}

/// Owns one line store, one parser state machine, and one cursor.
pub struct BufferSession<T: LineElement = Line> {
	store: LineStore<T>,
	parser: CommandParser,
	cursor: Cursor,
	motion_engine: MotionEngine,
}

impl<T: LineElement> BufferSession<T> {
	pub fn new(
		store_opts: Option<usize>,
		session_opts: SessionOptions,
		file_opts: Option<&FromFileOptions>,
	) -> Result<Self, Error> {
		let store = match (&session_opts.path, file_opts) {
			(Some(path), Some(opts)) => LineStore::from_file(path, opts)?,
			_ => LineStore::new(store_opts)?,
		};
		Ok(Self { store, parser: CommandParser::new(), cursor: Cursor::ORIGIN, motion_engine: MotionEngine::new() })
	}

	pub fn load_relative_file(&mut self, path: impl AsRef<std::path::Path>, opts: &FromFileOptions) -> Result<(), Error> {
		self.store = LineStore::from_file(path, opts)?;
		self.cursor = Cursor::ORIGIN;
		Ok(())
	}

	pub fn set_cursor(&mut self, cursor: Cursor) {
		self.cursor = cursor;
	}

	pub fn cursor(&self) -> Cursor {
		self.cursor
	}

	pub fn store(&self) -> &LineStore<T> {
		&self.store
	}

	pub fn store_mut(&mut self) -> &mut LineStore<T> {
		&mut self.store
	}

	/// Feeds one key through the parser. A completed `MotionOnly` command is
	/// resolved against the buffer immediately and folded into the cursor;
	/// every other completed command is surfaced to the caller untouched.
	pub fn handle_key(&mut self, key: Key) -> Result<SessionEvent, Error> {
		trace!("session: handling key {:?} at {:?}", key, self.cursor);
		let Some(cmd) = self.parser.handle_key(key)? else {
			return Ok(SessionEvent::Pending);
		};

		if let Command::MotionOnly { motion, .. } = &cmd {
			let next = self.motion_engine.apply(self.cursor, motion, &self.store)?;
			self.cursor = next;
			return Ok(SessionEvent::MotionApplied(next));
		}

		Ok(SessionEvent::Command(cmd))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn feed(session: &mut BufferSession<Line>, s: &str) -> Vec<SessionEvent> {
		s.bytes().map(|b| session.handle_key(Key::plain(b)).unwrap()).collect()
	}

	#[test]
	fn motion_only_commands_move_the_cursor_internally() {
		let mut session: BufferSession<Line> = BufferSession::new(None, SessionOptions::default(), None).unwrap();
		session.store_mut().append(vec![Line::from("hello"), Line::from("there")]).unwrap();

		let events = feed(&mut session, "w");
		assert_eq!(events, vec![SessionEvent::MotionApplied(Cursor::new(1, 0))]);
		assert_eq!(session.cursor(), Cursor::new(1, 0));
	}

	#[test]
	fn non_motion_commands_are_surfaced_once() {
		let mut session: BufferSession<Line> = BufferSession::new(None, SessionOptions::default(), None).unwrap();
		session.store_mut().append(vec![Line::from("hello")]).unwrap();

		let events = feed(&mut session, "dd");
		assert_eq!(
			events,
			vec![SessionEvent::Command(Command::Delete {
				motion: crate::command::Motion::DownwardsLines(0),
				register: None
			})]
		);
	}

	#[test]
	fn incomplete_sequence_is_pending() {
		let mut session: BufferSession<Line> = BufferSession::new(None, SessionOptions::default(), None).unwrap();
		let events = feed(&mut session, "d");
		assert_eq!(events, vec![SessionEvent::Pending]);
	}
}
