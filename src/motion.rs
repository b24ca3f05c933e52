//! Motion evaluation: cursor movement over a [`LineStore`].
//!
//! Only [`Motion::UntilNextWord`] and [`Motion::UntilStartOfPreviousWord`]
//! are evaluated here; every other [`Motion`] variant is recognized by the
//! parser but surfaces [`Error::UnimplementedMotion`] when handed to
//! [`MotionEngine::apply`], leaving its behavior to the embedder.
//!
//! The word/non-word/space classification and the forward/backward scans
//! are adapted from the teacher's grapheme-class word-motion dispatch
//! (`is_whitespace`/`is_other_class`/`is_other_class_not_ws` in
//! `linebuf.rs`) down to a byte-indexed three-class model, since this core
//! has no grapheme-handling requirement.
//!
//! `seen_non_word_character` is derived once from the scan's starting byte
//! and never reassigned mid-scan in either direction: every rule that reads
//! it returns immediately on trigger, so there is no code path where a
//! mid-scan reassignment would ever be observed before a return.

use log::trace;

use crate::command::Motion;
use crate::cursor::Cursor;
use crate::error::Error;
use crate::line::LineElement;
use crate::line_store::LineStore;

const NON_WORD_CHARS: &[u8] = b",.-()/";

fn is_non_word(b: u8) -> bool {
	NON_WORD_CHARS.contains(&b)
}

fn is_space(b: u8) -> bool {
	b == b' '
}

/// Applies [`Motion`] values to a [`Cursor`] over a read-only [`LineStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MotionEngine;

impl MotionEngine {
	pub fn new() -> Self {
		Self
	}

	pub fn apply<T: LineElement>(&self, cursor: Cursor, motion: &Motion, store: &LineStore<T>) -> Result<Cursor, Error> {
		trace!("motion: {:?} from {:?}", motion, cursor);
		match motion {
			Motion::UntilNextWord(n) => Ok(repeat(cursor, *n, |c| next_word(c, store))),
			Motion::UntilStartOfPreviousWord(n) => Ok(repeat(cursor, *n, |c| previous_word(c, store))),
			_ => Err(Error::UnimplementedMotion),
		}
	}
}

fn repeat(mut cursor: Cursor, n: usize, mut step: impl FnMut(Cursor) -> Cursor) -> Cursor {
	for _ in 0..n {
		cursor = step(cursor);
	}
	cursor
}

fn line_bytes<'a, T: LineElement>(store: &'a LineStore<T>, line: usize) -> Option<&'a [u8]> {
	store.lines().get(line).map(|l| l.as_bytes())
}

fn next_word<T: LineElement>(cursor: Cursor, store: &LineStore<T>) -> Cursor {
	let total_lines = store.lines().len();
	if total_lines == 0 {
		return cursor;
	}

	let Some(bytes) = line_bytes(store, cursor.line) else {
		return cursor;
	};
	if bytes.is_empty() {
		if cursor.line + 1 < total_lines {
			return Cursor::new(cursor.line + 1, 0);
		}
		return cursor;
	}

	let start = bytes.get(cursor.column).copied().unwrap_or(b' ');
	let mut seen_space = is_space(start);
	let seen_non_word = is_non_word(start);

	let mut line = cursor.line;
	let mut col = cursor.column;
	let mut bytes = bytes;

	loop {
		if col >= bytes.len() {
			line += 1;
			if line >= total_lines {
				return cursor;
			}
			let Some(next_bytes) = line_bytes(store, line) else {
				return cursor;
			};
			if next_bytes.is_empty() {
				return Cursor::new(line, 0);
			}
			bytes = next_bytes;
			col = 0;
			seen_space = true;
			continue;
		}

		let c = bytes[col];
		if seen_space && c != b' ' {
			return Cursor::new(line, col);
		}
		if is_non_word(c) && !seen_non_word {
			return Cursor::new(line, col);
		}
		if c == b' ' {
			seen_space = true;
		}
		col += 1;
	}
}

fn previous_word<T: LineElement>(cursor: Cursor, store: &LineStore<T>) -> Cursor {
	let Some(bytes) = line_bytes(store, cursor.line) else {
		return cursor;
	};
	if bytes.is_empty() {
		if cursor.line == 0 {
			return cursor;
		}
		return Cursor::new(cursor.line - 1, 0);
	}

	let start = bytes.get(cursor.column).copied().unwrap_or(b' ');
	let mut seen_space = is_space(start);
	let seen_non_word = is_non_word(start);

	let mut line = cursor.line;
	let mut col = cursor.column;
	let mut bytes = bytes;
	if col >= bytes.len() {
		col = bytes.len() - 1;
	}

	loop {
		if is_non_word(bytes[col]) && !seen_non_word {
			return Cursor::new(line, col);
		}
		if seen_space && bytes[col] != b' ' && col > 0 && bytes[col - 1] == b' ' {
			return Cursor::new(line, col);
		}
		if bytes[col] == b' ' {
			seen_space = true;
		}

		if col == 0 {
			if seen_space || seen_non_word {
				return Cursor::new(line, 0);
			}
			if line == 0 {
				return Cursor::new(0, 0);
			}
			line -= 1;
			let Some(prev_bytes) = line_bytes(store, line) else {
				return cursor;
			};
			if prev_bytes.is_empty() {
				return Cursor::new(line, 0);
			}
			bytes = prev_bytes;
			col = bytes.len() - 1;
			seen_space = true;
			continue;
		}
		col -= 1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::line::Line;
	use crate::line_store::LineStore;
	use pretty_assertions::assert_eq;

	fn store_from(text: &str) -> LineStore<Line> {
		let mut store: LineStore<Line> = LineStore::new(None).unwrap();
		let items: Vec<Line> = text.split('\n').map(Line::from).collect();
		store.append(items).unwrap();
		store
	}

	#[test]
	fn word_forward_and_backward_round_trip() {
		let store = store_from("hello\n\nthere\nyou    handsome \ndevil, you");
		let engine = MotionEngine::new();

		let mut cursor = Cursor::new(0, 0);
		let forward_expected = [
			Cursor::new(1, 0),
			Cursor::new(2, 0),
			Cursor::new(3, 0),
			Cursor::new(3, 7),
			Cursor::new(4, 0),
			Cursor::new(4, 5),
			Cursor::new(4, 7),
		];
		for expected in forward_expected {
			cursor = engine.apply(cursor, &Motion::UntilNextWord(1), &store).unwrap();
			assert_eq!(cursor, expected);
		}

		let backward_expected = [
			Cursor::new(4, 5),
			Cursor::new(4, 0),
			Cursor::new(3, 7),
			Cursor::new(3, 0),
			Cursor::new(2, 0),
			Cursor::new(1, 0),
			Cursor::new(0, 0),
		];
		for expected in backward_expected {
			cursor = engine.apply(cursor, &Motion::UntilStartOfPreviousWord(1), &store).unwrap();
			assert_eq!(cursor, expected);
		}
	}

	#[test]
	fn forward_word_at_end_of_buffer_is_unchanged() {
		let store = store_from("last");
		let engine = MotionEngine::new();
		let cursor = Cursor::new(0, 0);
		let result = engine.apply(cursor, &Motion::UntilNextWord(1), &store).unwrap();
		assert_eq!(result, cursor);
	}

	#[test]
	fn unimplemented_motion_is_reported() {
		let store = store_from("x");
		let engine = MotionEngine::new();
		let err = engine.apply(Cursor::new(0, 0), &Motion::UntilEndOfWord(1), &store).unwrap_err();
		assert!(matches!(err, Error::UnimplementedMotion));
	}

	#[test]
	fn backward_word_from_past_end_of_line_does_not_panic() {
		let store = store_from("ab");
		let engine = MotionEngine::new();
		// column 2 is one past the last byte of a 2-byte line: an ordinary
		// end-of-line cursor position, explicitly legal per the data model.
		let result = engine.apply(Cursor::new(0, 2), &Motion::UntilStartOfPreviousWord(1), &store).unwrap();
		assert_eq!(result, Cursor::new(0, 0));
	}
}
