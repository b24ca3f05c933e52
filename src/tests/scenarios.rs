//! Property-style checks for the invariants named in `SPEC_FULL.md` §12,
//! exercised across the public API surface rather than from inside any one
//! module.

use pretty_assertions::assert_eq;

use crate::command::{Command, Motion};
use crate::cursor::Cursor;
use crate::key::Key;
use crate::line::Line;
use crate::line_store::{CopyOptions, LineStore};
use crate::motion::MotionEngine;
use crate::parser::{CommandParser, ParserState};

fn keys(s: &str) -> Vec<Key> {
	s.bytes().map(Key::plain).collect()
}

/// `handle_keys(K)` must agree with feeding `K` one key at a time.
#[test]
fn handle_keys_matches_incremental_handle_key() {
	let sequences = ["dd", "5232dj2301dk", "\"a3P", "wwbb", "gg", "qawib\x1bq"];
	for seq in sequences {
		let mut batched = CommandParser::new();
		let batched_cmds = batched.handle_keys(keys(seq)).unwrap();

		let mut incremental = CommandParser::new();
		let mut incremental_cmds = Vec::new();
		for key in keys(seq) {
			if let Some(cmd) = incremental.handle_key(key).unwrap() {
				incremental_cmds.push(cmd);
			}
		}

		assert_eq!(batched_cmds, incremental_cmds, "sequence {seq:?} diverged");
	}
}

/// `range_modifiers` only ever grows while digits accumulate, and resets to
/// zero the moment a command completes and the parser returns to `Start`.
#[test]
fn range_modifiers_monotonic_until_reset() {
	let mut parser = CommandParser::new();
	let mut last = 0;
	for key in keys("1234") {
		parser.handle_key(key).unwrap();
		let ParserState::Start(builder) = parser.state() else {
			panic!("digits alone must stay in Start");
		};
		assert!(builder.range_modifiers >= last);
		last = builder.range_modifiers;
	}
	assert_eq!(last, 4);

	// `j` completes the command; the next builder starts fresh at zero.
	parser.handle_key(Key::plain(b'j')).unwrap();
	let ParserState::Start(builder) = parser.state() else {
		panic!("expected Start after a completed command");
	};
	assert_eq!(builder.range_modifiers, 0);
}

/// Every command emitted directly from `Start` leaves the parser in `Start`,
/// `InInsertMode`, or a `Waiting*` state — never mid-assembly with a
/// leftover completed command sitting in the builder.
#[test]
fn post_state_after_start_commands_is_never_stale() {
	let single_key_commands = ["p", "P", "j", "k", "$", "^", "{", "}", "l", "h", "G", "J", "u", "w", "b"];
	for k in single_key_commands {
		let mut parser = CommandParser::new();
		let cmd = parser.handle_key(Key::plain(k.as_bytes()[0])).unwrap();
		assert!(cmd.is_some(), "key {k:?} should complete a command");
		assert!(matches!(parser.state(), ParserState::Start(b) if b.partial_command == Command::Unset));
	}

	let mut parser = CommandParser::new();
	parser.handle_key(Key::plain(b'i')).unwrap();
	assert!(matches!(parser.state(), ParserState::InInsertMode { .. }));
}

/// `w` then `b` from a handful of word-start cursors returns to the origin,
/// as long as no empty line intervenes along the way.
#[test]
fn word_forward_then_backward_round_trips_from_any_word_start() {
	let engine = MotionEngine::new();
	let text = "alpha beta gamma\ndelta epsilon zeta";
	let mut store: LineStore<Line> = LineStore::new(None).unwrap();
	store.append(text.split('\n').map(Line::from).collect()).unwrap();

	let word_starts = [Cursor::new(0, 0), Cursor::new(0, 6), Cursor::new(0, 11), Cursor::new(1, 0), Cursor::new(1, 6)];
	for start in word_starts {
		let forward = engine.apply(start, &Motion::UntilNextWord(1), &store).unwrap();
		let back = engine.apply(forward, &Motion::UntilStartOfPreviousWord(1), &store).unwrap();
		assert_eq!(back, start, "round trip failed from {start:?}");
	}
}

/// `count <= capacity` holds after an interleaved sequence of append/insert/
/// remove, and `remove` followed by re-`insert` at the same index restores
/// the original line sequence.
#[test]
fn line_store_capacity_invariant_holds_across_mixed_operations() {
	let mut store: LineStore<Line> = LineStore::new(Some(4)).unwrap();
	assert!(store.count() <= store.capacity());

	store.append(vec![Line::from("a"), Line::from("b")]).unwrap();
	assert!(store.count() <= store.capacity());

	store.insert(1, vec![Line::from("x")]).unwrap();
	assert!(store.count() <= store.capacity());
	let rendered: Vec<&[u8]> = store.lines().iter().map(|l| l.as_bytes()).collect();
	assert_eq!(rendered, vec![b"a".as_slice(), b"x", b"b"]);

	let removed = store.lines()[1..2].to_vec();
	store.remove(1, 2, CopyOptions::default());
	assert!(store.count() <= store.capacity());

	store.insert(1, removed).unwrap();
	let rendered: Vec<&[u8]> = store.lines().iter().map(|l| l.as_bytes()).collect();
	assert_eq!(rendered, vec![b"a".as_slice(), b"x", b"b"]);
}
