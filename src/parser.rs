//! Keystroke-to-[`Command`] parsing: a pure Mealy state machine.
//!
//! `step` is the machine: `(ParserState, Key) -> (ParserState, Command?)` or
//! an [`Error`] that leaves the state exactly as it was before the failing
//! key. [`CommandParser`] is the thin owning wrapper an embedder actually
//! drives one key at a time. The state shape follows the closed-sum-type
//! design noted in `SPEC_FULL.md` §13: this supersedes the
//! `Box<dyn ViMode>`-per-mode architecture the teacher used for its much
//! richer mode set, in favor of one exhaustively-matched enum sized to this
//! grammar's small, fixed vocabulary.

use log::{debug, trace};

use crate::command::{Command, Motion};
use crate::error::Error;
use crate::key::Key;

/// Accumulator threaded through every non-terminal parser state: the range
/// prefix, how many range digits have been folded in, which register (if
/// any) was named, and the command being assembled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandBuilder {
	pub range: Option<usize>,
	pub range_modifiers: usize,
	pub register: Option<u8>,
	pub partial_command: Command,
}

impl CommandBuilder {
	fn fold_digit(&mut self, digit: usize) {
		self.range = Some(self.range.unwrap_or(0) * 10 + digit);
		self.range_modifiers += 1;
	}
}

/// The parser's current mode. Every non-terminal variant carries the
/// [`CommandBuilder`] accumulated so far; `InInsertMode` only needs the
/// range fields (it has no partial command to assemble) and
/// `RecordingMacro` nests an entire owned sub-machine.
#[derive(Clone, Debug)]
pub enum ParserState {
	Start(CommandBuilder),
	WaitingForMotion(CommandBuilder),
	WaitingForTarget(CommandBuilder),
	WaitingForMark(CommandBuilder),
	WaitingForRegister(CommandBuilder),
	WaitingForGCommand(CommandBuilder),
	WaitingForZCommand(CommandBuilder),
	WaitingForSlot(CommandBuilder),
	RecordingMacro { slot: u8, inner_state: Box<ParserState>, recorded: Vec<Command> },
	InInsertMode { range: Option<usize>, range_modifiers: usize },
}

impl Default for ParserState {
	fn default() -> Self {
		ParserState::Start(CommandBuilder::default())
	}
}

fn digit_value(code: u8) -> Option<usize> {
	if code.is_ascii_digit() {
		Some((code - b'0') as usize)
	} else {
		None
	}
}

/// Feeds one `key` into `state`, returning the next state and, if a command
/// was completed, that command. On failure the returned state is bitwise
/// identical to `state` as it was before this call — no partial mutation is
/// ever observable across an error.
pub fn step(state: ParserState, key: Key) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	trace!("parser: {:?} + {:?}", state, key);
	match state {
		ParserState::Start(builder) => step_start(builder, key),
		ParserState::WaitingForMotion(builder) => step_waiting_for_motion(builder, key),
		ParserState::WaitingForTarget(builder) => step_waiting_for_target(builder, key),
		ParserState::WaitingForMark(builder) => step_waiting_for_mark(builder, key),
		ParserState::WaitingForRegister(builder) => step_waiting_for_register(builder, key),
		ParserState::WaitingForGCommand(builder) => step_waiting_for_g_command(builder, key),
		ParserState::WaitingForZCommand(builder) => step_waiting_for_z_command(builder, key),
		ParserState::WaitingForSlot(builder) => step_waiting_for_slot(builder, key),
		ParserState::RecordingMacro { slot, inner_state, recorded } => {
			step_recording_macro(slot, inner_state, recorded, key)
		}
		ParserState::InInsertMode { range, range_modifiers } => step_in_insert_mode(range, range_modifiers, key),
	}
}

fn fresh() -> ParserState {
	ParserState::Start(CommandBuilder::default())
}

fn step_start(mut builder: CommandBuilder, key: Key) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	let c = key.code;

	if let Some(d) = digit_value(c) {
		builder.fold_digit(d);
		return Ok((ParserState::Start(builder), None));
	}

	if key.left_ctrl {
		return match c {
			b'r' => Ok((fresh(), Some(Command::Redo))),
			_ => {
				debug!("unsupported left-control command: {:#04x}", c);
				Err((ParserState::Start(builder), Error::UnsupportedLeftControlCommand(c)))
			}
		};
	}

	let register = builder.register;
	let range = builder.range;

	match c {
		b'"' => Ok((ParserState::WaitingForRegister(builder), None)),
		b'd' | b'y' | b'c' => {
			builder.partial_command = match c {
				b'd' => Command::Delete { motion: Motion::Unset, register },
				b'y' => Command::Yank { motion: Motion::Unset, register },
				b'c' => Command::Change { motion: Motion::Unset, register },
				_ => unreachable!(),
			};
			Ok((ParserState::WaitingForMotion(builder), None))
		}
		b'm' => {
			builder.partial_command = Command::SetMark { slot: 0 };
			Ok((ParserState::WaitingForMark(builder), None))
		}
		b'\'' => {
			builder.partial_command = Command::MotionOnly { motion: Motion::ToMarkLine(None), register };
			Ok((ParserState::WaitingForMark(builder), None))
		}
		b'`' => {
			builder.partial_command = Command::MotionOnly { motion: Motion::ToMarkPosition(None), register };
			Ok((ParserState::WaitingForMark(builder), None))
		}
		b'p' => Ok((fresh(), Some(Command::PasteForwards { register, range: range.unwrap_or(1) }))),
		b'P' => Ok((fresh(), Some(Command::PasteBackwards { register, range: range.unwrap_or(1) }))),
		b'j' => Ok((fresh(), Some(motion_only(Motion::DownwardsLines(range.unwrap_or(1)), register)))),
		b'k' => Ok((fresh(), Some(motion_only(Motion::UpwardsLines(range.unwrap_or(1)), register)))),
		b'$' => Ok((fresh(), Some(motion_only(Motion::UntilEndOfLine(range.unwrap_or(1)), register)))),
		b'^' => Ok((fresh(), Some(motion_only(Motion::UntilBeginningOfLine(range.unwrap_or(1)), register)))),
		b'}' => Ok((fresh(), Some(motion_only(Motion::ForwardsParagraph(range.unwrap_or(1)), register)))),
		b'{' => Ok((fresh(), Some(motion_only(Motion::BackwardsParagraph(range.unwrap_or(1)), register)))),
		b'l' => Ok((fresh(), Some(motion_only(Motion::ForwardsCharacter(range.unwrap_or(1)), register)))),
		b'h' => Ok((fresh(), Some(motion_only(Motion::BackwardsCharacter(range.unwrap_or(1)), register)))),
		b'G' => Ok((fresh(), Some(motion_only(Motion::UntilEndOfFile(range.unwrap_or(0)), register)))),
		b'w' => Ok((fresh(), Some(motion_only(Motion::UntilNextWord(range.unwrap_or(1)), register)))),
		b'b' => Ok((fresh(), Some(motion_only(Motion::UntilStartOfPreviousWord(range.unwrap_or(1)), register)))),
		b'J' => Ok((fresh(), Some(Command::BringLineUp { count: range.unwrap_or(1) }))),
		b'u' => Ok((fresh(), Some(Command::Undo))),
		b'f' => {
			builder.partial_command = Command::MotionOnly { motion: Motion::ForwardsIncluding(None), register };
			Ok((ParserState::WaitingForTarget(builder), None))
		}
		b'F' => {
			builder.partial_command = Command::MotionOnly { motion: Motion::BackwardsIncluding(None), register };
			Ok((ParserState::WaitingForTarget(builder), None))
		}
		b't' => {
			builder.partial_command = Command::MotionOnly { motion: Motion::ForwardsExcluding(None), register };
			Ok((ParserState::WaitingForTarget(builder), None))
		}
		b'T' => {
			builder.partial_command = Command::MotionOnly { motion: Motion::BackwardsExcluding(None), register };
			Ok((ParserState::WaitingForTarget(builder), None))
		}
		b'g' => Ok((ParserState::WaitingForGCommand(builder), None)),
		b'z' => Ok((ParserState::WaitingForZCommand(builder), None)),
		b'i' => Ok((ParserState::InInsertMode { range: None, range_modifiers: 0 }, Some(Command::EnterInsertMode { count: range.unwrap_or(1) }))),
		b's' => Ok((ParserState::InInsertMode { range: None, range_modifiers: 0 }, Some(Command::ReplaceInsert { register, range: range.unwrap_or(1) }))),
		b'o' => Ok((ParserState::InInsertMode { range: None, range_modifiers: 0 }, Some(Command::InsertDownwards { count: range.unwrap_or(1) }))),
		b'O' => Ok((ParserState::InInsertMode { range: None, range_modifiers: 0 }, Some(Command::InsertUpwards { count: range.unwrap_or(1) }))),
		b'q' => Ok((ParserState::WaitingForSlot(builder), None)),
		_ => {
			debug!("unexpected start key: {:#04x}", c);
			Err((ParserState::Start(builder), Error::UnexpectedStartKey(c)))
		}
	}
}

fn motion_only(motion: Motion, register: Option<u8>) -> Command {
	Command::MotionOnly { motion, register }
}

fn step_waiting_for_motion(
	mut builder: CommandBuilder,
	key: Key,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	let c = key.code;

	if c == b'0' && builder.range.is_none() {
		return finish_with_motion(builder, Motion::UntilColumnZero);
	}
	if let Some(d) = digit_value(c) {
		builder.fold_digit(d);
		return Ok((ParserState::WaitingForMotion(builder), None));
	}

	if is_doubled_verb(&builder.partial_command, c) {
		let n = builder.range.map(|r| r.saturating_sub(1)).unwrap_or(0);
		return finish_with_motion(builder, Motion::DownwardsLines(n));
	}

	let range1 = builder.range.unwrap_or(1);
	let range1_minus = builder.range.map(|r| r.saturating_sub(1)).unwrap_or(1);
	let range0 = builder.range.unwrap_or(0);

	match c {
		b'e' => finish_with_motion(builder, Motion::UntilEndOfWord(range1)),
		b'w' => finish_with_motion(builder, Motion::UntilNextWord(range1)),
		b'j' => finish_with_motion(builder, Motion::DownwardsLines(range1)),
		b'k' => finish_with_motion(builder, Motion::UpwardsLines(range1)),
		b'$' => finish_with_motion(builder, Motion::UntilEndOfLine(range1_minus)),
		b'^' => finish_with_motion(builder, Motion::UntilBeginningOfLine(range1_minus)),
		b'}' => finish_with_motion(builder, Motion::ForwardsParagraph(range1)),
		b'{' => finish_with_motion(builder, Motion::BackwardsParagraph(range1)),
		b'l' => finish_with_motion(builder, Motion::ForwardsCharacter(range1)),
		b'h' => finish_with_motion(builder, Motion::BackwardsCharacter(range1)),
		b'G' => finish_with_motion(builder, Motion::UntilEndOfFile(range0)),
		b'%' => finish_with_motion(builder, Motion::ToMatching),
		b'f' => enter_waiting_for_target(builder, Motion::ForwardsIncluding(None)),
		b'F' => enter_waiting_for_target(builder, Motion::BackwardsIncluding(None)),
		b't' => enter_waiting_for_target(builder, Motion::ForwardsExcluding(None)),
		b'T' => enter_waiting_for_target(builder, Motion::BackwardsExcluding(None)),
		b'i' => enter_waiting_for_target(builder, Motion::Inside(None)),
		b's' => enter_waiting_for_target(builder, Motion::Surrounding(None)),
		b'\'' => enter_waiting_for_mark(builder, Motion::ToMarkLine(None)),
		b'`' => enter_waiting_for_mark(builder, Motion::ToMarkPosition(None)),
		b'g' => Ok((ParserState::WaitingForGCommand(builder), None)),
		_ => {
			debug!("unimplemented motion key: {:#04x}", c);
			Err((ParserState::WaitingForMotion(builder), Error::UnimplementedMotion))
		}
	}
}

fn is_doubled_verb(partial: &Command, key: u8) -> bool {
	matches!(
		(partial, key),
		(Command::Delete { .. }, b'd') | (Command::Yank { .. }, b'y') | (Command::Change { .. }, b'c') | (Command::Comment { .. }, b'c')
	)
}

fn finish_with_motion(
	mut builder: CommandBuilder,
	motion: Motion,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	if builder.partial_command == Command::Unset {
		return Err((ParserState::WaitingForMotion(builder), Error::NoCommandWhenWaitingForMotion));
	}
	match builder.partial_command.motion_mut() {
		Some(m) => *m = motion,
		None => return Err((ParserState::WaitingForMotion(builder), Error::InvalidWaitingForMotionCommand)),
	}
	let cmd = builder.partial_command;
	Ok((fresh(), Some(cmd)))
}

fn enter_waiting_for_target(
	mut builder: CommandBuilder,
	motion: Motion,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	match builder.partial_command.motion_mut() {
		Some(m) => {
			*m = motion;
			Ok((ParserState::WaitingForTarget(builder), None))
		}
		None => Err((ParserState::WaitingForMotion(builder), Error::InvalidWaitingForMotionCommand)),
	}
}

fn enter_waiting_for_mark(
	mut builder: CommandBuilder,
	motion: Motion,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	match builder.partial_command.motion_mut() {
		Some(m) => {
			*m = motion;
			Ok((ParserState::WaitingForMark(builder), None))
		}
		None => Err((ParserState::WaitingForMotion(builder), Error::InvalidWaitingForMotionCommand)),
	}
}

fn step_waiting_for_target(
	builder: CommandBuilder,
	key: Key,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	let target = key.code;
	let mut builder = builder;
	if builder.partial_command == Command::Unset {
		return Err((ParserState::WaitingForTarget(builder), Error::NoCommandWhenWaitingForTarget));
	}
	let wants = match builder.partial_command.motion_mut() {
		None => return Err((ParserState::WaitingForTarget(builder), Error::InvalidWaitingForTargetCommand)),
		Some(m) => m.wants_target(),
	};
	if !wants {
		return Err((ParserState::WaitingForTarget(builder), Error::InvalidWaitingForTargetMotion));
	}
	builder.partial_command.set_target(target);
	let cmd = builder.partial_command;
	Ok((fresh(), Some(cmd)))
}

fn step_waiting_for_mark(
	builder: CommandBuilder,
	key: Key,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	let slot = key.code;
	let mut builder = builder;
	if matches!(builder.partial_command, Command::SetMark { .. }) {
		builder.partial_command.set_mark_slot(slot);
		let cmd = builder.partial_command;
		return Ok((fresh(), Some(cmd)));
	}
	let wants = match builder.partial_command.motion_mut() {
		None => return Err((ParserState::WaitingForMark(builder), Error::InvalidWaitingForMarkCommand)),
		Some(m) => m.wants_mark(),
	};
	if !wants {
		return Err((ParserState::WaitingForMark(builder), Error::InvalidWaitingForMarkMotion));
	}
	builder.partial_command.set_mark_slot(slot);
	let cmd = builder.partial_command;
	Ok((fresh(), Some(cmd)))
}

fn step_waiting_for_register(
	mut builder: CommandBuilder,
	key: Key,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	let c = key.code;
	if c.is_ascii_alphabetic() || c == b'+' || c == b'*' {
		builder.register = Some(c);
		Ok((ParserState::Start(builder), None))
	} else {
		Err((ParserState::WaitingForRegister(builder), Error::UnknownRegister(c)))
	}
}

fn step_waiting_for_g_command(
	mut builder: CommandBuilder,
	key: Key,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	let c = key.code;
	match c {
		b'g' => {
			let motion = Motion::UntilBeginningOfFile(builder.range.unwrap_or(0));
			if builder.partial_command == Command::Unset {
				Ok((fresh(), Some(Command::MotionOnly { motion, register: builder.register })))
			} else {
				match builder.partial_command.motion_mut() {
					Some(m) => {
						*m = motion;
						let cmd = builder.partial_command;
						Ok((fresh(), Some(cmd)))
					}
					None => Err((ParserState::WaitingForGCommand(builder), Error::InvalidGCommandState)),
				}
			}
		}
		b'c' => {
			builder.partial_command = Command::Comment { motion: Motion::Unset, register: builder.register };
			Ok((ParserState::WaitingForMotion(builder), None))
		}
		_ => {
			debug!("unsupported g-command key: {:#04x}", c);
			Err((ParserState::WaitingForGCommand(builder), Error::UnsupportedGCommand(c)))
		}
	}
}

fn step_waiting_for_z_command(
	builder: CommandBuilder,
	key: Key,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	match key.code {
		b't' => Ok((fresh(), Some(Command::ScrollTop))),
		b'z' => Ok((fresh(), Some(Command::ScrollCenter))),
		b'b' => Ok((fresh(), Some(Command::ScrollBottom))),
		c => {
			debug!("unsupported z-command key: {:#04x}", c);
			Err((ParserState::WaitingForZCommand(builder), Error::UnsupportedZCommand(c)))
		}
	}
}

fn step_waiting_for_slot(
	builder: CommandBuilder,
	key: Key,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	let c = key.code;
	if c.is_ascii_alphanumeric() {
		Ok((
			ParserState::RecordingMacro { slot: c, inner_state: Box::new(fresh()), recorded: Vec::new() },
			Some(Command::BeginMacro { slot: c }),
		))
	} else {
		Err((ParserState::WaitingForSlot(builder), Error::UnknownMacroSlot(c)))
	}
}

fn step_recording_macro(
	slot: u8,
	inner_state: Box<ParserState>,
	mut recorded: Vec<Command>,
	key: Key,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	if key.code == b'q' {
		return Ok((fresh(), Some(Command::EndMacro { slot, commands: recorded })));
	}
	match step(*inner_state, key) {
		Ok((new_inner, emitted)) => {
			if let Some(cmd) = emitted.clone() {
				recorded.push(cmd);
			}
			Ok((ParserState::RecordingMacro { slot, inner_state: Box::new(new_inner), recorded }, emitted))
		}
		Err((unchanged_inner, e)) => {
			Err((ParserState::RecordingMacro { slot, inner_state: Box::new(unchanged_inner), recorded }, e))
		}
	}
}

fn step_in_insert_mode(
	range: Option<usize>,
	range_modifiers: usize,
	key: Key,
) -> Result<(ParserState, Option<Command>), (ParserState, Error)> {
	if key.is_escape() {
		Ok((fresh(), Some(Command::ExitInsertMode)))
	} else {
		Ok((ParserState::InInsertMode { range, range_modifiers }, Some(Command::Insert { byte: key.code })))
	}
}

/// Owning driver over [`ParserState`], for embedders who feed one key at a
/// time rather than managing the state value themselves.
#[derive(Clone, Debug, Default)]
pub struct CommandParser {
	state: ParserState,
}

impl CommandParser {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> &ParserState {
		&self.state
	}

	/// Feeds one key, updating internal state. On success the (possibly
	/// absent) completed command is returned; on failure the internal state
	/// is left untouched.
	pub fn handle_key(&mut self, key: Key) -> Result<Option<Command>, Error> {
		let state = std::mem::take(&mut self.state);
		match step(state, key) {
			Ok((next, cmd)) => {
				self.state = next;
				Ok(cmd)
			}
			Err((unchanged, e)) => {
				self.state = unchanged;
				Err(e)
			}
		}
	}

	/// Feeds a whole sequence of keys, collecting every completed command.
	/// Fails on the first error, after which internal state reflects
	/// everything parsed before the failing key.
	pub fn handle_keys(&mut self, keys: impl IntoIterator<Item = Key>) -> Result<Vec<Command>, Error> {
		let mut out = Vec::new();
		for key in keys {
			if let Some(cmd) = self.handle_key(key)? {
				out.push(cmd);
			}
		}
		Ok(out)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::key::Key;
	use pretty_assertions::assert_eq;

	fn keys(s: &str) -> Vec<Key> {
		s.bytes().map(Key::plain).collect()
	}

	#[test]
	fn dd_deletes_current_line() {
		let mut p = CommandParser::new();
		let cmds = p.handle_keys(keys("dd")).unwrap();
		assert_eq!(cmds, vec![Command::Delete { motion: Motion::DownwardsLines(0), register: None }]);
	}

	#[test]
	fn ranged_operators_in_sequence() {
		let mut p = CommandParser::new();
		let cmds = p.handle_keys(keys("5232dj2301dk")).unwrap();
		assert_eq!(
			cmds,
			vec![
				Command::Delete { motion: Motion::DownwardsLines(5232), register: None },
				Command::Delete { motion: Motion::UpwardsLines(2301), register: None },
			]
		);
	}

	#[test]
	fn register_prefixed_paste() {
		let mut p = CommandParser::new();
		let cmds = p.handle_keys(keys("\"a3P")).unwrap();
		assert_eq!(cmds, vec![Command::PasteBackwards { register: Some(b'a'), range: 3 }]);
	}

	#[test]
	fn macro_recording_replays_inner_commands() {
		let mut p = CommandParser::new();
		let mut all_keys = keys("qawib");
		all_keys.push(Key::plain(0x1B));
		all_keys.extend(keys("q"));
		let cmds = p.handle_keys(all_keys).unwrap();

		let inner = vec![
			Command::MotionOnly { motion: Motion::UntilNextWord(1), register: None },
			Command::EnterInsertMode { count: 1 },
			Command::Insert { byte: b'b' },
			Command::ExitInsertMode,
		];

		let mut expected = vec![Command::BeginMacro { slot: b'a' }];
		expected.extend(inner.clone());
		expected.push(Command::EndMacro { slot: b'a', commands: inner });

		assert_eq!(cmds, expected);
	}

	#[test]
	fn error_leaves_state_unchanged() {
		let mut p = CommandParser::new();
		p.handle_key(Key::plain(b'd')).unwrap();
		let before = format!("{:?}", p.state());
		let err = p.handle_key(Key::plain(b'z')).unwrap_err();
		assert!(matches!(err, Error::UnimplementedMotion));
		assert_eq!(format!("{:?}", p.state()), before);
	}

	#[test]
	fn escape_always_exits_insert_mode() {
		let mut p = CommandParser::new();
		p.handle_key(Key::plain(b'i')).unwrap();
		let cmd = p.handle_key(Key::plain(0x1B)).unwrap();
		assert_eq!(cmd, Some(Command::ExitInsertMode));
	}

	#[test]
	fn gg_moves_to_beginning_of_file() {
		let mut p = CommandParser::new();
		let cmds = p.handle_keys(keys("gg")).unwrap();
		assert_eq!(cmds, vec![Command::MotionOnly { motion: Motion::UntilBeginningOfFile(0), register: None }]);
	}

	#[test]
	fn left_ctrl_r_redoes() {
		let mut p = CommandParser::new();
		let cmd = p.handle_key(Key::left_ctrl(b'r')).unwrap();
		assert_eq!(cmd, Some(Command::Redo));
	}

	#[test]
	fn waiting_for_motion_with_no_pending_command_is_reported() {
		let state = ParserState::WaitingForMotion(CommandBuilder::default());
		let err = step(state, Key::plain(b'w')).unwrap_err().1;
		assert!(matches!(err, Error::NoCommandWhenWaitingForMotion));
	}

	#[test]
	fn waiting_for_target_with_no_pending_command_is_reported() {
		let state = ParserState::WaitingForTarget(CommandBuilder::default());
		let err = step(state, Key::plain(b'x')).unwrap_err().1;
		assert!(matches!(err, Error::NoCommandWhenWaitingForTarget));
	}

	#[test]
	fn waiting_for_motion_with_wrong_shaped_command_is_invalid_not_missing() {
		let builder = CommandBuilder { partial_command: Command::Undo, ..CommandBuilder::default() };
		let err = step(ParserState::WaitingForMotion(builder), Key::plain(b'w')).unwrap_err().1;
		assert!(matches!(err, Error::InvalidWaitingForMotionCommand));
	}
}
