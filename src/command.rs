//! The command and motion vocabulary the parser emits.
//!
//! Closed sum types, not a mode-per-trait-object hierarchy: every shape a
//! parsed keystroke sequence can take is enumerated here, and anything that
//! doesn't fit is a typed [`crate::error::Error`], never a silent default.

/// A target byte for motions like `f`/`t`/`i`/`s` that need a follow-up key.
pub type Target = Option<u8>;

/// A rule that, applied to a [`crate::cursor::Cursor`] and a line store,
/// yields a new cursor. Only [`Motion::UntilNextWord`] and
/// [`Motion::UntilStartOfPreviousWord`] are evaluated by
/// [`crate::motion::MotionEngine`]; the rest are recognized by the parser
/// but left to the embedder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Motion {
	/// Never surfaced in a completed [`Command`]; only ever held transiently
	/// inside a [`crate::parser::CommandBuilder`] while a motion is pending.
	Unset,
	UntilEndOfWord(usize),
	UntilNextWord(usize),
	UntilStartOfPreviousWord(usize),
	UntilEndOfLine(usize),
	UntilBeginningOfLine(usize),
	UntilColumnZero,
	UntilBeginningOfFile(usize),
	UntilEndOfFile(usize),
	DownwardsLines(usize),
	UpwardsLines(usize),
	ForwardsCharacter(usize),
	BackwardsCharacter(usize),
	ForwardsParagraph(usize),
	BackwardsParagraph(usize),
	ForwardsIncluding(Target),
	BackwardsIncluding(Target),
	ForwardsExcluding(Target),
	BackwardsExcluding(Target),
	ToMarkLine(Target),
	ToMarkPosition(Target),
	Inside(Target),
	Surrounding(Target),
	ToMatching,
}

impl Motion {
	/// Whether this motion still needs a target byte supplied via
	/// [`crate::parser::ParserState::WaitingForTarget`].
	pub fn wants_target(&self) -> bool {
		matches!(
			self,
			Motion::ForwardsIncluding(None)
				| Motion::BackwardsIncluding(None)
				| Motion::ForwardsExcluding(None)
				| Motion::BackwardsExcluding(None)
				| Motion::Inside(None)
				| Motion::Surrounding(None)
		)
	}

	/// Whether this motion still needs a mark slot supplied via
	/// [`crate::parser::ParserState::WaitingForMark`].
	pub fn wants_mark(&self) -> bool {
		matches!(self, Motion::ToMarkLine(None) | Motion::ToMarkPosition(None))
	}

	fn set_target(&mut self, target: u8) {
		match self {
			Motion::ForwardsIncluding(t)
			| Motion::BackwardsIncluding(t)
			| Motion::ForwardsExcluding(t)
			| Motion::BackwardsExcluding(t)
			| Motion::Inside(t)
			| Motion::Surrounding(t) => *t = Some(target),
			_ => {}
		}
	}

	fn set_mark(&mut self, slot: u8) {
		match self {
			Motion::ToMarkLine(t) | Motion::ToMarkPosition(t) => *t = Some(slot),
			_ => {}
		}
	}
}

/// A register name parsed off a `"` chord. Only the name is tracked — this
/// core never stores or retrieves register contents.
pub type Register = Option<u8>;

/// A completed, user-visible editor action.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Command {
	/// Never surfaced to a caller; only ever held inside a
	/// [`crate::parser::CommandBuilder`] before a verb key is seen.
	#[default]
	Unset,
	MotionOnly { motion: Motion, register: Register },
	Delete { motion: Motion, register: Register },
	Yank { motion: Motion, register: Register },
	Change { motion: Motion, register: Register },
	PasteForwards { register: Register, range: usize },
	PasteBackwards { register: Register, range: usize },
	SetMark { slot: u8 },
	Comment { motion: Motion, register: Register },
	BringLineUp { count: usize },
	Undo,
	Redo,
	EnterInsertMode { count: usize },
	Insert { byte: u8 },
	ExitInsertMode,
	ReplaceInsert { register: Register, range: usize },
	InsertDownwards { count: usize },
	InsertUpwards { count: usize },
	ScrollTop,
	ScrollCenter,
	ScrollBottom,
	BeginMacro { slot: u8 },
	EndMacro { slot: u8, commands: Vec<Command> },
}

impl Command {
	/// The pending motion, if this command's shape carries one.
	pub fn motion_mut(&mut self) -> Option<&mut Motion> {
		match self {
			Command::MotionOnly { motion, .. }
			| Command::Delete { motion, .. }
			| Command::Yank { motion, .. }
			| Command::Change { motion, .. }
			| Command::Comment { motion, .. } => Some(motion),
			_ => None,
		}
	}

	pub fn set_target(&mut self, target: u8) {
		if let Some(m) = self.motion_mut() {
			m.set_target(target);
		}
	}

	pub fn set_mark_slot(&mut self, slot: u8) {
		if let Some(m) = self.motion_mut() {
			m.set_mark(slot);
		} else if let Command::SetMark { slot: s } = self {
			*s = slot;
		}
	}
}
