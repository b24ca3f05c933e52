//! Error taxonomy for keystroke parsing, motion evaluation, and line storage.

/// Everything that can go wrong inside `vicore`.
///
/// The parser and the motion engine never try to recover from one of these:
/// they hand it back to the caller untouched and leave whatever state they
/// were mutating exactly as it was before the failing operation started.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// A backing allocation could not be grown.
	#[error("out of memory")]
	OutOfMemory,

	/// A file could not be read.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// A file exceeded the caller-supplied maximum size.
	#[error("file too large: {actual} bytes exceeds max of {max} bytes")]
	FileTooLarge { max: u64, actual: u64 },

	/// `Start` received a key that cannot begin a command.
	#[error("unexpected key at start of command: {0:#04x}")]
	UnexpectedStartKey(u8),

	/// A key did not map to any known command.
	#[error("unsupported command key: {0:#04x}")]
	UnsupportedCommand(u8),

	/// A left-control chord did not map to any known command.
	#[error("unsupported left-control command key: {0:#04x}")]
	UnsupportedLeftControlCommand(u8),

	/// A key did not map to any known motion while waiting for one.
	#[error("unsupported motion key: {0:#04x}")]
	UnsupportedMotion(u8),

	/// A key did not map to any known `g`-prefixed command.
	#[error("unsupported g-command key: {0:#04x}")]
	UnsupportedGCommand(u8),

	/// A key did not map to any known `z`-prefixed command.
	#[error("unsupported z-command key: {0:#04x}")]
	UnsupportedZCommand(u8),

	/// A motion was recognized but is not yet evaluated by `MotionEngine`.
	#[error("motion not implemented")]
	UnimplementedMotion,

	/// A register name key was not in `a-z`, `A-Z`, `+`, or `*`.
	#[error("unknown register: {0:#04x}")]
	UnknownRegister(u8),

	/// A macro slot key was not alphanumeric.
	#[error("unknown macro slot: {0:#04x}")]
	UnknownMacroSlot(u8),

	/// The builder in `WaitingForMotion` held a partial command that cannot
	/// carry a motion.
	#[error("invalid command pending while waiting for motion")]
	InvalidWaitingForMotionCommand,

	/// The builder in `WaitingForTarget` held a partial command that cannot
	/// carry a target.
	#[error("invalid command pending while waiting for target")]
	InvalidWaitingForTargetCommand,

	/// The builder in `WaitingForTarget` held a motion that does not take a
	/// target byte.
	#[error("invalid motion pending while waiting for target")]
	InvalidWaitingForTargetMotion,

	/// The builder in `WaitingForMark` held a partial command that cannot
	/// carry a mark.
	#[error("invalid command pending while waiting for mark")]
	InvalidWaitingForMarkCommand,

	/// The builder in `WaitingForMark` held a motion that does not take a
	/// mark slot.
	#[error("invalid motion pending while waiting for mark")]
	InvalidWaitingForMarkMotion,

	/// `WaitingForGCommand` was entered with a partial command shape it
	/// cannot resume.
	#[error("invalid state entering g-command")]
	InvalidGCommandState,

	/// The inner state machine of `WaitingForMotion` had no pending command
	/// to attach a motion to.
	#[error("no pending command while waiting for motion")]
	NoCommandWhenWaitingForMotion,

	/// The inner state machine of `WaitingForTarget` had no pending command
	/// to attach a target to.
	#[error("no pending command while waiting for target")]
	NoCommandWhenWaitingForTarget,
}
