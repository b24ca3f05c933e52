//! Keystroke representation.
//!
//! Unlike the teacher's `KeyEvent`/`KeyCode`, a [`Key`] carries no grapheme
//! decoding and no named-key variants: the core's grammar only ever matches
//! on a single byte plus modifier flags (see module docs on [`crate::parser`]).

bitflags::bitflags! {
	/// Modifier flags accompanying a [`Key`].
	#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Default)]
	pub struct KeyModifiers: u8 {
		const LEFT_CTRL   = 1 << 0;
		const LEFT_ALT    = 1 << 1;
		const RIGHT_CTRL  = 1 << 2;
		const RIGHT_ALT   = 1 << 3;
	}
}

/// The sentinel byte for the escape key; terminates insert mode.
pub const ESCAPE: u8 = 0x1B;

/// A single keystroke: one byte plus which modifiers were held.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub struct Key {
	pub code: u8,
	pub left_ctrl: bool,
	pub left_alt: bool,
	pub right_ctrl: bool,
	pub right_alt: bool,
}

impl Key {
	/// A plain key with no modifiers held.
	pub fn plain(code: u8) -> Self {
		Self { code, ..Default::default() }
	}

	/// A key with the left control modifier held.
	pub fn left_ctrl(code: u8) -> Self {
		Self { code, left_ctrl: true, ..Default::default() }
	}

	pub fn modifiers(self) -> KeyModifiers {
		let mut m = KeyModifiers::empty();
		if self.left_ctrl {
			m |= KeyModifiers::LEFT_CTRL;
		}
		if self.left_alt {
			m |= KeyModifiers::LEFT_ALT;
		}
		if self.right_ctrl {
			m |= KeyModifiers::RIGHT_CTRL;
		}
		if self.right_alt {
			m |= KeyModifiers::RIGHT_ALT;
		}
		m
	}

	pub fn is_escape(self) -> bool {
		self.code == ESCAPE
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_key_has_no_modifiers() {
		let k = Key::plain(b'w');
		assert_eq!(k.modifiers(), KeyModifiers::empty());
	}

	#[test]
	fn left_ctrl_key_reports_modifier() {
		let k = Key::left_ctrl(b'r');
		assert!(k.modifiers().contains(KeyModifiers::LEFT_CTRL));
		assert!(!k.modifiers().contains(KeyModifiers::RIGHT_CTRL));
	}

	#[test]
	fn escape_sentinel() {
		assert!(Key::plain(0x1B).is_escape());
		assert!(!Key::plain(b'a').is_escape());
	}
}
