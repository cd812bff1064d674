// Centralised keybind predicates.
//
// Handlers refer to key actions by name rather than matching raw `KeyCode`
// patterns, so remapping a key touches only this file.

use crate::input::KeyCode;

pub fn is_quit(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('q'))
}

pub fn is_down(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Down | KeyCode::Char('j'))
}

pub fn is_up(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_page_down(code: &KeyCode) -> bool {
	matches!(code, KeyCode::PageDown | KeyCode::Char(' '))
}

pub fn is_page_up(code: &KeyCode) -> bool {
	matches!(code, KeyCode::PageUp)
}

pub fn is_home(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Home | KeyCode::Char('g'))
}

pub fn is_end(code: &KeyCode) -> bool {
	matches!(code, KeyCode::End | KeyCode::Char('G'))
}

pub fn is_toggle_side_panel(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('s'))
}

pub fn is_esc(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Esc)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn vi_keys_mirror_arrows() {
		assert!(is_down(&KeyCode::Char('j')) && is_down(&KeyCode::Down));
		assert!(is_up(&KeyCode::Char('k')) && is_up(&KeyCode::Up));
		assert!(!is_quit(&KeyCode::Char('Q')));
	}
}
