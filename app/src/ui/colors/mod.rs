use ratatui::style::{Modifier, Style};
use crate::ui::Theme;
use once_cell::sync::Lazy;
use std::sync::Mutex;
use tracing::warn;

#[derive(Clone, Debug)]
pub struct Colors {
	pub nav_style: Style,
	pub nav_active_style: Style,
	pub toggle_style: Style,
	pub section_block_style: Style,
	pub section_active_block_style: Style,
	pub card_style: Style,
	pub card_title_style: Style,
	pub price_style: Style,
	pub image_style: Style,
	pub side_panel_style: Style,
	pub footer_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::dark())));

/// Select a theme by name (`dark`, `light`) or by path to a TOML palette.
/// Unknown names and unreadable files keep the current colors.
pub fn set_theme(name: &str) {
	match name {
		"dark" => set_from_theme(&Theme::dark()),
		"light" => set_from_theme(&Theme::light()),
		path if path.ends_with(".toml") => match std::fs::read_to_string(path) {
			Ok(text) => match Theme::from_toml(&text) {
				Ok(theme) => set_from_theme(&theme),
				Err(e) => warn!("invalid theme file {}: {}", path, e),
			},
			Err(e) => warn!("cannot read theme file {}: {}", path, e),
		},
		other => warn!("unknown theme `{}`", other),
	}
}

fn derive(theme: &Theme) -> Colors {
	let base = theme.style_fg();
	Colors {
		nav_style: base,
		nav_active_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
		toggle_style: base.fg(theme.accent),
		section_block_style: base,
		section_active_block_style: base.fg(theme.accent),
		card_style: base,
		card_title_style: base.add_modifier(Modifier::BOLD),
		price_style: base.fg(theme.accent),
		image_style: base.add_modifier(Modifier::DIM),
		side_panel_style: Style::default().fg(theme.bg).bg(theme.fg),
		footer_style: base.add_modifier(Modifier::REVERSED),
	}
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
	let colors = derive(theme);
	match CURRENT.lock() {
		Ok(mut g) => *g = colors,
		Err(poisoned) => *poisoned.into_inner() = colors,
	}
}

pub fn current() -> Colors {
	match CURRENT.lock() {
		Ok(g) => g.clone(),
		Err(poisoned) => poisoned.into_inner().clone(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn active_entry_is_highlighted_with_accent() {
		let c = derive(&Theme::light());
		assert_eq!(c.nav_active_style.fg, Some(Theme::light().accent));
		assert!(c.nav_active_style.add_modifier.contains(Modifier::BOLD));
	}
}
