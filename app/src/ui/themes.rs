use ratatui::style::{Color, Style};
use serde::Deserialize;

/// Base palette every runtime style is derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
}

impl Theme {
    pub fn dark() -> Self {
        Self { bg: Color::Rgb(11, 12, 13), fg: Color::Gray, accent: Color::Cyan }
    }

    pub fn light() -> Self {
        Self { bg: Color::White, fg: Color::Black, accent: Color::Blue }
    }

    pub fn style_fg(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Parse a `[palette]` table with `#rrggbb` colors. A file without a
    /// palette falls back to the dark theme.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        #[derive(Deserialize)]
        struct File {
            palette: Option<Pal>,
        }
        let file: File = toml::from_str(s)?;
        Ok(match file.palette {
            Some(p) => Self { bg: parse_hex(&p.bg), fg: parse_hex(&p.fg), accent: parse_hex(&p.accent) },
            None => Self::dark(),
        })
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_file_parses_hex_colors() {
        let t = Theme::from_toml("[palette]\nbg = \"#101112\"\nfg = \"#eeeeee\"\naccent = \"#ff8800\"\n").unwrap();
        assert_eq!(t.bg, Color::Rgb(0x10, 0x11, 0x12));
        assert_eq!(t.accent, Color::Rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn bad_hex_resets() {
        assert_eq!(parse_hex("#12"), Color::Reset);
        assert_eq!(Theme::from_toml("").unwrap(), Theme::dark());
    }
}
