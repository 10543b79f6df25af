use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color scheme for the interface
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Chart colors for a theme, as RGB triples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub text: (u8, u8, u8),
    pub grid: (u8, u8, u8),
    pub words: (u8, u8, u8),
    pub characters: (u8, u8, u8),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct ThemeParseError(pub String);

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette {
                text: (0x66, 0x66, 0x66),
                grid: (0xe6, 0xe6, 0xe6),
                words: (0x6a, 0x11, 0xcb),
                characters: (0xf5, 0x57, 0x6c),
            },
            Theme::Dark => Palette {
                text: (0xb0, 0xb0, 0xb0),
                grid: (0x3a, 0x3a, 0x3a),
                words: (0x9b, 0x59, 0xf0),
                characters: (0xf5, 0x57, 0x6c),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_palette_text_colors() {
        assert_eq!(Theme::Dark.palette().text, (0xb0, 0xb0, 0xb0));
        assert_eq!(Theme::Light.palette().text, (0x66, 0x66, 0x66));
    }
}
