pub mod settings;
pub mod theme;

pub use settings::{Settings, SettingsError};
pub use theme::{Palette, Theme, ThemeParseError};
