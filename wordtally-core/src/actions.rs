use crate::model::Theme;

/// A user intent, independent of how the front end received it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveHome,
    MoveEnd,
    Clear,
    Clean,
    Export,
    ToggleTheme,
    ToggleHelp,
    Quit,
}

/// Side effects the front end has to carry out after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    None,
    /// The text should be exported; blank text is rejected by `prepare_export`
    Export(String),
    /// The theme changed and should be persisted
    ThemeChanged(Theme),
}
