use crate::actions::{Action, Outcome};
use crate::buffer::TextBuffer;
use crate::history::MetricsHistory;
use crate::metrics::{clean_text, compute_metrics, Metrics};
use crate::model::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Editing,
    Help,
}

/// Platform-agnostic application state
///
/// Front ends own an `App` and render from it; nothing here is global.
pub struct App {
    pub buffer: TextBuffer,
    pub metrics: Metrics,
    pub history: MetricsHistory,
    pub theme: Theme,
    pub mode: Mode,
    pub running: bool,

    // Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            metrics: Metrics::default(),
            history: MetricsHistory::new(),
            theme: Theme::default(),
            mode: Mode::Editing,
            running: true,
            status_message: None,
        }
    }

    pub fn with_theme(theme: Theme) -> Self {
        let mut app = Self::new();
        app.theme = theme;
        app
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Replace the text, e.g. after loading a file
    pub fn load_text(&mut self, text: impl Into<String>, label: &str) {
        self.buffer.set_text(text);
        self.refresh(label);
    }

    /// Recompute metrics for the current text and record a chart point
    pub fn refresh(&mut self, label: &str) {
        self.metrics = compute_metrics(self.buffer.text());
        self.history.record(label, &self.metrics);
    }

    /// Apply a user action; `label` names the chart point for any text change
    pub fn apply(&mut self, action: Action, label: &str) -> Outcome {
        if self.mode == Mode::Help {
            // Any key closes help
            self.mode = Mode::Editing;
            return Outcome::None;
        }

        match action {
            Action::Insert(c) => {
                self.buffer.insert_char(c);
                self.refresh(label);
            }
            Action::Newline => {
                self.buffer.insert_newline();
                self.refresh(label);
            }
            Action::Backspace => {
                if self.buffer.backspace() {
                    self.refresh(label);
                }
            }
            Action::Delete => {
                if self.buffer.delete() {
                    self.refresh(label);
                }
            }
            Action::MoveLeft => self.buffer.move_left(),
            Action::MoveRight => self.buffer.move_right(),
            Action::MoveUp => self.buffer.move_up(),
            Action::MoveDown => self.buffer.move_down(),
            Action::MoveHome => self.buffer.move_home(),
            Action::MoveEnd => self.buffer.move_end(),
            Action::Clear => self.clear_text(label),
            Action::Clean => {
                self.clean(label);
            }
            Action::Export => return Outcome::Export(self.buffer.text().to_string()),
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                self.set_status(&format!("Switched to {} theme", self.theme));
                return Outcome::ThemeChanged(self.theme);
            }
            Action::ToggleHelp => self.mode = Mode::Help,
            Action::Quit => self.running = false,
        }

        Outcome::None
    }

    /// Empty the text and start a fresh chart
    pub fn clear_text(&mut self, label: &str) {
        self.buffer.clear();
        self.refresh(label);
        self.history.clear();
        self.set_status("Cleared");
    }

    /// Normalize whitespace in the text; blank text is left alone
    pub fn clean(&mut self, label: &str) -> bool {
        if self.buffer.is_blank() {
            self.set_status("Nothing to clean");
            return false;
        }

        let cleaned = clean_text(self.buffer.text());
        self.buffer.set_text(cleaned);
        self.refresh(label);
        self.set_status("Text cleaned");
        true
    }

    /// Set status message
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Get content lines for rendering
    pub fn content_lines(&self) -> Vec<&str> {
        self.buffer.lines()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            let action = if c == '\n' { Action::Newline } else { Action::Insert(c) };
            app.apply(action, "t");
        }
    }

    #[test]
    fn test_metrics_follow_every_edit() {
        let mut app = App::new();
        type_text(&mut app, "Hi there.\n\nBye");

        assert_eq!(app.metrics.words, 3);
        assert_eq!(app.metrics.paragraphs, 2);

        app.apply(Action::Backspace, "t");
        assert_eq!(app.metrics.characters, 13);
    }

    #[test]
    fn test_cursor_moves_do_not_record_history() {
        let mut app = App::new();
        type_text(&mut app, "ab");
        let points = app.history.len();

        app.apply(Action::MoveLeft, "t");
        app.apply(Action::MoveHome, "t");
        assert_eq!(app.history.len(), points);
    }

    #[test]
    fn test_clear_resets_history() {
        let mut app = App::new();
        type_text(&mut app, "some words");
        app.apply(Action::Clear, "t");

        assert_eq!(app.text(), "");
        assert_eq!(app.metrics, Metrics::default());
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_clean_skips_blank_text() {
        let mut app = App::new();
        app.load_text("   \n ", "t");
        assert!(!app.clean("t"));
        assert_eq!(app.text(), "   \n ");

        app.load_text("  a   b \n\n\n c ", "t");
        assert!(app.clean("t"));
        assert_eq!(app.text(), "a b c");
        assert_eq!(app.metrics.words, 3);
    }

    #[test]
    fn test_clean_action_through_apply() {
        let mut app = App::new();
        app.load_text(" \t\n ", "t");
        assert_eq!(app.apply(Action::Clean, "t"), Outcome::None);
        assert_eq!(app.text(), " \t\n ");
        assert_eq!(app.status_message.as_deref(), Some("Nothing to clean"));

        app.load_text("one   two\n\n\n\nthree ", "t");
        assert_eq!(app.apply(Action::Clean, "t"), Outcome::None);
        assert_eq!(app.text(), "one two three");
        assert_eq!(app.metrics.paragraphs, 1);
        assert_eq!(app.status_message.as_deref(), Some("Text cleaned"));
    }

    #[test]
    fn test_export_returns_current_text() {
        let mut app = App::new();
        app.load_text("draft", "t");
        assert_eq!(app.apply(Action::Export, "t"), Outcome::Export("draft".to_string()));
    }

    #[test]
    fn test_theme_toggle_reports_change() {
        let mut app = App::with_theme(Theme::Dark);
        assert_eq!(app.apply(Action::ToggleTheme, "t"), Outcome::ThemeChanged(Theme::Light));
        assert_eq!(app.theme, Theme::Light);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = App::new();
        app.apply(Action::ToggleHelp, "t");
        assert_eq!(app.mode, Mode::Help);

        app.apply(Action::Insert('x'), "t");
        assert_eq!(app.mode, Mode::Editing);
        assert_eq!(app.text(), "");
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        app.apply(Action::Quit, "t");
        assert!(!app.running);
    }
}
