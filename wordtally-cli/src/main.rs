//! Word Tally CLI - Terminal-based word and character counter

mod io;
mod ui;

use std::io::stdout;
use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{Local, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use wordtally_core::{clean_text, export_date, Action, App, Outcome, Settings};

const USAGE: &str = "usage: wordtally [FILE] | --stats FILE | --clean FILE";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--stats") => print_stats(args.get(1)),
        Some("--clean") => print_clean(args.get(1)),
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            Ok(())
        }
        Some(flag) if flag.starts_with("--") => bail!("unknown option {}\n{}", flag, USAGE),
        file_path => run_tui(file_path),
    }
}

fn print_stats(file_path: Option<&String>) -> Result<()> {
    let Some(path) = file_path else {
        bail!(USAGE);
    };
    let text = io::load_file(path)?;
    println!("{}", wordtally_core::to_json(&text)?);
    Ok(())
}

fn print_clean(file_path: Option<&String>) -> Result<()> {
    let Some(path) = file_path else {
        bail!(USAGE);
    };
    let text = io::load_file(path)?;
    println!("{}", clean_text(&text));
    Ok(())
}

fn run_tui(file_path: Option<&str>) -> Result<()> {
    // Settings are optional; without a home directory we just don't persist
    let config_dir = match io::wordtally_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            log::warn!("settings disabled: {:#}", e);
            None
        }
    };
    let settings = config_dir
        .as_deref()
        .map(io::load_settings)
        .unwrap_or_default();

    let mut app = App::with_theme(settings.theme);
    app.refresh(&time_label());

    if let Some(path) = file_path {
        match io::load_file(path) {
            Ok(text) => {
                app.load_text(text, &time_label());
                app.set_status(&format!("Loaded {}", path));
            }
            Err(e) => {
                app.set_status(&format!("Error: {}", e));
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app, config_dir);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = res {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config_dir: Option<PathBuf>,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(action) = map_key(key) else {
                continue;
            };

            // Clear status on any key
            app.clear_status();

            match app.apply(action, &time_label()) {
                Outcome::None => {}
                Outcome::Export(text) => export(app, &text, config_dir.as_deref()),
                Outcome::ThemeChanged(theme) => {
                    if let Some(dir) = config_dir.as_deref() {
                        if let Err(e) = io::save_settings(dir, &Settings { theme }) {
                            app.set_status(&format!("Could not save theme: {}", e));
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn export(app: &mut App, text: &str, config_dir: Option<&std::path::Path>) {
    let Some(dir) = config_dir else {
        app.set_status("Export failed: no home directory");
        return;
    };

    match io::export_text(dir, text, export_date(&Utc::now())) {
        Ok(path) => app.set_status(&format!("Exported to {}", path.display())),
        Err(e) => app.set_status(&format!("{}", e)),
    }
}

fn time_label() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Translate a key press into an app action
fn map_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let action = match key.code {
        KeyCode::Delete if ctrl => Action::Clear,
        KeyCode::Char('d') if ctrl => Action::Export,
        KeyCode::Char('l') if ctrl => Action::Clean,
        KeyCode::Char('t') if ctrl => Action::ToggleTheme,
        KeyCode::Char('h') if ctrl => Action::ToggleHelp,
        KeyCode::Char('q') if ctrl => Action::Quit,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::F(1) => Action::ToggleHelp,
        KeyCode::F(2) => Action::ToggleTheme,
        KeyCode::Esc => Action::Quit,

        KeyCode::Char(c) => Action::Insert(c),
        KeyCode::Tab => Action::Insert('\t'),
        KeyCode::Enter => Action::Newline,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,

        // Navigation
        KeyCode::Left => Action::MoveLeft,
        KeyCode::Right => Action::MoveRight,
        KeyCode::Up => Action::MoveUp,
        KeyCode::Down => Action::MoveDown,
        KeyCode::Home => Action::MoveHome,
        KeyCode::End => Action::MoveEnd,

        _ => return None,
    };

    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(map_key(key(KeyCode::Delete, KeyModifiers::CONTROL)), Some(Action::Clear));
        assert_eq!(map_key(key(KeyCode::Char('d'), KeyModifiers::CONTROL)), Some(Action::Export));
        assert_eq!(map_key(key(KeyCode::Char('l'), KeyModifiers::CONTROL)), Some(Action::Clean));
        assert_eq!(map_key(key(KeyCode::Char('t'), KeyModifiers::CONTROL)), Some(Action::ToggleTheme));
        assert_eq!(map_key(key(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
    }

    #[test]
    fn test_help_theme_and_quit_keys() {
        assert_eq!(map_key(key(KeyCode::F(1), KeyModifiers::NONE)), Some(Action::ToggleHelp));
        assert_eq!(map_key(key(KeyCode::Char('h'), KeyModifiers::CONTROL)), Some(Action::ToggleHelp));
        assert_eq!(map_key(key(KeyCode::F(2), KeyModifiers::NONE)), Some(Action::ToggleTheme));
        assert_eq!(map_key(key(KeyCode::Esc, KeyModifiers::NONE)), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Char('q'), KeyModifiers::CONTROL)), Some(Action::Quit));
        assert_eq!(map_key(key(KeyCode::Char('q'), KeyModifiers::NONE)), Some(Action::Insert('q')));
    }

    #[test]
    fn test_plain_keys_edit() {
        assert_eq!(map_key(key(KeyCode::Char('d'), KeyModifiers::NONE)), Some(Action::Insert('d')));
        assert_eq!(map_key(key(KeyCode::Char('D'), KeyModifiers::SHIFT)), Some(Action::Insert('D')));
        assert_eq!(map_key(key(KeyCode::Delete, KeyModifiers::NONE)), Some(Action::Delete));
        assert_eq!(map_key(key(KeyCode::Enter, KeyModifiers::NONE)), Some(Action::Newline));
    }
}
