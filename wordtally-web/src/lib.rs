//! Word Tally Web - WebAssembly version of the text statistics tool
//!
//! This crate provides a browser-based version of Word Tally using Ratzilla
//! for terminal rendering in the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate};
use ratzilla::ratatui::Terminal;
use ratzilla::{
    event::{KeyCode, KeyEvent},
    DomBackend, WebRenderer,
};
use wasm_bindgen::prelude::*;

use wordtally_core::{export_date, prepare_export, Action, App, Outcome};

pub mod io;
mod ui;

/// Initialize the Word Tally web application
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger unavailable: {}", e).into());
    }

    let theme = match io::load_theme() {
        Ok(theme) => theme.unwrap_or_default(),
        Err(e) => {
            log::warn!("could not read theme: {:?}", e);
            Default::default()
        }
    };

    let mut app = App::with_theme(theme);
    app.refresh(&time_label());
    app.set_status("Start typing to see live counts. F1 for help");

    // Wrap in Rc<RefCell> for shared state
    let app_state = Rc::new(RefCell::new(app));

    // Create terminal with DOM backend
    let backend = DomBackend::new()
        .map_err(|e| JsValue::from_str(&format!("Failed to create backend: {:?}", e)))?;
    let mut terminal = Terminal::new(backend)
        .map_err(|e| JsValue::from_str(&format!("Failed to create terminal: {:?}", e)))?;

    // Set up keyboard handler
    terminal.on_key_event({
        let app_state_cloned = app_state.clone();
        move |event| {
            let Some(action) = map_key(&event) else {
                return;
            };

            let mut app = app_state_cloned.borrow_mut();
            app.clear_status();

            match app.apply(action, &time_label()) {
                Outcome::None => {}
                Outcome::Export(text) => export(&mut app, &text),
                Outcome::ThemeChanged(theme) => {
                    if let Err(e) = io::save_theme(theme) {
                        log::warn!("could not save theme: {:?}", e);
                    }
                }
            }
        }
    });

    // Draw loop
    terminal.draw_web(move |frame| {
        let app = app_state.borrow();
        ui::draw(frame, &app);
    });

    log::info!("Word Tally WASM initialized");

    Ok(())
}

fn export(app: &mut App, text: &str) {
    let Some(today) = today() else {
        app.set_status("Export failed: could not read the date");
        return;
    };

    match prepare_export(text, today) {
        Ok(export) => match io::download_text(&export.filename, &export.contents) {
            Ok(()) => app.set_status(&format!("Downloaded {}", export.filename)),
            Err(e) => app.set_status(&format!("Export failed: {:?}", e)),
        },
        Err(e) => app.set_status(&e.to_string()),
    }
}

fn today() -> Option<NaiveDate> {
    let millis = js_sys::Date::now() as i64;
    DateTime::from_timestamp_millis(millis).map(|now| export_date(&now))
}

fn time_label() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}:{:02}:{:02}",
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds()
    )
}

/// Translate a browser key event into an app action
///
/// Ctrl+T and Ctrl+H never reach the page, so the theme and help toggles
/// live on function keys here.
fn map_key(event: &KeyEvent) -> Option<Action> {
    let action = match event.code {
        KeyCode::Delete if event.ctrl => Action::Clear,
        KeyCode::Char('d') if event.ctrl => Action::Export,
        KeyCode::Char('l') if event.ctrl => Action::Clean,
        KeyCode::Char(_) if event.ctrl || event.alt => return None,
        KeyCode::F(1) => Action::ToggleHelp,
        KeyCode::F(2) => Action::ToggleTheme,

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

    fn key(code: KeyCode, ctrl: bool) -> KeyEvent {
        KeyEvent {
            code,
            ctrl,
            alt: false,
            shift: false,
        }
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(map_key(&key(KeyCode::Delete, true)), Some(Action::Clear));
        assert_eq!(map_key(&key(KeyCode::Char('d'), true)), Some(Action::Export));
        assert_eq!(map_key(&key(KeyCode::Char('l'), true)), Some(Action::Clean));
        assert_eq!(map_key(&key(KeyCode::F(1), false)), Some(Action::ToggleHelp));
        assert_eq!(map_key(&key(KeyCode::F(2), false)), Some(Action::ToggleTheme));
    }

    #[test]
    fn test_browser_reserved_chords_are_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('t'), true)), None);
        assert_eq!(map_key(&key(KeyCode::Char('h'), true)), None);
        let alt_x = KeyEvent {
            code: KeyCode::Char('x'),
            ctrl: false,
            alt: true,
            shift: false,
        };
        assert_eq!(map_key(&alt_x), None);
    }

    #[test]
    fn test_plain_keys_edit() {
        assert_eq!(map_key(&key(KeyCode::Char('d'), false)), Some(Action::Insert('d')));
        assert_eq!(map_key(&key(KeyCode::Delete, false)), Some(Action::Delete));
        assert_eq!(map_key(&key(KeyCode::Enter, false)), Some(Action::Newline));
        assert_eq!(map_key(&key(KeyCode::Tab, false)), Some(Action::Insert('\t')));
        assert_eq!(map_key(&key(KeyCode::Esc, false)), None);
    }
}
