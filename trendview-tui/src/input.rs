//! Keyboard input dispatch: input line, then global keys, then tab-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, InputMode, Tab};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C quits from anywhere, including the input line.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    // 1. An open input line consumes everything.
    if app.input_mode != InputMode::Normal {
        handle_input_line(app, key);
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(tab) = Tab::from_index(c as usize - '1' as usize) {
                app.active_tab = tab;
            }
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_tab = app.active_tab.prev();
            } else {
                app.active_tab = app.active_tab.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_tab = app.active_tab.prev();
            return;
        }
        KeyCode::Char('r') => {
            app.refresh();
            return;
        }
        KeyCode::Char('s') | KeyCode::Char('/') => {
            open_input(app, InputMode::LoadSymbol);
            return;
        }
        _ => {}
    }

    // 3. Tab-specific keys.
    match app.active_tab {
        Tab::Watchlist => handle_watchlist_key(app, key),
        Tab::Assistant => handle_assistant_key(app, key),
        Tab::Overview | Tab::Forecast | Tab::Help => {}
    }
}

fn open_input(app: &mut AppState, mode: InputMode) {
    app.input_mode = mode;
    app.input.clear();
}

fn handle_input_line(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.input.clear();
        }
        KeyCode::Enter => {
            let text = std::mem::take(&mut app.input);
            let mode = app.input_mode;
            app.input_mode = InputMode::Normal;
            match mode {
                InputMode::LoadSymbol => app.load_symbol(&text),
                InputMode::AddSymbol => app.add_symbol(&text),
                InputMode::Chat => {
                    app.send_chat(&text);
                    // Keep chatting until Esc.
                    app.input_mode = InputMode::Chat;
                }
                InputMode::Normal => {}
            }
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            let is_symbol = matches!(app.input_mode, InputMode::LoadSymbol | InputMode::AddSymbol);
            if is_symbol && c.is_whitespace() {
                return;
            }
            app.input.push(c);
        }
        _ => {}
    }
}

fn handle_watchlist_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Enter => app.load_selected(),
        KeyCode::Char('a') => open_input(app, InputMode::AddSymbol),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        _ => {}
    }
}

fn handle_assistant_key(app: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('i') | KeyCode::Enter) {
        open_input(app, InputMode::Chat);
    }
}
