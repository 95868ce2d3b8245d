use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use crave_core::ViewMode;
use crate::app::{App, InputMode};
use crate::tui::AppEvent;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Shared line editing for the search box and the chat input.
/// Returns true when the key was consumed.
fn edit_line(input: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.clear();
            *cursor = 0;
        }
        KeyCode::Char(c) => {
            let byte_pos = char_to_byte_index(input, *cursor);
            input.insert(byte_pos, c);
            *cursor += 1;
        }
        KeyCode::Backspace => {
            if *cursor > 0 {
                *cursor -= 1;
                let byte_pos = char_to_byte_index(input, *cursor);
                input.remove(byte_pos);
            }
        }
        KeyCode::Delete => {
            if *cursor < input.chars().count() {
                let byte_pos = char_to_byte_index(input, *cursor);
                input.remove(byte_pos);
            }
        }
        KeyCode::Left => *cursor = cursor.saturating_sub(1),
        KeyCode::Right => *cursor = (*cursor + 1).min(input.chars().count()),
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = input.chars().count(),
        _ => return false,
    }
    true
}

pub async fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize => {}
        AppEvent::Tick => app.on_tick(),
        AppEvent::Clock => app.on_clock(),
        AppEvent::Fetched { generation, recipes } => {
            app.on_fetched(generation, recipes);
        }
        AppEvent::Hydrated { id, recipe } => app.on_hydrated(&id, recipe),
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Any keypress dismisses the last status message
    app.status = None;

    // Overlays capture input, topmost first
    if app.chat_open {
        handle_chat(app, key);
    } else if app.cook.is_some() {
        handle_cook(app, key);
    } else if app.detail.is_some() {
        handle_detail(app, key);
    } else {
        match app.input_mode {
            InputMode::Editing => handle_search_editing(app, key),
            InputMode::Normal => handle_grid(app, key),
        }
    }
}

fn handle_grid(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => app.should_quit = true,

        // Grid navigation
        KeyCode::Char('j') | KeyCode::Down => app.grid_down(),
        KeyCode::Char('k') | KeyCode::Up => app.grid_up(),
        KeyCode::Char('l') | KeyCode::Right => app.grid_right(),
        KeyCode::Char('h') | KeyCode::Left => app.grid_left(),
        KeyCode::Char('g') | KeyCode::Home => app.grid_first(),
        KeyCode::Char('G') | KeyCode::End => app.grid_last(),

        // Open recipe
        KeyCode::Enter => app.open_selected(),

        // Favorite the selected card
        KeyCode::Char('f') => app.toggle_favorite_selected(),

        // Search
        KeyCode::Char('/') | KeyCode::Char('i') => {
            app.input_mode = InputMode::Editing;
            app.search_cursor = app.search_input.chars().count();
        }

        // Category chips (browse only)
        KeyCode::Tab if app.view == ViewMode::Browse => app.cycle_category(true),
        KeyCode::BackTab if app.view == ViewMode::Browse => app.cycle_category(false),
        KeyCode::Char('x') if app.selected_category.is_some() => app.clear_filter(),

        // Views
        KeyCode::Char('v') => app.toggle_favorites_view(),
        KeyCode::Char('H') => app.go_home(),
        KeyCode::Esc if app.view == ViewMode::Favorites => app.toggle_favorites_view(),

        // Chef Bot
        KeyCode::Char('a') => app.toggle_chat(),

        _ => {}
    }
}

fn handle_search_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            app.submit_search();
        }
        _ => {
            edit_line(&mut app.search_input, &mut app.search_cursor, key);
        }
    }
}

fn handle_detail(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => app.close_detail(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_detail_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_detail_up(1),
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_detail_down(10)
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.scroll_detail_up(10)
        }
        KeyCode::PageDown => app.scroll_detail_down(10),
        KeyCode::PageUp => app.scroll_detail_up(10),
        KeyCode::Char('g') => app.detail_scroll = 0,
        KeyCode::Char('f') => app.toggle_favorite_detail(),
        KeyCode::Char('s') => app.share_detail(),
        KeyCode::Char('c') | KeyCode::Enter => app.start_cook(),
        KeyCode::Char('a') => app.toggle_chat(),
        _ => {}
    }
}

fn handle_cook(app: &mut App, key: KeyEvent) {
    // Digit keys start the matching timer preset
    if let KeyCode::Char(c) = key.code {
        if let Some(n) = c.to_digit(10) {
            if n >= 1 {
                app.start_timer_preset(n as usize - 1);
            }
            return;
        }
    }

    let Some(cook) = app.cook.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_cook(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('n') => {
            cook.next()
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('p') => cook.prev(),
        KeyCode::Char('x') => cook.timer.cancel(),
        KeyCode::Char('a') => app.toggle_chat(),
        _ => {}
    }
}

fn handle_chat(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.toggle_chat(),
        KeyCode::Enter => app.submit_chat(),
        _ => {
            edit_line(&mut app.chat_input, &mut app.chat_cursor, key);
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            if app.detail.is_some() && app.cook.is_none() {
                app.scroll_detail_down(3);
            } else if app.detail.is_none() {
                app.grid_down();
            }
        }
        MouseEventKind::ScrollUp => {
            if app.detail.is_some() && app.cook.is_none() {
                app.scroll_detail_up(3);
            } else if app.detail.is_none() {
                app.grid_up();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_edit_line_handles_multibyte() {
        let mut input = String::new();
        let mut cursor = 0;
        for c in "crème".chars() {
            edit_line(&mut input, &mut cursor, key(KeyCode::Char(c)));
        }
        assert_eq!(input, "crème");
        assert_eq!(cursor, 5);

        edit_line(&mut input, &mut cursor, key(KeyCode::Left));
        edit_line(&mut input, &mut cursor, key(KeyCode::Left));
        edit_line(&mut input, &mut cursor, key(KeyCode::Backspace));
        assert_eq!(input, "crme");
        assert_eq!(cursor, 2);

        edit_line(&mut input, &mut cursor, key(KeyCode::Delete));
        assert_eq!(input, "cre");
    }

    #[test]
    fn test_edit_line_ignores_unbound_keys() {
        let mut input = "pie".to_string();
        let mut cursor = 3;
        assert!(!edit_line(&mut input, &mut cursor, key(KeyCode::Enter)));
        assert_eq!(input, "pie");
    }
}
