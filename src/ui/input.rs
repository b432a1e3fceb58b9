use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::route::Route;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.route() {
        Route::List if app.list_state().search_mode => handle_search_key(app, key, Instant::now()),
        Route::List => handle_list_key(app, key),
        Route::Product(_) => handle_detail_key(app, key),
        Route::Favorites => handle_favorites_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Esc => app.exit_search(),
        KeyCode::Backspace => app.search_backspace(now),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.type_search(ch, now)
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.enter_search(),
        KeyCode::Char('c') => app.cycle_category(true),
        KeyCode::Char('C') => app.cycle_category(false),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('f') => app.navigate(Route::Favorites),
        KeyCode::Char('r') => {
            app.request_products();
        }
        KeyCode::Char(' ') => app.toggle_current_favorite(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.increment_quantity(),
        KeyCode::Char('-') => app.decrement_quantity(),
        KeyCode::Char(' ') => app.toggle_current_favorite(),
        KeyCode::Char('f') => app.navigate(Route::Favorites),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }
}

fn handle_favorites_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(true),
        KeyCode::Enter => app.open_selected_favorite(),
        KeyCode::Char(' ') | KeyCode::Char('d') => app.remove_selected_favorite(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
