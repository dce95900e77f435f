use crate::ui::app::App;
use crate::ui::form::FormIntent;
use crate::ui::pages::users::UserSort;
use crate::ui::pages::Page;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.confirm().is_visible() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_accept(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.confirm_cancel(),
            _ => {}
        }
        return;
    }

    if app.form_active() {
        handle_form_key(app, key);
        return;
    }

    if app.is_searching() {
        match key.code {
            KeyCode::Esc => app.stop_search(true),
            KeyCode::Enter => app.stop_search(false),
            KeyCode::Backspace => app.search_backspace(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search_input(ch)
            }
            _ => {}
        }
        return;
    }

    handle_page_key(app, key);
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.leave_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.form_intent(FormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.form_intent(FormIntent::FocusPrev),
        KeyCode::Left | KeyCode::Right => app.form_intent(FormIntent::Cycle),
        KeyCode::Backspace => app.form_intent(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_intent(FormIntent::Insert(ch))
        }
        _ => {}
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) {
    let page = app.page();
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char(ch @ '1'..='9') => {
            if let Some(target) = Page::from_hotkey(ch) {
                app.navigate(target);
            }
        }
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('j') | KeyCode::Down => app.move_selection(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_selection(-1),
        KeyCode::Tab | KeyCode::Right => app.next_tab(true),
        KeyCode::BackTab | KeyCode::Left => app.next_tab(false),
        KeyCode::Char(']') | KeyCode::PageDown => app.turn_page(true),
        KeyCode::Char('[') | KeyCode::PageUp => app.turn_page(false),
        KeyCode::Char('m') => app.load_more(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('i') => app.focus_inline_form(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('e') if page == Page::Users => app.sort_users(UserSort::Email),
        KeyCode::Char('c') if page == Page::Users => app.sort_users(UserSort::Created),
        KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Char('n') => app.new_record(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('f') => app.advance_fulfillment(),
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
