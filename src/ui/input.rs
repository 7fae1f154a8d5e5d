use crate::ui::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if matches!(app.input_mode(), InputMode::ImagePath { .. }) {
        handle_path_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::BackTab => app.move_focus(-1),
        KeyCode::Down | KeyCode::Tab => app.move_focus(1),
        KeyCode::Left => app.move_cursor(-1),
        KeyCode::Right => app.move_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        KeyCode::Char('u') => app.begin_image_path(),
        KeyCode::Char('s') => {
            app.use_sample_image();
        }
        KeyCode::Char('x') => {
            app.clear_image();
        }
        KeyCode::Char('r') => {
            app.retry_upload();
        }
        KeyCode::Char('g') => {
            app.submit();
        }
        KeyCode::Char('d') => app.dismiss_failure(),
        _ => {}
    }
}

fn handle_path_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.confirm_image_path();
        }
        KeyCode::Esc => app.cancel_image_path(),
        KeyCode::Backspace => app.pop_path_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_path_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
