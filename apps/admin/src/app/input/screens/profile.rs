use crate::app::actions::PendingAction;
use crate::app::input::helpers::{edit_text, wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, PathPrompt};
use crossterm::event::KeyCode;

/// Name, phone, photo.
pub const PROFILE_FIELDS: usize = 3;

pub fn handle_profile_input(app: &mut App, key: KeyCode) {
    if app.profile_cursor.editing {
        handle_profile_editing(app, key);
        return;
    }

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('o') => app.queue(PendingAction::SignOut),
        KeyCode::Char('s') => app.queue(PendingAction::SaveProfile),
        KeyCode::Esc if app.is_admin() => app.screen = AppScreen::Dashboard,
        KeyCode::Up | KeyCode::BackTab => {
            app.profile_cursor.field_index =
                wrap_decrement(app.profile_cursor.field_index, PROFILE_FIELDS);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.profile_cursor.field_index =
                wrap_increment(app.profile_cursor.field_index, PROFILE_FIELDS);
        }
        KeyCode::Enter => {
            let Some(draft) = app.profile.as_ref() else {
                return;
            };
            match app.profile_cursor.field_index {
                0 => app.profile_cursor.input = draft.name.clone(),
                1 => app.profile_cursor.input = draft.phone.clone(),
                _ => {
                    app.path_prompt = Some(PathPrompt::default());
                    return;
                }
            }
            app.profile_cursor.editing = true;
        }
        _ => {}
    }
}

fn handle_profile_editing(app: &mut App, key: KeyCode) {
    let cursor = &mut app.profile_cursor;
    match key {
        KeyCode::Esc => {
            cursor.editing = false;
            cursor.input.clear();
        }
        KeyCode::Enter => {
            let value = std::mem::take(&mut cursor.input);
            cursor.editing = false;
            if let Some(draft) = app.profile.as_mut() {
                match cursor.field_index {
                    0 => draft.name = value,
                    _ => draft.phone = value,
                }
            }
        }
        _ => {
            edit_text(&mut cursor.input, key);
        }
    }
}
