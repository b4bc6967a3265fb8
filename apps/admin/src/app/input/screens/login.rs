use crate::app::actions::PendingAction;
use crate::app::input::helpers::{edit_text, wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

const LOGIN_FIELDS: usize = 2;
const SIGN_UP_FIELDS: usize = 4;

pub fn handle_login_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.running = false,
        KeyCode::F(2) => {
            app.screen = AppScreen::SignUp;
            app.auth_field = 0;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.auth_field = wrap_increment(app.auth_field, LOGIN_FIELDS);
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.auth_field = wrap_decrement(app.auth_field, LOGIN_FIELDS);
        }
        KeyCode::Enter => app.queue(PendingAction::SignIn),
        _ => {
            let buffer = if app.auth_field == 0 {
                &mut app.login.email
            } else {
                &mut app.login.password
            };
            edit_text(buffer, key);
        }
    }
}

pub fn handle_sign_up_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::F(2) => {
            app.screen = AppScreen::Login;
            app.auth_field = 0;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.auth_field = wrap_increment(app.auth_field, SIGN_UP_FIELDS);
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.auth_field = wrap_decrement(app.auth_field, SIGN_UP_FIELDS);
        }
        KeyCode::Enter => app.queue(PendingAction::SignUp),
        _ => {
            let form = &mut app.sign_up;
            let buffer = match app.auth_field {
                0 => &mut form.name,
                1 => &mut form.email,
                2 => &mut form.password,
                _ => &mut form.confirm_password,
            };
            edit_text(buffer, key);
        }
    }
}
