use crate::app::actions::PendingAction;
use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, Collection};
use crossterm::event::KeyCode;

pub fn handle_dashboard_input(app: &mut App, key: KeyCode) {
    let total = Collection::ALL.len();
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('r') => app.queue(PendingAction::Refresh),
        KeyCode::Char('x') => app.queue(PendingAction::Export),
        KeyCode::Char('o') => app.queue(PendingAction::SignOut),
        KeyCode::Char('p') => app.screen = crate::app::state::AppScreen::Profile,
        KeyCode::Up | KeyCode::BackTab => {
            app.dashboard_index = wrap_decrement(app.dashboard_index, total);
        }
        KeyCode::Down | KeyCode::Tab => {
            app.dashboard_index = wrap_increment(app.dashboard_index, total);
        }
        KeyCode::Enter => {
            if let Some(collection) = Collection::from_index(app.dashboard_index) {
                app.open_collection(collection);
            }
        }
        KeyCode::Char(digit @ '1'..='5') => {
            let index = digit as usize - '1' as usize;
            if let Some(collection) = Collection::from_index(index) {
                app.dashboard_index = index;
                app.open_collection(collection);
            }
        }
        _ => {}
    }
}
