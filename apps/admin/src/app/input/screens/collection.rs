use crate::app::actions::PendingAction;
use crate::app::input::helpers::{edit_text, navigate};
use crate::app::state::{App, Collection, PendingDelete};
use crossterm::event::KeyCode;

pub fn handle_collection_input(app: &mut App, collection: Collection, key: KeyCode) {
    if app.search_active {
        handle_search_input(app, collection, key);
        return;
    }

    let total = app.managers.panel(collection).rows().len();
    if let Some(index) = navigate(key, app.selected_index, total) {
        app.selected_index = index;
        return;
    }

    match key {
        KeyCode::Esc => app.leave_collection(),
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('r') => app.queue(PendingAction::Load(collection)),
        KeyCode::Char('n') => app.open_form(collection, None),
        KeyCode::Enter | KeyCode::Char('e') => {
            if let Some(id) = app.selected_id() {
                app.open_form(collection, Some(&id));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_id() {
                let prompt = app.managers.panel(collection).delete_prompt();
                app.confirm = Some(PendingDelete {
                    collection,
                    id,
                    prompt,
                });
            }
        }
        KeyCode::Char('t') if collection == Collection::Prayers => {
            if let Some(id) = app.selected_id() {
                app.queue(PendingAction::TogglePrayer(id));
            }
        }
        KeyCode::Char('f') => {
            app.managers.panel_mut(collection).cycle_category();
            app.selected_index = 0;
        }
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        _ => {}
    }
}

fn handle_search_input(app: &mut App, collection: Collection, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.managers.panel_mut(collection).filter_mut().query.clear();
            app.search_active = false;
        }
        KeyCode::Enter => app.search_active = false,
        _ => {
            edit_text(&mut app.managers.panel_mut(collection).filter_mut().query, key);
        }
    }
    app.selected_index = 0;
}
