use std::path::PathBuf;

use crate::app::actions::PendingAction;
use crate::app::input::helpers::edit_text;
use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_alert_input(app: &mut App, key: KeyCode) -> bool {
    if app.alert.is_none() {
        return false;
    }
    if matches!(key, KeyCode::Enter | KeyCode::Esc) {
        app.alert = None;
    }
    true
}

pub fn handle_confirm_input(app: &mut App, key: KeyCode) -> bool {
    let Some(pending) = app.confirm.as_ref() else {
        return false;
    };

    match key {
        KeyCode::Char('y' | 'Y' | 's' | 'S') | KeyCode::Enter => {
            let action = PendingAction::Delete {
                collection: pending.collection,
                id: pending.id.clone(),
            };
            app.confirm = None;
            app.queue(action);
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            app.confirm = None;
            app.status_message = "Exclusão cancelada.".to_string();
        }
        _ => {}
    }
    true
}

pub fn handle_path_prompt_input(app: &mut App, key: KeyCode) -> bool {
    let Some(prompt) = app.path_prompt.as_mut() else {
        return false;
    };

    match key {
        KeyCode::Esc => app.path_prompt = None,
        KeyCode::Enter => {
            let path = PathBuf::from(prompt.input.trim());
            let gallery = prompt.gallery;
            app.path_prompt = None;
            if path.as_os_str().is_empty() {
                return true;
            }
            if !path.is_file() {
                app.show_alert(format!("Arquivo não encontrado: {}", path.display()));
            } else if app.attach_image(path.clone(), gallery) {
                app.status_message = format!("Imagem selecionada: {}", path.display());
            }
        }
        _ => {
            edit_text(&mut prompt.input, key);
        }
    }
    true
}
