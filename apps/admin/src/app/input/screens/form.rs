use crate::app::actions::PendingAction;
use crate::app::input::helpers::{cycle_choice, edit_text, wrap_decrement, wrap_increment};
use crate::app::state::{App, PathPrompt};
use crate::resource::FieldKind;
use crossterm::event::KeyCode;

pub fn handle_form_input(app: &mut App, key: KeyCode) {
    let Some(collection) = app.current_collection() else {
        app.form = None;
        return;
    };
    let fields = app.form_fields();
    let is_admin = app.is_admin();
    let Some(cursor) = app.form.as_mut() else {
        return;
    };

    if cursor.editing {
        match key {
            KeyCode::Esc => {
                cursor.editing = false;
                cursor.input.clear();
            }
            KeyCode::Enter => {
                let value = std::mem::take(&mut cursor.input);
                cursor.editing = false;
                if let Some((field, _)) = fields.get(cursor.field_index) {
                    app.managers
                        .panel_mut(collection)
                        .set_draft_field(field.key, &value, is_admin);
                }
            }
            _ => {
                edit_text(&mut cursor.input, key);
            }
        }
        return;
    }

    let selected = fields.get(cursor.field_index);
    match key {
        KeyCode::Esc => app.close_form(),
        KeyCode::Up | KeyCode::BackTab => {
            cursor.field_index = wrap_decrement(cursor.field_index, fields.len());
        }
        KeyCode::Down | KeyCode::Tab => {
            cursor.field_index = wrap_increment(cursor.field_index, fields.len());
        }
        KeyCode::Char('s') => app.queue(PendingAction::Submit(collection)),
        KeyCode::Char('i') => {
            app.path_prompt = Some(PathPrompt::default());
        }
        KeyCode::Char('g') => {
            app.path_prompt = Some(PathPrompt {
                gallery: true,
                input: String::new(),
            });
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
            let Some((field, value)) = selected else {
                return;
            };
            match field.kind {
                FieldKind::Choice(options) => {
                    let next = cycle_choice(options, value, key != KeyCode::Left);
                    app.managers
                        .panel_mut(collection)
                        .set_draft_field(field.key, &next, is_admin);
                }
                FieldKind::Toggle => {
                    let flipped = if value == "Sim" { "Não" } else { "Sim" };
                    app.managers
                        .panel_mut(collection)
                        .set_draft_field(field.key, flipped, is_admin);
                }
                FieldKind::Image if key == KeyCode::Enter => {
                    app.path_prompt = Some(PathPrompt::default());
                }
                _ if key == KeyCode::Enter => {
                    cursor.input = value.clone();
                    cursor.editing = true;
                }
                _ => {}
            }
        }
        _ => {}
    }
}
