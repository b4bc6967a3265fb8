use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod collection;
mod dashboard;
mod form;
mod help;
mod login;
mod overlays;
mod profile;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if app.busy_label.is_some() {
        return;
    }

    if overlays::handle_alert_input(app, key) {
        return;
    }

    if help::handle_help_toggle(app, key) {
        return;
    }

    if overlays::handle_confirm_input(app, key) {
        return;
    }

    if overlays::handle_path_prompt_input(app, key) {
        return;
    }

    if app.form.is_some() {
        form::handle_form_input(app, key);
        return;
    }

    match app.screen {
        AppScreen::Login => login::handle_login_input(app, key),
        AppScreen::SignUp => login::handle_sign_up_input(app, key),
        AppScreen::Dashboard => dashboard::handle_dashboard_input(app, key),
        AppScreen::Collection(collection) => {
            collection::handle_collection_input(app, collection, key);
        }
        AppScreen::Profile => profile::handle_profile_input(app, key),
    }
}

/// Whether keys are currently going into a text field.
pub fn is_typing(app: &App) -> bool {
    matches!(app.screen, AppScreen::Login | AppScreen::SignUp)
        || app.search_active
        || app.path_prompt.is_some()
        || app.form.as_ref().is_some_and(|cursor| cursor.editing)
        || (app.screen == AppScreen::Profile && app.profile_cursor.editing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::PendingAction;
    use crate::app::state::Collection;
    use crate::config::AppConfig;

    fn app() -> Result<App, Box<dyn std::error::Error>> {
        Ok(App::new(AppConfig::from_lookup(|_| None)?))
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            dispatch_input(app, *key);
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            dispatch_input(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn login_collects_fields_and_queues_sign_in() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        type_text(&mut app, "ana@x.com");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "s3?nha");
        press(&mut app, &[KeyCode::Enter]);

        assert_eq!(app.login.email, "ana@x.com");
        assert_eq!(app.login.password, "s3?nha");
        assert!(!app.show_help);
        assert_eq!(app.pending, Some(PendingAction::SignIn));
        Ok(())
    }

    #[test]
    fn alert_blocks_other_input_until_dismissed() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.screen = AppScreen::Dashboard;
        app.show_alert("Erro ao salvar evento.");

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.running);
        press(&mut app, &[KeyCode::Enter]);
        assert!(app.alert.is_none());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(!app.running);
        Ok(())
    }

    #[test]
    fn delete_requires_confirmation() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.open_collection(Collection::Events);
        app.pending = None;
        let ticket = app.managers.events.begin_load();
        app.managers.events.finish_load(
            ticket,
            Ok(vec![ieam_core::Document::new("e1", ieam_core::Event::default())]),
        );

        press(&mut app, &[KeyCode::Char('d')]);
        let prompt = app.confirm.as_ref().map(|c| c.prompt);
        assert_eq!(prompt, Some("Tem certeza que deseja excluir este evento?"));

        press(&mut app, &[KeyCode::Char('n')]);
        assert!(app.confirm.is_none());
        assert_eq!(app.pending, None);

        press(&mut app, &[KeyCode::Char('d'), KeyCode::Char('y')]);
        assert_eq!(
            app.pending,
            Some(PendingAction::Delete {
                collection: Collection::Events,
                id: "e1".to_string()
            })
        );
        Ok(())
    }

    #[test]
    fn form_edits_fields_and_saves() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.open_collection(Collection::Events);
        app.pending = None;

        press(&mut app, &[KeyCode::Char('n'), KeyCode::Enter]);
        type_text(&mut app, "Vigília");
        press(&mut app, &[KeyCode::Enter]);

        let title = app
            .managers
            .events
            .draft()
            .map(|draft| draft.record.title.clone());
        assert_eq!(title.as_deref(), Some("Vigília"));

        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.pending, Some(PendingAction::Submit(Collection::Events)));
        Ok(())
    }
}
