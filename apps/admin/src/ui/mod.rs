// UI module for the admin dashboard
// Renders the current screen, then overlays and the status bar

pub mod screens;
pub mod widgets;

use crate::app::{App, AppScreen};
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::Frame;
use widgets::popup::{render_alert, render_confirm, render_path_prompt};

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(f.area().inner(Margin::new(1, 0)));

    match app.screen {
        AppScreen::Login => screens::login::render_login(app, f, chunks[0]),
        AppScreen::SignUp => screens::login::render_sign_up(app, f, chunks[0]),
        AppScreen::Dashboard => screens::dashboard::render_dashboard(app, f, chunks[0]),
        AppScreen::Collection(collection) => {
            screens::collection::render_collection(app, collection, f, chunks[0]);
        }
        AppScreen::Profile => screens::profile::render_profile(app, f, chunks[0]),
    }

    if let Some(cursor) = app.form.as_ref() {
        screens::form::render_form(app, cursor, f, chunks[0]);
    }
    if let Some(prompt) = app.path_prompt.as_ref() {
        render_path_prompt(f, &prompt.input, prompt.gallery);
    }
    if let Some(pending) = app.confirm.as_ref() {
        render_confirm(f, pending.prompt);
    }
    if app.show_help {
        screens::help::render_help_popup(f, chunks[0]);
    }
    if let Some(message) = app.alert.as_deref() {
        render_alert(f, message);
    }

    widgets::status::render_status_bar(app, f, chunks[1]);
}
