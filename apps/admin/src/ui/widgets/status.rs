use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, WhichUse, BRAILLE_SIX};

/// Spinner while an action runs, otherwise the last status message.
pub fn render_status_bar(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(32)])
        .split(inner);

    if let Some(label) = app.busy_label {
        let throbber = Throbber::default()
            .label(label)
            .style(Style::default().fg(Color::Cyan))
            .throbber_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .throbber_set(BRAILLE_SIX)
            .use_type(WhichUse::Spin);
        f.render_stateful_widget(throbber, chunks[0], &mut app.throbber_state);
    } else {
        let message = Paragraph::new(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Green),
        ));
        f.render_widget(message, chunks[0]);
    }

    let who = app
        .session
        .current()
        .map_or_else(String::new, |session| session.user.email);
    f.render_widget(
        Paragraph::new(Span::styled(who, Style::default().fg(Color::Gray)))
            .alignment(ratatui::layout::Alignment::Right),
        chunks[1],
    );
}
