use crate::app::state::Collection;
use crate::app::App;
use crate::ui::widgets::charts::{render_leadership_gauge, render_role_barchart, totals_lines};
use crate::ui::widgets::popup::shortcut_line;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(7)])
        .split(columns[0]);

    render_menu(app, f, left[0]);
    render_totals(app, f, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(5),
        ])
        .split(columns[1]);

    render_role_barchart(&app.dashboard.roles, f, right[0]);
    render_leadership_gauge(app.dashboard.leadership_percentage, f, right[1]);
    render_upcoming(app, f, right[2]);

    f.render_widget(
        Paragraph::new(shortcut_line(&[
            ("1-5", "Abrir"),
            ("r", "Atualizar"),
            ("x", "Exportar site"),
            ("p", "Perfil"),
            ("o", "Sair da conta"),
            ("?", "Ajuda"),
            ("q", "Fechar"),
        ])),
        rows[1],
    );
}

fn render_menu(app: &App, f: &mut Frame<'_>, area: Rect) {
    let lines = Collection::ALL
        .iter()
        .enumerate()
        .map(|(index, collection)| {
            let selected = index == app.dashboard_index;
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if selected { ">" } else { " " };
            TextLine::from(Span::styled(
                format!("{prefix} {} {}", index + 1, collection.label()),
                style,
            ))
        })
        .collect::<Vec<_>>();

    let block = Block::default()
        .title(" Painel Administrativo ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn render_totals(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Resumo")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    f.render_widget(
        Paragraph::new(Text::from(totals_lines(&app.dashboard))).block(block),
        area,
    );
}

fn render_upcoming(app: &App, f: &mut Frame<'_>, area: Rect) {
    let lines = if app.dashboard.upcoming_events.is_empty() {
        vec![TextLine::from(Span::styled(
            "Nenhum evento cadastrado",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        app.dashboard
            .upcoming_events
            .iter()
            .map(|event| {
                TextLine::from(vec![
                    Span::styled(
                        format!("{} {} ", event.date, event.time),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(event.title.clone()),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .title("Próximos Eventos")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
