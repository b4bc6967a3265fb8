use crate::app::App;
use ieam_core::content::CHURCH_NAME;
use crate::ui::widgets::popup::{centered_box, shortcut_line, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_login(app: &App, f: &mut Frame<'_>, area: Rect) {
    let fields = [
        ("E-mail", app.login.email.clone()),
        ("Senha", mask(&app.login.password)),
    ];
    let shortcuts = [
        ("Tab", "Próximo campo"),
        ("Enter", "Entrar"),
        ("F2", "Cadastrar"),
        ("Esc", "Sair"),
    ];
    render_auth_box(app, f, area, " Entrar ", &fields, &shortcuts);
}

pub fn render_sign_up(app: &App, f: &mut Frame<'_>, area: Rect) {
    let form = &app.sign_up;
    let fields = [
        ("Nome", form.name.clone()),
        ("E-mail", form.email.clone()),
        ("Senha", mask(&form.password)),
        ("Confirmar senha", mask(&form.confirm_password)),
    ];
    let shortcuts = [
        ("Tab", "Próximo campo"),
        ("Enter", "Cadastrar"),
        ("Esc", "Voltar"),
    ];
    render_auth_box(app, f, area, " Criar conta ", &fields, &shortcuts);
}

fn render_auth_box(
    app: &App,
    f: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    fields: &[(&str, String)],
    shortcuts: &[(&'static str, &'static str)],
) {
    let height = u16::try_from(fields.len() * 2 + 7).unwrap_or(u16::MAX);
    let popup = centered_box(60, height, area);
    f.render_widget(ClearWidget, popup);

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        TextLine::from(Span::styled(
            CHURCH_NAME,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];

    for (index, (label, value)) in fields.iter().enumerate() {
        let active = index == app.auth_field;
        let label_style = if active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if active { "_" } else { "" };
        lines.push(TextLine::from(Span::styled(format!("{label}:"), label_style)));
        lines.push(TextLine::from(format!("  {value}{cursor}")));
    }

    lines.push(TextLine::from(""));
    lines.push(shortcut_line(shortcuts));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(paragraph, popup);
}

fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}
