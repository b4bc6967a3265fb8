use crate::app::App;
use crate::ui::widgets::popup::shortcut_line;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_profile(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(" Meu Perfil ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(session) = app.session.current() else {
        f.render_widget(Paragraph::new("Sessão encerrada.").block(block), chunks[0]);
        return;
    };
    let Some(draft) = app.profile.as_ref() else {
        f.render_widget(Paragraph::new("Carregando perfil...").block(block), chunks[0]);
        return;
    };

    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::White);
    let photo = draft.photo_file.as_ref().map_or_else(
        || draft.photo.clone(),
        |path| format!("{} (novo arquivo)", path.display()),
    );

    let editable = [
        ("Nome", draft.name.clone()),
        ("Telefone", draft.phone.clone()),
        ("Foto", photo),
    ];
    let mut lines = vec![
        TextLine::from(vec![
            Span::styled("E-mail: ", label_style),
            Span::styled(session.user.email.clone(), value_style),
        ]),
        TextLine::from(vec![
            Span::styled("Cargo: ", label_style),
            Span::styled(session.member.role.as_str(), value_style),
        ]),
        TextLine::from(""),
    ];

    let cursor = &app.profile_cursor;
    for (index, (label, value)) in editable.into_iter().enumerate() {
        let selected = index == cursor.field_index;
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            label_style
        };
        let shown = if selected && cursor.editing {
            format!("{}_", cursor.input)
        } else {
            value
        };
        lines.push(TextLine::from(vec![
            Span::styled(label, style),
            Span::raw(": "),
            Span::styled(shown, value_style),
        ]));
    }

    f.render_widget(Paragraph::new(Text::from(lines)).block(block), chunks[0]);

    let mut shortcuts = vec![
        ("↑/↓", "Campo"),
        ("Enter", "Editar"),
        ("s", "Salvar"),
        ("o", "Sair da conta"),
    ];
    if session.is_admin {
        shortcuts.push(("Esc", "Painel"));
    }
    shortcuts.push(("q", "Fechar"));
    f.render_widget(Paragraph::new(shortcut_line(&shortcuts)), chunks[1]);
}
