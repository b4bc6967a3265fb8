use crate::app::state::FormCursor;
use crate::app::App;
use crate::resource::FieldKind;
use crate::ui::widgets::popup::{centered_rect, shortcut_line, ClearWidget};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// The create/edit modal over the current collection.
pub fn render_form(app: &App, cursor: &FormCursor, f: &mut Frame<'_>, area: Rect) {
    let Some(collection) = app.current_collection() else {
        return;
    };
    let panel = app.managers.panel(collection);

    let popup = centered_rect(70, 80, area);
    f.render_widget(ClearWidget, popup);

    let verb = if panel.draft_is_editing() {
        "Editar"
    } else {
        "Novo"
    };
    let block = Block::default()
        .title(format!(" {verb} · {} ", panel.title()))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(inner);

    let mut lines = Vec::new();
    for (index, (field, value)) in app.form_fields().into_iter().enumerate() {
        let selected = index == cursor.field_index;
        let label_style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if field.required { "*" } else { "" };

        let shown = if selected && cursor.editing {
            format!("{}_", cursor.input)
        } else {
            match field.kind {
                FieldKind::Choice(_) => format!("< {value} >"),
                FieldKind::Image => image_value(&value, panel.draft_image().as_deref()),
                _ => value,
            }
        };

        lines.push(TextLine::from(vec![
            Span::styled(format!("{}{marker}", field.label), label_style),
            Span::raw(": "),
            Span::styled(shown, Style::default().fg(Color::White)),
        ]));
    }

    f.render_widget(
        Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let hints = if cursor.editing {
        shortcut_line(&[("Enter", "Confirmar"), ("Esc", "Descartar")])
    } else {
        shortcut_line(&[
            ("↑/↓", "Campo"),
            ("Enter", "Editar"),
            ("←/→", "Opção"),
            ("i", "Imagem"),
            ("g", "Galeria"),
            ("s", "Salvar"),
            ("Esc", "Cancelar"),
        ])
    };
    f.render_widget(Paragraph::new(hints).wrap(Wrap { trim: true }), chunks[1]);
}

fn image_value(current: &str, pending: Option<&std::path::Path>) -> String {
    match pending {
        Some(path) => format!("{} (novo arquivo)", path.display()),
        None if current.is_empty() => "(nenhuma)".to_string(),
        None => current.to_string(),
    }
}
