use crate::app::state::Collection;
use crate::app::App;
use crate::ui::widgets::popup::shortcut_line;
use crate::ui::widgets::tables::render_record_table;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render_collection(app: &App, collection: Collection, f: &mut Frame<'_>, area: Rect) {
    let panel = app.managers.panel(collection);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(Paragraph::new(filter_line(app, collection)), chunks[0]);

    let rows = panel.rows();
    render_record_table(
        f,
        chunks[1],
        panel.title(),
        panel.columns(),
        &rows,
        app.selected_index,
    );

    let mut shortcuts = vec![
        ("n", "Novo"),
        ("Enter", "Editar"),
        ("d", "Excluir"),
        ("/", "Buscar"),
    ];
    if !panel.categories().is_empty() {
        shortcuts.push(("f", "Filtrar"));
    }
    if collection == Collection::Prayers {
        shortcuts.push(("t", "Marcar orado"));
    }
    shortcuts.extend([("r", "Recarregar"), ("Esc", "Voltar")]);
    f.render_widget(Paragraph::new(shortcut_line(&shortcuts)), chunks[2]);
}

fn filter_line(app: &App, collection: Collection) -> TextLine<'static> {
    let panel = app.managers.panel(collection);
    let filter = panel.filter();
    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    if !panel.categories().is_empty() {
        let category = filter
            .category
            .and_then(|index| panel.categories().get(index).copied())
            .unwrap_or("Todos");
        spans.push(Span::styled("Filtro: ", label_style));
        spans.push(Span::styled(category.to_string(), value_style));
        spans.push(Span::raw("   "));
    }

    spans.push(Span::styled("Busca: ", label_style));
    let cursor = if app.search_active { "_" } else { "" };
    spans.push(Span::styled(format!("{}{cursor}", filter.query), value_style));
    TextLine::from(spans)
}
