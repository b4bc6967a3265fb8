use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows || max_visible_rows == 0 {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index + 1 - max_visible_rows;
    }

    0
}

/// Renders `(id, cells)` rows with the selected one highlighted.
pub fn render_record_table(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    columns: &[&str],
    rows: &[(String, Vec<String>)],
    selected_index: usize,
) {
    if rows.is_empty() {
        let block = Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("Nenhum registro encontrado.")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(columns.iter().map(|column| Cell::from(*column))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    // borders and header
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(rows.len(), max_visible_rows, selected_index);

    let visible = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, (_, cells))| {
            let style = if index == selected_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(cells.iter().map(|cell| Cell::from(cell.clone()))).style(style)
        });

    let widths = column_widths(columns.len());
    let table = Table::new(visible, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "{title} ({} de {})",
                    selected_index.min(rows.len() - 1) + 1,
                    rows.len()
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn column_widths(count: usize) -> Vec<Constraint> {
    let count = u32::try_from(count.max(1)).unwrap_or(1);
    (0..count).map(|_| Constraint::Ratio(1, count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
        assert_eq!(scroll_offset(30, 10, 3), 0);
        assert_eq!(scroll_offset(30, 10, 10), 1);
        assert_eq!(scroll_offset(30, 10, 29), 20);
        assert_eq!(scroll_offset(30, 0, 5), 0);
    }
}
