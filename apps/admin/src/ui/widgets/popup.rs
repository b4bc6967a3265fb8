use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use ratatui::Frame;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

/// A popup of fixed height, centered horizontally by percentage.
pub fn centered_box(percent_x: u16, height: u16, area: Rect) -> Rect {
    let rect = centered_rect(percent_x, 100, area);
    let height = height.min(area.height);
    Rect {
        x: rect.x,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: rect.width,
        height,
    }
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

pub fn render_alert(f: &mut Frame<'_>, message: &str) {
    let area = centered_box(50, 7, f.area());
    f.render_widget(ClearWidget, area);

    let block = Block::default()
        .title(" Aviso ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let text = Text::from(vec![
        TextLine::from(message.to_string()),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Enter: OK",
            Style::default().fg(Color::Gray),
        )),
    ]);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub fn render_confirm(f: &mut Frame<'_>, prompt: &str) {
    let area = centered_box(50, 7, f.area());
    f.render_widget(ClearWidget, area);

    let block = Block::default()
        .title(" Confirmar ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text = Text::from(vec![
        TextLine::from(prompt.to_string()),
        TextLine::from(""),
        TextLine::from(vec![
            Span::styled("y", key_style),
            Span::raw(": Excluir   "),
            Span::styled("n", key_style),
            Span::raw(": Cancelar"),
        ]),
    ]);

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub fn render_path_prompt(f: &mut Frame<'_>, input: &str, gallery: bool) {
    let area = centered_box(60, 5, f.area());
    f.render_widget(ClearWidget, area);

    let title = if gallery {
        " Adicionar imagem à galeria "
    } else {
        " Selecionar imagem "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let text = Text::from(vec![
        TextLine::from(vec![
            Span::styled("Caminho: ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{input}_"), Style::default().fg(Color::White)),
        ]),
        TextLine::from(Span::styled(
            "Enter: anexar   Esc: cancelar",
            Style::default().fg(Color::Gray),
        )),
    ]);

    f.render_widget(Paragraph::new(text).block(block), area);
}

/// Key hints in the `key: description` style used across the screens.
pub fn shortcut_line(shortcuts: &[(&'static str, &'static str)]) -> TextLine<'static> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(shortcuts.len() * 2);
    for (key, description) in shortcuts {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(format!(": {description}   ")));
    }
    TextLine::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_box_stays_inside_the_area() {
        let area = Rect::new(0, 0, 100, 20);
        let popup = centered_box(50, 7, area);
        assert_eq!(popup.height, 7);
        assert_eq!(popup.y, 6);
        assert!(popup.x + popup.width <= area.width);

        let tiny = centered_box(50, 7, Rect::new(0, 0, 40, 4));
        assert_eq!(tiny.height, 4);
    }
}
