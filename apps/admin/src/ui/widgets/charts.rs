use ieam_core::dashboard::{DashboardSnapshot, RoleDistribution};
use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

const BAR_COLORS: [Color; 6] = [
    Color::Rgb(0, 0, 238),
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::Gray,
];

/// Horizontal bars for the most common member roles.
pub fn render_role_barchart(roles: &RoleDistribution, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Membros por Cargo")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let top = roles.top(DashboardSnapshot::TOP_ROLES);
    if top.is_empty() {
        let paragraph = Paragraph::new("Nenhum membro cadastrado")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let bars: Vec<Bar<'_>> = top
        .iter()
        .enumerate()
        .map(|(index, (role, count))| {
            Bar::default()
                .value(*count as u64)
                .label(TextLine::from(role.as_str()))
                .style(Style::default().fg(BAR_COLORS[index % BAR_COLORS.len()]))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .max(roles.max_count() as u64)
        .bar_gap(0)
        .bar_width(1);

    f.render_widget(chart, area);
}

pub fn render_leadership_gauge(percentage: u8, f: &mut Frame<'_>, area: Rect) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title("Liderança")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(Style::default().fg(Color::Rgb(0, 0, 238)))
        .percent(u16::from(percentage.min(100)))
        .label(format!("{percentage}% Pastores, Presbíteros e Diáconos"));

    f.render_widget(gauge, area);
}

/// One line per collection total.
pub fn totals_lines(snapshot: &DashboardSnapshot) -> Vec<TextLine<'static>> {
    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    [
        ("Eventos", snapshot.total_events),
        ("Membros", snapshot.total_members),
        ("Congregações", snapshot.total_congregations),
        ("Posts", snapshot.total_posts),
        ("Pedidos pendentes", snapshot.pending_prayers),
    ]
    .into_iter()
    .map(|(label, value)| {
        TextLine::from(vec![
            Span::styled(format!("{label}: "), label_style),
            Span::styled(value.to_string(), value_style),
        ])
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_cover_every_collection() {
        let snapshot = DashboardSnapshot {
            total_events: 2,
            pending_prayers: 4,
            ..DashboardSnapshot::default()
        };
        let lines = totals_lines(&snapshot);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].to_string(), "Eventos: 2");
        assert_eq!(lines[4].to_string(), "Pedidos pendentes: 4");
    }
}
