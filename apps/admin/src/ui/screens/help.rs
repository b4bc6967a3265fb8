use crate::cli::CliArgs;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Ajuda & Atalhos ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: false });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Text::from(TextLine::from(vec![Span::styled(
        "Pressione ? ou Esc para fechar",
        Style::default().fg(Color::Gray),
    )])))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}

fn key_line(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" - {description}")),
    ])
}

fn section(title: &'static str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        section("Painel"),
        key_line("1-5 / Enter", "Abrir eventos, membros, congregações, blog ou pedidos"),
        key_line("r", "Atualizar indicadores"),
        key_line("x", "Exportar dados públicos do site"),
        key_line("o", "Sair da conta"),
        TextLine::from(""),
        section("Listas"),
        key_line("n", "Novo registro"),
        key_line("Enter / e", "Editar selecionado"),
        key_line("d", "Excluir (pede confirmação)"),
        key_line("f", "Alternar filtro por categoria"),
        key_line("/", "Buscar"),
        key_line("t", "Marcar pedido como orado"),
        key_line("Esc", "Voltar ao painel"),
        TextLine::from(""),
        section("Formulário"),
        key_line("Enter", "Editar campo / confirmar"),
        key_line("←/→", "Alternar opção"),
        key_line("i / g", "Anexar imagem / imagem de galeria"),
        key_line("s", "Salvar"),
        key_line("Esc", "Fechar sem salvar"),
        TextLine::from(""),
        section("Linha de comando"),
    ];

    lines.extend(CliArgs::help_text().lines().map(|line| TextLine::from(line.to_string())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_cli_flags() {
        let text = build_help_lines()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("--headless"));
        assert!(text.contains("Excluir"));
    }
}
