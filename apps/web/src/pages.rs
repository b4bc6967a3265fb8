use ieam_core::content::{
    self, Block as ContentBlock, CHURCH_NAME, CONTACT, DONATION, LEADERS, WEEKLY_SERVICES,
};
use ieam_core::media::embed_url;
use ieam_core::Page;
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::site::{menu, menu_index, Site};

const GOLD: Color = Color::Rgb(212, 175, 116);

/// A page flattened into lines, with the line numbers of anchors and links.
#[derive(Debug, Default)]
pub struct PageView {
    pub lines: Vec<TextLine<'static>>,
    pub anchors: Vec<(&'static str, u16)>,
    pub link_lines: Vec<u16>,
}

impl PageView {
    fn position(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    fn anchor(&mut self, name: &'static str) {
        let line = self.position();
        self.anchors.push((name, line));
    }

    fn title(&mut self, text: impl Into<String>) {
        self.lines.push(TextLine::from(Span::styled(
            text.into(),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        )));
        self.blank();
    }

    fn heading(&mut self, text: impl Into<String>) {
        self.lines.push(TextLine::from(Span::styled(
            text.into(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
    }

    fn text(&mut self, text: impl Into<String>) {
        self.lines.push(TextLine::from(text.into()));
    }

    fn field(&mut self, label: &str, value: impl Into<String>) {
        self.lines.push(TextLine::from(vec![
            Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
            Span::raw(value.into()),
        ]));
    }

    fn muted(&mut self, text: impl Into<String>) {
        self.lines.push(TextLine::from(Span::styled(
            text.into(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    fn blank(&mut self) {
        self.lines.push(TextLine::from(""));
    }

    fn link(&mut self, label: &str, selected: bool) {
        let line = self.position();
        self.link_lines.push(line);
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(GOLD)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(GOLD)
        };
        let prefix = if selected { ">" } else { "•" };
        self.lines
            .push(TextLine::from(Span::styled(format!("{prefix} {label}"), style)));
    }

    fn input(&mut self, label: &str, value: &str, active: bool) {
        let label_style = if active {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if active { "_" } else { "" };
        self.lines
            .push(TextLine::from(Span::styled(format!("{label}:"), label_style)));
        self.lines.push(TextLine::from(format!("  {value}{cursor}")));
    }

    pub fn anchor_line(&self, name: &str) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(anchor, _)| *anchor == name)
            .map(|(_, line)| *line)
    }
}

pub fn build_view(site: &Site) -> PageView {
    let mut view = PageView::default();
    match site.page() {
        Page::Home => home(site, &mut view),
        Page::About => about(site, &mut view),
        Page::Schedule => schedule(&mut view),
        Page::Events => link_list(site, &mut view, "Eventos", "Nenhum evento programado."),
        Page::Event { slug } => event(site, slug, &mut view),
        Page::Blog => link_list(site, &mut view, "Blog", "Nenhuma publicação ainda."),
        Page::BlogPost { slug } => blog_post(site, slug, &mut view),
        Page::Ministry { slug } => ministry(slug, &mut view),
        Page::ChurchInfo { slug } => church_info(slug, &mut view),
        Page::Donation => donation(&mut view),
        Page::Congregations => congregations(site, &mut view),
        Page::Contact => contact(site, &mut view),
        Page::Prayer => prayer(site, &mut view),
        Page::Login | Page::Member | Page::AdminDashboard => restricted(site, &mut view),
    }
    view
}

/// Shown in place of data-backed content until `site.json` has arrived.
fn loading(site: &Site, view: &mut PageView) -> bool {
    if site.export.is_some() {
        return false;
    }
    match &site.load_error {
        Some(error) => view.muted(format!("Não foi possível carregar os dados: {error}")),
        None => view.muted("Carregando..."),
    }
    true
}

fn home(site: &Site, view: &mut PageView) {
    view.anchor("home");
    view.title(CHURCH_NAME);
    view.text("Uma igreja para toda a família. Venha nos visitar!");
    view.blank();

    view.anchor("sobre");
    view.heading("Sobre Nós");
    for leader in LEADERS {
        view.field(leader.role, leader.name);
    }
    view.blank();

    let links = site.links();
    let event_count = site.home_events().len();

    view.anchor("eventos");
    view.heading("Próximos Eventos");
    if !loading(site, view) && event_count == 0 {
        view.muted("Nenhum evento programado.");
    }
    for (index, link) in links.iter().enumerate().take(event_count) {
        view.link(&link.label, index == site.link_index);
    }
    view.blank();

    view.anchor("ministerios");
    view.heading("Ministérios");
    for (index, link) in links.iter().enumerate().skip(event_count) {
        view.link(&link.label, index == site.link_index);
    }
    view.blank();

    view.anchor("localizacao");
    view.heading("Localização");
    for line in CONTACT.address {
        view.text(*line);
    }
    view.blank();

    view.anchor("contato");
    view.heading("Contato");
    view.field("E-mail", CONTACT.email);
    view.field("Telefone", CONTACT.phone);
}

fn about(site: &Site, view: &mut PageView) {
    view.title("Quem Somos");
    view.text(format!(
        "A {CHURCH_NAME} existe para anunciar o evangelho e cuidar de pessoas."
    ));
    view.blank();
    view.heading("Liderança");
    for leader in LEADERS {
        view.field(leader.role, leader.name);
    }
    view.blank();
    view.heading("A Igreja");
    for (index, link) in site.links().iter().enumerate() {
        view.link(&link.label, index == site.link_index);
    }
}

fn schedule(view: &mut PageView) {
    view.title("Programação");
    for service in WEEKLY_SERVICES {
        view.heading(service.title);
        view.field("Quando", format!("{} às {}", service.day, service.time));
        view.text(service.description);
        view.blank();
    }
}

fn link_list(site: &Site, view: &mut PageView, title: &str, empty: &str) {
    view.title(title);
    if loading(site, view) {
        return;
    }
    let links = site.links();
    if links.is_empty() {
        view.muted(empty);
    }
    for (index, link) in links.iter().enumerate() {
        view.link(&link.label, index == site.link_index);
    }
}

fn event(site: &Site, slug: &str, view: &mut PageView) {
    if loading(site, view) {
        return;
    }
    let Some(event) = site.export.as_ref().and_then(|export| export.event_by_slug(slug)) else {
        view.title("Evento não encontrado.");
        view.muted("Esc: voltar para eventos");
        return;
    };
    view.title(event.title.clone());
    view.field("Data", event.date.clone());
    view.field("Horário", event.time.clone());
    if !event.image.is_empty() {
        view.field("Imagem", event.image.clone());
    }
    view.blank();
    for paragraph in event.description.lines() {
        view.text(paragraph.to_string());
    }
}

fn blog_post(site: &Site, slug: &str, view: &mut PageView) {
    if loading(site, view) {
        return;
    }
    let Some(post) = site.export.as_ref().and_then(|export| export.post_by_slug(slug)) else {
        view.title("Publicação não encontrada.");
        view.muted("Esc: voltar para o blog");
        return;
    };
    view.title(post.title.clone());
    view.field("Categoria", post.category.as_str());
    view.field("Publicado em", post.published_on());
    view.field("Por", post.author.clone());
    if !post.cover_image.is_empty() {
        view.field("Capa", post.cover_image.clone());
    }
    view.blank();
    for paragraph in post.content.lines() {
        view.text(paragraph.to_string());
    }
    if let Some(video) = post.video_url.as_deref().filter(|url| !url.is_empty()) {
        view.blank();
        view.field("Vídeo", embed_url(video));
    }
    if !post.images.is_empty() {
        view.blank();
        view.heading("Galeria");
        for image in &post.images {
            view.text(image.clone());
        }
    }
    if !post.tags.is_empty() {
        view.blank();
        view.field("Tags", post.tags.join(", "));
    }
}

fn ministry(slug: &str, view: &mut PageView) {
    let Some(ministry) = content::ministry(slug) else {
        view.title("Ministério não encontrado.");
        view.muted("Esc: voltar ao início");
        return;
    };
    view.title(ministry.title);
    for paragraph in ministry.description {
        view.text(*paragraph);
        view.blank();
    }
    view.heading("Detalhes");
    view.field("Líder", ministry.details.leader);
    view.field("Encontros", ministry.details.schedule);
    view.field("Contato", ministry.details.contact);
}

fn church_info(slug: &str, view: &mut PageView) {
    let Some(info) = content::church_info(slug) else {
        view.title("Página não encontrada.");
        view.muted("Esc: voltar para Quem Somos");
        return;
    };
    view.title(info.title);
    for block in info.content {
        match block {
            ContentBlock::Heading(text) => view.heading(*text),
            ContentBlock::Paragraph(text) => {
                view.text(*text);
                view.blank();
            }
        }
    }
}

fn donation(view: &mut PageView) {
    view.title("Contribua");
    view.text(format!("\"{}\"", DONATION.verse));
    view.muted(DONATION.verse_reference);
    view.blank();
    view.heading("PIX");
    view.field("Chave", DONATION.pix_key);
    view.blank();
    view.heading("Transferência");
    let account = DONATION.account;
    view.field("Banco", account.bank);
    view.field("Agência", account.agency);
    view.field("Conta", account.account);
    view.field("Titular", account.holder);
    view.field("CNPJ", account.cnpj);
}

fn congregations(site: &Site, view: &mut PageView) {
    view.title("Congregações");
    if loading(site, view) {
        return;
    }
    let congregations = site
        .export
        .as_ref()
        .map(|export| export.congregations.as_slice())
        .unwrap_or_default();
    if congregations.is_empty() {
        view.muted("Nenhuma congregação cadastrada.");
    }
    for congregation in congregations {
        view.heading(congregation.name.clone());
        view.field("Endereço", congregation.address.clone());
        view.field("Pastor", congregation.pastor.clone());
        view.field("Cultos", congregation.schedule.clone());
        if !congregation.map_url.is_empty() {
            view.field("Mapa", congregation.map_url.clone());
        }
        view.blank();
    }
}

fn contact(site: &Site, view: &mut PageView) {
    view.title("Contato");
    view.field("E-mail", CONTACT.email);
    view.field("Telefone", CONTACT.phone);
    view.blank();
    let form = &site.contact;
    view.input("Seu Nome", &form.name, site.field_index == 0);
    view.input("Seu Email", &form.email, site.field_index == 1);
    view.input("Sua Mensagem", &form.message, site.field_index == 2);
}

fn prayer(site: &Site, view: &mut PageView) {
    view.title("Pedidos de Oração");
    view.text(
        "Compartilhe seu pedido de oração conosco. Nossa equipe de intercessores estará orando por você.",
    );
    view.blank();
    let form = &site.prayer;
    view.input("Nome *", &form.name, site.field_index == 0);
    view.input("E-mail", &form.email, site.field_index == 1);
    view.input("Telefone", &form.phone, site.field_index == 2);
    view.input("Pedido *", &form.request, site.field_index == 3);
}

fn restricted(site: &Site, view: &mut PageView) {
    view.title(site.page().title());
    view.text("A área de membros e o painel administrativo ficam no aplicativo ieam-admin.");
    view.muted("Esc: voltar ao início");
}

/// Draws the whole site, then applies any scroll the navigation scheduled.
pub fn render(site: &mut Site, f: &mut Frame<'_>) {
    let area = f.area();
    let block = Block::default()
        .title(format!(" {CHURCH_NAME} "))
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_menu(site, f, chunks[0]);

    let view = build_view(site);
    let body_height = chunks[2].height;
    let max_scroll = view.position().saturating_sub(body_height);
    if site.follow_selection {
        if let Some(line) = view.link_lines.get(site.link_index) {
            site.keep_visible(*line, body_height);
        }
        site.follow_selection = false;
    }
    site.scroll = site.scroll.min(max_scroll);

    let body = Paragraph::new(Text::from(view.lines.clone()))
        .scroll((site.scroll, 0))
        .wrap(Wrap { trim: false });
    f.render_widget(body, chunks[2]);

    render_notice(site, f, chunks[3]);
    render_hints(site, f, chunks[4]);

    if let Some(anchor) = site.take_scroll() {
        if let Some(line) = view.anchor_line(&anchor) {
            site.scroll = line.min(max_scroll);
        }
    }
}

fn render_menu(site: &Site, f: &mut Frame<'_>, area: Rect) {
    let titles = menu()
        .iter()
        .map(|page| TextLine::from(page.title()))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .select(menu_index(site.page()))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(GOLD)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));
    f.render_widget(tabs, area);
}

fn render_notice(site: &Site, f: &mut Frame<'_>, area: Rect) {
    let Some(notice) = site.notice.as_ref() else {
        return;
    };
    let color = if notice.is_error {
        Color::Red
    } else {
        Color::Green
    };
    let paragraph = Paragraph::new(Span::styled(
        notice.text.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_hints(site: &Site, f: &mut Frame<'_>, area: Rect) {
    let hints = if site.is_form_page() {
        "←/→ Menu  Tab Campo  Enter Enviar  Esc Voltar"
    } else {
        "←/→ Menu  ↑/↓ Selecionar  Enter Abrir  PgUp/PgDn Rolar  Esc Voltar"
    };
    let paragraph = Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
