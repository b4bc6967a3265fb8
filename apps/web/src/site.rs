//! Browser-independent state of the public site: current page, loaded export,
//! link selection and the two public forms. Everything here runs natively in tests.

use chrono::{DateTime, Utc};
use ieam_core::content::{self, CONTACT};
use ieam_core::dashboard::upcoming;
use ieam_core::forms::{ContactForm, PrayerForm};
use ieam_core::{
    Document, Event, Navigator, Page, PrayerRequest, PublicForm, Route, SiteExport, Submission,
};

pub const PRAYER_SENT: &str = "Pedido Enviado com Sucesso!";
pub const PRAYER_FAILED: &str = "Erro ao enviar pedido de oração. Tente novamente.";
const HOME_EVENTS: usize = 3;
const PAGE_STEP: u16 = 10;

/// Keys the site reacts to, decoupled from the DOM backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Backspace,
}

/// Work the browser side has to do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetHash(String),
    PostPrayer {
        endpoint: String,
        request: PrayerRequest,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Pages in the top menu, left to right.
pub fn menu() -> [Page; 9] {
    [
        Page::Home,
        Page::About,
        Page::Schedule,
        Page::Events,
        Page::Blog,
        Page::Congregations,
        Page::Donation,
        Page::Prayer,
        Page::Contact,
    ]
}

/// Menu entry a page belongs to; detail pages highlight their list.
pub fn menu_index(page: &Page) -> usize {
    let owner = match page {
        Page::Event { .. } => Page::Events,
        Page::BlogPost { .. } => Page::Blog,
        Page::ChurchInfo { .. } => Page::About,
        other => other.clone(),
    };
    menu().iter().position(|entry| *entry == owner).unwrap_or(0)
}

#[derive(Debug, Default)]
pub struct Site {
    navigator: Navigator,
    pub export: Option<SiteExport>,
    pub load_error: Option<String>,
    pub scroll: u16,
    pub link_index: usize,
    pub field_index: usize,
    pub contact: ContactForm,
    pub prayer: PrayerForm,
    pub notice: Option<Notice>,
    pub sending: bool,
    /// Set when the link selection moved and the view should follow it.
    pub follow_selection: bool,
}

impl Site {
    /// Starts on the page named by the URL hash.
    pub fn new(hash: &str) -> Self {
        Self {
            navigator: Navigator::new(Route::parse(hash)),
            ..Self::default()
        }
    }

    pub const fn page(&self) -> &Page {
        self.navigator.current()
    }

    pub fn set_export(&mut self, result: Result<SiteExport, String>) {
        match result {
            Ok(export) => {
                self.export = Some(export);
                self.load_error = None;
            }
            Err(message) => self.load_error = Some(message),
        }
    }

    /// Events shown on the home page.
    pub fn home_events(&self) -> Vec<Document<Event>> {
        self.export
            .as_ref()
            .map(|export| upcoming(&export.events, HOME_EVENTS))
            .unwrap_or_default()
    }

    /// Selectable links of the current page, in display order.
    pub fn links(&self) -> Vec<Link> {
        let event_link = |event: &Document<Event>| Link {
            label: format!("{} · {}", event.date, event.title),
            route: Page::Event { slug: event.slug() }.into(),
        };

        match self.page() {
            Page::Home => self
                .home_events()
                .iter()
                .map(event_link)
                .chain(content::MINISTRIES.iter().map(|ministry| Link {
                    label: ministry.name.to_string(),
                    route: Page::Ministry {
                        slug: ministry.slug.to_string(),
                    }
                    .into(),
                }))
                .collect(),
            Page::About => content::CHURCH_INFO
                .iter()
                .map(|info| Link {
                    label: info.name.to_string(),
                    route: Page::ChurchInfo {
                        slug: info.slug.to_string(),
                    }
                    .into(),
                })
                .collect(),
            Page::Events => self
                .export
                .as_ref()
                .map(|export| upcoming(&export.events, export.events.len()))
                .unwrap_or_default()
                .iter()
                .map(event_link)
                .collect(),
            Page::Blog => self
                .export
                .as_ref()
                .map(|export| {
                    export
                        .posts_by_date()
                        .into_iter()
                        .map(|post| Link {
                            label: format!("{} · {}", post.published_on(), post.title),
                            route: Page::BlogPost {
                                slug: post.slug.clone(),
                            }
                            .into(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    pub const fn is_form_page(&self) -> bool {
        matches!(self.page(), Page::Contact | Page::Prayer)
    }

    pub const fn field_count(&self) -> usize {
        match self.page() {
            Page::Contact => 3,
            Page::Prayer => 4,
            _ => 0,
        }
    }

    /// Moves to `route` and asks the browser to mirror it in the hash.
    pub fn navigate(&mut self, route: impl Into<Route>) -> Effect {
        let route = route.into();
        let hash = route.to_string();
        self.navigator.navigate(route);
        self.reset_view();
        Effect::SetHash(hash)
    }

    /// Follows an external hash change. Returns whether the page changed.
    pub fn sync_hash(&mut self, hash: &str) -> bool {
        let route = Route::parse(hash);
        if route.page == *self.page() && route.anchor.is_none() {
            return false;
        }
        self.navigator.navigate(route);
        self.reset_view();
        true
    }

    /// The anchor scheduled by the last navigation, handed out once.
    pub fn take_scroll(&mut self) -> Option<String> {
        self.navigator.take_scroll()
    }

    /// Adjusts the scroll so `line` sits inside a viewport of `height` rows.
    pub fn keep_visible(&mut self, line: u16, height: u16) {
        if height == 0 {
            return;
        }
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }

    fn reset_view(&mut self) {
        self.scroll = 0;
        self.link_index = 0;
        self.field_index = 0;
        self.notice = None;
        self.follow_selection = false;
    }

    pub fn handle_key(&mut self, key: Key, now: DateTime<Utc>) -> Option<Effect> {
        match key {
            Key::Left | Key::Right => {
                let entries = menu();
                let current = menu_index(self.page());
                let next = if key == Key::Right {
                    (current + 1) % entries.len()
                } else {
                    (current + entries.len() - 1) % entries.len()
                };
                let page = entries[next].clone();
                return Some(self.navigate(page));
            }
            Key::Esc => return self.back(),
            _ => {}
        }

        if self.is_form_page() {
            return self.handle_form_key(key, now);
        }

        let links = self.links();
        match key {
            Key::Up | Key::BackTab => {
                if links.is_empty() {
                    self.scroll = self.scroll.saturating_sub(1);
                } else {
                    self.link_index = self.link_index.saturating_sub(1);
                    self.follow_selection = true;
                }
            }
            Key::Down | Key::Tab => {
                if links.is_empty() {
                    self.scroll = self.scroll.saturating_add(1);
                } else if self.link_index + 1 < links.len() {
                    self.link_index += 1;
                    self.follow_selection = true;
                }
            }
            Key::PageUp => self.scroll = self.scroll.saturating_sub(PAGE_STEP),
            Key::PageDown => self.scroll = self.scroll.saturating_add(PAGE_STEP),
            Key::Enter => {
                let route = links.into_iter().nth(self.link_index)?.route;
                return Some(self.navigate(route));
            }
            _ => {}
        }
        None
    }

    fn back(&mut self) -> Option<Effect> {
        let parent = match self.page() {
            Page::Home => return None,
            Page::Event { .. } => Page::Events,
            Page::BlogPost { .. } => Page::Blog,
            Page::ChurchInfo { .. } => Page::About,
            _ => Page::Home,
        };
        Some(self.navigate(parent))
    }

    fn handle_form_key(&mut self, key: Key, now: DateTime<Utc>) -> Option<Effect> {
        let count = self.field_count();
        match key {
            Key::Down | Key::Tab => self.field_index = (self.field_index + 1) % count,
            Key::Up | Key::BackTab => self.field_index = (self.field_index + count - 1) % count,
            Key::Enter => return self.submit_form(now),
            Key::Char(ch) => {
                if let Some(field) = self.active_field() {
                    field.push(ch);
                }
            }
            Key::Backspace => {
                if let Some(field) = self.active_field() {
                    field.pop();
                }
            }
            _ => {}
        }
        None
    }

    fn active_field(&mut self) -> Option<&mut String> {
        match (self.navigator.current(), self.field_index) {
            (Page::Contact, 0) => Some(&mut self.contact.name),
            (Page::Contact, 1) => Some(&mut self.contact.email),
            (Page::Contact, 2) => Some(&mut self.contact.message),
            (Page::Prayer, 0) => Some(&mut self.prayer.name),
            (Page::Prayer, 1) => Some(&mut self.prayer.email),
            (Page::Prayer, 2) => Some(&mut self.prayer.phone),
            (Page::Prayer, 3) => Some(&mut self.prayer.request),
            _ => None,
        }
    }

    fn submit_form(&mut self, now: DateTime<Utc>) -> Option<Effect> {
        if *self.page() == Page::Contact {
            // contact submissions are not sent anywhere
            let _ = self.contact.submit(now);
            return None;
        }
        if self.sending {
            return None;
        }

        let endpoint = self
            .export
            .as_ref()
            .and_then(|export| export.prayer_endpoint.clone());
        let Some(endpoint) = endpoint else {
            self.notice = Some(Notice::error(format!(
                "Pedidos online indisponíveis. Envie seu pedido para {}.",
                CONTACT.email
            )));
            return None;
        };

        match self.prayer.submit(now) {
            Ok(Submission::Prayer(request)) => {
                self.sending = true;
                self.notice = Some(Notice::info("Enviando..."));
                Some(Effect::PostPrayer { endpoint, request })
            }
            Ok(Submission::Nothing) => None,
            Err(error) => {
                self.notice = Some(Notice::error(error.to_string()));
                None
            }
        }
    }

    /// Outcome of a prayer request post.
    pub fn prayer_sent(&mut self, result: Result<(), String>) {
        self.sending = false;
        self.notice = Some(match result {
            Ok(()) => {
                self.prayer = PrayerForm::default();
                self.field_index = 0;
                Notice::info(PRAYER_SENT)
            }
            Err(_) => Notice::error(PRAYER_FAILED),
        });
    }
}
