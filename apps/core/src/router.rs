use std::fmt;

/// Every page the public site and the member area can show.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Schedule,
    Events,
    Event { slug: String },
    Blog,
    BlogPost { slug: String },
    Ministry { slug: String },
    ChurchInfo { slug: String },
    Donation,
    Congregations,
    Contact,
    Prayer,
    Login,
    Member,
    AdminDashboard,
}

const PREFIXES: [&str; 4] = ["ministry/", "igreja/", "blog/", "evento/"];

impl Page {
    /// Resolves a page identifier. Unknown identifiers land on `Home`.
    pub fn parse(id: &str) -> Self {
        let id = id.trim().trim_start_matches('#').trim_start_matches('/');

        for prefix in PREFIXES {
            let Some(slug) = id.strip_prefix(prefix) else {
                continue;
            };
            if slug.is_empty() || slug.contains('/') {
                return Self::Home;
            }
            let slug = slug.to_string();
            return match prefix {
                "ministry/" => Self::Ministry { slug },
                "igreja/" => Self::ChurchInfo { slug },
                "blog/" => Self::BlogPost { slug },
                _ => Self::Event { slug },
            };
        }

        match id {
            "home" => Self::Home,
            "about" => Self::About,
            "schedule" => Self::Schedule,
            "events" => Self::Events,
            "blog" => Self::Blog,
            "donation" => Self::Donation,
            "congregations" => Self::Congregations,
            "contact" => Self::Contact,
            "prayer" => Self::Prayer,
            "login" => Self::Login,
            "member" => Self::Member,
            "admin/dashboard" => Self::AdminDashboard,
            _ => Self::Home,
        }
    }

    /// The identifier that parses back into this page.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "home".to_string(),
            Self::About => "about".to_string(),
            Self::Schedule => "schedule".to_string(),
            Self::Events => "events".to_string(),
            Self::Event { slug } => format!("evento/{slug}"),
            Self::Blog => "blog".to_string(),
            Self::BlogPost { slug } => format!("blog/{slug}"),
            Self::Ministry { slug } => format!("ministry/{slug}"),
            Self::ChurchInfo { slug } => format!("igreja/{slug}"),
            Self::Donation => "donation".to_string(),
            Self::Congregations => "congregations".to_string(),
            Self::Contact => "contact".to_string(),
            Self::Prayer => "prayer".to_string(),
            Self::Login => "login".to_string(),
            Self::Member => "member".to_string(),
            Self::AdminDashboard => "admin/dashboard".to_string(),
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::About => "Quem Somos",
            Self::Schedule => "Programação",
            Self::Events | Self::Event { .. } => "Eventos",
            Self::Blog | Self::BlogPost { .. } => "Blog",
            Self::Ministry { .. } => "Ministérios",
            Self::ChurchInfo { .. } => "A Igreja",
            Self::Donation => "Contribua",
            Self::Congregations => "Congregações",
            Self::Contact => "Contato",
            Self::Prayer => "Pedido de Oração",
            Self::Login => "Entrar",
            Self::Member => "Área do Membro",
            Self::AdminDashboard => "Painel Administrativo",
        }
    }
}

/// A page plus the anchor to scroll to once it has been drawn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    pub page: Page,
    pub anchor: Option<String>,
}

impl Route {
    /// Parses `page-id[#anchor]`, e.g. `home#eventos`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim().trim_start_matches('#');
        let (id, anchor) = match value.split_once('#') {
            Some((id, anchor)) if !anchor.is_empty() => (id, Some(anchor.to_string())),
            Some((id, _)) => (id, None),
            None => (value, None),
        };
        Self {
            page: Page::parse(id),
            anchor,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        Self { page, anchor: None }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.anchor {
            Some(anchor) => write!(f, "{}#{anchor}", self.page.path()),
            None => f.write_str(&self.page.path()),
        }
    }
}

/// Current page plus the scroll anchor scheduled for after the next render.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Page,
    pending_scroll: Option<String>,
}

impl Navigator {
    pub fn new(route: Route) -> Self {
        Self {
            current: route.page,
            pending_scroll: route.anchor,
        }
    }

    pub const fn current(&self) -> &Page {
        &self.current
    }

    pub fn navigate(&mut self, route: impl Into<Route>) {
        let route = route.into();
        self.current = route.page;
        self.pending_scroll = route.anchor;
    }

    pub fn navigate_to(&mut self, id: &str) {
        self.navigate(Route::parse(id));
    }

    /// Hands out the pending anchor once; call after the page has rendered.
    pub fn take_scroll(&mut self) -> Option<String> {
        self.pending_scroll.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_ids_carry_their_slug() {
        assert_eq!(
            Page::parse("ministry/jovens"),
            Page::Ministry {
                slug: "jovens".to_string()
            }
        );
        assert_eq!(
            Page::parse("igreja/historia"),
            Page::ChurchInfo {
                slug: "historia".to_string()
            }
        );
        assert_eq!(
            Page::parse("blog/culto-de-natal"),
            Page::BlogPost {
                slug: "culto-de-natal".to_string()
            }
        );
    }

    #[test]
    fn unknown_ids_fall_back_to_home() {
        assert_eq!(Page::parse("unknown/page"), Page::Home);
        assert_eq!(Page::parse(""), Page::Home);
        assert_eq!(Page::parse("blog/"), Page::Home);
        assert_eq!(Page::parse("ministry/a/b"), Page::Home);
    }

    #[test]
    fn exact_ids_match_only_exactly() {
        assert_eq!(Page::parse("blog"), Page::Blog);
        assert_eq!(Page::parse("admin/dashboard"), Page::AdminDashboard);
        assert_eq!(Page::parse("admin"), Page::Home);
    }

    #[test]
    fn path_parses_back_to_the_same_page() {
        let pages = [
            Page::Home,
            Page::About,
            Page::Event {
                slug: "retiro".to_string(),
            },
            Page::ChurchInfo {
                slug: "missao".to_string(),
            },
            Page::AdminDashboard,
        ];
        for page in pages {
            assert_eq!(Page::parse(&page.path()), page);
        }
    }

    #[test]
    fn route_splits_anchor() {
        let route = Route::parse("#home#eventos");
        assert_eq!(route.page, Page::Home);
        assert_eq!(route.anchor.as_deref(), Some("eventos"));
        assert_eq!(route.to_string(), "home#eventos");
    }

    #[test]
    fn navigator_hands_out_scroll_once() {
        let mut nav = Navigator::default();
        nav.navigate_to("about#lideranca");

        assert_eq!(nav.current(), &Page::About);
        assert_eq!(nav.take_scroll().as_deref(), Some("lideranca"));
        assert_eq!(nav.take_scroll(), None);

        nav.navigate(Page::Blog);
        assert_eq!(nav.take_scroll(), None);
    }
}
