use std::path::PathBuf;

use ieam_core::dashboard::DashboardSnapshot;
use ieam_core::forms::{LoginForm, SignUpForm};
use ieam_core::{BlogPost, Congregation, Event, Member, PrayerRequest, PrayerStatus};
use throbber_widgets_tui::ThrobberState;

use crate::auth::profile::ProfileDraft;
use crate::auth::Session;
use crate::config::AppConfig;
use crate::resource::{AdminPanel, FieldSpec, ResourceManager};

use super::actions::{AppActions, PendingAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Events,
    Members,
    Congregations,
    Posts,
    Prayers,
}

impl Collection {
    pub const ALL: [Self; 5] = [
        Self::Events,
        Self::Members,
        Self::Congregations,
        Self::Posts,
        Self::Prayers,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Events => "Eventos",
            Self::Members => "Membros",
            Self::Congregations => "Congregações",
            Self::Posts => "Blog",
            Self::Prayers => "Pedidos de Oração",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Login,
    SignUp,
    Dashboard,
    Collection(Collection),
    Profile,
}

/// Cursor over the fields of the open form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormCursor {
    pub field_index: usize,
    pub editing: bool,
    pub input: String,
}

/// Asks for a local image path to attach to the open form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPrompt {
    pub gallery: bool,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub collection: Collection,
    pub id: String,
    pub prompt: &'static str,
}

#[derive(Debug, Default)]
pub struct Managers {
    pub events: ResourceManager<Event>,
    pub members: ResourceManager<Member>,
    pub congregations: ResourceManager<Congregation>,
    pub posts: ResourceManager<BlogPost>,
    pub prayers: ResourceManager<PrayerRequest>,
}

impl Managers {
    pub fn panel(&self, collection: Collection) -> &dyn AdminPanel {
        match collection {
            Collection::Events => &self.events,
            Collection::Members => &self.members,
            Collection::Congregations => &self.congregations,
            Collection::Posts => &self.posts,
            Collection::Prayers => &self.prayers,
        }
    }

    pub fn panel_mut(&mut self, collection: Collection) -> &mut dyn AdminPanel {
        match collection {
            Collection::Events => &mut self.events,
            Collection::Members => &mut self.members,
            Collection::Congregations => &mut self.congregations,
            Collection::Posts => &mut self.posts,
            Collection::Prayers => &mut self.prayers,
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let pending = self
            .prayers
            .records()
            .iter()
            .filter(|request| request.status == PrayerStatus::Pendente)
            .count();
        DashboardSnapshot::new(
            self.events.records(),
            self.members.records(),
            self.congregations.records().len(),
            self.posts.records().len(),
            pending,
        )
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub actions: AppActions,
    pub session: Session,
    pub managers: Managers,
    pub dashboard: DashboardSnapshot,
    pub pending: Option<PendingAction>,
    pub busy_label: Option<&'static str>,
    pub throbber_state: ThrobberState,
    pub status_message: String,
    pub alert: Option<String>,
    pub confirm: Option<PendingDelete>,
    pub form: Option<FormCursor>,
    pub path_prompt: Option<PathPrompt>,
    pub show_help: bool,
    pub search_active: bool,
    pub selected_index: usize,
    pub dashboard_index: usize,
    pub login: LoginForm,
    pub sign_up: SignUpForm,
    pub auth_field: usize,
    pub profile: Option<ProfileDraft>,
    pub profile_cursor: FormCursor,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            screen: AppScreen::Login,
            actions: AppActions::new(config),
            session: Session::new(),
            managers: Managers::default(),
            dashboard: DashboardSnapshot::default(),
            pending: None,
            busy_label: None,
            throbber_state: ThrobberState::default(),
            status_message: String::new(),
            alert: None,
            confirm: None,
            form: None,
            path_prompt: None,
            show_help: false,
            search_active: false,
            selected_index: 0,
            dashboard_index: 0,
            login: LoginForm::default(),
            sign_up: SignUpForm::default(),
            auth_field: 0,
            profile: None,
            profile_cursor: FormCursor::default(),
        }
    }

    /// Advances the spinner while something is running.
    pub fn update(&mut self) {
        if self.busy_label.is_some() {
            self.throbber_state.calc_next();
        }
    }

    pub fn queue(&mut self, action: PendingAction) {
        if self.pending.is_none() && self.busy_label.is_none() {
            self.pending = Some(action);
        }
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn current_collection(&self) -> Option<Collection> {
        match self.screen {
            AppScreen::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn open_collection(&mut self, collection: Collection) {
        if let Some(previous) = self.current_collection() {
            self.managers.panel_mut(previous).unmount();
        }
        self.managers.panel_mut(collection).mount();
        self.screen = AppScreen::Collection(collection);
        self.selected_index = 0;
        self.search_active = false;
        self.queue(PendingAction::Load(collection));
    }

    pub fn leave_collection(&mut self) {
        if let Some(collection) = self.current_collection() {
            self.managers.panel_mut(collection).unmount();
        }
        self.form = None;
        self.path_prompt = None;
        self.search_active = false;
        self.screen = AppScreen::Dashboard;
        self.queue(PendingAction::Refresh);
    }

    /// Id of the highlighted row on the current list.
    pub fn selected_id(&self) -> Option<String> {
        let collection = self.current_collection()?;
        self.managers
            .panel(collection)
            .rows()
            .into_iter()
            .nth(self.selected_index)
            .map(|(id, _)| id)
    }

    pub fn clamp_selection(&mut self) {
        let total = self
            .current_collection()
            .map_or(0, |collection| self.managers.panel(collection).rows().len());
        if total == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= total {
            self.selected_index = total - 1;
        }
    }

    pub fn open_form(&mut self, collection: Collection, id: Option<&str>) {
        let panel = self.managers.panel_mut(collection);
        let opened = match id {
            Some(id) => panel.open_edit(id),
            None => {
                panel.open_create();
                true
            }
        };
        if opened {
            self.form = Some(FormCursor::default());
        }
    }

    /// Draft fields the current session may see, with their values.
    pub fn form_fields(&self) -> Vec<(FieldSpec, String)> {
        let is_admin = self.is_admin();
        self.current_collection()
            .and_then(|collection| self.managers.panel(collection).draft_fields())
            .unwrap_or_default()
            .into_iter()
            .filter(|(field, _)| is_admin || !field.admin_only)
            .collect()
    }

    pub fn close_form(&mut self) {
        if let Some(collection) = self.current_collection() {
            self.managers.panel_mut(collection).close();
        }
        self.form = None;
        self.path_prompt = None;
    }

    pub fn attach_image(&mut self, path: PathBuf, gallery: bool) -> bool {
        let Some(collection) = self.current_collection() else {
            return false;
        };
        let panel = self.managers.panel_mut(collection);
        if gallery {
            panel.add_gallery_image(path)
        } else {
            panel.select_image(path)
        }
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// Screen shown right after a successful sign-in.
    pub fn home_screen(&self) -> AppScreen {
        if self.is_admin() {
            AppScreen::Dashboard
        } else {
            AppScreen::Profile
        }
    }

    pub fn reset_after_sign_out(&mut self) {
        self.managers = Managers::default();
        self.dashboard = DashboardSnapshot::default();
        self.form = None;
        self.confirm = None;
        self.path_prompt = None;
        self.profile = None;
        self.login = LoginForm::default();
        self.auth_field = 0;
        self.screen = AppScreen::Login;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Result<App, Box<dyn std::error::Error>> {
        let config = AppConfig::from_lookup(|_| None)?;
        Ok(App::new(config))
    }

    #[test]
    fn opening_a_collection_queues_its_load() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.screen = AppScreen::Dashboard;
        app.open_collection(Collection::Members);

        assert_eq!(app.screen, AppScreen::Collection(Collection::Members));
        assert_eq!(app.pending, Some(PendingAction::Load(Collection::Members)));
        Ok(())
    }

    #[test]
    fn leaving_a_collection_unmounts_it() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.open_collection(Collection::Events);
        app.pending = None;
        app.open_form(Collection::Events, None);
        app.leave_collection();

        assert!(!app.managers.events.is_mounted());
        assert!(!app.managers.events.is_open());
        assert_eq!(app.screen, AppScreen::Dashboard);
        assert_eq!(app.pending, Some(PendingAction::Refresh));
        Ok(())
    }

    #[test]
    fn queue_keeps_the_first_action() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = app()?;
        app.queue(PendingAction::Refresh);
        app.queue(PendingAction::Export);
        assert_eq!(app.pending, Some(PendingAction::Refresh));
        Ok(())
    }

    #[test]
    fn collection_index_round_trips() {
        for collection in Collection::ALL {
            assert_eq!(Collection::from_index(collection.index()), Some(collection));
        }
        assert_eq!(Collection::from_index(5), None);
    }
}
