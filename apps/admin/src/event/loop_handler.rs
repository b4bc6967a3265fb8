use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ieam_core::dashboard::DashboardSnapshot;
use std::convert::TryFrom;
use std::fmt;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::app::actions::PendingAction;
use crate::app::state::{Collection, Managers};
use crate::app::tasks::TaskOutcome;
use crate::app::{handle_input, App};
use crate::export::{build_site_export, write_site_export};
use crate::store::DocumentStore;
use crate::terminal::AdminTerminal;
use crate::ui;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ActionState {
    Idle,
    Running,
    Done,
    Failed,
}

impl fmt::Display for ActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Done => write!(f, "Done"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

#[derive(Clone, Debug)]
enum ActionEvent {
    Start(&'static str),
    Finished(TaskOutcome),
    Reset,
}

impl fmt::Display for ActionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start(label) => write!(f, "Start({label})"),
            Self::Finished(Ok(_)) => write!(f, "Finished(ok)"),
            Self::Finished(Err(_)) => write!(f, "Finished(err)"),
            Self::Reset => write!(f, "Reset"),
        }
    }
}

#[derive(Debug)]
struct StateTransitionError {
    from: ActionState,
    event: ActionEvent,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid transition from {} with event {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for StateTransitionError {}

/// Tracks the one action allowed to run at a time and mirrors it onto the app.
struct ActionMachine {
    state: ActionState,
}

impl ActionMachine {
    const fn new() -> Self {
        Self {
            state: ActionState::Idle,
        }
    }

    const fn state(&self) -> ActionState {
        self.state
    }

    fn process_event(
        &mut self,
        event: &ActionEvent,
        app: &mut App,
    ) -> std::result::Result<(), StateTransitionError> {
        let next_state = NextState::try_from((self.state, event, app))?;
        self.state = next_state.0;
        Ok(())
    }
}

struct NextState(ActionState);

impl TryFrom<(ActionState, &ActionEvent, &mut App)> for NextState {
    type Error = StateTransitionError;

    fn try_from(
        value: (ActionState, &ActionEvent, &mut App),
    ) -> std::result::Result<Self, Self::Error> {
        let (current_state, event, app) = value;

        match (current_state, event) {
            (ActionState::Idle, ActionEvent::Start(label)) => {
                app.busy_label = Some(*label);
                Ok(Self(ActionState::Running))
            }
            (ActionState::Running, ActionEvent::Finished(Ok(message))) => {
                app.busy_label = None;
                app.status_message.clone_from(message);
                Ok(Self(ActionState::Done))
            }
            (ActionState::Running, ActionEvent::Finished(Err(message))) => {
                app.busy_label = None;
                app.status_message.clear();
                app.show_alert(message.clone());
                Ok(Self(ActionState::Failed))
            }
            (ActionState::Done | ActionState::Failed, ActionEvent::Reset) => {
                Ok(Self(ActionState::Idle))
            }
            _ => Err(StateTransitionError {
                from: current_state,
                event: event.clone(),
            }),
        }
    }
}

/// Runs the queued action, if any, through the state machine.
async fn run_pending(machine: &mut ActionMachine, app: &mut App, terminal: &mut AdminTerminal) {
    if machine.state() != ActionState::Idle {
        return;
    }
    let Some(action) = app.pending.take() else {
        return;
    };

    if let Err(e) = machine.process_event(&ActionEvent::Start(action.label()), app) {
        warn!("{e}");
        return;
    }

    // show the spinner before blocking on the action
    if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
        warn!("Redraw failed: {e}");
    }

    let outcome = app.perform(action).await;
    if let Err(message) = &outcome {
        error!(%message, "Action failed");
    }
    if let Err(e) = machine.process_event(&ActionEvent::Finished(outcome), app) {
        warn!("{e}");
    }
    if let Err(e) = machine.process_event(&ActionEvent::Reset, app) {
        warn!("{e}");
    }
}

/// Run the main application event loop
pub async fn run(terminal: &mut AdminTerminal, app: &mut App) -> Result<()> {
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let mut machine = ActionMachine::new();

    while app.running {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                }
                Ok(_) => {}
                Err(e) => warn!("Failed to read terminal event: {e}"),
            }
        }

        run_pending(&mut machine, app, terminal).await;
    }

    if app.session.current().is_some() {
        if let Err(message) = app.perform(PendingAction::SignOut).await {
            warn!(%message, "Sign-out on exit failed");
        }
    }
    Ok(())
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.actions.initialize().await?;
    let stats = build_headless_stats(app.actions.document_store()?).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_headless_stats(&stats);
    }

    Ok(())
}

/// Writes the public site export and returns where it went.
pub async fn run_export(app: &mut App) -> Result<PathBuf> {
    app.actions.initialize().await?;
    let config = &app.actions.config;
    let export = build_site_export(app.actions.document_store()?, config.prayer_endpoint.clone())
        .await?;
    write_site_export(&config.site_export, &export)?;
    Ok(config.site_export.clone())
}

fn print_headless_stats(stats: &HeadlessStats) {
    println!("\nIEAM Stats");
    println!("==========");
    println!("Eventos: {}", stats.total_events);
    println!("Membros: {}", stats.total_members);
    println!("Congregações: {}", stats.total_congregations);
    println!("Posts: {}", stats.total_posts);
    println!("Pedidos pendentes: {}", stats.pending_prayers);
    println!("Liderança: {}%", stats.leadership_percentage);

    println!("\nMembros por cargo:");
    for (role, count) in &stats.roles {
        println!("- {role}: {count}");
    }

    println!("\nPróximos eventos:");
    for event in &stats.upcoming_events {
        println!("- {} | {} | {}", event.date, event.time, event.title);
    }
}

async fn build_headless_stats(store: &dyn DocumentStore) -> HeadlessStats {
    let mut managers = Managers::default();
    for collection in Collection::ALL {
        managers.panel_mut(collection).load(store).await;
    }
    let snapshot = managers.snapshot();
    info!(
        members = snapshot.total_members,
        events = snapshot.total_events,
        "Headless stats collected"
    );
    HeadlessStats::from(snapshot)
}

#[derive(Debug, serde::Serialize)]
struct HeadlessStats {
    total_events: usize,
    total_members: usize,
    total_congregations: usize,
    total_posts: usize,
    pending_prayers: usize,
    leadership_percentage: u8,
    roles: Vec<(String, usize)>,
    upcoming_events: Vec<HeadlessEvent>,
}

#[derive(Debug, serde::Serialize)]
struct HeadlessEvent {
    title: String,
    date: String,
    time: String,
}

impl From<DashboardSnapshot> for HeadlessStats {
    fn from(snapshot: DashboardSnapshot) -> Self {
        Self {
            total_events: snapshot.total_events,
            total_members: snapshot.total_members,
            total_congregations: snapshot.total_congregations,
            total_posts: snapshot.total_posts,
            pending_prayers: snapshot.pending_prayers,
            leadership_percentage: snapshot.leadership_percentage,
            roles: snapshot
                .roles
                .counts()
                .into_iter()
                .map(|(role, count)| (role.as_str().to_string(), count))
                .collect(),
            upcoming_events: snapshot
                .upcoming_events
                .into_iter()
                .map(|event| HeadlessEvent {
                    title: event.fields.title,
                    date: event.fields.date,
                    time: event.fields.time,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::to_fields;
    use crate::testing::MemoryStore;
    use ieam_core::{Event, Member, MemberRole, PrayerRequest, PrayerStatus};

    #[tokio::test]
    async fn headless_stats_aggregate_every_collection() -> Result<(), Box<dyn std::error::Error>>
    {
        let store = MemoryStore::default();
        for (id, role) in [
            ("m1", MemberRole::Pastor),
            ("m2", MemberRole::Membro),
            ("m3", MemberRole::Membro),
            ("m4", MemberRole::Diacono),
        ] {
            let member = Member {
                name: id.to_string(),
                role,
                ..Member::default()
            };
            store.seed("members", id, to_fields(&member)?);
        }
        for (id, date) in [("e1", "2025-03-01"), ("e2", "2025-01-10")] {
            let event = Event {
                title: id.to_string(),
                date: date.to_string(),
                ..Event::default()
            };
            store.seed("events", id, to_fields(&event)?);
        }
        let answered = PrayerRequest {
            status: PrayerStatus::Orado,
            ..PrayerRequest::default()
        };
        store.seed("prayer_requests", "p1", to_fields(&PrayerRequest::default())?);
        store.seed("prayer_requests", "p2", to_fields(&answered)?);

        let stats = build_headless_stats(&store).await;

        assert_eq!(stats.total_members, 4);
        assert_eq!(stats.total_events, 2);
        assert_eq!(stats.pending_prayers, 1);
        assert_eq!(stats.leadership_percentage, 50);
        assert_eq!(stats.upcoming_events[0].title, "e2");
        assert!(stats.roles.contains(&("Membro".to_string(), 2)));
        Ok(())
    }

    #[test]
    fn action_machine_rejects_finish_while_idle() -> Result<(), Box<dyn std::error::Error>> {
        let mut app = App::new(AppConfig::from_lookup(|_| None)?);
        let mut machine = ActionMachine::new();

        let finished = ActionEvent::Finished(Ok(String::new()));
        assert!(machine.process_event(&finished, &mut app).is_err());

        machine.process_event(&ActionEvent::Start("Salvando..."), &mut app)?;
        assert_eq!(app.busy_label, Some("Salvando..."));

        let failed = ActionEvent::Finished(Err("Erro ao salvar evento.".to_string()));
        machine.process_event(&failed, &mut app)?;
        assert_eq!(machine.state(), ActionState::Failed);
        assert_eq!(app.busy_label, None);
        assert_eq!(app.alert.as_deref(), Some("Erro ao salvar evento."));

        machine.process_event(&ActionEvent::Reset, &mut app)?;
        assert_eq!(machine.state(), ActionState::Idle);
        Ok(())
    }
}
