//! Runs queued [`PendingAction`]s against the store and hosted services.

use ieam_core::PrayerRequest;
use tracing::{error, info};

use crate::auth::profile::{update_profile, ProfileDraft, ProfileError};
use crate::export::{build_site_export, write_site_export};

use super::actions::PendingAction;
use super::state::{App, AppScreen, Collection};

/// `Ok` carries a status line, `Err` the sentence for the alert popup.
pub type TaskOutcome = Result<String, String>;

const SIGN_UP_DONE: &str = "Cadastro realizado com sucesso! Faça o login para continuar.";

impl App {
    pub async fn perform(&mut self, action: PendingAction) -> TaskOutcome {
        info!(?action, "Running action");
        match action {
            PendingAction::SignIn => self.sign_in().await,
            PendingAction::SignUp => self.sign_up().await,
            PendingAction::SignOut => self.sign_out().await,
            PendingAction::Refresh => self.refresh().await,
            PendingAction::Load(collection) => self.load(collection).await,
            PendingAction::Submit(collection) => self.submit(collection).await,
            PendingAction::Delete { collection, id } => self.delete(collection, &id).await,
            PendingAction::TogglePrayer(id) => self.toggle_prayer(&id).await,
            PendingAction::SaveProfile => self.save_profile().await,
            PendingAction::Export => self.export().await,
        }
    }

    async fn sign_in(&mut self) -> TaskOutcome {
        let store = self.actions.document_store().map_err(|e| e.to_string())?;
        let user = self
            .session
            .sign_in(
                &self.actions.auth,
                store,
                &self.login,
                &self.actions.config.admin_email,
            )
            .await
            .map_err(|e| e.to_string())?;

        self.login.password.clear();
        self.profile = Some(ProfileDraft::from_member(&user.member));
        self.screen = self.home_screen();
        if self.screen == AppScreen::Dashboard {
            self.queue(PendingAction::Refresh);
        }
        Ok(user.welcome())
    }

    async fn sign_up(&mut self) -> TaskOutcome {
        self.session
            .sign_up(&self.actions.auth, &self.sign_up)
            .await
            .map_err(|e| e.to_string())?;

        self.login.email = self.sign_up.email.trim().to_string();
        self.sign_up = ieam_core::forms::SignUpForm::default();
        self.auth_field = 0;
        self.screen = AppScreen::Login;
        self.show_alert(SIGN_UP_DONE);
        Ok(SIGN_UP_DONE.to_string())
    }

    async fn sign_out(&mut self) -> TaskOutcome {
        let result = self.session.shutdown(&self.actions.auth).await;
        self.reset_after_sign_out();
        result.map(|()| "Sessão encerrada.".to_string()).map_err(|e| e.to_string())
    }

    async fn refresh(&mut self) -> TaskOutcome {
        let store = self.actions.document_store().map_err(|e| e.to_string())?;
        for collection in Collection::ALL {
            let panel = self.managers.panel_mut(collection);
            panel.mount();
            panel.load(store).await;
        }
        self.dashboard = self.managers.snapshot();
        Ok(format!(
            "{} membros, {} eventos carregados",
            self.dashboard.total_members, self.dashboard.total_events
        ))
    }

    async fn load(&mut self, collection: Collection) -> TaskOutcome {
        let store = self.actions.document_store().map_err(|e| e.to_string())?;
        let panel = self.managers.panel_mut(collection);
        panel.load(store).await;
        let count = panel.len();
        self.clamp_selection();
        Ok(format!("{count} registros em {}", collection.label()))
    }

    async fn submit(&mut self, collection: Collection) -> TaskOutcome {
        let store = self.actions.document_store().map_err(|e| e.to_string())?;
        let result = self
            .managers
            .panel_mut(collection)
            .submit(store, &self.actions.uploader)
            .await;

        match result {
            Ok(()) => {
                self.form = None;
                self.path_prompt = None;
                self.clamp_selection();
                Ok("Registro salvo.".to_string())
            }
            Err(e) => Err(e.alert_message()),
        }
    }

    async fn delete(&mut self, collection: Collection, id: &str) -> TaskOutcome {
        let store = self.actions.document_store().map_err(|e| e.to_string())?;
        self.managers
            .panel_mut(collection)
            .remove_confirmed(id, store)
            .await
            .map_err(|e| e.alert_message())?;
        self.clamp_selection();
        Ok("Registro excluído.".to_string())
    }

    async fn toggle_prayer(&mut self, id: &str) -> TaskOutcome {
        let store = self.actions.document_store().map_err(|e| e.to_string())?;
        self.managers
            .prayers
            .apply(
                id,
                |request: &mut PrayerRequest| request.status = request.status.toggled(),
                store,
            )
            .await
            .map_err(|e| e.alert_message())?;
        Ok("Status do pedido atualizado.".to_string())
    }

    async fn save_profile(&mut self) -> TaskOutcome {
        let store = self.actions.document_store().map_err(|e| e.to_string())?;
        let (Some(user), Some(draft)) = (self.session.current(), self.profile.as_ref()) else {
            return Err("Nenhuma sessão ativa.".to_string());
        };

        match update_profile(store, &self.actions.uploader, &user.member, draft).await {
            Ok(member) => {
                self.profile = Some(ProfileDraft::from_member(&member));
                self.session.update_member(member);
                Ok(ProfileError::SUCCESS.to_string())
            }
            Err(e) => {
                error!("Profile update failed: {e}");
                Err(e.alert_message().to_string())
            }
        }
    }

    async fn export(&mut self) -> TaskOutcome {
        let store = self.actions.document_store().map_err(|e| e.to_string())?;
        let config = &self.actions.config;
        let export = build_site_export(store, config.prayer_endpoint.clone())
            .await
            .map_err(|e| e.to_string())?;
        write_site_export(&config.site_export, &export).map_err(|e| e.to_string())?;
        Ok(format!(
            "Site exportado para {}",
            config.site_export.display()
        ))
    }
}
