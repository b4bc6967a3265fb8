use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::domain::{PrayerRequest, PrayerStatus};

/// Client-side validation failures. The message is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Preencha todos os campos obrigatórios.")]
    MissingFields,
    #[error("Por favor, preencha seu nome e o pedido de oração.")]
    MissingPrayerFields,
    #[error("Informe seu e-mail e senha.")]
    MissingCredentials,
    #[error("As senhas não coincidem.")]
    PasswordMismatch,
}

/// What a public form asks the caller to send after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Nothing,
    Prayer(PrayerRequest),
}

pub trait PublicForm {
    fn submit(&mut self, now: DateTime<Utc>) -> Result<Submission, FormError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl PublicForm for ContactForm {
    /// The contact form is decorative: it keeps what was typed and sends nothing.
    fn submit(&mut self, _now: DateTime<Utc>) -> Result<Submission, FormError> {
        Ok(Submission::Nothing)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrayerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub request: String,
}

impl PublicForm for PrayerForm {
    /// Builds a pending request from the form. Name and request are required.
    /// The form keeps its contents until the caller knows the request was stored.
    fn submit(&mut self, now: DateTime<Utc>) -> Result<Submission, FormError> {
        if is_blank(&self.name) || is_blank(&self.request) {
            return Err(FormError::MissingPrayerFields);
        }
        Ok(Submission::Prayer(PrayerRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            request: self.request.trim().to_string(),
            status: PrayerStatus::Pendente,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.name)
            || is_blank(&self.email)
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .unwrap_or_default()
    }

    #[test]
    fn filled_contact_form_sends_nothing() {
        let mut form = ContactForm {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            message: "Olá!".to_string(),
        };
        let before = form.clone();

        assert_eq!(form.submit(now()), Ok(Submission::Nothing));
        assert_eq!(form, before);
    }

    #[test]
    fn prayer_form_requires_name_and_request() {
        let mut form = PrayerForm {
            name: "  ".to_string(),
            request: "Saúde da família".to_string(),
            ..PrayerForm::default()
        };
        assert_eq!(form.submit(now()), Err(FormError::MissingPrayerFields));
        assert_eq!(form.request, "Saúde da família");
    }

    #[test]
    fn prayer_form_builds_pending_request_and_keeps_input() {
        let mut form = PrayerForm {
            name: "José".to_string(),
            request: "Emprego".to_string(),
            ..PrayerForm::default()
        };

        let Ok(Submission::Prayer(request)) = form.submit(now()) else {
            panic!("expected a prayer submission");
        };
        assert_eq!(request.status, PrayerStatus::Pendente);
        assert_eq!(request.created_at, "2024-05-01T12:00:00.000Z");
        assert_eq!(form.name, "José");
        assert_eq!(form.request, "Emprego");
    }

    #[test]
    fn sign_up_checks_password_confirmation() {
        let mut form = SignUpForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "segredo1".to_string(),
            confirm_password: "segredo2".to_string(),
        };
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "As senhas não coincidem."
        );

        form.confirm_password = "segredo1".to_string();
        assert_eq!(form.validate(), Ok(()));

        form.name.clear();
        assert_eq!(form.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn login_requires_both_fields() {
        let form = LoginForm {
            email: "a@b.c".to_string(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingCredentials));
    }
}
