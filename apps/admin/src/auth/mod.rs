//! Hosted authentication, the explicit session object and member profiles.

pub mod firebase;
pub mod profile;
pub mod session;

use async_trait::async_trait;
use ieam_core::FormError;
use thiserror::Error;

pub use firebase::FirebaseAuth;
pub use session::{Session, SessionUser};

/// Identity returned by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub id_token: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// No `FIREBASE_API_KEY` was configured.
    #[error("Autenticação não configurada (FIREBASE_API_KEY ausente).")]
    MissingApiKey,

    /// The provider refused the request; the message is already user-facing.
    #[error("{message}")]
    Provider { code: String, message: String },

    /// The form failed client-side checks; nothing was sent.
    #[error(transparent)]
    Validation(#[from] FormError),

    #[error("Falha de conexão com o serviço de autenticação: {0}")]
    Http(#[from] reqwest::Error),

    /// The member profile could not be read or created.
    #[error("Erro ao carregar perfil do membro.")]
    Profile(#[from] crate::store::StoreError),
}

impl AuthError {
    /// Maps a raw provider code to its sentence, falling back to the raw message.
    pub fn from_provider(code: &str, raw_message: &str) -> Self {
        let message = provider_message(code).map_or_else(|| raw_message.to_string(), str::to_string);
        Self::Provider {
            code: code.to_string(),
            message,
        }
    }
}

const PROVIDER_MESSAGES: &[(&str, &str)] = &[
    ("EMAIL_NOT_FOUND", "E-mail não encontrado."),
    ("INVALID_PASSWORD", "Senha incorreta."),
    ("INVALID_LOGIN_CREDENTIALS", "E-mail ou senha inválidos."),
    ("EMAIL_EXISTS", "Este e-mail já está em uso."),
    ("WEAK_PASSWORD", "A senha deve ter pelo menos 6 caracteres."),
    ("INVALID_EMAIL", "E-mail inválido."),
    ("USER_DISABLED", "Esta conta foi desativada."),
    (
        "TOO_MANY_ATTEMPTS_TRY_LATER",
        "Muitas tentativas. Tente novamente mais tarde.",
    ),
    ("MISSING_PASSWORD", "Informe a senha."),
];

pub fn provider_message(code: &str) -> Option<&'static str> {
    PROVIDER_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    async fn sign_up(&self, name: &str, email: &str, password: &str)
        -> Result<AuthUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}
