use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{AuthError, AuthProvider, AuthUser};

/// Email/password auth against the Identity Toolkit REST API.
pub struct FirebaseAuth {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRequest<'a> {
    id_token: &'a str,
    display_name: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    display_name: Option<String>,
    #[serde(default)]
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Splits `"WEAK_PASSWORD : Password should be..."` into the bare code.
fn error_code(message: &str) -> &str {
    message.split(" : ").next().unwrap_or(message).trim()
}

fn provider_error(body: &str) -> AuthError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let raw = envelope.error.message;
            AuthError::from_provider(error_code(&raw), &raw)
        }
        Err(_) => AuthError::from_provider("UNKNOWN", "Ocorreu um erro desconhecido."),
    }
}

impl FirebaseAuth {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn call<B: Serialize + Sync>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<AccountResponse, AuthError> {
        let api_key = self.api_key.as_deref().ok_or(AuthError::MissingApiKey)?;
        let url = format!("{}/accounts:{method}", self.base_url);
        debug!(%method, "Calling auth provider");

        let response = self
            .client
            .post(url)
            .query(&[("key", api_key)])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let err = provider_error(&text);
            warn!(%method, %status, "Auth request rejected: {err}");
            return Err(err);
        }

        serde_json::from_str(&text).map_err(|_| provider_error(&text))
    }
}

#[async_trait]
impl AuthProvider for FirebaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let account = self
            .call(
                "signInWithPassword",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        info!(uid = %account.local_id, "Signed in");

        Ok(AuthUser {
            uid: account.local_id,
            email: account.email,
            display_name: account.display_name,
            id_token: account.id_token,
        })
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let account = self
            .call(
                "signUp",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        info!(uid = %account.local_id, "Account created");

        // display name is cosmetic; the account exists either way
        if let Err(e) = self
            .call(
                "update",
                &ProfileRequest {
                    id_token: &account.id_token,
                    display_name: name,
                    return_secure_token: false,
                },
            )
            .await
        {
            warn!("Could not set display name: {e}");
        }

        Ok(AuthUser {
            uid: account.local_id,
            email: account.email,
            display_name: Some(name.to_string()),
            id_token: account.id_token,
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        // REST sessions are just tokens held by the caller
        Ok(())
    }
}
