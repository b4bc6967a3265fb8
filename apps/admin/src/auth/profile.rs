//! Member profile lookup, creation and self-service edits.

use std::path::PathBuf;

use ieam_core::{media, Document, Member, MemberRole};
use thiserror::Error;
use tracing::{info, warn};

use super::AuthUser;
use crate::store::{create_typed, list_typed, update_typed, DocumentStore, StoreError};
use crate::upload::{ImageUploader, UploadError};

pub const MEMBERS: &str = "members";

/// Finds the member linked to `user`, linking or creating one when needed.
///
/// Lookup order: a member whose `uid` matches, then an unlinked member with
/// the same email (records an admin created before the person signed up),
/// then a fresh `Membro` record. The second value says whether the session
/// may open the admin dashboard.
pub async fn resolve_member(
    store: &dyn DocumentStore,
    user: &AuthUser,
    admin_email: &str,
) -> Result<(Document<Member>, bool), StoreError> {
    let members: Vec<Document<Member>> = list_typed(store, MEMBERS).await?;

    let by_uid = members
        .iter()
        .find(|member| member.uid.as_deref() == Some(user.uid.as_str()));
    let by_email = || {
        members.iter().find(|member| {
            member.uid.is_none() && !member.email.is_empty() && member.email.eq_ignore_ascii_case(&user.email)
        })
    };

    let member = if let Some(member) = by_uid {
        member.clone()
    } else if let Some(unlinked) = by_email() {
        let linked = Member {
            uid: Some(user.uid.clone()),
            ..unlinked.fields.clone()
        };
        info!(id = %unlinked.id, "Linking existing member to account");
        update_typed(store, MEMBERS, &unlinked.id, &linked).await?
    } else {
        let name = user
            .display_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| user.email.clone());
        let fresh = Member {
            uid: Some(user.uid.clone()),
            photo: media::avatar_url(&name),
            name,
            role: MemberRole::Membro,
            email: user.email.clone(),
            ..Member::default()
        };
        info!(uid = %user.uid, "Creating member profile");
        create_typed(store, MEMBERS, &fresh).await?
    };

    let is_admin = member.is_admin
        || (!admin_email.is_empty() && user.email.eq_ignore_ascii_case(admin_email));
    Ok((member, is_admin))
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ProfileError {
    pub const SUCCESS: &'static str = "Perfil atualizado com sucesso!";

    pub const fn alert_message(&self) -> &'static str {
        match self {
            Self::Upload(_) => "Erro ao fazer upload da imagem.",
            Self::Store(_) => "Erro ao atualizar perfil.",
        }
    }
}

/// The fields a member may change on their own profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub phone: String,
    pub photo: String,
    pub photo_file: Option<PathBuf>,
}

impl ProfileDraft {
    pub fn from_member(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            phone: member.phone.clone(),
            photo: member.photo.clone(),
            photo_file: None,
        }
    }
}

/// Saves name, phone and photo. Role and admin flag are carried over untouched.
pub async fn update_profile(
    store: &dyn DocumentStore,
    uploader: &dyn ImageUploader,
    member: &Document<Member>,
    draft: &ProfileDraft,
) -> Result<Document<Member>, ProfileError> {
    let photo = match &draft.photo_file {
        Some(file) => uploader.upload(file).await?,
        None => draft.photo.clone(),
    };

    let updated = Member {
        name: draft.name.trim().to_string(),
        phone: draft.phone.trim().to_string(),
        photo,
        ..member.fields.clone()
    };
    update_typed(store, MEMBERS, &member.id, &updated)
        .await
        .map_err(|e| {
            warn!(id = %member.id, "Profile update failed: {e}");
            ProfileError::from(e)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::to_fields;
    use crate::testing::{call_log, calls, FakeUploader, MemoryStore};

    fn user(uid: &str, email: &str) -> AuthUser {
        AuthUser {
            uid: uid.to_string(),
            email: email.to_string(),
            display_name: Some("Marta".to_string()),
            id_token: String::new(),
        }
    }

    #[tokio::test]
    async fn creates_membro_profile_on_first_sign_in() -> Result<(), Box<dyn std::error::Error>> {
        let store = MemoryStore::default();
        let (member, is_admin) = resolve_member(&store, &user("u1", "marta@x.com"), "").await?;

        assert!(!is_admin);
        assert_eq!(member.role, MemberRole::Membro);
        assert_eq!(member.uid.as_deref(), Some("u1"));
        assert_eq!(member.name, "Marta");
        assert_eq!(store.documents(MEMBERS).len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn admin_flag_comes_from_member_record() -> Result<(), Box<dyn std::error::Error>> {
        let store = MemoryStore::default();
        let admin = Member {
            uid: Some("u9".to_string()),
            name: "Pr. João".to_string(),
            role: MemberRole::Pastor,
            is_admin: true,
            ..Member::default()
        };
        store.seed(MEMBERS, "m1", to_fields(&admin)?);

        let (member, is_admin) = resolve_member(&store, &user("u9", "joao@x.com"), "").await?;
        assert!(is_admin);
        assert_eq!(member.id, "m1");
        assert_eq!(store.documents(MEMBERS).len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn bootstrap_email_grants_admin() -> Result<(), Box<dyn std::error::Error>> {
        let store = MemoryStore::default();
        let (_, is_admin) =
            resolve_member(&store, &user("u1", "Admin@IEAM.com.br"), "admin@ieam.com.br").await?;
        assert!(is_admin);
        Ok(())
    }

    #[tokio::test]
    async fn unlinked_member_with_same_email_is_linked() -> Result<(), Box<dyn std::error::Error>> {
        let store = MemoryStore::default();
        let existing = Member {
            name: "Lucas".to_string(),
            email: "lucas@x.com".to_string(),
            role: MemberRole::Musico,
            ..Member::default()
        };
        store.seed(MEMBERS, "m7", to_fields(&existing)?);

        let (member, _) = resolve_member(&store, &user("u7", "lucas@x.com"), "").await?;
        assert_eq!(member.id, "m7");
        assert_eq!(member.role, MemberRole::Musico);
        assert_eq!(member.uid.as_deref(), Some("u7"));
        Ok(())
    }

    #[tokio::test]
    async fn profile_update_uploads_photo_and_keeps_role() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::with_log(log.clone());
        let uploader = FakeUploader::returning("https://i.ibb.co/p.png", log.clone());
        let member = Member {
            name: "Ana".to_string(),
            role: MemberRole::Diacono,
            ..Member::default()
        };
        store.seed(MEMBERS, "m1", to_fields(&member)?);
        let member = Document::new("m1", member);

        let draft = ProfileDraft {
            name: " Ana Paula ".to_string(),
            phone: "(92) 99999-0000".to_string(),
            photo_file: Some(PathBuf::from("me.png")),
            ..ProfileDraft::from_member(&member)
        };
        let updated = update_profile(&store, &uploader, &member, &draft).await?;

        assert_eq!(updated.name, "Ana Paula");
        assert_eq!(updated.photo, "https://i.ibb.co/p.png");
        assert_eq!(updated.role, MemberRole::Diacono);
        assert_eq!(calls(&log), vec!["upload me.png", "update members m1"]);
        Ok(())
    }

    #[tokio::test]
    async fn failed_upload_skips_the_update() -> Result<(), Box<dyn std::error::Error>> {
        let log = call_log();
        let store = MemoryStore::with_log(log.clone());
        let uploader = FakeUploader::failing(log.clone());
        let member = Document::new("m1", Member::default());
        let draft = ProfileDraft {
            photo_file: Some(PathBuf::from("me.png")),
            ..ProfileDraft::default()
        };

        let err = update_profile(&store, &uploader, &member, &draft)
            .await
            .err()
            .ok_or("expected an error")?;
        assert_eq!(err.alert_message(), "Erro ao fazer upload da imagem.");
        assert_eq!(calls(&log), vec!["upload me.png"]);
        Ok(())
    }
}
