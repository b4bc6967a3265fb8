use std::ops::{Deref, DerefMut};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::slug::slugify;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MemberRole {
    Pastor,
    #[serde(rename = "Presbítero")]
    Presbitero,
    Evangelista,
    #[serde(rename = "Diácono")]
    Diacono,
    Obreiro,
    #[serde(rename = "Músico")]
    Musico,
    #[default]
    Membro,
}

impl MemberRole {
    pub const ALL: [Self; 7] = [
        Self::Pastor,
        Self::Presbitero,
        Self::Evangelista,
        Self::Diacono,
        Self::Obreiro,
        Self::Musico,
        Self::Membro,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pastor => "Pastor",
            Self::Presbitero => "Presbítero",
            Self::Evangelista => "Evangelista",
            Self::Diacono => "Diácono",
            Self::Obreiro => "Obreiro",
            Self::Musico => "Músico",
            Self::Membro => "Membro",
        }
    }

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

    /// Accepts the display label with or without accents, in any case.
    pub fn parse(value: &str) -> Option<Self> {
        let wanted = slugify(value);
        Self::ALL
            .into_iter()
            .find(|role| slugify(role.as_str()) == wanted)
    }

    /// Roles counted as leadership on the dashboard.
    pub const fn is_leadership(self) -> bool {
        matches!(self, Self::Pastor | Self::Presbitero | Self::Diacono)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostCategory {
    #[default]
    #[serde(rename = "Notícia")]
    Noticia,
    #[serde(rename = "Evento Realizado")]
    EventoRealizado,
}

impl PostCategory {
    pub const ALL: [Self; 2] = [Self::Noticia, Self::EventoRealizado];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Noticia => "Notícia",
            Self::EventoRealizado => "Evento Realizado",
        }
    }

    /// Plural label used on filter buttons.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Noticia => "Notícias",
            Self::EventoRealizado => "Eventos Realizados",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = slugify(value);
        Self::ALL
            .into_iter()
            .find(|category| slugify(category.as_str()) == wanted)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerStatus {
    #[default]
    Pendente,
    Orado,
}

impl PrayerStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::Orado => "Orado",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Pendente => Self::Orado,
            Self::Orado => Self::Pendente,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pendente" => Some(Self::Pendente),
            "orado" => Some(Self::Orado),
            _ => None,
        }
    }
}

/// A record as stored in a collection: the store-assigned id next to the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<T> {
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Document<T> {
    pub fn new(id: impl Into<String>, fields: T) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

impl<T> Deref for Document<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.fields
    }
}

impl<T> DerefMut for Document<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.fields
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Event {
    /// The stored slug, or one derived from the title for older records.
    pub fn slug(&self) -> String {
        self.slug
            .as_deref()
            .filter(|slug| !slug.is_empty())
            .map_or_else(|| slugify(&self.title), str::to_string)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    pub name: String,
    pub role: MemberRole,
    pub email: String,
    pub phone: String,
    pub photo: String,
    pub is_admin: bool,
}

impl Member {
    pub fn avatar(&self) -> String {
        if self.photo.is_empty() {
            crate::media::avatar_url(&self.name)
        } else {
            self.photo.clone()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Congregation {
    pub name: String,
    pub address: String,
    pub pastor: String,
    pub schedule: String,
    pub map_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub category: PostCategory,
    pub content: String,
    pub cover_image: String,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub published_at: String,
    pub author: String,
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn published_on(&self) -> String {
        format_date_br(&self.published_at)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrayerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub request: String,
    pub status: PrayerStatus,
    pub created_at: String,
}

/// Renders an RFC 3339 timestamp or a `YYYY-MM-DD` date as `dd/mm/yyyy`.
/// Free-text dates ("Todo Domingo") come back unchanged.
pub fn format_date_br(value: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return timestamp.format("%d/%m/%Y").to_string();
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_or_else(|_| value.to_string(), |date| date.format("%d/%m/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_ignores_accents_and_case() {
        assert_eq!(MemberRole::parse("presbitero"), Some(MemberRole::Presbitero));
        assert_eq!(MemberRole::parse("DIÁCONO"), Some(MemberRole::Diacono));
        assert_eq!(MemberRole::parse("Bispo"), None);
    }

    #[test]
    fn role_index_round_trips() {
        for role in MemberRole::ALL {
            assert_eq!(MemberRole::from_index(role.index()), Some(role));
        }
        assert_eq!(MemberRole::from_index(7), None);
    }

    #[test]
    fn member_json_uses_store_field_names() -> Result<(), serde_json::Error> {
        let member = Document::new(
            "abc",
            Member {
                name: "Ana".to_string(),
                role: MemberRole::Diacono,
                is_admin: true,
                ..Member::default()
            },
        );

        let json = serde_json::to_value(&member)?;
        assert_eq!(json["id"], "abc");
        assert_eq!(json["role"], "Diácono");
        assert_eq!(json["isAdmin"], true);
        assert!(json.get("uid").is_none());
        Ok(())
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() -> Result<(), serde_json::Error> {
        let post: Document<BlogPost> =
            serde_json::from_str(r#"{"id":"p1","title":"Culto","category":"Evento Realizado"}"#)?;

        assert_eq!(post.id, "p1");
        assert_eq!(post.category, PostCategory::EventoRealizado);
        assert!(post.images.is_empty());
        assert_eq!(post.video_url, None);
        Ok(())
    }

    #[test]
    fn event_slug_falls_back_to_title() {
        let event = Event {
            title: "Noite de Louvor".to_string(),
            ..Event::default()
        };
        assert_eq!(event.slug(), "noite-de-louvor");

        let event = Event {
            slug: Some("custom".to_string()),
            ..event
        };
        assert_eq!(event.slug(), "custom");
    }

    #[test]
    fn dates_render_in_brazilian_format() {
        assert_eq!(format_date_br("2024-08-10T19:00:00Z"), "10/08/2024");
        assert_eq!(format_date_br("2024-08-10"), "10/08/2024");
        assert_eq!(format_date_br("Todo Domingo"), "Todo Domingo");
    }

    #[test]
    fn prayer_status_toggles() {
        assert_eq!(PrayerStatus::Pendente.toggled(), PrayerStatus::Orado);
        assert_eq!(PrayerStatus::parse(" ORADO "), Some(PrayerStatus::Orado));
    }
}
