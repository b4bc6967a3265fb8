//! One generic list/modal/delete manager, parameterized by a field schema.

mod impls;
pub mod manager;

use chrono::{DateTime, Utc};
use ieam_core::FormError;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use manager::{AdminPanel, Confirm, Draft, ListFilter, LoadTicket, ManagerError, ResourceManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    /// One of a fixed set of labels; edited by cycling.
    Choice(&'static [&'static str]),
    Toggle,
    /// A URL that may be replaced by uploading a local file.
    Image,
    /// Comma-separated list.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Only admin sessions may see or change this field.
    pub admin_only: bool,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            admin_only: false,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn admin_only(self) -> Self {
        Self {
            admin_only: true,
            ..self
        }
    }
}

/// A record type the admin dashboard can manage.
pub trait Resource: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;
    /// Title of the list screen.
    const PLURAL: &'static str;
    const FIELDS: &'static [FieldSpec];
    const COLUMNS: &'static [&'static str];
    const SAVE_ERROR: &'static str;
    const DELETE_ERROR: &'static str;
    const DELETE_PROMPT: &'static str;
    /// Labels for the list filter; empty when the list has none.
    const CATEGORIES: &'static [&'static str] = &[];

    fn get(&self, key: &str) -> String;

    fn set(&mut self, key: &str, value: &str);

    fn row(&self) -> Vec<String>;

    fn search_text(&self) -> String;

    /// Position of the record's category in [`Self::CATEGORIES`].
    fn category(&self) -> Option<usize> {
        None
    }

    /// Fills derived fields right before the record is written.
    fn prepare(&mut self, _now: DateTime<Utc>) {}

    /// Field that receives the uploaded image URL.
    fn image_key() -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .find(|field| field.kind == FieldKind::Image)
            .map(|field| field.key)
    }

    /// Field that gallery uploads are appended to.
    fn gallery_key() -> Option<&'static str> {
        None
    }

    /// Required-field check. An attached but not yet uploaded image counts
    /// as filling the image field.
    fn validate(&self, image_attached: bool) -> Result<(), FormError> {
        let missing = Self::FIELDS.iter().filter(|field| field.required).any(|field| {
            let filled_by_upload = image_attached && field.kind == FieldKind::Image;
            !filled_by_upload && self.get(field.key).trim().is_empty()
        });
        if missing {
            Err(FormError::MissingFields)
        } else {
            Ok(())
        }
    }
}

/// Splits a comma-separated form value, dropping blanks.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "sim" | "s" | "yes" | "1"
    )
}

pub(crate) fn flag_label(value: bool) -> String {
    if value { "Sim" } else { "Não" }.to_string()
}
