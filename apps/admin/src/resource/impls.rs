use chrono::{DateTime, SecondsFormat, Utc};
use ieam_core::domain::format_date_br;
use ieam_core::{
    slugify, slugify_or, BlogPost, Congregation, Event, Member, MemberRole, PostCategory,
    PrayerRequest, PrayerStatus,
};
use ulid::Ulid;

use super::{flag_label, parse_flag, split_list, FieldKind, FieldSpec, Resource};

const ROLE_LABELS: &[&str] = &[
    "Pastor",
    "Presbítero",
    "Evangelista",
    "Diácono",
    "Obreiro",
    "Músico",
    "Membro",
];

const CATEGORY_LABELS: &[&str] = &["Notícia", "Evento Realizado"];

const STATUS_LABELS: &[&str] = &["Pendente", "Orado"];

fn fallback_id() -> String {
    Ulid::new().to_string().to_lowercase()
}

impl Resource for Event {
    const COLLECTION: &'static str = "events";
    const PLURAL: &'static str = "Eventos";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Título", FieldKind::Text).required(),
        FieldSpec::new("date", "Data (AAAA-MM-DD)", FieldKind::Text).required(),
        FieldSpec::new("time", "Horário", FieldKind::Text).required(),
        FieldSpec::new("description", "Descrição", FieldKind::Multiline).required(),
        FieldSpec::new("image", "Imagem", FieldKind::Image),
        FieldSpec::new("slug", "Slug (opcional)", FieldKind::Text),
    ];
    const COLUMNS: &'static [&'static str] = &["Título", "Data", "Horário"];
    const SAVE_ERROR: &'static str = "Erro ao salvar evento.";
    const DELETE_ERROR: &'static str = "Erro ao excluir evento.";
    const DELETE_PROMPT: &'static str = "Tem certeza que deseja excluir este evento?";

    fn get(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "date" => self.date.clone(),
            "time" => self.time.clone(),
            "description" => self.description.clone(),
            "image" => self.image.clone(),
            "slug" => self.slug.clone().unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            "title" => self.title = value.to_string(),
            "date" => self.date = value.to_string(),
            "time" => self.time = value.to_string(),
            "description" => self.description = value.to_string(),
            "image" => self.image = value.to_string(),
            "slug" => self.slug = Some(slugify(value)).filter(|slug| !slug.is_empty()),
            _ => {}
        }
    }

    fn row(&self) -> Vec<String> {
        vec![self.title.clone(), format_date_br(&self.date), self.time.clone()]
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.date, self.description)
    }

    fn prepare(&mut self, _now: DateTime<Utc>) {
        if self.slug.as_deref().map_or(true, str::is_empty) {
            self.slug = Some(slugify_or(&self.title, fallback_id));
        }
    }
}

impl Resource for Member {
    const COLLECTION: &'static str = "members";
    const PLURAL: &'static str = "Membros";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Nome", FieldKind::Text).required(),
        FieldSpec::new("role", "Cargo", FieldKind::Choice(ROLE_LABELS)).required(),
        FieldSpec::new("email", "E-mail", FieldKind::Text),
        FieldSpec::new("phone", "Telefone", FieldKind::Text),
        FieldSpec::new("photo", "Foto", FieldKind::Image),
        FieldSpec::new("isAdmin", "Administrador", FieldKind::Toggle).admin_only(),
    ];
    const COLUMNS: &'static [&'static str] = &["Nome", "Cargo", "E-mail", "Telefone", "Admin"];
    const SAVE_ERROR: &'static str = "Erro ao salvar membro.";
    const DELETE_ERROR: &'static str = "Erro ao excluir membro.";
    const DELETE_PROMPT: &'static str = "Tem certeza que deseja excluir este membro?";
    const CATEGORIES: &'static [&'static str] = ROLE_LABELS;

    fn get(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "role" => self.role.as_str().to_string(),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "photo" => self.photo.clone(),
            "isAdmin" => flag_label(self.is_admin),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            "name" => self.name = value.to_string(),
            "role" => self.role = MemberRole::parse(value).unwrap_or_default(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "photo" => self.photo = value.to_string(),
            "isAdmin" => self.is_admin = parse_flag(value),
            _ => {}
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.role.as_str().to_string(),
            self.email.clone(),
            self.phone.clone(),
            flag_label(self.is_admin),
        ]
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.role.as_str())
    }

    fn category(&self) -> Option<usize> {
        Some(self.role.index())
    }
}

impl Resource for Congregation {
    const COLLECTION: &'static str = "congregations";
    const PLURAL: &'static str = "Congregações";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Nome", FieldKind::Text).required(),
        FieldSpec::new("address", "Endereço", FieldKind::Text).required(),
        FieldSpec::new("pastor", "Pastor responsável", FieldKind::Text).required(),
        FieldSpec::new("schedule", "Horários", FieldKind::Text).required(),
        FieldSpec::new("mapUrl", "Link do mapa", FieldKind::Text).required(),
    ];
    const COLUMNS: &'static [&'static str] = &["Nome", "Endereço", "Pastor", "Horários"];
    const SAVE_ERROR: &'static str = "Erro ao salvar congregação.";
    const DELETE_ERROR: &'static str = "Erro ao excluir congregação.";
    const DELETE_PROMPT: &'static str = "Tem certeza que deseja excluir esta congregação?";

    fn get(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "address" => self.address.clone(),
            "pastor" => self.pastor.clone(),
            "schedule" => self.schedule.clone(),
            "mapUrl" => self.map_url.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            "name" => self.name = value.to_string(),
            "address" => self.address = value.to_string(),
            "pastor" => self.pastor = value.to_string(),
            "schedule" => self.schedule = value.to_string(),
            "mapUrl" => self.map_url = value.to_string(),
            _ => {}
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.address.clone(),
            self.pastor.clone(),
            self.schedule.clone(),
        ]
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.address, self.pastor)
    }
}

impl Resource for BlogPost {
    const COLLECTION: &'static str = "posts";
    const PLURAL: &'static str = "Blog";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("title", "Título", FieldKind::Text).required(),
        FieldSpec::new("category", "Categoria", FieldKind::Choice(CATEGORY_LABELS)).required(),
        FieldSpec::new("content", "Conteúdo", FieldKind::Multiline).required(),
        FieldSpec::new("coverImage", "Imagem de capa", FieldKind::Image).required(),
        FieldSpec::new("images", "Galeria (URLs separadas por vírgula)", FieldKind::List),
        FieldSpec::new("videoUrl", "Vídeo (YouTube/Vimeo)", FieldKind::Text),
        FieldSpec::new("author", "Autor", FieldKind::Text).required(),
        FieldSpec::new("tags", "Tags (separadas por vírgula)", FieldKind::List),
    ];
    const COLUMNS: &'static [&'static str] = &["Título", "Categoria", "Autor", "Publicado"];
    const SAVE_ERROR: &'static str = "Erro ao salvar post.";
    const DELETE_ERROR: &'static str = "Erro ao excluir post.";
    const DELETE_PROMPT: &'static str = "Tem certeza que deseja excluir este post?";
    const CATEGORIES: &'static [&'static str] = CATEGORY_LABELS;

    fn get(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "category" => self.category.as_str().to_string(),
            "content" => self.content.clone(),
            "coverImage" => self.cover_image.clone(),
            "images" => self.images.join(", "),
            "videoUrl" => self.video_url.clone().unwrap_or_default(),
            "author" => self.author.clone(),
            "tags" => self.tags.join(", "),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            "title" => self.title = value.to_string(),
            "category" => self.category = PostCategory::parse(value).unwrap_or_default(),
            "content" => self.content = value.to_string(),
            "coverImage" => self.cover_image = value.to_string(),
            "images" => self.images = split_list(value),
            "videoUrl" => {
                self.video_url = Some(value.trim().to_string()).filter(|url| !url.is_empty());
            }
            "author" => self.author = value.to_string(),
            "tags" => self.tags = split_list(value),
            _ => {}
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.category.as_str().to_string(),
            self.author.clone(),
            self.published_on(),
        ]
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.author, self.tags.join(" "))
    }

    fn category(&self) -> Option<usize> {
        PostCategory::ALL
            .iter()
            .position(|category| *category == self.category)
    }

    /// The slug follows the title; the publish date is set once.
    fn prepare(&mut self, now: DateTime<Utc>) {
        self.slug = slugify_or(&self.title, fallback_id);
        if self.published_at.is_empty() {
            self.published_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        }
    }

    fn gallery_key() -> Option<&'static str> {
        Some("images")
    }
}

impl Resource for PrayerRequest {
    const COLLECTION: &'static str = "prayer_requests";
    const PLURAL: &'static str = "Pedidos de Oração";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Nome", FieldKind::Text).required(),
        FieldSpec::new("email", "E-mail", FieldKind::Text),
        FieldSpec::new("phone", "Telefone", FieldKind::Text),
        FieldSpec::new("request", "Pedido", FieldKind::Multiline).required(),
        FieldSpec::new("status", "Status", FieldKind::Choice(STATUS_LABELS)),
    ];
    const COLUMNS: &'static [&'static str] = &["Nome", "Pedido", "Status", "Recebido"];
    const SAVE_ERROR: &'static str = "Erro ao salvar pedido de oração.";
    const DELETE_ERROR: &'static str = "Erro ao excluir pedido de oração.";
    const DELETE_PROMPT: &'static str = "Tem certeza que deseja excluir este pedido?";
    const CATEGORIES: &'static [&'static str] = STATUS_LABELS;

    fn get(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "phone" => self.phone.clone(),
            "request" => self.request.clone(),
            "status" => self.status.as_str().to_string(),
            _ => String::new(),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            "request" => self.request = value.to_string(),
            "status" => self.status = PrayerStatus::parse(value).unwrap_or_default(),
            _ => {}
        }
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.request.clone(),
            self.status.as_str().to_string(),
            format_date_br(&self.created_at),
        ]
    }

    fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.email, self.request)
    }

    fn category(&self) -> Option<usize> {
        Some(match self.status {
            PrayerStatus::Pendente => 0,
            PrayerStatus::Orado => 1,
        })
    }

    fn prepare(&mut self, now: DateTime<Utc>) {
        if self.created_at.is_empty() {
            self.created_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        }
    }
}
