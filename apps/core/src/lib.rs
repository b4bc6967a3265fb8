// Shared domain for the IEAM admin dashboard and public site.
// Everything here is pure and builds for wasm32 as well as native targets.

pub mod content;
pub mod dashboard;
pub mod domain;
pub mod export;
pub mod forms;
pub mod media;
pub mod router;
pub mod slug;

pub use domain::{
    BlogPost, Congregation, Document, Event, Member, MemberRole, PostCategory, PrayerRequest,
    PrayerStatus,
};
pub use export::SiteExport;
pub use forms::{FormError, PublicForm, Submission};
pub use router::{Navigator, Page, Route};
pub use slug::{slugify, slugify_or};
