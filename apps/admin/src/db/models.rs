use sqlx::FromRow;

/// One stored document; `body` holds the JSON fields without the id.
#[derive(Debug, FromRow, Clone)]
pub struct DocumentRow {
    pub id: String,
    pub body: String,
    pub created: String,
}
