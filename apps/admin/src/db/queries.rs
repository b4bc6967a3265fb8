use sqlx::{query, query_as, SqlitePool};

use crate::db::models::DocumentRow;

/// All documents of a collection, oldest first.
pub async fn list_documents(
    pool: &SqlitePool,
    collection: &str,
) -> Result<Vec<DocumentRow>, sqlx::Error> {
    query_as::<_, DocumentRow>(
        "SELECT id, body, created FROM documents WHERE collection = ? ORDER BY created, id",
    )
    .bind(collection)
    .fetch_all(pool)
    .await
}

pub async fn insert_document(
    pool: &SqlitePool,
    collection: &str,
    id: &str,
    body: &str,
    timestamp: &str,
) -> Result<(), sqlx::Error> {
    query(
        "INSERT INTO documents (collection, id, body, created, updated) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(collection)
    .bind(id)
    .bind(body)
    .bind(timestamp)
    .bind(timestamp)
    .execute(pool)
    .await?;

    Ok(())
}

/// Replaces the body; returns false when no such document exists.
pub async fn update_document(
    pool: &SqlitePool,
    collection: &str,
    id: &str,
    body: &str,
    timestamp: &str,
) -> Result<bool, sqlx::Error> {
    let result = query("UPDATE documents SET body = ?, updated = ? WHERE collection = ? AND id = ?")
        .bind(body)
        .bind(timestamp)
        .bind(collection)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_document(
    pool: &SqlitePool,
    collection: &str,
    id: &str,
) -> Result<bool, sqlx::Error> {
    let result = query("DELETE FROM documents WHERE collection = ? AND id = ?")
        .bind(collection)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::create_database_pool_with_url;

    async fn setup_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = create_database_pool_with_url("sqlite::memory:").await?;

        query(
            "INSERT INTO documents (collection, id, body, created, updated)
             VALUES ('events', 'a', '{\"title\":\"Culto\"}', '2024-01-01', '2024-01-01'),
                    ('events', 'b', '{\"title\":\"Retiro\"}', '2024-02-01', '2024-02-01'),
                    ('members', 'm', '{\"name\":\"Ana\"}', '2024-01-05', '2024-01-05')",
        )
        .execute(&pool)
        .await?;

        Ok(pool)
    }

    #[tokio::test]
    async fn test_list_documents_is_scoped_by_collection() -> Result<(), Box<dyn std::error::Error>> {
        let pool = setup_test_db().await?;

        let events = list_documents(&pool, "events").await?;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "a");
        assert_eq!(list_documents(&pool, "members").await?.len(), 1);
        assert!(list_documents(&pool, "posts").await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_delete_report_missing_rows() -> Result<(), Box<dyn std::error::Error>> {
        let pool = setup_test_db().await?;

        assert!(update_document(&pool, "events", "a", "{}", "2024-03-01").await?);
        assert!(!update_document(&pool, "events", "zzz", "{}", "2024-03-01").await?);

        let events = list_documents(&pool, "events").await?;
        let updated = events.iter().find(|row| row.id == "a");
        assert_eq!(updated.map(|row| row.body.as_str()), Some("{}"));

        assert!(delete_document(&pool, "events", "b").await?);
        assert!(!delete_document(&pool, "events", "b").await?);
        assert_eq!(list_documents(&pool, "events").await?.len(), 1);

        Ok(())
    }
}
