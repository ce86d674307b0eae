use chrono::Utc;
use coach_core::model::CompletedInterview;
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{InterviewHistoryRepository, InterviewRow, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn conn(e: sqlx::Error) -> StorageError {
    StorageError::Connection(e.to_string())
}

fn decode_payload(payload: &str) -> Result<CompletedInterview, StorageError> {
    serde_json::from_str(payload).map_err(ser)
}

#[async_trait::async_trait]
impl InterviewHistoryRepository for SqliteRepository {
    async fn append_interview(&self, record: &CompletedInterview) -> Result<i64, StorageError> {
        let payload = serde_json::to_string(record).map_err(ser)?;

        let res = sqlx::query(
            r"
                INSERT INTO local_store_log (storage_key, payload, appended_at)
                VALUES (?1, ?2, ?3)
            ",
        )
        .bind(self.storage_key.as_str())
        .bind(payload.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        let id = res.last_insert_rowid();
        tracing::debug!(id, key = %self.storage_key, bytes = payload.len(), "appended interview");
        Ok(id)
    }

    async fn list_interviews(&self) -> Result<Vec<InterviewRow>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT id, payload
                FROM local_store_log
                WHERE storage_key = ?1
                ORDER BY id ASC
            ",
        )
        .bind(self.storage_key.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i64 = row.try_get("id").map_err(ser)?;
            let payload: String = row.try_get("payload").map_err(ser)?;
            out.push(InterviewRow::new(id, decode_payload(&payload)?));
        }
        Ok(out)
    }

    async fn get_interview(&self, id: i64) -> Result<CompletedInterview, StorageError> {
        let row = sqlx::query(
            r"
                SELECT payload
                FROM local_store_log
                WHERE storage_key = ?1 AND id = ?2
            ",
        )
        .bind(self.storage_key.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(conn)?
        .ok_or(StorageError::NotFound)?;

        let payload: String = row.try_get("payload").map_err(ser)?;
        decode_payload(&payload)
    }
}
