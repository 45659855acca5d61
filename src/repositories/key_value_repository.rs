// src/repositories/key_value_repository.rs
//
// Durable string-keyed store for JSON values

use std::sync::Arc;

use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::{get_connection, ConnectionPool};
use crate::error::AppResult;

pub trait KeyValueRepository: Send + Sync {
    /// Raw JSON text stored under `key`
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> AppResult<()>;
}

pub struct SqliteKeyValueRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteKeyValueRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl KeyValueRepository for SqliteKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;

        let value = conn
            .query_row(
                "SELECT value FROM key_value WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> AppResult<()> {
        let conn = get_connection(&self.pool)?;

        conn.execute(
            "INSERT INTO key_value (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value],
        )?;

        Ok(())
    }
}

/// Decode the JSON value stored under `key`
pub fn read_json<T: DeserializeOwned>(
    repo: &dyn KeyValueRepository,
    key: &str,
) -> AppResult<Option<T>> {
    match repo.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`
pub fn write_json<T: Serialize + ?Sized>(
    repo: &dyn KeyValueRepository,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    repo.put(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, create_memory_pool, initialize_database};
    use crate::error::AppError;

    fn memory_repo() -> SqliteKeyValueRepository {
        let pool = create_memory_pool().unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        SqliteKeyValueRepository::new(Arc::new(pool))
    }

    #[test]
    fn test_absent_key_is_none() {
        let repo = memory_repo();
        assert_eq!(repo.get("favorites").unwrap(), None);
        assert_eq!(read_json::<Vec<u32>>(&repo, "favorites").unwrap(), None);
    }

    #[test]
    fn test_put_overwrites() {
        let repo = memory_repo();
        repo.put("favorites", "[1]").unwrap();
        repo.put("favorites", "[1,2]").unwrap();
        assert_eq!(repo.get("favorites").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_json_helpers() {
        let repo = memory_repo();
        write_json(&repo, "favorites", &vec![3u32, 1, 2]).unwrap();
        let ids: Option<Vec<u32>> = read_json(&repo, "favorites").unwrap();
        assert_eq!(ids, Some(vec![3, 1, 2]));
    }

    #[test]
    fn test_corrupt_value_is_serialization_error() {
        let repo = memory_repo();
        repo.put("favorites", "not json").unwrap();
        let result = read_json::<Vec<u32>>(&repo, "favorites");
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_values_survive_pool_recreation() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("charhub.db");

        {
            let pool = create_connection_pool(&db_path).unwrap();
            initialize_database(&pool.get().unwrap()).unwrap();
            let repo = SqliteKeyValueRepository::new(Arc::new(pool));
            write_json(&repo, "favorites", &[5u32, 6]).unwrap();
        }

        let pool = create_connection_pool(&db_path).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        let repo = SqliteKeyValueRepository::new(Arc::new(pool));
        let ids: Option<Vec<u32>> = read_json(&repo, "favorites").unwrap();
        assert_eq!(ids, Some(vec![5, 6]));
    }
}
