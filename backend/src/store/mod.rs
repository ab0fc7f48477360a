//! # Document Store
//!
//! A small document store on top of SQLite. Documents are flat JSON objects
//! grouped into named collections; every document lives in the single
//! `documents` table, tagged with its collection and kept as JSON text.
//!
//! ## Identity
//! - `insert` assigns a UUID v4 string as `_id` and writes it into the body.
//! - Reads return the `_id` field. Stripping it is up to the caller.
//!
//! ## Queries
//! - `find` filters with `json_extract(body, '$.<field>') = ?` per filter
//!   entry, ANDed together, in insertion order (`seq`).
//! - JSON booleans compare as integers 1/0, which is what `json_extract`
//!   yields for `true`/`false`.
//! - A `limit` of 0 means no limit.
//!
//! ## Connection
//! The store holds at most one connection behind a mutex. A store built with
//! [`DocumentStore::disconnected`] has none and fails every operation with
//! [`StoreError::Unavailable`].

mod error;

pub use error::{StoreError, StoreResult};

use log::{error, info};
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// A JSON object as stored in a collection.
pub type Document = Map<String, Value>;

/// Field-to-value equality filter; an empty filter matches every document.
pub type Filter = Map<String, Value>;

/// Store-assigned identity field.
pub const ID_FIELD: &str = "_id";

const BOOTSTRAP_SQL: &str = "
CREATE TABLE IF NOT EXISTS documents (
    seq        INTEGER PRIMARY KEY AUTOINCREMENT,
    id         TEXT NOT NULL UNIQUE,
    collection TEXT NOT NULL,
    body       TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents (collection, seq);
";

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

#[derive(Clone)]
pub struct DocumentStore {
    conn: Option<Arc<Mutex<Connection>>>,
}

impl DocumentStore {
    /// Opens (creating when missing) the database at `location`.
    pub fn open(location: &StoreLocation) -> StoreResult<Self> {
        let conn = match location {
            StoreLocation::Memory => Connection::open_in_memory()?,
            StoreLocation::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        // SQLite will not create missing directories.
                        fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                            path: parent.to_path_buf(),
                            source,
                        })?;
                    }
                }
                Connection::open(path)?
            }
        };
        conn.execute_batch(BOOTSTRAP_SQL)?;
        info!("Document store opened at {:?}", location);

        Ok(Self {
            conn: Some(Arc::new(Mutex::new(conn))),
        })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::open(&StoreLocation::Memory)
    }

    /// Runs raw SQL against the connection, for test fixtures such as triggers.
    #[cfg(test)]
    pub(crate) fn execute_batch(&self, sql: &str) -> StoreResult<()> {
        self.lock()?.execute_batch(sql)?;
        Ok(())
    }

    /// A store without a live connection.
    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        let conn = self.conn.as_ref().ok_or(StoreError::Unavailable)?;
        // Poisoning does not invalidate the connection.
        Ok(conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }

    /// Checks that the connection answers a trivial query.
    pub fn ping(&self) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|source| StoreError::Read {
                collection: "*".to_string(),
                source,
            })?;
        Ok(())
    }

    /// Appends `document` to `collection` and returns its new identifier.
    pub fn insert(&self, collection: &str, document: Document) -> StoreResult<String> {
        let conn = self.lock()?;
        insert_document(&conn, collection, document)
    }

    /// Inserts all `documents` in one transaction: either every document is
    /// stored or none is.
    pub fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> StoreResult<Vec<String>> {
        let mut conn = self.lock()?;
        let write_err = |source| StoreError::Write {
            collection: collection.to_string(),
            source,
        };

        let tx = conn.transaction().map_err(write_err)?;
        let mut ids = Vec::with_capacity(documents.len());
        for document in documents {
            ids.push(insert_document(&tx, collection, document)?);
        }
        tx.commit().map_err(write_err)?;

        Ok(ids)
    }

    /// Returns up to `limit` documents of `collection` matching every entry of
    /// `filter`. Unknown collections yield an empty result.
    pub fn find(
        &self,
        collection: &str,
        filter: &Filter,
        limit: usize,
    ) -> StoreResult<Vec<Document>> {
        let conn = self.lock()?;
        let read_err = |source| StoreError::Read {
            collection: collection.to_string(),
            source,
        };

        let mut sql = String::from("SELECT body FROM documents WHERE collection = ?");
        let mut args: Vec<SqlValue> = vec![SqlValue::Text(collection.to_string())];

        for (field, value) in filter {
            let path = SqlValue::Text(json_path(field));
            match to_sql_value(value) {
                Some(arg) => {
                    sql.push_str(" AND json_extract(body, ?) = ?");
                    args.push(path);
                    args.push(arg);
                }
                None => {
                    sql.push_str(" AND json_extract(body, ?) IS NULL");
                    args.push(path);
                }
            }
        }

        sql.push_str(" ORDER BY seq");
        if limit > 0 {
            sql.push_str(" LIMIT ?");
            args.push(SqlValue::Integer(i64::try_from(limit).unwrap_or(i64::MAX)));
        }

        let mut stmt = conn.prepare(&sql).map_err(read_err)?;
        let bodies = stmt
            .query_map(params_from_iter(args), |row| row.get::<_, String>(0))
            .map_err(read_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_err)?;

        bodies
            .into_iter()
            .map(|body| {
                serde_json::from_str::<Document>(&body).map_err(|source| StoreError::Corrupt {
                    collection: collection.to_string(),
                    source,
                })
            })
            .collect()
    }

    /// Number of documents in `collection`.
    pub fn count(&self, collection: &str) -> StoreResult<u64> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM documents WHERE collection = ?1",
                params![collection],
                |row| row.get(0),
            )
            .map_err(|source| StoreError::Read {
                collection: collection.to_string(),
                source,
            })?;
        Ok(count.max(0) as u64)
    }

    /// Names of the collections currently holding documents, sorted.
    pub fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        let conn = self.lock()?;
        let read_err = |source| StoreError::Read {
            collection: "*".to_string(),
            source,
        };

        let mut stmt = conn
            .prepare("SELECT DISTINCT collection FROM documents ORDER BY collection")
            .map_err(read_err)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(read_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_err)?;
        Ok(names)
    }
}

fn insert_document(
    conn: &Connection,
    collection: &str,
    mut document: Document,
) -> StoreResult<String> {
    let id = Uuid::new_v4().to_string();
    document.insert(ID_FIELD.to_string(), Value::String(id.clone()));

    let body = Value::Object(document).to_string();
    conn.execute(
        "INSERT INTO documents (id, collection, body) VALUES (?1, ?2, ?3)",
        params![&id, collection, &body],
    )
    .map_err(|source| {
        error!("Insert into '{}' failed: {}", collection, source);
        StoreError::Write {
            collection: collection.to_string(),
            source,
        }
    })?;

    Ok(id)
}

/// Builds a JSON path for a top-level field, quoting it so that dots or
/// brackets in the name are not read as path syntax.
fn json_path(field: &str) -> String {
    format!("$.\"{}\"", field.replace('"', "\\\""))
}

/// Maps a filter value onto what `json_extract` returns for it. `None` stands
/// for JSON null.
fn to_sql_value(value: &Value) -> Option<SqlValue> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(SqlValue::Integer(i64::from(*b))),
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => SqlValue::Real(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Value::String(s) => Some(SqlValue::Text(s.clone())),
        // Nested values come back from json_extract as JSON text.
        Value::Array(_) | Value::Object(_) => Some(SqlValue::Text(value.to_string())),
    }
}

/// Turns a serializable record into a document.
pub fn to_document<T: serde::Serialize>(collection: &str, record: &T) -> StoreResult<Document> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(StoreError::InvalidDocument(collection.to_string())),
    }
}
