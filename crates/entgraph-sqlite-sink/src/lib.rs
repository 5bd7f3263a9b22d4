//! SQLite sink for entgraph.
//!
//! Each entity kind gets its own table keyed by `id`, so identifiers only have
//! to be unique within a kind. Writes are `INSERT ... ON CONFLICT(id) DO
//! UPDATE`, which makes replaying an invocation converge to the same rows.
//! Reference lists (`attrs`, `signatures`) are stored as JSON arrays.
//!
//! [`Sink::upsert_all`] commits one invocation in a single transaction.

use anyhow::{anyhow, Context, Result};
use entgraph::etl::{
    AttrEntity, CallEntity, Entity, EntityKind, EventEntity, SignatureEntity, TransactionEntity,
};
use entgraph::{Sink, Upsert};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    type TEXT NOT NULL,
    json_value TEXT,
    attrs TEXT NOT NULL DEFAULT '[]'
);
CREATE TABLE IF NOT EXISTS calls (
    id TEXT PRIMARY KEY,
    type TEXT NOT NULL,
    json_value TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS attrs (
    id TEXT PRIMARY KEY,
    key TEXT NOT NULL,
    value TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS transactions (
    id TEXT PRIMARY KEY,
    result_code INTEGER NOT NULL,
    result_data TEXT NOT NULL,
    result_log TEXT NOT NULL,
    result_info TEXT NOT NULL,
    result_gas_wanted INTEGER NOT NULL,
    result_gas_used INTEGER NOT NULL,
    signatures TEXT NOT NULL DEFAULT '[]'
);
CREATE TABLE IF NOT EXISTS signatures (
    id TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_events_type ON events(type);
CREATE INDEX IF NOT EXISTS idx_calls_type ON calls(type);
";

/// Table holding entities of `kind`.
pub fn table(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Event => "events",
        EntityKind::Call => "calls",
        EntityKind::Attr => "attrs",
        EntityKind::Transaction => "transactions",
        EntityKind::Signature => "signatures",
    }
}

pub struct SqliteSink {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSink {
    /// Create or open the database at `db_path`.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        let conn = Connection::open(db_path)
            .with_context(|| format!("failed to open {}", db_path.display()))?;

        // WAL lets readers run alongside the writer; NORMAL sync is safe with WAL.
        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             PRAGMA synchronous=NORMAL;
             PRAGMA cache_size=-64000;
             PRAGMA temp_store=MEMORY;
             PRAGMA busy_timeout=5000;",
        )?;

        tracing::info!(
            target: "entgraph::sinks::sqlite",
            path = %db_path.display(),
            "SQLite configured: WAL mode, 64MB cache, NORMAL sync"
        );

        Self::with_connection(conn)
    }

    /// Private database that lives as long as the sink.
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA).context("failed to create schema")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("sqlite connection lock poisoned"))
    }

    /// Number of stored entities of `kind`.
    pub fn count(&self, kind: EntityKind) -> Result<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", table(kind)),
            [],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count)?)
    }

    /// Reads back the entity stored under `(kind, id)`.
    pub fn fetch(&self, kind: EntityKind, id: &str) -> Result<Option<Entity>> {
        let conn = self.conn()?;
        let entity = match kind {
            EntityKind::Event => conn
                .query_row(
                    "SELECT type, json_value, attrs FROM events WHERE id = ?1",
                    [id],
                    read_event,
                )
                .optional()?
                .map(|(entity, attrs)| -> Result<Entity> {
                    Ok(Entity::Event(EventEntity {
                        attrs: serde_json::from_str(&attrs)?,
                        ..entity
                    }))
                })
                .transpose()?,
            EntityKind::Call => conn
                .query_row(
                    "SELECT type, json_value FROM calls WHERE id = ?1",
                    [id],
                    |row| {
                        Ok(Entity::Call(CallEntity {
                            type_name: row.get(0)?,
                            json_value: row.get(1)?,
                        }))
                    },
                )
                .optional()?,
            EntityKind::Attr => conn
                .query_row("SELECT key, value FROM attrs WHERE id = ?1", [id], |row| {
                    Ok(Entity::Attr(AttrEntity {
                        key: row.get(0)?,
                        value: row.get(1)?,
                    }))
                })
                .optional()?,
            EntityKind::Transaction => conn
                .query_row(
                    "SELECT result_code, result_data, result_log, result_info,
                            result_gas_wanted, result_gas_used, signatures
                     FROM transactions WHERE id = ?1",
                    [id],
                    read_transaction,
                )
                .optional()?
                .map(|(entity, signatures)| -> Result<Entity> {
                    Ok(Entity::Transaction(TransactionEntity {
                        signatures: serde_json::from_str(&signatures)?,
                        ..entity
                    }))
                })
                .transpose()?,
            EntityKind::Signature => conn
                .query_row("SELECT value FROM signatures WHERE id = ?1", [id], |row| {
                    Ok(Entity::Signature(SignatureEntity { value: row.get(0)? }))
                })
                .optional()?,
        };
        Ok(entity)
    }
}

fn read_event(row: &Row<'_>) -> rusqlite::Result<(EventEntity, String)> {
    Ok((
        EventEntity {
            type_name: row.get(0)?,
            json_value: row.get(1)?,
            attrs: Vec::new(),
        },
        row.get(2)?,
    ))
}

fn read_transaction(row: &Row<'_>) -> rusqlite::Result<(TransactionEntity, String)> {
    Ok((
        TransactionEntity {
            result_code: row.get(0)?,
            result_data: row.get(1)?,
            result_log: row.get(2)?,
            result_info: row.get(3)?,
            result_gas_wanted: row.get(4)?,
            result_gas_used: row.get(5)?,
            signatures: Vec::new(),
        },
        row.get(6)?,
    ))
}

fn write(conn: &Connection, upsert: &Upsert) -> Result<()> {
    let id = &upsert.id;
    match &upsert.entity {
        Entity::Event(event) => {
            conn.prepare_cached(
                "INSERT INTO events (id, type, json_value, attrs) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                    type = excluded.type,
                    json_value = excluded.json_value,
                    attrs = excluded.attrs",
            )?
            .execute(params![
                id,
                event.type_name,
                event.json_value,
                serde_json::to_string(&event.attrs)?
            ])?;
        }
        Entity::Call(call) => {
            conn.prepare_cached(
                "INSERT INTO calls (id, type, json_value) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                    type = excluded.type,
                    json_value = excluded.json_value",
            )?
            .execute(params![id, call.type_name, call.json_value])?;
        }
        Entity::Attr(attr) => {
            conn.prepare_cached(
                "INSERT INTO attrs (id, key, value) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET key = excluded.key, value = excluded.value",
            )?
            .execute(params![id, attr.key, attr.value])?;
        }
        Entity::Transaction(tx) => {
            conn.prepare_cached(
                "INSERT INTO transactions (
                    id, result_code, result_data, result_log, result_info,
                    result_gas_wanted, result_gas_used, signatures
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT(id) DO UPDATE SET
                    result_code = excluded.result_code,
                    result_data = excluded.result_data,
                    result_log = excluded.result_log,
                    result_info = excluded.result_info,
                    result_gas_wanted = excluded.result_gas_wanted,
                    result_gas_used = excluded.result_gas_used,
                    signatures = excluded.signatures",
            )?
            .execute(params![
                id,
                tx.result_code,
                tx.result_data,
                tx.result_log,
                tx.result_info,
                tx.result_gas_wanted,
                tx.result_gas_used,
                serde_json::to_string(&tx.signatures)?
            ])?;
        }
        Entity::Signature(signature) => {
            conn.prepare_cached(
                "INSERT INTO signatures (id, value) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET value = excluded.value",
            )?
            .execute(params![id, signature.value])?;
        }
    }
    Ok(())
}

impl Sink for SqliteSink {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn upsert(&self, upsert: &Upsert) -> Result<()> {
        self.upsert_all(std::slice::from_ref(upsert))
    }

    fn upsert_all(&self, upserts: &[Upsert]) -> Result<()> {
        if upserts.is_empty() {
            return Ok(());
        }

        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        for upsert in upserts {
            write(&tx, upsert)
                .with_context(|| format!("failed to upsert {} {}", upsert.kind(), upsert.id))?;
        }
        tx.commit()?;

        tracing::debug!(
            target: "entgraph::sinks::sqlite",
            "Committed {} upserts",
            upserts.len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, attrs: &[&str]) -> Upsert {
        Upsert::new(
            id.to_string(),
            Entity::Event(EventEntity {
                type_name: "transfer".to_string(),
                json_value: None,
                attrs: attrs.iter().map(|a| (*a).to_string()).collect(),
            }),
        )
    }

    fn attr(id: &str, key: &str, value: &str) -> Upsert {
        Upsert::new(
            id.to_string(),
            Entity::Attr(AttrEntity {
                key: key.to_string(),
                value: value.to_string(),
            }),
        )
    }

    fn transaction(id: &str, gas_used: i64) -> Upsert {
        Upsert::new(
            id.to_string(),
            Entity::Transaction(TransactionEntity {
                result_code: 0,
                result_data: "00ab0f".to_string(),
                result_log: "[]".to_string(),
                result_info: String::new(),
                result_gas_wanted: 100,
                result_gas_used: gas_used,
                signatures: vec![format!("{id}-0")],
            }),
        )
    }

    #[test]
    fn test_round_trips_every_kind() {
        let sink = SqliteSink::in_memory().unwrap();
        let call = Upsert::new(
            "0x1-0".to_string(),
            Entity::Call(CallEntity {
                type_name: "swap".to_string(),
                json_value: r#"{"callTxHash":"0x1"}"#.to_string(),
            }),
        );
        let signature = Upsert::new(
            "T-0".to_string(),
            Entity::Signature(SignatureEntity {
                value: "dead".to_string(),
            }),
        );
        let upserts = vec![
            attr("E-0-0", "a", "1"),
            event("E-0", &["E-0-0"]),
            call,
            signature,
            transaction("T", 90),
        ];

        sink.upsert_all(&upserts).unwrap();

        for upsert in &upserts {
            assert_eq!(
                sink.fetch(upsert.kind(), &upsert.id).unwrap().as_ref(),
                Some(&upsert.entity),
                "{} {}",
                upsert.kind(),
                upsert.id
            );
        }
    }

    #[test]
    fn test_replay_converges() {
        let sink = SqliteSink::in_memory().unwrap();
        let upserts = vec![attr("E-0-0", "a", "1"), event("E-0", &["E-0-0"])];

        sink.upsert_all(&upserts).unwrap();
        sink.upsert_all(&upserts).unwrap();

        assert_eq!(sink.count(EntityKind::Attr).unwrap(), 1);
        assert_eq!(sink.count(EntityKind::Event).unwrap(), 1);
    }

    #[test]
    fn test_upsert_overwrites_existing_row() {
        let sink = SqliteSink::in_memory().unwrap();
        sink.upsert(&transaction("T", 90)).unwrap();
        sink.upsert(&transaction("T", 95)).unwrap();

        assert_eq!(sink.count(EntityKind::Transaction).unwrap(), 1);
        let Some(Entity::Transaction(tx)) = sink.fetch(EntityKind::Transaction, "T").unwrap()
        else {
            panic!("expected a transaction");
        };
        assert_eq!(tx.result_gas_used, 95);
    }

    #[test]
    fn test_same_id_in_different_kinds() {
        let sink = SqliteSink::in_memory().unwrap();
        sink.upsert_all(&[event("X-0", &[]), attr("X-0", "k", "v")])
            .unwrap();

        assert!(matches!(
            sink.fetch(EntityKind::Event, "X-0").unwrap(),
            Some(Entity::Event(_))
        ));
        assert!(matches!(
            sink.fetch(EntityKind::Attr, "X-0").unwrap(),
            Some(Entity::Attr(_))
        ));
        assert!(sink.fetch(EntityKind::Call, "X-0").unwrap().is_none());
    }

    #[test]
    fn test_file_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entgraph.db");

        {
            let sink = SqliteSink::new(&path).unwrap();
            sink.upsert(&attr("E-1-0", "amount", "42")).unwrap();
        }

        let sink = SqliteSink::new(&path).unwrap();
        assert_eq!(sink.count(EntityKind::Attr).unwrap(), 1);
        assert_eq!(
            sink.fetch(EntityKind::Attr, "E-1-0").unwrap(),
            Some(Entity::Attr(AttrEntity {
                key: "amount".to_string(),
                value: "42".to_string(),
            }))
        );
    }
}
