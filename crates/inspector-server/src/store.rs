use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use inspector_core::comparison::timestamp;
use inspector_core::{Analysis, Comparison, ComparisonId, NewComparison};
use inspector_engine::ComparisonOutcome;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;

mod embedded {
    refinery::embed_migrations!("migrations");
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] refinery::Error),
    #[error("Lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;

const SELECT_COLUMNS: &str = "SELECT id, model_a, prompt_a, model_b, prompt_b, output_a, output_b,
        similarity_score, analysis_json, created_at
     FROM comparisons";

/// SQLite-backed comparison records. Rows are written once and never updated.
#[derive(Clone)]
pub struct ComparisonStore {
    conn: Arc<Mutex<Connection>>,
}

impl ComparisonStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let store = Self::from_connection(conn)?;
        tracing::info!("Comparison database initialized at {:?}", path);
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        embedded::migrations::runner().run(&mut conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Persist a finished comparison in one statement
    pub fn insert(&self, request: &NewComparison, outcome: &ComparisonOutcome) -> Result<Comparison> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;

        let created_at = Utc::now().trunc_subsecs(6);
        let analysis_json = serde_json::to_string(&outcome.analysis)?;

        conn.execute(
            "INSERT INTO comparisons (model_a, prompt_a, model_b, prompt_b, output_a, output_b,
                similarity_score, analysis_json, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                request.model_a,
                request.prompt_a,
                request.model_b,
                request.prompt_b,
                outcome.output_a,
                outcome.output_b,
                outcome.similarity_score,
                analysis_json,
                sortable_timestamp(&created_at),
            ],
        )?;

        let id = conn.last_insert_rowid();
        tracing::debug!("Saved comparison {}", id);

        Ok(Comparison {
            id,
            model_a: request.model_a.clone(),
            prompt_a: request.prompt_a.clone(),
            model_b: request.model_b.clone(),
            prompt_b: request.prompt_b.clone(),
            output_a: outcome.output_a.clone(),
            output_b: outcome.output_b.clone(),
            similarity_score: outcome.similarity_score,
            analysis: Some(outcome.analysis),
            created_at,
        })
    }

    /// All comparisons, newest first
    pub fn list(&self) -> Result<Vec<Comparison>> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;

        let mut stmt = conn.prepare(&format!(
            "{} ORDER BY created_at DESC, id DESC",
            SELECT_COLUMNS
        ))?;
        let rows = stmt.query_map([], row_to_comparison)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    pub fn get(&self, id: ComparisonId) -> Result<Option<Comparison>> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;

        let comparison = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                params![id],
                row_to_comparison,
            )
            .optional()?;
        Ok(comparison)
    }
}

// Fixed-width so that text ordering matches time ordering
fn sortable_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn row_to_comparison(row: &Row<'_>) -> rusqlite::Result<Comparison> {
    let analysis_json: Option<String> = row.get(8)?;
    let analysis = analysis_json
        .map(|json| serde_json::from_str::<Analysis>(&json))
        .transpose()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e)))?;

    let created_at: String = row.get(9)?;
    let created_at = timestamp::parse(&created_at)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e)))?;

    Ok(Comparison {
        id: row.get(0)?,
        model_a: row.get(1)?,
        prompt_a: row.get(2)?,
        model_b: row.get(3)?,
        prompt_b: row.get(4)?,
        output_a: row.get(5)?,
        output_b: row.get(6)?,
        similarity_score: row.get(7)?,
        analysis,
        created_at,
    })
}
