//! Record store access.
//!
//! Reads monthly disclosure records from a SQLite store and writes computed
//! scores back. Score writes touch the `score` column only, keyed by the
//! (agency, year, month) triple.

use crate::config::Config;
use crate::error::{IndexError, Result};
use crate::types::record::Record;
use crate::types::scoring::Score;
use futures::TryStreamExt;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::fmt;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which records a run operates on.
#[derive(Debug, Clone)]
pub enum Selection {
    Agency { agency_id: String, year: i64 },
    All,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Agency { agency_id, year } => write!(f, "{agency_id} in {year}"),
            Selection::All => write!(f, "all records"),
        }
    }
}

pub struct RecordStore {
    pool: SqlitePool,
    select_by_agency_sql: String,
    select_all_sql: String,
    update_score_sql: String,
}

impl RecordStore {
    /// Connect to the store named by the configuration.
    ///
    /// The acquire timeout bounds connection establishment only; record
    /// processing runs on its own, unbounded.
    pub async fn connect(config: &Config) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(CONNECT_TIMEOUT)
            .connect(&config.database_url)
            .await?;
        tracing::debug!(table = %config.monthly_table, "connected to record store");
        Ok(Self::new(pool, &config.monthly_table))
    }

    /// Build a store over an existing pool.
    pub fn new(pool: SqlitePool, table: &str) -> Self {
        Self {
            pool,
            select_by_agency_sql: format!(
                "SELECT agency_id, year, month, metadata FROM {table} \
                 WHERE agency_id = ?1 AND year = ?2"
            ),
            select_all_sql: format!("SELECT agency_id, year, month, metadata FROM {table}"),
            update_score_sql: format!(
                "UPDATE {table} SET score = ?1 \
                 WHERE agency_id = ?2 AND year = ?3 AND month = ?4"
            ),
        }
    }

    /// Fetch the working set for a selection, in store order.
    ///
    /// Rows are decoded one at a time off a forward-only cursor; the cursor
    /// is drained before any write so reads and writes never contend for
    /// the store connection.
    pub async fn fetch_records(&self, selection: &Selection) -> Result<Vec<Record>> {
        let query = match selection {
            Selection::Agency { agency_id, year } => sqlx::query(&self.select_by_agency_sql)
                .bind(agency_id)
                .bind(*year),
            Selection::All => sqlx::query(&self.select_all_sql),
        };

        let mut rows = query.fetch(&self.pool);
        let mut records = Vec::new();
        while let Some(row) = rows.try_next().await? {
            records.push(decode_record(&row)?);
        }
        Ok(records)
    }

    /// Write a score back to the record it was computed from.
    ///
    /// Returns the number of rows matched, which must be exactly one; any
    /// other count indicates a key-uniqueness problem and fails the run.
    pub async fn update_score(&self, record: &Record, score: &Score) -> Result<u64> {
        let payload = serde_json::to_string(score)?;
        let result = sqlx::query(&self.update_score_sql)
            .bind(payload)
            .bind(&record.agency_id)
            .bind(record.year)
            .bind(record.month)
            .execute(&self.pool)
            .await?;

        let count = result.rows_affected();
        if count != 1 {
            return Err(IndexError::UnexpectedMatchCount {
                agency_id: record.agency_id.clone(),
                year: record.year,
                month: record.month,
                count,
            });
        }
        Ok(count)
    }

    /// Release the store connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn decode_record(row: &SqliteRow) -> Result<Record> {
    let agency_id: String = row.get("agency_id");
    let year: i64 = row.get("year");
    let month: i64 = row.get("month");

    let metadata = match row.get::<Option<String>, _>("metadata") {
        Some(raw) => Some(serde_json::from_str(&raw).map_err(|source| {
            IndexError::MetadataDecode {
                agency_id: agency_id.clone(),
                year,
                month,
                source,
            }
        })?),
        None => None,
    };

    Ok(Record {
        agency_id,
        year,
        month,
        metadata,
    })
}
