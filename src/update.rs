//! Batch score recomputation.
//!
//! Walks a selection of monthly records, recomputes each score from the
//! record's metadata and writes it back. Strictly sequential: one record is
//! scored and persisted before the next is touched. Any store or decode
//! error halts the run; rerunning from the start is safe because scoring is
//! deterministic in the metadata.

use crate::error::Result;
use crate::score;
use crate::store::{RecordStore, Selection};
use std::time::Duration;

/// Outcome totals for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Records that received a freshly computed score.
    pub processed: usize,
    /// Records skipped because they carry no metadata.
    pub skipped: usize,
}

pub struct RunOptions {
    /// Compute and print scores without writing them back.
    pub dry_run: bool,
    /// Pause between successive writes to throttle load on the store.
    pub throttle: Duration,
}

pub async fn run(
    store: &RecordStore,
    selection: &Selection,
    options: &RunOptions,
) -> Result<RunSummary> {
    let records = store.fetch_records(selection).await?;
    tracing::info!(total = records.len(), %selection, "working set selected");

    let mut summary = RunSummary::default();
    for record in &records {
        let Some(metadata) = record.metadata.as_ref() else {
            // No metadata means the collection for that month produced
            // nothing to grade; the record keeps whatever score it had.
            tracing::debug!(
                agency = %record.agency_id,
                year = record.year,
                month = record.month,
                "no metadata, skipping"
            );
            summary.skipped += 1;
            continue;
        };

        let score = score::calc_score(metadata);
        if options.dry_run {
            println!(
                "{}: {}/{}... dry run, not written",
                record.agency_id, record.month, record.year
            );
        } else {
            let matched = store.update_score(record, &score).await?;
            println!(
                "{}: {}/{}... {} row updated",
                record.agency_id, record.month, record.year, matched
            );
        }
        println!(
            "{:.6} {:.6} {:.6}",
            score.overall_score, score.completeness_score, score.easiness_score
        );
        summary.processed += 1;

        if !options.dry_run && !options.throttle.is_zero() {
            tokio::time::sleep(options.throttle).await;
        }
    }

    Ok(summary)
}
