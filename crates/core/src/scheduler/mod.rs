//! Daily ingestion scheduler.
//!
//! Once per UTC day the scheduler fetches newly submitted papers from the
//! remote feed, walking back one day at a time when a day's window comes
//! up empty, summarizes each paper and stores the ones that got a summary.
//! After the ingest attempt it refreshes the cited partition from the
//! highly-cited feed, evicts stale uncited papers and backfills layman
//! summaries for papers that are still missing one.

mod runner;

pub use runner::{duration_until_next_utc_midnight, CycleOutcome, IngestScheduler, MAX_TRIES};
