//! Ingestion scheduler implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveTime, Utc};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::catalog::{NewPaper, PaperCatalog};
use crate::config::SchedulerConfig;
use crate::feed::{CitedFeed, PaperFeed, RawPaper};
use crate::summarizer::{Summarizer, TextExtractor};

/// How many daily windows a cycle walks back through before giving up.
pub const MAX_TRIES: u32 = 5;

/// Result of one ingestion cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A non-empty window was found and ingested.
    Ingested {
        /// Papers actually stored (fetched minus duplicates and papers
        /// that could not be summarized).
        stored: u32,
        /// Papers the window returned.
        fetched: usize,
        /// Days back from today at which the window was found.
        look_back: u32,
    },
    /// All windows were empty or failed.
    Exhausted,
    /// The scheduler was stopped mid-cycle.
    Cancelled,
}

/// Time remaining until the next UTC midnight.
pub fn duration_until_next_utc_midnight(now: DateTime<Utc>) -> Duration {
    let next = (now.date_naive() + chrono::Days::new(1))
        .and_time(NaiveTime::MIN)
        .and_utc();
    (next - now).to_std().unwrap_or(Duration::ZERO)
}

/// The ingestion scheduler - fetches, summarizes and catalogs papers once
/// per UTC day.
pub struct IngestScheduler {
    config: SchedulerConfig,
    feed: Arc<dyn PaperFeed>,
    cited_feed: Option<Arc<dyn CitedFeed>>,
    extractor: Arc<dyn TextExtractor>,
    summarizer: Arc<dyn Summarizer>,
    catalog: Arc<dyn PaperCatalog>,

    // Runtime state
    running: Arc<AtomicBool>,
    stop_requested: AtomicBool,
    shutdown_tx: broadcast::Sender<()>,
}

impl IngestScheduler {
    pub fn new(
        config: SchedulerConfig,
        feed: Arc<dyn PaperFeed>,
        cited_feed: Option<Arc<dyn CitedFeed>>,
        extractor: Arc<dyn TextExtractor>,
        summarizer: Arc<dyn Summarizer>,
        catalog: Arc<dyn PaperCatalog>,
    ) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            config,
            feed,
            cited_feed,
            extractor,
            summarizer,
            catalog,
            running: Arc::new(AtomicBool::new(false)),
            stop_requested: AtomicBool::new(false),
            shutdown_tx,
        }
    }

    /// Start the scheduler (spawns the daily loop).
    pub fn start(self: &Arc<Self>) {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("Scheduler already running");
            return;
        }

        info!("Starting ingestion scheduler");
        self.stop_requested.store(false, Ordering::SeqCst);

        let scheduler = Arc::clone(self);
        let mut shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            info!("Ingestion loop started");
            loop {
                let wait = duration_until_next_utc_midnight(Utc::now());
                debug!(secs = wait.as_secs(), "Sleeping until next UTC midnight");

                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        info!("Ingestion loop received shutdown signal");
                        break;
                    }
                    _ = tokio::time::sleep(wait) => {
                        if !scheduler.running.load(Ordering::Relaxed) {
                            break;
                        }
                        let outcome = scheduler.run_cycle().await;
                        info!(?outcome, "Ingestion cycle finished");
                    }
                }
            }
            info!("Ingestion loop stopped");
        });
    }

    /// Stop the scheduler gracefully.
    pub fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            warn!("Scheduler not running");
            return;
        }

        info!("Stopping ingestion scheduler");
        self.stop_requested.store(true, Ordering::SeqCst);
        let _ = self.shutdown_tx.send(());
    }

    fn stopping(&self) -> bool {
        self.stop_requested.load(Ordering::Relaxed)
    }

    /// Run one ingestion cycle: bounded look-back fetch, ingest, then
    /// catalog maintenance (cited refresh, eviction and summary backfill).
    pub async fn run_cycle(&self) -> CycleOutcome {
        let outcome = self.ingest().await;

        if outcome != CycleOutcome::Cancelled {
            self.ingest_cited().await;
            self.evict();
            self.backfill_summaries().await;
        }

        outcome
    }

    /// Walk back through daily windows until one yields papers, then ingest
    /// that batch. A failed fetch consumes an attempt like an empty window.
    async fn ingest(&self) -> CycleOutcome {
        for look_back in 0..MAX_TRIES {
            if self.stopping() {
                return CycleOutcome::Cancelled;
            }

            let papers = match self.feed.fetch_by_window(look_back).await {
                Ok(papers) => papers,
                Err(e) => {
                    warn!(look_back, error = %e, "Window fetch failed");
                    continue;
                }
            };

            if papers.is_empty() {
                debug!(look_back, "Window is empty, walking back another day");
                continue;
            }

            let fetched = papers.len();
            info!(look_back, fetched, "Ingesting window");

            return match self.ingest_batch(papers).await {
                Some(stored) => CycleOutcome::Ingested {
                    stored,
                    fetched,
                    look_back,
                },
                None => CycleOutcome::Cancelled,
            };
        }

        info!(tries = MAX_TRIES, "All look-back windows exhausted");
        CycleOutcome::Exhausted
    }

    /// Summarize and store one batch. Returns the number of papers stored,
    /// or `None` when the scheduler was stopped mid-batch.
    ///
    /// A paper with no layman summary is not stored at all; tomorrow's
    /// window (or a wider look-back) can pick it up again.
    async fn ingest_batch(&self, papers: Vec<RawPaper>) -> Option<u32> {
        let mut stored = 0u32;

        for raw in papers {
            if self.stopping() {
                info!(stored, "Ingestion cancelled mid-batch");
                return None;
            }

            let Some(layman_summary) = self.summarize_link(&raw.link).await else {
                debug!(link = %raw.link, "No layman summary produced, not storing");
                continue;
            };
            let published = raw.published_at().unwrap_or_else(Utc::now);

            let paper = NewPaper {
                title: raw.title,
                authors: raw.authors,
                published,
                summary: raw.summary,
                layman_summary: Some(layman_summary),
                link: raw.link,
                categories: raw.categories,
                citations: raw.citations,
            };

            match self.catalog.insert(&paper) {
                Ok(true) => stored += 1,
                Ok(false) => debug!(link = %paper.link, "Already cataloged, skipping"),
                Err(e) => warn!(link = %paper.link, error = %e, "Failed to store paper"),
            }
        }

        Some(stored)
    }

    /// Extract the paper's full text and produce a layman summary. Any
    /// failure or empty result yields `None`.
    async fn summarize_link(&self, link: &str) -> Option<String> {
        let text = self.extractor.extract(link).await;
        if text.is_empty() {
            debug!(link, "No text extracted, skipping summary");
            return None;
        }

        match self.summarizer.summarize(&text).await {
            Ok(summary) if !summary.is_empty() => Some(summary),
            Ok(_) => {
                debug!(link, "Summarizer returned an empty summary");
                None
            }
            Err(e) => {
                warn!(link, error = %e, "Summarization failed");
                None
            }
        }
    }

    /// Refresh the cited partition from the highly-cited feed, when one is
    /// configured. Papers land without a layman summary and rely on the
    /// backfill pass; already-cataloged papers dedup away silently.
    async fn ingest_cited(&self) {
        let Some(feed) = &self.cited_feed else {
            return;
        };

        let papers = match feed.fetch_popular().await {
            Ok(papers) => papers,
            Err(e) => {
                warn!(error = %e, "Cited feed fetch failed");
                return;
            }
        };

        let mut stored = 0u32;
        for raw in papers {
            if self.stopping() {
                break;
            }
            // Zero-citation entries would leak into the recent partition.
            if raw.citations == 0 {
                continue;
            }

            let published = raw.published_at().unwrap_or_else(Utc::now);
            let paper = NewPaper {
                title: raw.title,
                authors: raw.authors,
                published,
                summary: raw.summary,
                layman_summary: None,
                link: raw.link,
                categories: raw.categories,
                citations: raw.citations,
            };

            match self.catalog.insert(&paper) {
                Ok(true) => stored += 1,
                Ok(false) => debug!(link = %paper.link, "Already cataloged, skipping"),
                Err(e) => warn!(link = %paper.link, error = %e, "Failed to store cited paper"),
            }
        }

        if stored > 0 {
            info!(stored, "Stored new highly-cited papers");
        }
    }

    /// Evict uncited papers past the retention window.
    fn evict(&self) {
        match self.catalog.evict_older_than(self.config.retention_days) {
            Ok(0) => {}
            Ok(evicted) => info!(evicted, "Evicted stale papers"),
            Err(e) => warn!(error = %e, "Eviction failed"),
        }
    }

    /// Backfill layman summaries for papers that are still missing one,
    /// in practice the cited papers, which are stored unsummarized.
    pub async fn backfill_summaries(&self) -> u32 {
        let pending = match self.catalog.missing_layman_summary(self.config.backfill_limit) {
            Ok(papers) => papers,
            Err(e) => {
                warn!(error = %e, "Failed to list papers pending summarization");
                return 0;
            }
        };

        let mut filled = 0u32;
        for paper in pending {
            if self.stopping() {
                break;
            }

            let Some(summary) = self.summarize_link(&paper.link).await else {
                continue;
            };

            match self.catalog.set_layman_summary(&paper.link, &summary) {
                Ok(()) => filled += 1,
                Err(e) => warn!(link = %paper.link, error = %e, "Failed to backfill summary"),
            }
        }

        if filled > 0 {
            info!(filled, "Backfilled layman summaries");
        }
        filled
    }
}
