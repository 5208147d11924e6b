//! Paper catalog - the single mutable store shared by the scheduler and
//! the serving layer.
//!
//! The catalog keeps two disjoint id sequences, discriminated by citation
//! count: papers with zero citations live in the `recent` partition, papers
//! with citations in the `cited` partition. Within each partition ids are
//! dense (exactly `1..=count`) and get recompacted after every eviction.

mod sqlite;
mod types;

pub use sqlite::SqlitePaperCatalog;
pub use types::*;

/// Trait for paper catalog storage.
pub trait PaperCatalog: Send + Sync {
    /// Insert a paper unless its link or title (case-insensitive) already
    /// exists.
    ///
    /// Duplicates are not an error: the insert is silently skipped and
    /// `false` is returned. On acceptance the paper gets
    /// `id = count(partition) + 1`; the count-then-write runs under the
    /// store's lock so concurrent inserts can never assign the same id.
    fn insert(&self, paper: &NewPaper) -> Result<bool, CatalogError>;

    /// List one page of a partition, plus the partition's total row count.
    ///
    /// `recent` is ordered by publication date descending, `cited` by id
    /// ascending. `page` and `page_size` are clamped to `page >= 1` and
    /// `1..=MAX_PAGE_SIZE`.
    fn list_page(
        &self,
        partition: Partition,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Paper>, u64), CatalogError>;

    /// Delete `recent` papers published more than `age_days` ago, then
    /// recompact the partition. Cited papers are never evicted, regardless
    /// of age. Returns the number of papers deleted.
    fn evict_older_than(&self, age_days: u32) -> Result<u32, CatalogError>;

    /// Reassign ids within a partition to their rank by publication date
    /// descending, eliminating gaps. Idempotent. Returns the number of
    /// papers renumbered.
    fn compact(&self, partition: Partition) -> Result<u32, CatalogError>;

    /// Check whether a paper with this link exists.
    fn exists_by_link(&self, link: &str) -> Result<bool, CatalogError>;

    /// Check whether a paper with this title exists (case-insensitive).
    fn exists_by_title(&self, title: &str) -> Result<bool, CatalogError>;

    /// Case-insensitive substring match against title or authors - the
    /// exact local tier of search.
    fn find_local(
        &self,
        field: SearchField,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Paper>, CatalogError>;

    /// Papers still waiting for a layman summary, oldest first.
    fn missing_layman_summary(&self, limit: u32) -> Result<Vec<Paper>, CatalogError>;

    /// Backfill the layman summary of an existing paper.
    fn set_layman_summary(&self, link: &str, summary: &str) -> Result<(), CatalogError>;
}
