//! SQLite-backed paper catalog implementation.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, Transaction};
use tracing::debug;

use super::{
    clamp_page, CatalogError, NewPaper, Paper, PaperCatalog, Partition, SearchField,
};

const PAPER_COLUMNS: &str =
    "link, id, title, authors, published, summary, layman_summary, categories, citations";

/// Escape LIKE metacharacters so a user query matches them literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// SQLite-backed paper catalog.
///
/// All access goes through a single mutex-guarded connection, which
/// serializes the count-then-insert id assignment and makes compaction
/// atomic with respect to readers.
pub struct SqlitePaperCatalog {
    conn: Mutex<Connection>,
}

impl SqlitePaperCatalog {
    /// Create a new catalog, creating the database file and tables if needed.
    pub fn new(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path).map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory catalog (useful for testing).
    pub fn in_memory() -> Result<Self, CatalogError> {
        let conn =
            Connection::open_in_memory().map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CatalogError> {
        conn.execute_batch(
            r#"
            -- One row per paper, keyed by the source link. The id column is
            -- a dense per-partition sequence, not a global autoincrement.
            CREATE TABLE IF NOT EXISTS papers (
                link TEXT PRIMARY KEY,
                id INTEGER NOT NULL,
                title TEXT NOT NULL COLLATE NOCASE UNIQUE,
                authors TEXT NOT NULL,
                published TEXT NOT NULL,
                summary TEXT NOT NULL,
                layman_summary TEXT,
                categories TEXT NOT NULL,
                citations INTEGER NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_papers_partition ON papers(citations, id);
            CREATE INDEX IF NOT EXISTS idx_papers_published ON papers(published);
            "#,
        )
        .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(())
    }

    /// SQL predicate selecting one partition.
    fn partition_filter(partition: Partition) -> &'static str {
        match partition {
            Partition::Recent => "citations = 0",
            Partition::Cited => "citations > 0",
        }
    }

    /// Convert a row to a Paper. Expects PAPER_COLUMNS order.
    fn row_to_paper(row: &rusqlite::Row) -> rusqlite::Result<Paper> {
        let authors_json: String = row.get(3)?;
        let published_str: String = row.get(4)?;
        let categories_json: String = row.get(7)?;

        let published = DateTime::parse_from_rfc3339(&published_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        Ok(Paper {
            link: row.get(0)?,
            id: row.get(1)?,
            title: row.get(2)?,
            authors: serde_json::from_str(&authors_json).unwrap_or_default(),
            published,
            summary: row.get(5)?,
            layman_summary: row.get(6)?,
            categories: serde_json::from_str(&categories_json).unwrap_or_default(),
            citations: row.get(8)?,
        })
    }

    /// Renumber a partition's ids to their rank by publication date
    /// descending (existing id breaks ties, keeping one pass stable).
    /// Only rows whose id differs from its rank are touched.
    fn compact_tx(tx: &Transaction, partition: Partition) -> Result<u32, CatalogError> {
        let filter = Self::partition_filter(partition);

        let mut stmt = tx
            .prepare(&format!(
                "SELECT link, id FROM papers WHERE {} ORDER BY published DESC, id ASC",
                filter
            ))
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
            })
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let mut ordered = Vec::new();
        for row in rows {
            ordered.push(row.map_err(|e| CatalogError::Database(e.to_string()))?);
        }
        drop(stmt);

        let mut renumbered = 0;
        for (rank, (link, id)) in ordered.iter().enumerate() {
            let rank = (rank + 1) as i64;
            if *id != rank {
                tx.execute(
                    "UPDATE papers SET id = ?1 WHERE link = ?2",
                    params![rank, link],
                )
                .map_err(|e| CatalogError::Database(e.to_string()))?;
                renumbered += 1;
            }
        }

        Ok(renumbered)
    }
}

impl PaperCatalog for SqlitePaperCatalog {
    fn insert(&self, paper: &NewPaper) -> Result<bool, CatalogError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn
            .transaction()
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let link_taken: bool = tx
            .query_row(
                "SELECT 1 FROM papers WHERE link = ?",
                params![&paper.link],
                |_| Ok(true),
            )
            .unwrap_or(false);
        if link_taken {
            debug!(link = %paper.link, "Skipping insert: link already cataloged");
            return Ok(false);
        }

        // title column uses NOCASE collation, so equality is case-insensitive
        let title_taken: bool = tx
            .query_row(
                "SELECT 1 FROM papers WHERE title = ?",
                params![&paper.title],
                |_| Ok(true),
            )
            .unwrap_or(false);
        if title_taken {
            debug!(title = %paper.title, "Skipping insert: title already cataloged");
            return Ok(false);
        }

        let filter = Self::partition_filter(paper.partition());
        let count: i64 = tx
            .query_row(
                &format!("SELECT COUNT(*) FROM papers WHERE {}", filter),
                [],
                |row| row.get(0),
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let authors_json = serde_json::to_string(&paper.authors)
            .map_err(|e| CatalogError::Database(e.to_string()))?;
        let categories_json = serde_json::to_string(&paper.categories)
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        tx.execute(
            "INSERT INTO papers (link, id, title, authors, published, summary, layman_summary, categories, citations)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                &paper.link,
                count + 1,
                &paper.title,
                &authors_json,
                &paper.published.to_rfc3339(),
                &paper.summary,
                &paper.layman_summary,
                &categories_json,
                paper.citations,
            ],
        )
        .map_err(|e| CatalogError::Database(e.to_string()))?;

        tx.commit()
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(true)
    }

    fn list_page(
        &self,
        partition: Partition,
        page: u32,
        page_size: u32,
    ) -> Result<(Vec<Paper>, u64), CatalogError> {
        let (page, page_size) = clamp_page(page, page_size);
        // Widen before multiplying so an absurd page number cannot overflow.
        let offset = (page as u64 - 1) * page_size as u64;

        let conn = self.conn.lock().unwrap();
        let filter = Self::partition_filter(partition);

        let total: u64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM papers WHERE {}", filter),
                [],
                |row| row.get(0),
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        // The recent feed reads newest-first; the cited index reads in
        // id order, which is its stable small integer space.
        let order = match partition {
            Partition::Recent => "published DESC, id ASC",
            Partition::Cited => "id ASC",
        };

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM papers WHERE {} ORDER BY {} LIMIT ?1 OFFSET ?2",
                PAPER_COLUMNS, filter, order
            ))
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![page_size, offset], Self::row_to_paper)
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let mut papers = Vec::new();
        for row in rows {
            papers.push(row.map_err(|e| CatalogError::Database(e.to_string()))?);
        }

        Ok((papers, total))
    }

    fn evict_older_than(&self, age_days: u32) -> Result<u32, CatalogError> {
        let cutoff = Utc::now() - Duration::days(age_days as i64);

        let mut conn = self.conn.lock().unwrap();
        let tx = conn
            .transaction()
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        // Citations act as a retention pin: only the recent partition ages out.
        let deleted = tx
            .execute(
                "DELETE FROM papers WHERE citations = 0 AND published < ?",
                params![cutoff.to_rfc3339()],
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        if deleted > 0 {
            Self::compact_tx(&tx, Partition::Recent)?;
        }

        tx.commit()
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(deleted as u32)
    }

    fn compact(&self, partition: Partition) -> Result<u32, CatalogError> {
        let mut conn = self.conn.lock().unwrap();
        let tx = conn
            .transaction()
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let renumbered = Self::compact_tx(&tx, partition)?;

        tx.commit()
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(renumbered)
    }

    fn exists_by_link(&self, link: &str) -> Result<bool, CatalogError> {
        let conn = self.conn.lock().unwrap();

        let exists: bool = conn
            .query_row("SELECT 1 FROM papers WHERE link = ?", params![link], |_| {
                Ok(true)
            })
            .unwrap_or(false);

        Ok(exists)
    }

    fn exists_by_title(&self, title: &str) -> Result<bool, CatalogError> {
        let conn = self.conn.lock().unwrap();

        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM papers WHERE title = ?",
                params![title],
                |_| Ok(true),
            )
            .unwrap_or(false);

        Ok(exists)
    }

    fn find_local(
        &self,
        field: SearchField,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Paper>, CatalogError> {
        let conn = self.conn.lock().unwrap();
        let pattern = format!("%{}%", escape_like(query));

        // LIKE is case-insensitive for ASCII. Authors are stored as a JSON
        // array, so a substring match against the column covers every
        // element of the list.
        let column = match field {
            SearchField::Title => "title",
            SearchField::Author => "authors",
        };

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM papers WHERE {} LIKE ?1 ESCAPE '\\' ORDER BY published DESC, id ASC LIMIT ?2",
                PAPER_COLUMNS, column
            ))
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![&pattern, limit], Self::row_to_paper)
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let mut papers = Vec::new();
        for row in rows {
            papers.push(row.map_err(|e| CatalogError::Database(e.to_string()))?);
        }

        Ok(papers)
    }

    fn missing_layman_summary(&self, limit: u32) -> Result<Vec<Paper>, CatalogError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM papers
                 WHERE layman_summary IS NULL OR layman_summary = ''
                 ORDER BY published ASC LIMIT ?",
                PAPER_COLUMNS
            ))
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![limit], Self::row_to_paper)
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let mut papers = Vec::new();
        for row in rows {
            papers.push(row.map_err(|e| CatalogError::Database(e.to_string()))?);
        }

        Ok(papers)
    }

    fn set_layman_summary(&self, link: &str, summary: &str) -> Result<(), CatalogError> {
        let conn = self.conn.lock().unwrap();

        let rows_affected = conn
            .execute(
                "UPDATE papers SET layman_summary = ?1 WHERE link = ?2",
                params![summary, link],
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        if rows_affected == 0 {
            return Err(CatalogError::NotFound(link.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn create_test_catalog() -> SqlitePaperCatalog {
        SqlitePaperCatalog::in_memory().unwrap()
    }

    fn test_paper(link: &str, title: &str, citations: i64) -> NewPaper {
        test_paper_at(link, title, citations, Utc::now())
    }

    fn test_paper_at(
        link: &str,
        title: &str,
        citations: i64,
        published: DateTime<Utc>,
    ) -> NewPaper {
        NewPaper {
            title: title.to_string(),
            authors: vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()],
            published,
            summary: "An abstract about computation.".to_string(),
            layman_summary: Some("Machines can compute things.".to_string()),
            link: link.to_string(),
            categories: vec!["cs.AI".to_string(), "cs.LG".to_string()],
            citations,
        }
    }

    fn days_ago(days: i64) -> DateTime<Utc> {
        Utc::now() - Duration::days(days)
    }

    /// Ids in a partition must be exactly {1..count}.
    fn assert_dense_ids(catalog: &SqlitePaperCatalog, partition: Partition) {
        let (papers, total) = catalog.list_page(partition, 1, 100).unwrap();
        let ids: HashSet<i64> = papers.iter().map(|p| p.id).collect();
        let expected: HashSet<i64> = (1..=total as i64).collect();
        assert_eq!(ids, expected, "ids not dense in {:?}", partition);
    }

    #[test]
    fn test_insert_and_duplicate_link() {
        let catalog = create_test_catalog();

        let stored = catalog.insert(&test_paper("http://a/1", "Paper One", 0)).unwrap();
        assert!(stored);

        // Same link again: skipped, not an error
        let stored = catalog.insert(&test_paper("http://a/1", "Other Title", 0)).unwrap();
        assert!(!stored);

        let (_, total) = catalog.list_page(Partition::Recent, 1, 10).unwrap();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_insert_duplicate_title_case_insensitive() {
        let catalog = create_test_catalog();

        catalog
            .insert(&test_paper("http://a/1", "Attention Is All You Need", 0))
            .unwrap();

        let stored = catalog
            .insert(&test_paper("http://a/2", "ATTENTION IS ALL YOU NEED", 0))
            .unwrap();
        assert!(!stored);

        let (_, total) = catalog.list_page(Partition::Recent, 1, 10).unwrap();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_partition_id_sequences_are_independent() {
        let catalog = create_test_catalog();

        catalog.insert(&test_paper("http://r/1", "Recent One", 0)).unwrap();
        catalog.insert(&test_paper("http://r/2", "Recent Two", 0)).unwrap();
        catalog.insert(&test_paper("http://c/1", "Cited One", 120)).unwrap();
        catalog.insert(&test_paper("http://c/2", "Cited Two", 7)).unwrap();

        let (cited, _) = catalog.list_page(Partition::Cited, 1, 10).unwrap();
        assert_eq!(cited.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

        assert_dense_ids(&catalog, Partition::Recent);
        assert_dense_ids(&catalog, Partition::Cited);
    }

    #[test]
    fn test_list_page_recent_newest_first() {
        let catalog = create_test_catalog();

        catalog
            .insert(&test_paper_at("http://r/old", "Old Paper", 0, days_ago(5)))
            .unwrap();
        catalog
            .insert(&test_paper_at("http://r/new", "New Paper", 0, days_ago(1)))
            .unwrap();
        catalog
            .insert(&test_paper_at("http://r/mid", "Mid Paper", 0, days_ago(3)))
            .unwrap();

        let (papers, total) = catalog.list_page(Partition::Recent, 1, 10).unwrap();
        assert_eq!(total, 3);
        let titles: Vec<&str> = papers.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New Paper", "Mid Paper", "Old Paper"]);
    }

    #[test]
    fn test_list_page_pagination_consistency() {
        let catalog = create_test_catalog();

        for i in 0..12 {
            catalog
                .insert(&test_paper_at(
                    &format!("http://r/{}", i),
                    &format!("Paper {}", i),
                    0,
                    days_ago(i),
                ))
                .unwrap();
        }

        let mut seen = HashSet::new();
        let mut page = 1;
        loop {
            let (papers, total) = catalog.list_page(Partition::Recent, page, 5).unwrap();
            assert_eq!(total, 12);
            if papers.is_empty() {
                break;
            }
            for p in papers {
                assert!(seen.insert(p.link), "paper returned on two pages");
            }
            page += 1;
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_list_page_clamps_parameters() {
        let catalog = create_test_catalog();
        catalog.insert(&test_paper("http://r/1", "Paper", 0)).unwrap();

        // page 0 behaves as page 1, oversized page_size is clamped
        let (papers, total) = catalog.list_page(Partition::Recent, 0, 5000).unwrap();
        assert_eq!(total, 1);
        assert_eq!(papers.len(), 1);
    }

    #[test]
    fn test_list_page_huge_page_number() {
        let catalog = create_test_catalog();
        catalog.insert(&test_paper("http://r/1", "Paper", 0)).unwrap();

        // A page number far past the data must not overflow the offset
        // arithmetic; it just returns an empty page.
        let (papers, total) = catalog
            .list_page(Partition::Recent, 50_000_000, 100)
            .unwrap();
        assert_eq!(total, 1);
        assert!(papers.is_empty());
    }

    #[test]
    fn test_evict_never_touches_cited() {
        let catalog = create_test_catalog();

        catalog
            .insert(&test_paper_at("http://c/ancient", "Ancient Cited", 9000, days_ago(400)))
            .unwrap();
        catalog
            .insert(&test_paper_at("http://r/old", "Old Recent", 0, days_ago(90)))
            .unwrap();
        catalog
            .insert(&test_paper_at("http://r/fresh", "Fresh Recent", 0, days_ago(2)))
            .unwrap();

        let deleted = catalog.evict_older_than(60).unwrap();
        assert_eq!(deleted, 1);

        assert!(catalog.exists_by_link("http://c/ancient").unwrap());
        assert!(!catalog.exists_by_link("http://r/old").unwrap());
        assert!(catalog.exists_by_link("http://r/fresh").unwrap());
    }

    #[test]
    fn test_evict_compacts_recent_ids() {
        let catalog = create_test_catalog();

        for i in 0..5 {
            catalog
                .insert(&test_paper_at(
                    &format!("http://r/{}", i),
                    &format!("Paper {}", i),
                    0,
                    days_ago(20 * i),
                ))
                .unwrap();
        }

        // papers at 60 and 80 days ago are dropped
        let deleted = catalog.evict_older_than(50).unwrap();
        assert_eq!(deleted, 2);

        assert_dense_ids(&catalog, Partition::Recent);
        let (_, total) = catalog.list_page(Partition::Recent, 1, 10).unwrap();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_compact_is_idempotent() {
        let catalog = create_test_catalog();

        for i in 0..4 {
            catalog
                .insert(&test_paper_at(
                    &format!("http://r/{}", i),
                    &format!("Paper {}", i),
                    0,
                    days_ago(i),
                ))
                .unwrap();
        }
        catalog.evict_older_than(2).unwrap();

        // First explicit pass may renumber, the second must be a no-op
        catalog.compact(Partition::Recent).unwrap();
        let renumbered = catalog.compact(Partition::Recent).unwrap();
        assert_eq!(renumbered, 0);
    }

    #[test]
    fn test_exists_checks() {
        let catalog = create_test_catalog();
        catalog
            .insert(&test_paper("http://a/1", "Deep Learning Survey", 0))
            .unwrap();

        assert!(catalog.exists_by_link("http://a/1").unwrap());
        assert!(!catalog.exists_by_link("http://a/2").unwrap());
        assert!(catalog.exists_by_title("deep learning survey").unwrap());
        assert!(!catalog.exists_by_title("unrelated").unwrap());
    }

    #[test]
    fn test_find_local_by_title() {
        let catalog = create_test_catalog();
        catalog
            .insert(&test_paper("http://a/1", "Attention Is All You Need", 0))
            .unwrap();
        catalog
            .insert(&test_paper("http://a/2", "Image Segmentation Review", 0))
            .unwrap();

        let found = catalog
            .find_local(SearchField::Title, "attention", 10)
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Attention Is All You Need");
    }

    #[test]
    fn test_find_local_by_author() {
        let catalog = create_test_catalog();
        catalog.insert(&test_paper("http://a/1", "Paper One", 0)).unwrap();

        let found = catalog
            .find_local(SearchField::Author, "lovelace", 10)
            .unwrap();
        assert_eq!(found.len(), 1);

        let found = catalog
            .find_local(SearchField::Author, "hinton", 10)
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_find_local_treats_wildcards_literally() {
        let catalog = create_test_catalog();
        catalog
            .insert(&test_paper("http://a/1", "Reaching 99% Accuracy on MNIST", 0))
            .unwrap();
        catalog
            .insert(&test_paper("http://a/2", "Snake Case Identifiers in Code", 0))
            .unwrap();

        // A literal % in the query only matches titles containing %.
        let found = catalog.find_local(SearchField::Title, "99%", 10).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].link, "http://a/1");

        // Underscores are not single-character wildcards.
        let found = catalog.find_local(SearchField::Title, "C_de", 10).unwrap();
        assert!(found.is_empty());

        // Percent alone is not a match-everything pattern.
        let found = catalog.find_local(SearchField::Title, "%", 10).unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_find_local_respects_limit() {
        let catalog = create_test_catalog();
        for i in 0..6 {
            catalog
                .insert(&test_paper(
                    &format!("http://a/{}", i),
                    &format!("Graph Networks {}", i),
                    0,
                ))
                .unwrap();
        }

        let found = catalog.find_local(SearchField::Title, "Graph", 4).unwrap();
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_layman_summary_backfill() {
        let catalog = create_test_catalog();

        let mut paper = test_paper("http://a/1", "Paper One", 0);
        paper.layman_summary = None;
        catalog.insert(&paper).unwrap();

        let missing = catalog.missing_layman_summary(10).unwrap();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].link, "http://a/1");

        catalog
            .set_layman_summary("http://a/1", "Now in plain words.")
            .unwrap();

        let missing = catalog.missing_layman_summary(10).unwrap();
        assert!(missing.is_empty());

        let (papers, _) = catalog.list_page(Partition::Recent, 1, 10).unwrap();
        assert_eq!(
            papers[0].layman_summary.as_deref(),
            Some("Now in plain words.")
        );
    }

    #[test]
    fn test_set_layman_summary_unknown_link() {
        let catalog = create_test_catalog();
        let result = catalog.set_layman_summary("http://nope", "text");
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_authors_round_trip() {
        let catalog = create_test_catalog();
        catalog.insert(&test_paper("http://a/1", "Paper One", 0)).unwrap();

        let (papers, _) = catalog.list_page(Partition::Recent, 1, 10).unwrap();
        assert_eq!(
            papers[0].authors,
            vec!["Ada Lovelace".to_string(), "Alan Turing".to_string()]
        );
        assert_eq!(
            papers[0].categories,
            vec!["cs.AI".to_string(), "cs.LG".to_string()]
        );
    }
}
