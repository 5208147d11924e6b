//! Term-overlap ranking for partial queries.

use crate::feed::RawPaper;

/// Tokens shorter than this carry no signal and are discarded.
const MIN_TERM_LEN: usize = 4;

/// Bonus for titles containing the query terms as one in-order phrase.
/// Users type prefixes of titles ("attention is all"), so contiguous
/// matches outrank bag-of-words overlap.
const PHRASE_BONUS: u32 = 3;

/// A query is "partial" when it is too short to be a full title or author
/// name, in which case the remote tier uses term ranking instead of an
/// exact query.
pub fn is_partial_query(query: &str) -> bool {
    query.split_whitespace().count() < 2 || query.trim().len() < 10
}

/// Lowercased query terms eligible for ranking.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .filter(|t| t.len() >= MIN_TERM_LEN)
        .map(|t| t.to_lowercase())
        .collect()
}

/// Order candidates by term overlap with their title, best first.
///
/// The sort is stable, so ties keep the remote relevance order. The
/// internal score never leaves this function.
pub fn rank_candidates(terms: &[String], candidates: Vec<RawPaper>, limit: usize) -> Vec<RawPaper> {
    let mut scored: Vec<(u32, RawPaper)> = candidates
        .into_iter()
        .map(|paper| (title_score(terms, &paper.title), paper))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, paper)| paper)
        .collect()
}

fn title_score(terms: &[String], title: &str) -> u32 {
    let title_lower = title.to_lowercase();

    let mut score = terms
        .iter()
        .filter(|term| title_lower.contains(term.as_str()))
        .count() as u32;

    if !terms.is_empty() && title_lower.contains(&terms.join(" ")) {
        score += PHRASE_BONUS;
    }

    score
}
