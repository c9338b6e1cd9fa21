//! Fuzzy name lookup over a dataset's entries.
//!
//! Both sides are normalised (lowercase, punctuation to spaces, collapsed
//! whitespace) and scored with the better of a plain Levenshtein ratio and a
//! token-sorted ratio, on a 0-100 scale. Scores are compared unrounded; ties
//! keep the earliest entry.

use crate::domain::model::{Dataset, NameMatch};
use crate::utils::error::{LivingDexError, Result};

pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

fn token_sort(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Similarity between two strings in `0.0..=100.0`.
pub fn similarity(query: &str, candidate: &str) -> f64 {
    let q = normalize(query);
    let c = normalize(candidate);
    let plain = ratio(&q, &c);
    let sorted = ratio(&token_sort(&q), &token_sort(&c));
    plain.max(sorted) * 100.0
}

/// Best match for `query`, or `NoEntries` when the dataset is empty.
pub fn resolve_by_name(dataset: &Dataset, query: &str) -> Result<NameMatch> {
    resolve_candidates(dataset, query, 1)?
        .into_iter()
        .next()
        .ok_or_else(|| no_entries(dataset))
}

/// The `limit` best matches, ordered by score then by rank.
pub fn resolve_candidates(dataset: &Dataset, query: &str, limit: usize) -> Result<Vec<NameMatch>> {
    if dataset.is_empty() {
        return Err(no_entries(dataset));
    }

    let mut scored: Vec<NameMatch> = dataset
        .entries()
        .iter()
        .enumerate()
        .map(|(index, name)| NameMatch {
            name: name.clone(),
            rank: index + 1,
            score: similarity(query, name),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score.total_cmp(&a.score).then(a.rank.cmp(&b.rank))
    });
    scored.truncate(limit);

    tracing::debug!(
        "Resolved '{}' against {} entries of '{}': {:?}",
        query,
        dataset.len(),
        dataset.dataset_id(),
        scored.first().map(|m| (&m.name, m.score))
    );

    Ok(scored)
}

fn no_entries(dataset: &Dataset) -> LivingDexError {
    LivingDexError::NoEntries {
        dataset: dataset.dataset_id().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kanto() -> Dataset {
        Dataset::new("kanto", "kanto", ["bulbasaur", "ivysaur", "venusaur"])
    }

    #[test]
    fn test_misspelled_name_resolves() {
        let m = resolve_by_name(&kanto(), "venisaur").unwrap();
        assert_eq!(m.name, "venusaur");
        assert_eq!(m.rank, 3);
        assert!(m.score >= 80.0, "score was {}", m.score);
    }

    #[test]
    fn test_exact_match_scores_100() {
        let m = resolve_by_name(&kanto(), "Ivysaur").unwrap();
        assert_eq!(m.rank, 2);
        assert_eq!(m.score, 100.0);
    }

    #[test]
    fn test_ties_keep_earliest_entry() {
        let ds = Dataset::new("x", "x", ["eevee", "abra", "eevee"]);
        let m = resolve_by_name(&ds, "eevee").unwrap();
        assert_eq!(m.rank, 1);
    }

    #[test]
    fn test_closer_later_entry_beats_near_tie() {
        // 97.06 against 97.14: equal at one decimal, still ordered
        let query = "abcdefghijklmnopqrstuvwxyzabcdefgh";
        let one_substitution = format!("{}z", &query[..33]);
        let one_insertion = format!("{query}x");
        let ds = Dataset::new("x", "x", [one_substitution, one_insertion]);

        let m = resolve_by_name(&ds, query).unwrap();
        assert_eq!(m.rank, 2);
        assert!(m.score > similarity(query, &ds.entries()[0]));
    }

    #[test]
    fn test_token_order_does_not_matter() {
        let ds = Dataset::new("x", "x", ["tapu koko", "mr. mime", "mime jr."]);
        let m = resolve_by_name(&ds, "mime mr").unwrap();
        assert_eq!(m.name, "mr. mime");
        assert_eq!(m.score, 100.0);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::new("empty", "none", Vec::<String>::new());
        assert!(matches!(
            resolve_by_name(&ds, "anything"),
            Err(LivingDexError::NoEntries { .. })
        ));
    }

    #[test]
    fn test_candidates_are_ordered() {
        let candidates = resolve_candidates(&kanto(), "saur", 3).unwrap();
        assert_eq!(candidates.len(), 3);
        for pair in candidates.windows(2) {
            assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].rank < pair[1].rank)
            );
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Mr.   Mime "), "mr mime");
        assert_eq!(normalize("Farfetch'd"), "farfetch d");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let ds = kanto();
        let first = resolve_by_name(&ds, "venisaur").unwrap();
        for _ in 0..10 {
            assert_eq!(resolve_by_name(&ds, "venisaur").unwrap(), first);
        }
    }
}
