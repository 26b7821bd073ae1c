//! Word family partitioning
//!
//! Given the active candidates and a guessed letter, groups every candidate
//! under the pattern it would produce. Families are rebuilt from scratch on
//! every guess.

use crate::core::Pattern;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Candidates grouped by the pattern they produce for one guess
pub type Families<'a> = FxHashMap<Pattern, Vec<&'a str>>;

/// Partition `active_words` into families for `guess`
///
/// Each word lands in exactly one family, in the order it appears in
/// `active_words`. When no candidate contains `guess` the result is a single
/// family, keyed by `prior`, holding every candidate.
///
/// # Examples
/// ```
/// use evil_hangman::core::Pattern;
/// use evil_hangman::engine::partition::partition;
///
/// let words = ["cat", "car", "cow", "dog"];
/// let families = partition(&words, &Pattern::blank(3), 'c');
///
/// let c_family = &families[&"c--".parse::<Pattern>().unwrap()];
/// assert_eq!(c_family, &vec!["cat", "car", "cow"]);
/// assert_eq!(families.len(), 2);
/// ```
#[must_use]
pub fn partition<'a>(active_words: &[&'a str], prior: &Pattern, guess: char) -> Families<'a> {
    let mut families: Families<'a> = FxHashMap::default();

    for &word in active_words {
        families
            .entry(prior.derive(word, guess))
            .or_default()
            .push(word);
    }

    families
}

/// Word count per family, ordered by pattern
#[must_use]
pub fn family_sizes(families: &Families<'_>) -> BTreeMap<Pattern, usize> {
    families
        .iter()
        .map(|(pattern, words)| (pattern.clone(), words.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn pattern(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn partition_groups_by_derived_pattern() {
        let words = ["cat", "car", "cow", "dog"];
        let families = partition(&words, &Pattern::blank(3), 'c');

        assert_eq!(families.len(), 2);
        assert_eq!(families[&pattern("c--")], vec!["cat", "car", "cow"]);
        assert_eq!(families[&pattern("---")], vec!["dog"]);
    }

    #[test]
    fn missing_letter_yields_single_family() {
        let words = ["cat", "car", "cow"];
        let prior = pattern("c--");
        let families = partition(&words, &prior, 'z');

        assert_eq!(families.len(), 1);
        assert_eq!(families[&prior], vec!["cat", "car", "cow"]);
    }

    #[test]
    fn repeated_letters_split_by_position() {
        let words = ["deed", "dead", "need", "dude", "feed"];
        let families = partition(&words, &Pattern::blank(4), 'e');

        assert_eq!(families[&pattern("-ee-")], vec!["deed", "need", "feed"]);
        assert_eq!(families[&pattern("-e--")], vec!["dead"]);
        assert_eq!(families[&pattern("---e")], vec!["dude"]);
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let words = [
            "able", "bale", "cane", "dove", "echo", "fade", "gale", "hare", "idle", "jade",
        ];
        let families = partition(&words, &Pattern::blank(4), 'a');

        let total: usize = families.values().map(Vec::len).sum();
        assert_eq!(total, words.len());

        let mut seen = FxHashSet::default();
        for members in families.values() {
            for &word in members {
                assert!(seen.insert(word), "'{word}' landed in two families");
            }
        }
        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn every_member_matches_its_key() {
        let words = ["bake", "beak", "book", "cake", "kick"];
        let prior = Pattern::blank(4);
        let families = partition(&words, &prior, 'k');

        for (key, members) in &families {
            for &word in members {
                assert_eq!(&prior.derive(word, 'k'), key);
            }
        }
    }

    #[test]
    fn empty_active_set_has_no_families() {
        let words: [&str; 0] = [];
        assert!(partition(&words, &Pattern::blank(3), 'a').is_empty());
    }

    #[test]
    fn family_sizes_sorted_by_pattern() {
        let words = ["cat", "car", "cow", "dog"];
        let families = partition(&words, &Pattern::blank(3), 'c');
        let sizes: Vec<(String, usize)> = family_sizes(&families)
            .into_iter()
            .map(|(p, n)| (p.to_string(), n))
            .collect();

        assert_eq!(sizes, vec![("---".to_string(), 1), ("c--".to_string(), 3)]);
    }
}
