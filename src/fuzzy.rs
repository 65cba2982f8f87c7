//! Approximate string matching used by every lookup stage of the pipeline.
//!
//! The provider's catalog, the geocoder and the user never agree on exact
//! spelling, so all matching goes through [`weighted_ratio`], a 0–100 score
//! that combines a plain edit-distance similarity with partial (substring)
//! and token-based variants. The rules follow the widely used "WRatio"
//! composite: strings of similar length are compared whole, while a short
//! query against a long candidate (e.g. `"Paris"` vs `"Paris Orly AP"`) is
//! scored on its best aligned window, with a penalty for the length mismatch.

use std::collections::BTreeSet;

/// The acceptance cutoff shared by the matching stages.
pub const MATCH_THRESHOLD: u8 = 80;

const UNBASE_SCALE: f64 = 0.95;

/// A choice together with the score it obtained against the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored<T> {
    pub value: T,
    pub score: u8,
}

/// Lowercases `s`, turns every non-alphanumeric character into a space and
/// collapses runs of whitespace.
///
/// ```
/// use epw_finder::fuzzy::full_process;
///
/// assert_eq!(full_process("United_States_of_America"), "united states of america");
/// assert_eq!(full_process("  Paris.Orly--AP "), "paris orly ap");
/// ```
pub fn full_process(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized Levenshtein similarity on a 0–100 scale.
pub fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Best [`ratio`] of the shorter string against every window of the longer
/// string that has the same length.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let width = short.chars().count();
    if width == 0 {
        return 0.0;
    }
    let long_chars: Vec<char> = long.chars().collect();
    if long_chars.len() == width {
        return ratio(short, long);
    }

    let mut best = 0.0_f64;
    for start in 0..=(long_chars.len() - width) {
        let window: String = long_chars[start..start + width].iter().collect();
        best = best.max(ratio(short, &window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Compares both strings after sorting their whitespace-separated tokens.
pub fn token_sort_ratio(a: &str, b: &str, partial: bool) -> f64 {
    let (a, b) = (sorted_tokens(a), sorted_tokens(b));
    if partial {
        partial_ratio(&a, &b)
    } else {
        ratio(&a, &b)
    }
}

/// Compares the shared tokens of both strings against each side's full token
/// set, so extra words on one side cost little.
pub fn token_set_ratio(a: &str, b: &str, partial: bool) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if partial {
        if !intersection.is_empty() {
            return 100.0;
        }
        return partial_ratio(&only_a.join(" "), &only_b.join(" "));
    }

    let sect = intersection.join(" ");
    let combined_a = format!("{} {}", sect, only_a.join(" ")).trim().to_string();
    let combined_b = format!("{} {}", sect, only_b.join(" ")).trim().to_string();

    let mut best = ratio(&combined_a, &combined_b);
    if !sect.is_empty() {
        best = best.max(ratio(&sect, &combined_a)).max(ratio(&sect, &combined_b));
    }
    best
}

/// Composite similarity score between `a` and `b`, 0–100.
///
/// Both inputs go through [`full_process`] first; if either ends up empty the
/// score is 0.
///
/// ```
/// use epw_finder::fuzzy::weighted_ratio;
///
/// assert_eq!(weighted_ratio("France", "France"), 100);
/// assert!(weighted_ratio("Paris", "Paris Orly AP") > 80);
/// assert!(weighted_ratio("Paris", "Lyon-Saint Exupery AP") < 80);
/// ```
pub fn weighted_ratio(a: &str, b: &str) -> u8 {
    let (a, b) = (full_process(a), full_process(b));
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let base = ratio(&a, &b);
    let (len_a, len_b) = (a.chars().count() as f64, b.chars().count() as f64);
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let score = if len_ratio < 1.5 {
        base.max(token_sort_ratio(&a, &b, false) * UNBASE_SCALE)
            .max(token_set_ratio(&a, &b, false) * UNBASE_SCALE)
    } else {
        let partial_scale = if len_ratio <= 8.0 { 0.9 } else { 0.6 };
        base.max(partial_ratio(&a, &b) * partial_scale)
            .max(token_sort_ratio(&a, &b, true) * UNBASE_SCALE * partial_scale)
            .max(token_set_ratio(&a, &b, true) * UNBASE_SCALE * partial_scale)
    };

    score.round().clamp(0.0, 100.0) as u8
}

/// Picks the choice whose `key` scores highest against `query`.
///
/// Ties go to the choice encountered first. Returns `None` only when
/// `choices` is empty; applying a threshold is up to the caller.
pub fn best_match<'a, T, F>(query: &str, choices: &'a [T], key: F) -> Option<Scored<&'a T>>
where
    F: Fn(&T) -> &str,
{
    let mut best: Option<Scored<&'a T>> = None;
    for choice in choices {
        let score = weighted_ratio(query, key(choice));
        match best {
            Some(current) if score <= current.score => {}
            _ => {
                best = Some(Scored {
                    value: choice,
                    score,
                })
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_full() {
        assert_eq!(weighted_ratio("Paris", "paris"), 100);
        assert_eq!(weighted_ratio("United_States_of_America", "United States of America"), 100);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(weighted_ratio("", "Paris"), 0);
        assert_eq!(weighted_ratio("Paris", "---"), 0);
    }

    #[test]
    fn test_single_typo_is_tolerated() {
        // one edit over six characters
        let score = weighted_ratio("Pariss", "Paris");
        assert!(score > MATCH_THRESHOLD, "score was {score}");
    }

    #[test]
    fn test_short_query_against_longer_station_name() {
        let score = weighted_ratio("Paris", "Paris Orly AP");
        assert_eq!(score, 90);
        let country = weighted_ratio("United States", "United_States_of_America");
        assert!(country >= MATCH_THRESHOLD, "score was {country}");
    }

    #[test]
    fn test_length_ratio_of_eight_keeps_the_milder_partial_scale() {
        // 5 against 40 characters after processing
        let long = "Paris abcdefghijklmnopqrstuvwxyzabcdefgh";
        assert_eq!(full_process(long).chars().count(), 40);
        assert_eq!(weighted_ratio("Paris", long), 90);

        let longer = "Paris abcdefghijklmnopqrstuvwxyzabcdefghi";
        assert_eq!(weighted_ratio("Paris", longer), 60);
    }

    #[test]
    fn test_unrelated_names_fall_below_threshold() {
        for (a, b) in [
            ("Germany", "France"),
            ("United States", "United Kingdom"),
            ("Tokyo", "Paris Orly AP"),
            ("Berlin", "Lyon-Saint Exupery AP"),
        ] {
            let score = weighted_ratio(a, b);
            assert!(score < MATCH_THRESHOLD, "{a} vs {b} scored {score}");
        }
    }

    #[test]
    fn test_partial_ratio_finds_best_window() {
        assert_eq!(partial_ratio("orly", "paris orly ap"), 100.0);
        assert_eq!(partial_ratio("", "paris"), 0.0);
    }

    #[test]
    fn test_token_set_ignores_extra_words() {
        assert_eq!(token_set_ratio("new york", "york new city", false), 100.0);
    }

    #[test]
    fn test_best_match_prefers_first_on_tie() {
        let choices = ["Paris Orly AP", "Paris Le Bourget AP", "Lyon"];
        let best = best_match("Paris", &choices, |c| *c).expect("non-empty choices");
        assert_eq!(*best.value, "Paris Orly AP");
        assert_eq!(best.score, 90);
    }

    #[test]
    fn test_best_match_on_empty_choices() {
        let choices: [&str; 0] = [];
        assert!(best_match("Paris", &choices, |c| *c).is_none());
    }
}
