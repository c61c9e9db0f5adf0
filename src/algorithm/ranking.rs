//! Word scoring used to order placement and eviction candidates
//!
//! Everything here is a pure function of its arguments.

use crate::dictionary::{WordId, WordIndex};
use crate::io::configuration::{
    DIGIT_PENALTY, LETTER_REWARD, SPECIAL_CHARACTER_PENALTY, SPECIAL_CHARACTERS, VOWELS,
};
use crate::spatial::Placement;
use std::cmp::Reverse;

/// Count vowels, ignoring case
pub fn vowel_count(word: &str) -> usize {
    word.chars()
        .filter(|letter| VOWELS.contains(&letter.to_ascii_lowercase()))
        .count()
}

/// Letter purity: heavy penalties for symbols and digits, a point per letter
pub fn purity_score(word: &str) -> i32 {
    word.chars()
        .map(|letter| {
            if SPECIAL_CHARACTERS.contains(letter) {
                -SPECIAL_CHARACTER_PENALTY
            } else if letter.is_ascii_digit() {
                -DIGIT_PENALTY
            } else {
                LETTER_REWARD
            }
        })
        .sum()
}

// Vowel-rich first, then letter-pure
fn candidate_key(word: &str) -> Reverse<(usize, i32)> {
    Reverse((vowel_count(word), purity_score(word)))
}

/// Order words for placement, best first
///
/// Sorts descending by vowel count, then purity. The sort is stable, so
/// incoming order breaks ties.
pub fn rank_candidates<S: AsRef<str>>(words: &mut [S]) {
    words.sort_by_key(|word| candidate_key(word.as_ref()));
}

/// Order word ids for placement, looking their text up in the index
pub fn rank_word_ids(index: &WordIndex, ids: &mut [WordId]) {
    ids.sort_by_key(|&id| candidate_key(index.word(id).unwrap_or_default()));
}

/// Letter positions of a placement covered by a perpendicular placement
pub fn intersection_count(placement: &Placement, placements: &[Placement]) -> usize {
    let crossing = placement.direction.perpendicular();
    placement
        .cells()
        .filter(|&((row, col), _)| {
            placements
                .iter()
                .any(|other| other.direction == crossing && other.covers(row, col))
        })
        .count()
}

/// Order placements for eviction, first to go first
///
/// Sorts ascending by purity, then length, then negated intersection count.
pub fn rank_for_eviction(candidates: &mut [Placement], placements: &[Placement]) {
    candidates.sort_by_cached_key(|candidate| {
        (
            purity_score(&candidate.word),
            candidate.length(),
            Reverse(intersection_count(candidate, placements)),
        )
    });
}
