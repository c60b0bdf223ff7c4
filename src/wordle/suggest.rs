/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use std::cmp::Ordering;
use super::{prelude::*, data::*, SolverErr};

#[derive(Copy, Clone, Debug)]
pub struct ScoredCandidate<'a> {
    pub word: &'a str,
    pub weight: WordleFloat,
}

impl PartialEq<Self> for ScoredCandidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.weight.eq(&other.weight)
    }
}

impl PartialOrd<Self> for ScoredCandidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.weight.partial_cmp(&other.weight)
    }
}

///
/// Decides which of a word's two scores count towards its weight, depending on how far into the
/// game we are.
///
/// * While `guesses_remaining == initial_turns` nothing has been eliminated yet, so how common a
///   word is tells us nothing... only letter diversity counts.
/// * Once `guesses_remaining <= diversity_cutoff` the pool is small, and we just want the most
///   likely answer... only word frequency counts.
/// * In between, both scores are multiplied together.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Weighting {
    pub initial_turns: usize,
    pub diversity_cutoff: usize,
}

impl Default for Weighting {
    fn default() -> Self {
        Self {
            initial_turns: NUM_TURNS,
            diversity_cutoff: DIVERSITY_CUTOFF_TURNS,
        }
    }
}

impl Weighting {
    pub fn weight(&self, word: &Word, guesses_remaining: usize) -> WordleFloat {
        let word_term = if guesses_remaining < self.initial_turns {
            word.word_frequency
        } else {
            1.0
        };

        let diversity_term = if guesses_remaining > self.diversity_cutoff {
            word.letter_diversity_score
        } else {
            1.0
        };

        word_term * diversity_term
    }

    ///
    /// Weighs every word in the bank and sorts them from best to worst. Words with the same weight
    /// keep the order they had in the bank.
    ///
    /// An empty bank means there's nothing left to suggest, which is reported as
    /// SolverErr::NoCandidates rather than an empty list.
    ///
    pub fn rank<'a>(
        &self,
        bank: &'a Wordbank,
        guesses_remaining: usize,
    ) -> Result<Vec<ScoredCandidate<'a>>, SolverErr> {
        if bank.is_empty() {
            return Err(SolverErr::NoCandidates);
        }

        let mut out: Vec<ScoredCandidate<'a>> = bank
            .iter()
            .map(|w| ScoredCandidate {
                word: w.as_str(),
                weight: self.weight(w, guesses_remaining),
            })
            .collect();

        // sort_by is stable, so ties stay in bank order
        out.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        Ok(out)
    }
}

/// Ranks with the default Weighting
pub fn rank(
    bank: &Wordbank,
    guesses_remaining: usize,
) -> Result<Vec<ScoredCandidate<'_>>, SolverErr> {
    Weighting::default().rank(bank, guesses_remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample_bank() -> Wordbank {
        Wordbank::new(vec![
            Word::new("crane", 0.9, 0.6),
            Word::new("trace", 0.5, 0.8),
            Word::new("blimp", 0.1, 0.2),
        ]).unwrap()
    }

    fn words<'a>(ranked: &[ScoredCandidate<'a>]) -> Vec<&'a str> {
        ranked.iter().map(|c| c.word).collect()
    }

    #[test_case(6, ["trace", "crane", "blimp"], [0.8, 0.6, 0.2] ; "first guess uses diversity")]
    #[test_case(5, ["crane", "trace", "blimp"], [0.54, 0.4, 0.02] ; "middle game multiplies")]
    #[test_case(4, ["crane", "trace", "blimp"], [0.54, 0.4, 0.02] ; "last turn before cutoff")]
    #[test_case(3, ["crane", "trace", "blimp"], [0.9, 0.5, 0.1] ; "cutoff uses frequency only")]
    #[test_case(1, ["crane", "trace", "blimp"], [0.9, 0.5, 0.1] ; "last guess")]
    fn test_phase_weighting(
        remaining: usize,
        expected_order: [&str; 3],
        expected_weights: [WordleFloat; 3],
    ) {
        let bank = sample_bank();
        let ranked = rank(&bank, remaining).unwrap();

        assert_eq!(words(&ranked), expected_order);
        for (candidate, expected) in ranked.iter().zip(expected_weights) {
            assert!(
                (candidate.weight - expected).abs() < 1e-9,
                "{} weighed {} expected {}",
                candidate.word,
                candidate.weight,
                expected,
            );
        }
    }

    #[test]
    fn test_initial_weight_is_diversity_alone() {
        let bank = sample_bank();
        let w = Weighting::default();
        for word in &bank {
            assert_eq!(w.weight(word, NUM_TURNS), word.letter_diversity_score);
            assert_eq!(w.weight(word, DIVERSITY_CUTOFF_TURNS), word.word_frequency);
        }
    }

    #[test]
    fn test_ties_keep_bank_order() {
        let bank = Wordbank::new(vec![
            Word::new("bbbbb", 0.5, 0.5),
            Word::new("aaaaa", 0.5, 0.5),
            Word::new("zzzzz", 0.9, 0.9),
            Word::new("ccccc", 0.5, 0.5),
        ]).unwrap();

        let ranked = rank(&bank, 5).unwrap();
        assert_eq!(words(&ranked), ["zzzzz", "bbbbb", "aaaaa", "ccccc"]);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let bank = sample_bank();
        for remaining in 1..=NUM_TURNS {
            let a = rank(&bank, remaining).unwrap();
            let b = rank(&bank, remaining).unwrap();
            assert_eq!(words(&a), words(&b));
        }
    }

    #[test]
    fn test_empty_bank_has_no_candidates() {
        assert_eq!(rank(&Wordbank::default(), 4).unwrap_err(), SolverErr::NoCandidates);
    }

    #[test]
    fn test_single_word_is_a_normal_result() {
        let bank = Wordbank::new(vec![Word::new("crane", 0.0, 0.0)]).unwrap();
        let ranked = rank(&bank, 2).unwrap();
        assert_eq!(words(&ranked), ["crane"]);
    }

    #[test]
    fn test_custom_weighting() {
        let bank = sample_bank();
        let w = Weighting { initial_turns: 10, diversity_cutoff: 0 };
        // 6 < 10 and 6 > 0 so both scores count
        let ranked = w.rank(&bank, 6).unwrap();
        assert_eq!(words(&ranked), ["crane", "trace", "blimp"]);
    }
}
