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

use thiserror::Error;
use super::{color::*, data::*, filter::*, suggest::*};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverErr {
    #[error("no matching words found")]
    NoCandidates,
    #[error("no turns remaining")]
    TurnsExhausted,
    #[error("the wordle puzzle is already solved")]
    AlreadySolved,
    #[error("'{0}' is not a valid guess")]
    InvalidGuess(String),
    #[error("invalid tile colors: {0}")]
    InvalidColorings(String),
}

impl From<ColoringParseErr> for SolverErr {
    fn from(err: ColoringParseErr) -> Self {
        SolverErr::InvalidColorings(err.to_string())
    }
}

///
/// Everything that changes over the course of one game: the words that are still possible and
/// how many guesses are left.
///
/// filter() and rank() don't know about any of this, the Session just feeds them the current
/// state and stores what comes back.
///
#[derive(Clone, Debug)]
pub struct Session {
    /// words consistent with every guess made so far
    bank: Wordbank,
    /// size of the bank before any guesses, used to report eliminations
    max_words: usize,
    /// counts down from weighting.initial_turns
    guesses_remaining: usize,
    /// set when a guess comes back all green
    solved: bool,
    weighting: Weighting,
}

/// What a single accepted guess did to the wordbank
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GuessOutcome {
    /// words eliminated by this guess alone
    pub eliminated: usize,
    /// words eliminated since the start of the session
    pub eliminated_total: usize,
    pub remaining: usize,
}

impl Session {
    pub fn new(bank: Wordbank) -> Self {
        Self::with_weighting(bank, Weighting::default())
    }

    pub fn with_weighting(bank: Wordbank, weighting: Weighting) -> Self {
        Self {
            max_words: bank.len(),
            guesses_remaining: weighting.initial_turns,
            solved: false,
            bank,
            weighting,
        }
    }

    ///
    /// Applies a guess (and the colors the game showed for it) to the session.
    ///
    /// Nothing is changed when an error is returned for a finished session or an invalid guess.
    /// When the guess rules out every remaining word, the (now empty) bank is kept and
    /// SolverErr::NoCandidates is returned... the session is over at that point.
    ///
    pub fn make_guess(
        &mut self,
        guess: &str,
        coloring: Colorings,
    ) -> Result<GuessOutcome, SolverErr> {
        if self.solved {
            return Err(SolverErr::AlreadySolved);
        }

        if self.guesses_remaining == 0 {
            return Err(SolverErr::TurnsExhausted);
        }

        if self.bank.is_empty() {
            return Err(SolverErr::NoCandidates);
        }

        let guess = Guess::new(guess, coloring)?;
        let Filtered { bank, eliminated } = filter(&self.bank, &guess);

        self.bank = bank;
        self.guesses_remaining -= 1;
        self.solved = guess.is_correct();

        let outcome = GuessOutcome {
            eliminated,
            eliminated_total: self.max_words - self.bank.len(),
            remaining: self.bank.len(),
        };
        log::info!(
            "guess {} {} left {} words, {} guesses remaining",
            guess.word_str(),
            guess.coloring(),
            outcome.remaining,
            self.guesses_remaining,
        );

        if self.bank.is_empty() {
            return Err(SolverErr::NoCandidates);
        }

        Ok(outcome)
    }

    /// Ranks the remaining words for the next guess
    pub fn suggestions(&self) -> Result<Vec<ScoredCandidate<'_>>, SolverErr> {
        self.weighting.rank(&self.bank, self.guesses_remaining)
    }

    /// The highest weighted remaining word
    pub fn best_suggestion(&self) -> Result<&str, SolverErr> {
        self.suggestions()?
            .first()
            .map(|c| c.word)
            .ok_or(SolverErr::NoCandidates)
    }

    ///
    /// True when another guess can be made. False when:
    ///   * The puzzle is solved
    ///   * All possible words have been eliminated
    ///   * Turns are exhausted
    ///
    pub fn can_guess(&self) -> bool {
        self.guesses_remaining > 0 && !self.solved && !self.bank.is_empty()
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn guesses_remaining(&self) -> usize {
        self.guesses_remaining
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn num_remaining(&self) -> usize {
        self.bank.len()
    }

    pub fn bank(&self) -> &Wordbank {
        &self.bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordle::NUM_TURNS;

    fn sample_bank() -> Wordbank {
        Wordbank::new(vec![
            Word::new("crane", 0.9, 0.6),
            Word::new("trace", 0.5, 0.8),
            Word::new("blimp", 0.1, 0.2),
        ]).unwrap()
    }

    fn colors(code: &str) -> Colorings {
        code.parse().unwrap()
    }

    #[test]
    fn test_end_to_end_one_survivor() {
        let mut session = Session::new(sample_bank());
        assert_eq!(session.best_suggestion(), Ok("trace"));

        let outcome = session.make_guess("crane", colors("yggbg")).unwrap();
        assert_eq!(outcome, GuessOutcome { eliminated: 2, eliminated_total: 2, remaining: 1 });
        assert_eq!(session.guesses_remaining(), NUM_TURNS - 1);
        assert!(session.bank().contains("trace"));

        let ranked = session.suggestions().unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, "trace");
        assert!((ranked[0].weight - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_end_to_end_nothing_left() {
        let mut session = Session::new(sample_bank());
        // a@2 and n@3 are green but c and e are gray: nothing in the bank fits
        let err = session.make_guess("crane", colors("bbggb")).unwrap_err();

        assert_eq!(err, SolverErr::NoCandidates);
        assert_eq!(session.num_remaining(), 0);
        assert_eq!(session.max_words(), 3);
        assert!(!session.can_guess());
        assert_eq!(session.suggestions().unwrap_err(), SolverErr::NoCandidates);
        assert_eq!(
            session.make_guess("trace", colors("ggggg")).unwrap_err(),
            SolverErr::NoCandidates
        );
    }

    #[test]
    fn test_solved_session() {
        let mut session = Session::new(sample_bank());
        session.make_guess("trace", Colorings::ALL_CORRECT).unwrap();

        assert!(session.is_solved());
        assert!(!session.can_guess());
        assert_eq!(
            session.make_guess("trace", Colorings::ALL_CORRECT).unwrap_err(),
            SolverErr::AlreadySolved
        );
    }

    #[test]
    fn test_turns_run_out() {
        let mut session = Session::new(sample_bank());
        for _ in 0..NUM_TURNS {
            // z is in none of the words so nothing is eliminated
            session.make_guess("zzzzz", colors("bbbbb")).unwrap();
        }

        assert_eq!(session.guesses_remaining(), 0);
        assert_eq!(session.num_remaining(), 3);
        assert!(!session.can_guess());
        assert_eq!(
            session.make_guess("zzzzz", colors("bbbbb")).unwrap_err(),
            SolverErr::TurnsExhausted
        );
    }

    #[test]
    fn test_invalid_guess_changes_nothing() {
        let mut session = Session::new(sample_bank());
        let err = session.make_guess("cranes", colors("bbbbb")).unwrap_err();

        assert_eq!(err, SolverErr::InvalidGuess("cranes".to_string()));
        assert_eq!(session.guesses_remaining(), NUM_TURNS);
        assert_eq!(session.num_remaining(), 3);
    }

    #[test]
    fn test_eliminated_total_accumulates() {
        let bank = Wordbank::new(vec![
            Word::new("crane", 0.9, 0.6),
            Word::new("trace", 0.5, 0.8),
            Word::new("crate", 0.6, 0.7),
            Word::new("blimp", 0.1, 0.2),
        ]).unwrap();
        let mut session = Session::new(bank);

        // answer is "trace"
        let first = session
            .make_guess("blimp", Colorings::with_guess_answer("blimp", "trace"))
            .unwrap();
        assert_eq!(first, GuessOutcome { eliminated: 1, eliminated_total: 1, remaining: 3 });

        let second = session
            .make_guess("crate", Colorings::with_guess_answer("crate", "trace"))
            .unwrap();
        assert_eq!(second, GuessOutcome { eliminated: 2, eliminated_total: 3, remaining: 1 });
        assert_eq!(session.best_suggestion(), Ok("trace"));
    }

    #[test]
    fn test_coloring_parse_error_converts() {
        let err: SolverErr = "gyx".parse::<Colorings>().unwrap_err().into();
        assert!(matches!(err, SolverErr::InvalidColorings(_)));
    }

    #[test]
    fn test_cloned_session_is_independent() {
        let mut session = Session::new(sample_bank());
        let snapshot = session.clone();
        session.make_guess("crane", colors("yggbg")).unwrap();

        assert_eq!(session.num_remaining(), 1);
        assert_eq!(snapshot.num_remaining(), 3);
        assert_eq!(snapshot.guesses_remaining(), NUM_TURNS);
        assert!(format!("{:?}", snapshot).contains("guesses_remaining"));
    }
}
