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

use super::{prelude::*, color::*, data::*, SolverErr};

///
/// A guess the player made, along with the colors the game showed for it.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Guess {
    word: [u8; WORD_SIZE],
    coloring: Colorings,
}

/// The result of filtering a wordbank with a guess
#[derive(Clone, Debug, PartialEq)]
pub struct Filtered {
    /// the words which are still possible, in their original order
    pub bank: Wordbank,
    /// how many words the guess ruled out
    pub eliminated: usize,
}

impl Guess {
    /// Validates the guessed word (it's normalized first, so " CRANE" is fine)
    pub fn new(word: &str, coloring: Colorings) -> Result<Self, SolverErr> {
        let word = normalize_wordle_word(word);
        if !is_wordle_str(&word) {
            return Err(SolverErr::InvalidGuess(word));
        }

        // copy guess characters to a fixed size byte array
        let mut out = [0u8; WORD_SIZE];
        out.copy_from_slice(word.as_bytes());

        Ok(Self { word: out, coloring })
    }

    /// Whether or not the coloring indicates that this guess is the correct answer
    pub fn is_correct(&self) -> bool {
        self.coloring.is_all_correct()
    }

    /// The normalized guess (always WORD_SIZE lowercase ascii letters)
    pub fn word(&self) -> &[u8; WORD_SIZE] {
        &self.word
    }

    pub fn coloring(&self) -> Colorings {
        self.coloring
    }

    pub fn word_str(&self) -> &str {
        // only ascii lowercase bytes make it through Guess::new
        std::str::from_utf8(&self.word).unwrap_or_default()
    }

    ///
    /// Tests if `candidate` could still be the answer after seeing this guess.
    ///
    /// Every letter of the candidate goes into a "budget". The colorings are then checked in a
    /// fixed order, each one spending from that budget:
    ///
    /// * Correct: the candidate must have the same letter here. Spends one of that letter.
    /// * Misplaced: the candidate must NOT have the letter here, but must have an unspent copy of
    ///   it somewhere. Spends one of that letter.
    /// * Excluded: the candidate must have no unspent copies of the letter left.
    ///
    /// The order matters for repeated letters. Take "sheep" against "speed" which is colored
    /// [🟩,⬛,🟩,🟩,🟨]: both e's are spent by the green pass. If the excluded pass looked at the
    /// raw letter counts instead, the 'h' would still be fine, but a guess like "allay" colored
    /// [🟩,⬛,⬛,⬛,🟩] would wrongly reject "abbey" because of the gray 'a' at position 3.
    ///
    pub fn allows(&self, candidate: &str) -> bool {
        debug_assert!(is_wordle_str(candidate));
        let candidate = candidate.as_bytes();
        let mut budget = count_letters_bytes(candidate);

        // CORRECT pass
        for idx in 0..WORD_SIZE {
            if self.coloring[idx] != Coloring::Correct {
                continue;
            }

            let c = self.word[idx];
            if candidate[idx] != c {
                return false;
            }
            budget[letter_idx(c)] -= 1;
        }

        // MISPLACED pass
        for idx in 0..WORD_SIZE {
            if self.coloring[idx] != Coloring::Misplaced {
                continue;
            }

            let c = self.word[idx];
            let counter = &mut budget[letter_idx(c)];
            if candidate[idx] == c || *counter == 0 {
                return false;
            }
            *counter -= 1;
        }

        // EXCLUDED pass
        (0..WORD_SIZE)
            .filter(|idx| self.coloring[*idx] == Coloring::Excluded)
            .all(|idx| budget[letter_idx(self.word[idx])] == 0)
    }
}

///
/// Removes every word from `bank` which the guess rules out. The input bank is untouched, and an
/// empty output is a normal result (the caller decides what running out of words means).
///
pub fn filter(bank: &Wordbank, guess: &Guess) -> Filtered {
    let survivors: Vec<Word> = bank
        .iter()
        .filter(|w| guess.allows(w.as_str()))
        .cloned()
        .collect();

    let eliminated = bank.len() - survivors.len();
    log::debug!(
        "{} {} eliminated {} of {} words",
        guess.word_str(),
        guess.coloring,
        eliminated,
        bank.len()
    );

    Filtered {
        bank: Wordbank::from_filtered(survivors),
        eliminated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn guess(word: &str, code: &str) -> Guess {
        Guess::new(word, code.parse().unwrap()).unwrap()
    }

    fn bank(words: &[&str]) -> Wordbank {
        Wordbank::new(words.iter().map(|w| Word::new(w, 0.5, 0.5)).collect()).unwrap()
    }

    fn texts(bank: &Wordbank) -> Vec<&str> {
        bank.iter().map(|w| w.as_str()).collect()
    }

    #[test_case("crane", "ggggg", "crane", true)]
    #[test_case("crane", "ggggg", "crate", false)]
    #[test_case("crane", "bbbbb", "pilot", true)]
    #[test_case("crane", "bbbbb", "trout", false)]
    #[test_case("abcde", "yyyyy", "eabcd", true)]
    #[test_case("abcde", "yyyyy", "abcde", false)]
    #[test_case("sheep", "gbggy", "speed", true)]
    #[test_case("sheep", "gbggy", "steep", false)]
    #[test_case("sheep", "gbggy", "sheep", false)]
    #[test_case("allay", "gbbbg", "abbey", true)]
    #[test_case("allay", "gbbbg", "artsy", true)]
    #[test_case("allay", "gbbbg", "araby", false)]
    #[test_case("allay", "gbbbg", "alloy", false)]
    #[test_case("allay", "gbbbg", "bobby", false)]
    #[test_case("baaaa", "bgybb", "aaccc", true)]
    #[test_case("baaaa", "bgybb", "caacc", false)]
    #[test_case("tares", "byybb", "brink", false)]
    #[test_case("speed", "bygyb", "creep", false)]
    #[test_case("speed", "byggb", "creep", true)]
    fn test_allows(word: &str, code: &str, candidate: &str, expected: bool) {
        assert_eq!(
            guess(word, code).allows(candidate),
            expected,
            "guess={} code={} candidate={}",
            word,
            code,
            candidate,
        );
    }

    #[test_case("sheep", "speed")]
    #[test_case("allay", "abbey")]
    #[test_case("crane", "trace")]
    #[test_case("eerie", "elder")]
    #[test_case("lolly", "hello")]
    #[test_case("mamma", "drama")]
    fn test_answer_survives_its_own_coloring(word: &str, answer: &str) {
        let g = Guess::new(word, Colorings::with_guess_answer(word, answer)).unwrap();
        assert!(g.allows(answer), "{} should survive {} {}", answer, word, g.coloring);
    }

    #[test]
    fn test_filter_keeps_order_and_counts() {
        let b = bank(&["abbey", "araby", "artsy", "alloy", "ashay"]);
        let out = filter(&b, &guess("allay", "gbbbg"));

        assert_eq!(texts(&out.bank), ["abbey", "artsy"]);
        assert_eq!(out.eliminated, 3);
    }

    #[test]
    fn test_filter_never_grows_and_is_idempotent() {
        let b = bank(&["crane", "trace", "crate", "react", "caret", "blimp", "pilot"]);
        for (word, code) in [("crane", "yggbg"), ("pilot", "bbbbb"), ("caret", "yyyyy")] {
            let g = guess(word, code);
            let once = filter(&b, &g);
            assert!(once.bank.len() <= b.len());
            assert_eq!(once.eliminated, b.len() - once.bank.len());

            let twice = filter(&once.bank, &g);
            assert_eq!(twice.bank, once.bank);
            assert_eq!(twice.eliminated, 0);
        }
    }

    #[test]
    fn test_filter_to_nothing_is_not_an_error() {
        let b = bank(&["crane", "trace"]);
        let out = filter(&b, &guess("blimp", "ggggg"));
        assert!(out.bank.is_empty());
        assert_eq!(out.eliminated, 2);
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let b = bank(&["crane", "trace"]);
        let before = b.clone();
        let _ = filter(&b, &guess("crane", "bbbbb"));
        assert_eq!(b, before);
    }

    #[test_case("cran")]
    #[test_case("cranes")]
    #[test_case("cr4ne")]
    #[test_case("")]
    fn test_invalid_guess(word: &str) {
        assert!(matches!(
            Guess::new(word, Colorings::default()),
            Err(SolverErr::InvalidGuess(_))
        ));
    }

    #[test]
    fn test_guess_is_normalized() {
        let g = Guess::new(" CRANE ", Colorings::ALL_CORRECT).unwrap();
        assert_eq!(g.word_str(), "crane");
        assert!(g.is_correct());
    }

    #[test_case(" CRANE ", "gybbb", b"crane")]
    #[test_case("Sheep", "GBGGY", b"sheep")]
    fn test_guess_accessors(word: &str, code: &str, expected: &[u8; WORD_SIZE]) {
        let coloring: Colorings = code.parse().unwrap();
        let g = Guess::new(word, coloring).unwrap();

        assert_eq!(g.word(), expected);
        assert_eq!(g.coloring(), coloring);
        // the stored word is always safe to index the letter budget with
        assert!(is_wordle_str_bytes(g.word()));
    }
}
