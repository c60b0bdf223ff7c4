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

use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;
use self::Coloring::*;
use super::prelude::*;

///
/// The three different colors that a wordle square can be...
///   * Excluded = the letter is not in the answer (also indicates no further instances of a letter
///                when another square with the same letter is colored misplaced/correct)
///   * Misplaced = the letter is in the answer, but not in this position
///   * Correct = the letter is in the answer at this position
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coloring {
    Excluded,
    Misplaced,
    Correct,
}

impl Coloring {
    /// All three colorings (make sure this actually matches the definition above)
    pub const ALL: [Coloring; 3] = [Excluded, Misplaced, Correct];

    /// Reads one symbol of a tile code. The game shows (g)reen, (y)ellow and (b)lack tiles, and
    /// 2/1/0 are accepted as a numeric shorthand.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Some(match symbol.to_ascii_lowercase() {
            'g' | '2' => Correct,
            'y' | '1' => Misplaced,
            'b' | '0' => Excluded,
            _ => return None,
        })
    }

    /// The letter used for this coloring in a tile code
    pub fn symbol(&self) -> char {
        match self {
            Excluded => 'b',
            Misplaced => 'y',
            Correct => 'g',
        }
    }

    /// Gives the best emoji to represent the coloring (used for printing)
    pub fn emoji(&self) -> &'static str {
        match self {
            Excluded => "⬛",
            Misplaced => "🟨",
            Correct => "🟩"
        }
    }
}

/// An array of Colorings, one for each square in the puzzle.
pub type ColoringsArray = [Coloring; WORD_SIZE];

/// The array of Colorings, but in a struct, so that we can attach some useful functions to a
/// complete set of Colorings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Colorings(pub ColoringsArray);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColoringParseErr {
    #[error("tile colors must be {expected} symbols, got {got}")]
    WrongLength { expected: usize, got: usize },
    #[error("'{0}' is not a tile color, use (g)reen, (y)ellow or (b)lack")]
    BadSymbol(char),
}

/// Delegate indexing of the struct to it's inner value
impl Index<usize> for Colorings {
    type Output = Coloring;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Delegate mutable indexing of the struct to it's inner value
impl IndexMut<usize> for Colorings {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Colorings {
    /// The coloring shown when the guess is the answer
    pub const ALL_CORRECT: Colorings = Colorings([Correct; WORD_SIZE]);

    ///
    /// Compute what colors would be shown given some guess & answer. For example if the guess was
    /// "tares" and the answer was "scare" we should compute
    /// [Excluded, Misplaced, Misplaced, Misplaced, Misplaced]
    ///
    /// This is implemented by:
    /// * creating an empty [Coloring; WORD_SIZE] where all colors are defaulted to Excluded
    /// * computing a "budget" for each letter in the alphabet (based on their frequency in the
    ///   answer)
    /// * performing a "GREEN pass" which marks all correctly positioned letters (and updates the
    ///   budget)
    /// * performing a "YELLOW pass" to mark all misplaced letters (based on the remaining budget
    ///   for each letter)
    ///
    /// # Panics
    ///
    /// Both `guess` and `answer` must already be wordle words (see is_wordle_str). Anything else,
    /// including uppercase letters, panics. Run user input through normalize_wordle_word first.
    ///
    pub fn with_guess_answer(guess: &str, answer: &str) -> Self {
        assert!(is_wordle_str(answer), "'{}' is not a wordle word", answer);
        assert!(is_wordle_str(guess), "'{}' is not a wordle word", guess);

        let mut out = Self::default();
        let mut answer_letter_counts = count_letters(answer);
        let answer_bytes = answer.as_bytes();
        let guess_bytes = guess.as_bytes();

        // GREEN pass
        for i in 0..WORD_SIZE {
            let gc = guess_bytes[i];
            if gc == answer_bytes[i] {
                answer_letter_counts[letter_idx(gc)] -= 1;
                out[i] = Correct;
            }
        }

        // YELLOW pass
        for i in 0..WORD_SIZE {
            if out[i] != Correct {
                let counter = &mut answer_letter_counts[letter_idx(guess_bytes[i])];
                if *counter > 0 {
                    *counter -= 1;
                    out[i] = Misplaced;
                }
            }
        }

        out
    }

    /// Whether every square is green (the guess was the answer)
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|c| c == &Correct)
    }

    /// Renders the colorings back into a g/y/b tile code
    pub fn to_code_string(&self) -> String {
        self.0.iter().map(Coloring::symbol).collect()
    }
}

impl Default for Colorings {
    fn default() -> Self {
        Self([Excluded; WORD_SIZE])
    }
}

/// Parses a tile code such as "gybbb". Surrounding whitespace is ignored.
impl FromStr for Colorings {
    type Err = ColoringParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let got = s.chars().count();
        if got != WORD_SIZE {
            return Err(ColoringParseErr::WrongLength { expected: WORD_SIZE, got });
        }

        let mut out = Self::default();
        for (i, symbol) in s.chars().enumerate() {
            out[i] = Coloring::from_symbol(symbol).ok_or(ColoringParseErr::BadSymbol(symbol))?;
        }

        Ok(out)
    }
}

impl Display for Colorings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..WORD_SIZE {
            f.write_str(self[i].emoji())?;
        }

        Ok(())
    }
}
