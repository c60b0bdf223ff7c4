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

use crate::wordle::prelude::*;
use lazy_static::lazy_static;
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::str::Utf8Error;
use thiserror::Error;

// Stores "input data" for the wordbank generator
pub const DATA_DIRECTORY: &str = "data/";
pub const DICTIONARY_FILE_NAME: &str = "5word_dictionary.txt";
pub const FREQUENCY_FILE_NAME: &str = "5word_frequencies.txt";

// Stores the generated wordbank, which is embedded into the binary
pub const EMBED_DATA_DIRECTORY: &str = "txt_data/";
pub const WORDBANK_FILE_NAME: &str = "wordle_bank.json";

lazy_static! {
    /// The embedded wordbank, parsed on first use
    pub static ref DATA: Result<Wordbank, LoadDataErr> = Wordbank::read_embedded();
}

#[derive(RustEmbed)]
#[folder = "txt_data/"]
struct RawData;

///
/// A single candidate answer and its two scores.
///
/// Both scores were min-max scaled against the entire pool when the wordbank was generated, so
/// they stay the same for the whole session no matter how many words get filtered out.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// The word itself (WORD_SIZE lowercase letters)
    pub word: String,
    /// How common the word is, in [0, 1]
    #[serde(alias = "word_freq")]
    pub word_frequency: WordleFloat,
    /// How common (and how distinct) the word's letters are, in [0, 1]
    #[serde(alias = "char_freq")]
    pub letter_diversity_score: WordleFloat,
}

impl Word {
    pub fn new(
        word: &str,
        word_frequency: WordleFloat,
        letter_diversity_score: WordleFloat,
    ) -> Self {
        Self {
            word: word.to_string(),
            word_frequency,
            letter_diversity_score,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.word
    }
}

///
/// The ordered set of words which are still possible answers.
///
/// A Wordbank is never grown. Filtering (see filter.rs) builds a new, smaller Wordbank and the old
/// one is dropped.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wordbank {
    words: Vec<Word>,
}

#[derive(Error, Debug)]
pub enum LoadDataErr {
    #[error("missing wordbank file '{0}'")]
    MissingWordbankFile(String),
    #[error("unable to read the built in wordbank: {0}")]
    BadEmbeddedWordbank(String),
    #[error(transparent)]
    EncodingError(#[from] Utf8Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed wordbank json")]
    BadJson(#[from] serde_json::Error),
    #[error("the word '{0}' is not a valid wordle word")]
    NonWordleWord(String),
    #[error("the word '{0}' appears more than once")]
    DuplicateWord(String),
    #[error("score {1} of '{0}' is outside of [0, 1]")]
    ScoreOutOfRange(String, WordleFloat),
}

impl Wordbank {
    ///
    /// Builds a wordbank from already scored words, keeping their order.
    ///
    /// Words are normalized (trimmed & lowercased) first and then must be valid wordle words,
    /// unique, and carry scores within [0, 1].
    ///
    pub fn new(words: Vec<Word>) -> Result<Self, LoadDataErr> {
        let mut seen = HashSet::with_capacity(words.len());
        let mut out = Vec::with_capacity(words.len());
        for mut w in words {
            w.word = normalize_wordle_word(&w.word);
            if !is_wordle_str(&w.word) {
                return Err(LoadDataErr::NonWordleWord(w.word));
            }

            for score in [w.word_frequency, w.letter_diversity_score] {
                if !(0.0..=1.0).contains(&score) {
                    return Err(LoadDataErr::ScoreOutOfRange(w.word, score));
                }
            }

            if !seen.insert(w.word.clone()) {
                return Err(LoadDataErr::DuplicateWord(w.word));
            }

            out.push(w);
        }

        Ok(Self { words: out })
    }

    /// Parses a json wordbank (an array of Word records)
    pub fn from_json_str(raw: &str) -> Result<Self, LoadDataErr> {
        let words: Vec<Word> = serde_json::from_str(raw)?;
        let out = Self::new(words)?;
        log::debug!("got {} words from wordbank json", out.len());
        Ok(out)
    }

    /// Reads a json wordbank from disk
    pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadDataErr> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        log::debug!("read wordbank from {}", path.as_ref().display());
        Self::from_json_str(&raw)
    }

    /// Reads the wordbank embedded into the binary at compile time
    pub fn read_embedded() -> Result<Self, LoadDataErr> {
        let raw = retrieve_file_as_str(WORDBANK_FILE_NAME)?
            .ok_or_else(|| LoadDataErr::MissingWordbankFile(WORDBANK_FILE_NAME.to_string()))?;
        Self::from_json_str(&raw)
    }

    ///
    /// Used by the filter to build the next wordbank. Everything in `words` came out of an existing
    /// Wordbank so there is nothing to validate.
    ///
    pub(crate) fn from_filtered(words: Vec<Word>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.word == word)
    }
}

impl<'a> IntoIterator for &'a Wordbank {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn retrieve_file_as_str(name: &str) -> Result<Option<String>, LoadDataErr> {
    let f: rust_embed::EmbeddedFile = if let Some(data) = RawData::get(name) {
        data
    } else {
        if let Ok(out) = std::fs::read_to_string(format!("{}{}", EMBED_DATA_DIRECTORY, name)) {
            return Ok(Some(out));
        }

        return Ok(None);
    };

    Ok(Some(
        std::str::from_utf8(&f.data)
            .map_err(LoadDataErr::EncodingError)?
            .to_string(),
    ))
}
