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

//! Builds the wordbank that gets embedded into the binary. This only runs from gen_wordbank, the
//! solver itself never calls into here.

use std::collections::{BTreeSet, HashMap};
use std::io::{self, BufRead, Write};
use super::{prelude::*, data::*};

///
/// Scores every usable word in `dictionary`.
///
/// * Only words that are wordle words (after normalization) are considered, and duplicates are
///   dropped.
/// * Letter frequencies are counted over all of those words.
/// * Words that `frequency_of` knows nothing about (None, or not > 0) are left out.
/// * word_frequency is the raw frequency. letter_diversity_score is the sum of the frequencies of
///   the word's *distinct* letters divided by WORD_SIZE, which pulls words with repeated letters
///   down.
/// * Both columns are then min-max scaled into [0, 1] across the words that are left.
///
/// The output is sorted alphabetically.
///
pub fn generate_wordbank<'a, D, F>(dictionary: D, frequency_of: F) -> Vec<Word>
where
    D: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> Option<WordleFloat>,
{
    let candidates: BTreeSet<String> = dictionary
        .into_iter()
        .map(normalize_wordle_word)
        .filter(|w| is_wordle_str(w))
        .collect();

    let letter_freq = letter_frequencies(candidates.iter().map(|w| w.as_str()));

    let mut words = Vec::with_capacity(candidates.len());
    let mut raw_freqs = Vec::with_capacity(candidates.len());
    let mut raw_diversity = Vec::with_capacity(candidates.len());
    for word in candidates {
        let freq = match frequency_of(&word) {
            Some(f) if f > 0.0 => f,
            _ => continue,
        };

        raw_diversity.push(diversity(&word, &letter_freq));
        raw_freqs.push(freq);
        words.push(word);
    }

    let freqs = minmax_scale(&raw_freqs);
    let diversities = minmax_scale(&raw_diversity);
    log::debug!("scored {} words", words.len());

    words
        .into_iter()
        .zip(freqs.into_iter().zip(diversities))
        .map(|(word, (word_frequency, letter_diversity_score))| Word {
            word,
            word_frequency,
            letter_diversity_score,
        })
        .collect()
}

/// The share of all letters (across `words`) that each letter of the alphabet makes up
pub fn letter_frequencies<'a>(
    words: impl Iterator<Item = &'a str>,
) -> [WordleFloat; ALPHABET_SIZE] {
    let mut counts = [0usize; ALPHABET_SIZE];
    for word in words {
        for (total, count) in counts.iter_mut().zip(count_letters(word)) {
            *total += count;
        }
    }

    let total: usize = counts.iter().sum();
    let mut out = [0.0; ALPHABET_SIZE];
    if total > 0 {
        for (freq, count) in out.iter_mut().zip(counts) {
            *freq = count as WordleFloat / total as WordleFloat;
        }
    }

    out
}

/// Sum of the frequencies of the distinct letters in `word`, divided by WORD_SIZE
pub fn diversity(word: &str, letter_freq: &[WordleFloat; ALPHABET_SIZE]) -> WordleFloat {
    let total: WordleFloat = count_letters(word)
        .iter()
        .zip(letter_freq)
        .filter(|(count, _)| **count > 0)
        .map(|(_, freq)| freq)
        .sum();

    total / WORD_SIZE as WordleFloat
}

///
/// Maps `values` linearly onto [0, 1], the smallest becoming 0.0 and the largest 1.0. If every
/// value is the same they all become 0.0.
///
pub fn minmax_scale(values: &[WordleFloat]) -> Vec<WordleFloat> {
    let min = values.iter().copied().fold(WordleFloat::INFINITY, WordleFloat::min);
    let max = values.iter().copied().fold(WordleFloat::NEG_INFINITY, WordleFloat::max);
    let range = if max > min { max - min } else { 1.0 };

    values.iter().map(|v| ((v - min) / range).clamp(0.0, 1.0)).collect()
}

///
/// Writes the wordbank as pretty printed json. The keys of each record are sorted, which keeps the
/// file stable (and diffable) when it's regenerated.
///
pub fn write_wordbank<W: Write>(words: &[Word], out: W) -> Result<(), LoadDataErr> {
    // serde_json::Value keeps object keys in sorted order
    let value = serde_json::to_value(words)?;
    serde_json::to_writer_pretty(out, &value)?;
    Ok(())
}

///
/// Reads a frequency listing: one `word count` pair per line, split by whitespace. Lines which
/// can't be read are skipped with a warning. When a word appears more than once, the counts add.
///
pub fn read_frequencies<R: BufRead>(input: R) -> io::Result<HashMap<String, WordleFloat>> {
    let mut out = HashMap::new();
    for line in input.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let (word, count) = match (parts.next(), parts.next()) {
            (Some(word), Some(count)) => (word, count),
            (None, _) => continue,
            _ => {
                log::warn!("skipping frequency line without a count '{}'", line);
                continue;
            }
        };

        match count.parse::<WordleFloat>() {
            Ok(count) => *out.entry(normalize_wordle_word(word)).or_insert(0.0) += count,
            Err(err) => log::warn!("skipping frequency line '{}': {}", line, err),
        }
    }

    Ok(out)
}
