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

use std::{io::{self, Write}, fs, time::{Duration, Instant}};
use clap::Parser;
use wordlebot::wordle::{*, generate::*};
use wordlebot::DEFAULT_LOG_FILTER;

/// Scores a dictionary and writes the wordbank json that the solver embeds
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Dictionary, one word per line
    #[clap(long, default_value_t = format!("{}{}", DATA_DIRECTORY, DICTIONARY_FILE_NAME))]
    dictionary: String,

    /// Word frequencies, one `word count` pair per line
    #[clap(long, default_value_t = format!("{}{}", DATA_DIRECTORY, FREQUENCY_FILE_NAME))]
    frequencies: String,

    /// Where to write the wordbank
    #[clap(
        short,
        long,
        default_value_t = format!("{}{}", EMBED_DATA_DIRECTORY, WORDBANK_FILE_NAME)
    )]
    out: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();
    let args = Args::parse();

    let (dur, out) = timed(|| write_wordbank_file(&args));
    match out {
        Ok(n) => eprintln!("done! wrote {} words to {} in {:.2}s", n, args.out, dur.as_secs_f64()),
        Err(err) => {
            log::error!("failed to generate wordbank: {}", err);
            std::process::exit(1);
        }
    }
}

fn write_wordbank_file(args: &Args) -> Result<usize, LoadDataErr> {
    let dictionary = fs::read_to_string(&args.dictionary)?;
    let frequencies = read_frequencies(io::BufReader::new(fs::File::open(&args.frequencies)?))?;
    log::debug!("read {} frequencies from {}", frequencies.len(), args.frequencies);

    let words = generate_wordbank(dictionary.lines(), |w| frequencies.get(w).copied());

    let f = fs::File::options()
        .truncate(true)
        .create(true)
        .write(true)
        .open(&args.out)?;
    let mut out = io::BufWriter::new(f);
    write_wordbank(&words, &mut out)?;
    out.flush()?;

    Ok(words.len())
}

fn timed<R, F>(f: F) -> (Duration, R)
    where F: FnOnce() -> R
{
    let start_at = Instant::now();
    let out = f();
    let dur = start_at.elapsed();

    (dur, out)
}
