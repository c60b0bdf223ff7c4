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

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use clap::Parser;
use wordlebot::wordle::*;
use wordlebot::DEFAULT_LOG_FILTER;

/// Suggests wordle guesses and narrows down the answer from the colors you get back
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Read the wordbank from this json file instead of the built in one
    #[clap(short, long)]
    wordbank: Option<PathBuf>,

    /// Always guess the top suggestion instead of asking for a guess
    #[clap(short, long)]
    auto: bool,

    /// Play against a known answer, the tile colors are worked out instead of asked for
    #[clap(long)]
    answer: Option<String>,

    /// How many suggestions to show after each guess
    #[clap(short, long, default_value_t = N_RECOMMENDATIONS)]
    top: usize,

    /// Log debug output (RUST_LOG takes precedence)
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { DEFAULT_LOG_FILTER };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), LoadDataErr> {
    let bank = match &args.wordbank {
        Some(path) => Wordbank::read_path(path)?,
        None => DATA
            .as_ref()
            .map_err(|err| LoadDataErr::BadEmbeddedWordbank(err.to_string()))?
            .clone(),
    };

    let answer = match args.answer.as_deref().map(normalize_wordle_word) {
        Some(answer) if !is_wordle_str(&answer) => return Err(LoadDataErr::NonWordleWord(answer)),
        other => other,
    };

    log::info!("starting session with {} words", bank.len());
    let mut session = Session::new(bank);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    if !print_suggestions(&session, args.top) {
        return Ok(());
    }

    while session.can_guess() {
        let word = if args.auto {
            let word = session.best_suggestion().map(str::to_string).unwrap_or_default();
            println!("autosuggest: {}", word);
            word
        } else {
            match read_guess(&mut input)? {
                Some(word) => word,
                None => return Ok(()),
            }
        };

        let colorings = match &answer {
            Some(answer) => {
                let colorings = Colorings::with_guess_answer(&word, answer);
                println!("tile colors: {} ({})", colorings, colorings.to_code_string());
                colorings
            }
            None => match read_colorings(&mut input)? {
                Some(colorings) => colorings,
                None => return Ok(()),
            },
        };

        match session.make_guess(&word, colorings) {
            Ok(outcome) => println!(
                "{} words eliminated, {} remaining",
                outcome.eliminated_total, outcome.remaining
            ),
            Err(SolverErr::NoCandidates) => {
                println!("No matching words found");
                return Ok(());
            }
            Err(err) => {
                println!("{}", err);
                continue;
            }
        }

        if session.is_solved() {
            println!("solved with {} guesses to spare!", session.guesses_remaining());
            return Ok(());
        }

        if !print_suggestions(&session, args.top) {
            return Ok(());
        }
        println!("{} guesses remaining\n", session.guesses_remaining());
    }

    if session.guesses_remaining() == 0 {
        println!("out of guesses");
    }

    Ok(())
}

/// Prints the top suggestions, returns false when there aren't any
fn print_suggestions(session: &Session, top: usize) -> bool {
    match session.suggestions() {
        Ok(ranked) => {
            let shown: Vec<String> = ranked
                .iter()
                .take(top)
                .map(|c| format!("{} ({:.3})", c.word, c.weight))
                .collect();
            println!("suggestions: {}", shown.join(", "));
            true
        }
        Err(err) => {
            println!("{}", err);
            false
        }
    }
}

/// Asks for a guess until a valid one is typed. None when the player quits (blank line or EOF).
fn read_guess<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    loop {
        let line = match prompt(input, "enter guess (blank to quit): ")? {
            Some(line) => line,
            None => return Ok(None),
        };

        if is_wordle_str(&line) {
            return Ok(Some(line));
        }
        println!("guess must be {} letters", WORD_SIZE);
    }
}

/// Asks for tile colors until a valid code is typed. None when the player quits.
fn read_colorings<R: BufRead>(input: &mut R) -> io::Result<Option<Colorings>> {
    loop {
        let line = match prompt(input, "enter tile colors (g)reen, (y)ellow, (b)lack: ")? {
            Some(line) => line,
            None => return Ok(None),
        };

        match line.parse::<Colorings>() {
            Ok(colorings) => return Ok(Some(colorings)),
            Err(err) => println!("{}", err),
        }
    }
}

fn prompt<R: BufRead>(input: &mut R, message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = normalize_wordle_word(&line);
    Ok(if line.is_empty() { None } else { Some(line) })
}
