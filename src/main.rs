use std::io::{self, BufRead};

use clap::Parser;
use isola::{Answer, answer, interpreter::evaluator::render_results};
use log::debug;
use rustyline::{DefaultEditor, error::ReadlineError};

/// isola is an easy to use calculator that evaluates arithmetic expressions
/// and isolates the unknown in single-variable equations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints every isolation stage before the answer.
    #[arg(short, long)]
    steps: bool,

    /// The expression or equation to process; omit it for a prompt.
    equation: Option<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();
    let args = Args::parse();

    if let Some(equation) = args.equation.as_deref() {
        if !process_line(equation, args.steps) {
            std::process::exit(1);
        }
        return;
    }

    if atty::is(atty::Stream::Stdin) {
        run_prompt(args.steps);
    } else if !run_piped(args.steps) {
        std::process::exit(1);
    }
}

/// Reads and processes lines interactively until Ctrl-D.
fn run_prompt(steps: bool) {
    let mut editor = DefaultEditor::new().unwrap_or_else(|error| {
                         report(&format!("Failed to initialize the line editor: {error}"));
                         std::process::exit(1);
                     });

    println!("isola v{}", env!("CARGO_PKG_VERSION"));
    println!("Type an expression or an equation. Ctrl-D quits.");

    loop {
        match editor.readline("isola> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                process_line(line, steps);
            },
            // Ctrl-C discards the line and prompts again.
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                report(&format!("Failed to read input: {error}"));
                break;
            },
        }
    }
}

/// Processes every line arriving on standard input.
///
/// A failing line is reported and does not stop the ones after it. Returns
/// whether every line succeeded.
fn run_piped(steps: bool) -> bool {
    let mut all_succeeded = true;
    for line in io::stdin().lock().lines() {
        let line = line.unwrap_or_else(|error| {
                       report(&format!("Failed to read standard input: {error}"));
                       std::process::exit(1);
                   });
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !process_line(line, steps) {
            all_succeeded = false;
        }
    }
    all_succeeded
}

/// Processes one input line and prints its outcome.
///
/// Returns whether the line succeeded.
fn process_line(line: &str, steps: bool) -> bool {
    match answer(line) {
        Ok(answer) => {
            debug!("{} value(s), {} step(s) for '{line}'",
                   answer.values.len(),
                   answer.steps.len());
            print_answer(&answer, steps);
            true
        },
        Err(error) => {
            debug!("failed to process '{line}'");
            report(&error.to_string());
            false
        },
    }
}

/// Prints an answer, preceded by the isolation stages when requested.
fn print_answer(answer: &Answer, steps: bool) {
    if steps {
        for step in &answer.steps {
            println!("{step}");
        }
    }
    let rendered = render_results(&answer.values);
    match &answer.variable {
        Some(name) => println!("{name} = {rendered}"),
        None => println!("{rendered}"),
    }
}

/// Reports an error on standard error, in red when that is a terminal.
fn report(message: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("\x1b[31m{message}\x1b[0m");
    } else {
        eprintln!("{message}");
    }
}
