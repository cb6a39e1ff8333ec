//! Line-oriented front end for the date interpreter.
//!
//! With a terminal on stdin this prompts for one fragment per line and
//! echoes the interpretation; with piped input it prints one bare result
//! per input line. Lines that yield no date print the `None` sentinel.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use dategrok::Interpreter;

/// Printed when no year could be established for a line.
const NO_RESULT: &str = "None";

fn render(engine: &Interpreter, line: &str) -> String {
    match engine.interpret(line) {
        Ok(Some(date)) => date.to_string(),
        // Blank lines grok to nothing, same as lines without a year.
        Ok(None) | Err(_) => NO_RESULT.to_owned(),
    }
}

fn run_interactive(engine: &Interpreter) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "--> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        writeln!(stdout, "\t{line} => {}", render(engine, line))?;
    }
    Ok(())
}

fn run_batch(engine: &Interpreter) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        println!("{}", render(engine, &line?));
    }
    Ok(())
}

fn main() -> Result<()> {
    let engine = Interpreter::new();
    if io::stdin().is_terminal() {
        run_interactive(&engine)
    } else {
        run_batch(&engine)
    }
}
