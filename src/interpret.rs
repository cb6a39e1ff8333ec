//! The interpretation pipeline: scan, classify, match month names, resolve.

use std::sync::OnceLock;

use chrono::{Datelike, Local};

use crate::classify::{YearBounds, classify};
use crate::consts::{MAX_YEAR, MIN_YEAR};
use crate::months::tag_first_month;
use crate::resolve::resolve;
use crate::scan::tokenize;
use crate::{GrokError, PartialDate};

/// Heuristic date interpreter.
///
/// Holds the year acceptance window, fixed at construction. The rest of the
/// computation is a pure function of the input string, so one interpreter
/// can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use dategrok::Interpreter;
///
/// let engine = Interpreter::new();
/// let date = engine.interpret("12. august 1969")?.ok_or("no date")?;
/// assert_eq!(date.to_string(), "1969-08-12");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Interpreter {
    bounds: YearBounds,
}

impl Interpreter {
    /// Creates an interpreter accepting years up to the current calendar
    /// year, read from the system clock at construction.
    pub fn new() -> Self {
        Self::with_upper_year(current_year())
    }

    /// Creates an interpreter with a fixed upper year bound.
    ///
    /// Tests pin the bound for reproducibility; production callers normally
    /// want [`Interpreter::new`].
    pub const fn with_upper_year(upper: u16) -> Self {
        Self {
            bounds: YearBounds { low: MIN_YEAR, high: upper },
        }
    }

    /// The newest year this interpreter accepts as date evidence.
    pub const fn upper_year(&self) -> u16 {
        self.bounds.high
    }

    /// Interprets `input` as a date, returning as much of year-month-day as
    /// the evidence supports.
    ///
    /// `Ok(None)` means no year could be established; missing month or day
    /// degrade the precision of the result instead of failing.
    ///
    /// # Errors
    /// Returns `GrokError::EmptyInput` for the empty string.
    pub fn interpret(&self, input: &str) -> Result<Option<PartialDate>, GrokError> {
        let tokens = tokenize(input)?;
        let (mut tokens, mut evidence) = classify(tokens, self.bounds);

        // Name matching only runs while the month slot is open; a numeric
        // match from the classifier takes precedence.
        if evidence.month.is_none() {
            let (rebuilt, month) = tag_first_month(tokens);
            tokens = rebuilt;
            evidence.month = month;
        }

        Ok(resolve(&tokens, &evidence))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Interprets `input` with a process-wide interpreter whose year window is
/// captured on first use.
///
/// # Errors
/// Returns `GrokError::EmptyInput` for the empty string.
pub fn interpret(input: &str) -> Result<Option<PartialDate>, GrokError> {
    static ENGINE: OnceLock<Interpreter> = OnceLock::new();
    ENGINE.get_or_init(Interpreter::new).interpret(input)
}

fn current_year() -> u16 {
    u16::try_from(Local::now().year()).map_or(MAX_YEAR, |year| year.min(MAX_YEAR))
}
