//! Splitting raw input into alternating digit / non-digit runs.

use crate::GrokError;

/// One run of the input, plus the role it has been assigned so far.
///
/// The tokenizer only produces `Digits` and `Text`; the classifier upgrades
/// digit runs to `Year`/`Day`/`Number` tags, and the month matcher splices
/// in `Month` tags. Tagged variants keep the original run text so the
/// separator-counting stage can still see the full input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Unclassified run of ASCII decimal digits
    Digits(String),
    /// Run of non-digit characters
    Text(String),
    /// Digit run claimed as year evidence
    Year(String),
    /// Digit run claimed as day evidence
    Day(String),
    /// Small ambiguous number, deferred for disambiguation
    Number(String),
    /// Excised month name
    Month(u8),
}

impl Token {
    /// The run's contribution to the reconstructed input text.
    ///
    /// An excised month name contributes nothing; month names never contain
    /// separator characters, so the separator counts are unaffected.
    pub(crate) fn as_text(&self) -> &str {
        match self {
            Self::Digits(s) | Self::Text(s) | Self::Year(s) | Self::Day(s) | Self::Number(s) => s,
            Self::Month(_) => "",
        }
    }

    /// True for runs still carrying their year tag after classification.
    pub(crate) const fn is_year_tag(&self) -> bool {
        matches!(self, Self::Year(_))
    }
}

/// Splits `input` into maximal runs of digit and non-digit characters.
///
/// Adjacent runs never share a classification and concatenating all runs
/// reproduces the input exactly. Only ASCII decimal digits count as digits;
/// everything else, including non-ASCII numerals, lands in text runs.
///
/// # Errors
/// Returns `GrokError::EmptyInput` for the empty string, which has no first
/// character to seed the classification.
pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>, GrokError> {
    let mut chars = input.chars();
    let first = chars.next().ok_or(GrokError::EmptyInput)?;

    let mut tokens = Vec::new();
    let mut in_digits = first.is_ascii_digit();
    let mut run = String::from(first);

    for c in chars {
        if c.is_ascii_digit() == in_digits {
            run.push(c);
        } else {
            tokens.push(finish(run, in_digits));
            run = String::from(c);
            in_digits = !in_digits;
        }
    }
    tokens.push(finish(run, in_digits));

    Ok(tokens)
}

fn finish(run: String, in_digits: bool) -> Token {
    if in_digits { Token::Digits(run) } else { Token::Text(run) }
}
