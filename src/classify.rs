//! Shape-based classification of digit runs.
//!
//! Digit runs are tested against an ordered table of heuristics. A halting
//! rule commits a full or partial date and ends the scan; a claiming rule
//! tags the run as provisional evidence and the scan continues. Rule order
//! is load-bearing: reordering changes which reading wins on ambiguous
//! input.

use crate::consts::{MAX_DAY, MAX_MONTH, MIN_DAY, MIN_MONTH, Y2K_BASE, Y2K_MAX, Y2K_MIN};
use crate::scan::Token;

/// Year acceptance window, fixed when the interpreter is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YearBounds {
    pub(crate) low: u16,
    pub(crate) high: u16,
}

impl YearBounds {
    pub(crate) fn contains(self, year: u16) -> bool {
        (self.low..=self.high).contains(&year)
    }
}

/// Date fields committed so far, plus the numbers still waiting for a role.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Evidence {
    pub(crate) year: Option<u16>,
    pub(crate) month: Option<u8>,
    pub(crate) day: Option<u8>,
    /// Insertion order is significant: first appearance wins downstream.
    pub(crate) numbers: Vec<u8>,
}

/// Provisional role a claiming rule assigns to a digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Year,
    Day,
    Number,
}

/// What a matching rule decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// A date was committed; stop scanning the remaining runs.
    Halt,
    /// The run was claimed as provisional evidence; keep scanning.
    Claim(Role),
}

pub(crate) fn is_month_number(value: u8) -> bool {
    (MIN_MONTH..=MAX_MONTH).contains(&value)
}

pub(crate) fn is_day_number(value: u8) -> bool {
    (MIN_DAY..=MAX_DAY).contains(&value)
}

/// Parses a one- or two-digit slice as a month number.
fn as_month(digits: &str) -> Option<u8> {
    digits.parse().ok().filter(|v| is_month_number(*v))
}

/// Parses a one- or two-digit slice as a day number.
fn as_day(digits: &str) -> Option<u8> {
    digits.parse().ok().filter(|v| is_day_number(*v))
}

/// Parses a two-digit slice as a year, already mapped into the 1900s.
fn as_y2k(digits: &str) -> Option<u16> {
    digits
        .parse::<u8>()
        .ok()
        .filter(|v| (Y2K_MIN..=Y2K_MAX).contains(v))
        .map(|v| Y2K_BASE + u16::from(v))
}

/// Parses a four-digit slice as a year inside the acceptance window.
fn as_year(digits: &str, bounds: YearBounds) -> Option<u16> {
    digits.parse().ok().filter(|v| bounds.contains(*v))
}

type ShapeRule = fn(&mut Evidence, YearBounds, &str) -> Option<Verdict>;

/// The heuristics, in priority order. The first rule that matches a run
/// decides it; halting rules additionally end the whole scan.
const SHAPE_RULES: [ShapeRule; 10] = [
    full_year_first,
    full_day_first,
    year_month_block,
    y2k_month_day_block,
    day_month_y2k_block,
    y2k_month_block,
    plain_year,
    plain_y2k_year,
    unambiguous_day,
    small_number,
];

/// `YYYYMMDD`
fn full_year_first(evidence: &mut Evidence, bounds: YearBounds, x: &str) -> Option<Verdict> {
    if x.len() != 8 {
        return None;
    }
    let year = as_year(&x[..4], bounds)?;
    let month = as_month(&x[4..6])?;
    let day = as_day(&x[6..])?;
    evidence.year = Some(year);
    evidence.month = Some(month);
    evidence.day = Some(day);
    Some(Verdict::Halt)
}

/// `DDMMYYYY`
fn full_day_first(evidence: &mut Evidence, bounds: YearBounds, x: &str) -> Option<Verdict> {
    if x.len() != 8 {
        return None;
    }
    let day = as_day(&x[..2])?;
    let month = as_month(&x[2..4])?;
    let year = as_year(&x[4..], bounds)?;
    evidence.year = Some(year);
    evidence.month = Some(month);
    evidence.day = Some(day);
    Some(Verdict::Halt)
}

/// `YYYYMM`
fn year_month_block(evidence: &mut Evidence, bounds: YearBounds, x: &str) -> Option<Verdict> {
    if x.len() != 6 {
        return None;
    }
    let year = as_year(&x[..4], bounds)?;
    let month = as_month(&x[4..])?;
    evidence.year = Some(year);
    evidence.month = Some(month);
    evidence.day = None;
    Some(Verdict::Halt)
}

/// `YYMMDD` with a two-digit year
fn y2k_month_day_block(evidence: &mut Evidence, _: YearBounds, x: &str) -> Option<Verdict> {
    if x.len() != 6 {
        return None;
    }
    let year = as_y2k(&x[..2])?;
    let month = as_month(&x[2..4])?;
    let day = as_day(&x[4..])?;
    evidence.year = Some(year);
    evidence.month = Some(month);
    evidence.day = Some(day);
    Some(Verdict::Halt)
}

/// `DDMMYY` with a two-digit year
fn day_month_y2k_block(evidence: &mut Evidence, _: YearBounds, x: &str) -> Option<Verdict> {
    if x.len() != 6 {
        return None;
    }
    let day = as_day(&x[..2])?;
    let month = as_month(&x[2..4])?;
    let year = as_y2k(&x[4..])?;
    evidence.year = Some(year);
    evidence.month = Some(month);
    evidence.day = Some(day);
    Some(Verdict::Halt)
}

/// `YYMM` with a two-digit year, only while no year is known
fn y2k_month_block(evidence: &mut Evidence, _: YearBounds, x: &str) -> Option<Verdict> {
    if evidence.year.is_some() || x.len() != 4 {
        return None;
    }
    let year = as_y2k(&x[..2])?;
    let month = as_month(&x[2..])?;
    evidence.year = Some(year);
    evidence.month = Some(month);
    evidence.day = None;
    Some(Verdict::Halt)
}

/// A bare four-digit year; first one wins
fn plain_year(evidence: &mut Evidence, bounds: YearBounds, x: &str) -> Option<Verdict> {
    if evidence.year.is_some() || x.len() != 4 {
        return None;
    }
    let year = as_year(x, bounds)?;
    evidence.year = Some(year);
    Some(Verdict::Claim(Role::Year))
}

/// A bare two-digit year; first one wins
fn plain_y2k_year(evidence: &mut Evidence, _: YearBounds, x: &str) -> Option<Verdict> {
    if evidence.year.is_some() || x.len() != 2 {
        return None;
    }
    let year = as_y2k(x)?;
    evidence.year = Some(year);
    Some(Verdict::Claim(Role::Year))
}

/// A number that can only be a day: above 12, so it cannot be a month.
/// Values 1..=12 are deliberately left ambiguous for later resolution.
fn unambiguous_day(evidence: &mut Evidence, _: YearBounds, x: &str) -> Option<Verdict> {
    if evidence.day.is_some() || x.len() > 2 {
        return None;
    }
    let value: u8 = x.parse().ok()?;
    if value > MAX_MONTH && is_day_number(value) {
        evidence.day = Some(value);
        return Some(Verdict::Claim(Role::Day));
    }
    None
}

/// Any other small nonzero number: remembered for disambiguation.
fn small_number(evidence: &mut Evidence, _: YearBounds, x: &str) -> Option<Verdict> {
    if x.len() > 2 {
        return None;
    }
    let value: u8 = x.parse().ok()?;
    if value == 0 {
        return None;
    }
    evidence.numbers.push(value);
    Some(Verdict::Claim(Role::Number))
}

/// Walks the token sequence, upgrading digit runs per the rule table.
///
/// Returns the (possibly retagged) sequence and the collected evidence.
/// After a halting rule fires, remaining runs are left untouched.
pub(crate) fn classify(tokens: Vec<Token>, bounds: YearBounds) -> (Vec<Token>, Evidence) {
    let mut evidence = Evidence::default();
    let mut out = Vec::with_capacity(tokens.len());
    let mut halted = false;

    for token in tokens {
        match token {
            Token::Digits(text) if !halted => {
                let verdict = SHAPE_RULES
                    .iter()
                    .find_map(|rule| rule(&mut evidence, bounds, &text));
                match verdict {
                    Some(Verdict::Halt) => {
                        halted = true;
                        out.push(Token::Digits(text));
                    }
                    Some(Verdict::Claim(Role::Year)) => out.push(Token::Year(text)),
                    Some(Verdict::Claim(Role::Day)) => out.push(Token::Day(text)),
                    Some(Verdict::Claim(Role::Number)) => out.push(Token::Number(text)),
                    None => out.push(Token::Digits(text)),
                }
            }
            other => out.push(other),
        }
    }

    (out, evidence)
}
