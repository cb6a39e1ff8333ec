//! Turning collected evidence into the most specific date it supports.

use crate::PartialDate;
use crate::classify::{Evidence, is_day_number, is_month_number};
use crate::consts::ORDERING_SEPARATORS;
use crate::scan::Token;

/// Builds a date from plain fields; bounds were already checked upstream,
/// so a construction failure simply yields no result.
fn emit(year: u16, month: Option<u8>, day: Option<u8>) -> Option<PartialDate> {
    PartialDate::from_parts(year, month, day).ok()
}

/// True when the reconstructed input uses exactly two of one separator,
/// the shape of a fully separated numeric date.
fn has_two_separators(tokens: &[Token]) -> bool {
    let text: String = tokens.iter().map(Token::as_text).collect();
    ORDERING_SEPARATORS
        .iter()
        .any(|&sep| text.matches(sep).count() == 2)
}

/// Resolves the evidence into a date, degrading precision where the
/// leftover numbers stay ambiguous. Returns `None` when no year was found.
///
/// The decision list runs top to bottom; the first applicable step wins:
/// committed month and day, then a single leftover number filling the open
/// slot, then the two-number separator heuristic, then month-only, then
/// year-only.
pub(crate) fn resolve(tokens: &[Token], evidence: &Evidence) -> Option<PartialDate> {
    let year = evidence.year?;
    let numbers = &evidence.numbers;

    if let (Some(month), Some(day)) = (evidence.month, evidence.day) {
        return emit(year, Some(month), Some(day));
    }

    if let Some(month) = evidence.month {
        if numbers.is_empty() {
            return emit(year, Some(month), None);
        }
        if let [day] = numbers[..] {
            if is_day_number(day) {
                return emit(year, Some(month), Some(day));
            }
        }
    }

    if let Some(day) = evidence.day {
        if let [month] = numbers[..] {
            if is_month_number(month) {
                return emit(year, Some(month), Some(day));
            }
        }
    }

    if evidence.month.is_none() && evidence.day.is_none() {
        if let [month] = numbers[..] {
            if is_month_number(month) {
                return emit(year, Some(month), None);
            }
        }
    }

    // Two leftover numbers: decide between the day-month-year and
    // year-month-day readings from where the year sits in the input, but
    // only when the separators look like a fully separated date. The
    // separator count is over the whole input, a deliberately coarse test.
    if let [first, second] = numbers[..] {
        if has_two_separators(tokens) {
            let last_is_year = tokens.last().is_some_and(Token::is_year_tag);
            if last_is_year && is_day_number(first) && is_month_number(second) {
                return emit(year, Some(second), Some(first));
            }
            let first_is_year = tokens.first().is_some_and(Token::is_year_tag);
            if first_is_year && is_day_number(second) && is_month_number(first) {
                return emit(year, Some(first), Some(second));
            }
        }
    }

    if let Some(month) = evidence.month {
        return emit(year, Some(month), None);
    }

    emit(year, None, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{YearBounds, classify};
    use crate::months::tag_first_month;
    use crate::scan::tokenize;

    const BOUNDS: YearBounds = YearBounds { low: 1900, high: 2025 };

    fn grok(input: &str) -> Option<String> {
        let (tokens, mut evidence) = classify(tokenize(input).unwrap(), BOUNDS);
        let mut tokens = tokens;
        if evidence.month.is_none() {
            let (rebuilt, month) = tag_first_month(tokens);
            tokens = rebuilt;
            evidence.month = month;
        }
        resolve(&tokens, &evidence).map(|date| date.to_string())
    }

    #[test]
    fn test_no_year_means_no_result() {
        assert_eq!(grok("hello world"), None);
        assert_eq!(grok("31 12"), None);
    }

    #[test]
    fn test_committed_month_and_day() {
        assert_eq!(grok("20230415").as_deref(), Some("2023-04-15"));
    }

    #[test]
    fn test_month_alone() {
        assert_eq!(grok("july 1983").as_deref(), Some("1983-07"));
    }

    #[test]
    fn test_single_number_fills_day_slot() {
        assert_eq!(grok("aug 1923 12").as_deref(), Some("1923-08-12"));
    }

    #[test]
    fn test_single_number_fills_month_slot() {
        assert_eq!(grok("1983 31 12").as_deref(), Some("1983-12-31"));
    }

    #[test]
    fn test_single_number_as_month_without_day() {
        assert_eq!(grok("1983 7").as_deref(), Some("1983-07"));
    }

    #[test]
    fn test_single_number_too_big_for_day_degrades() {
        // 99 cannot be a day, so the month stands alone.
        assert_eq!(grok("jan 1983 99").as_deref(), Some("1983-01"));
    }

    #[test]
    fn test_day_month_year_reading_with_dots() {
        assert_eq!(grok("12.11.1983").as_deref(), Some("1983-11-12"));
    }

    #[test]
    fn test_day_month_year_reading_with_dashes() {
        assert_eq!(grok("12-11-1983").as_deref(), Some("1983-11-12"));
    }

    #[test]
    fn test_year_month_day_reading() {
        assert_eq!(grok("1983.5.7").as_deref(), Some("1983-05-07"));
        assert_eq!(grok("1983-05-07").as_deref(), Some("1983-05-07"));
    }

    #[test]
    fn test_pair_without_separators_stays_ambiguous() {
        assert_eq!(grok("1983 5 7").as_deref(), Some("1983"));
    }

    #[test]
    fn test_pair_with_wrong_separator_count_stays_ambiguous() {
        assert_eq!(grok("5.7 1983").as_deref(), Some("1983"));
        assert_eq!(grok("...5 7 1983...").as_deref(), Some("1983"));
    }

    #[test]
    fn test_pair_needs_year_at_an_edge() {
        // Year in the middle fits neither reading.
        assert_eq!(grok("5.1983.7").as_deref(), Some("1983"));
    }

    #[test]
    fn test_trailing_text_defeats_edge_check() {
        // The year is no longer the last token, so the day-month-year
        // reading is not taken. Coarse, but intended.
        assert_eq!(grok("12.11.1983!").as_deref(), Some("1983"));
    }

    #[test]
    fn test_unresolved_ambiguity_degrades_to_year() {
        assert_eq!(grok("1983 15 20").as_deref(), Some("1983"));
    }

    #[test]
    fn test_year_only() {
        assert_eq!(grok("1983").as_deref(), Some("1983"));
    }
}
