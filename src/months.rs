//! Month names in Danish and English.

use crate::scan::Token;

/// Recognized month names and abbreviations, in priority order.
///
/// Within a month the full names come before the abbreviations, so
/// "january" is reported as one match rather than "jan" plus a dangling
/// "uary". Shared spellings (apr, maj/may, jun, jul, aug, sep, nov, dec)
/// cover both languages with one entry.
const CATALOGUE: &[(&str, u8)] = &[
    ("january", 1),
    ("januar", 1),
    ("jan", 1),
    ("february", 2),
    ("februar", 2),
    ("feb", 2),
    ("march", 3),
    ("marts", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("maj", 5),
    ("may", 5),
    ("june", 6),
    ("juni", 6),
    ("jun", 6),
    ("july", 7),
    ("juli", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("oktober", 10),
    ("okt", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Where a catalogue entry matched inside a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hit {
    start: usize,
    end: usize,
    month: u8,
}

/// Finds the best catalogue match in one token: the match that starts
/// earliest wins, ties go to the entry listed first.
fn earliest_hit(text: &str) -> Option<Hit> {
    let folded = text.to_ascii_lowercase();
    let mut best: Option<Hit> = None;
    for &(name, month) in CATALOGUE {
        let Some(start) = folded.find(name) else {
            continue;
        };
        if best.is_none_or(|b| start < b.start) {
            best = Some(Hit { start, end: start + name.len(), month });
        }
    }
    best
}

/// Scans the token sequence for the first month name and excises it.
///
/// The first token containing any catalogue entry is split: unmatched
/// prefix and suffix are kept as separate text tokens and a month tag
/// replaces exactly the matched span. Returns the rebuilt sequence and the
/// month found, if any.
pub(crate) fn tag_first_month(tokens: Vec<Token>) -> (Vec<Token>, Option<u8>) {
    let found = tokens.iter().enumerate().find_map(|(index, token)| {
        let Token::Text(text) = token else {
            return None;
        };
        earliest_hit(text).map(|hit| (index, hit))
    });
    let Some((index, hit)) = found else {
        return (tokens, None);
    };

    let mut rebuilt = Vec::with_capacity(tokens.len() + 2);
    for (i, token) in tokens.into_iter().enumerate() {
        match token {
            Token::Text(text) if i == index => {
                if hit.start > 0 {
                    rebuilt.push(Token::Text(text[..hit.start].to_owned()));
                }
                rebuilt.push(Token::Month(hit.month));
                if hit.end < text.len() {
                    rebuilt.push(Token::Text(text[hit.end..].to_owned()));
                }
            }
            other => rebuilt.push(other),
        }
    }
    (rebuilt, Some(hit.month))
}
