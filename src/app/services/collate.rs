use std::cmp::Ordering;

/// A comparable unit of a collation key: a run of decimal digits compared
/// numerically, or a run of letters compared with case folded.
#[derive(Debug, PartialEq, Eq)]
enum Segment {
    Number(String),
    Text(String),
}

/// Compare two strings the way a filename-aware collator would: embedded
/// digit runs count as numbers (`file2` before `file10`), case is ignored,
/// and punctuation, symbols and whitespace never influence the order
/// (`File-1` ties with `file1`). Deterministic; does not consult the
/// process locale.
pub fn compare(a: &str, b: &str) -> Ordering {
    compare_keys(&key(a), &key(b))
}

fn key(s: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    for ch in s.chars() {
        if ch.is_ascii_digit() {
            match segments.last_mut() {
                Some(Segment::Number(digits)) => digits.push(ch),
                _ => segments.push(Segment::Number(ch.to_string())),
            }
        } else if ch.is_alphanumeric() {
            match segments.last_mut() {
                Some(Segment::Text(text)) => text.extend(ch.to_lowercase()),
                _ => {
                    let mut text = String::new();
                    text.extend(ch.to_lowercase());
                    segments.push(Segment::Text(text));
                }
            }
        }
        // Everything else is skipped and never reaches the key, so segments
        // continue across punctuation: "ab-2" keys the same as "ab2".
    }
    segments
}

fn compare_keys(a: &[Segment], b: &[Segment]) -> Ordering {
    for (left, right) in a.iter().zip(b) {
        let ord = match (left, right) {
            (Segment::Number(x), Segment::Number(y)) => compare_numeric(x, y),
            (Segment::Text(x), Segment::Text(y)) => x.cmp(y),
            // Digits sort before letters at the same key position
            (Segment::Number(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Number(_)) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    // A strict prefix sorts first
    a.len().cmp(&b.len())
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
