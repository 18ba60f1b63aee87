//! Natural string comparison.
//!
//! Case-insensitive ordering with digit runs compared numerically, so
//! `page2` sorts before `page10`. Used for sibling tie-breaks in the page
//! tree and for version ordering.

use std::cmp::Ordering;

/// Compare two strings naturally: case-insensitive, numeric-aware.
///
/// Digit runs are compared as unbounded integers; equal numeric values fall
/// back to run length (fewer leading zeros first), keeping the order total
/// over distinct inputs.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digits(&mut ca);
                let run_b = take_digits(&mut cb);
                match cmp_digit_runs(&run_a, &run_b) {
                    Ordering::Equal => {}
                    ord => return ord,
                }
            }
            (Some(x), Some(y)) => {
                let fx = fold(x);
                let fy = fold(y);
                if fx != fy {
                    return fx.cmp(&fy);
                }
                ca.next();
                cb.next();
            }
        }
    }
}

/// Single-character case fold.
fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Consume a run of consecutive ASCII digits.
fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&ch) = chars.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        run.push(ch);
        chars.next();
    }
    run
}

/// Compare two digit runs numerically, then by run length.
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let sig_a = a.trim_start_matches('0');
    let sig_b = b.trim_start_matches('0');

    sig_a
        .len()
        .cmp(&sig_b.len())
        .then_with(|| sig_a.cmp(sig_b))
        .then_with(|| a.len().cmp(&b.len()))
}
