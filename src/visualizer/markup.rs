//! Plain-bit helpers: markup stripping and bit-difference enumeration

use crate::error::{GrayError, Result};
use std::borrow::Cow;

const ESC: char = '\u{1b}';

/// Remove ANSI SGR sequences (`ESC [ digits/';' m`) from `code`.
///
/// Stripping an already-plain string returns it unchanged and unallocated.
pub fn strip_markup(code: &str) -> Cow<'_, str> {
    if !code.contains(ESC) {
        return Cow::Borrowed(code);
    }

    let mut plain = String::with_capacity(code.len());
    let mut chars = code.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c == ESC {
            if let Some(len) = sgr_len(&code[start..]) {
                // skip the rest of the sequence; ESC itself is already consumed
                for _ in 1..len {
                    chars.next();
                }
                continue;
            }
        }
        plain.push(c);
    }

    Cow::Owned(plain)
}

/// Length in chars of the SGR sequence at the start of `s`, if there is one
fn sgr_len(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    if chars.next() != Some(ESC) || chars.next() != Some('[') {
        return None;
    }
    let mut len = 2;
    for c in chars {
        len += 1;
        match c {
            'm' => return Some(len),
            '0'..='9' | ';' => {}
            _ => return None,
        }
    }
    None
}

/// Strip markup from every code in `codes`
pub fn plain_codes<S: AsRef<str>>(codes: &[S]) -> Vec<String> {
    codes
        .iter()
        .map(|code| strip_markup(code.as_ref()).into_owned())
        .collect()
}

/// Character positions at which `a` and `b` differ, in ascending order.
///
/// Both codes must have the same number of characters; `index` identifies `b`
/// in the error.
pub fn differing_positions(a: &str, b: &str, index: usize) -> Result<Vec<usize>> {
    let expected = a.chars().count();
    let got = b.chars().count();
    if expected != got {
        return Err(GrayError::LengthMismatch {
            index,
            expected,
            got,
        });
    }

    Ok(a.chars()
        .zip(b.chars())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(pos, _)| pos)
        .collect())
}
