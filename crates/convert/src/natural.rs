//! Natural order, case-insensitive string comparison.
//!
//! Runs of digits compare by numeric value (`item2` < `item10`); a run
//! starting with `0` compares digit by digit from the left, as a
//! fraction would. Other bytes compare after ASCII upper-casing. Leading
//! whitespace before each comparison step is skipped.

use std::cmp::Ordering;

pub fn natural_case_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() || b.is_empty() {
        return a.len().cmp(&b.len());
    }

    let mut i = skip_leading_zeros(a);
    let mut j = skip_leading_zeros(b);

    loop {
        while a.get(i).is_some_and(u8::is_ascii_whitespace) {
            i += 1;
        }
        while b.get(j).is_some_and(u8::is_ascii_whitespace) {
            j += 1;
        }

        let mut ca = byte_at(a, i);
        let mut cb = byte_at(b, j);

        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let ordering = if ca == b'0' || cb == b'0' {
                compare_left(a, &mut i, b, &mut j)
            } else {
                compare_right(a, &mut i, b, &mut j)
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
            if let Some(ordering) = exhausted(a, i, b, j) {
                return ordering;
            }
            ca = a[i];
            cb = b[j];
        }

        let ordering = ca.to_ascii_uppercase().cmp(&cb.to_ascii_uppercase());
        if ordering != Ordering::Equal {
            return ordering;
        }

        i += 1;
        j += 1;
        if let Some(ordering) = exhausted(a, i, b, j) {
            return ordering;
        }
    }
}

fn byte_at(s: &[u8], index: usize) -> u8 {
    s.get(index).copied().unwrap_or(0)
}

fn is_digit_at(s: &[u8], index: usize) -> bool {
    s.get(index).is_some_and(u8::is_ascii_digit)
}

fn skip_leading_zeros(s: &[u8]) -> usize {
    let mut index = 0;
    while s[index] == b'0' && is_digit_at(s, index + 1) {
        index += 1;
    }
    index
}

/// Ordering once either side has been fully consumed.
fn exhausted(a: &[u8], i: usize, b: &[u8], j: usize) -> Option<Ordering> {
    match (i >= a.len(), j >= b.len()) {
        (true, true) => Some(Ordering::Equal),
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        (false, false) => None,
    }
}

/// Compares two digit runs by magnitude: the longer run wins, otherwise
/// the first differing digit decides.
fn compare_right(a: &[u8], i: &mut usize, b: &[u8], j: &mut usize) -> Ordering {
    let mut bias = Ordering::Equal;
    loop {
        match (is_digit_at(a, *i), is_digit_at(b, *j)) {
            (false, false) => return bias,
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (true, true) => {
                if bias == Ordering::Equal {
                    bias = a[*i].cmp(&b[*j]);
                }
            }
        }
        *i += 1;
        *j += 1;
    }
}

/// Compares two digit runs left-aligned; the first differing digit decides.
fn compare_left(a: &[u8], i: &mut usize, b: &[u8], j: &mut usize) -> Ordering {
    loop {
        match (is_digit_at(a, *i), is_digit_at(b, *j)) {
            (false, false) => return Ordering::Equal,
            (false, true) => return Ordering::Less,
            (true, false) => return Ordering::Greater,
            (true, true) => {
                let ordering = a[*i].cmp(&b[*j]);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
        *i += 1;
        *j += 1;
    }
}
