//! Randomized field values.
//!
//! Every run submits fresh values, so a green suite proves the submit
//! actually persisted something new rather than matching leftovers from an
//! earlier run.

use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Random string drawn from the whole printable ASCII range, space through
/// tilde. Exercises quoting and escaping on the server side.
pub fn printable_ascii(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(0x20u8..=0x7e) as char).collect()
}

/// Random string of ASCII letters.
pub fn alphabetic(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

/// Two ten-letter lines, each newline-terminated. The server is expected to
/// keep interior newlines and may trim the trailing one.
pub fn textarea_text() -> String {
    format!("{}\n{}\n", alphabetic(10), alphabetic(10))
}

/// Uniformly random element of `items`, or `None` when the slice is empty.
pub fn pick<T>(items: &[T]) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let mut rng = rand::thread_rng();
    Some(&items[rng.gen_range(0..items.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_stays_in_range() {
        let s = printable_ascii(200);
        assert_eq!(s.len(), 200);
        assert!(s.chars().all(|c| (' '..='~').contains(&c)));
    }

    #[test]
    fn alphabetic_is_letters_only() {
        let s = alphabetic(200);
        assert_eq!(s.len(), 200);
        assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn textarea_text_is_two_terminated_lines() {
        let s = textarea_text();
        assert!(s.ends_with('\n'));
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.len() == 10));
    }

    #[test]
    fn pick_stays_in_bounds_and_handles_empty() {
        let empty: [u8; 0] = [];
        assert!(pick(&empty).is_none());
        let items = [1, 2, 3];
        for _ in 0..50 {
            assert!(items.contains(pick(&items).unwrap()));
        }
    }
}
