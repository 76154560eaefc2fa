// SPDX-License-Identifier: MPL-2.0
//! Wrapping index cursor over a fixed-length image sequence.
//!
//! Out-of-range targets wrap to the opposite end: anything below zero lands
//! on the last image, anything at or past the end lands on the first. This
//! is deliberately not modular arithmetic; `show(-3)` on five images is 4,
//! not 2. Single steps (`next`/`previous`) behave identically either way.

/// Current position within `len` images. Never exists for an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    /// Creates a cursor at index 0, or `None` when there is nothing to show.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    /// Creates a cursor at `target`, wrapped into range.
    #[must_use]
    pub fn at(len: usize, target: isize) -> Option<Self> {
        let mut cursor = Self::new(len)?;
        cursor.show(target);
        Some(cursor)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    /// Always false; an empty cursor cannot be constructed.
    #[must_use]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Resolves `target` to an in-range index without moving.
    #[must_use]
    pub fn wrap(self, target: isize) -> usize {
        if target < 0 {
            return self.len - 1;
        }
        match usize::try_from(target) {
            Ok(index) if index < self.len => index,
            _ => 0,
        }
    }

    /// Moves to `target` (wrapped) and returns the new index.
    pub fn show(&mut self, target: isize) -> usize {
        self.index = self.wrap(target);
        self.index
    }

    /// Moves one step forward, wrapping to the first image.
    pub fn next(&mut self) -> usize {
        self.show(self.signed_index() + 1)
    }

    /// Moves one step back, wrapping to the last image.
    pub fn previous(&mut self) -> usize {
        self.show(self.signed_index() - 1)
    }

    /// One-based position, as shown in counters.
    #[must_use]
    pub fn position(self) -> usize {
        self.index + 1
    }

    /// Counter text in the form `"3 / 7"`.
    #[must_use]
    pub fn counter_text(self) -> String {
        format!("{} / {}", self.position(), self.len)
    }

    fn signed_index(self) -> isize {
        isize::try_from(self.index).unwrap_or(isize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_has_no_cursor() {
        assert!(Cursor::new(0).is_none());
        assert!(Cursor::at(0, 3).is_none());
    }

    #[test]
    fn k_next_steps_land_on_k_mod_n() {
        for n in 1..=7usize {
            let mut cursor = Cursor::new(n).unwrap();
            for k in 1..=3 * n {
                cursor.next();
                assert_eq!(cursor.index(), k % n, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn k_previous_steps_land_on_reverse_mod() {
        for n in 1..=7usize {
            let mut cursor = Cursor::new(n).unwrap();
            for k in 1..=3 * n {
                cursor.previous();
                assert_eq!(cursor.index(), (n - (k % n)) % n, "n={n} k={k}");
            }
        }
    }

    #[test]
    fn out_of_range_targets_wrap_to_opposite_end() {
        let mut cursor = Cursor::new(5).unwrap();
        cursor.show(2);
        assert_eq!(cursor.show(-1), 4);
        assert_eq!(cursor.show(5), 0);
        assert_eq!(cursor.show(-3), 4);
        assert_eq!(cursor.show(12), 0);
        assert_eq!(cursor.show(isize::MIN), 4);
    }

    #[test]
    fn counter_text_is_one_based() {
        let cursor = Cursor::at(5, -1).unwrap();
        assert_eq!(cursor.counter_text(), "5 / 5");
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn single_image_always_stays_at_zero() {
        let mut cursor = Cursor::new(1).unwrap();
        assert_eq!(cursor.next(), 0);
        assert_eq!(cursor.previous(), 0);
    }
}
