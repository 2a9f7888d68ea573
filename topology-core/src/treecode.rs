// Copyright 2026 the Temporal Topology Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Treecode`]: a variable-length left/right bitstring addressing a node
//! in an implicit binary tree.
//!
//! A treecode is, bit for bit, an arbitrary-precision unsigned integer with
//! an implicit leading sentinel `1`: appending a step is `value = (value
//! << 1) | bit`, so the highest set bit always marks the current depth.
//! Representation is a little-endian array of `u64` words, the way a
//! bignum would be, rather than a single fixed-width integer, since a
//! deeply nested composition can exceed 64 or 128 steps.

use core::fmt;

/// A left/right path from the root of an implicit binary tree.
///
/// `Treecode::ROOT` is the path of length zero (just the sentinel).
/// `append` extends the path by one step; `is_prefix_of` and
/// `next_step_towards` support walking between two codes that share a
/// common ancestor.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Treecode {
    /// Little-endian words; the sentinel bit is always the highest set
    /// bit across the array, at position `length`.
    words: Vec<u64>,
    /// Number of steps appended since the root (bits below the sentinel).
    length: u32,
}

const WORD_BITS: u32 = u64::BITS;

impl Treecode {
    /// The root of the tree: zero steps taken.
    pub const ROOT: Self = Self {
        words: Vec::new(),
        length: 0,
    };

    fn words_or_sentinel(&self) -> Vec<u64> {
        if self.words.is_empty() {
            vec![1]
        } else {
            self.words.clone()
        }
    }

    /// Number of steps from the root (not counting the sentinel bit).
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Appends one step: `false` = left child, `true` = right child.
    pub fn append(&mut self, bit: bool) {
        let mut words = self.words_or_sentinel();
        shift_left_one(&mut words);
        if bit {
            words[0] |= 1;
        }
        self.words = words;
        self.length += 1;
    }

    /// Returns a clone of `self` with one more step appended, leaving
    /// `self` unmodified.
    #[must_use]
    pub fn with_appended(&self, bit: bool) -> Self {
        let mut next = self.clone();
        next.append(bit);
        next
    }

    /// Structural equality (an explicit alias for `==`, matching the
    /// vocabulary of the rest of this module's operations).
    #[must_use]
    pub fn eql(&self, other: &Self) -> bool {
        self == other
    }

    /// `true` if `self`'s path is a prefix of `other`'s (including
    /// `self == other`).
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        if self.length > other.length {
            return false;
        }
        let shifted = normalize(shift_right(&other.words_or_sentinel(), other.length - self.length));
        shifted == normalize(self.words_or_sentinel())
    }

    /// The next step (`false`/`true`) to take from `self` towards
    /// `target`.
    ///
    /// # Panics
    ///
    /// Panics (in debug builds) if `self` is not a prefix of `target`, or
    /// if `self == target` (there is no "next" step).
    #[must_use]
    pub fn next_step_towards(&self, target: &Self) -> bool {
        debug_assert!(
            self.is_prefix_of(target),
            "Treecode::next_step_towards: self must be a prefix of target"
        );
        debug_assert!(
            self.length < target.length,
            "Treecode::next_step_towards: self == target has no next step"
        );
        let bit_index = target.length - self.length - 1;
        get_bit(&target.words_or_sentinel(), bit_index)
    }
}

impl Default for Treecode {
    fn default() -> Self {
        Self::ROOT
    }
}

impl fmt::Debug for Treecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Treecode(")?;
        for i in (0..self.length).rev() {
            let bit = get_bit(&self.words_or_sentinel(), i);
            write!(f, "{}", u8::from(bit))?;
        }
        write!(f, ")")
    }
}

fn shift_left_one(words: &mut Vec<u64>) {
    let mut carry = 0u64;
    for w in words.iter_mut() {
        let next_carry = *w >> (WORD_BITS - 1);
        *w = (*w << 1) | carry;
        carry = next_carry;
    }
    if carry != 0 {
        words.push(carry);
    }
}

fn shift_right(words: &[u64], amount: u32) -> Vec<u64> {
    if amount == 0 {
        return words.to_vec();
    }
    let word_shift = (amount / WORD_BITS) as usize;
    let bit_shift = amount % WORD_BITS;
    if word_shift >= words.len() {
        return vec![0];
    }
    let out_len = words.len() - word_shift;
    let mut out = vec![0u64; out_len];
    for i in 0..out_len {
        let lo = words[i + word_shift] >> bit_shift;
        let hi = if bit_shift == 0 || i + word_shift + 1 >= words.len() {
            0
        } else {
            words[i + word_shift + 1] << (WORD_BITS - bit_shift)
        };
        out[i] = lo | hi;
    }
    out
}

fn normalize(mut words: Vec<u64>) -> Vec<u64> {
    while words.len() > 1 && *words.last().expect("non-empty") == 0 {
        words.pop();
    }
    words
}

fn get_bit(words: &[u64], index: u32) -> bool {
    let word = (index / WORD_BITS) as usize;
    let bit = index % WORD_BITS;
    words.get(word).is_some_and(|w| (w >> bit) & 1 == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_zero_length() {
        assert_eq!(Treecode::ROOT.length(), 0);
        assert_eq!(Treecode::default(), Treecode::ROOT);
    }

    #[test]
    fn append_increases_length() {
        let mut t = Treecode::ROOT;
        t.append(false);
        t.append(true);
        assert_eq!(t.length(), 2);
    }

    #[test]
    fn with_appended_leaves_original_untouched() {
        let root = Treecode::ROOT;
        let child = root.with_appended(true);
        assert_eq!(root.length(), 0);
        assert_eq!(child.length(), 1);
    }

    #[test]
    fn root_is_prefix_of_everything() {
        let root = Treecode::ROOT;
        let deep = root.with_appended(false).with_appended(true).with_appended(true);
        assert!(root.is_prefix_of(&deep));
        assert!(deep.is_prefix_of(&deep), "a code is a prefix of itself");
        assert!(!deep.is_prefix_of(&root));
    }

    #[test]
    fn unrelated_codes_are_not_prefixes() {
        let a = Treecode::ROOT.with_appended(false).with_appended(false);
        let b = Treecode::ROOT.with_appended(true).with_appended(false);
        assert!(!a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
    }

    #[test]
    fn next_step_towards_recovers_appended_bits() {
        let root = Treecode::ROOT;
        let path = [false, true, true, false];
        let mut deep = root.clone();
        for &bit in &path {
            deep = deep.with_appended(bit);
        }
        let mut current = root;
        for &expected in &path {
            let step = current.next_step_towards(&deep);
            assert_eq!(step, expected);
            current = current.with_appended(step);
        }
        assert_eq!(current, deep);
    }

    #[test]
    fn codes_differ_by_exactly_one_bit_from_parent() {
        let parent = Treecode::ROOT.with_appended(true).with_appended(false);
        let child = parent.with_appended(true);
        assert!(parent.is_prefix_of(&child));
        assert_eq!(child.length(), parent.length() + 1);
    }

    #[test]
    fn survives_a_word_boundary() {
        // 70 appended bits forces the backing array past one u64 word.
        let mut t = Treecode::ROOT;
        for i in 0..70u32 {
            t.append(i % 3 == 0);
        }
        assert_eq!(t.length(), 70);
        let prefix = {
            let mut p = Treecode::ROOT;
            for i in 0..40u32 {
                p.append(i % 3 == 0);
            }
            p
        };
        assert!(prefix.is_prefix_of(&t));
    }

    #[test]
    fn eql_matches_partial_eq() {
        let a = Treecode::ROOT.with_appended(true);
        let b = Treecode::ROOT.with_appended(true);
        assert!(a.eql(&b));
    }

    #[test]
    fn debug_renders_bits_root_to_leaf() {
        let t = Treecode::ROOT.with_appended(false).with_appended(true);
        assert_eq!(format!("{t:?}"), "Treecode(01)");
    }
}
