//! This module contains utility functionality for the rest of this crate,
//! most prominently the [SymbolSet] that is used to store region occupancy
//! and candidate symbols.

use std::collections::HashSet;
use std::hash::Hash;
use std::mem;
use std::ops::{
    BitOr,
    BitOrAssign,
    Sub,
    SubAssign
};
use std::slice::Iter;

/// A set of symbols in the range `[1, max]` that is implemented as a bit
/// vector. Each symbol in the range of possible elements is represented by
/// one bit in a vector of numbers. This generally has better performance
/// than a `HashSet`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SymbolSet {
    max: usize,
    len: usize,
    content: Vec<u64>
}

/// An enumeration of the errors that can happen when using a [SymbolSet].
#[derive(Debug, Eq, PartialEq)]
pub enum SymbolSetError {

    /// Indicates that two `SymbolSet`s with different bounds were combined
    /// in one operation.
    DifferentBounds,

    /// Indicates that a symbol given for insertion or removal lies outside
    /// the bounds of the `SymbolSet` in question, that is, it is zero or
    /// greater than the maximum.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, SymbolSetError>`.
pub type SymbolSetResult<V> = Result<V, SymbolSetError>;

struct BitIterator {
    bit_index: usize,
    value: u64
}

impl BitIterator {
    fn new(value: u64) -> BitIterator {
        BitIterator {
            bit_index: 0,
            value
        }
    }

    fn progress(&mut self) {
        let diff = self.value.trailing_zeros() as usize;
        self.value >>= diff;
        self.bit_index += diff;
    }
}

impl Iterator for BitIterator {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.value != 0 && (self.value & 1) == 0 {
            self.progress();
        }

        let result = if self.value == 0 { None } else { Some(self.bit_index) };
        self.value &= 0xfffffffffffffffe;
        result
    }
}

/// An iterator over the content of a [SymbolSet] in ascending order.
pub struct SymbolSetIter<'a> {
    offset: usize,
    current: BitIterator,
    content: Iter<'a, u64>
}

impl<'a> SymbolSetIter<'a> {
    fn new(set: &'a SymbolSet) -> SymbolSetIter<'a> {
        let mut iter = set.content.iter();
        let first_bit_iterator = if let Some(&first) = iter.next() {
            BitIterator::new(first)
        }
        else {
            BitIterator::new(0)
        };

        SymbolSetIter {
            offset: 1,
            current: first_bit_iterator,
            content: iter
        }
    }
}

const WORD_BIT_SIZE: usize = mem::size_of::<u64>() * 8;

impl<'a> Iterator for SymbolSetIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if let Some(bit_index) = self.current.next() {
                return Some(self.offset + bit_index);
            }

            if let Some(&next_content) = self.content.next() {
                self.current = BitIterator::new(next_content);
                self.offset += WORD_BIT_SIZE;
            }
            else {
                return None;
            }
        }
    }
}

impl SymbolSet {

    /// Creates a new, empty `SymbolSet` for symbols in the range `[1, max]`.
    ///
    /// # Arguments
    ///
    /// * `max`: The highest symbol the created set can hold. Inserting or
    /// removing zero or any symbol above this maximum yields a
    /// `SymbolSetError::OutOfBounds`.
    pub fn new(max: usize) -> SymbolSet {
        let required_words = (max + 63) >> 6;

        SymbolSet {
            max,
            len: 0,
            content: vec![0u64; required_words]
        }
    }

    /// Creates a new `SymbolSet` that includes all symbols in the range
    /// `[1, max]`. Note that `max` also acts as the bound of the created
    /// set, as in [SymbolSet::new].
    ///
    /// # Arguments
    ///
    /// * `max`: The maximum value contained in the created set, which is
    /// also the maximum that can be contained.
    pub fn full(max: usize) -> SymbolSet {
        let required_words = (max + 63) >> 6;
        let mut content = vec![!0u64; required_words];
        let excess_bits = (required_words << 6) - max;

        if excess_bits > 0 {
            content[required_words - 1] >>= excess_bits;
        }

        SymbolSet {
            max,
            len: max,
            content
        }
    }

    fn compute_index(&self, symbol: usize) -> SymbolSetResult<(usize, u64)> {
        if symbol == 0 || symbol > self.max {
            Err(SymbolSetError::OutOfBounds)
        }
        else {
            let index = symbol - 1;
            let word_index = index >> 6;
            let sub_word_index = index & 63;
            let mask = 1u64 << sub_word_index;
            Ok((word_index, mask))
        }
    }

    /// Returns the maximum value that this set can contain (inclusive). The
    /// minimum is always 1.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Indicates whether this set contains the given symbol. Symbols outside
    /// the range `[1, max]` are never contained, so querying them returns
    /// `false` rather than an error.
    pub fn contains(&self, symbol: usize) -> bool {
        if let Ok((word_index, mask)) = self.compute_index(symbol) {
            (self.content[word_index] & mask) > 0
        }
        else {
            false
        }
    }

    /// Inserts the given symbol into this set, such that
    /// [SymbolSet::contains] returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set has changed, that is, the
    /// symbol was not present before.
    ///
    /// # Errors
    ///
    /// `SymbolSetError::OutOfBounds` if `symbol` is zero or greater than
    /// [SymbolSet::max].
    pub fn insert(&mut self, symbol: usize) -> SymbolSetResult<bool> {
        let (word_index, mask) = self.compute_index(symbol)?;
        let word = &mut self.content[word_index];

        if *word & mask == 0 {
            self.len += 1;
            *word |= mask;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes the given symbol from this set, such that
    /// [SymbolSet::contains] returns `false` for it afterwards.
    ///
    /// This method returns `true` if the set has changed, that is, the
    /// symbol was present before.
    ///
    /// # Errors
    ///
    /// `SymbolSetError::OutOfBounds` if `symbol` is zero or greater than
    /// [SymbolSet::max].
    pub fn remove(&mut self, symbol: usize) -> SymbolSetResult<bool> {
        let (word_index, mask) = self.compute_index(symbol)?;
        let word = &mut self.content[word_index];

        if *word & mask > 0 {
            *word &= !mask;
            self.len -= 1;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Removes all symbols from this set, such that [SymbolSet::contains]
    /// will return `false` for all inputs and [SymbolSet::is_empty] will
    /// return `true`.
    pub fn clear(&mut self) {
        for i in 0..self.content.len() {
            self.content[i] = 0;
        }

        self.len = 0;
    }

    /// Returns an iterator over the symbols contained in this set in
    /// ascending order.
    pub fn iter(&self) -> SymbolSetIter<'_> {
        SymbolSetIter::new(self)
    }

    /// Indicates whether this set is empty, i.e. contains no symbols. If
    /// this method returns `true`, [SymbolSet::contains] will return `false`
    /// for all inputs.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of symbols contained in this set.
    pub fn len(&self) -> usize {
        self.len
    }

    fn count(&self) -> usize {
        self.content.iter()
            .map(|c| c.count_ones() as usize)
            .sum()
    }

    fn op_assign(&mut self, other: &SymbolSet, op: impl Fn(u64, u64) -> u64)
            -> SymbolSetResult<bool> {
        if self.max() != other.max() {
            Err(SymbolSetError::DifferentBounds)
        }
        else {
            let contents = self.content.iter_mut().zip(other.content.iter());
            let mut changed = false;

            for (self_u64, &other_u64) in contents {
                let self_before = *self_u64;
                *self_u64 = op(self_before, other_u64);
                changed |= self_before != *self_u64;
            }

            self.len = self.count();
            Ok(changed)
        }
    }

    fn op(&self, other: &SymbolSet,
            op_assign: impl Fn(&mut SymbolSet, &SymbolSet)
                -> SymbolSetResult<bool>)
            -> SymbolSetResult<SymbolSet> {
        let mut clone = self.clone();
        op_assign(&mut clone, other)?;
        Ok(clone)
    }

    /// Inserts all symbols of `other` into this set. Both sets must have
    /// the same maximum.
    ///
    /// The [BitOrAssign] implementation wraps this method, panicking on
    /// error.
    ///
    /// # Returns
    ///
    /// `true` if at least one symbol of `other` was absent from this set
    /// before.
    ///
    /// # Errors
    ///
    /// `SymbolSetError::DifferentBounds` if the maximum of this set differs
    /// from the maximum of `other`.
    pub fn union_assign(&mut self, other: &SymbolSet) -> SymbolSetResult<bool> {
        self.op_assign(other, u64::bitor)
    }

    /// Computes the union of this set and `other` and returns it as a new
    /// set, leaving both inputs unchanged. Both sets must have the same
    /// maximum.
    ///
    /// The [BitOr] implementation wraps this method, panicking on error.
    ///
    /// # Errors
    ///
    /// `SymbolSetError::DifferentBounds` if the maximum of this set differs
    /// from the maximum of `other`.
    pub fn union(&self, other: &SymbolSet) -> SymbolSetResult<SymbolSet> {
        self.op(other, SymbolSet::union_assign)
    }

    /// Removes all symbols of `other` from this set. Both sets must have
    /// the same maximum.
    ///
    /// The [SubAssign] implementation wraps this method, panicking on
    /// error.
    ///
    /// # Returns
    ///
    /// `true` if at least one symbol of `other` was contained in this set
    /// before.
    ///
    /// # Errors
    ///
    /// `SymbolSetError::DifferentBounds` if the maximum of this set differs
    /// from the maximum of `other`.
    pub fn difference_assign(&mut self, other: &SymbolSet)
            -> SymbolSetResult<bool> {
        self.op_assign(other, |a, b| a & !b)
    }

    /// Computes the set of symbols contained in this set but not in `other`
    /// and returns it as a new set, leaving both inputs unchanged. Both sets
    /// must have the same maximum.
    ///
    /// The [Sub] implementation wraps this method, panicking on error.
    ///
    /// # Errors
    ///
    /// `SymbolSetError::DifferentBounds` if the maximum of this set differs
    /// from the maximum of `other`.
    pub fn difference(&self, other: &SymbolSet) -> SymbolSetResult<SymbolSet> {
        self.op(other, SymbolSet::difference_assign)
    }
}

/// Creates a new [SymbolSet] that contains the specified elements. First,
/// the maximum value must be specified. Then, after a semicolon, a
/// comma-separated list of the contained symbols must be provided. For empty
/// sets, [SymbolSet::new] can be used.
///
/// An example usage of this macro looks as follows:
///
/// ```
/// use number_place::symbols;
/// use number_place::util::SymbolSet;
///
/// let set = symbols!(9; 4, 7);
/// assert_eq!(9, set.max());
/// assert!(set.contains(4));
/// assert!(!set.contains(5));
/// ```
#[macro_export]
macro_rules! symbols {
    ($max:expr; $($es:expr),+) => {
        {
            let mut set = SymbolSet::new($max);
            $(set.insert($es).unwrap();)+
            set
        }
    };
}

impl BitOr<&SymbolSet> for SymbolSet {
    type Output = SymbolSet;

    fn bitor(mut self, rhs: &SymbolSet) -> SymbolSet {
        self.union_assign(rhs).unwrap();
        self
    }
}

impl Sub<&SymbolSet> for SymbolSet {
    type Output = SymbolSet;

    fn sub(mut self, rhs: &SymbolSet) -> SymbolSet {
        self.difference_assign(rhs).unwrap();
        self
    }
}

impl BitOr for &SymbolSet {
    type Output = SymbolSet;

    fn bitor(self, rhs: &SymbolSet) -> SymbolSet {
        self.union(rhs).unwrap()
    }
}

impl Sub for &SymbolSet {
    type Output = SymbolSet;

    fn sub(self, rhs: &SymbolSet) -> SymbolSet {
        self.difference(rhs).unwrap()
    }
}

impl BitOrAssign<&SymbolSet> for SymbolSet {
    fn bitor_assign(&mut self, rhs: &SymbolSet) {
        self.union_assign(rhs).unwrap();
    }
}

impl SubAssign<&SymbolSet> for SymbolSet {
    fn sub_assign(&mut self, rhs: &SymbolSet) {
        self.difference_assign(rhs).unwrap();
    }
}

/// Determines whether the given iterator contains at least two equal
/// elements as defined by the [Eq](std::cmp::Eq) trait. The duplication
/// detection is implemented with a [HashSet](std::collections::HashSet), so
/// it is required that the item type implements the [Hash](std::hash::Hash)
/// trait in a consistent way.
pub(crate) fn contains_duplicate<I>(mut iter: I) -> bool
where
    I: Iterator,
    I::Item: Hash + Eq
{
    let mut set = HashSet::new();
    iter.any(|e| !set.insert(e))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_set_is_empty() {
        let set = SymbolSet::new(6);

        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(!set.contains(6));
        assert_eq!(0, set.len());
        assert_eq!(6, set.max());
    }

    #[test]
    fn full_set_contains_symbol_range() {
        let set = SymbolSet::full(9);

        assert!(!set.is_empty());
        assert!(!set.contains(0));
        assert!(set.contains(1));
        assert!(set.contains(5));
        assert!(set.contains(9));
        assert!(!set.contains(10));
        assert_eq!(9, set.len());
    }

    #[test]
    fn full_set_of_word_multiple_size() {
        let set = SymbolSet::full(64);

        assert!(set.contains(1));
        assert!(set.contains(64));
        assert!(!set.contains(65));
        assert_eq!(64, set.len());
    }

    #[test]
    fn symbols_macro_has_specified_range() {
        let set = symbols!(7; 2);

        assert_eq!(7, set.max());
    }

    #[test]
    fn symbols_macro_contains_specified_elements() {
        let set = symbols!(8; 1, 5, 6);

        assert_eq!(3, set.len());
        assert!(set.contains(1));
        assert!(set.contains(5));
        assert!(set.contains(6));
        assert!(!set.contains(4));
    }

    #[test]
    fn insert_rejects_out_of_range_symbols() {
        let mut set = SymbolSet::new(5);

        assert_eq!(Err(SymbolSetError::OutOfBounds), set.insert(0));
        assert_eq!(Err(SymbolSetError::OutOfBounds), set.insert(6));
    }

    #[test]
    fn remove_rejects_out_of_range_symbols() {
        let mut set = SymbolSet::full(5);

        assert_eq!(Err(SymbolSetError::OutOfBounds), set.remove(0));
        assert_eq!(Err(SymbolSetError::OutOfBounds), set.remove(6));
    }

    #[test]
    fn operations_reject_different_bounds() {
        let lhs = SymbolSet::new(9);
        let rhs = SymbolSet::new(4);

        assert_eq!(Err(SymbolSetError::DifferentBounds), lhs.union(&rhs));
        assert_eq!(Err(SymbolSetError::DifferentBounds),
            rhs.difference(&lhs));
    }

    #[test]
    fn inserted_symbols_can_be_removed_and_cleared() {
        let mut set = SymbolSet::new(9);
        set.insert(1).unwrap();
        set.insert(5).unwrap();
        set.insert(8).unwrap();

        assert!(!set.is_empty());
        assert!(set.contains(1));
        assert!(set.contains(5));
        assert!(set.contains(8));
        assert_eq!(3, set.len());

        set.remove(5).unwrap();

        assert!(set.contains(1));
        assert!(!set.contains(5));
        assert!(set.contains(8));
        assert_eq!(2, set.len());

        set.clear();

        assert!(set.is_empty());
        assert!(!set.contains(1));
        assert!(!set.contains(8));
        assert_eq!(0, set.len());
    }

    #[test]
    fn iteration_is_ascending_across_words() {
        let mut set = SymbolSet::new(100);
        set.insert(64).unwrap();
        set.insert(3).unwrap();
        set.insert(99).unwrap();
        set.insert(65).unwrap();
        set.insert(17).unwrap();

        let symbols: Vec<usize> = set.iter().collect();

        assert_eq!(vec![3, 17, 64, 65, 99], symbols);
    }

    #[test]
    fn reinserting_reports_no_change() {
        let mut set = SymbolSet::new(9);

        assert!(set.insert(7).unwrap());
        assert!(set.insert(2).unwrap());
        assert!(!set.insert(7).unwrap());

        assert!(set.contains(7));
        assert_eq!(2, set.len());
    }

    #[test]
    fn removing_absent_symbol_reports_no_change() {
        let mut set = SymbolSet::full(9);

        assert!(set.remove(6).unwrap());
        assert!(!set.remove(6).unwrap());

        assert!(!set.contains(6));
        assert_eq!(8, set.len());
    }

    fn op_test_lhs() -> SymbolSet {
        symbols!(6; 1, 3, 5)
    }

    fn op_test_rhs() -> SymbolSet {
        symbols!(6; 3, 4)
    }

    #[test]
    fn union_collects_both_sides() {
        let result = op_test_lhs() | &op_test_rhs();

        assert_eq!(symbols!(6; 1, 3, 4, 5), result);
    }

    #[test]
    fn union_by_reference() {
        let result = &op_test_lhs() | &op_test_rhs();

        assert_eq!(symbols!(6; 1, 3, 4, 5), result);
    }

    #[test]
    fn union_assign_reports_change() {
        let mut set = op_test_lhs();

        assert!(set.union_assign(&op_test_rhs()).unwrap());
        assert!(!set.union_assign(&op_test_rhs()).unwrap());
    }

    #[test]
    fn difference_removes_right_hand_side() {
        let result = op_test_lhs() - &op_test_rhs();

        assert_eq!(symbols!(6; 1, 5), result);
    }

    #[test]
    fn difference_by_reference() {
        let result = &op_test_lhs() - &op_test_rhs();

        assert_eq!(symbols!(6; 1, 5), result);
    }

    #[test]
    fn contains_duplicate_detects_repetition() {
        let values = vec![2, 9, 4, 7, 9];

        assert!(contains_duplicate(values.iter()));
        assert!(contains_duplicate(values.iter().map(|i| i.to_string())));
    }

    #[test]
    fn contains_duplicate_accepts_distinct_values() {
        let values = vec![2, 9, 4, 7, 3];

        assert!(!contains_duplicate(values.iter()));
        assert!(!contains_duplicate(values.iter().map(|i| i.to_string())));
    }
}
