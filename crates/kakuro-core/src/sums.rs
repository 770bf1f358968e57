//! Digit-set arithmetic for run sums.
//!
//! `feasible_range` gives the closed-form bounds on what `n` distinct
//! digits can add up to; [`SumTable`] answers the sharper question of
//! *which* digits can appear in some run of length `n` summing to a given
//! target, precomputed once and reused for every equation of a solve.

use crate::{ClueValue, DigitSet};

/// Largest target sum any run can carry: 1+2+…+9.
pub(crate) const MAX_SUM: usize = 45;

/// Smallest and largest sums reachable with `n` pairwise-distinct digits
/// 1..=9, or `None` when no run of that length can exist.
pub fn feasible_range(n: usize) -> Option<(ClueValue, ClueValue)> {
    if !(1..=9).contains(&n) {
        return None;
    }
    let n = n as ClueValue;
    Some((n * (n + 1) / 2, n * (19 - n) / 2))
}

/// Precomputed table: for every (target sum, run length), the union of all
/// length-`n` subsets of {1..=9} that sum to the target.
///
/// Built by one pass over the 512 subsets of {1..=9}; exact, not an
/// approximation. Holds no per-puzzle state, so one table can serve any
/// number of concurrent solves.
#[derive(Debug, Clone)]
pub struct SumTable {
    // indexed [run length][target sum]
    allowed: [[DigitSet; MAX_SUM + 1]; 10],
}

impl SumTable {
    pub fn new() -> Self {
        let mut allowed = [[DigitSet::empty(); MAX_SUM + 1]; 10];
        for mask in 0u16..512 {
            let mut subset = DigitSet::empty();
            let mut sum = 0usize;
            for bit in 0u8..9 {
                if mask & (1u16 << bit) != 0 {
                    subset.insert(bit + 1);
                    sum += (bit + 1) as usize;
                }
            }
            let n = subset.len();
            if n > 0 {
                allowed[n][sum] = allowed[n][sum].union(subset);
            }
        }
        Self { allowed }
    }

    /// Digits that can appear in some valid run of length `n` summing to
    /// `target`; empty when no such run exists.
    pub fn allowed_digits(&self, target: ClueValue, n: usize) -> DigitSet {
        if n > 9 || target as usize > MAX_SUM {
            return DigitSet::empty();
        }
        self.allowed[n][target as usize]
    }
}

impl Default for SumTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Reference implementation: enumerate subsets directly.
    fn brute_force_allowed(target: ClueValue, n: usize) -> DigitSet {
        let mut union = DigitSet::empty();
        for mask in 0u16..512 {
            let digits: Vec<u8> = (0u8..9)
                .filter(|&bit| mask & (1u16 << bit) != 0)
                .map(|bit| bit + 1)
                .collect();
            if digits.len() == n && digits.iter().map(|&d| d as u32).sum::<u32>() == target {
                for &d in &digits {
                    union.insert(d);
                }
            }
        }
        union
    }

    #[test]
    fn test_feasible_range_closed_form() {
        assert_eq!(feasible_range(1), Some((1, 9)));
        assert_eq!(feasible_range(2), Some((3, 17)));
        assert_eq!(feasible_range(3), Some((6, 24)));
        assert_eq!(feasible_range(9), Some((45, 45)));
        assert_eq!(feasible_range(0), None);
        assert_eq!(feasible_range(10), None);
    }

    #[test]
    fn test_feasible_range_matches_bruteforce() {
        for n in 1..=9usize {
            let (lo, hi) = feasible_range(n).unwrap();
            let reachable: Vec<u32> = (1..=MAX_SUM as u32)
                .filter(|&s| !brute_force_allowed(s, n).is_empty())
                .collect();
            assert_eq!(*reachable.first().unwrap(), lo, "min for n={}", n);
            assert_eq!(*reachable.last().unwrap(), hi, "max for n={}", n);
            // every sum between the bounds is reachable
            assert_eq!(reachable.len() as u32, hi - lo + 1, "gaps for n={}", n);
        }
    }

    #[test]
    fn test_allowed_digits_known_cases() {
        let table = SumTable::new();
        // 4 in two cells: only {1,3}
        let pair: Vec<u8> = table.allowed_digits(4, 2).iter().collect();
        assert_eq!(pair, vec![1, 3]);
        // 3 in two cells: only {1,2}
        let pair: Vec<u8> = table.allowed_digits(3, 2).iter().collect();
        assert_eq!(pair, vec![1, 2]);
        // 45 in nine cells: every digit
        assert_eq!(table.allowed_digits(45, 9), DigitSet::all());
        // 17 in two cells: only {8,9}
        let pair: Vec<u8> = table.allowed_digits(17, 2).iter().collect();
        assert_eq!(pair, vec![8, 9]);
        // 10 in two cells: everything but 5 (5+5 is not distinct)
        let ten: Vec<u8> = table.allowed_digits(10, 2).iter().collect();
        assert_eq!(ten, vec![1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn test_allowed_digits_infeasible_is_empty() {
        let table = SumTable::new();
        assert!(table.allowed_digits(10, 1).is_empty());
        assert!(table.allowed_digits(2, 2).is_empty());
        assert!(table.allowed_digits(18, 2).is_empty());
        assert!(table.allowed_digits(44, 9).is_empty());
        assert!(table.allowed_digits(5, 0).is_empty());
        assert!(table.allowed_digits(50, 3).is_empty());
        assert!(table.allowed_digits(20, 12).is_empty());
    }

    #[test]
    fn test_table_matches_bruteforce_everywhere() {
        let table = SumTable::new();
        for n in 0..=9usize {
            for target in 0..=MAX_SUM as u32 {
                assert_eq!(
                    table.allowed_digits(target, n),
                    brute_force_allowed(target, n),
                    "mismatch at target={} n={}",
                    target,
                    n
                );
            }
        }
    }

    proptest! {
        /// Replacing each digit d by 10-d maps runs summing to s onto runs
        /// summing to 10n - s, so the allowed sets mirror each other.
        #[test]
        fn prop_allowed_digits_complement_symmetry(
            n in 1..=9usize,
            target in 1..=45u32,
        ) {
            let table = SumTable::new();
            let direct = table.allowed_digits(target, n);
            let complement_target = 10 * n as u32;
            prop_assume!(complement_target >= target);
            let mirrored = table.allowed_digits(complement_target - target, n);
            let reflected: DigitSet = direct.iter().map(|d| 10 - d).collect();
            prop_assert_eq!(mirrored, reflected);
        }

        /// Feasibility and the closed-form bounds agree for every target.
        #[test]
        fn prop_allowed_iff_within_range(
            n in 1..=9usize,
            target in 1..=45u32,
        ) {
            let table = SumTable::new();
            let feasible = match feasible_range(n) {
                Some((lo, hi)) => (lo..=hi).contains(&target),
                None => false,
            };
            prop_assert_eq!(!table.allowed_digits(target, n).is_empty(), feasible);
        }
    }
}
