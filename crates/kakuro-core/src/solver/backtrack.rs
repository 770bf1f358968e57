//! Recursive backtracking over pruned variable domains.

use super::types::{CancelToken, Solution};
use crate::{Cell, ClueValue, Digit, DigitSet};

/// Why a search unwound before exhausting the tree.
pub(super) enum Interrupt {
    Cancelled,
    LimitReached,
}

/// Per-equation bookkeeping kept incrementally during the search.
struct EquationState {
    target: ClueValue,
    /// Digits held by assigned member cells.
    used: DigitSet,
    /// Sum of assigned member cells.
    sum: ClueValue,
    /// Member cells still unassigned.
    unassigned: usize,
}

pub(super) struct Search<'a> {
    variables: &'a [Cell],
    domains: &'a [DigitSet],
    /// Equation indices containing each variable (at most two).
    memberships: &'a [Vec<usize>],
    equations: Vec<EquationState>,
    assignment: Vec<Digit>,
    cancel: &'a CancelToken,
    solution_limit: Option<usize>,
    solutions: Vec<Solution>,
}

impl<'a> Search<'a> {
    pub(super) fn new(
        variables: &'a [Cell],
        domains: &'a [DigitSet],
        memberships: &'a [Vec<usize>],
        equation_specs: &[(ClueValue, usize)],
        cancel: &'a CancelToken,
        solution_limit: Option<usize>,
    ) -> Self {
        let equations = equation_specs
            .iter()
            .map(|&(target, len)| EquationState {
                target,
                used: DigitSet::empty(),
                sum: 0,
                unassigned: len,
            })
            .collect();
        Self {
            variables,
            domains,
            memberships,
            equations,
            assignment: vec![0; variables.len()],
            cancel,
            solution_limit,
            solutions: Vec::new(),
        }
    }

    /// Walk the whole tree; `Ok` means it was exhausted.
    pub(super) fn run(&mut self) -> Result<(), Interrupt> {
        self.descend(0)
    }

    pub(super) fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }

    fn descend(&mut self, depth: usize) -> Result<(), Interrupt> {
        if self.cancel.is_cancelled() {
            return Err(Interrupt::Cancelled);
        }
        if depth == self.variables.len() {
            return self.record();
        }
        for digit in self.domains[depth].iter() {
            if !self.accepts(depth, digit) {
                continue;
            }
            self.assign(depth, digit);
            let outcome = self.descend(depth + 1);
            self.unassign(depth, digit);
            outcome?;
        }
        Ok(())
    }

    /// Local consistency for placing `digit` at variable `var`: the digit
    /// is unused in every containing equation, the partial sum stays under
    /// the target (meeting it exactly on the last cell), and the largest
    /// still-available completion can reach the target.
    fn accepts(&self, var: usize, digit: Digit) -> bool {
        for &ei in &self.memberships[var] {
            let eq = &self.equations[ei];
            if eq.used.contains(digit) {
                return false;
            }
            let sum = eq.sum + ClueValue::from(digit);
            let rest = eq.unassigned - 1;
            if rest == 0 {
                if sum != eq.target {
                    return false;
                }
            } else {
                if sum >= eq.target {
                    return false;
                }
                if sum + best_completion(eq.used, digit, rest) < eq.target {
                    return false;
                }
            }
        }
        true
    }

    fn assign(&mut self, var: usize, digit: Digit) {
        self.assignment[var] = digit;
        for &ei in &self.memberships[var] {
            let eq = &mut self.equations[ei];
            eq.used.insert(digit);
            eq.sum += ClueValue::from(digit);
            eq.unassigned -= 1;
        }
    }

    fn unassign(&mut self, var: usize, digit: Digit) {
        self.assignment[var] = 0;
        for &ei in &self.memberships[var] {
            let eq = &mut self.equations[ei];
            eq.used.remove(digit);
            eq.sum -= ClueValue::from(digit);
            eq.unassigned += 1;
        }
    }

    fn record(&mut self) -> Result<(), Interrupt> {
        let entries = self
            .variables
            .iter()
            .zip(&self.assignment)
            .map(|(&cell, &digit)| (cell, digit))
            .collect();
        self.solutions.push(Solution::new(entries));
        match self.solution_limit {
            Some(limit) if self.solutions.len() >= limit => Err(Interrupt::LimitReached),
            _ => Ok(()),
        }
    }
}

/// Sum of the `count` largest digits not yet used and distinct from
/// `digit` — the optimistic completion of a partially assigned run.
fn best_completion(used: DigitSet, digit: Digit, count: usize) -> ClueValue {
    let mut total = 0;
    let mut taken = 0;
    for d in (1u8..=9).rev() {
        if taken == count {
            break;
        }
        if d != digit && !used.contains(d) {
            total += ClueValue::from(d);
            taken += 1;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_completion_takes_largest_free_digits() {
        assert_eq!(best_completion(DigitSet::empty(), 9, 2), 15); // 8 + 7
        assert_eq!(best_completion(DigitSet::empty(), 1, 1), 9);
        let used: DigitSet = [9, 8].into_iter().collect();
        assert_eq!(best_completion(used, 7, 2), 11); // 6 + 5
        assert_eq!(best_completion(DigitSet::empty(), 5, 0), 0);
    }
}
