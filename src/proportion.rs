//! Top-level proportion solving: boundary wrapping, fallback permutations,
//! and boundary stripping.

use std::fmt;

use log::debug;

use crate::solver::{complete, IllFormedError};
use crate::symbol::{reversed, strip, wrap, Sym};

/// Scan orientation of a solving attempt.
///
/// The alternating left-to-right strategy has a directional bias: some
/// proportions only align when scanned from the other end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Sequences scanned as given.
    Forward,
    /// All three sequences reversed before solving, the result re-reversed.
    Reversed,
}

/// Which comparison sequence leads the alternation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// `b` is matched first.
    Direct,
    /// `c` is matched first.
    Swapped,
}

/// One failed solving attempt, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptFailure {
    /// Scan orientation of the attempt.
    pub orientation: Orientation,
    /// Alternation order of the attempt.
    pub order: Order,
    /// Why the attempt failed.
    pub reason: IllFormedError,
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}/{:?}: {}",
            self.orientation, self.order, self.reason
        )
    }
}

/// Raised once every fallback permutation has failed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("proportion is unsolvable: all {} permutations failed", .attempts.len())]
pub struct UnsolvableError {
    /// Failure reason per attempted permutation, in attempt order.
    pub attempts: Vec<AttemptFailure>,
}

/// The fixed attempt schedule; the first success wins and later permutations
/// are never consulted.
const ATTEMPTS: [(Orientation, Order); 4] = [
    (Orientation::Forward, Order::Direct),
    (Orientation::Forward, Order::Swapped),
    (Orientation::Reversed, Order::Direct),
    (Orientation::Reversed, Order::Swapped),
];

/// Solve the analogical proportion `a : b = c : x` for `x`.
///
/// Wraps the inputs with boundary markers, then attempts the four scan
/// permutations in fixed order, returning the first completion with the
/// markers stripped.
pub fn solve<T>(a: &[T], b: &[T], c: &[T]) -> Result<Vec<T>, UnsolvableError>
where
    T: PartialEq + Clone + fmt::Debug,
{
    let (fwd_a, fwd_b, fwd_c) = (wrap(a), wrap(b), wrap(c));
    let (rev_a, rev_b, rev_c) = (reversed(&fwd_a), reversed(&fwd_b), reversed(&fwd_c));

    let mut attempts = Vec::with_capacity(ATTEMPTS.len());
    for (orientation, order) in ATTEMPTS {
        let (a, b, c): (&[Sym<T>], &[Sym<T>], &[Sym<T>]) = match (orientation, order) {
            (Orientation::Forward, Order::Direct) => (&fwd_a, &fwd_b, &fwd_c),
            (Orientation::Forward, Order::Swapped) => (&fwd_a, &fwd_c, &fwd_b),
            (Orientation::Reversed, Order::Direct) => (&rev_a, &rev_b, &rev_c),
            (Orientation::Reversed, Order::Swapped) => (&rev_a, &rev_c, &rev_b),
        };

        match complete(a, b, c) {
            Ok(mut x) => {
                if orientation == Orientation::Reversed {
                    x.reverse();
                }
                debug!("solved with {orientation:?}/{order:?}: {x:?}");
                return Ok(strip(x));
            }
            Err(reason) => {
                debug!("attempt {orientation:?}/{order:?} failed: {reason}");
                attempts.push(AttemptFailure {
                    orientation,
                    order,
                    reason,
                });
            }
        }
    }

    Err(UnsolvableError { attempts })
}

/// Solve a proportion over the characters of word forms.
pub fn solve_str(a: &str, b: &str, c: &str) -> Result<String, UnsolvableError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let c: Vec<char> = c.chars().collect();
    solve(&a, &b, &c).map(|x| x.into_iter().collect())
}
