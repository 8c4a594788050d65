//! Analogical proportion solving over flat symbol sequences.
//!
//! This crate solves proportions of the form `a : b = c : x` by Lepage's 1998
//! alignment algorithm: `a` is consumed from left to right through contiguous
//! matches against `b` and `c` alternately, and the material preceding each
//! match is harvested into `x`. On failure the orchestration layer retries
//! with the comparison sequences swapped and with all sequences reversed.
//!
//! The algorithm only handles flat sequences of equality-comparable symbols:
//! no hierarchical structure, no segment reordering, no featural matching.

pub mod matching;
pub mod proportion;
pub mod solver;
pub mod symbol;

pub use matching::{find_first_match, FirstMatch, NoMatchError};
pub use proportion::{
    solve, solve_str, AttemptFailure, Order, Orientation, UnsolvableError,
};
pub use solver::{complete, IllFormedError};
pub use symbol::{strip, wrap, Sym};
