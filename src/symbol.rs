//! Sentinel-tagged symbols and boundary handling for working sequences.

use std::fmt;

/// A working-alphabet symbol: a reserved boundary sentinel or a literal token
/// drawn from the caller's alphabet.
///
/// The boundary markers are dedicated variants rather than reserved printable
/// characters, so they cannot collide with real input data whatever the token
/// type is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sym<T> {
    /// Start-of-sequence marker, prepended before solving.
    Start,
    /// End-of-sequence marker, appended before solving.
    End,
    /// An ordinary symbol of the input alphabet.
    Lit(T),
}

impl<T> Sym<T> {
    /// True for the two synthetic boundary variants.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Sym::Start | Sym::End)
    }
}

impl<T: fmt::Display> fmt::Display for Sym<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sym::Start => write!(f, "^"),
            Sym::End => write!(f, "$"),
            Sym::Lit(sym) => write!(f, "{sym}"),
        }
    }
}

/// Wrap a plain sequence with start/end boundary markers.
///
/// The markers keep the matcher from anchoring a run at a sequence edge when
/// the true edit applies before the first or after the last real symbol.
pub fn wrap<T: Clone>(seq: &[T]) -> Vec<Sym<T>> {
    let mut wrapped = Vec::with_capacity(seq.len() + 2);
    wrapped.push(Sym::Start);
    wrapped.extend(seq.iter().cloned().map(Sym::Lit));
    wrapped.push(Sym::End);
    wrapped
}

/// Drop the boundary markers, keeping literal symbols in order.
pub fn strip<T>(seq: Vec<Sym<T>>) -> Vec<T> {
    seq.into_iter()
        .filter_map(|sym| match sym {
            Sym::Lit(sym) => Some(sym),
            Sym::Start | Sym::End => None,
        })
        .collect()
}

/// The sequence in reverse order, boundary markers included.
pub fn reversed<T: Clone>(seq: &[Sym<T>]) -> Vec<Sym<T>> {
    seq.iter().rev().cloned().collect()
}
