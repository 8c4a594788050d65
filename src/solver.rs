//! Alternating left-to-right completion of a boundary-wrapped proportion.

use std::fmt;
use std::mem;

use log::trace;

use crate::matching::{find_first_match, NoMatchError};
use crate::symbol::Sym;

/// Raised when the remaining `a` cannot be aligned with the active comparison
/// sequence.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IllFormedError {
    /// The remaining `a` shares no symbol with the comparison sequence.
    #[error("ill-formed: {0}")]
    NoMatch(#[from] NoMatchError),
    /// A shared run exists but does not begin at the front of the remaining
    /// `a`.
    #[error("ill-formed: {residue} unmatched symbols precede the next match")]
    LeadingResidue {
        /// Length of the unmatched leading chunk of `a`.
        residue: usize,
    },
}

/// Consume `a` from the front, alternating the comparison sequence between
/// `b` and `c`, and accumulate the completion.
///
/// Each round locates the next chunk of `a` inside the active comparison
/// sequence, harvests whatever precedes that match as new material for the
/// result, then switches to the other comparison sequence so that material
/// visible only on one side is picked up on alternating rounds.
///
/// All three inputs must already be boundary-wrapped; the caller strips the
/// markers from the returned sequence.
pub fn complete<T>(
    a: &[Sym<T>],
    b: &[Sym<T>],
    c: &[Sym<T>],
) -> Result<Vec<Sym<T>>, IllFormedError>
where
    T: PartialEq + Clone + fmt::Debug,
{
    let (mut a, mut b, mut c) = (a, b, c);
    let mut x: Vec<Sym<T>> = Vec::with_capacity(b.len() + c.len());

    while !a.is_empty() {
        let found = find_first_match(a, b)?;
        if !found.src_prefix.is_empty() {
            return Err(IllFormedError::LeadingResidue {
                residue: found.src_prefix.len(),
            });
        }
        a = found.src_suffix;
        x.extend_from_slice(found.ref_prefix);
        b = found.ref_suffix;
        trace!("a: {a:?}, b: {b:?}, c: {c:?}, x: {x:?}");
        mem::swap(&mut b, &mut c);
        trace!("switching comparison sequence");
    }

    // Whatever survives in the active comparison sequence closes the result.
    x.extend_from_slice(b);
    Ok(x)
}
