//! Contiguous-run matching between two symbol sequences.

use std::fmt;

use log::trace;

/// Raised when the two operand sequences share no symbol at all.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("no shared symbol between the operands ({scanned} symbols scanned)")]
pub struct NoMatchError {
    /// Number of `src` symbols scanned before giving up (the whole of `src`).
    pub scanned: usize,
}

/// Result of locating the earliest shared contiguous run: the run itself plus
/// the four flanking remainders around it in each operand.
///
/// `src_prefix + run + src_suffix` reassembles `src`, and
/// `ref_prefix + run + ref_suffix` reassembles `reference`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstMatch<'a, T> {
    /// Material of `src` before the run.
    pub src_prefix: &'a [T],
    /// Material of `src` after the run.
    pub src_suffix: &'a [T],
    /// Material of `reference` before the run's leftmost occurrence.
    pub ref_prefix: &'a [T],
    /// Material of `reference` after that occurrence.
    pub ref_suffix: &'a [T],
    /// The shared run.
    pub run: &'a [T],
}

/// Leftmost start offset of `needle` as a contiguous run inside `hay`.
fn find_run<T: PartialEq>(hay: &[T], needle: &[T]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > hay.len() {
        return None;
    }
    hay.windows(needle.len()).position(|window| window == needle)
}

/// Find the shared run starting earliest in `src`, extend it greedily, and
/// split both operands around it.
///
/// Tie-breaks are fixed: earliest start in `src`, greedy (not globally
/// optimal) contiguous extension, leftmost occurrence of the final run in
/// `reference`. Extension stops permanently at the first symbol that fails to
/// keep the run contiguous in `reference`.
pub fn find_first_match<'a, T>(
    src: &'a [T],
    reference: &'a [T],
) -> Result<FirstMatch<'a, T>, NoMatchError>
where
    T: PartialEq + fmt::Debug,
{
    trace!("matching {src:?} against {reference:?}");

    let mut anchor = None;
    for (i, sym) in src.iter().enumerate() {
        if let Some(j) = reference.iter().position(|other| other == sym) {
            anchor = Some((i, j));
            break;
        }
    }
    let (start, mut at) = anchor.ok_or(NoMatchError { scanned: src.len() })?;

    let mut end = start + 1;
    while end < src.len() {
        match find_run(reference, &src[start..=end]) {
            Some(j) => {
                at = j;
                end += 1;
            }
            None => break,
        }
    }

    let run = &src[start..end];
    trace!("match {run:?} at reference offset {at}");

    Ok(FirstMatch {
        src_prefix: &src[..start],
        src_suffix: &src[end..],
        ref_prefix: &reference[..at],
        ref_suffix: &reference[at + run.len()..],
        run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syms(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn splits_both_operands_around_the_run() {
        let src = syms("xabcy");
        let reference = syms("pabcq");

        let found = find_first_match(&src, &reference).expect("match");

        assert_eq!(found.src_prefix, syms("x"));
        assert_eq!(found.run, syms("abc"));
        assert_eq!(found.src_suffix, syms("y"));
        assert_eq!(found.ref_prefix, syms("p"));
        assert_eq!(found.ref_suffix, syms("q"));
    }

    #[test]
    fn reassembles_operands_from_the_split() {
        let src = syms("duckling");
        let reference = syms("duck");

        let found = find_first_match(&src, &reference).expect("match");

        let mut rebuilt: Vec<char> = found.src_prefix.to_vec();
        rebuilt.extend_from_slice(found.run);
        rebuilt.extend_from_slice(found.src_suffix);
        assert_eq!(rebuilt, src);

        let mut rebuilt: Vec<char> = found.ref_prefix.to_vec();
        rebuilt.extend_from_slice(found.run);
        rebuilt.extend_from_slice(found.ref_suffix);
        assert_eq!(rebuilt, reference);
    }

    #[test]
    fn fails_when_no_symbol_is_shared() {
        let src = syms("abc");
        let reference = syms("xyz");

        let error = find_first_match(&src, &reference).expect_err("no match");
        assert_eq!(error.scanned, 3);
    }

    #[test]
    fn picks_the_earliest_start_in_src() {
        // 'b' is the first src symbol present in the reference, even though
        // 'c' later in src also occurs there.
        let src = syms("abc");
        let reference = syms("cbz");

        let found = find_first_match(&src, &reference).expect("match");
        assert_eq!(found.src_prefix, syms("a"));
        assert_eq!(found.run, syms("b"));
        assert_eq!(found.src_suffix, syms("c"));
    }

    #[test]
    fn extension_stops_permanently_at_first_failure() {
        // "ab" extends, "abz" does not; the later "cd" run in the reference
        // must not be picked up again.
        let src = syms("abzcd");
        let reference = syms("abXcd");

        let found = find_first_match(&src, &reference).expect("match");
        assert_eq!(found.run, syms("ab"));
        assert_eq!(found.src_suffix, syms("zcd"));
        assert_eq!(found.ref_suffix, syms("Xcd"));
    }

    #[test]
    fn picks_the_leftmost_occurrence_in_the_reference() {
        let src = syms("ab");
        let reference = syms("xxabyyabzz");

        let found = find_first_match(&src, &reference).expect("match");
        assert_eq!(found.ref_prefix, syms("xx"));
        assert_eq!(found.ref_suffix, syms("yyabzz"));
    }

    #[test]
    fn single_symbol_operands_match() {
        let src = syms("a");
        let reference = syms("a");

        let found = find_first_match(&src, &reference).expect("match");
        assert_eq!(found.run, syms("a"));
        assert!(found.src_prefix.is_empty());
        assert!(found.src_suffix.is_empty());
        assert!(found.ref_prefix.is_empty());
        assert!(found.ref_suffix.is_empty());
    }
}
