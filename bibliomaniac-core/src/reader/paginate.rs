//! Page layout - groups sections into left/right facing pairs

use crate::types::{PagePair, Section};

/// Lay sections out as facing page pairs, preserving order
///
/// `pair[k].left` is `sections[2k]` and `pair[k].right` is `sections[2k+1]`;
/// when a book yields an odd number of sections the final right-hand page is
/// the empty sentinel rather than an absent value, so callers can index
/// pairs without special-casing the tail. An empty input yields no pairs.
pub fn paginate(sections: Vec<Section>) -> Vec<PagePair> {
    let mut pairs = Vec::with_capacity(sections.len().div_ceil(2));
    let mut sections = sections.into_iter();
    while let Some(left) = sections.next() {
        let right = sections.next().unwrap_or_else(Section::empty);
        pairs.push(PagePair::new(left, right));
    }
    pairs
}
