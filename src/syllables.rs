//! Syllabification
//!
//! Groups a classified symbol sequence into syllables (havarot) using the
//! simplified pedagogical rules:
//!
//! 1. a syllable boundary falls before every cluster carrying a vowel
//!    (hataf vowels included) or a voiced sheva;
//! 2. no boundary ever falls before a silent sheva (it closes the previous
//!    syllable);
//! 3. the first syllable starts at the first symbol regardless;
//! 4. a syllable is open when it ends on a vowel, closed otherwise.
//!
//! A doubling dagesh closes the previous syllable implicitly: the vowel
//! before it is that syllable's final symbol.

use crate::symbols::Symbol;
use serde::{Deserialize, Serialize};

/// One syllable: a `[start, end)` span into the symbol sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Syllable {
    /// Index of the first symbol in the syllable
    pub start: usize,
    /// Index one past the last symbol
    pub end: usize,
    /// The syllable ends on a vowel sound
    pub open: bool,
}

impl Syllable {
    /// The symbols of this syllable, sliced out of the full sequence
    pub fn symbols<'a>(&self, symbols: &'a [Symbol]) -> &'a [Symbol] {
        &symbols[self.start..self.end]
    }
}

/// A terminal patah-genuvah is pronounced before its letter, so the letter
/// still closes the syllable.
fn opens(last: Option<Symbol>) -> bool {
    last.is_some_and(|s| s.is_vowel() && s != Symbol::PatahGenuvah)
}

/// Group per-cluster symbol runs into syllable spans
pub(crate) fn syllabify(groups: &[Vec<Symbol>]) -> Vec<Syllable> {
    let mut syllables = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    let mut last: Option<Symbol> = None;

    for group in groups {
        let break_before = group
            .iter()
            .any(|&s| s.is_vowel() || s == Symbol::ShevaNa);
        if break_before && pos > start {
            syllables.push(Syllable {
                start,
                end: pos,
                open: opens(last),
            });
            start = pos;
        }
        for &symbol in group {
            last = Some(symbol);
            pos += 1;
        }
    }
    if pos > start {
        syllables.push(Syllable {
            start,
            end: pos,
            open: opens(last),
        });
    }
    syllables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::Symbol::*;

    fn spans(groups: &[Vec<Symbol>]) -> Vec<(usize, usize, bool)> {
        syllabify(groups)
            .into_iter()
            .map(|s| (s.start, s.end, s.open))
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(syllabify(&[]).is_empty());
    }

    #[test]
    fn test_single_closed_syllable() {
        // mem + patah + sav
        let groups = vec![vec![Mem, Patah], vec![Sav]];
        assert_eq!(spans(&groups), vec![(0, 3, false)]);
    }

    #[test]
    fn test_single_open_syllable() {
        let groups = vec![vec![Mem, HiriqMaleYod]];
        assert_eq!(spans(&groups), vec![(0, 2, true)]);
    }

    #[test]
    fn test_break_before_vowel_and_sheva_na() {
        // bet.dagesh-qal.sheva-na | lamed.hiriq-male-yod
        let groups = vec![vec![Bet, DageshQal, ShevaNa], vec![Lamed, HiriqMaleYod]];
        assert_eq!(spans(&groups), vec![(0, 3, false), (3, 5, true)]);
    }

    #[test]
    fn test_no_break_before_sheva_nah() {
        // yod.hiriq shin.sheva-nah | resh.sheva-na | tsadi.shuruq
        let groups = vec![
            vec![Yod, Hiriq],
            vec![Shin, ShevaNah],
            vec![Resh, ShevaNa],
            vec![Tsadi, Shuruq],
        ];
        assert_eq!(
            spans(&groups),
            vec![(0, 4, false), (4, 6, false), (6, 8, true)]
        );
    }

    #[test]
    fn test_patah_genuvah_closes() {
        // nun.holam-haser | het.patah-genuvah
        let groups = vec![vec![Nun, HolamHaser], vec![Het, PatahGenuvah]];
        assert_eq!(spans(&groups), vec![(0, 2, true), (2, 4, false)]);
    }

    #[test]
    fn test_spans_partition() {
        let groups = vec![
            vec![He, QamatsGadol],
            vec![Resh, Tsere],
            vec![Ayin, PatahGenuvah],
        ];
        let sylls = syllabify(&groups);
        let total: usize = groups.iter().map(Vec::len).sum();
        assert_eq!(sylls.first().unwrap().start, 0);
        assert_eq!(sylls.last().unwrap().end, total);
        for pair in sylls.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
