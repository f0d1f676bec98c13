//! Cluster tokenizer
//!
//! Second pipeline stage: folds the normalized code-point stream into
//! words of clusters. A cluster is one consonant letter plus its attached
//! diacritics; a new cluster begins at each letter and every following
//! diacritic attaches to it until the next letter or word boundary.
//!
//! Word boundaries are runs of whitespace/punctuation. A maqaf also ends a
//! word but joins it to the next one into a phrase: the left word is
//! flagged `followed_by_maqaf` and stays a separate word for
//! classification.

use crate::codepoints::{CodepointClass, Letter, Niqqud};
use serde::{Deserialize, Serialize};

/// One consonant letter with its attached diacritics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
    /// The consonant identity
    pub letter: Letter,
    /// Dagesh-or-mapiq point present
    pub dagesh: bool,
    /// Shin dot present (meaningful on shin)
    pub shin_dot: bool,
    /// Sin dot present (meaningful on shin)
    pub sin_dot: bool,
    /// The vowel slot: at most one niqqud, sheva included
    pub vowel: Option<Niqqud>,
    /// First cluster of its word
    pub is_first: bool,
    /// Last cluster of its word
    pub is_last: bool,
}

impl Cluster {
    fn new(letter: Letter) -> Self {
        Self {
            letter,
            dagesh: false,
            shin_dot: false,
            sin_dot: false,
            vowel: None,
            is_first: false,
            is_last: false,
        }
    }

    /// True when the cluster carries no dagesh and no vowel slot content
    #[inline]
    pub fn is_bare(&self) -> bool {
        !self.dagesh && self.vowel.is_none()
    }

    /// True when the vowel slot holds a sheva
    #[inline]
    pub fn has_sheva(&self) -> bool {
        self.vowel == Some(Niqqud::Sheva)
    }

    /// Append this cluster's canonical code points to a string
    pub(crate) fn write_canonical(&self, out: &mut String) {
        out.push(self.letter.to_char());
        if self.dagesh {
            out.push(crate::codepoints::DAGESH_OR_MAPIQ);
        }
        if self.shin_dot {
            out.push(crate::codepoints::SHIN_DOT);
        }
        if self.sin_dot {
            out.push(crate::codepoints::SIN_DOT);
        }
        if let Some(vowel) = self.vowel {
            out.push(vowel.to_char());
        }
    }
}

/// One word: a non-empty run of clusters plus word-level flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The clusters, in reading order
    pub clusters: Vec<Cluster>,
    /// The word is joined to the next by a maqaf
    pub followed_by_maqaf: bool,
    /// A sheva and a hataf vowel competed for one vowel slot
    pub ambiguous_sheva_hataf: bool,
    /// Unrecognized code points were dropped around this word
    pub unknown_codepoints: bool,
}

impl Word {
    /// True when no cluster carries any niqqud (vowel, dagesh, or dot)
    pub fn has_no_niqqud(&self) -> bool {
        self.clusters
            .iter()
            .all(|c| c.is_bare() && !c.shin_dot && !c.sin_dot)
    }

    /// The canonical Unicode form of this word
    pub fn canonical(&self) -> String {
        let mut out = String::new();
        for cluster in &self.clusters {
            cluster.write_canonical(&mut out);
        }
        out
    }
}

/// Builder state for the word being assembled
struct WordBuilder {
    clusters: Vec<Cluster>,
    ambiguous_sheva_hataf: bool,
    unknown_codepoints: bool,
}

impl WordBuilder {
    fn new() -> Self {
        Self {
            clusters: Vec::new(),
            ambiguous_sheva_hataf: false,
            unknown_codepoints: false,
        }
    }

    fn attach_vowel(&mut self, vowel: Niqqud) {
        let Some(cluster) = self.clusters.last_mut() else {
            return; // orphan diacritic with no letter to attach to
        };
        match (cluster.vowel, vowel) {
            // a hataf wins over a sheva in either arrival order
            (Some(Niqqud::Sheva), v) if v.is_hataf() => {
                cluster.vowel = Some(v);
                self.ambiguous_sheva_hataf = true;
            }
            (Some(prev), Niqqud::Sheva) if prev.is_hataf() => {
                self.ambiguous_sheva_hataf = true;
            }
            // otherwise the later mark wins the slot
            _ => cluster.vowel = Some(vowel),
        }
    }

    fn finish(&mut self, followed_by_maqaf: bool, pending_unknown: &mut bool) -> Option<Word> {
        if self.clusters.is_empty() {
            // keep the flag for the next word that actually forms
            *pending_unknown |= self.unknown_codepoints;
            self.unknown_codepoints = false;
            return None;
        }
        let mut clusters = std::mem::take(&mut self.clusters);
        clusters.first_mut().unwrap().is_first = true;
        clusters.last_mut().unwrap().is_last = true;
        let word = Word {
            clusters,
            followed_by_maqaf,
            ambiguous_sheva_hataf: std::mem::take(&mut self.ambiguous_sheva_hataf),
            unknown_codepoints: std::mem::take(&mut self.unknown_codepoints) | *pending_unknown,
        };
        *pending_unknown = false;
        Some(word)
    }
}

/// Fold a normalized stream into words of clusters
pub fn tokenize(stream: &[(CodepointClass, char)]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut builder = WordBuilder::new();
    let mut pending_unknown = false;

    for &(class, _) in stream {
        match class {
            CodepointClass::Letter(letter) => builder.clusters.push(Cluster::new(letter)),
            CodepointClass::Dagesh => {
                if let Some(cluster) = builder.clusters.last_mut() {
                    cluster.dagesh = true;
                }
            }
            CodepointClass::ShinDot => {
                if let Some(cluster) = builder.clusters.last_mut() {
                    cluster.shin_dot = true;
                }
            }
            CodepointClass::SinDot => {
                if let Some(cluster) = builder.clusters.last_mut() {
                    cluster.sin_dot = true;
                }
            }
            CodepointClass::Sheva => builder.attach_vowel(Niqqud::Sheva),
            CodepointClass::Vowel(v) | CodepointClass::Hataf(v) => builder.attach_vowel(v),
            CodepointClass::Maqaf => {
                words.extend(builder.finish(true, &mut pending_unknown));
            }
            CodepointClass::Whitespace => {
                words.extend(builder.finish(false, &mut pending_unknown));
            }
            CodepointClass::Other => builder.unknown_codepoints = true,
            CodepointClass::Cantillation | CodepointClass::Control => {}
        }
    }
    if let Some(word) = builder.finish(false, &mut pending_unknown) {
        words.push(word);
    } else if pending_unknown {
        // trailing unknowns with no following word attach to the last word
        if let Some(last) = words.last_mut() {
            last.unknown_codepoints = true;
        }
    }
    words
}

/// The canonical Unicode form of the input
///
/// Normalizes, tokenizes, and re-emits every word in canonical cluster
/// order. Words are joined by a space, or by a maqaf where the input joined
/// them into a phrase.
pub fn canonicalize(text: &str) -> String {
    let words = tokenize(&crate::normalizer::normalize(text));
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            let prev_maqaf = words[i - 1].followed_by_maqaf;
            out.push(if prev_maqaf { crate::codepoints::MAQAF } else { ' ' });
        }
        out.push_str(&word.canonical());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;

    fn words(text: &str) -> Vec<Word> {
        tokenize(&normalize(text))
    }

    #[test]
    fn test_empty() {
        assert!(words("").is_empty());
        assert!(words("   ").is_empty());
    }

    #[test]
    fn test_single_cluster() {
        let ws = words("\u{05D1}\u{05BC}\u{05B0}"); // bet + dagesh + sheva
        assert_eq!(ws.len(), 1);
        let c = &ws[0].clusters[0];
        assert_eq!(c.letter, Letter::Bet);
        assert!(c.dagesh);
        assert!(c.has_sheva());
        assert!(c.is_first && c.is_last);
    }

    #[test]
    fn test_word_split_on_whitespace() {
        let ws = words("\u{05D0}\u{05B7} \u{05D1}\u{05B8}");
        assert_eq!(ws.len(), 2);
        assert!(!ws[0].followed_by_maqaf);
    }

    #[test]
    fn test_maqaf_joins_phrase() {
        let ws = words("\u{05DB}\u{05BC}\u{05B8}\u{05DC}\u{05BE}\u{05D4}\u{05B8}");
        assert_eq!(ws.len(), 2);
        assert!(ws[0].followed_by_maqaf);
        assert!(!ws[1].followed_by_maqaf);
    }

    #[test]
    fn test_sheva_hataf_conflict() {
        // sheva then hataf-patah on the same alef: hataf wins
        let ws = words("\u{05D0}\u{05B0}\u{05B2}");
        assert_eq!(ws[0].clusters[0].vowel, Some(Niqqud::HatafPatah));
        assert!(ws[0].ambiguous_sheva_hataf);

        // reversed arrival order: still the hataf
        let ws = words("\u{05D0}\u{05B2}\u{05B0}");
        assert_eq!(ws[0].clusters[0].vowel, Some(Niqqud::HatafPatah));
        assert!(ws[0].ambiguous_sheva_hataf);
    }

    #[test]
    fn test_unknown_codepoints_flagged() {
        let ws = words("\u{05D0}\u{05B7}\u{05F0}"); // yiddish ligature is unrecognized
        assert_eq!(ws.len(), 1);
        assert!(ws[0].unknown_codepoints);
    }

    #[test]
    fn test_has_no_niqqud() {
        assert!(words("\u{05D0}\u{05D1}")[0].has_no_niqqud());
        assert!(!words("\u{05D0}\u{05B7}")[0].has_no_niqqud());
    }

    #[test]
    fn test_canonicalize_reorders() {
        // vowel typed before dagesh comes out dagesh first
        assert_eq!(
            canonicalize("\u{05D1}\u{05B8}\u{05BC}"),
            "\u{05D1}\u{05BC}\u{05B8}"
        );
    }
}
