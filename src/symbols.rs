//! Grammatical symbols
//!
//! The closed set of named grammatical roles a Hebrew code point can play:
//! letters (with hard/soft and mapiq distinctions), classified niqqud
//! (dagesh-qal vs dagesh-hazaq, sheva-na vs sheva-nah, the male forms, ...)
//! and the unclassified fallbacks used when context cannot disambiguate.
//!
//! Symbols know their kebab-case names, their vowel-length class, and how to
//! re-emit themselves as canonical Unicode, so a symbol sequence can be
//! turned back into pointed text.

use crate::codepoints::{
    DAGESH_OR_MAPIQ, HATAF_PATAH, HATAF_QAMATS, HATAF_SEGOL, HIRIQ, HOLAM, PATAH, QAMATS, QUBUTS,
    SEGOL, SHEVA, SHIN_DOT, SIN_DOT, TSERE,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named grammatical symbol
///
/// Letters come first, then niqqud grouped by base vowel. The bare `Dagesh`,
/// `Sheva`, `Qamats`, and `Holam` variants are unclassified fallbacks: they
/// are only emitted when context is insufficient to disambiguate, and a
/// diagnostic flag accompanies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symbol {
    // --- letters ---
    /// Silent alef
    Alef,
    /// Alef with a mapiq (rare; pronounced)
    MapiqAlef,
    /// Bet with dagesh (/b/)
    Bet,
    /// Bet without dagesh (/v/)
    Vet,
    /// Gimel
    Gimel,
    /// Dalet
    Dalet,
    /// He
    He,
    /// Final he with mapiq (pronounced)
    MapiqHe,
    /// Consonantal vav
    Vav,
    /// Zayin
    Zayin,
    /// Het
    Het,
    /// Tet
    Tet,
    /// Yod
    Yod,
    /// Kaf with dagesh (/k/)
    Kaf,
    /// Final kaf with dagesh
    KafSofit,
    /// Kaf without dagesh (/kh/)
    Khaf,
    /// Final kaf without dagesh
    KhafSofit,
    /// Lamed
    Lamed,
    /// Mem
    Mem,
    /// Final mem
    MemSofit,
    /// Nun
    Nun,
    /// Final nun
    NunSofit,
    /// Samekh
    Samekh,
    /// Ayin
    Ayin,
    /// Pe with dagesh (/p/)
    Pe,
    /// Final pe with dagesh
    PeSofit,
    /// Pe without dagesh (/f/)
    Fe,
    /// Final pe without dagesh
    FeSofit,
    /// Tsadi
    Tsadi,
    /// Final tsadi
    TsadiSofit,
    /// Qof
    Qof,
    /// Resh
    Resh,
    /// Shin (shin dot)
    Shin,
    /// Sin (sin dot)
    Sin,
    /// Tav with dagesh (/t/)
    Tav,
    /// Tav without dagesh (/s/ in the Ashkenazi reading this crate names by)
    Sav,

    // --- dagesh ---
    /// Unclassified dagesh (fallback)
    Dagesh,
    /// Plosive marker in a BGDKFT letter
    DageshQal,
    /// Doubling dagesh
    DageshHazaq,

    // --- sheva ---
    /// Unclassified sheva (fallback)
    Sheva,
    /// Voiced sheva
    ShevaNa,
    /// Silent sheva
    ShevaNah,

    // --- hiriq ---
    /// Short hiriq
    Hiriq,
    /// Hiriq followed by a mater yod
    HiriqMaleYod,

    // --- tsere ---
    /// Tsere
    Tsere,
    /// Tsere followed by a mater alef
    TsereMaleAlef,
    /// Tsere followed by a mater he
    TsereMaleHe,
    /// Tsere followed by a mater yod
    TsereMaleYod,

    // --- segol ---
    /// Segol
    Segol,
    /// Segol followed by a mater alef
    SegolMaleAlef,
    /// Segol followed by a mater he
    SegolMaleHe,
    /// Segol followed by a mater yod
    SegolMaleYod,
    /// Hataf segol
    HatafSegol,

    // --- patah ---
    /// Patah
    Patah,
    /// Patah followed by a mater alef
    PatahMaleAlef,
    /// Patah followed by a mater he
    PatahMaleHe,
    /// Terminal patah pronounced before its het/ayin/mapiq-he
    PatahGenuvah,
    /// Hataf patah
    HatafPatah,

    // --- qamats ---
    /// Unclassified qamats (fallback)
    Qamats,
    /// Long qamats (/a/)
    QamatsGadol,
    /// Qamats followed by a mater alef
    QamatsMaleAlef,
    /// Qamats followed by a mater he
    QamatsMaleHe,
    /// Short qamats (/o/)
    QamatsQatan,
    /// Hataf qamats
    HatafQamats,

    // --- holam ---
    /// Unclassified holam (fallback)
    Holam,
    /// Holam without a mater
    HolamHaser,
    /// Holam followed by a mater alef
    HolamMaleAlef,
    /// Holam followed by a mater he
    HolamMaleHe,
    /// Holam written on a vav
    HolamMaleVav,

    // --- qubuts / shuruq ---
    /// Qubuts
    Qubuts,
    /// Shuruq (vav with dagesh acting as /u/)
    Shuruq,
}

/// Length class of a classified vowel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VowelLength {
    /// Long vowels
    Long,
    /// Short vowels
    Short,
    /// Hataf (composite) vowels
    Hataf,
}

impl Symbol {
    /// The kebab-case name of this symbol
    pub fn name(self) -> &'static str {
        use Symbol::*;
        match self {
            Alef => "alef",
            MapiqAlef => "mapiq-alef",
            Bet => "bet",
            Vet => "vet",
            Gimel => "gimel",
            Dalet => "dalet",
            He => "he",
            MapiqHe => "mapiq-he",
            Vav => "vav",
            Zayin => "zayin",
            Het => "het",
            Tet => "tet",
            Yod => "yod",
            Kaf => "kaf",
            KafSofit => "kaf-sofit",
            Khaf => "khaf",
            KhafSofit => "khaf-sofit",
            Lamed => "lamed",
            Mem => "mem",
            MemSofit => "mem-sofit",
            Nun => "nun",
            NunSofit => "nun-sofit",
            Samekh => "samekh",
            Ayin => "ayin",
            Pe => "pe",
            PeSofit => "pe-sofit",
            Fe => "fe",
            FeSofit => "fe-sofit",
            Tsadi => "tsadi",
            TsadiSofit => "tsadi-sofit",
            Qof => "qof",
            Resh => "resh",
            Shin => "shin",
            Sin => "sin",
            Tav => "tav",
            Sav => "sav",
            Dagesh => "dagesh",
            DageshQal => "dagesh-qal",
            DageshHazaq => "dagesh-hazaq",
            Sheva => "sheva",
            ShevaNa => "sheva-na",
            ShevaNah => "sheva-nah",
            Hiriq => "hiriq",
            HiriqMaleYod => "hiriq-male-yod",
            Tsere => "tsere",
            TsereMaleAlef => "tsere-male-alef",
            TsereMaleHe => "tsere-male-he",
            TsereMaleYod => "tsere-male-yod",
            Segol => "segol",
            SegolMaleAlef => "segol-male-alef",
            SegolMaleHe => "segol-male-he",
            SegolMaleYod => "segol-male-yod",
            HatafSegol => "hataf-segol",
            Patah => "patah",
            PatahMaleAlef => "patah-male-alef",
            PatahMaleHe => "patah-male-he",
            PatahGenuvah => "patah-genuvah",
            HatafPatah => "hataf-patah",
            Qamats => "qamats",
            QamatsGadol => "qamats-gadol",
            QamatsMaleAlef => "qamats-male-alef",
            QamatsMaleHe => "qamats-male-he",
            QamatsQatan => "qamats-qatan",
            HatafQamats => "hataf-qamats",
            Holam => "holam",
            HolamHaser => "holam-haser",
            HolamMaleAlef => "holam-male-alef",
            HolamMaleHe => "holam-male-he",
            HolamMaleVav => "holam-male-vav",
            Qubuts => "qubuts",
            Shuruq => "shuruq",
        }
    }

    /// True for letter symbols
    pub fn is_letter(self) -> bool {
        use Symbol::*;
        matches!(
            self,
            Alef | MapiqAlef
                | Bet
                | Vet
                | Gimel
                | Dalet
                | He
                | MapiqHe
                | Vav
                | Zayin
                | Het
                | Tet
                | Yod
                | Kaf
                | KafSofit
                | Khaf
                | KhafSofit
                | Lamed
                | Mem
                | MemSofit
                | Nun
                | NunSofit
                | Samekh
                | Ayin
                | Pe
                | PeSofit
                | Fe
                | FeSofit
                | Tsadi
                | TsadiSofit
                | Qof
                | Resh
                | Shin
                | Sin
                | Tav
                | Sav
        )
    }

    /// True for vowel symbols (every niqqud except the dagesh and sheva
    /// families); the unclassified `qamats` and `holam` fallbacks count
    pub fn is_vowel(self) -> bool {
        use Symbol::*;
        matches!(
            self,
            Hiriq | HiriqMaleYod
                | Tsere
                | TsereMaleAlef
                | TsereMaleHe
                | TsereMaleYod
                | Segol
                | SegolMaleAlef
                | SegolMaleHe
                | SegolMaleYod
                | HatafSegol
                | Patah
                | PatahMaleAlef
                | PatahMaleHe
                | PatahGenuvah
                | HatafPatah
                | Qamats
                | QamatsGadol
                | QamatsMaleAlef
                | QamatsMaleHe
                | QamatsQatan
                | HatafQamats
                | Holam
                | HolamHaser
                | HolamMaleAlef
                | HolamMaleHe
                | HolamMaleVav
                | Qubuts
                | Shuruq
        )
    }

    /// The length class of a classified vowel
    ///
    /// Unclassified fallbacks (`qamats`, `holam`) and non-vowels return
    /// `None`: a sheva next to an unclassified qamats must not be decided by
    /// a length that is not known.
    pub fn vowel_length(self) -> Option<VowelLength> {
        use Symbol::*;
        Some(match self {
            QamatsGadol | QamatsMaleAlef | QamatsMaleHe => VowelLength::Long,
            Tsere | TsereMaleAlef | TsereMaleHe | TsereMaleYod => VowelLength::Long,
            HiriqMaleYod => VowelLength::Long,
            HolamHaser | HolamMaleAlef | HolamMaleHe | HolamMaleVav => VowelLength::Long,
            Shuruq => VowelLength::Long,
            Hiriq | Segol | SegolMaleAlef | SegolMaleHe | SegolMaleYod => VowelLength::Short,
            Patah | PatahMaleAlef | PatahMaleHe | PatahGenuvah => VowelLength::Short,
            Qubuts | QamatsQatan => VowelLength::Short,
            HatafSegol | HatafPatah | HatafQamats => VowelLength::Hataf,
            _ => return None,
        })
    }

    /// The canonical Unicode rendition of this symbol
    ///
    /// Male vowels re-emit their point followed by the absorbed mater
    /// letter; `shuruq` re-emits vav + dagesh; `holam-male-vav` re-emits
    /// vav + holam; the mapiq letters re-emit letter + dagesh point.
    pub fn to_chars(self) -> &'static [char] {
        use Symbol::*;
        match self {
            Alef => &['\u{05D0}'],
            MapiqAlef => &['\u{05D0}', DAGESH_OR_MAPIQ],
            Bet | Vet => &['\u{05D1}'],
            Gimel => &['\u{05D2}'],
            Dalet => &['\u{05D3}'],
            He => &['\u{05D4}'],
            MapiqHe => &['\u{05D4}', DAGESH_OR_MAPIQ],
            Vav => &['\u{05D5}'],
            Zayin => &['\u{05D6}'],
            Het => &['\u{05D7}'],
            Tet => &['\u{05D8}'],
            Yod => &['\u{05D9}'],
            Kaf | Khaf => &['\u{05DB}'],
            KafSofit | KhafSofit => &['\u{05DA}'],
            Lamed => &['\u{05DC}'],
            Mem => &['\u{05DE}'],
            MemSofit => &['\u{05DD}'],
            Nun => &['\u{05E0}'],
            NunSofit => &['\u{05DF}'],
            Samekh => &['\u{05E1}'],
            Ayin => &['\u{05E2}'],
            Pe | Fe => &['\u{05E4}'],
            PeSofit | FeSofit => &['\u{05E3}'],
            Tsadi => &['\u{05E6}'],
            TsadiSofit => &['\u{05E5}'],
            Qof => &['\u{05E7}'],
            Resh => &['\u{05E8}'],
            Shin => &['\u{05E9}', SHIN_DOT],
            Sin => &['\u{05E9}', SIN_DOT],
            Tav | Sav => &['\u{05EA}'],
            Dagesh | DageshQal | DageshHazaq => &[DAGESH_OR_MAPIQ],
            Sheva | ShevaNa | ShevaNah => &[SHEVA],
            Hiriq => &[HIRIQ],
            HiriqMaleYod => &[HIRIQ, '\u{05D9}'],
            Tsere => &[TSERE],
            TsereMaleAlef => &[TSERE, '\u{05D0}'],
            TsereMaleHe => &[TSERE, '\u{05D4}'],
            TsereMaleYod => &[TSERE, '\u{05D9}'],
            Segol => &[SEGOL],
            SegolMaleAlef => &[SEGOL, '\u{05D0}'],
            SegolMaleHe => &[SEGOL, '\u{05D4}'],
            SegolMaleYod => &[SEGOL, '\u{05D9}'],
            HatafSegol => &[HATAF_SEGOL],
            Patah | PatahGenuvah => &[PATAH],
            PatahMaleAlef => &[PATAH, '\u{05D0}'],
            PatahMaleHe => &[PATAH, '\u{05D4}'],
            HatafPatah => &[HATAF_PATAH],
            Qamats | QamatsGadol | QamatsQatan => &[QAMATS],
            QamatsMaleAlef => &[QAMATS, '\u{05D0}'],
            QamatsMaleHe => &[QAMATS, '\u{05D4}'],
            HatafQamats => &[HATAF_QAMATS],
            Holam | HolamHaser => &[HOLAM],
            HolamMaleAlef => &[HOLAM, '\u{05D0}'],
            HolamMaleHe => &[HOLAM, '\u{05D4}'],
            HolamMaleVav => &['\u{05D5}', HOLAM],
            Qubuts => &[QUBUTS],
            Shuruq => &['\u{05D5}', DAGESH_OR_MAPIQ],
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Letters with the same sound or manner of articulation
///
/// A sheva before a letter from its own group is voiced so the first of the
/// pair is not swallowed in pronunciation.
const SIMILAR_LETTERS: &[&[Symbol]] = &[
    &[Symbol::Alef, Symbol::MapiqAlef, Symbol::Ayin],
    &[Symbol::Vet, Symbol::Vav],
    &[Symbol::Dalet, Symbol::Tet, Symbol::Tav],
    &[Symbol::He, Symbol::MapiqHe],
    &[Symbol::Het, Symbol::Khaf, Symbol::KhafSofit],
    &[Symbol::Kaf, Symbol::KafSofit, Symbol::Qof],
    &[Symbol::Mem, Symbol::MemSofit],
    &[Symbol::Nun, Symbol::NunSofit],
    &[Symbol::Samekh, Symbol::Sin, Symbol::Sav],
    &[Symbol::Pe, Symbol::PeSofit],
    &[Symbol::Fe, Symbol::FeSofit],
    &[Symbol::Tsadi, Symbol::TsadiSofit],
];

/// True when two letter symbols are identical or phonetically similar
pub fn is_similar(a: Symbol, b: Symbol) -> bool {
    a == b
        || SIMILAR_LETTERS
            .iter()
            .any(|group| group.contains(&a) && group.contains(&b))
}

/// Re-emit a symbol sequence as canonical pointed Unicode
///
/// This is the inverse direction of parsing: rendering the symbols of a
/// parse reproduces the canonical form of the word that produced them.
pub fn render(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .flat_map(|s| s.to_chars().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Symbol::DageshQal.name(), "dagesh-qal");
        assert_eq!(Symbol::HiriqMaleYod.name(), "hiriq-male-yod");
        assert_eq!(Symbol::MapiqHe.name(), "mapiq-he");
        assert_eq!(Symbol::Shuruq.to_string(), "shuruq");
    }

    #[test]
    fn test_serde_names_match() {
        let json = serde_json::to_string(&Symbol::TsereMaleAlef).unwrap();
        assert_eq!(json, "\"tsere-male-alef\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Symbol::TsereMaleAlef);
    }

    #[test]
    fn test_vowel_lengths() {
        assert_eq!(Symbol::QamatsGadol.vowel_length(), Some(VowelLength::Long));
        assert_eq!(Symbol::Shuruq.vowel_length(), Some(VowelLength::Long));
        assert_eq!(Symbol::Hiriq.vowel_length(), Some(VowelLength::Short));
        assert_eq!(Symbol::QamatsQatan.vowel_length(), Some(VowelLength::Short));
        assert_eq!(Symbol::HatafPatah.vowel_length(), Some(VowelLength::Hataf));
        // unclassified fallbacks have no known length
        assert_eq!(Symbol::Qamats.vowel_length(), None);
        assert_eq!(Symbol::ShevaNa.vowel_length(), None);
    }

    #[test]
    fn test_vowel_and_letter_partition() {
        assert!(Symbol::Bet.is_letter());
        assert!(!Symbol::Bet.is_vowel());
        assert!(Symbol::Qamats.is_vowel());
        assert!(!Symbol::ShevaNa.is_vowel());
        assert!(!Symbol::DageshHazaq.is_vowel());
    }

    #[test]
    fn test_similar_letters() {
        assert!(is_similar(Symbol::Vet, Symbol::Vav));
        assert!(is_similar(Symbol::He, Symbol::MapiqHe));
        assert!(is_similar(Symbol::Lamed, Symbol::Lamed));
        assert!(!is_similar(Symbol::Dalet, Symbol::Resh));
    }

    #[test]
    fn test_render_shalom() {
        // shin + qamats + lamed + holam-male-vav + mem-sofit
        let symbols = [
            Symbol::Shin,
            Symbol::QamatsGadol,
            Symbol::Lamed,
            Symbol::HolamMaleVav,
            Symbol::MemSofit,
        ];
        assert_eq!(render(&symbols), "\u{05E9}\u{05C1}\u{05B8}\u{05DC}\u{05D5}\u{05B9}\u{05DD}");
    }
}
