//! Hebrew Unicode inventory and code-point classification
//!
//! Pre-computed classification of the Hebrew Unicode ranges into the
//! categories the rest of the pipeline works with: consonant letters,
//! niqqud vowels, hataf vowels, sheva, dagesh, the shin/sin dots, maqaf,
//! word separators, and cantillation marks.
//!
//! The following Unicode charts cover the symbols handled here:
//! - [Hebrew](https://www.unicode.org/charts/PDF/U0590.pdf)
//! - [Alphabetic Presentation Forms](https://www.unicode.org/charts/PDF/UFB00.pdf)
//! - [General Punctuation](https://www.unicode.org/charts/PDF/U2000.pdf)

// ============================================================================
// Code Points
// ============================================================================

/// HEBREW POINT SHEVA
pub const SHEVA: char = '\u{05B0}';
/// HEBREW POINT HATAF SEGOL
pub const HATAF_SEGOL: char = '\u{05B1}';
/// HEBREW POINT HATAF PATAH
pub const HATAF_PATAH: char = '\u{05B2}';
/// HEBREW POINT HATAF QAMATS
pub const HATAF_QAMATS: char = '\u{05B3}';
/// HEBREW POINT HIRIQ
pub const HIRIQ: char = '\u{05B4}';
/// HEBREW POINT TSERE
pub const TSERE: char = '\u{05B5}';
/// HEBREW POINT SEGOL
pub const SEGOL: char = '\u{05B6}';
/// HEBREW POINT PATAH
pub const PATAH: char = '\u{05B7}';
/// HEBREW POINT QAMATS
pub const QAMATS: char = '\u{05B8}';
/// HEBREW POINT HOLAM
pub const HOLAM: char = '\u{05B9}';
/// HEBREW POINT HOLAM HASER FOR VAV
pub const HOLAM_HASER_FOR_VAV: char = '\u{05BA}';
/// HEBREW POINT QUBUTS
pub const QUBUTS: char = '\u{05BB}';
/// HEBREW POINT DAGESH OR MAPIQ
pub const DAGESH_OR_MAPIQ: char = '\u{05BC}';
/// HEBREW POINT METEG
pub const METEG: char = '\u{05BD}';
/// HEBREW PUNCTUATION MAQAF
pub const MAQAF: char = '\u{05BE}';
/// HEBREW POINT RAFE
pub const RAFE: char = '\u{05BF}';
/// HEBREW PUNCTUATION PASEQ
pub const PASEQ: char = '\u{05C0}';
/// HEBREW POINT SHIN DOT
pub const SHIN_DOT: char = '\u{05C1}';
/// HEBREW POINT SIN DOT
pub const SIN_DOT: char = '\u{05C2}';
/// HEBREW PUNCTUATION SOF PASUQ
pub const SOF_PASUQ: char = '\u{05C3}';
/// HEBREW PUNCTUATION NUN HAFUKHA
pub const NUN_HAFUKHA: char = '\u{05C6}';
/// HEBREW POINT QAMATS QATAN
pub const QAMATS_QATAN: char = '\u{05C7}';

// ============================================================================
// Letters
// ============================================================================

/// A Hebrew consonant letter identity (final forms are distinct)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Letter {
    /// א
    Alef,
    /// ב
    Bet,
    /// ג
    Gimel,
    /// ד
    Dalet,
    /// ה
    He,
    /// ו
    Vav,
    /// ז
    Zayin,
    /// ח
    Het,
    /// ט
    Tet,
    /// י
    Yod,
    /// כ
    Kaf,
    /// ך
    KafSofit,
    /// ל
    Lamed,
    /// מ
    Mem,
    /// ם
    MemSofit,
    /// נ
    Nun,
    /// ן
    NunSofit,
    /// ס
    Samekh,
    /// ע
    Ayin,
    /// פ
    Pe,
    /// ף
    PeSofit,
    /// צ
    Tsadi,
    /// ץ
    TsadiSofit,
    /// ק
    Qof,
    /// ר
    Resh,
    /// ש
    Shin,
    /// ת
    Tav,
}

/// Phonological class of a consonant letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LetterClass {
    /// Takes dagesh-qal: bet, gimel, dalet, kaf, pe, tav
    Bgdkft,
    /// Pronounced deep in the throat: alef, he, het, ayin
    Guttural,
    /// Resh: rejects gemination like the gutturals
    SemiGuttural,
    /// Everything else
    Plain,
}

impl Letter {
    /// Map a Unicode code point in U+05D0..=U+05EA to its letter identity
    pub fn from_char(c: char) -> Option<Letter> {
        use Letter::*;
        Some(match c {
            '\u{05D0}' => Alef,
            '\u{05D1}' => Bet,
            '\u{05D2}' => Gimel,
            '\u{05D3}' => Dalet,
            '\u{05D4}' => He,
            '\u{05D5}' => Vav,
            '\u{05D6}' => Zayin,
            '\u{05D7}' => Het,
            '\u{05D8}' => Tet,
            '\u{05D9}' => Yod,
            '\u{05DA}' => KafSofit,
            '\u{05DB}' => Kaf,
            '\u{05DC}' => Lamed,
            '\u{05DD}' => MemSofit,
            '\u{05DE}' => Mem,
            '\u{05DF}' => NunSofit,
            '\u{05E0}' => Nun,
            '\u{05E1}' => Samekh,
            '\u{05E2}' => Ayin,
            '\u{05E3}' => PeSofit,
            '\u{05E4}' => Pe,
            '\u{05E5}' => TsadiSofit,
            '\u{05E6}' => Tsadi,
            '\u{05E7}' => Qof,
            '\u{05E8}' => Resh,
            '\u{05E9}' => Shin,
            '\u{05EA}' => Tav,
            _ => return None,
        })
    }

    /// The letter's Unicode code point
    pub fn to_char(self) -> char {
        use Letter::*;
        match self {
            Alef => '\u{05D0}',
            Bet => '\u{05D1}',
            Gimel => '\u{05D2}',
            Dalet => '\u{05D3}',
            He => '\u{05D4}',
            Vav => '\u{05D5}',
            Zayin => '\u{05D6}',
            Het => '\u{05D7}',
            Tet => '\u{05D8}',
            Yod => '\u{05D9}',
            KafSofit => '\u{05DA}',
            Kaf => '\u{05DB}',
            Lamed => '\u{05DC}',
            MemSofit => '\u{05DD}',
            Mem => '\u{05DE}',
            NunSofit => '\u{05DF}',
            Nun => '\u{05E0}',
            Samekh => '\u{05E1}',
            Ayin => '\u{05E2}',
            PeSofit => '\u{05E3}',
            Pe => '\u{05E4}',
            TsadiSofit => '\u{05E5}',
            Tsadi => '\u{05E6}',
            Qof => '\u{05E7}',
            Resh => '\u{05E8}',
            Shin => '\u{05E9}',
            Tav => '\u{05EA}',
        }
    }

    /// The letter's phonological class
    pub fn class(self) -> LetterClass {
        use Letter::*;
        match self {
            Bet | Gimel | Dalet | Kaf | KafSofit | Pe | PeSofit | Tav => LetterClass::Bgdkft,
            Alef | He | Het | Ayin => LetterClass::Guttural,
            Resh => LetterClass::SemiGuttural,
            _ => LetterClass::Plain,
        }
    }

    /// True for the six letters that take a dagesh-qal
    #[inline]
    pub fn is_bgdkft(self) -> bool {
        self.class() == LetterClass::Bgdkft
    }

    /// The gematria (numerical) value; final forms share their base value
    pub fn value(self) -> u32 {
        use Letter::*;
        match self {
            Alef => 1,
            Bet => 2,
            Gimel => 3,
            Dalet => 4,
            He => 5,
            Vav => 6,
            Zayin => 7,
            Het => 8,
            Tet => 9,
            Yod => 10,
            Kaf | KafSofit => 20,
            Lamed => 30,
            Mem | MemSofit => 40,
            Nun | NunSofit => 50,
            Samekh => 60,
            Ayin => 70,
            Pe | PeSofit => 80,
            Tsadi | TsadiSofit => 90,
            Qof => 100,
            Resh => 200,
            Shin => 300,
            Tav => 400,
        }
    }
}

// ============================================================================
// Niqqud
// ============================================================================

/// A raw niqqud point attached to a cluster's vowel slot
///
/// Sheva lives in the same slot as the vowels: a cluster carries at most one
/// of these. The hataf points are single values, never split into sheva +
/// short vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Niqqud {
    /// U+05B0
    Sheva,
    /// U+05B4
    Hiriq,
    /// U+05B5
    Tsere,
    /// U+05B6
    Segol,
    /// U+05B7
    Patah,
    /// U+05B8
    Qamats,
    /// U+05C7 (pre-classified as qamats-qatan by the text itself)
    QamatsQatan,
    /// U+05B9
    Holam,
    /// U+05BA, a holam that must stay holam-haser on its vav
    HolamHaserForVav,
    /// U+05BB
    Qubuts,
    /// U+05B1
    HatafSegol,
    /// U+05B2
    HatafPatah,
    /// U+05B3
    HatafQamats,
}

impl Niqqud {
    /// Map a niqqud code point to its raw value
    pub fn from_char(c: char) -> Option<Niqqud> {
        Some(match c {
            SHEVA => Niqqud::Sheva,
            HIRIQ => Niqqud::Hiriq,
            TSERE => Niqqud::Tsere,
            SEGOL => Niqqud::Segol,
            PATAH => Niqqud::Patah,
            QAMATS => Niqqud::Qamats,
            QAMATS_QATAN => Niqqud::QamatsQatan,
            HOLAM => Niqqud::Holam,
            HOLAM_HASER_FOR_VAV => Niqqud::HolamHaserForVav,
            QUBUTS => Niqqud::Qubuts,
            HATAF_SEGOL => Niqqud::HatafSegol,
            HATAF_PATAH => Niqqud::HatafPatah,
            HATAF_QAMATS => Niqqud::HatafQamats,
            _ => return None,
        })
    }

    /// The canonical code point for this niqqud
    ///
    /// The qamats-qatan point and the vav-specific holam fold into the plain
    /// qamats and holam points; the canonical form keeps the distinction in
    /// the grammatical symbols, not the raw text.
    pub fn to_char(self) -> char {
        match self {
            Niqqud::Sheva => SHEVA,
            Niqqud::Hiriq => HIRIQ,
            Niqqud::Tsere => TSERE,
            Niqqud::Segol => SEGOL,
            Niqqud::Patah => PATAH,
            Niqqud::Qamats | Niqqud::QamatsQatan => QAMATS,
            Niqqud::Holam | Niqqud::HolamHaserForVav => HOLAM,
            Niqqud::Qubuts => QUBUTS,
            Niqqud::HatafSegol => HATAF_SEGOL,
            Niqqud::HatafPatah => HATAF_PATAH,
            Niqqud::HatafQamats => HATAF_QAMATS,
        }
    }

    /// True for the three hataf (composite) vowels
    #[inline]
    pub fn is_hataf(self) -> bool {
        matches!(
            self,
            Niqqud::HatafSegol | Niqqud::HatafPatah | Niqqud::HatafQamats
        )
    }

    /// True for sheva
    #[inline]
    pub fn is_sheva(self) -> bool {
        self == Niqqud::Sheva
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Classification of a single code point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodepointClass {
    /// A consonant letter
    Letter(Letter),
    /// A plain niqqud vowel point
    Vowel(Niqqud),
    /// A hataf (composite) vowel point
    Hataf(Niqqud),
    /// The sheva point
    Sheva,
    /// The dagesh-or-mapiq point
    Dagesh,
    /// The shin dot
    ShinDot,
    /// The sin dot
    SinDot,
    /// Maqaf, the intra-phrase hyphen
    Maqaf,
    /// Whitespace or punctuation: a word boundary
    Whitespace,
    /// A cantillation mark or other stripped point (meteg, rafe, paseq, ...)
    Cantillation,
    /// A format control (ZWJ/ZWNJ, bidi marks, CGJ): dropped without effect
    Control,
    /// Anything unrecognized: dropped with a diagnostic
    Other,
}

/// Classify one code point
///
/// Punctuation (ASCII punctuation, solidus, geresh/gershayim) classifies as
/// [`CodepointClass::Whitespace`] because it plays the same word-boundary
/// role.
pub fn classify(c: char) -> CodepointClass {
    if let Some(letter) = Letter::from_char(c) {
        return CodepointClass::Letter(letter);
    }
    if let Some(point) = Niqqud::from_char(c) {
        return match point {
            Niqqud::Sheva => CodepointClass::Sheva,
            p if p.is_hataf() => CodepointClass::Hataf(p),
            p => CodepointClass::Vowel(p),
        };
    }
    match c {
        DAGESH_OR_MAPIQ => CodepointClass::Dagesh,
        SHIN_DOT => CodepointClass::ShinDot,
        SIN_DOT => CodepointClass::SinDot,
        MAQAF => CodepointClass::Maqaf,
        '\u{0591}'..='\u{05AF}' | METEG | RAFE | PASEQ | SOF_PASUQ | NUN_HAFUKHA => {
            CodepointClass::Cantillation
        }
        '\u{034F}' | '\u{200C}'..='\u{200F}' => CodepointClass::Control,
        // Geresh and gershayim punctuate abbreviations; solidus divides
        // morphemes in some Tanakh sources.
        '\u{05F3}' | '\u{05F4}' => CodepointClass::Whitespace,
        c if c.is_whitespace() || c.is_ascii_punctuation() => CodepointClass::Whitespace,
        _ => CodepointClass::Other,
    }
}

/// Decompose a Hebrew presentation form (U+FB1D..=U+FB4F) into base letters
/// and points
///
/// Returns `None` for code points that are not presentation forms.
pub fn decompose(c: char) -> Option<&'static [char]> {
    Some(match c {
        '\u{FB1D}' => &['\u{05D9}', HIRIQ],                    // yod + hiriq
        '\u{FB20}' => &['\u{05E2}'],                           // alternative ayin
        '\u{FB21}' => &['\u{05D0}'],                           // wide alef
        '\u{FB22}' => &['\u{05D3}'],                           // wide dalet
        '\u{FB23}' => &['\u{05D4}'],                           // wide he
        '\u{FB24}' => &['\u{05DB}'],                           // wide kaf
        '\u{FB25}' => &['\u{05DC}'],                           // wide lamed
        '\u{FB26}' => &['\u{05DD}'],                           // wide final mem
        '\u{FB27}' => &['\u{05E8}'],                           // wide resh
        '\u{FB28}' => &['\u{05EA}'],                           // wide tav
        '\u{FB2A}' => &['\u{05E9}', SHIN_DOT],                 // shin + shin dot
        '\u{FB2B}' => &['\u{05E9}', SIN_DOT],                  // shin + sin dot
        '\u{FB2C}' => &['\u{05E9}', DAGESH_OR_MAPIQ, SHIN_DOT],
        '\u{FB2D}' => &['\u{05E9}', DAGESH_OR_MAPIQ, SIN_DOT],
        '\u{FB2E}' => &['\u{05D0}', PATAH],
        '\u{FB2F}' => &['\u{05D0}', QAMATS],
        '\u{FB30}' => &['\u{05D0}', DAGESH_OR_MAPIQ],
        '\u{FB31}' => &['\u{05D1}', DAGESH_OR_MAPIQ],
        '\u{FB32}' => &['\u{05D2}', DAGESH_OR_MAPIQ],
        '\u{FB33}' => &['\u{05D3}', DAGESH_OR_MAPIQ],
        '\u{FB34}' => &['\u{05D4}', DAGESH_OR_MAPIQ],
        '\u{FB35}' => &['\u{05D5}', DAGESH_OR_MAPIQ],
        '\u{FB36}' => &['\u{05D6}', DAGESH_OR_MAPIQ],
        '\u{FB38}' => &['\u{05D8}', DAGESH_OR_MAPIQ],
        '\u{FB39}' => &['\u{05D9}', DAGESH_OR_MAPIQ],
        '\u{FB3A}' => &['\u{05DA}', DAGESH_OR_MAPIQ],
        '\u{FB3B}' => &['\u{05DB}', DAGESH_OR_MAPIQ],
        '\u{FB3C}' => &['\u{05DC}', DAGESH_OR_MAPIQ],
        '\u{FB3E}' => &['\u{05DE}', DAGESH_OR_MAPIQ],
        '\u{FB40}' => &['\u{05E0}', DAGESH_OR_MAPIQ],
        '\u{FB41}' => &['\u{05E1}', DAGESH_OR_MAPIQ],
        '\u{FB43}' => &['\u{05E3}', DAGESH_OR_MAPIQ],
        '\u{FB44}' => &['\u{05E4}', DAGESH_OR_MAPIQ],
        '\u{FB46}' => &['\u{05E6}', DAGESH_OR_MAPIQ],
        '\u{FB47}' => &['\u{05E7}', DAGESH_OR_MAPIQ],
        '\u{FB48}' => &['\u{05E8}', DAGESH_OR_MAPIQ],
        '\u{FB49}' => &['\u{05E9}', DAGESH_OR_MAPIQ],
        '\u{FB4A}' => &['\u{05EA}', DAGESH_OR_MAPIQ],
        '\u{FB4B}' => &['\u{05D5}', HOLAM],                    // vav + holam
        '\u{FB4C}' => &['\u{05D1}'],                           // bet + rafe
        '\u{FB4D}' => &['\u{05DB}'],                           // kaf + rafe
        '\u{FB4E}' => &['\u{05E4}'],                           // pe + rafe
        '\u{FB4F}' => &['\u{05D0}', '\u{05DC}'],               // alef-lamed ligature
        _ => return None,
    })
}
