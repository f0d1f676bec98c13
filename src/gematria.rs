//! Gematria and divine-name detection
//!
//! Two word-level utilities that ride along with the parser: the
//! traditional numerical value of a word, and detection of the seven
//! divine names (shemot), which carry printing obligations in Jewish
//! practice and which corpus tooling often needs to filter or mark.

use crate::codepoints::Letter;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the seven divine names in pointed text
///
/// The pattern admits the common pointing variations (optional dagesh,
/// hataf vowels, plene/defective holam) seen across Tanakh editions.
static RE_SHEMOT: Lazy<Regex> = Lazy::new(|| {
    let patterns = [
        // Shem Elokah
        "\u{05D0}\u{05B1}?\u{05DC}\u{05D5}?\u{05B9}\u{05D4}",
        // Shem Adnuth
        "\u{05D0}.?\u{05D3}\u{05D5}?\u{05B9}\u{05E0}[\u{05B8}\u{05B7}]\u{05D9}$",
        // Shem HaVayah
        "\u{05D9}\u{05BC}?[\u{05B0}\u{05B1}\u{05B2}]?\u{05D4}\u{05B9}?\u{05D5}[\u{05B8}\u{05B4}]\u{05D4}",
        // Shakai
        "([^\u{05D9}]|^)\u{05E9}\u{05C1}[\u{05B7}\u{05B8}]\u{05D3}\u{05BC}?[\u{05B8}\u{05B7}]\u{05D9}$",
        // Kel
        "^\u{05D0}\u{05B5}\u{05DC}.?$",
        // Kah
        "^\u{05D9}\u{05B8}\u{05D4}\u{05BC}$",
        // Tzvakot
        "^\u{05E6}\u{05B0}\u{05D1}\u{05B8}\u{05D0}\u{05D5}\u{05B9}\u{05EA}$",
    ];
    Regex::new(&format!("({})", patterns.join(")|("))).expect("shemot pattern compiles")
});

/// The numerical value of a Hebrew string
///
/// Letters outside the Hebrew consonant range (and all niqqud) contribute
/// nothing; final forms share their base letter's value.
///
/// # Example
///
/// ```
/// use hebphonics::gematria;
///
/// assert_eq!(gematria("\u{05E9}\u{05B8}\u{05DC}\u{05D5}\u{05B9}\u{05DD}"), 376);
/// ```
pub fn gematria(text: &str) -> u32 {
    text.chars()
        .filter_map(Letter::from_char)
        .map(Letter::value)
        .sum()
}

/// True when the text contains one of the seven divine names
///
/// # Example
///
/// ```
/// use hebphonics::is_shemot;
///
/// assert!(is_shemot("\u{05D0}\u{05B5}\u{05DC}"));
/// assert!(!is_shemot("\u{05D0}\u{05B5}\u{05DC}\u{05B7}\u{05D9}"));
/// ```
pub fn is_shemot(text: &str) -> bool {
    RE_SHEMOT.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gematria_shalom() {
        // shin (300) + lamed (30) + vav (6) + final mem (40)
        assert_eq!(gematria("\u{05E9}\u{05B8}\u{05DC}\u{05D5}\u{05B9}\u{05DD}"), 376);
    }

    #[test]
    fn test_gematria_ignores_niqqud() {
        assert_eq!(
            gematria("\u{05D0}\u{05B7}"),
            gematria("\u{05D0}")
        );
    }

    #[test]
    fn test_gematria_final_forms() {
        assert_eq!(gematria("\u{05DD}"), gematria("\u{05DE}"));
    }

    #[test]
    fn test_shemot_kel() {
        assert!(is_shemot("\u{05D0}\u{05B5}\u{05DC}"));
        // a suffix disqualifies the two-letter name
        assert!(!is_shemot("\u{05D0}\u{05B5}\u{05DC}\u{05B7}\u{05D9}"));
    }

    #[test]
    fn test_shemot_kah() {
        assert!(is_shemot("\u{05D9}\u{05B8}\u{05D4}\u{05BC}"));
    }

    #[test]
    fn test_shemot_plain_word() {
        // shalom is not a divine name
        assert!(!is_shemot("\u{05E9}\u{05B8}\u{05DC}\u{05D5}\u{05B9}\u{05DD}"));
    }
}
