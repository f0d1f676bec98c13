//! Integration tests for syllabification
//!
//! Each test checks the syllable spans (as symbol slices) and the
//! open/closed flag of each syllable.

use hebphonics::parse;
use hebphonics::Symbol::{self, *};

/// The syllables of a parse, as (symbols, open) pairs
fn syllables(word: &str) -> Vec<(Vec<Symbol>, bool)> {
    let parsed = parse(word);
    parsed
        .syllables
        .iter()
        .map(|s| (s.symbols(&parsed.symbols).to_vec(), s.open))
        .collect()
}

#[test]
fn test_empty() {
    assert!(parse("").syllables.is_empty());
}

#[test]
fn test_single_letter_closed() {
    assert_eq!(syllables("\u{05D0}"), vec![(vec![Alef], false)]);
}

#[test]
fn test_simple_closed_syllable() {
    // מַת
    assert_eq!(
        syllables("\u{05DE}\u{05B7}\u{05EA}"),
        vec![(vec![Mem, Patah, Sav], false)]
    );
}

#[test]
fn test_simple_open_syllable() {
    // מִי
    assert_eq!(
        syllables("\u{05DE}\u{05B4}\u{05D9}"),
        vec![(vec![Mem, HiriqMaleYod], true)]
    );
}

#[test]
fn test_bereshit_closed_open_closed() {
    // בְּרֵאשִׁית
    assert_eq!(
        syllables(
            "\u{05D1}\u{05BC}\u{05B0}\u{05E8}\u{05B5}\u{05D0}\u{05E9}\u{05C1}\u{05B4}\u{05D9}\u{05EA}"
        ),
        vec![
            (vec![Bet, DageshQal, ShevaNa], false),
            (vec![Resh, TsereMaleAlef], true),
            (vec![Shin, HiriqMaleYod, Sav], false),
        ]
    );
}

#[test]
fn test_bah_single_closed() {
    // בָּהּ: the mapiq-he closes the one syllable
    assert_eq!(
        syllables("\u{05D1}\u{05BC}\u{05B8}\u{05D4}\u{05BC}"),
        vec![(vec![Bet, DageshQal, QamatsGadol, MapiqHe], false)]
    );
}

#[test]
fn test_vayhi_closed_open() {
    // וַיְהִי: the sheva-nah closes the first syllable
    assert_eq!(
        syllables("\u{05D5}\u{05B7}\u{05D9}\u{05B0}\u{05D4}\u{05B4}\u{05D9}"),
        vec![
            (vec![Vav, Patah, Yod, ShevaNah], false),
            (vec![He, HiriqMaleYod], true),
        ]
    );
}

#[test]
fn test_kol_maqaf_single_closed() {
    // כָּל־
    assert_eq!(
        syllables("\u{05DB}\u{05BC}\u{05B8}\u{05DC}\u{05BE}"),
        vec![(vec![Kaf, DageshQal, QamatsQatan, Lamed], false)]
    );
}

#[test]
fn test_tohu_open_open() {
    // תֹהוּ: the vav + dagesh collapses into a shuruq on the he
    assert_eq!(
        syllables("\u{05EA}\u{05B9}\u{05D4}\u{05D5}\u{05BC}"),
        vec![
            (vec![Sav, HolamHaser], true),
            (vec![He, Shuruq], true),
        ]
    );
}

#[test]
fn test_break_before_sheva_na() {
    // בְּלִי: the sheva-na opens its own syllable
    assert_eq!(
        syllables("\u{05D1}\u{05BC}\u{05B0}\u{05DC}\u{05B4}\u{05D9}"),
        vec![
            (vec![Bet, DageshQal, ShevaNa], false),
            (vec![Lamed, HiriqMaleYod], true),
        ]
    );
}

#[test]
fn test_no_break_before_sheva_nah() {
    // יִשְׁרְצוּ: the sheva-nah stays with the first syllable
    assert_eq!(
        syllables(
            "\u{05D9}\u{05B4}\u{05E9}\u{05C1}\u{05B0}\u{05E8}\u{05B0}\u{05E6}\u{05D5}\u{05BC}"
        ),
        vec![
            (vec![Yod, Hiriq, Shin, ShevaNah], false),
            (vec![Resh, ShevaNa], false),
            (vec![Tsadi, Shuruq], true),
        ]
    );
}

#[test]
fn test_break_before_hataf_vowel() {
    // אֲשֶׁר
    assert_eq!(
        syllables("\u{05D0}\u{05B2}\u{05E9}\u{05C1}\u{05B6}\u{05E8}"),
        vec![
            (vec![Alef, HatafPatah], true),
            (vec![Shin, Segol, Resh], false),
        ]
    );
}

#[test]
fn test_patah_genuvah_syllable_closed() {
    // נֹחַ: the het sounds after its patah and closes the syllable
    assert_eq!(
        syllables("\u{05E0}\u{05B9}\u{05D7}\u{05B7}"),
        vec![
            (vec![Nun, HolamHaser], true),
            (vec![Het, PatahGenuvah], false),
        ]
    );
}

#[test]
fn test_hamoreihem_syllables() {
    // חֲמֹרֵיהֶּם
    assert_eq!(
        syllables(
            "\u{05D7}\u{05B2}\u{05DE}\u{05B9}\u{05E8}\u{05B5}\u{05D9}\u{05D4}\u{05BC}\u{05B6}\u{05DD}"
        ),
        vec![
            (vec![Het, HatafPatah], true),
            (vec![Mem, HolamHaser], true),
            (vec![Resh, TsereMaleYod], true),
            (vec![He, DageshHazaq, Segol, MemSofit], false),
        ]
    );
}

#[test]
fn test_spans_partition_symbol_sequence() {
    for word in [
        "\u{05D1}\u{05BC}\u{05B0}\u{05E8}\u{05B5}\u{05D0}\u{05E9}\u{05C1}\u{05B4}\u{05D9}\u{05EA}",
        "\u{05D5}\u{05B7}\u{05D9}\u{05B0}\u{05D4}\u{05B4}\u{05D9}",
        "\u{05E9}\u{05C1}\u{05B8}\u{05DC}\u{05D5}\u{05B9}\u{05DD}",
        "\u{05DC}\u{05DE}\u{05DC}\u{05DA}",
    ] {
        let parsed = parse(word);
        assert_eq!(parsed.syllables.first().map(|s| s.start), Some(0));
        assert_eq!(
            parsed.syllables.last().map(|s| s.end),
            Some(parsed.symbols.len())
        );
        for pair in parsed.syllables.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
