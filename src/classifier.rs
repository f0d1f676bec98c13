//! The rule-engine driver
//!
//! Classification is a left-to-right fold over the word's clusters. Each
//! cluster is taken through the rule stages in order; within a stage the
//! first matching rule fires and the rest are skipped. The fold carries the
//! symbols already emitted to the left, so a rule that asks about the
//! previous vowel reads a final answer, never a raw guess.
//!
//! One bounded residue pass follows the fold: a qamats whose class depends
//! on the sheva to its right can only be settled after that sheva has been
//! classified. Everything else resolves in the fold itself; there is no
//! back-patching.

use crate::parser::Diagnostics;
use crate::rules::{Ctx, Guess, FIRST_PASS, SECOND_PASS};
use crate::symbols::Symbol;
use crate::tokenizer::Word;
use std::collections::HashSet;

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

/// The classified word: per-cluster symbol runs plus the rule trace
pub(crate) struct Classified {
    /// Emitted symbols, one run per surviving cluster, in cluster order
    /// (letter, then dagesh, then vowel)
    pub groups: Vec<Vec<Symbol>>,
    /// Names of the rules that fired, in firing order
    pub rules: Vec<&'static str>,
    /// Diagnostic flags accumulated across all stages
    pub diag: Diagnostics,
}

/// Classify one word into grammatical symbols
pub(crate) fn classify_word(word: &Word, disabled: &HashSet<String>) -> Classified {
    let clusters = &word.clusters[..];
    let mut guesses: Vec<Guess> = clusters.iter().map(Guess::from_cluster).collect();
    let mut trace: Vec<&'static str> = Vec::new();
    let mut diag = Diagnostics {
        has_no_niqqud: !clusters.is_empty() && word.has_no_niqqud(),
        ambiguous_sheva_hataf: word.ambiguous_sheva_hataf,
        unknown_codepoints: word.unknown_codepoints,
        ..Diagnostics::default()
    };

    for pass in [&*FIRST_PASS, &*SECOND_PASS] {
        for idx in 0..clusters.len() {
            if guesses[idx].consumed {
                continue;
            }
            for stage in pass {
                let mut ctx = Ctx {
                    idx,
                    clusters,
                    guesses: &mut guesses,
                    maqaf: word.followed_by_maqaf,
                    diag: &mut diag,
                };
                for rule in &stage.rules {
                    if disabled.contains(rule.name) {
                        continue;
                    }
                    if (rule.matches)(&ctx) {
                        (rule.apply)(&mut ctx);
                        log_debug!("{}: {} fired at cluster {}", stage.name, rule.name, idx);
                        trace.push(rule.name);
                        break;
                    }
                }
            }
        }
    }

    resolve_qamats_residue(clusters, &mut guesses, disabled, &mut trace, &mut diag);

    let groups = guesses
        .iter()
        .filter(|g| !g.consumed)
        .map(|g| {
            g.letter
                .into_iter()
                .chain(g.dagesh)
                .chain(g.vowel)
                .collect()
        })
        .collect();

    Classified {
        groups,
        rules: trace,
        diag,
    }
}

/// Settle every qamats the fold left unclassified
///
/// The fold defers a qamats whose right neighbor carries a sheva, because
/// the sheva's class feeds back into the qamats. With the shevas settled:
///
/// - before a `sheva-nah` after a detached be-/le- prefix cluster, the
///   syllable is closed and unstressed, so the qamats is `qamats-qatan`;
/// - before a `sheva-nah` with no prefix evidence, stress is unknowable
///   here, so the unclassified `qamats` stands and `ambiguous_qamats` is
///   raised rather than guessing;
/// - before an undagesh'd `sheva-na` the qamats is long;
/// - anything else is `qamats-gadol`.
fn resolve_qamats_residue(
    clusters: &[crate::tokenizer::Cluster],
    guesses: &mut [Guess],
    disabled: &HashSet<String>,
    trace: &mut Vec<&'static str>,
    diag: &mut Diagnostics,
) {
    let prefix_cluster = guesses.first().map(|g| {
        matches!(g.letter, Some(Symbol::Bet | Symbol::Vet | Symbol::Lamed))
            && g.vowel == Some(Symbol::ShevaNa)
    });

    for idx in 0..guesses.len() {
        if guesses[idx].consumed || guesses[idx].vowel != Some(Symbol::Qamats) {
            continue;
        }
        let next = guesses
            .iter()
            .enumerate()
            .skip(idx + 1)
            .find(|(_, g)| !g.consumed);
        let next_vowel = next.and_then(|(_, g)| g.vowel);
        let next_dagesh = next.is_some_and(|(i, _)| clusters[i].dagesh);

        let fired = if next_vowel == Some(Symbol::ShevaNah)
            && idx == 1
            && prefix_cluster == Some(true)
            && !disabled.contains("qamats-qatan-prefix-be-le")
        {
            guesses[idx].vowel = Some(Symbol::QamatsQatan);
            diag.likely_prefix_be_le = true;
            "qamats-qatan-prefix-be-le"
        } else if next_vowel == Some(Symbol::ShevaNah) && !disabled.contains("qamats-ambiguous") {
            // stress would be needed to go further; flag instead of guessing
            diag.ambiguous_qamats = true;
            "qamats-ambiguous"
        } else if next_vowel == Some(Symbol::ShevaNa)
            && !next_dagesh
            && !disabled.contains("qamats-gadol-before-sheva-na")
        {
            guesses[idx].vowel = Some(Symbol::QamatsGadol);
            "qamats-gadol-before-sheva-na"
        } else if !disabled.contains("qamats-gadol-default") {
            guesses[idx].vowel = Some(Symbol::QamatsGadol);
            "qamats-gadol-default"
        } else {
            continue;
        };
        log_debug!("qamats: {} fired at cluster {}", fired, idx);
        trace.push(fired);
    }
}
