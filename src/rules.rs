//! The classification rule tables
//!
//! Every rule is a named `(predicate, effect)` pair over a window of
//! `(prev_cluster, cluster, next_cluster)` plus the word flags. Rules are
//! grouped by target diacritic; within a group the first matching rule wins
//! and later rules are skipped, so ordering encodes priority. The tables
//! are built once at first use and are immutable afterwards.
//!
//! Two stage lists drive the classifier:
//!
//! - the **first pass** settles letters and vav composition (shuruq and
//!   holam-male absorption), which can consume a neighboring vav;
//! - the **second pass** settles dagesh, sheva, the male (mater lectionis)
//!   vowels, patah-genuvah, qamats, and the residual vowels, reading the
//!   already-final symbols of the clusters to the left.

use crate::codepoints::{Letter, Niqqud};
use crate::parser::Diagnostics;
use crate::symbols::{is_similar, Symbol, VowelLength};
use crate::tokenizer::Cluster;
use once_cell::sync::Lazy;

// ============================================================================
// Working State
// ============================================================================

/// The evolving classification of one cluster
///
/// Starts as a raw guess straight from the cluster's code points and is
/// rewritten by the rules into final symbols. A consumed guess (a mater
/// letter absorbed into a vowel, or a vav absorbed into a shuruq) emits
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Guess {
    /// The letter symbol, if the letter is still its own symbol
    pub letter: Option<Symbol>,
    /// The dagesh symbol (raw `Symbol::Dagesh` until classified)
    pub dagesh: Option<Symbol>,
    /// The vowel-slot symbol (raw `Symbol::Sheva`/`Qamats`/`Holam` until classified)
    pub vowel: Option<Symbol>,
    /// The cluster was absorbed by a neighbor and emits nothing
    pub consumed: bool,
    /// The vowel came from the vav-specific holam point and must stay haser
    pub explicit_haser: bool,
}

impl Guess {
    /// Initial guess straight from a cluster's raw code points
    pub fn from_cluster(cluster: &Cluster) -> Guess {
        let (vowel, explicit_haser) = match cluster.vowel {
            None => (None, false),
            Some(Niqqud::HolamHaserForVav) => (Some(Symbol::HolamHaser), true),
            Some(point) => (Some(raw_vowel(point)), false),
        };
        Guess {
            letter: Some(hard_letter(cluster.letter)),
            dagesh: cluster.dagesh.then_some(Symbol::Dagesh),
            vowel,
            consumed: false,
            explicit_haser,
        }
    }
}

/// The letter symbol assuming a dagesh (the "hard" BGDKFT reading)
fn hard_letter(letter: Letter) -> Symbol {
    use Letter::*;
    match letter {
        Alef => Symbol::Alef,
        Bet => Symbol::Bet,
        Gimel => Symbol::Gimel,
        Dalet => Symbol::Dalet,
        He => Symbol::He,
        Vav => Symbol::Vav,
        Zayin => Symbol::Zayin,
        Het => Symbol::Het,
        Tet => Symbol::Tet,
        Yod => Symbol::Yod,
        Kaf => Symbol::Kaf,
        KafSofit => Symbol::KafSofit,
        Lamed => Symbol::Lamed,
        Mem => Symbol::Mem,
        MemSofit => Symbol::MemSofit,
        Nun => Symbol::Nun,
        NunSofit => Symbol::NunSofit,
        Samekh => Symbol::Samekh,
        Ayin => Symbol::Ayin,
        Pe => Symbol::Pe,
        PeSofit => Symbol::PeSofit,
        Tsadi => Symbol::Tsadi,
        TsadiSofit => Symbol::TsadiSofit,
        Qof => Symbol::Qof,
        Resh => Symbol::Resh,
        Shin => Symbol::Shin,
        Tav => Symbol::Tav,
    }
}

/// The BGDKFT letter symbol without a dagesh (the "soft" reading)
fn soft_letter(letter: Letter) -> Symbol {
    use Letter::*;
    match letter {
        Bet => Symbol::Vet,
        Kaf => Symbol::Khaf,
        KafSofit => Symbol::KhafSofit,
        Pe => Symbol::Fe,
        PeSofit => Symbol::FeSofit,
        Tav => Symbol::Sav,
        other => hard_letter(other),
    }
}

/// The raw vowel-slot symbol for a niqqud point
fn raw_vowel(point: Niqqud) -> Symbol {
    match point {
        Niqqud::Sheva => Symbol::Sheva,
        Niqqud::Hiriq => Symbol::Hiriq,
        Niqqud::Tsere => Symbol::Tsere,
        Niqqud::Segol => Symbol::Segol,
        Niqqud::Patah => Symbol::Patah,
        Niqqud::Qamats => Symbol::Qamats,
        Niqqud::QamatsQatan => Symbol::QamatsQatan,
        Niqqud::Holam => Symbol::Holam,
        Niqqud::HolamHaserForVav => Symbol::HolamHaser,
        Niqqud::Qubuts => Symbol::Qubuts,
        Niqqud::HatafSegol => Symbol::HatafSegol,
        Niqqud::HatafPatah => Symbol::HatafPatah,
        Niqqud::HatafQamats => Symbol::HatafQamats,
    }
}

// ============================================================================
// Rule Window
// ============================================================================

/// The window a rule sees: the cluster under classification, its raw
/// neighbors, every guess so far, and the word flags
pub(crate) struct Ctx<'a> {
    /// Index of the cluster under classification
    pub idx: usize,
    /// The raw clusters of the word
    pub clusters: &'a [Cluster],
    /// The evolving guesses, parallel to `clusters`
    pub guesses: &'a mut [Guess],
    /// The word is joined to the next by a maqaf
    pub maqaf: bool,
    /// Diagnostic flags being accumulated for the word
    pub diag: &'a mut Diagnostics,
}

impl Ctx<'_> {
    #[inline]
    pub fn cluster(&self) -> &Cluster {
        &self.clusters[self.idx]
    }

    #[inline]
    pub fn guess(&self) -> &Guess {
        &self.guesses[self.idx]
    }

    #[inline]
    pub fn guess_mut(&mut self) -> &mut Guess {
        &mut self.guesses[self.idx]
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.idx == 0
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.idx + 1 == self.clusters.len()
    }

    pub fn next_cluster(&self) -> Option<&Cluster> {
        self.clusters.get(self.idx + 1)
    }

    pub fn next_guess(&self) -> Option<&Guess> {
        self.guesses.get(self.idx + 1)
    }

    pub fn next_guess_mut(&mut self) -> Option<&mut Guess> {
        self.guesses.get_mut(self.idx + 1)
    }

    /// The most recently emitted vowel: the previous guess's vowel, or the
    /// one before it when the previous cluster has none (a consumed mater
    /// or a closed consonant)
    pub fn prev_vowel(&self) -> Option<Symbol> {
        let prev1 = self.idx.checked_sub(1).and_then(|i| self.guesses[i].vowel);
        prev1.or_else(|| self.idx.checked_sub(2).and_then(|i| self.guesses[i].vowel))
    }

    /// True when the previous cluster ended with a vowel sound: an emitted
    /// vowel or a voiced sheva
    pub fn prev_vowel_sound(&self) -> bool {
        self.prev_vowel()
            .is_some_and(|v| v.is_vowel() || v == Symbol::ShevaNa)
    }

    /// The next cluster's letter when it is unvowelled, undagesh'd, and not
    /// already absorbed or given a composed vowel
    pub fn next_bare_letter(&self) -> Option<Letter> {
        let cluster = self.next_cluster()?;
        let guess = self.next_guess()?;
        (!cluster.dagesh && guess.vowel.is_none() && !guess.consumed && guess.letter.is_some())
            .then_some(cluster.letter)
    }

    /// True when this cluster is a vav + dagesh with an empty vowel slot
    /// (a shuruq candidate owned by the vav-composition group)
    pub fn shuruq_candidate(&self) -> bool {
        let c = self.cluster();
        c.letter == Letter::Vav && c.dagesh && c.vowel.is_none()
    }
}

// ============================================================================
// Rule Tables
// ============================================================================

/// A named classification rule: a predicate over the window and the effect
/// applied when the predicate holds
pub struct Rule {
    /// The rule's name, used for tracing and for disabling it by name
    pub name: &'static str,
    pub(crate) matches: fn(&Ctx) -> bool,
    pub(crate) apply: fn(&mut Ctx),
}

/// An ordered group of rules targeting one diacritic; first match wins
pub struct Stage {
    /// The group name
    pub name: &'static str,
    pub(crate) rules: Vec<Rule>,
}

macro_rules! rule {
    ($name:literal, $matches:expr, $apply:expr) => {
        Rule {
            name: $name,
            matches: $matches,
            apply: $apply,
        }
    };
}

fn letters_stage() -> Stage {
    Stage {
        name: "letters",
        rules: vec![
            rule!(
                "letter-bgdkft-soft",
                |ctx| ctx.cluster().letter.is_bgdkft() && !ctx.cluster().dagesh,
                |ctx| {
                    let soft = soft_letter(ctx.cluster().letter);
                    ctx.guess_mut().letter = Some(soft);
                }
            ),
            rule!(
                "letter-shin-dot",
                |ctx| ctx.cluster().letter == Letter::Shin && ctx.cluster().shin_dot,
                |ctx| ctx.guess_mut().letter = Some(Symbol::Shin)
            ),
            rule!(
                "letter-sin-dot",
                |ctx| ctx.cluster().letter == Letter::Shin && ctx.cluster().sin_dot,
                |ctx| ctx.guess_mut().letter = Some(Symbol::Sin)
            ),
            rule!(
                "letter-shin-missing-dot",
                |ctx| ctx.cluster().letter == Letter::Shin,
                |ctx| {
                    ctx.guess_mut().letter = Some(Symbol::Shin);
                    ctx.diag.missing_shin_sin_dot = true;
                }
            ),
        ],
    }
}

fn vav_stage() -> Stage {
    Stage {
        name: "vav",
        rules: vec![
            // the vav-specific holam point stays a literal holam-haser
            rule!(
                "vav-holam-haser-marker",
                |ctx| {
                    ctx.cluster().letter == Letter::Vav
                        && ctx.cluster().vowel == Some(Niqqud::HolamHaserForVav)
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::HolamHaser)
            ),
            rule!(
                "vav-shuruq-start",
                |ctx| ctx.is_first() && ctx.shuruq_candidate(),
                |ctx| {
                    let guess = ctx.guess_mut();
                    guess.letter = None;
                    guess.dagesh = None;
                    guess.vowel = Some(Symbol::Shuruq);
                }
            ),
            rule!(
                "vav-holam-male-prev",
                |ctx| {
                    ctx.guess().vowel.is_none()
                        && ctx.next_cluster().is_some_and(|c| {
                            c.letter == Letter::Vav && !c.dagesh && c.vowel == Some(Niqqud::Holam)
                        })
                        && ctx.next_guess().is_some_and(|g| !g.consumed)
                },
                |ctx| {
                    ctx.guess_mut().vowel = Some(Symbol::HolamMaleVav);
                    ctx.next_guess_mut().unwrap().consumed = true;
                }
            ),
            rule!(
                "vav-shuruq-prev",
                |ctx| {
                    ctx.guess().vowel.is_none()
                        && ctx.next_cluster().is_some_and(|c| {
                            c.letter == Letter::Vav && c.dagesh && c.vowel.is_none()
                        })
                        && ctx.next_guess().is_some_and(|g| !g.consumed)
                },
                |ctx| {
                    ctx.guess_mut().vowel = Some(Symbol::Shuruq);
                    ctx.next_guess_mut().unwrap().consumed = true;
                }
            ),
            // a vav that kept its dagesh is geminated
            rule!(
                "vav-dagesh-hazaq",
                |ctx| !ctx.is_first() && ctx.shuruq_candidate(),
                |ctx| ctx.guess_mut().dagesh = Some(Symbol::DageshHazaq)
            ),
        ],
    }
}

fn dagesh_stage() -> Stage {
    Stage {
        name: "dagesh",
        rules: vec![
            rule!(
                "dagesh-is-mapiq-alef",
                |ctx| ctx.guess().dagesh == Some(Symbol::Dagesh) && ctx.cluster().letter == Letter::Alef,
                |ctx| {
                    let guess = ctx.guess_mut();
                    guess.letter = Some(Symbol::MapiqAlef);
                    guess.dagesh = None;
                }
            ),
            rule!(
                "dagesh-is-mapiq-he",
                |ctx| {
                    ctx.guess().dagesh == Some(Symbol::Dagesh)
                        && ctx.cluster().letter == Letter::He
                        && ctx.is_last()
                },
                |ctx| {
                    let guess = ctx.guess_mut();
                    guess.letter = Some(Symbol::MapiqHe);
                    guess.dagesh = None;
                }
            ),
            rule!(
                "dagesh-hazaq-he",
                |ctx| ctx.guess().dagesh == Some(Symbol::Dagesh) && ctx.cluster().letter == Letter::He,
                |ctx| ctx.guess_mut().dagesh = Some(Symbol::DageshHazaq)
            ),
            rule!(
                "dagesh-hazaq-bgdkft",
                |ctx| {
                    ctx.guess().dagesh == Some(Symbol::Dagesh)
                        && ctx.cluster().letter.is_bgdkft()
                        && ctx.prev_vowel_sound()
                },
                |ctx| ctx.guess_mut().dagesh = Some(Symbol::DageshHazaq)
            ),
            // word start or after a silent sheva
            rule!(
                "dagesh-qal-bgdkft",
                |ctx| ctx.guess().dagesh == Some(Symbol::Dagesh) && ctx.cluster().letter.is_bgdkft(),
                |ctx| ctx.guess_mut().dagesh = Some(Symbol::DageshQal)
            ),
            rule!(
                "dagesh-hazaq-default",
                |ctx| ctx.guess().dagesh == Some(Symbol::Dagesh) && !ctx.shuruq_candidate(),
                |ctx| ctx.guess_mut().dagesh = Some(Symbol::DageshHazaq)
            ),
        ],
    }
}

fn sheva_stage() -> Stage {
    Stage {
        name: "sheva",
        rules: vec![
            rule!(
                "sheva-double-end",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Sheva)
                        && ctx.idx + 2 == ctx.clusters.len()
                        && ctx.next_guess().is_some_and(|g| g.vowel == Some(Symbol::Sheva))
                },
                |ctx| {
                    ctx.guess_mut().vowel = Some(Symbol::ShevaNa);
                    ctx.next_guess_mut().unwrap().vowel = Some(Symbol::ShevaNa);
                }
            ),
            rule!(
                "sheva-double-middle",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Sheva)
                        && ctx.next_guess().is_some_and(|g| g.vowel == Some(Symbol::Sheva))
                },
                |ctx| {
                    ctx.guess_mut().vowel = Some(Symbol::ShevaNah);
                    ctx.next_guess_mut().unwrap().vowel = Some(Symbol::ShevaNa);
                }
            ),
            rule!(
                "sheva-nah-end",
                |ctx| ctx.guess().vowel == Some(Symbol::Sheva) && ctx.is_last(),
                |ctx| ctx.guess_mut().vowel = Some(Symbol::ShevaNah)
            ),
            rule!(
                "sheva-na-start",
                |ctx| ctx.guess().vowel == Some(Symbol::Sheva) && ctx.is_first(),
                |ctx| ctx.guess_mut().vowel = Some(Symbol::ShevaNa)
            ),
            rule!(
                "sheva-na-dagesh-hazaq",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Sheva)
                        && ctx.guess().dagesh == Some(Symbol::DageshHazaq)
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::ShevaNa)
            ),
            rule!(
                "sheva-na-after-long-vowel",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Sheva)
                        && ctx
                            .prev_vowel()
                            .and_then(Symbol::vowel_length)
                            == Some(VowelLength::Long)
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::ShevaNa)
            ),
            rule!(
                "sheva-nah-after-short-vowel",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Sheva)
                        && ctx
                            .prev_vowel()
                            .and_then(Symbol::vowel_length)
                            == Some(VowelLength::Short)
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::ShevaNah)
            ),
            // a final bare alef adds no sound of its own
            rule!(
                "sheva-nah-before-final-alef",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Sheva)
                        && ctx.idx + 2 == ctx.clusters.len()
                        && ctx
                            .next_cluster()
                            .is_some_and(|c| c.letter == Letter::Alef && c.is_bare())
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::ShevaNah)
            ),
            rule!(
                "sheva-na-similar-letter",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Sheva)
                        && match (ctx.guess().letter, ctx.next_guess().and_then(|g| g.letter)) {
                            (Some(a), Some(b)) => is_similar(a, b),
                            _ => false,
                        }
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::ShevaNa)
            ),
            rule!(
                "sheva-nah-default",
                |ctx| ctx.guess().vowel == Some(Symbol::Sheva),
                |ctx| ctx.guess_mut().vowel = Some(Symbol::ShevaNah)
            ),
        ],
    }
}

/// Absorb the consumed mater into the vowel and mark the letter consumed
fn absorb_male(ctx: &mut Ctx, vowel: Symbol) {
    ctx.guess_mut().vowel = Some(vowel);
    ctx.next_guess_mut().unwrap().consumed = true;
}

fn male_stage() -> Stage {
    Stage {
        name: "male",
        rules: vec![
            rule!(
                "male-hiriq-yod",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Hiriq)
                        && ctx.next_bare_letter() == Some(Letter::Yod)
                },
                |ctx| absorb_male(ctx, Symbol::HiriqMaleYod)
            ),
            rule!(
                "male-tsere",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Tsere)
                        && matches!(
                            ctx.next_bare_letter(),
                            Some(Letter::Alef | Letter::He | Letter::Yod)
                        )
                },
                |ctx| {
                    let vowel = match ctx.next_bare_letter() {
                        Some(Letter::Alef) => Symbol::TsereMaleAlef,
                        Some(Letter::He) => Symbol::TsereMaleHe,
                        _ => Symbol::TsereMaleYod,
                    };
                    absorb_male(ctx, vowel);
                }
            ),
            rule!(
                "male-segol",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Segol)
                        && matches!(
                            ctx.next_bare_letter(),
                            Some(Letter::Alef | Letter::He | Letter::Yod)
                        )
                },
                |ctx| {
                    let vowel = match ctx.next_bare_letter() {
                        Some(Letter::Alef) => Symbol::SegolMaleAlef,
                        Some(Letter::He) => Symbol::SegolMaleHe,
                        _ => Symbol::SegolMaleYod,
                    };
                    absorb_male(ctx, vowel);
                }
            ),
            rule!(
                "male-patah",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Patah)
                        && matches!(ctx.next_bare_letter(), Some(Letter::Alef | Letter::He))
                },
                |ctx| {
                    let vowel = match ctx.next_bare_letter() {
                        Some(Letter::Alef) => Symbol::PatahMaleAlef,
                        _ => Symbol::PatahMaleHe,
                    };
                    absorb_male(ctx, vowel);
                }
            ),
            // absorbing the mater also settles the qamats as long
            rule!(
                "male-qamats",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Qamats)
                        && matches!(ctx.next_bare_letter(), Some(Letter::Alef | Letter::He))
                },
                |ctx| {
                    let vowel = match ctx.next_bare_letter() {
                        Some(Letter::Alef) => Symbol::QamatsMaleAlef,
                        _ => Symbol::QamatsMaleHe,
                    };
                    absorb_male(ctx, vowel);
                }
            ),
            rule!(
                "male-holam",
                |ctx| {
                    matches!(ctx.guess().vowel, Some(Symbol::Holam | Symbol::HolamHaser))
                        && !ctx.guess().explicit_haser
                        && matches!(ctx.next_bare_letter(), Some(Letter::Alef | Letter::He))
                },
                |ctx| {
                    let vowel = match ctx.next_bare_letter() {
                        Some(Letter::Alef) => Symbol::HolamMaleAlef,
                        _ => Symbol::HolamMaleHe,
                    };
                    absorb_male(ctx, vowel);
                }
            ),
        ],
    }
}

fn patah_genuvah_stage() -> Stage {
    Stage {
        name: "patah-genuvah",
        rules: vec![rule!(
            "patah-genuvah",
            |ctx| {
                ctx.is_last()
                    && ctx.guess().vowel == Some(Symbol::Patah)
                    && matches!(
                        ctx.guess().letter,
                        Some(Symbol::Het | Symbol::Ayin | Symbol::MapiqHe)
                    )
            },
            |ctx| {
                ctx.guess_mut().vowel = Some(Symbol::PatahGenuvah);
                ctx.diag.patah_genuvah = true;
            }
        )],
    }
}

fn qamats_stage() -> Stage {
    Stage {
        name: "qamats",
        rules: vec![
            // a maqaf-joined word carries no stress of its own
            rule!(
                "qamats-qatan-maqaf",
                |ctx| ctx.guess().vowel == Some(Symbol::Qamats) && ctx.maqaf,
                |ctx| ctx.guess_mut().vowel = Some(Symbol::QamatsQatan)
            ),
            rule!(
                "qamats-qatan-hataf-qamats",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Qamats)
                        && ctx
                            .next_guess()
                            .is_some_and(|g| g.vowel == Some(Symbol::HatafQamats))
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::QamatsQatan)
            ),
            // the gemination closes this syllable without needing stress
            rule!(
                "qamats-qatan-dagesh-sheva",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Qamats)
                        && ctx.next_cluster().is_some_and(|c| c.dagesh && c.has_sheva())
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::QamatsQatan)
            ),
            rule!(
                "qamats-gadol-dagesh-hazaq",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Qamats)
                        && ctx.guess().dagesh == Some(Symbol::DageshHazaq)
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::QamatsGadol)
            ),
            rule!(
                "qamats-gadol-mapiq-he",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Qamats)
                        && ctx.idx + 2 == ctx.clusters.len()
                        && ctx
                            .next_cluster()
                            .is_some_and(|c| c.letter == Letter::He && c.dagesh && c.vowel.is_none())
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::QamatsGadol)
            ),
            rule!(
                "qamats-gadol-final",
                |ctx| ctx.guess().vowel == Some(Symbol::Qamats) && ctx.is_last(),
                |ctx| ctx.guess_mut().vowel = Some(Symbol::QamatsGadol)
            ),
            rule!(
                "qamats-gadol-before-vowel",
                |ctx| {
                    ctx.guess().vowel == Some(Symbol::Qamats)
                        && ctx
                            .next_guess()
                            .and_then(|g| g.vowel)
                            .is_some_and(Symbol::is_vowel)
                },
                |ctx| ctx.guess_mut().vowel = Some(Symbol::QamatsGadol)
            ),
            // anything else waits for the sheva to its right to resolve
        ],
    }
}

fn residual_stage() -> Stage {
    Stage {
        name: "residual",
        rules: vec![rule!(
            "vowel-holam-haser-default",
            |ctx| ctx.guess().vowel == Some(Symbol::Holam),
            |ctx| ctx.guess_mut().vowel = Some(Symbol::HolamHaser)
        )],
    }
}

/// First pass: letter identity and vav composition
pub(crate) static FIRST_PASS: Lazy<Vec<Stage>> =
    Lazy::new(|| vec![letters_stage(), vav_stage()]);

/// Second pass: dagesh, sheva, male, patah-genuvah, qamats, residual vowels
pub(crate) static SECOND_PASS: Lazy<Vec<Stage>> = Lazy::new(|| {
    vec![
        dagesh_stage(),
        sheva_stage(),
        male_stage(),
        patah_genuvah_stage(),
        qamats_stage(),
        residual_stage(),
    ]
});

/// Names of the qamats-residue rules the classifier applies after the main
/// fold, once every sheva to the right is settled
pub(crate) const RESIDUE_RULES: &[&str] = &[
    "qamats-qatan-prefix-be-le",
    "qamats-ambiguous",
    "qamats-gadol-before-sheva-na",
    "qamats-gadol-default",
];

/// Every rule name, paired with its group name, in evaluation order
pub fn all_rules() -> Vec<(&'static str, &'static str)> {
    let mut out = Vec::new();
    for stage in FIRST_PASS.iter().chain(SECOND_PASS.iter()) {
        for rule in &stage.rules {
            out.push((stage.name, rule.name));
        }
    }
    for &name in RESIDUE_RULES {
        out.push(("qamats", name));
    }
    out
}
