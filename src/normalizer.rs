//! Input normalization
//!
//! First pipeline stage: turns a raw Unicode string into a classified
//! stream in canonical order. The normalizer
//!
//! - decomposes Hebrew presentation forms into base letter + points,
//! - strips cantillation marks (U+0591..=U+05AF, meteg, rafe, paseq,
//!   sof-pasuq, nun-hafukha) and format controls,
//! - reorders the marks inside a cluster into the canonical order
//!   letter, dagesh, shin/sin dot, vowel-or-sheva.
//!
//! Unrecognized code points survive normalization as
//! [`CodepointClass::Other`]; the tokenizer drops them and raises the
//! `unknown_codepoints` diagnostic.

use crate::codepoints::{classify, decompose, CodepointClass};

/// Sort rank of a mark inside its cluster
///
/// Input order of diacritics is typographical noise; only this rank matters.
fn mark_rank(class: CodepointClass) -> Option<u8> {
    match class {
        CodepointClass::Dagesh => Some(0),
        CodepointClass::ShinDot | CodepointClass::SinDot => Some(1),
        CodepointClass::Vowel(_) | CodepointClass::Hataf(_) | CodepointClass::Sheva => Some(2),
        _ => None,
    }
}

/// Normalize a string into a classified code-point stream in canonical order
///
/// Cantillation and format controls are dropped here; everything else is
/// passed through, including unrecognized code points (as
/// [`CodepointClass::Other`]).
///
/// # Example
///
/// ```
/// use hebphonics::normalizer::normalize;
/// use hebphonics::codepoints::{CodepointClass, Letter};
///
/// // shin presentation form with dagesh decomposes to three code points
/// let stream = normalize("\u{FB2C}");
/// assert_eq!(stream[0].0, CodepointClass::Letter(Letter::Shin));
/// assert_eq!(stream.len(), 3);
/// ```
pub fn normalize(text: &str) -> Vec<(CodepointClass, char)> {
    let mut out = Vec::with_capacity(text.len());
    let mut marks: Vec<(u8, CodepointClass, char)> = Vec::new();

    let push = |out: &mut Vec<(CodepointClass, char)>,
                    marks: &mut Vec<(u8, CodepointClass, char)>,
                    class: CodepointClass,
                    c: char| {
        match class {
            CodepointClass::Cantillation | CodepointClass::Control => {}
            _ => {
                if let Some(rank) = mark_rank(class) {
                    marks.push((rank, class, c));
                } else {
                    // a letter or boundary ends the current cluster
                    marks.sort_by_key(|&(rank, _, _)| rank);
                    out.extend(marks.drain(..).map(|(_, cl, ch)| (cl, ch)));
                    out.push((class, c));
                }
            }
        }
    };

    for c in text.chars() {
        if let Some(parts) = decompose(c) {
            for &part in parts {
                push(&mut out, &mut marks, classify(part), part);
            }
        } else {
            push(&mut out, &mut marks, classify(c), c);
        }
    }
    marks.sort_by_key(|&(rank, _, _)| rank);
    out.extend(marks.drain(..).map(|(_, cl, ch)| (cl, ch)));
    out
}
