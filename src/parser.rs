//! Parser entry points and the assembled parse result
//!
//! The assembler runs the pipeline stages in order (normalize, tokenize,
//! classify, syllabify) and packages the result; no policy decisions live
//! here. A parse never fails on linguistic grounds: ambiguity surfaces as
//! diagnostic flags on the result, and the only fatal error is malformed
//! UTF-8 at the byte-level front door.

use crate::classifier::classify_word;
use crate::syllables::{syllabify, Syllable};
use crate::symbols::Symbol;
use crate::tokenizer::{tokenize, Word};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::Utf8Error;

// ============================================================================
// Errors
// ============================================================================

/// Error type for parse operations
///
/// Linguistic ambiguity is never an error; see [`Diagnostics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input bytes are not valid UTF-8
    InvalidUtf8 {
        /// The underlying validation error
        source: Utf8Error,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidUtf8 { source } => {
                write!(f, "input is not valid UTF-8: {}", source)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidUtf8 { source } => Some(source),
        }
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Diagnostic flags raised while parsing
///
/// Flags are purely informational: they never alter the emitted symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// The word carries no niqqud at all (unpointed text)
    pub has_no_niqqud: bool,
    /// A qamats could not be classified without stress information
    pub ambiguous_qamats: bool,
    /// A sheva and a hataf vowel competed for one vowel slot
    pub ambiguous_sheva_hataf: bool,
    /// A shin carried neither a shin dot nor a sin dot
    pub missing_shin_sin_dot: bool,
    /// Unrecognized code points were dropped
    pub unknown_codepoints: bool,
    /// A qamats-qatan was identified through a be-/le- prefix
    pub likely_prefix_be_le: bool,
    /// The final patah is pronounced before its letter (the symbol order
    /// in the sequence is not changed)
    pub patah_genuvah: bool,
}

impl Diagnostics {
    /// True when any flag is raised
    pub fn any(&self) -> bool {
        self.has_no_niqqud
            || self.ambiguous_qamats
            || self.ambiguous_sheva_hataf
            || self.missing_shin_sin_dot
            || self.unknown_codepoints
            || self.likely_prefix_be_le
            || self.patah_genuvah
    }
}

// ============================================================================
// Parse Result
// ============================================================================

/// The complete parse of one word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// The canonical form of the parsed word
    pub word: String,
    /// The word was joined to the next by a maqaf
    pub followed_by_maqaf: bool,
    /// The ordered grammatical symbols
    pub symbols: Vec<Symbol>,
    /// Syllable spans partitioning `symbols` without overlap or gap
    pub syllables: Vec<Syllable>,
    /// Diagnostic flags; informational only
    pub flags: Diagnostics,
    /// Names of the classification rules that fired, in order
    pub rules: Vec<String>,
}

impl ParseResult {
    /// An empty result (empty input parses to this)
    pub fn empty() -> Self {
        Self {
            word: String::new(),
            followed_by_maqaf: false,
            symbols: Vec::new(),
            syllables: Vec::new(),
            flags: Diagnostics::default(),
            rules: Vec::new(),
        }
    }

    /// The symbols of syllable `i`
    pub fn syllable(&self, i: usize) -> Option<&[Symbol]> {
        self.syllables.get(i).map(|s| s.symbols(&self.symbols))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

// ============================================================================
// Parser
// ============================================================================

/// A configurable parser
///
/// The default configuration runs every rule. Individual rules can be
/// disabled by name (see [`crate::rules::all_rules`]); a disabled rule
/// never fires and the next rule in its group is consulted instead.
///
/// # Example
///
/// ```
/// use hebphonics::Parser;
///
/// let parser = Parser::new().disable("dagesh-is-mapiq-alef");
/// let parsed = parser.parse("\u{05E8}\u{05BB}\u{05D0}\u{05BC}\u{05D5}\u{05BC}");
/// assert!(parsed.rules.iter().all(|r| r != "dagesh-is-mapiq-alef"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    disabled: HashSet<String>,
}

impl Parser {
    /// A parser with every rule enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable a rule by name
    pub fn disable(mut self, rule: &str) -> Self {
        self.disabled.insert(rule.to_string());
        self
    }

    /// Parse one word
    ///
    /// Input containing more than one word parses the first; a trailing
    /// maqaf still flags the word as maqaf-joined. Empty input (or input
    /// that normalizes to nothing) returns [`ParseResult::empty`].
    pub fn parse(&self, word: &str) -> ParseResult {
        let words = tokenize(&crate::normalizer::normalize(word));
        match words.first() {
            Some(word) => self.assemble(word),
            None => ParseResult::empty(),
        }
    }

    /// Parse every word in a text
    ///
    /// Words are split on whitespace, punctuation, and maqaf; each
    /// maqaf-joined word is parsed on its own with `followed_by_maqaf` set.
    pub fn parse_words(&self, text: &str) -> Vec<ParseResult> {
        tokenize(&crate::normalizer::normalize(text))
            .iter()
            .map(|word| self.assemble(word))
            .collect()
    }

    /// Parse one word from raw bytes, validating UTF-8 first
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ParseResult, ParseError> {
        let text =
            std::str::from_utf8(bytes).map_err(|source| ParseError::InvalidUtf8 { source })?;
        Ok(self.parse(text))
    }

    /// Run classification and syllabification for one tokenized word
    fn assemble(&self, word: &Word) -> ParseResult {
        let classified = classify_word(word, &self.disabled);
        let syllables = syllabify(&classified.groups);
        let symbols: Vec<Symbol> = classified.groups.into_iter().flatten().collect();
        ParseResult {
            word: word.canonical(),
            followed_by_maqaf: word.followed_by_maqaf,
            symbols,
            syllables,
            flags: classified.diag,
            rules: classified.rules.into_iter().map(String::from).collect(),
        }
    }
}

/// Parse one word with the default rule set
pub fn parse(word: &str) -> ParseResult {
    Parser::new().parse(word)
}

/// Parse every word in a text with the default rule set
pub fn parse_words(text: &str) -> Vec<ParseResult> {
    Parser::new().parse_words(text)
}

/// Parse one word from raw bytes, validating UTF-8 first
pub fn parse_bytes(bytes: &[u8]) -> Result<ParseResult, ParseError> {
    Parser::new().parse_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let parsed = parse("");
        assert!(parsed.symbols.is_empty());
        assert!(parsed.syllables.is_empty());
        assert!(!parsed.flags.any());
    }

    #[test]
    fn test_cantillation_only_input() {
        let parsed = parse("\u{0591}\u{05A8}");
        assert!(parsed.symbols.is_empty());
        assert!(!parsed.flags.unknown_codepoints);
    }

    #[test]
    fn test_single_letter_word() {
        let parsed = parse("\u{05D0}");
        assert_eq!(parsed.symbols, vec![Symbol::Alef]);
        assert_eq!(parsed.syllables.len(), 1);
        assert!(!parsed.syllables[0].open);
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let err = parse_bytes(&[0xD7, 0x90, 0xFF]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidUtf8 { .. }));
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_parse_bytes_valid() {
        let parsed = parse_bytes("\u{05D0}\u{05B7}".as_bytes()).unwrap();
        assert_eq!(parsed.symbols, vec![Symbol::Alef, Symbol::Patah]);
    }

    #[test]
    fn test_deterministic() {
        let word = "\u{05D1}\u{05BC}\u{05B8}\u{05D4}\u{05BC}";
        assert_eq!(parse(word), parse(word));
    }

    #[test]
    fn test_to_json() {
        let json = parse("\u{05D0}\u{05B7}").to_json().unwrap();
        assert!(json.contains("\"alef\""));
        assert!(json.contains("\"patah\""));
    }

    #[test]
    fn test_json_roundtrip() {
        let parsed = parse("\u{05D1}\u{05BC}\u{05B8}\u{05D4}\u{05BC}");
        let json = parsed.to_json().unwrap();
        let back = ParseResult::from_json(&json).unwrap();
        assert_eq!(back, parsed);
    }

    #[test]
    fn test_parse_words_splits() {
        let results = parse_words("\u{05D0}\u{05B7} \u{05D1}\u{05BC}\u{05B8}");
        assert_eq!(results.len(), 2);
    }
}
