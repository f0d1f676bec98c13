//! Parallel batch parsing
//!
//! Parsing is a pure function over its input: the rule tables are built
//! once and read-only afterwards, so any number of words can be parsed
//! concurrently. For corpus-scale work, parallelize at the word level with
//! these batch helpers.
//!
//! # Feature Flag
//!
//! Work-stealing parallelism needs the `parallel` feature:
//!
//! ```toml
//! [dependencies]
//! hebphonics = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! Without it the same functions run sequentially.

use crate::parser::{Parser, ParseResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parse many words in parallel
///
/// Results are in the same order as the inputs.
#[cfg(feature = "parallel")]
pub fn parse_words_batch(parser: &Parser, words: &[&str]) -> Vec<ParseResult> {
    words.par_iter().map(|word| parser.parse(word)).collect()
}

/// Parse many words sequentially (fallback when rayon is not enabled)
#[cfg(not(feature = "parallel"))]
pub fn parse_words_batch(parser: &Parser, words: &[&str]) -> Vec<ParseResult> {
    words.iter().map(|word| parser.parse(word)).collect()
}

/// Parse many owned words in parallel
///
/// Useful when the words arrive as a `Vec<String>` from corpus ingestion.
#[cfg(feature = "parallel")]
pub fn parse_words_batch_owned(parser: &Parser, words: Vec<String>) -> Vec<ParseResult> {
    words.into_par_iter().map(|word| parser.parse(&word)).collect()
}

/// Parse many owned words sequentially (fallback)
#[cfg(not(feature = "parallel"))]
pub fn parse_words_batch_owned(parser: &Parser, words: Vec<String>) -> Vec<ParseResult> {
    words.into_iter().map(|word| parser.parse(&word)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_order_preserved() {
        let parser = Parser::new();
        let words = ["\u{05D0}\u{05B7}", "\u{05D1}\u{05BC}\u{05B8}"];
        let results = parse_words_batch(&parser, &words);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], parser.parse(words[0]));
        assert_eq!(results[1], parser.parse(words[1]));
    }

    #[test]
    fn test_batch_owned() {
        let parser = Parser::new();
        let words = vec!["\u{05D0}\u{05B7}".to_string()];
        let results = parse_words_batch_owned(&parser, words);
        assert_eq!(results.len(), 1);
    }
}
