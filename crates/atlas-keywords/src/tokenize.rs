//! Noun filtering over analyzer output.
//!
//! The analyzer does the hard part (segmentation and tagging); this module
//! owns the filter: keep common and proper nouns, drop tokens shorter than
//! the minimum length, drop stopwords. Order is preserved and duplicates
//! are kept, since frequency matters downstream.

use crate::analyzer::MorphAnalyzer;
use crate::config::KeywordParams;

/// Extracts noun tokens from normalized text via an injected analyzer.
pub struct NounTokenizer<'a, A: MorphAnalyzer> {
    analyzer: &'a A,
    params: &'a KeywordParams,
}

impl<'a, A: MorphAnalyzer> NounTokenizer<'a, A> {
    #[must_use]
    pub fn new(analyzer: &'a A, params: &'a KeywordParams) -> Self {
        Self { analyzer, params }
    }

    /// Tokenizes text into filtered noun tokens.
    ///
    /// Only the first (best) analysis is used. An empty input or an empty
    /// analysis yields an empty vector, never an error.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let analyses = self.analyzer.analyze(text);
        let Some(best) = analyses.first() else {
            return Vec::new();
        };
        best.morphemes
            .iter()
            .filter(|m| m.tag.is_noun())
            .filter(|m| self.params.keeps_token(&m.surface))
            .map(|m| m.surface.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{Analysis, Morpheme, ParticleStripAnalyzer, PosTag};

    /// Analyzer returning a fixed segmentation, for driving the filter
    /// without heuristics in the way.
    struct Scripted(Vec<Analysis>);

    impl MorphAnalyzer for Scripted {
        fn analyze(&self, _text: &str) -> Vec<Analysis> {
            self.0.clone()
        }
    }

    #[test]
    fn keeps_only_nouns() {
        let analyzer = Scripted(vec![Analysis {
            morphemes: vec![
                Morpheme::new("한옥", PosTag::CommonNoun),
                Morpheme::new("양림동", PosTag::ProperNoun),
                Morpheme::new("보존되다", PosTag::Predicate),
                Morpheme::new("의", PosTag::Particle),
            ],
        }]);
        let params = KeywordParams::default();
        let tokenizer = NounTokenizer::new(&analyzer, &params);
        assert_eq!(tokenizer.tokenize("whatever"), vec!["한옥", "양림동"]);
    }

    #[test]
    fn drops_short_tokens_and_stopwords() {
        let analyzer = Scripted(vec![Analysis {
            morphemes: vec![
                Morpheme::new("집", PosTag::CommonNoun),
                Morpheme::new("건축물", PosTag::CommonNoun),
                Morpheme::new("정원", PosTag::CommonNoun),
            ],
        }]);
        let params = KeywordParams::default();
        let tokenizer = NounTokenizer::new(&analyzer, &params);
        assert_eq!(tokenizer.tokenize("whatever"), vec!["정원"]);
    }

    #[test]
    fn preserves_order_and_duplicates() {
        let analyzer = Scripted(vec![Analysis {
            morphemes: vec![
                Morpheme::new("정원", PosTag::CommonNoun),
                Morpheme::new("한옥", PosTag::CommonNoun),
                Morpheme::new("정원", PosTag::CommonNoun),
            ],
        }]);
        let params = KeywordParams::default();
        let tokenizer = NounTokenizer::new(&analyzer, &params);
        assert_eq!(tokenizer.tokenize("whatever"), vec!["정원", "한옥", "정원"]);
    }

    #[test]
    fn only_first_analysis_is_used() {
        let analyzer = Scripted(vec![
            Analysis {
                morphemes: vec![Morpheme::new("한옥", PosTag::CommonNoun)],
            },
            Analysis {
                morphemes: vec![Morpheme::new("정원", PosTag::CommonNoun)],
            },
        ]);
        let params = KeywordParams::default();
        let tokenizer = NounTokenizer::new(&analyzer, &params);
        assert_eq!(tokenizer.tokenize("whatever"), vec!["한옥"]);
    }

    #[test]
    fn empty_analysis_yields_no_tokens() {
        let analyzer = Scripted(Vec::new());
        let params = KeywordParams::default();
        let tokenizer = NounTokenizer::new(&analyzer, &params);
        assert!(tokenizer.tokenize("whatever").is_empty());
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn every_output_token_satisfies_the_invariants() {
        let params = KeywordParams::default();
        let analyzer = ParticleStripAnalyzer::new();
        let tokenizer = NounTokenizer::new(&analyzer, &params);
        let tokens = tokenizer.tokenize("양림동의 한옥과 정원은 근대 유산이다 집");
        assert!(!tokens.is_empty());
        for token in &tokens {
            assert!(token.chars().count() >= 2, "short token {token:?}");
            assert!(!params.stopwords.contains(token), "stopword {token:?}");
        }
    }
}
