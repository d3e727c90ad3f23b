//! Morphological analysis seam.
//!
//! Segmenting Korean text into tagged morphemes is the job of an external
//! analyzer; this crate only consumes its output. [`MorphAnalyzer`] is the
//! injection point: an implementation returns candidate analyses, each a
//! sequence of `(surface, part-of-speech)` morphemes, and the tokenizer
//! reads only the first analysis.
//!
//! [`ParticleStripAnalyzer`] is the built-in implementation: it splits on
//! unicode word boundaries, strips one trailing particle (조사) from each
//! Hangul word, and tags the stem. It has no dictionary, so it cannot
//! separate common from proper nouns and tags every surviving stem as a
//! common noun. That is adequate for batch keyword statistics, and swappable
//! for a dictionary analyzer behind the trait.

use unicode_segmentation::UnicodeSegmentation;

/// Part-of-speech tag of a morpheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    /// 일반명사, common noun.
    CommonNoun,
    /// 고유명사, proper noun.
    ProperNoun,
    /// Verbal or adjectival form.
    Predicate,
    /// 조사, postpositional particle.
    Particle,
    /// Anything else (foreign words, symbols, unrecognized stems).
    Other,
}

impl PosTag {
    /// Whether this tag is one the noun tokenizer keeps.
    #[must_use]
    pub const fn is_noun(self) -> bool {
        matches!(self, PosTag::CommonNoun | PosTag::ProperNoun)
    }
}

/// One segmented unit of text with its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub surface: String,
    pub tag: PosTag,
}

impl Morpheme {
    #[must_use]
    pub fn new(surface: impl Into<String>, tag: PosTag) -> Self {
        Self {
            surface: surface.into(),
            tag,
        }
    }
}

/// One candidate segmentation of an input string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub morphemes: Vec<Morpheme>,
}

/// A morphological analyzer collaborator.
///
/// Returns candidate analyses ordered best-first; an empty vector means the
/// analyzer produced no segmentation, which downstream code treats as zero
/// tokens rather than an error.
pub trait MorphAnalyzer {
    fn analyze(&self, text: &str) -> Vec<Analysis>;
}

// Trailing particles stripped by the built-in analyzer, longest first so a
// compound particle is removed before its suffix would match.
const PARTICLES: &[&str] = &[
    "에서부터", "으로부터", "에서는", "에게서", "으로서", "으로써", "까지", "부터", "에서",
    "에게", "마저", "조차", "처럼", "보다", "이나", "에는", "에도", "와의", "과의", "으로",
    "은", "는", "이", "가", "을", "를", "과", "와", "의", "에", "도", "만", "로",
];

// Verbal/adjectival endings; a word ending in one of these is a predicate,
// not a noun candidate.
const PREDICATE_ENDINGS: &[&str] = &[
    "습니다", "하였다", "되었다", "있다", "없다", "이다", "하다", "되다", "한다", "된다",
    "하는", "되는", "하여", "되어", "해서", "였다", "았다", "었다",
];

/// Dictionary-free analyzer: unicode word segmentation plus particle
/// stripping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParticleStripAnalyzer;

impl ParticleStripAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn tag_word(word: &str) -> Morpheme {
        // `·` joins compound nouns (한옥·정원) and stays part of the token.
        if !word.chars().all(|c| is_hangul(c) || c == '·') {
            return Morpheme::new(word, PosTag::Other);
        }
        if PREDICATE_ENDINGS.iter().any(|e| word.ends_with(e)) {
            return Morpheme::new(word, PosTag::Predicate);
        }
        for particle in PARTICLES {
            if let Some(stem) = word.strip_suffix(particle) {
                if !stem.is_empty() {
                    return Morpheme::new(stem, PosTag::CommonNoun);
                }
            }
        }
        Morpheme::new(word, PosTag::CommonNoun)
    }
}

impl MorphAnalyzer for ParticleStripAnalyzer {
    fn analyze(&self, text: &str) -> Vec<Analysis> {
        let morphemes: Vec<Morpheme> = text
            .unicode_words()
            .map(Self::tag_word)
            .collect();
        if morphemes.is_empty() {
            return Vec::new();
        }
        vec![Analysis { morphemes }]
    }
}

/// Whether a character is a precomposed Hangul syllable.
fn is_hangul(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_surfaces(text: &str) -> Vec<(String, PosTag)> {
        let analyses = ParticleStripAnalyzer::new().analyze(text);
        analyses
            .first()
            .map(|a| {
                a.morphemes
                    .iter()
                    .map(|m| (m.surface.clone(), m.tag))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn empty_text_yields_no_analysis() {
        assert!(ParticleStripAnalyzer::new().analyze("").is_empty());
        assert!(ParticleStripAnalyzer::new().analyze("   ").is_empty());
    }

    #[test]
    fn particles_are_stripped_from_nouns() {
        let out = analyze_surfaces("한옥의 정원에서 나무를");
        assert_eq!(
            out,
            vec![
                ("한옥".to_string(), PosTag::CommonNoun),
                ("정원".to_string(), PosTag::CommonNoun),
                ("나무".to_string(), PosTag::CommonNoun),
            ]
        );
    }

    #[test]
    fn longest_particle_wins() {
        let out = analyze_surfaces("마당에서부터");
        assert_eq!(out, vec![("마당".to_string(), PosTag::CommonNoun)]);
    }

    #[test]
    fn predicates_are_not_nouns() {
        let out = analyze_surfaces("건립되었다 사용하였다");
        assert!(out.iter().all(|(_, tag)| *tag == PosTag::Predicate));
    }

    #[test]
    fn compound_nouns_keep_the_interpunct() {
        let out = analyze_surfaces("한옥·정원의 마을");
        assert_eq!(out[0], ("한옥·정원".to_string(), PosTag::CommonNoun));
    }

    #[test]
    fn non_hangul_words_are_other() {
        let out = analyze_surfaces("ACC 근처");
        assert_eq!(out[0], ("ACC".to_string(), PosTag::Other));
        assert_eq!(out[1].1, PosTag::CommonNoun);
    }

    #[test]
    fn stripping_never_leaves_an_empty_stem() {
        // 가 alone is itself a particle-shaped word; the stem would be empty,
        // so the word is kept whole.
        let out = analyze_surfaces("가");
        assert_eq!(out, vec![("가".to_string(), PosTag::CommonNoun)]);
    }
}
