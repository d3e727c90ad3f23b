//! Read-only parameters for the keyword pipeline.
//!
//! Everything that varies between runs (smoothing strength, ranking depth,
//! noise floor, stopword vocabulary) lives in one [`KeywordParams`] value,
//! constructed once and passed by reference. Nothing mutates it after
//! construction.

use std::collections::HashSet;

/// Domain stopwords: registry and heritage boilerplate, construction
/// vocabulary, generic place/predicate words, and the district names
/// themselves. These occur in almost every description and carry no
/// district-distinguishing signal.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    // Registry / designation boilerplate
    "광주",
    "광주광역시",
    "대한민국",
    "국가",
    "등록",
    "등록문화재",
    "국가등록문화재",
    "유형문화재",
    "문화재자료",
    "기념물",
    "명승",
    "사적",
    "지정",
    "승격",
    // Era labels
    "조선시대",
    "일제강점기",
    "근대",
    "현대",
    // Construction history vocabulary
    "개관",
    "준공",
    "완공",
    "증축",
    "중건",
    "복원",
    "보수",
    "이전",
    "신축",
    "리모델링",
    // Generic architecture/place words
    "건물",
    "건축",
    "건축물",
    "시설",
    "공간",
    "장소",
    "지역",
    "현재",
    "당시",
    "규모",
    "구성",
    "가치",
    "특징",
    "활용",
    "사용",
    "부문",
    // Predicate-like words that survive tokenization
    "있다",
    "이다",
    "한다",
    "있는",
    "대한",
    "위해",
    "관련",
    // District names
    "동구",
    "서구",
    "남구",
    "북구",
    "광산구",
];

/// Minimum token length in code points; single-syllable nouns are noise.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Parameters for tokenization and ranking.
#[derive(Debug, Clone)]
pub struct KeywordParams {
    /// Dirichlet pseudo-count added to every token's count.
    pub alpha: f64,

    /// How many ranked keywords to keep per district.
    pub top_n: usize,

    /// A token must occur at least this often in the target district to be
    /// a ranking candidate. Only the target count is checked.
    pub min_count: u32,

    /// Minimum token length in code points.
    pub min_token_chars: usize,

    /// Tokens excluded from every counter.
    pub stopwords: HashSet<String>,
}

impl KeywordParams {
    /// Parameters with the given ranking knobs and the default stopword set.
    #[must_use]
    pub fn new(alpha: f64, top_n: usize, min_count: u32) -> Self {
        Self {
            alpha,
            top_n,
            min_count,
            ..Self::default()
        }
    }

    /// Whether a token passes the length and stopword filters.
    #[must_use]
    pub fn keeps_token(&self, token: &str) -> bool {
        token.chars().count() >= self.min_token_chars && !self.stopwords.contains(token)
    }
}

impl Default for KeywordParams {
    fn default() -> Self {
        Self {
            alpha: 0.01,
            top_n: 15,
            min_count: 2,
            min_token_chars: MIN_TOKEN_CHARS,
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
