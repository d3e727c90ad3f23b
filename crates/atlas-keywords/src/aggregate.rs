//! Grouping tokenized descriptions by district.

use crate::analyzer::MorphAnalyzer;
use crate::counter::FrequencyCounter;
use crate::normalize::normalize;
use crate::tokenize::NounTokenizer;
use atlas_core::{District, Record};
use std::collections::HashMap;

/// Builds one frequency counter per district from the records' descriptions.
///
/// Every district in `districts` gets a counter, empty when no record
/// matches. Records whose district is not in `districts` are ignored, as are
/// records without a description. The 기타 bucket is aggregated like any
/// other; its different ranking policy is applied later.
#[must_use]
pub fn aggregate_by_district<A: MorphAnalyzer>(
    records: &[Record],
    districts: &[District],
    tokenizer: &NounTokenizer<'_, A>,
) -> HashMap<District, FrequencyCounter> {
    let mut counters: HashMap<District, FrequencyCounter> = districts
        .iter()
        .map(|&d| (d, FrequencyCounter::new()))
        .collect();

    for record in records {
        let Some(counter) = counters.get_mut(&record.district) else {
            continue;
        };
        let Some(description) = record.description.as_deref() else {
            continue;
        };
        let normalized = normalize(description);
        counter.extend(tokenizer.tokenize(&normalized));
    }

    counters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::ParticleStripAnalyzer;
    use crate::config::KeywordParams;

    fn record(district_address: &str, description: Option<&str>) -> Record {
        Record::new(
            "시설",
            district_address,
            description.map(str::to_string),
            None,
            None,
        )
    }

    #[test]
    fn groups_tokens_by_district() {
        let records = vec![
            record("광주 동구 금남로", Some("한옥과 정원")),
            record("광주 동구 충장로", Some("한옥 마당")),
            record("광주 서구 상무대로", Some("아파트 단지")),
        ];
        let params = KeywordParams::default();
        let analyzer = ParticleStripAnalyzer::new();
        let tokenizer = NounTokenizer::new(&analyzer, &params);

        let counters = aggregate_by_district(&records, &District::WITH_ETC, &tokenizer);

        assert_eq!(counters[&District::Dong].get("한옥"), 2);
        assert_eq!(counters[&District::Dong].get("정원"), 1);
        assert_eq!(counters[&District::Seo].get("아파트"), 1);
        assert!(counters[&District::Nam].is_empty());
    }

    #[test]
    fn missing_descriptions_contribute_nothing() {
        let records = vec![
            record("광주 북구 용봉로", None),
            record("광주 북구 우치로", Some("")),
        ];
        let params = KeywordParams::default();
        let analyzer = ParticleStripAnalyzer::new();
        let tokenizer = NounTokenizer::new(&analyzer, &params);

        let counters = aggregate_by_district(&records, &District::WITH_ETC, &tokenizer);
        assert!(counters[&District::Buk].is_empty());
    }

    #[test]
    fn counter_total_matches_filtered_token_count() {
        let records = vec![record("광주 남구 제중로", Some("양림동의 한옥과 정원과 한옥"))];
        let params = KeywordParams::default();
        let analyzer = ParticleStripAnalyzer::new();
        let tokenizer = NounTokenizer::new(&analyzer, &params);

        let normalized = normalize("양림동의 한옥과 정원과 한옥");
        let expected = tokenizer.tokenize(&normalized).len() as u64;

        let counters = aggregate_by_district(&records, &District::WITH_ETC, &tokenizer);
        assert_eq!(counters[&District::Nam].total(), expected);
        assert!(expected >= 3);
    }

    #[test]
    fn districts_outside_the_set_are_ignored() {
        let records = vec![record("담양군 고서면", Some("정자와 원림"))];
        let params = KeywordParams::default();
        let analyzer = ParticleStripAnalyzer::new();
        let tokenizer = NounTokenizer::new(&analyzer, &params);

        // Only the five real districts: the Etc record has no bucket.
        let counters = aggregate_by_district(&records, &District::ALL, &tokenizer);
        assert_eq!(counters.len(), 5);
        assert!(counters.values().all(FrequencyCounter::is_empty));
    }
}
