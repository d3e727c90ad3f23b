//! Keyword ranking export.
//!
//! Writes the full per-district rankings as one flat CSV, district by
//! district in canonical order, rank starting at 1 within each district.
//! 기타 rows carry a 0.0 score like their in-memory ranking.

use crate::error::DataResult;
use atlas_core::District;
use atlas_keywords::RankedKeyword;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes rankings as `DIST,RANK,KEYWORD,SCORE_LOG_ODDS,COUNT_IN_DIST,COUNT_IN_OTHERS`.
pub fn write_keyword_rankings(
    path: &Path,
    rankings: &BTreeMap<District, Vec<RankedKeyword>>,
) -> DataResult<()> {
    let mut file = File::create(path)?;
    file.write_all("\u{feff}".as_bytes())?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record([
        "DIST",
        "RANK",
        "KEYWORD",
        "SCORE_LOG_ODDS",
        "COUNT_IN_DIST",
        "COUNT_IN_OTHERS",
    ])?;

    let mut rows = 0usize;
    for district in District::WITH_ETC {
        let Some(ranked) = rankings.get(&district) else {
            continue;
        };
        for (rank, keyword) in ranked.iter().enumerate() {
            writer.write_record([
                district.name().to_string(),
                (rank + 1).to_string(),
                keyword.token.clone(),
                format!("{:.6}", keyword.score),
                keyword.count_in_district.to_string(),
                keyword.count_in_rest.to_string(),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;

    info!(path = %path.display(), rows, "wrote keyword rankings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ranked(token: &str, score: f64, c1: u32, c0: u32) -> RankedKeyword {
        RankedKeyword {
            token: token.to_string(),
            score,
            count_in_district: c1,
            count_in_rest: c0,
        }
    }

    #[test]
    fn rows_follow_canonical_district_order_with_ranks() {
        let mut rankings = BTreeMap::new();
        rankings.insert(District::Nam, vec![ranked("한옥", 2.1, 5, 1)]);
        rankings.insert(
            District::Dong,
            vec![ranked("금남로", 3.0, 4, 0), ranked("전망대", 1.2, 2, 1)],
        );

        let dir = tempdir().unwrap();
        let path = dir.path().join("keywords.csv");
        write_keyword_rankings(&path, &rankings).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let text = text.trim_start_matches('\u{feff}');
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "DIST,RANK,KEYWORD,SCORE_LOG_ODDS,COUNT_IN_DIST,COUNT_IN_OTHERS"
        );
        // 동구 before 남구 regardless of BTreeMap key order.
        assert!(lines[1].starts_with("동구,1,금남로"));
        assert!(lines[2].starts_with("동구,2,전망대"));
        assert!(lines[3].starts_with("남구,1,한옥"));
    }

    #[test]
    fn empty_rankings_produce_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keywords.csv");
        write_keyword_rankings(&path, &BTreeMap::new()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim_start_matches('\u{feff}').lines().count(), 1);
    }
}
