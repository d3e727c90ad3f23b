//! Administrative districts of Gwangju and their derivation from addresses.
//!
//! Gwangju has exactly five autonomous districts. Every facility record is
//! labeled with one of them, or with the [`District::Etc`] sentinel when its
//! address mentions none. The sentinel is a first-class variant rather than
//! an `Option` so that a record can never carry a missing district label.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// One of the five autonomous districts of Gwangju, or the `Etc` bucket for
/// addresses that name none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum District {
    /// 동구 (Dong-gu)
    Dong,
    /// 서구 (Seo-gu)
    Seo,
    /// 남구 (Nam-gu)
    Nam,
    /// 북구 (Buk-gu)
    Buk,
    /// 광산구 (Gwangsan-gu)
    Gwangsan,
    /// 기타: the address matched no district literal.
    Etc,
}

// Leftmost occurrence in the address wins. None of the two-character names
// occurs inside 광산구, so plain alternation is safe.
static DISTRICT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("동구|서구|남구|북구|광산구").expect("district pattern is valid"));

impl District {
    /// The five real districts, in the canonical 동/서/남/북/광산 order used
    /// by every export and by the map legend.
    pub const ALL: [District; 5] = [
        District::Dong,
        District::Seo,
        District::Nam,
        District::Buk,
        District::Gwangsan,
    ];

    /// The five districts plus the `Etc` bucket, in canonical order.
    pub const WITH_ETC: [District; 6] = [
        District::Dong,
        District::Seo,
        District::Nam,
        District::Buk,
        District::Gwangsan,
        District::Etc,
    ];

    /// The Korean name of the district as it appears in address text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            District::Dong => "동구",
            District::Seo => "서구",
            District::Nam => "남구",
            District::Buk => "북구",
            District::Gwangsan => "광산구",
            District::Etc => "기타",
        }
    }

    /// Marker color used by the map renderer for this district's layer.
    #[must_use]
    pub const fn marker_color(self) -> &'static str {
        match self {
            District::Dong => "blue",
            District::Seo => "red",
            District::Nam => "green",
            District::Buk => "purple",
            District::Gwangsan => "orange",
            District::Etc => "gray",
        }
    }

    /// Extracts the district from a raw address string.
    ///
    /// The leftmost occurrence of any district literal wins. An address
    /// mentioning no district yields [`District::Etc`].
    #[must_use]
    pub fn from_address(address: &str) -> District {
        match DISTRICT_PATTERN.find(address) {
            Some(m) => District::from_name(m.as_str()).unwrap_or(District::Etc),
            None => District::Etc,
        }
    }

    /// Looks up a district by its Korean name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<District> {
        District::WITH_ETC.iter().copied().find(|d| d.name() == name)
    }

    /// Whether this is the `Etc` sentinel rather than a real district.
    #[must_use]
    pub const fn is_etc(self) -> bool {
        matches!(self, District::Etc)
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_address_matches_each_district() {
        assert_eq!(
            District::from_address("광주광역시 동구 금남로 245"),
            District::Dong
        );
        assert_eq!(
            District::from_address("광주광역시 광산구 소촌로"),
            District::Gwangsan
        );
        assert_eq!(District::from_address("광주 북구 용봉로 77"), District::Buk);
    }

    #[test]
    fn from_address_leftmost_literal_wins() {
        // Both 서구 and 남구 appear; 서구 comes first in the string.
        assert_eq!(
            District::from_address("광주 서구 남구청 방면"),
            District::Seo
        );
    }

    #[test]
    fn from_address_without_district_is_etc() {
        assert_eq!(District::from_address("전라남도 담양군 고서면"), District::Etc);
        assert_eq!(District::from_address(""), District::Etc);
    }

    #[test]
    fn from_name_roundtrip() {
        for district in District::WITH_ETC {
            assert_eq!(District::from_name(district.name()), Some(district));
        }
        assert_eq!(District::from_name("강남구"), None);
    }

    #[test]
    fn canonical_order_is_stable() {
        let names: Vec<&str> = District::WITH_ETC.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["동구", "서구", "남구", "북구", "광산구", "기타"]);
    }

    #[test]
    fn every_district_has_a_color() {
        for district in District::WITH_ETC {
            assert!(!district.marker_color().is_empty());
        }
    }
}
