//! Boilerplate stripping for facility descriptions.
//!
//! Description text is full of registry numbers, years, and ceremonial
//! ordinals that would otherwise dominate the token counts. One pass of
//! [`normalize`] removes them, in a pinned order:
//!
//! 1. The literal `5·18` becomes `오월민주화`. The date is a semantic
//!    label here, and the numeric rules below would otherwise destroy it.
//! 2. Ordinal patterns (`제 N 호`, `제 N 회`).
//! 3. Three/four-digit year mentions (`1925년`).
//! 4. Remaining standalone numbers, integer or decimal.
//! 5. Punctuation, except `·` which joins Korean compound nouns.
//! 6. Whitespace runs collapse to a single space.
//!
//! The numeric rules must run before the punctuation rule: stripping
//! punctuation first would split decimals and ordinals into bare digit
//! runs the earlier patterns no longer recognize.

use regex::Regex;
use std::sync::LazyLock;

static RE_ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"제\s*\d+\s*(?:호|회)").expect("ordinal pattern is valid"));
static RE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3,4}\s*년").expect("year pattern is valid"));
static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("number pattern is valid"));
static RE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s·]").expect("punctuation pattern is valid"));
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// The literal date sequence that must survive numeric stripping.
const MAY_18_LITERAL: &str = "5·18";
/// Its semantic replacement.
const MAY_18_LABEL: &str = "오월민주화";

/// Strips boilerplate from a description, returning normalized text.
///
/// Idempotent: running the result through `normalize` again changes
/// nothing. Empty input yields an empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    let t = text.replace(MAY_18_LITERAL, MAY_18_LABEL);
    let t = RE_ORDINAL.replace_all(&t, " ");
    let t = RE_YEAR.replace_all(&t, " ");
    let t = RE_NUMBER.replace_all(&t, " ");
    let t = RE_PUNCT.replace_all(&t, " ");
    let t = RE_WHITESPACE.replace_all(&t, " ");
    t.trim().to_string()
}
