//! Field extraction from schema-variable provider items.
//!
//! DataForSEO nests the keyword and its metrics under several
//! alternative paths depending on endpoint and response version. Each
//! field is resolved by an ordered list of paths probed in sequence;
//! the first present, non-null value wins. A null at an earlier path
//! falls through to later probes. Zero is a valid value and is never
//! treated as missing.

use serde_json::Value;

use crate::provider::RawItem;

/// Probe order for the keyword phrase.
const KEYWORD_PATHS: &[&[&str]] = &[&["keyword_data", "keyword"], &["keyword"]];

/// Probe order for search volume.
const VOLUME_PATHS: &[&[&str]] = &[
    &["keyword_data", "keyword_info", "search_volume"],
    &["keyword_info", "search_volume"],
    &["keyword_data", "search_volume"],
];

/// Probe order for keyword difficulty.
const DIFFICULTY_PATHS: &[&[&str]] = &[
    &["keyword_data", "keyword_properties", "keyword_difficulty"],
    &["keyword_properties", "keyword_difficulty"],
    &["keyword_data", "serp_info", "keyword_difficulty"],
    &["serp_info", "keyword_difficulty"],
];

/// A raw item normalized into its three interesting fields.
///
/// Absence is a first-class outcome here, not an error: records missing
/// a field are filtered downstream by the ranker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedRecord {
    /// The keyword phrase, if present.
    pub keyword: Option<String>,
    /// Estimated monthly search volume, if resolvable.
    pub search_volume: Option<u64>,
    /// Keyword difficulty score, if resolvable.
    pub keyword_difficulty: Option<f64>,
}

/// Normalize one raw provider item.
///
/// Pure and infallible. A value that is present but of the wrong type
/// (a string where a number belongs) resolves to absent.
pub fn extract(item: &RawItem) -> ExtractedRecord {
    ExtractedRecord {
        keyword: probe(item, KEYWORD_PATHS)
            .and_then(Value::as_str)
            .map(str::to_string),
        search_volume: probe(item, VOLUME_PATHS).and_then(Value::as_u64),
        keyword_difficulty: probe(item, DIFFICULTY_PATHS).and_then(Value::as_f64),
    }
}

/// Try each path in order; return the first present, non-null value.
fn probe<'a>(item: &'a Value, paths: &[&[&str]]) -> Option<&'a Value> {
    paths
        .iter()
        .find_map(|path| lookup(item, path).filter(|v| !v.is_null()))
}

/// Walk a nested object path, returning `None` at the first missing key.
fn lookup<'a>(item: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(item, |value, key| value.get(key))
}
