//! Integration tests for the extract → rank pipeline and bulk
//! aggregation semantics, using scripted providers (no network calls).

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::json;

use keyword_finder::{
    find_keywords_bulk_with, find_keywords_with, FinderConfig, FinderError, RawItem,
    RelatedKeywordsProvider, Result,
};

/// Per-seed scripted behaviour.
enum Scripted {
    Items(Vec<RawItem>),
    ProviderError(String),
    TransportError(String),
}

/// A provider that replays a script per seed and records which seeds
/// were attempted.
struct ScriptedProvider {
    responses: HashMap<String, Scripted>,
    attempted: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(responses: Vec<(&str, Scripted)>) -> Self {
        Self {
            responses: responses
                .into_iter()
                .map(|(seed, scripted)| (seed.to_string(), scripted))
                .collect(),
            attempted: Mutex::new(Vec::new()),
        }
    }

    fn attempted(&self) -> Vec<String> {
        self.attempted.lock().expect("lock").clone()
    }
}

impl RelatedKeywordsProvider for ScriptedProvider {
    async fn related_keywords(
        &self,
        seed_keyword: &str,
        _config: &FinderConfig,
    ) -> Result<Vec<RawItem>> {
        self.attempted
            .lock()
            .expect("lock")
            .push(seed_keyword.to_string());
        match self.responses.get(seed_keyword) {
            Some(Scripted::Items(items)) => Ok(items.clone()),
            Some(Scripted::ProviderError(message)) => Err(FinderError::Provider(message.clone())),
            Some(Scripted::TransportError(message)) => {
                Err(FinderError::Transport(message.clone()))
            }
            None => Ok(vec![]),
        }
    }
}

/// No cache, no inter-seed delay — tests exercise pure semantics.
fn test_config() -> FinderConfig {
    FinderConfig {
        cache_ttl_seconds: 0,
        seed_delay_ms: 0,
        ..Default::default()
    }
}

/// A raw item in the fully nested shape.
fn nested_item(keyword: &str, volume: u64, difficulty: f64) -> RawItem {
    json!({
        "keyword_data": {
            "keyword": keyword,
            "keyword_info": {"search_volume": volume},
            "keyword_properties": {"keyword_difficulty": difficulty}
        }
    })
}

#[tokio::test]
async fn single_seed_end_to_end_worked_example() {
    // c excluded (difficulty >= 40), d excluded (volume absent).
    let provider = ScriptedProvider::new(vec![(
        "seed",
        Scripted::Items(vec![
            nested_item("a", 500, 10.0),
            nested_item("b", 500, 5.0),
            nested_item("c", 900, 50.0),
            json!({"keyword_data": {
                "keyword": "d",
                "keyword_properties": {"keyword_difficulty": 3.0}
            }}),
        ]),
    )]);

    let ranked = find_keywords_with(&provider, "seed", &test_config())
        .await
        .expect("should succeed");

    let keywords: Vec<&str> = ranked.iter().map(|m| m.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["b", "a"]);
}

#[tokio::test]
async fn mixed_response_shapes_normalize_uniformly() {
    // The same logical data under three different provider nestings.
    let provider = ScriptedProvider::new(vec![(
        "seed",
        Scripted::Items(vec![
            nested_item("deep", 300, 10.0),
            json!({
                "keyword": "flat",
                "keyword_info": {"search_volume": 200},
                "keyword_properties": {"keyword_difficulty": 15.0}
            }),
            json!({
                "keyword": "serp",
                "keyword_info": {"search_volume": 100},
                "serp_info": {"keyword_difficulty": 20.0}
            }),
        ]),
    )]);

    let ranked = find_keywords_with(&provider, "seed", &test_config())
        .await
        .expect("should succeed");

    let keywords: Vec<&str> = ranked.iter().map(|m| m.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["deep", "flat", "serp"]);
}

#[tokio::test]
async fn bulk_accumulates_tags_and_sorts_globally() {
    let provider = ScriptedProvider::new(vec![
        (
            "shoes",
            Scripted::Items(vec![
                nested_item("running shoes", 500, 10.0),
                nested_item("trail shoes", 100, 5.0),
            ]),
        ),
        (
            "mats",
            Scripted::Items(vec![nested_item("yoga mats", 900, 20.0)]),
        ),
    ]);
    let seeds = vec!["shoes".to_string(), "mats".to_string()];

    let report = find_keywords_bulk_with(&provider, &seeds, &test_config())
        .await
        .expect("should succeed");

    assert!(!report.halted);
    assert!(report.errors.is_empty());

    // Globally sorted by volume across both seeds.
    let rows: Vec<(&str, &str, u64)> = report
        .keywords
        .iter()
        .map(|row| {
            (
                row.seed_keyword.as_str(),
                row.metric.keyword.as_str(),
                row.metric.search_volume,
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("mats", "yoga mats", 900),
            ("shoes", "running shoes", 500),
            ("shoes", "trail shoes", 100),
        ]
    );
}

#[tokio::test]
async fn bulk_deduplicates_by_keyword_and_seed_pair() {
    // Duplicate items within one seed collapse; the same keyword under
    // a different seed stays.
    let provider = ScriptedProvider::new(vec![
        (
            "a",
            Scripted::Items(vec![
                nested_item("shared", 500, 10.0),
                nested_item("shared", 500, 10.0),
            ]),
        ),
        ("b", Scripted::Items(vec![nested_item("shared", 500, 10.0)])),
    ]);
    let seeds = vec!["a".to_string(), "b".to_string()];

    let report = find_keywords_bulk_with(&provider, &seeds, &test_config())
        .await
        .expect("should succeed");

    assert_eq!(report.keywords.len(), 2);
    let seed_tags: Vec<&str> = report
        .keywords
        .iter()
        .map(|row| row.seed_keyword.as_str())
        .collect();
    assert!(seed_tags.contains(&"a"));
    assert!(seed_tags.contains(&"b"));
}

#[tokio::test]
async fn bulk_quota_error_halts_and_surfaces_partial_results() {
    // Seed "y" fails with a credit message → "z" must never run.
    let provider = ScriptedProvider::new(vec![
        ("x", Scripted::Items(vec![nested_item("from x", 100, 5.0)])),
        (
            "y",
            Scripted::ProviderError("account has no remaining credits".into()),
        ),
        ("z", Scripted::Items(vec![nested_item("from z", 200, 5.0)])),
    ]);
    let seeds = vec!["x".to_string(), "y".to_string(), "z".to_string()];

    let report = find_keywords_bulk_with(&provider, &seeds, &test_config())
        .await
        .expect("should succeed");

    assert!(report.halted);
    assert_eq!(report.keywords.len(), 1);
    assert_eq!(report.keywords[0].metric.keyword, "from x");

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].seed_keyword, "y");
    assert!(report.errors[0].error.contains("credits"));

    assert_eq!(provider.attempted(), vec!["x", "y"]);
}

#[tokio::test]
async fn bulk_transport_error_records_and_continues() {
    let provider = ScriptedProvider::new(vec![
        ("x", Scripted::TransportError("connection reset".into())),
        ("y", Scripted::Items(vec![nested_item("from y", 100, 5.0)])),
    ]);
    let seeds = vec!["x".to_string(), "y".to_string()];

    let report = find_keywords_bulk_with(&provider, &seeds, &test_config())
        .await
        .expect("should succeed");

    assert!(!report.halted);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].seed_keyword, "x");
    assert_eq!(report.keywords.len(), 1);
    assert_eq!(provider.attempted(), vec!["x", "y"]);
}

#[tokio::test]
async fn bulk_transport_error_mentioning_credit_does_not_halt() {
    // Only provider messages classify as quota exhaustion.
    let provider = ScriptedProvider::new(vec![
        (
            "x",
            Scripted::TransportError("credit card gateway timed out".into()),
        ),
        ("y", Scripted::Items(vec![nested_item("from y", 100, 5.0)])),
    ]);
    let seeds = vec!["x".to_string(), "y".to_string()];

    let report = find_keywords_bulk_with(&provider, &seeds, &test_config())
        .await
        .expect("should succeed");

    assert!(!report.halted);
    assert_eq!(provider.attempted(), vec!["x", "y"]);
}

#[tokio::test]
async fn bulk_ordering_invariant_holds_after_every_merge() {
    let provider = ScriptedProvider::new(vec![
        (
            "s1",
            Scripted::Items(vec![
                nested_item("k1", 300, 30.0),
                nested_item("k2", 300, 10.0),
            ]),
        ),
        (
            "s2",
            Scripted::Items(vec![
                nested_item("k3", 300, 20.0),
                nested_item("k4", 800, 35.0),
            ]),
        ),
    ]);
    let seeds = vec!["s1".to_string(), "s2".to_string()];

    let report = find_keywords_bulk_with(&provider, &seeds, &test_config())
        .await
        .expect("should succeed");

    for pair in report.keywords.windows(2) {
        assert!(pair[0].metric.search_volume >= pair[1].metric.search_volume);
        if pair[0].metric.search_volume == pair[1].metric.search_volume {
            assert!(pair[0].metric.keyword_difficulty <= pair[1].metric.keyword_difficulty);
        }
    }
    // k4 (volume 800) leads; k2/k3/k1 tie on volume, ordered by difficulty.
    let keywords: Vec<&str> = report
        .keywords
        .iter()
        .map(|row| row.metric.keyword.as_str())
        .collect();
    assert_eq!(keywords, vec!["k4", "k2", "k3", "k1"]);
}

#[tokio::test]
async fn bulk_seed_with_no_results_adds_nothing() {
    let provider = ScriptedProvider::new(vec![
        ("empty", Scripted::Items(vec![])),
        ("full", Scripted::Items(vec![nested_item("kw", 100, 5.0)])),
    ]);
    let seeds = vec!["empty".to_string(), "full".to_string()];

    let report = find_keywords_bulk_with(&provider, &seeds, &test_config())
        .await
        .expect("should succeed");

    assert!(report.errors.is_empty());
    assert_eq!(report.keywords.len(), 1);
}

#[tokio::test]
async fn bulk_blank_seed_records_config_error_and_continues() {
    let provider = ScriptedProvider::new(vec![(
        "ok",
        Scripted::Items(vec![nested_item("kw", 100, 5.0)]),
    )]);
    let seeds = vec!["  ".to_string(), "ok".to_string()];

    let report = find_keywords_bulk_with(&provider, &seeds, &test_config())
        .await
        .expect("should succeed");

    assert!(!report.halted);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.keywords.len(), 1);
    // The blank seed never reached the provider.
    assert_eq!(provider.attempted(), vec!["ok"]);
}
