use futures::TryStreamExt;
use tagsift_search::{AsyncSearchEngine, SearchConfig, SyncSearchEngine, TagExtractor};
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq)]
struct Recipe {
    title: String,
    tags: Vec<String>,
}

fn recipe(title: &str) -> Recipe {
    Recipe {
        title: title.to_string(),
        tags: vec![title.to_string()],
    }
}

struct RecipeTags;

impl TagExtractor<Recipe> for RecipeTags {
    fn tags(&self, item: &Recipe) -> Option<Vec<String>> {
        Some(item.tags.clone())
    }
}

fn pantry() -> Vec<Recipe> {
    vec![recipe("Apple Pie"), recipe("Banana"), recipe("Pineapple")]
}

fn case_insensitive() -> SearchConfig {
    SearchConfig::new()
        .with_ignore_case(true)
        .with_ignore_spaces(false)
}

/// Verify the blocking engine keeps input order and drops non-matching items.
#[test]
fn test_sync_ppl_finds_apple_pie_and_pineapple() {
    let items = pantry();
    let engine = SyncSearchEngine::new(case_insensitive());

    let results = engine.search("ppl", &items, &RecipeTags).unwrap();

    let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple Pie", "Pineapple"]);
}

/// Verify the streaming engine yields the same sequence.
#[tokio::test]
async fn test_stream_ppl_finds_apple_pie_and_pineapple() {
    let engine = AsyncSearchEngine::new(case_insensitive());

    let found: Vec<Recipe> = engine
        .search("ppl", pantry(), RecipeTags)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(found, vec![recipe("Apple Pie"), recipe("Pineapple")]);
}

/// Verify streaming works on a multi-threaded runtime too.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_stream_on_multi_thread_runtime() {
    let items: Vec<Recipe> = (0..500)
        .map(|i| recipe(&format!("dish {i}")))
        .collect();
    let sync_results = SyncSearchEngine::new(case_insensitive())
        .search("d7", &items, &RecipeTags)
        .unwrap()
        .to_vec();

    let found: Vec<Recipe> = AsyncSearchEngine::new(case_insensitive())
        .search("d7", items, RecipeTags)
        .try_collect()
        .await
        .unwrap();

    assert!(!found.is_empty());
    assert_eq!(found, sync_results);
}

/// Verify a config file drives both engines identically.
#[test]
fn test_engines_accept_loaded_config() {
    let config = toml_config("ignore_case = true\nshow_all_on_empty_query = true\n");
    let items = pantry();

    let sync = SyncSearchEngine::new(config);
    assert_eq!(sync.search("", &items, &RecipeTags).unwrap().len(), 3);

    let stream = AsyncSearchEngine::new(config);
    assert!(stream.ignore_case());
    assert!(stream.show_all_on_empty_query());
    assert!(!stream.ignore_spaces());
}

fn toml_config(content: &str) -> SearchConfig {
    let dir = TempDir::new().unwrap();
    let path = SearchConfig::path(dir.path());
    std::fs::write(&path, content).unwrap();
    SearchConfig::load(&path).unwrap()
}
