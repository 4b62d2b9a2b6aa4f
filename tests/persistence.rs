use chrono::{TimeZone, Utc};
use reelfind::domain::{FilterConfig, SortBy, MAX_HISTORY_ITEMS};
use reelfind::storage::{
    AppearanceStore, HistoryStore, JsonFileStore, KeyValueStore, PreferenceStore,
    FILTER_PREFERENCES_KEY, SEARCH_HISTORY_KEY,
};
use reelfind::{initialize, Config};
use std::collections::BTreeSet;

fn file_store(dir: &tempfile::TempDir) -> Box<dyn KeyValueStore> {
    Box::new(JsonFileStore::new(dir.path().to_path_buf()).unwrap())
}

#[test]
fn filters_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let filters = FilterConfig {
        year_range: (1970, 1999),
        genres: BTreeSet::from(["Crime".to_string(), "Thriller".to_string()]),
        sort_by: SortBy::TitleAsc,
    };

    PreferenceStore::load(file_store(&dir)).set(filters.clone()).unwrap();

    let reopened = PreferenceStore::load(file_store(&dir));
    assert_eq!(reopened.get(), &filters);
}

#[test]
fn reset_removes_persisted_filters() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = PreferenceStore::load(file_store(&dir));
    store.update(|f| f.toggle_genre("Horror")).unwrap();
    assert!(file_store(&dir).get(FILTER_PREFERENCES_KEY).unwrap().is_some());

    store.reset().unwrap();
    assert_eq!(store.get(), &FilterConfig::default());
    assert_eq!(file_store(&dir).get(FILTER_PREFERENCES_KEY).unwrap(), None);
    assert_eq!(PreferenceStore::load(file_store(&dir)).get(), &FilterConfig::default());
}

#[test]
fn corrupt_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{FILTER_PREFERENCES_KEY}.json")), "{not json").unwrap();
    std::fs::write(dir.path().join(format!("{SEARCH_HISTORY_KEY}.json")), "[1, 2, 3]").unwrap();

    assert_eq!(PreferenceStore::load(file_store(&dir)).get(), &FilterConfig::default());
    assert!(HistoryStore::load(file_store(&dir)).get().is_empty());
}

#[test]
fn repeated_query_moves_to_front() {
    let dir = tempfile::tempdir().unwrap();
    let mut history = HistoryStore::load(file_store(&dir));
    let at = |secs: i64| Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap();

    history.add_at("alien", at(1)).unwrap();
    history.add_at("matrix", at(2)).unwrap();
    history.add_at("alien", at(3)).unwrap();

    let reopened = HistoryStore::load(file_store(&dir));
    let queries: Vec<&str> = reopened.get().queries().collect();
    assert_eq!(queries, vec!["alien", "matrix"]);
    assert_eq!(reopened.get().entries(), history.get().entries());
}

#[test]
fn oldest_query_is_dropped_after_five() {
    let dir = tempfile::tempdir().unwrap();
    let mut history = HistoryStore::load(file_store(&dir));
    for i in 1..=6 {
        history.add(&format!("q{i}")).unwrap();
    }

    let reopened = HistoryStore::load(file_store(&dir));
    let queries: Vec<&str> = reopened.get().queries().collect();
    assert_eq!(queries, vec!["q6", "q5", "q4", "q3", "q2"]);
}

#[test]
fn history_stays_bounded_and_unique() {
    let mut history = HistoryStore::load(Box::new(reelfind::storage::MemoryStore::new()));
    let sequence = ["a", "b", "a", "c", "d", "b", "e", "f", "g", "a", "a", "h"];

    for query in sequence {
        history.add(query).unwrap();
        let queries: Vec<&str> = history.get().queries().collect();
        assert!(queries.len() <= MAX_HISTORY_ITEMS);
        assert_eq!(queries[0], query);
        let unique: BTreeSet<&str> = queries.iter().copied().collect();
        assert_eq!(unique.len(), queries.len());
    }
}

#[test]
fn dark_mode_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    AppearanceStore::load(file_store(&dir)).toggle().unwrap();
    assert!(AppearanceStore::load(file_store(&dir)).is_dark());
}

#[test]
fn initialize_reads_existing_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: dir.path().join("nested"),
        ..Config::default()
    };

    let mut first = initialize(&config, true).unwrap();
    first.history.add("heat").unwrap();
    first.appearance.toggle().unwrap();

    let second = initialize(&config, true).unwrap();
    assert_eq!(second.history.get().queries().next(), Some("heat"));
    assert!(second.appearance.is_dark());
}
