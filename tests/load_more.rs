mod common;

use common::{numbered, StubSource};
use country_explorer::app::{DirectoryOptions, DirectoryStore};
use std::sync::Arc;
use std::time::Duration;

fn paced_store(records: usize) -> DirectoryStore {
    let source = StubSource::new().respond(Ok(numbered(records)));
    DirectoryStore::new(Arc::new(source), DirectoryOptions::default())
}

#[tokio::test(start_paused = true)]
async fn load_more_reveals_next_page() {
    let store = paced_store(20);
    store.fetch_countries().await;

    assert_eq!(store.visible_records().len(), 12);
    assert!(store.has_more());

    store.load_more().await;

    assert_eq!(store.visible_count(), 24);
    assert_eq!(store.visible_records().len(), 20);
    assert!(!store.has_more());
    assert!(!store.is_loading_more());
}

#[tokio::test(start_paused = true)]
async fn loading_more_flag_is_set_during_delay() {
    let store = paced_store(30);
    store.fetch_countries().await;

    let load = store.load_more();
    tokio::pin!(load);

    tokio::select! {
        biased;
        () = &mut load => panic!("load_more finished before its delay"),
        () = tokio::time::sleep(Duration::from_millis(100)) => {}
    }

    assert!(store.is_loading_more());
    assert_eq!(store.visible_count(), 12);

    load.await;

    assert!(!store.is_loading_more());
    assert_eq!(store.visible_count(), 24);
}

#[tokio::test(start_paused = true)]
async fn cancelled_load_more_clears_flag() {
    let store = paced_store(30);
    store.fetch_countries().await;

    let result = tokio::time::timeout(Duration::from_millis(100), store.load_more()).await;

    assert!(result.is_err());
    assert!(!store.is_loading_more());
    assert_eq!(store.visible_count(), 12);
}

#[tokio::test(start_paused = true)]
async fn load_more_past_the_end_is_clamped() {
    let store = paced_store(5);
    store.fetch_countries().await;

    assert!(!store.has_more());
    store.load_more().await;

    assert_eq!(store.visible_count(), 24);
    assert_eq!(store.visible_records().len(), 5);
    assert!(!store.has_more());
}

#[tokio::test(start_paused = true)]
async fn custom_page_size_drives_pagination() {
    let source = StubSource::new().respond(Ok(numbered(10)));
    let options = DirectoryOptions {
        page_size: 4,
        ..DirectoryOptions::default()
    };
    let store = DirectoryStore::new(Arc::new(source), options);
    store.fetch_countries().await;

    assert_eq!(store.visible_records().len(), 4);
    store.load_more().await;
    store.load_more().await;

    assert_eq!(store.visible_records().len(), 10);
    assert!(!store.has_more());

    store.reset_display_count();
    assert_eq!(store.visible_count(), 4);
}
