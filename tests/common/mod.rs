#![allow(dead_code)]

use async_trait::async_trait;
use country_explorer::app::{AppContext, DirectoryOptions, DirectoryStore, ThemePreference};
use country_explorer::infrastructure::{ClassList, CountrySource, FixedAppearance};
use country_explorer::storage::MemoryPreferenceStore;
use country_explorer::{Country, Result};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Country source that replays queued responses, each after its own delay.
#[derive(Default)]
pub struct StubSource {
    responses: Mutex<VecDeque<(Duration, Result<Vec<Country>>)>>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: Result<Vec<Country>>) -> Self {
        self.respond_after(Duration::ZERO, response)
    }

    pub fn respond_after(self, delay: Duration, response: Result<Vec<Country>>) -> Self {
        self.responses.lock().unwrap().push_back((delay, response));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountrySource for StubSource {
    async fn fetch_all(&self) -> Result<Vec<Country>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, response) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((Duration::ZERO, Ok(Vec::new())));

        tokio::time::sleep(delay).await;
        response
    }
}

pub fn country(common: &str, official: &str, region: &str, population: u64) -> Country {
    let mut country = Country::new(common, official, region);
    country.population = population;
    country
}

/// `count` European records named "Country 0", "Country 1", ...
pub fn numbered(count: usize) -> Vec<Country> {
    (0..count)
        .map(|i| country(&format!("Country {i}"), &format!("Republic of Country {i}"), "Europe", 1000 * i as u64))
        .collect()
}

pub fn names(records: &[Country]) -> Vec<String> {
    records.iter().map(|c| c.name.common.clone()).collect()
}

pub fn fast_options() -> DirectoryOptions {
    DirectoryOptions {
        load_more_delay: Duration::ZERO,
        ..DirectoryOptions::default()
    }
}

pub fn store_with(source: StubSource) -> (DirectoryStore, Arc<StubSource>) {
    let source = Arc::new(source);
    let store = DirectoryStore::new(source.clone(), fast_options());
    (store, source)
}

pub fn context_with(source: StubSource, system_dark: Option<bool>) -> (AppContext, ClassList, Arc<StubSource>) {
    let (directory, source) = store_with(source);
    let document = ClassList::default();
    let theme = ThemePreference::initialize(
        Box::new(MemoryPreferenceStore::default()),
        &FixedAppearance(system_dark),
        Arc::new(document.clone()),
    );
    (AppContext::new(theme, directory), document, source)
}
