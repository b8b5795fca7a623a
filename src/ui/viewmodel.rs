//! View model types representing renderable directory state.
//!
//! View models are computed from the stores via
//! [`AppContext::compute_viewmodel`](crate::app::AppContext::compute_viewmodel)
//! and consumed by whatever renders the page. They contain no business logic,
//! only display-ready data such as formatted populations and joined capitals.

use crate::domain::Country;

/// Complete directory page view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryViewModel {
    /// What the main area should show.
    pub status: ViewStatus,

    /// Cards for the visible slice of the filtered records.
    pub cards: Vec<CountryCard>,

    pub header: HeaderInfo,

    /// Region picker entries, starting with "All".
    pub regions: Vec<String>,

    pub search_query: String,
    pub selected_region: String,

    /// Whether a "load more" control should be offered.
    pub has_more: bool,
    pub is_loading_more: bool,

    pub is_dark: bool,
}

/// Top-level state of the directory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// A fetch is in flight.
    Loading,
    /// The most recent fetch failed with this message.
    Error(String),
    /// Records are loaded but nothing matches the filters.
    Empty(EmptyState),
    Ready,
}

/// Display information for a single country card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCard {
    pub name: String,
    pub official_name: String,
    pub flag_url: String,
    pub flag_alt: String,
    /// Population with locale digit grouping.
    pub population: String,
    pub region: String,
    pub subregion: String,
    /// Capitals joined with ", ", or "N/A".
    pub capital: String,
    /// Language names joined with ", ".
    pub languages: String,
    /// Currency names joined with ", ".
    pub currencies: String,
}

impl CountryCard {
    /// Builds a card using `format_population` for the population field.
    #[must_use]
    pub fn from_country(country: &Country, format_population: impl Fn(u64) -> String) -> Self {
        let flag_alt = if country.flags.alt.is_empty() {
            format!("Flag of {}", country.name.common)
        } else {
            country.flags.alt.clone()
        };

        Self {
            name: country.name.common.clone(),
            official_name: country.name.official.clone(),
            flag_url: if country.flags.svg.is_empty() {
                country.flags.png.clone()
            } else {
                country.flags.svg.clone()
            },
            flag_alt,
            population: format_population(country.population),
            region: country.region.clone(),
            subregion: country.subregion.clone(),
            capital: country.capital_display(),
            languages: country.language_names().join(", "),
            currencies: country.currency_names().join(", "),
        }
    }
}

/// Count summary shown above the cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub visible: usize,
    pub filtered: usize,
    pub total: usize,
}

/// Message shown when no records match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Currency, Flags};

    #[test]
    fn card_joins_detail_lists() {
        let mut country = Country::new("Switzerland", "Swiss Confederation", "Europe");
        country.subregion = "Western Europe".to_string();
        country.capital = vec!["Bern".to_string()];
        country.population = 8_654_622;
        country.flags = Flags {
            png: "https://flagcdn.com/w320/ch.png".to_string(),
            svg: String::new(),
            alt: String::new(),
        };
        country.languages = [("deu", "German"), ("fra", "French"), ("ita", "Italian")]
            .into_iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();
        country.currencies.insert(
            "CHF".to_string(),
            Currency {
                name: "Swiss franc".to_string(),
                symbol: "Fr.".to_string(),
            },
        );

        let card = CountryCard::from_country(&country, |n| n.to_string());

        assert_eq!(card.languages, "German, French, Italian");
        assert_eq!(card.currencies, "Swiss franc");
        assert_eq!(card.subregion, "Western Europe");
        assert_eq!(card.capital, "Bern");
        assert_eq!(card.population, "8654622");
        assert_eq!(card.flag_url, "https://flagcdn.com/w320/ch.png");
        assert_eq!(card.flag_alt, "Flag of Switzerland");
    }

    #[test]
    fn card_without_details_has_empty_lists() {
        let country = Country::new("Antarctica", "Antarctica", "Antarctic");
        let card = CountryCard::from_country(&country, |n| n.to_string());

        assert_eq!(card.capital, "N/A");
        assert!(card.languages.is_empty());
        assert!(card.currencies.is_empty());
    }
}
