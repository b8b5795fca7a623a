//! Country record model.
//!
//! Records are supplied by the REST Countries API and treated as opaque apart from
//! the fields below. Every collection and secondary string defaults to empty so
//! that sparse records (territories without a capital, regions without a
//! subregion) still deserialize.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Common name of the single record the directory never retains.
pub const EXCLUDED_COUNTRY: &str = "Israel";

/// A country as returned by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub tld: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub population: u64,
}

/// Display and search names of a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryName {
    /// Short name, used as the display and exclusion key.
    pub common: String,
    pub official: String,
    /// Names in the country's own languages, keyed by language code.
    #[serde(rename = "nativeName")]
    pub native_name: BTreeMap<String, NativeName>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeName {
    pub official: String,
    pub common: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// Flag image locations and alternative text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: String,
}

impl Country {
    /// Creates a record with only the searchable and filterable fields set.
    ///
    /// Mostly useful for tests and fixtures; real records come from the API.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_explorer::Country;
    ///
    /// let france = Country::new("France", "French Republic", "Europe");
    /// assert_eq!(france.name.common, "France");
    /// assert!(france.capital.is_empty());
    /// ```
    pub fn new(common: impl Into<String>, official: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: CountryName {
                common: common.into(),
                official: official.into(),
                native_name: BTreeMap::new(),
            },
            flags: Flags::default(),
            tld: Vec::new(),
            currencies: BTreeMap::new(),
            capital: Vec::new(),
            region: region.into(),
            subregion: String::new(),
            languages: BTreeMap::new(),
            borders: Vec::new(),
            population: 0,
        }
    }

    /// Returns `true` for the record the directory drops after every fetch.
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        self.name.common == EXCLUDED_COUNTRY
    }

    /// Returns `true` if the lower-cased common or official name contains `needle`.
    ///
    /// `needle` must already be trimmed and lower-cased.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.common.to_lowercase().contains(needle)
            || self.name.official.to_lowercase().contains(needle)
    }

    /// Capitals joined for display, or `"N/A"` when the record has none.
    #[must_use]
    pub fn capital_display(&self) -> String {
        if self.capital.is_empty() {
            "N/A".to_string()
        } else {
            self.capital.join(", ")
        }
    }

    /// Language names in code order.
    #[must_use]
    pub fn language_names(&self) -> Vec<&str> {
        self.languages.values().map(String::as_str).collect()
    }

    /// Currency names in code order. Currencies without a name are skipped.
    #[must_use]
    pub fn currency_names(&self) -> Vec<&str> {
        self.currencies
            .values()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_record() {
        let json = r#"{
            "flags": {"png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg", "alt": "The flag of France"},
            "name": {"common": "France", "official": "French Republic",
                     "nativeName": {"fra": {"official": "République française", "common": "France"}}},
            "tld": [".fr"],
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "capital": ["Paris"],
            "region": "Europe",
            "subregion": "Western Europe",
            "languages": {"fra": "French"},
            "borders": ["AND", "BEL", "DEU"],
            "population": 67391582
        }"#;

        let country: Country = serde_json::from_str(json).unwrap();
        assert_eq!(country.name.official, "French Republic");
        assert_eq!(country.name.native_name["fra"].common, "France");
        assert_eq!(country.currencies["EUR"].symbol, "€");
        assert_eq!(country.population, 67_391_582);
        assert_eq!(country.capital_display(), "Paris");
        assert_eq!(country.language_names(), vec!["French"]);
        assert_eq!(country.currency_names(), vec!["Euro"]);
    }

    #[test]
    fn sparse_record_uses_defaults() {
        let json = r#"{"name": {"common": "Antarctica", "official": "Antarctica"}, "region": "Antarctic", "population": 1000}"#;
        let country: Country = serde_json::from_str(json).unwrap();
        assert!(country.borders.is_empty());
        assert_eq!(country.capital_display(), "N/A");
        assert!(country.flags.png.is_empty());
    }

    #[test]
    fn incomplete_nested_entries_do_not_fail_the_list() {
        let json = r#"[
            {"name": {"common": "France", "official": "French Republic"}, "region": "Europe"},
            {"name": {"common": "Nowhere", "official": "Republic of Nowhere",
                      "nativeName": {"xxx": {"common": "Nowhere"}}},
             "currencies": {"XXX": {"symbol": "$"}},
             "region": "Oceania"}
        ]"#;

        let countries: Vec<Country> = serde_json::from_str(json).unwrap();
        assert_eq!(countries.len(), 2);

        let nowhere = &countries[1];
        assert_eq!(nowhere.name.native_name["xxx"].official, "");
        assert_eq!(nowhere.currencies["XXX"].symbol, "$");
        assert!(nowhere.currency_names().is_empty());
    }

    #[test]
    fn name_match_checks_both_names() {
        let country = Country::new("Germany", "Federal Republic of Germany", "Europe");
        assert!(country.name_contains("federal"));
        assert!(country.name_contains("germ"));
        assert!(!country.name_contains("france"));
    }

    #[test]
    fn exclusion_is_by_common_name() {
        assert!(Country::new("Israel", "State of Israel", "Asia").is_excluded());
        assert!(!Country::new("France", "French Republic", "Europe").is_excluded());
    }
}
