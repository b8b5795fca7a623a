//! Domain layer for the country explorer.
//!
//! Core types and pure logic, independent of HTTP, storage, or rendering
//! concerns.
//!
//! # Organization
//!
//! - [`country`]: Country record model and name matching
//! - [`error`]: Error types and result aliases
//! - [`format`]: Locale-aware number formatting
//!
//! # Examples
//!
//! ```
//! use country_explorer::domain::{format_population, Country};
//!
//! let mut france = Country::new("France", "French Republic", "Europe");
//! france.population = 67_391_582;
//! assert_eq!(format_population(france.population), "67,391,582");
//! ```

pub mod country;
pub mod error;
pub mod format;

pub use country::{Country, CountryName, Currency, Flags, NativeName, EXCLUDED_COUNTRY};
pub use error::{ExplorerError, Result};
pub use format::{format_grouped, format_population, NumberLocale};
