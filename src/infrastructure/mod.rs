//! Infrastructure layer: the outside world behind traits.
//!
//! Each external collaborator of the stores is expressed as a trait with at
//! least one real implementation:
//!
//! - [`http`]: [`CountrySource`] over the REST Countries API
//! - [`appearance`]: [`SystemAppearance`] dark-mode signal and the
//!   [`DocumentRoot`] presentation marker
//! - [`paths`]: data directory resolution

pub mod appearance;
pub mod http;
pub mod paths;

pub use appearance::{ClassList, DocumentRoot, EnvAppearance, FixedAppearance, SystemAppearance, DARK_CLASS};
pub use http::{CountrySource, RestCountriesClient, COUNTRY_FIELDS, DEFAULT_API_BASE_URL};
pub use paths::{default_data_dir, expand_tilde};
