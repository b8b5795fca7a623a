//! UI-facing view models.
//!
//! Rendering itself belongs to the front end. This module only defines the
//! display-ready shapes computed from the stores.

pub mod viewmodel;

pub use viewmodel::{CountryCard, DirectoryViewModel, EmptyState, HeaderInfo, ViewStatus};
