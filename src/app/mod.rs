//! Application layer coordinating stores, events, and actions.
//!
//! # Architecture
//!
//! ```text
//! UI Input → Events → handle_event → Store Mutations → Actions → execute_action
//!                                         │                          │
//!                                         └──── compute_viewmodel ◀──┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Deferred async operations emitted by the handler
//! - [`context`]: Session-wide owner of both stores
//! - [`directory`]: Country directory state, derived views, fetch lifecycle
//! - [`handler`]: Event processing and UI-level policies
//! - [`reactive`]: Observable value used for the theme reaction
//! - [`theme`]: Light/dark theme preference

pub mod actions;
pub mod context;
pub mod directory;
pub mod handler;
pub mod reactive;
pub mod theme;

pub use actions::{execute_action, Action};
pub use context::AppContext;
pub use directory::{DirectoryOptions, DirectoryState, DirectoryStore};
pub use handler::{handle_event, Event};
pub use reactive::Signal;
pub use theme::{ColorMode, ThemePreference};
