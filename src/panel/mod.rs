//! Linting preferences panel.
//!
//! The panel is the session layer between a [`crate::config::ConfigStore`]
//! and whatever front end shows the options:
//!
//! - [`LintingPanel`] - load on open, edit in memory, validate and write on apply
//! - [`visible_groups`] - which option groups a view shows for a provider
//!
//! # Example
//!
//! ```
//! use lintprefs::config::{FilterField, MemoryStore, Provider};
//! use lintprefs::panel::{ApplyOutcome, LintingPanel};
//!
//! let mut store = MemoryStore::new();
//! let mut panel = LintingPanel::open(&store).unwrap();
//! panel.set_provider(Provider::Extended);
//! panel.set_filter(FilterField::Excludes, "(");
//!
//! // Invalid patterns abort the apply and leave the store untouched
//! assert!(panel.apply(&mut store).is_err());
//! assert_eq!(store.writes(), 0);
//!
//! panel.set_filter(FilterField::Excludes, r"(?!test_).*\.py");
//! assert!(matches!(panel.apply(&mut store).unwrap(), ApplyOutcome::Applied { .. }));
//! ```

pub mod groups;
pub mod session;

pub use groups::{visible_groups, GroupId};
pub use session::{ApplyOutcome, LintingPanel, PanelOption};
