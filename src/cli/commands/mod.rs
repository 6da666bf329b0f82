//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations with the resolved settings path.

pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod edit;
pub mod set;
pub mod show;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
