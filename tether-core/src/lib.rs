//! Tether core library — domain types, exclusion-list computation, styling.
//!
//! Public API surface:
//! - [`types`] — [`Workspace`], [`LinkState`], [`Visibility`], [`CommandResult`]
//! - [`ignore`] — pure exclusion-list computation for `.gitignore`
//! - [`style`] — stateless colored terminal formatting

pub mod ignore;
pub mod style;
pub mod types;

pub use style::{paint, Style};
pub use types::{CommandResult, LinkState, Visibility, Workspace};
