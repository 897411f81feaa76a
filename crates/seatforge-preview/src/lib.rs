//! Live seating preview for Seatforge.
//!
//! The engine is a pure function; something still has to decide when to
//! call it while an operator is editing a room layout. This crate runs
//! one actor per exam being edited:
//!
//! - [`PreviewHandle`] — send edits, take snapshots, subscribe to plans
//! - [`LayoutEdit`] — the edits an operator can make
//! - [`PreviewConfig`] — debounce window and channel size
//! - [`PlanUpdate`] / [`PreviewSnapshot`] — what the actor publishes
//!
//! Edits are applied at once; the plan is recomputed when the edit stream
//! goes quiet, so a burst of clicks costs a single engine run.

mod actor;
mod config;
mod edit;
mod error;

pub use actor::{PlanUpdate, PreviewHandle, PreviewSnapshot};
pub use config::{MAX_DEBOUNCE, PreviewConfig};
pub use edit::LayoutEdit;
pub use error::PreviewError;
