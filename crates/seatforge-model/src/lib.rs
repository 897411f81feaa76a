//! Data model for Seatforge.
//!
//! This crate defines what an allocation run consumes:
//!
//! - **Batches** ([`Batch`]) — a cohort of students described by a
//!   registration-number range and exclusions.
//! - **Rooms** ([`Room`], [`SeatLayout`], [`Seat`]) — rectangular grids
//!   with blocked seats, batch zones, and adjacency rules.
//! - **Exam configs** ([`ExamConfig`]) — the ordered batches and rooms of
//!   one exam, with opt-in validation.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how configs are read
//!   from and written to bytes.
//!
//! It knows nothing about allocation itself; see `seatforge-engine`.

mod batch;
mod codec;
mod error;
mod exam;
mod room;
mod types;

pub use batch::{Batch, RegistrationRange};
pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ModelError;
pub use exam::ExamConfig;
pub use room::{LayoutEntry, Room, SeatLayout};
pub use types::{FillStrategy, Seat, SeatPos};
