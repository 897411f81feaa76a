//! # Seatforge
//!
//! Exam seating allocation: places enrolled students into examination
//! rooms while honouring blocked seats, batch-exclusive zones,
//! anti-adjacency rules, aisle gaps, and fill order.
//!
//! The workspace is split by layer:
//!
//! - [`model`] — batches, rooms, seat layouts, exam configs, codecs
//! - [`engine`] — the pure, deterministic allocation engine
//! - [`preview`] — an actor that keeps a plan fresh while a layout is edited
//!
//! ## Quick Start
//!
//! ```rust
//! use seatforge::prelude::*;
//!
//! let config = ExamConfig::new(
//!     vec![
//!         Batch::new("cs", "20CS", "0001", "0004"),
//!         Batch::new("ee", "20EE", "0001", "0004"),
//!     ],
//!     vec![Room::new(2, 4).with_adjacency(true, 0, false)],
//! );
//! config.validate()?;
//!
//! let plan = SeatingEngine::new().compute(&config);
//! assert_eq!(plan.seat(0, 1, 2).unwrap().batch_id, "ee");
//! assert!(!plan.stats.is_over_capacity());
//! # Ok::<(), SeatforgeError>(())
//! ```

mod error;

pub use error::SeatforgeError;

pub use seatforge_engine as engine;
pub use seatforge_model as model;
pub use seatforge_preview as preview;

/// The types most callers need.
pub mod prelude {
    pub use crate::SeatforgeError;
    pub use seatforge_engine::{
        CapacityStats, RoomSummary, SeatAssignment, SeatKey, SeatingEngine, SeatingPlan,
        UnseatedStudents,
    };
    #[cfg(feature = "json")]
    pub use seatforge_model::JsonCodec;
    pub use seatforge_model::{
        Batch, Codec, ExamConfig, FillStrategy, ModelError, Room, Seat, SeatLayout, SeatPos,
    };
    pub use seatforge_preview::{
        LayoutEdit, PlanUpdate, PreviewConfig, PreviewError, PreviewHandle, PreviewSnapshot,
    };
}
