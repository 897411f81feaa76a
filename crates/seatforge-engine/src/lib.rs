//! Seating allocation engine for Seatforge.
//!
//! Takes an exam's ordered batches and rooms and decides, seat by seat,
//! who sits where. The run is a single greedy pass per room with no
//! backtracking:
//!
//! ```text
//! Batch ─▶ Roster ─┐
//!                  ├─▶ SeatAllocator (per room) ─▶ SeatingPlan
//! Room ─▶ SeatOrder┘        ▲
//!                           └── AdjacencyGuard
//! ```
//!
//! # Key types
//!
//! - [`SeatingEngine`] — entry point; turns an `ExamConfig` into a plan
//! - [`Roster`] — one batch's queue of registration numbers
//! - [`SeatOrder`] — traversal order of a room's seats
//! - [`AdjacencyGuard`] — which batches may not sit at a seat
//! - [`SeatAllocator`] — the per-room fill loop
//! - [`CapacityStats`] — student and seat totals
//! - [`SeatingPlan`] — the assignment map plus summaries
//!
//! The engine performs no I/O and keeps no state between calls.
//!
//! ```rust
//! use seatforge_engine::SeatingEngine;
//! use seatforge_model::{Batch, ExamConfig, Room};
//!
//! let config = ExamConfig::new(
//!     vec![Batch::new("cs", "20CS", "0001", "0004")],
//!     vec![Room::new(2, 2)],
//! );
//! let plan = SeatingEngine::new().compute(&config);
//! assert_eq!(plan.seat(0, 2, 1).unwrap().student_id, "20CS0003");
//! ```

mod adjacency;
mod allocator;
mod capacity;
mod engine;
mod order;
mod plan;
mod roster;

pub use adjacency::AdjacencyGuard;
pub use allocator::{Placement, RoomAllocation, SeatAllocator};
pub use capacity::CapacityStats;
pub use engine::SeatingEngine;
pub use order::SeatOrder;
pub use plan::{
    RoomSummary, SeatAssignment, SeatKey, SeatingPlan, UNSEATED_LIST_LIMIT, UnseatedStudents,
};
pub use roster::Roster;
