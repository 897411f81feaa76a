//! Capacity totals used to warn about over-subscribed exams.

use serde::{Deserialize, Serialize};

use seatforge_model::Room;

use crate::Roster;

/// Aggregate seat and student counts for one exam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityStats {
    /// Students across all batch rosters, exclusions already removed.
    pub total_students: u64,
    /// Sum of `rows * cols` over all rooms.
    pub total_raw_capacity: u64,
    /// Raw capacity minus disabled seats.
    pub total_effective_capacity: u64,
}

impl CapacityStats {
    /// Sums freshly built (not yet drained) rosters and room capacities.
    pub fn aggregate(rosters: &[Roster], rooms: &[Room]) -> Self {
        Self {
            total_students: rosters.iter().map(Roster::len).sum(),
            total_raw_capacity: rooms.iter().map(Room::raw_capacity).sum(),
            total_effective_capacity: rooms.iter().map(Room::effective_capacity).sum(),
        }
    }

    /// Students that cannot get a seat even if every usable seat is filled.
    pub fn overflow(&self) -> u64 {
        self.total_students
            .saturating_sub(self.total_effective_capacity)
    }

    pub fn is_over_capacity(&self) -> bool {
        self.total_students > self.total_effective_capacity
    }
}
