//! Anti-adjacency rules.
//!
//! The guard only ever looks at seats that are already filled in the
//! current room. Seats are visited in traversal order, so a single pass
//! gives the left-to-right guarantee without backtracking.

use std::collections::BTreeSet;

use seatforge_model::{Room, SeatPos};

use crate::RoomAllocation;

/// Adjacency settings of one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyGuard {
    prevent: bool,
    aisle_interval: u32,
    strict_flow: bool,
}

impl AdjacencyGuard {
    pub fn new(prevent: bool, aisle_interval: u32, strict_flow: bool) -> Self {
        Self {
            prevent,
            aisle_interval,
            strict_flow,
        }
    }

    pub fn for_room(room: &Room) -> Self {
        Self::new(room.prevent_adjacency, room.aisle_interval, room.strict_flow)
    }

    /// Returns `true` if bench-wide checking applies.
    pub fn is_strict(&self) -> bool {
        self.prevent && self.strict_flow && self.aisle_interval > 0
    }

    /// First column of the bench containing `col`. Without aisles the
    /// whole row is one bench.
    pub fn bench_start(&self, col: u32) -> u32 {
        if self.aisle_interval == 0 {
            return 1;
        }
        (col.saturating_sub(1) / self.aisle_interval) * self.aisle_interval + 1
    }

    /// Batch indices that may not be seated at `pos`, given what the room
    /// already holds.
    ///
    /// - strict flow: every batch already on the same bench, left of `pos`.
    /// - otherwise: the batch at the immediate left seat, unless that
    ///   seat is across an aisle.
    pub fn forbidden(&self, allocation: &RoomAllocation, pos: SeatPos) -> BTreeSet<usize> {
        let mut forbidden = BTreeSet::new();
        if !self.prevent {
            return forbidden;
        }

        if self.is_strict() {
            forbidden.extend(
                (self.bench_start(pos.col)..pos.col)
                    .filter_map(|col| allocation.batch_at(SeatPos::new(pos.row, col))),
            );
            return forbidden;
        }

        let left = pos.col.saturating_sub(1);
        if self.aisle_interval > 0 && left % self.aisle_interval == 0 {
            return forbidden;
        }
        if left >= 1 {
            forbidden.extend(allocation.batch_at(SeatPos::new(pos.row, left)));
        }
        forbidden
    }
}
