//! The result of an allocation run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use seatforge_model::SeatPos;

use crate::CapacityStats;

/// Address of a seat across all rooms of an exam.
///
/// Orders by room, then row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatKey {
    /// Index of the room in the exam's room list.
    pub room: usize,
    pub row: u32,
    pub col: u32,
}

impl SeatKey {
    pub const fn new(room: usize, row: u32, col: u32) -> Self {
        Self { room, row, col }
    }

    pub const fn at(room: usize, pos: SeatPos) -> Self {
        Self::new(room, pos.row, pos.col)
    }

    pub const fn pos(&self) -> SeatPos {
        SeatPos::new(self.row, self.col)
    }
}

/// Who sits in a filled seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub student_id: String,
    pub batch_id: String,
    /// Index of the batch in the exam's batch list.
    pub batch_index: usize,
}

/// Fill level of one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub room: usize,
    pub name: String,
    pub raw_capacity: u64,
    pub effective_capacity: u64,
    pub filled: usize,
    /// Seats filled per batch, indexed like the batch list.
    pub by_batch: Vec<usize>,
}

impl RoomSummary {
    /// Usable seats left empty (zone conflicts, adjacency, or no students).
    pub fn empty_seats(&self) -> u64 {
        self.effective_capacity.saturating_sub(self.filled as u64)
    }
}

/// Most registration numbers listed per batch in
/// [`UnseatedStudents::students`].
pub const UNSEATED_LIST_LIMIT: usize = 1_000;

/// Students of one batch still in its roster after every room was filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnseatedStudents {
    pub batch_index: usize,
    pub batch_id: String,
    /// How many students are left.
    pub count: u64,
    /// The first of them in roster order, at most [`UNSEATED_LIST_LIMIT`].
    pub students: Vec<String>,
}

/// Complete seat-by-seat assignment for one exam plus capacity totals.
///
/// A seat missing from `assignments` is empty, whatever the reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    #[serde(with = "assignment_list")]
    pub assignments: BTreeMap<SeatKey, SeatAssignment>,
    pub stats: CapacityStats,
    pub rooms: Vec<RoomSummary>,
    /// Only batches with leftover students appear here.
    pub unseated: Vec<UnseatedStudents>,
}

impl SeatingPlan {
    pub fn seat(&self, room: usize, row: u32, col: u32) -> Option<&SeatAssignment> {
        self.assignments.get(&SeatKey::new(room, row, col))
    }

    /// Filled seats of one room in row-major order.
    pub fn room_assignments(&self, room: usize) -> impl Iterator<Item = (SeatPos, &SeatAssignment)> {
        self.assignments
            .range(SeatKey::new(room, 0, 0)..=SeatKey::new(room, u32::MAX, u32::MAX))
            .map(|(key, assignment)| (key.pos(), assignment))
    }

    pub fn seated_count(&self) -> usize {
        self.assignments.len()
    }

    /// Seats filled per batch id.
    pub fn batch_seated_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for assignment in self.assignments.values() {
            *counts.entry(assignment.batch_id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn unseated_count(&self) -> u64 {
        self.unseated.iter().map(|u| u.count).sum()
    }

    /// Looks up where a student sits.
    pub fn find_student(&self, student_id: &str) -> Option<SeatKey> {
        self.assignments
            .iter()
            .find(|(_, assignment)| assignment.student_id == student_id)
            .map(|(key, _)| *key)
    }
}

/// JSON object keys must be strings, so the assignment map travels as a
/// flat list of `{ room, row, col, student_id, batch_id, batch_index }`.
mod assignment_list {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{SeatAssignment, SeatKey};

    #[derive(Serialize, Deserialize)]
    struct Entry {
        #[serde(flatten)]
        key: SeatKey,
        #[serde(flatten)]
        assignment: SeatAssignment,
    }

    pub fn serialize<S>(map: &BTreeMap<SeatKey, SeatAssignment>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let entries: Vec<Entry> = map
            .iter()
            .map(|(key, assignment)| Entry {
                key: *key,
                assignment: assignment.clone(),
            })
            .collect();
        entries.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<SeatKey, SeatAssignment>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|e| (e.key, e.assignment)).collect())
    }
}
