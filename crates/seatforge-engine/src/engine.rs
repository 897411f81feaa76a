//! Orchestration of a full allocation run.

use std::collections::BTreeMap;

use seatforge_model::{Batch, ExamConfig, Room};

use crate::{
    CapacityStats, RoomSummary, SeatAllocator, SeatAssignment, SeatKey, SeatingPlan,
    UNSEATED_LIST_LIMIT, UnseatedStudents,
};

/// Pure, deterministic seating engine.
///
/// Every call builds its rosters and allocation state from scratch and
/// touches nothing outside its arguments, so it can be re-run on every
/// edit and called from any number of threads at once. Identical inputs
/// always produce an identical plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeatingEngine;

impl SeatingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Allocates the batches and rooms of `config`.
    pub fn compute(&self, config: &ExamConfig) -> SeatingPlan {
        self.allocate(&config.batches, &config.rooms)
    }

    /// Allocates `batches` into `rooms`, filling rooms in list order.
    ///
    /// Never fails: malformed batches contribute no students, rooms with
    /// a zero dimension contribute no seats, and seats lost to zone or
    /// adjacency conflicts are simply left empty.
    pub fn allocate(&self, batches: &[Batch], rooms: &[Room]) -> SeatingPlan {
        let mut allocator = SeatAllocator::new(batches);
        let stats = CapacityStats::aggregate(allocator.rosters(), rooms);

        let mut assignments = BTreeMap::new();
        let mut summaries = Vec::with_capacity(rooms.len());

        for (index, room) in rooms.iter().enumerate() {
            let allocation = allocator.allocate_room(room);
            let mut by_batch = vec![0usize; batches.len()];
            let filled = allocation.len();

            for (pos, placement) in allocation {
                // Placements only ever come from existing rosters.
                let Some(batch) = batches.get(placement.batch) else {
                    continue;
                };
                by_batch[placement.batch] += 1;
                assignments.insert(
                    SeatKey::at(index, pos),
                    SeatAssignment {
                        student_id: placement.student_id,
                        batch_id: batch.id.clone(),
                        batch_index: placement.batch,
                    },
                );
            }

            tracing::debug!(
                room = index,
                name = %room.name,
                filled,
                capacity = room.effective_capacity(),
                "room allocated"
            );

            summaries.push(RoomSummary {
                room: index,
                name: room.name.clone(),
                raw_capacity: room.raw_capacity(),
                effective_capacity: room.effective_capacity(),
                filled,
                by_batch,
            });
        }

        let unseated: Vec<UnseatedStudents> = allocator
            .into_rosters()
            .into_iter()
            .zip(batches)
            .enumerate()
            .filter(|(_, (roster, _))| !roster.is_empty())
            .map(|(batch_index, (roster, batch))| UnseatedStudents {
                batch_index,
                batch_id: batch.id.clone(),
                count: roster.len(),
                students: roster.remaining(UNSEATED_LIST_LIMIT),
            })
            .collect();

        if stats.is_over_capacity() {
            tracing::warn!(
                students = stats.total_students,
                capacity = stats.total_effective_capacity,
                overflow = stats.overflow(),
                "exam is over capacity"
            );
        }
        tracing::info!(
            batches = batches.len(),
            rooms = rooms.len(),
            students = stats.total_students,
            seated = assignments.len(),
            capacity = stats.total_effective_capacity,
            "seating plan computed"
        );

        SeatingPlan {
            assignments,
            stats,
            rooms: summaries,
            unseated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_model::SeatPos;

    #[test]
    fn test_compute_matches_allocate() {
        let config = ExamConfig::new(
            vec![Batch::new("a", "A", "1", "5")],
            vec![Room::new(2, 2), Room::new(1, 1)],
        );
        let engine = SeatingEngine::new();
        assert_eq!(
            engine.compute(&config),
            engine.allocate(&config.batches, &config.rooms)
        );
    }

    #[test]
    fn test_summaries_and_unseated() {
        let batches = vec![Batch::new("a", "A", "1", "4"), Batch::new("b", "B", "1", "3")];
        let mut room = Room::new(2, 2);
        room.block_seat(SeatPos::new(2, 2));
        let plan = SeatingEngine.allocate(&batches, &[room]);

        assert_eq!(plan.seated_count(), 3);
        assert_eq!(plan.rooms[0].filled, 3);
        assert_eq!(plan.rooms[0].by_batch, vec![3, 0]);
        assert_eq!(plan.rooms[0].empty_seats(), 0);

        assert_eq!(plan.unseated.len(), 2);
        assert_eq!(plan.unseated[0].students, vec!["A4".to_string()]);
        assert_eq!(plan.unseated[1].count, 3);
        assert_eq!(plan.unseated[1].batch_id, "b");
        assert_eq!(plan.unseated_count(), 4);
    }

    #[test]
    fn test_no_rooms_leaves_everyone_unseated() {
        let plan = SeatingEngine.allocate(&[Batch::new("a", "A", "1", "2")], &[]);
        assert!(plan.assignments.is_empty());
        assert_eq!(plan.unseated_count(), 2);
        assert_eq!(plan.stats.overflow(), 2);
    }

    #[test]
    fn test_zero_sized_room_contributes_no_seats() {
        let plan = SeatingEngine.allocate(&[Batch::new("a", "A", "1", "2")], &[Room::new(0, 4)]);
        assert!(plan.assignments.is_empty());
        assert_eq!(plan.stats.total_raw_capacity, 0);
    }

    #[test]
    fn test_huge_batch_lists_a_bounded_unseated_head() {
        let batches = vec![Batch::new("a", "A", "1", "10000000000")];
        let plan = SeatingEngine.allocate(&batches, &[Room::new(2, 2)]);

        assert_eq!(plan.seated_count(), 4);
        assert_eq!(plan.stats.total_students, 10_000_000_000);
        assert_eq!(plan.unseated_count(), 9_999_999_996);
        assert_eq!(plan.unseated[0].students.len(), UNSEATED_LIST_LIMIT);
        assert_eq!(plan.unseated[0].students[0], "A5");
    }
}
