//! The per-room allocation loop.

use std::collections::{BTreeMap, BTreeSet};

use seatforge_model::{Batch, Room, SeatPos};

use crate::{AdjacencyGuard, Roster, SeatOrder};

/// One filled seat inside a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Index of the batch in the exam's batch list.
    pub batch: usize,
    pub student_id: String,
}

/// Seats filled so far in a single room.
///
/// Starts empty for every room; the adjacency guard reads it to find
/// which batches already sit next to the seat being filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomAllocation {
    seats: BTreeMap<SeatPos, Placement>,
}

impl RoomAllocation {
    /// Batch index seated at `pos`, if the seat is filled.
    pub fn batch_at(&self, pos: SeatPos) -> Option<usize> {
        self.seats.get(&pos).map(|p| p.batch)
    }

    pub fn get(&self, pos: SeatPos) -> Option<&Placement> {
        self.seats.get(&pos)
    }

    pub fn place(&mut self, pos: SeatPos, batch: usize, student_id: String) {
        self.seats.insert(pos, Placement { batch, student_id });
    }

    /// Filled seats in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatPos, &Placement)> {
        self.seats.iter().map(|(pos, placement)| (*pos, placement))
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

impl IntoIterator for RoomAllocation {
    type Item = (SeatPos, Placement);
    type IntoIter = std::collections::btree_map::IntoIter<SeatPos, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.seats.into_iter()
    }
}

/// Fills rooms one after another from a shared set of batch rosters.
///
/// Rosters are built once and drained across every room handed to
/// [`allocate_room`](Self::allocate_room), in the order the rooms are
/// passed in.
#[derive(Debug, Clone)]
pub struct SeatAllocator {
    rosters: Vec<Roster>,
}

impl SeatAllocator {
    /// Builds one roster per batch, in batch-list order.
    pub fn new(batches: &[Batch]) -> Self {
        Self::from_rosters(batches.iter().map(Roster::build).collect())
    }

    pub fn from_rosters(rosters: Vec<Roster>) -> Self {
        Self { rosters }
    }

    pub fn rosters(&self) -> &[Roster] {
        &self.rosters
    }

    /// Walks `room` in its seat order and fills every seat it can.
    ///
    /// For each seat:
    /// 1. disabled seats are skipped;
    /// 2. a zoned seat takes the next student of its batch, unless that
    ///    batch is forbidden by adjacency or exhausted (then it stays
    ///    empty, never falling back to another batch);
    /// 3. an open seat takes the next student of the first batch, in
    ///    batch-list order, that is neither zoned anywhere in this room
    ///    nor forbidden by adjacency and still has students.
    pub fn allocate_room(&mut self, room: &Room) -> RoomAllocation {
        let guard = AdjacencyGuard::for_room(room);
        let restricted = room.restricted_batches();
        let mut allocation = RoomAllocation::default();

        for pos in SeatOrder::new(room.rows, room.cols, room.fill_strategy) {
            let seat = room.seat_at(pos);
            if seat.is_disabled() {
                continue;
            }

            let forbidden = guard.forbidden(&allocation, pos);
            let taken = match seat.zone() {
                Some(zone) if forbidden.contains(&zone) => None,
                Some(zone) => self.take_from(zone),
                None => self.take_unzoned(&restricted, &forbidden),
            };

            if let Some((batch, student_id)) = taken {
                allocation.place(pos, batch, student_id);
            }
        }

        allocation
    }

    /// Consumes the allocator, returning what is left in each roster.
    pub fn into_rosters(self) -> Vec<Roster> {
        self.rosters
    }

    fn take_from(&mut self, batch: usize) -> Option<(usize, String)> {
        let student = self.rosters.get_mut(batch)?.pop()?;
        Some((batch, student))
    }

    fn take_unzoned(
        &mut self,
        restricted: &BTreeSet<usize>,
        forbidden: &BTreeSet<usize>,
    ) -> Option<(usize, String)> {
        self.rosters
            .iter_mut()
            .enumerate()
            .filter(|(batch, _)| !restricted.contains(batch) && !forbidden.contains(batch))
            .find_map(|(batch, roster)| roster.pop().map(|student| (batch, student)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatforge_model::FillStrategy;

    fn pos(row: u32, col: u32) -> SeatPos {
        SeatPos::new(row, col)
    }

    fn student_at(allocation: &RoomAllocation, row: u32, col: u32) -> Option<&str> {
        allocation.get(pos(row, col)).map(|p| p.student_id.as_str())
    }

    #[test]
    fn test_unconstrained_room_fills_in_order() {
        let mut allocator = SeatAllocator::new(&[Batch::new("a", "A", "1", "3")]);
        let room = Room::new(2, 2).with_fill_strategy(FillStrategy::ColumnMajor);
        let allocation = allocator.allocate_room(&room);
        assert_eq!(student_at(&allocation, 1, 1), Some("A1"));
        assert_eq!(student_at(&allocation, 2, 1), Some("A2"));
        assert_eq!(student_at(&allocation, 1, 2), Some("A3"));
        assert_eq!(student_at(&allocation, 2, 2), None);
    }

    #[test]
    fn test_disabled_seats_are_skipped() {
        let mut allocator = SeatAllocator::new(&[Batch::new("a", "A", "1", "4")]);
        let mut room = Room::new(1, 3);
        room.block_seat(pos(1, 2));
        let allocation = allocator.allocate_room(&room);
        assert_eq!(student_at(&allocation, 1, 1), Some("A1"));
        assert_eq!(student_at(&allocation, 1, 2), None);
        assert_eq!(student_at(&allocation, 1, 3), Some("A2"));
        assert_eq!(allocator.rosters()[0].len(), 2);
    }

    #[test]
    fn test_zoned_batch_never_takes_open_seats() {
        let batches = [Batch::new("a", "A", "1", "4"), Batch::new("b", "B", "1", "4")];
        let mut allocator = SeatAllocator::new(&batches);
        let mut room = Room::new(1, 3);
        room.zone_seat(pos(1, 3), 0);
        let allocation = allocator.allocate_room(&room);
        assert_eq!(student_at(&allocation, 1, 1), Some("B1"));
        assert_eq!(student_at(&allocation, 1, 2), Some("B2"));
        assert_eq!(student_at(&allocation, 1, 3), Some("A1"));
    }

    #[test]
    fn test_zoned_seat_forbidden_by_adjacency_stays_empty() {
        let batches = [Batch::new("a", "A", "1", "4")];
        let mut allocator = SeatAllocator::new(&batches);
        let mut room = Room::new(1, 2).with_adjacency(true, 0, false);
        room.zone_seat(pos(1, 1), 0);
        room.zone_seat(pos(1, 2), 0);
        let allocation = allocator.allocate_room(&room);
        assert_eq!(student_at(&allocation, 1, 1), Some("A1"));
        assert_eq!(student_at(&allocation, 1, 2), None);
    }

    #[test]
    fn test_zone_for_missing_batch_stays_empty() {
        let mut allocator = SeatAllocator::new(&[Batch::new("a", "A", "1", "4")]);
        let mut room = Room::new(1, 2);
        room.zone_seat(pos(1, 1), 7);
        let allocation = allocator.allocate_room(&room);
        assert_eq!(student_at(&allocation, 1, 1), None);
        assert_eq!(student_at(&allocation, 1, 2), Some("A1"));
    }

    #[test]
    fn test_rosters_are_shared_across_rooms() {
        let mut allocator = SeatAllocator::new(&[Batch::new("a", "A", "1", "5")]);
        let first = allocator.allocate_room(&Room::new(1, 3));
        let second = allocator.allocate_room(&Room::new(1, 3));
        assert_eq!(first.len(), 3);
        assert_eq!(student_at(&second, 1, 1), Some("A4"));
        assert_eq!(student_at(&second, 1, 2), Some("A5"));
        assert_eq!(second.len(), 2);
        assert!(allocator.into_rosters()[0].is_empty());
    }

    #[test]
    fn test_unzoned_priority_skips_forbidden_batch() {
        let batches = [Batch::new("a", "A", "1", "4"), Batch::new("b", "B", "1", "1")];
        let mut allocator = SeatAllocator::new(&batches);
        let room = Room::new(1, 4).with_adjacency(true, 0, false);
        let allocation = allocator.allocate_room(&room);
        // B runs out after one seat, so A can't fill column 4 next to A3.
        assert_eq!(student_at(&allocation, 1, 1), Some("A1"));
        assert_eq!(student_at(&allocation, 1, 2), Some("B1"));
        assert_eq!(student_at(&allocation, 1, 3), Some("A2"));
        assert_eq!(student_at(&allocation, 1, 4), None);
    }
}
