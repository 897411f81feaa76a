//! The full input of one allocation run.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Batch, ModelError, Room, Seat, SeatPos};

/// Ordered batches and rooms for one exam.
///
/// Batch order fixes zone indices and the priority used for unzoned
/// seats. Room order is the order rooms are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamConfig {
    pub batches: Vec<Batch>,
    pub rooms: Vec<Room>,
}

impl ExamConfig {
    pub fn new(batches: Vec<Batch>, rooms: Vec<Room>) -> Self {
        Self { batches, rooms }
    }

    pub fn room(&self, index: usize) -> Result<&Room, ModelError> {
        self.rooms.get(index).ok_or(ModelError::RoomNotFound(index))
    }

    pub fn room_mut(&mut self, index: usize) -> Result<&mut Room, ModelError> {
        self.rooms.get_mut(index).ok_or(ModelError::RoomNotFound(index))
    }

    pub fn batch_mut(&mut self, index: usize) -> Result<&mut Batch, ModelError> {
        self.batches.get_mut(index).ok_or(ModelError::BatchNotFound(index))
    }

    /// Position of the batch with `id` in the batch list.
    pub fn batch_index(&self, id: &str) -> Option<usize> {
        self.batches.iter().position(|b| b.id == id)
    }

    /// Writes `seat` at `pos` in room `room`, returning the previous seat.
    ///
    /// # Errors
    /// `RoomNotFound` for an unknown room, `SeatOutOfBounds` when `pos`
    /// is outside the grid. The config is left untouched on error.
    pub fn set_seat(&mut self, room: usize, pos: SeatPos, seat: Seat) -> Result<Seat, ModelError> {
        self.room_mut(room)?
            .set_seat(pos, seat)
            .ok_or(ModelError::SeatOutOfBounds {
                room,
                row: pos.row,
                col: pos.col,
            })
    }

    /// Checks the config for mistakes an operator should fix before
    /// allocating.
    ///
    /// The engine copes with all of these (it treats an empty room as
    /// zero seats and a zone for a missing batch as a seat nobody can
    /// take), so validation is opt-in.
    ///
    /// # Errors
    /// Returns the first problem found, rooms checked in order.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut seen = HashSet::with_capacity(self.batches.len());
        for batch in &self.batches {
            if !seen.insert(batch.id.as_str()) {
                return Err(ModelError::DuplicateBatchId(batch.id.clone()));
            }
        }

        for (index, room) in self.rooms.iter().enumerate() {
            if room.rows == 0 || room.cols == 0 {
                return Err(ModelError::InvalidRoom {
                    room: index,
                    reason: format!("grid is {}x{}", room.rows, room.cols),
                });
            }
            for (pos, seat) in room.layout.iter() {
                if !room.contains(pos) {
                    return Err(ModelError::SeatOutOfBounds {
                        room: index,
                        row: pos.row,
                        col: pos.col,
                    });
                }
                if let Some(batch) = seat.zone() {
                    if batch >= self.batches.len() {
                        return Err(ModelError::UnknownBatch { room: index, batch });
                    }
                }
            }
        }
        Ok(())
    }
}
