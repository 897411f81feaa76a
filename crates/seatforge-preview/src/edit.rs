//! Edits an operator can make to an exam configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use seatforge_model::{ExamConfig, FillStrategy, ModelError, Seat, SeatPos};

/// A single change to an [`ExamConfig`].
///
/// Rooms and batches are addressed by their index in the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LayoutEdit {
    /// Block a seat; a zone on it is dropped.
    BlockSeat { room: usize, pos: SeatPos },
    /// Reserve a seat for a batch; a block on it is dropped.
    ZoneSeat { room: usize, pos: SeatPos, batch: usize },
    /// Clear any block or zone.
    OpenSeat { room: usize, pos: SeatPos },
    ToggleBlock { room: usize, pos: SeatPos },
    SetFillStrategy { room: usize, strategy: FillStrategy },
    SetAdjacency {
        room: usize,
        prevent: bool,
        aisle_interval: u32,
        strict_flow: bool,
    },
    /// Resize a room, dropping blocks and zones that fall off the grid.
    ResizeRoom { room: usize, rows: u32, cols: u32 },
    /// Replace a batch's exclusion set.
    SetExclusions {
        batch: usize,
        excluded: BTreeSet<String>,
    },
}

impl LayoutEdit {
    /// Applies the edit to `config`.
    ///
    /// # Errors
    /// Fails without touching `config` when the edit addresses a missing
    /// room or batch, a seat outside the grid, a zone for an unknown
    /// batch, or an empty grid size.
    pub fn apply(self, config: &mut ExamConfig) -> Result<(), ModelError> {
        match self {
            Self::BlockSeat { room, pos } => {
                config.set_seat(room, pos, Seat::Disabled)?;
            }
            Self::ZoneSeat { room, pos, batch } => {
                if batch >= config.batches.len() {
                    return Err(ModelError::UnknownBatch { room, batch });
                }
                config.set_seat(room, pos, Seat::Zoned(batch))?;
            }
            Self::OpenSeat { room, pos } => {
                config.set_seat(room, pos, Seat::Open)?;
            }
            Self::ToggleBlock { room, pos } => {
                let target = config.room_mut(room)?;
                target.toggle_block(pos).ok_or(ModelError::SeatOutOfBounds {
                    room,
                    row: pos.row,
                    col: pos.col,
                })?;
            }
            Self::SetFillStrategy { room, strategy } => {
                config.room_mut(room)?.fill_strategy = strategy;
            }
            Self::SetAdjacency {
                room,
                prevent,
                aisle_interval,
                strict_flow,
            } => {
                let target = config.room_mut(room)?;
                target.prevent_adjacency = prevent;
                target.aisle_interval = aisle_interval;
                target.strict_flow = strict_flow;
            }
            Self::ResizeRoom { room, rows, cols } => {
                if rows == 0 || cols == 0 {
                    return Err(ModelError::InvalidRoom {
                        room,
                        reason: format!("grid is {rows}x{cols}"),
                    });
                }
                config.room_mut(room)?.resize(rows, cols);
            }
            Self::SetExclusions { batch, excluded } => {
                config.batch_mut(batch)?.excluded_ids = excluded;
            }
        }
        Ok(())
    }
}
