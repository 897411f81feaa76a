//! Seat-level primitives shared by every layer.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SeatPos
// ---------------------------------------------------------------------------

/// A seat coordinate inside one room grid. Both axes are 1-indexed.
///
/// Ordering is row first, then column, so a `BTreeMap<SeatPos, _>` iterates
/// seats in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatPos {
    pub row: u32,
    pub col: u32,
}

impl SeatPos {
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for SeatPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Seat
// ---------------------------------------------------------------------------

/// What a single grid cell allows.
///
/// A cell holds exactly one of these, so a seat can never be blocked and
/// zoned at the same time: writing one state replaces the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Seat {
    /// Any eligible batch may sit here.
    #[default]
    Open,
    /// Never receives a student.
    Disabled,
    /// Reserved for the batch at this index in the exam's batch list.
    /// Stays empty rather than falling back to another batch.
    Zoned(usize),
}

impl Seat {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Returns the batch index this seat is reserved for, if any.
    pub fn zone(&self) -> Option<usize> {
        match self {
            Self::Zoned(batch) => Some(*batch),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// FillStrategy
// ---------------------------------------------------------------------------

/// Traversal order used to prioritise seats in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FillStrategy {
    /// Left to right along each row, top row first.
    #[default]
    RowMajor,
    /// Top to bottom down each column, leftmost column first.
    ColumnMajor,
}

impl fmt::Display for FillStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowMajor => write!(f, "RowMajor"),
            Self::ColumnMajor => write!(f, "ColumnMajor"),
        }
    }
}
