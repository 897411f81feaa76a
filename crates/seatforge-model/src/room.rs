//! Room grids and their per-seat layout.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{FillStrategy, Seat, SeatPos};

// ---------------------------------------------------------------------------
// SeatLayout
// ---------------------------------------------------------------------------

/// Sparse per-seat layout of a room. Coordinates not present are
/// [`Seat::Open`].
///
/// On the wire this is a list of `{ "row", "col", "seat" }` entries with
/// open seats omitted. When a list names the same coordinate twice, the
/// later entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LayoutEntry>", into = "Vec<LayoutEntry>")]
pub struct SeatLayout {
    marks: BTreeMap<SeatPos, Seat>,
}

/// Wire form of one non-open seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub row: u32,
    pub col: u32,
    pub seat: Seat,
}

impl SeatLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: SeatPos) -> Seat {
        self.marks.get(&pos).copied().unwrap_or_default()
    }

    /// Writes `seat` at `pos` and returns what was there before.
    pub fn set(&mut self, pos: SeatPos, seat: Seat) -> Seat {
        let previous = match seat {
            Seat::Open => self.marks.remove(&pos),
            marked => self.marks.insert(pos, marked),
        };
        previous.unwrap_or_default()
    }

    /// Iterates non-open seats in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatPos, Seat)> + '_ {
        self.marks.iter().map(|(pos, seat)| (*pos, *seat))
    }

    pub fn disabled(&self) -> impl Iterator<Item = SeatPos> + '_ {
        self.iter()
            .filter(|(_, seat)| seat.is_disabled())
            .map(|(pos, _)| pos)
    }

    pub fn zones(&self) -> impl Iterator<Item = (SeatPos, usize)> + '_ {
        self.iter()
            .filter_map(|(pos, seat)| seat.zone().map(|batch| (pos, batch)))
    }

    /// Drops every mark outside a `rows` x `cols` grid.
    pub fn retain_within(&mut self, rows: u32, cols: u32) {
        self.marks
            .retain(|pos, _| (1..=rows).contains(&pos.row) && (1..=cols).contains(&pos.col));
    }

    /// Number of non-open seats.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

impl From<Vec<LayoutEntry>> for SeatLayout {
    fn from(entries: Vec<LayoutEntry>) -> Self {
        let mut layout = Self::new();
        for entry in entries {
            layout.set(SeatPos::new(entry.row, entry.col), entry.seat);
        }
        layout
    }
}

impl From<SeatLayout> for Vec<LayoutEntry> {
    fn from(layout: SeatLayout) -> Self {
        layout
            .iter()
            .map(|(pos, seat)| LayoutEntry {
                row: pos.row,
                col: pos.col,
                seat,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// A rectangular seating grid for one exam session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Display label; not used by allocation.
    #[serde(default)]
    pub name: String,

    pub rows: u32,
    pub cols: u32,

    #[serde(default)]
    pub layout: SeatLayout,

    #[serde(default)]
    pub fill_strategy: FillStrategy,

    /// Keep students of the same batch out of adjacent seats.
    #[serde(default)]
    pub prevent_adjacency: bool,

    /// Every `aisle_interval`-th column boundary is a physical gap. 0 means
    /// no aisles.
    #[serde(default)]
    pub aisle_interval: u32,

    /// With adjacency prevention and aisles on, forbid a repeated batch
    /// anywhere on the same bench instead of only the left neighbour.
    #[serde(default)]
    pub strict_flow: bool,
}

impl Room {
    /// Creates an unconstrained `rows` x `cols` room filled row by row.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            name: String::new(),
            rows,
            cols,
            layout: SeatLayout::new(),
            fill_strategy: FillStrategy::default(),
            prevent_adjacency: false,
            aisle_interval: 0,
            strict_flow: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_fill_strategy(mut self, strategy: FillStrategy) -> Self {
        self.fill_strategy = strategy;
        self
    }

    pub fn with_adjacency(mut self, prevent: bool, aisle_interval: u32, strict_flow: bool) -> Self {
        self.prevent_adjacency = prevent;
        self.aisle_interval = aisle_interval;
        self.strict_flow = strict_flow;
        self
    }

    /// Returns `true` if `pos` lies inside the grid.
    pub fn contains(&self, pos: SeatPos) -> bool {
        (1..=self.rows).contains(&pos.row) && (1..=self.cols).contains(&pos.col)
    }

    pub fn seat_at(&self, pos: SeatPos) -> Seat {
        self.layout.get(pos)
    }

    /// Writes `seat` at `pos`, returning the previous seat, or `None` when
    /// `pos` is outside the grid (nothing is written).
    pub fn set_seat(&mut self, pos: SeatPos, seat: Seat) -> Option<Seat> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.layout.set(pos, seat))
    }

    /// Blocks a seat. A zoned seat loses its zone.
    pub fn block_seat(&mut self, pos: SeatPos) -> Option<Seat> {
        self.set_seat(pos, Seat::Disabled)
    }

    /// Reserves a seat for `batch`. A blocked seat is unblocked.
    pub fn zone_seat(&mut self, pos: SeatPos, batch: usize) -> Option<Seat> {
        self.set_seat(pos, Seat::Zoned(batch))
    }

    /// Clears any block or zone on a seat.
    pub fn open_seat(&mut self, pos: SeatPos) -> Option<Seat> {
        self.set_seat(pos, Seat::Open)
    }

    /// Blocks an open or zoned seat, or reopens a blocked one.
    pub fn toggle_block(&mut self, pos: SeatPos) -> Option<Seat> {
        let next = if self.seat_at(pos).is_disabled() {
            Seat::Open
        } else {
            Seat::Disabled
        };
        self.set_seat(pos, next)
    }

    /// Changes the grid size, dropping layout marks that no longer fit.
    pub fn resize(&mut self, rows: u32, cols: u32) {
        self.rows = rows;
        self.cols = cols;
        self.layout.retain_within(rows, cols);
    }

    /// `rows * cols`, ignoring the layout.
    pub fn raw_capacity(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    /// Disabled seats that lie inside the grid.
    pub fn disabled_count(&self) -> u64 {
        self.layout.disabled().filter(|pos| self.contains(*pos)).count() as u64
    }

    /// Raw capacity minus disabled seats.
    pub fn effective_capacity(&self) -> u64 {
        self.raw_capacity().saturating_sub(self.disabled_count())
    }

    /// Batches referenced by any zone inside this room's grid. These
    /// batches may only sit in their own zoned seats here. A zone outside
    /// the grid is never visited, so it restricts nothing.
    pub fn restricted_batches(&self) -> BTreeSet<usize> {
        self.layout
            .zones()
            .filter(|(pos, _)| self.contains(*pos))
            .map(|(_, batch)| batch)
            .collect()
    }

    pub fn has_aisles(&self) -> bool {
        self.aisle_interval > 0
    }
}
