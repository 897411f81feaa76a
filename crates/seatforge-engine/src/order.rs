//! Seat traversal order for a room.

use seatforge_model::{FillStrategy, SeatPos};

/// Iterator over every cell of a `rows` x `cols` grid exactly once,
/// 1-indexed, in the order given by a [`FillStrategy`].
///
/// The order only decides which seats are offered first; zoning and
/// adjacency are applied per seat by the allocator.
#[derive(Debug, Clone)]
pub struct SeatOrder {
    rows: u32,
    cols: u32,
    strategy: FillStrategy,
    /// Zero-based position in the traversal.
    next: u64,
}

impl SeatOrder {
    pub fn new(rows: u32, cols: u32, strategy: FillStrategy) -> Self {
        Self {
            rows,
            cols,
            strategy,
            next: 0,
        }
    }

    fn total(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }
}

impl Iterator for SeatOrder {
    type Item = SeatPos;

    fn next(&mut self) -> Option<SeatPos> {
        if self.next >= self.total() {
            return None;
        }
        let step = self.next;
        self.next += 1;

        // Both divisors are non-zero here: total() > 0.
        let (row, col) = match self.strategy {
            FillStrategy::RowMajor => {
                let cols = u64::from(self.cols);
                (step / cols, step % cols)
            }
            FillStrategy::ColumnMajor => {
                let rows = u64::from(self.rows);
                (step % rows, step / rows)
            }
        };
        Some(SeatPos::new(row as u32 + 1, col as u32 + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total() - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SeatOrder {}
