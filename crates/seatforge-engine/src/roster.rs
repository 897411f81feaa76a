//! Roster building: a batch's registration range turned into a queue of
//! student identifiers.
//!
//! A roster is consumed front to back and never replenished. One roster
//! exists per batch for a whole allocation run and is shared by every
//! room, so a batch's students spill into the next room only once the
//! previous rooms are done with them.
//!
//! Identifiers are produced on demand. A roster holds only its numeric
//! cursor and the excluded numbers it has not yet passed, so building one
//! costs the same for ten students as for ten billion; only the students
//! actually seated are ever formatted.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use seatforge_model::Batch;

/// Ordered, exclusion-filtered queue of registration numbers for one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    prefix: String,
    width: usize,
    /// Numbers not yet handed out, ascending.
    numbers: RangeInclusive<u64>,
    /// Excluded numbers still ahead of the cursor.
    skipped: BTreeSet<u64>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            width: 0,
            numbers: RangeInclusive::new(1, 0),
            skipped: BTreeSet::new(),
        }
    }
}

impl Roster {
    /// Builds the roster for `batch`.
    ///
    /// Every number from `start_number` to `end_number` is formatted with
    /// the batch prefix and zero-padded to the digit count of
    /// `start_number`, in ascending numeric order. Excluded identifiers
    /// are skipped; exclusions that name no identifier of this batch are
    /// ignored. A malformed batch yields an empty roster.
    pub fn build(batch: &Batch) -> Self {
        let Some(range) = batch.range() else {
            return Self::default();
        };

        let skipped = batch
            .excluded_ids
            .iter()
            .filter_map(|id| batch.number_of(id, range.width))
            .filter(|number| range.numbers().contains(number))
            .collect();

        Self {
            prefix: batch.registration_prefix.clone(),
            width: range.width,
            numbers: range.numbers(),
            skipped,
        }
    }

    /// Takes the next student off the front of the queue.
    pub fn pop(&mut self) -> Option<String> {
        loop {
            let number = self.numbers.next()?;
            if !self.skipped.remove(&number) {
                return Some(self.format(number));
            }
        }
    }

    /// Looks at the next student without taking them.
    pub fn peek(&self) -> Option<String> {
        self.iter().next()
    }

    /// Students still waiting, exclusions already removed.
    pub fn len(&self) -> u64 {
        if self.numbers.is_empty() {
            return 0;
        }
        let span = (self.numbers.end() - self.numbers.start()).saturating_add(1);
        span.saturating_sub(self.skipped.len() as u64)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remaining students in queue order, formatted as they are reached.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        self.numbers
            .clone()
            .filter(move |number| !self.skipped.contains(number))
            .map(move |number| self.format(number))
    }

    /// The first `limit` students still waiting.
    pub fn remaining(&self, limit: usize) -> Vec<String> {
        self.iter().take(limit).collect()
    }

    fn format(&self, number: u64) -> String {
        format!("{}{:0width$}", self.prefix, number, width = self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(roster: &Roster) -> Vec<String> {
        roster.iter().collect()
    }

    #[test]
    fn test_build_pads_to_start_width() {
        let roster = Roster::build(&Batch::new("b", "20CS", "0001", "0004"));
        assert_eq!(ids(&roster), vec!["20CS0001", "20CS0002", "20CS0003", "20CS0004"]);
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_build_without_padding() {
        let roster = Roster::build(&Batch::new("b", "R", "8", "11"));
        assert_eq!(ids(&roster), vec!["R8", "R9", "R10", "R11"]);
    }

    #[test]
    fn test_build_drops_exclusions() {
        let batch = Batch::new("b", "20CS", "0001", "0004")
            .with_exclusions(["20CS0002", "20CS0099", "20CS2", "EE0003"]);
        let roster = Roster::build(&batch);
        assert_eq!(ids(&roster), vec!["20CS0001", "20CS0003", "20CS0004"]);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_build_malformed_batch_is_empty() {
        assert!(Roster::build(&Batch::new("b", "X", "5", "4")).is_empty());
        assert!(Roster::build(&Batch::new("b", "X", "", "4")).is_empty());
        assert!(Roster::build(&Batch::new("b", "X", "1", "four")).is_empty());
    }

    #[test]
    fn test_pop_consumes_front_to_back() {
        let mut roster = Roster::build(&Batch::new("b", "A", "01", "03"));
        assert_eq!(roster.peek().as_deref(), Some("A01"));
        assert_eq!(roster.pop().as_deref(), Some("A01"));
        assert_eq!(roster.pop().as_deref(), Some("A02"));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.remaining(10), vec!["A03".to_string()]);
        assert_eq!(roster.pop().as_deref(), Some("A03"));
        assert_eq!(roster.pop(), None);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_pop_skips_excluded_and_updates_len() {
        let batch = Batch::new("b", "A", "1", "5").with_exclusions(["A1", "A3", "A4"]);
        let mut roster = Roster::build(&batch);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.pop().as_deref(), Some("A2"));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.pop().as_deref(), Some("A5"));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_build_with_everything_excluded() {
        let batch = Batch::new("b", "A", "1", "2").with_exclusions(["A1", "A2"]);
        let mut roster = Roster::build(&batch);
        assert!(roster.is_empty());
        assert_eq!(roster.pop(), None);
    }

    #[test]
    fn test_huge_range_is_built_lazily() {
        let batch = Batch::new("b", "A", "1", "10000000000").with_exclusions(["A2"]);
        let mut roster = Roster::build(&batch);
        assert_eq!(roster.len(), 9_999_999_999);
        assert_eq!(roster.pop().as_deref(), Some("A1"));
        assert_eq!(roster.pop().as_deref(), Some("A3"));
        assert_eq!(roster.remaining(2), vec!["A4".to_string(), "A5".to_string()]);
        assert_eq!(roster.len(), 9_999_999_997);
    }

    #[test]
    fn test_full_u64_range_len_saturates() {
        let roster = Roster::build(&Batch::new("b", "A", "0", "18446744073709551615"));
        assert_eq!(roster.len(), u64::MAX);
        assert_eq!(roster.peek().as_deref(), Some("A0"));
    }
}
