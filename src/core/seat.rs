//! Seat identification and per-seat data storage.
//!
//! ## SeatId
//!
//! Type-safe seat identifier supporting 1-255 seats. Seat 0 is always the
//! learning agent; every other seat is scripted.
//!
//! ## SeatMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexable by `SeatId`.
//! Hands, trick state and scores are all `SeatMap`s.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Seat indices are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// The seat controlled by the learning agent.
    pub const AGENT: SeatId = SeatId(0);

    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Is this the agent's seat?
    #[must_use]
    pub const fn is_agent(self) -> bool {
        self.0 == Self::AGENT.0
    }

    /// Iterate over all seats for a table of `seat_count` seats.
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }

    /// Iterate over all seats in turn order, starting at `self`.
    pub fn turn_order(self, seat_count: usize) -> impl Iterator<Item = SeatId> {
        let start = self.index();
        (0..seat_count).map(move |offset| SeatId(((start + offset) % seat_count) as u8))
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_agent() {
            write!(f, "Seat 0 (agent)")
        } else {
            write!(f, "Seat {}", self.0)
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use wizards_env::core::{SeatId, SeatMap};
///
/// let mut scores: SeatMap<u32> = SeatMap::with_value(3, 0);
/// scores[SeatId::new(2)] += 1;
/// assert_eq!(scores.values().copied().sum::<u32>(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: Vec<T>,
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(seat_count: usize, factory: impl Fn(SeatId) -> T) -> Self {
        assert!(seat_count > 0, "Must have at least 1 seat");
        assert!(seat_count <= 255, "At most 255 seats supported");

        let data = (0..seat_count as u8).map(|i| factory(SeatId(i))).collect();

        Self { data }
    }

    /// Create a new SeatMap with all entries set to the same value.
    pub fn with_value(seat_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(seat_count, |_| value.clone())
    }

    /// Get the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, seat: SeatId) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: SeatId) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Overwrite every entry with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Iterate over (SeatId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (SeatId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Copy the entries out in seat order, rotated so `first` comes first.
    #[must_use]
    pub fn rotated_from(&self, first: SeatId) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = self.data.clone();
        out.rotate_left(first.index() % self.data.len());
        out
    }

    /// Borrow the entries as a slice in seat order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<SeatId> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: SeatId) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<SeatId> for SeatMap<T> {
    fn index_mut(&mut self, seat: SeatId) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
