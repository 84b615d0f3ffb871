//! Bounded top-k selection in one pass.

use std::cmp::Ordering;

/// Which end of the key range wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// Smaller keys first (distances).
    Ascending,
    /// Larger keys first (scores).
    Descending,
}

impl Rank {
    fn better(self, a: f64, b: f64) -> bool {
        match self {
            Rank::Ascending => a < b,
            Rank::Descending => a > b,
        }
    }

    fn order(self, a: f64, b: f64) -> Ordering {
        match self {
            Rank::Ascending => a.total_cmp(&b),
            Rank::Descending => b.total_cmp(&a),
        }
    }
}

/// Working set of at most `k` entries. A full set replaces its worst entry
/// only with a strictly better one.
#[derive(Debug)]
pub struct TopK<T> {
    k: usize,
    rank: Rank,
    entries: Vec<(f64, T)>,
    worst: usize,
}

impl<T> TopK<T> {
    pub fn new(k: usize, rank: Rank) -> Self {
        Self {
            k,
            rank,
            entries: Vec::with_capacity(k),
            worst: 0,
        }
    }

    pub fn offer(&mut self, key: f64, value: T) {
        if self.k == 0 {
            return;
        }
        if self.entries.len() < self.k {
            self.entries.push((key, value));
            if self.entries.len() == self.k {
                self.worst = self.find_worst();
            }
            return;
        }
        if self.rank.better(key, self.entries[self.worst].0) {
            self.entries[self.worst] = (key, value);
            self.worst = self.find_worst();
        }
    }

    fn find_worst(&self) -> usize {
        let mut worst = 0;
        for (i, (key, _)) in self.entries.iter().enumerate().skip(1) {
            if self.rank.better(self.entries[worst].0, *key) {
                worst = i;
            }
        }
        worst
    }

    /// Entries best-first. Equal keys keep their arrival order.
    pub fn into_sorted(mut self) -> Vec<(f64, T)> {
        let rank = self.rank;
        self.entries.sort_by(|a, b| rank.order(a.0, b.0));
        self.entries
    }
}
