use rand::RngCore;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::value::Row;

/// Appends rows sampled with replacement, then shuffles the whole set.
#[derive(Debug, Clone, Copy)]
pub struct Duplicator {
    duplicate_count: u64,
}

impl Duplicator {
    pub fn new(duplicate_count: u64) -> Self {
        Self { duplicate_count }
    }

    pub fn apply(&self, mut rows: Vec<Row>, rng: &mut dyn RngCore) -> Vec<Row> {
        if self.duplicate_count > 0 && !rows.is_empty() {
            // Sample from the original rows only, never from appended copies.
            let duplicates: Vec<Row> = (0..self.duplicate_count)
                .filter_map(|_| rows.choose(rng).cloned())
                .collect();
            rows.extend(duplicates);
        }
        rows.shuffle(rng);
        rows
    }
}
