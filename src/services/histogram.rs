//! Rating histogram backed by a Fenwick tree.
//!
//! DESIGN
//! ======
//! One bucket per possible rating in `[MIN_RATING, MAX_RATING]`. Prefix sums
//! give "how many users rate at or below r" in O(log R), which turns both
//! rank lookup and "which rating sits at position p" into tree walks instead
//! of scans over the ordered index.

use standings::{MAX_RATING, MIN_RATING};

const BUCKETS: usize = (MAX_RATING - MIN_RATING + 1) as usize;

pub struct RatingHistogram {
    /// 1-indexed Fenwick tree; `tree[0]` is unused.
    tree: Vec<u64>,
    total: u64,
}

impl RatingHistogram {
    #[must_use]
    pub fn new() -> Self {
        Self { tree: vec![0; BUCKETS + 1], total: 0 }
    }

    /// Number of users recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn insert(&mut self, rating: u32) {
        let mut i = bucket(rating);
        while i <= BUCKETS {
            self.tree[i] += 1;
            i += i & i.wrapping_neg();
        }
        self.total += 1;
    }

    pub fn remove(&mut self, rating: u32) {
        let mut i = bucket(rating);
        while i <= BUCKETS {
            self.tree[i] = self.tree[i].saturating_sub(1);
            i += i & i.wrapping_neg();
        }
        self.total = self.total.saturating_sub(1);
    }

    /// Users with a rating `<= rating`.
    #[must_use]
    pub fn at_or_below(&self, rating: u32) -> u64 {
        if rating < MIN_RATING {
            return 0;
        }
        if rating >= MAX_RATING {
            return self.total;
        }
        let mut i = bucket(rating);
        let mut sum = 0;
        while i > 0 {
            sum += self.tree[i];
            i &= i - 1;
        }
        sum
    }

    /// Users with a rating strictly greater than `rating`.
    #[must_use]
    pub fn above(&self, rating: u32) -> u64 {
        self.total - self.at_or_below(rating)
    }

    /// Rating held by the user at 0-based `position` in descending order,
    /// or `None` when `position` is past the end.
    #[must_use]
    pub fn rating_at_position(&self, position: u64) -> Option<u32> {
        if position >= self.total {
            return None;
        }
        // Descending position p is ascending position total-1-p; find the
        // smallest bucket whose prefix sum reaches that 1-based count.
        let mut remaining = self.total - position;
        let mut pos = 0_usize;
        let mut step = BUCKETS.next_power_of_two();
        while step > 0 {
            let next = pos + step;
            if next <= BUCKETS && self.tree[next] < remaining {
                pos = next;
                remaining -= self.tree[next];
            }
            step >>= 1;
        }
        Some(rating_of(pos + 1))
    }
}

impl Default for RatingHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Fenwick index for a stored rating. Out-of-range ratings map to the nearest end.
fn bucket(rating: u32) -> usize {
    (rating.clamp(MIN_RATING, MAX_RATING) - MIN_RATING) as usize + 1
}

fn rating_of(bucket: usize) -> u32 {
    // Buckets never exceed BUCKETS, which fits in u32.
    u32::try_from(bucket - 1).unwrap_or(0) + MIN_RATING
}

#[cfg(test)]
#[path = "histogram_test.rs"]
mod tests;
